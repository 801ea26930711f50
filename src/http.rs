use reqwest::{header::HeaderMap, StatusCode};
use serde::Deserialize;

use crate::{
    errors::{APIError, Error, FieldError},
    REQUEST_ID_HEADER, TRANSACTION_ID_HEADER,
};

/// Structured header list with validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderList(Vec<HeaderEntry>);

impl HeaderList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Add a header entry. Blank keys or values are rejected when the request is built.
    pub fn push(&mut self, entry: HeaderEntry) {
        self.0.push(entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeaderEntry> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for HeaderList {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut list = HeaderList::new();
        for (key, value) in iter {
            list.push(HeaderEntry::new(key.into(), value.into()));
        }
        list
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderEntry {
    pub key: String,
    pub value: String,
}

impl HeaderEntry {
    pub fn new(key: String, value: String) -> Self {
        Self { key, value }
    }

    pub fn is_valid(&self) -> bool {
        !(self.key.trim().is_empty() || self.value.trim().is_empty())
    }
}

/// A decoded result together with the HTTP status and headers it arrived with.
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    pub status_code: u16,
    pub headers: HeaderMap,
    pub result: T,
}

impl<T> DetailedResponse<T> {
    /// Transaction id assigned by the service, useful when reporting problems.
    pub fn transaction_id(&self) -> Option<String> {
        transaction_id_from_headers(&self.headers)
    }

    pub fn into_result(self) -> T {
        self.result
    }
}

pub(crate) fn transaction_id_from_headers(headers: &HeaderMap) -> Option<String> {
    for name in [TRANSACTION_ID_HEADER, REQUEST_ID_HEADER] {
        if let Some(value) = headers.get(name) {
            if let Ok(s) = value.to_str() {
                if !s.is_empty() {
                    return Some(s.to_string());
                }
            }
        }
    }
    None
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<serde_json::Value>,
    #[serde(default, rename = "errorMessage")]
    error_message: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<serde_json::Value>,
    #[serde(default)]
    errors: Option<serde_json::Value>,
    #[serde(default)]
    trace: Option<String>,
}

fn value_as_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub(crate) fn parse_api_error_parts(status: StatusCode, headers: &HeaderMap, body: String) -> Error {
    let transaction_id = transaction_id_from_headers(headers);
    let status_code = status.as_u16();
    let status_text = status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string();

    if body.trim().is_empty() {
        let mut err = APIError::new(status_code, status_text);
        err.transaction_id = transaction_id;
        return err.into();
    }

    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(&body) {
        let errors = envelope
            .errors
            .and_then(|v| serde_json::from_value::<Vec<FieldError>>(v).ok())
            .unwrap_or_default();

        // The `error` member is a string on most endpoints but an object on a few.
        let nested = envelope.error.as_ref().and_then(|v| v.as_object());
        let message = envelope
            .error
            .as_ref()
            .and_then(value_as_string)
            .or_else(|| {
                nested
                    .and_then(|obj| obj.get("message"))
                    .and_then(value_as_string)
            })
            .or(envelope.error_message)
            .or(envelope.message)
            .or_else(|| errors.first().map(|e| e.message.clone()));

        if let Some(message) = message {
            let code = envelope
                .code
                .as_ref()
                .and_then(value_as_string)
                .or_else(|| nested.and_then(|obj| obj.get("code")).and_then(value_as_string))
                .or_else(|| errors.first().and_then(|e| e.code.clone()));
            return APIError {
                status: status_code,
                message,
                code,
                transaction_id,
                errors,
                trace: envelope.trace,
                raw_body: Some(body),
            }
            .into();
        }
    }

    APIError {
        status: status_code,
        message: body.clone(),
        code: None,
        transaction_id,
        errors: Vec::new(),
        trace: None,
        raw_body: Some(body),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use reqwest::header::HeaderValue;

    use super::*;

    fn api_error(status: u16, headers: &HeaderMap, body: &str) -> APIError {
        match parse_api_error_parts(
            StatusCode::from_u16(status).unwrap(),
            headers,
            body.to_string(),
        ) {
            Error::Api(err) => err,
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn parses_string_error_with_numeric_code() {
        let mut headers = HeaderMap::new();
        headers.insert(TRANSACTION_ID_HEADER, HeaderValue::from_static("tx-1"));
        let err = api_error(
            404,
            &headers,
            r#"{"error":"Resource not found","code":404}"#,
        );
        assert_eq!(err.status, 404);
        assert_eq!(err.message, "Resource not found");
        assert_eq!(err.code.as_deref(), Some("404"));
        assert_eq!(err.transaction_id.as_deref(), Some("tx-1"));
        assert!(err.raw_body.is_some());
    }

    #[test]
    fn parses_errors_array_and_trace() {
        let err = api_error(
            400,
            &HeaderMap::new(),
            r#"{"errors":[{"code":"missing_field","message":"name is required","path":".name"}],"trace":"abc"}"#,
        );
        assert_eq!(err.message, "name is required");
        assert_eq!(err.code.as_deref(), Some("missing_field"));
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].path.as_deref(), Some(".name"));
        assert_eq!(err.trace.as_deref(), Some("abc"));
    }

    #[test]
    fn parses_error_message_and_nested_error_shapes() {
        let err = api_error(500, &HeaderMap::new(), r#"{"errorMessage":"boom"}"#);
        assert_eq!(err.message, "boom");

        let err = api_error(
            403,
            &HeaderMap::new(),
            r#"{"error":{"code":"forbidden","message":"no access"}}"#,
        );
        assert_eq!(err.message, "no access");
        assert_eq!(err.code.as_deref(), Some("forbidden"));
    }

    #[test]
    fn falls_back_to_raw_body_and_status_text() {
        let err = api_error(502, &HeaderMap::new(), "upstream unavailable");
        assert_eq!(err.message, "upstream unavailable");

        let err = api_error(503, &HeaderMap::new(), "");
        assert_eq!(err.message, "Service Unavailable");
        assert!(err.raw_body.is_none());
    }

    #[test]
    fn request_id_header_is_used_without_transaction_id() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("req-9"));
        assert_eq!(transaction_id_from_headers(&headers).as_deref(), Some("req-9"));
    }

    #[test]
    fn header_list_collects_pairs() {
        let list: HeaderList = [("X-Watson-Learning-Opt-Out", "true")].into_iter().collect();
        assert_eq!(list.iter().count(), 1);
    }
}
