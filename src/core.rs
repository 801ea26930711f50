//! Shared runtime-agnostic logic for async and blocking clients.
//!
//! This module contains data structures and pure functions that are used by both
//! the async client (`client.rs`) and the blocking client (`blocking.rs`).
//!
//! ## Contents
//!
//! - **Requests**: [`ApiRequest`] and the [`Operation`] trait every options struct implements
//! - **Validation**: [`require`] for mandatory path/query parameters
//! - **Endpoint**: [`Endpoint`] turns an [`ApiRequest`] into a URL and header map
//! - **Decoding**: [`decode_body`] maps response bytes onto an operation's output

use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT},
    Method, Url,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    auth::Authenticator,
    errors::{Error, Result, ValidationError},
    http::HeaderList,
    DEFAULT_CLIENT_HEADER, DEFAULT_REQUEST_TIMEOUT, DEFAULT_SERVICE_URL, DEFAULT_VERSION,
};

/// One REST call, described independently of the HTTP client that sends it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) segments: Vec<String>,
    pub(crate) query: Vec<(&'static str, String)>,
    pub(crate) body: Option<serde_json::Value>,
    pub(crate) headers: HeaderList,
}

impl ApiRequest {
    pub(crate) fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
            body: None,
            headers: HeaderList::default(),
        }
    }

    pub(crate) fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    pub(crate) fn query_opt<V: ToString>(self, key: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    pub(crate) fn json<B: Serialize>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub(crate) fn headers(mut self, headers: &HeaderList) -> Self {
        self.headers = headers.clone();
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Unencoded path, e.g. `/v1/workspaces/abc/intents`.
    pub fn path(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            out.push_str(segment);
        }
        out
    }

    pub fn query_pairs(&self) -> &[(&'static str, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }
}

/// A single REST operation: an options struct that knows how to describe its request.
///
/// Every `*Options` type in this crate implements `Operation`, so any of them can be
/// passed to `Client::execute` as well as to the matching resource method.
pub trait Operation {
    /// Decoded success payload.
    type Output: DeserializeOwned;

    /// Operation name used in logs, e.g. `list_workspaces`.
    const NAME: &'static str;

    /// `false` for operations whose success body carries nothing of interest.
    const EXPECTS_BODY: bool = true;

    /// Validate the options and describe the HTTP request.
    fn build_request(&self) -> Result<ApiRequest>;
}

/// Fails with a field-scoped validation error when a required parameter is blank.
pub(crate) fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation(
            ValidationError::new(format!("{field} is required")).with_field(field),
        ));
    }
    Ok(())
}

pub(crate) fn decode_body<O: Operation>(bytes: &[u8]) -> Result<O::Output> {
    let payload: &[u8] = if O::EXPECTS_BODY { bytes } else { b"null" };
    serde_json::from_slice(payload).map_err(Error::Serialization)
}

/// Resolved connection settings shared by the async and blocking clients.
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    pub(crate) service_url: Url,
    pub(crate) version: String,
    pub(crate) authenticator: Authenticator,
    pub(crate) user_agent: String,
    pub(crate) default_headers: HeaderList,
    pub(crate) request_timeout: Duration,
}

impl Endpoint {
    pub(crate) fn new(
        service_url: Option<String>,
        version: Option<String>,
        authenticator: Option<Authenticator>,
        user_agent: Option<String>,
        default_headers: Option<HeaderList>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let base = service_url
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());
        let service_url = Url::parse(base.trim().trim_end_matches('/'))
            .map_err(|err| Error::Config(format!("invalid service url: {err}")))?;
        if service_url.cannot_be_a_base() || !matches!(service_url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "invalid service url: {service_url} is not an http(s) base url"
            )));
        }

        let version = version
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_VERSION.to_string());

        let authenticator = authenticator.unwrap_or_default();
        authenticator.validate()?;

        let user_agent = user_agent
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CLIENT_HEADER.to_string());
        HeaderValue::from_str(&user_agent)
            .map_err(|err| Error::Config(format!("invalid user agent: {err}")))?;

        let default_headers = default_headers.unwrap_or_default();
        if let Some(entry) = default_headers.iter().find(|entry| !entry.is_valid()) {
            return Err(Error::Config(format!(
                "default header key and value must be non-empty (got key={:?}, value={:?})",
                entry.key, entry.value
            )));
        }

        Ok(Self {
            service_url,
            version,
            authenticator,
            user_agent,
            default_headers,
            request_timeout: timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
        })
    }

    pub(crate) fn url_for(&self, req: &ApiRequest) -> Result<Url> {
        let mut url = self.service_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| Error::Config("service url cannot be a base".into()))?;
            segments.pop_if_empty();
            for segment in &req.segments {
                segments.push(segment);
            }
        }
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("version", &self.version);
            for (key, value) in &req.query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Builds request headers; per-call headers override defaults of the same name.
    pub(crate) fn headers_for(&self, req: &ApiRequest) -> Result<HeaderMap> {
        let mut map = HeaderMap::new();
        let agent = HeaderValue::from_str(&self.user_agent)
            .map_err(|err| Error::Config(format!("invalid user agent: {err}")))?;
        map.insert(USER_AGENT, agent);
        map.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if req.body.is_some() {
            map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        for entry in self.default_headers.iter().chain(req.headers.iter()) {
            if !entry.is_valid() {
                return Err(Error::Config(format!(
                    "header key and value must be non-empty (got key={:?}, value={:?})",
                    entry.key, entry.value
                )));
            }
            let name = HeaderName::from_bytes(entry.key.trim().as_bytes())
                .map_err(|err| Error::Config(format!("invalid header name: {err}")))?;
            let val = HeaderValue::from_str(entry.value.trim())
                .map_err(|err| Error::Config(format!("invalid header value: {err}")))?;
            map.insert(name, val);
        }
        Ok(map)
    }
}

/// Adds the per-call `with_header` builder to options structs with a `headers` field.
macro_rules! impl_option_headers {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $ty {
                /// Add a header sent with this call only.
                pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
                    self.headers
                        .push($crate::http::HeaderEntry::new(key.into(), value.into()));
                    self
                }
            }
        )+
    };
}

pub(crate) use impl_option_headers;
