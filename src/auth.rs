//! Static request authentication.
//!
//! Credentials are attached as-is to every request. Nothing here exchanges,
//! caches, or refreshes tokens; callers that need short-lived tokens must
//! obtain them elsewhere and rebuild the client.

use std::fmt;

use crate::errors::{Error, Result};

/// Username used when an API key is sent through basic auth.
pub const APIKEY_USERNAME: &str = "apikey";

/// How requests are authenticated.
#[derive(Clone, PartialEq, Eq, Default)]
pub enum Authenticator {
    /// No `Authorization` header (e.g. behind an authenticating proxy).
    #[default]
    NoAuth,
    Basic {
        username: String,
        password: String,
    },
    /// A pre-issued bearer token; a leading `Bearer ` is stripped.
    BearerToken(String),
}

impl Authenticator {
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Authenticator::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Basic auth with the `apikey` username.
    pub fn api_key(key: impl Into<String>) -> Self {
        Authenticator::basic(APIKEY_USERNAME, key)
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        let token = token.into();
        let trimmed = token.trim();
        let bare = trimmed
            .strip_prefix("Bearer ")
            .or_else(|| trimmed.strip_prefix("bearer "))
            .unwrap_or(trimmed);
        Authenticator::BearerToken(bare.to_string())
    }

    /// Name used by the `<NAME>_AUTH_TYPE` environment variable.
    pub fn kind(&self) -> &'static str {
        match self {
            Authenticator::NoAuth => "noauth",
            Authenticator::Basic { .. } => "basic",
            Authenticator::BearerToken(_) => "bearertoken",
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        match self {
            Authenticator::NoAuth => Ok(()),
            Authenticator::Basic { username, password } => {
                check_credential("username", username)?;
                check_credential("password", password)
            }
            Authenticator::BearerToken(token) => check_credential("bearer token", token),
        }
    }
}

// Keeps secrets out of debug output.
impl fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Authenticator::NoAuth => f.write_str("NoAuth"),
            Authenticator::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Authenticator::BearerToken(_) => f.write_str("BearerToken(<redacted>)"),
        }
    }
}

/// Rejects blank credentials and values still wrapped in braces or quotes.
fn check_credential(name: &str, value: &str) -> Result<()> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::Config(format!("{name} is required")));
    }
    let wrapped = |open: char, close: char| value.starts_with(open) || value.ends_with(close);
    if wrapped('{', '}') || wrapped('"', '"') {
        return Err(Error::Config(format!(
            "{name} must not start or end with curly brackets or quotes"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_strips_prefix() {
        assert_eq!(
            Authenticator::bearer("Bearer abc.def.ghi"),
            Authenticator::BearerToken("abc.def.ghi".into())
        );
    }

    #[test]
    fn api_key_uses_apikey_username() {
        match Authenticator::api_key("secret") {
            Authenticator::Basic { username, password } => {
                assert_eq!(username, "apikey");
                assert_eq!(password, "secret");
            }
            other => panic!("unexpected authenticator {other:?}"),
        }
    }

    #[test]
    fn rejects_blank_and_wrapped_credentials() {
        assert!(Authenticator::basic("", "pw").validate().is_err());
        assert!(Authenticator::basic("user", "{pw}").validate().is_err());
        assert!(Authenticator::bearer("\"token\"").validate().is_err());
        assert!(Authenticator::api_key("ok-key").validate().is_ok());
        assert!(Authenticator::NoAuth.validate().is_ok());
    }

    #[test]
    fn debug_redacts_secrets() {
        let rendered = format!("{:?}", Authenticator::basic("user", "hunter2"));
        assert!(!rendered.contains("hunter2"));
        assert!(format!("{:?}", Authenticator::bearer("tok")).contains("redacted"));
    }
}
