//! Service settings read from environment variables.
//!
//! Variables are prefixed with an upper-cased service name (`ASSISTANT` by default):
//! `<NAME>_URL`, `<NAME>_VERSION`, `<NAME>_AUTH_TYPE`, `<NAME>_APIKEY`,
//! `<NAME>_USERNAME`, `<NAME>_PASSWORD`, `<NAME>_BEARER_TOKEN` and `<NAME>_DISABLE_SSL`.

use crate::{
    auth::Authenticator,
    errors::{Error, Result},
};

/// Prefix used by `Config::from_env`.
pub const DEFAULT_SERVICE_NAME: &str = "ASSISTANT";

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct EnvSettings {
    pub(crate) service_url: Option<String>,
    pub(crate) version: Option<String>,
    pub(crate) authenticator: Option<Authenticator>,
    pub(crate) disable_ssl_verification: bool,
}

impl EnvSettings {
    pub(crate) fn from_process(service_name: &str) -> Result<Self> {
        Self::load(service_name, |key| std::env::var(key).ok())
    }

    pub(crate) fn load<F>(service_name: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefix = service_name.trim().to_ascii_uppercase().replace('-', "_");
        if prefix.is_empty() {
            return Err(Error::Config("service name is required".into()));
        }
        let get = |suffix: &str| {
            lookup(&format!("{prefix}_{suffix}"))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let disable_ssl_verification = match get("DISABLE_SSL") {
            Some(raw) => raw.to_ascii_lowercase().parse::<bool>().map_err(|_| {
                Error::Config(format!("{prefix}_DISABLE_SSL must be true or false, got {raw:?}"))
            })?,
            None => false,
        };

        let apikey = get("APIKEY");
        let username = get("USERNAME");
        let password = get("PASSWORD");
        let bearer = get("BEARER_TOKEN");

        let authenticator = match get("AUTH_TYPE").map(|t| t.to_ascii_lowercase()) {
            Some(kind) => Some(match kind.as_str() {
                "noauth" => Authenticator::NoAuth,
                "basic" => match (username, password, apikey) {
                    (Some(user), Some(pass), _) => Authenticator::basic(user, pass),
                    (None, None, Some(key)) => Authenticator::api_key(key),
                    _ => {
                        return Err(Error::Config(format!(
                            "{prefix}_AUTH_TYPE=basic needs {prefix}_USERNAME and {prefix}_PASSWORD"
                        )))
                    }
                },
                "bearertoken" => match bearer {
                    Some(token) => Authenticator::bearer(token),
                    None => {
                        return Err(Error::Config(format!(
                            "{prefix}_AUTH_TYPE=bearertoken needs {prefix}_BEARER_TOKEN"
                        )))
                    }
                },
                other => {
                    return Err(Error::Config(format!(
                        "unsupported {prefix}_AUTH_TYPE {other:?}; expected basic, bearertoken or noauth"
                    )))
                }
            }),
            None => match (apikey, username, password, bearer) {
                (Some(key), _, _, _) => Some(Authenticator::api_key(key)),
                (None, Some(user), Some(pass), _) => Some(Authenticator::basic(user, pass)),
                (None, _, _, Some(token)) => Some(Authenticator::bearer(token)),
                _ => None,
            },
        };

        Ok(Self {
            service_url: get("URL"),
            version: get("VERSION"),
            authenticator,
            disable_ssl_verification,
        })
    }
}
