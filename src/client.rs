#[cfg(feature = "tracing")]
use std::time::Instant;
use std::{sync::Arc, time::Duration};

use crate::{
    auth::Authenticator,
    core::{decode_body, ApiRequest, Endpoint, Operation},
    counterexamples::CounterexamplesClient,
    dialog_nodes::DialogNodesClient,
    entities::EntitiesClient,
    env::{EnvSettings, DEFAULT_SERVICE_NAME},
    errors::{Result, TransportError, TransportErrorKind},
    examples::ExamplesClient,
    http::{parse_api_error_parts, DetailedResponse, HeaderList},
    intents::IntentsClient,
    logs::LogsClient,
    message::{MessageOptions, MessageResponse},
    synonyms::SynonymsClient,
    user_data::UserDataClient,
    values::ValuesClient,
    workspaces::WorkspacesClient,
    DEFAULT_CONNECT_TIMEOUT,
};

#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Service instance URL (defaults to the public us-south endpoint).
    pub service_url: Option<String>,
    /// API version date sent as `version` on every call (defaults to `2021-11-27`).
    pub version: Option<String>,
    /// Request authentication (defaults to no `Authorization` header).
    pub authenticator: Option<Authenticator>,
    /// Override the `User-Agent` header.
    pub user_agent: Option<String>,
    /// Pre-built HTTP client; `connect_timeout` and `disable_ssl_verification` are ignored when set.
    pub http_client: Option<reqwest::Client>,
    /// Override the connect timeout (defaults to 5s).
    pub connect_timeout: Option<Duration>,
    /// Override the request timeout (defaults to 60s).
    pub timeout: Option<Duration>,
    /// Default extra headers applied to all requests.
    pub default_headers: Option<HeaderList>,
    /// Accept any TLS certificate. Only for test instances with self-signed certificates.
    pub disable_ssl_verification: bool,
}

impl Config {
    /// Load settings from `ASSISTANT_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_env_prefixed(DEFAULT_SERVICE_NAME)
    }

    /// Load settings from `<SERVICE_NAME>_*` environment variables.
    pub fn from_env_prefixed(service_name: &str) -> Result<Self> {
        let env = EnvSettings::from_process(service_name)?;
        Ok(Self {
            service_url: env.service_url,
            version: env.version,
            authenticator: env.authenticator,
            disable_ssl_verification: env.disable_ssl_verification,
            ..Default::default()
        })
    }
}

/// Builder over [`Config`].
#[derive(Clone, Debug, Default)]
pub struct ClientBuilder {
    cfg: Config,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.cfg.service_url = Some(url.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.cfg.version = Some(version.into());
        self
    }

    pub fn authenticator(mut self, authenticator: Authenticator) -> Self {
        self.cfg.authenticator = Some(authenticator);
        self
    }

    /// Shorthand for basic auth with the `apikey` username.
    pub fn api_key(self, key: impl Into<String>) -> Self {
        self.authenticator(Authenticator::api_key(key))
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.cfg.user_agent = Some(user_agent.into());
        self
    }

    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.cfg.http_client = Some(client);
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.connect_timeout = Some(timeout);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.cfg.timeout = Some(timeout);
        self
    }

    pub fn default_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.cfg
            .default_headers
            .get_or_insert_with(HeaderList::default)
            .push(crate::http::HeaderEntry::new(key.into(), value.into()));
        self
    }

    pub fn disable_ssl_verification(mut self, disable: bool) -> Self {
        self.cfg.disable_ssl_verification = disable;
        self
    }

    pub fn build(self) -> Result<Client> {
        Client::new(self.cfg)
    }
}

/// Async client for the assistant v1 API.
///
/// Cheap to clone; resource clients returned by the accessors share one connection pool.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    endpoint: Endpoint,
    http: reqwest::Client,
}

impl Client {
    pub fn new(cfg: Config) -> Result<Self> {
        let endpoint = Endpoint::new(
            cfg.service_url,
            cfg.version,
            cfg.authenticator,
            cfg.user_agent,
            cfg.default_headers,
            cfg.timeout,
        )?;

        let http = match cfg.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .connect_timeout(cfg.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT))
                .danger_accept_invalid_certs(cfg.disable_ssl_verification)
                .build()
                .map_err(|err| TransportError {
                    kind: TransportErrorKind::Connect,
                    message: "failed to build http client".to_string(),
                    source: Some(err),
                })?,
        };

        Ok(Self {
            inner: Arc::new(ClientInner { endpoint, http }),
        })
    }

    /// Build a client from `ASSISTANT_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env()?)
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn service_url(&self) -> &str {
        self.inner.endpoint.service_url.as_str()
    }

    pub fn version(&self) -> &str {
        &self.inner.endpoint.version
    }

    /// Send user input to a workspace and receive the dialog response.
    pub async fn message(
        &self,
        opts: &MessageOptions,
    ) -> Result<DetailedResponse<MessageResponse>> {
        self.inner.execute(opts).await
    }

    /// Run any operation; equivalent to the matching resource method.
    pub async fn execute<O: Operation>(&self, op: &O) -> Result<DetailedResponse<O::Output>> {
        self.inner.execute(op).await
    }

    pub fn workspaces(&self) -> WorkspacesClient {
        WorkspacesClient {
            inner: self.inner.clone(),
        }
    }

    pub fn intents(&self) -> IntentsClient {
        IntentsClient {
            inner: self.inner.clone(),
        }
    }

    pub fn examples(&self) -> ExamplesClient {
        ExamplesClient {
            inner: self.inner.clone(),
        }
    }

    pub fn counterexamples(&self) -> CounterexamplesClient {
        CounterexamplesClient {
            inner: self.inner.clone(),
        }
    }

    pub fn entities(&self) -> EntitiesClient {
        EntitiesClient {
            inner: self.inner.clone(),
        }
    }

    pub fn values(&self) -> ValuesClient {
        ValuesClient {
            inner: self.inner.clone(),
        }
    }

    pub fn synonyms(&self) -> SynonymsClient {
        SynonymsClient {
            inner: self.inner.clone(),
        }
    }

    pub fn dialog_nodes(&self) -> DialogNodesClient {
        DialogNodesClient {
            inner: self.inner.clone(),
        }
    }

    pub fn logs(&self) -> LogsClient {
        LogsClient {
            inner: self.inner.clone(),
        }
    }

    pub fn user_data(&self) -> UserDataClient {
        UserDataClient {
            inner: self.inner.clone(),
        }
    }
}

impl ClientInner {
    pub(crate) async fn execute<O: Operation>(
        &self,
        op: &O,
    ) -> Result<DetailedResponse<O::Output>> {
        let req = op.build_request()?;
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!(
            "assistant.http",
            operation = O::NAME,
            method = %req.method,
            path = %req.path(),
        );

        let fut = self.send::<O>(req);
        #[cfg(feature = "tracing")]
        let fut = tracing::Instrument::instrument(fut, span);
        fut.await
    }

    async fn send<O: Operation>(&self, req: ApiRequest) -> Result<DetailedResponse<O::Output>> {
        let url = self.endpoint.url_for(&req)?;
        let headers = self.endpoint.headers_for(&req)?;

        let mut builder = self
            .http
            .request(req.method.clone(), url)
            .headers(headers)
            .timeout(self.endpoint.request_timeout);
        builder = self.apply_auth(builder);
        if let Some(body) = &req.body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        #[cfg(feature = "tracing")]
        let start = Instant::now();
        let resp = match builder.send().await {
            Ok(resp) => resp,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %err, "transport error");
                return Err(TransportError::from(err).into());
            }
        };

        let status = resp.status();
        let headers = resp.headers().clone();
        if !status.is_success() {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                status = %status,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "request failed"
            );
            let body = match resp.text().await {
                Ok(body) => body,
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(status = %status, error = %err, "failed to read error body");
                    #[cfg(not(feature = "tracing"))]
                    let _ = err;
                    String::new()
                }
            };
            return Err(parse_api_error_parts(status, &headers, body));
        }

        let bytes = resp.bytes().await.map_err(TransportError::from)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            status = %status,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "request completed"
        );

        Ok(DetailedResponse {
            status_code: status.as_u16(),
            headers,
            result: decode_body::<O>(&bytes)?,
        })
    }

    fn apply_auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.endpoint.authenticator {
            Authenticator::NoAuth => builder,
            Authenticator::Basic { username, password } => {
                builder.basic_auth(username.trim(), Some(password.trim()))
            }
            Authenticator::BearerToken(token) => builder.bearer_auth(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_rejects_bad_credentials_before_any_call() {
        let err = Client::new(Config {
            authenticator: Some(Authenticator::api_key("{my-key}")),
            ..Default::default()
        })
        .err()
        .expect("wrapped key");
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn builder_applies_settings() {
        let client = ClientBuilder::new()
            .service_url("https://assistant.example.com/instances/1/")
            .version("2020-04-01")
            .api_key("key")
            .default_header("X-Watson-Learning-Opt-Out", "true")
            .build()
            .expect("client");
        assert_eq!(
            client.service_url(),
            "https://assistant.example.com/instances/1"
        );
        assert_eq!(client.version(), "2020-04-01");
    }

    #[test]
    fn clients_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
        assert_send_sync::<WorkspacesClient>();
    }
}
