use std::{sync::Arc, time::Duration};

use reqwest::blocking::{Client as HttpClient, RequestBuilder};

use crate::{
    auth::Authenticator,
    core::{decode_body, Endpoint, Operation},
    counterexamples::*,
    dialog_nodes::*,
    entities::*,
    env::{EnvSettings, DEFAULT_SERVICE_NAME},
    errors::{Result, TransportError, TransportErrorKind},
    examples::*,
    http::{parse_api_error_parts, DetailedResponse, HeaderList},
    intents::*,
    logs::*,
    message::{MessageOptions, MessageResponse},
    synonyms::*,
    user_data::*,
    values::*,
    workspaces::*,
    DEFAULT_CONNECT_TIMEOUT,
};

#[derive(Clone, Debug, Default)]
pub struct BlockingConfig {
    pub service_url: Option<String>,
    pub version: Option<String>,
    pub authenticator: Option<Authenticator>,
    pub user_agent: Option<String>,
    pub http_client: Option<HttpClient>,
    /// Override the connect timeout (defaults to 5s).
    pub connect_timeout: Option<Duration>,
    /// Override the request timeout (defaults to 60s).
    pub timeout: Option<Duration>,
    pub default_headers: Option<HeaderList>,
    pub disable_ssl_verification: bool,
}

impl BlockingConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_env_prefixed(DEFAULT_SERVICE_NAME)
    }

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

/// Blocking client for the assistant v1 API. Must not be used inside an async runtime.
#[derive(Clone)]
pub struct BlockingClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    endpoint: Endpoint,
    http: HttpClient,
}

impl BlockingClient {
    pub fn new(cfg: BlockingConfig) -> Result<Self> {
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
            None => HttpClient::builder()
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

    pub fn from_env() -> Result<Self> {
        Self::new(BlockingConfig::from_env()?)
    }

    pub fn message(&self, opts: &MessageOptions) -> Result<DetailedResponse<MessageResponse>> {
        self.inner.execute(opts)
    }

    pub fn execute<O: Operation>(&self, op: &O) -> Result<DetailedResponse<O::Output>> {
        self.inner.execute(op)
    }

    pub fn workspaces(&self) -> BlockingWorkspacesClient {
        BlockingWorkspacesClient {
            inner: self.inner.clone(),
        }
    }

    pub fn intents(&self) -> BlockingIntentsClient {
        BlockingIntentsClient {
            inner: self.inner.clone(),
        }
    }

    pub fn examples(&self) -> BlockingExamplesClient {
        BlockingExamplesClient {
            inner: self.inner.clone(),
        }
    }

    pub fn counterexamples(&self) -> BlockingCounterexamplesClient {
        BlockingCounterexamplesClient {
            inner: self.inner.clone(),
        }
    }

    pub fn entities(&self) -> BlockingEntitiesClient {
        BlockingEntitiesClient {
            inner: self.inner.clone(),
        }
    }

    pub fn values(&self) -> BlockingValuesClient {
        BlockingValuesClient {
            inner: self.inner.clone(),
        }
    }

    pub fn synonyms(&self) -> BlockingSynonymsClient {
        BlockingSynonymsClient {
            inner: self.inner.clone(),
        }
    }

    pub fn dialog_nodes(&self) -> BlockingDialogNodesClient {
        BlockingDialogNodesClient {
            inner: self.inner.clone(),
        }
    }

    pub fn logs(&self) -> BlockingLogsClient {
        BlockingLogsClient {
            inner: self.inner.clone(),
        }
    }

    pub fn user_data(&self) -> BlockingUserDataClient {
        BlockingUserDataClient {
            inner: self.inner.clone(),
        }
    }
}

/// Declares a blocking resource client whose methods each run one operation.
macro_rules! blocking_resource {
    ($(#[$meta:meta])* $name:ident { $($method:ident($opts:ty) -> $out:ty;)+ }) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name {
            inner: Arc<ClientInner>,
        }

        impl $name {
            $(
                pub fn $method(&self, opts: &$opts) -> Result<DetailedResponse<$out>> {
                    self.inner.execute(opts)
                }
            )+
        }
    };
}

blocking_resource!(BlockingWorkspacesClient {
    list(ListWorkspacesOptions) -> WorkspaceCollection;
    create(CreateWorkspaceOptions) -> Workspace;
    get(GetWorkspaceOptions) -> Workspace;
    update(UpdateWorkspaceOptions) -> Workspace;
    delete(DeleteWorkspaceOptions) -> ();
});

blocking_resource!(BlockingIntentsClient {
    list(ListIntentsOptions) -> IntentCollection;
    create(CreateIntentOptions) -> Intent;
    get(GetIntentOptions) -> Intent;
    update(UpdateIntentOptions) -> Intent;
    delete(DeleteIntentOptions) -> ();
});

blocking_resource!(BlockingExamplesClient {
    list(ListExamplesOptions) -> ExampleCollection;
    create(CreateExampleOptions) -> Example;
    get(GetExampleOptions) -> Example;
    update(UpdateExampleOptions) -> Example;
    delete(DeleteExampleOptions) -> ();
});

blocking_resource!(BlockingCounterexamplesClient {
    list(ListCounterexamplesOptions) -> CounterexampleCollection;
    create(CreateCounterexampleOptions) -> Counterexample;
    get(GetCounterexampleOptions) -> Counterexample;
    update(UpdateCounterexampleOptions) -> Counterexample;
    delete(DeleteCounterexampleOptions) -> ();
});

blocking_resource!(BlockingEntitiesClient {
    list(ListEntitiesOptions) -> EntityCollection;
    create(CreateEntityOptions) -> Entity;
    get(GetEntityOptions) -> Entity;
    update(UpdateEntityOptions) -> Entity;
    delete(DeleteEntityOptions) -> ();
    mentions(ListMentionsOptions) -> EntityMentionCollection;
});

blocking_resource!(BlockingValuesClient {
    list(ListValuesOptions) -> ValueCollection;
    create(CreateValueOptions) -> EntityValue;
    get(GetValueOptions) -> EntityValue;
    update(UpdateValueOptions) -> EntityValue;
    delete(DeleteValueOptions) -> ();
});

blocking_resource!(BlockingSynonymsClient {
    list(ListSynonymsOptions) -> SynonymCollection;
    create(CreateSynonymOptions) -> Synonym;
    get(GetSynonymOptions) -> Synonym;
    update(UpdateSynonymOptions) -> Synonym;
    delete(DeleteSynonymOptions) -> ();
});

blocking_resource!(BlockingDialogNodesClient {
    list(ListDialogNodesOptions) -> DialogNodeCollection;
    create(CreateDialogNodeOptions) -> DialogNode;
    get(GetDialogNodeOptions) -> DialogNode;
    update(UpdateDialogNodeOptions) -> DialogNode;
    delete(DeleteDialogNodeOptions) -> ();
});

blocking_resource!(BlockingLogsClient {
    list(ListLogsOptions) -> LogCollection;
    list_all(ListAllLogsOptions) -> LogCollection;
});

blocking_resource!(BlockingUserDataClient {
    delete(DeleteUserDataOptions) -> ();
});

impl ClientInner {
    fn execute<O: Operation>(&self, op: &O) -> Result<DetailedResponse<O::Output>> {
        let req = op.build_request()?;
        let url = self.endpoint.url_for(&req)?;
        let headers = self.endpoint.headers_for(&req)?;

        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!(
            "assistant.http",
            operation = O::NAME,
            method = %req.method,
            path = %req.path(),
        );
        #[cfg(feature = "tracing")]
        let _guard = span.enter();

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
        let start = std::time::Instant::now();
        let resp = match builder.send() {
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
            let body = match resp.text() {
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

        let bytes = resp.bytes().map_err(TransportError::from)?;
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

    fn apply_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.endpoint.authenticator {
            Authenticator::NoAuth => builder,
            Authenticator::Basic { username, password } => {
                builder.basic_auth(username.trim(), Some(password.trim()))
            }
            Authenticator::BearerToken(token) => builder.bearer_auth(token),
        }
    }
}
