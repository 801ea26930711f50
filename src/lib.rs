//! Typed Rust client for the assistant v1 REST API.
//!
//! Every REST operation has an options struct (`ListIntentsOptions`,
//! `MessageOptions`, ...) carrying its path, query and body parameters. Resource
//! clients take a reference to the options and return the decoded result together
//! with the HTTP status and headers as a [`DetailedResponse`].
//!
//! ```no_run
//! # async fn run() -> assistant_v1::Result<()> {
//! use assistant_v1::{Client, ListWorkspacesOptions, MessageOptions};
//!
//! let client = Client::from_env()?;
//! let workspaces = client
//!     .workspaces()
//!     .list(&ListWorkspacesOptions::new().with_page_limit(10))
//!     .await?;
//! for ws in &workspaces.result.workspaces {
//!     println!("{}", ws.name);
//! }
//!
//! let reply = client
//!     .message(&MessageOptions::new("my-workspace-id").with_text("Hello"))
//!     .await?;
//! println!("{:?}", reply.result.output.text);
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
// `Error::Api` carries the whole error envelope inline.
#![allow(clippy::result_large_err)]

/// Default service instance URL.
pub const DEFAULT_SERVICE_URL: &str = "https://api.us-south.assistant.watson.cloud.ibm.com";

/// Default API version date.
pub const DEFAULT_VERSION: &str = "2021-11-27";

/// Default User-Agent header value.
pub(crate) const DEFAULT_CLIENT_HEADER: &str =
    concat!("assistant-v1-rust/", env!("CARGO_PKG_VERSION"));

/// Default connection timeout (5 seconds).
pub const DEFAULT_CONNECT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

/// Default request timeout (60 seconds).
pub const DEFAULT_REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(60);

/// Response header carrying the service transaction id.
pub const TRANSACTION_ID_HEADER: &str = "X-Global-Transaction-Id";

/// Fallback response header for the transaction id.
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

mod auth;
mod client;
mod core;
mod counterexamples;
mod dialog_nodes;
mod entities;
mod env;
mod errors;
mod examples;
mod http;
mod intents;
mod logs;
mod message;
mod synonyms;
mod types;
mod user_data;
mod values;
mod workspaces;

#[doc(hidden)]
pub mod testing;

pub use auth::{Authenticator, APIKEY_USERNAME};
pub use client::{Client, ClientBuilder, Config};
pub use crate::core::{ApiRequest, Operation};
pub use env::DEFAULT_SERVICE_NAME;
pub use errors::{
    APIError, Error, FieldError, Result, TransportError, TransportErrorKind, ValidationError,
};
pub use http::{DetailedResponse, HeaderEntry, HeaderList};
pub use types::{LogPagination, Mention, Metadata, Pagination, Webhook, WebhookHeader};

pub use counterexamples::{
    Counterexample, CounterexampleCollection, CounterexamplesClient, CreateCounterexampleOptions,
    DeleteCounterexampleOptions, GetCounterexampleOptions, ListCounterexamplesOptions,
    UpdateCounterexampleOptions,
};
pub use dialog_nodes::{
    CreateDialogNodeOptions, DeleteDialogNodeOptions, DialogNode, DialogNodeAction,
    DialogNodeActionType, DialogNodeCollection, DialogNodeNextStep, DialogNodeOutput,
    DialogNodeOutputModifiers, DialogNodeType, DialogNodesClient, DigressIn, DigressOut,
    DigressOutSlots, EventName, GetDialogNodeOptions, ListDialogNodesOptions, NextStepBehavior,
    SelectorKind, UpdateDialogNodeOptions,
};
pub use entities::{
    CreateEntityOptions, DeleteEntityOptions, EntitiesClient, Entity, EntityCollection,
    EntityMention, EntityMentionCollection, GetEntityOptions, ListEntitiesOptions,
    ListMentionsOptions, UpdateEntityOptions,
};
pub use examples::{
    CreateExampleOptions, DeleteExampleOptions, Example, ExampleCollection, ExamplesClient,
    GetExampleOptions, ListExamplesOptions, UpdateExampleOptions,
};
pub use intents::{
    CreateIntentOptions, DeleteIntentOptions, GetIntentOptions, Intent, IntentCollection,
    IntentsClient, ListIntentsOptions, UpdateIntentOptions,
};
pub use logs::{ListAllLogsOptions, ListLogsOptions, Log, LogCollection, LogsClient};
pub use message::{
    CaptureGroup, Context, DialogNodeVisitedDetails, LogMessage, MessageContextMetadata,
    MessageInput, MessageOptions, MessageRequest, MessageResponse, OutputData, RuntimeEntity,
    RuntimeIntent,
};
pub use synonyms::{
    CreateSynonymOptions, DeleteSynonymOptions, GetSynonymOptions, ListSynonymsOptions, Synonym,
    SynonymCollection, SynonymsClient, UpdateSynonymOptions,
};
pub use user_data::{DeleteUserDataOptions, UserDataClient};
pub use values::{
    CreateValueOptions, DeleteValueOptions, EntityValue, GetValueOptions, ListValuesOptions,
    UpdateValueOptions, ValueCollection, ValueType, ValuesClient,
};
pub use workspaces::{
    CreateWorkspaceOptions, DeleteWorkspaceOptions, DisambiguationSettings, GetWorkspaceOptions,
    ListWorkspacesOptions, SystemSettingToggle, ToolingSettings, UpdateWorkspaceOptions,
    Workspace, WorkspaceCollection, WorkspaceContent, WorkspaceStatus, WorkspaceSystemSettings,
    WorkspacesClient,
};

#[cfg(feature = "blocking")]
mod blocking;
#[cfg(feature = "blocking")]
pub use blocking::{
    BlockingClient, BlockingConfig, BlockingCounterexamplesClient, BlockingDialogNodesClient,
    BlockingEntitiesClient, BlockingExamplesClient, BlockingIntentsClient, BlockingLogsClient,
    BlockingSynonymsClient, BlockingUserDataClient, BlockingValuesClient,
    BlockingWorkspacesClient,
};
