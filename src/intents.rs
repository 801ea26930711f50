//! Intents: the goals a user utterance is classified into.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
    client::ClientInner,
    core::{impl_option_headers, require, ApiRequest, Operation},
    errors::Result,
    examples::Example,
    http::{DetailedResponse, HeaderList},
    types::Pagination,
};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Intent {
    pub intent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    /// Only present when the intent was fetched with `export=true`, or when creating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Example>>,
}

impl Intent {
    pub fn new(intent: impl Into<String>) -> Self {
        Self {
            intent: intent.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_examples<I, S>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = Some(texts.into_iter().map(Example::new).collect());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct IntentCollection {
    pub intents: Vec<Intent>,
    #[serde(default)]
    pub pagination: Pagination,
}

pub(crate) fn intents_path(workspace_id: &str) -> Vec<String> {
    vec![
        "v1".into(),
        "workspaces".into(),
        workspace_id.into(),
        "intents".into(),
    ]
}

pub(crate) fn intent_path(workspace_id: &str, intent: &str) -> Vec<String> {
    let mut path = intents_path(workspace_id);
    path.push(intent.into());
    path
}

/// Options for `GET /v1/workspaces/{workspace_id}/intents`.
#[derive(Debug, Clone, Default)]
pub struct ListIntentsOptions {
    pub workspace_id: String,
    /// Include each intent's examples in the response.
    pub export: Option<bool>,
    pub page_limit: Option<u32>,
    pub include_count: Option<bool>,
    /// Attribute to sort by; prefix with `-` for descending order.
    pub sort: Option<String>,
    pub cursor: Option<String>,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl ListIntentsOptions {
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            ..Default::default()
        }
    }

    pub fn with_export(mut self, export: bool) -> Self {
        self.export = Some(export);
        self
    }

    pub fn with_page_limit(mut self, page_limit: u32) -> Self {
        self.page_limit = Some(page_limit);
        self
    }

    pub fn with_include_count(mut self, include_count: bool) -> Self {
        self.include_count = Some(include_count);
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub fn with_include_audit(mut self, include_audit: bool) -> Self {
        self.include_audit = Some(include_audit);
        self
    }
}

impl Operation for ListIntentsOptions {
    type Output = IntentCollection;
    const NAME: &'static str = "list_intents";

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        Ok(ApiRequest::new(Method::GET, intents_path(&self.workspace_id))
            .query_opt("export", self.export)
            .query_opt("page_limit", self.page_limit)
            .query_opt("include_count", self.include_count)
            .query_opt("sort", self.sort.as_deref())
            .query_opt("cursor", self.cursor.as_deref())
            .query_opt("include_audit", self.include_audit)
            .headers(&self.headers))
    }
}

/// Options for `POST /v1/workspaces/{workspace_id}/intents`.
#[derive(Debug, Clone, Default)]
pub struct CreateIntentOptions {
    pub workspace_id: String,
    pub intent: String,
    pub description: Option<String>,
    pub examples: Option<Vec<Example>>,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl CreateIntentOptions {
    pub fn new(workspace_id: impl Into<String>, intent: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_examples(mut self, examples: Vec<Example>) -> Self {
        self.examples = Some(examples);
        self
    }

    pub fn with_include_audit(mut self, include_audit: bool) -> Self {
        self.include_audit = Some(include_audit);
        self
    }
}

#[derive(Serialize)]
struct IntentBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    intent: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    examples: Option<&'a [Example]>,
}

impl Operation for CreateIntentOptions {
    type Output = Intent;
    const NAME: &'static str = "create_intent";

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        require("intent", &self.intent)?;
        let body = IntentBody {
            intent: Some(&self.intent),
            description: self.description.as_deref(),
            examples: self.examples.as_deref(),
        };
        Ok(ApiRequest::new(Method::POST, intents_path(&self.workspace_id))
            .query_opt("include_audit", self.include_audit)
            .json(&body)?
            .headers(&self.headers))
    }
}

/// Options for `GET /v1/workspaces/{workspace_id}/intents/{intent}`.
#[derive(Debug, Clone, Default)]
pub struct GetIntentOptions {
    pub workspace_id: String,
    pub intent: String,
    pub export: Option<bool>,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl GetIntentOptions {
    pub fn new(workspace_id: impl Into<String>, intent: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            ..Default::default()
        }
    }

    pub fn with_export(mut self, export: bool) -> Self {
        self.export = Some(export);
        self
    }

    pub fn with_include_audit(mut self, include_audit: bool) -> Self {
        self.include_audit = Some(include_audit);
        self
    }
}

impl Operation for GetIntentOptions {
    type Output = Intent;
    const NAME: &'static str = "get_intent";

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        require("intent", &self.intent)?;
        Ok(
            ApiRequest::new(Method::GET, intent_path(&self.workspace_id, &self.intent))
                .query_opt("export", self.export)
                .query_opt("include_audit", self.include_audit)
                .headers(&self.headers),
        )
    }
}

/// Options for `POST /v1/workspaces/{workspace_id}/intents/{intent}`.
///
/// Unset `new_*` fields are left unchanged on the server. With `append` unset or
/// `false`, `new_examples` replaces the existing example list.
#[derive(Debug, Clone, Default)]
pub struct UpdateIntentOptions {
    pub workspace_id: String,
    pub intent: String,
    pub new_intent: Option<String>,
    pub new_description: Option<String>,
    pub new_examples: Option<Vec<Example>>,
    pub append: Option<bool>,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl UpdateIntentOptions {
    pub fn new(workspace_id: impl Into<String>, intent: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            ..Default::default()
        }
    }

    pub fn with_new_intent(mut self, new_intent: impl Into<String>) -> Self {
        self.new_intent = Some(new_intent.into());
        self
    }

    pub fn with_new_description(mut self, new_description: impl Into<String>) -> Self {
        self.new_description = Some(new_description.into());
        self
    }

    pub fn with_new_examples(mut self, new_examples: Vec<Example>) -> Self {
        self.new_examples = Some(new_examples);
        self
    }

    pub fn with_append(mut self, append: bool) -> Self {
        self.append = Some(append);
        self
    }

    pub fn with_include_audit(mut self, include_audit: bool) -> Self {
        self.include_audit = Some(include_audit);
        self
    }
}

impl Operation for UpdateIntentOptions {
    type Output = Intent;
    const NAME: &'static str = "update_intent";

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        require("intent", &self.intent)?;
        let body = IntentBody {
            intent: self.new_intent.as_deref(),
            description: self.new_description.as_deref(),
            examples: self.new_examples.as_deref(),
        };
        Ok(
            ApiRequest::new(Method::POST, intent_path(&self.workspace_id, &self.intent))
                .query_opt("append", self.append)
                .query_opt("include_audit", self.include_audit)
                .json(&body)?
                .headers(&self.headers),
        )
    }
}

/// Options for `DELETE /v1/workspaces/{workspace_id}/intents/{intent}`.
#[derive(Debug, Clone, Default)]
pub struct DeleteIntentOptions {
    pub workspace_id: String,
    pub intent: String,
    pub headers: HeaderList,
}

impl DeleteIntentOptions {
    pub fn new(workspace_id: impl Into<String>, intent: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            ..Default::default()
        }
    }
}

impl Operation for DeleteIntentOptions {
    type Output = ();
    const NAME: &'static str = "delete_intent";
    const EXPECTS_BODY: bool = false;

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        require("intent", &self.intent)?;
        Ok(
            ApiRequest::new(Method::DELETE, intent_path(&self.workspace_id, &self.intent))
                .headers(&self.headers),
        )
    }
}

impl_option_headers!(
    ListIntentsOptions,
    CreateIntentOptions,
    GetIntentOptions,
    UpdateIntentOptions,
    DeleteIntentOptions,
);

/// Client for intent operations within a workspace.
#[derive(Clone)]
pub struct IntentsClient {
    pub(crate) inner: Arc<ClientInner>,
}

impl IntentsClient {
    /// List the intents of a workspace.
    pub async fn list(
        &self,
        opts: &ListIntentsOptions,
    ) -> Result<DetailedResponse<IntentCollection>> {
        self.inner.execute(opts).await
    }

    /// Create an intent. Succeeds with `201 Created`.
    pub async fn create(&self, opts: &CreateIntentOptions) -> Result<DetailedResponse<Intent>> {
        self.inner.execute(opts).await
    }

    pub async fn get(&self, opts: &GetIntentOptions) -> Result<DetailedResponse<Intent>> {
        self.inner.execute(opts).await
    }

    pub async fn update(&self, opts: &UpdateIntentOptions) -> Result<DetailedResponse<Intent>> {
        self.inner.execute(opts).await
    }

    pub async fn delete(&self, opts: &DeleteIntentOptions) -> Result<DetailedResponse<()>> {
        self.inner.execute(opts).await
    }
}
