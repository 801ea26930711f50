//! User-input examples that train an intent.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
    client::ClientInner,
    core::{impl_option_headers, require, ApiRequest, Operation},
    errors::Result,
    http::{DetailedResponse, HeaderList},
    intents::intent_path,
    types::{Mention, Pagination},
};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Example {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentions: Option<Vec<Mention>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl Example {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_mentions(mut self, mentions: Vec<Mention>) -> Self {
        self.mentions = Some(mentions);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ExampleCollection {
    pub examples: Vec<Example>,
    #[serde(default)]
    pub pagination: Pagination,
}

fn examples_path(workspace_id: &str, intent: &str) -> Vec<String> {
    let mut path = intent_path(workspace_id, intent);
    path.push("examples".into());
    path
}

fn example_path(workspace_id: &str, intent: &str, text: &str) -> Vec<String> {
    let mut path = examples_path(workspace_id, intent);
    path.push(text.into());
    path
}

/// Options for `GET /v1/workspaces/{workspace_id}/intents/{intent}/examples`.
#[derive(Debug, Clone, Default)]
pub struct ListExamplesOptions {
    pub workspace_id: String,
    pub intent: String,
    pub page_limit: Option<u32>,
    pub include_count: Option<bool>,
    pub sort: Option<String>,
    pub cursor: Option<String>,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl ListExamplesOptions {
    pub fn new(workspace_id: impl Into<String>, intent: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            ..Default::default()
        }
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

impl Operation for ListExamplesOptions {
    type Output = ExampleCollection;
    const NAME: &'static str = "list_examples";

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        require("intent", &self.intent)?;
        Ok(
            ApiRequest::new(Method::GET, examples_path(&self.workspace_id, &self.intent))
                .query_opt("page_limit", self.page_limit)
                .query_opt("include_count", self.include_count)
                .query_opt("sort", self.sort.as_deref())
                .query_opt("cursor", self.cursor.as_deref())
                .query_opt("include_audit", self.include_audit)
                .headers(&self.headers),
        )
    }
}

/// Options for `POST /v1/workspaces/{workspace_id}/intents/{intent}/examples`.
#[derive(Debug, Clone, Default)]
pub struct CreateExampleOptions {
    pub workspace_id: String,
    pub intent: String,
    pub text: String,
    pub mentions: Option<Vec<Mention>>,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl CreateExampleOptions {
    pub fn new(
        workspace_id: impl Into<String>,
        intent: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_mentions(mut self, mentions: Vec<Mention>) -> Self {
        self.mentions = Some(mentions);
        self
    }

    pub fn with_include_audit(mut self, include_audit: bool) -> Self {
        self.include_audit = Some(include_audit);
        self
    }
}

#[derive(Serialize)]
struct ExampleBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mentions: Option<&'a [Mention]>,
}

impl Operation for CreateExampleOptions {
    type Output = Example;
    const NAME: &'static str = "create_example";

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        require("intent", &self.intent)?;
        require("text", &self.text)?;
        let body = ExampleBody {
            text: Some(&self.text),
            mentions: self.mentions.as_deref(),
        };
        Ok(
            ApiRequest::new(Method::POST, examples_path(&self.workspace_id, &self.intent))
                .query_opt("include_audit", self.include_audit)
                .json(&body)?
                .headers(&self.headers),
        )
    }
}

/// Options for `GET /v1/workspaces/{workspace_id}/intents/{intent}/examples/{text}`.
#[derive(Debug, Clone, Default)]
pub struct GetExampleOptions {
    pub workspace_id: String,
    pub intent: String,
    pub text: String,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl GetExampleOptions {
    pub fn new(
        workspace_id: impl Into<String>,
        intent: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_include_audit(mut self, include_audit: bool) -> Self {
        self.include_audit = Some(include_audit);
        self
    }
}

impl Operation for GetExampleOptions {
    type Output = Example;
    const NAME: &'static str = "get_example";

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        require("intent", &self.intent)?;
        require("text", &self.text)?;
        Ok(ApiRequest::new(
            Method::GET,
            example_path(&self.workspace_id, &self.intent, &self.text),
        )
        .query_opt("include_audit", self.include_audit)
        .headers(&self.headers))
    }
}

/// Options for `POST /v1/workspaces/{workspace_id}/intents/{intent}/examples/{text}`.
#[derive(Debug, Clone, Default)]
pub struct UpdateExampleOptions {
    pub workspace_id: String,
    pub intent: String,
    pub text: String,
    pub new_text: Option<String>,
    pub new_mentions: Option<Vec<Mention>>,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl UpdateExampleOptions {
    pub fn new(
        workspace_id: impl Into<String>,
        intent: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_new_text(mut self, new_text: impl Into<String>) -> Self {
        self.new_text = Some(new_text.into());
        self
    }

    pub fn with_new_mentions(mut self, new_mentions: Vec<Mention>) -> Self {
        self.new_mentions = Some(new_mentions);
        self
    }

    pub fn with_include_audit(mut self, include_audit: bool) -> Self {
        self.include_audit = Some(include_audit);
        self
    }
}

impl Operation for UpdateExampleOptions {
    type Output = Example;
    const NAME: &'static str = "update_example";

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        require("intent", &self.intent)?;
        require("text", &self.text)?;
        let body = ExampleBody {
            text: self.new_text.as_deref(),
            mentions: self.new_mentions.as_deref(),
        };
        Ok(ApiRequest::new(
            Method::POST,
            example_path(&self.workspace_id, &self.intent, &self.text),
        )
        .query_opt("include_audit", self.include_audit)
        .json(&body)?
        .headers(&self.headers))
    }
}

/// Options for `DELETE /v1/workspaces/{workspace_id}/intents/{intent}/examples/{text}`.
#[derive(Debug, Clone, Default)]
pub struct DeleteExampleOptions {
    pub workspace_id: String,
    pub intent: String,
    pub text: String,
    pub headers: HeaderList,
}

impl DeleteExampleOptions {
    pub fn new(
        workspace_id: impl Into<String>,
        intent: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            text: text.into(),
            ..Default::default()
        }
    }
}

impl Operation for DeleteExampleOptions {
    type Output = ();
    const NAME: &'static str = "delete_example";
    const EXPECTS_BODY: bool = false;

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        require("intent", &self.intent)?;
        require("text", &self.text)?;
        Ok(ApiRequest::new(
            Method::DELETE,
            example_path(&self.workspace_id, &self.intent, &self.text),
        )
        .headers(&self.headers))
    }
}

impl_option_headers!(
    ListExamplesOptions,
    CreateExampleOptions,
    GetExampleOptions,
    UpdateExampleOptions,
    DeleteExampleOptions,
);

/// Client for the training examples of an intent.
#[derive(Clone)]
pub struct ExamplesClient {
    pub(crate) inner: Arc<ClientInner>,
}

impl ExamplesClient {
    pub async fn list(
        &self,
        opts: &ListExamplesOptions,
    ) -> Result<DetailedResponse<ExampleCollection>> {
        self.inner.execute(opts).await
    }

    /// Add an example to an intent. Succeeds with `201 Created`.
    pub async fn create(&self, opts: &CreateExampleOptions) -> Result<DetailedResponse<Example>> {
        self.inner.execute(opts).await
    }

    pub async fn get(&self, opts: &GetExampleOptions) -> Result<DetailedResponse<Example>> {
        self.inner.execute(opts).await
    }

    /// Rewrite an example's text or mentions.
    pub async fn update(&self, opts: &UpdateExampleOptions) -> Result<DetailedResponse<Example>> {
        self.inner.execute(opts).await
    }

    pub async fn delete(&self, opts: &DeleteExampleOptions) -> Result<DetailedResponse<()>> {
        self.inner.execute(opts).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_serializes_mentions() {
        let req = CreateExampleOptions::new("ws", "order", "two large pizzas")
            .with_mentions(vec![Mention::new("size", 4, 9)])
            .build_request()
            .unwrap();
        assert_eq!(req.path(), "/v1/workspaces/ws/intents/order/examples");
        assert_eq!(
            req.body(),
            Some(&serde_json::json!({
                "text": "two large pizzas",
                "mentions": [{ "entity": "size", "location": [4, 9] }]
            }))
        );
    }

    #[test]
    fn update_without_changes_sends_empty_object() {
        let req = UpdateExampleOptions::new("ws", "order", "old text")
            .build_request()
            .unwrap();
        assert_eq!(req.body(), Some(&serde_json::json!({})));
        assert_eq!(req.path(), "/v1/workspaces/ws/intents/order/examples/old text");
    }

    #[test]
    fn delete_requires_text() {
        assert!(DeleteExampleOptions::new("ws", "order", "")
            .build_request()
            .is_err());
    }
}
