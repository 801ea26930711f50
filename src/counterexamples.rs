//! Counterexamples: inputs explicitly marked as matching no intent.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
    client::ClientInner,
    core::{impl_option_headers, require, ApiRequest, Operation},
    errors::Result,
    http::{DetailedResponse, HeaderList},
    types::Pagination,
};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Counterexample {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl Counterexample {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CounterexampleCollection {
    pub counterexamples: Vec<Counterexample>,
    #[serde(default)]
    pub pagination: Pagination,
}

fn counterexamples_path(workspace_id: &str) -> Vec<String> {
    vec![
        "v1".into(),
        "workspaces".into(),
        workspace_id.into(),
        "counterexamples".into(),
    ]
}

fn counterexample_path(workspace_id: &str, text: &str) -> Vec<String> {
    let mut path = counterexamples_path(workspace_id);
    path.push(text.into());
    path
}

#[derive(Serialize)]
struct CounterexampleBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
}

/// Options for `GET /v1/workspaces/{workspace_id}/counterexamples`.
#[derive(Debug, Clone, Default)]
pub struct ListCounterexamplesOptions {
    pub workspace_id: String,
    pub page_limit: Option<u32>,
    pub include_count: Option<bool>,
    pub sort: Option<String>,
    pub cursor: Option<String>,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl ListCounterexamplesOptions {
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
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

impl Operation for ListCounterexamplesOptions {
    type Output = CounterexampleCollection;
    const NAME: &'static str = "list_counterexamples";

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        Ok(
            ApiRequest::new(Method::GET, counterexamples_path(&self.workspace_id))
                .query_opt("page_limit", self.page_limit)
                .query_opt("include_count", self.include_count)
                .query_opt("sort", self.sort.as_deref())
                .query_opt("cursor", self.cursor.as_deref())
                .query_opt("include_audit", self.include_audit)
                .headers(&self.headers),
        )
    }
}

/// Options for `POST /v1/workspaces/{workspace_id}/counterexamples`.
#[derive(Debug, Clone, Default)]
pub struct CreateCounterexampleOptions {
    pub workspace_id: String,
    pub text: String,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl CreateCounterexampleOptions {
    pub fn new(workspace_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_include_audit(mut self, include_audit: bool) -> Self {
        self.include_audit = Some(include_audit);
        self
    }
}

impl Operation for CreateCounterexampleOptions {
    type Output = Counterexample;
    const NAME: &'static str = "create_counterexample";

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        require("text", &self.text)?;
        let body = CounterexampleBody {
            text: Some(&self.text),
        };
        Ok(
            ApiRequest::new(Method::POST, counterexamples_path(&self.workspace_id))
                .query_opt("include_audit", self.include_audit)
                .json(&body)?
                .headers(&self.headers),
        )
    }
}

/// Options for `GET /v1/workspaces/{workspace_id}/counterexamples/{text}`.
#[derive(Debug, Clone, Default)]
pub struct GetCounterexampleOptions {
    pub workspace_id: String,
    pub text: String,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl GetCounterexampleOptions {
    pub fn new(workspace_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_include_audit(mut self, include_audit: bool) -> Self {
        self.include_audit = Some(include_audit);
        self
    }
}

impl Operation for GetCounterexampleOptions {
    type Output = Counterexample;
    const NAME: &'static str = "get_counterexample";

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        require("text", &self.text)?;
        Ok(ApiRequest::new(
            Method::GET,
            counterexample_path(&self.workspace_id, &self.text),
        )
        .query_opt("include_audit", self.include_audit)
        .headers(&self.headers))
    }
}

/// Options for `POST /v1/workspaces/{workspace_id}/counterexamples/{text}`.
#[derive(Debug, Clone, Default)]
pub struct UpdateCounterexampleOptions {
    pub workspace_id: String,
    pub text: String,
    pub new_text: Option<String>,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl UpdateCounterexampleOptions {
    pub fn new(workspace_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_new_text(mut self, new_text: impl Into<String>) -> Self {
        self.new_text = Some(new_text.into());
        self
    }

    pub fn with_include_audit(mut self, include_audit: bool) -> Self {
        self.include_audit = Some(include_audit);
        self
    }
}

impl Operation for UpdateCounterexampleOptions {
    type Output = Counterexample;
    const NAME: &'static str = "update_counterexample";

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        require("text", &self.text)?;
        let body = CounterexampleBody {
            text: self.new_text.as_deref(),
        };
        Ok(ApiRequest::new(
            Method::POST,
            counterexample_path(&self.workspace_id, &self.text),
        )
        .query_opt("include_audit", self.include_audit)
        .json(&body)?
        .headers(&self.headers))
    }
}

/// Options for `DELETE /v1/workspaces/{workspace_id}/counterexamples/{text}`.
#[derive(Debug, Clone, Default)]
pub struct DeleteCounterexampleOptions {
    pub workspace_id: String,
    pub text: String,
    pub headers: HeaderList,
}

impl DeleteCounterexampleOptions {
    pub fn new(workspace_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            text: text.into(),
            ..Default::default()
        }
    }
}

impl Operation for DeleteCounterexampleOptions {
    type Output = ();
    const NAME: &'static str = "delete_counterexample";
    const EXPECTS_BODY: bool = false;

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        require("text", &self.text)?;
        Ok(ApiRequest::new(
            Method::DELETE,
            counterexample_path(&self.workspace_id, &self.text),
        )
        .headers(&self.headers))
    }
}

impl_option_headers!(
    ListCounterexamplesOptions,
    CreateCounterexampleOptions,
    GetCounterexampleOptions,
    UpdateCounterexampleOptions,
    DeleteCounterexampleOptions,
);

/// Client for workspace counterexamples.
#[derive(Clone)]
pub struct CounterexamplesClient {
    pub(crate) inner: Arc<ClientInner>,
}

impl CounterexamplesClient {
    pub async fn list(
        &self,
        opts: &ListCounterexamplesOptions,
    ) -> Result<DetailedResponse<CounterexampleCollection>> {
        self.inner.execute(opts).await
    }

    pub async fn create(
        &self,
        opts: &CreateCounterexampleOptions,
    ) -> Result<DetailedResponse<Counterexample>> {
        self.inner.execute(opts).await
    }

    pub async fn get(
        &self,
        opts: &GetCounterexampleOptions,
    ) -> Result<DetailedResponse<Counterexample>> {
        self.inner.execute(opts).await
    }

    pub async fn update(
        &self,
        opts: &UpdateCounterexampleOptions,
    ) -> Result<DetailedResponse<Counterexample>> {
        self.inner.execute(opts).await
    }

    pub async fn delete(
        &self,
        opts: &DeleteCounterexampleOptions,
    ) -> Result<DetailedResponse<()>> {
        self.inner.execute(opts).await
    }
}
