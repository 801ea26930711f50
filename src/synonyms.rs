//! Synonyms of an entity value.

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
    values::value_path,
};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Synonym {
    pub synonym: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SynonymCollection {
    pub synonyms: Vec<Synonym>,
    #[serde(default)]
    pub pagination: Pagination,
}

fn synonyms_path(workspace_id: &str, entity: &str, value: &str) -> Vec<String> {
    let mut path = value_path(workspace_id, entity, value);
    path.push("synonyms".into());
    path
}

fn synonym_path(workspace_id: &str, entity: &str, value: &str, synonym: &str) -> Vec<String> {
    let mut path = synonyms_path(workspace_id, entity, value);
    path.push(synonym.into());
    path
}

#[derive(Serialize)]
struct SynonymBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    synonym: Option<&'a str>,
}

/// Identifies the value whose synonyms are addressed; shared by every synonym operation.
fn require_value_scope(workspace_id: &str, entity: &str, value: &str) -> Result<()> {
    require("workspace_id", workspace_id)?;
    require("entity", entity)?;
    require("value", value)
}

/// Options for `GET .../entities/{entity}/values/{value}/synonyms`.
#[derive(Debug, Clone, Default)]
pub struct ListSynonymsOptions {
    pub workspace_id: String,
    pub entity: String,
    pub value: String,
    pub page_limit: Option<u32>,
    pub include_count: Option<bool>,
    pub sort: Option<String>,
    pub cursor: Option<String>,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl ListSynonymsOptions {
    pub fn new(
        workspace_id: impl Into<String>,
        entity: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            entity: entity.into(),
            value: value.into(),
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

impl Operation for ListSynonymsOptions {
    type Output = SynonymCollection;
    const NAME: &'static str = "list_synonyms";

    fn build_request(&self) -> Result<ApiRequest> {
        require_value_scope(&self.workspace_id, &self.entity, &self.value)?;
        Ok(ApiRequest::new(
            Method::GET,
            synonyms_path(&self.workspace_id, &self.entity, &self.value),
        )
        .query_opt("page_limit", self.page_limit)
        .query_opt("include_count", self.include_count)
        .query_opt("sort", self.sort.as_deref())
        .query_opt("cursor", self.cursor.as_deref())
        .query_opt("include_audit", self.include_audit)
        .headers(&self.headers))
    }
}

/// Options for `POST .../entities/{entity}/values/{value}/synonyms`.
#[derive(Debug, Clone, Default)]
pub struct CreateSynonymOptions {
    pub workspace_id: String,
    pub entity: String,
    pub value: String,
    pub synonym: String,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl CreateSynonymOptions {
    pub fn new(
        workspace_id: impl Into<String>,
        entity: impl Into<String>,
        value: impl Into<String>,
        synonym: impl Into<String>,
    ) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            entity: entity.into(),
            value: value.into(),
            synonym: synonym.into(),
            ..Default::default()
        }
    }

    pub fn with_include_audit(mut self, include_audit: bool) -> Self {
        self.include_audit = Some(include_audit);
        self
    }
}

impl Operation for CreateSynonymOptions {
    type Output = Synonym;
    const NAME: &'static str = "create_synonym";

    fn build_request(&self) -> Result<ApiRequest> {
        require_value_scope(&self.workspace_id, &self.entity, &self.value)?;
        require("synonym", &self.synonym)?;
        let body = SynonymBody {
            synonym: Some(&self.synonym),
        };
        Ok(ApiRequest::new(
            Method::POST,
            synonyms_path(&self.workspace_id, &self.entity, &self.value),
        )
        .query_opt("include_audit", self.include_audit)
        .json(&body)?
        .headers(&self.headers))
    }
}

/// Options for `GET .../values/{value}/synonyms/{synonym}`.
#[derive(Debug, Clone, Default)]
pub struct GetSynonymOptions {
    pub workspace_id: String,
    pub entity: String,
    pub value: String,
    pub synonym: String,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl GetSynonymOptions {
    pub fn new(
        workspace_id: impl Into<String>,
        entity: impl Into<String>,
        value: impl Into<String>,
        synonym: impl Into<String>,
    ) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            entity: entity.into(),
            value: value.into(),
            synonym: synonym.into(),
            ..Default::default()
        }
    }

    pub fn with_include_audit(mut self, include_audit: bool) -> Self {
        self.include_audit = Some(include_audit);
        self
    }
}

impl Operation for GetSynonymOptions {
    type Output = Synonym;
    const NAME: &'static str = "get_synonym";

    fn build_request(&self) -> Result<ApiRequest> {
        require_value_scope(&self.workspace_id, &self.entity, &self.value)?;
        require("synonym", &self.synonym)?;
        Ok(ApiRequest::new(
            Method::GET,
            synonym_path(&self.workspace_id, &self.entity, &self.value, &self.synonym),
        )
        .query_opt("include_audit", self.include_audit)
        .headers(&self.headers))
    }
}

/// Options for `POST .../values/{value}/synonyms/{synonym}`.
#[derive(Debug, Clone, Default)]
pub struct UpdateSynonymOptions {
    pub workspace_id: String,
    pub entity: String,
    pub value: String,
    pub synonym: String,
    pub new_synonym: Option<String>,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl UpdateSynonymOptions {
    pub fn new(
        workspace_id: impl Into<String>,
        entity: impl Into<String>,
        value: impl Into<String>,
        synonym: impl Into<String>,
    ) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            entity: entity.into(),
            value: value.into(),
            synonym: synonym.into(),
            ..Default::default()
        }
    }

    pub fn with_new_synonym(mut self, new_synonym: impl Into<String>) -> Self {
        self.new_synonym = Some(new_synonym.into());
        self
    }

    pub fn with_include_audit(mut self, include_audit: bool) -> Self {
        self.include_audit = Some(include_audit);
        self
    }
}

impl Operation for UpdateSynonymOptions {
    type Output = Synonym;
    const NAME: &'static str = "update_synonym";

    fn build_request(&self) -> Result<ApiRequest> {
        require_value_scope(&self.workspace_id, &self.entity, &self.value)?;
        require("synonym", &self.synonym)?;
        let body = SynonymBody {
            synonym: self.new_synonym.as_deref(),
        };
        Ok(ApiRequest::new(
            Method::POST,
            synonym_path(&self.workspace_id, &self.entity, &self.value, &self.synonym),
        )
        .query_opt("include_audit", self.include_audit)
        .json(&body)?
        .headers(&self.headers))
    }
}

/// Options for `DELETE .../values/{value}/synonyms/{synonym}`.
#[derive(Debug, Clone, Default)]
pub struct DeleteSynonymOptions {
    pub workspace_id: String,
    pub entity: String,
    pub value: String,
    pub synonym: String,
    pub headers: HeaderList,
}

impl DeleteSynonymOptions {
    pub fn new(
        workspace_id: impl Into<String>,
        entity: impl Into<String>,
        value: impl Into<String>,
        synonym: impl Into<String>,
    ) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            entity: entity.into(),
            value: value.into(),
            synonym: synonym.into(),
            ..Default::default()
        }
    }
}

impl Operation for DeleteSynonymOptions {
    type Output = ();
    const NAME: &'static str = "delete_synonym";
    const EXPECTS_BODY: bool = false;

    fn build_request(&self) -> Result<ApiRequest> {
        require_value_scope(&self.workspace_id, &self.entity, &self.value)?;
        require("synonym", &self.synonym)?;
        Ok(ApiRequest::new(
            Method::DELETE,
            synonym_path(&self.workspace_id, &self.entity, &self.value, &self.synonym),
        )
        .headers(&self.headers))
    }
}

impl_option_headers!(
    ListSynonymsOptions,
    CreateSynonymOptions,
    GetSynonymOptions,
    UpdateSynonymOptions,
    DeleteSynonymOptions,
);

/// Client for the synonyms of an entity value.
#[derive(Clone)]
pub struct SynonymsClient {
    pub(crate) inner: Arc<ClientInner>,
}

impl SynonymsClient {
    pub async fn list(
        &self,
        opts: &ListSynonymsOptions,
    ) -> Result<DetailedResponse<SynonymCollection>> {
        self.inner.execute(opts).await
    }

    pub async fn create(&self, opts: &CreateSynonymOptions) -> Result<DetailedResponse<Synonym>> {
        self.inner.execute(opts).await
    }

    pub async fn get(&self, opts: &GetSynonymOptions) -> Result<DetailedResponse<Synonym>> {
        self.inner.execute(opts).await
    }

    pub async fn update(&self, opts: &UpdateSynonymOptions) -> Result<DetailedResponse<Synonym>> {
        self.inner.execute(opts).await
    }

    pub async fn delete(&self, opts: &DeleteSynonymOptions) -> Result<DetailedResponse<()>> {
        self.inner.execute(opts).await
    }
}
