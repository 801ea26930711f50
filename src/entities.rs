//! Entities and the places they are mentioned in intent examples.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
    client::ClientInner,
    core::{impl_option_headers, require, ApiRequest, Operation},
    errors::Result,
    http::{DetailedResponse, HeaderList},
    types::{Metadata, Pagination},
    values::EntityValue,
};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Entity {
    pub entity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuzzy_match: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<EntityValue>>,
}

impl Entity {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            ..Default::default()
        }
    }

    pub fn with_fuzzy_match(mut self, fuzzy_match: bool) -> Self {
        self.fuzzy_match = Some(fuzzy_match);
        self
    }

    pub fn with_values(mut self, values: Vec<EntityValue>) -> Self {
        self.values = Some(values);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EntityCollection {
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// An intent example in which an entity is mentioned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EntityMention {
    pub text: String,
    pub intent: String,
    pub location: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EntityMentionCollection {
    pub examples: Vec<EntityMention>,
    #[serde(default)]
    pub pagination: Pagination,
}

pub(crate) fn entity_path(workspace_id: &str, entity: &str) -> Vec<String> {
    let mut path = entities_path(workspace_id);
    path.push(entity.into());
    path
}

fn entities_path(workspace_id: &str) -> Vec<String> {
    vec![
        "v1".into(),
        "workspaces".into(),
        workspace_id.into(),
        "entities".into(),
    ]
}

#[derive(Serialize)]
struct EntityBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    entity: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fuzzy_match: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    values: Option<&'a [EntityValue]>,
}

/// Options for `GET /v1/workspaces/{workspace_id}/entities`.
#[derive(Debug, Clone, Default)]
pub struct ListEntitiesOptions {
    pub workspace_id: String,
    /// Include each entity's values in the response.
    pub export: Option<bool>,
    pub page_limit: Option<u32>,
    pub include_count: Option<bool>,
    pub sort: Option<String>,
    pub cursor: Option<String>,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl ListEntitiesOptions {
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

impl Operation for ListEntitiesOptions {
    type Output = EntityCollection;
    const NAME: &'static str = "list_entities";

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        Ok(ApiRequest::new(Method::GET, entities_path(&self.workspace_id))
            .query_opt("export", self.export)
            .query_opt("page_limit", self.page_limit)
            .query_opt("include_count", self.include_count)
            .query_opt("sort", self.sort.as_deref())
            .query_opt("cursor", self.cursor.as_deref())
            .query_opt("include_audit", self.include_audit)
            .headers(&self.headers))
    }
}

/// Options for `POST /v1/workspaces/{workspace_id}/entities`.
#[derive(Debug, Clone, Default)]
pub struct CreateEntityOptions {
    pub workspace_id: String,
    pub entity: String,
    pub description: Option<String>,
    pub metadata: Option<Metadata>,
    pub fuzzy_match: Option<bool>,
    pub values: Option<Vec<EntityValue>>,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl CreateEntityOptions {
    pub fn new(workspace_id: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            entity: entity.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_fuzzy_match(mut self, fuzzy_match: bool) -> Self {
        self.fuzzy_match = Some(fuzzy_match);
        self
    }

    pub fn with_values(mut self, values: Vec<EntityValue>) -> Self {
        self.values = Some(values);
        self
    }

    pub fn with_include_audit(mut self, include_audit: bool) -> Self {
        self.include_audit = Some(include_audit);
        self
    }
}

impl Operation for CreateEntityOptions {
    type Output = Entity;
    const NAME: &'static str = "create_entity";

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        require("entity", &self.entity)?;
        let body = EntityBody {
            entity: Some(&self.entity),
            description: self.description.as_deref(),
            metadata: self.metadata.as_ref(),
            fuzzy_match: self.fuzzy_match,
            values: self.values.as_deref(),
        };
        Ok(ApiRequest::new(Method::POST, entities_path(&self.workspace_id))
            .query_opt("include_audit", self.include_audit)
            .json(&body)?
            .headers(&self.headers))
    }
}

/// Options for `GET /v1/workspaces/{workspace_id}/entities/{entity}`.
#[derive(Debug, Clone, Default)]
pub struct GetEntityOptions {
    pub workspace_id: String,
    pub entity: String,
    pub export: Option<bool>,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl GetEntityOptions {
    pub fn new(workspace_id: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            entity: entity.into(),
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

impl Operation for GetEntityOptions {
    type Output = Entity;
    const NAME: &'static str = "get_entity";

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        require("entity", &self.entity)?;
        Ok(
            ApiRequest::new(Method::GET, entity_path(&self.workspace_id, &self.entity))
                .query_opt("export", self.export)
                .query_opt("include_audit", self.include_audit)
                .headers(&self.headers),
        )
    }
}

/// Options for `POST /v1/workspaces/{workspace_id}/entities/{entity}`.
#[derive(Debug, Clone, Default)]
pub struct UpdateEntityOptions {
    pub workspace_id: String,
    pub entity: String,
    pub new_entity: Option<String>,
    pub new_description: Option<String>,
    pub new_metadata: Option<Metadata>,
    pub new_fuzzy_match: Option<bool>,
    pub new_values: Option<Vec<EntityValue>>,
    pub append: Option<bool>,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl UpdateEntityOptions {
    pub fn new(workspace_id: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            entity: entity.into(),
            ..Default::default()
        }
    }

    pub fn with_new_entity(mut self, new_entity: impl Into<String>) -> Self {
        self.new_entity = Some(new_entity.into());
        self
    }

    pub fn with_new_description(mut self, new_description: impl Into<String>) -> Self {
        self.new_description = Some(new_description.into());
        self
    }

    pub fn with_new_metadata(mut self, new_metadata: Metadata) -> Self {
        self.new_metadata = Some(new_metadata);
        self
    }

    pub fn with_new_fuzzy_match(mut self, new_fuzzy_match: bool) -> Self {
        self.new_fuzzy_match = Some(new_fuzzy_match);
        self
    }

    pub fn with_new_values(mut self, new_values: Vec<EntityValue>) -> Self {
        self.new_values = Some(new_values);
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

impl Operation for UpdateEntityOptions {
    type Output = Entity;
    const NAME: &'static str = "update_entity";

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        require("entity", &self.entity)?;
        let body = EntityBody {
            entity: self.new_entity.as_deref(),
            description: self.new_description.as_deref(),
            metadata: self.new_metadata.as_ref(),
            fuzzy_match: self.new_fuzzy_match,
            values: self.new_values.as_deref(),
        };
        Ok(
            ApiRequest::new(Method::POST, entity_path(&self.workspace_id, &self.entity))
                .query_opt("append", self.append)
                .query_opt("include_audit", self.include_audit)
                .json(&body)?
                .headers(&self.headers),
        )
    }
}

/// Options for `DELETE /v1/workspaces/{workspace_id}/entities/{entity}`.
#[derive(Debug, Clone, Default)]
pub struct DeleteEntityOptions {
    pub workspace_id: String,
    pub entity: String,
    pub headers: HeaderList,
}

impl DeleteEntityOptions {
    pub fn new(workspace_id: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            entity: entity.into(),
            ..Default::default()
        }
    }
}

impl Operation for DeleteEntityOptions {
    type Output = ();
    const NAME: &'static str = "delete_entity";
    const EXPECTS_BODY: bool = false;

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        require("entity", &self.entity)?;
        Ok(
            ApiRequest::new(Method::DELETE, entity_path(&self.workspace_id, &self.entity))
                .headers(&self.headers),
        )
    }
}

/// Options for `GET /v1/workspaces/{workspace_id}/entities/{entity}/mentions`.
#[derive(Debug, Clone, Default)]
pub struct ListMentionsOptions {
    pub workspace_id: String,
    pub entity: String,
    pub export: Option<bool>,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl ListMentionsOptions {
    pub fn new(workspace_id: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            entity: entity.into(),
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

impl Operation for ListMentionsOptions {
    type Output = EntityMentionCollection;
    const NAME: &'static str = "list_mentions";

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        require("entity", &self.entity)?;
        let mut path = entity_path(&self.workspace_id, &self.entity);
        path.push("mentions".into());
        Ok(ApiRequest::new(Method::GET, path)
            .query_opt("export", self.export)
            .query_opt("include_audit", self.include_audit)
            .headers(&self.headers))
    }
}

impl_option_headers!(
    ListEntitiesOptions,
    CreateEntityOptions,
    GetEntityOptions,
    UpdateEntityOptions,
    DeleteEntityOptions,
    ListMentionsOptions,
);

/// Client for workspace entities.
#[derive(Clone)]
pub struct EntitiesClient {
    pub(crate) inner: Arc<ClientInner>,
}

impl EntitiesClient {
    pub async fn list(
        &self,
        opts: &ListEntitiesOptions,
    ) -> Result<DetailedResponse<EntityCollection>> {
        self.inner.execute(opts).await
    }

    /// Create an entity, optionally with its values. Succeeds with `201 Created`.
    pub async fn create(&self, opts: &CreateEntityOptions) -> Result<DetailedResponse<Entity>> {
        self.inner.execute(opts).await
    }

    pub async fn get(&self, opts: &GetEntityOptions) -> Result<DetailedResponse<Entity>> {
        self.inner.execute(opts).await
    }

    pub async fn update(&self, opts: &UpdateEntityOptions) -> Result<DetailedResponse<Entity>> {
        self.inner.execute(opts).await
    }

    pub async fn delete(&self, opts: &DeleteEntityOptions) -> Result<DetailedResponse<()>> {
        self.inner.execute(opts).await
    }

    /// List the intent examples that mention an entity.
    pub async fn mentions(
        &self,
        opts: &ListMentionsOptions,
    ) -> Result<DetailedResponse<EntityMentionCollection>> {
        self.inner.execute(opts).await
    }
}
