//! Entity values, each recognized through synonyms or regular-expression patterns.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
    client::ClientInner,
    core::{impl_option_headers, require, ApiRequest, Operation},
    entities::entity_path,
    errors::Result,
    http::{DetailedResponse, HeaderList},
    types::{string_enum, Metadata, Pagination},
};

string_enum!(
    /// How a value is recognized in user input.
    ValueType {
        Synonyms => "synonyms",
        Patterns => "patterns",
    }
);

/// A value of an entity (named `Value` by the service).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EntityValue {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<ValueType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl EntityValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn synonyms<I, S>(value: impl Into<String>, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            value: value.into(),
            value_type: Some(ValueType::Synonyms),
            synonyms: Some(synonyms.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }

    pub fn patterns<I, S>(value: impl Into<String>, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            value: value.into(),
            value_type: Some(ValueType::Patterns),
            patterns: Some(patterns.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ValueCollection {
    pub values: Vec<EntityValue>,
    #[serde(default)]
    pub pagination: Pagination,
}

pub(crate) fn value_path(workspace_id: &str, entity: &str, value: &str) -> Vec<String> {
    let mut path = values_path(workspace_id, entity);
    path.push(value.into());
    path
}

fn values_path(workspace_id: &str, entity: &str) -> Vec<String> {
    let mut path = entity_path(workspace_id, entity);
    path.push("values".into());
    path
}

#[derive(Serialize)]
struct ValueBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a Metadata>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    value_type: Option<ValueType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    synonyms: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    patterns: Option<&'a [String]>,
}

/// Options for `GET /v1/workspaces/{workspace_id}/entities/{entity}/values`.
#[derive(Debug, Clone, Default)]
pub struct ListValuesOptions {
    pub workspace_id: String,
    pub entity: String,
    /// Include each value's synonyms and patterns.
    pub export: Option<bool>,
    pub page_limit: Option<u32>,
    pub include_count: Option<bool>,
    pub sort: Option<String>,
    pub cursor: Option<String>,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl ListValuesOptions {
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

impl Operation for ListValuesOptions {
    type Output = ValueCollection;
    const NAME: &'static str = "list_values";

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        require("entity", &self.entity)?;
        Ok(
            ApiRequest::new(Method::GET, values_path(&self.workspace_id, &self.entity))
                .query_opt("export", self.export)
                .query_opt("page_limit", self.page_limit)
                .query_opt("include_count", self.include_count)
                .query_opt("sort", self.sort.as_deref())
                .query_opt("cursor", self.cursor.as_deref())
                .query_opt("include_audit", self.include_audit)
                .headers(&self.headers),
        )
    }
}

/// Options for `POST /v1/workspaces/{workspace_id}/entities/{entity}/values`.
#[derive(Debug, Clone, Default)]
pub struct CreateValueOptions {
    pub workspace_id: String,
    pub entity: String,
    pub value: String,
    pub metadata: Option<Metadata>,
    pub value_type: Option<ValueType>,
    pub synonyms: Option<Vec<String>>,
    pub patterns: Option<Vec<String>>,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl CreateValueOptions {
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

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_synonyms(mut self, synonyms: Vec<String>) -> Self {
        self.value_type = Some(ValueType::Synonyms);
        self.synonyms = Some(synonyms);
        self
    }

    pub fn with_patterns(mut self, patterns: Vec<String>) -> Self {
        self.value_type = Some(ValueType::Patterns);
        self.patterns = Some(patterns);
        self
    }

    pub fn with_include_audit(mut self, include_audit: bool) -> Self {
        self.include_audit = Some(include_audit);
        self
    }
}

impl Operation for CreateValueOptions {
    type Output = EntityValue;
    const NAME: &'static str = "create_value";

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        require("entity", &self.entity)?;
        require("value", &self.value)?;
        let body = ValueBody {
            value: Some(&self.value),
            metadata: self.metadata.as_ref(),
            value_type: self.value_type.clone(),
            synonyms: self.synonyms.as_deref(),
            patterns: self.patterns.as_deref(),
        };
        Ok(
            ApiRequest::new(Method::POST, values_path(&self.workspace_id, &self.entity))
                .query_opt("include_audit", self.include_audit)
                .json(&body)?
                .headers(&self.headers),
        )
    }
}

/// Options for `GET /v1/workspaces/{workspace_id}/entities/{entity}/values/{value}`.
#[derive(Debug, Clone, Default)]
pub struct GetValueOptions {
    pub workspace_id: String,
    pub entity: String,
    pub value: String,
    pub export: Option<bool>,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl GetValueOptions {
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

    pub fn with_export(mut self, export: bool) -> Self {
        self.export = Some(export);
        self
    }

    pub fn with_include_audit(mut self, include_audit: bool) -> Self {
        self.include_audit = Some(include_audit);
        self
    }
}

impl Operation for GetValueOptions {
    type Output = EntityValue;
    const NAME: &'static str = "get_value";

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        require("entity", &self.entity)?;
        require("value", &self.value)?;
        Ok(ApiRequest::new(
            Method::GET,
            value_path(&self.workspace_id, &self.entity, &self.value),
        )
        .query_opt("export", self.export)
        .query_opt("include_audit", self.include_audit)
        .headers(&self.headers))
    }
}

/// Options for `POST /v1/workspaces/{workspace_id}/entities/{entity}/values/{value}`.
///
/// With `append` unset or `false`, `new_synonyms`/`new_patterns` replace the
/// existing lists; with `append=true` they are added to them.
#[derive(Debug, Clone, Default)]
pub struct UpdateValueOptions {
    pub workspace_id: String,
    pub entity: String,
    pub value: String,
    pub new_value: Option<String>,
    pub new_metadata: Option<Metadata>,
    pub new_type: Option<ValueType>,
    pub new_synonyms: Option<Vec<String>>,
    pub new_patterns: Option<Vec<String>>,
    pub append: Option<bool>,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl UpdateValueOptions {
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

    pub fn with_new_value(mut self, new_value: impl Into<String>) -> Self {
        self.new_value = Some(new_value.into());
        self
    }

    pub fn with_new_metadata(mut self, new_metadata: Metadata) -> Self {
        self.new_metadata = Some(new_metadata);
        self
    }

    pub fn with_new_type(mut self, new_type: ValueType) -> Self {
        self.new_type = Some(new_type);
        self
    }

    pub fn with_new_synonyms(mut self, new_synonyms: Vec<String>) -> Self {
        self.new_synonyms = Some(new_synonyms);
        self
    }

    pub fn with_new_patterns(mut self, new_patterns: Vec<String>) -> Self {
        self.new_patterns = Some(new_patterns);
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

impl Operation for UpdateValueOptions {
    type Output = EntityValue;
    const NAME: &'static str = "update_value";

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        require("entity", &self.entity)?;
        require("value", &self.value)?;
        let body = ValueBody {
            value: self.new_value.as_deref(),
            metadata: self.new_metadata.as_ref(),
            value_type: self.new_type.clone(),
            synonyms: self.new_synonyms.as_deref(),
            patterns: self.new_patterns.as_deref(),
        };
        Ok(ApiRequest::new(
            Method::POST,
            value_path(&self.workspace_id, &self.entity, &self.value),
        )
        .query_opt("append", self.append)
        .query_opt("include_audit", self.include_audit)
        .json(&body)?
        .headers(&self.headers))
    }
}

/// Options for `DELETE /v1/workspaces/{workspace_id}/entities/{entity}/values/{value}`.
#[derive(Debug, Clone, Default)]
pub struct DeleteValueOptions {
    pub workspace_id: String,
    pub entity: String,
    pub value: String,
    pub headers: HeaderList,
}

impl DeleteValueOptions {
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
}

impl Operation for DeleteValueOptions {
    type Output = ();
    const NAME: &'static str = "delete_value";
    const EXPECTS_BODY: bool = false;

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        require("entity", &self.entity)?;
        require("value", &self.value)?;
        Ok(ApiRequest::new(
            Method::DELETE,
            value_path(&self.workspace_id, &self.entity, &self.value),
        )
        .headers(&self.headers))
    }
}

impl_option_headers!(
    ListValuesOptions,
    CreateValueOptions,
    GetValueOptions,
    UpdateValueOptions,
    DeleteValueOptions,
);

/// Client for the values of an entity.
#[derive(Clone)]
pub struct ValuesClient {
    pub(crate) inner: Arc<ClientInner>,
}

impl ValuesClient {
    pub async fn list(&self, opts: &ListValuesOptions) -> Result<DetailedResponse<ValueCollection>> {
        self.inner.execute(opts).await
    }

    pub async fn create(
        &self,
        opts: &CreateValueOptions,
    ) -> Result<DetailedResponse<EntityValue>> {
        self.inner.execute(opts).await
    }

    pub async fn get(&self, opts: &GetValueOptions) -> Result<DetailedResponse<EntityValue>> {
        self.inner.execute(opts).await
    }

    pub async fn update(
        &self,
        opts: &UpdateValueOptions,
    ) -> Result<DetailedResponse<EntityValue>> {
        self.inner.execute(opts).await
    }

    pub async fn delete(&self, opts: &DeleteValueOptions) -> Result<DetailedResponse<()>> {
        self.inner.execute(opts).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_value_type_decodes() {
        let value: EntityValue =
            serde_json::from_str(r#"{"value":"x","type":"regex_v2"}"#).unwrap();
        assert_eq!(value.value_type, Some(ValueType::Unknown("regex_v2".into())));
        assert_eq!(
            serde_json::to_value(&value).unwrap()["type"],
            serde_json::json!("regex_v2")
        );
    }

    #[test]
    fn update_appends_patterns() {
        let req = UpdateValueOptions::new("ws", "zip", "us")
            .with_new_type(ValueType::Patterns)
            .with_new_patterns(vec![r"\d{5}".into()])
            .with_append(true)
            .build_request()
            .unwrap();
        assert_eq!(req.path(), "/v1/workspaces/ws/entities/zip/values/us");
        assert_eq!(req.query_pairs(), &[("append", "true".to_string())]);
        assert_eq!(
            req.body(),
            Some(&serde_json::json!({ "type": "patterns", "patterns": [r"\d{5}"] }))
        );
    }
}
