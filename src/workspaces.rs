//! Workspaces: containers for the intents, entities and dialog of one assistant.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
    client::ClientInner,
    core::{impl_option_headers, require, ApiRequest, Operation},
    counterexamples::Counterexample,
    dialog_nodes::DialogNode,
    entities::Entity,
    errors::Result,
    http::{DetailedResponse, HeaderList},
    intents::Intent,
    types::{string_enum, Metadata, Pagination, Webhook},
};

string_enum!(
    /// Training state of a workspace.
    WorkspaceStatus {
        Available => "Available",
        Failed => "Failed",
        NonExistent => "Non Existent",
        Processing => "Processing",
        Training => "Training",
        Unavailable => "Unavailable",
    }
);

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SystemSettingToggle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ToolingSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_generic_responses: Option<bool>,
}

/// Settings for offering the user a choice when several nodes match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisambiguationSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub none_of_the_above_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// `auto`, `high`, `medium_high`, `medium`, `medium_low` or `low`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub randomize: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_suggestions: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion_text_policy: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct WorkspaceSystemSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooling: Option<ToolingSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disambiguation: Option<DisambiguationSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub human_agent_assist: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spelling_suggestions: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spelling_auto_correct: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_entities: Option<SystemSettingToggle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub off_topic: Option<SystemSettingToggle>,
    /// Settings this crate does not model yet.
    #[serde(flatten)]
    pub extra: Metadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Workspace {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_nodes: Option<Vec<DialogNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterexamples: Option<Vec<Counterexample>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub learning_opt_out: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_settings: Option<WorkspaceSystemSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<WorkspaceStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhooks: Option<Vec<Webhook>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<Intent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<Entity>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct WorkspaceCollection {
    pub workspaces: Vec<Workspace>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Workspace content accepted by create and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkspaceContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialog_nodes: Option<Vec<DialogNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterexamples: Option<Vec<Counterexample>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_opt_out: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_settings: Option<WorkspaceSystemSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhooks: Option<Vec<Webhook>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<Intent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<Entity>>,
}

macro_rules! impl_workspace_content_setters {
    ($ty:ty) => {
        impl $ty {
            pub fn with_name(mut self, name: impl Into<String>) -> Self {
                self.content.name = Some(name.into());
                self
            }

            pub fn with_description(mut self, description: impl Into<String>) -> Self {
                self.content.description = Some(description.into());
                self
            }

            /// Language code such as `en`, `fr` or `zh-tw`.
            pub fn with_language(mut self, language: impl Into<String>) -> Self {
                self.content.language = Some(language.into());
                self
            }

            pub fn with_dialog_nodes(mut self, dialog_nodes: Vec<DialogNode>) -> Self {
                self.content.dialog_nodes = Some(dialog_nodes);
                self
            }

            pub fn with_counterexamples(mut self, counterexamples: Vec<Counterexample>) -> Self {
                self.content.counterexamples = Some(counterexamples);
                self
            }

            pub fn with_metadata(mut self, metadata: Metadata) -> Self {
                self.content.metadata = Some(metadata);
                self
            }

            pub fn with_learning_opt_out(mut self, learning_opt_out: bool) -> Self {
                self.content.learning_opt_out = Some(learning_opt_out);
                self
            }

            pub fn with_system_settings(mut self, system_settings: WorkspaceSystemSettings) -> Self {
                self.content.system_settings = Some(system_settings);
                self
            }

            pub fn with_webhooks(mut self, webhooks: Vec<Webhook>) -> Self {
                self.content.webhooks = Some(webhooks);
                self
            }

            pub fn with_intents(mut self, intents: Vec<Intent>) -> Self {
                self.content.intents = Some(intents);
                self
            }

            pub fn with_entities(mut self, entities: Vec<Entity>) -> Self {
                self.content.entities = Some(entities);
                self
            }

            pub fn with_include_audit(mut self, include_audit: bool) -> Self {
                self.include_audit = Some(include_audit);
                self
            }
        }
    };
}

fn workspaces_path() -> Vec<String> {
    vec!["v1".into(), "workspaces".into()]
}

pub(crate) fn workspace_path(workspace_id: &str) -> Vec<String> {
    let mut path = workspaces_path();
    path.push(workspace_id.into());
    path
}

/// Options for `GET /v1/workspaces`.
#[derive(Debug, Clone, Default)]
pub struct ListWorkspacesOptions {
    pub page_limit: Option<u32>,
    pub include_count: Option<bool>,
    pub sort: Option<String>,
    pub cursor: Option<String>,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl ListWorkspacesOptions {
    pub fn new() -> Self {
        Self::default()
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

impl Operation for ListWorkspacesOptions {
    type Output = WorkspaceCollection;
    const NAME: &'static str = "list_workspaces";

    fn build_request(&self) -> Result<ApiRequest> {
        Ok(ApiRequest::new(Method::GET, workspaces_path())
            .query_opt("page_limit", self.page_limit)
            .query_opt("include_count", self.include_count)
            .query_opt("sort", self.sort.as_deref())
            .query_opt("cursor", self.cursor.as_deref())
            .query_opt("include_audit", self.include_audit)
            .headers(&self.headers))
    }
}

/// Options for `POST /v1/workspaces`. Every content field is optional.
#[derive(Debug, Clone, Default)]
pub struct CreateWorkspaceOptions {
    pub content: WorkspaceContent,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl CreateWorkspaceOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

impl_workspace_content_setters!(CreateWorkspaceOptions);

impl Operation for CreateWorkspaceOptions {
    type Output = Workspace;
    const NAME: &'static str = "create_workspace";

    fn build_request(&self) -> Result<ApiRequest> {
        Ok(ApiRequest::new(Method::POST, workspaces_path())
            .query_opt("include_audit", self.include_audit)
            .json(&self.content)?
            .headers(&self.headers))
    }
}

/// Options for `GET /v1/workspaces/{workspace_id}`.
#[derive(Debug, Clone, Default)]
pub struct GetWorkspaceOptions {
    pub workspace_id: String,
    /// Include all intents, entities and dialog nodes.
    pub export: Option<bool>,
    pub include_audit: Option<bool>,
    /// `stable` keeps exported content in a deterministic order.
    pub sort: Option<String>,
    pub headers: HeaderList,
}

impl GetWorkspaceOptions {
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

    pub fn with_include_audit(mut self, include_audit: bool) -> Self {
        self.include_audit = Some(include_audit);
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }
}

impl Operation for GetWorkspaceOptions {
    type Output = Workspace;
    const NAME: &'static str = "get_workspace";

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        Ok(ApiRequest::new(Method::GET, workspace_path(&self.workspace_id))
            .query_opt("export", self.export)
            .query_opt("include_audit", self.include_audit)
            .query_opt("sort", self.sort.as_deref())
            .headers(&self.headers))
    }
}

/// Options for `POST /v1/workspaces/{workspace_id}`.
///
/// With `append` unset or `false`, any content array sent replaces the existing
/// one wholesale; with `append=true` new elements are merged in.
#[derive(Debug, Clone, Default)]
pub struct UpdateWorkspaceOptions {
    pub workspace_id: String,
    pub content: WorkspaceContent,
    pub append: Option<bool>,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl UpdateWorkspaceOptions {
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            ..Default::default()
        }
    }

    pub fn with_append(mut self, append: bool) -> Self {
        self.append = Some(append);
        self
    }
}

impl_workspace_content_setters!(UpdateWorkspaceOptions);

impl Operation for UpdateWorkspaceOptions {
    type Output = Workspace;
    const NAME: &'static str = "update_workspace";

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        Ok(
            ApiRequest::new(Method::POST, workspace_path(&self.workspace_id))
                .query_opt("append", self.append)
                .query_opt("include_audit", self.include_audit)
                .json(&self.content)?
                .headers(&self.headers),
        )
    }
}

/// Options for `DELETE /v1/workspaces/{workspace_id}`.
#[derive(Debug, Clone, Default)]
pub struct DeleteWorkspaceOptions {
    pub workspace_id: String,
    pub headers: HeaderList,
}

impl DeleteWorkspaceOptions {
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            ..Default::default()
        }
    }
}

impl Operation for DeleteWorkspaceOptions {
    type Output = ();
    const NAME: &'static str = "delete_workspace";
    const EXPECTS_BODY: bool = false;

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        Ok(
            ApiRequest::new(Method::DELETE, workspace_path(&self.workspace_id))
                .headers(&self.headers),
        )
    }
}

impl_option_headers!(
    ListWorkspacesOptions,
    CreateWorkspaceOptions,
    GetWorkspaceOptions,
    UpdateWorkspaceOptions,
    DeleteWorkspaceOptions,
);

/// Client for workspace management.
#[derive(Clone)]
pub struct WorkspacesClient {
    pub(crate) inner: Arc<ClientInner>,
}

impl WorkspacesClient {
    /// List the workspaces of the service instance.
    pub async fn list(
        &self,
        opts: &ListWorkspacesOptions,
    ) -> Result<DetailedResponse<WorkspaceCollection>> {
        self.inner.execute(opts).await
    }

    /// Create a workspace, optionally with its full content. Succeeds with `201 Created`.
    pub async fn create(
        &self,
        opts: &CreateWorkspaceOptions,
    ) -> Result<DetailedResponse<Workspace>> {
        self.inner.execute(opts).await
    }

    /// Get a workspace; with `export=true` the response includes all content.
    pub async fn get(&self, opts: &GetWorkspaceOptions) -> Result<DetailedResponse<Workspace>> {
        self.inner.execute(opts).await
    }

    pub async fn update(
        &self,
        opts: &UpdateWorkspaceOptions,
    ) -> Result<DetailedResponse<Workspace>> {
        self.inner.execute(opts).await
    }

    pub async fn delete(&self, opts: &DeleteWorkspaceOptions) -> Result<DetailedResponse<()>> {
        self.inner.execute(opts).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_with_space_decodes() {
        let ws: Workspace = serde_json::from_value(serde_json::json!({
            "name": "pizza",
            "language": "en",
            "workspace_id": "abc",
            "learning_opt_out": true,
            "status": "Non Existent",
            "system_settings": {
                "disambiguation": { "enabled": true, "sensitivity": "high" },
                "nlp": { "model": "baseline" }
            }
        }))
        .unwrap();
        assert_eq!(ws.status, Some(WorkspaceStatus::NonExistent));
        assert!(ws.learning_opt_out);
        let settings = ws.system_settings.unwrap();
        assert_eq!(
            settings.disambiguation.unwrap().sensitivity.as_deref(),
            Some("high")
        );
        assert!(settings.extra.contains_key("nlp"));
    }

    #[test]
    fn create_body_only_contains_set_fields() {
        let req = CreateWorkspaceOptions::new()
            .with_name("pizza")
            .with_language("en")
            .with_intents(vec![Intent::new("order").with_examples(["I want a pizza"])])
            .with_include_audit(true)
            .build_request()
            .unwrap();
        assert_eq!(req.path(), "/v1/workspaces");
        assert_eq!(req.query_pairs(), &[("include_audit", "true".to_string())]);
        assert_eq!(
            req.body(),
            Some(&serde_json::json!({
                "name": "pizza",
                "language": "en",
                "intents": [{ "intent": "order", "examples": [{ "text": "I want a pizza" }] }]
            }))
        );
    }

    #[test]
    fn get_passes_export_and_sort() {
        let req = GetWorkspaceOptions::new("abc")
            .with_export(true)
            .with_sort("stable")
            .build_request()
            .unwrap();
        assert_eq!(
            req.query_pairs(),
            &[
                ("export", "true".to_string()),
                ("sort", "stable".to_string())
            ]
        );
    }
}
