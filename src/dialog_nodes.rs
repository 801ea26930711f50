//! Dialog nodes: the conversation-flow graph of a workspace.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
    client::ClientInner,
    core::{impl_option_headers, require, ApiRequest, Operation},
    errors::Result,
    http::{DetailedResponse, HeaderList},
    types::{string_enum, Metadata, Pagination},
};

string_enum!(DialogNodeType {
    Standard => "standard",
    EventHandler => "event_handler",
    Frame => "frame",
    Slot => "slot",
    ResponseCondition => "response_condition",
    Folder => "folder",
});

string_enum!(
    /// Event an `event_handler` node reacts to.
    EventName {
        Focus => "focus",
        Input => "input",
        Filled => "filled",
        Validate => "validate",
        FilledMultiple => "filled_multiple",
        Generic => "generic",
        Nomatch => "nomatch",
        NomatchResponsesDepleted => "nomatch_responses_depleted",
        DigressionReturnPrompt => "digression_return_prompt",
    }
);

string_enum!(DigressIn {
    NotAvailable => "not_available",
    Returns => "returns",
    DoesNotReturn => "does_not_return",
});

string_enum!(DigressOut {
    AllowReturning => "allow_returning",
    AllowAll => "allow_all",
    AllowAllNeverReturn => "allow_all_never_return",
});

string_enum!(DigressOutSlots {
    NotAllowed => "not_allowed",
    AllowReturning => "allow_returning",
    AllowAll => "allow_all",
});

string_enum!(NextStepBehavior {
    GetUserInput => "get_user_input",
    SkipUserInput => "skip_user_input",
    JumpTo => "jump_to",
});

string_enum!(
    /// Which part of the target node a `jump_to` continues with.
    SelectorKind {
        Condition => "condition",
        Client => "client",
        UserInput => "user_input",
        Body => "body",
    }
);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DialogNodeNextStep {
    pub behavior: NextStepBehavior,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_node: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<SelectorKind>,
}

impl DialogNodeNextStep {
    pub fn jump_to(dialog_node: impl Into<String>, selector: SelectorKind) -> Self {
        Self {
            behavior: NextStepBehavior::JumpTo,
            dialog_node: Some(dialog_node.into()),
            selector: Some(selector),
        }
    }
}

string_enum!(DialogNodeActionType {
    Client => "client",
    Server => "server",
    CloudFunction => "cloud_function",
    WebAction => "web_action",
    Webhook => "webhook",
});

/// Programmatic call made when a node is visited.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DialogNodeAction {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub action_type: Option<DialogNodeActionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Metadata>,
    pub result_variable: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DialogNodeOutputModifiers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
}

/// Response defined on a node.
///
/// `generic` entries are kept as raw JSON: the set of response types grows over time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DialogNodeOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic: Option<Vec<serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integrations: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<DialogNodeOutputModifiers>,
    #[serde(flatten)]
    pub extra: Metadata,
}

impl DialogNodeOutput {
    /// A single `text` response cycling through `texts` in order.
    pub fn text<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<serde_json::Value> = texts
            .into_iter()
            .map(|t| serde_json::json!({ "text": t.into() }))
            .collect();
        Self {
            generic: Some(vec![serde_json::json!({
                "response_type": "text",
                "values": values,
                "selection_policy": "sequential",
            })]),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DialogNode {
    pub dialog_node: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Condition expression, e.g. `#greeting && @size`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_sibling: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<DialogNodeOutput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_step: Option<DialogNodeNextStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<DialogNodeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<EventName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<DialogNodeAction>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digress_in: Option<DigressIn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digress_out: Option<DigressOut>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digress_out_slots: Option<DigressOutSlots>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disambiguation_opt_out: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl DialogNode {
    pub fn new(dialog_node: impl Into<String>) -> Self {
        Self {
            dialog_node: dialog_node.into(),
            ..Default::default()
        }
    }

    pub fn with_conditions(mut self, conditions: impl Into<String>) -> Self {
        self.conditions = Some(conditions.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_output(mut self, output: DialogNodeOutput) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_previous_sibling(mut self, previous_sibling: impl Into<String>) -> Self {
        self.previous_sibling = Some(previous_sibling.into());
        self
    }

    pub fn with_node_type(mut self, node_type: DialogNodeType) -> Self {
        self.node_type = Some(node_type);
        self
    }

    pub fn with_next_step(mut self, next_step: DialogNodeNextStep) -> Self {
        self.next_step = Some(next_step);
        self
    }

    pub fn with_context(mut self, context: Metadata) -> Self {
        self.context = Some(context);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DialogNodeCollection {
    pub dialog_nodes: Vec<DialogNode>,
    #[serde(default)]
    pub pagination: Pagination,
}

fn dialog_nodes_path(workspace_id: &str) -> Vec<String> {
    vec![
        "v1".into(),
        "workspaces".into(),
        workspace_id.into(),
        "dialog_nodes".into(),
    ]
}

fn dialog_node_path(workspace_id: &str, dialog_node: &str) -> Vec<String> {
    let mut path = dialog_nodes_path(workspace_id);
    path.push(dialog_node.into());
    path
}

/// Options for `GET /v1/workspaces/{workspace_id}/dialog_nodes`.
#[derive(Debug, Clone, Default)]
pub struct ListDialogNodesOptions {
    pub workspace_id: String,
    pub page_limit: Option<u32>,
    pub include_count: Option<bool>,
    pub sort: Option<String>,
    pub cursor: Option<String>,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl ListDialogNodesOptions {
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

impl Operation for ListDialogNodesOptions {
    type Output = DialogNodeCollection;
    const NAME: &'static str = "list_dialog_nodes";

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        Ok(
            ApiRequest::new(Method::GET, dialog_nodes_path(&self.workspace_id))
                .query_opt("page_limit", self.page_limit)
                .query_opt("include_count", self.include_count)
                .query_opt("sort", self.sort.as_deref())
                .query_opt("cursor", self.cursor.as_deref())
                .query_opt("include_audit", self.include_audit)
                .headers(&self.headers),
        )
    }
}

/// Options for `POST /v1/workspaces/{workspace_id}/dialog_nodes`.
#[derive(Debug, Clone, Default)]
pub struct CreateDialogNodeOptions {
    pub workspace_id: String,
    pub node: DialogNode,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl CreateDialogNodeOptions {
    pub fn new(workspace_id: impl Into<String>, node: DialogNode) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            node,
            ..Default::default()
        }
    }

    pub fn with_include_audit(mut self, include_audit: bool) -> Self {
        self.include_audit = Some(include_audit);
        self
    }
}

impl Operation for CreateDialogNodeOptions {
    type Output = DialogNode;
    const NAME: &'static str = "create_dialog_node";

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        require("dialog_node", &self.node.dialog_node)?;
        Ok(
            ApiRequest::new(Method::POST, dialog_nodes_path(&self.workspace_id))
                .query_opt("include_audit", self.include_audit)
                .json(&self.node)?
                .headers(&self.headers),
        )
    }
}

/// Options for `GET /v1/workspaces/{workspace_id}/dialog_nodes/{dialog_node}`.
#[derive(Debug, Clone, Default)]
pub struct GetDialogNodeOptions {
    pub workspace_id: String,
    pub dialog_node: String,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl GetDialogNodeOptions {
    pub fn new(workspace_id: impl Into<String>, dialog_node: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            dialog_node: dialog_node.into(),
            ..Default::default()
        }
    }

    pub fn with_include_audit(mut self, include_audit: bool) -> Self {
        self.include_audit = Some(include_audit);
        self
    }
}

impl Operation for GetDialogNodeOptions {
    type Output = DialogNode;
    const NAME: &'static str = "get_dialog_node";

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        require("dialog_node", &self.dialog_node)?;
        Ok(ApiRequest::new(
            Method::GET,
            dialog_node_path(&self.workspace_id, &self.dialog_node),
        )
        .query_opt("include_audit", self.include_audit)
        .headers(&self.headers))
    }
}

/// Options for `POST /v1/workspaces/{workspace_id}/dialog_nodes/{dialog_node}`.
///
/// Only the `new_*` fields that are set are sent; everything else is left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateDialogNodeOptions {
    pub workspace_id: String,
    pub dialog_node: String,
    pub new_dialog_node: Option<String>,
    pub new_description: Option<String>,
    pub new_conditions: Option<String>,
    pub new_parent: Option<String>,
    pub new_previous_sibling: Option<String>,
    pub new_output: Option<DialogNodeOutput>,
    pub new_context: Option<Metadata>,
    pub new_metadata: Option<Metadata>,
    pub new_next_step: Option<DialogNodeNextStep>,
    pub new_title: Option<String>,
    pub new_type: Option<DialogNodeType>,
    pub new_event_name: Option<EventName>,
    pub new_variable: Option<String>,
    pub new_actions: Option<Vec<DialogNodeAction>>,
    pub new_digress_in: Option<DigressIn>,
    pub new_digress_out: Option<DigressOut>,
    pub new_digress_out_slots: Option<DigressOutSlots>,
    pub new_user_label: Option<String>,
    pub new_disambiguation_opt_out: Option<bool>,
    pub new_disabled: Option<bool>,
    pub include_audit: Option<bool>,
    pub headers: HeaderList,
}

impl UpdateDialogNodeOptions {
    pub fn new(workspace_id: impl Into<String>, dialog_node: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            dialog_node: dialog_node.into(),
            ..Default::default()
        }
    }

    pub fn with_new_dialog_node(mut self, new_dialog_node: impl Into<String>) -> Self {
        self.new_dialog_node = Some(new_dialog_node.into());
        self
    }

    pub fn with_new_conditions(mut self, new_conditions: impl Into<String>) -> Self {
        self.new_conditions = Some(new_conditions.into());
        self
    }

    pub fn with_new_title(mut self, new_title: impl Into<String>) -> Self {
        self.new_title = Some(new_title.into());
        self
    }

    pub fn with_new_output(mut self, new_output: DialogNodeOutput) -> Self {
        self.new_output = Some(new_output);
        self
    }

    pub fn with_new_next_step(mut self, new_next_step: DialogNodeNextStep) -> Self {
        self.new_next_step = Some(new_next_step);
        self
    }

    pub fn with_new_description(mut self, new_description: impl Into<String>) -> Self {
        self.new_description = Some(new_description.into());
        self
    }

    pub fn with_new_parent(mut self, new_parent: impl Into<String>) -> Self {
        self.new_parent = Some(new_parent.into());
        self
    }

    pub fn with_new_previous_sibling(mut self, new_previous_sibling: impl Into<String>) -> Self {
        self.new_previous_sibling = Some(new_previous_sibling.into());
        self
    }

    pub fn with_new_context(mut self, new_context: Metadata) -> Self {
        self.new_context = Some(new_context);
        self
    }

    pub fn with_new_metadata(mut self, new_metadata: Metadata) -> Self {
        self.new_metadata = Some(new_metadata);
        self
    }

    pub fn with_new_type(mut self, new_type: DialogNodeType) -> Self {
        self.new_type = Some(new_type);
        self
    }

    pub fn with_new_event_name(mut self, new_event_name: EventName) -> Self {
        self.new_event_name = Some(new_event_name);
        self
    }

    pub fn with_new_variable(mut self, new_variable: impl Into<String>) -> Self {
        self.new_variable = Some(new_variable.into());
        self
    }

    pub fn with_new_actions(mut self, new_actions: Vec<DialogNodeAction>) -> Self {
        self.new_actions = Some(new_actions);
        self
    }

    pub fn with_new_digress_in(mut self, new_digress_in: DigressIn) -> Self {
        self.new_digress_in = Some(new_digress_in);
        self
    }

    pub fn with_new_digress_out(mut self, new_digress_out: DigressOut) -> Self {
        self.new_digress_out = Some(new_digress_out);
        self
    }

    pub fn with_new_digress_out_slots(mut self, new_digress_out_slots: DigressOutSlots) -> Self {
        self.new_digress_out_slots = Some(new_digress_out_slots);
        self
    }

    pub fn with_new_user_label(mut self, new_user_label: impl Into<String>) -> Self {
        self.new_user_label = Some(new_user_label.into());
        self
    }

    pub fn with_new_disambiguation_opt_out(mut self, new_disambiguation_opt_out: bool) -> Self {
        self.new_disambiguation_opt_out = Some(new_disambiguation_opt_out);
        self
    }

    pub fn with_new_disabled(mut self, new_disabled: bool) -> Self {
        self.new_disabled = Some(new_disabled);
        self
    }

    pub fn with_include_audit(mut self, include_audit: bool) -> Self {
        self.include_audit = Some(include_audit);
        self
    }
}

#[derive(Serialize)]
struct DialogNodeChanges<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    dialog_node: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    conditions: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    previous_sibling: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<&'a DialogNodeOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<&'a Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_step: Option<&'a DialogNodeNextStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    node_type: Option<&'a DialogNodeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    event_name: Option<&'a EventName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    variable: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    actions: Option<&'a [DialogNodeAction]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    digress_in: Option<&'a DigressIn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    digress_out: Option<&'a DigressOut>,
    #[serde(skip_serializing_if = "Option::is_none")]
    digress_out_slots: Option<&'a DigressOutSlots>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_label: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    disambiguation_opt_out: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    disabled: Option<bool>,
}

impl Operation for UpdateDialogNodeOptions {
    type Output = DialogNode;
    const NAME: &'static str = "update_dialog_node";

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        require("dialog_node", &self.dialog_node)?;
        let body = DialogNodeChanges {
            dialog_node: self.new_dialog_node.as_deref(),
            description: self.new_description.as_deref(),
            conditions: self.new_conditions.as_deref(),
            parent: self.new_parent.as_deref(),
            previous_sibling: self.new_previous_sibling.as_deref(),
            output: self.new_output.as_ref(),
            context: self.new_context.as_ref(),
            metadata: self.new_metadata.as_ref(),
            next_step: self.new_next_step.as_ref(),
            title: self.new_title.as_deref(),
            node_type: self.new_type.as_ref(),
            event_name: self.new_event_name.as_ref(),
            variable: self.new_variable.as_deref(),
            actions: self.new_actions.as_deref(),
            digress_in: self.new_digress_in.as_ref(),
            digress_out: self.new_digress_out.as_ref(),
            digress_out_slots: self.new_digress_out_slots.as_ref(),
            user_label: self.new_user_label.as_deref(),
            disambiguation_opt_out: self.new_disambiguation_opt_out,
            disabled: self.new_disabled,
        };
        Ok(ApiRequest::new(
            Method::POST,
            dialog_node_path(&self.workspace_id, &self.dialog_node),
        )
        .query_opt("include_audit", self.include_audit)
        .json(&body)?
        .headers(&self.headers))
    }
}

/// Options for `DELETE /v1/workspaces/{workspace_id}/dialog_nodes/{dialog_node}`.
#[derive(Debug, Clone, Default)]
pub struct DeleteDialogNodeOptions {
    pub workspace_id: String,
    pub dialog_node: String,
    pub headers: HeaderList,
}

impl DeleteDialogNodeOptions {
    pub fn new(workspace_id: impl Into<String>, dialog_node: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            dialog_node: dialog_node.into(),
            ..Default::default()
        }
    }
}

impl Operation for DeleteDialogNodeOptions {
    type Output = ();
    const NAME: &'static str = "delete_dialog_node";
    const EXPECTS_BODY: bool = false;

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        require("dialog_node", &self.dialog_node)?;
        Ok(ApiRequest::new(
            Method::DELETE,
            dialog_node_path(&self.workspace_id, &self.dialog_node),
        )
        .headers(&self.headers))
    }
}

impl_option_headers!(
    ListDialogNodesOptions,
    CreateDialogNodeOptions,
    GetDialogNodeOptions,
    UpdateDialogNodeOptions,
    DeleteDialogNodeOptions,
);

/// Client for dialog nodes.
#[derive(Clone)]
pub struct DialogNodesClient {
    pub(crate) inner: Arc<ClientInner>,
}

impl DialogNodesClient {
    pub async fn list(
        &self,
        opts: &ListDialogNodesOptions,
    ) -> Result<DetailedResponse<DialogNodeCollection>> {
        self.inner.execute(opts).await
    }

    /// Create a dialog node. Succeeds with `201 Created`.
    pub async fn create(
        &self,
        opts: &CreateDialogNodeOptions,
    ) -> Result<DetailedResponse<DialogNode>> {
        self.inner.execute(opts).await
    }

    pub async fn get(&self, opts: &GetDialogNodeOptions) -> Result<DetailedResponse<DialogNode>> {
        self.inner.execute(opts).await
    }

    pub async fn update(
        &self,
        opts: &UpdateDialogNodeOptions,
    ) -> Result<DetailedResponse<DialogNode>> {
        self.inner.execute(opts).await
    }

    pub async fn delete(&self, opts: &DeleteDialogNodeOptions) -> Result<DetailedResponse<()>> {
        self.inner.execute(opts).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_round_trips_with_unknown_output_fields() {
        let raw = serde_json::json!({
            "dialog_node": "welcome",
            "conditions": "welcome",
            "type": "standard",
            "output": {
                "generic": [{ "response_type": "text", "values": [{ "text": "Hi" }] }],
                "text": "legacy"
            },
            "next_step": { "behavior": "jump_to", "dialog_node": "menu", "selector": "body" },
            "digress_in": "does_not_return",
            "created": "2020-01-02T03:04:05.000Z"
        });
        let node: DialogNode = serde_json::from_value(raw).unwrap();
        assert_eq!(node.node_type, Some(DialogNodeType::Standard));
        assert_eq!(node.digress_in, Some(DigressIn::DoesNotReturn));
        let output = node.output.as_ref().unwrap();
        assert_eq!(output.extra.get("text"), Some(&serde_json::json!("legacy")));
        assert_eq!(
            node.next_step,
            Some(DialogNodeNextStep::jump_to("menu", SelectorKind::Body))
        );
        assert!(node.created.is_some());
    }

    #[test]
    fn create_sends_node_without_empty_fields() {
        let node = DialogNode::new("greet")
            .with_conditions("#hello")
            .with_output(DialogNodeOutput::text(["Hello!"]));
        let req = CreateDialogNodeOptions::new("ws", node).build_request().unwrap();
        assert_eq!(req.path(), "/v1/workspaces/ws/dialog_nodes");
        assert_eq!(
            req.body(),
            Some(&serde_json::json!({
                "dialog_node": "greet",
                "conditions": "#hello",
                "output": {
                    "generic": [{
                        "response_type": "text",
                        "values": [{ "text": "Hello!" }],
                        "selection_policy": "sequential"
                    }]
                }
            }))
        );
    }

    #[test]
    fn update_renames_new_fields() {
        let req = UpdateDialogNodeOptions::new("ws", "greet")
            .with_new_dialog_node("greeting")
            .with_new_disabled(true)
            .build_request()
            .unwrap();
        assert_eq!(
            req.body(),
            Some(&serde_json::json!({ "dialog_node": "greeting", "disabled": true }))
        );

        let req = UpdateDialogNodeOptions::new("ws", "size_slot")
            .with_new_type(DialogNodeType::Slot)
            .with_new_parent("order")
            .with_new_variable("$size")
            .with_new_event_name(EventName::Input)
            .with_new_digress_in(DigressIn::Returns)
            .with_new_digress_out(DigressOut::AllowAll)
            .with_new_digress_out_slots(DigressOutSlots::NotAllowed)
            .with_new_user_label("Pick a size")
            .with_new_disambiguation_opt_out(true)
            .build_request()
            .unwrap();
        assert_eq!(
            req.body(),
            Some(&serde_json::json!({
                "parent": "order",
                "type": "slot",
                "event_name": "input",
                "variable": "$size",
                "digress_in": "returns",
                "digress_out": "allow_all",
                "digress_out_slots": "not_allowed",
                "user_label": "Pick a size",
                "disambiguation_opt_out": true
            }))
        );
    }

    #[test]
    fn unrecognized_enum_values_survive_a_round_trip() {
        let raw = serde_json::json!({
            "dialog_node": "n1",
            "type": "search_skill",
            "digress_in": "some_new_mode",
            "next_step": { "behavior": "reprompt", "selector": "body" },
            "actions": [{ "name": "lookup", "type": "integration", "result_variable": "out" }]
        });
        let node: DialogNode = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(
            node.node_type,
            Some(DialogNodeType::Unknown("search_skill".into()))
        );
        assert_eq!(node.digress_in.as_ref().map(DigressIn::as_str), Some("some_new_mode"));
        assert_eq!(serde_json::to_value(&node).unwrap(), raw);

        let req = CreateDialogNodeOptions::new("ws", node).build_request().unwrap();
        assert_eq!(req.body(), Some(&raw));
    }

    #[test]
    fn create_requires_node_id() {
        assert!(CreateDialogNodeOptions::new("ws", DialogNode::default())
            .build_request()
            .is_err());
    }
}
