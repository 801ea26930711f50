//! Conversation turns: send user input to a workspace and read the dialog's reply.
//!
//! The service keeps no conversation state between calls. Each response carries a
//! [`Context`] that the caller passes back on the next turn.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
    core::{impl_option_headers, require, ApiRequest, Operation},
    dialog_nodes::DialogNodeAction,
    errors::Result,
    http::HeaderList,
    types::Metadata,
    workspaces::workspace_path,
};

/// User input for one turn.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MessageInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spelling_suggestions: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spelling_auto_correct: Option<bool>,
    /// Echoed back by the service, e.g. `original_text` and `suggested_text`.
    #[serde(flatten)]
    pub extra: Metadata,
}

impl MessageInput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageContextMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Conversation state. Dialog context variables live in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Context {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    /// Opaque dialog bookkeeping; send it back unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MessageContextMetadata>,
    #[serde(flatten)]
    pub extra: Metadata,
}

impl Context {
    /// Set a context variable visible to dialog conditions as `$name`.
    pub fn with_variable(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(name.into(), value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RuntimeIntent {
    pub intent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CaptureGroup {
    pub group: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<i64>>,
}

/// An entity value recognized in the input.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RuntimeEntity {
    pub entity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<i64>>,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<CaptureGroup>>,
    /// `interpretation`, `alternatives`, `role` and other system-entity details.
    #[serde(flatten)]
    pub extra: Metadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DialogNodeVisitedDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_node: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogMessage {
    /// `info`, `error` or `warn`.
    pub level: String,
    pub msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Metadata>,
}

/// Dialog output for one turn.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OutputData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes_visited: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes_visited_details: Option<Vec<DialogNodeVisitedDetails>>,
    #[serde(default)]
    pub log_messages: Vec<LogMessage>,
    #[serde(default)]
    pub text: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic: Option<Vec<serde_json::Value>>,
    #[serde(flatten)]
    pub extra: Metadata,
}

/// Request body of the message operation; also recorded in conversation logs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MessageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<MessageInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<RuntimeIntent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<RuntimeEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_intents: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub input: MessageInput,
    #[serde(default)]
    pub intents: Vec<RuntimeIntent>,
    #[serde(default)]
    pub entities: Vec<RuntimeEntity>,
    #[serde(default)]
    pub alternate_intents: Option<bool>,
    #[serde(default)]
    pub context: Context,
    #[serde(default)]
    pub output: OutputData,
    #[serde(default)]
    pub actions: Option<Vec<DialogNodeAction>>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl MessageResponse {
    /// Highest-confidence intent, if any was recognized.
    pub fn top_intent(&self) -> Option<&RuntimeIntent> {
        self.intents.first()
    }
}

/// Options for `POST /v1/workspaces/{workspace_id}/message`.
#[derive(Debug, Clone, Default)]
pub struct MessageOptions {
    pub workspace_id: String,
    pub request: MessageRequest,
    /// Include `nodes_visited_details` in the output.
    pub nodes_visited_details: Option<bool>,
    pub headers: HeaderList,
}

impl MessageOptions {
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            ..Default::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.request.input = Some(MessageInput::text(text));
        self
    }

    pub fn with_input(mut self, input: MessageInput) -> Self {
        self.request.input = Some(input);
        self
    }

    /// Intents to use instead of classifying the input.
    pub fn with_intents(mut self, intents: Vec<RuntimeIntent>) -> Self {
        self.request.intents = Some(intents);
        self
    }

    /// Entities to use instead of detecting them in the input.
    pub fn with_entities(mut self, entities: Vec<RuntimeEntity>) -> Self {
        self.request.entities = Some(entities);
        self
    }

    pub fn with_alternate_intents(mut self, alternate_intents: bool) -> Self {
        self.request.alternate_intents = Some(alternate_intents);
        self
    }

    /// Context returned by the previous turn.
    pub fn with_context(mut self, context: Context) -> Self {
        self.request.context = Some(context);
        self
    }

    pub fn with_output(mut self, output: OutputData) -> Self {
        self.request.output = Some(output);
        self
    }

    /// Unique end user identifier, used for billing.
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.request.user_id = Some(user_id.into());
        self
    }

    pub fn with_nodes_visited_details(mut self, nodes_visited_details: bool) -> Self {
        self.nodes_visited_details = Some(nodes_visited_details);
        self
    }
}

impl Operation for MessageOptions {
    type Output = MessageResponse;
    const NAME: &'static str = "message";

    fn build_request(&self) -> Result<ApiRequest> {
        require("workspace_id", &self.workspace_id)?;
        let mut path = workspace_path(&self.workspace_id);
        path.push("message".into());
        ApiRequest::new(Method::POST, path)
            .query_opt("nodes_visited_details", self.nodes_visited_details)
            .json(&self.request)
            .map(|req| req.headers(&self.headers))
    }
}

impl_option_headers!(MessageOptions);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_message_sends_empty_object() {
        let req = MessageOptions::new("ws").build_request().unwrap();
        assert_eq!(req.path(), "/v1/workspaces/ws/message");
        assert_eq!(req.body(), Some(&json!({})));
    }

    #[test]
    fn context_variables_flatten_into_body() {
        let ctx = Context {
            conversation_id: Some("c1".into()),
            ..Default::default()
        }
        .with_variable("pizza_size", json!("large"));
        let req = MessageOptions::new("ws")
            .with_text("hello")
            .with_context(ctx)
            .with_nodes_visited_details(true)
            .build_request()
            .unwrap();
        assert_eq!(
            req.query_pairs(),
            &[("nodes_visited_details", "true".to_string())]
        );
        assert_eq!(
            req.body(),
            Some(&json!({
                "input": { "text": "hello" },
                "context": { "conversation_id": "c1", "pizza_size": "large" }
            }))
        );
    }

    #[test]
    fn response_keeps_unknown_fields() {
        let resp: MessageResponse = serde_json::from_value(json!({
            "input": { "text": "large pizza" },
            "intents": [{ "intent": "order", "confidence": 0.93 }],
            "entities": [{
                "entity": "size",
                "location": [0, 5],
                "value": "large",
                "confidence": 1,
                "role": { "type": "date_from" }
            }],
            "context": {
                "conversation_id": "c1",
                "system": { "dialog_stack": [] },
                "pizza_size": "large"
            },
            "output": {
                "text": ["One large pizza coming up."],
                "nodes_visited": ["node_1"],
                "log_messages": []
            }
        }))
        .unwrap();
        assert_eq!(resp.top_intent().unwrap().intent, "order");
        assert_eq!(resp.entities[0].extra["role"]["type"], "date_from");
        assert_eq!(resp.context.extra["pizza_size"], "large");
        assert_eq!(resp.output.text, vec!["One large pizza coming up."]);
        assert!(resp.actions.is_none());
    }

    #[test]
    fn blank_workspace_is_rejected() {
        assert!(MessageOptions::new("").with_text("hi").build_request().is_err());
    }
}
