use assistant_v1::{
    testing::test_client, Context, DeleteUserDataOptions, ListAllLogsOptions, ListLogsOptions,
    MessageOptions,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn message_round_trips_context() {
    let server = MockServer::start().await;
    let client = test_client(&server.uri());

    Mock::given(method("POST"))
        .and(path("/v1/workspaces/ws-1/message"))
        .and(query_param("version", "2021-11-27"))
        .and(query_param("nodes_visited_details", "true"))
        .and(body_json(json!({ "input": { "text": "I want a large pizza" } })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Global-Transaction-Id", "txn-1")
                .set_body_json(json!({
                    "input": { "text": "I want a large pizza" },
                    "intents": [{ "intent": "order", "confidence": 0.97 }],
                    "entities": [{ "entity": "size", "location": [9, 14], "value": "large", "confidence": 1 }],
                    "context": {
                        "conversation_id": "conv-1",
                        "system": { "dialog_turn_counter": 1 },
                        "size": "large"
                    },
                    "output": {
                        "text": ["What toppings?"],
                        "nodes_visited": ["order"],
                        "nodes_visited_details": [{ "dialog_node": "order", "title": "Order", "conditions": "#order" }],
                        "log_messages": [],
                        "generic": [{ "response_type": "text", "text": "What toppings?" }]
                    }
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/workspaces/ws-1/message"))
        .and(body_json(json!({
            "input": { "text": "mushrooms" },
            "context": {
                "conversation_id": "conv-1",
                "system": { "dialog_turn_counter": 1 },
                "size": "large"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "input": { "text": "mushrooms" },
            "intents": [],
            "entities": [],
            "context": { "conversation_id": "conv-1" },
            "output": {
                "text": ["Done."],
                "log_messages": [{ "level": "warn", "msg": "No dialog node matched" }]
            },
            "actions": [{ "name": "place_order", "type": "client", "result_variable": "order_result" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let first = client
        .message(
            &MessageOptions::new("ws-1")
                .with_text("I want a large pizza")
                .with_nodes_visited_details(true),
        )
        .await
        .expect("first turn");
    assert_eq!(first.transaction_id().as_deref(), Some("txn-1"));
    let reply = first.into_result();
    assert_eq!(reply.top_intent().map(|i| i.intent.as_str()), Some("order"));
    assert_eq!(reply.entities[0].value, "large");
    assert_eq!(reply.output.text, vec!["What toppings?"]);
    assert_eq!(
        reply.output.nodes_visited_details.as_ref().unwrap()[0]
            .title
            .as_deref(),
        Some("Order")
    );

    let context: Context = reply.context;
    let second = client
        .message(
            &MessageOptions::new("ws-1")
                .with_text("mushrooms")
                .with_context(context),
        )
        .await
        .expect("second turn")
        .into_result();
    assert_eq!(second.output.log_messages[0].level, "warn");
    let actions = second.actions.expect("actions");
    assert_eq!(actions[0].result_variable, "order_result");
}

#[tokio::test]
async fn logs_and_user_data() {
    let server = MockServer::start().await;
    let client = test_client(&server.uri());
    let log = json!({
        "request": { "input": { "text": "hi" } },
        "response": {
            "input": { "text": "hi" },
            "intents": [{ "intent": "greeting", "confidence": 0.9 }],
            "entities": [],
            "context": { "conversation_id": "conv-1" },
            "output": { "text": ["Hello"] }
        },
        "log_id": "log-1",
        "request_timestamp": "2024-03-01T12:00:00.000Z",
        "response_timestamp": "2024-03-01T12:00:00.250Z",
        "workspace_id": "ws-1",
        "language": "en"
    });

    Mock::given(method("GET"))
        .and(path("/v1/workspaces/ws-1/logs"))
        .and(query_param("sort", "-request_timestamp"))
        .and(query_param("filter", "response.intents:intent::greeting"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "logs": [log.clone()],
            "pagination": { "next_url": "/v1/workspaces/ws-1/logs?cursor=n1", "next_cursor": "n1" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/logs"))
        .and(query_param("filter", "workspace_id::ws-1"))
        .and(query_param("page_limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "logs": [log],
            "pagination": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v1/user_data"))
        .and(query_param("customer_id", "customer-42"))
        .and(header("x-watson-learning-opt-out", "true"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let logs = client
        .logs()
        .list(
            &ListLogsOptions::new("ws-1")
                .with_sort("-request_timestamp")
                .with_filter("response.intents:intent::greeting"),
        )
        .await
        .expect("list logs")
        .into_result();
    assert_eq!(logs.logs[0].log_id, "log-1");
    assert_eq!(logs.logs[0].response.intents[0].intent, "greeting");
    assert_eq!(logs.pagination.next_cursor.as_deref(), Some("n1"));

    let all = client
        .logs()
        .list_all(&ListAllLogsOptions::new("workspace_id::ws-1").with_page_limit(10))
        .await
        .expect("list all logs")
        .into_result();
    assert_eq!(all.logs.len(), 1);
    assert!(all.pagination.next_cursor.is_none());

    let deleted = client
        .user_data()
        .delete(
            &DeleteUserDataOptions::new("customer-42")
                .with_header("X-Watson-Learning-Opt-Out", "true"),
        )
        .await
        .expect("delete user data");
    assert_eq!(deleted.status_code, 202);
}
