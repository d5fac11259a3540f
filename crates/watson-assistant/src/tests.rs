//! Tests for the Assistant client.

use insta::assert_yaml_snapshot;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{
    Assistant, Authenticator, CreateIntent, CreateValue, CreateWorkspaceOptions, DialogNode,
    Error, Example, ListOptions, MessageOptions, UpdateEntityOptions, UpdateValueOptions,
};

const VERSION: &str = "2019-02-28";

async fn client(server: &MockServer) -> Assistant {
    let mut client = Assistant::new(VERSION, Authenticator::NoAuth).unwrap();
    client.set_endpoint(&server.uri()).unwrap();
    client
}

#[tokio::test]
async fn test_message_round_trips_context() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/workspaces/ws-1/message"))
        .and(query_param("version", VERSION))
        .and(query_param("nodes_visited_details", "true"))
        .and(body_json(serde_json::json!({
            "input": {"text": "What is my balance?"},
            "alternate_intents": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "input": {"text": "What is my balance?"},
            "intents": [{"intent": "check_balance", "confidence": 0.93}],
            "entities": [{
                "entity": "account_type",
                "location": [11, 18],
                "value": "balance",
                "confidence": 1.0
            }],
            "context": {
                "conversation_id": "conv-1",
                "system": {"dialog_turn_counter": 1},
                "account": "chk-42"
            },
            "output": {
                "text": ["Your balance is $128.42."],
                "nodes_visited": ["node_balance"],
                "nodes_visited_details": [{"dialog_node": "node_balance", "title": "Balance"}]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .await
        .message(
            "ws-1",
            MessageOptions::new()
                .with_text("What is my balance?")
                .with_alternate_intents(true)
                .with_nodes_visited_details(true),
        )
        .await
        .unwrap();

    assert_eq!(response.intents[0].intent, "check_balance");
    let context = response.context.unwrap();
    assert_eq!(context.conversation_id.as_deref(), Some("conv-1"));
    assert_eq!(context.extra["account"], serde_json::json!("chk-42"));
    let output = response.output.unwrap();
    assert_eq!(output.text, vec!["Your balance is $128.42."]);
    assert_eq!(output.nodes_visited_details.len(), 1);
}

#[tokio::test]
async fn test_message_rejects_empty_workspace_id() {
    let server = MockServer::start().await;
    let result = client(&server)
        .await
        .message("  ", MessageOptions::new().with_text("hi"))
        .await;
    assert!(matches!(result, Err(Error::InvalidInput(_))));
}

#[tokio::test]
async fn test_create_workspace_sends_training_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/workspaces"))
        .and(body_json(serde_json::json!({
            "name": "banking",
            "language": "en",
            "learning_opt_out": true,
            "intents": [{
                "intent": "check_balance",
                "examples": [{"text": "what is my balance"}]
            }]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "workspace_id": "ws-1",
            "name": "banking",
            "language": "en",
            "status": "Training"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let workspace = client(&server)
        .await
        .create_workspace(
            CreateWorkspaceOptions::new()
                .with_name("banking")
                .with_language("en")
                .with_learning_opt_out(true)
                .with_intents(vec![CreateIntent::new("check_balance")
                    .with_examples(vec![Example::new("what is my balance")])]),
        )
        .await
        .unwrap();

    assert_eq!(workspace.workspace_id, "ws-1");
    assert_eq!(
        workspace.status.as_deref(),
        Some(crate::Workspace::STATUS_TRAINING)
    );
}

#[tokio::test]
async fn test_list_workspaces_sends_pagination_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/workspaces"))
        .and(query_param("page_limit", "2"))
        .and(query_param("include_count", "true"))
        .and(query_param("sort", "-updated"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "workspaces": [
                {"workspace_id": "ws-1", "name": "banking"},
                {"workspace_id": "ws-2", "name": "travel"}
            ],
            "pagination": {
                "refresh_url": "/v1/workspaces?version=2019-02-28",
                "next_cursor": "cur-2",
                "total": 5,
                "matched": 5
            }
        })))
        .mount(&server)
        .await;

    let collection = client(&server)
        .await
        .list_workspaces(
            ListOptions::new()
                .with_page_limit(2)
                .with_include_count(true)
                .with_sort("-updated"),
        )
        .await
        .unwrap();

    assert_eq!(collection.workspaces.len(), 2);
    assert_eq!(collection.pagination.unwrap().total, Some(5));
}

#[tokio::test]
async fn test_get_workspace_exports_training_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/workspaces/ws-1"))
        .and(query_param("export", "true"))
        .and(query_param("include_audit", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "workspace_id": "ws-1",
            "name": "banking",
            "status": "Available",
            "intents": [{"intent": "check_balance", "examples": [{"text": "balance please"}]}],
            "dialog_nodes": [{
                "dialog_node": "node_balance",
                "conditions": "#check_balance",
                "type": "standard",
                "digress_in": "not_available"
            }]
        })))
        .mount(&server)
        .await;

    let workspace = client(&server)
        .await
        .get_workspace("ws-1", Some(true), Some(true))
        .await
        .unwrap();

    assert_eq!(workspace.intents[0].examples[0].text, "balance please");
    let node = &workspace.dialog_nodes[0];
    assert_eq!(node.node_type.as_deref(), Some(DialogNode::TYPE_STANDARD));
    assert_eq!(
        node.digress_in.as_deref(),
        Some(DialogNode::DIGRESS_IN_NOT_AVAILABLE)
    );
}

#[tokio::test]
async fn test_update_intent_maps_new_fields_to_wire_names() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/workspaces/ws-1/intents/check_balance"))
        .and(body_json(serde_json::json!({
            "intent": "account_balance",
            "description": "Balance enquiries"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "intent": "account_balance",
            "description": "Balance enquiries"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let intent = client(&server)
        .await
        .update_intent(
            "ws-1",
            "check_balance",
            crate::UpdateIntentOptions::new()
                .with_new_intent("account_balance")
                .with_new_description("Balance enquiries"),
        )
        .await
        .unwrap();

    assert_eq!(intent.intent, "account_balance");
}

#[tokio::test]
async fn test_example_text_is_percent_encoded_in_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(
            "/v1/workspaces/ws-1/intents/check_balance/examples/what%20is%20my%20balance",
        ))
        .and(body_json(serde_json::json!({"text": "what's my balance"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "text": "what's my balance"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let example = client(&server)
        .await
        .update_example("ws-1", "check_balance", "what is my balance", "what's my balance")
        .await
        .unwrap();
    assert_eq!(example.text, "what's my balance");
}

#[tokio::test]
async fn test_update_entity_posts_only_changed_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/workspaces/ws-1/entities/account_type"))
        .and(body_json(serde_json::json!({
            "fuzzy_match": true,
            "values": [{"value": "checking", "synonyms": ["chequing"]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "entity": "account_type",
            "fuzzy_match": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let entity = client(&server)
        .await
        .update_entity(
            "ws-1",
            "account_type",
            UpdateEntityOptions::new()
                .with_new_fuzzy_match(true)
                .with_new_values(vec![
                    CreateValue::new("checking").with_synonyms(vec!["chequing".to_string()])
                ]),
        )
        .await
        .unwrap();

    assert_eq!(entity.fuzzy_match, Some(true));
}

#[tokio::test]
async fn test_update_value_renames_type_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/workspaces/ws-1/entities/account_type/values/checking"))
        .and(body_json(serde_json::json!({
            "type": "patterns",
            "patterns": ["chk-\\d+"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": "checking",
            "type": "patterns",
            "patterns": ["chk-\\d+"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let value = client(&server)
        .await
        .update_value(
            "ws-1",
            "account_type",
            "checking",
            UpdateValueOptions::new()
                .with_new_value_type(crate::Value::TYPE_PATTERNS)
                .with_new_patterns(vec!["chk-\\d+".to_string()]),
        )
        .await
        .unwrap();

    assert_eq!(value.value_type.as_deref(), Some("patterns"));
}

#[tokio::test]
async fn test_synonym_lifecycle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(
            "/v1/workspaces/ws-1/entities/account_type/values/checking/synonyms",
        ))
        .and(body_json(serde_json::json!({"synonym": "chequing"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "synonym": "chequing"
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(
            "/v1/workspaces/ws-1/entities/account_type/values/checking/synonyms/chequing",
        ))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client(&server).await;
    let synonym = client
        .create_synonym("ws-1", "account_type", "checking", "chequing")
        .await
        .unwrap();
    assert_eq!(synonym.synonym, "chequing");

    client
        .delete_synonym("ws-1", "account_type", "checking", "chequing")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_dialog_node_serializes_type_and_digressions() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/workspaces/ws-1/dialog_nodes"))
        .and(body_json(serde_json::json!({
            "dialog_node": "node_balance",
            "conditions": "#check_balance",
            "title": "Balance",
            "type": "standard"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "dialog_node": "node_balance",
            "conditions": "#check_balance",
            "title": "Balance",
            "type": "standard"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let node = client(&server)
        .await
        .create_dialog_node(
            "ws-1",
            DialogNode::new("node_balance")
                .with_conditions("#check_balance")
                .with_title("Balance")
                .with_node_type(DialogNode::TYPE_STANDARD),
        )
        .await
        .unwrap();

    assert_eq!(node.dialog_node, "node_balance");
}

#[test]
fn test_dialog_suggestion_wire_shape() {
    let suggestion: crate::DialogSuggestion = serde_json::from_value(serde_json::json!({
        "label": "Check balance",
        "value": {"input": {"text": "check balance"}},
        "dialog_node": "node_balance"
    }))
    .unwrap();

    assert_eq!(suggestion.label, "Check balance");
    assert_eq!(suggestion.dialog_node.as_deref(), Some("node_balance"));
}

#[test]
fn test_dialog_node_wire_shape() {
    let node: DialogNode = serde_json::from_value(serde_json::json!({
        "dialog_node": "slot_amount",
        "parent": "frame_transfer",
        "type": "slot",
        "variable": "$amount",
        "digress_in": "does_not_return",
        "digress_out": "allow_returning",
        "digress_out_slots": "not_allowed",
        "event_name": "filled"
    }))
    .unwrap();

    assert_yaml_snapshot!(node, @r###"
    ---
    dialog_node: slot_amount
    parent: frame_transfer
    type: slot
    event_name: filled
    variable: $amount
    digress_in: does_not_return
    digress_out: allow_returning
    digress_out_slots: not_allowed
    "###);
}
