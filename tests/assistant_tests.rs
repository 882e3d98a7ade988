//! Tests for the Assistant v1 and v2 clients against a mock server

use std::sync::Arc;

use serde_json::json;
use watson::assistant_v1::{self, AssistantV1};
use watson::assistant_v2::{self, AssistantV2};
use watson::core::{NoAuthAuthenticator, ServiceOptions};
use watson::WatsonError;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const VERSION: &str = "2021-06-14";

async fn run<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
    tokio::task::spawn_blocking(f)
        .await
        .expect("blocking task panicked")
}

fn v1(uri: String) -> AssistantV1 {
    AssistantV1::new(
        VERSION,
        ServiceOptions::new(Arc::new(NoAuthAuthenticator)).url(uri),
    )
    .unwrap()
}

fn v2(uri: String) -> AssistantV2 {
    AssistantV2::new(
        VERSION,
        ServiceOptions::new(Arc::new(NoAuthAuthenticator)).url(uri),
    )
    .unwrap()
}

// ============================================================================
// Assistant v1 Tests
// ============================================================================

mod v1_message_tests {
    use super::*;
    use assistant_v1::{Context, MessageInput, MessageOptions};

    #[tokio::test]
    async fn test_message_round_trips_context() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/workspaces/ws-1/message"))
            .and(query_param("version", VERSION))
            .and(query_param("nodes_visited_details", "true"))
            .and(header(
                "X-IBMCloud-SDK-Analytics",
                "service_name=conversation;service_version=V1;operation_id=Message",
            ))
            .and(body_json(json!({
                "input": { "text": "Hello" },
                "context": { "conversation_id": "conv-1", "counter": 1 }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "input": { "text": "Hello" },
                "intents": [{ "intent": "greeting", "confidence": 0.97 }],
                "entities": [],
                "context": { "conversation_id": "conv-1", "counter": 2 },
                "output": {
                    "text": ["Hi there"],
                    "nodes_visited": ["welcome"],
                    "log_messages": [],
                    "generic": [{ "response_type": "text", "text": "Hi there" }]
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let response = run(move || {
            let mut variables = serde_json::Map::new();
            variables.insert("counter".to_string(), json!(1));
            let context = Context {
                conversation_id: Some("conv-1".to_string()),
                variables,
                ..Default::default()
            };
            v1(uri)
                .message(
                    &MessageOptions::new("ws-1")
                        .input(MessageInput::text("Hello"))
                        .context(context)
                        .nodes_visited_details(true),
                )
                .unwrap()
                .into_result()
        })
        .await;

        assert_eq!(response.intents[0].intent, "greeting");
        assert_eq!(response.output.text, vec!["Hi there".to_string()]);
        assert_eq!(response.context.variables.get("counter"), Some(&json!(2)));
        assert_eq!(
            response.context.conversation_id.as_deref(),
            Some("conv-1")
        );
    }

    #[tokio::test]
    async fn test_message_requires_workspace() {
        let err = run(|| {
            v1("http://localhost:1".to_string())
                .message(&MessageOptions::new(""))
                .unwrap_err()
        })
        .await;

        assert!(matches!(err, WatsonError::Validation(_)));
    }
}

mod v1_workspace_tests {
    use super::*;
    use assistant_v1::{
        CreateWorkspaceOptions, DeleteWorkspaceOptions, GetWorkspaceOptions, Intent,
        ListWorkspacesOptions, UpdateWorkspaceOptions,
    };

    fn workspace_json() -> serde_json::Value {
        json!({
            "name": "Support",
            "language": "en",
            "workspace_id": "ws-1",
            "learning_opt_out": false,
            "status": "Available"
        })
    }

    #[tokio::test]
    async fn test_list_workspaces_paging() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/workspaces"))
            .and(query_param("page_limit", "1"))
            .and(query_param("sort", "name"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "workspaces": [workspace_json()],
                "pagination": {
                    "refresh_url": "/v1/workspaces?version=2021-06-14",
                    "next_url": "/v1/workspaces?cursor=abc",
                    "next_cursor": "abc"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let collection = run(move || {
            v1(uri)
                .list_workspaces(&ListWorkspacesOptions::default().page_limit(1).sort("name"))
                .unwrap()
                .into_result()
        })
        .await;

        assert_eq!(collection.workspaces.len(), 1);
        assert_eq!(collection.workspaces[0].name, "Support");
        assert_eq!(collection.pagination.next_cursor.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_create_workspace_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/workspaces"))
            .and(body_json(json!({
                "name": "Support",
                "language": "en",
                "intents": [{ "intent": "greeting" }]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(workspace_json()))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let resp = run(move || {
            v1(uri)
                .create_workspace(
                    &CreateWorkspaceOptions::default()
                        .name("Support")
                        .language("en")
                        .intents(vec![Intent::new("greeting")]),
                )
                .unwrap()
        })
        .await;

        assert_eq!(resp.status_code, 201);
        assert_eq!(resp.result.workspace_id.as_deref(), Some("ws-1"));
    }

    #[tokio::test]
    async fn test_delete_workspace() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v1/workspaces/ws-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let status = run(move || {
            v1(uri)
                .delete_workspace(&DeleteWorkspaceOptions::new("ws-1"))
                .unwrap()
                .status_code
        })
        .await;

        assert_eq!(status, 200);
    }

    #[tokio::test]
    async fn test_get_workspace_export() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/workspaces/ws-1"))
            .and(query_param("export", "true"))
            .and(query_param("sort", "stable"))
            .respond_with(ResponseTemplate::new(200).set_body_json(workspace_json()))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let workspace = run(move || {
            v1(uri)
                .get_workspace(&GetWorkspaceOptions::new("ws-1").export(true).sort("stable"))
                .unwrap()
                .into_result()
        })
        .await;

        assert_eq!(workspace.workspace_id.as_deref(), Some("ws-1"));
        assert_eq!(workspace.status.as_deref(), Some("Available"));
    }

    #[tokio::test]
    async fn test_update_workspace_appends() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/workspaces/ws-1"))
            .and(query_param("append", "true"))
            .and(body_json(json!({
                "description": "Tier 1 support",
                "intents": [{ "intent": "refund" }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(workspace_json()))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let name = run(move || {
            v1(uri)
                .update_workspace(
                    &UpdateWorkspaceOptions::new("ws-1")
                        .description("Tier 1 support")
                        .intents(vec![Intent::new("refund")])
                        .append(true),
                )
                .unwrap()
                .into_result()
                .name
        })
        .await;

        assert_eq!(name, "Support");
    }
}

mod v1_intent_tests {
    use super::*;
    use assistant_v1::{
        DeleteIntentOptions, Example, GetIntentOptions, ListIntentsOptions, UpdateIntentOptions,
    };

    #[tokio::test]
    async fn test_update_intent_renames_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/workspaces/ws-1/intents/hello"))
            .and(query_param("append", "false"))
            .and(body_json(json!({
                "intent": "greeting",
                "examples": [{ "text": "hi" }, { "text": "good morning" }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "intent": "greeting",
                "examples": [{ "text": "hi" }, { "text": "good morning" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let intent = run(move || {
            v1(uri)
                .update_intent(
                    &UpdateIntentOptions::new("ws-1", "hello")
                        .new_intent("greeting")
                        .new_examples(vec![Example::new("hi"), Example::new("good morning")])
                        .append(false),
                )
                .unwrap()
                .into_result()
        })
        .await;

        assert_eq!(intent.intent, "greeting");
        assert_eq!(intent.examples.map(|e| e.len()), Some(2));
    }

    #[tokio::test]
    async fn test_list_intents_export() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/workspaces/ws-1/intents"))
            .and(query_param("export", "true"))
            .and(query_param("include_count", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "intents": [{ "intent": "greeting", "examples": [{ "text": "hi" }] }],
                "pagination": { "refresh_url": "/v1/workspaces/ws-1/intents", "total": 1 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let collection = run(move || {
            v1(uri)
                .list_intents(&ListIntentsOptions::new("ws-1").export(true).include_count(true))
                .unwrap()
                .into_result()
        })
        .await;

        assert_eq!(collection.intents[0].intent, "greeting");
        assert_eq!(collection.pagination.total, Some(1));
    }

    #[tokio::test]
    async fn test_get_intent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/workspaces/ws-1/intents/greeting"))
            .and(query_param("include_audit", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "intent": "greeting",
                "description": "Say hello",
                "created": "2021-06-14T10:00:00Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let intent = run(move || {
            v1(uri)
                .get_intent(&GetIntentOptions::new("ws-1", "greeting").include_audit(true))
                .unwrap()
                .into_result()
        })
        .await;

        assert_eq!(intent.description.as_deref(), Some("Say hello"));
        assert!(intent.created.is_some());
    }

    #[tokio::test]
    async fn test_delete_intent() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v1/workspaces/ws-1/intents/greeting"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let status = run(move || {
            v1(uri)
                .delete_intent(&DeleteIntentOptions::new("ws-1", "greeting"))
                .unwrap()
                .status_code
        })
        .await;

        assert_eq!(status, 200);
    }
}

mod v1_entity_tests {
    use super::*;
    use assistant_v1::{
        CreateEntityOptions, DeleteEntityOptions, EntityValue, GetEntityOptions,
        ListEntitiesOptions, UpdateEntityOptions,
    };

    #[tokio::test]
    async fn test_create_entity_with_synonyms() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/workspaces/ws-1/entities"))
            .and(body_json(json!({
                "entity": "beverage",
                "fuzzy_match": true,
                "values": [{ "value": "coffee", "type": "synonyms", "synonyms": ["espresso"] }]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "entity": "beverage",
                "fuzzy_match": true,
                "values": [{ "value": "coffee", "type": "synonyms", "synonyms": ["espresso"] }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let entity = run(move || {
            let coffee = EntityValue {
                value: "coffee".to_string(),
                value_type: Some("synonyms".to_string()),
                synonyms: Some(vec!["espresso".to_string()]),
                ..Default::default()
            };
            v1(uri)
                .create_entity(
                    &CreateEntityOptions::new("ws-1", "beverage")
                        .fuzzy_match(true)
                        .values(vec![coffee]),
                )
                .unwrap()
                .into_result()
        })
        .await;

        assert_eq!(entity.entity, "beverage");
        assert_eq!(entity.fuzzy_match, Some(true));
        assert_eq!(entity.values.unwrap_or_default()[0].value, "coffee");
    }

    #[tokio::test]
    async fn test_list_entities() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/workspaces/ws-1/entities"))
            .and(query_param("page_limit", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "entities": [{ "entity": "beverage" }, { "entity": "size" }],
                "pagination": { "refresh_url": "/v1/workspaces/ws-1/entities" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let names = run(move || {
            v1(uri)
                .list_entities(&ListEntitiesOptions::new("ws-1").page_limit(10))
                .unwrap()
                .into_result()
                .entities
                .into_iter()
                .map(|e| e.entity)
                .collect::<Vec<_>>()
        })
        .await;

        assert_eq!(names, vec!["beverage", "size"]);
    }

    #[tokio::test]
    async fn test_get_entity_export() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/workspaces/ws-1/entities/beverage"))
            .and(query_param("export", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "entity": "beverage",
                "values": [{ "value": "tea", "type": "synonyms", "synonyms": ["chai"] }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let entity = run(move || {
            v1(uri)
                .get_entity(&GetEntityOptions::new("ws-1", "beverage").export(true))
                .unwrap()
                .into_result()
        })
        .await;

        let values = entity.values.unwrap_or_default();
        assert_eq!(values[0].synonyms.as_deref(), Some(&["chai".to_string()][..]));
    }

    #[tokio::test]
    async fn test_update_entity_renames_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/workspaces/ws-1/entities/beverage"))
            .and(query_param("append", "true"))
            .and(body_json(json!({
                "entity": "drink",
                "description": "Things to drink"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "entity": "drink",
                "description": "Things to drink"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let entity = run(move || {
            v1(uri)
                .update_entity(
                    &UpdateEntityOptions::new("ws-1", "beverage")
                        .new_entity("drink")
                        .new_description("Things to drink")
                        .append(true),
                )
                .unwrap()
                .into_result()
        })
        .await;

        assert_eq!(entity.entity, "drink");
    }

    #[tokio::test]
    async fn test_delete_entity() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v1/workspaces/ws-1/entities/beverage"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let status = run(move || {
            v1(uri)
                .delete_entity(&DeleteEntityOptions::new("ws-1", "beverage"))
                .unwrap()
                .status_code
        })
        .await;

        assert_eq!(status, 200);
    }
}

mod v1_dialog_node_tests {
    use super::*;
    use assistant_v1::{
        CreateDialogNodeOptions, DeleteDialogNodeOptions, DialogNode, GetDialogNodeOptions,
        ListDialogNodesOptions, UpdateDialogNodeOptions,
    };

    #[tokio::test]
    async fn test_create_dialog_node() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/workspaces/ws-1/dialog_nodes"))
            .and(body_json(json!({
                "dialog_node": "welcome",
                "conditions": "welcome",
                "type": "standard"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "dialog_node": "welcome",
                "conditions": "welcome",
                "type": "standard"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let node = run(move || {
            let node = DialogNode {
                conditions: Some("welcome".to_string()),
                node_type: Some("standard".to_string()),
                ..DialogNode::new("welcome")
            };
            v1(uri)
                .create_dialog_node(&CreateDialogNodeOptions::new("ws-1", node))
                .unwrap()
                .into_result()
        })
        .await;

        assert_eq!(node.dialog_node, "welcome");
        assert_eq!(node.node_type.as_deref(), Some("standard"));
    }

    #[tokio::test]
    async fn test_create_dialog_node_requires_id() {
        let err = run(|| {
            v1("http://localhost:1".to_string())
                .create_dialog_node(&CreateDialogNodeOptions::new("ws-1", DialogNode::default()))
                .unwrap_err()
        })
        .await;

        assert!(err.to_string().contains("dialog_node"));
    }

    #[tokio::test]
    async fn test_list_dialog_nodes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/workspaces/ws-1/dialog_nodes"))
            .and(query_param("cursor", "next-page"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "dialog_nodes": [
                    { "dialog_node": "welcome", "type": "standard" },
                    { "dialog_node": "anything_else", "conditions": "anything_else" }
                ],
                "pagination": { "refresh_url": "/v1/workspaces/ws-1/dialog_nodes" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let nodes = run(move || {
            v1(uri)
                .list_dialog_nodes(&ListDialogNodesOptions::new("ws-1").cursor("next-page"))
                .unwrap()
                .into_result()
                .dialog_nodes
        })
        .await;

        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].conditions.as_deref(), Some("anything_else"));
    }

    #[tokio::test]
    async fn test_get_dialog_node() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/workspaces/ws-1/dialog_nodes/welcome"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "dialog_node": "welcome",
                "title": "Welcome",
                "next_step": { "behavior": "skip_user_input" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let node = run(move || {
            v1(uri)
                .get_dialog_node(&GetDialogNodeOptions::new("ws-1", "welcome"))
                .unwrap()
                .into_result()
        })
        .await;

        assert_eq!(node.title.as_deref(), Some("Welcome"));
        assert_eq!(
            node.next_step.map(|step| step.behavior).as_deref(),
            Some("skip_user_input")
        );
    }

    #[tokio::test]
    async fn test_update_dialog_node_sends_full_node() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/workspaces/ws-1/dialog_nodes/welcome"))
            .and(body_json(json!({
                "dialog_node": "greeting",
                "conditions": "#greeting",
                "type": "standard"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "dialog_node": "greeting",
                "conditions": "#greeting",
                "type": "standard"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let node = run(move || {
            let node = DialogNode {
                conditions: Some("#greeting".to_string()),
                node_type: Some("standard".to_string()),
                ..DialogNode::new("greeting")
            };
            v1(uri)
                .update_dialog_node(&UpdateDialogNodeOptions::new("ws-1", "welcome", node))
                .unwrap()
                .into_result()
        })
        .await;

        assert_eq!(node.dialog_node, "greeting");
    }

    #[tokio::test]
    async fn test_delete_dialog_node() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v1/workspaces/ws-1/dialog_nodes/welcome"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let status = run(move || {
            v1(uri)
                .delete_dialog_node(&DeleteDialogNodeOptions::new("ws-1", "welcome"))
                .unwrap()
                .status_code
        })
        .await;

        assert_eq!(status, 200);
    }
}

mod v1_log_tests {
    use super::*;
    use assistant_v1::{DeleteUserDataOptions, ListAllLogsOptions, ListLogsOptions};

    #[tokio::test]
    async fn test_list_all_logs_sends_filter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/logs"))
            .and(query_param("filter", "language::en"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "logs": [],
                "pagination": {}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let logs = run(move || {
            v1(uri)
                .list_all_logs(&ListAllLogsOptions::new("language::en"))
                .unwrap()
                .into_result()
                .logs
        })
        .await;

        assert!(logs.is_empty());
    }

    #[tokio::test]
    async fn test_delete_user_data() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v1/user_data"))
            .and(query_param("customer_id", "cust-1"))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let status = run(move || {
            v1(uri)
                .delete_user_data(&DeleteUserDataOptions::new("cust-1"))
                .unwrap()
                .status_code
        })
        .await;

        assert_eq!(status, 202);
    }

    #[tokio::test]
    async fn test_list_workspace_logs() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/workspaces/ws-1/logs"))
            .and(query_param("sort", "-request_timestamp"))
            .and(query_param("page_limit", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "logs": [],
                "pagination": {}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let logs = run(move || {
            v1(uri)
                .list_logs(
                    &ListLogsOptions::new("ws-1")
                        .sort("-request_timestamp")
                        .page_limit(50),
                )
                .unwrap()
                .into_result()
                .logs
        })
        .await;

        assert!(logs.is_empty());
    }
}

// ============================================================================
// Assistant v2 Tests
// ============================================================================

mod v2_session_tests {
    use super::*;
    use assistant_v2::{
        CreateSessionOptions, DeleteSessionOptions, MessageInput, MessageOptions,
        MessageStatelessOptions,
    };

    #[tokio::test]
    async fn test_session_lifecycle() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/assistants/asst-1/sessions"))
            .and(query_param("version", VERSION))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({ "session_id": "sess-1" })),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v2/assistants/asst-1/sessions/sess-1/message"))
            .and(body_json(json!({
                "input": { "message_type": "text", "text": "Hello" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "output": {
                    "generic": [
                        { "response_type": "text", "text": "Hi, how can I help?" },
                        { "response_type": "pause", "time": 500 }
                    ],
                    "intents": [{ "intent": "greeting", "confidence": 0.9 }]
                }
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/v2/assistants/asst-1/sessions/sess-1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let (texts, generic_count, intent) = run(move || {
            let assistant = v2(uri);
            let session = assistant
                .create_session(&CreateSessionOptions::new("asst-1"))
                .unwrap()
                .into_result();
            let reply = assistant
                .message(
                    &MessageOptions::new("asst-1", session.session_id.clone())
                        .input(MessageInput::text("Hello")),
                )
                .unwrap()
                .into_result();
            assistant
                .delete_session(&DeleteSessionOptions::new("asst-1", session.session_id))
                .unwrap();
            (
                reply
                    .output
                    .text()
                    .into_iter()
                    .map(str::to_string)
                    .collect::<Vec<_>>(),
                reply.output.generic.len(),
                reply.output.intents[0].intent.clone(),
            )
        })
        .await;

        assert_eq!(texts, vec!["Hi, how can I help?".to_string()]);
        assert_eq!(generic_count, 2);
        assert_eq!(intent, "greeting");
    }

    #[tokio::test]
    async fn test_message_stateless_returns_context() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/assistants/asst-1/message"))
            .and(header(
                "X-IBMCloud-SDK-Analytics",
                "service_name=conversation;service_version=V2;operation_id=MessageStateless",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "output": { "generic": [] },
                "context": {
                    "global": { "system": { "turn_count": 1 } },
                    "skills": { "main skill": { "user_defined": { "name": "Ada" } } }
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let response = run(move || {
            v2(uri)
                .message_stateless(
                    &MessageStatelessOptions::new("asst-1").input(MessageInput::text("Hi")),
                )
                .unwrap()
                .into_result()
        })
        .await;

        let turn_count = response
            .context
            .global
            .and_then(|g| g.system)
            .and_then(|s| s.turn_count);
        assert_eq!(turn_count, Some(1));
        assert!(response.context.skills.is_some());
    }

    #[tokio::test]
    async fn test_message_requires_session() {
        let err = run(|| {
            v2("http://localhost:1".to_string())
                .message(&MessageOptions::new("asst-1", ""))
                .unwrap_err()
        })
        .await;

        assert!(err.to_string().contains("session_id"));
    }
}

mod v2_log_tests {
    use super::*;
    use assistant_v2::{DeleteUserDataOptions, ListLogsOptions};

    #[tokio::test]
    async fn test_list_assistant_logs() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/assistants/asst-1/logs"))
            .and(query_param("filter", "request.input.text::hello"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "logs": [],
                "pagination": { "matched": 0 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let collection = run(move || {
            v2(uri)
                .list_logs(&ListLogsOptions::new("asst-1").filter("request.input.text::hello"))
                .unwrap()
                .into_result()
        })
        .await;

        assert!(collection.logs.is_empty());
        assert_eq!(collection.pagination.matched, Some(0));
    }

    #[tokio::test]
    async fn test_delete_user_data() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v2/user_data"))
            .and(query_param("customer_id", "cust-2"))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let status = run(move || {
            v2(uri)
                .delete_user_data(&DeleteUserDataOptions::new("cust-2"))
                .unwrap()
                .status_code
        })
        .await;

        assert_eq!(status, 202);
    }
}
