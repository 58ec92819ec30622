//! Integration tests for the workspace resource APIs.

use assistant_client::{
    AssistantClient, CreateEntity, CreateExample, CreateIntent, CreateValue, CreateWorkspace,
    DialogNode, GetQuery, ListQuery, LogQuery, UpdateDialogNode, UpdateEntity, UpdateExample,
    UpdateIntent, UpdateValue, UpdateWorkspace, ValueType,
};
use serde_json::{Value, json};
use wiremock::matchers::{
    bearer_token, body_json, body_partial_json, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

const VERSION: &str = "2018-02-16";
const WS: &str = "ws-1";

fn client(server: &MockServer) -> AssistantClient {
    AssistantClient::builder()
        .service_url(server.uri())
        .version(VERSION)
        .bearer_token("token")
        .build()
        .unwrap()
}

fn pagination(path: &str) -> Value {
    json!({"refresh_url": format!("{path}?version={VERSION}")})
}

async fn mount_json(server: &MockServer, verb: &str, at: &str, status: u16, body: Value) {
    Mock::given(method(verb))
        .and(path(at))
        .and(query_param("version", VERSION))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_bearer_token_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/workspaces"))
        .and(bearer_token("token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "workspaces": [],
            "pagination": pagination("/v1/workspaces")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server).workspaces().list(&ListQuery::default()).await.unwrap();
    assert!(page.workspaces.is_empty());
    assert!(!page.pagination.has_more());
}

// ─────────────────────────────────────────────────────────────────────────────
// Workspaces
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_workspace_lifecycle() {
    let server = MockServer::start().await;
    let workspace = json!({
        "workspace_id": "new-ws",
        "name": "test-workspace",
        "description": "temporary",
        "language": "en",
        "learning_opt_out": false
    });

    Mock::given(method("POST"))
        .and(path("/v1/workspaces"))
        .and(query_param_is_missing("append"))
        .and(body_partial_json(json!({
            "name": "test-workspace",
            "language": "en",
            "intents": [{"intent": "hello", "examples": [{"text": "hi"}]}]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(workspace.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let mut updated = workspace.clone();
    updated["name"] = json!("renamed");
    Mock::given(method("POST"))
        .and(path("/v1/workspaces/new-ws"))
        .and(query_param("append", "true"))
        .and(body_json(json!({"name": "renamed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated))
        .expect(1)
        .mount(&server)
        .await;

    let mut exported = workspace.clone();
    exported["intents"] = json!([{"intent": "hello", "examples": [{"text": "hi"}]}]);
    exported["entities"] = json!([]);
    exported["dialog_nodes"] = json!([]);
    exported["counterexamples"] = json!([]);
    Mock::given(method("GET"))
        .and(path("/v1/workspaces/new-ws"))
        .and(query_param("export", "true"))
        .and(query_param("include_audit", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(exported))
        .expect(1)
        .mount(&server)
        .await;

    mount_json(&server, "DELETE", "/v1/workspaces/new-ws", 200, json!({})).await;

    let client = client(&server);
    let mut create = CreateWorkspace::new("test-workspace", "en").with_description("temporary");
    create.intents.push(CreateIntent::new("hello").with_example("hi"));
    let created = client.workspaces().create(&create).await.unwrap();
    assert_eq!(created.workspace_id, "new-ws");

    let update = UpdateWorkspace {
        name: Some("renamed".to_string()),
        ..Default::default()
    };
    let renamed = client.workspaces().update("new-ws", &update, true).await.unwrap();
    assert_eq!(renamed.name, "renamed");

    let full = client.workspaces().get("new-ws", &GetQuery::full()).await.unwrap();
    let intents = full.intents.unwrap();
    assert_eq!(intents[0].examples.as_ref().map(Vec::len), Some(1));

    client.workspaces().delete("new-ws").await.unwrap();
}

#[tokio::test]
async fn test_workspace_pagination_counts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/workspaces"))
        .and(query_param("page_limit", "1"))
        .and(query_param("include_count", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "workspaces": [{"workspace_id": "a", "name": "a", "language": "en"}],
            "pagination": {
                "refresh_url": "/v1/workspaces?version=2018-02-16&page_limit=1&include_count=true",
                "next_url": "/v1/workspaces?cursor=base64&version=2018-02-16&page_limit=1",
                "next_cursor": "base64",
                "total": 3,
                "matched": 3
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server)
        .workspaces()
        .list(&ListQuery::default().page_limit(1).include_count())
        .await
        .unwrap();

    assert!(page.workspaces.len() <= 1);
    let total = page.pagination.total.unwrap();
    assert!(total >= page.workspaces.len() as u64);
    assert!(page.pagination.has_more());
}

// ─────────────────────────────────────────────────────────────────────────────
// Intents, examples, counterexamples
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_intent_crud() {
    let server = MockServer::start().await;
    let base = "/v1/workspaces/ws-1/intents";

    Mock::given(method("GET"))
        .and(path(base))
        .and(query_param("export", "true"))
        .and(query_param("page_limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "intents": [{"intent": "hello", "examples": [{"text": "hi"}]}],
            "pagination": pagination(base)
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(base))
        .and(body_json(json!({
            "intent": "test-intent",
            "description": "test",
            "examples": [{"text": "one"}, {"text": "two"}]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "intent": "test-intent", "description": "test"
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_json(
        &server,
        "GET",
        "/v1/workspaces/ws-1/intents/test-intent",
        200,
        json!({"intent": "test-intent", "description": "test"}),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/v1/workspaces/ws-1/intents/test-intent"))
        .and(body_json(json!({"intent": "test-intent-updated", "description": "updated"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "intent": "test-intent-updated", "description": "updated"
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_json(
        &server,
        "DELETE",
        "/v1/workspaces/ws-1/intents/test-intent-updated",
        200,
        json!({}),
    )
    .await;

    let intents = client(&server).intents();

    let page = intents
        .list(WS, &ListQuery::default().export().page_limit(1))
        .await
        .unwrap();
    assert_eq!(page.intents.len(), 1);

    let request = CreateIntent::new("test-intent")
        .with_description("test")
        .with_example("one")
        .with_example("two");
    let created = intents.create(WS, &request).await.unwrap();
    assert_eq!(created.intent, "test-intent");

    let fetched = intents.get(WS, "test-intent", &GetQuery::default()).await.unwrap();
    assert_eq!(fetched.description.as_deref(), Some("test"));

    let update = UpdateIntent {
        new_intent: Some("test-intent-updated".to_string()),
        new_description: Some("updated".to_string()),
        ..Default::default()
    };
    let updated = intents.update(WS, "test-intent", &update).await.unwrap();
    assert_eq!(updated.intent, "test-intent-updated");

    intents.delete(WS, "test-intent-updated").await.unwrap();
}

#[tokio::test]
async fn test_example_text_is_encoded_as_one_segment() {
    let server = MockServer::start().await;
    let encoded = "/v1/workspaces/ws-1/intents/weather/examples/is%20it%20sunny%3F";

    mount_json(
        &server,
        "POST",
        "/v1/workspaces/ws-1/intents/weather/examples",
        201,
        json!({"text": "is it sunny?"}),
    )
    .await;
    mount_json(&server, "GET", encoded, 200, json!({"text": "is it sunny?"})).await;
    Mock::given(method("POST"))
        .and(path(encoded))
        .and(body_json(json!({"text": "is it raining?"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"text": "is it raining?"})))
        .expect(1)
        .mount(&server)
        .await;
    mount_json(&server, "DELETE", encoded, 200, json!({})).await;
    mount_json(
        &server,
        "GET",
        "/v1/workspaces/ws-1/intents/weather/examples",
        200,
        json!({
            "examples": [{"text": "is it sunny?"}],
            "pagination": pagination("/v1/workspaces/ws-1/intents/weather/examples")
        }),
    )
    .await;

    let examples = client(&server).examples();
    let text = "is it sunny?";

    examples
        .create(WS, "weather", &CreateExample::new(text))
        .await
        .unwrap();
    let fetched = examples
        .get(WS, "weather", text, &GetQuery::default())
        .await
        .unwrap();
    assert_eq!(fetched.text, text);

    let update = UpdateExample {
        new_text: Some("is it raining?".to_string()),
        ..Default::default()
    };
    let updated = examples.update(WS, "weather", text, &update).await.unwrap();
    assert_eq!(updated.text, "is it raining?");

    let page = examples
        .list(WS, "weather", &ListQuery::default())
        .await
        .unwrap();
    assert_eq!(page.examples.len(), 1);

    examples.delete(WS, "weather", text).await.unwrap();
}

#[tokio::test]
async fn test_counterexample_crud() {
    let server = MockServer::start().await;
    let base = "/v1/workspaces/ws-1/counterexamples";
    let item = "/v1/workspaces/ws-1/counterexamples/I%20want%20financial%20advice%20today.";

    Mock::given(method("POST"))
        .and(path(base))
        .and(body_json(json!({"text": "I want financial advice today."})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"text": "I want financial advice today."})),
        )
        .expect(1)
        .mount(&server)
        .await;
    mount_json(
        &server,
        "GET",
        item,
        200,
        json!({"text": "I want financial advice today."}),
    )
    .await;
    mount_json(
        &server,
        "GET",
        base,
        200,
        json!({
            "counterexamples": [{"text": "I want financial advice today."}],
            "pagination": pagination(base)
        }),
    )
    .await;
    mount_json(&server, "DELETE", item, 200, json!({})).await;

    let api = client(&server).counterexamples();
    let text = "I want financial advice today.";

    assert_eq!(api.create(WS, text).await.unwrap().text, text);
    assert_eq!(
        api.get(WS, text, &GetQuery::default()).await.unwrap().text,
        text
    );
    assert_eq!(
        api.list(WS, &ListQuery::default()).await.unwrap().counterexamples.len(),
        1
    );
    api.delete(WS, text).await.unwrap();
}

// ─────────────────────────────────────────────────────────────────────────────
// Entities, values, synonyms
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_entity_crud() {
    let server = MockServer::start().await;
    let base = "/v1/workspaces/ws-1/entities";

    Mock::given(method("POST"))
        .and(path(base))
        .and(body_partial_json(json!({
            "entity": "test-entity",
            "description": "test",
            "values": [{"value": "sunny", "synonyms": ["bright"]}]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "entity": "test-entity", "description": "test", "fuzzy_match": false
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_json(
        &server,
        "GET",
        "/v1/workspaces/ws-1/entities/test-entity",
        200,
        json!({"entity": "test-entity", "values": [{"value": "sunny", "type": "synonyms"}]}),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/v1/workspaces/ws-1/entities/test-entity"))
        .and(body_json(json!({"entity": "test-entity-updated", "fuzzy_match": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "entity": "test-entity-updated", "fuzzy_match": true
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_json(
        &server,
        "DELETE",
        "/v1/workspaces/ws-1/entities/test-entity-updated",
        200,
        json!({}),
    )
    .await;
    mount_json(
        &server,
        "GET",
        base,
        200,
        json!({"entities": [{"entity": "appliance"}], "pagination": pagination(base)}),
    )
    .await;

    let entities = client(&server).entities();

    let request = CreateEntity::new("test-entity")
        .with_description("test")
        .with_value(CreateValue::new("sunny").with_synonym("bright"));
    let created = entities.create(WS, &request).await.unwrap();
    assert_eq!(created.fuzzy_match, Some(false));

    let fetched = entities
        .get(WS, "test-entity", &GetQuery { export: true, ..Default::default() })
        .await
        .unwrap();
    assert_eq!(fetched.values.unwrap()[0].value_type, ValueType::Synonyms);

    let update = UpdateEntity {
        new_entity: Some("test-entity-updated".to_string()),
        new_fuzzy_match: Some(true),
        ..Default::default()
    };
    let updated = entities.update(WS, "test-entity", &update).await.unwrap();
    assert_eq!(updated.entity, "test-entity-updated");

    let page = entities.list(WS, &ListQuery::default()).await.unwrap();
    assert_eq!(page.entities[0].entity, "appliance");

    entities.delete(WS, "test-entity-updated").await.unwrap();
}

#[tokio::test]
async fn test_value_and_synonym_crud() {
    let server = MockServer::start().await;
    let values = "/v1/workspaces/ws-1/entities/weather/values";
    let value = "/v1/workspaces/ws-1/entities/weather/values/partly%20cloudy";
    let synonyms = "/v1/workspaces/ws-1/entities/weather/values/partly%20cloudy/synonyms";
    let synonym = "/v1/workspaces/ws-1/entities/weather/values/partly%20cloudy/synonyms/overcast";

    Mock::given(method("POST"))
        .and(path(values))
        .and(body_json(json!({"value": "partly cloudy", "synonyms": ["overcast"]})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"value": "partly cloudy"})))
        .expect(1)
        .mount(&server)
        .await;
    mount_json(
        &server,
        "GET",
        value,
        200,
        json!({"value": "partly cloudy", "type": "synonyms", "synonyms": ["overcast"]}),
    )
    .await;
    Mock::given(method("POST"))
        .and(path(value))
        .and(body_json(json!({"metadata": {"severity": 1}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": "partly cloudy", "metadata": {"severity": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_json(
        &server,
        "GET",
        values,
        200,
        json!({"values": [{"value": "partly cloudy"}], "pagination": pagination(values)}),
    )
    .await;

    Mock::given(method("POST"))
        .and(path(synonyms))
        .and(body_json(json!({"synonym": "overcast"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"synonym": "overcast"})))
        .expect(1)
        .mount(&server)
        .await;
    mount_json(&server, "GET", synonym, 200, json!({"synonym": "overcast"})).await;
    Mock::given(method("POST"))
        .and(path(synonym))
        .and(body_json(json!({"synonym": "grey"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"synonym": "grey"})))
        .expect(1)
        .mount(&server)
        .await;
    mount_json(
        &server,
        "GET",
        synonyms,
        200,
        json!({"synonyms": [{"synonym": "grey"}], "pagination": pagination(synonyms)}),
    )
    .await;
    mount_json(
        &server,
        "DELETE",
        "/v1/workspaces/ws-1/entities/weather/values/partly%20cloudy/synonyms/grey",
        200,
        json!({}),
    )
    .await;
    mount_json(&server, "DELETE", value, 200, json!({})).await;

    let client = client(&server);
    let name = "partly cloudy";

    client
        .values()
        .create(WS, "weather", &CreateValue::new(name).with_synonym("overcast"))
        .await
        .unwrap();
    let fetched = client
        .values()
        .get(WS, "weather", name, &GetQuery::default())
        .await
        .unwrap();
    assert_eq!(fetched.synonyms.as_deref(), Some(&["overcast".to_string()][..]));

    let mut metadata = serde_json::Map::new();
    metadata.insert("severity".to_string(), json!(1));
    let update = UpdateValue {
        new_metadata: Some(metadata),
        ..Default::default()
    };
    let updated = client.values().update(WS, "weather", name, &update).await.unwrap();
    assert!(updated.metadata.is_some());
    assert_eq!(
        client
            .values()
            .list(WS, "weather", &ListQuery::default())
            .await
            .unwrap()
            .values
            .len(),
        1
    );

    let synonyms_api = client.synonyms();
    synonyms_api.create(WS, "weather", name, "overcast").await.unwrap();
    let fetched = synonyms_api
        .get(WS, "weather", name, "overcast", &GetQuery::default())
        .await
        .unwrap();
    assert_eq!(fetched.synonym, "overcast");
    let renamed = synonyms_api
        .update(WS, "weather", name, "overcast", "grey")
        .await
        .unwrap();
    assert_eq!(renamed.synonym, "grey");
    let page = synonyms_api
        .list(WS, "weather", name, &ListQuery::default())
        .await
        .unwrap();
    assert_eq!(page.synonyms.len(), 1);
    synonyms_api.delete(WS, "weather", name, "grey").await.unwrap();

    client.values().delete(WS, "weather", name).await.unwrap();
}

// ─────────────────────────────────────────────────────────────────────────────
// Dialog nodes
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_dialog_node_crud() {
    let server = MockServer::start().await;
    let base = "/v1/workspaces/ws-1/dialog_nodes";

    Mock::given(method("POST"))
        .and(path(base))
        .and(body_json(json!({
            "dialog_node": "test-node",
            "description": "test",
            "conditions": "#hello"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "dialog_node": "test-node", "description": "test", "conditions": "#hello"
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_json(
        &server,
        "GET",
        "/v1/workspaces/ws-1/dialog_nodes/test-node",
        200,
        json!({
            "dialog_node": "test-node",
            "type": "standard",
            "next_step": {"behavior": "jump_to", "dialog_node": "other", "selector": "body"}
        }),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/v1/workspaces/ws-1/dialog_nodes/test-node"))
        .and(body_json(json!({"dialog_node": "test-node-updated", "description": "updated"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "dialog_node": "test-node-updated", "description": "updated"
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_json(
        &server,
        "GET",
        base,
        200,
        json!({
            "dialog_nodes": [{"dialog_node": "a"}, {"dialog_node": "b"}],
            "pagination": pagination(base)
        }),
    )
    .await;
    mount_json(
        &server,
        "DELETE",
        "/v1/workspaces/ws-1/dialog_nodes/test-node-updated",
        200,
        json!({}),
    )
    .await;

    let nodes = client(&server).dialog_nodes();

    let node = DialogNode::new("test-node")
        .with_description("test")
        .with_conditions("#hello");
    nodes.create(WS, &node).await.unwrap();

    let fetched = nodes.get(WS, "test-node", &GetQuery::default()).await.unwrap();
    assert_eq!(fetched.node_type.as_deref(), Some("standard"));
    assert_eq!(fetched.next_step.unwrap().behavior, "jump_to");

    let update = UpdateDialogNode {
        new_dialog_node: Some("test-node-updated".to_string()),
        new_description: Some("updated".to_string()),
        ..Default::default()
    };
    let updated = nodes.update(WS, "test-node", &update).await.unwrap();
    assert_eq!(updated.dialog_node_id, "test-node-updated");

    assert_eq!(
        nodes.list(WS, &ListQuery::default()).await.unwrap().dialog_nodes.len(),
        2
    );
    nodes.delete(WS, "test-node-updated").await.unwrap();
}

// ─────────────────────────────────────────────────────────────────────────────
// Logs
// ─────────────────────────────────────────────────────────────────────────────

fn log_entry() -> Value {
    json!({
        "log_id": "log-1",
        "request": {"input": {"text": "hello"}, "context": {"conversation_id": "conv-1"}},
        "response": {
            "input": {"text": "hello"},
            "intents": [{"intent": "greeting", "confidence": 0.97}],
            "entities": [],
            "context": {"conversation_id": "conv-1", "system": {}},
            "output": {"log_messages": [], "text": ["Hi!"]}
        },
        "request_timestamp": "2018-02-16T12:00:00.000Z",
        "response_timestamp": "2018-02-16T12:00:00.120Z",
        "workspace_id": "ws-1",
        "language": "en"
    })
}

#[tokio::test]
async fn test_list_workspace_logs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/workspaces/ws-1/logs"))
        .and(query_param("page_limit", "5"))
        .and(query_param("sort", "-request_timestamp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "logs": [log_entry()],
            "pagination": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let logs = client(&server)
        .logs()
        .list(WS, &LogQuery::default().page_limit(5).sort("-request_timestamp"))
        .await
        .unwrap();

    assert_eq!(logs.logs.len(), 1);
    let log = &logs.logs[0];
    assert_eq!(log.response.text(), "Hi!");
    assert_eq!(log.request.context.as_ref().and_then(|c| c.conversation_id()), Some("conv-1"));
    assert!(logs.pagination.next_url.is_none());
}

#[tokio::test]
async fn test_list_all_logs_sends_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/logs"))
        .and(query_param("filter", "language::en,request.context.metadata.deployment::test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "logs": [],
            "pagination": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let logs = client(&server)
        .logs()
        .list_all(&LogQuery::default().filter("language::en,request.context.metadata.deployment::test"))
        .await
        .unwrap();
    assert!(logs.logs.is_empty());
}

#[tokio::test]
async fn test_auth_failure_is_classified() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "GET",
        "/v1/workspaces",
        401,
        json!({"error": "Unauthorized", "code": 401}),
    )
    .await;

    let err = client(&server)
        .workspaces()
        .list(&ListQuery::default())
        .await
        .unwrap_err();
    assert!(err.is_auth_error());
    assert_eq!(err.status(), Some(401));
}
