//! Handler-level behavior: payload parsing, status codes and body shapes.

use std::sync::Arc;

use serde_json::{json, Value};

use notes_api::api::handlers;
use notes_api::{MemoryStore, NotesStore};

fn memory_store() -> NotesStore {
    NotesStore::new(Arc::new(MemoryStore::new()))
}

#[test]
fn ping_reports_healthy() {
    let resp = handlers::ping();
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, json!({ "message": "healthy" }));
}

#[tokio::test]
async fn malformed_payload_yields_400_on_every_endpoint() {
    let store = memory_store();
    let body = "{'name': 'foo'}";

    let responses = vec![
        handlers::get_all_for_user(&store, body).await,
        handlers::insert_topic(&store, body).await,
        handlers::delete_topic(&store, body).await,
        handlers::insert_note(&store, body).await,
        handlers::get_all_notes(&store, body).await,
        handlers::delete_note(&store, body).await,
    ];

    for resp in responses {
        assert_eq!(resp.status, 400);
        assert_eq!(resp.body, json!({ "error": "invalid payload" }));
    }
}

#[tokio::test]
async fn insert_topic_then_fetch_round_trips() {
    let store = memory_store();

    let resp = handlers::insert_topic(&store, r#"{"userId":"u-1","title":"rust"}"#).await;
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, Value::Null);

    let resp = handlers::get_all_notes(&store, r#"{"userId":"u-1","title":"rust"}"#).await;
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body["title"], "rust");
    assert_eq!(resp.body["notes"], json!([]));
}

#[tokio::test]
async fn note_insert_and_delete_flow() {
    let store = memory_store();

    handlers::insert_topic(&store, r#"{"userId":"u-1","title":"rust"}"#).await;

    let body = r#"{"userId":"u-1","title":"rust","note":{"title":"n1","content":"c1"}}"#;
    let resp = handlers::insert_note(&store, body).await;
    assert_eq!(resp.status, 200);

    let resp = handlers::get_all_notes(&store, r#"{"userId":"u-1","title":"rust"}"#).await;
    assert_eq!(resp.body["notes"][0]["title"], "n1");
    assert_eq!(resp.body["notes"][0]["content"], "c1");

    let body = r#"{"userId":"u-1","title":"rust","noteTitle":"n1"}"#;
    let resp = handlers::delete_note(&store, body).await;
    assert_eq!(resp.status, 200);

    let resp = handlers::get_all_notes(&store, r#"{"userId":"u-1","title":"rust"}"#).await;
    assert_eq!(resp.body["notes"], json!([]));
}

#[tokio::test]
async fn get_all_for_user_lists_every_topic() {
    let store = memory_store();

    handlers::insert_topic(&store, r#"{"userId":"u-1","title":"rust"}"#).await;
    handlers::insert_topic(&store, r#"{"userId":"u-1","title":"dynamo"}"#).await;

    let resp = handlers::get_all_for_user(&store, r#"{"id":"u-1"}"#).await;
    assert_eq!(resp.status, 200);
    let topics = resp.body.as_array().expect("array body");
    assert_eq!(topics.len(), 2);
}

#[tokio::test]
async fn fetching_an_absent_topic_returns_null() {
    let store = memory_store();

    let resp = handlers::get_all_notes(&store, r#"{"userId":"u-1","title":"missing"}"#).await;
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, Value::Null);
}

#[tokio::test]
async fn note_insert_into_unknown_topic_maps_to_500() {
    let store = memory_store();

    let body = r#"{"userId":"u-1","title":"missing","note":{"title":"n1","content":"c1"}}"#;
    let resp = handlers::insert_note(&store, body).await;
    assert_eq!(resp.status, 500);
    assert!(resp.body["error"]
        .as_str()
        .unwrap()
        .contains("unknown topic"));
}

#[tokio::test]
async fn topic_delete_is_idempotent_at_the_handler_level() {
    let store = memory_store();

    let resp = handlers::delete_topic(&store, r#"{"userId":"u-1","title":"never"}"#).await;
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, Value::Null);
}

#[tokio::test]
async fn missing_fields_decode_to_empty_values_and_proceed() {
    let store = memory_store();

    let resp = handlers::insert_topic(&store, "{}").await;
    assert_eq!(resp.status, 200);

    let resp = handlers::get_all_notes(&store, "{}").await;
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body["title"], "");
}
