#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use schoolerp::router::init_router;
use schoolerp::state::AppState;
use schoolerp_config::{SchemaConfig, UnknownFields};
use schoolerp_db::{DocumentStore, MemoryStore};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub fn setup_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::with_store(store.clone() as Arc<dyn DocumentStore>);
    (state, store)
}

pub fn setup_test_app() -> (Router, Arc<MemoryStore>) {
    let (state, store) = setup_state();
    (init_router(state), store)
}

pub fn setup_strict_app() -> Router {
    let (mut state, _) = setup_state();
    state.schema_config = SchemaConfig {
        unknown_fields: UnknownFields::Reject,
    };
    init_router(state)
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_string(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Creates a document and returns its id.
pub async fn create(app: &Router, resource: &str, body: Value) -> String {
    let (status, created) = send(app, "POST", &format!("/{resource}"), Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {created}");
    created["id"].as_str().unwrap().to_string()
}
