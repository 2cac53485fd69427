use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory::deck::DeckFactory};
use tower::ServiceExt;

use crate::server::{
    data::deck::DeckRepository, router::router, service::deck::DeckService, state::AppState,
};

mod list;
mod lookups;
mod read;

/// Helper function to build the application router over a fresh in-memory database
///
/// The returned context must be kept alive for the duration of the test.
async fn setup() -> (TestContext, Router) {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();

    let service = DeckService::new(Arc::new(DeckRepository::new(db)));
    let app = router().with_state(AppState::new(service));

    (test, app)
}

/// Helper function to send a request with an optional JSON body and decode the response
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = body.map(|json| json.to_string());
    send_raw(app, method, uri, body).await
}

/// Helper function to send a request with a raw JSON-typed body
async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Helper function returning a complete, valid create body
fn deck_body(name: &str) -> Value {
    json!({
        "name": name,
        "description": "A deck created over HTTP",
        "colors": ["U", "R"],
        "tierRating": "A",
        "deckType": "CONTROL",
        "gameStage": "MID",
        "hasCardSleeves": true,
        "isComplete": true,
        "storageLocation": "Binder 2",
    })
}

/// Helper function to create a deck over HTTP and return its JSON representation
async fn create(app: &Router, body: Value) -> Value {
    let (status, json) = send(app, Method::POST, "/decks", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {}", json);
    json["data"].clone()
}

fn ids(json: &Value) -> Vec<String> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|deck| deck["id"].as_str().unwrap().to_string())
        .collect()
}
