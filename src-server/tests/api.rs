use std::path::Path;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use todo_server_lib::{
    config::Config,
    domain::Todo,
    routes::{api_router, setup_router},
    AppState,
};

async fn test_state() -> AppState {
    let config = Config::from_lookup(|k| (k == "DATABASE_URL").then(|| ":memory:".to_string()))
        .expect("config");
    AppState::open(&config).await.expect("state")
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn list(app: &Router) -> Vec<Todo> {
    let (status, body) = send(app, "GET", "/todos", None).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}

async fn add(app: &Router, text: &str, parent_id: Option<u32>) -> Todo {
    let (status, body) = send(
        app,
        "POST",
        "/todos",
        Some(json!({ "text": text, "parent_id": parent_id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_empty_list() {
    let app = api_router(test_state().await);
    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn test_created_item_is_listed_unmarked() {
    let app = api_router(test_state().await);

    let added = add(&app, "first", None).await;
    assert_eq!(added.text, "first");

    let todos = list(&app).await;
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].text, "first");
    assert!(!todos[0].mark);
    assert_eq!(todos[0].parent_id, None);
}

#[tokio::test]
async fn test_double_toggle_restores_state() {
    let app = api_router(test_state().await);
    let added = add(&app, "toggle", None).await;
    let uri = format!("/todos/{}/mark", added.id);

    let (status, _) = send(&app, "POST", &uri, Some(json!({ "mark": true }))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(list(&app).await[0].mark);

    let (status, _) = send(&app, "POST", &uri, Some(json!({ "mark": false }))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!list(&app).await[0].mark);
}

#[tokio::test]
async fn test_delete_removes_item_and_children() {
    let app = api_router(test_state().await);
    let parent = add(&app, "parent", None).await;
    add(&app, "child", Some(parent.id)).await;
    let keep = add(&app, "keep", None).await;

    let (status, _) = send(&app, "DELETE", &format!("/todos/{}", parent.id), None).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(list(&app).await, vec![keep]);
}

#[tokio::test]
async fn test_empty_text_is_bad_request() {
    let app = api_router(test_state().await);

    let (status, body) = send(&app, "POST", "/todos", Some(json!({ "text": "  ", "parent_id": null }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let err: Value = serde_json::from_slice(&body).unwrap();
    assert!(err["error"].as_str().unwrap().contains("empty"));
    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn test_missing_parent_is_bad_request() {
    let app = api_router(test_state().await);

    let (status, _) = send(&app, "POST", "/todos", Some(json!({ "text": "x", "parent_id": 9 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let app = api_router(test_state().await);

    let (status, _) = send(&app, "POST", "/todos/5/mark", Some(json!({ "mark": true }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/todos/5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_static_path_is_not_found() {
    let app = setup_router(test_state().await, Path::new("does-not-exist"));

    let (status, _) = send(&app, "GET", "/nope.js", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", "/todos", None).await;
    assert_eq!(status, StatusCode::OK);
}

fn assert_json_bad_request(status: StatusCode, body: &[u8]) {
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let err: Value = serde_json::from_slice(body).expect("error body should be JSON");
    assert!(err["error"].is_string());
}

#[tokio::test]
async fn test_missing_text_field_is_json_bad_request() {
    let app = api_router(test_state().await);

    let (status, body) = send(&app, "POST", "/todos", Some(json!({ "parent_id": null }))).await;
    assert_json_bad_request(status, &body);
}

#[tokio::test]
async fn test_missing_content_type_is_json_bad_request() {
    let app = api_router(test_state().await);

    let req = Request::builder()
        .method("POST")
        .uri("/todos")
        .body(Body::from(json!({ "text": "x" }).to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    assert_json_bad_request(status, &body);
    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn test_non_numeric_id_is_json_bad_request() {
    let app = api_router(test_state().await);

    let (status, body) = send(&app, "POST", "/todos/abc/mark", Some(json!({ "mark": true }))).await;
    assert_json_bad_request(status, &body);

    let (status, body) = send(&app, "DELETE", "/todos/-1", None).await;
    assert_json_bad_request(status, &body);
}
