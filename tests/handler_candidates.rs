mod common;

use axum_test::TestServer;
use common::CountingStore;
use serde_json::json;
use std::sync::Arc;

fn server_with_store() -> (TestServer, Arc<CountingStore>) {
    let store = Arc::new(CountingStore::with_candidates(common::seed_candidates()));
    let state = common::create_test_state(store.clone());
    let server = TestServer::new(common::test_router(state)).unwrap();
    (server, store)
}

fn server() -> TestServer {
    server_with_store().0
}

#[tokio::test]
async fn test_list_candidates() {
    let server = server();

    let response = server.get("/api/candidates").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["email"], "john.doe@example.com");
    assert_eq!(items[0]["firstName"], "John");
    assert_eq!(items[1]["email"], "jane.smith@example.com");
}

#[tokio::test]
async fn test_list_candidates_empty() {
    let store = Arc::new(CountingStore::default());
    let server = TestServer::new(common::test_router(common::create_test_state(store))).unwrap();

    let response = server.get("/api/candidates").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!([]));
}

#[tokio::test]
async fn test_get_candidate_success() {
    let server = server();

    let response = server.get("/api/candidates/jane.smith@example.com").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], 2);
    assert_eq!(json["email"], "jane.smith@example.com");
    assert_eq!(json["lastName"], "Smith");
    assert!(json.get("linkedInProfileUrl").is_some());
    assert!(json.get("gitHubProfileUrl").is_some());
}

#[tokio::test]
async fn test_get_candidate_not_found() {
    let server = server();

    let response = server.get("/api/candidates/nobody@example.com").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_create_candidate() {
    let (server, store) = server_with_store();

    let response = server
        .post("/api/candidates")
        .json(&json!({
            "firstName": "Alice",
            "lastName": "Brown",
            "phoneNumber": "1234567890",
            "email": "alice@example.com",
            "preferredCallTime": "Morning",
            "linkedInProfileUrl": "https://www.linkedin.com/in/alice",
            "gitHubProfileUrl": "https://github.com/alice",
            "comment": "Referred"
        }))
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], 3);
    assert_eq!(json["email"], "alice@example.com");
    assert_eq!(json["gitHubProfileUrl"], "https://github.com/alice");
    assert_eq!(
        store.insert_calls.load(std::sync::atomic::Ordering::SeqCst),
        1
    );

    let listed = server.get("/api/candidates").await;
    assert_eq!(listed.json::<serde_json::Value>().as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_update_candidate_overwrites_all_fields() {
    let server = server();

    // Warm both cache entries first.
    server.get("/api/candidates").await.assert_status_ok();
    server
        .get("/api/candidates/john.doe@example.com")
        .await
        .assert_status_ok();

    let response = server
        .post("/api/candidates")
        .json(&json!({
            "email": "john.doe@example.com",
            "comment": "Prefers email"
        }))
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], 1);
    assert_eq!(json["comment"], "Prefers email");
    assert!(json["firstName"].is_null());

    let fetched = server
        .get("/api/candidates/john.doe@example.com")
        .await
        .json::<serde_json::Value>();
    assert_eq!(fetched["comment"], "Prefers email");
    assert!(fetched["lastName"].is_null());

    let listed = server.get("/api/candidates").await.json::<serde_json::Value>();
    assert_eq!(listed[0]["comment"], "Prefers email");
}

#[tokio::test]
async fn test_upsert_without_email_is_rejected() {
    let (server, store) = server_with_store();

    let response = server
        .post("/api/candidates")
        .json(&json!({ "firstName": "Nobody" }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(
        store.insert_calls.load(std::sync::atomic::Ordering::SeqCst),
        0
    );
}

#[tokio::test]
async fn test_upsert_with_empty_email_is_rejected() {
    let server = server();

    let response = server
        .post("/api/candidates")
        .json(&json!({ "email": "", "firstName": "Nobody" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_delete_candidate() {
    let server = server();
    server.get("/api/candidates").await.assert_status_ok();

    let response = server.delete("/api/candidates/john.doe@example.com").await;

    response.assert_status(axum::http::StatusCode::NO_CONTENT);
    server
        .get("/api/candidates/john.doe@example.com")
        .await
        .assert_status_not_found();

    let listed = server.get("/api/candidates").await.json::<serde_json::Value>();
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_missing_candidate_is_no_content() {
    let (server, store) = server_with_store();

    let response = server.delete("/api/candidates/nobody@example.com").await;

    response.assert_status(axum::http::StatusCode::NO_CONTENT);
    assert_eq!(
        store.delete_calls.load(std::sync::atomic::Ordering::SeqCst),
        0
    );
}

#[tokio::test]
async fn test_delete_without_email_is_rejected() {
    let server = server();

    let response = server.delete("/api/candidates").await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["field"], "email");
}

#[tokio::test]
async fn test_list_without_cache_reads_store_each_time() {
    let store = Arc::new(CountingStore::with_candidates(common::seed_candidates()));
    let state = common::create_uncached_state(store.clone());
    let server = TestServer::new(common::test_router(state)).unwrap();

    server.get("/api/candidates").await.assert_status_ok();
    server.get("/api/candidates").await.assert_status_ok();

    assert_eq!(store.list_calls(), 2);
}

#[tokio::test]
async fn test_repeated_list_hits_cache() {
    let (server, store) = server_with_store();

    server.get("/api/candidates").await.assert_status_ok();
    server.get("/api/candidates").await.assert_status_ok();

    assert_eq!(store.list_calls(), 1);
}
