//! Integration tests for public share access and access recording.

use http::StatusCode;
use linkhub_store::adapter::LinkStore;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_access_valid_link() {
    let app = TestApp::new().await;
    let link = app.create_link("acme", "reports").await;
    let id = link["id"].as_str().unwrap();

    let response = app.request("GET", &format!("/api/shared/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["valid"], true);
    assert_eq!(response.body["data"]["link"]["id"], *id);
}

#[tokio::test]
async fn test_access_unknown_token() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/shared/unknown", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["valid"], false);
    assert_eq!(response.body["data"]["reason"], "not_found");
}

#[tokio::test]
async fn test_access_revoked_link_with_future_expiry() {
    let app = TestApp::new().await;
    let link = app.create_link("acme", "home").await;
    let id = link["id"].as_str().unwrap();

    app.request("POST", &format!("/api/links/{id}/revoke"), None)
        .await;

    let response = app.request("GET", &format!("/api/shared/{id}"), None).await;
    assert_eq!(response.body["data"]["valid"], false);
    assert_eq!(response.body["data"]["reason"], "revoked");
}

#[tokio::test]
async fn test_access_expired_link_persists_transition() {
    let app = TestApp::new().await;
    let link = app.create_link("acme", "home").await;
    let id = link["id"].as_str().unwrap().to_string();

    let mut links = app.store.load_all_links().await.unwrap();
    links[0].expires_at = chrono::Utc::now() - chrono::Duration::seconds(1);
    app.store.save_all_links(&links).await.unwrap();

    let response = app.request("GET", &format!("/api/shared/{id}"), None).await;
    assert_eq!(response.body["data"]["valid"], false);
    assert_eq!(response.body["data"]["reason"], "expired");

    let stored = app.store.load_all_links().await.unwrap();
    assert_eq!(stored[0].status, linkhub_entity::link::LinkStatus::Expired);
}

#[tokio::test]
async fn test_record_access_increments_count() {
    let app = TestApp::new().await;
    let link = app.create_link("acme", "home").await;
    let id = link["id"].as_str().unwrap();

    let first = app
        .request(
            "POST",
            &format!("/api/shared/{id}/access"),
            Some(serde_json::json!({"origin": "home"})),
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["data"]["access_count"], 1);

    let second = app
        .request(
            "POST",
            &format!("/api/shared/{id}/access"),
            Some(serde_json::json!({"origin": "home"})),
        )
        .await;
    assert_eq!(second.body["data"]["access_count"], 2);

    let fetched = app.request("GET", &format!("/api/links/{id}"), None).await;
    assert_eq!(fetched.body["data"]["access_count"], 2);
}

#[tokio::test]
async fn test_record_access_on_revoked_link_conflicts() {
    let app = TestApp::new().await;
    let link = app.create_link("acme", "home").await;
    let id = link["id"].as_str().unwrap();

    app.request("POST", &format!("/api/links/{id}/revoke"), None)
        .await;

    let response = app
        .request(
            "POST",
            &format!("/api/shared/{id}/access"),
            Some(serde_json::json!({"origin": "home"})),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_record_access_on_unknown_link_not_found() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/api/shared/unknown/access",
            Some(serde_json::json!({"origin": "home"})),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
