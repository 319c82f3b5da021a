//! Integration tests for link create, list, revoke, and delete.

use http::StatusCode;
use linkhub_store::adapter::LinkStore;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_link() {
    let app = TestApp::new().await;
    let link = app.create_link("acme", "reports").await;

    let id = link["id"].as_str().expect("id missing");
    assert_eq!(id.len(), 32);
    assert_eq!(link["status"], "active");
    assert_eq!(link["access_count"], 0);
    assert_eq!(
        link["url"],
        format!("{}/shared/{}", app.config.share.public_base_url, id)
    );
}

#[tokio::test]
async fn test_create_link_rejects_unknown_origin() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/api/links",
            Some(serde_json::json!({
                "created_by": "test-user",
                "company_ids": ["acme"],
                "origin": "emails",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_link_unknown_expiration_defaults_to_one_day() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/api/links",
            Some(serde_json::json!({
                "created_by": "test-user",
                "company_ids": ["acme"],
                "origin": "home",
                "expiration": "next-century",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let created_at: chrono::DateTime<chrono::Utc> =
        response.body["data"]["created_at"].as_str().unwrap().parse().unwrap();
    let expires_at: chrono::DateTime<chrono::Utc> =
        response.body["data"]["expires_at"].as_str().unwrap().parse().unwrap();
    assert_eq!(expires_at - created_at, chrono::Duration::hours(24));
}

#[tokio::test]
async fn test_list_links_scoped_by_company() {
    let app = TestApp::new().await;
    app.create_link("acme", "home").await;
    app.create_link("globex", "reports").await;

    let all = app.request("GET", "/api/links", None).await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.body["data"].as_array().unwrap().len(), 2);

    let scoped = app
        .request("GET", "/api/links?company_id=acme", None)
        .await;
    assert_eq!(scoped.body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_link_by_token_and_url_suffix() {
    let app = TestApp::new().await;
    let link = app.create_link("acme", "home").await;
    let id = link["id"].as_str().unwrap();

    let by_id = app.request("GET", &format!("/api/links/{id}"), None).await;
    assert_eq!(by_id.status, StatusCode::OK);
    assert_eq!(by_id.body["data"]["id"], *id);

    let missing = app.request("GET", "/api/links/nope", None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_revoke_link() {
    let app = TestApp::new().await;
    let link = app.create_link("acme", "home").await;
    let id = link["id"].as_str().unwrap();

    let response = app
        .request("POST", &format!("/api/links/{id}/revoke"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let fetched = app.request("GET", &format!("/api/links/{id}"), None).await;
    assert_eq!(fetched.body["data"]["status"], "revoked");

    let missing = app
        .request("POST", "/api/links/nope/revoke", None)
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_link() {
    let app = TestApp::new().await;
    let link = app.create_link("acme", "home").await;
    let id = link["id"].as_str().unwrap();

    let response = app
        .request("DELETE", &format!("/api/links/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let fetched = app.request("GET", &format!("/api/links/{id}"), None).await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_expiring_links_excludes_revoked() {
    let app = TestApp::new().await;
    app.create_link("acme", "home").await;
    let revoked = app.create_link("acme", "home").await;
    let revoked_id = revoked["id"].as_str().unwrap();
    app.request("POST", &format!("/api/links/{revoked_id}/revoke"), None)
        .await;

    let response = app
        .request("GET", "/api/links/expiring?hours=48", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let items = response.body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_ne!(items[0]["id"], *revoked_id);
}

#[tokio::test]
async fn test_expired_link_surfaces_as_expired_in_listing() {
    let app = TestApp::new().await;
    let link = app.create_link("acme", "home").await;
    let id = link["id"].as_str().unwrap().to_string();

    // Rewind the persisted expiry so the link is overdue.
    let mut links = app.store.load_all_links().await.unwrap();
    links[0].expires_at = chrono::Utc::now() - chrono::Duration::seconds(5);
    app.store.save_all_links(&links).await.unwrap();

    let listed = app.request("GET", "/api/links", None).await;
    assert_eq!(listed.body["data"][0]["status"], "expired");

    // The lazy transition was written through.
    let stored = app.store.load_all_links().await.unwrap();
    assert_eq!(stored[0].id, id);
    assert_eq!(stored[0].status, linkhub_entity::link::LinkStatus::Expired);
}
