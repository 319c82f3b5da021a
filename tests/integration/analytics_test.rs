//! Integration tests for analytics, retention sweep, and health.

use http::StatusCode;
use linkhub_store::adapter::LinkStore;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_analytics_counts_and_recent_accesses() {
    let app = TestApp::new().await;
    let home = app.create_link("acme", "home").await;
    let reports = app.create_link("acme", "reports").await;
    let reports_id = reports["id"].as_str().unwrap();
    let home_id = home["id"].as_str().unwrap();

    app.request("POST", &format!("/api/links/{reports_id}/revoke"), None)
        .await;
    app.request(
        "POST",
        &format!("/api/shared/{home_id}/access"),
        Some(serde_json::json!({"origin": "home"})),
    )
    .await;

    let response = app.request("GET", "/api/analytics", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let data = &response.body["data"];
    assert_eq!(data["status_counts"]["active"], 1);
    assert_eq!(data["status_counts"]["revoked"], 1);
    assert_eq!(data["status_counts"]["expired"], 0);
    assert_eq!(data["origin_counts"]["home"], 1);
    assert_eq!(data["origin_counts"]["reports"], 1);
    assert_eq!(data["total_access_count"], 1);

    let recent = data["recent_accesses"].as_array().unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0]["link_id"], *home_id);
}

#[tokio::test]
async fn test_analytics_company_scope() {
    let app = TestApp::new().await;
    app.create_link("acme", "home").await;
    app.create_link("globex", "home").await;

    let response = app
        .request("GET", "/api/analytics?company_id=globex", None)
        .await;
    assert_eq!(response.body["data"]["status_counts"]["active"], 1);
}

#[tokio::test]
async fn test_sweep_removes_expired_retains_revoked() {
    let app = TestApp::new().await;
    let expired = app.create_link("acme", "home").await;
    let revoked = app.create_link("acme", "home").await;
    let keep = app.create_link("acme", "home").await;

    let revoked_id = revoked["id"].as_str().unwrap();
    app.request("POST", &format!("/api/links/{revoked_id}/revoke"), None)
        .await;

    // Both the expired and the revoked link are past their expiry instant.
    let overdue = chrono::Utc::now() - chrono::Duration::seconds(1);
    let mut links = app.store.load_all_links().await.unwrap();
    for link in links.iter_mut() {
        if link.id != keep["id"].as_str().unwrap() {
            link.expires_at = overdue;
        }
    }
    app.store.save_all_links(&links).await.unwrap();

    let response = app
        .request("POST", "/api/admin/retention/sweep", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["removed"], 1);

    let remaining = app.store.load_all_links().await.unwrap();
    let ids: Vec<&str> = remaining.iter().map(|l| l.id.as_str()).collect();
    assert!(ids.contains(&revoked_id));
    assert!(ids.contains(&keep["id"].as_str().unwrap()));
    assert!(!ids.contains(&expired["id"].as_str().unwrap()));
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = TestApp::new().await;

    let health = app.request("GET", "/api/health", None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["data"]["status"], "ok");

    let detailed = app.request("GET", "/api/health/detailed", None).await;
    assert_eq!(detailed.status, StatusCode::OK);
    assert_eq!(detailed.body["data"]["store"], "connected");
}
