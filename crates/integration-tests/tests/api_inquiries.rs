//! Integration tests for the inquiry workflow.
//!
//! These tests require:
//! - A running `MongoDB` instance (docker run -d -p 27017:27017 mongo:7)
//! - The server running (cargo run -p budbar-server)
//!
//! Run with: cargo test -p budbar-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use uuid::Uuid;

/// Base URL for the menu API (configurable via environment).
fn base_url() -> String {
    std::env::var("BUDBAR_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

/// Log in with the bootstrap admin account and return a bearer token.
async fn admin_token(client: &Client) -> String {
    let email =
        std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@purepath.com".to_string());
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "Feelgoodmix".to_string());

    let resp = client
        .post(format!("{}/api/admin/login", base_url()))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to log in");

    assert_eq!(resp.status(), StatusCode::OK, "Login should succeed");
    let body: Value = resp.json().await.expect("Failed to parse login response");
    body["access_token"]
        .as_str()
        .expect("Login response should carry a token")
        .to_string()
}

/// Test helper: a pickup inquiry with a traceable customer name.
fn sample_inquiry(tag: &Uuid) -> Value {
    json!({
        "first_name": format!("it-customer-{tag}"),
        "phone_number": "555-0142",
        "delivery_method": "pickup",
        "items": [
            {
                "menu_item_id": Uuid::new_v4().to_string(),
                "title": "Blue Dream",
                "variant_name": "3.5g",
                "variant_price": 35.0,
                "quantity": 2,
                "discount": 0.0
            }
        ],
        "total": 70.0
    })
}

/// Test helper: submit an inquiry and return its id.
async fn submit_inquiry(client: &Client, payload: &Value) -> String {
    let resp = client
        .post(format!("{}/api/inquiries", base_url()))
        .json(payload)
        .send()
        .await
        .expect("Failed to submit inquiry");

    assert_eq!(resp.status(), StatusCode::OK, "Submission should succeed");
    let body: Value = resp.json().await.expect("Failed to parse inquiry");
    body["id"]
        .as_str()
        .expect("Inquiry should carry an id")
        .to_string()
}

// ============================================================================
// Submission Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and MongoDB"]
async fn test_submission_is_public_and_starts_pending() {
    let client = Client::new();
    let tag = Uuid::new_v4();

    let resp = client
        .post(format!("{}/api/inquiries", base_url()))
        .json(&sample_inquiry(&tag))
        .send()
        .await
        .expect("Failed to submit inquiry");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse inquiry");
    assert_eq!(body["status"], "pending");
    assert_eq!(body["total"], 70.0);
    assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));

    // Cleanup
    let token = admin_token(&client).await;
    let id = body["id"].as_str().expect("id checked above");
    let _ = client
        .delete(format!("{}/api/admin/inquiries/{id}", base_url()))
        .bearer_auth(token)
        .send()
        .await;
}

#[tokio::test]
#[ignore = "Requires running server and MongoDB"]
async fn test_delivery_inquiry_keeps_address() {
    let client = Client::new();
    let tag = Uuid::new_v4();

    let mut payload = sample_inquiry(&tag);
    payload["delivery_method"] = json!("delivery");
    payload["delivery_address"] = json!("100 Main St, Lansing, MI");

    let resp = client
        .post(format!("{}/api/inquiries", base_url()))
        .json(&payload)
        .send()
        .await
        .expect("Failed to submit delivery inquiry");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse inquiry");
    assert_eq!(body["delivery_method"], "delivery");
    assert_eq!(body["delivery_address"], "100 Main St, Lansing, MI");

    let token = admin_token(&client).await;
    let id = body["id"].as_str().expect("Inquiry should carry an id");
    let _ = client
        .delete(format!("{}/api/admin/inquiries/{id}", base_url()))
        .bearer_auth(token)
        .send()
        .await;
}

// ============================================================================
// Admin Workflow Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and MongoDB"]
async fn test_admin_listing_status_and_delete_flow() {
    let client = Client::new();
    let tag = Uuid::new_v4();
    let id = submit_inquiry(&client, &sample_inquiry(&tag)).await;
    let token = admin_token(&client).await;

    // The fresh inquiry should be near the top of the newest-first list
    let resp = client
        .get(format!("{}/api/admin/inquiries", base_url()))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to list inquiries");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse inquiry list");
    let inquiries = body.as_array().expect("Inquiry list should be an array");
    assert!(
        inquiries.iter().any(|inquiry| inquiry["id"] == id.as_str()),
        "Submitted inquiry should be listed"
    );

    // Mark it complete
    let resp = client
        .put(format!("{}/api/admin/inquiries/{id}/status", base_url()))
        .query(&[("status", "complete")])
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to update status");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse status response");
    assert_eq!(body["message"], "Status updated successfully");

    // Delete it, then verify it stays gone
    let resp = client
        .delete(format!("{}/api/admin/inquiries/{id}", base_url()))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to delete inquiry");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse delete response");
    assert_eq!(body["message"], "Inquiry deleted successfully");

    let resp = client
        .delete(format!("{}/api/admin/inquiries/{id}", base_url()))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to send second delete");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running server and MongoDB"]
async fn test_status_update_validates_before_writing() {
    let client = Client::new();
    let tag = Uuid::new_v4();
    let id = submit_inquiry(&client, &sample_inquiry(&tag)).await;
    let token = admin_token(&client).await;

    // Unknown status value
    let resp = client
        .put(format!("{}/api/admin/inquiries/{id}/status", base_url()))
        .query(&[("status", "archived")])
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to send invalid status");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Missing status entirely
    let resp = client
        .put(format!("{}/api/admin/inquiries/{id}/status", base_url()))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to send missing status");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Neither attempt should have altered the stored status
    let resp = client
        .get(format!("{}/api/admin/inquiries", base_url()))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to list inquiries");

    let body: Value = resp.json().await.expect("Failed to parse inquiry list");
    let inquiry = body
        .as_array()
        .expect("Inquiry list should be an array")
        .iter()
        .find(|inquiry| inquiry["id"] == id.as_str())
        .expect("Inquiry should still exist")
        .clone();
    assert_eq!(inquiry["status"], "pending");

    let _ = client
        .delete(format!("{}/api/admin/inquiries/{id}", base_url()))
        .bearer_auth(&token)
        .send()
        .await;
}

// ============================================================================
// Authorization Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and MongoDB"]
async fn test_listing_requires_token() {
    let client = Client::new();

    let resp = client
        .get(format!("{}/api/admin/inquiries", base_url()))
        .send()
        .await
        .expect("Failed to send unauthenticated list");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
