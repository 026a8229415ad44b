//! Integration tests for delivery validation.
//!
//! These tests require:
//! - A running `MongoDB` instance (docker run -d -p 27017:27017 mongo:7)
//! - The server running (cargo run -p budbar-server)
//! - Network access to the configured geocoder
//!
//! Distances depend on where the geocoder pins each town's centroid, so
//! assertions target the tier, not exact mileage.
//!
//! Run with: cargo test -p budbar-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

/// Base URL for the menu API (configurable via environment).
fn base_url() -> String {
    std::env::var("BUDBAR_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

/// Test helper: request a delivery quote.
async fn validate(client: &Client, address: &str, cart_total: f64) -> reqwest::Response {
    client
        .post(format!("{}/api/validate-delivery", base_url()))
        .json(&json!({ "delivery_address": address, "cart_total": cart_total }))
        .send()
        .await
        .expect("Failed to request delivery validation")
}

// ============================================================================
// Tier Mapping Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and geocoder access"]
async fn test_nearby_address_maps_to_lowest_tier() {
    let client = Client::new();

    // The shop's own town, a couple of miles from the pickup point at most
    let resp = validate(&client, "Bancroft, MI 48414", 60.0).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let quote: Value = resp.json().await.expect("Failed to parse quote");
    assert_eq!(quote["minimum_order"], 60.0);
    assert_eq!(quote["meets_minimum"], true);
    assert_eq!(quote["remaining_needed"], 0.0);
    assert!(
        quote["distance_miles"].as_f64().expect("distance") < 10.0,
        "Bancroft itself should be inside the first tier"
    );
}

#[tokio::test]
#[ignore = "Requires running server and geocoder access"]
async fn test_mid_distance_address_reports_shortfall() {
    let client = Client::new();

    // Lansing sits roughly 25 miles out, in the 20-35 mile tier
    let resp = validate(&client, "Lansing, MI", 75.0).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let quote: Value = resp.json().await.expect("Failed to parse quote");
    assert_eq!(quote["minimum_order"], 90.0);
    assert_eq!(quote["meets_minimum"], false);
    assert_eq!(quote["remaining_needed"], 15.0);
    assert_eq!(quote["cart_total"], 75.0);
}

#[tokio::test]
#[ignore = "Requires running server and geocoder access"]
async fn test_far_address_gets_top_tier_not_rejection() {
    let client = Client::new();

    // Chicago is a few hours away; there is no distance cutoff, just the
    // highest minimum
    let resp = validate(&client, "Chicago, IL", 120.0).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let quote: Value = resp.json().await.expect("Failed to parse quote");
    assert_eq!(quote["minimum_order"], 111.0);
    assert_eq!(quote["meets_minimum"], true);
    assert!(
        quote["distance_miles"].as_f64().expect("distance") > 100.0,
        "Chicago should be well past every tier bound"
    );
}

// ============================================================================
// Rejection Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and geocoder access"]
async fn test_unresolvable_address_is_a_bad_request() {
    let client = Client::new();

    let resp = validate(&client, "zzyzx qwertyuiop nowhere at all", 100.0).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = resp.text().await.expect("Failed to read response");
    assert!(
        body.contains("Could not find address"),
        "Unexpected body: {body}"
    );
}

#[tokio::test]
#[ignore = "Requires running server and MongoDB"]
async fn test_blank_address_is_rejected_without_geocoding() {
    let client = Client::new();

    let resp = validate(&client, "   ", 100.0).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = resp.text().await.expect("Failed to read response");
    assert!(
        body.contains("delivery_address is required"),
        "Unexpected body: {body}"
    );
}
