//! End-to-end contract tests for the merchant/product API.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied (stockist migrate)
//! - The API server running (cargo run -p stockist-api)
//! - `CLIENT_SECRET` in the environment, matching the server's
//!
//! Run with: cargo test -p stockist-integration-tests -- --ignored

#![allow(clippy::unwrap_used)]

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use stockist_integration_tests::{base_url, mint_token, unique_merchant_key};

/// A product id far above anything the fixture data creates.
const ABSENT_PRODUCT_ID: i64 = 2_000_000_000;

async fn list(client: &Client, path: &str) -> Vec<Value> {
    let res = client
        .get(format!("{}{path}", base_url()))
        .send()
        .await
        .expect("Failed to reach the API");
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.expect("Failed to parse list response")
}

// ============================================================================
// Merchant creation
// ============================================================================

#[tokio::test]
#[ignore = "Requires running stockist-api and PostgreSQL"]
async fn merchant_create_grows_collection_by_exactly_one() {
    let client = Client::new();
    let before = list(&client, "/api/v1/merchants").await;

    let key = unique_merchant_key("itest");
    let res = client
        .post(format!("{}/api/v1/merchants", base_url()))
        .json(&json!({ "merchant_name": "Integration Mart", "merchant_id": key }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    let after: Vec<Value> = res.json().await.unwrap();
    assert_eq!(after.len(), before.len() + 1);
    assert!(
        after
            .iter()
            .any(|m| m["merchant_id"] == Value::String(key.clone()))
    );
}

#[tokio::test]
#[ignore = "Requires running stockist-api and PostgreSQL"]
async fn merchant_create_missing_key_leaves_collection_unchanged() {
    let client = Client::new();
    let before = list(&client, "/api/v1/merchants").await;

    let res = client
        .post(format!("{}/api/v1/merchants", base_url()))
        .json(&json!({ "merchant_name": "No Key Mart" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let after = list(&client, "/api/v1/merchants").await;
    assert_eq!(after.len(), before.len());
}

// ============================================================================
// Product reads
// ============================================================================

#[tokio::test]
#[ignore = "Requires running stockist-api and PostgreSQL"]
async fn product_fetch_unknown_id_answers_empty_array() {
    let client = Client::new();

    let res = client
        .get(format!(
            "{}/api/v1/products/{ABSENT_PRODUCT_ID}",
            base_url()
        ))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Vec<Value> = res.json().await.unwrap();
    assert!(body.is_empty());
}

// ============================================================================
// Guarded product mutations
// ============================================================================

#[tokio::test]
#[ignore = "Requires running stockist-api and PostgreSQL"]
async fn product_delete_absent_id_is_idempotent() {
    let client = Client::new();
    let token = mint_token();
    let before = list(&client, "/api/v1/products").await;

    let res = client
        .delete(format!(
            "{}/api/v1/products/{ABSENT_PRODUCT_ID}",
            base_url()
        ))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let after: Vec<Value> = res.json().await.unwrap();
    assert_eq!(after.len(), before.len());
}

#[tokio::test]
#[ignore = "Requires running stockist-api and PostgreSQL"]
async fn product_lifecycle_create_edit_replace_delete() {
    let client = Client::new();
    let token = mint_token();

    // Create (unguarded) and take the new row's id from the insert result
    let res = client
        .post(format!("{}/api/v1/products", base_url()))
        .json(&json!({ "product_keyword": "itest-widget", "merchant": "Integration Mart" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Vec<Value> = res.json().await.unwrap();
    let id = created
        .first()
        .and_then(|p| p["id"].as_i64())
        .expect("insert result carries the new id");

    // Edit the keyword, token in the request body
    let res = client
        .patch(format!("{}/api/v1/products/{id}/edit", base_url()))
        .json(&json!({ "product_keyword": "itest-gadget", "token": token }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let products: Vec<Value> = res.json().await.unwrap();
    let edited = products.iter().find(|p| p["id"].as_i64() == Some(id));
    assert_eq!(edited.unwrap()["product_keyword"], "itest-gadget");

    // Replace both fields, token in the query string
    let res = client
        .put(format!(
            "{}/api/v1/products/{id}/replace?token={token}",
            base_url()
        ))
        .json(&json!({ "product_keyword": "itest-sprocket", "merchant": "Replacement Mart" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let products: Vec<Value> = res.json().await.unwrap();
    let replaced = products.iter().find(|p| p["id"].as_i64() == Some(id));
    assert_eq!(replaced.unwrap()["merchant"], "Replacement Mart");

    // Delete, token in the Authorization header
    let res = client
        .delete(format!("{}/api/v1/products/{id}", base_url()))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let products: Vec<Value> = res.json().await.unwrap();
    assert!(!products.iter().any(|p| p["id"].as_i64() == Some(id)));
}

#[tokio::test]
#[ignore = "Requires running stockist-api and PostgreSQL"]
async fn guarded_mutation_never_executes_without_token() {
    let client = Client::new();

    // Create a product to aim the unauthorized edit at
    let res = client
        .post(format!("{}/api/v1/products", base_url()))
        .json(&json!({ "product_keyword": "itest-untouched", "merchant": "Integration Mart" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Vec<Value> = res.json().await.unwrap();
    let id = created.first().and_then(|p| p["id"].as_i64()).unwrap();

    // No token: 403 and the row is unchanged
    let res = client
        .patch(format!("{}/api/v1/products/{id}/edit", base_url()))
        .json(&json!({ "product_keyword": "itest-tampered" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = client
        .get(format!("{}/api/v1/products/{id}", base_url()))
        .send()
        .await
        .unwrap();
    let rows: Vec<Value> = res.json().await.unwrap();
    assert_eq!(rows.first().unwrap()["product_keyword"], "itest-untouched");

    // Clean up
    let token = mint_token();
    client
        .delete(format!("{}/api/v1/products/{id}", base_url()))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
}
