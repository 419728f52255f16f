//! Deposit and withdrawal integration tests.

mod common;

use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn deposit_appends_entry() {
    let app = TestApp::spawn().await;
    app.create_account("111", "Alice").await;

    let response = app
        .deposit("111", json!({ "value": 100.0, "description": "payday" }))
        .await;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Deposit successful");

    let statement = app.statement("111").await;
    assert_eq!(statement.len(), 1);
    assert_eq!(statement[0]["kind"], "deposit");
    assert_eq!(statement[0]["value"], 100.0);
    assert_eq!(statement[0]["description"], "payday");
    assert!(statement[0]["id"].is_string());
    assert!(statement[0]["created_at"].is_string());
}

#[tokio::test]
async fn deposit_description_is_optional() {
    let app = TestApp::spawn().await;
    app.create_account("111", "Alice").await;

    let response = app.deposit("111", json!({ "value": 25.0 })).await;
    assert_eq!(response.status(), 200);

    let statement = app.statement("111").await;
    assert!(statement[0].get("description").is_none());
}

#[tokio::test]
async fn deposit_requires_value() {
    let app = TestApp::spawn().await;
    app.create_account("111", "Alice").await;

    let response = app.deposit("111", json!({ "description": "no amount" })).await;
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Missing parameters: value");
    assert!(app.statement("111").await.is_empty());
}

#[tokio::test]
async fn deposit_rejects_non_positive_value() {
    let app = TestApp::spawn().await;
    app.create_account("111", "Alice").await;

    assert_eq!(app.deposit("111", json!({ "value": 0.0 })).await.status(), 400);
    assert_eq!(app.deposit("111", json!({ "value": -5.0 })).await.status(), 400);
    assert!(app.statement("111").await.is_empty());
}

#[tokio::test]
async fn deposit_unknown_customer_rejected() {
    let app = TestApp::spawn().await;

    let response = app.deposit("999", json!({ "value": 100.0 })).await;
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Customer not found");
}

#[tokio::test]
async fn unknown_customer_wins_over_missing_value() {
    let app = TestApp::spawn().await;

    // Resolution happens before body validation, so an unresolvable
    // identifier is reported even when the body is invalid too.
    let response = app.deposit("999", json!({})).await;
    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Customer not found");

    let response = app.withdraw("999", json!({})).await;
    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Customer not found");
}

#[tokio::test]
async fn withdraw_works_within_balance() {
    let app = TestApp::spawn().await;
    app.create_account("111", "Alice").await;
    app.deposit("111", json!({ "value": 100.0 })).await;

    let response = app
        .withdraw("111", json!({ "value": 40.0, "description": "groceries" }))
        .await;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Withdraw successful");

    let statement = app.statement("111").await;
    assert_eq!(statement.len(), 2);
    assert_eq!(statement[1]["kind"], "withdraw");
    assert_eq!(statement[1]["value"], 40.0);
}

#[tokio::test]
async fn withdraw_can_drain_balance_to_zero() {
    let app = TestApp::spawn().await;
    app.create_account("111", "Alice").await;
    app.deposit("111", json!({ "value": 100.0 })).await;

    let response = app.withdraw("111", json!({ "value": 100.0 })).await;
    assert_eq!(response.status(), 200);
    assert_eq!(app.balance("111").await, 0.0);
}

#[tokio::test]
async fn withdraw_beyond_balance_rejected_and_statement_unchanged() {
    let app = TestApp::spawn().await;
    app.create_account("111", "Alice").await;
    app.deposit("111", json!({ "value": 100.0 })).await;

    let response = app.withdraw("111", json!({ "value": 100.01 })).await;
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Insufficient funds");

    // The rejected withdrawal left no trace
    assert_eq!(app.statement("111").await.len(), 1);
    assert_eq!(app.balance("111").await, 100.0);
}

#[tokio::test]
async fn withdraw_from_empty_account_rejected() {
    let app = TestApp::spawn().await;
    app.create_account("111", "Alice").await;

    let response = app.withdraw("111", json!({ "value": 1.0 })).await;
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Insufficient funds");
}

#[tokio::test]
async fn withdraw_requires_value() {
    let app = TestApp::spawn().await;
    app.create_account("111", "Alice").await;
    app.deposit("111", json!({ "value": 100.0 })).await;

    let response = app.withdraw("111", json!({})).await;
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Missing parameters: value");
}

#[tokio::test]
async fn transactions_are_isolated_per_customer() {
    let app = TestApp::spawn().await;
    app.create_account("111", "Alice").await;
    app.create_account("222", "Bob").await;

    app.deposit("111", json!({ "value": 100.0 })).await;
    app.deposit("222", json!({ "value": 7.0 })).await;

    assert_eq!(app.balance("111").await, 100.0);
    assert_eq!(app.balance("222").await, 7.0);

    // Bob cannot spend Alice's funds
    let response = app.withdraw("222", json!({ "value": 50.0 })).await;
    assert_eq!(response.status(), 400);
}
