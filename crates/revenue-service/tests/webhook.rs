//! PayPal webhook intake.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod support;

use axum::http::StatusCode;

use support::{app, app_from_yaml, get, post_json};

const URI: &str = "/webhook/paypal";

#[tokio::test]
async fn sale_matching_a_tier_is_provisioned() {
    let (_, router) = app();
    let body = r#"{
        "id": "WH-1",
        "event_type": "PAYMENT.SALE.COMPLETED",
        "create_time": "2026-01-01T00:00:00Z",
        "resource": {
            "amount": { "total": "299.00", "currency": "USD" },
            "payer": { "email_address": "buyer@example.com" }
        }
    }"#;
    let r = post_json(&router, URI, body).await;
    assert_eq!(r.status, StatusCode::OK);

    let v = r.json();
    assert_eq!(v["status"], "success");
    assert_eq!(v["payment_processed"], true);
    assert_eq!(v["amount"].as_f64().unwrap(), 299.0);
    assert_eq!(v["currency"], "USD");
    assert_eq!(v["provisioned"], true);
    assert_eq!(v["product"], "ai-governance");
}

#[tokio::test]
async fn sale_with_numeric_amount_and_no_tier() {
    let (_, router) = app();
    let body = r#"{"event_type":"PAYMENT.SALE.COMPLETED","resource":{"amount":{"total":12.5,"currency":"EUR"}}}"#;
    let v = post_json(&router, URI, body).await.json();
    assert_eq!(v["amount"].as_f64().unwrap(), 12.5);
    assert_eq!(v["currency"], "EUR");
    assert_eq!(v["provisioned"], false);
    assert!(v["product"].is_null());
}

#[tokio::test]
async fn sale_without_resource_defaults_to_zero() {
    let (_, router) = app();
    let v = post_json(&router, URI, r#"{"event_type":"PAYMENT.SALE.COMPLETED"}"#)
        .await
        .json();
    assert_eq!(v["amount"].as_f64().unwrap(), 0.0);
    assert_eq!(v["currency"], "USD");
    assert_eq!(v["provisioned"], false);
}

#[tokio::test]
async fn subscription_events_are_acknowledged() {
    let (_, router) = app();
    let activated = r#"{"event_type":"BILLING.SUBSCRIPTION.ACTIVATED","resource":{"plan_id":"P-1","subscriber":{"email_address":"a@b.c"}}}"#;
    let v = post_json(&router, URI, activated).await.json();
    assert_eq!(v["status"], "success");
    assert_eq!(v["subscription_activated"], true);

    let cancelled = r#"{"event_type":"BILLING.SUBSCRIPTION.CANCELLED","resource":{"subscriber":{"email_address":"a@b.c"}}}"#;
    let v = post_json(&router, URI, cancelled).await.json();
    assert_eq!(v["status"], "success");
    assert_eq!(v["subscription_cancelled"], true);
}

#[tokio::test]
async fn unknown_event_is_ignored() {
    let (state, router) = app();
    let r = post_json(&router, URI, r#"{"event_type":"CUSTOMER.DISPUTE.CREATED"}"#).await;
    assert_eq!(r.status, StatusCode::OK);
    let v = r.json();
    assert_eq!(v["status"], "ignored");
    assert_eq!(v["event_type"], "CUSTOMER.DISPUTE.CREATED");
    assert_eq!(
        state
            .metrics()
            .webhook_events
            .get(&[("event_type", "other"), ("outcome", "ignored")]),
        1
    );
}

#[tokio::test]
async fn malformed_body_is_a_structured_bad_request() {
    let (_, router) = app();
    let r = post_json(&router, URI, "{not json").await;
    assert_eq!(r.status, StatusCode::BAD_REQUEST);
    let v = r.json();
    assert_eq!(v["error"]["code"], "BAD_REQUEST");
    assert!(v["error"]["message"]
        .as_str()
        .unwrap()
        .starts_with("invalid webhook payload"));
}

#[tokio::test]
async fn missing_event_type_is_rejected() {
    let (_, router) = app();
    let r = post_json(&router, URI, r#"{"resource":{}}"#).await;
    assert_eq!(r.status, StatusCode::BAD_REQUEST);
    assert_eq!(r.json()["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn non_numeric_amount_is_rejected() {
    let (state, router) = app();
    let body = r#"{"event_type":"PAYMENT.SALE.COMPLETED","resource":{"amount":{"total":"lots"}}}"#;
    let r = post_json(&router, URI, body).await;
    assert_eq!(r.status, StatusCode::BAD_REQUEST);
    let msg = r.json()["error"]["message"].as_str().unwrap().to_string();
    assert!(msg.contains("lots"), "{msg}");
    assert_eq!(
        state.metrics().webhook_events.get(&[
            ("event_type", "PAYMENT.SALE.COMPLETED"),
            ("outcome", "rejected")
        ]),
        1
    );
}

#[tokio::test]
async fn custom_pricing_is_used_for_matching() {
    let (_, router) = app_from_yaml(
        "version: 1\nwebhook:\n  pricing:\n    - { key: starter, name: Starter, price: 15 }\n",
    );
    let body = r#"{"event_type":"PAYMENT.SALE.COMPLETED","resource":{"amount":{"total":"15.00"}}}"#;
    let v = post_json(&router, URI, body).await.json();
    assert_eq!(v["product"], "starter");
}

#[tokio::test]
async fn disabled_webhook_is_not_routed() {
    let (_, router) = app_from_yaml("version: 1\nwebhook: { enabled: false }\n");
    let r = post_json(&router, URI, r#"{"event_type":"PAYMENT.SALE.COMPLETED"}"#).await;
    assert_eq!(r.status, StatusCode::NOT_FOUND);
    assert_eq!(get(&router, "/health").await.status, StatusCode::OK);
}
