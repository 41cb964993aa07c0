//! Shared helpers for router-level tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use revenue_service::app_state::AppState;
use revenue_service::config::{self, ServiceConfig};
use revenue_service::router::build_router;

pub struct Reply {
    pub status: StatusCode,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("body must be json")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("body must be utf-8")
    }
}

pub fn app_with(cfg: ServiceConfig) -> (AppState, Router) {
    let state = AppState::new(cfg).expect("state");
    let router = build_router(state.clone());
    (state, router)
}

pub fn app() -> (AppState, Router) {
    app_with(ServiceConfig::default())
}

pub fn app_from_yaml(yaml: &str) -> (AppState, Router) {
    app_with(config::load_from_str(yaml).expect("config"))
}

pub async fn send(router: &Router, method: Method, uri: &str, body: Body) -> Reply {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .unwrap();
    let resp = router.clone().oneshot(req).await.unwrap();

    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap().to_vec();
    Reply {
        status,
        content_type,
        body,
    }
}

pub async fn get(router: &Router, uri: &str) -> Reply {
    send(router, Method::GET, uri, Body::empty()).await
}

pub async fn post_json(router: &Router, uri: &str, body: &str) -> Reply {
    send(router, Method::POST, uri, Body::from(body.to_string())).await
}
