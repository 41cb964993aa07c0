//! Operational HTTP endpoints.
//!
//! - `/health`     : liveness, always 200
//! - `/readyz`     : readiness (503 when draining)
//! - `/metrics`    : Prometheus text format
//! - `/api/status` : service identity

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::app_state::AppState;

pub const SERVICE_ID: &str = "revenue-agent";
pub const SERVICE_NAME: &str = "Revenue Agent System";

pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "healthy", "service": SERVICE_ID })),
    )
}

pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    if state.is_draining() {
        (StatusCode::SERVICE_UNAVAILABLE, "draining")
    } else {
        (StatusCode::OK, "ready")
    }
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let extra = state.metrics_extra();
    let body = state.metrics().render(&extra);

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}

pub async fn status() -> Json<Value> {
    Json(json!({
        "status": "operational",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
