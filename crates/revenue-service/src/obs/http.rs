//! Request accounting middleware.

use std::time::Instant;

use axum::extract::{MatchedPath, Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::app_state::AppState;

/// Route label for requests no route matched (404s). Keeps label cardinality
/// bounded by the route table instead of by client-supplied paths.
pub const UNMATCHED_ROUTE: &str = "unmatched";

pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_owned());
    let method = req.method().as_str().to_owned();
    let metrics = state.metrics();

    metrics.http_in_flight.inc(&[("route", route.as_str())]);
    let started = Instant::now();

    let resp = next.run(req).await;

    metrics.http_in_flight.dec(&[("route", route.as_str())]);
    metrics
        .http_duration
        .observe(&[("route", route.as_str())], started.elapsed());
    metrics.http_requests.inc(&[
        ("route", route.as_str()),
        ("method", method.as_str()),
        ("status", resp.status().as_str()),
    ]);
    resp
}
