//! Axum router wiring.
//!
//! Metric resources are mounted per enabled group; a disabled group is simply
//! absent and falls through to the default 404.

use axum::routing::{get, post};
use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::{api, app_state::AppState, dashboard, obs, ops, webhook};

pub fn build_router(state: AppState) -> Router {
    let groups = &state.cfg().groups;

    let mut router: Router<AppState> = Router::new()
        .route("/", get(dashboard::index))
        .route("/health", get(ops::health))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .route("/api/status", get(ops::status));

    if groups.revenue {
        router = router.route("/api/revenue", get(api::revenue));
    }
    if groups.masterwealth {
        router = router.route("/api/masterwealth", get(api::masterwealth));
    }
    if groups.emergency_funds {
        router = router.route("/api/emergency-funds", get(api::emergency_funds));
    }
    if state.cfg().webhook.enabled {
        router = router.route("/webhook/paypal", post(webhook::paypal_webhook));
    }

    router
        .layer(middleware::from_fn_with_state(
            state.clone(),
            obs::http::track_requests,
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
