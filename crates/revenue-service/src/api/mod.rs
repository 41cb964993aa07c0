//! JSON metric resources.
//!
//! Each handler asks the shared engine for fresh figures and stamps the
//! response with the time it was built. Nothing is cached between requests.

use axum::extract::State;
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use revenue_core::{EmergencyFundStatus, RevenueSummary, WealthSnapshot};

use crate::app_state::AppState;

/// Current UTC time, ISO-8601 with a `Z` suffix.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// A resource body with its construction timestamp appended.
#[derive(Debug, Serialize)]
pub struct Stamped<T> {
    #[serde(flatten)]
    pub body: T,
    pub timestamp: String,
}

impl<T> Stamped<T> {
    pub fn now(body: T) -> Self {
        Self {
            body,
            timestamp: timestamp_now(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MasterWealth {
    #[serde(flatten)]
    pub snapshot: WealthSnapshot,
    pub mrr: f64,
}

/// GET /api/revenue
pub async fn revenue(State(state): State<AppState>) -> Json<Stamped<RevenueSummary>> {
    Json(Stamped::now(state.engine().revenue_summary()))
}

/// GET /api/masterwealth
pub async fn masterwealth(State(state): State<AppState>) -> Json<Stamped<MasterWealth>> {
    let engine = state.engine();
    Json(Stamped::now(MasterWealth {
        snapshot: engine.wealth_snapshot(),
        mrr: engine.config().mrr,
    }))
}

/// GET /api/emergency-funds
pub async fn emergency_funds(State(state): State<AppState>) -> Json<Stamped<EmergencyFundStatus>> {
    Json(Stamped::now(state.engine().emergency_fund_status()))
}
