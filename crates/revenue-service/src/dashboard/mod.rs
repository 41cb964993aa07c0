//! Polling dashboard page.
//!
//! The HTML is embedded at compile time and rendered once at startup with the
//! enabled metric groups and poll interval substituted in.

use axum::extract::State;
use axum::response::Html;

use crate::app_state::AppState;
use crate::config::MetricGroups;

const TEMPLATE: &str = include_str!("../../assets/dashboard.html");

const GROUPS_PLACEHOLDER: &str = "__ENABLED_GROUPS__";
const POLL_PLACEHOLDER: &str = "__POLL_INTERVAL_MS__";

pub fn render(groups: &MetricGroups, poll_interval_ms: u64) -> String {
    let names = groups
        .enabled_names()
        .iter()
        .map(|n| format!("\"{n}\""))
        .collect::<Vec<_>>()
        .join(",");
    TEMPLATE
        .replace(GROUPS_PLACEHOLDER, &format!("[{names}]"))
        .replace(POLL_PLACEHOLDER, &poll_interval_ms.to_string())
}

/// GET /
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.dashboard_html().to_owned())
}
