//! Payment webhook intake.
//!
//! The envelope is decoded once; `resource` stays raw JSON until the handler
//! for the event type parses it into its own shape.

pub mod dispatcher;
pub mod paypal;

use axum::extract::State;
use axum::Json;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::value::RawValue;
use serde_json::{json, Value};

use revenue_core::error::{Result, RevenueError};

use crate::app_state::AppState;
use crate::error::ApiError;

pub use dispatcher::{Outcome, WebhookDispatcher, WebhookHandler};

/// Label used for event types without a registered handler.
const OTHER_EVENT: &str = "other";

/// Provider envelope. Unknown top-level fields are tolerated.
#[derive(Debug, Deserialize)]
pub struct WebhookEvent {
    pub event_type: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub resource: Option<Box<RawValue>>,
}

impl WebhookEvent {
    /// Parse `resource` into `T`; an absent resource yields `T::default()`.
    pub fn resource<T: DeserializeOwned + Default>(&self) -> Result<T> {
        match &self.resource {
            Some(raw) => serde_json::from_str(raw.get()).map_err(|e| {
                RevenueError::BadRequest(format!("{} invalid resource: {e}", self.event_type))
            }),
            None => Ok(T::default()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WebhookCtx {
    pub provider: &'static str,
    pub received_at: DateTime<Utc>,
}

impl WebhookCtx {
    pub fn new(provider: &'static str) -> Self {
        Self {
            provider,
            received_at: Utc::now(),
        }
    }
}

pub async fn paypal_webhook(
    State(state): State<AppState>,
    body: Bytes,
) -> std::result::Result<Json<Value>, ApiError> {
    let metrics = state.metrics();

    let event: WebhookEvent = match serde_json::from_slice(&body) {
        Ok(ev) => ev,
        Err(e) => {
            metrics
                .webhook_events
                .inc(&[("event_type", OTHER_EVENT), ("outcome", "rejected")]);
            return Err(RevenueError::BadRequest(format!("invalid webhook payload: {e}")).into());
        }
    };

    tracing::info!(event_type = %event.event_type, id = ?event.id, "received paypal event");

    let dispatcher = state.webhooks();
    let label = if dispatcher.is_registered(&event.event_type) {
        event.event_type.clone()
    } else {
        OTHER_EVENT.to_string()
    };
    let event_type = event.event_type.clone();

    match dispatcher.dispatch(WebhookCtx::new("paypal"), event).await {
        Ok(Outcome::Handled(body)) => {
            metrics
                .webhook_events
                .inc(&[("event_type", label.as_str()), ("outcome", "handled")]);
            Ok(Json(body))
        }
        Ok(Outcome::Ignored) => {
            metrics
                .webhook_events
                .inc(&[("event_type", label.as_str()), ("outcome", "ignored")]);
            Ok(Json(json!({ "status": "ignored", "event_type": event_type })))
        }
        Err(e) => {
            tracing::warn!(event_type = %event_type, error = %e, "webhook handling failed");
            metrics
                .webhook_events
                .inc(&[("event_type", label.as_str()), ("outcome", "rejected")]);
            Err(e.into())
        }
    }
}
