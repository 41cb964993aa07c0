use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

use revenue_core::error::Result;

use super::{WebhookCtx, WebhookEvent};

/// One payment-provider event type.
#[async_trait]
pub trait WebhookHandler: Send + Sync {
    fn event_type(&self) -> &'static str;
    async fn handle(&self, ctx: WebhookCtx, event: WebhookEvent) -> Result<Value>;
}

/// Result of routing an event.
#[derive(Debug)]
pub enum Outcome {
    Handled(Value),
    /// No handler is registered for the event type.
    Ignored,
}

/// Registry of webhook handlers keyed by event type.
#[derive(Default)]
pub struct WebhookDispatcher {
    handlers: DashMap<&'static str, Arc<dyn WebhookHandler>>,
}

impl WebhookDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: DashMap::new(),
        }
    }

    pub fn register(&self, handler: Arc<dyn WebhookHandler>) {
        self.handlers.insert(handler.event_type(), handler);
    }

    pub fn registered_events(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|e| *e.key()).collect()
    }

    pub fn is_registered(&self, event_type: &str) -> bool {
        self.handlers.contains_key(event_type)
    }

    pub async fn dispatch(&self, ctx: WebhookCtx, event: WebhookEvent) -> Result<Outcome> {
        // clone out of the map so no shard lock is held across the await
        let handler = match self.handlers.get(event.event_type.as_str()) {
            Some(h) => h.value().clone(),
            None => return Ok(Outcome::Ignored),
        };
        handler.handle(ctx, event).await.map(Outcome::Handled)
    }
}
