//! Shared application state.
//!
//! Built once at startup from a validated config and cloned into every
//! handler. Everything behind it is immutable except the metrics registry.

use std::sync::Arc;

use revenue_core::error::Result;
use revenue_core::MetricsEngine;

use crate::config::ServiceConfig;
use crate::dashboard;
use crate::obs::ServiceMetrics;
use crate::webhook::paypal::{
    PaymentCompletedHandler, SubscriptionActivatedHandler, SubscriptionCancelledHandler,
};
use crate::webhook::WebhookDispatcher;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<ServiceMetrics>,
    webhooks: Arc<WebhookDispatcher>,
}

struct AppStateInner {
    cfg: ServiceConfig,
    engine: MetricsEngine,
    dashboard_html: String,
}

impl AppState {
    /// Returns Result so main can report bad configuration instead of panicking.
    pub fn new(cfg: ServiceConfig) -> Result<Self> {
        cfg.validate()?;

        let engine = MetricsEngine::new(cfg.revenue.clone())?;
        let catalog = Arc::new(cfg.webhook.catalog()?);

        let webhooks = WebhookDispatcher::new();
        webhooks.register(Arc::new(PaymentCompletedHandler::new(catalog)));
        webhooks.register(Arc::new(SubscriptionActivatedHandler));
        webhooks.register(Arc::new(SubscriptionCancelledHandler));

        let dashboard_html = dashboard::render(&cfg.groups, cfg.service.poll_interval_ms);

        tracing::info!(
            groups = ?cfg.groups.enabled_names(),
            webhook = cfg.webhook.enabled,
            webhook_events = ?webhooks.registered_events(),
            "application state ready"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                engine,
                dashboard_html,
            }),
            metrics: Arc::new(ServiceMetrics::default()),
            webhooks: Arc::new(webhooks),
        })
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn engine(&self) -> &MetricsEngine {
        &self.inner.engine
    }

    pub fn dashboard_html(&self) -> &str {
        &self.inner.dashboard_html
    }

    pub fn webhooks(&self) -> Arc<WebhookDispatcher> {
        Arc::clone(&self.webhooks)
    }

    pub fn metrics(&self) -> &ServiceMetrics {
        &self.metrics
    }

    pub fn set_draining(&self) {
        self.metrics.set_draining();
    }

    pub fn is_draining(&self) -> bool {
        self.metrics.is_draining()
    }

    /// Config-derived gauges appended to `/metrics`.
    pub fn metrics_extra(&self) -> Vec<(&'static str, f64)> {
        let rev = self.engine().config();
        vec![
            ("revenue_agent_mrr", rev.mrr),
            // precision loss past 2^53 customers is irrelevant here
            ("revenue_agent_customers", rev.customers as f64),
        ]
    }
}
