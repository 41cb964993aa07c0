//! Metrics engine: derived financial figures over a fixed [`RevenueConfig`].
//!
//! The free functions are the pure computations. [`MetricsEngine`] validates a
//! configuration once and then answers queries against it; it is built at
//! startup and shared read-only by every request.

pub mod config;
pub mod emergency;
pub mod wealth;

pub use config::{HealthThresholds, RevenueConfig};
pub use emergency::{compute_emergency_fund_status, EmergencyFundStatus, HealthStatus};
pub use wealth::{
    compute_revenue_summary, compute_wealth_snapshot, Projections, RevenueSummary, WealthSnapshot,
};

use crate::error::Result;

/// Validated engine bound to one configuration.
#[derive(Debug, Clone)]
pub struct MetricsEngine {
    cfg: RevenueConfig,
}

impl MetricsEngine {
    /// Validate `cfg` and bind it. After this succeeds every query is infallible.
    pub fn new(cfg: RevenueConfig) -> Result<Self> {
        cfg.validate()?;
        tracing::debug!(
            mrr = cfg.mrr,
            customers = cfg.customers,
            emergency_months = cfg.emergency_months,
            "metrics engine configured"
        );
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &RevenueConfig {
        &self.cfg
    }

    pub fn revenue_summary(&self) -> RevenueSummary {
        compute_revenue_summary(&self.cfg)
    }

    pub fn wealth_snapshot(&self) -> WealthSnapshot {
        compute_wealth_snapshot(&self.cfg)
    }

    pub fn emergency_fund_status(&self) -> EmergencyFundStatus {
        compute_emergency_fund_status(&self.cfg)
    }
}
