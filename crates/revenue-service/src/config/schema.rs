use std::net::SocketAddr;
use std::time::Duration;

use serde::Deserialize;
use revenue_core::error::{Result, RevenueError};
use revenue_core::pricing::{default_tiers, PriceCatalog, PriceTier};
use revenue_core::RevenueConfig;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub version: u32,

    #[serde(default)]
    pub service: ServiceSection,

    #[serde(default)]
    pub revenue: RevenueConfig,

    #[serde(default)]
    pub groups: MetricGroups,

    #[serde(default)]
    pub webhook: WebhookSection,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            version: 1,
            service: ServiceSection::default(),
            revenue: RevenueConfig::default(),
            groups: MetricGroups::default(),
            webhook: WebhookSection::default(),
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(RevenueError::UnsupportedVersion);
        }
        self.service.validate()?;
        self.revenue.validate()?;
        self.webhook.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Dashboard refresh period.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// How long `/readyz` reports draining before the listener closes.
    #[serde(default = "default_drain_grace_ms")]
    pub drain_grace_ms: u64,
}

impl Default for ServiceSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            poll_interval_ms: default_poll_interval_ms(),
            drain_grace_ms: default_drain_grace_ms(),
        }
    }
}

impl ServiceSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !(1000..=60000).contains(&self.poll_interval_ms) {
            return Err(RevenueError::InvalidConfig(
                "service.poll_interval_ms must be between 1000 and 60000".into(),
            ));
        }
        if self.drain_grace_ms > 60000 {
            return Err(RevenueError::InvalidConfig(
                "service.drain_grace_ms must be at most 60000".into(),
            ));
        }
        Ok(())
    }

    pub fn drain_grace(&self) -> Duration {
        Duration::from_millis(self.drain_grace_ms)
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            RevenueError::InvalidConfig(format!(
                "service.listen must be a valid socket address ({}): {e}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:5000".into()
}
fn default_poll_interval_ms() -> u64 {
    5000
}
fn default_drain_grace_ms() -> u64 {
    5000
}

/// Which metric resources are routed and shown on the dashboard.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricGroups {
    #[serde(default = "enabled")]
    pub revenue: bool,
    #[serde(default = "enabled")]
    pub masterwealth: bool,
    #[serde(default = "enabled")]
    pub emergency_funds: bool,
}

impl Default for MetricGroups {
    fn default() -> Self {
        Self {
            revenue: true,
            masterwealth: true,
            emergency_funds: true,
        }
    }
}

impl MetricGroups {
    /// Names of enabled groups, in dashboard order.
    pub fn enabled_names(&self) -> Vec<&'static str> {
        [
            ("revenue", self.revenue),
            ("masterwealth", self.masterwealth),
            ("emergency_funds", self.emergency_funds),
        ]
        .into_iter()
        .filter_map(|(name, on)| on.then_some(name))
        .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    #[serde(default = "enabled")]
    pub enabled: bool,

    #[serde(default = "default_tiers")]
    pub pricing: Vec<PriceTier>,
}

impl Default for WebhookSection {
    fn default() -> Self {
        Self {
            enabled: true,
            pricing: default_tiers(),
        }
    }
}

impl WebhookSection {
    pub fn validate(&self) -> Result<()> {
        self.catalog().map(|_| ())
    }

    pub fn catalog(&self) -> Result<PriceCatalog> {
        PriceCatalog::new(self.pricing.clone())
    }
}

fn enabled() -> bool {
    true
}
