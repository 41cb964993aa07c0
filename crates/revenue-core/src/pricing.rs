//! Product price catalog used to recognise what a payment was for.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RevenueError};

/// Payments within this distance of a tier price match that tier.
pub const PRICE_MATCH_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PriceTier {
    pub key: String,
    pub name: String,
    pub price: f64,
}

impl PriceTier {
    fn new(key: &str, name: &str, price: f64) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            price,
        }
    }
}

/// Built-in product lineup.
pub fn default_tiers() -> Vec<PriceTier> {
    vec![
        PriceTier::new("mesh-network", "Zero-Human Mesh Network", 9.00),
        PriceTier::new("ai-governance", "AI Governance Platform", 299.00),
        PriceTier::new("data-api", "Data Monetization API", 49.00),
        PriceTier::new("cicd-templates", "Enterprise CI/CD Templates", 799.00),
        PriceTier::new("trading-bot", "Autonomous Trading Bot", 1999.00),
    ]
}

/// Validated, ordered set of price tiers.
#[derive(Debug, Clone)]
pub struct PriceCatalog {
    tiers: Vec<PriceTier>,
}

impl PriceCatalog {
    pub fn new(tiers: Vec<PriceTier>) -> Result<Self> {
        let mut seen = HashSet::new();
        for t in &tiers {
            if t.key.trim().is_empty() {
                return Err(RevenueError::InvalidConfig(
                    "pricing tier key must not be empty".into(),
                ));
            }
            if !t.price.is_finite() || t.price <= 0.0 {
                return Err(RevenueError::InvalidConfig(format!(
                    "pricing tier {} must have a positive price",
                    t.key
                )));
            }
            if !seen.insert(t.key.as_str()) {
                return Err(RevenueError::InvalidConfig(format!(
                    "duplicate pricing tier key: {}",
                    t.key
                )));
            }
        }
        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[PriceTier] {
        &self.tiers
    }

    /// First tier (in declaration order) whose price is within a cent of `amount`.
    pub fn match_amount(&self, amount: f64) -> Option<&PriceTier> {
        self.tiers
            .iter()
            .find(|t| (amount - t.price).abs() < PRICE_MATCH_TOLERANCE)
    }
}

impl Default for PriceCatalog {
    fn default() -> Self {
        Self {
            tiers: default_tiers(),
        }
    }
}
