use serde::Deserialize;

use crate::error::{Result, RevenueError};

/// Inputs every derived metric is computed from.
///
/// Month multipliers and the customer count are unsigned, so only `mrr` and the
/// health thresholds need runtime validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RevenueConfig {
    #[serde(default = "default_mrr")]
    pub mrr: f64,

    #[serde(default = "default_customers")]
    pub customers: u64,

    /// Months of MRR kept as liquid funds.
    #[serde(default = "default_liquid_months")]
    pub liquid_months: u32,

    /// Recommended emergency reserve, in months of MRR.
    #[serde(default = "default_emergency_months")]
    pub emergency_months: u32,

    /// Emergency funds reachable today, in months of MRR.
    #[serde(default = "default_immediately_accessible_months")]
    pub immediately_accessible_months: u32,

    /// Current emergency fund balance, in months of MRR.
    #[serde(default = "default_current_reserve_months")]
    pub current_reserve_months: u32,

    #[serde(default)]
    pub thresholds: HealthThresholds,
}

impl Default for RevenueConfig {
    fn default() -> Self {
        Self {
            mrr: default_mrr(),
            customers: default_customers(),
            liquid_months: default_liquid_months(),
            emergency_months: default_emergency_months(),
            immediately_accessible_months: default_immediately_accessible_months(),
            current_reserve_months: default_current_reserve_months(),
            thresholds: HealthThresholds::default(),
        }
    }
}

impl RevenueConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.mrr.is_finite() {
            return Err(RevenueError::InvalidConfig(
                "revenue.mrr must be a finite number".into(),
            ));
        }
        if self.mrr < 0.0 {
            return Err(RevenueError::InvalidConfig(
                "revenue.mrr must not be negative".into(),
            ));
        }
        if !self.derived_figures_are_finite() {
            return Err(RevenueError::InvalidConfig(
                "revenue.mrr is too large: derived totals overflow".into(),
            ));
        }
        self.thresholds.validate()
    }

    /// Every product the engine forms is `mrr` times at most the largest
    /// multiplier; the only sum is total wealth.
    fn derived_figures_are_finite(&self) -> bool {
        let largest = [
            12,
            self.liquid_months,
            self.emergency_months,
            self.immediately_accessible_months,
            self.current_reserve_months,
        ]
        .into_iter()
        .max()
        .unwrap_or(12);

        let total = self.mrr * 12.0
            + self.mrr * f64::from(self.liquid_months)
            + self.mrr * f64::from(self.emergency_months);

        (self.mrr * f64::from(largest)).is_finite() && total.is_finite()
    }
}

/// Lower bounds (inclusive) of each health status band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthThresholds {
    #[serde(default = "default_excellent")]
    pub excellent: u8,
    #[serde(default = "default_good")]
    pub good: u8,
    #[serde(default = "default_adequate")]
    pub adequate: u8,
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self {
            excellent: default_excellent(),
            good: default_good(),
            adequate: default_adequate(),
        }
    }
}

impl HealthThresholds {
    pub fn validate(&self) -> Result<()> {
        if self.excellent > 100 {
            return Err(RevenueError::InvalidConfig(
                "revenue.thresholds.excellent must be at most 100".into(),
            ));
        }
        if !(self.adequate <= self.good && self.good <= self.excellent) {
            return Err(RevenueError::InvalidConfig(
                "revenue.thresholds must satisfy adequate <= good <= excellent".into(),
            ));
        }
        Ok(())
    }
}

fn default_mrr() -> f64 {
    5000.0
}
fn default_customers() -> u64 {
    12
}
fn default_liquid_months() -> u32 {
    3
}
fn default_emergency_months() -> u32 {
    6
}
fn default_immediately_accessible_months() -> u32 {
    2
}
fn default_current_reserve_months() -> u32 {
    4
}
fn default_excellent() -> u8 {
    80
}
fn default_good() -> u8 {
    60
}
fn default_adequate() -> u8 {
    40
}
