use serde::Serialize;

use super::config::RevenueConfig;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Headline recurring revenue figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueSummary {
    pub mrr: f64,
    pub customers: u64,
    pub arr: f64,
}

/// Forward revenue at monthly intervals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Projections {
    #[serde(rename = "30_days")]
    pub days_30: f64,
    #[serde(rename = "60_days")]
    pub days_60: f64,
    #[serde(rename = "90_days")]
    pub days_90: f64,
}

/// Total wealth across all revenue-derived buckets.
///
/// `total_wealth == arr + liquid_funds + emergency_reserve` always holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WealthSnapshot {
    pub total_wealth: f64,
    pub liquid_funds: f64,
    pub emergency_reserve: f64,
    pub arr: f64,
    pub projections: Projections,
}

pub fn annual_run_rate(mrr: f64) -> f64 {
    mrr * MONTHS_PER_YEAR
}

pub fn compute_revenue_summary(cfg: &RevenueConfig) -> RevenueSummary {
    RevenueSummary {
        mrr: cfg.mrr,
        customers: cfg.customers,
        arr: annual_run_rate(cfg.mrr),
    }
}

pub fn compute_wealth_snapshot(cfg: &RevenueConfig) -> WealthSnapshot {
    let arr = annual_run_rate(cfg.mrr);
    let liquid_funds = cfg.mrr * f64::from(cfg.liquid_months);
    let emergency_reserve = cfg.mrr * f64::from(cfg.emergency_months);

    WealthSnapshot {
        total_wealth: arr + liquid_funds + emergency_reserve,
        liquid_funds,
        emergency_reserve,
        arr,
        projections: Projections {
            days_30: cfg.mrr,
            days_60: cfg.mrr * 2.0,
            days_90: cfg.mrr * 3.0,
        },
    }
}
