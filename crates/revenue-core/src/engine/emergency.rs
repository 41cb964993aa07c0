use serde::Serialize;

use super::config::{HealthThresholds, RevenueConfig};

const HEALTH_SCORE_MAX: u8 = 100;
const DAYS_PER_MONTH: f64 = 30.0;

/// Step function over the health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Excellent,
    Good,
    Adequate,
    Low,
}

impl HealthStatus {
    /// Bands are inclusive at their lower bound: with the default thresholds
    /// 80 is excellent, 79 is good.
    pub fn from_score(score: u8, t: &HealthThresholds) -> Self {
        if score >= t.excellent {
            HealthStatus::Excellent
        } else if score >= t.good {
            HealthStatus::Good
        } else if score >= t.adequate {
            HealthStatus::Adequate
        } else {
            HealthStatus::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HealthStatus::Excellent => "excellent",
            HealthStatus::Good => "good",
            HealthStatus::Adequate => "adequate",
            HealthStatus::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmergencyFundStatus {
    pub immediately_accessible: f64,
    pub current_reserve: f64,
    pub recommended_reserve: f64,
    pub health_score: u8,
    pub status: HealthStatus,
    pub days_of_coverage: u64,
}

/// `current / recommended` as a percentage, rounded and clamped to `0..=100`.
///
/// A zero (or negative) recommendation yields 0 rather than dividing by zero.
pub fn health_score(current_reserve: f64, recommended_reserve: f64) -> u8 {
    if recommended_reserve <= 0.0 {
        return 0;
    }
    let pct = (current_reserve / recommended_reserve * f64::from(HEALTH_SCORE_MAX)).round();
    // clamp first so the cast is exact
    pct.clamp(0.0, f64::from(HEALTH_SCORE_MAX)) as u8
}

/// Days the current reserve lasts at the MRR-implied daily rate. Zero when
/// there is no revenue to measure against.
pub fn days_of_coverage(current_reserve: f64, mrr: f64) -> u64 {
    if mrr <= 0.0 || current_reserve <= 0.0 {
        return 0;
    }
    (current_reserve / mrr * DAYS_PER_MONTH).floor() as u64
}

pub fn compute_emergency_fund_status(cfg: &RevenueConfig) -> EmergencyFundStatus {
    let immediately_accessible = cfg.mrr * f64::from(cfg.immediately_accessible_months);
    let recommended_reserve = cfg.mrr * f64::from(cfg.emergency_months);
    let current_reserve = cfg.mrr * f64::from(cfg.current_reserve_months);

    let score = health_score(current_reserve, recommended_reserve);

    EmergencyFundStatus {
        immediately_accessible,
        current_reserve,
        recommended_reserve,
        health_score: score,
        status: HealthStatus::from_score(score, &cfg.thresholds),
        days_of_coverage: days_of_coverage(current_reserve, cfg.mrr),
    }
}
