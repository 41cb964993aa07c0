//! Revenue Agent core: the metrics engine, its configuration, and the shared
//! error surface.
//!
//! Everything here is pure computation over an immutable [`RevenueConfig`].
//! The crate carries no transport or runtime dependencies so the engine can be
//! driven from the HTTP service, tests, or any other host.
//!
//! # Failure model
//! `MetricsEngine::new` is the only fallible entry point: it rejects
//! configurations whose figures would be negative or overflow to infinity.
//! Once it returns `Ok`, every query answers without error, so the HTTP
//! layer never needs an error path for metric reads. Clippy denies
//! `panic!`, `unwrap` and `expect` below to keep it that way.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod engine;
pub mod error;
pub mod pricing;

pub use engine::{
    EmergencyFundStatus, HealthStatus, HealthThresholds, MetricsEngine, Projections,
    RevenueConfig, RevenueSummary, WealthSnapshot,
};
/// Shared result type.
pub use error::{Result, RevenueError};
pub use pricing::{PriceCatalog, PriceTier};
