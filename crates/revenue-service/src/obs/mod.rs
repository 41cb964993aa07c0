//! Lightweight in-process observability.
//!
//! Metrics are stored as atomics, recorded by the `track_requests` middleware
//! and webhook intake, and rendered by the `/metrics` handler.

pub mod http;
pub mod metrics;

pub use metrics::ServiceMetrics;
