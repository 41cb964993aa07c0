//! Revenue Agent service library.
//!
//! Wires the metrics engine, dashboard, webhook intake, and operational
//! endpoints into one axum application. Consumed by the binary (`main.rs`)
//! and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod obs;
pub mod ops;
pub mod router;
pub mod shutdown;
pub mod webhook;
