//! Top-level facade crate for Revenue Agent.
//!
//! Re-exports the metrics engine and the HTTP service so users can depend on a single crate.

pub mod core {
    pub use revenue_core::*;
}

pub mod service {
    pub use revenue_service::*;
}
