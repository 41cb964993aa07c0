//! `RevenueError` covers bad config at startup and bad webhook bodies at
//! request time. `ClientCode` is what callers see in the `error.code` field.

use thiserror::Error;

/// Codes rendered in error bodies. Renaming one breaks API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Malformed webhook body or field.
    BadRequest,
    /// Configuration failed parsing or validation.
    InvalidConfig,
    /// Unsupported configuration version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// Wire spelling, e.g. `BAD_REQUEST`.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::InvalidConfig => "INVALID_CONFIG",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Result alias used by both crates.
pub type Result<T> = std::result::Result<T, RevenueError>;

/// Engine, config, and webhook errors.
#[derive(Debug, Error)]
pub enum RevenueError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl RevenueError {
    /// Code exposed to HTTP clients for this error.
    pub fn client_code(&self) -> ClientCode {
        match self {
            RevenueError::BadRequest(_) => ClientCode::BadRequest,
            RevenueError::InvalidConfig(_) => ClientCode::InvalidConfig,
            RevenueError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            RevenueError::Internal(_) => ClientCode::Internal,
        }
    }
}
