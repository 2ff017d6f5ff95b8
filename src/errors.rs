// src/errors.rs
// DOCUMENTATION: Custom error types for the gateway
// PURPOSE: Centralized error handling for every upstream call

use thiserror::Error;

/// Gateway-specific error types
/// DOCUMENTATION: One variant per failure class of an upstream exchange.
/// Public query operations never propagate these; they are carried inside
/// `QueryOutcome::Empty` and written to the log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Upstream returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Unauthorized: check the configured API key")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl GatewayError {
    /// Map a non-success HTTP status to an error variant
    pub fn from_status(status: u16, path: &str, body: String) -> Self {
        match status {
            401 => GatewayError::Unauthorized,
            404 => GatewayError::NotFound(path.to_string()),
            _ => GatewayError::UpstreamStatus { status, body },
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(e: serde_json::Error) -> Self {
        GatewayError::ParseError(e.to_string())
    }
}

impl From<validator::ValidationErrors> for GatewayError {
    fn from(e: validator::ValidationErrors) -> Self {
        GatewayError::InvalidInput(e.to_string())
    }
}
