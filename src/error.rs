//! Error types for FakeNUT
//!
//! Only transport and setup failures are errors here. Protocol refusals
//! (`ERR ...` lines) are ordinary responses and never surface as `Err`.

use thiserror::Error;

/// Result type alias using FakeNutError
pub type Result<T> = std::result::Result<T, FakeNutError>;

/// Unified error type for FakeNUT operations
#[derive(Debug, Error)]
pub enum FakeNutError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Network error: {0}")]
    Network(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
