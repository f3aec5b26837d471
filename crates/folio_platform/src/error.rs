//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// A host facility (window, document, timers) is missing
    #[error("Platform not available: {0}")]
    Unavailable(String),

    /// A host call failed
    #[error("Host call failed: {0}")]
    Host(String),

    /// Generic platform error
    #[error("Platform error: {0}")]
    Other(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
