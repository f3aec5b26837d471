//! Error types for folio_app

use folio_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring or rendering a portfolio
#[derive(Error, Debug)]
pub enum FolioError {
    /// The configuration file could not be read or parsed
    #[error("Config error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// Writing rendered output failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid section list or lookup
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for FolioError {
    fn from(err: anyhow::Error) -> Self {
        FolioError::Other(err.to_string())
    }
}

/// Result type for folio_app operations
pub type Result<T> = std::result::Result<T, FolioError>;
