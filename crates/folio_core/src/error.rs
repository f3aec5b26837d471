//! Error types for folio_core

use thiserror::Error;

/// Errors raised while building core page structures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A section list must name at least one section
    #[error("section list is empty")]
    EmptySections,

    /// Two sections resolve to the same anchor
    #[error("duplicate section '{name}' (anchor '#{anchor}' already used)")]
    DuplicateSection { name: String, anchor: String },

    /// A section name that is not part of the configured list
    #[error("unknown section '{0}'")]
    UnknownSection(String),
}

/// Result type for folio_core operations
pub type Result<T> = std::result::Result<T, CoreError>;
