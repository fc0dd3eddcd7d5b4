//! Report error types.

use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// An aggregate was requested over a collection with no elements.
    #[error("Cannot compute {0} over an empty collection")]
    EmptyInput(&'static str),

    /// The data source failed to load a collection.
    #[error("Data source error: {0}")]
    Source(String),
}
