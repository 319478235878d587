//! Error types for bout-dash-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bout-dash-core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Invalid cell range format
    #[error("Invalid cell range: {0}")]
    InvalidRange(String),

    /// Requested range reaches past the grid extent
    #[error("Range {range} out of bounds for a {rows}x{cols} grid")]
    OutOfBounds {
        /// The requested range in A1 notation
        range: String,
        /// Number of rows in the source grid
        rows: usize,
        /// Number of columns in the source grid
        cols: usize,
    },

    /// Sheet index out of bounds
    #[error("Sheet index {0} out of bounds (count: {1})")]
    SheetOutOfBounds(usize, usize),

    /// Sheet not found by name
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// A sheet the dashboard depends on is absent from the workbook
    #[error("Could not find a sheet named like '{0}'")]
    MissingRequiredSheet(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
