//! Spreadsheet reader error types

use thiserror::Error;

/// Result type for spreadsheet reading
pub type ExcelResult<T> = std::result::Result<T, ExcelError>;

/// Errors that can occur while reading a spreadsheet
#[derive(Debug, Error)]
pub enum ExcelError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file could not be opened or decoded
    #[error("Spreadsheet error: {0}")]
    Calamine(#[from] calamine::Error),

    /// A listed sheet could not be read
    #[error("Failed to read sheet '{sheet}': {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    /// File extension not handled by this reader
    #[error("Unsupported spreadsheet format: {0}")]
    UnsupportedFormat(String),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] bout_dash_core::Error),
}
