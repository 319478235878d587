//! Chart error types

use thiserror::Error;

/// Result type for chart operations
pub type ChartResult<T> = std::result::Result<T, ChartError>;

/// Errors that can occur while composing chart plans
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// No circle packer is installed on the composer
    #[error("Circle packing is unavailable: no packer installed")]
    MissingPackingDependency,

    /// Radius multiplier must be finite and positive
    #[error("Invalid size scale {0}: must be finite and > 0")]
    InvalidSizeScale(f64),

    /// A palette needs at least one color
    #[error("Palette has no colors")]
    EmptyPalette,

    /// Invalid color string
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// The packer rejected its input or returned an incomplete layout
    #[error("Packing failed: {0}")]
    Packing(String),
}
