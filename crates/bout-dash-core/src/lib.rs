//! # bout-dash-core
//!
//! Core data pipeline for the bout-dash spreadsheet dashboard.
//!
//! This crate provides the types and steps every panel runs through:
//! - [`CellAddress`] and [`RangeSpec`] - A1 addressing
//! - [`RawGrid`], [`Workbook`] - Raw cell values as read from a file
//! - [`extract`] - Rectangular range extraction
//! - [`coerce`] - Raw values to a [`NumericSeries`]
//! - [`normalize_bucketed`] / [`normalize_sum_aware`] - Percent normalization
//! - [`LabeledTable`] - Labels plus aligned numeric columns
//!
//! ## Example
//!
//! ```rust
//! use bout_dash_core::{coerce, extract, normalize_bucketed, RawGrid, RawValue};
//!
//! let grid = RawGrid::from_rows(vec![
//!     vec![RawValue::from("Striker"), RawValue::from("Wrestler")],
//!     vec![RawValue::from("0.6"), RawValue::from("0.4")],
//! ]);
//!
//! let values = extract(&grid, "A2", "B2").unwrap().flatten();
//! let percent = normalize_bucketed(&coerce(&values));
//! assert_eq!(percent.as_slice(), &[Some(60.0), Some(40.0)]);
//! ```

pub mod cell;
pub mod error;
pub mod grid;
pub mod range;
pub mod series;
pub mod table;
pub mod workbook;

// Re-exports for convenience
pub use cell::{CellAddress, RangeSpec, RawValue};
pub use error::{Error, Result};
pub use grid::RawGrid;
pub use range::{extract, extract_clamped, extract_range, extract_range_clamped, extract_values};
pub use series::{
    coerce, coerce_filled, coerce_value, normalize_bucketed, normalize_sum_aware,
    scale_proportions, Interpretation, Normalized, NumericSeries, PercentPolicy,
};
pub use table::{Column, LabeledTable};
pub use workbook::{Sheet, SheetSelector, Workbook, CROSS_SOURCE_MARKER};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;
