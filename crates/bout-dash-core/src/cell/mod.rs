//! Cell-related types and utilities
//!
//! This module contains:
//! - [`RawValue`] - The literal value read from a cell
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`RangeSpec`] - A pair of corners (e.g., "C1:L1")

mod address;
mod value;

pub use address::{CellAddress, RangeSpec};
pub use value::RawValue;
