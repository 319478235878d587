//! Rectangular grid of raw cell values

use crate::cell::{CellAddress, RawValue};

/// An immutable, rectangular, row-major grid of [`RawValue`]s
///
/// Readers build grids from ragged rows; short rows are padded with
/// [`RawValue::Empty`] so every row has the same width.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RawGrid {
    rows: usize,
    cols: usize,
    cells: Vec<RawValue>,
}

impl RawGrid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from rows of values, padding short rows
    pub fn from_rows<R, V>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = V>,
        V: Into<RawValue>,
    {
        let rows: Vec<Vec<RawValue>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        let row_count = if cols == 0 { 0 } else { rows.len() };
        let mut cells = Vec::with_capacity(row_count * cols);
        for mut row in rows.into_iter().take(row_count) {
            row.resize(cols, RawValue::Empty);
            cells.extend(row);
        }

        Self {
            rows: row_count,
            cols,
            cells,
        }
    }

    /// Build a grid from a flat row-major vector
    ///
    /// Returns `None` when `cells.len() != rows * cols`.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<RawValue>) -> Option<Self> {
        if rows.checked_mul(cols)? != cells.len() {
            return None;
        }
        if rows == 0 || cols == 0 {
            return Some(Self::default());
        }
        Some(Self { rows, cols, cells })
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn col_count(&self) -> usize {
        self.cols
    }

    /// Check if the grid holds no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get a value by 0-based position
    pub fn get(&self, row: usize, col: usize) -> Option<&RawValue> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Get a value by address
    pub fn get_at(&self, addr: CellAddress) -> Option<&RawValue> {
        self.get(addr.row as usize, addr.col as usize)
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[RawValue]> + '_ {
        // chunks(0) panics; an empty grid has no rows anyway
        self.cells.chunks(self.cols.max(1))
    }

    /// All values in row-major order
    pub fn flatten(&self) -> Vec<RawValue> {
        self.cells.clone()
    }

    /// Consume the grid into its row-major values
    pub fn into_flat(self) -> Vec<RawValue> {
        self.cells
    }

    /// Copy the inclusive rectangle `[r0, r1] x [c0, c1]`; the caller checks bounds
    pub(crate) fn slice(&self, r0: usize, r1: usize, c0: usize, c1: usize) -> Self {
        let cols = c1 - c0 + 1;
        let mut cells = Vec::with_capacity((r1 - r0 + 1) * cols);
        for row in r0..=r1 {
            let start = row * self.cols;
            cells.extend_from_slice(&self.cells[start + c0..=start + c1]);
        }
        Self {
            rows: r1 - r0 + 1,
            cols,
            cells,
        }
    }
}
