//! Rectangular range extraction from a [`RawGrid`]

use crate::cell::{CellAddress, RangeSpec, RawValue};
use crate::error::{Error, Result};
use crate::grid::RawGrid;

/// Extract the inclusive rectangle spanned by two corner addresses
///
/// Corner order does not matter. Fails with [`Error::InvalidAddress`] on a
/// malformed corner and [`Error::OutOfBounds`] when the rectangle reaches past
/// the grid.
///
/// ```
/// use bout_dash_core::{extract, RawGrid, RawValue};
///
/// let grid = RawGrid::from_rows(vec![
///     vec![RawValue::from("x"), RawValue::from("Striker"), RawValue::from("Wrestler")],
///     vec![RawValue::from("y"), RawValue::from(0.6), RawValue::from(0.4)],
/// ]);
/// let values = extract(&grid, "C2", "B2").unwrap().flatten();
/// assert_eq!(values, vec![RawValue::from(0.6), RawValue::from(0.4)]);
/// ```
pub fn extract(grid: &RawGrid, corner1: &str, corner2: &str) -> Result<RawGrid> {
    let range = RangeSpec::new(CellAddress::decode(corner1)?, CellAddress::decode(corner2)?);
    extract_range(grid, &range)
}

/// Extract a parsed [`RangeSpec`], failing with [`Error::OutOfBounds`] past the grid
pub fn extract_range(grid: &RawGrid, range: &RangeSpec) -> Result<RawGrid> {
    let (start, end) = (range.top_left(), range.bottom_right());
    let (r1, c1) = (end.row as usize, end.col as usize);

    if r1 >= grid.row_count() || c1 >= grid.col_count() {
        return Err(Error::OutOfBounds {
            range: range.to_a1_string(),
            rows: grid.row_count(),
            cols: grid.col_count(),
        });
    }

    log::debug!("extracting {} ({}x{})", range, range.row_count(), range.col_count());
    Ok(grid.slice(start.row as usize, r1, start.col as usize, c1))
}

/// Extract two corners, silently truncating the rectangle to the grid extent
///
/// A rectangle entirely outside the grid yields an empty grid.
pub fn extract_clamped(grid: &RawGrid, corner1: &str, corner2: &str) -> Result<RawGrid> {
    let range = RangeSpec::new(CellAddress::decode(corner1)?, CellAddress::decode(corner2)?);
    Ok(extract_range_clamped(grid, &range))
}

/// Extract a parsed [`RangeSpec`], truncating to the grid extent
pub fn extract_range_clamped(grid: &RawGrid, range: &RangeSpec) -> RawGrid {
    let (start, end) = (range.top_left(), range.bottom_right());
    let (r0, c0) = (start.row as usize, start.col as usize);

    if r0 >= grid.row_count() || c0 >= grid.col_count() {
        log::debug!("range {} lies outside the grid; nothing extracted", range);
        return RawGrid::new();
    }

    let r1 = (end.row as usize).min(grid.row_count() - 1);
    let c1 = (end.col as usize).min(grid.col_count() - 1);
    if r1 < end.row as usize || c1 < end.col as usize {
        log::debug!(
            "range {} truncated to {} rows x {} columns",
            range,
            r1 - r0 + 1,
            c1 - c0 + 1
        );
    }
    grid.slice(r0, r1, c0, c1)
}

/// Parse `"X:Y"` and return the clamped extraction flattened to row-major order
///
/// This is the shape every dashboard panel consumes: one label or value per cell.
pub fn extract_values(grid: &RawGrid, range: &str) -> Result<Vec<RawValue>> {
    let range = RangeSpec::parse(range)?;
    Ok(extract_range_clamped(grid, &range).into_flat())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    /// Grid whose cells hold `row * 100 + col`
    fn numbered_grid(rows: usize, cols: usize) -> RawGrid {
        RawGrid::from_rows(
            (0..rows).map(|r| (0..cols).map(move |c| RawValue::Number((r * 100 + c) as f64))),
        )
    }

    fn numbers(grid: &RawGrid) -> Vec<f64> {
        grid.flatten()
            .iter()
            .map(|v| v.as_number().unwrap())
            .collect()
    }

    #[test]
    fn test_extract_single_row() {
        let grid = numbered_grid(13, 12);

        let row = extract(&grid, "C1", "L1").unwrap();
        assert_eq!(row.row_count(), 1);
        assert_eq!(row.col_count(), 10);
        assert_eq!(numbers(&row), (2..=11).map(|c| c as f64).collect::<Vec<_>>());

        let row = extract(&grid, "B6", "L6").unwrap();
        assert_eq!(numbers(&row), (1..=11).map(|c| (500 + c) as f64).collect::<Vec<_>>());
    }

    #[test]
    fn test_extract_single_column() {
        let grid = numbered_grid(13, 12);

        let column = extract(&grid, "A3", "A13").unwrap();
        assert_eq!(column.row_count(), 11);
        assert_eq!(column.col_count(), 1);
        assert_eq!(numbers(&column), (2..=12).map(|r| (r * 100) as f64).collect::<Vec<_>>());
    }

    #[test]
    fn test_extract_block_is_row_major() {
        let grid = numbered_grid(4, 4);
        let block = extract(&grid, "C3", "B2").unwrap();
        assert_eq!(numbers(&block), vec![101.0, 102.0, 201.0, 202.0]);
    }

    #[test]
    fn test_extract_invalid_address() {
        let grid = numbered_grid(3, 3);
        assert!(matches!(extract(&grid, "bad", "A1"), Err(Error::InvalidAddress(_))));
        assert!(matches!(extract(&grid, "A1", "1A"), Err(Error::InvalidAddress(_))));
    }

    #[test]
    fn test_extract_out_of_bounds() {
        let grid = numbered_grid(3, 3);
        match extract(&grid, "A1", "D1") {
            Err(Error::OutOfBounds { range, rows, cols }) => {
                assert_eq!(range, "A1:D1");
                assert_eq!((rows, cols), (3, 3));
            }
            other => panic!("expected OutOfBounds, got {:?}", other),
        }
        assert!(extract(&grid, "A4", "A1").is_err());
        assert!(extract(&RawGrid::new(), "A1", "A1").is_err());
    }

    #[test]
    fn test_extract_clamped_truncates() {
        let grid = numbered_grid(12, 5);

        // A3:A13 on a 12-row sheet loses the last row
        let column = extract_clamped(&grid, "A3", "A13").unwrap();
        assert_eq!(column.row_count(), 10);

        let row = extract_clamped(&grid, "C1", "L1").unwrap();
        assert_eq!(numbers(&row), vec![2.0, 3.0, 4.0]);

        assert!(extract_clamped(&grid, "Z1", "Z9").unwrap().is_empty());
        assert!(extract_clamped(&grid, "A20", "B30").unwrap().is_empty());
    }

    #[test]
    fn test_extract_values() {
        let grid = RawGrid::from_rows(vec![
            vec![RawValue::Empty, RawValue::from("Striker"), RawValue::from("Wrestler")],
            vec![RawValue::Empty, RawValue::from("60%"), RawValue::from(40.0)],
        ]);
        assert_eq!(
            extract_values(&grid, "B2:C2").unwrap(),
            vec![RawValue::from("60%"), RawValue::from(40.0)]
        );
        assert!(extract_values(&grid, "B2:").is_err());
    }

    fn address() -> impl Strategy<Value = (u32, u16)> {
        (0u32..8, 0u16..6)
    }

    proptest! {
        #[test]
        fn prop_corner_order_is_irrelevant(a in address(), b in address()) {
            let grid = numbered_grid(8, 6);
            let x = CellAddress::new(a.0, a.1).to_a1_string();
            let y = CellAddress::new(b.0, b.1).to_a1_string();

            let forward = extract(&grid, &x, &y).unwrap();
            let backward = extract(&grid, &y, &x).unwrap();
            prop_assert_eq!(&forward, &backward);

            // The mixed corners of the same rectangle cover the same cells too
            let mixed_a = CellAddress::new(a.0, b.1).to_a1_string();
            let mixed_b = CellAddress::new(b.0, a.1).to_a1_string();
            prop_assert_eq!(forward, extract(&grid, &mixed_a, &mixed_b).unwrap());
        }

        #[test]
        fn prop_clamped_matches_strict_inside_grid(a in address(), b in address()) {
            let grid = numbered_grid(8, 6);
            let x = CellAddress::new(a.0, a.1).to_a1_string();
            let y = CellAddress::new(b.0, b.1).to_a1_string();
            prop_assert_eq!(
                extract(&grid, &x, &y).unwrap(),
                extract_clamped(&grid, &y, &x).unwrap()
            );
        }
    }
}
