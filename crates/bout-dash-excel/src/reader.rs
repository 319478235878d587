//! Spreadsheet reader

use std::io::Cursor;
use std::path::Path;

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader, Sheets};

use crate::error::{ExcelError, ExcelResult};
use bout_dash_core::{RawGrid, RawValue, Sheet, Workbook, MAX_COLS, MAX_ROWS};

/// File extensions [`ExcelReader::read_file`] accepts (lowercase, no dot)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Excel / OpenDocument spreadsheet reader
///
/// Every sheet becomes a [`RawGrid`] with cells at their absolute positions:
/// a sheet whose data starts at `B3` still has `A1` at the grid origin.
/// Formula cells contribute their cached result.
pub struct ExcelReader;

impl ExcelReader {
    /// Check whether a path has an extension this reader handles
    pub fn supports<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
            .unwrap_or(false)
    }

    /// Read a workbook from a file path; the format follows the extension
    pub fn read_file<P: AsRef<Path>>(path: P) -> ExcelResult<Workbook> {
        let path = path.as_ref();
        if !Self::supports(path) {
            return Err(ExcelError::UnsupportedFormat(path.display().to_string()));
        }
        let mut sheets = open_workbook_auto(path)?;
        let workbook = Self::read_sheets(&mut sheets)?;
        log::info!(
            "loaded {} sheet(s) from {}",
            workbook.sheet_count(),
            path.display()
        );
        Ok(workbook)
    }

    /// Read a workbook from in-memory bytes; the format is sniffed
    pub fn read_bytes(bytes: Vec<u8>) -> ExcelResult<Workbook> {
        let len = bytes.len();
        let mut sheets = open_workbook_auto_from_rs(Cursor::new(bytes))?;
        let workbook = Self::read_sheets(&mut sheets)?;
        log::info!(
            "loaded {} sheet(s) from {} bytes",
            workbook.sheet_count(),
            len
        );
        Ok(workbook)
    }

    fn read_sheets<RS>(sheets: &mut Sheets<RS>) -> ExcelResult<Workbook>
    where
        RS: std::io::Read + std::io::Seek,
    {
        let names = sheets.sheet_names();
        let mut result = Vec::with_capacity(names.len());
        for name in names {
            let range = sheets
                .worksheet_range(&name)
                .map_err(|source| ExcelError::Sheet {
                    sheet: name.clone(),
                    source,
                })?;
            let grid = range_to_grid(&range);
            log::debug!(
                "sheet '{}': {} x {} grid",
                name,
                grid.row_count(),
                grid.col_count()
            );
            result.push(Sheet::new(name, grid));
        }
        Ok(Workbook::new(result))
    }
}

/// Lay a calamine range out from the sheet origin
pub(crate) fn range_to_grid(range: &Range<Data>) -> RawGrid {
    let Some((start_row, start_col)) = range.start() else {
        return RawGrid::new();
    };
    let (start_row, start_col) = (start_row as usize, start_col as usize);
    if start_row >= MAX_ROWS as usize || start_col >= MAX_COLS as usize {
        log::warn!(
            "range starting at row {} col {} lies outside the sheet",
            start_row,
            start_col
        );
        return RawGrid::new();
    }

    let leading_rows = std::iter::repeat_with(Vec::new).take(start_row);
    let data_rows = range.rows().map(|row| {
        std::iter::repeat(RawValue::Empty)
            .take(start_col)
            .chain(row.iter().map(data_to_raw))
            .collect::<Vec<_>>()
    });
    RawGrid::from_rows(leading_rows.chain(data_rows))
}

/// Map one calamine cell to a raw value
pub(crate) fn data_to_raw(data: &Data) -> RawValue {
    match data {
        Data::Empty => RawValue::Empty,
        Data::Int(i) => RawValue::Number(*i as f64),
        Data::Float(f) => RawValue::Number(*f),
        Data::Bool(b) => RawValue::Bool(*b),
        Data::String(s) => RawValue::Text(s.clone()),
        // Serial day number, as the cell stores it
        Data::DateTime(dt) => RawValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => RawValue::Text(s.clone()),
        Data::Error(e) => RawValue::Text(format!("#{:?}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_data_to_raw() {
        assert_eq!(data_to_raw(&Data::Empty), RawValue::Empty);
        assert_eq!(data_to_raw(&Data::Int(42)), RawValue::Number(42.0));
        assert_eq!(data_to_raw(&Data::Float(0.25)), RawValue::Number(0.25));
        assert_eq!(data_to_raw(&Data::Bool(true)), RawValue::Bool(true));
        assert_eq!(
            data_to_raw(&Data::String("12%".into())),
            RawValue::Text("12%".into())
        );
        assert_eq!(
            data_to_raw(&Data::DateTimeIso("2024-01-01".into())),
            RawValue::Text("2024-01-01".into())
        );
    }

    #[test]
    fn test_range_keeps_absolute_positions() {
        // Data occupying B3:C4
        let mut range: Range<Data> = Range::new((2, 1), (3, 2));
        range.set_value((2, 1), Data::String("Striker".into()));
        range.set_value((2, 2), Data::Float(0.6));
        range.set_value((3, 2), Data::Int(7));

        let grid = range_to_grid(&range);
        assert_eq!(grid.row_count(), 4);
        assert_eq!(grid.col_count(), 3);
        assert_eq!(grid.get(0, 0), Some(&RawValue::Empty));
        assert_eq!(grid.get(2, 1), Some(&RawValue::Text("Striker".into())));
        assert_eq!(grid.get(2, 2), Some(&RawValue::Number(0.6)));
        assert_eq!(grid.get(3, 1), Some(&RawValue::Empty));
        assert_eq!(grid.get(3, 2), Some(&RawValue::Number(7.0)));
    }

    #[test]
    fn test_empty_range() {
        let range: Range<Data> = Range::empty();
        assert!(range_to_grid(&range).is_empty());
    }

    #[test]
    fn test_supports() {
        assert!(ExcelReader::supports("data/ufc.xlsx"));
        assert!(ExcelReader::supports("UFC.XLSX"));
        assert!(ExcelReader::supports("sheet.ods"));
        assert!(!ExcelReader::supports("table.csv"));
        assert!(!ExcelReader::supports("noext"));
    }
}
