//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;
use bout_dash_core::{RawGrid, RawValue, Sheet, Workbook};

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a single-sheet workbook named after the file stem
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Workbook> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&options.sheet_name)
            .to_string();
        let grid = Self::read_grid(file, options)?;
        log::info!(
            "loaded {} x {} grid from {}",
            grid.row_count(),
            grid.col_count(),
            path.display()
        );
        Ok(Workbook::new(vec![Sheet::new(name, grid)]))
    }

    /// Read CSV from a reader into a single-sheet workbook
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Workbook> {
        let grid = Self::read_grid(reader, options)?;
        Ok(Workbook::new(vec![Sheet::new(options.sheet_name.clone(), grid)]))
    }

    /// Read CSV from a reader into a raw grid
    ///
    /// Ragged rows are allowed; short rows are padded with empty cells.
    pub fn read_grid<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<RawGrid> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(options.has_header)
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            let row: Vec<RawValue> = record
                .iter()
                .map(|field| {
                    if options.auto_detect_types {
                        Self::detect_type(field)
                    } else if field.is_empty() {
                        RawValue::Empty
                    } else {
                        RawValue::text(field)
                    }
                })
                .collect();
            rows.push(row);
        }

        Ok(RawGrid::from_rows(rows))
    }

    /// Detect the type of a field value
    fn detect_type(field: &str) -> RawValue {
        let trimmed = field.trim();

        if trimmed.is_empty() {
            return RawValue::Empty;
        }

        if trimmed.eq_ignore_ascii_case("true") {
            return RawValue::Bool(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return RawValue::Bool(false);
        }

        // Try number; "nan"/"inf" spellings stay text
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => RawValue::Number(n),
            _ => RawValue::text(field),
        }
    }
}
