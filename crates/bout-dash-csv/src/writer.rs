//! CSV writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::{CsvWriteOptions, LineTerminator};
use bout_dash_core::{LabeledTable, RawGrid, RawValue};

/// CSV file writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write a labeled table to a CSV file
    pub fn write_table_file<P: AsRef<Path>>(
        table: &LabeledTable,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        Self::write_table(table, file, options)?;
        log::info!("wrote {} rows to {}", table.len(), path.display());
        Ok(())
    }

    /// Write a labeled table: label column first, missing values as empty fields
    pub fn write_table<W: Write>(
        table: &LabeledTable,
        writer: W,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let mut csv_writer = Self::builder(options).from_writer(writer);

        if options.write_header {
            let mut header = vec![table.label_header().to_string()];
            header.extend(table.columns().iter().map(|c| c.name.clone()));
            csv_writer.write_record(&header)?;
        }

        for (label, values) in table.rows() {
            let mut record = vec![label.unwrap_or_default().to_string()];
            record.extend(
                values
                    .into_iter()
                    .map(|v| v.map(|n| format_number(n, options)).unwrap_or_default()),
            );
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Render a labeled table as a CSV string (download body)
    pub fn table_to_string(table: &LabeledTable, options: &CsvWriteOptions) -> CsvResult<String> {
        let mut buffer = Vec::new();
        Self::write_table(table, &mut buffer, options)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Write a raw grid, one record per row
    pub fn write_grid<W: Write>(
        grid: &RawGrid,
        writer: W,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let mut csv_writer = Self::builder(options).from_writer(writer);

        for row in grid.rows() {
            let record: Vec<String> = row
                .iter()
                .map(|value| match value {
                    RawValue::Number(n) => format_number(*n, options),
                    other => other.to_string(),
                })
                .collect();
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    fn builder(options: &CsvWriteOptions) -> csv::WriterBuilder {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
            LineTerminator::CR => csv::Terminator::Any(b'\r'),
        };

        let mut builder = csv::WriterBuilder::new();
        builder
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(terminator)
            .flexible(true);
        builder
    }
}

fn format_number(n: f64, options: &CsvWriteOptions) -> String {
    match options.float_precision {
        Some(precision) => format!("{:.*}", precision, n),
        None => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bout_dash_core::NumericSeries;
    use pretty_assertions::assert_eq;

    fn table() -> LabeledTable {
        LabeledTable::new("Style", vec![Some("Striker".into()), Some("Muay, Thai".into())])
            .with_column("Representation (%)", NumericSeries::from(vec![Some(60.0), None]))
    }

    #[test]
    fn test_table_to_string() {
        let csv = CsvWriter::table_to_string(&table(), &CsvWriteOptions::default()).unwrap();
        assert_eq!(
            csv,
            "Style,Representation (%)\nStriker,60\n\"Muay, Thai\",\n"
        );
    }

    #[test]
    fn test_precision_and_no_header() {
        let options = CsvWriteOptions {
            write_header: false,
            float_precision: Some(2),
            line_terminator: LineTerminator::CRLF,
            ..Default::default()
        };
        let csv = CsvWriter::table_to_string(&table(), &options).unwrap();
        assert_eq!(csv, "Striker,60.00\r\n\"Muay, Thai\",\r\n");
    }

    #[test]
    fn test_write_grid() {
        let grid = RawGrid::from_rows(vec![
            vec![RawValue::from("a"), RawValue::Empty],
            vec![RawValue::from(0.5), RawValue::from(true)],
        ]);
        let mut out = Vec::new();
        CsvWriter::write_grid(&grid, &mut out, &CsvWriteOptions::default()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a,\n0.5,TRUE\n");
    }
}
