//! # bout-dash-csv
//!
//! CSV support for bout-dash: a CSV file loads as a single-sheet
//! [`Workbook`](bout_dash_core::Workbook), and labeled tables export as CSV
//! downloads.

mod reader;
mod writer;
mod options;
mod error;

pub use reader::CsvReader;
pub use writer::CsvWriter;
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use error::{CsvError, CsvResult};
