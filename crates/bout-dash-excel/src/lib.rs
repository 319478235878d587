//! # bout-dash-excel
//!
//! Spreadsheet reader for bout-dash. Loads `.xlsx`, `.xlsm`, `.xlsb`, `.xls`
//! and `.ods` files into a [`Workbook`](bout_dash_core::Workbook) of raw grids,
//! with no header interpretation.

pub mod error;
pub mod reader;

pub use error::{ExcelError, ExcelResult};
pub use reader::{ExcelReader, SUPPORTED_EXTENSIONS};
