//! # bout-dash
//!
//! Read fixed A1 ranges out of an uploaded spreadsheet, coerce them into
//! numeric series, and turn them into dashboard render plans: bar charts and
//! packed bubble charts with readable labels.
//!
//! ## Features
//!
//! - A1 addressing and rectangular range extraction
//! - Tolerant numeric coercion (`"12%"`, `" 5 "`, blanks)
//! - Two percent normalization policies (bucketed and sum-aware)
//! - Bubble layouts via a pluggable circle packer, with a built-in one
//! - Excel / ODS reading (feature `excel`) and CSV reading and export
//! - A four-panel dashboard over a workbook ([`Dashboard`])
//!
//! ## Example
//!
//! ```rust
//! use bout_dash::prelude::*;
//!
//! let grid = RawGrid::from_rows(vec![
//!     vec![RawValue::from("Striker"), RawValue::from("Wrestler")],
//!     vec![RawValue::from("60%"), RawValue::from("40%")],
//! ]);
//!
//! let labels = extract_values(&grid, "A1:B1").unwrap();
//! let values = normalize_sum_aware(&coerce(&extract_values(&grid, "A2:B2").unwrap()));
//!
//! let items: Vec<LabeledValue> = labels
//!     .iter()
//!     .zip(values.filled())
//!     .map(|(label, value)| LabeledValue::new(label.to_string(), value))
//!     .collect();
//!
//! let plan = BubbleComposer::new()
//!     .compose(&items, &Palette::default(), &BubbleOptions::default().with_top_k(1))
//!     .unwrap();
//! assert_eq!(plan.annotated().next().unwrap().label, "Striker");
//! ```

pub mod dashboard;
pub mod prelude;

pub use dashboard::{
    ChampionPanel, ConversionPanel, Dashboard, DashboardLayout, DashboardOptions,
    RepresentationPanel, Summary, WinRatioPanel, CHAMPION_REPRESENTATION_CSV, CONVERSION_CSV,
    STYLE_REPRESENTATION_CSV, WIN_RATIOS_CSV,
};

// Re-export core types
pub use bout_dash_core::{
    coerce, coerce_filled, coerce_value, extract, extract_clamped, extract_range,
    extract_range_clamped, extract_values, normalize_bucketed, normalize_sum_aware,
    scale_proportions, CellAddress, Column, Error, Interpretation, LabeledTable, Normalized,
    NumericSeries, PercentPolicy, RangeSpec, RawGrid, RawValue, Result, Sheet, SheetSelector,
    Workbook, CROSS_SOURCE_MARKER, MAX_COLS, MAX_ROWS,
};

// Re-export chart types
pub use bout_dash_chart::{
    text_color_for, Annotation, Axis, AxisPosition, BubbleCircle, BubbleComposer, BubbleOptions,
    BubblePlan, Chart, ChartError, ChartResult, ChartType, CirclePacker, Color, DataReference,
    DataSeries, LabeledValue, Legend, LegendEntry, LegendPosition, PackItem, PackedCircle,
    Palette, TextColor,
};
#[cfg(feature = "packing")]
pub use bout_dash_chart::FrontChainPacker;

// Re-export I/O types
pub use bout_dash_csv::{CsvError, CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter};
#[cfg(feature = "excel")]
pub use bout_dash_excel::{ExcelError, ExcelReader};

use std::path::Path;

/// Extension trait for Workbook to add file I/O
pub trait WorkbookExt {
    /// Open a workbook from a file, picking the reader from the extension
    fn open<P: AsRef<Path>>(path: P) -> Result<Workbook>;
}

impl WorkbookExt for Workbook {
    fn open<P: AsRef<Path>>(path: P) -> Result<Workbook> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            #[cfg(feature = "excel")]
            Some("xlsx") | Some("xlsm") | Some("xlsb") | Some("xls") | Some("ods") => {
                ExcelReader::read_file(path).map_err(|e| Error::other(e.to_string()))
            }
            Some("csv") => CsvReader::read_file(path, &CsvReadOptions::default())
                .map_err(|e| Error::other(e.to_string())),
            _ => Err(Error::other(format!(
                "Unsupported file format: {}",
                path.display()
            ))),
        }
    }
}
