//! Prelude module - common imports for bout-dash users
//!
//! ```rust
//! use bout_dash::prelude::*;
//! ```

pub use crate::{
    // Pipeline steps
    coerce,
    extract,
    extract_clamped,
    extract_values,
    normalize_bucketed,
    normalize_sum_aware,
    text_color_for,

    // Bubble charts
    BubbleComposer,
    BubbleOptions,
    BubblePlan,
    // Addressing
    CellAddress,
    // Chart types
    Chart,
    ChartType,
    CirclePacker,

    CsvReader,
    CsvWriter,

    // Dashboard
    Dashboard,
    DashboardLayout,
    DashboardOptions,

    // Error types
    Error,
    LabeledTable,
    LabeledValue,
    NumericSeries,
    Palette,
    PercentPolicy,
    RangeSpec,
    RawGrid,
    RawValue,
    Result,
    SheetSelector,
    // Main types
    Workbook,
    // Extension traits
    WorkbookExt,
};
