//! Data series types

use bout_dash_core::{LabeledTable, NumericSeries};

/// Data series for a chart
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DataSeries {
    /// Series name
    pub name: Option<String>,
    /// Values (Y data)
    pub values: DataReference,
    /// Categories (X data)
    pub categories: Option<DataReference>,
}

impl DataSeries {
    /// Create a new data series
    pub fn new(values: DataReference) -> Self {
        Self {
            name: None,
            values,
            categories: None,
        }
    }

    /// Series for one table column, named after it, categories from the labels
    pub fn from_column(table: &LabeledTable, name: &str) -> Option<Self> {
        let values = table.column(name)?;
        Some(
            Self::new(DataReference::from(values))
                .with_name(name)
                .with_categories(DataReference::Strings(table.label_strings())),
        )
    }

    /// Set series name
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set categories
    pub fn with_categories(mut self, categories: DataReference) -> Self {
        self.categories = Some(categories);
        self
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the series has no values
    pub fn is_empty(&self) -> bool {
        self.values.len() == 0
    }
}

/// Literal chart data
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum DataReference {
    /// Numeric values; `None` renders as a gap
    Numbers(Vec<Option<f64>>),
    /// String values (for categories)
    Strings(Vec<String>),
}

impl DataReference {
    /// Create from numeric values
    pub fn numbers(values: Vec<f64>) -> Self {
        DataReference::Numbers(values.into_iter().map(Some).collect())
    }

    /// Create from string values
    pub fn strings(values: Vec<String>) -> Self {
        DataReference::Strings(values)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        match self {
            DataReference::Numbers(v) => v.len(),
            DataReference::Strings(v) => v.len(),
        }
    }
}

impl From<&NumericSeries> for DataReference {
    fn from(series: &NumericSeries) -> Self {
        DataReference::Numbers(series.as_slice().to_vec())
    }
}
