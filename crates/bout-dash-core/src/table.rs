//! Labeled tables: one label column plus named numeric columns

use crate::cell::RawValue;
use crate::series::NumericSeries;
use std::cmp::Ordering;

/// A named numeric column
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Column {
    /// Column header
    pub name: String,
    /// Column values, aligned with the table labels
    pub values: NumericSeries,
}

/// A label column with any number of aligned [`Column`]s
///
/// Every column always has the same length as the label column; adding a
/// longer or shorter column pads the others with missing entries.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LabeledTable {
    label_header: String,
    labels: Vec<Option<String>>,
    columns: Vec<Column>,
}

impl LabeledTable {
    /// Create a table from labels; `None` marks a blank label cell
    pub fn new<S: Into<String>>(label_header: S, labels: Vec<Option<String>>) -> Self {
        Self {
            label_header: label_header.into(),
            labels,
            columns: Vec::new(),
        }
    }

    /// Create a table whose labels are raw cells
    pub fn from_raw<S: Into<String>>(label_header: S, labels: &[RawValue]) -> Self {
        Self::new(label_header, labels.iter().map(RawValue::label).collect())
    }

    /// Add a column, padding with missing entries so lengths agree
    pub fn with_column<S: Into<String>>(mut self, name: S, mut values: NumericSeries) -> Self {
        let len = self.labels.len().max(values.len());
        self.labels.resize(len, None);
        for column in &mut self.columns {
            column.values.pad_to(len);
        }
        values.pad_to(len);
        self.columns.push(Column {
            name: name.into(),
            values,
        });
        self
    }

    /// Header of the label column
    pub fn label_header(&self) -> &str {
        &self.label_header
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in row order
    pub fn labels(&self) -> &[Option<String>] {
        &self.labels
    }

    /// Labels in row order, blank labels as empty strings
    pub fn label_strings(&self) -> Vec<String> {
        self.labels
            .iter()
            .map(|l| l.clone().unwrap_or_default())
            .collect()
    }

    /// All columns in insertion order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&NumericSeries> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| &c.values)
    }

    /// Mean of a column's present values
    pub fn mean(&self, name: &str) -> Option<f64> {
        self.column(name).and_then(NumericSeries::mean)
    }

    /// Keep only rows with a label and a value in every column
    pub fn drop_incomplete(&self) -> Self {
        self.retain_rows(|table, row| {
            table.labels[row].is_some() && table.columns.iter().all(|c| c.values[row].is_some())
        })
    }

    /// Keep only rows with a label
    pub fn drop_unlabeled(&self) -> Self {
        self.retain_rows(|table, row| table.labels[row].is_some())
    }

    /// Rows reordered by a column, missing values last; ties keep their order
    pub fn sorted_by(&self, name: &str, descending: bool) -> Self {
        let Some(values) = self.column(name) else {
            return self.clone();
        };

        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by(|&a, &b| match (values[a], values[b]) {
            (Some(x), Some(y)) => {
                let ord = x.partial_cmp(&y).unwrap_or(Ordering::Equal);
                if descending {
                    ord.reverse()
                } else {
                    ord
                }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        self.select_rows(&order)
    }

    /// Iterate rows as `(label, values)` pairs
    pub fn rows(&self) -> impl Iterator<Item = (Option<&str>, Vec<Option<f64>>)> + '_ {
        (0..self.len()).map(move |row| {
            (
                self.labels[row].as_deref(),
                self.columns.iter().map(|c| c.values[row]).collect(),
            )
        })
    }

    fn retain_rows<F: Fn(&Self, usize) -> bool>(&self, keep: F) -> Self {
        let rows: Vec<usize> = (0..self.len()).filter(|&row| keep(self, row)).collect();
        if rows.len() < self.len() {
            log::debug!(
                "dropped {} of {} rows from '{}' table",
                self.len() - rows.len(),
                self.len(),
                self.label_header
            );
        }
        self.select_rows(&rows)
    }

    fn select_rows(&self, rows: &[usize]) -> Self {
        Self {
            label_header: self.label_header.clone(),
            labels: rows.iter().map(|&r| self.labels[r].clone()).collect(),
            columns: self
                .columns
                .iter()
                .map(|c| Column {
                    name: c.name.clone(),
                    values: rows.iter().map(|&r| c.values[r]).collect(),
                })
                .collect(),
        }
    }
}
