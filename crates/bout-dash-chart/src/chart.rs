//! Chart plans

use crate::axis::{Axis, AxisPosition};
use crate::legend::{Legend, LegendPosition};
use crate::series::DataSeries;
use bout_dash_core::LabeledTable;

/// Chart types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ChartType {
    /// Vertical bars, one series
    Bar,
    /// Horizontal bars, one series
    BarHorizontal,
    /// Vertical bars, several series side by side per category
    GroupedBar,
    /// Horizontal grouped bars
    GroupedBarHorizontal,
}

impl ChartType {
    /// Check if bars run horizontally
    pub fn is_horizontal(&self) -> bool {
        matches!(self, ChartType::BarHorizontal | ChartType::GroupedBarHorizontal)
    }
}

/// Chart definition handed to a renderer
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Chart {
    /// Chart type
    pub chart_type: ChartType,
    /// Chart title
    pub title: Option<String>,
    /// Data series
    pub series: Vec<DataSeries>,
    /// Category axis (X)
    pub category_axis: Option<Axis>,
    /// Value axis (Y)
    pub value_axis: Option<Axis>,
    /// Legend
    pub legend: Option<Legend>,
}

impl Chart {
    /// Create a new chart
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            title: None,
            series: Vec::new(),
            category_axis: None,
            value_axis: None,
            legend: None,
        }
    }

    /// Chart with one series per named table column, categories from the labels
    ///
    /// Unknown column names are skipped. Horizontal charts put the category
    /// axis on the left.
    pub fn from_table(chart_type: ChartType, table: &LabeledTable, columns: &[&str]) -> Self {
        let position = if chart_type.is_horizontal() {
            AxisPosition::Left
        } else {
            AxisPosition::Bottom
        };
        let mut chart = Self::new(chart_type).with_category_axis(
            Axis::new()
                .with_title(table.label_header())
                .with_position(position),
        );
        for name in columns {
            match DataSeries::from_column(table, name) {
                Some(series) => chart.add_series(series),
                None => log::warn!("table '{}' has no column '{}'", table.label_header(), name),
            }
        }
        if chart.series.len() > 1 {
            chart.legend = Some(Legend::new(LegendPosition::Top));
        }
        chart
    }

    /// Set chart title
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the category axis
    pub fn with_category_axis(mut self, axis: Axis) -> Self {
        self.category_axis = Some(axis);
        self
    }

    /// Set the value axis
    pub fn with_value_axis(mut self, axis: Axis) -> Self {
        self.value_axis = Some(axis);
        self
    }

    /// Add a data series
    pub fn add_series(&mut self, series: DataSeries) {
        self.series.push(series);
    }

    /// Number of categories (length of the longest series)
    pub fn category_count(&self) -> usize {
        self.series.iter().map(DataSeries::len).max().unwrap_or(0)
    }
}
