//! Legend types

use crate::color::Color;

/// Chart legend
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Legend {
    /// Position
    pub position: LegendPosition,
}

impl Legend {
    /// Create a new legend
    pub fn new(position: LegendPosition) -> Self {
        Self { position }
    }
}

/// Legend position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LegendPosition {
    Right,
    Top,
    Bottom,
    Left,
}

/// One legend row: a label and its swatch color
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
    /// Value shown next to the label, if any
    pub value: Option<f64>,
}

impl LegendEntry {
    pub fn new<S: Into<String>>(label: S, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
            value: None,
        }
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }
}
