//! Axis types

/// Chart axis
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Axis {
    /// Axis title
    pub title: Option<String>,
    /// Text appended to every tick label (e.g. "%")
    pub tick_suffix: Option<String>,
    /// Position
    pub position: AxisPosition,
}

impl Axis {
    /// Create a new axis
    pub fn new() -> Self {
        Self::default()
    }

    /// Set axis title
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set tick label suffix
    pub fn with_tick_suffix<S: Into<String>>(mut self, suffix: S) -> Self {
        self.tick_suffix = Some(suffix.into());
        self
    }

    /// Set position
    pub fn with_position(mut self, position: AxisPosition) -> Self {
        self.position = position;
        self
    }
}

/// Axis position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AxisPosition {
    #[default]
    Bottom,
    Top,
    Left,
    Right,
}
