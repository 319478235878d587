//! Dashboard configuration

use bout_dash_chart::{BubbleOptions, Palette};

/// Where each panel reads its data
///
/// Ranges are A1 strings (`"C1:L1"`). The first four read the first sheet;
/// the cross-source ranges read the first sheet whose name contains
/// `cross_sheet_marker`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DashboardLayout {
    pub representation_labels: String,
    pub representation_values: String,
    pub win_labels: String,
    pub win_values: String,
    pub conversion_labels: String,
    pub conversion_observed: String,
    pub conversion_reference: String,
    pub champion_labels: String,
    pub champion_observed: String,
    pub champion_reference: String,
    /// Name of the external source the observed values are compared against
    pub reference_name: String,
    /// Case-insensitive substring identifying the cross-source sheet
    pub cross_sheet_marker: String,
}

impl Default for DashboardLayout {
    fn default() -> Self {
        Self {
            representation_labels: "C1:L1".into(),
            representation_values: "C2:L2".into(),
            win_labels: "B1:L1".into(),
            win_values: "B6:L6".into(),
            conversion_labels: "A3:A13".into(),
            conversion_observed: "D3:D13".into(),
            conversion_reference: "E3:E13".into(),
            champion_labels: "A3:A13".into(),
            champion_observed: "B3:B13".into(),
            champion_reference: "C3:C13".into(),
            reference_name: "ESPN".into(),
            cross_sheet_marker: bout_dash_core::CROSS_SOURCE_MARKER.into(),
        }
    }
}

#[cfg(feature = "serde")]
impl DashboardLayout {
    /// Parse a layout from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> bout_dash_core::Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| bout_dash_core::Error::other(format!("Invalid dashboard layout: {}", e)))
    }
}

/// Options for [`Dashboard::render`](super::Dashboard::render)
#[derive(Debug, Clone, Default)]
pub struct DashboardOptions {
    pub layout: DashboardLayout,
    pub bubble: BubbleOptions,
    pub palette: Palette,
}

impl DashboardOptions {
    pub fn with_layout(mut self, layout: DashboardLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_bubble(mut self, bubble: BubbleOptions) -> Self {
        self.bubble = bubble;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}
