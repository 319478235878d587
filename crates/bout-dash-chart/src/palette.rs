//! Ordered color palettes

use crate::color::Color;
use crate::error::{ChartError, ChartResult};

/// Plotly's default qualitative sequence
pub const PLOTLY: [Color; 10] = [
    Color::rgb(0x63, 0x6E, 0xFA),
    Color::rgb(0xEF, 0x55, 0x3B),
    Color::rgb(0x00, 0xCC, 0x96),
    Color::rgb(0xAB, 0x63, 0xFA),
    Color::rgb(0xFF, 0xA1, 0x5A),
    Color::rgb(0x19, 0xD3, 0xF3),
    Color::rgb(0xFF, 0x66, 0x92),
    Color::rgb(0xB6, 0xE8, 0x80),
    Color::rgb(0xFF, 0x97, 0xFF),
    Color::rgb(0xFE, 0xCB, 0x52),
];

/// A non-empty, ordered list of fill colors
///
/// Items are colored by rank, wrapping around when there are more items than
/// colors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Color>", into = "Vec<Color>"))]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create a palette; fails with [`ChartError::EmptyPalette`] on no colors
    pub fn new(colors: Vec<Color>) -> ChartResult<Self> {
        if colors.is_empty() {
            return Err(ChartError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Parse a list of color strings (`#RRGGBB`, `rgb(...)`, ...)
    pub fn from_strs<S: AsRef<str>>(colors: &[S]) -> ChartResult<Self> {
        let colors = colors
            .iter()
            .map(|s| {
                Color::parse(s.as_ref()).ok_or_else(|| ChartError::InvalidColor(s.as_ref().to_string()))
            })
            .collect::<ChartResult<Vec<_>>>()?;
        Self::new(colors)
    }

    /// Color for the item at `rank` (0 = largest)
    pub fn color_for_rank(&self, rank: usize) -> Color {
        self.colors[rank % self.colors.len()]
    }

    /// Number of distinct colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if the palette has no colors (never true for a constructed palette)
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colors in order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: PLOTLY.to_vec(),
        }
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = ChartError;

    fn try_from(colors: Vec<Color>) -> ChartResult<Self> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<Color> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}
