//! Color representation and label contrast

use lazy_regex::regex_captures;
use std::fmt;

/// Luminance above which dark text reads better than light text
const LIGHT_BACKGROUND_THRESHOLD: f64 = 0.6;

/// Fill color of a chart element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// RGB color (no alpha)
    Rgb { r: u8, g: u8, b: u8 },

    /// RGB color with alpha channel
    Rgba { r: u8, g: u8, b: u8, a: u8 },
}

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Create an RGBA color
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color::Rgba { r, g, b, a }
    }

    /// Create from a hex string (e.g., "#FF0000", "FF0000" or "#F00")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        match hex.len() {
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
                Some(Color::Rgb {
                    r: nibble(0)?,
                    g: nibble(1)?,
                    b: nibble(2)?,
                })
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Color::Rgb { r, g, b })
            }
            _ => None,
        }
    }

    /// Parse a CSS-style color: `#RGB`, `#RRGGBB`, `rgb(r, g, b)` or `rgba(r, g, b, a)`
    ///
    /// A channel of `rgb()` at or below 1 is read as a fraction and scaled to
    /// 0-255; larger channels are used as-is. Alpha is a fraction of 1.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::from_hex(s);
        }

        let (_, r, g, b, a) = regex_captures!(
            r"^rgba?\(\s*([^,\s]+)\s*,\s*([^,\s]+)\s*,\s*([^,\s)]+)\s*(?:,\s*([^,\s)]+)\s*)?\)$"i,
            s
        )?;

        let channels = [
            parse_channel(r)?,
            parse_channel(g)?,
            parse_channel(b)?,
        ];
        // Each channel at or below 1 is a fraction of 255
        let [r, g, b] = channels.map(|c| {
            let c = if c <= 1.0 { c * 255.0 } else { c };
            c.round().clamp(0.0, 255.0) as u8
        });

        if a.is_empty() {
            Some(Color::Rgb { r, g, b })
        } else {
            let alpha = parse_channel(a)?.clamp(0.0, 1.0);
            Some(Color::Rgba {
                r,
                g,
                b,
                a: (alpha * 255.0).round() as u8,
            })
        }
    }

    /// Convert to hex string (without # prefix), alpha dropped
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Convert to RGB tuple
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Rgb { r, g, b } => (*r, *g, *b),
            Color::Rgba { r, g, b, .. } => (*r, *g, *b),
        }
    }

    /// Relative luminance in [0, 1] using Rec. 709 weights
    pub fn luminance(&self) -> f64 {
        let (r, g, b) = self.to_rgb();
        (0.2126 * r as f64 + 0.7152 * g as f64 + 0.0722 * b as f64) / 255.0
    }

    /// Readable label color on top of this fill
    pub fn text_color(&self) -> TextColor {
        if self.luminance() > LIGHT_BACKGROUND_THRESHOLD {
            TextColor::Black
        } else {
            TextColor::White
        }
    }

    // Common colors
    pub const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    pub const GRAY: Color = Color::Rgb {
        r: 128,
        g: 128,
        b: 128,
    };
}

fn parse_channel(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0)
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb { r, g, b } => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
            Color::Rgba { r, g, b, a } => {
                write!(f, "rgba({}, {}, {}, {:.2})", r, g, b, *a as f64 / 255.0)
            }
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid color '{}'", s)))
    }
}

/// Text color for a label drawn on a filled shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TextColor {
    Black,
    White,
}

impl TextColor {
    /// CSS color name
    pub fn as_str(&self) -> &'static str {
        match self {
            TextColor::Black => "black",
            TextColor::White => "white",
        }
    }

    /// The matching [`Color`]
    pub fn to_color(&self) -> Color {
        match self {
            TextColor::Black => Color::BLACK,
            TextColor::White => Color::WHITE,
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick black or white label text for a fill color string
///
/// Unparseable fills get white text; this never fails.
///
/// ```
/// use bout_dash_chart::{text_color_for, TextColor};
///
/// assert_eq!(text_color_for("#FFFFFF"), TextColor::Black);
/// assert_eq!(text_color_for("rgb(20, 20, 80)"), TextColor::White);
/// assert_eq!(text_color_for("not-a-color"), TextColor::White);
/// ```
pub fn text_color_for(fill: &str) -> TextColor {
    match Color::parse(fill) {
        Some(color) => color.text_color(),
        None => {
            log::debug!("unparseable fill color '{}', using white text", fill);
            TextColor::White
        }
    }
}
