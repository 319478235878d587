//! Raw value to number coercion

use super::NumericSeries;
use crate::cell::RawValue;

/// Coerce one raw value to a number
///
/// Text is stripped of `%` characters and surrounding whitespace before parsing,
/// so `"12%"` reads as `12.0` (not `0.12`). Blank, boolean and unparseable cells
/// yield `None`.
pub fn coerce_value(value: &RawValue) -> Option<f64> {
    let parsed = match value {
        RawValue::Number(n) => Some(*n),
        RawValue::Text(s) => {
            let cleaned = s.replace('%', "");
            cleaned.trim().parse::<f64>().ok()
        }
        RawValue::Empty | RawValue::Bool(_) => None,
    };
    parsed.filter(|n| !n.is_nan())
}

/// Coerce raw values into a [`NumericSeries`] of the same length and order
///
/// ```
/// use bout_dash_core::{coerce, RawValue};
///
/// let series = coerce(&[
///     RawValue::from("12%"),
///     RawValue::from("5"),
///     RawValue::from(""),
///     RawValue::from("n/a"),
/// ]);
/// assert_eq!(series.as_slice(), &[Some(12.0), Some(5.0), None, None]);
/// ```
pub fn coerce(values: &[RawValue]) -> NumericSeries {
    let series: NumericSeries = values.iter().map(coerce_value).collect();
    if series.missing_count() > 0 {
        log::debug!(
            "{} of {} values could not be read as numbers",
            series.missing_count(),
            series.len()
        );
    }
    series
}

/// Coerce raw values, replacing missing entries and infinities with 0.0
///
/// Used where every label must keep a value (bubble charts) instead of being
/// dropped.
pub fn coerce_filled(values: &[RawValue]) -> Vec<f64> {
    coerce(values).filled()
}
