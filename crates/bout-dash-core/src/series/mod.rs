//! Numeric series built from raw cell values
//!
//! - [`coerce`] / [`coerce_filled`] turn raw values into numbers
//! - [`normalize_bucketed`] / [`normalize_sum_aware`] rescale a series into
//!   percentage-like values

mod coerce;
mod normalize;

pub use coerce::{coerce, coerce_filled, coerce_value};
pub use normalize::{
    normalize_bucketed, normalize_sum_aware, scale_proportions, Interpretation, Normalized,
    PercentPolicy,
};

use std::ops::Index;

/// An ordered sequence of optional numbers, positionally aligned with labels
///
/// `None` marks a missing entry (blank or unparseable input). NaN is never
/// stored; constructors turn it into `None`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NumericSeries(Vec<Option<f64>>);

impl NumericSeries {
    /// Create an empty series
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a series where every entry is present
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Self {
        values.into_iter().map(Some).collect()
    }

    /// A series of `len` missing entries
    pub fn missing(len: usize) -> Self {
        Self(vec![None; len])
    }

    /// Number of entries, missing ones included
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the series has no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entry at `index`; `None` both past the end and for missing entries
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied().flatten()
    }

    /// Iterate over entries in order
    pub fn iter(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.0.iter().copied()
    }

    /// Iterate over present values only
    pub fn present(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().filter_map(|v| *v)
    }

    /// Number of missing entries
    pub fn missing_count(&self) -> usize {
        self.0.iter().filter(|v| v.is_none()).count()
    }

    /// Largest present value
    pub fn max(&self) -> Option<f64> {
        self.present().reduce(f64::max)
    }

    /// Sum of present values (0.0 for an all-missing series)
    pub fn sum(&self) -> f64 {
        self.present().sum()
    }

    /// Mean of present values
    pub fn mean(&self) -> Option<f64> {
        let count = self.present().count();
        if count == 0 {
            None
        } else {
            Some(self.sum() / count as f64)
        }
    }

    /// Apply `f` to every present value
    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Self {
        self.iter().map(|v| v.map(&f)).collect()
    }

    /// Extend with missing entries up to `len`
    pub fn pad_to(&mut self, len: usize) {
        if self.0.len() < len {
            self.0.resize(len, None);
        }
    }

    /// Replace missing and non-finite entries with 0.0
    pub fn filled(&self) -> Vec<f64> {
        self.iter()
            .map(|v| match v {
                Some(n) if n.is_finite() => n,
                _ => 0.0,
            })
            .collect()
    }

    /// Borrow the underlying entries
    pub fn as_slice(&self) -> &[Option<f64>] {
        &self.0
    }

    /// Consume the series into its entries
    pub fn into_inner(self) -> Vec<Option<f64>> {
        self.0
    }
}

impl FromIterator<Option<f64>> for NumericSeries {
    fn from_iter<I: IntoIterator<Item = Option<f64>>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|v| v.filter(|n| !n.is_nan()))
                .collect(),
        )
    }
}

impl From<Vec<Option<f64>>> for NumericSeries {
    fn from(values: Vec<Option<f64>>) -> Self {
        values.into_iter().collect()
    }
}

impl From<Vec<f64>> for NumericSeries {
    fn from(values: Vec<f64>) -> Self {
        Self::from_values(values)
    }
}

impl Index<usize> for NumericSeries {
    type Output = Option<f64>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
