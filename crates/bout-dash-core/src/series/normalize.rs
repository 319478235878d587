//! Percent normalization policies
//!
//! Two heuristics decide whether a series already holds percentages, holds
//! proportions, or holds raw counts. They disagree on purpose for some inputs
//! (a raw-count series summing to 100 reads as percent under `SumAware`), so
//! each chart picks its policy explicitly.

use super::NumericSeries;
use std::fmt;

/// Lower bound of the sum window that `SumAware` accepts as "already percent"
const PERCENT_SUM_MIN: f64 = 95.0;
/// Upper bound of the sum window that `SumAware` accepts as "already percent"
const PERCENT_SUM_MAX: f64 = 105.0;

/// How a series was read by a normalization policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Interpretation {
    /// Values were taken as percentages and returned as-is
    AlreadyPercent,
    /// Values were proportions in [0, 1] and were multiplied by 100
    FromProportion,
    /// Values were rescaled to their share of the series total
    ShareOfTotal,
    /// Values could not be rescaled (empty series or zero total)
    Unchanged,
}

impl Interpretation {
    /// Short note for chart titles
    pub fn note(&self) -> &'static str {
        match self {
            Interpretation::AlreadyPercent => "(interpreted as %)",
            Interpretation::FromProportion => "(converted from proportion)",
            Interpretation::ShareOfTotal => "(normalized to %)",
            Interpretation::Unchanged => "(raw)",
        }
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.note())
    }
}

/// A normalized series together with how it was interpreted
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Normalized {
    /// Percentage-like values
    pub series: NumericSeries,
    /// The branch the policy took
    pub interpretation: Interpretation,
}

impl Normalized {
    fn new(series: NumericSeries, interpretation: Interpretation) -> Self {
        log::debug!("normalized {} values {}", series.len(), interpretation);
        Self {
            series,
            interpretation,
        }
    }
}

/// Named percent normalization strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PercentPolicy {
    /// Bucket by the series maximum (tabular and bar displays)
    #[default]
    Bucketed,
    /// Look at the series total as well (bubble displays)
    SumAware,
}

impl PercentPolicy {
    /// Normalize `series` under this policy
    pub fn normalize(&self, series: &NumericSeries) -> Normalized {
        match self {
            PercentPolicy::Bucketed => bucketed(series),
            PercentPolicy::SumAware => sum_aware(series),
        }
    }
}

/// Bucketed normalization
///
/// With `m` the largest present value: `1 < m <= 100` keeps the series,
/// `m <= 1` multiplies by 100, and `m > 100` rescales to share-of-total
/// (unless the total is zero). Missing entries stay missing.
pub fn normalize_bucketed(series: &NumericSeries) -> NumericSeries {
    bucketed(series).series
}

/// Sum-aware normalization
///
/// Missing and infinite entries become 0 first. Then `max <= 1` multiplies by
/// 100, a total within [95, 105] keeps the series, and anything else rescales to
/// share-of-total (unless the total is not positive).
///
/// ```
/// use bout_dash_core::{normalize_sum_aware, NumericSeries};
///
/// let shares = normalize_sum_aware(&NumericSeries::from(vec![0.2, 0.3, 0.5]));
/// assert_eq!(shares.as_slice(), &[Some(20.0), Some(30.0), Some(50.0)]);
/// ```
pub fn normalize_sum_aware(series: &NumericSeries) -> NumericSeries {
    sum_aware(series).series
}

fn bucketed(series: &NumericSeries) -> Normalized {
    let max = match series.max() {
        Some(m) => m,
        None => return Normalized::new(series.clone(), Interpretation::Unchanged),
    };

    if max > 1.0 && max <= 100.0 {
        Normalized::new(series.clone(), Interpretation::AlreadyPercent)
    } else if max <= 1.0 {
        Normalized::new(series.map(|v| v * 100.0), Interpretation::FromProportion)
    } else {
        let total = series.sum();
        if total == 0.0 {
            Normalized::new(series.clone(), Interpretation::Unchanged)
        } else {
            Normalized::new(
                series.map(|v| v / total * 100.0),
                Interpretation::ShareOfTotal,
            )
        }
    }
}

fn sum_aware(series: &NumericSeries) -> Normalized {
    let values = series.filled();
    let filled = NumericSeries::from_values(values.iter().copied());

    let max = match values.iter().copied().reduce(f64::max) {
        Some(m) => m,
        None => return Normalized::new(filled, Interpretation::Unchanged),
    };
    let total: f64 = values.iter().sum();

    if max <= 1.0 {
        Normalized::new(filled.map(|v| v * 100.0), Interpretation::FromProportion)
    } else if (PERCENT_SUM_MIN..=PERCENT_SUM_MAX).contains(&total) {
        Normalized::new(filled, Interpretation::AlreadyPercent)
    } else if total <= 0.0 {
        Normalized::new(filled, Interpretation::Unchanged)
    } else {
        Normalized::new(
            filled.map(|v| v / total * 100.0),
            Interpretation::ShareOfTotal,
        )
    }
}

/// Scale several columns together: all ×100 when every present value is <= 1
///
/// Columns that compare two sources side by side must share one scale, so the
/// decision looks at the maximum across all of them. A set with no present
/// values is left alone.
pub fn scale_proportions(columns: &[NumericSeries]) -> (Vec<NumericSeries>, Interpretation) {
    let max = columns.iter().filter_map(NumericSeries::max).reduce(f64::max);

    match max {
        Some(m) if m <= 1.0 => (
            columns.iter().map(|c| c.map(|v| v * 100.0)).collect(),
            Interpretation::FromProportion,
        ),
        _ => (columns.to_vec(), Interpretation::AlreadyPercent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn assert_close(actual: &NumericSeries, expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            let a = a.expect("value should be present");
            assert!((a - e).abs() < 0.01, "{} != {}", a, e);
        }
    }

    #[test]
    fn test_bucketed_already_percent() {
        let series = NumericSeries::from(vec![12.0, 55.5, 100.0]);
        let normalized = PercentPolicy::Bucketed.normalize(&series);
        assert_eq!(normalized.series, series);
        assert_eq!(normalized.interpretation, Interpretation::AlreadyPercent);
    }

    #[test]
    fn test_bucketed_proportions() {
        let series = NumericSeries::from(vec![0.6, 0.4]);
        let normalized = PercentPolicy::Bucketed.normalize(&series);
        assert_close(&normalized.series, &[60.0, 40.0]);
        assert_eq!(normalized.interpretation, Interpretation::FromProportion);
        assert_eq!(normalized.interpretation.note(), "(converted from proportion)");
    }

    #[test]
    fn test_bucketed_max_of_one_is_a_proportion() {
        let series = NumericSeries::from(vec![1.0, 0.5]);
        let normalized = PercentPolicy::Bucketed.normalize(&series);
        assert_eq!(normalized.series.as_slice(), &[Some(100.0), Some(50.0)]);
        assert_eq!(normalized.interpretation, Interpretation::FromProportion);
    }

    #[test]
    fn test_bucketed_counts() {
        let series = NumericSeries::from(vec![Some(150.0), None, Some(50.0)]);
        let normalized = PercentPolicy::Bucketed.normalize(&series);
        assert_eq!(normalized.series.as_slice(), &[Some(75.0), None, Some(25.0)]);
        assert_eq!(normalized.interpretation, Interpretation::ShareOfTotal);
    }

    #[test]
    fn test_bucketed_zero_total_and_empty() {
        let series = NumericSeries::from(vec![200.0, -200.0]);
        assert_eq!(normalize_bucketed(&series), series);

        let empty = NumericSeries::missing(2);
        let normalized = PercentPolicy::Bucketed.normalize(&empty);
        assert_eq!(normalized.series, empty);
        assert_eq!(normalized.interpretation, Interpretation::Unchanged);
    }

    #[test]
    fn test_sum_aware_proportions() {
        let result = normalize_sum_aware(&NumericSeries::from(vec![0.2, 0.3, 0.5]));
        assert_close(&result, &[20.0, 30.0, 50.0]);
    }

    #[test]
    fn test_sum_aware_percent_window() {
        let series = NumericSeries::from(vec![20.0, 30.0, 50.0]);
        assert_eq!(normalize_sum_aware(&series), series);

        let series = NumericSeries::from(vec![40.0, 40.0, 25.0]);
        assert_eq!(normalize_sum_aware(&series), series);
    }

    #[test]
    fn test_sum_aware_rescales() {
        let normalized =
            PercentPolicy::SumAware.normalize(&NumericSeries::from(vec![40.0, 40.0, 40.0]));
        assert_close(&normalized.series, &[33.33, 33.33, 33.33]);
        assert_eq!(normalized.interpretation, Interpretation::ShareOfTotal);
    }

    #[test]
    fn test_sum_aware_fills_missing() {
        let series = NumericSeries::from(vec![Some(0.5), None, Some(f64::INFINITY)]);
        let result = normalize_sum_aware(&series);
        assert_eq!(result.as_slice(), &[Some(50.0), Some(0.0), Some(0.0)]);
    }

    #[test]
    fn test_sum_aware_non_positive_total() {
        let series = NumericSeries::from(vec![5.0, -10.0]);
        let normalized = PercentPolicy::SumAware.normalize(&series);
        assert_eq!(normalized.series, series);
        assert_eq!(normalized.interpretation, Interpretation::Unchanged);
    }

    #[test]
    fn test_policies_disagree_on_counts_summing_to_100() {
        // Raw counts that happen to total 100
        let series = NumericSeries::from(vec![60.0, 40.0]);
        assert_eq!(
            PercentPolicy::SumAware.normalize(&series).interpretation,
            Interpretation::AlreadyPercent
        );

        let series = NumericSeries::from(vec![160.0, 40.0]);
        assert_eq!(
            PercentPolicy::Bucketed.normalize(&series).interpretation,
            Interpretation::ShareOfTotal
        );
        assert_eq!(
            PercentPolicy::SumAware.normalize(&series).interpretation,
            Interpretation::ShareOfTotal
        );
    }

    #[test]
    fn test_scale_proportions() {
        let observed = NumericSeries::from(vec![Some(0.25), None]);
        let reference = NumericSeries::from(vec![0.5, 1.0]);
        let (scaled, interpretation) = scale_proportions(&[observed, reference.clone()]);
        assert_eq!(interpretation, Interpretation::FromProportion);
        assert_eq!(scaled[0].as_slice(), &[Some(25.0), None]);
        assert_eq!(scaled[1].as_slice(), &[Some(50.0), Some(100.0)]);

        let percent = NumericSeries::from(vec![25.0, 50.0]);
        let (scaled, interpretation) = scale_proportions(&[percent.clone(), reference]);
        assert_eq!(interpretation, Interpretation::AlreadyPercent);
        assert_eq!(scaled[0], percent);

        let (_, interpretation) = scale_proportions(&[NumericSeries::missing(2)]);
        assert_eq!(interpretation, Interpretation::AlreadyPercent);
    }

    proptest! {
        #[test]
        fn prop_bucketed_idempotent_on_percent(
            values in prop::collection::vec(1.0001f64..=100.0, 1..12)
        ) {
            let series = NumericSeries::from(values);
            let once = normalize_bucketed(&series);
            prop_assert_eq!(&once, &series);
            prop_assert_eq!(normalize_bucketed(&once), once);
        }

        #[test]
        fn prop_share_of_total_sums_to_100(
            values in prop::collection::vec(0.0f64..10_000.0, 1..12)
        ) {
            let series = NumericSeries::from(values);
            let normalized = PercentPolicy::SumAware.normalize(&series);
            if normalized.interpretation == Interpretation::ShareOfTotal {
                prop_assert!((normalized.series.sum() - 100.0).abs() < 1e-6);
            }
            prop_assert_eq!(normalized.series.len(), series.len());
            prop_assert_eq!(normalized.series.missing_count(), 0);
        }
    }
}
