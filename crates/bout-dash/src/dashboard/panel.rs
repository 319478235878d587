//! The four dashboard panels

use bout_dash_chart::{
    Axis, BubbleComposer, BubbleOptions, BubblePlan, Chart, ChartResult, ChartType,
    LabeledValue, Palette,
};
use bout_dash_core::{
    coerce, extract_values, normalize_sum_aware, scale_proportions, Interpretation,
    LabeledTable, NumericSeries, PercentPolicy, RawGrid, RawValue,
};

/// Header of the label column in every panel table
pub const LABEL_HEADER: &str = "Style";

pub const REPRESENTATION: &str = "Representation";
pub const REPRESENTATION_PERCENT: &str = "Representation (%)";
pub const WIN_RATIO: &str = "Win Ratio";

/// Shared inputs for building panels
pub(crate) struct PanelContext<'a> {
    pub composer: &'a BubbleComposer,
    pub palette: &'a Palette,
    pub bubble: &'a BubbleOptions,
}

impl PanelContext<'_> {
    /// Bubble plan from one column: sum-aware percent of the labeled rows,
    /// missing values counted as 0
    fn bubbles(&self, panel: &str, table: &LabeledTable, column: &str) -> ChartResult<BubblePlan> {
        let labeled = table.drop_unlabeled();
        let values = labeled
            .column(column)
            .map(normalize_sum_aware)
            .unwrap_or_default();
        let items: Vec<LabeledValue> = labeled
            .label_strings()
            .into_iter()
            .zip(values.filled())
            .map(|(label, value)| LabeledValue::new(label, value))
            .collect();

        self.compose(panel, &items)
    }

    /// Bubble plan with one item per (style, source) pair, labeled
    /// `"<style> (<source>)"`; each column's rows come before the next column's
    fn paired_bubbles(
        &self,
        panel: &str,
        table: &LabeledTable,
        columns: &[(&str, &str)],
    ) -> ChartResult<BubblePlan> {
        let labels = table.label_strings();
        let mut items = Vec::with_capacity(labels.len() * columns.len());
        for (column, source) in columns {
            let values = column_or_empty(table, column);
            for (row, label) in labels.iter().enumerate() {
                let value = values.get(row).unwrap_or(0.0);
                items.push(LabeledValue::new(format!("{} ({})", label, source), value));
            }
        }

        self.compose(panel, &items)
    }

    fn compose(&self, panel: &str, items: &[LabeledValue]) -> ChartResult<BubblePlan> {
        let plan = self.composer.compose(items, self.palette, self.bubble);
        if let Err(e) = &plan {
            log::warn!("{} panel: bubble chart unavailable: {}", panel, e);
        }
        plan
    }
}

/// Extract a range as a flat list; a bad range empties the panel instead of
/// failing the render
pub(crate) fn read_range(grid: &RawGrid, range: &str, panel: &str) -> Vec<RawValue> {
    match extract_values(grid, range) {
        Ok(values) => {
            log::debug!("{} panel: {} -> {} cells", panel, range, values.len());
            values
        }
        Err(e) => {
            log::warn!("{} panel: cannot read range '{}': {}", panel, range, e);
            Vec::new()
        }
    }
}

/// Overall style representation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RepresentationPanel {
    /// Labeled rows with a value, in sheet order
    pub table: LabeledTable,
    /// Same rows, bucketed to percent
    pub percent: LabeledTable,
    pub interpretation: Interpretation,
    /// Horizontal bars, smallest first
    pub raw_chart: Chart,
    pub percent_chart: Chart,
    #[cfg_attr(feature = "serde", serde(serialize_with = "super::serialize_bubbles"))]
    pub bubbles: ChartResult<BubblePlan>,
}

impl RepresentationPanel {
    pub(crate) fn build(ctx: &PanelContext<'_>, grid: &RawGrid, labels: &str, values: &str) -> Self {
        const PANEL: &str = "representation";
        let labels = read_range(grid, labels, PANEL);
        let values = coerce(&read_range(grid, values, PANEL));
        let all = LabeledTable::from_raw(LABEL_HEADER, &labels).with_column(REPRESENTATION, values);
        let table = all.drop_incomplete();

        let normalized = PercentPolicy::Bucketed.normalize(&column_or_empty(&table, REPRESENTATION));
        let percent = LabeledTable::new(LABEL_HEADER, table.labels().to_vec())
            .with_column(REPRESENTATION_PERCENT, normalized.series);

        let raw_chart = Chart::from_table(
            ChartType::BarHorizontal,
            &table.sorted_by(REPRESENTATION, false),
            &[REPRESENTATION],
        )
        .with_title("Overall Style Representation (raw)");
        let percent_chart = Chart::from_table(ChartType::Bar, &percent, &[REPRESENTATION_PERCENT])
            .with_title(format!(
                "Overall Style Representation {}",
                normalized.interpretation.note()
            ))
            .with_value_axis(Axis::new().with_title(REPRESENTATION_PERCENT).with_tick_suffix("%"));

        Self {
            bubbles: ctx.bubbles(PANEL, &all, REPRESENTATION),
            table,
            percent,
            interpretation: normalized.interpretation,
            raw_chart,
            percent_chart,
        }
    }
}

/// Overall win ratio by style
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WinRatioPanel {
    /// Labeled rows with a value, in sheet order
    pub table: LabeledTable,
    /// Unweighted mean of the win ratios
    pub mean: Option<f64>,
    /// Bars sorted by win ratio, highest first
    pub chart: Chart,
    #[cfg_attr(feature = "serde", serde(serialize_with = "super::serialize_bubbles"))]
    pub bubbles: ChartResult<BubblePlan>,
}

impl WinRatioPanel {
    pub(crate) fn build(ctx: &PanelContext<'_>, grid: &RawGrid, labels: &str, values: &str) -> Self {
        const PANEL: &str = "win ratio";
        let labels = read_range(grid, labels, PANEL);
        let values = coerce(&read_range(grid, values, PANEL));
        let all = LabeledTable::from_raw(LABEL_HEADER, &labels).with_column(WIN_RATIO, values);
        let table = all.drop_incomplete();
        let mean = table.mean(WIN_RATIO);

        let title = match mean {
            Some(m) => format!("Overall Win Ratio by Style (UW Avg: {:.3})", m),
            None => "Overall Win Ratio by Style (UW Avg: n/a)".to_string(),
        };
        let chart = Chart::from_table(ChartType::Bar, &table.sorted_by(WIN_RATIO, true), &[WIN_RATIO])
            .with_title(title);

        Self {
            bubbles: ctx.bubbles(PANEL, &all, WIN_RATIO),
            table,
            mean,
            chart,
        }
    }
}

/// Champion conversion rate, observed vs reference
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConversionPanel {
    /// Labeled rows; values may be missing
    pub table: LabeledTable,
    /// Both columns on a shared percent scale
    pub percent: LabeledTable,
    pub interpretation: Interpretation,
    /// Horizontal grouped bars, sorted by observed conversion, smallest first
    pub raw_chart: Chart,
    pub percent_chart: Chart,
    pub observed_column: String,
    pub reference_column: String,
    /// One bubble per style and source, sized by the percent view
    #[cfg_attr(feature = "serde", serde(serialize_with = "super::serialize_bubbles"))]
    pub bubbles: ChartResult<BubblePlan>,
}

impl ConversionPanel {
    pub(crate) fn build(
        ctx: &PanelContext<'_>,
        grid: &RawGrid,
        labels: &str,
        observed: &str,
        reference: &str,
        reference_name: &str,
    ) -> Self {
        const PANEL: &str = "conversion";
        let observed_column = "Conversion (Observed)".to_string();
        let reference_column = format!("Conversion ({})", reference_name);

        let labels = read_range(grid, labels, PANEL);
        let table = LabeledTable::from_raw(LABEL_HEADER, &labels)
            .with_column(observed_column.as_str(), coerce(&read_range(grid, observed, PANEL)))
            .with_column(reference_column.as_str(), coerce(&read_range(grid, reference, PANEL)))
            .drop_unlabeled();

        let (scaled, interpretation) = scale_proportions(&[
            column_or_empty(&table, &observed_column),
            column_or_empty(&table, &reference_column),
        ]);
        let mut percent = LabeledTable::new(LABEL_HEADER, table.labels().to_vec());
        for (name, series) in [&observed_column, &reference_column].into_iter().zip(scaled) {
            percent = percent.with_column(name.as_str(), series);
        }

        let columns = [observed_column.as_str(), reference_column.as_str()];
        let raw_chart = Chart::from_table(
            ChartType::GroupedBarHorizontal,
            &table.sorted_by(&observed_column, false),
            &columns,
        )
        .with_title("Champion Conversion Rate by Style (raw)");
        let percent_chart = Chart::from_table(ChartType::GroupedBar, &percent, &columns)
            .with_title(format!("Champion Conversion Rate by Style {}", interpretation.note()))
            .with_value_axis(Axis::new().with_title("Conversion (%)").with_tick_suffix("%"));

        let bubbles = ctx.paired_bubbles(
            PANEL,
            &percent,
            &[(observed_column.as_str(), "Observed"), (reference_column.as_str(), reference_name)],
        );

        Self {
            table,
            percent,
            interpretation,
            raw_chart,
            percent_chart,
            observed_column,
            reference_column,
            bubbles,
        }
    }

    /// Mean observed conversion
    pub fn observed_mean(&self) -> Option<f64> {
        self.table.mean(&self.observed_column)
    }

    /// Mean reference conversion
    pub fn reference_mean(&self) -> Option<f64> {
        self.table.mean(&self.reference_column)
    }
}

/// Champion counts by style, observed vs reference
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChampionPanel {
    /// Labeled rows; shorter ranges are padded with missing values
    pub table: LabeledTable,
    /// Horizontal grouped bars, sorted by observed count, smallest first
    pub chart: Chart,
}

impl ChampionPanel {
    pub(crate) fn build(
        grid: &RawGrid,
        labels: &str,
        observed: &str,
        reference: &str,
        reference_name: &str,
    ) -> Self {
        const PANEL: &str = "champion representation";
        let observed_column = "Champions (Observed)".to_string();
        let reference_column = format!("Champions ({})", reference_name);

        let labels = read_range(grid, labels, PANEL);
        let table = LabeledTable::from_raw(LABEL_HEADER, &labels)
            .with_column(observed_column.as_str(), coerce(&read_range(grid, observed, PANEL)))
            .with_column(reference_column.as_str(), coerce(&read_range(grid, reference, PANEL)))
            .drop_unlabeled();

        let chart = Chart::from_table(
            ChartType::GroupedBarHorizontal,
            &table.sorted_by(&observed_column, false),
            &[observed_column.as_str(), reference_column.as_str()],
        )
        .with_title(format!(
            "Champion Representation by Style (Observed vs {})",
            reference_name
        ));

        Self { table, chart }
    }
}

fn column_or_empty(table: &LabeledTable, name: &str) -> NumericSeries {
    table.column(name).cloned().unwrap_or_default()
}
