//! Dashboard orchestration
//!
//! [`Dashboard::render`] runs every panel over one loaded workbook:
//!
//! 1. Style representation and win ratio read the first sheet.
//! 2. Champion conversion and champion representation read the cross-source
//!    sheet. A workbook without one fails the whole render with
//!    [`Error::MissingRequiredSheet`].
//! 3. A summary averages the panel tables.
//!
//! A range that cannot be read leaves its panel empty; a bubble chart that
//! cannot be composed is kept as an error on its panel. Neither stops the
//! render.

mod layout;
mod panel;

pub use layout::{DashboardLayout, DashboardOptions};
pub use panel::{ChampionPanel, ConversionPanel, RepresentationPanel, WinRatioPanel, LABEL_HEADER};

use std::path::{Path, PathBuf};

use bout_dash_chart::BubbleComposer;
use bout_dash_core::{Error, LabeledTable, Result, SheetSelector, Workbook};
use bout_dash_csv::{CsvWriteOptions, CsvWriter};
use panel::{PanelContext, REPRESENTATION, WIN_RATIO};

/// Download name of the representation table
pub const STYLE_REPRESENTATION_CSV: &str = "style_representation.csv";
/// Download name of the win ratio table
pub const WIN_RATIOS_CSV: &str = "win_ratios.csv";
/// Download name of the conversion table
pub const CONVERSION_CSV: &str = "conversion_rates_cross_source.csv";
/// Download name of the champion representation table
pub const CHAMPION_REPRESENTATION_CSV: &str = "champion_representation_cross_source.csv";

/// Averages across the panel tables; `None` where a table has no values
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Summary {
    /// Mean representation, in the sheet's own units
    pub average_representation: Option<f64>,
    pub average_win_ratio: Option<f64>,
    pub average_conversion_observed: Option<f64>,
    pub average_conversion_reference: Option<f64>,
}

/// All panels of one render
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Dashboard {
    /// Name of the sheet the cross-source panels read
    pub cross_sheet: String,
    pub representation: RepresentationPanel,
    pub win_ratio: WinRatioPanel,
    pub conversion: ConversionPanel,
    pub champions: ChampionPanel,
    pub summary: Summary,
}

impl Dashboard {
    /// Render with the default bubble composer
    pub fn render(workbook: &Workbook, options: &DashboardOptions) -> Result<Self> {
        Self::render_with(workbook, options, &BubbleComposer::new())
    }

    /// Render with a caller-supplied bubble composer
    pub fn render_with(
        workbook: &Workbook,
        options: &DashboardOptions,
        composer: &BubbleComposer,
    ) -> Result<Self> {
        let layout = &options.layout;
        let base = workbook.sheet(&SheetSelector::Index(0))?;
        log::info!(
            "rendering dashboard from {} sheet(s), base sheet '{}'",
            workbook.sheet_count(),
            base.name()
        );

        let ctx = PanelContext {
            composer,
            palette: &options.palette,
            bubble: &options.bubble,
        };

        let representation = RepresentationPanel::build(
            &ctx,
            base.grid(),
            &layout.representation_labels,
            &layout.representation_values,
        );
        let win_ratio =
            WinRatioPanel::build(&ctx, base.grid(), &layout.win_labels, &layout.win_values);

        let cross = workbook
            .find_sheet_containing(&layout.cross_sheet_marker)
            .ok_or_else(|| {
                log::warn!(
                    "no sheet name contains '{}' among {:?}",
                    layout.cross_sheet_marker,
                    workbook.sheet_names()
                );
                Error::MissingRequiredSheet("Cross Source Analysis".into())
            })?;
        log::debug!("cross-source sheet is '{}'", cross.name());

        let conversion = ConversionPanel::build(
            &ctx,
            cross.grid(),
            &layout.conversion_labels,
            &layout.conversion_observed,
            &layout.conversion_reference,
            &layout.reference_name,
        );
        let champions = ChampionPanel::build(
            cross.grid(),
            &layout.champion_labels,
            &layout.champion_observed,
            &layout.champion_reference,
            &layout.reference_name,
        );

        let summary = Summary {
            average_representation: representation.table.mean(REPRESENTATION),
            average_win_ratio: win_ratio.table.mean(WIN_RATIO),
            average_conversion_observed: conversion.observed_mean(),
            average_conversion_reference: conversion.reference_mean(),
        };

        Ok(Self {
            cross_sheet: cross.name().to_string(),
            representation,
            win_ratio,
            conversion,
            champions,
            summary,
        })
    }

    /// Panel tables paired with their download file names
    pub fn downloads(&self) -> [(&'static str, &LabeledTable); 4] {
        [
            (STYLE_REPRESENTATION_CSV, &self.representation.table),
            (WIN_RATIOS_CSV, &self.win_ratio.table),
            (CONVERSION_CSV, &self.conversion.table),
            (CHAMPION_REPRESENTATION_CSV, &self.champions.table),
        ]
    }

    /// Write every download into `dir`, creating it if needed
    pub fn export_csv<P: AsRef<Path>>(
        &self,
        dir: P,
        options: &CsvWriteOptions,
    ) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir).map_err(|e| {
            Error::other(format!("Cannot create {}: {}", dir.display(), e))
        })?;

        let mut written = Vec::with_capacity(4);
        for (name, table) in self.downloads() {
            let path = dir.join(name);
            CsvWriter::write_table_file(table, &path, options)
                .map_err(|e| Error::other(e.to_string()))?;
            written.push(path);
        }
        Ok(written)
    }
}

#[cfg(feature = "serde")]
fn serialize_bubbles<S: serde::Serializer>(
    bubbles: &bout_dash_chart::ChartResult<bout_dash_chart::BubblePlan>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    use serde::ser::SerializeMap;

    let mut map = serializer.serialize_map(Some(1))?;
    match bubbles {
        Ok(plan) => map.serialize_entry("plan", plan)?,
        Err(e) => map.serialize_entry("error", &e.to_string())?,
    }
    map.end()
}
