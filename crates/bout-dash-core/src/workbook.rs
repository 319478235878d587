//! Workbook: the ordered, named sheets of one uploaded file

use crate::error::{Error, Result};
use crate::grid::RawGrid;
use std::fmt;

/// Substring that marks the cross-source sheet (matched case-insensitively)
pub const CROSS_SOURCE_MARKER: &str = "cross";

/// One named sheet holding a raw grid
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sheet {
    name: String,
    grid: RawGrid,
}

impl Sheet {
    /// Create a sheet
    pub fn new<S: Into<String>>(name: S, grid: RawGrid) -> Self {
        Self {
            name: name.into(),
            grid,
        }
    }

    /// Sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sheet contents with no header interpretation
    pub fn grid(&self) -> &RawGrid {
        &self.grid
    }
}

/// Selects a sheet by position or by name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SheetSelector {
    /// 0-based sheet index
    Index(usize),
    /// Exact sheet name
    Name(String),
}

impl SheetSelector {
    /// Parse a CLI-style selector: all digits is an index, anything else a name
    pub fn parse(s: &str) -> Self {
        match s.trim().parse::<usize>() {
            Ok(index) => SheetSelector::Index(index),
            Err(_) => SheetSelector::Name(s.to_string()),
        }
    }
}

impl Default for SheetSelector {
    fn default() -> Self {
        SheetSelector::Index(0)
    }
}

impl From<usize> for SheetSelector {
    fn from(index: usize) -> Self {
        SheetSelector::Index(index)
    }
}

impl From<&str> for SheetSelector {
    fn from(name: &str) -> Self {
        SheetSelector::Name(name.to_string())
    }
}

impl fmt::Display for SheetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetSelector::Index(i) => write!(f, "#{}", i),
            SheetSelector::Name(n) => write!(f, "'{}'", n),
        }
    }
}

/// A loaded spreadsheet document
///
/// Built once by a reader and never mutated afterwards; every component takes it
/// by reference.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// Create a workbook from sheets in tab order
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    /// Get the number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the workbook has no sheets
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Sheet names in tab order
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(Sheet::name).collect()
    }

    /// Iterate over all sheets
    pub fn sheets(&self) -> impl Iterator<Item = &Sheet> {
        self.sheets.iter()
    }

    /// Get a sheet by index
    pub fn sheet_at(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    /// Get a sheet by exact name
    pub fn sheet_by_name(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Resolve a [`SheetSelector`]
    pub fn sheet(&self, selector: &SheetSelector) -> Result<&Sheet> {
        match selector {
            SheetSelector::Index(i) => self
                .sheet_at(*i)
                .ok_or(Error::SheetOutOfBounds(*i, self.sheets.len())),
            SheetSelector::Name(n) => self
                .sheet_by_name(n)
                .ok_or_else(|| Error::SheetNotFound(n.clone())),
        }
    }

    /// First sheet whose name contains `marker`, ignoring case
    pub fn find_sheet_containing(&self, marker: &str) -> Option<&Sheet> {
        let marker = marker.to_lowercase();
        self.sheets
            .iter()
            .find(|s| s.name.to_lowercase().contains(&marker))
    }

    /// The cross-source sheet, or [`Error::MissingRequiredSheet`]
    pub fn cross_source_sheet(&self) -> Result<&Sheet> {
        self.find_sheet_containing(CROSS_SOURCE_MARKER).ok_or_else(|| {
            log::warn!(
                "no sheet name contains '{}' among {:?}",
                CROSS_SOURCE_MARKER,
                self.sheet_names()
            );
            Error::MissingRequiredSheet("Cross Source Analysis".into())
        })
    }
}
