//! Circle packing
//!
//! [`CirclePacker`] is the seam between bubble composition and geometry. The
//! built-in [`FrontChainPacker`] (feature `packing`) lays circles out with a
//! front-chain sibling packing and fits the result into the unit circle.

use crate::error::ChartResult;

#[cfg(feature = "packing")]
mod front_chain;

#[cfg(feature = "packing")]
pub use front_chain::FrontChainPacker;

/// One weighted item to place
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackItem {
    /// Caller-chosen identifier echoed back on the placed circle
    pub id: usize,
    /// Weight; circle area is proportional to it. Must be finite and > 0.
    pub datum: f64,
}

impl PackItem {
    pub fn new(id: usize, datum: f64) -> Self {
        Self { id, datum }
    }
}

/// A placed circle inside the target enclosure (center (0, 0), radius 1)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PackedCircle {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

/// Geometric placement of weighted circles inside the unit circle
pub trait CirclePacker: Send + Sync {
    /// Place every item; the result holds exactly one circle per input id
    fn pack(&self, items: &[PackItem]) -> ChartResult<Vec<PackedCircle>>;
}
