//! Bubble chart composition
//!
//! [`BubbleComposer::compose`] turns labeled values into a [`BubblePlan`]: items
//! are ranked by value, colored by rank, placed by a [`CirclePacker`], and the
//! top K get an on-circle label with a readable text color.

use crate::color::{Color, TextColor};
use crate::error::{ChartError, ChartResult};
use crate::legend::LegendEntry;
use crate::pack::{CirclePacker, PackItem, PackedCircle};
use crate::palette::Palette;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

/// A label with its (normalized) value
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LabeledValue {
    pub label: String,
    pub value: f64,
}

impl LabeledValue {
    pub fn new<S: Into<String>>(label: S, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Options for bubble composition
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BubbleOptions {
    /// Number of largest items that get an on-circle label (clamped to item count)
    pub top_k: usize,
    /// Uniform radius multiplier applied after packing; must be finite and > 0
    pub size_scale: f64,
    /// Append the value ("12.3%") under each annotated label
    pub show_values: bool,
    /// Floor applied to every value before packing
    pub epsilon: f64,
}

impl Default for BubbleOptions {
    fn default() -> Self {
        Self {
            top_k: 5,
            size_scale: 1.0,
            show_values: false,
            epsilon: 1e-6,
        }
    }
}

impl BubbleOptions {
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_size_scale(mut self, size_scale: f64) -> Self {
        self.size_scale = size_scale;
        self
    }

    pub fn with_show_values(mut self, show_values: bool) -> Self {
        self.show_values = show_values;
        self
    }

    /// Validated packing floor; falls back to the default for unusable values
    fn floor(&self) -> f64 {
        if self.epsilon.is_finite() && self.epsilon > 0.0 {
            self.epsilon
        } else {
            Self::default().epsilon
        }
    }
}

/// On-circle label of an annotated bubble
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Annotation {
    /// Label text, optionally with a second line holding the value
    pub text: String,
    pub text_color: TextColor,
}

/// One placed, colored bubble
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BubbleCircle {
    /// Position of the item in the input
    pub id: usize,
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    /// Packed radius times the size scale
    pub radius: f64,
    pub fill: Color,
    pub annotation: Option<Annotation>,
}

/// Render plan for a bubble chart; circles and legend are in rank order
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BubblePlan {
    pub circles: Vec<BubbleCircle>,
    pub legend: Vec<LegendEntry>,
}

impl BubblePlan {
    /// Check if the plan has no bubbles
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// Bubbles that carry a label
    pub fn annotated(&self) -> impl Iterator<Item = &BubbleCircle> {
        self.circles.iter().filter(|c| c.annotation.is_some())
    }
}

/// Composes [`BubblePlan`]s with an optional packing collaborator
pub struct BubbleComposer {
    packer: Option<Box<dyn CirclePacker>>,
}

impl BubbleComposer {
    /// Composer with the built-in packer when the `packing` feature is enabled
    pub fn new() -> Self {
        #[cfg(feature = "packing")]
        {
            Self::with_packer(crate::pack::FrontChainPacker)
        }
        #[cfg(not(feature = "packing"))]
        {
            Self::without_packer()
        }
    }

    /// Composer with a caller-supplied packer
    pub fn with_packer<P: CirclePacker + 'static>(packer: P) -> Self {
        Self {
            packer: Some(Box::new(packer)),
        }
    }

    /// Composer with no packer; every compose fails with
    /// [`ChartError::MissingPackingDependency`]
    pub fn without_packer() -> Self {
        Self { packer: None }
    }

    /// Check if a packer is installed
    pub fn has_packer(&self) -> bool {
        self.packer.is_some()
    }

    /// Rank, color, place and annotate `items`
    pub fn compose(
        &self,
        items: &[LabeledValue],
        palette: &Palette,
        options: &BubbleOptions,
    ) -> ChartResult<BubblePlan> {
        let scale = options.size_scale;
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ChartError::InvalidSizeScale(scale));
        }
        let packer = self
            .packer
            .as_deref()
            .ok_or(ChartError::MissingPackingDependency)?;
        if items.is_empty() {
            return Ok(BubblePlan::default());
        }

        let floor = options.floor();
        let weights: Vec<f64> = items
            .iter()
            .map(|item| {
                if item.value.is_finite() {
                    item.value.max(floor)
                } else {
                    floor
                }
            })
            .collect();

        // Stable: equal values keep their input order
        let mut ranked: Vec<usize> = (0..items.len()).collect();
        ranked.sort_by(|&a, &b| weights[b].partial_cmp(&weights[a]).unwrap_or(Ordering::Equal));

        let pack_items: Vec<PackItem> = ranked
            .iter()
            .map(|&id| PackItem::new(id, weights[id]))
            .collect();
        let packed: HashMap<usize, PackedCircle> = packer
            .pack(&pack_items)?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let top_k = options.top_k.min(items.len());
        log::debug!(
            "composing {} bubbles, annotating {}, scale {}",
            items.len(),
            top_k,
            scale
        );

        let mut plan = BubblePlan::default();
        for (rank, &id) in ranked.iter().enumerate() {
            let item = &items[id];
            let placed = packed
                .get(&id)
                .ok_or_else(|| ChartError::Packing(format!("packer returned no circle for item {}", id)))?;
            let fill = palette.color_for_rank(rank);

            let annotation = (rank < top_k).then(|| Annotation {
                text: annotation_text(item, options.show_values),
                text_color: fill.text_color(),
            });

            plan.circles.push(BubbleCircle {
                id,
                label: item.label.clone(),
                value: item.value,
                x: placed.x,
                y: placed.y,
                radius: placed.r * scale,
                fill,
                annotation,
            });
            plan.legend.push(LegendEntry::new(item.label.clone(), fill).with_value(item.value));
        }

        Ok(plan)
    }
}

impl Default for BubbleComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BubbleComposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BubbleComposer")
            .field("has_packer", &self.has_packer())
            .finish()
    }
}

fn annotation_text(item: &LabeledValue, show_values: bool) -> String {
    if show_values {
        format!("{}\n{:.1}%", item.label, item.value)
    } else {
        item.label.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Packs circles on a line, largest first, radius = datum
    struct LinePacker;

    impl CirclePacker for LinePacker {
        fn pack(&self, items: &[PackItem]) -> ChartResult<Vec<PackedCircle>> {
            Ok(items
                .iter()
                .enumerate()
                .map(|(i, item)| PackedCircle {
                    id: item.id,
                    x: i as f64,
                    y: 0.0,
                    r: item.datum,
                })
                .collect())
        }
    }

    /// Drops the last circle
    struct LossyPacker;

    impl CirclePacker for LossyPacker {
        fn pack(&self, items: &[PackItem]) -> ChartResult<Vec<PackedCircle>> {
            let mut circles = LinePacker.pack(items)?;
            circles.pop();
            Ok(circles)
        }
    }

    fn values(pairs: &[(&str, f64)]) -> Vec<LabeledValue> {
        pairs.iter().map(|(l, v)| LabeledValue::new(*l, *v)).collect()
    }

    fn labels(plan: &BubblePlan) -> Vec<&str> {
        plan.circles.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn test_rank_order_and_colors() {
        let composer = BubbleComposer::with_packer(LinePacker);
        let palette = Palette::from_strs(&["#FFFFFF", "#000000"]).unwrap();
        let items = values(&[("Boxer", 10.0), ("Striker", 50.0), ("Wrestler", 40.0)]);

        let plan = composer
            .compose(&items, &palette, &BubbleOptions::default())
            .unwrap();

        assert_eq!(labels(&plan), vec!["Striker", "Wrestler", "Boxer"]);
        assert_eq!(plan.circles.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2, 0]);
        assert_eq!(plan.circles[0].fill, Color::WHITE);
        assert_eq!(plan.circles[1].fill, Color::BLACK);
        assert_eq!(plan.circles[2].fill, Color::WHITE);
        assert_eq!(
            plan.circles[0].annotation.as_ref().unwrap().text_color,
            TextColor::Black
        );
        assert_eq!(
            plan.circles[1].annotation.as_ref().unwrap().text_color,
            TextColor::White
        );
    }

    #[test]
    fn test_legend_covers_all_items_and_top_k_clamps() {
        let composer = BubbleComposer::with_packer(LinePacker);
        let items = values(&[("a", 1.0), ("b", 2.0), ("c", 3.0), ("d", 4.0)]);

        for top_k in [0, 1, 3, 4, 10] {
            let options = BubbleOptions::default().with_top_k(top_k);
            let plan = composer.compose(&items, &Palette::default(), &options).unwrap();
            assert_eq!(plan.legend.len(), items.len());
            assert_eq!(plan.annotated().count(), top_k.min(items.len()));
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        let composer = BubbleComposer::with_packer(LinePacker);
        let items = values(&[("first", 5.0), ("big", 9.0), ("second", 5.0), ("third", 5.0)]);
        let plan = composer
            .compose(&items, &Palette::default(), &BubbleOptions::default())
            .unwrap();
        assert_eq!(labels(&plan), vec!["big", "first", "second", "third"]);
        let legend: Vec<&str> = plan.legend.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(legend, labels(&plan));
    }

    #[test]
    fn test_values_floored_before_packing() {
        let composer = BubbleComposer::with_packer(LinePacker);
        let items = values(&[("zero", 0.0), ("neg", -3.0), ("nan", f64::NAN), ("one", 1.0)]);
        let plan = composer
            .compose(&items, &Palette::default(), &BubbleOptions::default())
            .unwrap();
        assert_eq!(plan.circles[0].label, "one");
        for circle in &plan.circles[1..] {
            assert_eq!(circle.radius, 1e-6);
        }
        // Floored values keep input order among themselves
        assert_eq!(labels(&plan)[1..].to_vec(), vec!["zero", "neg", "nan"]);
    }

    #[test]
    fn test_size_scale_multiplies_radius_only() {
        let composer = BubbleComposer::with_packer(LinePacker);
        let items = values(&[("a", 2.0), ("b", 1.0)]);
        let plan = composer
            .compose(&items, &Palette::default(), &BubbleOptions::default().with_size_scale(1.5))
            .unwrap();
        assert_eq!(plan.circles[0].radius, 3.0);
        assert_eq!(plan.circles[1].radius, 1.5);
        assert_eq!(plan.circles[1].x, 1.0);
    }

    #[test]
    fn test_show_values_suffix() {
        let composer = BubbleComposer::with_packer(LinePacker);
        let items = values(&[("Striker", 60.0), ("Wrestler", 40.0)]);
        let options = BubbleOptions::default().with_show_values(true);
        let plan = composer.compose(&items, &Palette::default(), &options).unwrap();
        assert_eq!(plan.circles[0].annotation.as_ref().unwrap().text, "Striker\n60.0%");

        let plain = composer
            .compose(&items, &Palette::default(), &BubbleOptions::default())
            .unwrap();
        assert_eq!(plain.circles[1].annotation.as_ref().unwrap().text, "Wrestler");
    }

    #[test]
    fn test_errors() {
        let items = values(&[("a", 1.0)]);
        let palette = Palette::default();

        let missing = BubbleComposer::without_packer();
        assert!(!missing.has_packer());
        assert_eq!(
            missing.compose(&items, &palette, &BubbleOptions::default()),
            Err(ChartError::MissingPackingDependency)
        );
        assert_eq!(
            missing.compose(&[], &palette, &BubbleOptions::default()),
            Err(ChartError::MissingPackingDependency)
        );

        let composer = BubbleComposer::with_packer(LinePacker);
        for scale in [0.0, -1.0, f64::INFINITY] {
            let options = BubbleOptions::default().with_size_scale(scale);
            assert!(matches!(
                composer.compose(&items, &palette, &options),
                Err(ChartError::InvalidSizeScale(_))
            ));
        }

        let lossy = BubbleComposer::with_packer(LossyPacker);
        assert!(matches!(
            lossy.compose(&items, &palette, &BubbleOptions::default()),
            Err(ChartError::Packing(_))
        ));
    }

    #[test]
    fn test_empty_items_yield_empty_plan() {
        let plan = BubbleComposer::with_packer(LinePacker)
            .compose(&[], &Palette::default(), &BubbleOptions::default())
            .unwrap();
        assert!(plan.is_empty());
        assert!(plan.legend.is_empty());
    }

    #[cfg(feature = "packing")]
    #[test]
    fn test_striker_wrestler_end_to_end() {
        use bout_dash_core::{coerce, normalize_bucketed, RawValue};

        let raw = [RawValue::from(0.6), RawValue::from(0.4)];
        let percent = normalize_bucketed(&coerce(&raw));
        assert_eq!(percent.as_slice(), &[Some(60.0), Some(40.0)]);

        let items: Vec<LabeledValue> = ["Striker", "Wrestler"]
            .iter()
            .zip(percent.filled())
            .map(|(l, v)| LabeledValue::new(*l, v))
            .collect();
        let plan = BubbleComposer::new()
            .compose(&items, &Palette::default(), &BubbleOptions::default().with_top_k(1))
            .unwrap();

        let annotated: Vec<&str> = plan.annotated().map(|c| c.label.as_str()).collect();
        assert_eq!(annotated, vec!["Striker"]);
        assert_eq!(plan.legend.len(), 2);
        assert!(plan.circles[0].radius > plan.circles[1].radius);
        for c in &plan.circles {
            assert!(c.x.hypot(c.y) + c.radius <= 1.0 + 1e-9);
        }
    }
}
