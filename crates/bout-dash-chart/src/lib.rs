//! # bout-dash-chart
//!
//! Render plans for bout-dash panels: bar charts, packed bubble charts and
//! their legends. Plans are plain data; drawing them is up to the renderer.
//!
//! ```rust
//! use bout_dash_chart::{BubbleComposer, BubbleOptions, LabeledValue, Palette};
//!
//! let items = vec![LabeledValue::new("Striker", 60.0), LabeledValue::new("Wrestler", 40.0)];
//! let plan = BubbleComposer::new()
//!     .compose(&items, &Palette::default(), &BubbleOptions::default().with_top_k(1))
//!     .unwrap();
//! assert_eq!(plan.legend.len(), 2);
//! assert_eq!(plan.annotated().count(), 1);
//! ```

mod axis;
mod bubble;
mod chart;
mod color;
mod error;
mod legend;
mod pack;
mod palette;
mod series;

pub use axis::{Axis, AxisPosition};
pub use bubble::{Annotation, BubbleCircle, BubbleComposer, BubbleOptions, BubblePlan, LabeledValue};
pub use chart::{Chart, ChartType};
pub use color::{text_color_for, Color, TextColor};
pub use error::{ChartError, ChartResult};
pub use legend::{Legend, LegendEntry, LegendPosition};
#[cfg(feature = "packing")]
pub use pack::FrontChainPacker;
pub use pack::{CirclePacker, PackItem, PackedCircle};
pub use palette::{Palette, PLOTLY};
pub use series::{DataReference, DataSeries};
