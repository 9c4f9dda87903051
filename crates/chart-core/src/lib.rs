// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the dataset, scale, selection and scene API.

pub mod axis;
pub mod chart;
pub mod controller;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod mark;
pub mod render;
pub mod scale;
pub mod scene;
pub mod surface;
pub mod transition;
pub mod types;

pub use axis::{Axis, AxisOrient, Tick};
pub use chart::{Chart, ChartEvent, ChartOptions};
pub use controller::{Selection, SelectionController};
pub use dataset::{Dataset, Metric, Record};
pub use error::ChartError;
pub use mark::{MarkGeometry, MarkId, MarkShape};
pub use render::{tooltip_text, RenderEngine};
pub use scale::{build_scale, build_year_scale, BandScale, LinearScale, Padding};
pub use scene::{Frame, Hit, Scene};
pub use surface::{DrawingSurface, Emphasis, Label};
pub use types::{Insets, Timing};
