// File: crates/chart-core/src/surface.rs
// Summary: Renderer-agnostic drawing surface the chart session draws through.

use crate::axis::Axis;
use crate::dataset::Metric;
use crate::geometry::Rect;
use crate::mark::{MarkGeometry, MarkId, MarkShape};
use crate::types::Timing;

/// Font size used for the clickable metric labels.
pub const LABEL_FONT_SIZE: f64 = 14.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    Active,
    Inactive,
}

/// A clickable metric label. `(x, y)` is the horizontal centre on the text baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub metric: Metric,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub emphasis: Emphasis,
}

impl Label {
    pub fn new(metric: Metric, x: f64, y: f64, emphasis: Emphasis) -> Self {
        Self { metric, text: metric.title().to_string(), x, y, emphasis }
    }

    /// Token handed back by a click on this label.
    pub fn token(&self) -> &'static str { self.metric.token() }

    pub fn is_active(&self) -> bool { self.emphasis == Emphasis::Active }

    /// Approximate text box, wide enough for hit testing.
    pub fn bounds(&self) -> Rect {
        let w = self.text.chars().count() as f64 * LABEL_FONT_SIZE * 0.55;
        Rect::from_ltrb(
            self.x - w * 0.5,
            self.y - LABEL_FONT_SIZE,
            self.x + w * 0.5,
            self.y + LABEL_FONT_SIZE * 0.25,
        )
    }
}

/// Everything the chart needs from a drawing surface. Marks are created once at load
/// and afterwards only transitioned.
pub trait DrawingSurface {
    fn create_mark(&mut self, id: MarkId, shape: MarkShape, geometry: MarkGeometry);
    /// Animate mark `id` towards `to`; overrides any transition still running.
    fn transition_mark(&mut self, id: MarkId, to: MarkGeometry, timing: Timing);
    /// Replace the ticks of `axis.orient`, animating from the previous scale.
    fn set_axis(&mut self, axis: &Axis, timing: Timing);
    /// Create or restyle the label for `label.metric`.
    fn set_label(&mut self, label: &Label);
    /// Text shown while the pointer is over mark `id`.
    fn bind_tooltip(&mut self, id: MarkId, text: String);
    fn show_tooltip(&mut self, id: MarkId);
    fn hide_tooltip(&mut self, id: MarkId);
}
