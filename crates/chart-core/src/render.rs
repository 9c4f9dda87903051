// File: crates/chart-core/src/render.rs
// Summary: Render engine; lays marks out through the current scales and keeps tooltips bound.

use std::time::Duration;

use crate::axis::Axis;
use crate::dataset::{Dataset, Metric, Record};
use crate::mark::{Mark, MarkId, MarkShape, XPlacement};
use crate::scale::LinearScale;
use crate::surface::DrawingSurface;
use crate::types::Timing;

/// Tooltip body for `record` under `metric`: label on the first line, caption and
/// value on the second.
pub fn tooltip_text(record: &Record, metric: Metric) -> String {
    format!("{}\n{} {}", record.label, metric.caption(), record.value(metric))
}

pub struct RenderEngine {
    marks: Vec<Mark>,
    radius: f64,
    duration: Duration,
}

impl RenderEngine {
    /// Create one mark per record on `surface`. This is the only place marks are made.
    pub fn create<S: DrawingSurface>(
        dataset: &Dataset,
        shape: MarkShape,
        radius: f64,
        duration: Duration,
        x: &XPlacement,
        y: &LinearScale,
        metric: Metric,
        surface: &mut S,
    ) -> Self {
        let marks = (0..dataset.len()).map(|i| Mark { id: MarkId(i), shape }).collect::<Vec<_>>();
        for (mark, record) in marks.iter().zip(dataset.iter()) {
            surface.create_mark(mark.id, shape, mark.layout(record, x, y, metric, radius));
        }
        log::debug!("created {} {:?} marks", marks.len(), shape);
        Self { marks, radius, duration }
    }

    pub fn marks(&self) -> &[Mark] { &self.marks }
    pub fn duration(&self) -> Duration { self.duration }

    /// Timing of a transition started at `now`.
    pub fn timing(&self, now: Duration) -> Timing {
        Timing::new(now, self.duration)
    }

    /// Move every mark to its position for `metric`. Returns the number of marks updated,
    /// which always equals the number of records.
    pub fn render_marks<S: DrawingSurface>(
        &self,
        dataset: &Dataset,
        x: &XPlacement,
        y: &LinearScale,
        metric: Metric,
        surface: &mut S,
        timing: Timing,
    ) -> usize {
        for (mark, record) in self.marks.iter().zip(dataset.iter()) {
            surface.transition_mark(mark.id, mark.layout(record, x, y, metric, self.radius), timing);
        }
        self.marks.len()
    }

    pub fn render_axis<S: DrawingSurface>(&self, surface: &mut S, axis: &Axis, timing: Timing) {
        surface.set_axis(axis, timing);
    }

    /// Rebind every tooltip so it reports `metric`.
    pub fn bind_tooltips<S: DrawingSurface>(&self, dataset: &Dataset, metric: Metric, surface: &mut S) {
        for (mark, record) in self.marks.iter().zip(dataset.iter()) {
            surface.bind_tooltip(mark.id, tooltip_text(record, metric));
        }
    }
}
