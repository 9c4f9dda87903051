// File: crates/chart-core/src/mark.rs
// Summary: Marks (one per record) and the layout that positions them through the scales.

use crate::dataset::{Metric, Record};
use crate::scale::{BandScale, LinearScale};
use crate::transition::Lerp;

/// Identifies a mark; equals the index of its record in the dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkShape {
    /// Circle at (year, value).
    Circle,
    /// Bar in the record's band, rising from the bottom of the plot.
    Bar,
}

/// Position and size of a mark.
/// Circle: `(x, y)` is the centre and `width == height` is the diameter.
/// Bar: `(x, y)` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl MarkGeometry {
    pub fn contains(&self, shape: MarkShape, px: f64, py: f64) -> bool {
        match shape {
            MarkShape::Circle => {
                let r = self.width * 0.5;
                let (dx, dy) = (px - self.x, py - self.y);
                dx * dx + dy * dy <= r * r
            }
            MarkShape::Bar => {
                px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
            }
        }
    }

    /// Point a tooltip is anchored to (top centre of the mark).
    pub fn anchor(&self, shape: MarkShape) -> (f64, f64) {
        match shape {
            MarkShape::Circle => (self.x, self.y - self.height * 0.5),
            MarkShape::Bar => (self.x + self.width * 0.5, self.y),
        }
    }
}

impl Lerp for MarkGeometry {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        Self {
            x: self.x.lerp(&to.x, t),
            y: self.y.lerp(&to.y, t),
            width: self.width.lerp(&to.width, t),
            height: self.height.lerp(&to.height, t),
        }
    }
}

/// Horizontal placement: by year for scatter charts, by record band for bar charts.
#[derive(Clone, Copy, Debug)]
pub enum XPlacement {
    Year(LinearScale),
    Band(BandScale),
}

impl XPlacement {
    fn center(&self, index: usize, year: i32) -> f64 {
        match self {
            XPlacement::Year(xs) => xs.map(year as f64),
            XPlacement::Band(band) => band.position(index) + band.bandwidth() * 0.5,
        }
    }

    fn width(&self, radius: f64) -> f64 {
        match self {
            XPlacement::Year(_) => radius * 2.0,
            XPlacement::Band(band) => band.bandwidth(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Mark {
    pub id: MarkId,
    pub shape: MarkShape,
}

impl Mark {
    /// Geometry of this mark for `record` under the given scales.
    pub fn layout(
        &self,
        record: &Record,
        x: &XPlacement,
        y: &LinearScale,
        metric: Metric,
        radius: f64,
    ) -> MarkGeometry {
        let cx = x.center(self.id.0, record.year);
        let py = y.map(record.value(metric));
        match self.shape {
            MarkShape::Circle => MarkGeometry { x: cx, y: py, width: radius * 2.0, height: radius * 2.0 },
            MarkShape::Bar => {
                let bottom = y.range().0;
                let width = x.width(radius);
                MarkGeometry {
                    x: cx - width * 0.5,
                    y: py.min(bottom),
                    width,
                    height: (bottom - py).max(0.0),
                }
            }
        }
    }
}
