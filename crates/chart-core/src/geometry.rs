// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    /// Plot area left after removing `insets` from a `width` x `height` surface.
    pub fn plot_area(width: u32, height: u32, insets: &Insets) -> Self {
        let w = width.saturating_sub(insets.hsum()).max(1) as f64;
        let h = height.saturating_sub(insets.vsum()).max(1) as f64;
        Self::from_ltwh(insets.left as f64, insets.top as f64, w, h)
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
    pub fn center_x(&self) -> f64 { (self.left + self.right) * 0.5 }
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}
