// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, durations).

use std::time::Duration;

/// Default surface width in pixels.
pub const WIDTH: u32 = 960;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 500;

/// Radius of circle marks, in pixels.
pub const MARK_RADIUS: f64 = 20.0;

/// Default length of every axis/mark transition.
pub const TRANSITION: Duration = Duration::from_millis(1000);

/// Default number of ticks requested from a linear scale.
pub const TICK_COUNT: usize = 10;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(100, 40, 20, 80)
    }
}

/// Start instant and length of a transition, both measured from session start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    pub start: Duration,
    pub duration: Duration,
}

impl Timing {
    pub const fn new(start: Duration, duration: Duration) -> Self {
        Self { start, duration }
    }

    /// A zero-length timing: the target applies immediately.
    pub const fn immediate(at: Duration) -> Self {
        Self { start: at, duration: Duration::ZERO }
    }

    pub fn end(&self) -> Duration { self.start + self.duration }

    /// Linear progress in `[0, 1]` at `now`.
    pub fn progress(&self, now: Duration) -> f64 {
        if self.duration.is_zero() || now >= self.end() { return 1.0; }
        if now <= self.start { return 0.0; }
        (now - self.start).as_secs_f64() / self.duration.as_secs_f64()
    }
}
