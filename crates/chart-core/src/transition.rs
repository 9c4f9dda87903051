// File: crates/chart-core/src/transition.rs
// Summary: Eased attribute transitions; a new target overrides the one in flight.

use std::time::Duration;

use crate::types::Timing;

pub trait Lerp: Copy {
    fn lerp(&self, to: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(&self, to: &Self, t: f64) -> Self { self + (to - self) * t }
}

/// Cubic in-out easing on `[0, 1]`.
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// A value animating from `from` to `to` over `timing`.
#[derive(Clone, Copy, Debug)]
pub struct Animated<T: Lerp> {
    from: T,
    to: T,
    timing: Timing,
}

impl<T: Lerp> Animated<T> {
    /// Settled at `value` from the start.
    pub fn fixed(value: T) -> Self {
        Self { from: value, to: value, timing: Timing::immediate(Duration::ZERO) }
    }

    /// Eased progress in `[0, 1]` at `now`.
    pub fn eased(&self, now: Duration) -> f64 {
        ease_cubic_in_out(self.timing.progress(now))
    }

    pub fn value_at(&self, now: Duration) -> T {
        self.from.lerp(&self.to, self.eased(now))
    }

    pub fn from(&self) -> T { self.from }
    pub fn target(&self) -> T { self.to }
    pub fn timing(&self) -> Timing { self.timing }

    pub fn is_running(&self, now: Duration) -> bool {
        now < self.timing.end() && !self.timing.duration.is_zero()
    }

    /// Start a transition to `to`. It begins from wherever the current one
    /// is at `timing.start`, so an interrupted transition never jumps.
    pub fn retarget(&mut self, to: T, timing: Timing) {
        self.from = self.value_at(timing.start);
        self.to = to;
        self.timing = timing;
    }
}
