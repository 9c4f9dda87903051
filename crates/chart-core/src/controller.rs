// File: crates/chart-core/src/controller.rs
// Summary: Selection controller; owns the chosen metric and decides transitions.

use crate::dataset::Metric;
use crate::surface::Emphasis;

/// Outcome of a selection request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Changed { from: Metric, to: Metric },
    /// The requested metric is already chosen.
    Unchanged,
    /// The token names no known metric.
    Unrecognized,
}

/// Two-state machine over [`Metric`]. Both states are steady; only a request for
/// the other metric moves it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionController {
    chosen: Metric,
}

impl SelectionController {
    pub fn new(initial: Metric) -> Self {
        Self { chosen: initial }
    }

    pub fn chosen(&self) -> Metric { self.chosen }

    /// What a request for `token` would do, without applying it.
    pub fn resolve(&self, token: &str) -> Selection {
        match Metric::from_token(token) {
            None => Selection::Unrecognized,
            Some(m) if m == self.chosen => Selection::Unchanged,
            Some(m) => Selection::Changed { from: self.chosen, to: m },
        }
    }

    pub fn commit(&mut self, metric: Metric) {
        self.chosen = metric;
    }

    /// Resolve and apply in one step.
    pub fn request(&mut self, token: &str) -> Selection {
        let sel = self.resolve(token);
        if let Selection::Changed { to, .. } = sel {
            self.commit(to);
        }
        sel
    }

    /// Exactly one metric is active at any time.
    pub fn emphasis(&self, metric: Metric) -> Emphasis {
        if metric == self.chosen { Emphasis::Active } else { Emphasis::Inactive }
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new(Metric::TcTotalWar)
    }
}
