// File: crates/chart-core/src/axis.rs
// Summary: Axis model with title, orientation and formatted ticks.

use crate::scale::{step_precision, BandScale, LinearScale};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AxisOrient {
    Left,
    Bottom,
}

/// One tick: data value, pixel position along the axis and its label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub pos: f64,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AxisScale {
    Linear(LinearScale),
    /// One tick per band, centred, labelled with the band's name.
    Band { scale: BandScale, labels: Vec<String> },
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub title: String,
    pub orient: AxisOrient,
    pub scale: AxisScale,
    pub tick_count: usize,
}

impl Axis {
    pub fn linear(title: impl Into<String>, orient: AxisOrient, scale: LinearScale) -> Self {
        Self {
            title: title.into(),
            orient,
            scale: AxisScale::Linear(scale),
            tick_count: crate::types::TICK_COUNT,
        }
    }

    pub fn band(title: impl Into<String>, orient: AxisOrient, scale: BandScale, labels: Vec<String>) -> Self {
        Self {
            title: title.into(),
            orient,
            scale: AxisScale::Band { scale, labels },
            tick_count: crate::types::TICK_COUNT,
        }
    }

    pub fn with_tick_count(mut self, count: usize) -> Self {
        self.tick_count = count;
        self
    }

    pub fn ticks(&self) -> Vec<Tick> {
        scale_ticks(&self.scale, self.tick_count)
    }
}

pub fn scale_ticks(scale: &AxisScale, count: usize) -> Vec<Tick> {
    match scale {
        AxisScale::Linear(s) => ticks_for(s, count),
        AxisScale::Band { scale, labels } => labels
            .iter()
            .enumerate()
            .map(|(i, text)| Tick {
                value: i as f64,
                pos: scale.position(i) + scale.bandwidth() * 0.5,
                text: text.clone(),
            })
            .collect(),
    }
}

/// Ticks of `scale`, formatted with just enough decimals for the tick step.
pub fn ticks_for(scale: &LinearScale, count: usize) -> Vec<Tick> {
    let precision = step_precision(scale.tick_step(count));
    scale
        .ticks(count)
        .into_iter()
        .map(|value| Tick { value, pos: scale.map(value), text: format_tick(value, precision) })
        .collect()
}

pub fn format_tick(value: f64, precision: usize) -> String {
    let s = format!("{:.*}", precision, value);
    // "-0" and "-0.0" read as zero
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}
