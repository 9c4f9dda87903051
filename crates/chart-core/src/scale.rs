// File: crates/chart-core/src/scale.rs
// Summary: Linear and band scales plus the builders that derive them from a dataset.

use crate::dataset::{Dataset, Metric};
use crate::error::{ChartError, Result};

/// Domain widths below this are treated as zero.
const MIN_SPAN: f64 = 1e-12;

/// Linear map from `domain` onto `range`. Either interval may be reversed;
/// vertical axes pass `(bottom, top)` so larger values land higher on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) { self.domain }
    pub fn range(&self) -> (f64, f64) { self.range }

    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span.abs() < MIN_SPAN { return r0; }
        r0 + (v - d0) / span * (r1 - r0)
    }

    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span.abs() < MIN_SPAN { return d0; }
        d0 + (px - r0) / span * (d1 - d0)
    }

    /// "Nice" tick values inside the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = ordered(self.domain);
        let step = tick_step(lo, hi, count);
        if step == 0.0 { return vec![lo]; }
        let start = (lo / step).ceil() as i64;
        let stop = (hi / step).floor() as i64;
        (start..=stop).map(|i| i as f64 * step).collect()
    }

    /// Step between consecutive ticks for `count`; 0 when the domain is empty.
    pub fn tick_step(&self, count: usize) -> f64 {
        let (lo, hi) = ordered(self.domain);
        tick_step(lo, hi, count)
    }

    /// Scale whose domain sits `t` of the way from `self` to `other` (range from `other`).
    pub fn interpolate(&self, other: &LinearScale, t: f64) -> LinearScale {
        let lerp = |a: f64, b: f64| a + (b - a) * t;
        LinearScale {
            domain: (lerp(self.domain.0, other.domain.0), lerp(self.domain.1, other.domain.1)),
            range: other.range,
        }
    }
}

/// Evenly spaced bands for `count` discrete slots over `range`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandScale {
    count: usize,
    range: (f64, f64),
    padding_inner: f64,
}

impl BandScale {
    pub fn new(count: usize, range: (f64, f64)) -> Self {
        Self { count, range, padding_inner: 0.1 }
    }

    /// Fraction of each step left empty between bands, clamped to `[0, 1)`.
    pub fn with_padding(mut self, padding_inner: f64) -> Self {
        self.padding_inner = padding_inner.clamp(0.0, 0.99);
        self
    }

    pub fn step(&self) -> f64 {
        if self.count == 0 { return 0.0; }
        (self.range.1 - self.range.0) / self.count as f64
    }

    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Left edge of band `index`.
    pub fn position(&self, index: usize) -> f64 {
        self.range.0 + self.step() * index as f64 + self.step() * self.padding_inner * 0.5
    }
}

/// Domain widening policy. Each bound moves away from zero by a fraction of its
/// own magnitude, so `[2, 4]` becomes `[1.6, 4.8]` with the default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Padding {
    pub lower: f64,
    pub upper: f64,
}

impl Padding {
    pub const NONE: Padding = Padding { lower: 0.0, upper: 0.0 };

    pub fn apply(&self, (lo, hi): (f64, f64)) -> (f64, f64) {
        (lo - self.lower * lo.abs(), hi + self.upper * hi.abs())
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self { lower: 0.2, upper: 0.2 }
    }
}

/// Build the vertical scale for `metric`. Recomputed on every selection change.
pub fn build_scale(
    dataset: &Dataset,
    metric: Metric,
    range: (f64, f64),
    padding: Padding,
) -> Result<LinearScale> {
    if dataset.is_empty() {
        return Err(ChartError::EmptyDataset);
    }
    let (lo, hi) = padding.apply(dataset.extent(metric));
    if !(hi - lo).is_finite() || (hi - lo).abs() < MIN_SPAN {
        return Err(ChartError::DegenerateDomain { field: metric.token().to_string() });
    }
    log::debug!("scale for {metric}: domain [{lo:.3}, {hi:.3}] -> range {range:?}");
    Ok(LinearScale::new((lo, hi), range))
}

/// Build the horizontal `Year` scale. Unpadded; a single year is widened by half a
/// year on each side.
pub fn build_year_scale(dataset: &Dataset, range: (f64, f64)) -> Result<LinearScale> {
    if dataset.is_empty() {
        return Err(ChartError::EmptyDataset);
    }
    let (mut lo, mut hi) = dataset.year_extent();
    if (hi - lo).abs() < MIN_SPAN {
        lo -= 0.5;
        hi += 0.5;
    }
    Ok(LinearScale::new((lo, hi), range))
}

/// Decimal places needed to print ticks spaced `step` apart.
pub fn step_precision(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 { return 0; }
    (-step.log10().floor()).max(0.0) as usize
}

fn ordered((a, b): (f64, f64)) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    let span = hi - lo;
    if count == 0 || !span.is_finite() || span <= 0.0 { return 0.0; }
    let raw = span / count as f64;
    let power = 10f64.powf(raw.log10().floor());
    let err = raw / power;
    let factor = if err >= 50f64.sqrt() {
        10.0
    } else if err >= 10f64.sqrt() {
        5.0
    } else if err >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * power
}
