// File: crates/chart-core/src/scene.rs
// Summary: Retained drawing surface; keeps animated state and produces frames for a renderer.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::axis::{scale_ticks, ticks_for, Axis, AxisOrient, AxisScale, Tick};
use crate::geometry::Rect;
use crate::mark::{MarkGeometry, MarkId, MarkShape};
use crate::surface::{DrawingSurface, Label};
use crate::transition::{ease_cubic_in_out, Animated};
use crate::types::{Insets, Timing};

/// Two tick values closer than this are the same tick.
const TICK_EPS: f64 = 1e-9;

#[derive(Clone, Debug)]
struct SceneMark {
    shape: MarkShape,
    geometry: Animated<MarkGeometry>,
    tooltip: String,
}

/// A tick as drawn at one instant, keyed by its data value.
#[derive(Clone, Debug, PartialEq)]
struct TickState {
    value: f64,
    text: String,
    pos: f64,
    alpha: f64,
}

impl TickState {
    fn settled(t: Tick) -> Self {
        Self { value: t.value, text: t.text, pos: t.pos, alpha: 1.0 }
    }
}

#[derive(Clone, Debug)]
struct SceneAxis {
    title: String,
    tick_count: usize,
    from: AxisScale,
    to: AxisScale,
    /// Ticks on screen when the transition started; they either settle onto `to` or exit.
    carried: Vec<TickState>,
    timing: Timing,
}

impl SceneAxis {
    fn eased(&self, now: Duration) -> f64 {
        ease_cubic_in_out(self.timing.progress(now))
    }

    /// Scale as displayed at `now`.
    fn current(&self, now: Duration) -> AxisScale {
        match (&self.from, &self.to) {
            (AxisScale::Linear(a), AxisScale::Linear(b)) => AxisScale::Linear(a.interpolate(b, self.eased(now))),
            _ => self.to.clone(),
        }
    }

    /// Carried ticks move from where they were to their place on the new scale, fading
    /// out unless the new scale keeps them. Ticks only the new scale has fade in from
    /// their position on the starting scale. Sorted by value.
    fn ticks(&self, now: Duration) -> Vec<TickState> {
        let (a, b) = match (&self.from, &self.to) {
            (AxisScale::Linear(a), AxisScale::Linear(b)) => (a, b),
            _ => return scale_ticks(&self.to, self.tick_count).into_iter().map(TickState::settled).collect(),
        };
        let e = self.eased(now);
        // exact at both ends
        let lerp = |x: f64, y: f64| x * (1.0 - e) + y * e;
        let same = |x: f64, y: f64| (x - y).abs() < TICK_EPS;
        let new = ticks_for(b, self.tick_count);

        let mut out = Vec::with_capacity(self.carried.len() + new.len());
        for t in &new {
            let (pos, alpha, text) = match self.carried.iter().find(|c| same(c.value, t.value)) {
                // text switches once the transition moves
                Some(c) => (c.pos, c.alpha, if e > 0.0 { &t.text } else { &c.text }),
                None => (a.map(t.value), 0.0, &t.text),
            };
            out.push(TickState { value: t.value, text: text.clone(), pos: lerp(pos, t.pos), alpha: lerp(alpha, 1.0) });
        }
        for c in self.carried.iter().filter(|c| !new.iter().any(|t| same(t.value, c.value))) {
            out.push(TickState {
                value: c.value,
                text: c.text.clone(),
                pos: lerp(c.pos, b.map(c.value)),
                alpha: lerp(c.alpha, 0.0),
            });
        }
        out.retain(|t| t.alpha > 0.0);
        out.sort_by(|x, y| x.value.total_cmp(&y.value));
        out
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameMark {
    pub id: MarkId,
    pub shape: MarkShape,
    pub geometry: MarkGeometry,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameTick {
    pub pos: f64,
    pub text: String,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameAxis {
    pub orient: AxisOrient,
    pub title: String,
    pub ticks: Vec<FrameTick>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameTooltip {
    pub id: MarkId,
    pub text: String,
    pub anchor: (f64, f64),
}

/// Immutable snapshot of a [`Scene`] at one instant.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub plot: Rect,
    pub marks: Vec<FrameMark>,
    pub axes: Vec<FrameAxis>,
    pub labels: Vec<Label>,
    pub tooltip: Option<FrameTooltip>,
}

impl Frame {
    pub fn mark(&self, id: MarkId) -> Option<&FrameMark> {
        self.marks.iter().find(|m| m.id == id)
    }

    pub fn axis(&self, orient: AxisOrient) -> Option<&FrameAxis> {
        self.axes.iter().find(|a| a.orient == orient)
    }
}

/// What lies under a pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Hit {
    Label(&'static str),
    Mark(MarkId),
}

/// In-memory [`DrawingSurface`].
#[derive(Clone, Debug)]
pub struct Scene {
    width: u32,
    height: u32,
    plot: Rect,
    marks: BTreeMap<MarkId, SceneMark>,
    axes: BTreeMap<AxisOrient, SceneAxis>,
    labels: Vec<Label>,
    tooltip: Option<MarkId>,
}

impl Scene {
    pub fn new(width: u32, height: u32, insets: Insets) -> Self {
        Self {
            width,
            height,
            plot: Rect::plot_area(width, height, &insets),
            marks: BTreeMap::new(),
            axes: BTreeMap::new(),
            labels: Vec::new(),
            tooltip: None,
        }
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn plot(&self) -> Rect { self.plot }
    pub fn mark_count(&self) -> usize { self.marks.len() }
    pub fn labels(&self) -> &[Label] { &self.labels }

    pub fn tooltip_text(&self, id: MarkId) -> Option<&str> {
        self.marks.get(&id).map(|m| m.tooltip.as_str())
    }

    /// Where mark `id` is headed, regardless of any running transition.
    pub fn target(&self, id: MarkId) -> Option<MarkGeometry> {
        self.marks.get(&id).map(|m| m.geometry.target())
    }

    /// Domain the axis is transitioning to, for linear axes.
    pub fn axis_domain(&self, orient: AxisOrient) -> Option<(f64, f64)> {
        match self.axes.get(&orient).map(|a| &a.to) {
            Some(AxisScale::Linear(s)) => Some(s.domain()),
            _ => None,
        }
    }

    pub fn is_animating(&self, now: Duration) -> bool {
        self.marks.values().any(|m| m.geometry.is_running(now))
            || self.axes.values().any(|a| now < a.timing.end() && !a.timing.duration.is_zero())
    }

    pub fn frame(&self, now: Duration) -> Frame {
        let marks = self
            .marks
            .iter()
            .map(|(id, m)| FrameMark { id: *id, shape: m.shape, geometry: m.geometry.value_at(now) })
            .collect::<Vec<_>>();
        let axes = self
            .axes
            .iter()
            .map(|(orient, a)| FrameAxis {
                orient: *orient,
                title: a.title.clone(),
                ticks: a
                    .ticks(now)
                    .into_iter()
                    .map(|t| FrameTick { pos: t.pos, text: t.text, alpha: t.alpha })
                    .collect(),
            })
            .collect();
        let tooltip = self.tooltip.and_then(|id| {
            let m = self.marks.get(&id)?;
            Some(FrameTooltip {
                id,
                text: m.tooltip.clone(),
                anchor: m.geometry.value_at(now).anchor(m.shape),
            })
        });
        Frame {
            width: self.width,
            height: self.height,
            plot: self.plot,
            marks,
            axes,
            labels: self.labels.clone(),
            tooltip,
        }
    }

    /// Labels win over marks; among marks the last drawn (topmost) wins.
    pub fn hit_test(&self, x: f64, y: f64, now: Duration) -> Option<Hit> {
        if let Some(l) = self.labels.iter().find(|l| l.bounds().contains(x, y)) {
            return Some(Hit::Label(l.token()));
        }
        self.marks
            .iter()
            .rev()
            .find(|(_, m)| m.geometry.value_at(now).contains(m.shape, x, y))
            .map(|(id, _)| Hit::Mark(*id))
    }

    /// Scale and ticks the axis shows at `start`; a new transition begins there.
    fn axis_from(&self, axis: &Axis, start: Duration) -> (AxisScale, Vec<TickState>) {
        match self.axes.get(&axis.orient) {
            Some(prev) => (prev.current(start), prev.ticks(start)),
            None => (axis.scale.clone(), Vec::new()),
        }
    }
}

impl DrawingSurface for Scene {
    fn create_mark(&mut self, id: MarkId, shape: MarkShape, geometry: MarkGeometry) {
        self.marks.insert(id, SceneMark { shape, geometry: Animated::fixed(geometry), tooltip: String::new() });
    }

    fn transition_mark(&mut self, id: MarkId, to: MarkGeometry, timing: Timing) {
        match self.marks.get_mut(&id) {
            Some(m) => m.geometry.retarget(to, timing),
            None => log::warn!("transition for unknown mark {id:?}"),
        }
    }

    fn set_axis(&mut self, axis: &Axis, timing: Timing) {
        let (from, carried) = self.axis_from(axis, timing.start);
        self.axes.insert(
            axis.orient,
            SceneAxis {
                title: axis.title.clone(),
                tick_count: axis.tick_count,
                from,
                to: axis.scale.clone(),
                carried,
                timing,
            },
        );
    }

    fn set_label(&mut self, label: &Label) {
        match self.labels.iter_mut().find(|l| l.metric == label.metric) {
            Some(l) => *l = label.clone(),
            None => self.labels.push(label.clone()),
        }
    }

    fn bind_tooltip(&mut self, id: MarkId, text: String) {
        if let Some(m) = self.marks.get_mut(&id) {
            m.tooltip = text;
        }
    }

    fn show_tooltip(&mut self, id: MarkId) {
        if self.marks.contains_key(&id) {
            self.tooltip = Some(id);
        }
    }

    fn hide_tooltip(&mut self, id: MarkId) {
        if self.tooltip == Some(id) {
            self.tooltip = None;
        }
    }
}
