// File: crates/chart-core/src/chart.rs
// Summary: Chart session; wires dataset, scales, render engine and selection to a drawing surface.

use std::path::Path;
use std::time::Duration;

use crate::axis::{Axis, AxisOrient};
use crate::controller::{Selection, SelectionController};
use crate::dataset::{Dataset, Metric};
use crate::error::Result;
use crate::geometry::Rect;
use crate::mark::{MarkId, MarkShape, XPlacement};
use crate::render::RenderEngine;
use crate::scene::{Hit, Scene};
use crate::scale::{build_scale, build_year_scale, BandScale, LinearScale, Padding};
use crate::surface::{DrawingSurface, Label};
use crate::types::{Insets, Timing, HEIGHT, MARK_RADIUS, TICK_COUNT, TRANSITION, WIDTH};

/// Title of the horizontal axis.
pub const YEAR_TITLE: &str = "Year";

/// Distance below the plot of the first metric label; the second sits 20px lower.
const LABEL_OFFSET: f64 = 40.0;
const LABEL_SPACING: f64 = 20.0;

#[derive(Clone, Debug)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    pub shape: MarkShape,
    pub radius: f64,
    pub padding: Padding,
    pub transition: Duration,
    pub tick_count: usize,
    pub initial: Metric,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            shape: MarkShape::Circle,
            radius: MARK_RADIUS,
            padding: Padding::default(),
            transition: TRANSITION,
            tick_count: TICK_COUNT,
            initial: Metric::TcTotalWar,
        }
    }
}

impl ChartOptions {
    pub fn plot_area(&self) -> Rect {
        Rect::plot_area(self.width, self.height, &self.insets)
    }
}

/// Input the drawing surface forwards to the chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChartEvent {
    /// Click on a label carrying `token`.
    Click { token: String },
    PointerEnter(MarkId),
    PointerLeave(MarkId),
}

impl ChartEvent {
    pub fn click(token: impl Into<String>) -> Self {
        ChartEvent::Click { token: token.into() }
    }
}

pub struct Chart<S: DrawingSurface> {
    dataset: Dataset,
    options: ChartOptions,
    plot: Rect,
    controller: SelectionController,
    x: XPlacement,
    y: LinearScale,
    render: RenderEngine,
    hovered: Option<MarkId>,
    surface: S,
}

impl<S: DrawingSurface> Chart<S> {
    /// Load `path` and build a chart on `surface`. Nothing is drawn if loading fails.
    pub fn load(path: impl AsRef<Path>, options: ChartOptions, surface: S) -> Result<Self> {
        let dataset = Dataset::from_path(path)?;
        Self::new(dataset, options, surface)
    }

    /// Build scales for both metrics up front, then create axes, marks, labels and
    /// tooltips. A degenerate domain for either metric fails before anything is drawn.
    pub fn new(dataset: Dataset, options: ChartOptions, mut surface: S) -> Result<Self> {
        let plot = options.plot_area();
        let y_range = (plot.bottom, plot.top);
        for metric in Metric::ALL {
            build_scale(&dataset, metric, y_range, options.padding)?;
        }

        let controller = SelectionController::new(options.initial);
        let metric = controller.chosen();
        let y = build_scale(&dataset, metric, y_range, options.padding)?;
        let x = match options.shape {
            MarkShape::Circle => XPlacement::Year(build_year_scale(&dataset, (plot.left, plot.right))?),
            MarkShape::Bar => XPlacement::Band(BandScale::new(dataset.len(), (plot.left, plot.right))),
        };

        let render = RenderEngine::create(
            &dataset,
            options.shape,
            options.radius,
            options.transition,
            &x,
            &y,
            metric,
            &mut surface,
        );

        let mut chart = Self { dataset, options, plot, controller, x, y, render, hovered: None, surface };
        let now = Timing::immediate(Duration::ZERO);
        let (x_axis, y_axis) = (chart.x_axis(), chart.y_axis());
        chart.render.render_axis(&mut chart.surface, &x_axis, now);
        chart.render.render_axis(&mut chart.surface, &y_axis, now);
        chart.render.bind_tooltips(&chart.dataset, metric, &mut chart.surface);
        chart.update_labels();
        log::info!("chart ready: {} marks, metric {}", chart.render.marks().len(), metric);
        Ok(chart)
    }

    pub fn dataset(&self) -> &Dataset { &self.dataset }
    pub fn options(&self) -> &ChartOptions { &self.options }
    pub fn chosen(&self) -> Metric { self.controller.chosen() }
    pub fn y_scale(&self) -> &LinearScale { &self.y }
    pub fn x_placement(&self) -> &XPlacement { &self.x }
    pub fn hovered(&self) -> Option<MarkId> { self.hovered }
    pub fn surface(&self) -> &S { &self.surface }
    pub fn surface_mut(&mut self) -> &mut S { &mut self.surface }
    pub fn into_surface(self) -> S { self.surface }

    /// Vertical axis for the chosen metric.
    pub fn y_axis(&self) -> Axis {
        Axis::linear(self.chosen().title(), AxisOrient::Left, self.y).with_tick_count(self.options.tick_count)
    }

    pub fn x_axis(&self) -> Axis {
        match self.x {
            XPlacement::Year(scale) => {
                // whole years only
                let (lo, hi) = scale.domain();
                let years = (hi - lo).round().max(1.0) as usize;
                Axis::linear(YEAR_TITLE, AxisOrient::Bottom, scale).with_tick_count(self.options.tick_count.min(years))
            }
            XPlacement::Band(scale) => {
                // one band per record, named by its season
                let labels = self.dataset.iter().map(|r| r.year.to_string()).collect();
                Axis::band(YEAR_TITLE, AxisOrient::Bottom, scale, labels)
            }
        }
    }

    /// The metric labels, positioned below the plot.
    pub fn labels(&self) -> Vec<Label> {
        let x = self.plot.center_x();
        Metric::ALL
            .iter()
            .enumerate()
            .map(|(i, &m)| {
                let y = self.plot.bottom + LABEL_OFFSET + LABEL_SPACING * i as f64;
                Label::new(m, x, y, self.controller.emphasis(m))
            })
            .collect()
    }

    /// Event handler the drawing surface invokes. Returns whether anything changed.
    pub fn handle_event(&mut self, event: ChartEvent, now: Duration) -> Result<bool> {
        match event {
            ChartEvent::Click { token } => self.select(&token, now),
            ChartEvent::PointerEnter(id) => {
                if id.0 >= self.dataset.len() || self.hovered == Some(id) {
                    return Ok(false);
                }
                if let Some(prev) = self.hovered.take() {
                    self.surface.hide_tooltip(prev);
                }
                self.surface.show_tooltip(id);
                self.hovered = Some(id);
                Ok(true)
            }
            ChartEvent::PointerLeave(id) => {
                if self.hovered != Some(id) {
                    return Ok(false);
                }
                self.surface.hide_tooltip(id);
                self.hovered = None;
                Ok(true)
            }
        }
    }

    /// Switch the vertical axis to the metric named by `token`.
    pub fn select(&mut self, token: &str, now: Duration) -> Result<bool> {
        let to = match self.controller.resolve(token) {
            Selection::Changed { to, .. } => to,
            Selection::Unchanged => return Ok(false),
            Selection::Unrecognized => {
                log::warn!("ignoring selection of unknown field {token:?}");
                return Ok(false);
            }
        };

        let y = build_scale(&self.dataset, to, (self.plot.bottom, self.plot.top), self.options.padding)?;
        log::debug!("switching {} -> {} at {:?}", self.chosen(), to, now);
        self.controller.commit(to);
        self.y = y;

        let timing = self.render.timing(now);
        let y_axis = self.y_axis();
        self.render.render_axis(&mut self.surface, &y_axis, timing);
        self.render.render_marks(&self.dataset, &self.x, &self.y, to, &mut self.surface, timing);
        self.render.bind_tooltips(&self.dataset, to, &mut self.surface);
        self.update_labels();
        Ok(true)
    }

    fn update_labels(&mut self) {
        for label in self.labels() {
            self.surface.set_label(&label);
        }
    }
}

impl Chart<Scene> {
    /// Re-evaluate hover for a pointer at `cursor` (`None` once it leaves the surface).
    /// Marks move under a still pointer during transitions, so callers repeat this
    /// while the scene animates. Returns whether the hovered mark changed.
    pub fn hover_at(&mut self, cursor: Option<(f64, f64)>, now: Duration) -> Result<bool> {
        let over = cursor.and_then(|(x, y)| match self.surface.hit_test(x, y, now) {
            Some(Hit::Mark(id)) => Some(id),
            _ => None,
        });
        if over == self.hovered {
            return Ok(false);
        }
        match over {
            Some(id) => self.handle_event(ChartEvent::PointerEnter(id), now),
            None => match self.hovered {
                Some(prev) => self.handle_event(ChartEvent::PointerLeave(prev), now),
                None => Ok(false),
            },
        }
    }
}
