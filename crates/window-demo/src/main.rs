// File: crates/window-demo/src/main.rs
// Summary: Interactive window; hover shows tooltips, clicking a metric label switches the vertical axis.

use anyhow::{Context, Result};
use chart_core::{Chart, ChartEvent, ChartOptions, Hit, Scene};
use chart_render_skia::{render_frame_to_rgba8, RasterOptions};
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() -> Result<()> {
    env_logger::init();

    let path = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| "data/Test_Rays.csv".to_string()));
    let options = ChartOptions::default();
    let (width, height) = (options.width, options.height);
    let scene = Scene::new(width, height, options.insets);
    let mut chart = Chart::load(&path, options, scene)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;

    let theme_name = std::env::args().nth(2).unwrap_or_default();
    let raster = RasterOptions { theme: chart_render_skia::theme::find(&theme_name), draw_labels: true };

    // Window + softbuffer setup
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("WAR Chart")
        .with_inner_size(winit::dpi::PhysicalSize::new(width, height))
        .with_resizable(false)
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e:?}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e:?}"))?;

    let start = Instant::now();
    let mut cursor: Option<(f64, f64)> = None;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        // softbuffer surfaces must not outlive their context
        let _ = &context;
        let now = start.elapsed();
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = Some((position.x, position.y));
                    if hover(&mut chart, cursor, now) {
                        window.request_redraw();
                    }
                }
                WindowEvent::CursorLeft { .. } => {
                    cursor = None;
                    if hover(&mut chart, cursor, now) {
                        window.request_redraw();
                    }
                }
                WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                    if let Some((x, y)) = cursor {
                        if let Some(Hit::Label(token)) = chart.surface().hit_test(x, y, now) {
                            if dispatch(&mut chart, ChartEvent::click(token), now) {
                                window.request_redraw();
                            }
                        }
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                // marks slide under a still pointer
                let moved = hover(&mut chart, cursor, now);
                if moved || chart.surface().is_animating(now) {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                if let Err(e) = draw(&chart, &raster, &mut surface, now) {
                    log::error!("draw failed: {e:#}");
                    *cf = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}

/// Re-run hover for `cursor`, logging failures. Returns whether the tooltip changed.
fn hover(chart: &mut Chart<Scene>, cursor: Option<(f64, f64)>, now: Duration) -> bool {
    chart.hover_at(cursor, now).unwrap_or_else(|e| {
        log::error!("hover failed: {e}");
        false
    })
}

/// Forward `event` to the chart, logging failures. Returns whether anything changed.
fn dispatch(chart: &mut Chart<Scene>, event: ChartEvent, now: Duration) -> bool {
    match chart.handle_event(event, now) {
        Ok(changed) => changed,
        Err(e) => {
            log::error!("event failed: {e}");
            false
        }
    }
}

fn draw(
    chart: &Chart<Scene>,
    raster: &RasterOptions,
    surface: &mut softbuffer::Surface,
    now: Duration,
) -> Result<()> {
    let frame = chart.surface().frame(now);
    let (rgba, w, h, _) = render_frame_to_rgba8(&frame, raster)?;
    let (nw, nh) = match (NonZeroU32::new(w), NonZeroU32::new(h)) {
        (Some(nw), Some(nh)) => (nw, nh),
        _ => return Ok(()),
    };
    surface.resize(nw, nh).map_err(|e| anyhow::anyhow!("resize: {e:?}"))?;

    let mut buffer = surface.buffer_mut().map_err(|e| anyhow::anyhow!("buffer: {e:?}"))?;
    let max_px = buffer.len().min(rgba.len() / 4);
    for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
        let (r, g, b) = (px[0] as u32, px[1] as u32, px[2] as u32);
        // softbuffer expects 0RGB
        buffer[i] = (r << 16) | (g << 8) | b;
    }
    buffer.present().map_err(|e| anyhow::anyhow!("present: {e:?}"))?;
    Ok(())
}
