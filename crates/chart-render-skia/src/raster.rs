// File: crates/chart-render-skia/src/raster.rs
// Summary: Headless rendering of scene frames using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use chart_core::axis::AxisOrient;
use chart_core::scene::{Frame, FrameAxis, FrameMark, FrameTooltip};
use chart_core::surface::Label;
use chart_core::MarkShape;

use crate::text::{Align, TextShaper, TextSpec};
use crate::theme::{faded, Theme};

const TICK_SIZE: f32 = 6.0;
const TICK_SLACK: f32 = 0.5;
const TICK_FONT: f32 = 11.0;
const TITLE_FONT: f32 = 13.0;
const LABEL_FONT: f32 = chart_core::surface::LABEL_FONT_SIZE as f32;
const TOOLTIP_FONT: f32 = 12.0;
const TOOLTIP_PAD: f32 = 8.0;

pub struct RasterOptions {
    pub theme: Theme,
    /// Draw ticks, titles, labels and tooltips. Off in snapshot tests to avoid font variance.
    pub draw_labels: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { theme: Theme::default(), draw_labels: true }
    }
}

fn raster_surface(frame: &Frame) -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((frame.width as i32, frame.height as i32))
        .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", frame.width, frame.height))
}

fn paint_frame(surface: &mut skia::Surface, frame: &Frame, opts: &RasterOptions) {
    let canvas = surface.canvas();
    canvas.clear(opts.theme.background);

    let shaper = opts.draw_labels.then(TextShaper::new);
    for axis in &frame.axes {
        draw_axis(canvas, frame, axis, &opts.theme, shaper.as_ref());
    }
    for mark in &frame.marks {
        draw_mark(canvas, mark, &opts.theme);
    }
    if let Some(shaper) = shaper.as_ref() {
        for label in &frame.labels {
            draw_label(canvas, label, &opts.theme, shaper);
        }
        if let Some(tip) = &frame.tooltip {
            draw_tooltip(canvas, frame, tip, &opts.theme, shaper);
        }
    }
}

/// Render `frame` and encode it as PNG bytes.
pub fn render_frame_to_png_bytes(frame: &Frame, opts: &RasterOptions) -> Result<Vec<u8>> {
    let mut surface = raster_surface(frame)?;
    paint_frame(&mut surface, frame, opts);

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render `frame` to a PNG file at `output_png_path`, creating parent directories.
pub fn render_frame_to_png(
    frame: &Frame,
    opts: &RasterOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_frame_to_png_bytes(frame, opts)?;
    let path = output_png_path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

/// Render `frame` to unpremultiplied RGBA8. Returns `(pixels, width, height, row_bytes)`.
pub fn render_frame_to_rgba8(frame: &Frame, opts: &RasterOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = raster_surface(frame)?;
    paint_frame(&mut surface, frame, opts);

    let (w, h) = (frame.width, frame.height);
    let info = skia::ImageInfo::new(
        (w as i32, h as i32),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let row_bytes = w as usize * 4;
    let mut pixels = vec![0u8; row_bytes * h as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        anyhow::bail!("reading back raster pixels failed");
    }
    Ok((pixels, w, h, row_bytes))
}

// ---- helpers ----------------------------------------------------------------

fn draw_axis(canvas: &skia::Canvas, frame: &Frame, axis: &FrameAxis, theme: &Theme, shaper: Option<&TextShaper>) {
    let p = frame.plot;
    let (l, t, r, b) = (p.left as f32, p.top as f32, p.right as f32, p.bottom as f32);

    let mut line = skia::Paint::default();
    line.set_anti_alias(true);
    line.set_stroke_width(1.0);
    line.set_color(theme.axis_line);

    match axis.orient {
        AxisOrient::Left => canvas.draw_line((l, t), (l, b), &line),
        AxisOrient::Bottom => canvas.draw_line((l, b), (r, b), &line),
    };

    // ticks sliding past the plot edge would land on the margins
    let (lo, hi) = match axis.orient {
        AxisOrient::Left => (t, b),
        AxisOrient::Bottom => (l, r),
    };
    for tick in &axis.ticks {
        let pos = tick.pos as f32;
        if pos < lo - TICK_SLACK || pos > hi + TICK_SLACK {
            continue;
        }
        line.set_color(faded(theme.tick, tick.alpha));
        match axis.orient {
            AxisOrient::Left => canvas.draw_line((l - TICK_SIZE, pos), (l, pos), &line),
            AxisOrient::Bottom => canvas.draw_line((pos, b), (pos, b + TICK_SIZE), &line),
        };
        if let Some(shaper) = shaper {
            let spec = TextSpec::new(TICK_FONT, faded(theme.tick_label, tick.alpha)).mono();
            match axis.orient {
                AxisOrient::Left => shaper.draw(canvas, &tick.text, l - TICK_SIZE - 3.0, pos + TICK_FONT * 0.35, Align::Right, &spec),
                AxisOrient::Bottom => shaper.draw(canvas, &tick.text, pos, b + TICK_SIZE + TICK_FONT + 2.0, Align::Center, &spec),
            }
        }
    }

    if let Some(shaper) = shaper {
        let spec = TextSpec::new(TITLE_FONT, theme.axis_title);
        match axis.orient {
            AxisOrient::Left => shaper.draw(canvas, &axis.title, l + 8.0, t + 14.0, Align::Left, &spec),
            AxisOrient::Bottom => shaper.draw(canvas, &axis.title, r, b + 36.0, Align::Right, &spec),
        }
    }
}

fn draw_mark(canvas: &skia::Canvas, mark: &FrameMark, theme: &Theme) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.mark_fill);

    let g = mark.geometry;
    match mark.shape {
        MarkShape::Circle => {
            canvas.draw_circle((g.x as f32, g.y as f32), (g.width * 0.5) as f32, &fill);
        }
        MarkShape::Bar => {
            let rect = skia::Rect::from_xywh(g.x as f32, g.y as f32, g.width as f32, g.height as f32);
            canvas.draw_rect(rect, &fill);
        }
    }
}

fn draw_label(canvas: &skia::Canvas, label: &Label, theme: &Theme, shaper: &TextShaper) {
    let active = label.is_active();
    let color = if active { theme.label_active } else { theme.label_inactive };
    let spec = TextSpec::new(LABEL_FONT, color).bold(active);
    shaper.draw(canvas, &label.text, label.x as f32, label.y as f32, Align::Center, &spec);
}

fn draw_tooltip(canvas: &skia::Canvas, frame: &Frame, tip: &FrameTooltip, theme: &Theme, shaper: &TextShaper) {
    let spec = TextSpec::new(TOOLTIP_FONT, theme.tooltip_text);
    let (tw, th) = shaper.measure(&tip.text, &spec);
    let (w, h) = (tw + TOOLTIP_PAD * 2.0, th + TOOLTIP_PAD * 2.0);

    // centred above the anchor, kept on the surface
    let (ax, ay) = (tip.anchor.0 as f32, tip.anchor.1 as f32);
    let max_x = (frame.width as f32 - w).max(0.0);
    let max_y = (frame.height as f32 - h).max(0.0);
    let x = (ax - w * 0.5).clamp(0.0, max_x);
    let y = (ay - h - 6.0).clamp(0.0, max_y);

    let mut bg = skia::Paint::default();
    bg.set_anti_alias(true);
    bg.set_style(skia::paint::Style::Fill);
    bg.set_color(theme.tooltip_background);
    canvas.draw_round_rect(skia::Rect::from_xywh(x, y, w, h), 4.0, 4.0, &bg);

    shaper.draw_block(canvas, &tip.text, x + TOOLTIP_PAD, y + TOOLTIP_PAD, &spec);
}
