// File: crates/demo/src/main.rs
// Summary: Demo loads the WAR CSV, toggles the vertical metric and writes PNG frames of the transition.

use anyhow::{Context, Result};
use chart_core::{Chart, ChartEvent, ChartOptions, MarkId, MarkShape, Scene};
use chart_render_skia::{render_frame_to_png, RasterOptions, Theme};
use std::path::{Path, PathBuf};
use std::time::Duration;

fn main() -> Result<()> {
    env_logger::init();

    // Accept path from CLI or fall back to the bundled sample
    let raw = std::env::args().nth(1).unwrap_or_else(|| "data/Test_Rays.csv".to_string());
    let shape = match std::env::args().nth(2).as_deref() {
        Some("bar") => MarkShape::Bar,
        _ => MarkShape::Circle,
    };
    let path = PathBuf::from(&raw);
    println!("Using input file: {}", path.display());

    let options = ChartOptions { shape, ..ChartOptions::default() };
    let scene = Scene::new(options.width, options.height, options.insets);
    let mut chart = Chart::load(&path, options, scene)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} records", chart.dataset().len());
    log::info!("{:?} marks, {:?} transition", chart.options().shape, chart.options().transition);

    let (lo, hi) = chart.y_scale().domain();
    println!("{} domain: [{:.3}, {:.3}]", chart.chosen(), lo, hi);

    let opts = RasterOptions { theme: Theme::light(), draw_labels: true };
    let t0 = Duration::ZERO;

    // 1) Initial chart
    let out = out_name_with(&path, "initial");
    render_frame_to_png(&chart.surface().frame(t0), &opts, &out)?;
    println!("Wrote {}", out.display());

    // 2) Click the other label, then capture mid-flight and settled frames
    let other = chart.chosen().other();
    let clicked = Duration::from_millis(100);
    if !chart.handle_event(ChartEvent::click(other.token()), clicked)? {
        log::warn!("click on {} changed nothing", other.token());
    }
    let transition = chart.options().transition;
    let (lo, hi) = chart.y_scale().domain();
    println!("{} domain: [{:.3}, {:.3}]", chart.chosen(), lo, hi);

    let out = out_name_with(&path, "transition");
    render_frame_to_png(&chart.surface().frame(clicked + transition / 2), &opts, &out)?;
    println!("Wrote {}", out.display());

    let settled = clicked + transition;
    let out = out_name_with(&path, "settled");
    render_frame_to_png(&chart.surface().frame(settled), &opts, &out)?;
    println!("Wrote {}", out.display());

    log::info!("transition settled at {:?}", settled);

    // 3) Hover the first mark to show its tooltip
    chart.handle_event(ChartEvent::PointerEnter(MarkId(0)), settled)?;
    let out = out_name_with(&path, "tooltip");
    render_frame_to_png(&chart.surface().frame(settled), &opts, &out)?;
    println!("Wrote {}", out.display());

    Ok(())
}

/// Produce output file name like target/out/chart_<stem>_<suffix>.png
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    if stem.is_empty() {
        out.push(format!("chart_{}.png", suffix));
    } else {
        out.push(format!("chart_{}_{}.png", stem, suffix));
    }
    out
}
