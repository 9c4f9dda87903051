// File: crates/chart-render-skia/tests/smoke.rs
// Purpose: End-to-end render smoke tests: PNG bytes, PNG file and RGBA buffer.

use chart_core::axis::AxisOrient;
use chart_core::scene::FrameTick;
use chart_core::{Chart, ChartEvent, ChartOptions, Dataset, MarkId, Record, Scene};
use chart_render_skia::{render_frame_to_png, render_frame_to_png_bytes, render_frame_to_rgba8, RasterOptions, Theme};
use std::time::Duration;

fn chart() -> Chart<Scene> {
    let ds = Dataset::new(vec![
        Record { label: "X".into(), year: 2010, tc_total_war: 2.0, career_total_war: 5.0 },
        Record { label: "Y".into(), year: 2011, tc_total_war: 4.0, career_total_war: 1.0 },
    ])
    .expect("dataset");
    let opts = ChartOptions::default();
    let scene = Scene::new(opts.width, opts.height, opts.insets);
    Chart::new(ds, opts, scene).expect("chart")
}

#[test]
fn render_smoke_png() {
    let mut chart = chart();
    chart.handle_event(ChartEvent::PointerEnter(MarkId(1)), Duration::ZERO).expect("hover");
    let frame = chart.surface().frame(Duration::ZERO);

    let opts = RasterOptions::default();
    let out = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("smoke.png");
    render_frame_to_png(&frame, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = render_frame_to_png_bytes(&frame, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_rgba8_buffer() {
    let chart = chart();
    let frame = chart.surface().frame(Duration::ZERO);
    let opts = RasterOptions { theme: Theme::light(), draw_labels: false };
    let (px, w, h, stride) = render_frame_to_rgba8(&frame, &opts).expect("rgba render");
    assert_eq!((w, h), (960, 500));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // top-left pixel is opaque white background
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);

    // inside the first mark, centred at (100, 370)
    let i = (370 * stride) + 110 * 4;
    let (r, g, b) = (px[i], px[i + 1], px[i + 2]);
    assert!(r > g && r > b, "expected pink-ish pixel, got {:?}", (r, g, b));
}

#[test]
fn mid_transition_frame_differs_from_settled() {
    let mut chart = chart();
    chart.handle_event(ChartEvent::click("Career_Total_WAR"), Duration::ZERO).expect("click");
    let opts = RasterOptions { theme: Theme::dark(), draw_labels: false };
    let mid = render_frame_to_rgba8(&chart.surface().frame(Duration::from_millis(500)), &opts).expect("mid").0;
    let end = render_frame_to_rgba8(&chart.surface().frame(Duration::from_millis(1000)), &opts).expect("end").0;
    assert_ne!(mid, end);
}

#[test]
fn theme_lookup_falls_back_to_light() {
    assert_eq!(chart_render_skia::theme::find("DARK").name, "dark");
    assert_eq!(chart_render_skia::theme::find("nope").name, "light");
}

#[test]
fn ticks_outside_the_plot_are_not_drawn() {
    let chart = chart();
    let mut frame = chart.surface().frame(Duration::ZERO);
    let left = frame.axes.iter_mut().find(|a| a.orient == AxisOrient::Left).expect("left axis");
    // one tick slid into the bottom margin, one inside the plot
    left.ticks = vec![
        FrameTick { pos: 470.0, text: "-3.0".into(), alpha: 1.0 },
        FrameTick { pos: 300.0, text: "3.0".into(), alpha: 1.0 },
    ];

    let opts = RasterOptions { theme: Theme::light(), draw_labels: false };
    let (px, _, _, stride) = render_frame_to_rgba8(&frame, &opts).expect("rgba render");
    let at = |x: usize, y: usize| px[y * stride + x * 4];
    assert_eq!(at(97, 470), 255, "margin should stay background");
    assert!(at(97, 300) < 250, "in-plot tick should be drawn");
}
