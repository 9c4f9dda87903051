// File: crates/chart-render-skia/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub axis_title: skia::Color,
    pub tick: skia::Color,
    pub tick_label: skia::Color,
    pub label_active: skia::Color,
    pub label_inactive: skia::Color,
    pub mark_fill: skia::Color,
    pub tooltip_background: skia::Color,
    pub tooltip_text: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_title: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            tick_label: skia::Color::from_argb(255, 40, 40, 40),
            label_active: skia::Color::from_argb(255, 0, 0, 0),
            label_inactive: skia::Color::from_argb(255, 170, 170, 170),
            // pink at 50% opacity
            mark_fill: skia::Color::from_argb(128, 255, 192, 203),
            tooltip_background: skia::Color::from_argb(230, 40, 40, 40),
            tooltip_text: skia::Color::from_argb(255, 255, 255, 255),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_title: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            tick_label: skia::Color::from_argb(255, 210, 210, 220),
            label_active: skia::Color::from_argb(255, 255, 255, 255),
            label_inactive: skia::Color::from_argb(255, 110, 110, 120),
            mark_fill: skia::Color::from_argb(128, 255, 105, 180),
            tooltip_background: skia::Color::from_argb(235, 250, 250, 252),
            tooltip_text: skia::Color::from_argb(255, 20, 20, 30),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

/// `color` with its alpha scaled by `alpha` in `[0, 1]`.
pub fn faded(color: skia::Color, alpha: f64) -> skia::Color {
    let a = (color.a() as f64 * alpha.clamp(0.0, 1.0)).round() as u8;
    skia::Color::from_argb(a, color.r(), color.g(), color.b())
}
