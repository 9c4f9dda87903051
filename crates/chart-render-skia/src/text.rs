// File: crates/chart-render-skia/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout for ticks, labels and tooltips.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Horizontal anchoring of drawn text relative to `x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug)]
pub struct TextSpec {
    pub size: f32,
    pub color: skia::Color,
    pub bold: bool,
    pub mono_numeric: bool,
}

impl TextSpec {
    pub fn new(size: f32, color: skia::Color) -> Self {
        Self { size, color, bold: false, mono_numeric: false }
    }
    pub fn bold(mut self, bold: bool) -> Self { self.bold = bold; self }
    pub fn mono(mut self) -> Self { self.mono_numeric = true; self }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(spec: &TextSpec) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(spec.size.max(1.0));
        ts.set_color(spec.color);
        if spec.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        if spec.mono_numeric {
            ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        } else {
            ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        }
        ts
    }

    pub fn layout(&self, text: &str, spec: &TextSpec) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(spec));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure(&self, text: &str, spec: &TextSpec) -> (f32, f32) {
        let p = self.layout(text, spec);
        (p.longest_line(), p.height())
    }

    /// Draw `text` with its first baseline at `y`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, align: Align, spec: &TextSpec) {
        let p = self.layout(text, spec);
        let w = p.longest_line();
        let left = match align {
            Align::Left => x,
            Align::Center => x - w * 0.5,
            Align::Right => x - w,
        };
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (left, y - spec.size * 0.8));
    }

    /// Draw a multi-line paragraph with its top-left corner at `(x, y)`.
    pub fn draw_block(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, spec: &TextSpec) {
        let p = self.layout(text, spec);
        p.paint(canvas, (x, y));
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
