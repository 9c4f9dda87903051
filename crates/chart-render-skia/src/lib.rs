// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia renderer crate; rasterizes chart scene frames to PNG or RGBA buffers.

pub mod raster;
pub mod text;
pub mod theme;

pub use raster::{render_frame_to_png, render_frame_to_png_bytes, render_frame_to_rgba8, RasterOptions};
pub use text::TextShaper;
pub use theme::Theme;
