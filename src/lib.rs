//! TrueType text for point-drawing graphics pipelines.
//!
//! A [`FontEngine`] turns font files into [`TtfFont`]s; a font rasterizes
//! glyphs on demand and blits them into any [`PointPipeline`] as one colored
//! point per bitmap pixel, or just measures the text.

pub mod bitmaps;
pub mod color;
pub mod config;
pub mod font;
pub mod glyphcache;
pub mod pipeline;
pub mod renderer;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

pub use color::Color;
pub use config::Config;
pub use font::{FontEngine, FontError, TtfFont};
pub use pipeline::{PointPipeline, RecordingPipeline};
pub use renderer::draw_bitmap;
