//! Text output: glyphs are laid out along a pen and each coverage bitmap is
//! pushed to the pipeline one point per pixel.

use crate::color::Color;
use crate::font::{RasterizedGlyph, TtfFont};
use crate::pipeline::PointPipeline;
use crate::utils::{PixelLength, Vertex};

/// Emits one point per bitmap pixel, column by column.
///
/// The point alpha is the glyph coverage reduced by the transparency of
/// `color`, so a fully opaque color passes coverage through unchanged.
pub fn draw_bitmap<P: PointPipeline + ?Sized>(
    pipeline: &mut P,
    glyph: &RasterizedGlyph,
    offset: i32,
    top: i32,
    color: Color,
) {
    let (red, green, blue, alpha) = color.as_rgba();
    let fade = 0xff - i16::from(alpha);

    for p in 0..glyph.width {
        for q in 0..glyph.height {
            let alpha = (i16::from(glyph.coverage(p, q)) - fade).max(0) as u8;
            let position = Vertex::new(
                offset.saturating_add(p as i32) as f32,
                top.saturating_add(q as i32) as f32,
                0.0,
            );
            pipeline.draw_point(position, Color::rgba(red, green, blue, alpha));
        }
    }
}

// Coordinates saturate at the i32 range instead of wrapping.
#[inline]
fn advance(pen: PixelLength, by: PixelLength) -> PixelLength {
    PixelLength::new(pen.get().saturating_add(by.get()))
}

/// Up to, not including, the first NUL; `None` for empty or malformed input.
fn decode_multibyte(text: &[u8]) -> Option<&str> {
    let end = text.iter().position(|&b| b == 0).unwrap_or(text.len());
    match std::str::from_utf8(&text[..end]) {
        Ok("") => None,
        Ok(s) => Some(s),
        Err(err) => {
            log::warn!("text is not valid UTF-8: {}", err);
            None
        }
    }
}

impl TtfFont {
    /// Draws `text` with its upper-left corner at (`x`, `y`) and returns its
    /// width in pixels.
    pub fn print(
        &self,
        pipeline: &mut dyn PointPipeline,
        x: i32,
        y: i32,
        text: &str,
        font_size: u32,
        color: Color,
    ) -> u32 {
        self.layout(x, y, text.chars().map(u32::from), font_size, color, Some(pipeline))
    }

    /// Wide-character form of [`TtfFont::print`]: one codepoint per element.
    pub fn print_utf32(
        &self,
        pipeline: &mut dyn PointPipeline,
        x: i32,
        y: i32,
        text: &[u32],
        font_size: u32,
        color: Color,
    ) -> u32 {
        self.layout(x, y, text.iter().copied(), font_size, color, Some(pipeline))
    }

    /// Multibyte form of [`TtfFont::print`]. Invalid UTF-8 draws nothing.
    pub fn print_bytes(
        &self,
        pipeline: &mut dyn PointPipeline,
        x: i32,
        y: i32,
        text: &[u8],
        font_size: u32,
        color: Color,
    ) -> u32 {
        match decode_multibyte(text) {
            Some(text) => self.print(pipeline, x, y, text, font_size, color),
            None => 0,
        }
    }

    pub fn width(&self, text: &str, font_size: u32) -> u32 {
        self.layout(0, 0, text.chars().map(u32::from), font_size, Color::TRANSPARENT, None)
    }

    pub fn width_utf32(&self, text: &[u32], font_size: u32) -> u32 {
        self.layout(0, 0, text.iter().copied(), font_size, Color::TRANSPARENT, None)
    }

    pub fn width_bytes(&self, text: &[u8], font_size: u32) -> u32 {
        match decode_multibyte(text) {
            Some(text) => self.width(text, font_size),
            None => 0,
        }
    }

    /// The pixel size the face is now set to, or `None` if it rejected both
    /// the requested and the fallback size.
    fn apply_pixel_size(&self, font_size: u32) -> Option<u32> {
        let rasterizer = self.rasterizer();
        match rasterizer.set_pixel_size(font_size) {
            Ok(()) => Some(font_size),
            Err(err) => {
                let fallback = self.fallback_font_size();
                log::warn!("pixel size {} rejected ({:#}), using {}", font_size, err, fallback);
                match rasterizer.set_pixel_size(fallback) {
                    Ok(()) => Some(fallback),
                    Err(err) => {
                        log::warn!("fallback pixel size {} rejected: {:#}", fallback, err);
                        None
                    }
                }
            }
        }
    }

    fn layout<I>(
        &self,
        x: i32,
        y: i32,
        text: I,
        font_size: u32,
        color: Color,
        mut target: Option<&mut dyn PointPipeline>,
    ) -> u32
    where
        I: IntoIterator<Item = u32>,
    {
        let rasterizer = self.rasterizer();
        let pixel_size = self.apply_pixel_size(font_size);
        // The baseline sits at the requested size even after a fallback.
        let pen_y = i32::try_from(font_size).unwrap_or(i32::MAX);
        let mut pen_x = PixelLength::new(0);
        let mut previous = 0;

        for codepoint in text.into_iter().take_while(|&cp| cp != 0) {
            let glyph_index = rasterizer.glyph_index(codepoint);

            if self.has_kerning() && previous != 0 && glyph_index != 0 {
                pen_x = advance(pen_x, rasterizer.kerning(previous, glyph_index));
            }

            let glyph = match self.glyph(glyph_index, pixel_size) {
                Ok(glyph) => glyph,
                Err(err) => {
                    log::warn!("skipping U+{:04X} (glyph {}): {:#}", codepoint, glyph_index, err);
                    continue;
                }
            };
            log::trace!("U+{:04X} -> glyph {} at pen {}", codepoint, glyph_index, pen_x.get());

            if let Some(target) = target.as_deref_mut() {
                draw_bitmap(
                    target,
                    &glyph,
                    pen_x.get().saturating_add(glyph.left.get()).saturating_add(x),
                    pen_y.saturating_sub(glyph.top.get()).saturating_add(y),
                    color,
                );
            }

            pen_x = advance(pen_x, glyph.advance);
            previous = glyph_index;
        }

        pen_x.get().max(0) as u32
    }
}
