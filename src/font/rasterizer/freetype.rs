use crate::font::rasterizer::{FontRasterizer, RasterizedGlyph};
use crate::font::{ftwrap, FontError};
use crate::utils::{from_26_6, PixelLength};
use anyhow::Result;
use freetype::bitmap::PixelMode;

pub struct FreeTypeRasterizer {
    face: ftwrap::Face,
}

impl FontRasterizer for FreeTypeRasterizer {
    fn has_kerning(&self) -> bool {
        self.face.has_kerning()
    }

    fn set_pixel_size(&self, pixel_height: u32) -> Result<()> {
        self.face.set_pixel_size(pixel_height)
    }

    fn glyph_index(&self, codepoint: u32) -> u32 {
        self.face.char_index(codepoint)
    }

    fn kerning(&self, left: u32, right: u32) -> PixelLength {
        match self.face.kerning(left, right) {
            Ok(delta) => from_26_6(delta.x as i64),
            Err(err) => {
                log::debug!("no kerning for {}/{}: {:#}", left, right, err);
                PixelLength::new(0)
            }
        }
    }

    fn rasterize(&self, glyph_index: u32) -> Result<RasterizedGlyph> {
        let slot = self.face.load_and_render_glyph(glyph_index)?;
        let bitmap = slot.bitmap();
        let width = bitmap.width().max(0) as usize;
        let height = bitmap.rows().max(0) as usize;
        let pitch = bitmap.pitch();
        let mode = bitmap.pixel_mode()?;
        let data = unpack_rows(bitmap.buffer(), width, height, pitch, mode)?;

        Ok(RasterizedGlyph {
            data,
            width,
            height,
            left: PixelLength::new(slot.bitmap_left()),
            top: PixelLength::new(slot.bitmap_top()),
            advance: from_26_6(slot.advance().x as i64),
        })
    }
}

impl FreeTypeRasterizer {
    pub fn new(face: ftwrap::Face) -> Self {
        Self { face }
    }
}

/// Converts a rendered bitmap into top-down rows of 8-bit coverage.
fn unpack_rows(
    buffer: &[u8],
    width: usize,
    height: usize,
    pitch: i32,
    mode: PixelMode,
) -> Result<Vec<u8>> {
    let stride = pitch.unsigned_abs() as usize;
    let mut coverage = vec![0u8; width * height];
    if width == 0 || height == 0 {
        return Ok(coverage);
    }
    for y in 0..height {
        // A negative pitch means the rows are stored bottom-up.
        let src_row = if pitch < 0 { height - 1 - y } else { y };
        let src = &buffer[src_row * stride..src_row * stride + stride];
        let dest = &mut coverage[y * width..(y + 1) * width];
        match mode {
            PixelMode::Gray => dest.copy_from_slice(&src[..width]),
            PixelMode::Mono => {
                for (x, px) in dest.iter_mut().enumerate() {
                    let bit = src[x / 8] & (0x80 >> (x % 8));
                    *px = if bit != 0 { 0xff } else { 0 };
                }
            }
            _ => return Err(FontError::UnsupportedPixelMode.into()),
        }
    }
    Ok(coverage)
}
