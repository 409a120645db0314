use crate::font::ftwrap;
use crate::utils::PixelLength;
use anyhow::Result;

pub mod freetype;

/// An 8-bit coverage bitmap, rows packed tightly (`width` bytes per row).
#[derive(Clone, Debug, PartialEq)]
pub struct RasterizedGlyph {
    pub data: Vec<u8>,
    pub height: usize,
    pub width: usize,
    pub top: PixelLength,
    pub left: PixelLength,
    pub advance: PixelLength,
}

impl RasterizedGlyph {
    #[inline]
    pub fn coverage(&self, column: usize, row: usize) -> u8 {
        self.data[row * self.width + column]
    }
}

pub trait FontRasterizer {
    fn has_kerning(&self) -> bool;

    /// Selects the pixel height used by subsequent glyph loads.
    fn set_pixel_size(&self, pixel_height: u32) -> Result<()>;

    /// 0 means the codepoint is not mapped by the face.
    fn glyph_index(&self, codepoint: u32) -> u32;

    fn kerning(&self, left: u32, right: u32) -> PixelLength;

    fn rasterize(&self, glyph_index: u32) -> Result<RasterizedGlyph>;
}

pub fn new_rasterizer(face: ftwrap::Face) -> Box<dyn FontRasterizer> {
    Box::new(freetype::FreeTypeRasterizer::new(face))
}
