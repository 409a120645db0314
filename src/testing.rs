use crate::font::rasterizer::{FontRasterizer, RasterizedGlyph};
use crate::utils::PixelLength;
use anyhow::{anyhow, Result};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

pub fn glyph(
    width: usize,
    height: usize,
    data: Vec<u8>,
    left: i32,
    top: i32,
    advance: i32,
) -> RasterizedGlyph {
    assert_eq!(data.len(), width * height);
    RasterizedGlyph {
        data,
        width,
        height,
        left: PixelLength::new(left),
        top: PixelLength::new(top),
        advance: PixelLength::new(advance),
    }
}

/// A `size` x `size` block of uniform coverage sitting on the baseline.
pub fn square(size: usize, coverage: u8, advance: i32) -> RasterizedGlyph {
    glyph(size, size, vec![coverage; size * size], 0, size as i32, advance)
}

/// Scriptable stand-in for the font engine. Clones share their call logs.
#[derive(Clone, Default)]
pub struct FakeRasterizer {
    kerning: bool,
    charmap: HashMap<u32, u32>,
    glyphs: HashMap<u32, RasterizedGlyph>,
    kern_pairs: HashMap<(u32, u32), i32>,
    rejected_sizes: HashSet<u32>,
    rasterize_calls: Rc<Cell<usize>>,
    sizes: Rc<RefCell<Vec<u32>>>,
}

impl FakeRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kerning(mut self) -> Self {
        self.kerning = true;
        self
    }

    pub fn with_glyph(mut self, ch: char, index: u32, glyph: RasterizedGlyph) -> Self {
        self.charmap.insert(ch as u32, index);
        self.glyphs.insert(index, glyph);
        self
    }

    /// Maps `ch` to a glyph that fails to load.
    pub fn with_broken_glyph(mut self, ch: char, index: u32) -> Self {
        self.charmap.insert(ch as u32, index);
        self
    }

    /// The glyph used for unmapped codepoints.
    pub fn with_notdef(mut self, glyph: RasterizedGlyph) -> Self {
        self.glyphs.insert(0, glyph);
        self
    }

    pub fn with_kern_pair(mut self, left: u32, right: u32, pixels: i32) -> Self {
        self.kern_pairs.insert((left, right), pixels);
        self
    }

    pub fn rejecting_size(mut self, pixel_height: u32) -> Self {
        self.rejected_sizes.insert(pixel_height);
        self
    }

    pub fn rasterize_calls(&self) -> usize {
        self.rasterize_calls.get()
    }

    pub fn pixel_sizes(&self) -> Vec<u32> {
        self.sizes.borrow().clone()
    }
}

impl FontRasterizer for FakeRasterizer {
    fn has_kerning(&self) -> bool {
        self.kerning
    }

    fn set_pixel_size(&self, pixel_height: u32) -> Result<()> {
        self.sizes.borrow_mut().push(pixel_height);
        if self.rejected_sizes.contains(&pixel_height) {
            return Err(anyhow!("pixel size {} rejected", pixel_height));
        }
        Ok(())
    }

    fn glyph_index(&self, codepoint: u32) -> u32 {
        self.charmap.get(&codepoint).copied().unwrap_or(0)
    }

    fn kerning(&self, left: u32, right: u32) -> PixelLength {
        PixelLength::new(self.kern_pairs.get(&(left, right)).copied().unwrap_or(0))
    }

    fn rasterize(&self, glyph_index: u32) -> Result<RasterizedGlyph> {
        self.rasterize_calls.set(self.rasterize_calls.get() + 1);
        self.glyphs.get(&glyph_index).cloned().ok_or_else(|| anyhow!("no glyph {}", glyph_index))
    }
}
