use crate::font::rasterizer::FontRasterizer;
use crate::font::RasterizedGlyph;
use anyhow::Result;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphKey {
    pub glyph_index: u32,
    pub pixel_size: u32,
}

#[derive(Default)]
pub struct GlyphCache {
    glyph_cache: HashMap<GlyphKey, Rc<RasterizedGlyph>>,
}

impl GlyphCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.glyph_cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyph_cache.is_empty()
    }

    pub fn clear(&mut self) {
        self.glyph_cache.clear();
    }

    /// The rasterizer must already be set to `key.pixel_size`.
    pub fn get_glyph(
        &mut self,
        rasterizer: &dyn FontRasterizer,
        key: GlyphKey,
    ) -> Result<Rc<RasterizedGlyph>> {
        if let Some(entry) = self.glyph_cache.get(&key) {
            return Ok(Rc::clone(entry));
        }

        let glyph = Rc::new(rasterizer.rasterize(key.glyph_index)?);
        self.glyph_cache.insert(key, Rc::clone(&glyph));
        Ok(glyph)
    }
}
