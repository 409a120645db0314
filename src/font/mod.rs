use crate::config::Config;
use crate::glyphcache::{GlyphCache, GlyphKey};
use anyhow::{Context, Result};
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

pub mod ftwrap;
pub mod loader;
pub mod rasterizer;

pub use crate::font::loader::{FontDataHandle, FontNames};
use crate::font::rasterizer::FontRasterizer;
pub use crate::font::rasterizer::RasterizedGlyph;

#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("failed to initialize the font engine")]
    Init(#[source] freetype::Error),
    #[error("failed to open face {index} from {len} bytes of font data")]
    NewFace {
        index: u32,
        len: usize,
        #[source]
        source: freetype::Error,
    },
    #[error("font data is empty")]
    Empty,
    #[error("glyph bitmap is not 8-bit gray or 1-bit mono")]
    UnsupportedPixelMode,
    #[error("cannot read the font name table")]
    Names(#[source] ttf_parser::FaceParsingError),
}

/// The font engine handle. Dropping it shuts the engine down once every
/// font loaded through it is gone.
pub struct FontEngine {
    lib: Rc<ftwrap::Library>,
    config: Config,
}

impl FontEngine {
    pub fn new() -> Result<Self> {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Result<Self> {
        let lib = ftwrap::Library::new().context("initializing font engine")?;
        Ok(Self { lib: Rc::new(lib), config: config.clone() })
    }

    /// Loads face 0 from an in-memory font file.
    pub fn load_font<T: Into<Rc<Vec<u8>>>>(&self, data: T) -> Result<TtfFont> {
        self.load_handle(&FontDataHandle::new(data, 0))
    }

    pub fn load_font_file<P: AsRef<Path>>(&self, path: P) -> Result<TtfFont> {
        let handle = FontDataHandle::from_path(path.as_ref())?;
        self.load_handle(&handle).with_context(|| format!("loading {}", path.as_ref().display()))
    }

    pub fn load_handle(&self, handle: &FontDataHandle) -> Result<TtfFont> {
        let face = self.lib.new_face(handle)?;
        let names = match FontNames::from_handle(handle) {
            Ok(names) => Some(names),
            Err(err) => {
                log::debug!("font names unavailable: {:#}", err);
                None
            }
        };
        let font = TtfFont::from_rasterizer(rasterizer::new_rasterizer(face))
            .with_names(names)
            .with_fallback_font_size(self.config.fallback_font_size)
            .with_glyph_cache(self.config.glyph_cache);
        log::debug!(
            "loaded {} ({} bytes, kerning: {})",
            font.display_name(),
            handle.data.len(),
            font.has_kerning()
        );
        Ok(font)
    }
}

/// A loaded font face. Dropping it releases the face.
pub struct TtfFont {
    rasterizer: Box<dyn FontRasterizer>,
    kerning: bool,
    names: Option<FontNames>,
    fallback_font_size: u32,
    cache: Option<RefCell<GlyphCache>>,
}

impl TtfFont {
    pub fn from_rasterizer(rasterizer: Box<dyn FontRasterizer>) -> Self {
        let kerning = rasterizer.has_kerning();
        Self {
            rasterizer,
            kerning,
            names: None,
            fallback_font_size: Config::default().fallback_font_size,
            cache: None,
        }
    }

    pub fn with_names(mut self, names: Option<FontNames>) -> Self {
        self.names = names;
        self
    }

    pub fn with_fallback_font_size(mut self, pixel_height: u32) -> Self {
        self.fallback_font_size = pixel_height;
        self
    }

    /// Keeps every rasterized glyph per pixel size until
    /// [`TtfFont::clear_glyph_cache`] is called or the font is dropped.
    pub fn with_glyph_cache(mut self, enabled: bool) -> Self {
        self.cache = if enabled { Some(RefCell::new(GlyphCache::new())) } else { None };
        self
    }

    pub fn has_kerning(&self) -> bool {
        self.kerning
    }

    pub fn names(&self) -> Option<&FontNames> {
        self.names.as_ref()
    }

    pub fn display_name(&self) -> &str {
        self.names.as_ref().map_or("<unnamed>", FontNames::display_name)
    }

    pub fn cached_glyphs(&self) -> usize {
        self.cache.as_ref().map_or(0, |cache| cache.borrow().len())
    }

    pub fn clear_glyph_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.borrow_mut().clear();
        }
    }

    pub(crate) fn rasterizer(&self) -> &dyn FontRasterizer {
        self.rasterizer.as_ref()
    }

    pub(crate) fn fallback_font_size(&self) -> u32 {
        self.fallback_font_size
    }

    /// `pixel_size` is `None` when the face size is unknown; such glyphs
    /// bypass the cache.
    pub(crate) fn glyph(
        &self,
        glyph_index: u32,
        pixel_size: Option<u32>,
    ) -> Result<Rc<RasterizedGlyph>> {
        match (&self.cache, pixel_size) {
            (Some(cache), Some(pixel_size)) => cache
                .borrow_mut()
                .get_glyph(self.rasterizer.as_ref(), GlyphKey { glyph_index, pixel_size }),
            _ => Ok(Rc::new(self.rasterizer.rasterize(glyph_index)?)),
        }
    }
}
