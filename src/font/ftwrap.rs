use crate::font::loader::FontDataHandle;
use crate::font::FontError;
use anyhow::Result;
use freetype::face::{KerningMode, LoadFlag};
pub use freetype::{GlyphSlot, Vector};
use std::rc::Rc;

pub struct Library {
    lib: freetype::Library,
}

impl Library {
    pub fn new() -> Result<Library> {
        let lib = freetype::Library::init().map_err(FontError::Init)?;
        log::debug!("font engine initialized");
        Ok(Library { lib })
    }

    /// Opens a face over the handle's bytes; the face shares them, so they
    /// outlive it no matter what the caller does with its copy.
    pub fn new_face(self: &Rc<Self>, handle: &FontDataHandle) -> Result<Face> {
        let face = self
            .lib
            .new_memory_face(Rc::clone(&handle.data), handle.index as isize)
            .map_err(|source| FontError::NewFace {
                index: handle.index,
                len: handle.data.len(),
                source,
            })?;
        Ok(Face { face, _lib: Rc::clone(self) })
    }
}

impl Drop for Library {
    fn drop(&mut self) {
        log::debug!("font engine released");
    }
}

// Field order matters: the face is released before the library.
pub struct Face {
    face: freetype::Face,
    _lib: Rc<Library>,
}

impl Face {
    pub fn has_kerning(&self) -> bool {
        self.face.has_kerning()
    }

    pub fn set_pixel_size(&self, pixel_height: u32) -> Result<()> {
        self.face.set_pixel_sizes(0, pixel_height)?;
        Ok(())
    }

    pub fn char_index(&self, codepoint: u32) -> u32 {
        self.face.get_char_index(codepoint as usize).unwrap_or(0)
    }

    pub fn kerning(&self, left: u32, right: u32) -> Result<Vector> {
        Ok(self.face.get_kerning(left, right, KerningMode::KerningDefault)?)
    }

    pub fn load_and_render_glyph(&self, glyph_index: u32) -> Result<&GlyphSlot> {
        self.face.load_glyph(glyph_index, LoadFlag::RENDER)?;
        Ok(self.face.glyph())
    }
}
