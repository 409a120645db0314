use crate::font::FontError;
use anyhow::{Context, Result};
use std::path::Path;
use std::rc::Rc;

pub mod parser;

pub use parser::FontNames;

/// Font bytes shared between the caller and every face opened over them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontDataHandle {
    pub data: Rc<Vec<u8>>,
    pub index: u32,
}

impl FontDataHandle {
    pub fn new<T: Into<Rc<Vec<u8>>>>(data: T, index: u32) -> Self {
        Self { data: data.into(), index }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let data =
            std::fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
        if data.is_empty() {
            return Err(FontError::Empty.into());
        }
        Ok(Self::new(data, 0))
    }
}
