use crate::color::Color;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    /// Pixel size used when the engine rejects the requested one.
    #[serde(default = "default_fallback_font_size")]
    pub fallback_font_size: u32,
    #[serde(default = "default_color")]
    pub color: Color,
    #[serde(default)]
    pub glyph_cache: bool,
}

fn default_font_size() -> u32 {
    24
}

fn default_fallback_font_size() -> u32 {
    12
}

fn default_color() -> Color {
    Color::WHITE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            fallback_font_size: default_fallback_font_size(),
            color: default_color(),
            glyph_cache: false,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => return Ok(Config::default()),
        };
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Config::parse(&data).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(data: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(data)?;
        log::debug!("loaded {:?}", config);
        Ok(config)
    }
}
