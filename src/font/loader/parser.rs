use crate::font::loader::FontDataHandle;
use crate::font::FontError;
use anyhow::Result;
use ttf_parser::name_id;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FontNames {
    pub full_name: Option<String>,
    pub family: Option<String>,
    pub sub_family: Option<String>,
    pub postscript_name: Option<String>,
}

impl FontNames {
    pub fn from_handle(handle: &FontDataHandle) -> Result<FontNames> {
        let face = ttf_parser::Face::parse(&handle.data, handle.index).map_err(FontError::Names)?;
        let lookup = |id: u16| {
            face.names()
                .into_iter()
                .filter(|name| name.name_id == id)
                .find_map(|name| name.to_string())
        };

        Ok(FontNames {
            full_name: lookup(name_id::FULL_NAME),
            family: lookup(name_id::FAMILY),
            sub_family: lookup(name_id::SUBFAMILY),
            postscript_name: lookup(name_id::POST_SCRIPT_NAME),
        })
    }

    /// Best human readable label for logs.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .or(self.family.as_deref())
            .or(self.postscript_name.as_deref())
            .unwrap_or("<unnamed>")
    }
}
