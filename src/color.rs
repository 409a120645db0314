use serde::{self, Deserialize, Deserializer, Serialize, Serializer};
use std::result::Result;

/// A packed `0xRRGGBBAA` color word.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const WHITE: Color = Color(0xffff_ffff);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Color {
        Color::rgba(red, green, blue, 0xff)
    }

    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Color {
        Color((red as u32) << 24 | (green as u32) << 16 | (blue as u32) << 8 | alpha as u32)
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        self.0 as u8
    }

    pub fn as_rgba(self) -> (u8, u8, u8, u8) {
        (self.red(), self.green(), self.blue(), self.alpha())
    }

    pub fn with_alpha(self, alpha: u8) -> Color {
        Color((self.0 & 0xffff_ff00) | alpha as u32)
    }

    pub fn to_hex_string(self) -> String {
        format!("#{:08x}", self.0)
    }

    pub fn from_hex_str(s: &str) -> Option<Color> {
        let digits = s.strip_prefix('#').or_else(|| s.strip_prefix("0x"))?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            6 => u32::from_str_radix(digits, 16).ok().map(|rgb| Color(rgb << 8 | 0xff)),
            8 => u32::from_str_radix(digits, 16).ok().map(Color),
            _ => None,
        }
    }

    pub fn from_named(name: &str) -> Option<Color> {
        palette::named::from_str(&name.to_ascii_lowercase())
            .map(|color| Color::rgb(color.red, color.green, color.blue))
    }

    pub fn from_named_or_hex_string(s: &str) -> Option<Color> {
        Color::from_hex_str(s).or_else(|| Color::from_named(s))
    }
}

impl From<u32> for Color {
    fn from(word: u32) -> Color {
        Color(word)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_hex_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Color, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_named_or_hex_string(&s)
            .ok_or_else(|| format!("unknown color: {}", s))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_follow_rrggbbaa_order() {
        let c = Color(0x1234_5678);
        assert_eq!(c.as_rgba(), (0x12, 0x34, 0x56, 0x78));
        assert_eq!(Color::rgba(0x12, 0x34, 0x56, 0x78), c);
        assert_eq!(Color::rgb(1, 2, 3).alpha(), 0xff);
    }

    #[test]
    fn parses_hex_and_names() {
        assert_eq!(Color::from_hex_str("#ff000080"), Some(Color(0xff00_0080)));
        assert_eq!(Color::from_hex_str("0xFF000080"), Some(Color(0xff00_0080)));
        assert_eq!(Color::from_hex_str("#00ff00"), Some(Color(0x00ff_00ff)));
        assert_eq!(Color::from_hex_str("#00ff0"), None);
        assert_eq!(Color::from_hex_str("#+0ff00"), None);
        assert_eq!(Color::from_named_or_hex_string("Red"), Some(Color(0xff00_00ff)));
        assert_eq!(Color::from_named_or_hex_string("nope"), None);
    }

    #[test]
    fn serde_uses_hex_strings() {
        let c: Color = serde_json::from_str("\"#102030ff\"").unwrap();
        assert_eq!(c, Color(0x1020_30ff));
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#102030ff\"");
        assert!(serde_json::from_str::<Color>("\"mauve-ish\"").is_err());
    }

    #[test]
    fn with_alpha_keeps_rgb() {
        assert_eq!(Color(0xaabb_ccdd).with_alpha(0x11), Color(0xaabb_cc11));
    }
}
