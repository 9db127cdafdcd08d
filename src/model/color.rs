//! 8-bit RGB color values and web hex notation.
//!
//! Parsing accepts the usual web forms: an optional `#` (or `0x`) prefix
//! followed by `RGB`, `RGBA`, `RRGGBB` or `RRGGBBAA` hex digits. Alpha is
//! read and discarded; palettes only ever persist the three color channels.

use std::fmt;
use std::str::FromStr;

use eframe::egui::Color32;

use crate::error::AppError;

/// A color as three 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase `#RRGGBB` rendering, also the default display name of an entry.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse web hex notation. Returns `None` for anything else.
    pub fn parse_hex(s: &str) -> Option<Self> {
        let s = s.trim();
        let digits = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s)
            .as_bytes();

        match digits.len() {
            // RGB / RGBA
            3 | 4 => {
                let r = hex_digit(digits[0])?;
                let g = hex_digit(digits[1])?;
                let b = hex_digit(digits[2])?;
                if digits.len() == 4 {
                    hex_digit(digits[3])?;
                }
                Some(Self::new(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            // RRGGBB / RRGGBBAA
            6 | 8 => {
                let r = hex_byte(&digits[0..2])?;
                let g = hex_byte(&digits[2..4])?;
                let b = hex_byte(&digits[4..6])?;
                if digits.len() == 8 {
                    hex_byte(&digits[6..8])?;
                }
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }

    pub fn to_color32(self) -> Color32 {
        Color32::from_rgb(self.r, self.g, self.b)
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl FromStr for Rgb {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s).ok_or_else(|| AppError::InvalidColor(s.trim().to_string()))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

const fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = hex_digit(bytes[0])?;
    let lo = hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_red_renders_as_uppercase_hex() {
        assert_eq!(Rgb::new(255, 0, 0).to_hex(), "#FF0000");
        assert_eq!(Rgb::new(0xab, 0x0c, 0xde).to_string(), "#AB0CDE");
    }

    #[test]
    fn parses_long_and_short_forms() {
        assert_eq!(Rgb::parse_hex("#112233"), Some(Rgb::new(0x11, 0x22, 0x33)));
        assert_eq!(Rgb::parse_hex("#abc"), Some(Rgb::new(0xaa, 0xbb, 0xcc)));
        assert_eq!(Rgb::parse_hex("  00ff00 "), Some(Rgb::new(0, 255, 0)));
        assert_eq!(Rgb::parse_hex("0x0000FF"), Some(Rgb::new(0, 0, 255)));
    }

    #[test]
    fn alpha_is_accepted_and_dropped() {
        assert_eq!(Rgb::parse_hex("#11223344"), Some(Rgb::new(0x11, 0x22, 0x33)));
        assert_eq!(Rgb::parse_hex("#f008"), Some(Rgb::new(255, 0, 0)));
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "#", "not-a-color", "#12", "#12345", "#GGGGGG", "#1234567"] {
            assert_eq!(Rgb::parse_hex(bad), None, "{bad:?} should not parse");
        }
    }

    #[test]
    fn from_str_error_names_the_token() {
        let err = " #zzz ".parse::<Rgb>().unwrap_err();
        assert!(matches!(err, AppError::InvalidColor(ref t) if t == "#zzz"));
    }
}
