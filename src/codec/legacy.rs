//! Legacy on-disk shape: palettes stored as flat lists of hex strings.
//!
//! Two field names were used over time for the list, `colors` and
//! `colorHexCodes`. Tokens that do not parse are skipped, not fatal.

use serde::Deserialize;

use crate::model::{Palette, Rgb};

/// `{ "name": string, "colors": [hex, ...] }` or
/// `{ "name": string, "colorHexCodes": [hex, ...] }`
#[derive(Debug, Deserialize)]
pub struct LegacyRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    #[serde(default, rename = "colorHexCodes")]
    pub color_hex_codes: Option<Vec<String>>,
}

impl LegacyRecord {
    /// `colors` wins when present and non-empty, otherwise `colorHexCodes`.
    fn hex_codes(&self) -> &[String] {
        match (&self.colors, &self.color_hex_codes) {
            (Some(colors), _) if !colors.is_empty() => colors.as_slice(),
            (_, Some(codes)) => codes.as_slice(),
            _ => &[],
        }
    }

    pub fn into_palette(self) -> Palette {
        let colors: Vec<Rgb> = self
            .hex_codes()
            .iter()
            .filter_map(|hex| {
                let parsed = Rgb::parse_hex(hex);
                if parsed.is_none() {
                    log::warn!("Invalid color format: {hex}");
                }
                parsed
            })
            .collect();
        Palette::from_colors(self.name.unwrap_or_default(), colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::deserialize_legacy;
    use crate::model::Entry;
    use pretty_assertions::assert_eq;

    #[test]
    fn invalid_tokens_are_skipped() {
        let text = r##"[{"name":"X","colorHexCodes":["#112233","not-a-color"]}]"##;
        let palettes = deserialize_legacy(text).unwrap();
        assert_eq!(
            palettes,
            vec![Palette::with_entries(
                "X",
                vec![Entry::new(Rgb::new(0x11, 0x22, 0x33), "#112233")]
            )]
        );
    }

    #[test]
    fn colors_field_takes_precedence_when_non_empty() {
        let text = r##"[
            {"name":"A","colors":["#000"],"colorHexCodes":["#FFFFFF"]},
            {"name":"B","colors":[],"colorHexCodes":["#FFFFFF"]},
            {"name":"C"}
        ]"##;
        let palettes = deserialize_legacy(text).unwrap();
        let hexes: Vec<Vec<String>> = palettes
            .iter()
            .map(|p| p.colors().map(Rgb::to_hex).collect())
            .collect();
        assert_eq!(
            hexes,
            vec![vec!["#000000".to_string()], vec!["#FFFFFF".to_string()], vec![]]
        );
    }
}
