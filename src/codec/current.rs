//! Current on-disk shape: palettes of named hex colors.

use serde::Deserialize;

use crate::model::{Entry, Palette, Rgb};

/// `{ "name": string, "colors": [ { "name": string, "hex": "#RRGGBB" } ] }`
#[derive(Debug, Deserialize)]
pub struct CurrentRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub colors: Option<Vec<ColorRecord>>,
}

/// A single `{ "name", "hex" }` pair. A malformed `hex` fails the whole decode.
#[derive(Debug, Deserialize)]
pub struct ColorRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::utils::deserialize_hex_opt")]
    pub hex: Option<Rgb>,
}

impl CurrentRecord {
    /// Entries without a `hex` are dropped; entries with a missing or blank
    /// `name` are named after their hex code.
    pub fn into_palette(self) -> Palette {
        let entries = self
            .colors
            .unwrap_or_default()
            .into_iter()
            .filter_map(|c| {
                let color = c.hex?;
                Some(match c.name {
                    Some(name) => Entry::with_fallback_name(color, &name),
                    None => Entry::unnamed(color),
                })
            })
            .collect();
        Palette::with_entries(self.name.unwrap_or_default(), entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::deserialize;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_fields_are_tolerated() {
        let text = r##"[
            { "name": "A", "colors": [ { "hex": "#010203" }, { "name": "orphan" } ] },
            { "name": "B" }
        ]"##;
        let palettes = deserialize(text).unwrap();
        assert_eq!(
            palettes,
            vec![
                Palette::with_entries("A", vec![Entry::new(Rgb::new(1, 2, 3), "#010203")]),
                Palette::new("B"),
            ]
        );
    }

    #[test]
    fn blank_names_fall_back_to_hex() {
        let text = r##"[{ "name": "A", "colors": [
            { "name": "", "hex": "#010203" },
            { "name": "   ", "hex": "#0A0B0C" },
            { "name": " Sky ", "hex": "#0000FF" }
        ] }]"##;
        let palettes = deserialize(text).unwrap();
        let names: Vec<&str> = palettes[0].entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["#010203", "#0A0B0C", "Sky"]);
    }

    #[test]
    fn bad_hex_fails_the_whole_document() {
        let text = r##"[{ "name": "A", "colors": [ { "name": "x", "hex": "#nothex" } ] }]"##;
        assert!(deserialize(text).is_err());
    }
}
