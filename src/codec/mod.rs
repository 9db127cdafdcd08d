//! Persistence codec: JSON encoding of palette lists in the current shape and
//! decoding of both the current and the legacy on-disk shapes.
//!
//! # Decode strategy
//!
//! Each on-disk shape has its own record type ([`CurrentRecord`],
//! [`LegacyRecord`]). Decoding produces a list of [`DecodedPalette`], a tagged
//! union over the two, which is then normalised into the single in-memory
//! [`Palette`] type. Callers pick the shape with [`Format`] and go through
//! [`load_palettes`] / [`read_palettes`]; there is no auto-detection.

pub mod current;
pub mod import_text;
pub mod legacy;

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::model::Palette;

pub use current::CurrentRecord;
pub use legacy::LegacyRecord;

/// Which on-disk shape a file is expected to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `[{ "name": ..., "colors": [{ "name": ..., "hex": ... }] }]`
    Current,
    /// `[{ "name": ..., "colors" | "colorHexCodes": ["#RRGGBB", ...] }]`
    Legacy,
}

impl Format {
    pub fn label(self) -> &'static str {
        match self {
            Format::Current => "Palettes",
            Format::Legacy => "Legacy Palettes",
        }
    }
}

/// One palette as read from disk, before normalisation.
#[derive(Debug)]
pub enum DecodedPalette {
    Current(CurrentRecord),
    Legacy(LegacyRecord),
}

impl DecodedPalette {
    pub fn into_palette(self) -> Palette {
        match self {
            DecodedPalette::Current(record) => record.into_palette(),
            DecodedPalette::Legacy(record) => record.into_palette(),
        }
    }
}

/// Parse `text` as a JSON array of palettes in the given shape.
///
/// A top-level `null` decodes to an empty list.
pub fn decode(text: &str, format: Format) -> Result<Vec<DecodedPalette>> {
    let decoded = match format {
        Format::Current => serde_json::from_str::<Option<Vec<CurrentRecord>>>(text)?
            .unwrap_or_default()
            .into_iter()
            .map(DecodedPalette::Current)
            .collect(),
        Format::Legacy => serde_json::from_str::<Option<Vec<LegacyRecord>>>(text)?
            .unwrap_or_default()
            .into_iter()
            .map(DecodedPalette::Legacy)
            .collect(),
    };
    Ok(decoded)
}

fn normalise(decoded: Vec<DecodedPalette>) -> Vec<Palette> {
    decoded
        .into_iter()
        .map(DecodedPalette::into_palette)
        .collect()
}

/// The single loader entry point: decode `text` in the given shape.
pub fn load_palettes(text: &str, format: Format) -> Result<Vec<Palette>> {
    match format {
        Format::Current => deserialize(text),
        Format::Legacy => deserialize_legacy(text),
    }
}

/// Pretty-printed JSON in the current shape.
pub fn serialize(palettes: &[Palette]) -> Result<String> {
    Ok(serde_json::to_string_pretty(palettes)?)
}

pub fn deserialize(text: &str) -> Result<Vec<Palette>> {
    Ok(normalise(decode(text, Format::Current)?))
}

pub fn deserialize_legacy(text: &str) -> Result<Vec<Palette>> {
    Ok(normalise(decode(text, Format::Legacy)?))
}

pub fn read_palettes(path: &Path, format: Format) -> Result<Vec<Palette>> {
    let text = fs::read_to_string(path)?;
    load_palettes(&text, format)
}

pub fn write_palettes(path: &Path, palettes: &[Palette]) -> Result<()> {
    let text = serialize(palettes)?;
    fs::write(path, text)?;
    Ok(())
}
