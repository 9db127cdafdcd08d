//! Shared serialization/deserialization helpers for hex color strings.

use std::fmt;

use serde::{
    Deserializer, Serializer, de,
    de::{Error, Visitor},
};

use crate::model::Rgb;

// ── Rgb to "#RRGGBB" ───────────────────────────────────────────────────────────

/// Serialize an [`Rgb`] as its uppercase `#RRGGBB` string.
pub fn serialize_hex<S>(color: &Rgb, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&color.to_hex())
}

// ── Rgb from hex string ────────────────────────────────────────────────────────

struct HexVisitor;

impl Visitor<'_> for HexVisitor {
    type Value = Rgb;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a web hex color string such as \"#RRGGBB\"")
    }

    fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Rgb::parse_hex(s).ok_or_else(|| Error::custom(format!("invalid hex color: {s}")))
    }
}

// ── Option<Rgb> from optional hex string ──────────────────────────────────────

struct OptionHexVisitor;

impl<'de> Visitor<'de> for OptionHexVisitor {
    type Value = Option<Rgb>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an optional web hex color string")
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(None)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(HexVisitor).map(Some)
    }
}

/// Deserialize an optional hex string. `null` → `None`; malformed hex is an error.
pub fn deserialize_hex_opt<'de, D>(deserializer: D) -> Result<Option<Rgb>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(OptionHexVisitor)
}

// ── Path helpers ──────────────────────────────────────────────────────────────

/// Last path component for user-facing messages, falling back to the full path.
pub fn display_file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
