//! The palette data model: a name plus an ordered list of named colors.
//!
//! The model performs no validation. Name uniqueness and non-emptiness are
//! enforced by [`crate::engine::workspace::Workspace`].
#![allow(dead_code)]

use serde::Serialize;

use super::color::Rgb;

/// One color within a palette together with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub name: String,
    #[serde(rename = "hex", serialize_with = "crate::utils::serialize_hex")]
    pub color: Rgb,
}

impl Entry {
    pub fn new(color: Rgb, name: impl Into<String>) -> Self {
        Self {
            color,
            name: name.into(),
        }
    }

    /// Entry named after its own hex code.
    pub fn unnamed(color: Rgb) -> Self {
        Self::new(color, color.to_hex())
    }

    /// Entry with `name` if it is non-blank, otherwise the hex code.
    pub fn with_fallback_name(color: Rgb, name: &str) -> Self {
        let name = name.trim();
        if name.is_empty() {
            Self::unnamed(color)
        } else {
            Self::new(color, name)
        }
    }
}

/// A named, ordered collection of color entries.
///
/// Serializes to the current on-disk shape:
/// `{ "name": ..., "colors": [ { "name": ..., "hex": "#RRGGBB" } ] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    name: String,
    #[serde(rename = "colors")]
    entries: Vec<Entry>,
}

impl Palette {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_entries(name, Vec::new())
    }

    pub fn with_entries(name: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// Palette whose entries are all named after their hex codes.
    pub fn from_colors(name: impl Into<String>, colors: impl IntoIterator<Item = Rgb>) -> Self {
        Self::with_entries(name, colors.into_iter().map(Entry::unnamed).collect())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn set_entries(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
    }

    pub fn colors(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.entries.iter().map(|e| e.color)
    }

    /// Append a color; a missing name falls back to the hex code.
    pub fn add_entry(&mut self, color: Rgb, name: Option<&str>) {
        let entry = match name {
            Some(name) => Entry::with_fallback_name(color, name),
            None => Entry::unnamed(color),
        };
        self.entries.push(entry);
    }

    /// Remove the first entry with an equal color. Returns whether one was removed.
    pub fn remove_entry(&mut self, color: Rgb) -> bool {
        match self.entries.iter().position(|e| e.color == color) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    #[test]
    fn add_entry_defaults_name_to_hex() {
        let mut p = Palette::new("Warm");
        p.add_entry(RED, None);
        p.add_entry(BLUE, Some("   "));
        p.add_entry(BLUE, Some("Sky"));

        let names: Vec<&str> = p.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["#FF0000", "#0000FF", "Sky"]);
        assert_eq!(p.count(), 3);
    }

    #[test]
    fn remove_entry_drops_only_first_match() {
        let mut p = Palette::from_colors("P", [RED, BLUE, RED]);
        assert!(p.remove_entry(RED));
        assert_eq!(p.colors().collect::<Vec<_>>(), vec![BLUE, RED]);
        assert!(!p.remove_entry(Rgb::new(1, 2, 3)));
        assert_eq!(p.count(), 2);
    }

    #[test]
    fn rename_and_set_entries_replace_in_place() {
        let mut p = Palette::from_colors("Old", [RED]);
        p.rename("New");
        p.set_entries(vec![Entry::new(BLUE, "Deep")]);
        assert_eq!(p.name(), "New");
        assert_eq!(p.entries(), &[Entry::new(BLUE, "Deep")]);
    }
}
