//! Data model: colors, entries and palettes.

pub mod color;
pub mod palette;

pub use color::Rgb;
pub use palette::{Entry, Palette};
