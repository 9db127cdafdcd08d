//! Static UI colors and the swatch set used to draw the application icon.

use egui::Color32;
use once_cell::sync::Lazy;

pub const TITLE_BAR_FILL: Color32 = Color32::from_rgb(0xf0, 0xf0, 0xf0);
pub const CLOSE_BUTTON: Color32 = Color32::from_rgb(0xe8, 0x11, 0x23);
pub const SWATCH_BORDER: Color32 = Color32::LIGHT_GRAY;
pub const HOVER_HIGHLIGHT: Color32 = Color32::from_rgb(0xe4, 0xad, 0xe6);

/// 4x4 grid of icon swatches, row by row.
pub static ICON_SWATCHES: Lazy<Vec<Color32>> = Lazy::new(|| {
    vec![
        Color32::from_rgb(230, 57, 70),
        Color32::from_rgb(244, 162, 97),
        Color32::from_rgb(233, 196, 106),
        Color32::from_rgb(138, 201, 38),
        Color32::from_rgb(42, 157, 143),
        Color32::from_rgb(38, 70, 83),
        Color32::from_rgb(69, 123, 157),
        Color32::from_rgb(168, 218, 220),
        Color32::from_rgb(106, 76, 147),
        Color32::from_rgb(181, 101, 167),
        Color32::from_rgb(255, 202, 212),
        Color32::from_rgb(255, 255, 255),
        Color32::from_rgb(0, 0, 0),
        Color32::from_rgb(73, 80, 87),
        Color32::from_rgb(173, 181, 189),
        Color32::from_rgb(248, 249, 250),
    ]
});
