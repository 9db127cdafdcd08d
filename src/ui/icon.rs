//! Procedurally drawn application icon: a 4x4 grid of swatches.

use std::sync::Arc;

use eframe::egui::{self, IconData};

use super::colors::ICON_SWATCHES;

pub const ICON_SIZE: usize = 64;
const CELLS: usize = 4;
const GAP: usize = 2;

/// RGBA pixels of the icon; gaps between swatches are transparent.
pub fn icon_rgba() -> Vec<u8> {
    let cell = ICON_SIZE / CELLS;
    let mut rgba = vec![0u8; ICON_SIZE * ICON_SIZE * 4];
    for y in 0..ICON_SIZE {
        for x in 0..ICON_SIZE {
            let (cx, cy) = (x / cell, y / cell);
            let (ix, iy) = (x % cell, y % cell);
            if ix < GAP / 2 || ix >= cell - GAP / 2 || iy < GAP / 2 || iy >= cell - GAP / 2 {
                continue;
            }
            let color = ICON_SWATCHES[cy * CELLS + cx];
            let offset = (y * ICON_SIZE + x) * 4;
            rgba[offset..offset + 4].copy_from_slice(&color.to_array());
        }
    }
    rgba
}

pub fn app_icon() -> Arc<IconData> {
    Arc::new(IconData {
        rgba: icon_rgba(),
        width: ICON_SIZE as u32,
        height: ICON_SIZE as u32,
    })
}

pub fn icon_image() -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied([ICON_SIZE, ICON_SIZE], &icon_rgba())
}
