//! Tab content for one palette: a near-square grid of labelled swatches.
//!
//! Each swatch shows an `RGB: #RRGGBB` tooltip on hover and a right-click
//! menu that copies the hex value or the display name to the clipboard.

use egui::{Sense, Stroke, StrokeKind, Vec2};

use crate::engine::grid::GridLayout;
use crate::model::{Entry, Palette};
use crate::ui::colors;

const SWATCH_SIZE: f32 = 128.0;
const BORDER_WIDTH: f32 = 5.0;

/// Something was copied from a swatch's context menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Copied {
    Hex(String),
    Name(String),
}

impl Copied {
    pub fn text(&self) -> &str {
        match self {
            Copied::Hex(s) | Copied::Name(s) => s,
        }
    }
}

/// Draw `palette` and return what the user copied this frame, if anything.
pub fn show(ui: &mut egui::Ui, palette: &Palette) -> Option<Copied> {
    let layout = GridLayout::for_count(palette.count());
    let mut copied = None;

    egui::ScrollArea::both()
        .id_salt(("palette_scroll", palette.name()))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new(("palette_grid", palette.name()))
                .spacing([8.0, 8.0])
                .show(ui, |ui| {
                    for row in 0..layout.rows {
                        let cells = palette
                            .entries()
                            .iter()
                            .skip(row * layout.columns)
                            .take(layout.columns);
                        for entry in cells {
                            if let Some(c) = swatch(ui, entry) {
                                copied = Some(c);
                            }
                        }
                        ui.end_row();
                    }
                });
        });

    if let Some(c) = &copied {
        ui.ctx().copy_text(c.text().to_string());
    }
    copied
}

fn swatch(ui: &mut egui::Ui, entry: &Entry) -> Option<Copied> {
    let hex = entry.color.to_hex();
    let mut copied = None;

    ui.vertical(|ui| {
        ui.set_width(SWATCH_SIZE);
        ui.add(egui::Label::new(egui::RichText::new(&entry.name).strong()).truncate());

        let (rect, response) =
            ui.allocate_exact_size(Vec2::splat(SWATCH_SIZE), Sense::click());
        let painter = ui.painter();
        if response.hovered() {
            painter.rect_filled(rect.expand(3.0), 4.0, colors::HOVER_HIGHLIGHT);
        }
        painter.rect_filled(rect, 0.0, entry.color.to_color32());
        painter.rect_stroke(
            rect,
            0.0,
            Stroke::new(BORDER_WIDTH, colors::SWATCH_BORDER),
            StrokeKind::Inside,
        );

        let response = response.on_hover_text(format!("RGB: {hex}"));
        response.context_menu(|ui| {
            if ui.button("Copy RGB Value").clicked() {
                copied = Some(Copied::Hex(hex.clone()));
                ui.close();
            }
            if ui.button("Copy Color Name").clicked() {
                copied = Some(Copied::Name(entry.name.clone()));
                ui.close();
            }
        });
    });

    copied
}
