//! Hand-built title bar for the undecorated main window.
//!
//! Dragging works from the press point: on press the pointer's position
//! inside the window is remembered, and on every drag event the window is
//! moved so that this point stays under the pointer's screen position.

use eframe::egui::{
    self, Align, Layout, Pos2, RichText, Sense, TextureHandle, TextureOptions, ViewportCommand,
};

use super::colors;
use super::icon;

pub const TITLE: &str = "Color Palette Viewer";
pub const HEIGHT: f32 = 64.0;

/// Press point inside the window, captured when a drag starts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragOffset {
    press: Option<Pos2>,
}

impl DragOffset {
    pub fn press(&mut self, window_pos: Pos2) {
        self.press = Some(window_pos);
    }

    pub fn release(&mut self) {
        self.press = None;
    }

    /// New window origin for a pointer now at `screen_pos`.
    pub fn drag_to(&self, screen_pos: Pos2) -> Option<Pos2> {
        self.press.map(|p| screen_pos - p.to_vec2())
    }
}

#[derive(Default)]
pub struct TitleBar {
    drag: DragOffset,
    icon: Option<TextureHandle>,
}

impl TitleBar {
    /// Draw the bar. Returns `true` when the close button was clicked.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        let mut close = false;
        let icon = self
            .icon
            .get_or_insert_with(|| {
                ctx.load_texture("app_icon", icon::icon_image(), TextureOptions::LINEAR)
            })
            .clone();

        egui::TopBottomPanel::top("title_bar")
            .exact_height(HEIGHT)
            .frame(
                egui::Frame::new()
                    .fill(colors::TITLE_BAR_FILL)
                    .inner_margin(egui::Margin::symmetric(10, 0)),
            )
            .show(ctx, |ui| {
                let bar =
                    ui.interact(ui.max_rect(), ui.id().with("drag"), Sense::click_and_drag());
                self.handle_drag(ctx, &bar);
                if bar.double_clicked() {
                    toggle_maximized(ctx);
                }

                ui.horizontal_centered(|ui| {
                    ui.add(egui::Image::new(&icon).fit_to_exact_size(egui::vec2(HEIGHT, HEIGHT)));
                    ui.label(RichText::new(TITLE).size(16.0).strong());

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let close_label = RichText::new("✕").strong().color(colors::CLOSE_BUTTON);
                        if control_button(ui, close_label).clicked() {
                            close = true;
                        }
                        if control_button(ui, RichText::new("□").strong()).clicked() {
                            toggle_maximized(ctx);
                        }
                        if control_button(ui, RichText::new("_").strong()).clicked() {
                            ctx.send_viewport_cmd(ViewportCommand::Minimized(true));
                        }
                    });
                });
            });
        close
    }

    fn handle_drag(&mut self, ctx: &egui::Context, bar: &egui::Response) {
        if bar.drag_started() {
            if let Some(pos) = ctx.input(|i| i.pointer.press_origin()) {
                self.drag.press(pos);
            }
        } else if bar.dragged() {
            let origin = ctx.input(|i| i.viewport().outer_rect.map(|r| r.min));
            if let (Some(origin), Some(pointer)) = (origin, bar.interact_pointer_pos()) {
                let screen = origin + pointer.to_vec2();
                if let Some(target) = self.drag.drag_to(screen) {
                    ctx.send_viewport_cmd(ViewportCommand::OuterPosition(target));
                }
            }
        } else if bar.drag_stopped() {
            self.drag.release();
        }
    }
}

fn control_button(ui: &mut egui::Ui, label: RichText) -> egui::Response {
    ui.add(egui::Button::new(label).frame(false))
}

fn toggle_maximized(ctx: &egui::Context) {
    let maximized = ctx.input(|i| i.viewport().maximized.unwrap_or(false));
    ctx.send_viewport_cmd(ViewportCommand::Maximized(!maximized));
}
