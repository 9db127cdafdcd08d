//! Import dialog: freeform palette text. Parsing happens in the workspace.

use crate::ui::window::{AppDialog, DialogOutcome, modal_frame};

const EXAMPLE: &str = "My Palette\n#FF5733\n#33FF57\n#3357FF";

#[derive(Default)]
pub struct ImportView {
    text: String,
    focused: bool,
}

impl AppDialog for ImportView {
    type Output = String;

    fn title(&self) -> &str {
        "Import Color Palette"
    }

    fn show(&mut self, ctx: &egui::Context) -> DialogOutcome<String> {
        modal_frame(
            ctx,
            "Import Color Palette",
            "Import a color palette from text",
            "Import",
            true,
            |ui| {
                ui.label("First line: palette name. Following lines: one hex color each.");
                ui.label(egui::RichText::new(EXAMPLE).monospace().weak());
                ui.add_space(4.0);
                let area = ui.add(
                    egui::TextEdit::multiline(&mut self.text)
                        .code_editor()
                        .desired_rows(10)
                        .desired_width(f32::INFINITY),
                );
                if !self.focused {
                    area.request_focus();
                    self.focused = true;
                }
            },
        )
        .map(|()| self.text.clone())
    }
}
