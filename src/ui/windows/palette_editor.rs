//! Add/Edit palette dialog: a palette name plus a staging list of entries
//! built up through add, update and remove actions.

use egui::{Sense, Vec2};
use egui_extras::{Column, TableBuilder};

use crate::model::{Entry, Palette, Rgb};
use crate::ui::window::{AppDialog, DialogOutcome, modal_frame};

/// Whether the color fields create a new entry or rewrite a staged one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Idle,
    /// Index into the staging list of the entry being edited.
    Editing(usize),
}

pub struct PaletteEditor {
    title: &'static str,
    header: &'static str,
    confirm_label: &'static str,

    palette_name: String,
    staging: Vec<Entry>,

    // ── Entry fields ───────────────────────────────────────────────────────
    picker: [u8; 3],
    entry_name: String,
    mode: EditMode,
    focused: bool,
}

impl PaletteEditor {
    pub fn for_add() -> Self {
        Self {
            title: "Add Color Palette",
            header: "Create a new color palette",
            confirm_label: "Add",
            palette_name: String::new(),
            staging: Vec::new(),
            picker: Rgb::RED.to_array(),
            entry_name: String::new(),
            mode: EditMode::Idle,
            focused: false,
        }
    }

    /// Pre-filled with `palette`'s name and entries.
    pub fn for_edit(palette: &Palette) -> Self {
        Self {
            title: "Edit Color Palette",
            header: "Edit the color palette",
            confirm_label: "Save",
            palette_name: palette.name().to_string(),
            staging: palette.entries().to_vec(),
            ..Self::for_add()
        }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn staging(&self) -> &[Entry] {
        &self.staging
    }

    pub fn set_fields(&mut self, color: Rgb, name: impl Into<String>) {
        self.picker = color.to_array();
        self.entry_name = name.into();
    }

    /// Selecting a staged entry loads it into the fields and switches to
    /// `Editing`; `None` (or a stale index) goes back to `Idle`.
    pub fn select(&mut self, index: Option<usize>) {
        match index.and_then(|i| self.staging.get(i).map(|e| (i, e.clone()))) {
            Some((i, entry)) => {
                self.set_fields(entry.color, entry.name);
                self.mode = EditMode::Editing(i);
            }
            None => self.mode = EditMode::Idle,
        }
    }

    pub fn action_label(&self) -> &'static str {
        match self.mode {
            EditMode::Idle => "Add Color",
            EditMode::Editing(_) => "Update Color",
        }
    }

    /// Add a new entry or update the selected one from the fields. A blank
    /// name falls back to the hex code. Updating returns to `Idle`.
    pub fn submit_entry(&mut self) {
        let entry = Entry::with_fallback_name(Rgb::from(self.picker), &self.entry_name);
        match self.mode {
            EditMode::Editing(i) if i < self.staging.len() => self.staging[i] = entry,
            _ => self.staging.push(entry),
        }
        self.mode = EditMode::Idle;
        self.entry_name.clear();
    }

    /// Remove the selected entry, if any, and return to `Idle`.
    pub fn remove_selected(&mut self) {
        if let EditMode::Editing(i) = self.mode {
            if i < self.staging.len() {
                self.staging.remove(i);
            }
            self.mode = EditMode::Idle;
            self.entry_name.clear();
        }
    }

    /// `(palette name, entries)` as entered. Validation is the caller's job.
    pub fn result(&self) -> (String, Vec<Entry>) {
        (self.palette_name.clone(), self.staging.clone())
    }

    fn staging_table(&mut self, ui: &mut egui::Ui) {
        let mut clicked = None;
        TableBuilder::new(ui)
            .striped(true)
            .max_scroll_height(220.0)
            .column(Column::exact(56.0))
            .column(Column::remainder().at_least(120.0))
            .column(Column::exact(72.0))
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Color");
                });
                header.col(|ui| {
                    ui.strong("Name");
                });
                header.col(|ui| {
                    ui.strong("Hex");
                });
            })
            .body(|mut body| {
                for (i, entry) in self.staging().iter().enumerate() {
                    let selected = self.mode == EditMode::Editing(i);
                    body.row(22.0, |mut row| {
                        row.col(|ui| {
                            let (rect, _) =
                                ui.allocate_exact_size(Vec2::new(50.0, 18.0), Sense::hover());
                            ui.painter().rect_filled(rect, 2.0, entry.color.to_color32());
                        });
                        row.col(|ui| {
                            if ui.selectable_label(selected, entry.name.as_str()).clicked() {
                                clicked = Some(if selected { None } else { Some(i) });
                            }
                        });
                        row.col(|ui| {
                            ui.monospace(entry.color.to_hex());
                        });
                    });
                }
            });
        if let Some(selection) = clicked {
            self.select(selection);
        }
    }
}

impl AppDialog for PaletteEditor {
    type Output = (String, Vec<Entry>);

    fn title(&self) -> &str {
        self.title
    }

    fn show(&mut self, ctx: &egui::Context) -> DialogOutcome<Self::Output> {
        let (title, header, confirm_label) = (self.title, self.header, self.confirm_label);
        modal_frame(ctx, title, header, confirm_label, true, |ui| {
            egui::Grid::new("palette_editor_fields")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Palette name:");
                    let name_field = ui.text_edit_singleline(&mut self.palette_name);
                    if !self.focused {
                        name_field.request_focus();
                        self.focused = true;
                    }
                    ui.end_row();

                    ui.label("Color:");
                    ui.color_edit_button_srgb(&mut self.picker);
                    ui.end_row();

                    ui.label("Color name:");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.entry_name)
                            .hint_text("defaults to the hex code"),
                    );
                    ui.end_row();
                });

            ui.horizontal(|ui| {
                if ui.button(self.action_label()).clicked() {
                    self.submit_entry();
                }
                let can_remove = matches!(self.mode(), EditMode::Editing(_));
                if ui
                    .add_enabled(can_remove, egui::Button::new("Remove Selected"))
                    .clicked()
                {
                    self.remove_selected();
                }
            });

            ui.add_space(6.0);
            self.staging_table(ui);
        })
        .map(|()| self.result())
    }
}
