//! Application orchestrator: owns the palette workspace and drives the
//! title bar, menu, palette tabs, dialogs and alerts.

use std::path::PathBuf;

use eframe::egui::{self, ViewportCommand};

use crate::codec::Format;
use crate::engine::workspace::{Notice, Workspace};
use crate::error::Result;
use crate::ui::alert::{Alert, AlertQueue};
use crate::ui::icon;
use crate::ui::platform::{self, NativePlatform};
use crate::ui::title_bar::TitleBar;
use crate::ui::window::{AppDialog, DialogOutcome};
use crate::ui::windows::{
    file_prompt::{FileAction, FilePrompt},
    import_view::ImportView,
    palette_editor::PaletteEditor,
    palette_view::{self, Copied},
};

const DEFAULT_FILE: &str = "palettes.json";

// ── Actions ──────────────────────────────────────────────────────────────────

/// Every palette-affecting action exposed by the menu and toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddPalette,
    EditPalette,
    ImportPalette,
    SavePalettes,
    LoadPalettes,
    LoadLegacyPalette,
    Quit,
}

impl Action {
    const PALETTE: [Action; 3] = [Action::AddPalette, Action::EditPalette, Action::ImportPalette];
    const FILE: [Action; 3] = [
        Action::SavePalettes,
        Action::LoadPalettes,
        Action::LoadLegacyPalette,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::AddPalette => "Add Palette",
            Action::EditPalette => "Edit Palette",
            Action::ImportPalette => "Import Palette",
            Action::SavePalettes => "Save Palettes",
            Action::LoadPalettes => "Load Palettes",
            Action::LoadLegacyPalette => "Load Legacy Palette",
            Action::Quit => "Quit",
        }
    }
}

/// The one dialog that may be open at a time.
enum ActiveDialog {
    /// `original` is the palette title being edited, `None` when adding.
    Editor {
        editor: PaletteEditor,
        original: Option<String>,
    },
    Import(ImportView),
    File(FilePrompt),
}

impl ActiveDialog {
    fn title(&self) -> &str {
        match self {
            ActiveDialog::Editor { editor, .. } => editor.title(),
            ActiveDialog::Import(view) => view.title(),
            ActiveDialog::File(prompt) => prompt.title(),
        }
    }
}

// ── App struct ───────────────────────────────────────────────────────────────

/// The top-level application, implementing [`eframe::App`].
///
/// All palette logic lives in [`Workspace`]; `App` only:
/// 1. Turns menu clicks into dialogs.
/// 2. Hands confirmed dialog results to the workspace.
/// 3. Reports every outcome through the alert queue.
pub struct App {
    workspace: Workspace,
    title_bar: TitleBar,
    alerts: AlertQueue,
    dialog: Option<ActiveDialog>,
    /// Last path used by a file prompt, offered again next time.
    last_path: PathBuf,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        platform::apply_dock_icon(&NativePlatform, &cc.egui_ctx, icon::app_icon());
        Self::empty()
    }

    /// Start-up state: no palettes open, nothing queued, default file path.
    fn empty() -> Self {
        Self {
            workspace: Workspace::new(),
            title_bar: TitleBar::default(),
            alerts: AlertQueue::default(),
            dialog: None,
            last_path: PathBuf::from(DEFAULT_FILE),
        }
    }

    // ── Outcome reporting ─────────────────────────────────────────────────────

    fn report(&mut self, res: Result<Notice>) {
        match res {
            Ok(notice) => self.alerts.push(notice),
            Err(e) => self.alerts.push(e),
        }
    }

    fn report_err(&mut self, res: Result<()>) {
        if let Err(e) = res {
            self.alerts.push(e);
        }
    }

    // ── Action dispatch ───────────────────────────────────────────────────────

    fn on_action(&mut self, ctx: &egui::Context, action: Action) {
        log::debug!("Action: {action:?}");
        match action {
            Action::AddPalette => {
                self.dialog = Some(ActiveDialog::Editor {
                    editor: PaletteEditor::for_add(),
                    original: None,
                });
            }
            Action::EditPalette => match self.workspace.edit_target() {
                Ok(palette) => {
                    self.dialog = Some(ActiveDialog::Editor {
                        editor: PaletteEditor::for_edit(palette),
                        original: Some(palette.name().to_string()),
                    });
                }
                Err(e) => self.alerts.push(e),
            },
            Action::ImportPalette => {
                self.dialog = Some(ActiveDialog::Import(ImportView::default()));
            }
            Action::SavePalettes => match self.workspace.ensure_saveable() {
                Ok(()) => self.open_file_prompt(FileAction::Save),
                Err(e) => self.alerts.push(e),
            },
            Action::LoadPalettes => self.open_file_prompt(FileAction::Load(Format::Current)),
            Action::LoadLegacyPalette => self.open_file_prompt(FileAction::Load(Format::Legacy)),
            Action::Quit => ctx.send_viewport_cmd(ViewportCommand::Close),
        }
    }

    fn open_file_prompt(&mut self, action: FileAction) {
        self.dialog = Some(ActiveDialog::File(FilePrompt::new(action, &self.last_path)));
    }

    // ── Dialogs ───────────────────────────────────────────────────────────────

    fn show_dialog(&mut self, ctx: &egui::Context) {
        let Some(mut dialog) = self.dialog.take() else {
            return;
        };

        let still_open = match &mut dialog {
            ActiveDialog::Editor { editor, original } => match editor.show(ctx) {
                DialogOutcome::Pending => true,
                DialogOutcome::Cancelled => false,
                DialogOutcome::Confirmed((name, entries)) => {
                    match original.as_deref() {
                        None => {
                            let res = self.workspace.add(&name, entries);
                            self.report_err(res);
                        }
                        Some(original) => {
                            let res = self.workspace.edit(original, &name, entries);
                            self.report(res);
                        }
                    }
                    false
                }
            },
            ActiveDialog::Import(view) => match view.show(ctx) {
                DialogOutcome::Pending => true,
                DialogOutcome::Cancelled => false,
                DialogOutcome::Confirmed(text) => {
                    let res = self.workspace.import(&text);
                    self.report(res);
                    false
                }
            },
            ActiveDialog::File(prompt) => match prompt.show(ctx) {
                DialogOutcome::Pending => true,
                DialogOutcome::Cancelled => false,
                DialogOutcome::Confirmed(path) => {
                    let res = match prompt.action() {
                        FileAction::Save => self.workspace.save(&path),
                        FileAction::Load(format) => self.workspace.load(&path, format),
                    };
                    self.report(res);
                    self.last_path = path;
                    false
                }
            },
        };

        if still_open {
            self.dialog = Some(dialog);
        } else {
            log::debug!("Closed dialog '{}'", dialog.title());
        }
    }

    // ── Panels ────────────────────────────────────────────────────────────────

    fn menu_bar(&mut self, ctx: &egui::Context) -> Option<Action> {
        let mut clicked = None;
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    for action in Action::FILE.into_iter().chain([Action::Quit]) {
                        if ui.button(action.label()).clicked() {
                            clicked = Some(action);
                            ui.close();
                        }
                    }
                });
                ui.menu_button("Palette", |ui| {
                    for action in Action::PALETTE {
                        if ui.button(action.label()).clicked() {
                            clicked = Some(action);
                            ui.close();
                        }
                    }
                });
                ui.separator();
                for action in Action::PALETTE {
                    if ui.button(action.label()).clicked() {
                        clicked = Some(action);
                    }
                }
            });
        });
        clicked
    }

    fn palette_tabs(&mut self, ctx: &egui::Context) -> Option<Copied> {
        let mut copied = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.workspace.is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.label("No palettes open. Add, import or load one to get started.");
                });
                return;
            }

            let mut select = None;
            ui.horizontal_wrapped(|ui| {
                for palette in self.workspace.palettes() {
                    let selected = self.workspace.selected_name() == Some(palette.name());
                    if ui.selectable_label(selected, palette.name()).clicked() {
                        select = Some(palette.name().to_string());
                    }
                }
            });
            if let Some(name) = select {
                self.workspace.select(&name);
            }
            ui.separator();

            let current = self
                .workspace
                .selected_name()
                .and_then(|name| self.workspace.palettes().iter().find(|p| p.name() == name));
            if let Some(palette) = current {
                copied = palette_view::show(ui, palette);
            }
        });
        copied
    }
}

// ── eframe::App ──────────────────────────────────────────────────────────────

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── 1. Window chrome ──────────────────────────────────────────────────
        if self.title_bar.show(ctx) {
            self.on_action(ctx, Action::Quit);
        }

        // ── 2. Menu ───────────────────────────────────────────────────────────
        let idle = self.dialog.is_none() && self.alerts.is_empty();
        if let Some(action) = self.menu_bar(ctx)
            && idle
        {
            self.on_action(ctx, action);
        }

        // ── 3. Palette tabs ───────────────────────────────────────────────────
        if let Some(copied) = self.palette_tabs(ctx) {
            let alert = match &copied {
                Copied::Hex(hex) => Alert::info(
                    "RGB Value Copied",
                    format!("RGB value {hex} has been copied to clipboard."),
                ),
                Copied::Name(name) => Alert::info(
                    "Color Name Copied",
                    format!("Color name \"{name}\" has been copied to clipboard."),
                ),
            };
            self.alerts.push(alert);
        }

        // ── 4. Modal layers: dialog first, alerts on top ──────────────────────
        self.show_dialog(ctx);
        self.alerts.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_action_has_a_distinct_label() {
        let mut labels: Vec<&str> = Action::PALETTE
            .into_iter()
            .chain(Action::FILE)
            .chain([Action::Quit])
            .map(Action::label)
            .collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 7);
    }

    #[test]
    fn starts_with_no_palettes_and_the_default_file() {
        let app = App::empty();
        assert!(app.workspace.is_empty());
        assert!(app.alerts.is_empty());
        assert!(app.dialog.is_none());
        assert_eq!(app.last_path, PathBuf::from("palettes.json"));
    }
}
