//! Path prompt used by Save, Load and Load Legacy.

use std::path::PathBuf;

use crate::codec::Format;
use crate::ui::window::{AppDialog, DialogOutcome, modal_frame};

/// What the chosen path will be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Save,
    Load(Format),
}

impl FileAction {
    fn title(self) -> &'static str {
        match self {
            FileAction::Save => "Save Color Palettes",
            FileAction::Load(Format::Current) => "Load Color Palettes",
            FileAction::Load(Format::Legacy) => "Load Legacy Color Palettes",
        }
    }

    fn confirm_label(self) -> &'static str {
        match self {
            FileAction::Save => "Save",
            FileAction::Load(_) => "Open",
        }
    }
}

pub struct FilePrompt {
    action: FileAction,
    path: String,
}

impl FilePrompt {
    pub fn new(action: FileAction, initial: &std::path::Path) -> Self {
        Self {
            action,
            path: initial.display().to_string(),
        }
    }

    pub fn action(&self) -> FileAction {
        self.action
    }

    /// The trimmed path, or `None` when the field is blank.
    pub fn chosen_path(&self) -> Option<PathBuf> {
        let path = self.path.trim();
        (!path.is_empty()).then(|| PathBuf::from(path))
    }
}

impl AppDialog for FilePrompt {
    type Output = PathBuf;

    fn title(&self) -> &str {
        self.action.title()
    }

    fn show(&mut self, ctx: &egui::Context) -> DialogOutcome<PathBuf> {
        let chosen = self.chosen_path();
        let outcome = modal_frame(
            ctx,
            self.action.title(),
            "JSON Files (*.json)",
            self.action.confirm_label(),
            chosen.is_some(),
            |ui| {
                ui.horizontal(|ui| {
                    ui.label("File:");
                    ui.add(egui::TextEdit::singleline(&mut self.path).desired_width(320.0));
                });
            },
        );
        match (outcome, chosen) {
            (DialogOutcome::Confirmed(()), Some(path)) => DialogOutcome::Confirmed(path),
            (DialogOutcome::Confirmed(()), None) | (DialogOutcome::Pending, _) => {
                DialogOutcome::Pending
            }
            (DialogOutcome::Cancelled, _) => DialogOutcome::Cancelled,
        }
    }
}
