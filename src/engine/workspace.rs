//! The open palette set and every palette-affecting action.
//!
//! `Workspace` is UI-independent: the app layer collects input through dialogs
//! and file prompts, then calls one method here per action. A returned `Err`
//! never leaves a partial change behind.

use std::path::Path;

use crate::codec::{self, Format, import_text};
use crate::error::{AppError, Result};
use crate::model::{Entry, Palette};
use crate::utils::display_file_name;

/// A success message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub body: String,
}

impl Notice {
    fn new(title: &'static str, body: impl Into<String>) -> Self {
        Self {
            title,
            body: body.into(),
        }
    }
}

/// How a load merged into the open set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub added: usize,
    pub skipped: usize,
}

/// Open palettes in tab order plus the selected tab, identified by its title.
#[derive(Debug, Default)]
pub struct Workspace {
    palettes: Vec<Palette>,
    selected: Option<String>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn select(&mut self, name: &str) {
        self.selected = Some(name.to_string());
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.palettes.iter().any(|p| p.name() == name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.palettes.iter().position(|p| p.name() == name)
    }

    /// Append a palette and select its tab. No validation.
    fn push(&mut self, palette: Palette) {
        self.selected = Some(palette.name().to_string());
        self.palettes.push(palette);
    }

    // ── Add ────────────────────────────────────────────────────────────────

    pub fn add(&mut self, name: &str, entries: Vec<Entry>) -> Result<()> {
        let name = validated_name(name, &entries)?;
        if self.contains_name(name) {
            return Err(AppError::DuplicateName(name.to_string()));
        }
        log::info!("Adding palette '{name}' with {} colors", entries.len());
        self.push(Palette::with_entries(name, entries));
        Ok(())
    }

    // ── Edit ───────────────────────────────────────────────────────────────

    /// The palette behind the selected tab, for pre-filling the edit dialog.
    pub fn edit_target(&self) -> Result<&Palette> {
        let title = self.selected.as_deref().ok_or(AppError::NoPaletteSelected)?;
        self.palettes
            .iter()
            .find(|p| p.name() == title)
            .ok_or_else(|| AppError::PaletteNotFound(title.to_string()))
    }

    /// Replace the name and entries of the palette currently titled `original`.
    ///
    /// Keeping the same name is always allowed; a new name must not belong to
    /// a different open palette.
    pub fn edit(&mut self, original: &str, name: &str, entries: Vec<Entry>) -> Result<Notice> {
        let idx = self
            .position(original)
            .ok_or_else(|| AppError::PaletteNotFound(original.to_string()))?;
        let name = validated_name(name, &entries)?;
        if name != original && self.contains_name(name) {
            return Err(AppError::DuplicateName(name.to_string()));
        }

        let palette = &mut self.palettes[idx];
        palette.rename(name);
        palette.set_entries(entries);
        self.selected = Some(name.to_string());
        log::info!("Updated palette '{original}' -> '{name}'");
        Ok(Notice::new(
            "Palette Updated",
            format!("Color palette '{name}' was successfully updated."),
        ))
    }

    // ── Import ─────────────────────────────────────────────────────────────

    pub fn import(&mut self, text: &str) -> Result<Notice> {
        let palette = import_text::parse(text)?;
        if self.contains_name(palette.name()) {
            return Err(AppError::DuplicateName(palette.name().to_string()));
        }
        let notice = Notice::new(
            "Palette Imported",
            format!(
                "Color palette '{}' was successfully imported with {} colors.",
                palette.name(),
                palette.count()
            ),
        );
        log::info!("Imported palette '{}'", palette.name());
        self.push(palette);
        Ok(notice)
    }

    // ── Save ───────────────────────────────────────────────────────────────

    /// Checked before prompting for a path.
    pub fn ensure_saveable(&self) -> Result<()> {
        if self.palettes.is_empty() {
            return Err(AppError::NothingToSave);
        }
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<Notice> {
        self.ensure_saveable()?;
        codec::write_palettes(path, &self.palettes).inspect_err(|e| {
            log::error!("Saving to {} failed: {e}", path.display());
        })?;
        log::info!("Saved {} palettes to {}", self.palettes.len(), path.display());
        Ok(Notice::new(
            "Palettes Saved",
            format!(
                "Color palettes were successfully saved to {}",
                display_file_name(path)
            ),
        ))
    }

    // ── Load / Load Legacy ─────────────────────────────────────────────────

    pub fn load(&mut self, path: &Path, format: Format) -> Result<Notice> {
        let loaded = codec::read_palettes(path, format).inspect_err(|e| {
            log::error!("Loading {} failed: {e}", path.display());
        })?;
        if loaded.is_empty() {
            return Err(AppError::NoPalettesFound);
        }
        let report = self.merge(loaded);
        log::info!(
            "Loaded {} from {}: {} added, {} skipped",
            format.label(),
            path.display(),
            report.added,
            report.skipped
        );
        Ok(Notice::new(
            match format {
                Format::Current => "Palettes Loaded",
                Format::Legacy => "Legacy Palettes Loaded",
            },
            format!(
                "Color palettes were successfully loaded from {} ({} added, {} skipped).",
                display_file_name(path),
                report.added,
                report.skipped
            ),
        ))
    }

    /// Append every palette whose name is free; collisions are skipped.
    pub fn merge(&mut self, loaded: Vec<Palette>) -> LoadReport {
        let mut report = LoadReport::default();
        for palette in loaded {
            if palette.name().trim().is_empty() || self.contains_name(palette.name()) {
                log::debug!("Skipping loaded palette '{}'", palette.name());
                report.skipped += 1;
                continue;
            }
            self.push(palette);
            report.added += 1;
        }
        report
    }
}

/// Trimmed palette name, or `InvalidPalette` if it is blank or there are no entries.
fn validated_name<'a>(name: &'a str, entries: &[Entry]) -> Result<&'a str> {
    let name = name.trim();
    if name.is_empty() || entries.is_empty() {
        return Err(AppError::InvalidPalette);
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rgb;
    use pretty_assertions::assert_eq;

    fn entries() -> Vec<Entry> {
        vec![Entry::unnamed(Rgb::new(255, 0, 0))]
    }

    fn names(ws: &Workspace) -> Vec<&str> {
        ws.palettes().iter().map(Palette::name).collect()
    }

    #[test]
    fn add_appends_and_selects() {
        let mut ws = Workspace::new();
        ws.add("  Warm ", entries()).unwrap();
        ws.add("Cool", entries()).unwrap();
        assert_eq!(names(&ws), ["Warm", "Cool"]);
        assert_eq!(ws.selected_name(), Some("Cool"));
    }

    #[test]
    fn add_rejects_blank_name_or_no_entries() {
        let mut ws = Workspace::new();
        assert!(matches!(ws.add("   ", entries()), Err(AppError::InvalidPalette)));
        assert!(matches!(ws.add("Name", vec![]), Err(AppError::InvalidPalette)));
        assert!(ws.is_empty());
    }

    #[test]
    fn add_duplicate_name_leaves_state_untouched() {
        let mut ws = Workspace::new();
        ws.add("Warm", entries()).unwrap();
        ws.add("Cool", entries()).unwrap();

        let err = ws
            .add("Warm", vec![Entry::unnamed(Rgb::new(0, 0, 0))])
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateName(ref n) if n == "Warm"));
        assert_eq!(names(&ws), ["Warm", "Cool"]);
        assert_eq!(ws.palettes()[0].entries(), entries().as_slice());
        assert_eq!(ws.selected_name(), Some("Cool"));
    }

    #[test]
    fn edit_requires_a_selected_tab() {
        let ws = Workspace::new();
        assert!(matches!(ws.edit_target(), Err(AppError::NoPaletteSelected)));
    }

    #[test]
    fn edit_to_own_name_is_accepted() {
        let mut ws = Workspace::new();
        ws.add("Warm", entries()).unwrap();
        let new_entries = vec![Entry::new(Rgb::new(1, 1, 1), "Soot")];
        ws.edit("Warm", "Warm", new_entries.clone()).unwrap();
        assert_eq!(ws.palettes()[0].entries(), new_entries.as_slice());
    }

    #[test]
    fn edit_to_other_palettes_name_is_rejected() {
        let mut ws = Workspace::new();
        ws.add("Warm", entries()).unwrap();
        ws.add("Cool", entries()).unwrap();
        let err = ws.edit("Cool", "Warm", entries()).unwrap_err();
        assert!(matches!(err, AppError::DuplicateName(_)));
        assert_eq!(names(&ws), ["Warm", "Cool"]);
    }

    #[test]
    fn edit_renames_in_place_and_follows_selection() {
        let mut ws = Workspace::new();
        ws.add("A", entries()).unwrap();
        ws.add("B", entries()).unwrap();
        ws.select("A");
        let target = ws.edit_target().unwrap().name().to_string();
        let notice = ws.edit(&target, "Alpha", entries()).unwrap();
        assert_eq!(names(&ws), ["Alpha", "B"]);
        assert_eq!(ws.selected_name(), Some("Alpha"));
        assert_eq!(notice.title, "Palette Updated");
    }

    #[test]
    fn edit_of_vanished_palette_is_not_found() {
        let mut ws = Workspace::new();
        ws.select("Ghost");
        assert!(matches!(ws.edit_target(), Err(AppError::PaletteNotFound(_))));
        assert!(matches!(
            ws.edit("Ghost", "X", entries()),
            Err(AppError::PaletteNotFound(_))
        ));
    }

    #[test]
    fn import_creates_palette_and_rejects_collisions() {
        let mut ws = Workspace::new();
        let notice = ws.import("MyPalette\n#FF0000\n#00FF00").unwrap();
        assert!(notice.body.contains("2 colors"));
        assert_eq!(ws.palettes()[0].count(), 2);

        assert!(matches!(
            ws.import("MyPalette\n#000000"),
            Err(AppError::DuplicateName(_))
        ));
        assert!(matches!(ws.import("OnlyName"), Err(AppError::InvalidImportFormat)));
        assert_eq!(ws.palettes().len(), 1);
    }

    #[test]
    fn save_requires_palettes() {
        let ws = Workspace::new();
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            ws.save(&dir.path().join("out.json")),
            Err(AppError::NothingToSave)
        ));
    }

    #[test]
    fn save_then_load_into_fresh_workspace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        let mut ws = Workspace::new();
        ws.add("Warm", entries()).unwrap();
        ws.import("Cool\n#0000FF\n#00FFFF").unwrap();
        let notice = ws.save(&path).unwrap();
        assert!(notice.body.ends_with("out.json"));

        let mut fresh = Workspace::new();
        fresh.load(&path, Format::Current).unwrap();
        assert_eq!(fresh.palettes(), ws.palettes());
    }

    #[test]
    fn load_skips_colliding_names_silently() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legacy.json");
        std::fs::write(
            &path,
            r##"[{"name":"Warm","colors":["#000000"]},{"name":"New","colorHexCodes":["#112233","nope"]}]"##,
        )
        .unwrap();

        let mut ws = Workspace::new();
        ws.add("Warm", entries()).unwrap();
        let notice = ws.load(&path, Format::Legacy).unwrap();

        assert_eq!(names(&ws), ["Warm", "New"]);
        assert_eq!(ws.palettes()[0].entries(), entries().as_slice());
        assert_eq!(ws.palettes()[1].count(), 1);
        assert!(notice.body.contains("1 added, 1 skipped"));
    }

    #[test]
    fn load_of_empty_list_warns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        std::fs::write(&path, "[]").unwrap();
        let err = Workspace::new().load(&path, Format::Current).unwrap_err();
        assert!(err.is_warning());
    }

    #[test]
    fn load_failure_keeps_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut ws = Workspace::new();
        ws.add("Warm", entries()).unwrap();
        assert!(matches!(ws.load(&path, Format::Current), Err(AppError::Json(_))));
        assert_eq!(names(&ws), ["Warm"]);
    }

    #[test]
    fn merge_skips_duplicates_within_one_file_and_blank_names() {
        let mut ws = Workspace::new();
        let report = ws.merge(vec![
            Palette::from_colors("Dup", [Rgb::new(1, 1, 1)]),
            Palette::from_colors("Dup", [Rgb::new(2, 2, 2)]),
            Palette::from_colors("", [Rgb::new(3, 3, 3)]),
        ]);
        assert_eq!(report, LoadReport { added: 1, skipped: 2 });
        assert_eq!(ws.palettes()[0].colors().next(), Some(Rgb::new(1, 1, 1)));
    }
}
