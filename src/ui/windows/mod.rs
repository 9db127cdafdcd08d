//! Dialogs implementing `AppDialog`, plus the palette tab view.

pub mod file_prompt;
pub mod import_view;
pub mod palette_editor;
pub mod palette_view;
