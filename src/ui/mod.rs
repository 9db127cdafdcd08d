//! UI layer: App orchestrator, AppDialog trait, title bar, alerts, and dialogs.

pub mod alert;
pub mod app;
pub mod colors;
pub mod icon;
pub mod platform;
pub mod title_bar;
pub mod window;
pub mod windows;
