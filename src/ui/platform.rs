//! Optional platform services queried once at start-up.

use std::sync::Arc;

use eframe::egui::{self, IconData, ViewportCommand};

/// Capabilities that only some desktop environments offer.
pub trait PlatformServices {
    /// Whether the platform shows a separate application (dock) icon.
    fn supports_dock_icon(&self) -> bool;

    fn set_dock_icon(&self, ctx: &egui::Context, icon: Arc<IconData>);
}

/// The platform the binary was compiled for.
pub struct NativePlatform;

impl PlatformServices for NativePlatform {
    fn supports_dock_icon(&self) -> bool {
        cfg!(target_os = "macos")
    }

    fn set_dock_icon(&self, ctx: &egui::Context, icon: Arc<IconData>) {
        ctx.send_viewport_cmd(ViewportCommand::Icon(Some(icon)));
    }
}

/// Install the dock icon when supported. Returns whether it was applied.
pub fn apply_dock_icon(
    services: &dyn PlatformServices,
    ctx: &egui::Context,
    icon: Arc<IconData>,
) -> bool {
    if !services.supports_dock_icon() {
        log::debug!("Dock icon not supported on this platform");
        return false;
    }
    services.set_dock_icon(ctx, icon);
    log::info!("Dock icon set");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakePlatform {
        dock: bool,
        calls: Cell<usize>,
    }

    impl PlatformServices for FakePlatform {
        fn supports_dock_icon(&self) -> bool {
            self.dock
        }

        fn set_dock_icon(&self, _ctx: &egui::Context, _icon: Arc<IconData>) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    #[test]
    fn dock_icon_only_where_supported() {
        let ctx = egui::Context::default();
        let icon = crate::ui::icon::app_icon();

        let without = FakePlatform { dock: false, calls: Cell::new(0) };
        assert!(!apply_dock_icon(&without, &ctx, icon.clone()));
        assert_eq!(without.calls.get(), 0);

        let with = FakePlatform { dock: true, calls: Cell::new(0) };
        assert!(apply_dock_icon(&with, &ctx, icon));
        assert_eq!(with.calls.get(), 1);
    }
}
