//! The `AppDialog` trait and the outcome each dialog reports per frame.
//!
//! To add a new dialog:
//! 1. Create a new file in `ui/windows/`.
//! 2. Implement `AppDialog` for your struct.
//! 3. Add a variant to `ActiveDialog` in `ui/app.rs` and handle its output.

/// What a dialog reported after drawing one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome<T> {
    /// Still open; keep showing it next frame.
    Pending,
    Confirmed(T),
    Cancelled,
}

impl<T> DialogOutcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DialogOutcome<U> {
        match self {
            DialogOutcome::Pending => DialogOutcome::Pending,
            DialogOutcome::Confirmed(value) => DialogOutcome::Confirmed(f(value)),
            DialogOutcome::Cancelled => DialogOutcome::Cancelled,
        }
    }
}

/// Trait implemented by every modal dialog.
///
/// A dialog is transient: the orchestrator (`App`) creates one per action,
/// calls `show` every frame until it stops returning `Pending`, then drops it.
pub trait AppDialog {
    type Output;

    /// Window title.
    fn title(&self) -> &str;

    /// Draw the dialog contents.
    fn show(&mut self, ctx: &egui::Context) -> DialogOutcome<Self::Output>;
}

/// Shared modal chrome: a title, an optional header line, the body, and a
/// confirm/cancel button row.
///
/// `confirm_enabled` greys out the confirm button. Escape or a click on the
/// backdrop cancels.
pub fn modal_frame(
    ctx: &egui::Context,
    title: &str,
    header: &str,
    confirm_label: &str,
    confirm_enabled: bool,
    body: impl FnOnce(&mut egui::Ui),
) -> DialogOutcome<()> {
    let modal = egui::Modal::new(egui::Id::new(("dialog", title))).show(ctx, |ui| {
        ui.set_min_width(360.0);
        ui.heading(title);
        if !header.is_empty() {
            ui.label(header);
        }
        ui.separator();
        body(ui);
        ui.separator();

        let mut clicked = None;
        ui.horizontal(|ui| {
            if ui
                .add_enabled(confirm_enabled, egui::Button::new(confirm_label))
                .clicked()
            {
                clicked = Some(true);
            }
            if ui.button("Cancel").clicked() {
                clicked = Some(false);
            }
        });
        clicked
    });

    match modal.inner {
        Some(true) => DialogOutcome::Confirmed(()),
        Some(false) => DialogOutcome::Cancelled,
        None if modal.should_close() => DialogOutcome::Cancelled,
        None => DialogOutcome::Pending,
    }
}
