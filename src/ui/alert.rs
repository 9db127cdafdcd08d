//! Modal alerts: one at a time, queued in arrival order.

use std::collections::VecDeque;

use egui::Color32;

use crate::engine::workspace::Notice;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Warning,
    Error,
}

impl AlertKind {
    fn accent(self) -> Color32 {
        match self {
            AlertKind::Info => Color32::from_rgb(33, 113, 181),
            AlertKind::Warning => Color32::from_rgb(245, 126, 47),
            AlertKind::Error => Color32::from_rgb(204, 40, 40),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: String,
    pub body: String,
}

impl Alert {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Info,
            title: title.into(),
            body: body.into(),
        }
    }
}

impl From<Notice> for Alert {
    fn from(notice: Notice) -> Self {
        Alert::info(notice.title, notice.body)
    }
}

impl From<AppError> for Alert {
    fn from(err: AppError) -> Self {
        Self {
            kind: if err.is_warning() {
                AlertKind::Warning
            } else {
                AlertKind::Error
            },
            title: err.title().to_string(),
            body: err.to_string(),
        }
    }
}

#[derive(Default)]
pub struct AlertQueue {
    pending: VecDeque<Alert>,
}

impl AlertQueue {
    pub fn push(&mut self, alert: impl Into<Alert>) {
        self.pending.push_back(alert.into());
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Show the oldest alert; OK, Escape or a backdrop click dismisses it.
    pub fn show(&mut self, ctx: &egui::Context) {
        let Some(alert) = self.pending.front() else {
            return;
        };
        let modal = egui::Modal::new(egui::Id::new("alert")).show(ctx, |ui| {
            ui.set_min_width(320.0);
            ui.heading(egui::RichText::new(&alert.title).color(alert.kind.accent()));
            ui.add_space(6.0);
            ui.label(alert.body.as_str());
            ui.add_space(6.0);
            ui.button("OK").clicked()
        });
        if modal.inner || modal.should_close() {
            self.pending.pop_front();
        }
    }
}
