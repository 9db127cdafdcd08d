mod codec;
mod engine;
mod error;
mod model;
mod ui;
mod utils;

use eframe::egui;

use crate::ui::{app::App, icon, title_bar};

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title_bar::TITLE)
            .with_inner_size([800.0, 600.0])
            .with_decorations(false)
            .with_icon(icon::app_icon()),
        ..Default::default()
    };
    eframe::run_native(
        title_bar::TITLE,
        options,
        Box::new(|cc| Ok(Box::new(App::new(cc)))),
    )
}
