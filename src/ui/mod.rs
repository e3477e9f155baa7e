use crate::{
    core::message::{GuiToJobTx, JobToGuiRx},
    ui::{app::ScribeApp, font::get_fonts, theme::get_app_style, window::get_native_options},
};

use egui::Theme;

pub mod app;
mod font;
mod panels;
mod theme;
mod view;
mod widget;
mod window;

pub fn spawn_ui_thread(tx: GuiToJobTx, rx: JobToGuiRx) -> Result<(), eframe::Error> {
    eframe::run_native(
        "StringScribe",
        get_native_options(),
        Box::new(|cc| {
            cc.egui_ctx.set_fonts(get_fonts());
            cc.egui_ctx.set_style(get_app_style());
            cc.egui_ctx.set_theme(Theme::Dark);
            Ok(Box::new(ScribeApp::new(tx, rx)))
        }),
    )
}
