use eframe::NativeOptions;
use egui::{Vec2, ViewportBuilder};

pub fn get_native_options() -> NativeOptions {
    let mut options = NativeOptions::default();
    options.viewport = ViewportBuilder::default()
        .with_inner_size(Vec2::new(960., 680.))
        .with_min_inner_size(Vec2::new(560., 400.))
        .with_title("StringScribe");
    options
}
