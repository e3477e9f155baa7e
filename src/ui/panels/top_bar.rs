use std::path::Path;

use egui::{Color32, FontId, Layout, RichText, Ui, Vec2};

use crate::{
    config::Config,
    core::state::ScribeState,
    ui::{
        font::ICON_FONT,
        widget::{progress_bar::ProgressBar, square_button::SquareButton},
    },
};

const PRIMARY_BUTTON_COLOR: Color32 = Color32::from_gray(150);

pub struct UITopBar {}

impl UITopBar {
    pub fn new() -> Self {
        Self {}
    }

    pub fn show(&mut self, ctx: &egui::Context, state: &mut ScribeState, config: &mut Config) {
        egui::TopBottomPanel::top("top-bar")
            .exact_height(36.)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| self.ui(ui, state, config));
            });
    }

    fn ui(&mut self, ui: &mut Ui, state: &mut ScribeState, config: &mut Config) {
        self.open_button_ui(ui, state, config);
        if self.play_button_ui(ui, state).clicked() {
            if state.transport.is_playing() {
                state.transport.pause();
            } else {
                state.transport.play();
            }
        }
        self.reset_button_ui(ui, state);
        ui.label(
            RichText::new(format_clock(state.transport.position(), state.transport.duration()))
                .monospace(),
        );

        ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
            if let Some(error) = state.last_error() {
                ui.label(RichText::new(error).color(Color32::from_rgb(220, 80, 80)));
            }
            ui.label(RichText::new(state.status().label()).color(Color32::from_gray(160)));
            if state.progress_value() > 0. {
                ui.add(ProgressBar::new(
                    state.progress_value(),
                    Vec2::new(140., 8.),
                ));
            }
        });
    }

    fn open_button_ui(&mut self, ui: &mut Ui, state: &mut ScribeState, config: &mut Config) {
        let button = SquareButton::new(egui_phosphor::fill::FOLDER_OPEN)
            .font(icon_font())
            .fill(PRIMARY_BUTTON_COLOR)
            .tooltip("Open a transcription result");
        if ui.add(button).clicked() {
            let mut dialog = rfd::FileDialog::new().add_filter("transcription", &["json"]);
            if let Some(dir) = &config.last_open_dir {
                dialog = dialog.set_directory(dir);
            }
            if let Some(path) = dialog.pick_file() {
                config.last_open_dir = path.parent().map(Path::to_path_buf);
                config.save();
                state.process_file(path);
            }
        }
    }

    fn play_button_ui(&mut self, ui: &mut Ui, state: &ScribeState) -> egui::Response {
        let playing = state.transport.is_playing();
        let button = SquareButton::new(if playing {
            egui_phosphor::fill::PAUSE
        } else {
            egui_phosphor::fill::PLAY
        })
        .font(icon_font())
        .fill(if playing {
            Color32::from_gray(200)
        } else {
            PRIMARY_BUTTON_COLOR
        });
        ui.add_enabled(state.has_result(), button)
    }

    fn reset_button_ui(&mut self, ui: &mut Ui, state: &mut ScribeState) {
        let button = SquareButton::new(egui_phosphor::fill::ARROW_COUNTER_CLOCKWISE)
            .font(icon_font())
            .fill(PRIMARY_BUTTON_COLOR)
            .tooltip("Reset session");
        if ui.add(button).clicked() {
            state.reset();
        }
    }
}

fn icon_font() -> FontId {
    FontId::new(15., egui::FontFamily::Name(ICON_FONT.into()))
}

fn format_clock(position: f32, duration: f32) -> String {
    format!("{} / {}", format_time(position), format_time(duration))
}

fn format_time(seconds: f32) -> String {
    let time = seconds.max(0.).floor() as i32;
    format!("{}:{:0>2}", time / 60, time % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.), "0:00");
        assert_eq!(format_time(9.9), "0:09");
        assert_eq!(format_time(75.), "1:15");
        assert_eq!(format_time(-3.), "0:00");
    }
}
