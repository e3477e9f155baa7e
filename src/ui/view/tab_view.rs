use egui::{Label, RichText, ScrollArea, Slider, TextWrapMode, Ui, vec2};

use crate::{
    config::Config,
    core::{
        message::TabAlgorithm,
        scroll::{MAX_SCROLL_SPEED, MIN_SCROLL_SPEED},
        state::ScribeState,
    },
};

const TAB_VIEW_HEIGHT: f32 = 180.;

/// Tab text viewport with its auto-scroll controls. The scroll offset
/// lives here (the viewport side); the animator in the state only
/// advances it.
pub struct UITabView {
    offset: f32,
    // Scrollable bound measured on the previous frame
    max_offset: f32,
}

impl UITabView {
    pub fn new() -> Self {
        Self {
            offset: 0.,
            max_offset: f32::MAX,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, state: &mut ScribeState, config: &mut Config) {
        if !state.has_result() {
            return;
        }
        let Some(tab_text) = state.tab_text().map(str::to_owned) else {
            if ui.button("Generate tabs").clicked() {
                state.request_tabs();
            }
            return;
        };

        self.controls_ui(ui, state, config);
        self.viewport_ui(ui, state, &tab_text);
    }

    fn controls_ui(&mut self, ui: &mut Ui, state: &mut ScribeState, config: &mut Config) {
        ui.horizontal(|ui| {
            let toggle_label = if state.scroll.is_enabled() {
                "Stop scroll"
            } else {
                "Start scroll"
            };
            if ui.button(toggle_label).clicked() {
                state.scroll.toggle();
            }
            if ui.button("Reset").clicked() {
                state.scroll.reset();
            }

            let mut speed = state.scroll.speed();
            let slider = ui.add(
                Slider::new(&mut speed, MIN_SCROLL_SPEED..=MAX_SCROLL_SPEED)
                    .text("Speed")
                    .fixed_decimals(0),
            );
            if slider.changed() {
                state.scroll.set_speed(speed);
                config.scroll_speed = speed;
            }

            ui.separator();
            let mut algorithm = state.tab_algorithm();
            ui.radio_value(&mut algorithm, TabAlgorithm::Efficient, "Efficient");
            ui.radio_value(&mut algorithm, TabAlgorithm::Simple, "Simple");
            if algorithm != state.tab_algorithm() {
                state.set_tab_algorithm(algorithm);
                config.tab_algorithm = algorithm;
            }
        });
    }

    fn viewport_ui(&mut self, ui: &mut Ui, state: &mut ScribeState, tab_text: &str) {
        let mut force_offset = state.scroll.is_enabled();
        if state.scroll.take_reset() {
            self.offset = 0.;
            force_offset = true;
        }
        if state.scroll.is_enabled() {
            self.offset = state.scroll.step(self.offset, self.max_offset);
        }

        let mut area = ScrollArea::horizontal()
            .id_salt("tab-view")
            .max_height(TAB_VIEW_HEIGHT)
            .auto_shrink([false, true]);
        if force_offset {
            area = area.scroll_offset(vec2(self.offset, 0.));
        }

        let output = area.show(ui, |ui| {
            ui.add(
                Label::new(RichText::new(tab_text).monospace())
                    .wrap_mode(TextWrapMode::Extend)
                    .selectable(true),
            );
        });

        self.max_offset = (output.content_size.x - output.inner_rect.width()).max(0.);
        if !state.scroll.is_enabled() {
            // Manual scrolling owns the offset while the animator idles
            self.offset = output.state.offset.x;
        }
    }
}
