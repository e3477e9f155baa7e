use egui::{Color32, Context, Frame, Margin, RichText, ScrollArea, Ui};

use crate::{
    config::Config,
    core::state::ScribeState,
    ui::view::{piano_roll::UIPianoRoll, tab_view::UITabView},
};

pub struct UICentralPanel {
    piano_roll: UIPianoRoll,
    tab_view: UITabView,
}

impl UICentralPanel {
    pub fn new() -> Self {
        Self {
            piano_roll: UIPianoRoll::new(),
            tab_view: UITabView::new(),
        }
    }

    pub fn show(&mut self, ctx: &Context, state: &mut ScribeState, config: &mut Config) {
        egui::CentralPanel::default()
            .frame(
                Frame::central_panel(&ctx.style())
                    .inner_margin(Margin::same(8))
                    .fill(Color32::from_gray(40)),
            )
            .show(ctx, |ui| {
                self.ui(ui, state, config);
            });
    }

    fn ui(&mut self, ui: &mut Ui, state: &mut ScribeState, config: &mut Config) {
        if !state.has_result() {
            ui.centered_and_justified(|ui| {
                ui.label(
                    RichText::new("Open a transcription result to get started")
                        .color(Color32::from_gray(120)),
                );
            });
            return;
        }

        // The roll surface height follows the pitch window, so the
        // whole content scrolls vertically
        ScrollArea::vertical().show(ui, |ui| {
            ui.label(RichText::new("Notes").strong());
            self.piano_roll.ui(ui, state);
            ui.add_space(12.);
            ui.label(RichText::new("Tabs").strong());
            self.tab_view.ui(ui, state, config);
        });
    }
}
