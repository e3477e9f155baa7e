use crate::{
    config::Config,
    core::{
        message::{GuiToJobTx, JobToGuiRx},
        state::ScribeState,
    },
    ui::panels::{central_panel::UICentralPanel, top_bar::UITopBar},
};

pub struct ScribeApp {
    state: ScribeState,
    config: Config,
    top_bar: UITopBar,
    central_panel: UICentralPanel,
}

impl ScribeApp {
    pub fn new(tx: GuiToJobTx, rx: JobToGuiRx) -> Self {
        let config = Config::load();
        let mut state = ScribeState::new(tx, rx);
        state.scroll.set_speed(config.scroll_speed);
        state.set_tab_algorithm(config.tab_algorithm);
        Self {
            state,
            config,
            top_bar: UITopBar::new(),
            central_panel: UICentralPanel::new(),
        }
    }

    /// Any live animation loop keeps the frame clock running; with all
    /// of them idle the app repaints on input only.
    fn has_live_loop(&self) -> bool {
        self.state.transport.is_playing()
            || self.state.scroll.is_enabled()
            || self.state.status().is_processing()
            || self.state.progress_value() > 0.
    }
}

impl eframe::App for ScribeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dt = ctx.input(|i| i.stable_dt).min(0.1);
        self.state.update(dt);
        if self.has_live_loop() {
            ctx.request_repaint();
        }
        self.top_bar.show(ctx, &mut self.state, &mut self.config);
        self.central_panel.show(ctx, &mut self.state, &mut self.config);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.config.save();
    }
}
