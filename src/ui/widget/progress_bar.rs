use egui::{Color32, Rect, Sense, Vec2, Widget};

use crate::ui::theme::PRIMARY_COLOR;

/// Thin determinate progress bar over a percentage in [0, 100].
pub struct ProgressBar {
    value: f32,
    size: Vec2,
}

impl ProgressBar {
    pub fn new(value: f32, size: Vec2) -> Self {
        Self { value, size }
    }
}

impl Widget for ProgressBar {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let (res, painter) = ui.allocate_painter(self.size, Sense::hover());
        let rect = res.rect;
        painter.rect_filled(rect, 2.0, Color32::from_gray(60));

        let fraction = (self.value / 100.).clamp(0., 1.);
        if fraction > 0. {
            let fill = Rect::from_min_size(
                rect.min,
                Vec2::new(rect.width() * fraction, rect.height()),
            );
            painter.rect_filled(fill, 2.0, PRIMARY_COLOR);
        }
        res
    }
}
