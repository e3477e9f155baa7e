use egui::{
    Color32, CornerRadius, FontId, Margin, Shadow, Spacing, Stroke, Style, TextStyle, Vec2, Visuals,
};

pub const PRIMARY_COLOR: Color32 = Color32::from_rgb(76, 175, 80);

// Piano roll palette
pub const ROLL_BACKGROUND: Color32 = Color32::from_rgb(40, 44, 52);
pub const OCTAVE_GUIDE: Color32 = Color32::from_rgba_premultiplied(20, 20, 20, 20);
pub const PLAYHEAD_COLOR: Color32 = Color32::from_rgb(255, 85, 85);
/// hsl(210, 100%, 60%), fully opaque
pub const NOTE_PLAYED: Color32 = Color32::from_rgb(51, 153, 255);
/// Same hue desaturated to 70% at 0.7 alpha (premultiplied), for notes
/// still ahead of the playhead
pub const NOTE_UPCOMING: Color32 = Color32::from_rgba_premultiplied(57, 107, 156, 178);

pub fn get_app_style() -> Style {
    let mut style = Style::default();
    style.visuals = get_app_visuals();
    style.spacing = get_app_spacing();
    style
        .text_styles
        .insert(TextStyle::Body, FontId::proportional(12.0));
    style
}

fn get_app_visuals() -> Visuals {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = Color32::from_gray(40);
    visuals.window_corner_radius = 1.into();
    visuals.menu_corner_radius = CornerRadius::same(2);
    visuals.popup_shadow = Shadow::NONE;
    visuals.window_stroke = Stroke::new(0.5, Color32::from_white_alpha(200));
    visuals.selection.bg_fill = PRIMARY_COLOR;
    visuals
}

fn get_app_spacing() -> Spacing {
    let mut spacing = Spacing::default();
    spacing.item_spacing = Vec2::new(4.0, 4.0);
    spacing.window_margin = Margin::ZERO;
    spacing.menu_margin = Margin::same(4);
    spacing
}
