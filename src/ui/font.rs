use egui::{FontDefinitions, FontFamily, epaint::text::FontData};

pub const ICON_FONT: &str = "phosphor_fill";

pub fn get_fonts() -> FontDefinitions {
    let mut fonts = FontDefinitions::default();

    fonts.font_data.insert(
        ICON_FONT.into(),
        FontData::from_static(egui_phosphor::Variant::Fill.font_bytes()).into(),
    );
    fonts.families.insert(
        FontFamily::Name(ICON_FONT.into()),
        vec![ICON_FONT.into()],
    );
    if let Some(font_keys) = fonts.families.get_mut(&FontFamily::Proportional) {
        font_keys.insert(1, ICON_FONT.into());
    }
    if let Some(font_keys) = fonts.families.get_mut(&FontFamily::Monospace) {
        font_keys.insert(1, ICON_FONT.into());
    }

    fonts
}
