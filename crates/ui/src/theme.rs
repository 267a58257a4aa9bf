use bevy_egui::{egui, EguiContexts};
use impact::palette::{self, Rgb};

pub fn color32(color: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(color.0, color.1, color.2)
}

/// Light theme in the project palette.
pub fn apply_brand_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    let dark = color32(palette::PRIMARY_DARK);
    let green = color32(palette::PRIMARY_GREEN);
    let light_blue = color32(palette::PARTNER_LIGHT_BLUE);
    let panel = egui::Color32::from_rgb(244, 248, 247);

    style.visuals.panel_fill = panel;
    style.visuals.window_fill = color32(palette::WHITE);
    style.visuals.faint_bg_color = egui::Color32::from_rgb(232, 241, 240);
    style.visuals.override_text_color = Some(dark);
    style.visuals.hyperlink_color = light_blue;

    style.visuals.widgets.inactive.bg_fill = egui::Color32::from_rgb(214, 228, 226);
    style.visuals.widgets.inactive.weak_bg_fill = egui::Color32::from_rgb(214, 228, 226);
    style.visuals.widgets.hovered.bg_fill = light_blue;
    style.visuals.widgets.hovered.weak_bg_fill = light_blue;
    style.visuals.widgets.active.bg_fill = dark;
    style.visuals.widgets.active.weak_bg_fill = dark;

    // Slider rail fill and text selection.
    style.visuals.selection.bg_fill = green;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, dark);

    let window_rounding = egui::CornerRadius::same(8);
    let widget_rounding = egui::CornerRadius::same(6);
    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color32_preserves_channels() {
        let c = color32(palette::PARTNER_DARK_BLUE);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (0, 54, 110, 255));
    }
}
