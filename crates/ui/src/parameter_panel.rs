//! Side panel: one slider per entry of the parameter range table.

use bevy_egui::egui;
use impact::config::VISUALIZER_VERSION;
use impact::formatting::FormatPolicy;
use impact::parameters::SliderDisplay;
use impact::{Locale, ParameterRange, ParameterSet, PARAMETER_RANGES};

/// Text shown next to a slider for `value`.
pub(crate) fn slider_text(range: &ParameterRange, value: f64) -> String {
    match range.display {
        SliderDisplay::Number { decimals } => FormatPolicy::fixed(decimals).format(value),
        SliderDisplay::Percent => format!("{}%", FormatPolicy::rounded(1).format(value * 100.0)),
        SliderDisplay::Currency => FormatPolicy::currency(0).format(value),
    }
}

/// Draw the sliders over `params`. Values leaving a slider are clamped and
/// snapped onto its step grid. Returns true if any field changed.
pub(crate) fn parameter_sliders(
    ui: &mut egui::Ui,
    params: &mut ParameterSet,
    locale: Locale,
) -> bool {
    let mut changed = false;
    for range in &PARAMETER_RANGES {
        let mut value = params.get(range.key);
        ui.label(egui::RichText::new(locale.t(range.label_key)).strong())
            .on_hover_text(locale.t(range.help_key));
        let response = ui.add(
            egui::Slider::new(&mut value, range.min..=range.max)
                .step_by(range.step)
                .custom_formatter(|v, _| slider_text(range, v))
                .show_value(true),
        );
        let response = response.on_hover_text(locale.t(range.help_key));
        if response.changed() {
            let snapped = range.snap(value);
            if snapped != params.get(range.key) {
                params.set(range.key, snapped);
                changed = true;
            }
        }
        ui.add_space(6.0);
    }
    changed
}

pub(crate) fn language_selector(ui: &mut egui::Ui, locale: &mut Locale) -> bool {
    let mut selected = *locale;
    egui::ComboBox::from_label(locale.t("sidebar.language"))
        .selected_text(selected.name())
        .show_ui(ui, |ui| {
            for option in Locale::ALL {
                ui.selectable_value(&mut selected, option, option.name());
            }
        });
    if selected != *locale {
        *locale = selected;
        true
    } else {
        false
    }
}

pub(crate) fn version_footer(ui: &mut egui::Ui, locale: Locale) {
    ui.separator();
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(locale.fill("sidebar.version", &[("version", VISUALIZER_VERSION)]))
                .small()
                .color(egui::Color32::GRAY),
        );
        ui.label(
            egui::RichText::new(locale.t("sidebar.built_with"))
                .small()
                .color(egui::Color32::LIGHT_GRAY),
        );
    });
}
