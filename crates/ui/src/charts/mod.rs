//! Live three-panel chart drawn with the egui painter from the same
//! `ChartSeries` the PNG exporter renders.

mod drawing;

use bevy_egui::egui;
use impact::Presentation;

const PANEL_HEIGHT: f32 = 340.0;

pub(crate) fn combined_chart(ui: &mut egui::Ui, presentation: &Presentation) {
    ui.columns(presentation.charts.len(), |columns| {
        for (column, series) in columns.iter_mut().zip(&presentation.charts) {
            let size = egui::vec2(column.available_width(), PANEL_HEIGHT);
            drawing::draw_bar_panel(column, series, size);
        }
    });
}
