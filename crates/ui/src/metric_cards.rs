use bevy_egui::egui;
use impact::palette;
use impact::MetricCard;

use crate::theme::color32;

/// Cards per row.
const CARDS_PER_ROW: usize = 3;

pub(crate) fn metric_card(ui: &mut egui::Ui, card: &MetricCard) {
    egui::Frame::group(ui.style())
        .fill(color32(palette::WHITE))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(egui::RichText::new(&card.label).strong());
            ui.label(
                egui::RichText::new(&card.value)
                    .size(24.0)
                    .color(color32(palette::PARTNER_DARK_BLUE)),
            );
            ui.label(egui::RichText::new(&card.caption).small().weak());
        });
}

/// Lay cards out in rows of three.
pub(crate) fn metric_grid<'a>(ui: &mut egui::Ui, cards: impl IntoIterator<Item = &'a MetricCard>) {
    let cards: Vec<&MetricCard> = cards.into_iter().collect();
    for row in cards.chunks(CARDS_PER_ROW) {
        ui.columns(CARDS_PER_ROW, |columns| {
            for (column, card) in columns.iter_mut().zip(row) {
                metric_card(column, card);
            }
        });
        ui.add_space(8.0);
    }
}
