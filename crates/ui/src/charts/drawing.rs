//! Geometry and painting for a two-bar baseline-vs-projection panel.

use bevy_egui::egui;
use impact::config::BAR_WIDTH;
use impact::ChartSeries;

use crate::theme::color32;

const TITLE_HEIGHT: f32 = 34.0;
const AXIS_DESC_HEIGHT: f32 = 18.0;
const CATEGORY_HEIGHT: f32 = 24.0;
const TICK_LABEL_WIDTH: f32 = 86.0;
const RIGHT_PAD: f32 = 8.0;
const TARGET_TICKS: usize = 5;

/// Screen-space y of `value` inside `plot`, for an axis from 0 to `y_max`.
pub(crate) fn value_to_y(plot: egui::Rect, value: f64, y_max: f64) -> f32 {
    if !value.is_finite() || y_max <= 0.0 {
        return plot.bottom();
    }
    let fraction = (value / y_max).clamp(0.0, 1.0) as f32;
    plot.bottom() - fraction * plot.height()
}

/// Rectangles for the baseline and projection bars. Each bar is centered
/// in its half of the plot and covers `BAR_WIDTH` of it.
pub(crate) fn bar_rects(plot: egui::Rect, series: &ChartSeries) -> [egui::Rect; 2] {
    let slot = plot.width() / 2.0;
    let half_bar = slot * BAR_WIDTH as f32 / 2.0;
    std::array::from_fn(|index| {
        let center = plot.left() + slot * (index as f32 + 0.5);
        let top = value_to_y(plot, series.values[index], series.y_max);
        egui::Rect::from_min_max(
            egui::pos2(center - half_bar, top),
            egui::pos2(center + half_bar, plot.bottom()),
        )
    })
}

/// Evenly spaced tick values from 0 up to `y_max`, on a 1-2-5 step.
pub(crate) fn nice_ticks(y_max: f64, target: usize) -> Vec<f64> {
    if !y_max.is_finite() || y_max <= 0.0 || target == 0 {
        return vec![0.0];
    }
    let raw = y_max / target as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|step| *step >= raw)
        .unwrap_or(10.0 * magnitude);
    let count = (y_max / step).floor() as usize;
    (0..=count).map(|i| i as f64 * step).collect()
}

/// Paint one panel into a freshly allocated rect of `size`.
pub(crate) fn draw_bar_panel(ui: &mut egui::Ui, series: &ChartSeries, size: egui::Vec2) {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 6.0, egui::Color32::WHITE);

    let text_color = color32(series.text_color);
    let plot = egui::Rect::from_min_max(
        egui::pos2(
            rect.left() + TICK_LABEL_WIDTH,
            rect.top() + TITLE_HEIGHT + AXIS_DESC_HEIGHT,
        ),
        egui::pos2(rect.right() - RIGHT_PAD, rect.bottom() - CATEGORY_HEIGHT),
    );
    if plot.width() <= 0.0 || plot.height() <= 0.0 {
        return;
    }

    painter.text(
        egui::pos2(rect.center().x, rect.top() + 6.0),
        egui::Align2::CENTER_TOP,
        &series.title,
        egui::FontId::proportional(16.0),
        color32(series.title_color),
    );
    painter.text(
        egui::pos2(plot.left(), rect.top() + TITLE_HEIGHT),
        egui::Align2::LEFT_TOP,
        &series.axis_label,
        egui::FontId::proportional(12.0),
        color32(series.axis_color),
    );

    // Y ticks.
    for tick in nice_ticks(series.y_max, TARGET_TICKS) {
        let y = value_to_y(plot, tick, series.y_max);
        painter.line_segment(
            [egui::pos2(plot.left() - 4.0, y), egui::pos2(plot.left(), y)],
            egui::Stroke::new(1.0, text_color),
        );
        painter.text(
            egui::pos2(plot.left() - 6.0, y),
            egui::Align2::RIGHT_CENTER,
            series.tick_label(tick),
            egui::FontId::proportional(11.0),
            text_color,
        );
    }

    // Left and bottom spines only.
    let axis = egui::Stroke::new(1.0, text_color);
    painter.line_segment([plot.left_top(), plot.left_bottom()], axis);
    painter.line_segment([plot.left_bottom(), plot.right_bottom()], axis);

    let bars = bar_rects(plot, series);
    for (index, bar) in bars.iter().enumerate() {
        painter.rect_filled(*bar, 0.0, color32(series.colors[index]));
        let label_y = value_to_y(plot, series.label_anchor(index), series.y_max);
        painter.text(
            egui::pos2(bar.center().x, label_y),
            egui::Align2::CENTER_BOTTOM,
            &series.value_labels[index],
            egui::FontId::proportional(12.0),
            text_color,
        );
        painter.text(
            egui::pos2(bar.center().x, plot.bottom() + 4.0),
            egui::Align2::CENTER_TOP,
            &series.labels[index],
            egui::FontId::proportional(12.0),
            text_color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use impact::{compute, get_baselines, present, ChartKind, Locale, ParameterSet};

    fn plot() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(100.0, 50.0), egui::vec2(200.0, 400.0))
    }

    fn series(kind: ChartKind, params: &ParameterSet) -> ChartSeries {
        let presentation = present(&get_baselines(), &compute(params), Locale::English);
        presentation.chart(kind).clone()
    }

    #[test]
    fn test_value_to_y_bounds() {
        let plot = plot();
        assert_eq!(value_to_y(plot, 0.0, 10.0), plot.bottom());
        assert_eq!(value_to_y(plot, 10.0, 10.0), plot.top());
        assert_eq!(value_to_y(plot, 5.0, 10.0), plot.center().y);
        assert_eq!(value_to_y(plot, 50.0, 10.0), plot.top());
        assert_eq!(value_to_y(plot, -3.0, 10.0), plot.bottom());
        assert_eq!(value_to_y(plot, f64::NAN, 10.0), plot.bottom());
    }

    #[test]
    fn test_bars_share_baseline_and_stay_below_top() {
        let series = series(ChartKind::Co2, &ParameterSet::default());
        let [baseline, projection] = bar_rects(plot(), &series);
        assert_eq!(baseline.bottom(), plot().bottom());
        assert_eq!(projection.bottom(), plot().bottom());
        // Headroom keeps the tallest bar off the top edge.
        assert!(projection.top() > plot().top());
        assert!(projection.height() > baseline.height());
        let ratio = projection.height() / baseline.height();
        assert!((ratio - 102.76 / 70.0).abs() < 1e-3, "ratio {ratio}");
    }

    #[test]
    fn test_bar_width_and_centering() {
        let series = series(ChartKind::Water, &ParameterSet::default());
        let [baseline, projection] = bar_rects(plot(), &series);
        assert!((baseline.width() - 60.0).abs() < 1e-3);
        assert!((baseline.center().x - 150.0).abs() < 1e-3);
        assert!((projection.center().x - 250.0).abs() < 1e-3);
    }

    #[test]
    fn test_nice_ticks() {
        assert_eq!(nice_ticks(118.174, 5), vec![0.0, 50.0, 100.0]);

        let revenue = nice_ticks(207_000_000.0, 5);
        assert_eq!(revenue.len(), 5);
        assert!((revenue[1] - 50_000_000.0).abs() < 1e-3, "{revenue:?}");
        assert!((revenue[4] - 200_000_000.0).abs() < 1e-3, "{revenue:?}");

        let unit = nice_ticks(1.0, 5);
        assert!(unit.len() >= 5, "{unit:?}");
        assert!(unit.iter().all(|tick| *tick <= 1.0 + 1e-9));

        assert_eq!(nice_ticks(f64::INFINITY, 5), vec![0.0]);
        assert_eq!(nice_ticks(0.0, 5), vec![0.0]);
    }
}
