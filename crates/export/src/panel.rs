//! The one routine that draws a baseline-vs-projection bar panel. Single
//! and combined exports both go through it.

use impact::config::BAR_WIDTH;
use impact::palette::Rgb;
use impact::ChartSeries;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::fonts::FONT_FAMILY;
use crate::style::ChartStyle;

pub(crate) fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

/// X-axis position of the center of bar `index`. Bars sit in unit-wide slots.
pub(crate) fn bar_center(index: usize) -> f64 {
    index as f64 + 0.5
}

pub(crate) fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    series: &ChartSeries,
    style: &ChartStyle,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let text = rgb(series.text_color);
    let title_style = (FONT_FAMILY, style.title_size)
        .into_font()
        .color(&rgb(series.title_color));
    let label_style = (FONT_FAMILY, style.label_size).into_font().color(&text);
    let axis_desc_style = (FONT_FAMILY, style.axis_desc_size)
        .into_font()
        .color(&rgb(series.axis_color));
    let value_style = (FONT_FAMILY, style.value_size)
        .into_font()
        .color(&text)
        .pos(Pos::new(HPos::Center, VPos::Bottom));

    let x_axis = (0f64..series.values.len() as f64)
        .with_key_points((0..series.values.len()).map(bar_center).collect());

    let mut chart = ChartBuilder::on(area)
        .caption(&series.title, title_style)
        .margin(style.margin)
        .x_label_area_size(style.x_label_area)
        .y_label_area_size(style.y_label_area)
        .build_cartesian_2d(x_axis, 0f64..series.y_max)?;

    let x_label = |x: &f64| {
        let index = x.floor().max(0.0) as usize;
        series.labels.get(index).cloned().unwrap_or_default()
    };
    let y_label = |y: &f64| series.tick_label(*y);

    chart
        .configure_mesh()
        .disable_mesh()
        .x_label_formatter(&x_label)
        .y_label_formatter(&y_label)
        .y_labels(6)
        .x_label_style(label_style.clone())
        .y_label_style(label_style)
        .y_desc(series.axis_label.as_str())
        .axis_desc_style(axis_desc_style)
        .axis_style(text.stroke_width(2))
        .draw()?;

    let half = BAR_WIDTH / 2.0;
    chart.draw_series(
        series
            .values
            .iter()
            .zip(series.colors)
            .enumerate()
            .map(|(index, (value, color))| {
                let center = bar_center(index);
                Rectangle::new(
                    [(center - half, 0.0), (center + half, *value)],
                    rgb(color).filled(),
                )
            }),
    )?;

    chart.draw_series(series.value_labels.iter().enumerate().map(|(index, label)| {
        Text::new(
            label.clone(),
            (bar_center(index), series.label_anchor(index)),
            value_style.clone(),
        )
    }))?;

    Ok(())
}
