//! PNG export of impact charts.
//!
//! Rendering happens fully in memory: callers get bytes back and decide
//! where (or whether) to write them.

use impact::{ChartSeries, Presentation};
use plotters::prelude::*;

pub mod error;
pub mod fonts;
mod panel;
pub mod png;
pub mod style;

pub use error::ExportError;
pub use png::{PNG_MIME, PNG_SIGNATURE};
pub use style::ChartStyle;

/// Filename of the three-panel overview.
pub const COMBINED_FILENAME: &str = "Analisis_Impactos.png";

/// One rendered artifact, ready to be saved or offered for download.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartExport {
    pub filename: &'static str,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// Render one indicator's two-bar chart.
pub fn render_chart(series: &ChartSeries, style: &ChartStyle) -> Result<Vec<u8>, ExportError> {
    render_panels(std::slice::from_ref(series), style)
}

/// Render the given series as panels side by side, in order.
pub fn render_combined(series: &[ChartSeries], style: &ChartStyle) -> Result<Vec<u8>, ExportError> {
    render_panels(series, style)
}

fn render_panels(series: &[ChartSeries], style: &ChartStyle) -> Result<Vec<u8>, ExportError> {
    if series.is_empty() {
        return Err(ExportError::NoSeries);
    }
    if style.width == 0 || style.height == 0 {
        return Err(ExportError::EmptyCanvas {
            width: style.width,
            height: style.height,
        });
    }
    if let Some(bad) = series.iter().find(|s| !s.y_max.is_finite()) {
        return Err(ExportError::NonFiniteAxis {
            title: bad.title.clone(),
            y_max: bad.y_max,
        });
    }
    fonts::ensure_registered()?;

    let (width, height) = (style.width, style.height);
    let mut pixels = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;
        let panels = root.split_evenly((1, series.len()));
        for (area, s) in panels.iter().zip(series) {
            panel::draw_panel(area, s, style)?;
        }
        root.present()?;
    }
    png::encode_rgb(&pixels, width, height)
}

/// Render a single chart into a named artifact.
pub fn export_chart(series: &ChartSeries, style: &ChartStyle) -> Result<ChartExport, ExportError> {
    Ok(ChartExport {
        filename: series.filename,
        mime: PNG_MIME,
        bytes: render_chart(series, style)?,
    })
}

/// Render the combined overview into a named artifact.
pub fn export_combined(
    presentation: &Presentation,
    style: &ChartStyle,
) -> Result<ChartExport, ExportError> {
    Ok(ChartExport {
        filename: COMBINED_FILENAME,
        mime: PNG_MIME,
        bytes: render_combined(&presentation.charts, style)?,
    })
}

/// The three single charts followed by the combined overview.
pub fn export_all(presentation: &Presentation) -> Result<Vec<ChartExport>, ExportError> {
    let single = ChartStyle::single();
    let mut exports = presentation
        .charts
        .iter()
        .map(|series| export_chart(series, &single))
        .collect::<Result<Vec<_>, _>>()?;
    exports.push(export_combined(presentation, &ChartStyle::combined())?);
    Ok(exports)
}
