// ---------------------------------------------------------------------------
// ExportError: failures while rendering a chart to PNG
// ---------------------------------------------------------------------------

use std::fmt;

use plotters::drawing::DrawingAreaErrorKind;

/// Errors that can occur while rendering or encoding a chart.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportError {
    /// The plotting backend rejected a draw call.
    Drawing(String),
    /// PNG encoding failed.
    Encoding(String),
    /// The bundled font could not be registered with the text rasterizer.
    Font(String),
    /// Requested canvas has no pixels.
    EmptyCanvas { width: u32, height: u32 },
    /// A chart's axis bound is NaN or infinite, so no scale can be drawn.
    NonFiniteAxis { title: String, y_max: f64 },
    /// Nothing to render.
    NoSeries,
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Drawing(msg) => write!(f, "Drawing error: {msg}"),
            ExportError::Encoding(msg) => write!(f, "PNG encoding error: {msg}"),
            ExportError::Font(msg) => write!(f, "Font error: {msg}"),
            ExportError::EmptyCanvas { width, height } => {
                write!(f, "Empty canvas: {width}x{height}")
            }
            ExportError::NonFiniteAxis { title, y_max } => {
                write!(f, "Chart '{title}' has a non-finite axis bound ({y_max})")
            }
            ExportError::NoSeries => write!(f, "No chart series to render"),
        }
    }
}

impl std::error::Error for ExportError {}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ExportError {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        ExportError::Drawing(e.to_string())
    }
}

impl From<image::ImageError> for ExportError {
    fn from(e: image::ImageError) -> Self {
        ExportError::Encoding(e.to_string())
    }
}
