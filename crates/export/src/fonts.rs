//! Registers egui's bundled sans-serif face with the plotters text
//! rasterizer, so PNG rendering never looks up system fonts.

use std::borrow::Cow;
use std::sync::OnceLock;

use bevy_egui::egui;
use plotters::style::{register_font, FontStyle};

use crate::error::ExportError;

/// Family name every chart text style refers to.
pub const FONT_FAMILY: &str = "sans-serif";

const BUNDLED_FONT: &str = "Ubuntu-Light";

static REGISTERED: OnceLock<Result<(), String>> = OnceLock::new();

/// Register the chart font once per process.
pub fn ensure_registered() -> Result<(), ExportError> {
    REGISTERED
        .get_or_init(register)
        .clone()
        .map_err(ExportError::Font)
}

fn register() -> Result<(), String> {
    let bytes = bundled_font()?;
    register_font(FONT_FAMILY, FontStyle::Normal, bytes)
        .map_err(|err| format!("cannot register {BUNDLED_FONT}: {err:?}"))
}

fn bundled_font() -> Result<&'static [u8], String> {
    let fonts = egui::FontDefinitions::default();
    match fonts.font_data.get(BUNDLED_FONT).map(|data| &data.font) {
        Some(Cow::Borrowed(bytes)) => Ok(*bytes),
        Some(Cow::Owned(_)) => Err(format!("bundled font {BUNDLED_FONT} is not static")),
        None => Err(format!("bundled font {BUNDLED_FONT} not found")),
    }
}
