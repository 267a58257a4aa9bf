//! Partner logos fetched once at startup on the I/O task pool.
//!
//! A failed fetch never blocks the dashboard: it leaves an inline notice in
//! the footer and everything else keeps rendering.

use std::fmt;
use std::time::Duration;

use bevy::prelude::*;
use bevy::tasks::{block_on, IoTaskPool, Task};
use bevy_egui::egui;

use crate::config::{DashboardConfig, LogoSource, LOGO_SOURCES};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum LogoError {
    /// Connection, timeout or non-success HTTP status.
    Http { name: &'static str, message: String },
    /// The payload is not a decodable image.
    Decode { name: &'static str, message: String },
}

impl fmt::Display for LogoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogoError::Http { name, message } => write!(f, "{name}: request failed: {message}"),
            LogoError::Decode { name, message } => {
                write!(f, "{name}: not a valid image: {message}")
            }
        }
    }
}

impl std::error::Error for LogoError {}

// ---------------------------------------------------------------------------
// Fetching and decoding
// ---------------------------------------------------------------------------

/// A decoded logo, ready to be uploaded as a texture.
#[derive(Debug, Clone, PartialEq)]
pub struct Logo {
    pub name: &'static str,
    pub size: [usize; 2],
    pub rgba: Vec<u8>,
}

pub fn decode_logo(name: &'static str, bytes: &[u8]) -> Result<Logo, LogoError> {
    let image = image::load_from_memory(bytes)
        .map_err(|e| LogoError::Decode {
            name,
            message: e.to_string(),
        })?
        .to_rgba8();
    let size = [image.width() as usize, image.height() as usize];
    Ok(Logo {
        name,
        size,
        rgba: image.into_raw(),
    })
}

fn fetch_logo(client: &reqwest::blocking::Client, source: &LogoSource) -> Result<Logo, LogoError> {
    let http = |e: reqwest::Error| LogoError::Http {
        name: source.name,
        message: e.to_string(),
    };
    let bytes = client
        .get(source.url)
        .send()
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.bytes())
        .map_err(http)?;
    decode_logo(source.name, &bytes)
}

/// Fetch every logo in order. Any failure aborts the whole set.
pub fn fetch_logos(sources: &[LogoSource], timeout: Duration) -> Result<Vec<Logo>, LogoError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| LogoError::Http {
            name: "client",
            message: e.to_string(),
        })?;
    sources
        .iter()
        .map(|source| fetch_logo(&client, source))
        .collect()
}

// ---------------------------------------------------------------------------
// ECS
// ---------------------------------------------------------------------------

#[derive(Resource, Default)]
pub enum LogoState {
    #[default]
    Idle,
    Disabled,
    Loading(Task<Result<Vec<Logo>, LogoError>>),
    Ready(Vec<Logo>),
    Failed(String),
}

/// Textures uploaded from [`LogoState::Ready`], created on first draw.
#[derive(Resource, Default)]
pub struct LogoTextures(pub Vec<egui::TextureHandle>);

pub fn start_logo_fetch(config: Res<DashboardConfig>, mut state: ResMut<LogoState>) {
    if !config.fetch_logos {
        info!("Logo download disabled");
        *state = LogoState::Disabled;
        return;
    }
    let timeout = config.logo_timeout;
    let task = IoTaskPool::get().spawn(async move { fetch_logos(&LOGO_SOURCES, timeout) });
    *state = LogoState::Loading(task);
}

pub fn poll_logo_fetch(mut state: ResMut<LogoState>) {
    let LogoState::Loading(task) = &mut *state else {
        return;
    };
    let Some(result) = block_on(futures_lite::future::poll_once(task)) else {
        return;
    };
    *state = match result {
        Ok(logos) => {
            info!("Loaded {} partner logos", logos.len());
            LogoState::Ready(logos)
        }
        Err(err) => {
            warn!("Logo download failed: {err}");
            LogoState::Failed(err.to_string())
        }
    };
}

/// Footer logo row, or the loading/failure notice in its place.
pub(crate) fn logo_row(
    ui: &mut egui::Ui,
    state: &LogoState,
    textures: &mut LogoTextures,
    locale: impact::Locale,
) {
    match state {
        LogoState::Idle | LogoState::Disabled => {}
        LogoState::Loading(_) => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(locale.t("logos.loading"));
            });
        }
        LogoState::Failed(error) => {
            ui.colored_label(
                egui::Color32::from_rgb(200, 60, 40),
                locale.fill("logos.failed", &[("error", error)]),
            );
        }
        LogoState::Ready(logos) => {
            if textures.0.len() != logos.len() {
                textures.0 = logos
                    .iter()
                    .map(|logo| {
                        ui.ctx().load_texture(
                            logo.name,
                            egui::ColorImage::from_rgba_unmultiplied(logo.size, &logo.rgba),
                            egui::TextureOptions::LINEAR,
                        )
                    })
                    .collect();
            }
            ui.horizontal(|ui| {
                for texture in &textures.0 {
                    let size = texture.size_vec2();
                    let scale = LOGO_WIDTH / size.x.max(1.0);
                    ui.add(egui::Image::new((texture.id(), size * scale)));
                }
            });
        }
    }
}

const LOGO_WIDTH: f32 = 100.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_png_logo() {
        let pixels = [0u8, 54, 110].repeat(6);
        let png = export::png::encode_rgb(&pixels, 3, 2).unwrap();
        let logo = decode_logo("sustrend", &png).unwrap();
        assert_eq!(logo.size, [3, 2]);
        assert_eq!(logo.rgba.len(), 3 * 2 * 4);
        assert_eq!(&logo.rgba[..4], &[0, 54, 110, 255]);
    }

    #[test]
    fn test_decode_rejects_html() {
        let err = decode_logo("ttgreenfoods", b"<html>quota exceeded</html>").unwrap_err();
        assert!(matches!(err, LogoError::Decode { name: "ttgreenfoods", .. }));
        assert!(err.to_string().contains("ttgreenfoods"), "got: {err}");
    }

    #[test]
    fn test_unreachable_host_is_http_error() {
        let source = LogoSource {
            name: "nowhere",
            url: "http://127.0.0.1:9/logo.png",
        };
        let err = fetch_logos(&[source], Duration::from_millis(500)).unwrap_err();
        assert!(matches!(err, LogoError::Http { name: "nowhere", .. }), "got: {err:?}");
    }

    #[test]
    fn test_disabled_config_skips_fetch() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(DashboardConfig {
            fetch_logos: false,
            ..Default::default()
        });
        app.init_resource::<LogoState>();
        app.add_systems(Startup, start_logo_fetch);
        app.update();
        assert!(matches!(
            *app.world().resource::<LogoState>(),
            LogoState::Disabled
        ));
    }
}
