//! Chart downloads: render on request and write into the export directory.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use export::{ChartExport, ChartStyle, ExportError, COMBINED_FILENAME};
use impact::{ChartKind, Evaluation, Locale, Presentation};

use crate::config::DashboardConfig;
use crate::status::StatusMessage;

/// A download button was pressed.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportRequest {
    Chart(ChartKind),
    Combined,
}

impl ExportRequest {
    pub fn filename(self) -> &'static str {
        match self {
            ExportRequest::Chart(kind) => kind.filename(),
            ExportRequest::Combined => COMBINED_FILENAME,
        }
    }
}

#[derive(Debug)]
pub enum DownloadError {
    Export(ExportError),
    Io(std::io::Error),
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadError::Export(e) => write!(f, "{e}"),
            DownloadError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for DownloadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DownloadError::Export(e) => Some(e),
            DownloadError::Io(e) => Some(e),
        }
    }
}

impl From<ExportError> for DownloadError {
    fn from(e: ExportError) -> Self {
        DownloadError::Export(e)
    }
}

impl From<std::io::Error> for DownloadError {
    fn from(e: std::io::Error) -> Self {
        DownloadError::Io(e)
    }
}

/// Render the requested artifact from `presentation`.
pub fn render_request(
    presentation: &Presentation,
    request: ExportRequest,
) -> Result<ChartExport, ExportError> {
    match request {
        ExportRequest::Chart(kind) => {
            export::export_chart(presentation.chart(kind), &ChartStyle::single())
        }
        ExportRequest::Combined => export::export_combined(presentation, &ChartStyle::combined()),
    }
}

/// Write `artifact` into `dir`, creating the directory if needed.
pub fn write_export(dir: &Path, artifact: &ChartExport) -> Result<PathBuf, DownloadError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(artifact.filename);
    fs::write(&path, &artifact.bytes)?;
    Ok(path)
}

pub fn handle_export_requests(
    mut requests: EventReader<ExportRequest>,
    evaluation: Res<Evaluation>,
    config: Res<DashboardConfig>,
    locale: Res<Locale>,
    mut status: ResMut<StatusMessage>,
) {
    for request in requests.read() {
        let saved = render_request(&evaluation.presentation, *request)
            .map_err(DownloadError::from)
            .and_then(|artifact| write_export(&config.export_dir, &artifact));
        match saved {
            Ok(path) => {
                info!("Exported {} to {}", request.filename(), path.display());
                let path = path.display().to_string();
                status.set(locale.fill("downloads.saved", &[("path", &path)]), false);
            }
            Err(err) => {
                warn!("Failed to export {}: {err}", request.filename());
                let error = err.to_string();
                status.set(
                    locale.fill(
                        "downloads.failed",
                        &[("file", request.filename()), ("error", &error)],
                    ),
                    true,
                );
            }
        }
    }
}

/// Download handling without any rendering surface, so it can run headless.
pub struct DownloadsPlugin;

impl Plugin for DownloadsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ExportRequest>()
            .init_resource::<StatusMessage>()
            .init_resource::<DashboardConfig>()
            .add_systems(
                Update,
                handle_export_requests.after(impact::ImpactRecomputeSet),
            );
    }
}
