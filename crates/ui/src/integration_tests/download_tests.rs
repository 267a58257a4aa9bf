//! Headless tests for the download pipeline: request event, render, write,
//! status notice.

use std::path::PathBuf;

use bevy::prelude::*;
use export::PNG_SIGNATURE;
use impact::{ChartKind, ImpactPlugin, Locale, ParameterKey, ParameterSet};

use crate::config::DashboardConfig;
use crate::downloads::{DownloadsPlugin, ExportRequest};
use crate::status::StatusMessage;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("p11_ui_{name}_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn app_exporting_to(dir: PathBuf) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(DashboardConfig {
        export_dir: dir,
        fetch_logos: false,
        ..Default::default()
    });
    app.add_plugins(ImpactPlugin);
    app.add_plugins(DownloadsPlugin);
    app.update();
    app
}

fn request(app: &mut App, request: ExportRequest) {
    app.world_mut().send_event(request);
    app.update();
}

#[test]
fn test_chart_download_writes_png() {
    let dir = scratch_dir("single");
    let mut app = app_exporting_to(dir.clone());
    request(&mut app, ExportRequest::Chart(ChartKind::Co2));

    let bytes = std::fs::read(dir.join("CO2_Capturado.png")).unwrap();
    assert_eq!(bytes[..8], PNG_SIGNATURE);

    let status = app.world().resource::<StatusMessage>();
    assert!(status.active());
    assert!(!status.is_error, "unexpected error: {}", status.text);
    assert!(status.text.contains("CO2_Capturado.png"), "got: {}", status.text);

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn test_combined_download_uses_fixed_name() {
    let dir = scratch_dir("combined");
    let mut app = app_exporting_to(dir.clone());
    request(&mut app, ExportRequest::Combined);
    assert!(dir.join("Analisis_Impactos.png").is_file());
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn test_download_reflects_parameters_changed_same_frame() {
    let dir = scratch_dir("same_frame");
    let mut app = app_exporting_to(dir.clone());
    app.world_mut()
        .resource_mut::<ParameterSet>()
        .set(ParameterKey::SurfaceHa, 200.0);
    request(&mut app, ExportRequest::Chart(ChartKind::Water));

    let evaluation = app.world().resource::<impact::Evaluation>();
    assert_eq!(evaluation.parameters.surface_ha, 200.0);
    assert!(dir.join("Agua_Ahorrada.png").is_file());
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn test_unwritable_directory_reports_error() {
    let dir = scratch_dir("blocked");
    std::fs::create_dir_all(dir.parent().unwrap()).unwrap();
    // A regular file where the directory should be.
    std::fs::write(&dir, b"not a directory").unwrap();

    let mut app = app_exporting_to(dir.clone());
    app.insert_resource(Locale::Spanish);
    request(&mut app, ExportRequest::Chart(ChartKind::Revenue));

    let status = app.world().resource::<StatusMessage>();
    assert!(status.is_error);
    assert!(
        status.text.starts_with("No se pudo exportar Ingresos_Generados.png"),
        "got: {}",
        status.text
    );
    let _ = std::fs::remove_file(dir);
}

#[test]
fn test_non_finite_chart_reports_error() {
    let dir = scratch_dir("non_finite");
    let mut app = app_exporting_to(dir.clone());
    app.world_mut()
        .resource_mut::<ParameterSet>()
        .set(ParameterKey::BioinputPrice, f64::INFINITY);
    request(&mut app, ExportRequest::Chart(ChartKind::Revenue));

    let status = app.world().resource::<StatusMessage>();
    assert!(status.is_error);
    assert!(!dir.join("Ingresos_Generados.png").exists());
    let _ = std::fs::remove_dir_all(dir);
}
