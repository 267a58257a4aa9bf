//! Headless `--export <dir>` mode: evaluate the model once without a window,
//! write every chart PNG into `<dir>` and print the metric lines to stdout.
//!
//! Parameters come from `P11_PARAMS` (a JSON `ParameterSet`, missing fields
//! fall back to slider defaults) or the defaults when it is unset.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use impact::{Evaluation, ImpactPlugin, ParameterSet};
use ui::downloads::{write_export, DownloadError};
use ui::DashboardConfig;

pub const PARAMS_ENV: &str = "P11_PARAMS";

/// Parse a JSON parameter override, snapped onto the slider grid like the
/// sliders would have produced it.
pub fn parse_params(raw: &str) -> Result<ParameterSet, serde_json::Error> {
    serde_json::from_str::<ParameterSet>(raw).map(|params| params.snapped())
}

fn params_from_env() -> ParameterSet {
    let Ok(raw) = std::env::var(PARAMS_ENV) else {
        return ParameterSet::default();
    };
    match parse_params(&raw) {
        Ok(params) => params,
        Err(err) => {
            warn!("Ignoring invalid {PARAMS_ENV}: {err}");
            ParameterSet::default()
        }
    }
}

/// One `label: value` line per metric card and fixed figure.
pub fn metric_lines(evaluation: &Evaluation) -> Vec<String> {
    let presentation = &evaluation.presentation;
    presentation
        .metrics
        .iter()
        .chain(presentation.fixed_figures.iter())
        .map(|card| format!("{}: {}", card.label, card.value))
        .collect()
}

/// Render all four artifacts and write them into `dir`.
pub fn export_to(dir: &Path, evaluation: &Evaluation) -> Result<Vec<PathBuf>, DownloadError> {
    export::export_all(&evaluation.presentation)?
        .iter()
        .map(|artifact| write_export(dir, artifact))
        .collect()
}

pub fn run_export(dir: PathBuf) -> ExitCode {
    let config = DashboardConfig::from_env();

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()));
    app.insert_resource(config.locale);
    app.insert_resource(params_from_env());
    app.add_plugins(ImpactPlugin);
    app.update();

    let evaluation = app.world().resource::<Evaluation>();
    for line in metric_lines(evaluation) {
        println!("{line}");
    }

    match export_to(&dir, evaluation) {
        Ok(paths) => {
            for path in paths {
                info!("Wrote {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Export to {} failed: {err}", dir.display());
            ExitCode::FAILURE
        }
    }
}
