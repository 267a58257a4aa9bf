use bevy::prelude::*;
use bevy_egui::EguiPlugin;

mod charts;
pub mod config;
pub mod dashboard;
pub mod downloads;
pub mod logos;
mod metric_cards;
mod parameter_panel;
pub mod status;
pub mod theme;

#[cfg(test)]
mod integration_tests;

pub use config::DashboardConfig;
pub use downloads::{DownloadsPlugin, ExportRequest};

/// The interactive dashboard. Expects `impact::ImpactPlugin` to be added too.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<DashboardConfig>() {
            app.insert_resource(DashboardConfig::from_env());
        }
        let locale = app.world().resource::<DashboardConfig>().locale;

        app.add_plugins(EguiPlugin)
            .add_plugins(DownloadsPlugin)
            .insert_resource(locale)
            .init_resource::<logos::LogoState>()
            .init_resource::<logos::LogoTextures>()
            .add_systems(
                Startup,
                (theme::apply_brand_theme, logos::start_logo_fetch),
            )
            .add_systems(
                Update,
                (
                    status::tick_status_message,
                    logos::poll_logo_fetch,
                    dashboard::dashboard_ui.before(impact::ImpactRecomputeSet),
                ),
            );
    }
}
