use std::path::PathBuf;
use std::process::ExitCode;

use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

mod headless;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    // Headless mode: `p11 --export <dir>` writes every chart and exits.
    if let Some(pos) = args.iter().position(|a| a == "--export") {
        let Some(dir) = args.get(pos + 1) else {
            eprintln!("usage: p11 --export <dir>");
            return ExitCode::from(2);
        };
        return headless::run_export(PathBuf::from(dir));
    }

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "P11 Impact Visualizer".to_string(),
                resolution: (1440.0, 900.0).into(),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
            unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
        })
        .add_plugins((impact::ImpactPlugin, ui::UiPlugin))
        .add_systems(Startup, |mut commands: Commands| {
            commands.spawn(Camera2d);
        })
        .run();

    ExitCode::SUCCESS
}
