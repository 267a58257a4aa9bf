use bevy::prelude::*;
use bevy_egui::egui;

use crate::theme;

/// Seconds a notice stays on screen.
const STATUS_SECONDS: f32 = 4.0;

/// Transient notice shown as a toast at the top of the dashboard.
#[derive(Resource, Default)]
pub struct StatusMessage {
    pub text: String,
    pub timer: f32,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn set(&mut self, text: impl Into<String>, is_error: bool) {
        self.text = text.into();
        self.timer = STATUS_SECONDS;
        self.is_error = is_error;
    }

    pub fn active(&self) -> bool {
        self.timer > 0.0
    }
}

pub fn tick_status_message(time: Res<Time>, mut status: ResMut<StatusMessage>) {
    if status.timer > 0.0 {
        status.timer -= time.delta_secs();
    }
}

pub(crate) fn status_toast(ctx: &egui::Context, status: &StatusMessage) {
    if !status.active() {
        return;
    }
    let color = if status.is_error {
        egui::Color32::from_rgb(255, 120, 100)
    } else {
        theme::color32(impact::palette::PRIMARY_GREEN)
    };
    egui::Area::new(egui::Id::new("status_toast"))
        .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 16.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .fill(egui::Color32::from_rgba_premultiplied(14, 69, 74, 230))
                .show(ui, |ui| {
                    ui.colored_label(color, &status.text);
                });
        });
    // Keep repainting while the toast counts down.
    ctx.request_repaint();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_inactive_by_default() {
        assert!(!StatusMessage::default().active());
    }

    #[test]
    fn test_set_activates_and_records_error_flag() {
        let mut status = StatusMessage::default();
        status.set("Saved CO2_Capturado.png", false);
        assert!(status.active());
        assert!(!status.is_error);

        status.set("disk full", true);
        assert!(status.is_error);
        assert_eq!(status.text, "disk full");
    }
}
