//! The single dashboard screen: parameter side panel plus the scrolling
//! results page.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use export::COMBINED_FILENAME;
use impact::palette;
use impact::{ChartKind, Evaluation, Locale, ParameterSet};

use crate::charts;
use crate::downloads::ExportRequest;
use crate::logos::{self, LogoState, LogoTextures};
use crate::metric_cards;
use crate::parameter_panel;
use crate::status::{self, StatusMessage};
use crate::theme::color32;

const SIDE_PANEL_WIDTH: f32 = 300.0;

pub fn dashboard_ui(
    mut contexts: EguiContexts,
    mut params: ResMut<ParameterSet>,
    mut locale: ResMut<Locale>,
    evaluation: Res<Evaluation>,
    status: Res<StatusMessage>,
    logo_state: Res<LogoState>,
    mut logo_textures: ResMut<LogoTextures>,
    mut exports: EventWriter<ExportRequest>,
) {
    let ctx = contexts.ctx_mut().clone();
    let mut edited = *params;
    let mut language = *locale;
    let mut reset = false;

    egui::SidePanel::left("parameters")
        .resizable(false)
        .exact_width(SIDE_PANEL_WIDTH)
        .show(&ctx, |ui| {
            ui.add_space(8.0);
            ui.heading(language.t("sidebar.header"));
            ui.add_space(4.0);
            parameter_panel::language_selector(ui, &mut language);
            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| {
                parameter_panel::parameter_sliders(ui, &mut edited, language);
                if ui.button(language.t("sidebar.reset")).clicked() {
                    reset = true;
                }
                parameter_panel::version_footer(ui, language);
            });
        });

    if reset {
        edited = ParameterSet::default();
    }
    // Any mutable deref marks the resource changed and triggers a recompute.
    if edited != *params {
        *params = edited;
        ctx.request_repaint();
    }
    if language != *locale {
        *locale = language;
        ctx.request_repaint();
    }

    let presentation = &evaluation.presentation;
    let locale = language;

    egui::CentralPanel::default().show(&ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading(
                egui::RichText::new(locale.t("app.title"))
                    .size(28.0)
                    .color(color32(palette::PRIMARY_DARK)),
            );
            ui.label(egui::RichText::new(locale.t("app.subtitle")).size(18.0).strong());
            ui.label(locale.t("app.intro"));
            ui.add_space(12.0);

            ui.heading(locale.t("results.header"));
            metric_cards::metric_grid(
                ui,
                presentation
                    .metrics
                    .iter()
                    .chain(presentation.fixed_figures.iter()),
            );
            ui.separator();

            ui.heading(locale.t("charts.header"));
            charts::combined_chart(ui, presentation);
            ui.add_space(12.0);

            ui.heading(locale.t("downloads.header"));
            ui.horizontal_wrapped(|ui| {
                for kind in ChartKind::ALL {
                    let label = locale.fill("downloads.button", &[("file", kind.filename())]);
                    if ui.button(label).clicked() {
                        exports.send(ExportRequest::Chart(kind));
                    }
                }
                let label = locale.fill("downloads.combined", &[("file", COMBINED_FILENAME)]);
                if ui.button(label).clicked() {
                    exports.send(ExportRequest::Combined);
                }
            });
            ui.separator();

            ui.heading(locale.t("about.header"));
            ui.label(locale.t("about.status"));
            ui.separator();

            ui.vertical_centered(|ui| {
                ui.label(locale.t("footer.attribution"));
                ui.add_space(16.0);
                logos::logo_row(ui, &logo_state, &mut logo_textures, locale);
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(locale.t("footer.location"))
                        .small()
                        .color(egui::Color32::GRAY),
                );
            });
        });
    });

    status::status_toast(&ctx, &status);
}
