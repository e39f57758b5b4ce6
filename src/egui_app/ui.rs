//! egui renderer for the application UI.

mod predict_form;
mod result_view;
pub mod style;

use std::time::Duration;

use eframe::egui::{self, RichText};

use crate::egui_app::controller::EguiController;

/// Smallest window the layout still fits in.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(480.0, 560.0);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create a new egui app, loading persisted configuration.
    pub fn new() -> Result<Self, String> {
        let mut controller = EguiController::new();
        controller
            .load_configuration()
            .map_err(|err| format!("Failed to load config: {err}"))?;
        Ok(Self {
            controller,
            visuals_set: false,
        })
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new("Prediksi Kecanduan HP").color(palette.accent_ice));
                ui.label(
                    RichText::new("Analisis kebiasaan digital Anda")
                        .color(palette.text_muted),
                );
            });
            ui.add_space(8.0);
        });
    }

    fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                let status = &self.controller.ui.status;
                ui.label(
                    RichText::new(format!(" {} ", status.badge_label))
                        .background_color(status.badge_color)
                        .color(egui::Color32::WHITE),
                );
                ui.add_space(6.0);
                ui.label(status.text.clone());
            });
            ui.add_space(4.0);
        });
    }

    fn render_central(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if let Some(report) = self.controller.ui.predict.report.clone() {
                    self.render_result_view(ui, &report);
                } else {
                    self.render_predict_form(ui);
                }
            });
        });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.handle_job_messages();
        if self.controller.ui.predict.submitting {
            ctx.request_repaint_after(Duration::from_millis(120));
        }
        self.render_header(ctx);
        self.render_status_bar(ctx);
        self.render_central(ctx);
    }
}
