use eframe::egui::{self, RichText};

use super::{EguiApp, style};
use crate::predictor::api::PredictionReport;

impl EguiApp {
    /// Render the result card for a decoded report.
    pub(super) fn render_result_view(&mut self, ui: &mut egui::Ui, report: &PredictionReport) {
        let palette = style::palette();
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.heading("Hasil Analisis");
        });
        ui.add_space(12.0);

        ui.label(RichText::new("Tingkat Kecanduan").color(palette.text_muted));
        ui.label(
            RichText::new(category_text(report))
                .color(palette.accent_ice)
                .size(28.0)
                .strong(),
        );

        if let Some(probability) = report.probability {
            ui.add_space(10.0);
            ui.label(RichText::new("Probabilitas").color(palette.text_muted));
            ui.label(
                RichText::new(overall_probability_text(probability))
                    .color(palette.text_primary)
                    .size(20.0),
            );
        }

        if !report.probabilities.is_empty() {
            ui.add_space(10.0);
            ui.label(RichText::new("Probabilitas per kategori").color(palette.text_muted));
            for (label, probability) in &report.probabilities {
                ui.label(format!(
                    "{label}: {}",
                    breakdown_probability_text(*probability)
                ));
            }
        }

        if let Some(level) = report.level() {
            ui.add_space(10.0);
            ui.label(RichText::new("Saran").color(palette.text_muted));
            ui.label(RichText::new(level.advice()).color(palette.success));
        }

        ui.add_space(16.0);
        if ui.button("← Kembali ke Form").clicked() {
            self.controller.clear_result();
        }
    }
}

/// Category line; a payload without a prediction renders as unavailable.
pub(super) fn category_text(report: &PredictionReport) -> String {
    report
        .prediction
        .clone()
        .unwrap_or_else(|| "Tidak tersedia".to_string())
}

/// Overall probability, one decimal place.
pub(super) fn overall_probability_text(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

/// Per-category probability, two decimal places.
pub(super) fn breakdown_probability_text(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn overall_probability_renders_one_decimal() {
        assert_eq!(overall_probability_text(0.82), "82.0%");
        assert_eq!(overall_probability_text(1.0), "100.0%");
        assert_eq!(overall_probability_text(0.005), "0.5%");
    }

    #[test]
    fn breakdown_probability_renders_two_decimals() {
        assert_eq!(breakdown_probability_text(0.6549), "65.49%");
        assert_eq!(breakdown_probability_text(0.1), "10.00%");
    }

    #[test]
    fn missing_prediction_renders_unavailable() {
        let report = PredictionReport {
            prediction: None,
            probability: Some(0.5),
            probabilities: BTreeMap::new(),
            raw_json: "{}".to_string(),
        };
        assert_eq!(category_text(&report), "Tidak tersedia");
    }

    #[test]
    fn known_prediction_renders_verbatim() {
        let report = PredictionReport {
            prediction: Some("Tinggi".to_string()),
            probability: Some(0.82),
            probabilities: BTreeMap::new(),
            raw_json: String::new(),
        };
        assert_eq!(category_text(&report), "Tinggi");
    }
}
