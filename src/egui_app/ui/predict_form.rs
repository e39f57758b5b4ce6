use eframe::egui::{self, RichText};

use super::{EguiApp, result_view, style};

impl EguiApp {
    /// Render the seven-field form, its warnings, and the submit control.
    pub(super) fn render_predict_form(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.add_space(12.0);

        egui::Grid::new("habit_form")
            .num_columns(2)
            .spacing([16.0, 10.0])
            .show(ui, |ui| {
                let input = &mut self.controller.ui.predict.input;
                field_row(ui, "Usia (tahun)", &mut input.age);
                field_row(ui, "Waktu layar per hari (jam)", &mut input.daily_usage_hours);
                field_row(ui, "Berapa kali membuka HP", &mut input.phone_checks_per_day);
                field_row(ui, "Waktu media sosial (jam)", &mut input.time_on_social_media);
                field_row(ui, "Waktu bermain game (jam)", &mut input.time_on_gaming);
                field_row(ui, "Durasi tidur (jam)", &mut input.sleep_hours);
                field_row(ui, "Durasi aktivitas fisik (jam)", &mut input.exercise_hours);
            });

        ui.add_space(8.0);
        if let Some(warning) = self.controller.input_warning() {
            ui.label(
                RichText::new(warning.message())
                    .color(style::status_badge_color(style::StatusTone::Warning)),
            );
            ui.add_space(4.0);
        }
        if let Some(err) = self.controller.ui.predict.last_error.as_ref() {
            ui.label(
                RichText::new(err).color(style::status_badge_color(style::StatusTone::Error)),
            );
            ui.add_space(4.0);
        }

        ui.add_space(6.0);
        let submitting = self.controller.ui.predict.submitting;
        let caption = if submitting {
            "Menganalisis…"
        } else {
            "Analisis Sekarang"
        };
        if ui
            .add_enabled(self.controller.can_submit(), egui::Button::new(caption))
            .clicked()
        {
            self.controller.submit_prediction();
        }
        if submitting {
            ui.add_space(4.0);
            ui.label(RichText::new("Mengirim data…").color(palette.text_muted));
        }

        self.render_stored_report(ui);
    }

    /// Summary of the previous session's report, if one was stored.
    fn render_stored_report(&mut self, ui: &mut egui::Ui) {
        let Some(stored) = self.controller.ui.predict.stored_report.clone() else {
            return;
        };
        let palette = style::palette();
        ui.add_space(16.0);
        ui.separator();
        ui.label(RichText::new("Hasil sebelumnya").color(palette.text_muted));
        let mut line = format!("Kategori: {}", result_view::category_text(&stored));
        if let Some(probability) = stored.probability {
            line.push_str(&format!(
                " ({})",
                result_view::overall_probability_text(probability)
            ));
        }
        ui.label(line);
    }
}

fn field_row(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text("Masukkan nilai...")
            .desired_width(160.0),
    );
    ui.end_row();
}
