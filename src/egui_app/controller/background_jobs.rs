use super::EguiController;
use super::jobs::PredictResult;
use crate::egui_app::ui::style::StatusTone;
use crate::predictor::ReportStore;

pub(super) fn handle_prediction_finished(controller: &mut EguiController, message: PredictResult) {
    controller.runtime.jobs.clear_predict();
    controller.ui.predict.submitting = false;
    match message.result {
        Ok(report) => {
            controller.ui.predict.last_error = None;
            persist_report(controller, &report.raw_json);
            let label = report
                .prediction
                .clone()
                .unwrap_or_else(|| "tidak tersedia".to_string());
            controller.set_status(format!("Prediksi diterima: {label}"), StatusTone::Info);
            controller.ui.predict.report = Some(report);
        }
        Err(err) => {
            tracing::warn!("Prediction failed: {err}");
            controller.ui.predict.last_error =
                Some("Gagal melakukan prediksi. Silakan coba lagi.".to_string());
            controller.set_status(format!("Prediksi gagal: {err}"), StatusTone::Error);
        }
    }
}

fn persist_report(controller: &mut EguiController, raw_json: &str) {
    let store = match ReportStore::new() {
        Ok(store) => store,
        Err(err) => {
            tracing::warn!("Report store unavailable: {err}");
            return;
        }
    };
    if let Err(err) = store.save(raw_json) {
        tracing::warn!("Failed to store last report: {err}");
        return;
    }
    controller.ui.predict.stored_report = None;
}
