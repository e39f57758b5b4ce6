//! Maintains app state and bridges the form, validation, and prediction
//! client to the egui UI.

use crate::config::{self, AppConfig};
use crate::egui_app::state::UiState;
use crate::egui_app::ui::style::{self, StatusTone};
use crate::habits::{self, HabitProfile, InputWarning};
use crate::predictor::ReportStore;
use crate::predictor::api;

mod background_jobs;
mod jobs;

/// Owns the UI model and applies every mutation to it.
pub struct EguiController {
    pub ui: UiState,
    pub(crate) settings: AppConfig,
    pub(crate) runtime: ControllerRuntime,
}

pub(crate) struct ControllerRuntime {
    pub(crate) jobs: jobs::ControllerJobs,
}

impl EguiController {
    pub fn new() -> Self {
        Self {
            ui: UiState::default(),
            settings: AppConfig::default(),
            runtime: ControllerRuntime {
                jobs: jobs::ControllerJobs::new(),
            },
        }
    }

    /// Load persisted configuration and the stored last report.
    pub fn load_configuration(&mut self) -> Result<(), config::ConfigError> {
        self.settings = config::load_or_default()?;
        self.load_stored_report();
        Ok(())
    }

    /// URL the form submits profiles to.
    pub fn endpoint_url(&self) -> &str {
        &self.settings.predictor.endpoint_url
    }

    fn load_stored_report(&mut self) {
        let store = match ReportStore::new() {
            Ok(store) => store,
            Err(err) => {
                tracing::warn!("Report store unavailable: {err}");
                return;
            }
        };
        match store.load() {
            Ok(Some(raw)) => match api::parse_prediction_body(&raw) {
                Ok(report) => self.ui.predict.stored_report = Some(report),
                Err(err) => tracing::warn!("Stored report unreadable: {err}"),
            },
            Ok(None) => {}
            Err(err) => tracing::warn!("Failed to read stored report: {err}"),
        }
    }

    /// Parse the current inputs into a profile. `None` while any field is
    /// empty or invalid.
    pub fn parsed_profile(&self) -> Option<HabitProfile> {
        let input = &self.ui.predict.input;
        Some(HabitProfile {
            age: habits::parse_field(&input.age)?,
            daily_usage_hours: habits::parse_field(&input.daily_usage_hours)?,
            phone_checks_per_day: habits::parse_field(&input.phone_checks_per_day)?,
            time_on_social_media: habits::parse_field(&input.time_on_social_media)?,
            time_on_gaming: habits::parse_field(&input.time_on_gaming)?,
            sleep_hours: habits::parse_field(&input.sleep_hours)?,
            exercise_hours: habits::parse_field(&input.exercise_hours)?,
        })
    }

    /// Active warning for the current inputs. Unfilled fields count as zero,
    /// matching the form's initial state.
    pub fn input_warning(&self) -> Option<InputWarning> {
        let input = &self.ui.predict.input;
        let field = |text: &str| habits::parse_field(text).unwrap_or(0.0);
        let profile = HabitProfile {
            age: field(&input.age),
            daily_usage_hours: field(&input.daily_usage_hours),
            phone_checks_per_day: field(&input.phone_checks_per_day),
            time_on_social_media: field(&input.time_on_social_media),
            time_on_gaming: field(&input.time_on_gaming),
            sleep_hours: field(&input.sleep_hours),
            exercise_hours: field(&input.exercise_hours),
        };
        habits::validate(&profile)
    }

    /// True when every field parses, no warning is active, and no submission
    /// is in flight.
    pub fn can_submit(&self) -> bool {
        !self.ui.predict.submitting
            && self.input_warning().is_none()
            && self.parsed_profile().is_some()
    }

    /// Kick off a prediction for the current inputs.
    pub fn submit_prediction(&mut self) {
        if self.ui.predict.submitting {
            return;
        }
        let Some(profile) = self.parsed_profile() else {
            self.ui.predict.last_error =
                Some("Lengkapi ketujuh kolom dengan angka yang valid.".to_string());
            return;
        };
        if let Some(warning) = habits::validate(&profile) {
            self.ui.predict.last_error = Some(warning.message().to_string());
            return;
        }
        self.ui.predict.submitting = true;
        self.ui.predict.last_error = None;
        self.set_status("Mengirim data ke layanan prediksi", StatusTone::Busy);
        self.runtime.jobs.begin_predict(jobs::PredictJob {
            endpoint: self.settings.predictor.endpoint_url.clone(),
            profile,
        });
    }

    /// Drain background job messages. Called once per frame.
    pub fn handle_job_messages(&mut self) {
        while let Ok(message) = self.runtime.jobs.try_recv_message() {
            match message {
                jobs::JobMessage::PredictionFinished(result) => {
                    background_jobs::handle_prediction_finished(self, result);
                }
            }
        }
    }

    /// Return from the result view to the editable form.
    pub fn clear_result(&mut self) {
        self.ui.predict.report = None;
        self.ui.predict.last_error = None;
        self.set_status("Isi ketujuh kolom untuk memulai analisis", StatusTone::Idle);
    }

    pub fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.text = text.into();
        let (label, color) = style::status_badge(tone);
        self.ui.status.badge_label = label;
        self.ui.status.badge_color = color;
    }
}

impl Default for EguiController {
    fn default() -> Self {
        Self::new()
    }
}
