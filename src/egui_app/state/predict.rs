use crate::predictor::api::PredictionReport;

/// The seven form inputs, exactly as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HabitFormInput {
    pub age: String,
    pub daily_usage_hours: String,
    pub phone_checks_per_day: String,
    pub time_on_social_media: String,
    pub time_on_gaming: String,
    pub sleep_hours: String,
    pub exercise_hours: String,
}

/// UI state for the prediction form and result view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictUiState {
    /// Current form input.
    pub input: HabitFormInput,
    /// True while a submission is in flight.
    pub submitting: bool,
    /// Last error message, if any.
    pub last_error: Option<String>,
    /// Report currently shown in the result view.
    pub report: Option<PredictionReport>,
    /// Report revived from the last-result store at startup.
    pub stored_report: Option<PredictionReport>,
}
