//! The seven lifestyle metrics collected by the screening form.
//!
//! Field names follow the classifier's wire contract; values are plain
//! non-negative numbers. Consistency checks live here as pure derivations so
//! the UI can recompute them on every edit.

use serde::Serialize;

/// One day's worth of usage metrics, named to match the classifier contract.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct HabitProfile {
    #[serde(rename = "Age")]
    pub age: f64,
    #[serde(rename = "Daily_Usage_Hours")]
    pub daily_usage_hours: f64,
    #[serde(rename = "Phone_Checks_Per_Day")]
    pub phone_checks_per_day: f64,
    #[serde(rename = "Time_on_Social_Media")]
    pub time_on_social_media: f64,
    #[serde(rename = "Time_on_Gaming")]
    pub time_on_gaming: f64,
    #[serde(rename = "Sleep_Hours")]
    pub sleep_hours: f64,
    #[serde(rename = "Exercise_Hours")]
    pub exercise_hours: f64,
}

/// Inconsistency derived from the current profile.
///
/// At most one warning is active at a time; `ActivitySplit` wins when both
/// conditions hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputWarning {
    /// Social media plus gaming hours exceed the reported daily screen time.
    ActivitySplit,
    /// Screen time, sleep, and exercise together exceed 24 hours.
    DayTotal,
}

impl InputWarning {
    /// User-facing warning text.
    pub fn message(self) -> &'static str {
        match self {
            Self::ActivitySplit => {
                "Waktu media sosial dan game melebihi total waktu layar harian."
            }
            Self::DayTotal => "Total waktu layar, tidur, dan aktivitas fisik melebihi 24 jam.",
        }
    }
}

/// Derive the active warning for a profile, if any. Pure; safe to call on
/// every frame.
pub fn validate(profile: &HabitProfile) -> Option<InputWarning> {
    if profile.time_on_social_media + profile.time_on_gaming > profile.daily_usage_hours {
        return Some(InputWarning::ActivitySplit);
    }
    if profile.daily_usage_hours + profile.sleep_hours + profile.exercise_hours > 24.0 {
        return Some(InputWarning::DayTotal);
    }
    None
}

/// Parse one free-text form field into a non-negative finite value.
pub fn parse_field(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value: f64 = trimmed.parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}
