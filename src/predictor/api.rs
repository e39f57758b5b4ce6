//! Client for the remote phone-addiction classifier.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::habits::HabitProfile;
use crate::http_client;

/// Endpoint used when the config file carries no override.
pub const DEFAULT_ENDPOINT_URL: &str = "https://web-production-57cb3.up.railway.app/predict";

const MAX_PREDICT_RESPONSE_BYTES: usize = 256 * 1024;

/// The three categories the classifier is known to emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddictionLevel {
    Rendah,
    Sedang,
    Tinggi,
}

impl AddictionLevel {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Rendah" => Some(Self::Rendah),
            "Sedang" => Some(Self::Sedang),
            "Tinggi" => Some(Self::Tinggi),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Rendah => "Rendah",
            Self::Sedang => "Sedang",
            Self::Tinggi => "Tinggi",
        }
    }

    /// Recommendation paragraph shown beneath the result.
    pub fn advice(self) -> &'static str {
        match self {
            Self::Rendah => {
                "Kebiasaan penggunaan HP Anda masih dalam batas wajar. Pertahankan pola \
                 penggunaan yang seimbang, tidur cukup, dan tetap lakukan aktivitas fisik."
            }
            Self::Sedang => {
                "Anda mulai menunjukkan tanda penggunaan HP berlebih. Cobalah mengurangi \
                 waktu layar 1-2 jam per hari, gunakan mode fokus, dan atur waktu khusus \
                 tanpa HP."
            }
            Self::Tinggi => {
                "Penggunaan HP Anda sudah berada pada tingkat mengkhawatirkan. Kurangi \
                 intensitas secara bertahap, hindari HP sebelum tidur, batasi media sosial, \
                 dan bila perlu konsultasikan pada ahli jika sudah mengganggu aktivitas \
                 sehari-hari."
            }
        }
    }
}

/// Decoded classifier response. Fields are optional because the payload shape
/// is not enforced upstream; a missing `prediction` renders as unavailable.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionReport {
    pub prediction: Option<String>,
    /// Overall probability of the predicted category, 0-1.
    pub probability: Option<f64>,
    /// Per-category probabilities, 0-1 each. May be empty.
    pub probabilities: BTreeMap<String, f64>,
    /// Raw response text, kept for the last-result store.
    pub raw_json: String,
}

impl PredictionReport {
    /// The known category for the prediction label, when it is one.
    pub fn level(&self) -> Option<AddictionLevel> {
        self.prediction
            .as_deref()
            .and_then(AddictionLevel::from_label)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("Server error: HTTP {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("HTTP error: {0}")]
    Transport(String),
    #[error("JSON error: {0}")]
    Json(String),
}

/// Submit a profile to the classifier. One POST, no retry; failures leave the
/// caller free to resubmit.
pub fn predict(endpoint: &str, profile: &HabitProfile) -> Result<PredictionReport, PredictError> {
    let request = http_client::agent()
        .post(endpoint)
        .set("Accept", "application/json")
        .set("Content-Type", "application/json");

    let response = match request.send_json(profile) {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            let body = read_body_limited(response, MAX_PREDICT_RESPONSE_BYTES)
                .unwrap_or_else(|err| err);
            return Err(PredictError::Upstream { status: code, body });
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(PredictError::Transport(err.to_string()));
        }
    };

    let body =
        read_body_limited(response, MAX_PREDICT_RESPONSE_BYTES).map_err(PredictError::Json)?;
    parse_prediction_body(&body)
}

#[derive(Clone, Debug, Deserialize)]
struct PredictionReportWire {
    prediction: Option<String>,
    probability: Option<f64>,
    probabilities: Option<BTreeMap<String, f64>>,
    error: Option<String>,
    message: Option<String>,
}

/// Decode a classifier response body. Also used to revive the record kept by
/// the last-result store.
pub fn parse_prediction_body(body: &str) -> Result<PredictionReport, PredictError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(PredictError::Json("Empty response body".to_string()));
    }
    let parsed: PredictionReportWire = serde_json::from_str(trimmed)
        .map_err(|err| PredictError::Json(format!("{err}: {trimmed}")))?;

    if parsed.prediction.is_none() {
        if let Some(message) = parsed.error.or(parsed.message) {
            return Err(PredictError::Json(message));
        }
    }
    Ok(PredictionReport {
        prediction: parsed.prediction,
        probability: parsed.probability.filter(|p| p.is_finite()),
        probabilities: parsed.probabilities.unwrap_or_default(),
        raw_json: trimmed.to_string(),
    })
}

fn read_body_limited(response: ureq::Response, max_bytes: usize) -> Result<String, String> {
    let bytes = http_client::read_response_bytes(response, max_bytes)
        .map_err(|err| err.to_string())?;
    String::from_utf8(bytes).map_err(|err| err.to_string())
}
