mod support;

use std::net::TcpListener;
use std::time::Duration;

use candu::config::{self, AppConfig, PredictorSettings};
use candu::egui_app::controller::EguiController;
use candu::habits::InputWarning;
use candu::predictor::ReportStore;
use candu::predictor::api::AddictionLevel;

use support::env::CanduEnvGuard;
use support::http::{json_response, serve_once_with_capture};

struct ControllerHarness {
    env: CanduEnvGuard,
    controller: EguiController,
}

impl ControllerHarness {
    fn with_endpoint(endpoint: &str) -> Self {
        let env = CanduEnvGuard::new();
        let cfg = AppConfig {
            predictor: PredictorSettings {
                endpoint_url: endpoint.to_string(),
            },
        };
        config::save(&cfg).expect("save config");
        let mut controller = EguiController::new();
        controller.load_configuration().expect("load configuration");
        assert_eq!(controller.endpoint_url(), endpoint);
        Self { env, controller }
    }

    fn fill_consistent_form(&mut self) {
        let input = &mut self.controller.ui.predict.input;
        input.age = "21".to_string();
        input.daily_usage_hours = "5".to_string();
        input.phone_checks_per_day = "40".to_string();
        input.time_on_social_media = "2".to_string();
        input.time_on_gaming = "1".to_string();
        input.sleep_hours = "7".to_string();
        input.exercise_hours = "1".to_string();
    }

    fn pump_until_settled(&mut self) {
        for _ in 0..400 {
            self.controller.handle_job_messages();
            if !self.controller.ui.predict.submitting {
                return;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        panic!("prediction job never settled");
    }
}

fn unused_endpoint() -> String {
    // Bind then drop to get a port with no listener.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

#[test]
fn successful_submission_renders_report_and_stores_it() {
    let body = r#"{"prediction":"Tinggi","probability":0.82}"#;
    let (endpoint, request_rx) = serve_once_with_capture(json_response("200 OK", body));
    let mut harness = ControllerHarness::with_endpoint(&endpoint);
    harness.fill_consistent_form();
    assert!(harness.controller.can_submit());

    harness.controller.submit_prediction();
    assert!(harness.controller.ui.predict.submitting);
    assert!(!harness.controller.can_submit());
    harness.pump_until_settled();

    let report = harness
        .controller
        .ui
        .predict
        .report
        .as_ref()
        .expect("report present");
    assert_eq!(report.prediction.as_deref(), Some("Tinggi"));
    assert_eq!(report.level(), Some(AddictionLevel::Tinggi));
    assert_eq!(report.probability, Some(0.82));
    assert_eq!(harness.controller.ui.predict.last_error, None);

    let request = request_rx
        .recv_timeout(Duration::from_secs(1))
        .expect("request captured");
    let request_text = String::from_utf8_lossy(&request).to_lowercase();
    assert!(request_text.contains("post /predict"));
    assert!(request_text.contains("content-type: application/json"));
    let request_text = String::from_utf8_lossy(&request);
    for key in [
        "\"Age\":21.0",
        "\"Daily_Usage_Hours\":5.0",
        "\"Phone_Checks_Per_Day\":40.0",
        "\"Time_on_Social_Media\":2.0",
        "\"Time_on_Gaming\":1.0",
        "\"Sleep_Hours\":7.0",
        "\"Exercise_Hours\":1.0",
    ] {
        assert!(request_text.contains(key), "missing {key} in {request_text}");
    }

    let stored = std::fs::read_to_string(
        harness.env.base().join(".candu").join("last_prediction.json"),
    )
    .expect("stored report exists");
    assert_eq!(stored, body);
}

#[test]
fn transport_failure_keeps_form_and_returns_to_idle() {
    let endpoint = unused_endpoint();
    let mut harness = ControllerHarness::with_endpoint(&endpoint);
    harness.fill_consistent_form();
    let before = harness.controller.ui.predict.input.clone();

    harness.controller.submit_prediction();
    harness.pump_until_settled();

    assert_eq!(harness.controller.ui.predict.report, None);
    assert_eq!(
        harness.controller.ui.predict.last_error.as_deref(),
        Some("Gagal melakukan prediksi. Silakan coba lagi.")
    );
    assert_eq!(harness.controller.ui.predict.input, before);
    assert!(harness.controller.can_submit(), "form must stay retryable");
}

#[test]
fn upstream_error_surfaces_notice_without_result() {
    let body = r#"{"error":"model unavailable"}"#;
    let (endpoint, _request_rx) =
        serve_once_with_capture(json_response("500 Internal Server Error", body));
    let mut harness = ControllerHarness::with_endpoint(&endpoint);
    harness.fill_consistent_form();

    harness.controller.submit_prediction();
    harness.pump_until_settled();

    assert_eq!(harness.controller.ui.predict.report, None);
    assert!(harness.controller.ui.predict.last_error.is_some());
}

#[test]
fn incomplete_form_blocks_submission() {
    let endpoint = unused_endpoint();
    let mut harness = ControllerHarness::with_endpoint(&endpoint);
    harness.fill_consistent_form();
    harness.controller.ui.predict.input.sleep_hours.clear();

    assert!(!harness.controller.can_submit());
    harness.controller.submit_prediction();
    assert!(!harness.controller.ui.predict.submitting);
    assert!(harness.controller.ui.predict.last_error.is_some());
}

#[test]
fn inconsistent_form_blocks_submission_with_warning() {
    let endpoint = unused_endpoint();
    let mut harness = ControllerHarness::with_endpoint(&endpoint);
    harness.fill_consistent_form();
    harness.controller.ui.predict.input.daily_usage_hours = "3".to_string();
    harness.controller.ui.predict.input.time_on_gaming = "2".to_string();

    assert_eq!(
        harness.controller.input_warning(),
        Some(InputWarning::ActivitySplit)
    );
    assert!(!harness.controller.can_submit());
    harness.controller.submit_prediction();
    assert!(!harness.controller.ui.predict.submitting);
}

#[test]
fn stored_report_is_loaded_at_startup() {
    let env = CanduEnvGuard::new();
    let store = ReportStore::new().expect("report store");
    store
        .save(r#"{"prediction":"Sedang","probabilities":{"Rendah":0.2,"Sedang":0.65,"Tinggi":0.15}}"#)
        .expect("save stored report");

    let mut controller = EguiController::new();
    controller.load_configuration().expect("load configuration");
    let stored = controller
        .ui
        .predict
        .stored_report
        .as_ref()
        .expect("stored report revived");
    assert_eq!(stored.level(), Some(AddictionLevel::Sedang));
    assert_eq!(stored.probabilities.len(), 3);
    drop(env);
}
