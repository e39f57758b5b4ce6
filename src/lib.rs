//! Library exports for reuse in binaries and tests.
/// Application directory helpers.
pub mod app_dirs;
/// TOML-backed configuration.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// The seven lifestyle metrics and their consistency checks.
pub mod habits;
/// Shared HTTP client configuration.
pub mod http_client;
/// Logging setup.
pub mod logging;
/// Remote classifier client and last-result store.
pub mod predictor;
