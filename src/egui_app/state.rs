//! Shared state types for the egui UI.

mod predict;
mod status;

pub use predict::*;
pub use status::*;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    pub predict: PredictUiState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            predict: PredictUiState::default(),
        }
    }
}
