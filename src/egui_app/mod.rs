//! egui UI shell: controller, state, and renderer modules.

pub mod controller;
pub mod state;
pub mod ui;
