//! Order screen: owns the drink being edited, reacts to the three screen actions and keeps
//! the shot indicator and summary surfaces in sync with the order.

pub mod controller;
pub mod display;
pub mod summary;

pub use controller::orchestration::dispatch_action;
pub use controller::OrderScreenController;
pub use display::{OrderDisplay, RecordingDisplay};
pub use summary::{render_summary, shot_count_label};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
