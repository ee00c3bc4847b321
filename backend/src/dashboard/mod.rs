//! Dashboard lifecycle: application root, view selector, progress indicator.

pub mod app;
pub mod progress;
pub mod selector;
pub mod timestamp;

#[cfg(test)]
#[path = "selector_tests.rs"]
mod selector_tests;

pub use app::Dashboard;
pub use progress::{ProgressGuard, ProgressIndicator};
pub use selector::{SelectOutcome, SelectorState, ViewSelector, DEFAULT_CONSTRUCTION_TIMEOUT};
pub use timestamp::format_updated_at;
