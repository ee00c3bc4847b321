//! Busy indicator shown while a chart is being prepared.

use log::debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts in-flight work; visible while the count is above zero.
#[derive(Debug, Clone, Default)]
pub struct ProgressIndicator {
    active: Arc<AtomicUsize>,
}

impl ProgressIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&self) {
        if self.active.fetch_add(1, Ordering::SeqCst) == 0 {
            debug!("Progress shown");
        }
    }

    pub fn hide(&self) {
        let previous = self
            .active
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| Some(n.saturating_sub(1)))
            .unwrap_or(0);
        if previous == 1 {
            debug!("Progress hidden");
        }
    }

    pub fn is_visible(&self) -> bool {
        self.active.load(Ordering::SeqCst) > 0
    }

    /// Show now and hide when the guard drops.
    pub fn guard(&self) -> ProgressGuard {
        self.show();
        ProgressGuard {
            indicator: self.clone(),
        }
    }
}

/// Hides the indicator on drop.
#[derive(Debug)]
pub struct ProgressGuard {
    indicator: ProgressIndicator,
}

impl Drop for ProgressGuard {
    fn drop(&mut self) {
        self.indicator.hide();
    }
}
