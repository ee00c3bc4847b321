//! View selection and chart lifecycle.
//!
//! The selector owns the one mounted chart. A selection releases the mounted
//! chart, computes the chosen aggregate, asks the renderer for a new chart and
//! mounts it into [`PRIMARY_TARGET`].
//!
//! Every selection takes a request token. Only the result for the newest
//! token is mounted; older results are destroyed as soon as they arrive, so a
//! slow construction can never overwrite a newer selection.

use log::{debug, error, info, warn};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use super::progress::ProgressIndicator;
use crate::api::{Dataset, ViewKind};
use crate::charts::{
    chart_config, ChartError, ChartHandle, ChartRenderer, RenderSurface, PRIMARY_TARGET,
};
use crate::services::build_view;

/// Default bound on a single chart construction.
pub const DEFAULT_CONSTRUCTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Result of one [`ViewSelector::select`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectOutcome {
    /// The new chart is mounted.
    Mounted { view: ViewKind, chart_id: String },
    /// A newer selection was issued while this one was being built; the chart
    /// was destroyed without being mounted.
    Superseded { view: ViewKind },
    /// Construction or rendering failed. Nothing is mounted.
    Failed { view: ViewKind, error: ChartError },
}

impl SelectOutcome {
    pub fn view(&self) -> ViewKind {
        match self {
            Self::Mounted { view, .. } | Self::Superseded { view } | Self::Failed { view, .. } => {
                *view
            }
        }
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self, Self::Mounted { .. })
    }
}

/// Lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SelectorState {
    Idle,
    #[serde(rename_all = "camelCase")]
    Active { view: ViewKind, chart_id: String },
}

struct MountedChart {
    view: ViewKind,
    handle: Box<dyn ChartHandle>,
}

/// Maps selections to charts and keeps exactly one of them mounted.
pub struct ViewSelector {
    dataset: Arc<Dataset>,
    renderer: Arc<dyn ChartRenderer>,
    surface: RenderSurface,
    progress: ProgressIndicator,
    mounted: Mutex<Option<MountedChart>>,
    latest: AtomicU64,
    construction_timeout: Duration,
}

impl ViewSelector {
    pub fn new(
        dataset: Arc<Dataset>,
        renderer: Arc<dyn ChartRenderer>,
        surface: RenderSurface,
        progress: ProgressIndicator,
    ) -> Self {
        Self {
            dataset,
            renderer,
            surface,
            progress,
            mounted: Mutex::new(None),
            latest: AtomicU64::new(0),
            construction_timeout: DEFAULT_CONSTRUCTION_TIMEOUT,
        }
    }

    pub fn with_construction_timeout(mut self, timeout: Duration) -> Self {
        self.construction_timeout = timeout;
        self
    }

    /// Select by user-facing index. Unknown indices select the detail view.
    pub async fn select(&self, index: i64) -> SelectOutcome {
        let view = ViewKind::from_index(index);
        if view.index() != Some(index) {
            warn!("Unknown view index {}, falling back to {:?}", index, view);
        }
        self.select_view(view).await
    }

    /// Select a view directly.
    pub async fn select_view(&self, view: ViewKind) -> SelectOutcome {
        let _busy = self.progress.guard();
        let token = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        info!("Selecting {:?} (request {})", view, token);

        self.release().await;

        let aggregate = build_view(view, &self.dataset.records);
        let config = chart_config(view);
        debug!("Built {:?} aggregate with {} rows", view, aggregate.len());

        let constructed = match tokio::time::timeout(
            self.construction_timeout,
            self.renderer.construct(&config, &aggregate),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(ChartError::Timeout(self.construction_timeout)),
        };

        let mut handle = match constructed {
            Ok(handle) => handle,
            Err(error) => {
                error!("Chart construction for {:?} failed: {}", view, error);
                return SelectOutcome::Failed { view, error };
            }
        };

        let mut mounted = self.mounted.lock().await;
        if token != self.latest.load(Ordering::SeqCst) {
            debug!(
                "Discarding chart {} from stale request {}",
                handle.id(),
                token
            );
            handle.destroy();
            return SelectOutcome::Superseded { view };
        }

        if let Some(previous) = mounted.take() {
            previous.handle.destroy();
        }

        if let Err(error) = handle.render(&self.surface, PRIMARY_TARGET) {
            error!("Rendering {:?} failed: {}", view, error);
            handle.destroy();
            return SelectOutcome::Failed { view, error };
        }

        let chart_id = handle.id().to_string();
        info!("Mounted {:?} chart {}", view, chart_id);
        *mounted = Some(MountedChart { view, handle });

        SelectOutcome::Mounted { view, chart_id }
    }

    /// Destroy the mounted chart, if any, and return to idle.
    async fn release(&self) {
        if let Some(previous) = self.mounted.lock().await.take() {
            debug!("Releasing {:?} chart {}", previous.view, previous.handle.id());
            previous.handle.destroy();
        }
    }

    /// Destroy the mounted chart and discard results still being built.
    pub async fn teardown(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
        self.release().await;
    }

    pub async fn state(&self) -> SelectorState {
        match self.mounted.lock().await.as_ref() {
            Some(chart) => SelectorState::Active {
                view: chart.view,
                chart_id: chart.handle.id().to_string(),
            },
            None => SelectorState::Idle,
        }
    }

    pub fn surface(&self) -> &RenderSurface {
        &self.surface
    }

    pub fn progress(&self) -> &ProgressIndicator {
        &self.progress
    }
}
