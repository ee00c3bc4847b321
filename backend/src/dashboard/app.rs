//! Application root.
//!
//! [`Dashboard`] owns the normalized dataset and the view selector. It is
//! built once by [`Dashboard::init`] and shared (behind an `Arc`) with the
//! HTTP layer; [`Dashboard::teardown`] releases the mounted chart.

use chrono::Local;
use log::{info, warn};
use std::sync::Arc;
use std::time::Duration;

use super::progress::ProgressIndicator;
use super::selector::{SelectOutcome, SelectorState, ViewSelector};
use super::timestamp::format_updated_at;
use crate::api::{
    Dataset, DatasetInfo, DatasetPayload, FacilityEntry, SummaryCounts, ViewKind,
    ZeroRestroomSubset,
};
use crate::charts::{chart_config, ChartConfig, ChartDocument, ChartRenderer, RenderSurface, PRIMARY_TARGET};
use crate::config::DashboardConfig;
use crate::error::{DashboardError, DashboardResult};
use crate::preprocessing::{normalize_with, NormalizeOptions};
use crate::services::{facilities_view, summary_counts, zero_restroom_subset};
use crate::source::{DataSource, ErrorContext, SourceError};

/// The dashboard: dataset plus chart lifecycle.
pub struct Dashboard {
    dataset: Arc<Dataset>,
    info: DatasetInfo,
    selector: ViewSelector,
}

impl Dashboard {
    /// Fetch and normalize the dataset, then select the initial view.
    ///
    /// A failed or timed-out fetch and a dataset that fails normalization are
    /// fatal. A failed initial chart is not: the dashboard starts idle.
    pub async fn init(
        config: &DashboardConfig,
        source: Arc<dyn DataSource>,
        renderer: Arc<dyn ChartRenderer>,
    ) -> DashboardResult<Self> {
        let timeout = config.source.fetch_timeout();
        info!("Loading dataset from {}", source.describe());

        let payload = match tokio::time::timeout(timeout, source.fetch()).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(DashboardError::Fetch(SourceError::timeout(
                    format!("no response after {:?}", timeout),
                    ErrorContext::new("fetch").with_location(source.describe()),
                )))
            }
        };

        let dashboard = Self::from_payload(payload, &config.normalize, renderer)?
            .with_construction_timeout(config.dashboard.chart_timeout());

        let outcome = dashboard.select(config.dashboard.initial_view).await;
        if !outcome.is_mounted() {
            warn!("Initial view did not mount: {:?}", outcome);
        }
        Ok(dashboard)
    }

    /// Build the dashboard from an already fetched payload. No chart is
    /// mounted yet.
    pub fn from_payload(
        payload: DatasetPayload,
        options: &NormalizeOptions,
        renderer: Arc<dyn ChartRenderer>,
    ) -> DashboardResult<Self> {
        let outcome = normalize_with(&payload.data, options)?;
        if !outcome.skipped.is_empty() {
            warn!(
                "Dropped {} of {} records that could not be normalized",
                outcome.skipped.len(),
                payload.data.len()
            );
        }

        let dataset = Arc::new(Dataset::new(payload.updated_at, outcome.records));
        info!("Dataset ready: {} schools", dataset.len());

        let info = DatasetInfo {
            updated_at: dataset.updated_at.clone(),
            updated_at_display: format_updated_at(&dataset.updated_at, &Local),
            record_count: dataset.len(),
        };

        let selector = ViewSelector::new(
            Arc::clone(&dataset),
            renderer,
            RenderSurface::new(),
            ProgressIndicator::new(),
        );

        Ok(Self {
            dataset,
            info,
            selector,
        })
    }

    pub fn with_construction_timeout(mut self, timeout: Duration) -> Self {
        self.selector = self.selector.with_construction_timeout(timeout);
        self
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    pub fn info(&self) -> &DatasetInfo {
        &self.info
    }

    /// Select a view by index; see [`ViewSelector::select`].
    pub async fn select(&self, index: i64) -> SelectOutcome {
        self.selector.select(index).await
    }

    pub async fn state(&self) -> SelectorState {
        self.selector.state().await
    }

    /// Document currently shown in the primary target.
    pub fn active_chart(&self) -> Option<ChartDocument> {
        self.selector.surface().get(PRIMARY_TARGET)
    }

    pub fn progress_visible(&self) -> bool {
        self.selector.progress().is_visible()
    }

    pub fn summary(&self) -> SummaryCounts {
        summary_counts(&self.dataset.records)
    }

    pub fn zero_restrooms(&self) -> ZeroRestroomSubset {
        zero_restroom_subset(&self.dataset.records)
    }

    /// Facilities rows with their chart configuration.
    pub fn facilities(&self) -> (ChartConfig, Vec<FacilityEntry>) {
        (
            chart_config(ViewKind::Facilities),
            facilities_view(&self.dataset.records),
        )
    }

    /// Release the mounted chart.
    pub async fn teardown(&self) {
        info!("Tearing down dashboard");
        self.selector.teardown().await;
    }
}
