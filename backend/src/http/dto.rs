//! Request and response bodies of the HTTP API.

use serde::{Deserialize, Serialize};

use crate::api::{
    AggregateView, DatasetInfo, FacilityEntry, SummaryCounts, ViewKind, ZeroRestroomSubset,
};
use crate::charts::{ChartConfig, ChartDocument};
use crate::dashboard::{SelectOutcome, SelectorState};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of normalized records held by the dashboard
    pub records: usize,
}

/// Body of `POST /v1/select`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectRequest {
    pub index: i64,
}

/// Result of a selection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectResponse {
    /// `mounted`, `superseded` or `failed`
    pub status: String,
    pub view: ViewKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Document in the primary target after the selection.
    pub chart: Option<ChartDocument>,
}

impl SelectResponse {
    pub fn from_outcome(outcome: SelectOutcome, chart: Option<ChartDocument>) -> Self {
        let view = outcome.view();
        let (status, chart_id, error) = match outcome {
            SelectOutcome::Mounted { chart_id, .. } => ("mounted", Some(chart_id), None),
            SelectOutcome::Superseded { .. } => ("superseded", None, None),
            SelectOutcome::Failed { error, .. } => ("failed", None, Some(error.to_string())),
        };
        Self {
            status: status.to_string(),
            view,
            chart_id,
            error,
            chart,
        }
    }
}

/// Currently mounted chart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveChartResponse {
    pub chart: ChartDocument,
    pub state: SelectorState,
    pub progress_visible: bool,
}

/// Headline counters and the zero-restroom ratio.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub summary: SummaryCounts,
    pub dataset: DatasetInfo,
    /// `(schools without restrooms / total schools)`
    pub zero_restroom_label: String,
    pub zero_restroom_ratio: f64,
}

impl SummaryResponse {
    pub fn new(summary: SummaryCounts, dataset: DatasetInfo, restrooms: &ZeroRestroomSubset) -> Self {
        Self {
            summary,
            dataset,
            zero_restroom_label: restrooms.display_ratio(),
            zero_restroom_ratio: restrooms.ratio(),
        }
    }
}

/// Aggregate for one view, computed without mounting anything.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResponse {
    pub index: Option<i64>,
    pub title: String,
    pub config: ChartConfig,
    #[serde(flatten)]
    pub aggregate: AggregateView,
}

/// Facilities aggregate with its chart configuration.
#[derive(Debug, Clone, Serialize)]
pub struct FacilitiesResponse {
    pub config: ChartConfig,
    pub data: Vec<FacilityEntry>,
}
