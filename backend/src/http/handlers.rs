//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! dashboard or the aggregators.

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::{
    ActiveChartResponse, FacilitiesResponse, HealthResponse, SelectRequest, SelectResponse,
    SummaryResponse, ViewResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{DatasetInfo, ViewKind};
use crate::charts::chart_config;
use crate::services::build_view;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        records: state.dashboard.dataset().len(),
    }))
}

// =============================================================================
// Dataset
// =============================================================================

/// GET /v1/dataset
pub async fn get_dataset(State(state): State<AppState>) -> HandlerResult<DatasetInfo> {
    Ok(Json(state.dashboard.info().clone()))
}

/// GET /v1/summary
///
/// Headline counters plus the zero-restroom ratio label.
pub async fn get_summary(State(state): State<AppState>) -> HandlerResult<SummaryResponse> {
    let dashboard = &state.dashboard;
    Ok(Json(SummaryResponse::new(
        dashboard.summary(),
        dashboard.info().clone(),
        &dashboard.zero_restrooms(),
    )))
}

// =============================================================================
// Views
// =============================================================================

/// GET /v1/views/{index}
///
/// Compute the aggregate for an index without touching the mounted chart.
/// Unknown indices resolve to the detail view, as selection does.
pub async fn get_view(
    State(state): State<AppState>,
    Path(index): Path<i64>,
) -> HandlerResult<ViewResponse> {
    let kind = ViewKind::from_index(index);
    let aggregate = build_view(kind, &state.dashboard.dataset().records);

    Ok(Json(ViewResponse {
        index: kind.index(),
        title: kind.title().to_string(),
        config: chart_config(kind),
        aggregate,
    }))
}

/// GET /v1/views/facilities
pub async fn get_facilities(State(state): State<AppState>) -> HandlerResult<FacilitiesResponse> {
    let (config, data) = state.dashboard.facilities();
    Ok(Json(FacilitiesResponse { config, data }))
}

// =============================================================================
// Chart lifecycle
// =============================================================================

/// POST /v1/select
///
/// Run a selection. A failed chart is reported in the body, not as an HTTP
/// error: the dashboard stays usable and simply shows nothing.
pub async fn select_view(
    State(state): State<AppState>,
    Json(request): Json<SelectRequest>,
) -> HandlerResult<SelectResponse> {
    let outcome = state.dashboard.select(request.index).await;
    let chart = state.dashboard.active_chart();
    Ok(Json(SelectResponse::from_outcome(outcome, chart)))
}

/// GET /v1/chart
pub async fn get_active_chart(
    State(state): State<AppState>,
) -> HandlerResult<ActiveChartResponse> {
    let chart = state
        .dashboard
        .active_chart()
        .ok_or_else(|| AppError::NotFound("No chart is mounted".to_string()))?;

    Ok(Json(ActiveChartResponse {
        chart,
        state: state.dashboard.state().await,
        progress_visible: state.dashboard.progress_visible(),
    }))
}
