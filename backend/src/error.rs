//! Top-level error type for dashboard startup.

use crate::config::ConfigError;
use crate::preprocessing::NormalizeError;
use crate::source::SourceError;

/// Result type for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Fatal startup failures. Chart failures are not here: a failed selection
/// is reported through [`crate::dashboard::SelectOutcome`] and never stops
/// the dashboard.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Failed to fetch dataset: {0}")]
    Fetch(#[from] SourceError),

    #[error("Failed to normalize dataset: {0}")]
    Normalize(#[from] NormalizeError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
