//! Rendering collaborator seam.
//!
//! The dashboard never draws anything itself. It hands a [`ChartConfig`] and
//! an [`AggregateView`] to a [`ChartRenderer`] and receives a [`ChartHandle`]
//! that can be rendered into a named target and destroyed.

use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

use super::config::ChartConfig;
use super::surface::RenderSurface;
use crate::api::AggregateView;

/// Error type for chart construction and rendering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChartError {
    #[error("Failed to initialize chart: {0}")]
    Construction(String),

    #[error("Chart construction timed out after {0:?}")]
    Timeout(Duration),

    #[error("Failed to render chart into '{target}': {message}")]
    Render { target: String, message: String },
}

/// Result type for chart operations
pub type ChartResult<T> = Result<T, ChartError>;

/// Builds chart instances from a configuration and a data set.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to be shared with the HTTP layer.
#[async_trait]
pub trait ChartRenderer: Send + Sync {
    /// Construct a chart. Construction may fail; the caller decides what to
    /// do with the error.
    async fn construct(
        &self,
        config: &ChartConfig,
        view: &AggregateView,
    ) -> ChartResult<Box<dyn ChartHandle>>;
}

/// A constructed chart instance.
pub trait ChartHandle: Send + Sync + fmt::Debug {
    /// Identifier of this instance.
    fn id(&self) -> &str;

    /// Render into `target` on `surface`, replacing whatever the target held.
    fn render(&mut self, surface: &RenderSurface, target: &str) -> ChartResult<()>;

    /// Release the chart. Consumes the handle so it cannot be used afterwards.
    fn destroy(self: Box<Self>);
}
