//! Chart configuration and the rendering collaborator.
//!
//! - [`config`]: static chart configuration per view
//! - [`renderer`]: `ChartRenderer` / `ChartHandle` capability traits
//! - [`surface`]: named render targets
//! - [`document`]: renderer that emits chart documents

pub mod config;
pub mod document;
pub mod renderer;
pub mod surface;

pub use config::{
    chart_config, ChartConfig, ChartKind, ChartPlugin, TooltipLabel, FACILITIES_TARGET,
    PRIMARY_TARGET,
};
pub use document::{DocumentHandle, DocumentRenderer};
pub use renderer::{ChartError, ChartHandle, ChartRenderer, ChartResult};
pub use surface::{ChartDocument, RenderSurface};
