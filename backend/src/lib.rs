//! # School Dashboard Backend
//!
//! Fetches a single JSON dataset of schools, normalizes it into typed
//! records, reshapes it into per-view aggregates and drives the lifecycle of
//! the one chart mounted in the dashboard's primary target.
//!
//! ## Architecture
//!
//! - [`models`]: raw and normalized records, dataset payload
//! - [`preprocessing`]: record normalizer
//! - [`services`]: aggregators producing the views and summary counters
//! - [`routes`]: view-specific data types
//! - [`api`]: public DTO surface
//! - [`charts`]: chart configuration catalog and renderer capability
//! - [`dashboard`]: view selector state machine and application root
//! - [`source`]: dataset sources (HTTP, local)
//! - [`config`]: TOML configuration with env overrides
//! - [`http`]: axum HTTP API (feature `http-server`)

// SourceError carries an ErrorContext; boxing it is not worth the noise.
#![allow(clippy::result_large_err)]

pub mod api;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod preprocessing;
pub mod routes;
pub mod services;
pub mod source;

#[cfg(feature = "http-server")]
pub mod http;

pub use dashboard::Dashboard;
pub use error::{DashboardError, DashboardResult};
