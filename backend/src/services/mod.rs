//! Service layer for business logic.
//!
//! The aggregators here sit between the normalized dataset and the chart
//! lifecycle: each turns the record set into the shape one chart consumes.

pub mod summary;
pub mod views;

#[cfg(test)]
#[path = "views_tests.rs"]
mod views_tests;

pub use summary::summary_counts;
pub use views::{
    build_view, category_rollup, detail_view, facilities_view, medium_rollup,
    zero_restroom_subset,
};
