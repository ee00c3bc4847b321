//! View-specific data types.
//!
//! One module per view; the HTTP layer and the chart renderer serialize these.

pub mod category;
pub mod facilities;
pub mod medium;
pub mod restrooms;
pub mod summary;
pub mod views;
