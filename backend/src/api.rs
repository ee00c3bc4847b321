//! Public API surface for the dashboard backend.
//!
//! This file consolidates the DTO types shared by the service layer, the
//! chart lifecycle and the HTTP API. All types derive Serialize.

pub use crate::models::{Dataset, DatasetPayload, RawRecord, SchoolRecord};
pub use crate::routes::category::CategorySummary;
pub use crate::routes::facilities::FacilityEntry;
pub use crate::routes::medium::MediumSummary;
pub use crate::routes::restrooms::RestroomlessSchool;
pub use crate::routes::restrooms::ZeroRestroomSubset;
pub use crate::routes::summary::DatasetInfo;
pub use crate::routes::summary::SummaryCounts;
pub use crate::routes::views::AggregateView;
pub use crate::routes::views::ViewKind;
