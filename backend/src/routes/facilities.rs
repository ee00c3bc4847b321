use serde::{Deserialize, Serialize};

// =========================================================
// Facilities types + route
// =========================================================

/// Per-school facility availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityEntry {
    pub school_name: String,
    pub district: String,
    pub students_count: u64,
    pub differently_abled_count: String,
    pub playground: String,
    pub canteen: String,
    pub hospital: String,
}
