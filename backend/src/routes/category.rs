use serde::{Deserialize, Serialize};

// =========================================================
// Category rollup types + route
// =========================================================

/// Schools grouped by category of school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category: String,
    pub school_count: u64,
    pub students_count: u64,
    pub staff_count: u64,
}
