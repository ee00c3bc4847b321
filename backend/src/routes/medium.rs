use serde::{Deserialize, Serialize};

// =========================================================
// Medium rollup types + route
// =========================================================

/// Schools grouped by medium of instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediumSummary {
    pub medium: String,
    pub school_count: u64,
    pub students_count: u64,
}
