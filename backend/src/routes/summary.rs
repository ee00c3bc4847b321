use serde::{Deserialize, Serialize};

// =========================================================
// Headline counters + dataset info
// =========================================================

/// Totals shown above the charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCounts {
    pub school_count: usize,
    pub students_count: u64,
    pub staff_count: u64,
    /// Students per staff member, rounded up. `None` when there is no staff.
    pub students_per_staff: Option<u64>,
}

/// Dataset metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetInfo {
    pub updated_at: String,
    /// `updated_at` formatted for display.
    pub updated_at_display: String,
    pub record_count: usize,
}
