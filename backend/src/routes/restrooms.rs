use serde::{Deserialize, Serialize};

// =========================================================
// Zero-restroom subset types + route
// =========================================================

/// Narrowed projection of a school that reports no restrooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestroomlessSchool {
    pub school_name: String,
    pub district: String,
    pub staff_count: u64,
    pub students_count: u64,
    pub differently_abled_count: String,
}

/// Schools without restrooms plus the size of the dataset they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZeroRestroomSubset {
    pub entries: Vec<RestroomlessSchool>,
    /// Number of records the subset was filtered from.
    pub total: usize,
}

impl ZeroRestroomSubset {
    /// Share of schools without restrooms; `0.0` for an empty dataset.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.entries.len() as f64 / self.total as f64
        }
    }

    /// `"(filtered/total)"` label shown next to the chart.
    pub fn display_ratio(&self) -> String {
        format!("({}/{})", self.entries.len(), self.total)
    }
}
