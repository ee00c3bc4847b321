use crate::api::{SchoolRecord, SummaryCounts};
use super::views::saturating_total;

/// Compute the headline totals for the dashboard.
pub fn summary_counts(records: &[SchoolRecord]) -> SummaryCounts {
    let students_count = saturating_total(records.iter().map(|r| r.students_count));
    let staff_count = saturating_total(records.iter().map(|r| r.staff_count));

    let students_per_staff = if staff_count == 0 {
        None
    } else {
        Some(students_count.div_ceil(staff_count))
    };

    SummaryCounts {
        school_count: records.len(),
        students_count,
        staff_count,
        students_per_staff,
    }
}
