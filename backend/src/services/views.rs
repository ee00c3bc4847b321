//! View aggregators.
//!
//! Each function derives one chart-ready shape from the normalized records.
//! They are pure and allocate fresh output on every call. Grouped views keep
//! groups in order of first appearance in the input.

use std::collections::HashMap;

use crate::api::{
    AggregateView, CategorySummary, FacilityEntry, MediumSummary, RestroomlessSchool,
    SchoolRecord, ViewKind, ZeroRestroomSubset,
};

/// Group records by a string key, preserving first-occurrence order.
fn group_by<'a, F>(records: &'a [SchoolRecord], key: F) -> Vec<(&'a str, Vec<&'a SchoolRecord>)>
where
    F: Fn(&'a SchoolRecord) -> &'a str,
{
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&SchoolRecord>)> = Vec::new();

    for record in records {
        let k = key(record);
        match positions.get(k) {
            Some(&pos) => groups[pos].1.push(record),
            None => {
                positions.insert(k, groups.len());
                groups.push((k, vec![record]));
            }
        }
    }

    groups
}

/// Sum of counts, clamped at `u64::MAX`.
pub(crate) fn saturating_total<I: IntoIterator<Item = u64>>(counts: I) -> u64 {
    counts.into_iter().fold(0, u64::saturating_add)
}

/// All records, unchanged.
pub fn detail_view(records: &[SchoolRecord]) -> Vec<SchoolRecord> {
    records.to_vec()
}

/// School, student and staff totals per category.
pub fn category_rollup(records: &[SchoolRecord]) -> Vec<CategorySummary> {
    group_by(records, |r| r.category.as_str())
        .into_iter()
        .map(|(category, members)| CategorySummary {
            category: category.to_string(),
            school_count: members.len() as u64,
            students_count: saturating_total(members.iter().map(|r| r.students_count)),
            staff_count: saturating_total(members.iter().map(|r| r.staff_count)),
        })
        .collect()
}

/// Schools reporting zero restrooms, narrowed to the fields the chart shows.
pub fn zero_restroom_subset(records: &[SchoolRecord]) -> ZeroRestroomSubset {
    let entries = records
        .iter()
        .filter(|r| r.restroom_count == 0)
        .map(|r| RestroomlessSchool {
            school_name: r.school_name.clone(),
            district: r.district.clone(),
            staff_count: r.staff_count,
            students_count: r.students_count,
            differently_abled_count: r.differently_abled_count.clone(),
        })
        .collect();

    ZeroRestroomSubset {
        entries,
        total: records.len(),
    }
}

/// School and student totals per medium.
pub fn medium_rollup(records: &[SchoolRecord]) -> Vec<MediumSummary> {
    group_by(records, |r| r.medium.as_str())
        .into_iter()
        .map(|(medium, members)| MediumSummary {
            medium: medium.to_string(),
            school_count: members.len() as u64,
            students_count: saturating_total(members.iter().map(|r| r.students_count)),
        })
        .collect()
}

/// Playground, canteen and hospital availability per school.
pub fn facilities_view(records: &[SchoolRecord]) -> Vec<FacilityEntry> {
    records
        .iter()
        .map(|r| FacilityEntry {
            school_name: r.school_name.clone(),
            district: r.district.clone(),
            students_count: r.students_count,
            differently_abled_count: r.differently_abled_count.clone(),
            playground: r.playground_available.clone(),
            canteen: r.eateries_available.clone(),
            hospital: r.hospital_available.clone(),
        })
        .collect()
}

/// Run the aggregator for `kind`.
pub fn build_view(kind: ViewKind, records: &[SchoolRecord]) -> AggregateView {
    match kind {
        ViewKind::Detail => AggregateView::Detail(detail_view(records)),
        ViewKind::CategoryRollup => AggregateView::CategoryRollup(category_rollup(records)),
        ViewKind::ZeroRestroom => AggregateView::ZeroRestroom(zero_restroom_subset(records)),
        ViewKind::MediumRollup => AggregateView::MediumRollup(medium_rollup(records)),
        ViewKind::Facilities => AggregateView::Facilities(facilities_view(records)),
    }
}
