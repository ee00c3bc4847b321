use crate::api::{SchoolRecord, ViewKind};
use crate::services::views::{
    build_view, category_rollup, detail_view, facilities_view, medium_rollup,
    zero_restroom_subset,
};

pub(crate) fn record(
    name: &str,
    district: &str,
    category: &str,
    medium: &str,
    students: u64,
    staff: u64,
    restrooms: u64,
) -> SchoolRecord {
    SchoolRecord {
        students_count: students,
        staff_count: staff,
        school_name: name.to_string(),
        district: district.to_string(),
        category: category.to_string(),
        medium: medium.to_string(),
        establishment_year: "1990".to_string(),
        subjects_offered: "-".to_string(),
        pincode: "600001".to_string(),
        differently_abled_count: "1".to_string(),
        classroom_count: "8".to_string(),
        playground_available: "Yes".to_string(),
        eateries_available: "No".to_string(),
        hospital_available: "NULL".to_string(),
        restroom_count: restrooms,
    }
}

fn sample() -> Vec<SchoolRecord> {
    vec![
        record("A", "Chennai", "Govt", "Tamil", 10, 2, 0),
        record("B", "Madurai", "Aided", "English", 20, 4, 3),
        record("C", "Chennai", "Govt", "English", 30, 5, 0),
        record("D", "Salem", "Private", "Tamil", 40, 6, 1),
    ]
}

#[test]
fn test_detail_view_is_pass_through() {
    let records = sample();
    assert_eq!(detail_view(&records), records);
}

#[test]
fn test_category_rollup_groups_in_first_occurrence_order() {
    let rollup = category_rollup(&sample());

    let categories: Vec<&str> = rollup.iter().map(|c| c.category.as_str()).collect();
    assert_eq!(categories, vec!["Govt", "Aided", "Private"]);

    let govt = &rollup[0];
    assert_eq!(govt.school_count, 2);
    assert_eq!(govt.students_count, 40);
    assert_eq!(govt.staff_count, 7);
}

#[test]
fn test_category_rollup_totals_match_input() {
    let records = sample();
    let rollup = category_rollup(&records);

    let schools: u64 = rollup.iter().map(|c| c.school_count).sum();
    let students: u64 = rollup.iter().map(|c| c.students_count).sum();
    let staff: u64 = rollup.iter().map(|c| c.staff_count).sum();

    assert_eq!(schools, records.len() as u64);
    assert_eq!(students, records.iter().map(|r| r.students_count).sum::<u64>());
    assert_eq!(staff, records.iter().map(|r| r.staff_count).sum::<u64>());
}

#[test]
fn test_grouping_is_case_sensitive() {
    let records = vec![
        record("A", "D", "Govt", "Tamil", 1, 1, 1),
        record("B", "D", "govt", "tamil", 1, 1, 1),
    ];
    assert_eq!(category_rollup(&records).len(), 2);
    assert_eq!(medium_rollup(&records).len(), 2);
}

#[test]
fn test_zero_restroom_subset() {
    let subset = zero_restroom_subset(&sample());

    let names: Vec<&str> = subset.entries.iter().map(|e| e.school_name.as_str()).collect();
    assert_eq!(names, vec!["A", "C"]);
    assert_eq!(subset.total, 4);
    assert!((subset.ratio() - 0.5).abs() < 1e-12);
    assert_eq!(subset.display_ratio(), "(2/4)");

    let first = &subset.entries[0];
    assert_eq!(first.district, "Chennai");
    assert_eq!(first.staff_count, 2);
    assert_eq!(first.students_count, 10);
    assert_eq!(first.differently_abled_count, "1");
}

#[test]
fn test_zero_restroom_subset_none_match() {
    let records = vec![record("A", "D", "Govt", "Tamil", 1, 1, 2)];
    let subset = zero_restroom_subset(&records);
    assert!(subset.entries.is_empty());
    assert_eq!(subset.total, 1);
}

#[test]
fn test_medium_rollup() {
    let rollup = medium_rollup(&sample());
    assert_eq!(rollup.len(), 2);
    assert_eq!(rollup[0].medium, "Tamil");
    assert_eq!(rollup[0].school_count, 2);
    assert_eq!(rollup[0].students_count, 50);
    assert_eq!(rollup[1].medium, "English");
    assert_eq!(rollup[1].students_count, 50);
}

#[test]
fn test_facilities_view_projection() {
    let rows = facilities_view(&sample());
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].playground, "Yes");
    assert_eq!(rows[0].canteen, "No");
    assert_eq!(rows[0].hospital, "NULL");
}

#[test]
fn test_build_view_dispatch() {
    let records = sample();
    for kind in ViewKind::SELECTABLE {
        assert_eq!(build_view(kind, &records).kind(), kind);
    }
    assert_eq!(build_view(ViewKind::Facilities, &records).len(), 4);
    assert_eq!(build_view(ViewKind::ZeroRestroom, &records).len(), 2);
}

#[test]
fn test_aggregators_on_empty_input() {
    assert!(detail_view(&[]).is_empty());
    assert!(category_rollup(&[]).is_empty());
    assert!(medium_rollup(&[]).is_empty());
    assert_eq!(zero_restroom_subset(&[]).total, 0);
}

#[test]
fn test_rollups_clamp_on_overflow() {
    let records = vec![
        record("A", "D1", "Govt", "Tamil", u64::MAX, u64::MAX, 0),
        record("B", "D2", "Govt", "Tamil", 7, 1, 0),
    ];

    let categories = category_rollup(&records);
    assert_eq!(categories[0].school_count, 2);
    assert_eq!(categories[0].students_count, u64::MAX);
    assert_eq!(categories[0].staff_count, u64::MAX);

    let mediums = medium_rollup(&records);
    assert_eq!(mediums[0].students_count, u64::MAX);
}
