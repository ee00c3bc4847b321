use serde::{Deserialize, Serialize};

use crate::models::SchoolRecord;

use super::category::CategorySummary;
use super::facilities::FacilityEntry;
use super::medium::MediumSummary;
use super::restrooms::ZeroRestroomSubset;

// =========================================================
// View selection types
// =========================================================

/// Views the dashboard can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewKind {
    Detail,
    CategoryRollup,
    ZeroRestroom,
    MediumRollup,
    /// Playground / canteen / hospital projection. Not reachable by index.
    Facilities,
}

impl ViewKind {
    /// Kinds selectable by index, in index order starting at 1.
    pub const SELECTABLE: [ViewKind; 4] = [
        ViewKind::Detail,
        ViewKind::CategoryRollup,
        ViewKind::ZeroRestroom,
        ViewKind::MediumRollup,
    ];

    /// Map a user-facing index to a view. Unknown indices fall back to
    /// [`ViewKind::Detail`].
    pub fn from_index(index: i64) -> Self {
        match index {
            2 => ViewKind::CategoryRollup,
            3 => ViewKind::ZeroRestroom,
            4 => ViewKind::MediumRollup,
            _ => ViewKind::Detail,
        }
    }

    /// Selector index of this view, if it has one.
    pub fn index(self) -> Option<i64> {
        match self {
            ViewKind::Detail => Some(1),
            ViewKind::CategoryRollup => Some(2),
            ViewKind::ZeroRestroom => Some(3),
            ViewKind::MediumRollup => Some(4),
            ViewKind::Facilities => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ViewKind::Detail => "Schools by district",
            ViewKind::CategoryRollup => "Schools by category",
            ViewKind::ZeroRestroom => "Schools without restrooms",
            ViewKind::MediumRollup => "Schools by medium",
            ViewKind::Facilities => "Facilities",
        }
    }
}

/// Aggregate computed for one view. Built fresh for every selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", content = "data", rename_all = "camelCase")]
pub enum AggregateView {
    Detail(Vec<SchoolRecord>),
    CategoryRollup(Vec<CategorySummary>),
    ZeroRestroom(ZeroRestroomSubset),
    MediumRollup(Vec<MediumSummary>),
    Facilities(Vec<FacilityEntry>),
}

impl AggregateView {
    pub fn kind(&self) -> ViewKind {
        match self {
            AggregateView::Detail(_) => ViewKind::Detail,
            AggregateView::CategoryRollup(_) => ViewKind::CategoryRollup,
            AggregateView::ZeroRestroom(_) => ViewKind::ZeroRestroom,
            AggregateView::MediumRollup(_) => ViewKind::MediumRollup,
            AggregateView::Facilities(_) => ViewKind::Facilities,
        }
    }

    /// Number of rows handed to the chart.
    pub fn len(&self) -> usize {
        match self {
            AggregateView::Detail(rows) => rows.len(),
            AggregateView::CategoryRollup(rows) => rows.len(),
            AggregateView::ZeroRestroom(subset) => subset.entries.len(),
            AggregateView::MediumRollup(rows) => rows.len(),
            AggregateView::Facilities(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The data array a chart is built from.
    pub fn rows(&self) -> serde_json::Result<Vec<serde_json::Value>> {
        fn to_rows<T: Serialize>(rows: &[T]) -> serde_json::Result<Vec<serde_json::Value>> {
            rows.iter().map(serde_json::to_value).collect()
        }

        match self {
            AggregateView::Detail(rows) => to_rows(rows),
            AggregateView::CategoryRollup(rows) => to_rows(rows),
            AggregateView::ZeroRestroom(subset) => to_rows(&subset.entries),
            AggregateView::MediumRollup(rows) => to_rows(rows),
            AggregateView::Facilities(rows) => to_rows(rows),
        }
    }
}
