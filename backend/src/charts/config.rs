//! Static chart configurations.
//!
//! Every view has a fixed configuration: chart kind, axis bindings, colour and
//! size fields, tooltip labels and plugins. Nothing here depends on the data.

use serde::{Deserialize, Serialize};

use crate::api::ViewKind;

/// Render target holding the selectable chart.
pub const PRIMARY_TARGET: &str = "PrimaryBar";
/// Render target of the facilities chart.
pub const FACILITIES_TARGET: &str = "PGBar";

const RENDERING_TIMEOUT_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Scatterplot,
    Bar,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartPlugin {
    Tooltip,
    Legend,
}

/// Tooltip label for one data field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipLabel {
    pub field: String,
    pub label: String,
}

/// Configuration handed to the renderer together with the data rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub x: String,
    pub y: String,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub tooltip: Vec<TooltipLabel>,
    pub plugins: Vec<ChartPlugin>,
    pub rendering_timeout_ms: u64,
    /// Render target the chart is meant for.
    pub target: String,
}

impl ChartConfig {
    fn new(kind: ChartKind, x: &str, y: &str, color: &str) -> Self {
        Self {
            kind,
            x: x.to_string(),
            y: y.to_string(),
            color: color.to_string(),
            size: None,
            tooltip: Vec::new(),
            plugins: vec![ChartPlugin::Tooltip, ChartPlugin::Legend],
            rendering_timeout_ms: RENDERING_TIMEOUT_MS,
            target: PRIMARY_TARGET.to_string(),
        }
    }

    fn size(mut self, field: &str) -> Self {
        self.size = Some(field.to_string());
        self
    }

    fn target(mut self, target: &str) -> Self {
        self.target = target.to_string();
        self
    }

    fn labels(mut self, labels: &[(&str, &str)]) -> Self {
        self.tooltip = labels
            .iter()
            .map(|(field, label)| TooltipLabel {
                field: field.to_string(),
                label: label.to_string(),
            })
            .collect();
        self
    }

    /// Fields the chart reads from each data row.
    pub fn bound_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.x.as_str(), self.y.as_str(), self.color.as_str()];
        if let Some(size) = &self.size {
            fields.push(size.as_str());
        }
        fields
    }

    pub fn label_for(&self, field: &str) -> Option<&str> {
        self.tooltip
            .iter()
            .find(|t| t.field == field)
            .map(|t| t.label.as_str())
    }
}

/// Configuration for a view.
pub fn chart_config(kind: ViewKind) -> ChartConfig {
    match kind {
        ViewKind::Detail => ChartConfig::new(ChartKind::Scatterplot, "district", "studentsCount", "district")
            .size("studentsCount")
            .labels(&[
                ("studentsCount", "Number of Students"),
                ("district", "District"),
                ("category", "Category of School"),
                ("establishmentYear", "Year of Establishment"),
                ("subjectsOffered", "Subjects Offered"),
                ("medium", "School Medium"),
                ("schoolName", "School Name"),
                ("pincode", "Pincode"),
                ("differentlyAbledCount", "Number of Differently Abled Students"),
                ("staffCount", "Number of Staffs"),
                ("classroomCount", "Number of Classrooms"),
                ("playgroundAvailable", "Availability of Playground"),
                ("eateriesAvailable", "Availability of Eateries"),
                ("hospitalAvailable", "Availability of Hospital"),
                ("restroomCount", "Number of Restrooms"),
            ]),
        ViewKind::CategoryRollup => ChartConfig::new(ChartKind::Bar, "category", "schoolCount", "category")
            .labels(&[
                ("schoolCount", "Schools"),
                ("studentsCount", "Students"),
                ("staffCount", "Staffs"),
                ("category", "Category"),
            ]),
        ViewKind::ZeroRestroom => ChartConfig::new(ChartKind::Scatterplot, "district", "studentsCount", "district")
            .labels(&[
                ("schoolName", "School Name"),
                ("district", "District"),
                ("staffCount", "Number of Staffs"),
                ("studentsCount", "Number of Students"),
                ("differentlyAbledCount", "Number of Differently Abled Students"),
            ]),
        ViewKind::MediumRollup => ChartConfig::new(ChartKind::Bar, "medium", "schoolCount", "medium")
            .labels(&[
                ("schoolCount", "Schools"),
                ("studentsCount", "Students"),
                ("medium", "Medium"),
            ]),
        ViewKind::Facilities => ChartConfig::new(ChartKind::Line, "studentsCount", "district", "canteen")
            .target(FACILITIES_TARGET)
            .labels(&[
                ("schoolName", "School Name"),
                ("district", "District"),
                ("studentsCount", "Number of Students"),
                ("differentlyAbledCount", "Number of Differently Abled Students"),
                ("playground", "Playground"),
                ("canteen", "Canteen"),
                ("hospital", "Hospital"),
            ]),
    }
}
