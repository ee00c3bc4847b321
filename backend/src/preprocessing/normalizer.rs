//! Record normalization.
//!
//! Maps every [`RawRecord`] onto a [`SchoolRecord`]: source keys are renamed,
//! count fields are parsed into integers and the `"NULL"` sentinel is replaced
//! by `"-"` on the fields the dashboard displays as text.
//!
//! Count parsing is strict. A count that is empty, the sentinel, signed,
//! fractional or otherwise not a plain unsigned integer is a
//! [`NormalizeError::MalformedNumber`]; an absent count field is a
//! [`NormalizeError::MissingField`]. Absent text fields become empty strings.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::models::{RawRecord, SchoolRecord, PLACEHOLDER, SENTINEL};

/// Source keys of the raw records.
pub mod keys {
    pub const STUDENTS: &str = "number_of_students";
    pub const STAFF: &str = "number_of_staff";
    pub const SCHOOL_NAME: &str = "school_name";
    pub const DISTRICT: &str = "district";
    pub const CATEGORY: &str = "category_of_school";
    pub const MEDIUM: &str = "school_medium";
    pub const ESTABLISHMENT: &str = "yearof_establishment";
    pub const SUBJECTS: &str = "subject_offered";
    pub const PINCODE: &str = "pincode";
    pub const DIFFERENTLY_ABLED: &str = "number_of_differently_abled_student";
    pub const CLASSROOMS: &str = "number_of_classrooms";
    pub const PLAYGROUND: &str = "availabilty_of_playground";
    pub const EATERIES: &str = "availabilty_of_eateries";
    pub const HOSPITAL: &str = "availabilty_of_hospital";
    pub const RESTROOMS: &str = "number_of_restrooms";
}

/// Error raised for a record that cannot be normalized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("record {index}: field '{field}' is not a valid count: {value:?}")]
    MalformedNumber {
        index: usize,
        field: &'static str,
        value: String,
    },

    #[error("record {index}: required field '{field}' is missing")]
    MissingField { index: usize, field: &'static str },
}

impl NormalizeError {
    /// Position of the offending record in the input.
    pub fn index(&self) -> usize {
        match self {
            Self::MalformedNumber { index, .. } | Self::MissingField { index, .. } => *index,
        }
    }
}

/// Which text fields get the sentinel replaced by a placeholder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentinelPolicy {
    /// Only establishment year, subjects offered and playground availability.
    #[default]
    Compatible,
    /// Every text field.
    Uniform,
}

/// What to do when a record cannot be normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedRecordPolicy {
    /// Fail the whole dataset on the first malformed record.
    #[default]
    Abort,
    /// Log and drop malformed records.
    Skip,
}

/// Options controlling [`normalize_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeOptions {
    #[serde(default)]
    pub sentinel_policy: SentinelPolicy,
    #[serde(default, rename = "malformed_records")]
    pub malformed_policy: MalformedRecordPolicy,
}

/// Result of a normalization pass.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeOutcome {
    pub records: Vec<SchoolRecord>,
    /// Errors of the records dropped under [`MalformedRecordPolicy::Skip`].
    pub skipped: Vec<NormalizeError>,
}

/// Normalize with the default options (compatible sentinels, abort on error).
///
/// The output has exactly one record per input record.
pub fn normalize(raw: &[RawRecord]) -> Result<Vec<SchoolRecord>, NormalizeError> {
    normalize_with(raw, &NormalizeOptions::default()).map(|outcome| outcome.records)
}

/// Normalize with explicit options.
pub fn normalize_with(
    raw: &[RawRecord],
    options: &NormalizeOptions,
) -> Result<NormalizeOutcome, NormalizeError> {
    let mut records = Vec::with_capacity(raw.len());
    let mut skipped = Vec::new();

    for (index, record) in raw.iter().enumerate() {
        match normalize_record(index, record, options.sentinel_policy) {
            Ok(normalized) => records.push(normalized),
            Err(err) => match options.malformed_policy {
                MalformedRecordPolicy::Abort => return Err(err),
                MalformedRecordPolicy::Skip => {
                    warn!("Skipping malformed record: {}", err);
                    skipped.push(err);
                }
            },
        }
    }

    Ok(NormalizeOutcome { records, skipped })
}

/// Normalize one record. `index` is only used for error reporting.
pub fn normalize_record(
    index: usize,
    raw: &RawRecord,
    policy: SentinelPolicy,
) -> Result<SchoolRecord, NormalizeError> {
    let count = |field: &'static str| parse_count(index, raw, field);
    let text = |field: &'static str| raw.get(field).unwrap_or_default().to_string();
    let display = |field: &'static str| placeholder_for_sentinel(raw.get(field).unwrap_or_default());
    let optional = |field: &'static str| match policy {
        SentinelPolicy::Compatible => text(field),
        SentinelPolicy::Uniform => display(field),
    };

    Ok(SchoolRecord {
        students_count: count(keys::STUDENTS)?,
        staff_count: count(keys::STAFF)?,
        school_name: optional(keys::SCHOOL_NAME),
        district: optional(keys::DISTRICT),
        category: optional(keys::CATEGORY),
        medium: optional(keys::MEDIUM),
        establishment_year: display(keys::ESTABLISHMENT),
        subjects_offered: display(keys::SUBJECTS),
        pincode: optional(keys::PINCODE),
        differently_abled_count: optional(keys::DIFFERENTLY_ABLED),
        classroom_count: optional(keys::CLASSROOMS),
        playground_available: display(keys::PLAYGROUND),
        eateries_available: optional(keys::EATERIES),
        hospital_available: optional(keys::HOSPITAL),
        restroom_count: count(keys::RESTROOMS)?,
    })
}

fn placeholder_for_sentinel(value: &str) -> String {
    if value == SENTINEL {
        PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}

fn parse_count(index: usize, raw: &RawRecord, field: &'static str) -> Result<u64, NormalizeError> {
    let value = raw
        .get(field)
        .ok_or(NormalizeError::MissingField { index, field })?;

    let trimmed = value.trim();
    // `u64::from_str` accepts a leading '+'; counts are plain digits only.
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NormalizeError::MalformedNumber {
            index,
            field,
            value: value.to_string(),
        });
    }

    trimmed
        .parse::<u64>()
        .map_err(|_| NormalizeError::MalformedNumber {
            index,
            field,
            value: value.to_string(),
        })
}
