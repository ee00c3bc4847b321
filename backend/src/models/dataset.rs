//! Dataset payload as fetched and the normalized in-memory dataset.

use serde::{Deserialize, Serialize};

use super::record::{RawRecord, SchoolRecord};

/// Body returned by the data source: `{ "updatedAt": ..., "data": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetPayload {
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    #[serde(default)]
    pub data: Vec<RawRecord>,
}

/// Normalized dataset shared read-only after startup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub updated_at: String,
    pub records: Vec<SchoolRecord>,
}

impl Dataset {
    pub fn new(updated_at: impl Into<String>, records: Vec<SchoolRecord>) -> Self {
        Self {
            updated_at: updated_at.into(),
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
