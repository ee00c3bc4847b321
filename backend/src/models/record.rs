//! Raw and normalized school records.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Sentinel the data source uses for "no data".
pub const SENTINEL: &str = "NULL";

/// Placeholder shown in place of the sentinel after normalization.
pub const PLACEHOLDER: &str = "-";

/// Untyped school record exactly as delivered by the data source.
///
/// Values are kept as strings. Non-string JSON scalars are stringified on the
/// way in and a JSON `null` is read as the [`SENTINEL`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawRecord(BTreeMap<String, String>);

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a raw field by its source key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        RawRecord(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for RawRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        use serde_json::Value;

        let fields = BTreeMap::<String, Value>::deserialize(deserializer)?;
        let mut out = BTreeMap::new();
        for (key, value) in fields {
            let text = match value {
                Value::String(s) => s,
                Value::Null => SENTINEL.to_string(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(D::Error::custom(format!(
                        "field '{}' holds a nested value; records must be flat",
                        key
                    )))
                }
            };
            out.insert(key, text);
        }
        Ok(RawRecord(out))
    }
}

/// Normalized school record.
///
/// Serialized in camelCase because chart configurations bind axes and tooltip
/// labels to these names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolRecord {
    pub students_count: u64,
    pub staff_count: u64,
    pub school_name: String,
    pub district: String,
    pub category: String,
    pub medium: String,
    /// `-` when the source had no data
    pub establishment_year: String,
    /// `-` when the source had no data
    pub subjects_offered: String,
    pub pincode: String,
    /// Opaque; never aggregated numerically.
    pub differently_abled_count: String,
    pub classroom_count: String,
    pub playground_available: String,
    pub eateries_available: String,
    pub hospital_available: String,
    pub restroom_count: u64,
}
