//! In-memory render targets.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

use super::config::ChartConfig;

/// What a chart leaves in its target: its configuration and data rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDocument {
    pub id: String,
    pub config: ChartConfig,
    pub data: Vec<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

/// Named render targets, each holding at most one chart document.
#[derive(Debug, Clone, Default)]
pub struct RenderSurface {
    targets: Arc<RwLock<HashMap<String, ChartDocument>>>,
}

impl RenderSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content of `target`.
    pub fn mount(&self, target: &str, document: ChartDocument) {
        self.targets.write().insert(target.to_string(), document);
    }

    /// Empty `target`, returning what it held.
    pub fn clear(&self, target: &str) -> Option<ChartDocument> {
        self.targets.write().remove(target)
    }

    /// Empty `target` only if it currently shows the chart `id`.
    pub fn clear_if(&self, target: &str, id: &str) -> bool {
        let mut targets = self.targets.write();
        if targets.get(target).is_some_and(|doc| doc.id == id) {
            targets.remove(target);
            true
        } else {
            false
        }
    }

    pub fn get(&self, target: &str) -> Option<ChartDocument> {
        self.targets.read().get(target).cloned()
    }

    pub fn is_empty(&self, target: &str) -> bool {
        !self.targets.read().contains_key(target)
    }
}
