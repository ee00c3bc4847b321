//! In-memory and file-backed dataset source.

use async_trait::async_trait;
use std::path::PathBuf;

use super::{parse_payload, DataSource, ErrorContext, SourceError, SourceResult};
use crate::api::DatasetPayload;

#[derive(Debug, Clone)]
enum Origin {
    Memory(DatasetPayload),
    File(PathBuf),
}

/// Source for development and tests.
#[derive(Debug, Clone)]
pub struct LocalDataSource {
    origin: Origin,
}

impl LocalDataSource {
    /// Serve a payload held in memory.
    pub fn from_payload(payload: DatasetPayload) -> Self {
        Self {
            origin: Origin::Memory(payload),
        }
    }

    /// Read the payload from a JSON file on every fetch.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            origin: Origin::File(path.into()),
        }
    }
}

#[async_trait]
impl DataSource for LocalDataSource {
    async fn fetch(&self) -> SourceResult<DatasetPayload> {
        match &self.origin {
            Origin::Memory(payload) => Ok(payload.clone()),
            Origin::File(path) => {
                let context =
                    ErrorContext::new("read_file").with_location(path.display().to_string());
                let body = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| SourceError::io(e.to_string(), context.clone()))?;
                parse_payload(&body, context)
            }
        }
    }

    fn describe(&self) -> String {
        match &self.origin {
            Origin::Memory(payload) => format!("memory ({} records)", payload.data.len()),
            Origin::File(path) => format!("file {}", path.display()),
        }
    }
}
