//! Dataset sources.
//!
//! The dashboard reads its dataset exactly once at startup through a
//! [`DataSource`]. Implementations:
//! - [`HttpDataSource`]: one GET of a fixed URL (feature `http-source`)
//! - [`LocalDataSource`]: an in-memory payload or a JSON file

pub mod error;
pub mod factory;
#[cfg(feature = "http-source")]
pub mod http;
pub mod local;

use async_trait::async_trait;

use crate::api::DatasetPayload;

pub use error::{ErrorContext, SourceError, SourceResult};
pub use factory::SourceFactory;
#[cfg(feature = "http-source")]
pub use http::HttpDataSource;
pub use local::LocalDataSource;

/// Source of the raw dataset.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch the payload. Called once; no retries.
    async fn fetch(&self) -> SourceResult<DatasetPayload>;

    /// Human readable location, for logs.
    fn describe(&self) -> String;
}

/// Decode a payload body, reporting the JSON path of the first error.
pub fn parse_payload(body: &str, context: ErrorContext) -> SourceResult<DatasetPayload> {
    let deserializer = &mut serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(deserializer).map_err(|e| {
        let path = e.path().to_string();
        SourceError::parse(e.into_inner().to_string(), context.with_details(format!("path={}", path)))
    })
}
