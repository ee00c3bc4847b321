//! HTTP dataset source.

use async_trait::async_trait;
use log::{debug, info};
use std::time::Duration;

use super::{parse_payload, DataSource, ErrorContext, SourceError, SourceResult};
use crate::api::DatasetPayload;

/// Fetches the dataset with a single GET. There is no retry: a failed fetch
/// is reported to the caller as is.
#[derive(Debug, Clone)]
pub struct HttpDataSource {
    url: String,
    client: reqwest::Client,
}

impl HttpDataSource {
    /// Create a source for `url` whose requests give up after `timeout`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> SourceResult<Self> {
        let url = url.into();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                SourceError::transport(
                    format!("Failed to build HTTP client: {}", e),
                    ErrorContext::new("build_client").with_location(url.clone()),
                )
            })?;
        Ok(Self { url, client })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn fetch(&self) -> SourceResult<DatasetPayload> {
        let context = ErrorContext::new("fetch").with_location(self.url.clone());
        info!("Fetching dataset from {}", self.url);

        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::timeout(e.to_string(), context.clone())
            } else {
                SourceError::transport(e.to_string(), context.clone())
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SourceError::transport(e.to_string(), context.clone()))?;
        debug!("Dataset response {} ({} bytes)", status, body.len());

        if !status.is_success() {
            return Err(SourceError::transport(
                format!("Dataset request failed ({})", status),
                context.with_details(format!("status={}", status.as_u16())),
            ));
        }

        parse_payload(&body, context)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
