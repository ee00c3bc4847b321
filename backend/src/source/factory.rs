//! Source factory for dependency injection.

use std::sync::Arc;

use super::{DataSource, LocalDataSource, SourceError, SourceResult};
use crate::config::{SourceSettings, SourceType};

/// Builds the configured [`DataSource`].
pub struct SourceFactory;

impl SourceFactory {
    pub fn from_settings(settings: &SourceSettings) -> SourceResult<Arc<dyn DataSource>> {
        match settings.source_type {
            SourceType::Http => Self::create_http(settings),
            SourceType::Local => {
                let path = settings.path.as_ref().ok_or_else(|| {
                    SourceError::configuration("local source requires a path")
                })?;
                Ok(Arc::new(LocalDataSource::from_file(path)))
            }
        }
    }

    #[cfg(feature = "http-source")]
    fn create_http(settings: &SourceSettings) -> SourceResult<Arc<dyn DataSource>> {
        let source = super::HttpDataSource::new(settings.url.clone(), settings.fetch_timeout())?;
        Ok(Arc::new(source))
    }

    #[cfg(not(feature = "http-source"))]
    fn create_http(_settings: &SourceSettings) -> SourceResult<Arc<dyn DataSource>> {
        Err(SourceError::configuration(
            "HTTP source requested but the `http-source` feature is disabled",
        ))
    }
}
