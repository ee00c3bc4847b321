//! Renderer that emits chart documents.
//!
//! A front end charting library consumes the [`ChartDocument`] (configuration
//! plus data rows) left in a render target.

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::config::ChartConfig;
use super::renderer::{ChartError, ChartHandle, ChartRenderer, ChartResult};
use super::surface::{ChartDocument, RenderSurface};
use crate::api::AggregateView;

/// [`ChartRenderer`] producing [`ChartDocument`]s.
#[derive(Debug, Clone, Default)]
pub struct DocumentRenderer {
    live: Arc<AtomicUsize>,
}

impl DocumentRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles constructed and not yet destroyed.
    pub fn live_handles(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

/// Every row must carry the fields the configuration binds to.
fn check_bindings(config: &ChartConfig, rows: &[serde_json::Value]) -> ChartResult<()> {
    for (index, row) in rows.iter().enumerate() {
        let object = row.as_object().ok_or_else(|| {
            ChartError::Construction(format!("row {} is not an object", index))
        })?;
        for field in config.bound_fields() {
            if !object.contains_key(field) {
                return Err(ChartError::Construction(format!(
                    "row {} has no field '{}' bound by the chart",
                    index, field
                )));
            }
        }
    }
    Ok(())
}

#[async_trait]
impl ChartRenderer for DocumentRenderer {
    async fn construct(
        &self,
        config: &ChartConfig,
        view: &AggregateView,
    ) -> ChartResult<Box<dyn ChartHandle>> {
        let data = view
            .rows()
            .map_err(|e| ChartError::Construction(format!("Failed to serialize rows: {}", e)))?;
        check_bindings(config, &data)?;

        let document = ChartDocument {
            id: uuid::Uuid::new_v4().to_string(),
            config: config.clone(),
            data,
            created_at: Utc::now(),
        };
        debug!(
            "Constructed {:?} chart {} with {} rows",
            config.kind,
            document.id,
            document.data.len()
        );

        self.live.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(DocumentHandle {
            document,
            mounted: None,
            live: Arc::clone(&self.live),
        }))
    }
}

/// Handle to a chart document.
#[derive(Debug)]
pub struct DocumentHandle {
    document: ChartDocument,
    mounted: Option<(RenderSurface, String)>,
    live: Arc<AtomicUsize>,
}

impl DocumentHandle {
    pub fn document(&self) -> &ChartDocument {
        &self.document
    }
}

impl ChartHandle for DocumentHandle {
    fn id(&self) -> &str {
        &self.document.id
    }

    fn render(&mut self, surface: &RenderSurface, target: &str) -> ChartResult<()> {
        if target.is_empty() {
            return Err(ChartError::Render {
                target: target.to_string(),
                message: "target name is empty".to_string(),
            });
        }
        if let Some((previous_surface, previous_target)) = self.mounted.take() {
            previous_surface.clear_if(&previous_target, &self.document.id);
        }
        surface.mount(target, self.document.clone());
        self.mounted = Some((surface.clone(), target.to_string()));
        Ok(())
    }

    fn destroy(self: Box<Self>) {
        if let Some((surface, target)) = &self.mounted {
            surface.clear_if(target, &self.document.id);
        }
        self.live.fetch_sub(1, Ordering::SeqCst);
        debug!("Destroyed chart {}", self.document.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CategorySummary, ViewKind};
    use crate::charts::config::{chart_config, PRIMARY_TARGET};

    fn rollup() -> AggregateView {
        AggregateView::CategoryRollup(vec![CategorySummary {
            category: "Govt".to_string(),
            school_count: 1,
            students_count: 10,
            staff_count: 2,
        }])
    }

    #[tokio::test]
    async fn test_construct_render_destroy() {
        let renderer = DocumentRenderer::new();
        let surface = RenderSurface::new();

        let mut handle = renderer
            .construct(&chart_config(ViewKind::CategoryRollup), &rollup())
            .await
            .unwrap();
        assert_eq!(renderer.live_handles(), 1);

        handle.render(&surface, PRIMARY_TARGET).unwrap();
        let mounted = surface.get(PRIMARY_TARGET).unwrap();
        assert_eq!(mounted.id, handle.id());
        assert_eq!(mounted.data[0]["category"], "Govt");

        handle.destroy();
        assert_eq!(renderer.live_handles(), 0);
        assert!(surface.is_empty(PRIMARY_TARGET));
    }

    #[tokio::test]
    async fn test_construct_rejects_unbound_fields() {
        let renderer = DocumentRenderer::new();
        // Medium bindings do not exist on category rows.
        let err = renderer
            .construct(&chart_config(ViewKind::MediumRollup), &rollup())
            .await
            .unwrap_err();
        assert!(matches!(err, ChartError::Construction(_)));
        assert_eq!(renderer.live_handles(), 0);
    }

    #[tokio::test]
    async fn test_construct_empty_view() {
        let renderer = DocumentRenderer::new();
        let handle = renderer
            .construct(
                &chart_config(ViewKind::MediumRollup),
                &AggregateView::MediumRollup(vec![]),
            )
            .await
            .unwrap();
        handle.destroy();
        assert_eq!(renderer.live_handles(), 0);
    }

    #[tokio::test]
    async fn test_destroy_leaves_newer_chart_in_place() {
        let renderer = DocumentRenderer::new();
        let surface = RenderSurface::new();
        let config = chart_config(ViewKind::CategoryRollup);

        let mut first = renderer.construct(&config, &rollup()).await.unwrap();
        let mut second = renderer.construct(&config, &rollup()).await.unwrap();
        first.render(&surface, PRIMARY_TARGET).unwrap();
        second.render(&surface, PRIMARY_TARGET).unwrap();

        let second_id = second.id().to_string();
        first.destroy();
        assert_eq!(surface.get(PRIMARY_TARGET).unwrap().id, second_id);
        second.destroy();
    }

    #[tokio::test]
    async fn test_render_empty_target_fails() {
        let renderer = DocumentRenderer::new();
        let mut handle = renderer
            .construct(&chart_config(ViewKind::CategoryRollup), &rollup())
            .await
            .unwrap();
        let err = handle.render(&RenderSurface::new(), "").unwrap_err();
        assert!(matches!(err, ChartError::Render { .. }));
        handle.destroy();
    }
}
