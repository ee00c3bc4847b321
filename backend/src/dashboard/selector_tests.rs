use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;

use super::progress::ProgressIndicator;
use super::selector::{SelectOutcome, SelectorState, ViewSelector};
use crate::api::{AggregateView, Dataset, SchoolRecord, ViewKind};
use crate::charts::{
    ChartConfig, ChartError, ChartHandle, ChartRenderer, ChartResult, RenderSurface,
    PRIMARY_TARGET,
};
use crate::charts::surface::ChartDocument;

enum Step {
    Succeed,
    Fail,
    Wait(oneshot::Receiver<()>),
    Hang,
}

/// Renderer whose constructions follow a script.
#[derive(Default)]
struct ScriptedRenderer {
    script: Mutex<VecDeque<Step>>,
    constructed: Arc<AtomicUsize>,
    destroyed: Arc<AtomicUsize>,
}

impl ScriptedRenderer {
    fn with_script(steps: Vec<Step>) -> Self {
        Self {
            script: Mutex::new(steps.into()),
            ..Default::default()
        }
    }

    fn live(&self) -> usize {
        self.constructed.load(Ordering::SeqCst) - self.destroyed.load(Ordering::SeqCst)
    }
}

#[derive(Debug)]
struct ScriptedHandle {
    id: String,
    config: ChartConfig,
    destroyed: Arc<AtomicUsize>,
}

impl ChartHandle for ScriptedHandle {
    fn id(&self) -> &str {
        &self.id
    }

    fn render(&mut self, surface: &RenderSurface, target: &str) -> ChartResult<()> {
        surface.mount(
            target,
            ChartDocument {
                id: self.id.clone(),
                config: self.config.clone(),
                data: vec![],
                created_at: chrono::Utc::now(),
            },
        );
        Ok(())
    }

    fn destroy(self: Box<Self>) {
        self.destroyed.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ChartRenderer for ScriptedRenderer {
    async fn construct(
        &self,
        config: &ChartConfig,
        _view: &AggregateView,
    ) -> ChartResult<Box<dyn ChartHandle>> {
        let step = self.script.lock().pop_front().unwrap_or(Step::Succeed);
        match step {
            Step::Succeed => {}
            Step::Fail => return Err(ChartError::Construction("scripted failure".to_string())),
            Step::Wait(gate) => {
                let _ = gate.await;
            }
            Step::Hang => std::future::pending::<()>().await,
        }
        let n = self.constructed.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(Box::new(ScriptedHandle {
            id: format!("chart-{}", n),
            config: config.clone(),
            destroyed: Arc::clone(&self.destroyed),
        }))
    }
}

fn dataset() -> Arc<Dataset> {
    let record = |name: &str, restrooms: u64| SchoolRecord {
        students_count: 10,
        staff_count: 2,
        school_name: name.to_string(),
        district: "Chennai".to_string(),
        category: "Govt".to_string(),
        medium: "Tamil".to_string(),
        establishment_year: "-".to_string(),
        subjects_offered: "-".to_string(),
        pincode: String::new(),
        differently_abled_count: String::new(),
        classroom_count: String::new(),
        playground_available: "-".to_string(),
        eateries_available: String::new(),
        hospital_available: String::new(),
        restroom_count: restrooms,
    };
    Arc::new(Dataset::new(
        "2018-01-15T10:30:00Z",
        vec![record("A", 0), record("B", 2)],
    ))
}

fn selector(renderer: Arc<ScriptedRenderer>) -> ViewSelector {
    ViewSelector::new(
        dataset(),
        renderer,
        RenderSurface::new(),
        ProgressIndicator::new(),
    )
}

#[tokio::test]
async fn test_select_mounts_chart() {
    let renderer = Arc::new(ScriptedRenderer::default());
    let selector = selector(renderer.clone());

    let outcome = selector.select(2).await;
    assert_eq!(
        outcome,
        SelectOutcome::Mounted {
            view: ViewKind::CategoryRollup,
            chart_id: "chart-1".to_string(),
        }
    );
    assert_eq!(
        selector.state().await,
        SelectorState::Active {
            view: ViewKind::CategoryRollup,
            chart_id: "chart-1".to_string(),
        }
    );
    assert_eq!(selector.surface().get(PRIMARY_TARGET).unwrap().id, "chart-1");
    assert!(!selector.progress().is_visible());
}

#[tokio::test]
async fn test_reselect_destroys_previous_chart() {
    let renderer = Arc::new(ScriptedRenderer::default());
    let selector = selector(renderer.clone());

    assert!(selector.select(1).await.is_mounted());
    assert!(selector.select(1).await.is_mounted());

    assert_eq!(renderer.constructed.load(Ordering::SeqCst), 2);
    assert_eq!(renderer.destroyed.load(Ordering::SeqCst), 1);
    assert_eq!(renderer.live(), 1);
    assert_eq!(selector.surface().get(PRIMARY_TARGET).unwrap().id, "chart-2");
}

#[tokio::test]
async fn test_unknown_index_selects_detail() {
    let renderer = Arc::new(ScriptedRenderer::default());
    let selector = selector(renderer);

    let outcome = selector.select(42).await;
    assert_eq!(outcome.view(), ViewKind::Detail);
    assert!(outcome.is_mounted());
}

#[tokio::test]
async fn test_failure_leaves_idle() {
    let renderer = Arc::new(ScriptedRenderer::with_script(vec![Step::Succeed, Step::Fail]));
    let selector = selector(renderer.clone());

    assert!(selector.select(1).await.is_mounted());
    let outcome = selector.select(3).await;

    assert!(matches!(
        outcome,
        SelectOutcome::Failed {
            view: ViewKind::ZeroRestroom,
            error: ChartError::Construction(_),
        }
    ));
    assert_eq!(selector.state().await, SelectorState::Idle);
    assert_eq!(renderer.live(), 0);
    assert!(!selector.progress().is_visible());

    // A later selection recovers.
    assert!(selector.select(3).await.is_mounted());
    assert_eq!(renderer.live(), 1);
}

#[tokio::test]
async fn test_construction_timeout_is_a_failure() {
    let renderer = Arc::new(ScriptedRenderer::with_script(vec![Step::Hang]));
    let selector = selector(renderer.clone()).with_construction_timeout(Duration::from_millis(20));

    let outcome = selector.select(4).await;
    assert!(matches!(
        outcome,
        SelectOutcome::Failed {
            error: ChartError::Timeout(_),
            ..
        }
    ));
    assert_eq!(selector.state().await, SelectorState::Idle);
    assert!(!selector.progress().is_visible());
}

#[tokio::test]
async fn test_stale_result_is_discarded() {
    let (release_slow, slow_gate) = oneshot::channel();
    let renderer = Arc::new(ScriptedRenderer::with_script(vec![
        Step::Wait(slow_gate),
        Step::Succeed,
    ]));
    let selector = Arc::new(selector(renderer.clone()));

    let slow = tokio::spawn({
        let selector = Arc::clone(&selector);
        async move { selector.select(2).await }
    });

    // Let the first request reach the renderer before issuing the second.
    while renderer.script.lock().len() == 2 {
        tokio::task::yield_now().await;
    }
    assert!(selector.progress().is_visible());

    let fast = selector.select(4).await;
    assert!(fast.is_mounted());
    assert!(selector.progress().is_visible());

    release_slow.send(()).unwrap();
    let slow = slow.await.unwrap();
    assert_eq!(
        slow,
        SelectOutcome::Superseded {
            view: ViewKind::CategoryRollup
        }
    );

    match selector.state().await {
        SelectorState::Active { view, .. } => assert_eq!(view, ViewKind::MediumRollup),
        SelectorState::Idle => panic!("expected a mounted chart"),
    }
    assert_eq!(renderer.live(), 1);
    assert!(!selector.progress().is_visible());
}

#[tokio::test]
async fn test_teardown_destroys_mounted_chart() {
    let renderer = Arc::new(ScriptedRenderer::default());
    let selector = selector(renderer.clone());

    selector.select(1).await;
    selector.teardown().await;

    assert_eq!(selector.state().await, SelectorState::Idle);
    assert_eq!(renderer.live(), 0);
    assert_eq!(renderer.destroyed.load(Ordering::SeqCst), 1);
}
