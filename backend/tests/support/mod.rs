#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use school_dash::api::{AggregateView, DatasetPayload, RawRecord};
use school_dash::charts::{ChartConfig, ChartError, ChartHandle, ChartRenderer, ChartResult};
use school_dash::source::{DataSource, ErrorContext, SourceError, SourceResult};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Env vars read by `DashboardConfig::apply_env_overrides`, all cleared.
pub const CLEAR_CONFIG_ENV: [(&str, Option<&str>); 7] = [
    ("SCHOOL_DASH_CONFIG", None),
    ("HOST", None),
    ("PORT", None),
    ("DATASET_URL", None),
    ("DATASET_FILE", None),
    ("FETCH_TIMEOUT_SECS", None),
    ("CHART_TIMEOUT_SECS", None),
];

/// A complete raw record in the source dataset's key spelling.
pub fn raw_school(
    name: &str,
    category: &str,
    medium: &str,
    students: &str,
    staff: &str,
    restrooms: &str,
) -> RawRecord {
    [
        ("school_name", name),
        ("district", "Chennai"),
        ("category_of_school", category),
        ("school_medium", medium),
        ("number_of_students", students),
        ("number_of_staff", staff),
        ("number_of_restrooms", restrooms),
        ("number_of_differently_abled_student", "0"),
        ("number_of_classrooms", "4"),
        ("pincode", "600001"),
        ("yearof_establishment", "1990"),
        ("subject_offered", "Science"),
        ("availabilty_of_playground", "Yes"),
        ("availabilty_of_eateries", "No"),
        ("availabilty_of_hospital", "NULL"),
    ]
    .into_iter()
    .collect()
}

/// Small dataset: two Govt/Tamil schools, one Private/English school, one
/// school without restrooms.
pub fn sample_payload() -> DatasetPayload {
    DatasetPayload {
        updated_at: "2019-06-01T10:00:00Z".to_string(),
        data: vec![
            raw_school("A", "Govt", "Tamil", "10", "2", "0"),
            raw_school("B", "Private", "English", "30", "3", "2"),
            raw_school("C", "Govt", "Tamil", "20", "1", "1"),
        ],
    }
}

/// Source that always fails with a transport error.
pub struct UnreachableSource;

#[async_trait]
impl DataSource for UnreachableSource {
    async fn fetch(&self) -> SourceResult<DatasetPayload> {
        Err(SourceError::transport(
            "connection refused",
            ErrorContext::new("fetch").with_location("http://unreachable.invalid"),
        ))
    }

    fn describe(&self) -> String {
        "unreachable".to_string()
    }
}

/// Source that never answers.
pub struct SilentSource;

#[async_trait]
impl DataSource for SilentSource {
    async fn fetch(&self) -> SourceResult<DatasetPayload> {
        std::future::pending().await
    }

    fn describe(&self) -> String {
        "silent".to_string()
    }
}

/// Renderer whose construction always fails.
#[derive(Default)]
pub struct FailingRenderer {
    pub attempts: Arc<AtomicUsize>,
}

#[async_trait]
impl ChartRenderer for FailingRenderer {
    async fn construct(
        &self,
        _config: &ChartConfig,
        _view: &AggregateView,
    ) -> ChartResult<Box<dyn ChartHandle>> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(ChartError::Construction("renderer unavailable".to_string()))
    }
}
