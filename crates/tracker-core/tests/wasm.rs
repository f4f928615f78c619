//! WASM-target tests for tracker-core.
//!
//! Runs the controller against in-memory ports under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use tracker_core::controller::*;
use tracker_core::event_bus::EventBus;
use tracker_core::ports::*;
use tracker_core::view::*;
use tracker_types::api::*;
use tracker_types::config::ClientConfig;
use tracker_types::event::*;
use tracker_types::export::*;
use tracker_types::notice::ToastKind;
use tracker_types::{ClientError, Result};

struct StaticApi {
    calls: RefCell<Vec<String>>,
    fail: bool,
}

impl StaticApi {
    fn new(fail: bool) -> Rc<Self> {
        Rc::new(Self {
            calls: RefCell::new(Vec::new()),
            fail,
        })
    }

    fn hit(&self, call: &str) -> Result<()> {
        self.calls.borrow_mut().push(call.to_string());
        if self.fail {
            Err(ClientError::Network("Failed to fetch".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl ApiPort for StaticApi {
    async fn submit_query(&self, query: &str) -> Result<QueryResult> {
        self.hit("query")?;
        Ok(QueryResult {
            query: query.to_string(),
            response: "42".to_string(),
            error: None,
            execution_time: 0.5,
            confidence: 1.0,
            sql_query: None,
        })
    }

    async fn list_employees(&self) -> Result<Vec<Employee>> {
        self.hit("employees")?;
        Ok(vec![])
    }

    async fn list_activities(&self, _limit: usize) -> Result<Vec<Activity>> {
        self.hit("activities")?;
        Ok(vec![])
    }

    async fn run_benchmark(&self) -> Result<BenchmarkReport> {
        self.hit("benchmark")?;
        Ok(BenchmarkReport {
            total_queries: 20,
            successful_queries: 18,
            average_execution_time: 0.3,
            query_type_distribution: Default::default(),
            results: vec![],
        })
    }

    async fn export(&self, _dataset: Dataset, _format: ExportFormat) -> Result<ExportPayload> {
        self.hit("export")?;
        Ok(ExportPayload::default())
    }

    fn base_url(&self) -> &str {
        "http://localhost:8000"
    }
}

struct NullDownloads;

impl DownloadPort for NullDownloads {
    fn offer(&self, _filename: &str, _payload: &ExportPayload) -> Result<()> {
        Ok(())
    }
}

fn controller(api: Rc<StaticApi>) -> (Controller, EventBus) {
    let bus = EventBus::new();
    let controller = Controller::new(ClientConfig::default(), bus.clone(), api, Rc::new(NullDownloads));
    (controller, bus)
}

fn toast_kinds(events: &[UiEvent]) -> Vec<ToastKind> {
    events
        .iter()
        .filter_map(|e| match e {
            UiEvent::Toast(t) => Some(t.kind),
            _ => None,
        })
        .collect()
}

#[wasm_bindgen_test]
async fn query_then_clear() {
    let api = StaticApi::new(false);
    let (controller, bus) = controller(api.clone());

    controller.submit_query("What is the answer?").await;
    controller.clear_results();

    let events = bus.drain();
    assert!(events.contains(&UiEvent::QueryCount(1)));
    assert!(events.contains(&UiEvent::FeedCleared));
    assert!(events.contains(&UiEvent::QueryCount(0)));
    controller.with_session(|s| assert!(s.feed().is_empty()));
}

#[wasm_bindgen_test]
async fn empty_query_never_reaches_backend() {
    let api = StaticApi::new(false);
    let (controller, bus) = controller(api.clone());

    controller.submit_query("   ").await;

    assert!(api.calls.borrow().is_empty());
    assert_eq!(toast_kinds(&bus.drain()), vec![ToastKind::Warning]);
}

#[wasm_bindgen_test]
async fn unreachable_backend_clears_overlay() {
    let api = StaticApi::new(true);
    let (controller, bus) = controller(api.clone());

    controller.run_benchmark().await;

    let events = bus.drain();
    assert_eq!(toast_kinds(&events), vec![ToastKind::Error]);
    assert_eq!(events.last(), Some(&UiEvent::Loading(false)));
    controller.with_session(|s| assert!(!s.is_loading()));
}

#[wasm_bindgen_test]
async fn export_closes_modal_on_success() {
    let api = StaticApi::new(false);
    let (controller, _bus) = controller(api.clone());

    controller.open_export();
    controller
        .download_export(Dataset::Employees, ExportFormat::Csv)
        .await;

    controller.with_session(|s| assert_eq!(s.modal(), ModalState::Closed));
}

#[wasm_bindgen_test]
fn benchmark_view_rate() {
    let report = BenchmarkReport {
        total_queries: 20,
        successful_queries: 18,
        average_execution_time: 0.3,
        query_type_distribution: Default::default(),
        results: vec![],
    };
    assert_eq!(BenchmarkView::from_report(&report, 5).success_rate, "90.0%");
}
