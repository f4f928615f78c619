//! Client controller: one async handler per user action.
//!
//! Every handler follows the same shape:
//! 1. take the busy indicators through a [`BusyGuard`]
//! 2. await the backend through [`ApiPort`]
//! 3. render a card or surface the failure as a toast
//!
//! Failures stop at the handler: they become a toast and a log line, never
//! an `Err` for the caller. The guard releases the indicators on drop, so
//! they are cleared on every exit path.

use std::cell::RefCell;
use std::rc::Rc;

use tracker_types::{
    Result,
    config::ClientConfig,
    event::{Card, CardKind, ModalState, UiEvent},
    export::{Dataset, ExportFormat},
    notice::{Toast, ToastKind},
};

use crate::event_bus::EventBus;
use crate::ports::{ApiPort, DownloadPort};
use crate::session::ClientSession;
use crate::view::{ActivityListView, BenchmarkView, EmployeeListView, QueryCardView};

pub const MSG_EMPTY_QUERY: &str = "Please enter a question";
pub const MSG_QUERY_OK: &str = "Query executed successfully!";
pub const MSG_QUERY_FAILED: &str =
    "Failed to execute query. Please check if the server is running.";
pub const MSG_EMPLOYEES_OK: &str = "Employee list loaded successfully!";
pub const MSG_EMPLOYEES_FAILED: &str = "Failed to load employees";
pub const MSG_ACTIVITIES_OK: &str = "Recent activities loaded!";
pub const MSG_ACTIVITIES_FAILED: &str = "Failed to load activities";
pub const MSG_BENCHMARK_OK: &str = "Benchmark completed successfully!";
pub const MSG_BENCHMARK_FAILED: &str = "Failed to run benchmark";
pub const MSG_CLEARED: &str = "Results cleared";

/// The client controller. Clone-cheap; clones share one session.
#[derive(Clone)]
pub struct Controller {
    config: Rc<ClientConfig>,
    session: Rc<RefCell<ClientSession>>,
    events: EventBus,
    api: Rc<dyn ApiPort>,
    downloads: Rc<dyn DownloadPort>,
}

impl Controller {
    pub fn new(
        config: ClientConfig,
        events: EventBus,
        api: Rc<dyn ApiPort>,
        downloads: Rc<dyn DownloadPort>,
    ) -> Self {
        Self {
            config: Rc::new(config),
            session: Rc::new(RefCell::new(ClientSession::new())),
            events,
            api,
            downloads,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Run `f` against the session. Never held across an await.
    pub fn with_session<R>(&self, f: impl FnOnce(&ClientSession) -> R) -> R {
        f(&self.session.borrow())
    }

    // ─── Notifications ───────────────────────────────────────

    pub fn notify(&self, message: impl Into<String>, kind: ToastKind) {
        let toast = Toast::new(message, kind, self.config.toast_duration_ms);
        self.events.emit(UiEvent::Toast(toast));
    }

    /// Last-resort handler for async failures that escaped their action.
    /// Only transport-looking reasons are shown to the user.
    pub fn report_unhandled(&self, reason: &str) {
        log::error!("Unhandled promise rejection: {}", reason);
        if is_transport_failure(reason) {
            self.notify(
                format!(
                    "Connection error. Please ensure the server is running on {}",
                    self.api.base_url()
                ),
                ToastKind::Error,
            );
        }
    }

    // ─── Query ───────────────────────────────────────────────

    pub async fn submit_query(&self, input: &str) {
        let query = input.trim();
        if query.is_empty() {
            self.notify(MSG_EMPTY_QUERY, ToastKind::Warning);
            return;
        }

        let _busy = BusyGuard::acquire(self, true);
        match self.api.submit_query(query).await {
            Ok(result) => {
                let card = Card::new(CardKind::Query, QueryCardView::from_result(&result).render());
                self.prepend(card);
                let count = self.session.borrow_mut().record_query();
                self.events.emit(UiEvent::QueryCount(count));
                self.notify(MSG_QUERY_OK, ToastKind::Success);
            }
            Err(e) => {
                log::error!("Query failed: {}", e);
                self.notify(MSG_QUERY_FAILED, ToastKind::Error);
            }
        }
    }

    // ─── Auxiliary views ─────────────────────────────────────

    /// Startup refresh of the employee counter. Failures are only logged.
    pub async fn load_employee_count(&self) {
        match self.api.list_employees().await {
            Ok(employees) => {
                self.set_employee_total(employees.len());
                log::info!("{} employees on record", employees.len());
            }
            Err(e) => log::error!("Error loading employee count: {}", e),
        }
    }

    pub async fn view_employees(&self) {
        let _busy = BusyGuard::acquire(self, false);
        match self.api.list_employees().await {
            Ok(employees) => {
                self.set_employee_total(employees.len());
                let view = EmployeeListView::from_employees(&employees);
                self.prepend(Card::new(CardKind::Employees, view.render()));
                self.notify(MSG_EMPLOYEES_OK, ToastKind::Success);
            }
            Err(e) => {
                log::error!("Employee list failed: {}", e);
                self.notify(MSG_EMPLOYEES_FAILED, ToastKind::Error);
            }
        }
    }

    pub async fn view_activities(&self) {
        let _busy = BusyGuard::acquire(self, false);
        let limit = self.config.activity_limit;
        match self.api.list_activities(limit).await {
            Ok(activities) => {
                let view = ActivityListView::from_activities(&activities, limit);
                self.prepend(Card::new(CardKind::Activities, view.render()));
                self.notify(MSG_ACTIVITIES_OK, ToastKind::Success);
            }
            Err(e) => {
                log::error!("Activity list failed: {}", e);
                self.notify(MSG_ACTIVITIES_FAILED, ToastKind::Error);
            }
        }
    }

    pub async fn run_benchmark(&self) {
        let _busy = BusyGuard::acquire(self, false);
        match self.api.run_benchmark().await {
            Ok(report) => {
                log::info!(
                    "Benchmark: {}/{} queries succeeded",
                    report.successful_queries,
                    report.total_queries
                );
                let view = BenchmarkView::from_report(&report, self.config.benchmark_preview);
                self.prepend(Card::new(CardKind::Benchmark, view.render()));
                self.notify(MSG_BENCHMARK_OK, ToastKind::Success);
            }
            Err(e) => {
                log::error!("Benchmark failed: {}", e);
                self.notify(MSG_BENCHMARK_FAILED, ToastKind::Error);
            }
        }
    }

    pub fn clear_results(&self) {
        self.session.borrow_mut().clear();
        self.events.emit(UiEvent::FeedCleared);
        self.events.emit(UiEvent::QueryCount(0));
        self.notify(MSG_CLEARED, ToastKind::Success);
    }

    // ─── Export ──────────────────────────────────────────────

    pub fn open_export(&self) {
        if self.session.borrow().modal().is_open() {
            return;
        }
        self.set_modal(ModalState::Open { pending: None });
    }

    pub fn close_export(&self) {
        if !self.session.borrow().modal().is_open() {
            return;
        }
        self.set_modal(ModalState::Closed);
    }

    /// Fetch an export and offer it as a file. The dialog closes only on
    /// success; on failure it stays open for another attempt.
    pub async fn download_export(&self, dataset: Dataset, format: ExportFormat) {
        self.set_modal(ModalState::Open {
            pending: Some((dataset, format)),
        });
        self.notify(
            format!(
                "Preparing {} export in {} format...",
                dataset,
                format.label()
            ),
            ToastKind::Info,
        );

        match self.fetch_and_offer(dataset, format).await {
            Ok(filename) => {
                log::info!("Exported {}/{} as {}", dataset, format, filename);
                self.notify(
                    format!("{} data exported successfully as {}", dataset, filename),
                    ToastKind::Success,
                );
                self.set_modal(ModalState::Closed);
            }
            Err(e) => {
                log::error!("Export error: {}", e);
                self.notify(format!("Export failed: {}", e), ToastKind::Error);
                // Leave the dialog alone if it was dismissed or another
                // export has taken over since this one started
                let still_pending = self.session.borrow().modal()
                    == ModalState::Open {
                        pending: Some((dataset, format)),
                    };
                if still_pending {
                    self.set_modal(ModalState::Open { pending: None });
                }
            }
        }
    }

    async fn fetch_and_offer(&self, dataset: Dataset, format: ExportFormat) -> Result<String> {
        let payload = self.api.export(dataset, format).await?;
        let filename = payload.filename(dataset, format);
        self.downloads.offer(&filename, &payload)?;
        Ok(filename)
    }

    // ─── Internals ───────────────────────────────────────────

    fn prepend(&self, card: Card) {
        self.session.borrow_mut().prepend(card.clone());
        self.events.emit(UiEvent::CardPrepended(card));
    }

    fn set_employee_total(&self, total: usize) {
        self.session.borrow_mut().set_employee_total(total);
        self.events.emit(UiEvent::EmployeeTotal(total));
    }

    fn set_modal(&self, modal: ModalState) {
        self.session.borrow_mut().set_modal(modal);
        self.events.emit(UiEvent::Modal(modal));
    }
}

/// Heuristic for rejection reasons that mean the backend is unreachable.
pub fn is_transport_failure(reason: &str) -> bool {
    let reason = reason.to_ascii_lowercase();
    reason.contains("fetch") || reason.contains("networkerror") || reason.contains("network error")
}

/// Holds the loading overlay, and the submit button when `query` is set,
/// for as long as it lives.
struct BusyGuard {
    session: Rc<RefCell<ClientSession>>,
    events: EventBus,
    query: bool,
}

impl BusyGuard {
    fn acquire(controller: &Controller, query: bool) -> Self {
        let show_overlay = {
            let mut session = controller.session.borrow_mut();
            if query {
                session.set_query_busy(true);
            }
            session.begin_loading()
        };
        if show_overlay {
            controller.events.emit(UiEvent::Loading(true));
        }
        if query {
            controller.events.emit(UiEvent::QueryBusy(true));
        }
        Self {
            session: controller.session.clone(),
            events: controller.events.clone(),
            query,
        }
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        let hide_overlay = {
            let mut session = self.session.borrow_mut();
            if self.query {
                session.set_query_busy(false);
            }
            session.end_loading()
        };
        if hide_overlay {
            self.events.emit(UiEvent::Loading(false));
        }
        if self.query {
            self.events.emit(UiEvent::QueryBusy(false));
        }
    }
}
