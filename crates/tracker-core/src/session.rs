//! Per-page client session.
//!
//! Built once at startup and owned by the controller. Nothing here
//! survives a reload.

use tracker_types::event::{Card, ModalState};

#[derive(Debug, Default)]
pub struct ClientSession {
    query_count: u32,
    /// Newest first
    feed: Vec<Card>,
    results_visible: bool,
    employee_total: Option<usize>,
    modal: ModalState,
    query_busy: bool,
    /// Number of actions currently holding the loading overlay
    loading_depth: u32,
}

impl ClientSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query_count(&self) -> u32 {
        self.query_count
    }

    /// Count one more rendered query result; returns the new total.
    pub fn record_query(&mut self) -> u32 {
        self.query_count += 1;
        self.query_count
    }

    pub fn feed(&self) -> &[Card] {
        &self.feed
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn prepend(&mut self, card: Card) {
        self.feed.insert(0, card);
        self.results_visible = true;
    }

    /// Empty the feed, hide the results, and reset the query count.
    pub fn clear(&mut self) {
        self.feed.clear();
        self.results_visible = false;
        self.query_count = 0;
    }

    pub fn employee_total(&self) -> Option<usize> {
        self.employee_total
    }

    pub fn set_employee_total(&mut self, total: usize) {
        self.employee_total = Some(total);
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn set_modal(&mut self, modal: ModalState) {
        self.modal = modal;
    }

    pub fn query_busy(&self) -> bool {
        self.query_busy
    }

    pub fn set_query_busy(&mut self, busy: bool) {
        self.query_busy = busy;
    }

    pub fn is_loading(&self) -> bool {
        self.loading_depth > 0
    }

    /// Returns true when this call made the overlay visible.
    pub fn begin_loading(&mut self) -> bool {
        self.loading_depth += 1;
        self.loading_depth == 1
    }

    /// Returns true when this call made the overlay hidden.
    pub fn end_loading(&mut self) -> bool {
        if self.loading_depth == 0 {
            return false;
        }
        self.loading_depth -= 1;
        self.loading_depth == 0
    }
}
