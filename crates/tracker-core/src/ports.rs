//! Port traits: the boundary between the controller and the browser.
//!
//! Implementations live in `tracker-platform` (browser adapters).
//! The controller only depends on these traits.

use async_trait::async_trait;
use tracker_types::{
    Result,
    api::{Activity, BenchmarkReport, Employee, QueryResult},
    export::{Dataset, ExportFormat, ExportPayload},
};

// ─── Backend API Port ────────────────────────────────────────

/// The backend query API. Any non-2xx reply is an `Err`.
#[async_trait(?Send)]
pub trait ApiPort {
    /// `POST /query`
    async fn submit_query(&self, query: &str) -> Result<QueryResult>;

    /// `GET /employees/`
    async fn list_employees(&self) -> Result<Vec<Employee>>;

    /// `GET /activities/?limit=N`
    async fn list_activities(&self, limit: usize) -> Result<Vec<Activity>>;

    /// `POST /benchmark`
    async fn run_benchmark(&self) -> Result<BenchmarkReport>;

    /// `GET /export/{dataset}/{format}`, body kept as opaque bytes
    async fn export(&self, dataset: Dataset, format: ExportFormat) -> Result<ExportPayload>;

    /// Base address, for user-facing connectivity hints
    fn base_url(&self) -> &str;
}

// ─── Download Port ───────────────────────────────────────────

pub trait DownloadPort {
    /// Hand a payload to the user as a saved file.
    fn offer(&self, filename: &str, payload: &ExportPayload) -> Result<()>;
}
