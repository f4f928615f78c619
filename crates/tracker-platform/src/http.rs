//! Backend API adapter.
//!
//! Plain JSON over HTTP through browser `fetch()` via gloo-net.
//! Every non-2xx reply becomes `ClientError::Http`; there is no per-status
//! handling, no retry and no timeout.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use tracker_core::ports::ApiPort;
use tracker_types::{
    ClientError, Result,
    api::{Activity, BenchmarkReport, Employee, QueryRequest, QueryResult},
    config::ClientConfig,
    export::{Dataset, ExportFormat, ExportPayload},
};

pub struct HttpApi {
    config: ClientConfig,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Self {
        let base = config.api_base.clone();
        Self {
            config: config.clone().with_api_base(base),
        }
    }

    pub fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}

#[async_trait(?Send)]
impl ApiPort for HttpApi {
    async fn submit_query(&self, query: &str) -> Result<QueryResult> {
        let response = Request::post(&self.url("/query"))
            .json(&QueryRequest::new(query))
            .map_err(|e| ClientError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(network)?;
        decode(checked(response)?).await
    }

    async fn list_employees(&self) -> Result<Vec<Employee>> {
        let response = Request::get(&self.url("/employees/"))
            .send()
            .await
            .map_err(network)?;
        decode(checked(response)?).await
    }

    async fn list_activities(&self, limit: usize) -> Result<Vec<Activity>> {
        let url = self.url(&format!("/activities/?limit={}", limit));
        let response = Request::get(&url).send().await.map_err(network)?;
        decode(checked(response)?).await
    }

    async fn run_benchmark(&self) -> Result<BenchmarkReport> {
        let response = Request::post(&self.url("/benchmark"))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(network)?;
        decode(checked(response)?).await
    }

    async fn export(&self, dataset: Dataset, format: ExportFormat) -> Result<ExportPayload> {
        let url = self.url(&format!("/export/{}/{}", dataset, format));
        let response = checked(Request::get(&url).send().await.map_err(network)?)?;

        let headers = response.headers();
        let content_disposition = headers.get("Content-Disposition");
        let content_type = headers.get("Content-Type");
        let bytes = response
            .binary()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;

        log::info!("Export {}/{}: {} bytes", dataset, format, bytes.len());
        Ok(ExportPayload {
            bytes,
            content_disposition,
            content_type,
        })
    }

    fn base_url(&self) -> &str {
        &self.config.api_base
    }
}

// ─── Response helpers ────────────────────────────────────────

fn checked(response: Response) -> Result<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let status_text = response.status_text();
    log::error!("{} -> HTTP {} {}", response.url(), status, status_text);
    Err(ClientError::Http {
        status,
        status_text,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

fn network(e: gloo_net::Error) -> ClientError {
    ClientError::Network(e.to_string())
}
