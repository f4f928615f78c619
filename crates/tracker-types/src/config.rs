use serde::{Deserialize, Serialize};

/// Client configuration, fixed for the lifetime of the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend base address, without trailing slash
    pub api_base: String,
    /// Number of records requested and shown by the activities view
    pub activity_limit: usize,
    /// Individual benchmark results listed before the "and N more" line
    pub benchmark_preview: usize,
    pub toast_duration_ms: u32,
    /// Preset questions offered next to the input field
    pub example_queries: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            activity_limit: 10,
            benchmark_preview: 5,
            toast_duration_ms: 4000,
            example_queries: DEFAULT_EXAMPLE_QUERIES
                .iter()
                .map(|q| q.to_string())
                .collect(),
        }
    }
}

impl ClientConfig {
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into().trim_end_matches('/').to_string();
        self
    }

    /// Join an endpoint path (leading slash included) onto the base address.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}

const DEFAULT_API_BASE: &str = "http://localhost:8000";

const DEFAULT_EXAMPLE_QUERIES: &[&str] = &[
    "Who achieved the highest sales revenue in a single week?",
    "Which department has the most employees?",
    "What is the average number of hours worked per week?",
    "Who attended the most meetings?",
];
