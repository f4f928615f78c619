use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body of `POST /query`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into() }
    }
}

/// Answer to a natural-language question.
/// `error` is set by the backend when the question could not be answered;
/// in that case `response` carries nothing worth showing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub error: Option<String>,
    /// Seconds
    #[serde(default)]
    pub execution_time: f64,
    /// 0.0 ..= 1.0
    #[serde(default)]
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql_query: Option<String>,
}

/// Display strings may be absent from the backend's reply; they render empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub department: String,
    pub hire_date: NaiveDate,
}

/// One week of recorded work for an employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub week_number: u32,
    pub employee_id: u64,
    pub hours_worked: f64,
    #[serde(default)]
    pub total_sales: Option<f64>,
    pub meetings_attended: u32,
    #[serde(default)]
    pub activities: Option<String>,
}

/// Aggregate outcome of `POST /benchmark`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub total_queries: u32,
    pub successful_queries: u32,
    pub average_execution_time: f64,
    /// Category label -> number of queries; ordered by label
    #[serde(default)]
    pub query_type_distribution: BTreeMap<String, u32>,
    #[serde(default)]
    pub results: Vec<BenchmarkResult>,
}

impl BenchmarkReport {
    /// Percentage of successful queries, 0.0 when nothing ran.
    pub fn success_rate(&self) -> f64 {
        if self.total_queries == 0 {
            return 0.0;
        }
        f64::from(self.successful_queries) / f64::from(self.total_queries) * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub query: String,
    #[serde(default)]
    pub response: String,
    pub success: bool,
    #[serde(default)]
    pub execution_time: f64,
}
