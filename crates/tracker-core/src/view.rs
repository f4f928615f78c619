//! View models and their rendering into result-card markup.
//!
//! Each backend reply is first projected into a view model holding the
//! display strings, then rendered through [`Markup`], which escapes every
//! piece of text it is given.

use tracker_types::{
    api::{Activity, BenchmarkReport, BenchmarkResult, Employee, QueryResult},
    export::{Dataset, ExportFormat},
    markup::Markup,
    notice::Toast,
};

// ─── Query card ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Answer(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryCardView {
    pub query: String,
    pub body: ResponseBody,
    /// e.g. `0.125s`
    pub execution_time: String,
    /// e.g. `87%`
    pub confidence: String,
    pub sql_query: Option<String>,
}

impl QueryCardView {
    pub fn from_result(result: &QueryResult) -> Self {
        let body = match &result.error {
            Some(error) => ResponseBody::Error(error.clone()),
            None => ResponseBody::Answer(result.response.clone()),
        };
        Self {
            query: result.query.clone(),
            body,
            execution_time: format_seconds(result.execution_time),
            confidence: format!("{}%", format_fixed(result.confidence * 100.0, 0)),
            sql_query: result.sql_query.clone().filter(|sql| !sql.trim().is_empty()),
        }
    }

    pub fn render(&self) -> Markup {
        let mut m = Markup::new();
        header(&mut m, "fa-question-circle", &Markup::text(&self.query));
        match &self.body {
            ResponseBody::Answer(text) => {
                m.push_tag(r#"<div class="result-response">"#)
                    .push_text(text)
                    .push_tag("</div>");
            }
            ResponseBody::Error(error) => {
                m.push_tag(r#"<div class="result-response error"><strong>Error:</strong> "#)
                    .push_text(error)
                    .push_tag("</div>");
            }
        }
        m.push_tag(r#"<div class="result-meta"><div class="result-time"><i class="fas fa-clock"></i> Executed in "#)
            .push_text(&self.execution_time)
            .push_tag(r#"</div><div class="result-confidence"><i class="fas fa-chart-line"></i> Confidence: "#)
            .push_text(&self.confidence)
            .push_tag("</div></div>");
        if let Some(sql) = &self.sql_query {
            m.push_tag(r#"<div class="result-sql">"#)
                .push_text(sql)
                .push_tag("</div>");
        }
        m
    }
}

// ─── Employees card ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeLine {
    pub name: String,
    pub title: String,
    pub email: String,
    pub department: String,
    pub hired: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeListView {
    pub lines: Vec<EmployeeLine>,
}

impl EmployeeListView {
    pub fn from_employees(employees: &[Employee]) -> Self {
        let lines = employees
            .iter()
            .map(|e| EmployeeLine {
                name: e.full_name.clone(),
                title: e.job_title.clone(),
                email: e.email.clone(),
                department: e.department.clone(),
                hired: e.hire_date.format("%Y-%m-%d").to_string(),
            })
            .collect();
        Self { lines }
    }

    pub fn title(&self) -> String {
        format!("All Employees ({} total)", self.lines.len())
    }

    pub fn render(&self) -> Markup {
        let mut m = Markup::new();
        header(&mut m, "fa-users", &Markup::text(&self.title()));
        m.push_tag(r#"<div class="result-response">"#);
        for line in &self.lines {
            m.push_tag(r#"<div class="list-entry"><strong>"#)
                .push_text(&line.name)
                .push_tag("</strong> - ")
                .push_text(&line.title)
                .push_tag("<br><small>")
                .push_text(&line.email)
                .push_tag(" | ")
                .push_text(&line.department)
                .push_tag(" | Hired: ")
                .push_text(&line.hired)
                .push_tag("</small></div>");
        }
        m.push_tag("</div>");
        footer(&mut m, "fa-info-circle", "System query");
        m
    }
}

// ─── Activities card ─────────────────────────────────────────

pub const NO_SALES: &str = "N/A";
pub const NO_ACTIVITIES: &str = "No activities recorded";

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityLine {
    /// `Week 3 - Employee ID: 12`
    pub heading: String,
    /// `Hours: 40 | Sales: ¥1200 | Meetings: 4`
    pub stats: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityListView {
    pub limit: usize,
    pub lines: Vec<ActivityLine>,
}

impl ActivityListView {
    /// Keeps at most `limit` records, in the order received.
    pub fn from_activities(activities: &[Activity], limit: usize) -> Self {
        let lines = activities
            .iter()
            .take(limit)
            .map(|a| {
                let sales = a
                    .total_sales
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| NO_SALES.to_string());
                ActivityLine {
                    heading: format!("Week {} - Employee ID: {}", a.week_number, a.employee_id),
                    stats: format!(
                        "Hours: {} | Sales: ¥{} | Meetings: {}",
                        a.hours_worked, sales, a.meetings_attended
                    ),
                    notes: a
                        .activities
                        .clone()
                        .filter(|text| !text.is_empty())
                        .unwrap_or_else(|| NO_ACTIVITIES.to_string()),
                }
            })
            .collect();
        Self { limit, lines }
    }

    pub fn title(&self) -> String {
        format!("Recent Activities (Last {} records)", self.limit)
    }

    pub fn render(&self) -> Markup {
        let mut m = Markup::new();
        header(&mut m, "fa-tasks", &Markup::text(&self.title()));
        m.push_tag(r#"<div class="result-response">"#);
        for line in &self.lines {
            m.push_tag(r#"<div class="list-entry"><div class="entry-heading">"#)
                .push_text(&line.heading)
                .push_tag(r#"</div><div class="entry-stats">"#)
                .push_text(&line.stats)
                .push_tag(r#"</div><div class="entry-notes">"#)
                .push_text(&line.notes)
                .push_tag("</div></div>");
        }
        m.push_tag("</div>");
        footer(&mut m, "fa-info-circle", "System query");
        m
    }
}

// ─── Benchmark card ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkLine {
    pub position: usize,
    pub query: String,
    pub response: String,
    pub success: bool,
    pub execution_time: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkView {
    pub total: u32,
    pub successful: u32,
    /// e.g. `90.0%`
    pub success_rate: String,
    pub average_time: String,
    pub query_types: Vec<(String, u32)>,
    pub preview: Vec<BenchmarkLine>,
    /// Results not listed in `preview`
    pub omitted: usize,
}

impl BenchmarkView {
    pub fn from_report(report: &BenchmarkReport, preview_limit: usize) -> Self {
        let preview: Vec<BenchmarkLine> = report
            .results
            .iter()
            .take(preview_limit)
            .enumerate()
            .map(|(i, r): (usize, &BenchmarkResult)| BenchmarkLine {
                position: i + 1,
                query: r.query.clone(),
                response: r.response.clone(),
                success: r.success,
                execution_time: format_seconds(r.execution_time),
            })
            .collect();
        Self {
            total: report.total_queries,
            successful: report.successful_queries,
            success_rate: format!("{}%", format_fixed(report.success_rate(), 1)),
            average_time: format_seconds(report.average_execution_time),
            query_types: report
                .query_type_distribution
                .iter()
                .map(|(label, count)| (label.clone(), *count))
                .collect(),
            omitted: report.results.len().saturating_sub(preview.len()),
            preview,
        }
    }

    pub fn render(&self) -> Markup {
        let mut m = Markup::new();
        let mut title = Markup::tag("Benchmark Results - ");
        title.push_display(self.total).push_tag(" Test Queries");
        header(&mut m, "fa-chart-bar", &title);

        m.push_tag(r#"<div class="result-response"><div class="benchmark-stats"><div class="stat-card success"><div class="stat-value">"#)
            .push_display(self.successful)
            .push_tag("/")
            .push_display(self.total)
            .push_tag(r#"</div><div class="stat-label">Success Rate: "#)
            .push_text(&self.success_rate)
            .push_tag(r#"</div></div><div class="stat-card"><div class="stat-value">"#)
            .push_text(&self.average_time)
            .push_tag(r#"</div><div class="stat-label">Avg Execution Time</div></div></div>"#);

        m.push_tag(r#"<div class="query-types"><strong>Query Types:</strong><br>"#);
        for (label, count) in &self.query_types {
            m.push_tag(r#"<span class="query-type"><strong>"#)
                .push_text(label)
                .push_tag(":</strong> ")
                .push_display(count)
                .push_tag("</span>");
        }
        m.push_tag("</div>");

        m.push_tag(r#"<details class="benchmark-details"><summary>View Individual Results</summary><div class="benchmark-results">"#);
        for line in &self.preview {
            m.push_tag(if line.success {
                r#"<div class="benchmark-result success">"#
            } else {
                r#"<div class="benchmark-result failure">"#
            });
            m.push_tag(r#"<div class="entry-heading">"#)
                .push_display(line.position)
                .push_tag(". ")
                .push_text(&line.query)
                .push_tag(r#"</div><div class="entry-stats">"#)
                .push_text(&line.response)
                .push_tag(r#"</div><div class="entry-notes">Time: "#)
                .push_text(&line.execution_time)
                .push_tag("</div></div>");
        }
        if self.omitted > 0 {
            m.push_tag(r#"<div class="more-results">... and "#)
                .push_display(self.omitted)
                .push_tag(" more results</div>");
        }
        m.push_tag("</div></details></div>");

        footer(&mut m, "fa-stopwatch", "Benchmark completed");
        m
    }
}

// ─── Toasts and the export dialog ────────────────────────────

/// Inner markup of a toast element; the class is set by the view.
pub fn toast_body(toast: &Toast) -> Markup {
    let mut m = Markup::tag(r#"<i class="fas fa-"#);
    m.push_text(toast.kind.icon())
        .push_tag(r#""></i><span>"#)
        .push_text(&toast.message)
        .push_tag("</span>");
    m
}

/// Inner markup of the export dialog. Buttons carry `data-dataset` and
/// `data-format`; the close button has class `close-modal`.
pub fn export_modal() -> Markup {
    let mut m = Markup::tag(
        r#"<div class="export-modal-content"><div class="export-modal-header"><h3>Export Data</h3><button class="close-modal">&times;</button></div><div class="export-modal-body"><p>Choose what to export and in which format:</p><div class="export-options">"#,
    );
    for dataset in Dataset::all() {
        m.push_tag(r#"<div class="export-section"><h4>"#)
            .push_text(dataset.title())
            .push_tag("</h4><p>")
            .push_text(dataset.blurb())
            .push_tag(r#"</p><div class="export-buttons">"#);
        for format in ExportFormat::all() {
            m.push_tag(r#"<button class="export-btn "#)
                .push_text(format.as_str())
                .push_tag(r#"-btn" data-dataset=""#)
                .push_text(dataset.as_str())
                .push_tag(r#"" data-format=""#)
                .push_text(format.as_str())
                .push_tag(r#"">"#)
                .push_text(format.label())
                .push_tag(" Format</button>");
        }
        m.push_tag("</div></div>");
    }
    m.push_tag("</div></div></div>");
    m
}

/// Preset question buttons; the question travels in `data-query`.
pub fn example_buttons(queries: &[String]) -> Markup {
    queries
        .iter()
        .map(|q| {
            let mut m = Markup::tag(r#"<button class="example-btn" data-query=""#);
            m.push_text(q).push_tag(r#"">"#).push_text(q).push_tag("</button>");
            m
        })
        .collect()
}

// ─── Helpers ─────────────────────────────────────────────────

/// Seconds with millisecond precision, e.g. `0.125s`
pub fn format_seconds(seconds: f64) -> String {
    format!("{}s", format_fixed(seconds, 3))
}

/// Fixed-point text with exact halves rounded away from zero
/// (`6.25` to one place is `6.3`). `{:.N}` would round them to even.
pub fn format_fixed(value: f64, places: usize) -> String {
    let scale = 10f64.powi(places as i32);
    format!("{:.*}", places, (value * scale).round() / scale)
}

fn header(m: &mut Markup, icon: &'static str, title: &Markup) {
    m.push_tag(r#"<div class="result-query"><i class="fas "#)
        .push_tag(icon)
        .push_tag(r#""></i> "#)
        .push_markup(title)
        .push_tag("</div>");
}

fn footer(m: &mut Markup, icon: &'static str, label: &'static str) {
    m.push_tag(r#"<div class="result-meta"><div class="result-time"><i class="fas "#)
        .push_tag(icon)
        .push_tag(r#""></i> "#)
        .push_tag(label)
        .push_tag("</div></div>");
}
