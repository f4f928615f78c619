use std::fmt;

use serde::{Deserialize, Serialize};

/// Dataset offered by `GET /export/{dataset}/{format}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    Employees,
    Activities,
    Summary,
}

impl Dataset {
    pub fn all() -> &'static [Dataset] {
        &[Dataset::Employees, Dataset::Activities, Dataset::Summary]
    }

    /// Path segment used by the export endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::Employees => "employees",
            Dataset::Activities => "activities",
            Dataset::Summary => "summary",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|d| d.as_str() == value)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Dataset::Employees => "Employee Data",
            Dataset::Activities => "Activity Data",
            Dataset::Summary => "Summary Report",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            Dataset::Employees => {
                "Export all employee information including names, departments, and job titles"
            }
            Dataset::Activities => {
                "Export all employee activities including hours, sales, and meetings"
            }
            Dataset::Summary => "Export summary statistics and department analytics",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn all() -> &'static [ExportFormat] {
        &[ExportFormat::Csv, ExportFormat::Json]
    }

    /// Path segment and default file extension
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw body of an export response plus the headers that matter for saving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportPayload {
    pub bytes: Vec<u8>,
    pub content_disposition: Option<String>,
    pub content_type: Option<String>,
}

impl ExportPayload {
    /// Name to save the payload under. Falls back to
    /// `{dataset}_export.{format}` when the server did not name it.
    pub fn filename(&self, dataset: Dataset, format: ExportFormat) -> String {
        self.content_disposition
            .as_deref()
            .and_then(filename_from_disposition)
            .unwrap_or_else(|| default_filename(dataset, format))
    }
}

pub fn default_filename(dataset: Dataset, format: ExportFormat) -> String {
    format!("{}_export.{}", dataset.as_str(), format.as_str())
}

/// Value of the first `filename=` directive of a `Content-Disposition`
/// header, with quotes removed. Returns `None` when absent or empty.
pub fn filename_from_disposition(header: &str) -> Option<String> {
    let lower = header.to_ascii_lowercase();
    let mut from = 0;
    while let Some(pos) = lower[from..].find("filename=") {
        let start = from + pos;
        // `filename*=` does not match here; skip `xfilename=` lookalikes
        let at_boundary = lower[..start]
            .chars()
            .next_back()
            .map_or(true, |c| c == ';' || c.is_whitespace());
        let value_start = start + "filename=".len();
        if at_boundary {
            let rest = &header[value_start..];
            let value = rest.split(';').next().unwrap_or("").trim().replace('"', "");
            return (!value.is_empty()).then_some(value);
        }
        from = value_start;
    }
    None
}
