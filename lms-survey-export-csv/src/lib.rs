//! CSV export for the lms-survey crate: serializes the stored submissions
//! to a flat table for offline analysis.
//!
//! Column order is fixed and the header row uses human-readable names.
//! Values are joined verbatim with no quoting or escaping, matching the
//! files the original collection tool produced; a comma inside a value
//! shifts the remaining cells of that row.

use chrono::{NaiveDate, Utc};
use lms_survey_types::SurveyRecord;

/// MIME type for the export artifact.
pub const CSV_MIME_TYPE: &str = "text/csv";

/// Header names, in the fixed column order of every export.
pub const COLUMNS: [&str; 9] = [
    "Session ID",
    "Timestamp",
    "Response Time",
    "Page Load Time",
    "Error Rate",
    "Usability Rating",
    "Satisfaction Rating",
    "Academic Level",
    "Device Type",
];

/// Error type for export operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    /// The submission store holds no records; no artifact is produced.
    #[error("No data to export")]
    NothingToExport,
}

/// A finished export, ready to be delivered as a file download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    /// Suggested download filename, `lms_research_data_<YYYY-MM-DD>.csv`.
    pub filename: String,
    /// The complete CSV text: header row plus one row per record.
    pub content: String,
}

/// Export all records, dating the filename with today's UTC date.
pub fn export(records: &[SurveyRecord]) -> Result<CsvExport, ExportError> {
    export_dated(records, Utc::now().date_naive())
}

/// Export all records with an explicit filename date.
pub fn export_dated(records: &[SurveyRecord], date: NaiveDate) -> Result<CsvExport, ExportError> {
    if records.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(COLUMNS.join(","));
    for record in records {
        lines.push(row(record));
    }

    Ok(CsvExport {
        filename: format!("lms_research_data_{}.csv", date.format("%Y-%m-%d")),
        content: lines.join("\n"),
    })
}

fn row(record: &SurveyRecord) -> String {
    [
        record.session_id.clone(),
        record.timestamp.clone(),
        number_cell(record.performance.response_time_ms),
        number_cell(record.performance.page_load_time_ms),
        number_cell(record.performance.error_rate_percent),
        record.satisfaction.usability_rating.to_string(),
        record.satisfaction.satisfaction_rating.to_string(),
        record.demographic.academic_level.clone(),
        record.demographic.device_type.clone(),
    ]
    .join(",")
}

/// Render an optional metric the way the respondent typed it: unset as an
/// empty cell, integral values without a trailing `.0`.
fn number_cell(value: Option<f64>) -> String {
    match value {
        None => String::new(),
        Some(v) if v.fract() == 0.0 && v.is_finite() => format!("{}", v as i64),
        Some(v) => v.to_string(),
    }
}
