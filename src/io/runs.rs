//! Read harness run records and write aggregated reports (JSON).
//!
//! Accepted inputs:
//! - a report document `{ "context": {...}, "benchmarks": [...] }`
//! - a bare array of run records
//!
//! Reports are written as `domain::ReportFile`.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use chrono::Local;
use serde::Deserialize;

use crate::aggregate::FamilyReport;
use crate::domain::{ReportContext, ReportFile, RunRecord};
use crate::error::AppError;

#[derive(Deserialize)]
#[serde(untagged)]
enum RunsDocument {
    Report { benchmarks: Vec<RunRecord> },
    Bare(Vec<RunRecord>),
}

impl RunsDocument {
    fn into_runs(self) -> Vec<RunRecord> {
        match self {
            RunsDocument::Report { benchmarks } => benchmarks,
            RunsDocument::Bare(runs) => runs,
        }
    }
}

/// Read run records from a JSON file.
pub fn read_runs(path: &Path) -> Result<Vec<RunRecord>, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::invalid_input(format!("Failed to open runs JSON '{}': {e}", path.display()))
    })?;
    let doc: RunsDocument = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        AppError::invalid_input(format!("Invalid runs JSON '{}': {e}", path.display()))
    })?;
    Ok(doc.into_runs())
}

/// Parse run records from a JSON string.
pub fn parse_runs(json: &str) -> Result<Vec<RunRecord>, AppError> {
    let doc: RunsDocument = serde_json::from_str(json)
        .map_err(|e| AppError::invalid_input(format!("Invalid runs JSON: {e}")))?;
    Ok(doc.into_runs())
}

/// Build the report document for a set of aggregated families.
pub fn report_file(reports: &[FamilyReport]) -> ReportFile {
    ReportFile {
        context: ReportContext {
            tool: "bigo".to_string(),
            date: Local::now(),
            families: reports.len(),
        },
        benchmarks: reports
            .iter()
            .flat_map(|r| r.records())
            .cloned()
            .collect(),
    }
}

/// Write a report as pretty JSON.
pub fn write_report_json(out: impl Write, reports: &[FamilyReport]) -> Result<(), AppError> {
    serde_json::to_writer_pretty(out, &report_file(reports))
        .map_err(|e| AppError::invalid_input(format!("Failed to write report JSON: {e}")))
}

/// Write a report JSON file.
pub fn write_report_file(path: &Path, reports: &[FamilyReport]) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::invalid_input(format!("Failed to create report '{}': {e}", path.display()))
    })?;
    write_report_json(file, reports)
}

/// Write run records as a bare JSON array (used for generated series).
pub fn write_runs_file(path: &Path, runs: &[RunRecord]) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::invalid_input(format!("Failed to create runs JSON '{}': {e}", path.display()))
    })?;
    serde_json::to_writer_pretty(file, runs)
        .map_err(|e| AppError::invalid_input(format!("Failed to write runs JSON: {e}")))
}
