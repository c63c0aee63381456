//! Report module for the cleanup pipelines
//! Author: kartik4091
//!
//! Collects one structured entry per processed file. Rendering and verbosity
//! are left to the formatter and the caller.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod formatter;
pub mod generator;

pub use formatter::ReportFormatter;
pub use generator::ReportGenerator;

/// Report configuration
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub output_path: PathBuf,
    pub format: ReportFormat,
}

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    PlainText,
    Json,
}

/// Which pipeline produced a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchKind {
    #[default]
    Document,
    Audio,
}

/// Result of processing a single file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FileOutcome {
    /// Nothing to clean, no file written
    Unchanged,
    /// Cleaned output saved; negative when the new file is larger
    Modified { bytes_saved: i64 },
    /// Skipped because of an error
    Failed { reason: String },
}

/// Number of items one cleanup pass removed or merged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassCount {
    pub pass: String,
    pub count: usize,
}

impl PassCount {
    pub fn new(pass: impl Into<String>, count: usize) -> Self {
        Self {
            pass: pass.into(),
            count,
        }
    }
}

/// Report entry for one input file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub saved_to: Option<PathBuf>,
    pub outcome: FileOutcome,
    pub passes: Vec<PassCount>,
    pub timestamp: String,
}

impl FileReport {
    pub fn new(path: impl Into<PathBuf>, outcome: FileOutcome) -> Self {
        Self {
            path: path.into(),
            saved_to: None,
            outcome,
            passes: Vec::new(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn with_passes(mut self, passes: Vec<PassCount>) -> Self {
        self.passes = passes;
        self
    }

    pub fn with_saved_to(mut self, saved_to: impl Into<PathBuf>) -> Self {
        self.saved_to = Some(saved_to.into());
        self
    }

    pub fn is_modified(&self) -> bool {
        matches!(self.outcome, FileOutcome::Modified { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, FileOutcome::Failed { .. })
    }

    /// Count recorded for `pass`, 0 if it never ran
    pub fn count(&self, pass: &str) -> usize {
        self.passes
            .iter()
            .filter(|p| p.pass == pass)
            .map(|p| p.count)
            .sum()
    }
}

/// Batch summary statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchSummary {
    pub files_processed: usize,
    pub files_modified: usize,
    pub files_failed: usize,
    pub total_bytes_saved: i64,
}

/// Complete report data structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportData {
    pub kind: BatchKind,
    pub generation_time: Option<String>,
    pub files: Vec<FileReport>,
    pub summary: BatchSummary,
}

/// Report generation errors
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl ReportData {
    pub fn new(kind: BatchKind) -> Self {
        Self {
            kind,
            generation_time: Some(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        }
    }

    pub fn add_file(&mut self, report: FileReport) {
        self.files.push(report);
        self.update_summary();
    }

    fn update_summary(&mut self) {
        let mut summary = BatchSummary {
            files_processed: self.files.len(),
            ..Default::default()
        };
        for file in &self.files {
            match &file.outcome {
                FileOutcome::Modified { bytes_saved } => {
                    summary.files_modified += 1;
                    summary.total_bytes_saved += bytes_saved;
                }
                FileOutcome::Failed { .. } => summary.files_failed += 1,
                FileOutcome::Unchanged => {}
            }
        }
        self.summary = summary;
    }
}
