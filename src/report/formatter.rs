//! Report formatter implementation
//! Author: kartik4091

use super::{BatchKind, FileOutcome, ReportData, ReportError, ReportFormat};

/// Formats report data into various output formats
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn format(data: &ReportData, format: ReportFormat) -> Result<String, ReportError> {
        match format {
            ReportFormat::PlainText => Self::to_text(data),
            ReportFormat::Json => Self::to_json(data),
        }
    }

    fn to_text(data: &ReportData) -> Result<String, ReportError> {
        let mut output = String::new();
        let (title, verb) = match data.kind {
            BatchKind::Document => ("Document Cleanup Report", "cleaned"),
            BatchKind::Audio => ("Silence Removal Report", "modified"),
        };
        output.push_str(title);
        output.push('\n');
        output.push_str(&"=".repeat(title.len()));
        output.push_str("\n\n");

        for file in &data.files {
            output.push_str(&format!("{}: {}\n", file.path.display(), Self::describe(&file.outcome)));
            if let Some(saved_to) = &file.saved_to {
                output.push_str(&format!("  saved to {}\n", saved_to.display()));
            }
            for pass in file.passes.iter().filter(|p| p.count > 0) {
                output.push_str(&format!("  {}: {}\n", pass.pass, pass.count));
            }
        }

        let summary = &data.summary;
        output.push('\n');
        if summary.files_modified > 0 {
            output.push_str(&format!(
                "{} out of {} files {}, {}B total.\n",
                summary.files_modified, summary.files_processed, verb, summary.total_bytes_saved
            ));
        } else {
            output.push_str("No files were modified.\n");
        }
        if summary.files_failed > 0 {
            output.push_str(&format!("{} files failed.\n", summary.files_failed));
        }

        Ok(output)
    }

    fn to_json(data: &ReportData) -> Result<String, ReportError> {
        serde_json::to_string_pretty(data)
            .map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    pub fn describe(outcome: &FileOutcome) -> String {
        match outcome {
            FileOutcome::Unchanged => "no changes made".to_string(),
            FileOutcome::Modified { bytes_saved } if *bytes_saved >= 0 => {
                format!("saved ({}B smaller)", bytes_saved)
            }
            FileOutcome::Modified { bytes_saved } => format!("saved ({}B larger)", -bytes_saved),
            FileOutcome::Failed { reason } => format!("skipped: {}", reason),
        }
    }
}
