//! Report generator implementation
//! Author: kartik4091

use std::fs;

use tracing::info;

use super::{ReportConfig, ReportData, ReportError, ReportFormatter};

/// Writes rendered reports to disk
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn generate(data: &ReportData, config: &ReportConfig) -> Result<(), ReportError> {
        let content = ReportFormatter::format(data, config.format)?;
        fs::write(&config.output_path, content)?;
        info!("Report written to {}", config.output_path.display());
        Ok(())
    }
}
