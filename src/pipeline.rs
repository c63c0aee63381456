//! Batch pipelines for document cleanup and silence trimming
//! Author: kartik4091
//!
//! Each input goes through load, clean, save. A failure is confined to its
//! own file: it is logged, recorded in the report and the batch continues.

use std::path::{Path, PathBuf};

use tracing::{error, info, instrument, warn};

use crate::{
    audio::{is_wave, read_clip, write_clip, SilenceTrimmer},
    cleaner::ContentCleaner,
    config::ProcessingConfig,
    error::{Error, Result},
    output::{write_document, OutputTarget},
    report::{BatchKind, FileOutcome, FileReport, PassCount, ReportData},
    types::{is_document, OdfDocument},
    utils::{collect_inputs, Discovery},
};

/// Drives one batch of files through a cleanup pass list
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: ProcessingConfig,
}

impl Pipeline {
    pub fn new(config: ProcessingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProcessingConfig {
        &self.config
    }

    /// Cleans every OpenDocument package found under `paths`.
    ///
    /// Fails only when no document could be found at all.
    #[instrument(skip(self, paths))]
    pub fn run_documents(&self, paths: &[PathBuf]) -> Result<ReportData> {
        info!("🚦 Starting document cleanup");
        let discovery = collect_inputs(paths, self.config.recursive, is_document);
        let (mut report, files) = Self::start_report(BatchKind::Document, discovery)?;

        let cleaner = ContentCleaner::new(self.config.document.clone());
        let target = OutputTarget::document(self.config.disposal);
        for path in files {
            let entry = self
                .process_document(&path, &cleaner, &target)
                .unwrap_or_else(|e| Self::failed(&path, e));
            report.add_file(entry);
        }

        Self::finish(&report);
        Ok(report)
    }

    /// Trims silence from every wave file found under `paths`
    #[instrument(skip(self, paths))]
    pub fn run_audio(&self, paths: &[PathBuf]) -> Result<ReportData> {
        info!("🚦 Starting silence removal");
        let discovery = collect_inputs(paths, self.config.recursive, is_wave);
        let (mut report, files) = Self::start_report(BatchKind::Audio, discovery)?;

        let trimmer = SilenceTrimmer::new(self.config.silence.clone());
        let target = OutputTarget::audio(self.config.disposal);
        for path in files {
            let entry = self
                .process_audio(&path, &trimmer, &target)
                .unwrap_or_else(|e| Self::failed(&path, e));
            report.add_file(entry);
        }

        Self::finish(&report);
        Ok(report)
    }

    /// Loads one package, runs the pass list and saves it if anything changed
    #[instrument(skip(self, cleaner, target))]
    pub fn process_document(
        &self,
        path: &Path,
        cleaner: &ContentCleaner,
        target: &OutputTarget,
    ) -> Result<FileReport> {
        info!("Cleaning '{}'", path.display());
        target.ensure_available(path)?;

        let mut document = OdfDocument::load(path)?;
        let passes = cleaner.clean(&mut document.content);

        if !document.is_modified() {
            info!("No changes made to '{}'", path.display());
            return Ok(FileReport::new(path, FileOutcome::Unchanged).with_passes(passes));
        }

        let saved = target.save(path, |temp| write_document(&document, temp))?;
        Ok(FileReport::new(
            path,
            FileOutcome::Modified {
                bytes_saved: saved.bytes_saved,
            },
        )
        .with_passes(passes)
        .with_saved_to(saved.path))
    }

    /// Decodes one wave file, trims it and saves it if any frame was removed
    #[instrument(skip(self, trimmer, target))]
    pub fn process_audio(
        &self,
        path: &Path,
        trimmer: &SilenceTrimmer,
        target: &OutputTarget,
    ) -> Result<FileReport> {
        info!("Processing '{}'", path.display());
        target.ensure_available(path)?;

        let mut clip = read_clip(path)?;
        let passes = trimmer.trim(&mut clip);
        let removed = total(&passes);

        if removed == 0 {
            info!("No silence removed from '{}'", path.display());
            return Ok(FileReport::new(path, FileOutcome::Unchanged).with_passes(passes));
        }

        let saved = target.save(path, |temp| write_clip(temp, &clip))?;
        Ok(FileReport::new(
            path,
            FileOutcome::Modified {
                bytes_saved: saved.bytes_saved,
            },
        )
        .with_passes(passes)
        .with_saved_to(saved.path))
    }

    /// Opens a report with the skipped inputs already recorded as failures
    fn start_report(kind: BatchKind, discovery: Discovery) -> Result<(ReportData, Vec<PathBuf>)> {
        if discovery.is_empty() {
            return Err(Error::ValidationError("no matching files found".into()));
        }

        let mut report = ReportData::new(kind);
        for (path, e) in discovery.skipped {
            report.add_file(FileReport::new(path, FileOutcome::Failed { reason: e.to_string() }));
        }
        Ok((report, discovery.files))
    }

    fn failed(path: &Path, e: Error) -> FileReport {
        let reason = if e.is_write_failure() {
            format!("{}; file has not been modified", e)
        } else {
            e.to_string()
        };
        error!("Skipping '{}': {}", path.display(), reason);
        FileReport::new(path, FileOutcome::Failed { reason })
    }

    fn finish(report: &ReportData) {
        let summary = &report.summary;
        if summary.files_failed > 0 {
            warn!("{} files could not be processed", summary.files_failed);
        }
        info!(
            "✅ {} out of {} files modified, {}B total",
            summary.files_modified, summary.files_processed, summary.total_bytes_saved
        );
    }
}

/// Total number of items removed across all passes
pub fn total(passes: &[PassCount]) -> usize {
    passes.iter().map(|p| p.count).sum()
}
