//! Main Library File for Declutter
//! Cleans redundant markup out of OpenDocument packages and trims silence
//! from wave audio, one batch of files at a time.

// Configuration and Core Pipeline
pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

// Stage 1: Markup Scanning
pub mod scanner;

// Stage 2: Content Cleanup
pub mod cleaner;

// Stage 2b: Silence Removal
pub mod audio;

// Stage 3: Output and Disposal
pub mod output;

// Stage 4: Report Generation
pub mod report;

pub use report::{
    BatchKind,
    FileOutcome,
    FileReport,
    PassCount,
    ReportConfig,
    ReportData,
    ReportError,
    ReportFormat,
    ReportFormatter,
    ReportGenerator,
};

// Shared Utilities
pub mod utils;

// Re-exports for crate consumers
pub use audio::SilenceTrimmer;
pub use cleaner::ContentCleaner;
pub use config::{Disposal, DocumentOptions, ProcessingConfig, SilenceOptions, TrimMode};
pub use error::{Error, Result};
pub use pipeline::Pipeline;
pub use types::{AudioClip, AudioFormat, OdfDocument};
