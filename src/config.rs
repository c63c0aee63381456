//! Configuration types and validation for the cleanup pipelines
//! Author: kartik4091

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// What happens to the original file once a cleaned version was written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Disposal {
    /// Leave the original untouched and save next to it with a suffix
    #[default]
    KeepCopy,
    /// Move the original to the trash and save in its place
    MoveToTrash,
    /// Replace the original
    Overwrite,
}

/// Where silence is removed from an audio file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrimMode {
    #[default]
    All,
    Start,
    End,
    Middle,
    Trim,
}

impl TrimMode {
    pub fn trims_start(self) -> bool {
        matches!(self, TrimMode::All | TrimMode::Trim | TrimMode::Start)
    }

    pub fn trims_end(self) -> bool {
        matches!(self, TrimMode::All | TrimMode::Trim | TrimMode::End)
    }

    pub fn excises_middle(self) -> bool {
        matches!(self, TrimMode::All | TrimMode::Middle)
    }
}

/// Toggles for the document content cleanup passes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentOptions {
    /// Strip font-face declarations and font-name references
    pub remove_fonts: bool,
    /// Strip language and country attributes
    pub remove_language: bool,
}

/// Silence detection parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SilenceOptions {
    /// Largest normalized amplitude (0.0-1.0) still treated as silence
    pub tolerance: f64,
    /// Shortest interior silent run, in frames, that gets excised
    pub min_length: usize,
    pub mode: TrimMode,
}

/// Global pipeline execution config
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    pub disposal: Disposal,
    pub recursive: bool,
    pub document: DocumentOptions,
    pub silence: SilenceOptions,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            remove_fonts: false,
            remove_language: true,
        }
    }
}

impl Default for SilenceOptions {
    fn default() -> Self {
        Self {
            tolerance: 0.0,
            min_length: 1000,
            mode: TrimMode::All,
        }
    }
}

impl ProcessingConfig {
    /// Loads a config file, trying JSON first and then YAML
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::ConfigError(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;

        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(_) => Ok(serde_yaml::from_str(&content)?),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let tolerance = self.silence.tolerance;
        if !(0.0..=1.0).contains(&tolerance) {
            return Err(Error::ValidationError(format!(
                "'{}' is not a valid tolerance, it must be a number from 0 to 1",
                tolerance
            )));
        }
        if self.silence.min_length == 0 {
            return Err(Error::ValidationError(
                "minimum silence length must be a positive integer".into(),
            ));
        }
        Ok(())
    }
}
