//! Temporary-file saving and disposal of originals
//! Author: kartik4091
//!
//! Output is always written to a sibling temporary file first. The original
//! is only touched after that file is complete, by the disposal step and the
//! final rename.

use std::{
    fs,
    path::{Path, PathBuf},
};

use filetime::FileTime;
use tracing::{debug, error, info, warn};

use crate::config::Disposal;
use crate::error::{Error, Result};

/// Where a cleaned file ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub path: PathBuf,
    /// Original size minus new size
    pub bytes_saved: i64,
}

/// Naming and disposal rules for one kind of output
#[derive(Debug, Clone)]
pub struct OutputTarget {
    disposal: Disposal,
    copy_suffix: &'static str,
    temp_suffix: &'static str,
}

impl OutputTarget {
    pub fn new(disposal: Disposal, copy_suffix: &'static str, temp_suffix: &'static str) -> Self {
        Self {
            disposal,
            copy_suffix,
            temp_suffix,
        }
    }

    pub fn document(disposal: Disposal) -> Self {
        Self::new(disposal, "-cleaned", ".tmp")
    }

    pub fn audio(disposal: Disposal) -> Self {
        Self::new(disposal, "-unsilenced", ".unsilence")
    }

    pub fn disposal(&self) -> Disposal {
        self.disposal
    }

    /// Final path of the cleaned file
    pub fn destination(&self, original: &Path) -> PathBuf {
        match self.disposal {
            Disposal::KeepCopy => with_name_suffix(original, self.copy_suffix),
            Disposal::MoveToTrash | Disposal::Overwrite => original.to_path_buf(),
        }
    }

    pub fn temp_path(&self, original: &Path) -> PathBuf {
        let mut name = original.file_name().unwrap_or_default().to_os_string();
        name.push(self.temp_suffix);
        original.with_file_name(name)
    }

    /// Fails when a kept copy would overwrite an existing file
    pub fn ensure_available(&self, original: &Path) -> Result<PathBuf> {
        let destination = self.destination(original);
        if self.disposal == Disposal::KeepCopy && destination.exists() {
            return Err(Error::DestinationExists(destination));
        }
        Ok(destination)
    }

    /// Writes through `write` into the temporary file, then disposes of the
    /// original and moves the temporary file into place.
    ///
    /// Any failure before the disposal leaves the original untouched and
    /// removes the temporary file. A failed final move keeps the temporary
    /// file, since the original may already be gone.
    pub fn save<F>(&self, original: &Path, write: F) -> Result<SavedFile>
    where
        F: FnOnce(&Path) -> Result<()>,
    {
        let destination = self.ensure_available(original)?;
        let temp = self.temp_path(original);
        debug!("Writing {}", temp.display());

        let sizes = write(&temp)
            .and_then(|()| copy_stat(original, &temp))
            .and_then(|()| Ok((file_size(original)?, file_size(&temp)?)));
        let (original_size, new_size) = match sizes {
            Ok(sizes) => sizes,
            Err(e) => {
                discard(&temp);
                return Err(Error::write_failure(&temp, e));
            }
        };

        if self.disposal == Disposal::MoveToTrash {
            if let Err(e) = trash::delete(original) {
                discard(&temp);
                return Err(Error::write_failure(original, e));
            }
            debug!("Moved {} to trash", original.display());
        }

        replace(&temp, &destination)?;
        info!("'{}' saved ({}B smaller)", destination.display(), original_size - new_size);

        Ok(SavedFile {
            path: destination,
            bytes_saved: original_size - new_size,
        })
    }
}

/// Moves the finished temporary file over `destination`
fn replace(temp: &Path, destination: &Path) -> Result<()> {
    fs::rename(temp, destination).map_err(|e| {
        error!("Cleaned output kept at {}", temp.display());
        Error::replace_failure(destination, temp, e)
    })
}

fn file_size(path: &Path) -> Result<i64> {
    Ok(fs::metadata(path)?.len() as i64)
}

/// `name.ext` -> `name<suffix>.ext`, `name` -> `name<suffix>`
fn with_name_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default().to_os_string();
    let mut name = stem;
    name.push(suffix);
    if let Some(extension) = path.extension() {
        name.push(".");
        name.push(extension);
    }
    path.with_file_name(name)
}

/// Copies permissions from the original and stamps a fresh modification time
fn copy_stat(original: &Path, target: &Path) -> Result<()> {
    let permissions = fs::metadata(original)?.permissions();
    fs::set_permissions(target, permissions)?;
    filetime::set_file_mtime(target, FileTime::now())?;
    Ok(())
}

fn discard(temp: &Path) {
    if temp.exists() {
        if let Err(e) = fs::remove_file(temp) {
            warn!("Failed to remove temporary file {}: {}", temp.display(), e);
        }
    }
}
