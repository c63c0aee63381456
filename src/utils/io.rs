//! Input discovery
//! Author: kartik4091

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};

use crate::error::{Error, Result};

/// Files found for a batch, plus the inputs that had to be skipped
#[derive(Debug, Default)]
pub struct Discovery {
    pub files: Vec<PathBuf>,
    pub skipped: Vec<(PathBuf, Error)>,
}

impl Discovery {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Expands the given paths into a sorted, de-duplicated list of files.
///
/// Files named directly are always taken, so a bad one fails loudly when it
/// is loaded. `accept` only filters directory contents, which are searched
/// one level deep unless `recursive` is set.
#[instrument(skip(paths, accept))]
pub fn collect_inputs<F>(paths: &[PathBuf], recursive: bool, accept: F) -> Discovery
where
    F: Fn(&Path) -> bool,
{
    let mut found = BTreeSet::new();
    let mut skipped = Vec::new();

    for path in paths {
        if !path.exists() {
            warn!("'{}' not found, skipping", path.display());
            skipped.push((path.clone(), Error::InputNotFound(path.clone())));
        } else if path.is_dir() {
            if let Err(e) = walk(path, recursive, &accept, &mut found) {
                warn!("Could not search '{}': {}", path.display(), e);
                skipped.push((path.clone(), e));
            }
        } else {
            found.insert(path.clone());
        }
    }

    debug!("Found {} files", found.len());
    Discovery {
        files: found.into_iter().collect(),
        skipped,
    }
}

fn walk<F>(dir: &Path, recursive: bool, accept: &F, found: &mut BTreeSet<PathBuf>) -> Result<()>
where
    F: Fn(&Path) -> bool,
{
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            if recursive {
                walk(&path, recursive, accept, found)?;
            }
        } else if accept(&path) {
            found.insert(path);
        }
    }
    Ok(())
}
