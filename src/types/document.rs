//! OpenDocument package abstraction
//! Author: kartik4091

use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use zip::{result::ZipError, ZipArchive};

use crate::error::{Error, Result};

/// Archive member holding the page content and its automatic styles
pub const CONTENT_MEMBER: &str = "content.xml";

/// A document whose content member has been read into memory.
///
/// Only `content` is ever edited. The other members stay in the source
/// archive and are copied over untouched when the document is saved.
#[derive(Debug, Clone)]
pub struct OdfDocument {
    pub path: PathBuf,
    pub content: String,
    original: String,
}

impl OdfDocument {
    /// Opens the package at `path` and reads its content member
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::InputNotFound(path.to_path_buf()));
        }

        let mut archive = open_archive(path)?;
        let mut member = archive.by_name(CONTENT_MEMBER).map_err(|e| match e {
            ZipError::FileNotFound => Error::MissingRequiredMember {
                path: path.to_path_buf(),
                member: CONTENT_MEMBER.to_string(),
            },
            other => Error::ArchiveError(other),
        })?;

        let mut content = String::with_capacity(member.size() as usize);
        member.read_to_string(&mut content)?;

        Ok(Self {
            path: path.to_path_buf(),
            original: content.clone(),
            content,
        })
    }

    /// Builds a document from content already in memory
    pub fn from_content(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            path: path.into(),
            original: content.clone(),
            content,
        }
    }

    /// True when any cleanup pass changed the content
    pub fn is_modified(&self) -> bool {
        self.content != self.original
    }

    pub fn original_content(&self) -> &str {
        &self.original
    }
}

/// Opens a zip archive, mapping any signature failure to `NotAContainer`
pub fn open_archive(path: &Path) -> Result<ZipArchive<BufReader<File>>> {
    let file = File::open(path)?;
    ZipArchive::new(BufReader::new(file)).map_err(|e| Error::NotAContainer {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// True for regular files that are zip packages with a content member
pub fn is_document(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    match open_archive(path) {
        Ok(archive) => archive.index_for_name(CONTENT_MEMBER).is_some(),
        Err(_) => false,
    }
}
