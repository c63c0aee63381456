//! Rewrites an OpenDocument package with new content
//! Author: kartik4091

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use tracing::debug;
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

use crate::error::Result;
use crate::types::{open_archive, OdfDocument, CONTENT_MEMBER};

/// Writes `document` to `destination`.
///
/// Members are written in source order so `mimetype` stays first. The content
/// member is recompressed with deflate; every other member is copied raw,
/// keeping its name, compression and bytes exactly as they were.
pub fn write_document(document: &OdfDocument, destination: &Path) -> Result<()> {
    let mut source = open_archive(&document.path)?;
    let mut writer = ZipWriter::new(BufWriter::new(File::create(destination)?));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut content_written = false;
    for index in 0..source.len() {
        let member = source.by_index_raw(index)?;
        if member.name() == CONTENT_MEMBER {
            drop(member);
            writer.start_file(CONTENT_MEMBER, options)?;
            writer.write_all(document.content.as_bytes())?;
            content_written = true;
        } else {
            debug!("Copying member {}", member.name());
            writer.raw_copy_file(member)?;
        }
    }

    if !content_written {
        writer.start_file(CONTENT_MEMBER, options)?;
        writer.write_all(document.content.as_bytes())?;
    }

    writer.finish()?.flush()?;
    Ok(())
}
