//! Output module: writing cleaned files back to disk
//! Author: kartik4091

pub mod archive_writer;
pub mod file_disposal;

pub use archive_writer::write_document;
pub use file_disposal::{OutputTarget, SavedFile};
