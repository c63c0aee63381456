//! Type definitions shared by the cleanup pipelines

pub mod audio;
pub mod document;

pub use audio::*;
pub use document::*;
