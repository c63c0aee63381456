//! Cleaner modules for OpenDocument content cleanup
//! Author: kartik4091

pub mod attribute_stripper;
pub mod content_cleaner;
pub mod style_cleaner;

pub use attribute_stripper::{strip_pattern, StripPattern};
pub use content_cleaner::ContentCleaner;
pub use style_cleaner::{merge_duplicate_styles, remove_empty_styles, remove_orphan_styles};
