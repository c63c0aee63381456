//! Content Cleaner Implementation
//! Author: kartik4091
//!
//! Runs every cleanup pass over an in-memory `content.xml`, in a fixed order.

use tracing::{debug, info, instrument};

use crate::cleaner::attribute_stripper::{
    strip_pattern, StripPattern, COUNTRY, FONT_FACE, FONT_NAME, LANGUAGE, OPAQUE,
    PARAGRAPH_RSID, RSID,
};
use crate::cleaner::style_cleaner::{
    merge_duplicate_styles, remove_empty_styles, remove_orphan_styles, LIST_STYLE_TAG, STYLE_TAG,
};
use crate::config::DocumentOptions;
use crate::report::PassCount;

pub const ORPHAN_STYLES: &str = "orphan styles";
pub const ORPHAN_LIST_STYLES: &str = "orphan list styles";
pub const EMPTY_STYLES: &str = "empty styles";
pub const DUPLICATE_STYLES: &str = "duplicate styles";
pub const DUPLICATE_LIST_STYLES: &str = "duplicate list styles";

/// Cleans redundant formatting out of document content
#[derive(Debug, Clone, Default)]
pub struct ContentCleaner {
    options: DocumentOptions,
}

impl ContentCleaner {
    pub fn new(options: DocumentOptions) -> Self {
        Self { options }
    }

    /// Literal patterns stripped for the current options, in order
    pub fn strip_patterns(&self) -> Vec<StripPattern> {
        let mut patterns = vec![RSID, PARAGRAPH_RSID, OPAQUE];
        if self.options.remove_language {
            patterns.extend([LANGUAGE, COUNTRY]);
        }
        if self.options.remove_fonts {
            patterns.extend([FONT_FACE, FONT_NAME]);
        }
        patterns
    }

    /// Runs all passes over `content`, returning the count of each pass that ran
    #[instrument(skip(self, content), fields(len = content.len()))]
    pub fn clean(&self, content: &mut String) -> Vec<PassCount> {
        let mut passes = Vec::new();

        debug!("Removing irrelevant data");
        for pattern in self.strip_patterns() {
            let removed = strip_pattern(content, pattern.delimiters);
            Self::record(&mut passes, pattern.label, removed);
        }

        debug!("Searching for orphan styles");
        Self::record(&mut passes, ORPHAN_STYLES, remove_orphan_styles(content, STYLE_TAG));
        Self::record(&mut passes, ORPHAN_LIST_STYLES, remove_orphan_styles(content, LIST_STYLE_TAG));

        debug!("Searching for empty styles");
        Self::record(&mut passes, EMPTY_STYLES, remove_empty_styles(content));

        debug!("Searching for identical styles");
        Self::record(&mut passes, DUPLICATE_STYLES, merge_duplicate_styles(content, STYLE_TAG));
        Self::record(
            &mut passes,
            DUPLICATE_LIST_STYLES,
            merge_duplicate_styles(content, LIST_STYLE_TAG),
        );

        passes
    }

    fn record(passes: &mut Vec<PassCount>, label: &str, count: usize) {
        if count > 0 {
            info!("Removed {} {}", count, label);
        }
        passes.push(PassCount::new(label, count));
    }
}
