//! Fixed-pattern attribute and element removal
//! Author: kartik4091

use tracing::debug;

use crate::scanner::find_from;

/// A delimiter sequence whose every match is removed from the content
#[derive(Debug, Clone, Copy)]
pub struct StripPattern {
    pub delimiters: &'static [&'static str],
    /// What a single match is, for reporting
    pub label: &'static str,
}

pub const RSID: StripPattern = StripPattern {
    delimiters: &[" officeooo:rsid=\"", "\""],
    label: "officeooo:rsid entries",
};

pub const PARAGRAPH_RSID: StripPattern = StripPattern {
    delimiters: &[" officeooo:paragraph-rsid=\"", "\""],
    label: "officeooo:paragraph-rsid entries",
};

pub const OPAQUE: StripPattern = StripPattern {
    delimiters: &[" loext:opacity=\"100%\""],
    label: "loext:opacity entries",
};

/// Also catches the `-asian` and `-complex` variants
pub const LANGUAGE: StripPattern = StripPattern {
    delimiters: &[" style:language", "\"", "\""],
    label: "language entries",
};

pub const COUNTRY: StripPattern = StripPattern {
    delimiters: &[" style:country", "\"", "\""],
    label: "country entries",
};

pub const FONT_FACE: StripPattern = StripPattern {
    delimiters: &["<style:font-face", "/>"],
    label: "font declarations",
};

pub const FONT_NAME: StripPattern = StripPattern {
    delimiters: &[" style:font-name=\"", "\""],
    label: "font references",
};

/// Removes every span that starts with the first delimiter and ends with the
/// last, the remaining delimiters found in order after it.
///
/// Always takes the leftmost occurrence of the first delimiter and the nearest
/// occurrence of each following one. Stops when the first delimiter is gone or
/// when a match cannot be completed. Returns the number of spans removed.
pub fn strip_pattern(content: &mut String, delimiters: &[&str]) -> usize {
    let Some((first, rest)) = delimiters.split_first() else {
        return 0;
    };
    if first.is_empty() {
        return 0;
    }

    let mut removed = 0;
    while let Some(start) = content.find(first) {
        let mut end = start + first.len();
        for delimiter in rest {
            match find_from(content, delimiter, end) {
                Some(found) => end = found + delimiter.len(),
                None => {
                    debug!("Unterminated '{}' at offset {}, leaving it in place", first, start);
                    return removed;
                }
            }
        }
        content.replace_range(start..end, "");
        removed += 1;
    }
    removed
}
