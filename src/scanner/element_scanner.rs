//! Balanced-tag element scanner over `content.xml` text
//!
//! Offsets are byte offsets into the content. Every delimiter the scanner
//! looks for is ASCII, so any offset it returns is a valid char boundary.

/// Byte span of a complete element, `start` at its `<`, `end` one past its final `>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementSpan {
    pub start: usize,
    pub end: usize,
}

impl ElementSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Finds `needle` at or after `from`
#[inline]
pub fn find_from(content: &str, needle: &str, from: usize) -> Option<usize> {
    content.get(from..)?.find(needle).map(|i| i + from)
}

/// Finds the next opening tag named exactly `tag` at or after `from`.
/// `tag` is given without the `<`, e.g. `style:style`.
pub fn find_tag(content: &str, tag: &str, from: usize) -> Option<usize> {
    let bytes = content.as_bytes();
    let mut cursor = from;
    loop {
        let lt = find_from(content, "<", cursor)?;
        let name_end = lt + 1 + tag.len();
        if content.get(lt + 1..name_end) == Some(tag) {
            match bytes.get(name_end) {
                Some(b' ' | b'\t' | b'\n' | b'\r' | b'/' | b'>') => return Some(lt),
                _ => {}
            }
        }
        cursor = lt + 1;
    }
}

/// Offset one past the `>` closing the tag that starts at or after `pos`
pub fn start_tag_end(content: &str, pos: usize) -> Option<usize> {
    let lt = find_from(content, "<", pos)?;
    find_from(content, ">", lt).map(|gt| gt + 1)
}

/// Offset one past the `>` of the closing tag matching the element at `pos`.
///
/// Self-closing elements end at their own `>`. Otherwise tags are walked one
/// by one: nested opening tags raise the level, closing tags lower it, and the
/// closing tag that brings it to zero ends the element. Returns `None` when the
/// content runs out first.
pub fn element_end(content: &str, pos: usize) -> Option<usize> {
    let bytes = content.as_bytes();
    let lt = find_from(content, "<", pos)?;
    let tag_end = start_tag_end(content, lt)?;
    if bytes[tag_end - 2] == b'/' || matches!(bytes.get(lt + 1), Some(b'?' | b'!')) {
        return Some(tag_end);
    }

    let mut level = 1usize;
    let mut cursor = tag_end;
    loop {
        let lt = find_from(content, "<", cursor)?;
        let tag_end = find_from(content, ">", lt)? + 1;
        match bytes.get(lt + 1) {
            Some(b'/') => {
                level -= 1;
                if level == 0 {
                    return Some(tag_end);
                }
            }
            // declarations, comments and processing instructions never nest
            Some(b'?' | b'!') => {}
            _ if bytes[tag_end - 2] != b'/' => level += 1,
            _ => {}
        }
        cursor = tag_end;
    }
}

/// Span of the element starting at or after `pos`
pub fn element_span(content: &str, pos: usize) -> Option<ElementSpan> {
    let start = find_from(content, "<", pos)?;
    let end = element_end(content, start)?;
    Some(ElementSpan { start, end })
}

/// Value of attribute `name` on the element at `pos`.
///
/// The search stays inside the element's opening tag, so an attribute missing
/// here is never picked up from a later sibling. A match must be preceded by
/// whitespace, which keeps `style-name` from matching inside
/// `style:parent-style-name`.
pub fn attribute<'a>(content: &'a str, pos: usize, name: &str) -> Option<&'a str> {
    let start = find_from(content, "<", pos)?;
    let tag_end = start_tag_end(content, start)?;
    let opening = &content[start..tag_end];
    let bytes = opening.as_bytes();

    let needle = format!("{}=\"", name);
    let mut cursor = 0;
    while let Some(found) = find_from(opening, &needle, cursor) {
        if found > 0 && bytes[found - 1].is_ascii_whitespace() {
            let begin = found + needle.len();
            let close = find_from(opening, "\"", begin)?;
            return Some(&content[start + begin..start + close]);
        }
        cursor = found + 1;
    }
    None
}

/// Position of the closing quote of attribute `name` on the element at `pos`,
/// as an absolute offset into `content`
pub fn attribute_value_end(content: &str, pos: usize, name: &str) -> Option<usize> {
    let value = attribute(content, pos, name)?;
    let value_start = value.as_ptr() as usize - content.as_ptr() as usize;
    Some(value_start + value.len())
}

/// Iterator over all elements of one tag, in document order
pub struct Elements<'a> {
    content: &'a str,
    tag: &'a str,
    cursor: usize,
}

impl<'a> Elements<'a> {
    pub fn new(content: &'a str, tag: &'a str) -> Self {
        Self { content, tag, cursor: 0 }
    }
}

impl<'a> Iterator for Elements<'a> {
    type Item = ElementSpan;

    fn next(&mut self) -> Option<Self::Item> {
        let start = find_tag(self.content, self.tag, self.cursor)?;
        let end = element_end(self.content, start)?;
        self.cursor = end;
        Some(ElementSpan { start, end })
    }
}
