//! Style Cleaner Implementation
//! Author: kartik4091
//!
//! Removes automatic styles nothing refers to, folds empty styles into their
//! parents and merges styles whose definitions are identical.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::scanner::{
    attribute, attribute_value_end, element_end, find_from, find_tag, ElementSpan, Elements,
};

/// Paragraph, text, table and graphic styles
pub const STYLE_TAG: &str = "style:style";
/// List styles
pub const LIST_STYLE_TAG: &str = "text:list-style";

const NAME_ATTRIBUTE: &str = "style:name";
const SPAN_CLOSE: &str = "</text:span>";

lazy_static! {
    static ref EMPTY_CHILD_STYLE: Regex = Regex::new(
        r#"<style:style style:name="(\w+)" style:family="[a-z]+" style:parent-style-name="(\w+)"(?:/|><style:text-properties/></style:style)>"#
    )
    .unwrap();
    static ref EMPTY_TEXT_STYLE: Regex = Regex::new(
        r#"<style:style style:name="(\w+)" style:family="text"(?:/|><style:text-properties/></style:style)>"#
    )
    .unwrap();
}

/// Reference text for a style name, as found in `text:style-name`,
/// `style:parent-style-name`, `style:list-style-name` and friends
fn reference(name: &str) -> String {
    format!("style-name=\"{}\"", name)
}

/// Removes styles of `tag` whose name is never referenced, until none are left.
///
/// A style counts as used when `style-name="<name>` occurs anywhere in the
/// content. That includes the style referring to itself and, because the
/// closing quote is not part of the match, references to any name that
/// starts with the same text. Both only ever keep a style alive.
pub fn remove_orphan_styles(content: &mut String, tag: &str) -> usize {
    let mut total = 0;
    loop {
        let removed = orphan_pass(content, tag);
        if removed == 0 {
            return total;
        }
        debug!("Orphan pass over <{}> removed {}", tag, removed);
        total += removed;
    }
}

fn orphan_pass(content: &mut String, tag: &str) -> usize {
    let mut removed = 0;
    let mut pos = 0;
    while let Some(start) = find_tag(content, tag, pos) {
        let Some(end) = element_end(content, start) else {
            break;
        };
        let in_use = match attribute(content, start, NAME_ATTRIBUTE) {
            Some(name) => content.contains(&format!("style-name=\"{}", name)),
            None => true,
        };
        if in_use {
            pos = start + 1;
        } else {
            content.replace_range(start..end, "");
            removed += 1;
            pos = start;
        }
    }
    removed
}

/// Removes `style:style` elements that define nothing.
///
/// A style that only names a parent is replaced by that parent everywhere.
/// A text style without parent is dropped and every span using it is
/// unwrapped, keeping the span's children.
pub fn remove_empty_styles(content: &mut String) -> usize {
    let mut removed = 0;

    while let Some(captures) = EMPTY_CHILD_STYLE.captures(content.as_str()) {
        let range = captures.get(0).map(|m| m.range()).unwrap_or_default();
        let name = captures[1].to_string();
        let parent = captures[2].to_string();
        content.replace_range(range, "");
        *content = content.replace(&reference(&name), &reference(&parent));
        debug!("Folded empty style {} into {}", name, parent);
        removed += 1;
    }

    while let Some(captures) = EMPTY_TEXT_STYLE.captures(content.as_str()) {
        let range = captures.get(0).map(|m| m.range()).unwrap_or_default();
        let name = captures[1].to_string();
        content.replace_range(range, "");
        let unwrapped = unwrap_spans(content, &name);
        debug!("Dropped empty text style {} and unwrapped {} spans", name, unwrapped);
        removed += 1;
    }

    removed
}

/// Replaces each `<text:span text:style-name="name">…</text:span>` by its children
fn unwrap_spans(content: &mut String, name: &str) -> usize {
    let opening = format!("<text:span text:{}>", reference(name));
    let mut unwrapped = 0;
    while let Some(begin) = content.find(&opening) {
        let Some(end) = element_end(content, begin) else {
            break;
        };
        let inner_start = begin + opening.len();
        let inner_end = end - SPAN_CLOSE.len();
        let inner = content[inner_start..inner_end].to_string();
        content.replace_range(begin..end, &inner);
        unwrapped += 1;
    }
    unwrapped
}

/// A named style and the text compared for identity
#[derive(Debug, Clone)]
struct StyleDefinition<'a> {
    span: ElementSpan,
    name: &'a str,
    /// The whole element with ` style:name="…"` cut out
    body: String,
}

impl<'a> StyleDefinition<'a> {
    fn locate(content: &'a str, span: ElementSpan) -> Option<Self> {
        let name = attribute(content, span.start, NAME_ATTRIBUTE)?;
        let value_end = attribute_value_end(content, span.start, NAME_ATTRIBUTE)?;
        // whitespace, `style:name="`, value
        let attribute_start = value_end - name.len() - NAME_ATTRIBUTE.len() - 3;

        let mut body = String::with_capacity(span.len());
        body.push_str(&content[span.start..attribute_start]);
        body.push_str(&content[value_end + 1..span.end]);
        Some(Self { span, name, body })
    }
}

/// Merges styles of `tag` that are identical apart from their name.
///
/// The first style in document order wins: references to each later copy are
/// redirected to it and the copy is removed. Repeats until no two styles
/// match, since redirecting references can make further styles identical.
pub fn merge_duplicate_styles(content: &mut String, tag: &str) -> usize {
    let mut total = 0;
    loop {
        let merged = merge_pass(content, tag);
        if merged == 0 {
            return total;
        }
        total += merged;
    }
}

fn merge_pass(content: &mut String, tag: &str) -> usize {
    let (renames, dropped) = find_duplicates(content, tag);
    if dropped.is_empty() {
        return 0;
    }
    for span in dropped.iter().rev() {
        content.replace_range(span.start..span.end, "");
    }
    *content = rewrite_references(content, &renames);
    dropped.len()
}

/// Maps every later copy of a style to the first style with the same body,
/// returning the renames and the spans of the copies in document order
fn find_duplicates(content: &str, tag: &str) -> (HashMap<String, String>, Vec<ElementSpan>) {
    let mut keepers: HashMap<String, &str> = HashMap::new();
    let mut renames = HashMap::new();
    let mut dropped = Vec::new();

    for span in Elements::new(content, tag) {
        let Some(definition) = StyleDefinition::locate(content, span) else {
            continue;
        };
        match keepers.entry(definition.body) {
            Entry::Occupied(keep) => {
                debug!("Merging duplicate style {} into {}", definition.name, keep.get());
                renames.insert(definition.name.to_string(), keep.get().to_string());
                dropped.push(definition.span);
            }
            Entry::Vacant(slot) => {
                slot.insert(definition.name);
            }
        }
    }
    (renames, dropped)
}

/// Copies `content`, replacing every `style-name="<old>"` whose quoted value
/// is a key of `renames` by the mapped name
fn rewrite_references(content: &str, renames: &HashMap<String, String>) -> String {
    const PREFIX: &str = "style-name=\"";

    let mut out = String::with_capacity(content.len());
    let mut cursor = 0;
    while let Some(found) = find_from(content, PREFIX, cursor) {
        let value_start = found + PREFIX.len();
        let Some(value_end) = find_from(content, "\"", value_start) else {
            break;
        };
        let name = &content[value_start..value_end];
        out.push_str(&content[cursor..value_start]);
        out.push_str(renames.get(name).map(String::as_str).unwrap_or(name));
        cursor = value_end;
    }
    out.push_str(&content[cursor..]);
    out
}
