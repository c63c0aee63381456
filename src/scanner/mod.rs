//! Scanner Module Implementation
//! Author: kartik4091
//!
//! Locates elements and attributes inside OpenDocument content markup.
//! This is a textual scanner for the restricted dialect LibreOffice writes,
//! not an XML parser: no entities, no namespaces, double-quoted attributes only.

pub mod element_scanner;

pub use self::element_scanner::{
    attribute, attribute_value_end, element_end, element_span, find_from, find_tag,
    start_tag_end, ElementSpan, Elements,
};
