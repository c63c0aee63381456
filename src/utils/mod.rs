//! Utility Module Implementation
//! Author: kartik4091
//!
//! Filesystem helpers shared by both pipelines.

pub mod io;

pub use self::io::{collect_inputs, Discovery};
