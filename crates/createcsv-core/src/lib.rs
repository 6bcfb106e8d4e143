//! Core helpers shared by the createcsv crates.
//!
//! Converts human-entered size expressions into byte counts and formats
//! the figures reported at the end of a run.

pub mod error;
pub mod format;
pub mod size;

pub use error::{SizeError, SizeResult};
pub use format::{format_seconds, group_thousands};
pub use size::{SizeUnit, parse_size};
