//! String utilities.
//!
//! Provides JavaScript-style formatting of numeric values.

mod format_number;

pub use format_number::format_number;
