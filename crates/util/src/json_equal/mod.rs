//! JSON equality utilities.
//!
//! Provides deep equality comparison for structured values, including the
//! index-keyed array/object equivalence used by the condition language.

mod deep_equal;

pub use deep_equal::deep_equal;
