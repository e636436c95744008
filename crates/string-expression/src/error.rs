use thiserror::Error;

/// Maximum bracket/operand nesting a single expression may reach before
/// resolution is abandoned. Recursion depth is bounded by the expression's
/// nesting depth, so this caps stack growth for pathological inputs.
pub const MAX_NESTING: usize = 64;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    #[error("EXPRESSION_TOO_DEEP")]
    TooDeep,
}
