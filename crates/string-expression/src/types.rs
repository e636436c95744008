use num_bigint::BigInt;
use serde_json::Value;
use std::fmt;
use string_expression_util::format_number;

/// A raw substring coerced to a typed value.
///
/// Comparison and arithmetic never look at the raw expression text again
/// once an operand has been coerced; they pattern-match on this tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Coerced {
    /// The `undefined` literal.
    Undefined,
    /// The `null` literal.
    Null,
    /// The `true`/`false` literals.
    Bool(bool),
    /// An integer within the safe range (magnitude ≤ 2^53 − 1).
    Int(i64),
    /// An integer beyond the safe range, or an explicit `123n` literal.
    Big(BigInt),
    /// A fractional or exponent-bearing numeric.
    Float(f64),
    /// Structured data parsed from JSON text.
    Structured(Value),
    /// Anything else: the trimmed input, unchanged.
    Text(String),
}

impl fmt::Display for Coerced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coerced::Undefined => f.write_str("undefined"),
            Coerced::Null => f.write_str("null"),
            Coerced::Bool(b) => write!(f, "{b}"),
            Coerced::Int(n) => write!(f, "{n}"),
            Coerced::Big(b) => write!(f, "{b}"),
            Coerced::Float(x) => f.write_str(&format_number(*x)),
            Coerced::Structured(v) => write!(f, "{v}"),
            Coerced::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Coerced {
    fn from(b: bool) -> Self {
        Coerced::Bool(b)
    }
}

impl From<i64> for Coerced {
    fn from(n: i64) -> Self {
        Coerced::Int(n)
    }
}

impl From<f64> for Coerced {
    fn from(n: f64) -> Self {
        Coerced::Float(n)
    }
}

impl From<&str> for Coerced {
    fn from(s: &str) -> Self {
        Coerced::Text(s.to_string())
    }
}

/// Output of [`parse_value`](crate::parse_value): a scalar, a `/`-separated
/// list, or a single `key:value` entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed {
    Value(Coerced),
    List(Vec<Coerced>),
    Entry(String, Coerced),
}

/// A fully resolved expression result.
///
/// `Null` is the "unresolvable, not false" sentinel the resolvers produce
/// for malformed bracket groups.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl fmt::Display for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolved::Null => f.write_str("null"),
            Resolved::Bool(b) => write!(f, "{b}"),
            Resolved::Number(n) => f.write_str(&format_number(*n)),
            Resolved::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Resolved {
    fn from(b: bool) -> Self {
        Resolved::Bool(b)
    }
}

impl From<f64> for Resolved {
    fn from(n: f64) -> Self {
        Resolved::Number(n)
    }
}

impl From<String> for Resolved {
    fn from(s: String) -> Self {
        Resolved::Text(s)
    }
}

impl From<&str> for Resolved {
    fn from(s: &str) -> Self {
        Resolved::Text(s.to_string())
    }
}
