//! Value coercion — raw substrings to typed values, plus the equality and
//! ordering rules comparisons apply to them.

use std::cmp::Ordering;
use std::sync::OnceLock;

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use regex::Regex;
use serde_json::Value;
use string_expression_util::json_equal;

use crate::types::{Coerced, Parsed};

/// Largest integer magnitude an f64 represents losslessly (2^53 − 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn bigint_literal_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?\d+n$").unwrap())
}

fn is_safe_integer(n: f64) -> bool {
    n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER
}

/// Coerces a raw substring to a typed value.
///
/// Rules apply in order to the trimmed input, first match wins:
/// 1. empty string stays an empty string;
/// 2. a finite numeric within the safe-integer range becomes [`Coerced::Int`];
/// 3. a numeric beyond that range keeps its exact digits as
///    [`Coerced::Big`] when integer-shaped, and falls back to
///    [`Coerced::Float`] when fractional; an explicit `123n` literal is
///    always [`Coerced::Big`];
/// 4. the `null`/`undefined`/`true`/`false` literals coerce to their values;
/// 5. anything that parses as JSON becomes [`Coerced::Structured`], and
///    everything else stays text, unchanged.
///
/// Coercion is a pure function of the trimmed input; it never consults
/// external state.
///
/// # Examples
///
/// ```
/// use string_expression::{parse_data, Coerced};
///
/// assert_eq!(parse_data("42"), Coerced::Int(42));
/// assert_eq!(parse_data("2.5"), Coerced::Float(2.5));
/// assert_eq!(parse_data("null"), Coerced::Null);
/// assert_eq!(parse_data("oak"), Coerced::Text("oak".to_string()));
/// ```
pub fn parse_data(input: &str) -> Coerced {
    let s = input.trim();
    if s.is_empty() {
        return Coerced::Text(String::new());
    }

    if let Ok(n) = s.parse::<f64>() {
        // Rust's float grammar also accepts inf/NaN spellings; those are not
        // numbers here and fall through to the literal/JSON/text rules.
        if n.is_finite() {
            if is_safe_integer(n) {
                return Coerced::Int(n as i64);
            }
            if let Ok(big) = s.parse::<BigInt>() {
                return Coerced::Big(big);
            }
            return Coerced::Float(n);
        }
    }

    if bigint_literal_regex().is_match(s) {
        if let Ok(big) = s[..s.len() - 1].parse::<BigInt>() {
            return Coerced::Big(big);
        }
    }

    match s {
        "null" => Coerced::Null,
        "undefined" => Coerced::Undefined,
        "true" => Coerced::Bool(true),
        "false" => Coerced::Bool(false),
        _ => match serde_json::from_str::<Value>(s) {
            Ok(v) => Coerced::Structured(v),
            Err(_) => Coerced::Text(s.to_string()),
        },
    }
}

/// Coerces a raw substring, unwrapping `/`-separated lists and `key:value`
/// entries.
///
/// Wraps [`parse_data`]; when the coercion falls through to plain text, a
/// `/` in the text splits it into a list of coerced segments, and otherwise
/// a `:` splits it once into an entry keyed by the literal prefix.
///
/// # Examples
///
/// ```
/// use string_expression::{parse_value, Coerced, Parsed};
///
/// assert_eq!(
///     parse_value("1/2"),
///     Parsed::List(vec![Coerced::Int(1), Coerced::Int(2)])
/// );
/// assert_eq!(
///     parse_value("limit:10"),
///     Parsed::Entry("limit".to_string(), Coerced::Int(10))
/// );
/// assert_eq!(parse_value("7"), Parsed::Value(Coerced::Int(7)));
/// ```
pub fn parse_value(input: &str) -> Parsed {
    match parse_data(input) {
        Coerced::Text(s) if s.contains('/') => {
            Parsed::List(s.split('/').map(parse_data).collect())
        }
        Coerced::Text(s) if s.contains(':') => {
            let (key, rest) = s.split_once(':').unwrap_or(("", ""));
            Parsed::Entry(key.to_string(), parse_data(rest))
        }
        other => Parsed::Value(other),
    }
}

/// Equality between two coerced scalars.
///
/// Tags must agree, with one exception: `Int` and `Float` share the double
/// domain and compare numerically. `Big` only equals `Big` (an explicit
/// bigint is never identical to a plain number). Structured values compare
/// structurally, through their own-key sets.
pub fn coerced_equal(a: &Coerced, b: &Coerced) -> bool {
    match (a, b) {
        (Coerced::Undefined, Coerced::Undefined) => true,
        (Coerced::Null, Coerced::Null) => true,
        (Coerced::Bool(x), Coerced::Bool(y)) => x == y,
        (Coerced::Int(x), Coerced::Int(y)) => x == y,
        (Coerced::Float(x), Coerced::Float(y)) => x == y,
        (Coerced::Int(x), Coerced::Float(y)) | (Coerced::Float(y), Coerced::Int(x)) => {
            *x as f64 == *y
        }
        (Coerced::Big(x), Coerced::Big(y)) => x == y,
        (Coerced::Text(x), Coerced::Text(y)) => x == y,
        (Coerced::Structured(x), Coerced::Structured(y)) => json_equal::deep_equal(x, y),
        _ => false,
    }
}

/// Deep equality between two parsed operands.
///
/// Lists compare pairwise, entries by key and value, scalars via
/// [`coerced_equal`]; mismatched shapes are unequal.
pub fn deep_equal(a: &Parsed, b: &Parsed) -> bool {
    match (a, b) {
        (Parsed::Value(x), Parsed::Value(y)) => coerced_equal(x, y),
        (Parsed::List(xs), Parsed::List(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| coerced_equal(x, y))
        }
        (Parsed::Entry(kx, vx), Parsed::Entry(ky, vy)) => kx == ky && coerced_equal(vx, vy),
        _ => false,
    }
}

fn numeric_view(c: &Coerced) -> Option<f64> {
    match c {
        Coerced::Int(n) => Some(*n as f64),
        Coerced::Float(x) => Some(*x),
        Coerced::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Coerced::Null => Some(0.0),
        Coerced::Big(b) => b.to_f64(),
        Coerced::Undefined | Coerced::Structured(_) | Coerced::Text(_) => None,
    }
}

/// Ordering between two parsed operands, where one exists.
///
/// Bigints order exactly against bigints and safe integers; text orders
/// lexically against text; every other pair orders through a numeric view
/// (booleans as 0/1, null as 0). `None` means the pair is incomparable —
/// ordering comparators treat that as false, the way a NaN comparison is
/// false.
pub fn compare(a: &Parsed, b: &Parsed) -> Option<Ordering> {
    let (Parsed::Value(a), Parsed::Value(b)) = (a, b) else {
        return None;
    };
    match (a, b) {
        (Coerced::Big(x), Coerced::Big(y)) => Some(x.cmp(y)),
        (Coerced::Big(x), Coerced::Int(y)) => Some(x.cmp(&BigInt::from(*y))),
        (Coerced::Int(x), Coerced::Big(y)) => Some(BigInt::from(*x).cmp(y)),
        (Coerced::Text(x), Coerced::Text(y)) => Some(x.cmp(y)),
        _ => {
            let x = numeric_view(a)?;
            let y = numeric_view(b)?;
            x.partial_cmp(&y)
        }
    }
}
