//! Arithmetic resolution with the fixed-precision rounding policy.

use crate::brackets::{brackets_balanced, substitute_groups};
use crate::error::{ResolveError, MAX_NESTING};
use crate::types::Resolved;

/// Arithmetic operators, in dispatch order.
///
/// The first operator contained anywhere in the expression splits it; there
/// is no precedence beyond this list's order.
pub const OPERATORS: [char; 5] = ['+', '-', '/', '*', '^'];

/// Resolves an arithmetic string to a number.
///
/// An expression with no operator (or with a non-numeric operand) passes
/// through unchanged as [`Resolved::Text`], which lets the condition
/// resolver pick it up afterwards. Mismatched brackets yield
/// [`Resolved::Null`].
///
/// Sums, differences, quotients and products are rounded to `f32` precision
/// and widened back; exponentiation keeps full double precision.
///
/// # Examples
///
/// ```
/// use string_expression::{resolve_math, Resolved};
///
/// assert_eq!(resolve_math("1+2").unwrap(), Resolved::Number(3.0));
/// assert_eq!(
///     resolve_math("((1+2)*2)+((4/2)-1)").unwrap(),
///     Resolved::Number(7.0)
/// );
/// assert_eq!(
///     resolve_math("plain text").unwrap(),
///     Resolved::Text("plain text".to_string())
/// );
/// ```
pub fn resolve_math(value: &str) -> Result<Resolved, ResolveError> {
    resolve_at(value, 0)
}

fn resolve_at(value: &str, depth: usize) -> Result<Resolved, ResolveError> {
    if depth > MAX_NESTING {
        return Err(ResolveError::TooDeep);
    }
    let value = value.trim();

    if value.contains('(') && value.contains(')') {
        if !brackets_balanced(value) {
            return Ok(Resolved::Null);
        }
        let substituted = substitute_groups(value, |group| {
            resolve_at(group.trim(), depth + 1).map(|r| r.to_string())
        })?;
        return resolve_at(&substituted, depth + 1);
    }

    for op in OPERATORS {
        if value.contains(op) {
            return Ok(apply_operator(value, op));
        }
    }

    Ok(Resolved::Text(value.to_string()))
}

fn apply_operator(value: &str, op: char) -> Resolved {
    let mut parts = value.split(op);
    let first = to_number(parts.next().unwrap_or(""));
    let second = to_number(parts.next().unwrap_or(""));
    let (Some(a), Some(b)) = (first, second) else {
        // A non-numeric operand: leave the expression for a later pass.
        return Resolved::Text(value.to_string());
    };
    let result = match op {
        '+' => fround(a + b),
        '-' => fround(a - b),
        '/' => fround(a / b),
        '*' => fround(a * b),
        // Exponentiation keeps full double precision.
        '^' => a.powf(b),
        _ => return Resolved::Text(value.to_string()),
    };
    Resolved::Number(result)
}

/// Rounds to the nearest f32 and widens back to f64.
fn fround(n: f64) -> f64 {
    n as f32 as f64
}

fn to_number(part: &str) -> Option<f64> {
    let part = part.trim();
    if part.is_empty() {
        // An absent operand reads as zero.
        return Some(0.0);
    }
    part.parse::<f64>().ok().filter(|n| n.is_finite())
}
