//! Condition resolution: brackets, `||`, `&&`, comparisons, truthiness.

use std::cmp::Ordering;

use crate::brackets::{brackets_balanced, substitute_groups};
use crate::coerce::{compare, deep_equal, parse_value};
use crate::error::{ResolveError, MAX_NESTING};

/// Condition operators, in dispatch order.
///
/// Containment in this order picks the comparator, wherever the token sits:
/// `1>=1` matches `>=`, never the bare `>`. The order is the tie-break and
/// part of the language's contract.
pub const CONDITIONS: [&str; 6] = ["==", "!=", ">=", "<=", ">", "<"];

/// Resolves a condition string to a boolean.
///
/// `Ok(None)` is the sentinel for a condition that cannot be resolved
/// (mismatched brackets) — unresolvable, not false. The only error is the
/// nesting guard.
///
/// # Examples
///
/// ```
/// use string_expression::resolve_condition;
///
/// assert_eq!(resolve_condition("1>=1").unwrap(), Some(true));
/// assert_eq!(resolve_condition("(1==2)&&(1!=3||1==0)").unwrap(), Some(true));
/// assert_eq!(resolve_condition("((1==1)").unwrap(), None);
/// ```
pub fn resolve_condition(value: &str) -> Result<Option<bool>, ResolveError> {
    resolve_at(value, 0)
}

fn resolve_at(value: &str, depth: usize) -> Result<Option<bool>, ResolveError> {
    if depth > MAX_NESTING {
        return Err(ResolveError::TooDeep);
    }
    let value = value.trim();

    if value.contains('(') && value.contains(')') {
        if !brackets_balanced(value) {
            return Ok(None);
        }
        let substituted = substitute_groups(value, |group| {
            Ok(match resolve_at(group.trim(), depth + 1)? {
                Some(b) => b.to_string(),
                None => "null".to_string(),
            })
        })?;
        return resolve_at(&substituted, depth + 1);
    }

    if value.contains("||") {
        // Every operand is evaluated; there is no short-circuit.
        let mut any = false;
        for part in value.split("||") {
            any |= resolve_at(part, depth + 1)? == Some(true);
        }
        return Ok(Some(any));
    }

    if value.contains("&&") {
        let mut all = true;
        for part in value.split("&&") {
            all &= resolve_at(part, depth + 1)? == Some(true);
        }
        return Ok(Some(all));
    }

    for op in CONDITIONS {
        if value.contains(op) {
            return Ok(Some(apply_comparison(value, op)));
        }
    }

    // No operator at all: a bare string is true unless empty.
    Ok(Some(!value.is_empty()))
}

fn apply_comparison(value: &str, op: &str) -> bool {
    let mut parts = value.split(op);
    let first = parse_value(parts.next().unwrap_or("").trim());
    let second = parse_value(parts.next().unwrap_or("").trim());
    match op {
        "==" => deep_equal(&first, &second),
        "!=" => !deep_equal(&first, &second),
        ">=" => matches!(
            compare(&first, &second),
            Some(Ordering::Greater | Ordering::Equal)
        ),
        "<=" => matches!(
            compare(&first, &second),
            Some(Ordering::Less | Ordering::Equal)
        ),
        ">" => compare(&first, &second) == Some(Ordering::Greater),
        "<" => compare(&first, &second) == Some(Ordering::Less),
        _ => false,
    }
}
