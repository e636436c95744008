//! Dotted-path lookup over structured values.

use serde_json::Value;

/// Walks `obj` along a dot-separated `path`.
///
/// Each segment looks up an object key, or an array index when the current
/// value is an array and the segment parses as one. Returns `None` the
/// moment any segment misses.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use string_expression::resolve_obj_value;
///
/// let data = json!({"name": {"first": "Ada", "last": "Lovelace"}});
/// assert_eq!(resolve_obj_value("name.last", &data), Some(&json!("Lovelace")));
///
/// let list = json!({"name": ["first", "second"]});
/// assert_eq!(resolve_obj_value("name.1", &list), Some(&json!("second")));
/// assert_eq!(resolve_obj_value("name.missing", &list), None);
/// ```
pub fn resolve_obj_value<'a>(path: &str, obj: &'a Value) -> Option<&'a Value> {
    let mut current = obj;
    for segment in path.trim().split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(arr) => arr.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}
