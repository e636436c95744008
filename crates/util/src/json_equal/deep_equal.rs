use serde_json::Value;

/// Performs a deep equality check between two structured values.
///
/// Values compare recursively: primitives by value (numbers through their
/// `f64` view, so `1` and `1.0` are equal), arrays element by element, and
/// objects key by key with identical key cardinality.
///
/// An array and an object also compare equal when the object's keys are
/// exactly the array's indices (`"0"`, `"1"`, …) with equal values. The
/// condition language compares structured operands through their own-key
/// sets, so `[1,2]` and `{"0":1,"1":2}` are the same value to it.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use string_expression_util::json_equal::deep_equal;
///
/// assert!(deep_equal(&json!({"a": [1, 2]}), &json!({"a": [1, 2]})));
/// assert!(!deep_equal(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
/// assert!(deep_equal(&json!([1, 2]), &json!({"0": 1, "1": 2})));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(fa), Some(fb)) => fa == fb,
            _ => a == b,
        },
        (Value::String(a), Value::String(b)) => a == b,

        (Value::Array(arr_a), Value::Array(arr_b)) => {
            arr_a.len() == arr_b.len()
                && arr_a.iter().zip(arr_b).all(|(va, vb)| deep_equal(va, vb))
        }

        (Value::Object(obj_a), Value::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            for (key, val_a) in obj_a {
                match obj_b.get(key) {
                    Some(val_b) => {
                        if !deep_equal(val_a, val_b) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        }

        // An array is an object whose keys are its indices.
        (Value::Array(arr), Value::Object(obj)) | (Value::Object(obj), Value::Array(arr)) => {
            if arr.len() != obj.len() {
                return false;
            }
            for (i, val_a) in arr.iter().enumerate() {
                match obj.get(&i.to_string()) {
                    Some(val_b) => {
                        if !deep_equal(val_a, val_b) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        }

        _ => false,
    }
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn json_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i32>().prop_map(|n| json!(n)),
            "[a-z]{0,8}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn prop_reflexive(v in json_value()) {
            prop_assert!(deep_equal(&v, &v));
        }

        #[test]
        fn prop_symmetric(a in json_value(), b in json_value()) {
            prop_assert_eq!(deep_equal(&a, &b), deep_equal(&b, &a));
        }

        #[test]
        fn prop_extra_key_breaks_equality(v in json_value()) {
            let mut obj = serde_json::Map::new();
            obj.insert("k".to_string(), v.clone());
            let mut bigger = obj.clone();
            bigger.insert("extra".to_string(), Value::Null);
            prop_assert!(!deep_equal(&Value::Object(obj), &Value::Object(bigger)));
        }
    }
}
