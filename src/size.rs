// Size resolution for size-based rules

use serde_json::Value;

/// Computes the comparable size of a value for `max`, `min`, `size` and
/// `between`.
///
/// An integer's size is its own magnitude, so `max:10` on an integer
/// attribute means "value at most 10", not "ten digits". Collections use
/// their element count. Everything else is treated as text and measured in
/// Unicode scalar values, not bytes, so multi-byte characters count once.
pub(crate) fn size_of(value: &Value) -> f64 {
    match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => n.as_f64().unwrap_or(0.0),
        Value::Array(items) => items.len() as f64,
        Value::Object(members) => members.len() as f64,
        Value::String(s) => s.chars().count() as f64,
        // floats fall through to their text form
        Value::Number(n) => n.to_string().chars().count() as f64,
        Value::Bool(true) => 1.0,
        Value::Bool(false) | Value::Null => 0.0,
    }
}
