//! Shape normalization for decoded responses.
//!
//! The vendor collapses one-element lists to a bare value and omits empty
//! lists entirely. Every call site that iterates a list goes through
//! [`one_or_many`] so that quirk is handled in one place.

use serde_json::Value;

/// View an optional value as a sequence.
///
/// - absent or `null` → empty
/// - array → its items
/// - anything else (string, object, number) → a one-element sequence
///
/// An empty string also counts as absent, since an empty element such as
/// `<SearchResult/>` decodes to `""`.
///
/// # Example
///
/// ```rust
/// use cvent_client::one_or_many;
/// use serde_json::json;
///
/// assert!(one_or_many(None).is_empty());
/// assert_eq!(one_or_many(Some(&json!("a"))), vec![&json!("a")]);
/// assert_eq!(one_or_many(Some(&json!(["a", "b"]))).len(), 2);
/// ```
pub fn one_or_many(value: Option<&Value>) -> Vec<&Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::String(s)) if s.is_empty() => Vec::new(),
        Some(Value::Array(items)) => items.iter().collect(),
        Some(other) => vec![other],
    }
}

/// Follow a path of object keys.
pub fn path<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().try_fold(value, |current, key| current.get(*key))
}

/// Whether a value counts as empty: missing, `null`, `""`, `[]` or `{}`.
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(map)) => map.is_empty(),
        Some(_) => false,
    }
}

/// Read a value as text.
///
/// Strings are returned as-is, numbers and booleans are formatted, and an
/// element with attributes and text content yields its `_` text.
pub fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Object(map) => map.get("_").and_then(|v| text(Some(v))),
        _ => None,
    }
}

/// Read a SOAP boolean (`true`/`false`/`1`/`0`).
pub fn boolean(value: Option<&Value>) -> Option<bool> {
    match value? {
        Value::Bool(b) => Some(*b),
        other => match text(Some(other))?.trim() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
    }
}
