//! Section visibility: whether a section currently holds anything worth displaying.

use serde_json::Value;

use crate::models::SectionKey;

/// Reports whether `key` in a raw or normalized `document` has displayable content.
///
/// Editors pass `editing = true` so every declared section stays visible for input.
pub fn has_content(document: &Value, key: SectionKey, editing: bool) -> bool {
    if editing {
        return true;
    }
    document
        .get(key.as_str())
        .map(value_has_content)
        .unwrap_or(false)
}

/// Content test for a single section value, independent of its key.
pub fn value_has_content(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Bool(b) => *b,
        Value::Number(_) => true,
        Value::Array(items) => items.iter().any(element_is_meaningful),
        Value::Object(map) => map.values().any(is_truthy_primitive),
    }
}

fn element_is_meaningful(element: &Value) -> bool {
    match element {
        Value::Object(record) => record.values().any(field_is_meaningful),
        other => field_is_meaningful(other),
    }
}

fn field_is_meaningful(field: &Value) -> bool {
    match field {
        Value::String(s) => !s.trim().is_empty(),
        Value::Bool(b) => *b,
        Value::Number(_) => true,
        Value::Array(items) => !items.is_empty(),
        Value::Null | Value::Object(_) => false,
    }
}

fn is_truthy_primitive(field: &Value) -> bool {
    match field {
        Value::String(s) => !s.trim().is_empty(),
        Value::Bool(b) => *b,
        Value::Number(_) => true,
        _ => false,
    }
}
