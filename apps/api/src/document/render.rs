//! Total stringification of loosely-shaped field values.

use serde_json::Value;

/// Keys tried, in order, when flattening an object to display text.
pub const CANDIDATE_KEYS: &[&str] = &[
    "name",
    "title",
    "degree",
    "language",
    "value",
    "label",
    "text",
    "description",
    "company",
    "institution",
    "organization",
];

/// Renders any value as display text without failing.
///
/// Rules, in order:
/// - `null` -> `fallback`
/// - string -> itself
/// - number -> decimal form
/// - boolean -> `"Yes"` / `"No"`
/// - array -> each element rendered, blanks dropped, joined with `", "`
/// - object -> first string under a [`CANDIDATE_KEYS`] entry (`fallback` if that
///   string is blank), else its compact JSON form, else `fallback` when empty
pub fn render_safe(value: &Value, fallback: &str) -> String {
    match value {
        Value::Null => fallback.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "Yes".to_string(),
        Value::Bool(false) => "No".to_string(),
        Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .map(|item| render_safe(item, ""))
                .filter(|s| !s.trim().is_empty())
                .collect();
            if parts.is_empty() {
                fallback.to_string()
            } else {
                parts.join(", ")
            }
        }
        Value::Object(map) => {
            let hit = CANDIDATE_KEYS.iter().find_map(|key| match map.get(*key) {
                Some(Value::String(s)) => Some(s),
                _ => None,
            });
            match hit {
                Some(s) if s.trim().is_empty() => fallback.to_string(),
                Some(s) => s.clone(),
                None if map.is_empty() => fallback.to_string(),
                None => serde_json::to_string(value).unwrap_or_else(|_| fallback.to_string()),
            }
        }
    }
}
