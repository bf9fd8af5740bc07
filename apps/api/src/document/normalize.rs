//! Coerces raw, untrusted resume JSON into a schema-conformant [`ResumeDocument`].
//!
//! Input may come from persisted storage, a file-upload parser or an AI rewrite, so
//! every section can arrive in the wrong shape. Nothing here fails: the worst case for
//! any field is its declared default.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::trace;

use crate::document::render::render_safe;
use crate::models::{Record, ResumeDocument, SectionSchema, SectionShape, SectionValue};

/// Normalizes a whole document against `schema`.
///
/// Keys outside the schema are dropped. A non-object `raw` yields an all-defaults document.
/// Idempotent: feeding `to_value()` of the result back in returns an equal document.
pub fn normalize_document(raw: &Value, schema: &SectionSchema) -> ResumeDocument {
    let empty = Map::new();
    let fields = raw.as_object().unwrap_or(&empty);

    let sections: BTreeMap<_, _> = schema
        .sections
        .iter()
        .map(|spec| {
            let section = match fields.get(spec.key.as_str()) {
                Some(value) => normalize_section(value, spec.shape),
                None => normalize_section(&Value::Null, spec.shape),
            };
            (spec.key, section)
        })
        .collect();

    ResumeDocument::from_sections(sections)
}

/// Coerces a single section value to `shape`. Also the per-field edit path.
pub fn normalize_section(value: &Value, shape: SectionShape) -> SectionValue {
    match shape {
        SectionShape::Scalar => SectionValue::Scalar(render_safe(value, "")),
        SectionShape::ScalarList => SectionValue::ScalarList(coerce_scalar_list(value)),
        SectionShape::RecordList { primary_field } => {
            SectionValue::RecordList(coerce_record_list(value, primary_field))
        }
    }
}

fn coerce_scalar_list(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().map(|item| render_safe(item, "")).collect(),
        single => {
            trace!("wrapping non-list value into a singleton list");
            let text = render_safe(single, "");
            if text.trim().is_empty() {
                Vec::new()
            } else {
                vec![text]
            }
        }
    }
}

fn coerce_record_list(value: &Value, primary_field: &str) -> Vec<Record> {
    let items = match value {
        Value::Array(items) => items,
        Value::Null => return Vec::new(),
        _ => {
            trace!("discarding non-list value where a record list is declared");
            return Vec::new();
        }
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::Object(record) => Some(record.clone()),
            Value::String(_) | Value::Number(_) | Value::Bool(_) => {
                let mut record = Record::new();
                record.insert(
                    primary_field.to_string(),
                    Value::String(render_safe(item, "")),
                );
                Some(record)
            }
            // null and nested arrays carry no recoverable structure
            Value::Null | Value::Array(_) => None,
        })
        .collect()
}
