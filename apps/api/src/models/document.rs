use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::document::normalize::normalize_section;
use crate::document::presence::value_has_content;
use crate::models::section::{SectionKey, SectionSchema};

/// One entry of a record list, e.g. a single job under `experience`.
pub type Record = Map<String, Value>;

/// A section value coerced to its declared shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SectionValue {
    Scalar(String),
    ScalarList(Vec<String>),
    RecordList(Vec<Record>),
}

impl SectionValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SectionValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            SectionValue::Scalar(s) => Value::String(s.clone()),
            SectionValue::ScalarList(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
            SectionValue::RecordList(records) => {
                Value::Array(records.iter().cloned().map(Value::Object).collect())
            }
        }
    }
}

/// A schema-conformant resume. Only normalization builds one.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ResumeDocument {
    sections: BTreeMap<SectionKey, SectionValue>,
}

impl ResumeDocument {
    pub(crate) fn from_sections(sections: BTreeMap<SectionKey, SectionValue>) -> Self {
        Self { sections }
    }

    pub fn get(&self, key: SectionKey) -> Option<&SectionValue> {
        self.sections.get(&key)
    }

    /// Scalar text of a field, or `""` when absent or not a scalar.
    pub fn text(&self, key: SectionKey) -> &str {
        self.get(key).and_then(SectionValue::as_str).unwrap_or("")
    }

    pub fn sections(&self) -> impl Iterator<Item = (SectionKey, &SectionValue)> {
        self.sections.iter().map(|(k, v)| (*k, v))
    }

    /// Applies one interactive edit, re-running only that field's coercion.
    /// Keys the schema does not declare are ignored.
    pub fn set_field(&mut self, schema: &SectionSchema, key: SectionKey, raw: &Value) {
        if let Some(shape) = schema.shape_of(key) {
            self.sections.insert(key, normalize_section(raw, shape));
        }
    }

    pub fn has_content(&self, key: SectionKey, editing: bool) -> bool {
        if editing {
            return true;
        }
        self.get(key)
            .map(|v| value_has_content(&v.to_value()))
            .unwrap_or(false)
    }

    pub fn to_value(&self) -> Value {
        Value::Object(
            self.sections()
                .map(|(k, v)| (k.as_str().to_string(), v.to_value()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::normalize::normalize_document;
    use serde_json::json;

    #[test]
    fn test_serializes_as_flat_object() {
        let doc = normalize_document(
            &json!({ "name": "Ada", "skills": ["Rust"] }),
            &SectionSchema::resume(),
        );
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["name"], json!("Ada"));
        assert_eq!(value["skills"], json!(["Rust"]));
        assert_eq!(value["experience"], json!([]));
        assert_eq!(value, doc.to_value());
    }

    #[test]
    fn test_text_of_non_scalar_is_empty() {
        let doc = normalize_document(&json!({ "skills": ["Rust"] }), &SectionSchema::resume());
        assert_eq!(doc.text(SectionKey::Skills), "");
        assert_eq!(doc.text(SectionKey::Name), "");
    }

    #[test]
    fn test_set_field_coerces_only_that_field() {
        let schema = SectionSchema::resume();
        let mut doc = normalize_document(&json!({ "summary": "Hi" }), &schema);
        doc.set_field(&schema, SectionKey::Skills, &json!("Go"));
        doc.set_field(&schema, SectionKey::Experience, &json!("oops"));
        doc.set_field(&schema, SectionKey::Name, &json!(42));

        assert_eq!(
            doc.get(SectionKey::Skills),
            Some(&SectionValue::ScalarList(vec!["Go".to_string()]))
        );
        assert_eq!(
            doc.get(SectionKey::Experience),
            Some(&SectionValue::RecordList(vec![]))
        );
        assert_eq!(doc.text(SectionKey::Name), "42");
        assert_eq!(doc.text(SectionKey::Summary), "Hi");
    }

    #[test]
    fn test_set_field_ignores_undeclared_key() {
        let schema = SectionSchema::new(vec![]);
        let mut doc = ResumeDocument::default();
        doc.set_field(&schema, SectionKey::Summary, &json!("text"));
        assert!(doc.get(SectionKey::Summary).is_none());
    }

    #[test]
    fn test_document_has_content() {
        let doc = normalize_document(
            &json!({ "skills": ["", " "], "summary": "Builder" }),
            &SectionSchema::resume(),
        );
        assert!(!doc.has_content(SectionKey::Skills, false));
        assert!(doc.has_content(SectionKey::Skills, true));
        assert!(doc.has_content(SectionKey::Summary, false));
        assert!(!doc.has_content(SectionKey::Projects, false));
    }
}
