//! Display ordering of resume sections.

use serde_json::Value;

use crate::models::{ResumeDocument, SectionKey};

/// Reconciles a user-supplied section order with `universe`.
///
/// `universe` is a set: repeated members count once. Non-list input yields the universe in
/// its own order. Otherwise known entries keep their relative order (first occurrence wins),
/// foreign entries are dropped, and missing members are appended in `universe` order. The
/// result is always a permutation of the distinct members of `universe`.
pub fn validate_section_order(order: &Value, universe: &[SectionKey]) -> Vec<SectionKey> {
    let entries = order.as_array().map(Vec::as_slice).unwrap_or_default();
    let requested = entries
        .iter()
        .filter_map(Value::as_str)
        .filter_map(SectionKey::parse)
        .filter(|key| universe.contains(key));

    let mut ordered: Vec<SectionKey> = Vec::with_capacity(universe.len());
    for key in requested.chain(universe.iter().copied()) {
        if !ordered.contains(&key) {
            ordered.push(key);
        }
    }
    ordered
}

/// Sections a renderer should lay out, in display order.
pub fn visible_sections(
    document: &ResumeDocument,
    order: &Value,
    editing: bool,
) -> Vec<SectionKey> {
    validate_section_order(order, &SectionKey::CONTENT_SECTIONS)
        .into_iter()
        .filter(|key| document.has_content(*key, editing))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::normalize::normalize_document;
    use crate::models::SectionSchema;
    use serde_json::json;

    use crate::models::SectionKey::{Education, Experience, Skills, Summary};

    fn assert_permutation(out: &[SectionKey], universe: &[SectionKey]) {
        assert_eq!(out.len(), universe.len());
        for key in universe {
            assert_eq!(out.iter().filter(|k| *k == key).count(), 1, "{key:?}");
        }
    }

    #[test]
    fn test_duplicates_and_foreign_entries() {
        let universe = [Summary, Experience, Education];
        let out = validate_section_order(&json!(["education", "education", "bogus"]), &universe);
        assert_eq!(out, vec![Education, Summary, Experience]);
    }

    #[test]
    fn test_non_list_returns_universe() {
        let universe = [Summary, Experience, Education];
        for order in [Value::Null, json!("education"), json!({ "0": "skills" }), json!(3)] {
            assert_eq!(validate_section_order(&order, &universe), universe.to_vec());
        }
    }

    #[test]
    fn test_keys_outside_universe_are_dropped() {
        let universe = [Summary, Education];
        let order = json!(["skills", "education", 7, null, "name"]);
        let out = validate_section_order(&order, &universe);
        assert_eq!(out, vec![Education, Summary]);
    }

    #[test]
    fn test_repeated_universe_members_count_once() {
        let universe = [Summary, Summary, Skills, Summary];
        assert_eq!(validate_section_order(&Value::Null, &universe), vec![Summary, Skills]);
        assert_eq!(
            validate_section_order(&json!(["skills"]), &universe),
            vec![Skills, Summary]
        );
        assert_eq!(validate_section_order(&json!([]), &[Summary, Summary]), vec![Summary]);
    }

    #[test]
    fn test_full_custom_order_is_kept() {
        let universe = [Summary, Experience, Education, Skills];
        let out = validate_section_order(
            &json!(["skills", "education", "experience", "summary"]),
            &universe,
        );
        assert_eq!(out, vec![Skills, Education, Experience, Summary]);
    }

    #[test]
    fn test_output_is_always_a_permutation() {
        let universe = SectionKey::CONTENT_SECTIONS;
        let orders = [
            json!([]),
            json!(["interests", "interests", "summary"]),
            json!(["Summary", "SKILLS", "skills"]),
            json!([["summary"], { "a": 1 }, "projects", "name", "email"]),
            json!(["languages", "achievements", "certifications", "projects", "skills",
                   "education", "experience", "summary", "interests", "bogus"]),
        ];
        for order in orders {
            assert_permutation(&validate_section_order(&order, &universe), &universe);
        }
    }

    #[test]
    fn test_empty_universe() {
        assert!(validate_section_order(&json!(["summary"]), &[]).is_empty());
    }

    #[test]
    fn test_visible_sections_filters_and_orders() {
        let doc = normalize_document(
            &json!({
                "summary": "Engineer",
                "skills": ["Rust"],
                "experience": [{ "title": "Dev" }],
                "education": []
            }),
            &SectionSchema::resume(),
        );
        let visible = visible_sections(&doc, &json!(["skills", "summary"]), false);
        assert_eq!(visible, vec![Skills, Summary, Experience]);

        let editing = visible_sections(&doc, &Value::Null, true);
        assert_eq!(editing, SectionKey::CONTENT_SECTIONS.to_vec());
    }
}
