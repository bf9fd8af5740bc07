use serde::{Deserialize, Serialize};

/// A named resume section or personal-info field.
///
/// Ordering follows declaration order: personal fields first, then content sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Name,
    Role,
    Email,
    Phone,
    Location,
    Linkedin,
    Github,
    Portfolio,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Achievements,
    Languages,
    Interests,
}

impl SectionKey {
    /// Sections a renderer lays out, in default display order.
    pub const CONTENT_SECTIONS: [SectionKey; 9] = [
        SectionKey::Summary,
        SectionKey::Experience,
        SectionKey::Education,
        SectionKey::Skills,
        SectionKey::Projects,
        SectionKey::Certifications,
        SectionKey::Achievements,
        SectionKey::Languages,
        SectionKey::Interests,
    ];

    /// Free-form personal fields shown in the header.
    pub const PERSONAL_FIELDS: [SectionKey; 8] = [
        SectionKey::Name,
        SectionKey::Role,
        SectionKey::Email,
        SectionKey::Phone,
        SectionKey::Location,
        SectionKey::Linkedin,
        SectionKey::Github,
        SectionKey::Portfolio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Name => "name",
            SectionKey::Role => "role",
            SectionKey::Email => "email",
            SectionKey::Phone => "phone",
            SectionKey::Location => "location",
            SectionKey::Linkedin => "linkedin",
            SectionKey::Github => "github",
            SectionKey::Portfolio => "portfolio",
            SectionKey::Summary => "summary",
            SectionKey::Experience => "experience",
            SectionKey::Education => "education",
            SectionKey::Skills => "skills",
            SectionKey::Projects => "projects",
            SectionKey::Certifications => "certifications",
            SectionKey::Achievements => "achievements",
            SectionKey::Languages => "languages",
            SectionKey::Interests => "interests",
        }
    }

    /// Exact, case-sensitive lookup. Unknown names yield `None`.
    pub fn parse(s: &str) -> Option<SectionKey> {
        SectionKey::PERSONAL_FIELDS
            .iter()
            .chain(SectionKey::CONTENT_SECTIONS.iter())
            .copied()
            .find(|k| k.as_str() == s)
    }
}

/// Declared shape of a section's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionShape {
    Scalar,
    ScalarList,
    /// `primary_field` receives bare strings found where a record is expected.
    RecordList { primary_field: &'static str },
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionSpec {
    pub key: SectionKey,
    pub shape: SectionShape,
}

/// Static per-key shape declarations. Normalization walks this in order.
#[derive(Debug, Clone, Serialize)]
pub struct SectionSchema {
    pub sections: Vec<SectionSpec>,
}

impl SectionSchema {
    pub fn new(sections: Vec<SectionSpec>) -> Self {
        Self { sections }
    }

    /// The canonical resume schema used by every template.
    pub fn resume() -> Self {
        use SectionShape::*;

        let shape_of = |key: SectionKey| match key {
            SectionKey::Skills | SectionKey::Languages | SectionKey::Interests => ScalarList,
            SectionKey::Experience | SectionKey::Achievements => RecordList {
                primary_field: "title",
            },
            SectionKey::Education => RecordList {
                primary_field: "degree",
            },
            SectionKey::Projects | SectionKey::Certifications => RecordList {
                primary_field: "name",
            },
            _ => Scalar,
        };

        let sections = SectionKey::PERSONAL_FIELDS
            .iter()
            .chain(SectionKey::CONTENT_SECTIONS.iter())
            .map(|&key| SectionSpec {
                key,
                shape: shape_of(key),
            })
            .collect();

        Self::new(sections)
    }

    pub fn shape_of(&self, key: SectionKey) -> Option<SectionShape> {
        self.sections
            .iter()
            .find(|s| s.key == key)
            .map(|s| s.shape)
    }

    pub fn keys(&self) -> impl Iterator<Item = SectionKey> + '_ {
        self.sections.iter().map(|s| s.key)
    }
}

impl Default for SectionSchema {
    fn default() -> Self {
        Self::resume()
    }
}
