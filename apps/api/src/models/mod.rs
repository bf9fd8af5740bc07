pub mod document;
pub mod section;

pub use document::{Record, ResumeDocument, SectionValue};
pub use section::{SectionKey, SectionSchema, SectionShape};
