use std::sync::Arc;

use crate::config::Config;
use crate::models::SectionSchema;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Section shapes every document is normalized against. Immutable after startup.
    pub schema: Arc<SectionSchema>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            schema: Arc::new(SectionSchema::resume()),
        }
    }
}
