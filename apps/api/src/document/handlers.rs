//! Axum route handlers for the Document API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::contact::links::{contact_links, ContactLink};
use crate::document::normalize::normalize_document;
use crate::document::order::{validate_section_order, visible_sections};
use crate::document::presence::has_content;
use crate::document::render::render_safe;
use crate::errors::AppError;
use crate::models::{ResumeDocument, SectionKey, SectionSchema};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct NormalizeRequest {
    #[serde(default)]
    pub document: Value,
    #[serde(default)]
    pub section_order: Value,
    #[serde(default)]
    pub editing: bool,
}

#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub document: ResumeDocument,
    pub section_order: Vec<SectionKey>,
    pub visible_sections: Vec<SectionKey>,
    pub contact_links: Vec<ContactLink>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateFieldRequest {
    #[serde(default)]
    pub document: Value,
    pub section: String,
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Serialize)]
pub struct UpdateFieldResponse {
    pub document: ResumeDocument,
}

#[derive(Debug, Deserialize)]
pub struct HasContentRequest {
    #[serde(default)]
    pub document: Value,
    pub section: String,
    #[serde(default)]
    pub editing: bool,
}

#[derive(Debug, Serialize)]
pub struct HasContentResponse {
    pub section: SectionKey,
    pub has_content: bool,
}

#[derive(Debug, Deserialize)]
pub struct RenderSafeRequest {
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub fallback: String,
}

#[derive(Debug, Serialize)]
pub struct RenderSafeResponse {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct SectionOrderRequest {
    #[serde(default)]
    pub order: Value,
    /// Defaults to the content sections when omitted.
    pub universe: Option<Vec<SectionKey>>,
}

#[derive(Debug, Serialize)]
pub struct SectionOrderResponse {
    pub order: Vec<SectionKey>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/schema
pub async fn handle_get_schema(State(state): State<AppState>) -> Json<SectionSchema> {
    Json(state.schema.as_ref().clone())
}

/// POST /api/v1/documents/normalize
///
/// Full load-time pass: canonical document plus everything a renderer needs to lay it out.
pub async fn handle_normalize(
    State(state): State<AppState>,
    Json(request): Json<NormalizeRequest>,
) -> Json<NormalizeResponse> {
    let document = normalize_document(&request.document, &state.schema);
    let section_order =
        validate_section_order(&request.section_order, &SectionKey::CONTENT_SECTIONS);
    let visible = visible_sections(&document, &request.section_order, request.editing);
    let contact_links = contact_links(&document);

    debug!(
        "Normalized document: {} visible sections, {} contact links",
        visible.len(),
        contact_links.len()
    );

    Json(NormalizeResponse {
        document,
        section_order,
        visible_sections: visible,
        contact_links,
    })
}

/// POST /api/v1/documents/field
///
/// Normalize + edit: the submitted document gets the full load-time pass (a no-op for an
/// already normalized one), then `value` is coerced into `section` alone.
pub async fn handle_update_field(
    State(state): State<AppState>,
    Json(request): Json<UpdateFieldRequest>,
) -> Result<Json<UpdateFieldResponse>, AppError> {
    let key = parse_section(&request.section)?;
    if state.schema.shape_of(key).is_none() {
        return Err(AppError::Validation(format!(
            "section '{}' is not declared in the active schema",
            request.section
        )));
    }

    let mut document = normalize_document(&request.document, &state.schema);
    document.set_field(&state.schema, key, &request.value);
    debug!("Updated field '{}'", key.as_str());

    Ok(Json(UpdateFieldResponse { document }))
}

/// POST /api/v1/documents/has-content
pub async fn handle_has_content(
    Json(request): Json<HasContentRequest>,
) -> Result<Json<HasContentResponse>, AppError> {
    let section = parse_section(&request.section)?;
    Ok(Json(HasContentResponse {
        section,
        has_content: has_content(&request.document, section, request.editing),
    }))
}

/// POST /api/v1/render-safe
pub async fn handle_render_safe(
    Json(request): Json<RenderSafeRequest>,
) -> Json<RenderSafeResponse> {
    Json(RenderSafeResponse {
        text: render_safe(&request.value, &request.fallback),
    })
}

/// POST /api/v1/sections/order
pub async fn handle_section_order(
    Json(request): Json<SectionOrderRequest>,
) -> Json<SectionOrderResponse> {
    let universe = request
        .universe
        .unwrap_or_else(|| SectionKey::CONTENT_SECTIONS.to_vec());
    Json(SectionOrderResponse {
        order: validate_section_order(&request.order, &universe),
    })
}

fn parse_section(name: &str) -> Result<SectionKey, AppError> {
    SectionKey::parse(name)
        .ok_or_else(|| AppError::Validation(format!("unknown section '{name}'")))
}
