use axum::Json;
use serde::{Deserialize, Serialize};

use crate::contact::links::{resolve_contact_uri, ContactKind};

#[derive(Debug, Deserialize)]
pub struct ResolveContactRequest {
    pub kind: String,
    pub value: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResolveContactResponse {
    pub kind: ContactKind,
    pub uri: Option<String>,
}

/// POST /api/v1/contacts/resolve
pub async fn handle_resolve_contact(
    Json(request): Json<ResolveContactRequest>,
) -> Json<ResolveContactResponse> {
    let kind = ContactKind::from_label(&request.kind);
    Json(ResolveContactResponse {
        kind,
        uri: resolve_contact_uri(kind, request.value.as_deref()),
    })
}
