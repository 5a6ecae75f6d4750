//! Liveness and assistant CRUD handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::store::Assistant;

/// Request body for create and update. `name` stays optional so that an
/// absent or null field reaches the blank-name check instead of failing
/// deserialization.
#[derive(Debug, Deserialize)]
pub struct AssistantPayload {
    name: Option<String>,
}

impl AssistantPayload {
    /// Absent, null, and `""` all count as missing.
    fn into_name(self) -> Option<String> {
        self.name.filter(|name| !name.is_empty())
    }
}

/// GET /
pub async fn root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "message": state.greeting.as_ref() }))
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// GET /assistants
pub async fn list_assistants(State(state): State<AppState>) -> Json<Vec<Assistant>> {
    Json(state.store.list())
}

/// GET /assistants/{id}
pub async fn get_assistant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Assistant>, ApiError> {
    let id = parse_id(&id).ok_or(ApiError::NotFound)?;
    state.store.get(id).map(Json).ok_or(ApiError::NotFound)
}

/// POST /assistants
pub async fn create_assistant(
    State(state): State<AppState>,
    Json(payload): Json<AssistantPayload>,
) -> Result<(StatusCode, Json<Assistant>), ApiError> {
    let name = payload.into_name().ok_or(ApiError::NameRequired)?;
    let created = state.store.create(name);

    tracing::debug!(id = created.id, "Assistant created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /assistants/{id}
///
/// Existence is checked before the name: a request for a missing id gets
/// 404 even when its body would also fail validation.
pub async fn update_assistant(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<AssistantPayload>,
) -> Result<Json<Assistant>, ApiError> {
    let id = parse_id(&id).ok_or(ApiError::NotFound)?;
    if state.store.get(id).is_none() {
        return Err(ApiError::NotFound);
    }

    let name = payload.into_name().ok_or(ApiError::NameRequired)?;
    state.store.rename(id, name).map(Json).ok_or(ApiError::NotFound)
}

/// DELETE /assistants/{id}
pub async fn delete_assistant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id).ok_or(ApiError::NotFound)?;
    if state.store.remove(id) {
        tracing::debug!(id, "Assistant deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

/// A path segment that does not parse as an id behaves as an id no record
/// has, so lookups fall through to 404 rather than a parse error.
fn parse_id(raw: &str) -> Option<u64> {
    raw.parse().ok()
}
