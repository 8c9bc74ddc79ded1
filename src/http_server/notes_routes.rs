//! Notes HTTP Routes
//!
//! CRUD endpoints over the notes store. Handlers hold no logic beyond
//! extracting input, calling the store once, and serializing the result.

use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, rejection::QueryRejection, Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::store::{NewNote, Note, NoteStore, ResetOutcome};

use super::errors::{ApiError, ApiResult};
use super::extract::JsonOrForm;

// ==================
// Shared State
// ==================

/// Notes state shared across handlers
#[derive(Clone)]
pub struct NotesState {
    pub store: Arc<dyn NoteStore>,
}

impl NotesState {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }
}

// ==================
// Request Types
// ==================

/// Query string of `GET /notes/:id`
#[derive(Debug, Default, Deserialize)]
pub struct NoteIdQuery {
    #[serde(default)]
    pub id: Option<String>,
}

// ==================
// Notes Routes
// ==================

/// Create notes routes
pub fn notes_routes(state: NotesState) -> Router {
    Router::new()
        .route("/notes", get(list_notes_handler).post(create_note_handler))
        .route("/notes/reset", post(reset_notes_handler))
        .route("/notes/:id", get(get_note_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_notes_handler(State(state): State<NotesState>) -> ApiResult<Json<Vec<Note>>> {
    let notes = state.store.list_notes().await?;
    Ok(Json(notes))
}

/// The `id` query parameter wins over the path segment; the path is only
/// consulted when the query string carries no `id`.
async fn get_note_handler(
    State(state): State<NotesState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<NoteIdQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Note>>> {
    let Query(query) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let id = match query.id {
        Some(id) => id,
        None => {
            let Path(id) =
                path.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
            id
        }
    };

    let notes = state.store.get_note(&id).await?;
    Ok(Json(notes))
}

async fn create_note_handler(
    State(state): State<NotesState>,
    JsonOrForm(note): JsonOrForm<NewNote>,
) -> ApiResult<Json<Note>> {
    let created = state.store.create_note(note).await?;
    tracing::info!(id = created.id, "note created");
    Ok(Json(created))
}

async fn reset_notes_handler(State(state): State<NotesState>) -> ApiResult<Json<ResetOutcome>> {
    let outcome = state.store.reset_notes().await?;
    Ok(Json(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_query_is_optional() {
        let query: NoteIdQuery = serde_json::from_str("{}").unwrap();
        assert!(query.id.is_none());
    }
}
