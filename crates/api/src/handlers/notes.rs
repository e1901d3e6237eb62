//! Handlers for the `/notes` resource.
//!
//! Create, list (active, archived, by category), partial update, delete,
//! and archive toggle.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use notes_core::error::CoreError;
use notes_core::notes::{require_category, resolve_category, NOTE_ENTITY};
use notes_core::types::DbId;
use notes_db::models::note::{CreateNote, Note, UpdateNote};
use notes_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: NOTE_ENTITY,
        id,
    })
}

/// POST /notes
///
/// Create a note. New notes are always active; category defaults to `Others`.
pub async fn create_note(
    State(state): State<AppState>,
    Json(input): Json<CreateNote>,
) -> AppResult<(StatusCode, Json<Note>)> {
    input.validate()?;
    let category = resolve_category(input.category.as_deref())?;

    let note = NoteRepo::create(&state.pool, &input, category).await?;

    tracing::info!(note_id = note.id, category = %category, "Note created");

    Ok((StatusCode::CREATED, Json(note)))
}

/// GET /notes/active
pub async fn list_active(State(state): State<AppState>) -> AppResult<Json<Vec<Note>>> {
    let notes = NoteRepo::list_active(&state.pool).await?;
    Ok(Json(notes))
}

/// GET /notes/archived
pub async fn list_archived(State(state): State<AppState>) -> AppResult<Json<Vec<Note>>> {
    let notes = NoteRepo::list_archived(&state.pool).await?;
    Ok(Json(notes))
}

/// GET /notes/category/{category}
///
/// Active notes in one category. Archived notes are excluded even when the
/// category matches.
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<Vec<Note>>> {
    let category = require_category(&category)?;
    let notes = NoteRepo::list_active_by_category(&state.pool, category).await?;
    Ok(Json(notes))
}

/// PUT /notes/{id}
///
/// Partial update of title, content and category. `archived` is never
/// touched here; use the archive toggle.
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNote>,
) -> AppResult<Json<Note>> {
    input.validate()?;
    let category = input
        .category
        .as_deref()
        .map(require_category)
        .transpose()?;

    let note = NoteRepo::update(&state.pool, id, &input, category)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(note_id = id, "Note updated");

    Ok(Json(note))
}

/// DELETE /notes/{id}
///
/// Unconditional delete. A missing note is not an error.
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = NoteRepo::delete(&state.pool, id).await?;

    if deleted {
        tracing::info!(note_id = id, "Note deleted");
    } else {
        tracing::debug!(note_id = id, "Delete of missing note ignored");
    }

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /notes/{id}/archive
///
/// Flip the archived flag. Responds 404 when the note does not exist.
pub async fn toggle_archive(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Note>> {
    let note = NoteRepo::toggle_archive(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(note_id = id, archived = note.archived, "Note archive toggled");

    Ok(Json(note))
}
