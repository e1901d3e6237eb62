//! Note model.

use notes_core::notes::validate_note_text;
use notes_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `notes` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub category: String,
    pub archived: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new note.
///
/// There is deliberately no `archived` field: new notes always start active,
/// and any `archived` key in the request body is dropped by serde.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateNote {
    #[validate(custom(function = "validate_note_text"))]
    pub title: String,
    #[validate(custom(function = "validate_note_text"))]
    pub content: String,
    pub category: Option<String>,
}

/// DTO for a partial note update. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateNote {
    #[validate(custom(function = "validate_note_text"))]
    pub title: Option<String>,
    #[validate(custom(function = "validate_note_text"))]
    pub content: Option<String>,
    pub category: Option<String>,
}
