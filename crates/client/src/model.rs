//! Wire types shared with the notes API.

use notes_core::category::Category;
use notes_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

/// A note as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub archived: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Body of `POST /notes`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub category: Category,
}

/// Body of `PUT /notes/{id}`. `None` fields are omitted and left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NoteChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// Error body produced by the API.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_parses_api_json() {
        let json = r#"{
            "id": 7,
            "title": "Groceries",
            "content": "Milk, eggs",
            "category": "Personal",
            "archived": false,
            "created_at": "2025-03-01T10:00:00Z",
            "updated_at": "2025-03-01T10:00:00Z"
        }"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.id, 7);
        assert_eq!(note.category, Category::Personal);
        assert!(!note.archived);
    }

    #[test]
    fn changes_omit_unset_fields() {
        let changes = NoteChanges {
            content: Some("new".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&changes).unwrap();
        assert_eq!(json, serde_json::json!({"content": "new"}));
    }
}
