//! The create/edit entry form.

use notes_core::category::Category;
use notes_core::notes::is_blank;

use crate::error::{ClientError, ClientResult};
use crate::model::{NewNote, Note, NoteChanges};

/// Field values of the note form, shared by create and edit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteForm {
    pub title: String,
    pub content: String,
    pub category: Category,
}

impl NoteForm {
    pub fn new(title: impl Into<String>, content: impl Into<String>, category: Category) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category,
        }
    }

    /// Prefill the form from an existing note.
    pub fn for_note(note: &Note) -> Self {
        Self::new(note.title.clone(), note.content.clone(), note.category)
    }

    /// Title and content are both required before anything is sent.
    pub fn validate(&self) -> ClientResult<()> {
        if is_blank(&self.title) || is_blank(&self.content) {
            return Err(ClientError::Validation(
                "Please fill in both the title and the content".to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_new_note(&self) -> NewNote {
        NewNote {
            title: self.title.clone(),
            content: self.content.clone(),
            category: self.category,
        }
    }

    pub fn to_changes(&self) -> NoteChanges {
        NoteChanges {
            title: Some(self.title.clone()),
            content: Some(self.content.clone()),
            category: Some(self.category),
        }
    }
}
