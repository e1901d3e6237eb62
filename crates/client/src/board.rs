//! The notes board: lists, filters, form and per-note actions.
//!
//! The board keeps no incremental state. After every mutation it refetches
//! both the active and the archived list in full.

use std::fmt;

use notes_core::category::Category;
use notes_core::types::DbId;

use crate::api::NotesApi;
use crate::error::{ClientError, ClientResult};
use crate::form::NoteForm;
use crate::model::Note;
use crate::view::{Tab, ViewState};

/// User-facing outcome of a board action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Created,
    Updated,
    Archived,
    Unarchived,
    Deleted,
    /// The target note no longer exists.
    NothingChanged,
    /// The user declined the confirmation.
    Cancelled,
    /// Refused locally; no request was sent.
    Blocked(String),
    /// Transport or server failure.
    Failed,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Created => f.write_str("Note created!"),
            Notice::Updated => f.write_str("Note updated!"),
            Notice::Archived => f.write_str("Note archived"),
            Notice::Unarchived => f.write_str("Note restored"),
            Notice::Deleted => f.write_str("Note deleted"),
            Notice::NothingChanged => f.write_str("Nothing changed"),
            Notice::Cancelled => f.write_str("Cancelled"),
            Notice::Blocked(reason) => f.write_str(reason),
            Notice::Failed => f.write_str("Something went wrong. Please try again."),
        }
    }
}

pub struct NoteBoard<A> {
    api: A,
    active: Vec<Note>,
    archived: Vec<Note>,
    view: ViewState,
    search: Option<String>,
}

impl<A: NotesApi> NoteBoard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            active: Vec::new(),
            archived: Vec::new(),
            view: ViewState::default(),
            search: None,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn active(&self) -> &[Note] {
        &self.active
    }

    pub fn archived(&self) -> &[Note] {
        &self.archived
    }

    /// Refetch both lists. On failure the previous lists are kept.
    pub async fn reload(&mut self) -> ClientResult<()> {
        let active = self.api.list_active().await?;
        let archived = self.api.list_archived().await?;
        tracing::debug!(active = active.len(), archived = archived.len(), "Board reloaded");
        self.active = active;
        self.archived = archived;
        Ok(())
    }

    pub fn select_tab(&mut self, tab: Tab) -> bool {
        self.view.select_tab(tab)
    }

    pub fn select_category(&mut self, category: Option<Category>) -> bool {
        self.view.select_category(category)
    }

    /// Narrow the visible notes to those whose title or content contains
    /// `query`, ignoring case. A blank query clears the search.
    pub fn set_search(&mut self, query: Option<String>) {
        self.search = query
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty());
    }

    /// Notes of the current tab, intersected with the category filter and
    /// the search query.
    pub fn visible_notes(&self) -> Vec<&Note> {
        let browse = self.view.browse();
        let source = match browse.tab {
            Tab::Active => &self.active,
            Tab::Archived => &self.archived,
        };
        source
            .iter()
            .filter(|note| browse.category.map_or(true, |c| note.category == c))
            .filter(|note| match &self.search {
                None => true,
                Some(query) => {
                    note.title.to_lowercase().contains(query)
                        || note.content.to_lowercase().contains(query)
                }
            })
            .collect()
    }

    fn find(&self, id: DbId) -> Option<&Note> {
        self.active
            .iter()
            .chain(self.archived.iter())
            .find(|note| note.id == id)
    }

    /// Open an empty form for a new note.
    pub fn open_create(&mut self) -> NoteForm {
        self.view.open_create();
        NoteForm::default()
    }

    /// Open the form prefilled from a loaded note. `None` if it is not loaded.
    pub fn open_edit(&mut self, id: DbId) -> Option<NoteForm> {
        let form = NoteForm::for_note(self.find(id)?);
        self.view.open_edit(id);
        Some(form)
    }

    pub fn cancel_form(&mut self) {
        self.view.close_form();
    }

    /// Submit the open form: create or update depending on the view state.
    ///
    /// On failure the form stays open.
    pub async fn submit(&mut self, form: &NoteForm) -> Notice {
        if let Err(ClientError::Validation(reason)) = form.validate() {
            return Notice::Blocked(reason);
        }

        let result = match self.view {
            ViewState::Creating { .. } => self
                .api
                .create(&form.to_new_note())
                .await
                .map(|_| Notice::Created),
            ViewState::Editing { note_id, .. } => self
                .api
                .update(note_id, &form.to_changes())
                .await
                .map(|_| Notice::Updated),
            ViewState::Browsing(_) => return Notice::Blocked("No form is open".to_string()),
        };

        match result {
            Ok(notice) => {
                self.view.close_form();
                self.after_mutation(notice).await
            }
            Err(e) => {
                tracing::warn!(error = %e, "Saving note failed");
                Notice::Failed
            }
        }
    }

    /// Flip a note between the active and archived lists.
    pub async fn toggle_archive(&mut self, id: DbId) -> Notice {
        let notice = match self.api.toggle_archive(id).await {
            Ok(Some(note)) if note.archived => Notice::Archived,
            Ok(Some(_)) => Notice::Unarchived,
            Ok(None) => Notice::NothingChanged,
            Err(e) => {
                tracing::warn!(note_id = id, error = %e, "Toggling archive failed");
                return Notice::Failed;
            }
        };
        self.after_mutation(notice).await
    }

    /// Delete a note after `confirm` approves it.
    pub async fn delete(&mut self, id: DbId, confirm: impl FnOnce(&Note) -> bool) -> Notice {
        let Some(note) = self.find(id) else {
            return Notice::NothingChanged;
        };
        if !confirm(note) {
            return Notice::Cancelled;
        }

        if let Err(e) = self.api.delete(id).await {
            tracing::warn!(note_id = id, error = %e, "Deleting note failed");
            return Notice::Failed;
        }
        if self.view.edit_target() == Some(id) {
            self.view.close_form();
        }
        self.after_mutation(Notice::Deleted).await
    }

    async fn after_mutation(&mut self, notice: Notice) -> Notice {
        match self.reload().await {
            Ok(()) => notice,
            Err(e) => {
                tracing::warn!(error = %e, "Reload after mutation failed");
                Notice::Failed
            }
        }
    }
}
