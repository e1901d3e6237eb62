//! Explicit view state of the notes board.
//!
//! Browsing, creating and editing are mutually exclusive, so states such as
//! "editing while creating" cannot be represented.

use notes_core::category::Category;
use notes_core::types::DbId;

/// Which list the board shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Active,
    Archived,
}

/// Tab plus optional category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Browse {
    pub tab: Tab,
    pub category: Option<Category>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Browsing(Browse),
    /// Form open for a new note. `return_to` is restored on close.
    Creating { return_to: Browse },
    /// Form open for an existing note.
    Editing { note_id: DbId, return_to: Browse },
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::Browsing(Browse::default())
    }
}

impl ViewState {
    /// The browse settings currently shown, or to return to after a form.
    pub fn browse(&self) -> Browse {
        match *self {
            ViewState::Browsing(browse) => browse,
            ViewState::Creating { return_to } | ViewState::Editing { return_to, .. } => return_to,
        }
    }

    pub fn is_form_open(&self) -> bool {
        !matches!(self, ViewState::Browsing(_))
    }

    /// Note being edited, if any.
    pub fn edit_target(&self) -> Option<DbId> {
        match *self {
            ViewState::Editing { note_id, .. } => Some(note_id),
            _ => None,
        }
    }

    pub fn open_create(&mut self) {
        *self = ViewState::Creating {
            return_to: self.browse(),
        };
    }

    pub fn open_edit(&mut self, note_id: DbId) {
        *self = ViewState::Editing {
            note_id,
            return_to: self.browse(),
        };
    }

    pub fn close_form(&mut self) {
        *self = ViewState::Browsing(self.browse());
    }

    /// Switch tabs, keeping the category filter. Ignored while a form is open.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        match self {
            ViewState::Browsing(browse) => {
                browse.tab = tab;
                true
            }
            _ => false,
        }
    }

    /// Set or clear the category filter. Ignored while a form is open.
    pub fn select_category(&mut self, category: Option<Category>) -> bool {
        match self {
            ViewState::Browsing(browse) => {
                browse.category = category;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_browsing_active_unfiltered() {
        let state = ViewState::default();
        assert_eq!(state, ViewState::Browsing(Browse::default()));
        assert_eq!(state.browse().tab, Tab::Active);
        assert!(state.browse().category.is_none());
    }

    #[test]
    fn create_then_close_restores_browse() {
        let mut state = ViewState::default();
        state.select_tab(Tab::Archived);
        state.select_category(Some(Category::Study));
        state.open_create();
        assert!(state.is_form_open());
        assert!(state.edit_target().is_none());

        state.close_form();
        assert_eq!(
            state,
            ViewState::Browsing(Browse {
                tab: Tab::Archived,
                category: Some(Category::Study),
            })
        );
    }

    #[test]
    fn edit_replaces_create() {
        let mut state = ViewState::default();
        state.open_create();
        state.open_edit(9);
        assert_eq!(state.edit_target(), Some(9));
        assert_eq!(state.browse(), Browse::default());
    }

    #[test]
    fn tab_and_filter_frozen_while_form_open() {
        let mut state = ViewState::default();
        state.open_edit(1);
        assert!(!state.select_tab(Tab::Archived));
        assert!(!state.select_category(Some(Category::Work)));
        assert_eq!(state.browse(), Browse::default());
    }
}
