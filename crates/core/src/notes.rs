//! Note field rules shared by the API boundary and the client form.

use validator::ValidationError;

use crate::category::Category;
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Entity name used in not-found errors.
pub const NOTE_ENTITY: &str = "Note";

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// True when the value is empty or only whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// `validator` hook for note title and content.
///
/// Rejects blank strings and NUL characters, which PostgreSQL `TEXT`
/// cannot store.
pub fn validate_note_text(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    if value.contains('\0') {
        let mut err = ValidationError::new("nul");
        err.message = Some("must not contain NUL characters".into());
        return Err(err);
    }
    Ok(())
}

/// Resolve an optional category label from a request body.
///
/// An absent label yields [`Category::Others`]; a label outside the set
/// (canonical or legacy) is a validation error.
pub fn resolve_category(label: Option<&str>) -> Result<Category, CoreError> {
    match label {
        None => Ok(Category::default()),
        Some(label) => label
            .parse::<Category>()
            .map_err(|e| CoreError::Validation(e.to_string())),
    }
}

/// Resolve a category label that must be present (e.g. a path segment).
pub fn require_category(label: &str) -> Result<Category, CoreError> {
    resolve_category(Some(label))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
