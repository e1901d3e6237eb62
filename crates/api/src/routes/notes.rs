//! Route definitions for the notes resource.
//!
//! Mounted at `/notes` by `api_routes()`.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Note routes.
///
/// ```text
/// POST   /                      -> create_note
/// GET    /active                -> list_active
/// GET    /archived              -> list_archived
/// GET    /category/{category}   -> list_by_category
/// PUT    /{id}                  -> update_note
/// DELETE /{id}                  -> delete_note
/// PUT    /{id}/archive          -> toggle_archive
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(notes::create_note))
        .route("/active", get(notes::list_active))
        .route("/archived", get(notes::list_archived))
        .route("/category/{category}", get(notes::list_by_category))
        .route("/{id}", put(notes::update_note).delete(notes::delete_note))
        .route("/{id}/archive", put(notes::toggle_archive))
}
