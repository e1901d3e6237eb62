pub mod health;
pub mod notes;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /notes                                create
/// /notes/active                         list active
/// /notes/archived                       list archived
/// /notes/category/{category}            list active by category
/// /notes/{id}                           update, delete
/// /notes/{id}/archive                   toggle archived flag
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/notes", notes::router())
}
