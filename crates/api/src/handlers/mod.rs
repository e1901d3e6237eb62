//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input, delegate to the corresponding repository in
//! `notes_db`, and map errors via [`AppError`](crate::error::AppError).

pub mod notes;
