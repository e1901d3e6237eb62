//! Domain types and validation rules for the notes service.
//!
//! Nothing in this crate performs I/O; the database and HTTP layers depend on
//! it for shared identifiers, errors, and the note field rules.

pub mod category;
pub mod error;
pub mod notes;
pub mod types;
