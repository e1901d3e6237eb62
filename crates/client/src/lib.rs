//! Client for the notes API.
//!
//! [`api`] maps the six server operations onto HTTP calls, [`form`] and
//! [`view`] hold the entry-form rules and the explicit view state, and
//! [`board`] ties them together: every mutation is followed by a full reload
//! of the active and archived lists.

pub mod api;
pub mod board;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod view;

pub use api::{HttpNotesApi, NotesApi};
pub use board::{Notice, NoteBoard};
pub use config::ClientConfig;
pub use error::ClientError;
