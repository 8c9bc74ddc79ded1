//! # Notes Store
//!
//! Persistence layer for notes. Owns the connection pool and every
//! statement executed against it; the HTTP layer only sees the
//! [`NoteStore`] trait.
//!
//! # Operations
//!
//! - `list_notes` - full-table read
//! - `get_note` - zero or one rows by id
//! - `create_note` - insert, then re-select by the assigned id
//! - `reset_notes` - truncate and reset the id sequence

pub mod config;
mod errors;
mod note;
mod pool;
mod repository;

pub use config::DatabaseConfig;
pub use errors::{StoreError, StoreResult};
pub use note::{NewNote, Note, ResetOutcome, RESET_MESSAGE};
pub use pool::{connect, init_schema};
pub use repository::{NoteStore, SqliteNoteStore};
