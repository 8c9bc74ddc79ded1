//! notesd - A minimal notes HTTP API
//!
//! Clients create notes, list them, fetch one by id and reset the table.
//! The HTTP layer in [`http_server`] calls the persistence layer in
//! [`store`] through the [`store::NoteStore`] trait.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
