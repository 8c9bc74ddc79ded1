//! # Notes HTTP Server Module
//!
//! Axum server exposing the notes store over HTTP.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /notes` - All notes
//! - `GET /notes/:id` - Zero or one notes
//! - `POST /notes` - Create a note
//! - `POST /notes/reset` - Truncate the notes table

pub mod config;
mod errors;
mod extract;
pub mod notes_routes;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, FAILURE_BODY};
pub use extract::JsonOrForm;
pub use server::NotesServer;
