//! Note repository
//!
//! One statement per operation; `create_note` is an insert followed by a
//! separate re-select. Nothing here runs inside a caller-visible
//! transaction.

use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;

use super::errors::{StoreError, StoreResult};
use super::note::{NewNote, Note, ResetOutcome};

// Rows seeded outside this service may hold NULL text
const SELECT_NOTES: &str =
    "SELECT id, COALESCE(title, '') AS title, COALESCE(contents, '') AS contents FROM notes";

/// Persistence operations the HTTP layer depends on
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Every note currently stored, in the store's default order
    async fn list_notes(&self) -> StoreResult<Vec<Note>>;

    /// Zero or one notes whose id equals `id`.
    ///
    /// `id` is passed through unparsed; a value that matches no row yields
    /// an empty vector, not an error.
    async fn get_note(&self, id: &str) -> StoreResult<Vec<Note>>;

    /// Insert a note and return it as persisted
    async fn create_note(&self, note: NewNote) -> StoreResult<Note>;

    /// Remove all notes and restart id assignment
    async fn reset_notes(&self) -> StoreResult<ResetOutcome>;
}

/// SQLite-backed [`NoteStore`]
#[derive(Debug, Clone)]
pub struct SqliteNoteStore {
    pool: SqlitePool,
}

impl SqliteNoteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl NoteStore for SqliteNoteStore {
    async fn list_notes(&self) -> StoreResult<Vec<Note>> {
        let notes = sqlx::query_as::<_, Note>(SELECT_NOTES)
            .fetch_all(&self.pool)
            .await?;
        Ok(notes)
    }

    async fn get_note(&self, id: &str) -> StoreResult<Vec<Note>> {
        let sql = format!("{} WHERE id = ?", SELECT_NOTES);
        let notes = sqlx::query_as::<_, Note>(&sql)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;
        Ok(notes)
    }

    async fn create_note(&self, note: NewNote) -> StoreResult<Note> {
        let result = sqlx::query("INSERT INTO notes (title, contents) VALUES (?, ?)")
            .bind(&note.title)
            .bind(&note.contents)
            .execute(&self.pool)
            .await?;
        let id = result.last_insert_rowid();
        tracing::debug!(id, "note inserted");

        self.get_note(&id.to_string())
            .await?
            .into_iter()
            .next()
            .ok_or(StoreError::MissingAfterInsert(id))
    }

    async fn reset_notes(&self) -> StoreResult<ResetOutcome> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM notes").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM sqlite_sequence WHERE name = 'notes'")
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!("notes table reset");

        Ok(ResetOutcome::done())
    }
}
