//! Pool construction and initial table creation

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use super::config::DatabaseConfig;
use super::errors::StoreResult;

const CREATE_NOTES_TABLE: &str = "CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT,
    contents TEXT
)";

/// Open the pool described by `config` and make sure the notes table exists.
///
/// An in-memory database lives only as long as its connection, so such URLs
/// get a single connection that is never recycled.
pub async fn connect(config: &DatabaseConfig) -> StoreResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_millis(config.busy_timeout_ms));

    let pool = if is_in_memory(&config.url) {
        tracing::debug!(url = %config.url, "in-memory database, using a single connection");
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?
    };

    init_schema(&pool).await?;
    tracing::info!(
        url = %config.url,
        max_connections = config.max_connections,
        "database pool ready"
    );

    Ok(pool)
}

/// Create the notes table if it is missing
pub async fn init_schema(pool: &SqlitePool) -> StoreResult<()> {
    sqlx::query(CREATE_NOTES_TABLE).execute(pool).await?;
    Ok(())
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_detection() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file:notes?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://notes.db"));
    }

    #[tokio::test]
    async fn test_connect_in_memory_creates_table() {
        let pool = connect(&DatabaseConfig::with_url("sqlite::memory:"))
            .await
            .unwrap();

        let name: Option<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'notes'",
        )
        .fetch_optional(&pool)
        .await
        .unwrap();
        assert_eq!(name.as_deref(), Some("notes"));
    }

    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let pool = connect(&DatabaseConfig::with_url("sqlite::memory:"))
            .await
            .unwrap();

        init_schema(&pool).await.unwrap();
        init_schema(&pool).await.unwrap();
    }
}
