//! CLI command implementations
//!
//! Each command loads configuration, installs logging, builds its own tokio
//! runtime and blocks on it.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http_server::{HttpServerConfig, NotesServer};
use crate::observability::init_logging;
use crate::store::{self, DatabaseConfig, SqliteNoteStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Config file looked up when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "./notesd.json";

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `./notesd.json` is read if
    /// present and defaults are used otherwise. Environment overrides are
    /// applied last.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Load configuration reading overrides through `lookup`
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> CliResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_PATH))?
            }
            None => Self::default(),
        };

        config.apply_env(lookup)?;
        config.validate()?;

        Ok(config)
    }

    fn from_file(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
    }

    /// Apply `NOTES_*` overrides using `lookup` to read variables
    pub fn apply_env<F>(&mut self, lookup: F) -> CliResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("NOTES_DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(host) = lookup("NOTES_HOST") {
            self.http.host = host;
        }
        if let Some(port) = lookup("NOTES_PORT") {
            self.http.port = port
                .parse()
                .map_err(|_| CliError::config_error(format!("Invalid NOTES_PORT: '{}'", port)))?;
        }
        if let Some(dir) = lookup("NOTES_PUBLIC_DIR") {
            self.http.public_dir = Some(PathBuf::from(dir));
        }
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.http.port == 0 {
            return Err(CliError::config_error("http.port must be > 0"));
        }

        if self.database.url.trim().is_empty() {
            return Err(CliError::config_error("database.url must not be empty"));
        }

        if self.database.max_connections == 0 {
            return Err(CliError::config_error(
                "database.max_connections must be > 0",
            ));
        }

        Ok(())
    }
}

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run a parsed command
pub fn run_command(cmd: Command) -> CliResult<()> {
    init_logging();

    match cmd {
        Command::Init { config } => init(config.as_deref()),
        Command::Serve { config, port } => serve(config.as_deref(), port),
    }
}

/// Create the database and notes table
pub fn init(config_path: Option<&Path>) -> CliResult<()> {
    init_database(&Config::load(config_path)?)
}

/// Create the database described by `config`
pub fn init_database(config: &Config) -> CliResult<()> {
    runtime()?.block_on(async {
        let pool = store::connect(&config.database).await?;
        pool.close().await;
        Ok::<_, CliError>(())
    })?;

    tracing::info!(url = %config.database.url, "notes database initialized");
    Ok(())
}

/// Start the HTTP server.
///
/// The pool is created here, once, and handed to the store; the server
/// only sees the store.
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let mut config = Config::load(config_path)?;
    if let Some(port) = port {
        config.http.port = port;
        config.validate()?;
    }

    runtime()?.block_on(async {
        let pool = store::connect(&config.database).await?;
        let note_store = Arc::new(SqliteNoteStore::new(pool.clone()));
        let server = NotesServer::with_config(config.http.clone(), note_store);

        let result = server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)));

        pool.close().await;
        result
    })
}

fn runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))
}
