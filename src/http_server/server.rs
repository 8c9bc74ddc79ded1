//! # HTTP Server
//!
//! Main HTTP server combining the notes and health routers.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::store::NoteStore;

use super::config::HttpServerConfig;
use super::notes_routes::{notes_routes, NotesState};
use super::observability_routes::health_routes;

/// HTTP server for the notes API
pub struct NotesServer {
    config: HttpServerConfig,
    router: Router,
}

impl NotesServer {
    /// Create a server over `store` with default configuration
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self::with_config(HttpServerConfig::default(), store)
    }

    /// Create a server over `store` with custom configuration
    pub fn with_config(config: HttpServerConfig, store: Arc<dyn NoteStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, store: Arc<dyn NoteStore>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        let mut router = Router::new()
            .merge(health_routes())
            .merge(notes_routes(NotesState::new(store)));

        // Anything no route claims falls through to the public directory
        if let Some(dir) = &config.public_dir {
            router = router.fallback_service(ServeDir::new(dir));
        }

        router.layer(TraceLayer::new_for_http()).layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "notes API listening");
        if let Some(dir) = &self.config.public_dir {
            tracing::info!(dir = %dir.display(), "serving static files");
        }

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("notes API stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{NewNote, Note, ResetOutcome, StoreResult};
    use async_trait::async_trait;

    struct EmptyStore;

    #[async_trait]
    impl NoteStore for EmptyStore {
        async fn list_notes(&self) -> StoreResult<Vec<Note>> {
            Ok(vec![])
        }

        async fn get_note(&self, _id: &str) -> StoreResult<Vec<Note>> {
            Ok(vec![])
        }

        async fn create_note(&self, note: NewNote) -> StoreResult<Note> {
            Ok(Note {
                id: 1,
                title: note.title,
                contents: note.contents,
            })
        }

        async fn reset_notes(&self) -> StoreResult<ResetOutcome> {
            Ok(ResetOutcome::done())
        }
    }

    #[test]
    fn test_server_creation() {
        let server = NotesServer::new(Arc::new(EmptyStore));
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(9090);
        let server = NotesServer::with_config(config, Arc::new(EmptyStore));
        assert_eq!(server.socket_addr(), "0.0.0.0:9090");
    }

    #[test]
    fn test_router_builds_with_public_dir() {
        let config = HttpServerConfig {
            public_dir: Some("public".into()),
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let _router = NotesServer::with_config(config, Arc::new(EmptyStore)).router();
    }
}
