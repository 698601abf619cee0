//! BobApp Server - HTTP API for jokes
//!
//! This crate provides the web backend:
//! - `GET /api/joke` returning a random joke as JSON
//! - Two debug endpoints requiring a `param` query string
//! - Request tracing and CORS for the browser front end

mod error;
mod middleware;
mod routes;
mod state;

use axum::{middleware as axum_middleware, routing::get, Router};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use bobapp_core::JokeCatalog;

pub use error::ApiError;
pub use state::AppState;

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    /// JSON file of jokes; the bundled catalog is used when unset
    pub jokes_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            jokes_file: None,
        }
    }
}

/// Create the router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Jokes
        .route("/api/joke", get(routes::joke::get_random_joke))
        // Debug endpoints
        .route("/api/joke/test", get(routes::joke::test))
        .route("/api/joke/test2", get(routes::joke::test2))
        // Shared state
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(axum_middleware::from_fn(middleware::trace))
}

/// Build the joke catalog named by the config
pub fn load_catalog(config: &ServerConfig) -> anyhow::Result<JokeCatalog> {
    let catalog = match &config.jokes_file {
        Some(path) => JokeCatalog::load(path)?,
        None => JokeCatalog::builtin()?,
    };

    if catalog.is_empty() {
        tracing::warn!("Joke catalog is empty; /api/joke will answer 500");
    }

    let blank = catalog
        .jokes()
        .iter()
        .filter(|j| j.joke.trim().is_empty() || j.response.trim().is_empty())
        .count();
    if blank > 0 {
        tracing::warn!("{} jokes have an empty setup or punchline", blank);
    }

    Ok(catalog)
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let catalog = load_catalog(&config)?;
    let joke_count = catalog.len();
    let state = Arc::new(AppState::new(Arc::new(catalog)));
    let router = create_router(state);

    tracing::info!("BobApp Server starting on http://0.0.0.0:{}", config.port);
    match &config.jokes_file {
        Some(path) => tracing::info!("Serving {} jokes from: {}", joke_count, path.display()),
        None => tracing::info!("Serving {} bundled jokes", joke_count),
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bobapp_core::{Joke, JokeProvider};
    use std::io::Write;

    #[test]
    fn test_load_catalog_defaults_to_builtin() {
        let catalog = load_catalog(&ServerConfig::default()).unwrap();
        let builtin = JokeCatalog::builtin().unwrap();

        assert!(!catalog.is_empty());
        assert_eq!(catalog.jokes(), builtin.jokes());
    }

    #[test]
    fn test_load_catalog_from_file() {
        let path = std::env::temp_dir().join(format!("bobapp_server_jokes_{}.json", std::process::id()));
        {
            let mut file = std::fs::File::create(&path).unwrap();
            write!(
                file,
                r#"[{{"joke": "Knock knock", "response": "Who's there?"}}, {{"joke": "", "response": "blank"}}]"#
            )
            .unwrap();
        }

        let config = ServerConfig {
            port: 0,
            jokes_file: Some(path.clone()),
        };
        let catalog = load_catalog(&config);
        std::fs::remove_file(&path).ok();

        let catalog = catalog.unwrap();
        assert_eq!(
            catalog.jokes(),
            &[Joke::new("Knock knock", "Who's there?"), Joke::new("", "blank")][..]
        );
        assert!(catalog.random_joke().is_ok());
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let config = ServerConfig {
            port: 0,
            jokes_file: Some(PathBuf::from("/nonexistent/jokes.json")),
        };

        assert!(load_catalog(&config).is_err());
    }
}
