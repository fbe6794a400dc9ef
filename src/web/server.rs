use axum::{
    http::{header, Method},
    Router,
};
use log::{info, warn};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub enable_cors: bool,
    /// Largest accepted `vertex_count` in a request
    pub max_vertices: usize,
    /// Largest accepted `k` for K shortest paths requests
    pub max_k: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            enable_cors: true,
            max_vertices: 1_000_000,
            max_k: 1_000,
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by `KSP_PORT`, `KSP_MAX_VERTICES` and `KSP_MAX_K` when set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(port) = env_value("KSP_PORT") {
            config.port = port;
        }
        if let Some(max_vertices) = env_value("KSP_MAX_VERTICES") {
            config.max_vertices = max_vertices;
        }
        if let Some(max_k) = env_value("KSP_MAX_K") {
            config.max_k = max_k;
        }
        config
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

fn env_value<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}

/// Build the application router with middleware for a configuration
pub fn build_app(config: ServerConfig) -> Router {
    let enable_cors = config.enable_cors;
    let app = create_router().with_state(AppState::new(config));

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

        app.layer(ServiceBuilder::new().layer(cors).into_inner())
    } else {
        app
    }
}

/// Start the web server
pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    start_server_with_config(ServerConfig::default().with_port(port)).await
}

/// Start the web server with custom configuration
pub async fn start_server_with_config(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let app = build_app(config);

    info!("K shortest paths server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
