use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::{debug, warn};
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::query;
use crate::web::models::*;
use crate::web::server::ServerConfig;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
///
/// Holds configuration only; graphs are rebuilt from each request body.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/shortest-path", post(shortest_path))
        .route("/api/k-shortest-paths", post(k_shortest_paths))
        .route("/api/health", get(health_check))
}

/// Answer a single shortest path query
pub async fn shortest_path(
    State(state): State<AppState>,
    Json(request): Json<ShortestPathRequest>,
) -> Result<Json<ShortestPathResponse>, ApiError> {
    check_graph_limits(&state.config, &request.graph)?;

    let request_id = Uuid::new_v4();
    let options = request.graph.options();
    let start = Instant::now();
    let path = query::shortest_path(
        request.source,
        request.target,
        request.graph.vertex_count,
        &request.graph.edges,
        request.verbose,
        &options,
    )
    .map_err(|err| error_response(request_id, &err))?;
    let execution_time_ms = start.elapsed().as_secs_f64() * 1000.0;

    debug!(
        "[{}] shortest path {} -> {}: {:?}",
        request_id,
        request.source,
        request.target,
        path.as_ref().map(|p| p.to_string())
    );

    Ok(Json(ShortestPathResponse {
        request_id,
        computed_at: chrono::Utc::now(),
        found: path.is_some(),
        path: path.map(|p| WebPath::from_path(&p, &options.delimiter)),
        execution_time_ms,
    }))
}

/// Answer a K shortest paths query
pub async fn k_shortest_paths(
    State(state): State<AppState>,
    Json(request): Json<KShortestPathsRequest>,
) -> Result<Json<KShortestPathsResponse>, ApiError> {
    check_graph_limits(&state.config, &request.graph)?;
    if request.k > state.config.max_k {
        warn!("Rejected k = {} (limit {})", request.k, state.config.max_k);
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "k_too_large".to_string(),
                message: format!("k must be at most {}", state.config.max_k),
                details: Some(serde_json::json!({ "k": request.k })),
            }),
        ));
    }

    let request_id = Uuid::new_v4();
    let options = request.graph.options();
    let start = Instant::now();
    let paths = query::k_shortest_paths(
        &request.graph.edges,
        request.source,
        request.target,
        request.k,
        request.graph.vertex_count,
        request.verbose,
        &options,
    )
    .map_err(|err| error_response(request_id, &err))?;
    let execution_time_ms = start.elapsed().as_secs_f64() * 1000.0;

    debug!(
        "[{}] {} of {} requested paths {} -> {}",
        request_id,
        paths.len(),
        request.k,
        request.source,
        request.target
    );

    Ok(Json(KShortestPathsResponse {
        request_id,
        computed_at: chrono::Utc::now(),
        count: paths.len(),
        weights: paths.iter().map(|p| p.weight().into_inner()).collect(),
        paths: query::render(&paths, request.format, &options.delimiter),
        execution_time_ms,
    }))
}

/// Health check endpoint
pub async fn health_check() -> Result<Json<serde_json::Value>, ApiError> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}

// Helper functions

fn check_graph_limits(config: &ServerConfig, graph: &GraphInput) -> Result<(), ApiError> {
    if graph.vertex_count > config.max_vertices {
        warn!(
            "Rejected graph with {} vertices (limit {})",
            graph.vertex_count, config.max_vertices
        );
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "graph_too_large".to_string(),
                message: format!("vertex_count must be at most {}", config.max_vertices),
                details: Some(serde_json::json!({ "vertex_count": graph.vertex_count })),
            }),
        ));
    }
    Ok(())
}

fn error_response(request_id: Uuid, err: &Error) -> ApiError {
    let (status, code) = match err {
        Error::InvalidVertex(_) => (StatusCode::UNPROCESSABLE_ENTITY, "invalid_vertex"),
        Error::UnknownVertex(_) => (StatusCode::UNPROCESSABLE_ENTITY, "unknown_vertex"),
        Error::InvalidWeight { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "invalid_weight"),
        Error::InvalidPath(_) | Error::InvalidArgument(_) => {
            (StatusCode::BAD_REQUEST, "invalid_argument")
        }
        Error::IllegalState(_) => (StatusCode::INTERNAL_SERVER_ERROR, "illegal_state"),
    };
    warn!("[{}] {}: {}", request_id, code, err);

    (
        status,
        Json(ErrorResponse {
            error: code.to_string(),
            message: err.to_string(),
            details: Some(serde_json::json!({ "request_id": request_id })),
        }),
    )
}
