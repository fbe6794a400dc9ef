use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::graph::ParallelEdges;
use crate::path::DEFAULT_DELIMITER;
use crate::query::{EdgeRow, IndexBase, PathFormat, QueryOptions, RenderedPaths, Weight};
use crate::Path;

/// Edge table describing the graph a request is answered on
#[derive(Debug, Clone, Deserialize)]
pub struct GraphInput {
    pub vertex_count: usize,
    pub edges: Vec<EdgeRow>,
    #[serde(default)]
    pub index_base: IndexBase,
    /// Store one edge per ordered pair with the minimum weight
    #[serde(default)]
    pub collapse_parallel_edges: bool,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl GraphInput {
    pub fn options(&self) -> QueryOptions {
        let policy = if self.collapse_parallel_edges {
            ParallelEdges::CollapseToMinimum
        } else {
            ParallelEdges::Keep
        };
        QueryOptions::default()
            .with_index_base(self.index_base)
            .with_parallel_edges(policy)
            .with_delimiter(self.delimiter.clone())
    }
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

/// Request for the single shortest path
#[derive(Debug, Deserialize)]
pub struct ShortestPathRequest {
    #[serde(flatten)]
    pub graph: GraphInput,
    pub source: usize,
    pub target: usize,
    #[serde(default)]
    pub verbose: bool,
}

/// Request for the K shortest loopless paths
#[derive(Debug, Deserialize)]
pub struct KShortestPathsRequest {
    #[serde(flatten)]
    pub graph: GraphInput,
    pub source: usize,
    pub target: usize,
    pub k: usize,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub format: PathFormat,
}

/// A path as returned by the API
#[derive(Debug, Clone, Serialize)]
pub struct WebPath {
    pub vertices: Vec<usize>,
    pub path: String,
    pub weight: f64,
}

impl WebPath {
    pub fn from_path(path: &Path<Weight>, delimiter: &str) -> Self {
        WebPath {
            vertices: path.to_vec(),
            path: path.to_delimited(delimiter),
            weight: path.weight().into_inner(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathResponse {
    pub request_id: Uuid,
    pub computed_at: DateTime<Utc>,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<WebPath>,
    pub execution_time_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct KShortestPathsResponse {
    pub request_id: Uuid,
    pub computed_at: DateTime<Utc>,
    pub count: usize,
    pub paths: RenderedPaths,
    pub weights: Vec<f64>,
    pub execution_time_ms: f64,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
