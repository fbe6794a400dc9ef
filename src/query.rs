//! Edge-table queries: the entry points host bindings call.
//!
//! A graph is rebuilt from the edge table on every call and dropped afterwards.
//! Ids may be given 0-based or 1-based; results come back in the caller's base.

use log::info;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::yen::YenKShortestPaths;
use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::{DirectedGraph, GraphBuilder, ParallelEdges};
use crate::path::{Path, DEFAULT_DELIMITER};
use crate::{Error, Result};

/// Weight type used at the query boundary
pub type Weight = OrderedFloat<f64>;

/// One row of the input edge table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeRow {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

impl EdgeRow {
    pub fn new(from: usize, to: usize, weight: f64) -> Self {
        EdgeRow { from, to, weight }
    }
}

impl From<(usize, usize, f64)> for EdgeRow {
    fn from((from, to, weight): (usize, usize, f64)) -> Self {
        EdgeRow { from, to, weight }
    }
}

/// Numbering of vertex ids on the caller's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexBase {
    #[default]
    Zero,
    One,
}

impl IndexBase {
    fn offset(self) -> usize {
        match self {
            IndexBase::Zero => 0,
            IndexBase::One => 1,
        }
    }

    /// Converts a caller id to an internal 0-based id
    pub fn to_internal(self, id: usize) -> Option<usize> {
        id.checked_sub(self.offset())
    }

    /// Converts an internal 0-based id to a caller id
    pub fn to_external(self, id: usize) -> usize {
        id + self.offset()
    }
}

/// Output shape for a list of paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathFormat {
    #[default]
    Vertices,
    Strings,
}

/// Paths rendered for the caller
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RenderedPaths {
    Vertices(Vec<Vec<usize>>),
    Strings(Vec<String>),
}

/// Options shared by all query entry points
#[derive(Debug, Clone)]
pub struct QueryOptions {
    pub index_base: IndexBase,
    pub parallel_edges: ParallelEdges,
    pub delimiter: String,
}

impl Default for QueryOptions {
    fn default() -> Self {
        QueryOptions {
            index_base: IndexBase::Zero,
            parallel_edges: ParallelEdges::Keep,
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl QueryOptions {
    pub fn with_index_base(mut self, index_base: IndexBase) -> Self {
        self.index_base = index_base;
        self
    }

    pub fn with_parallel_edges(mut self, policy: ParallelEdges) -> Self {
        self.parallel_edges = policy;
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }
}

/// Builds a graph from an edge table given in the caller's id space
pub fn build_graph(
    vertex_count: usize,
    edges: &[EdgeRow],
    options: &QueryOptions,
) -> Result<DirectedGraph<Weight>> {
    let base = options.index_base;
    let mut builder = GraphBuilder::new(vertex_count).with_parallel_edges(options.parallel_edges);
    for edge in edges {
        let from = base.to_internal(edge.from).ok_or(Error::InvalidVertex(edge.from))?;
        let to = base.to_internal(edge.to).ok_or(Error::InvalidVertex(edge.to))?;
        builder
            .add_edge(from, to, OrderedFloat(edge.weight))
            .map_err(|err| external_error(err, base))?;
    }
    Ok(builder.build())
}

/// Finds the shortest path from `source` to `target`; `Ok(None)` if unreachable
///
/// With `verbose` set, the route endpoints and the result are logged at `info` level.
pub fn shortest_path(
    source: usize,
    target: usize,
    vertex_count: usize,
    edges: &[EdgeRow],
    verbose: bool,
    options: &QueryOptions,
) -> Result<Option<Path<Weight>>> {
    if verbose {
        info!("Route start: {}", source);
        info!("Route end: {}", target);
    }

    let graph = build_graph(vertex_count, edges, options)?;
    let base = options.index_base;
    let source_id = base.to_internal(source).ok_or(Error::UnknownVertex(source))?;
    let target_id = base.to_internal(target).ok_or(Error::UnknownVertex(target))?;

    let path = Dijkstra::new()
        .shortest_path(&graph, source_id, target_id)
        .map_err(|err| external_error(err, base))?;
    let path = path.map(|path| to_external_path(path, base));

    if verbose {
        match &path {
            Some(path) => {
                info!("{}", path.summary());
                info!("Shortest path: {}", path.to_delimited(&options.delimiter));
            }
            None => info!("No path from {} to {}", source, target),
        }
    }
    Ok(path)
}

/// Like [`shortest_path`], rendered as a delimited string
pub fn shortest_path_string(
    source: usize,
    target: usize,
    vertex_count: usize,
    edges: &[EdgeRow],
    verbose: bool,
    options: &QueryOptions,
) -> Result<Option<String>> {
    let path = shortest_path(source, target, vertex_count, edges, verbose, options)?;
    Ok(path.map(|path| path.to_delimited(&options.delimiter)))
}

/// Finds up to `k` loopless paths from `source` to `target`, cheapest first
///
/// With `verbose` set, the route endpoints and every path found are logged at
/// `info` level. Fewer than `k` paths are returned when the graph has fewer.
pub fn k_shortest_paths(
    edges: &[EdgeRow],
    source: usize,
    target: usize,
    k: usize,
    vertex_count: usize,
    verbose: bool,
    options: &QueryOptions,
) -> Result<Vec<Path<Weight>>> {
    if verbose {
        info!("Route start: {}", source);
        info!("Route end: {}", target);
    }

    let graph = build_graph(vertex_count, edges, options)?;
    let base = options.index_base;
    let source_id = base.to_internal(source).ok_or(Error::UnknownVertex(source))?;
    let target_id = base.to_internal(target).ok_or(Error::UnknownVertex(target))?;

    let mut engine = YenKShortestPaths::new(&graph, source_id, target_id)
        .map_err(|err| external_error(err, base))?;

    let mut results = Vec::with_capacity(k.min(64));
    while results.len() < k && engine.has_next() {
        let path = to_external_path(engine.next_path()?, base);
        if verbose {
            info!("{}", path.summary());
        }
        results.push(path);
    }
    Ok(results)
}

/// Renders paths as vertex lists or delimited strings
pub fn render(paths: &[Path<Weight>], format: PathFormat, delimiter: &str) -> RenderedPaths {
    match format {
        PathFormat::Vertices => RenderedPaths::Vertices(paths.iter().map(Path::to_vec).collect()),
        PathFormat::Strings => RenderedPaths::Strings(
            paths.iter().map(|path| path.to_delimited(delimiter)).collect(),
        ),
    }
}

fn to_external_path(path: Path<Weight>, base: IndexBase) -> Path<Weight> {
    let weight = path.weight();
    let vertices = path
        .into_vertices()
        .into_iter()
        .map(|vertex| base.to_external(vertex))
        .collect();
    Path::from_parts(vertices, weight)
}

// Errors carry internal ids; report them as the caller numbered them.
fn external_error(err: Error, base: IndexBase) -> Error {
    match err {
        Error::InvalidVertex(id) => Error::InvalidVertex(base.to_external(id)),
        Error::UnknownVertex(id) => Error::UnknownVertex(base.to_external(id)),
        Error::InvalidWeight { from, to, weight } => Error::InvalidWeight {
            from: base.to_external(from),
            to: base.to_external(to),
            weight,
        },
        other => other,
    }
}
