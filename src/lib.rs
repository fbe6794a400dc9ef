//! Yen KSP - Shortest and K Loopless Shortest Paths on Directed Graphs
//!
//! This library implements a label-setting Dijkstra search between two vertices
//! and Yen's algorithm for the K shortest loopless paths, which drives the
//! Dijkstra search over restricted views of an immutable graph.
//!
//! All edge weights must be real, finite and non-negative. Results are
//! deterministic: ties between equal distances are broken by vertex id, and
//! ties between equal-weight candidate paths by length and then vertex sequence.

pub mod algorithm;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;
pub mod path;
#[cfg(feature = "python")]
mod python;
pub mod query;
pub mod web;

pub use algorithm::{
    dijkstra::Dijkstra, yen::YenKShortestPaths, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use path::Path;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An edge endpoint outside `[0, vertex_count)` was supplied while building a graph.
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    /// A query referenced a vertex that is not part of the graph.
    #[error("Unknown vertex ID: {0}")]
    UnknownVertex(usize),

    #[error("Invalid edge weight {weight} on edge from {from} to {to}")]
    InvalidWeight { from: usize, to: usize, weight: f64 },

    /// The caller asked for a path after the engine reported exhaustion.
    #[error("Illegal state: {0}")]
    IllegalState(String),

    #[error("Invalid path text: {0}")]
    InvalidPath(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
