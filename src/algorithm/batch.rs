//! Independent queries over one shared graph, run in parallel.
//!
//! The graph is only read; every query builds its own search state or engine,
//! so no synchronization is involved beyond `G: Sync`.

use std::fmt::Debug;
use num_traits::{Float, Zero};
use rayon::prelude::*;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::yen::YenKShortestPaths;
use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::Graph;
use crate::path::Path;
use crate::Result;

/// Runs one shortest path query per `(source, target)` pair, preserving input order
pub fn shortest_paths_batch<W, G>(
    graph: &G,
    queries: &[(usize, usize)],
) -> Vec<Result<Option<Path<W>>>>
where
    W: Float + Zero + Debug + Copy + Ord + Send + Sync,
    G: Graph<W> + Sync,
{
    let dijkstra = Dijkstra::new();
    queries
        .par_iter()
        .map(|&(source, target)| dijkstra.shortest_path(graph, source, target))
        .collect()
}

/// Runs one K shortest paths query per `(source, target)` pair, preserving input order
pub fn k_shortest_paths_batch<W, G>(
    graph: &G,
    queries: &[(usize, usize)],
    k: usize,
) -> Vec<Result<Vec<Path<W>>>>
where
    W: Float + Zero + Debug + Copy + Ord + Send + Sync,
    G: Graph<W> + Sync,
{
    queries
        .par_iter()
        .map(|&(source, target)| {
            let mut engine = YenKShortestPaths::new(graph, source, target)?;
            Ok(engine.take_paths(k))
        })
        .collect()
}
