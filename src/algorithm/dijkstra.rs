use std::fmt::Debug;
use log::trace;
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::BinaryHeapWrapper;
use crate::path::Path;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
///
/// Requires non-negative edge weights; graphs built through
/// [`GraphBuilder`](crate::graph::GraphBuilder) guarantee this.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

/// Label-setting search from `source`, stopping once `target` (if any) is settled.
///
/// Vertices are settled in `(distance, vertex id)` order and an edge only
/// replaces a predecessor on a strict improvement, so the result is fully
/// deterministic for a given graph.
pub(crate) fn search<W, G>(graph: &G, source: usize, target: Option<usize>) -> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W> + ?Sized,
{
    search_from(graph, source, W::zero(), target)
}

/// Same as [`search`], with `source` labelled `initial` instead of zero.
///
/// Every label is then accumulated left to right starting from `initial`, so a
/// spur search seeded with its root weight yields exactly the weights a search
/// from the root's first vertex would assign.
pub(crate) fn search_from<W, G>(
    graph: &G,
    source: usize,
    initial: W,
    target: Option<usize>,
) -> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W> + ?Sized,
{
    let n = graph.vertex_count();

    // Initialize distances and predecessors
    let mut distances: Vec<Option<W>> = vec![None; n];
    let mut predecessors: Vec<Option<usize>> = vec![None; n];
    let mut settled = vec![false; n];

    if !graph.has_vertex(source) {
        return ShortestPathResult {
            distances,
            predecessors,
            source,
        };
    }

    distances[source] = Some(initial);

    let mut queue = BinaryHeapWrapper::with_capacity(n.min(1024));
    queue.push(source, initial);

    while let Some((u, dist_u)) = queue.pop() {
        // Stale entry for an already settled vertex
        if settled[u] {
            continue;
        }
        settled[u] = true;

        if target == Some(u) {
            break;
        }

        // Relax all outgoing edges
        for (v, weight) in graph.outgoing_edges(u) {
            if settled[v] {
                continue;
            }
            let new_dist = dist_u + weight;

            let should_update = match distances[v] {
                None => true,
                Some(current_dist) => new_dist < current_dist,
            };

            if should_update {
                distances[v] = Some(new_dist);
                predecessors[v] = Some(u);
                queue.push(v, new_dist);
            }
        }
    }

    ShortestPathResult {
        distances,
        predecessors,
        source,
    }
}

/// Shortest path between two vertices without validating them.
///
/// Used by the K shortest paths engine on restricted views; an excluded or
/// unknown source simply yields `None`.
pub(crate) fn search_path<W, G>(graph: &G, source: usize, target: usize) -> Option<Path<W>>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W> + ?Sized,
{
    search_path_from(graph, source, W::zero(), target)
}

/// Like [`search_path`], with the returned weight accumulated on top of `initial`
pub(crate) fn search_path_from<W, G>(
    graph: &G,
    source: usize,
    initial: W,
    target: usize,
) -> Option<Path<W>>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W> + ?Sized,
{
    if !graph.has_vertex(target) {
        return None;
    }
    let path = search_from(graph, source, initial, Some(target)).path_to(target);
    trace!(
        "Dijkstra {} -> {}: {}",
        source,
        target,
        path.as_ref().map_or_else(|| "no path".to_string(), |p| p.to_string())
    );
    path
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::UnknownVertex(source));
        }

        Ok(search(graph, source, None))
    }

    fn shortest_path(&self, graph: &G, source: usize, target: usize) -> Result<Option<Path<W>>> {
        if !graph.has_vertex(source) {
            return Err(Error::UnknownVertex(source));
        }
        if !graph.has_vertex(target) {
            return Err(Error::UnknownVertex(target));
        }

        Ok(search_path(graph, source, target))
    }
}
