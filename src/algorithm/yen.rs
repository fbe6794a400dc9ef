use std::fmt::Debug;
use log::{debug, trace, warn};
use num_traits::{Float, Zero};

use crate::algorithm::dijkstra::{search_path, search_path_from};
use crate::data_structures::{Candidate, CandidateFrontier};
use crate::graph::{Graph, RestrictedGraph};
use crate::path::Path;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EngineState {
    Uninitialized,
    Ready,
    Exhausted,
}

/// Lazy generator of the loopless paths between two vertices, cheapest first
///
/// Implements Yen's algorithm: every confirmed path is deviated at each of its
/// vertices except the target, a spur path is searched with Dijkstra over a
/// restricted view of the graph, and the resulting candidates wait in a
/// deduplicating frontier until they are the cheapest remaining.
///
/// The engine is not K-aware; callers stop pulling after K paths. Ties are
/// resolved by path length and then vertex sequence, so repeated queries over
/// the same graph produce identical results.
///
/// ```
/// use ordered_float::OrderedFloat;
/// use yen_ksp::{DirectedGraph, YenKShortestPaths};
///
/// let graph = DirectedGraph::build(4, vec![
///     (0, 1, OrderedFloat(1.0)),
///     (1, 3, OrderedFloat(1.0)),
///     (0, 2, OrderedFloat(2.0)),
///     (2, 3, OrderedFloat(1.0)),
/// ]).unwrap();
///
/// let mut yen = YenKShortestPaths::new(&graph, 0, 3).unwrap();
/// let paths = yen.take_paths(2);
/// assert_eq!(paths[0].vertices(), &[0, 1, 3]);
/// assert_eq!(paths[1].vertices(), &[0, 2, 3]);
/// ```
#[derive(Debug)]
pub struct YenKShortestPaths<'g, W, G>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    graph: &'g G,
    source: usize,
    target: usize,
    state: EngineState,
    /// Paths promoted out of the frontier, in the order they were produced
    confirmed: Vec<Path<W>>,
    frontier: CandidateFrontier<W>,
    /// Number of confirmed paths handed to the caller
    emitted: usize,
    /// Number of confirmed paths whose deviations have been explored
    expanded: usize,
}

impl<'g, W, G> YenKShortestPaths<'g, W, G>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    /// Binds an engine to `graph` for the query `source -> target`
    pub fn new(graph: &'g G, source: usize, target: usize) -> Result<Self> {
        if !graph.has_vertex(source) {
            return Err(Error::UnknownVertex(source));
        }
        if !graph.has_vertex(target) {
            return Err(Error::UnknownVertex(target));
        }

        Ok(YenKShortestPaths {
            graph,
            source,
            target,
            state: EngineState::Uninitialized,
            confirmed: Vec::new(),
            frontier: CandidateFrontier::new(),
            emitted: 0,
            expanded: 0,
        })
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// Paths confirmed so far, cheapest first
    pub fn confirmed(&self) -> &[Path<W>] {
        &self.confirmed
    }

    /// Number of candidates currently waiting in the frontier
    pub fn candidate_count(&self) -> usize {
        self.frontier.len()
    }

    /// Returns true if another path can be produced
    ///
    /// May run the deviation search for the last confirmed path to find out.
    pub fn has_next(&mut self) -> bool {
        self.ensure_initialized();

        if self.emitted < self.confirmed.len() {
            return true;
        }
        if self.state == EngineState::Exhausted {
            return false;
        }

        self.expand_confirmed();
        if self.frontier.is_empty() {
            debug!(
                "Exhausted paths {} -> {} after {} results",
                self.source,
                self.target,
                self.confirmed.len()
            );
            self.state = EngineState::Exhausted;
            return false;
        }
        true
    }

    /// Produces the next cheapest path
    ///
    /// Fails with [`Error::IllegalState`] once [`has_next`](Self::has_next) is false.
    pub fn next_path(&mut self) -> Result<Path<W>> {
        if !self.has_next() {
            return Err(self.exhausted_error());
        }

        if self.emitted < self.confirmed.len() {
            let path = self.confirmed[self.emitted].clone();
            self.emitted += 1;
            return Ok(path);
        }

        let candidate = self.frontier.pop().ok_or_else(|| self.exhausted_error())?;
        debug!(
            "Confirmed path #{} (deviation at index {}): {}",
            self.confirmed.len() + 1,
            candidate.deviation_index,
            candidate.path.summary()
        );
        self.confirmed.push(candidate.path.clone());
        self.emitted += 1;
        Ok(candidate.path)
    }

    /// Pulls up to `k` paths; fewer are returned if the graph runs out
    pub fn take_paths(&mut self, k: usize) -> Vec<Path<W>> {
        self.by_ref().take(k).collect()
    }

    fn exhausted_error(&self) -> Error {
        Error::IllegalState(format!(
            "no further path from {} to {}",
            self.source, self.target
        ))
    }

    fn ensure_initialized(&mut self) {
        if self.state != EngineState::Uninitialized {
            return;
        }

        match search_path(self.graph, self.source, self.target) {
            Some(path) => {
                debug!("Confirmed path #1: {}", path.summary());
                self.frontier.mark_seen(path.vertices());
                self.confirmed.push(path);
                self.state = EngineState::Ready;
            }
            None => {
                debug!("No path from {} to {}", self.source, self.target);
                self.state = EngineState::Exhausted;
            }
        }
    }

    fn expand_confirmed(&mut self) {
        while self.expanded < self.confirmed.len() {
            self.generate_candidates(self.expanded);
            self.expanded += 1;
        }
    }

    /// Deviates confirmed path `path_index` at every vertex but the target
    fn generate_candidates(&mut self, path_index: usize) {
        let vertices = self.confirmed[path_index].to_vec();
        let mut root_weight = W::zero();

        for i in 0..vertices.len().saturating_sub(1) {
            let spur_vertex = vertices[i];
            let root = &vertices[..=i];

            let mut view: RestrictedGraph<W, G> = RestrictedGraph::new(self.graph);
            for path in &self.confirmed {
                let other = path.vertices();
                if other.len() > i + 1 && &other[..=i] == root {
                    view.exclude_edge(other[i], other[i + 1]);
                }
            }
            for &vertex in &vertices[..i] {
                view.exclude_vertex(vertex);
            }

            // Seeding the spur search with the root weight keeps every label a
            // left-to-right sum from the source, as in the first search
            if let Some(spur) = search_path_from(&view, spur_vertex, root_weight, self.target) {
                let mut candidate_vertices = vertices[..i].to_vec();
                candidate_vertices.extend_from_slice(spur.vertices());
                let candidate =
                    Candidate::new(Path::from_parts(candidate_vertices, spur.weight()), i);

                trace!("Candidate from deviation {}: {}", i, candidate.path.summary());
                if !self.frontier.insert(candidate) {
                    trace!("Discarded duplicate candidate at deviation {}", i);
                }
            }

            match self.graph.get_edge_weight(vertices[i], vertices[i + 1]) {
                Some(weight) => root_weight = root_weight + weight,
                None => {
                    warn!(
                        "Confirmed path uses missing edge {} -> {}",
                        vertices[i],
                        vertices[i + 1]
                    );
                    break;
                }
            }
        }
    }
}

impl<'g, W, G> Iterator for YenKShortestPaths<'g, W, G>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    type Item = Path<W>;

    fn next(&mut self) -> Option<Path<W>> {
        self.next_path().ok()
    }
}
