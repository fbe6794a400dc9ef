use std::fmt::Debug;
use log::warn;
use num_traits::{Float, Zero};
use crate::graph::Graph;
use crate::path::Path;
use crate::Result;

/// Result of a single-source shortest path computation
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distances from source to each vertex
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Walks the predecessor links back from `target` to build its shortest path
    ///
    /// Returns `None` when the target was not reached.
    pub fn path_to(&self, target: usize) -> Option<Path<W>> {
        let weight = (*self.distances.get(target)?)?;
        let mut vertices = vec![target];
        let mut current = target;

        while current != self.source {
            current = self.predecessors[current]?;
            vertices.push(current);

            // A well-formed predecessor tree can never be longer than the vertex count
            if vertices.len() > self.predecessors.len() {
                warn!("Predecessor chain from {} does not reach source {}", target, self.source);
                return None;
            }
        }

        vertices.reverse();
        Some(Path::from_parts(vertices, weight))
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Compute the minimum-weight path from `source` to `target`
    ///
    /// `Ok(None)` means the target is unreachable; it is not an error.
    fn shortest_path(&self, graph: &G, source: usize, target: usize) -> Result<Option<Path<W>>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
