use crate::graph::directed::DirectedGraph;
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// How repeated edges between the same ordered vertex pair are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParallelEdges {
    /// Every edge is stored with its own weight; searches see all of them
    #[default]
    Keep,
    /// A single edge per ordered pair is stored, carrying the minimum weight
    CollapseToMinimum,
}

/// Validating builder for [`DirectedGraph`]
#[derive(Debug)]
pub struct GraphBuilder<W>
where
    W: Float + Zero + Debug + Copy,
{
    outgoing_edges: Vec<Vec<(usize, W)>>,
    parallel_edges: ParallelEdges,
}

impl<W> GraphBuilder<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a builder for a graph with vertices `0..vertex_count`
    pub fn new(vertex_count: usize) -> Self {
        GraphBuilder {
            outgoing_edges: vec![Vec::new(); vertex_count],
            parallel_edges: ParallelEdges::default(),
        }
    }

    /// Sets the parallel edge policy. Applies to edges added afterwards.
    pub fn with_parallel_edges(mut self, policy: ParallelEdges) -> Self {
        self.parallel_edges = policy;
        self
    }

    /// Adds a directed edge, rejecting unknown endpoints and negative or non-finite weights
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<&mut Self> {
        let vertex_count = self.outgoing_edges.len();
        if from >= vertex_count {
            return Err(Error::InvalidVertex(from));
        }
        if to >= vertex_count {
            return Err(Error::InvalidVertex(to));
        }
        if !weight.is_finite() || weight < W::zero() {
            return Err(Error::InvalidWeight {
                from,
                to,
                weight: weight.to_f64().unwrap_or(f64::NAN),
            });
        }

        let edges = &mut self.outgoing_edges[from];
        match self.parallel_edges {
            ParallelEdges::Keep => edges.push((to, weight)),
            ParallelEdges::CollapseToMinimum => {
                match edges.iter_mut().find(|(target, _)| *target == to) {
                    Some(edge) => {
                        if weight < edge.1 {
                            edge.1 = weight;
                        }
                    }
                    None => edges.push((to, weight)),
                }
            }
        }
        Ok(self)
    }

    /// Chaining form of [`GraphBuilder::add_edge`]
    pub fn edge(mut self, from: usize, to: usize, weight: W) -> Result<Self> {
        self.add_edge(from, to, weight)?;
        Ok(self)
    }

    /// Finishes the graph
    pub fn build(self) -> DirectedGraph<W> {
        DirectedGraph::from_adjacency(self.outgoing_edges)
    }
}
