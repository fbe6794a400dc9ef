use crate::graph::builder::GraphBuilder;
use crate::graph::traits::Graph;
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// An immutable directed graph implementation using adjacency lists
///
/// Built once through [`DirectedGraph::build`] or [`GraphBuilder`] and read-only
/// afterwards, so it can be shared by any number of search engines.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,

    /// Incoming edges for each vertex: vertex_id -> [(source_vertex, weight)]
    incoming_edges: Vec<Vec<(usize, W)>>,

    edge_count: usize,
}

impl<W> DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Builds a graph over `vertex_count` vertices from `(from, to, weight)` rows.
    ///
    /// Parallel edges are kept as distinct edges; see [`GraphBuilder`] to collapse them.
    pub fn build<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut builder = GraphBuilder::new(vertex_count);
        for (from, to, weight) in edges {
            builder.add_edge(from, to, weight)?;
        }
        Ok(builder.build())
    }

    /// Assembles a graph from already validated adjacency lists
    pub(crate) fn from_adjacency(outgoing_edges: Vec<Vec<(usize, W)>>) -> Self {
        let mut incoming_edges = vec![Vec::new(); outgoing_edges.len()];
        let mut edge_count = 0;
        for (from, edges) in outgoing_edges.iter().enumerate() {
            for &(to, weight) in edges {
                incoming_edges[to].push((from, weight));
                edge_count += 1;
            }
        }

        DirectedGraph {
            outgoing_edges,
            incoming_edges,
            edge_count,
        }
    }

    /// Returns the handle for a vertex id
    pub fn vertex(&self, id: usize) -> Result<usize> {
        if self.has_vertex(id) {
            Ok(id)
        } else {
            Err(Error::UnknownVertex(id))
        }
    }

    /// Returns the (target, weight) pairs reachable by one edge from `vertex`
    pub fn successors(&self, vertex: usize) -> Result<&[(usize, W)]> {
        self.outgoing_edges
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or(Error::UnknownVertex(vertex))
    }

    /// Returns the (source, weight) pairs with an edge into `vertex`
    pub fn predecessors(&self, vertex: usize) -> Result<&[(usize, W)]> {
        self.incoming_edges
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or(Error::UnknownVertex(vertex))
    }

    /// Iterates over every edge as `(from, to, weight)` in insertion order per source
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        self.outgoing_edges
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| edges.iter().map(move |&(to, weight)| (from, to, weight)))
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(vertex) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn incoming_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.incoming_edges.get(vertex) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.outgoing_edges.len()
    }
}
