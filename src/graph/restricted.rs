use crate::graph::traits::Graph;
use num_traits::{Float, Zero};
use std::collections::HashSet;
use std::fmt::Debug;
use std::marker::PhantomData;

/// A filtered view over a borrowed graph with some vertices and edges hidden
///
/// Hiding an edge key `(from, to)` hides every parallel edge between that pair.
/// Hidden vertices lose all of their incident edges.
#[derive(Debug)]
pub struct RestrictedGraph<'g, W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    base: &'g G,
    excluded_vertices: HashSet<usize>,
    excluded_edges: HashSet<(usize, usize)>,
    _weight: PhantomData<W>,
}

impl<'g, W, G> RestrictedGraph<'g, W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Creates a view over `base` with nothing excluded
    pub fn new(base: &'g G) -> Self {
        RestrictedGraph {
            base,
            excluded_vertices: HashSet::new(),
            excluded_edges: HashSet::new(),
            _weight: PhantomData,
        }
    }

    pub fn exclude_vertex(&mut self, vertex: usize) {
        self.excluded_vertices.insert(vertex);
    }

    pub fn exclude_edge(&mut self, from: usize, to: usize) {
        self.excluded_edges.insert((from, to));
    }

    pub fn is_vertex_excluded(&self, vertex: usize) -> bool {
        self.excluded_vertices.contains(&vertex)
    }

    pub fn is_edge_excluded(&self, from: usize, to: usize) -> bool {
        self.excluded_edges.contains(&(from, to))
    }
}

impl<'g, W, G> Graph<W> for RestrictedGraph<'g, W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn vertex_count(&self) -> usize {
        self.base.vertex_count()
    }

    fn edge_count(&self) -> usize {
        (0..self.vertex_count())
            .map(|vertex| self.outgoing_edges(vertex).count())
            .sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if self.is_vertex_excluded(vertex) {
            return Box::new(std::iter::empty());
        }
        Box::new(self.base.outgoing_edges(vertex).filter(move |&(target, _)| {
            !self.is_vertex_excluded(target) && !self.is_edge_excluded(vertex, target)
        }))
    }

    fn incoming_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if self.is_vertex_excluded(vertex) {
            return Box::new(std::iter::empty());
        }
        Box::new(self.base.incoming_edges(vertex).filter(move |&(source, _)| {
            !self.is_vertex_excluded(source) && !self.is_edge_excluded(source, vertex)
        }))
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        self.base.has_vertex(vertex) && !self.is_vertex_excluded(vertex)
    }
}
