use num_traits::{Float, Zero};
use std::collections::HashSet;
use std::fmt::{self, Debug, Display};

use crate::{Error, Result};

/// Delimiter used by [`Path`]'s `Display` output and by [`Path::to_string`]
pub const DEFAULT_DELIMITER: &str = "-";

/// An ordered, non-empty vertex sequence together with its total weight
///
/// Paths produced by the search engines are always loopless and every
/// consecutive pair of vertices is joined by an edge of the searched graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<W>
where
    W: Float + Zero + Debug + Copy,
{
    vertices: Vec<usize>,
    weight: W,
}

impl<W> Path<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a path, rejecting an empty vertex sequence
    pub fn new(vertices: Vec<usize>, weight: W) -> Result<Self> {
        if vertices.is_empty() {
            return Err(Error::InvalidPath("a path needs at least one vertex".to_string()));
        }
        Ok(Path { vertices, weight })
    }

    /// Builds a path whose vertex list is known to be non-empty
    pub(crate) fn from_parts(vertices: Vec<usize>, weight: W) -> Self {
        debug_assert!(!vertices.is_empty());
        Path { vertices, weight }
    }

    /// Reconstructs a path from its delimited text form
    pub fn parse(text: &str, delimiter: &str, weight: W) -> Result<Self> {
        Path::new(Self::parse_vertices(text, delimiter)?, weight)
    }

    /// Parses the vertex ids of a delimited path string
    pub fn parse_vertices(text: &str, delimiter: &str) -> Result<Vec<usize>> {
        if delimiter.is_empty() {
            return Err(Error::InvalidArgument("delimiter must not be empty".to_string()));
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::InvalidPath("empty path text".to_string()));
        }
        text.split(delimiter)
            .map(|token| {
                token
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| Error::InvalidPath(format!("'{}' is not a vertex id", token)))
            })
            .collect()
    }

    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    pub fn weight(&self) -> W {
        self.weight
    }

    pub fn source(&self) -> usize {
        self.vertices[0]
    }

    pub fn target(&self) -> usize {
        self.vertices[self.vertices.len() - 1]
    }

    /// Number of vertices on the path
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false; kept for parity with `len`
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.len() - 1
    }

    pub fn is_loopless(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.vertices.len());
        self.vertices.iter().all(|vertex| seen.insert(*vertex))
    }

    /// The vertex sequence as an owned vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.vertices.clone()
    }

    pub fn into_vertices(self) -> Vec<usize> {
        self.vertices
    }

    /// The vertex sequence joined by `delimiter`
    pub fn to_delimited(&self, delimiter: &str) -> String {
        self.vertices
            .iter()
            .map(|vertex| vertex.to_string())
            .collect::<Vec<_>>()
            .join(delimiter)
    }

    /// One-line diagnostic description: cost, length and the vertex chain
    pub fn summary(&self) -> String {
        format!(
            "Cost: {} Length: {} Path: {}",
            self.weight.to_f64().unwrap_or(f64::NAN),
            self.vertices.len(),
            self.to_delimited("->")
        )
    }
}

impl<W> Display for Path<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_delimited(DEFAULT_DELIMITER))
    }
}
