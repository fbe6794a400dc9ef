use num_traits::{Float, Zero};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};
use std::fmt::Debug;

use crate::path::Path;

/// A not-yet-confirmed path plus the index of the vertex it deviated at
#[derive(Debug, Clone)]
pub struct Candidate<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    pub path: Path<W>,
    pub deviation_index: usize,
}

impl<W> Candidate<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    pub fn new(path: Path<W>, deviation_index: usize) -> Self {
        Candidate {
            path,
            deviation_index,
        }
    }
}

// Ranked by weight, then vertex count, then vertex sequence.
impl<W> Ord for Candidate<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.path
            .weight()
            .cmp(&other.path.weight())
            .then_with(|| self.path.len().cmp(&other.path.len()))
            .then_with(|| self.path.vertices().cmp(other.path.vertices()))
    }
}

impl<W> PartialOrd for Candidate<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W> PartialEq for Candidate<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W> Eq for Candidate<W> where W: Float + Zero + Debug + Copy + Ord {}

/// Min-ordered set of candidate paths that never holds the same vertex sequence twice
///
/// Sequences stay registered after being popped, so a confirmed path can not
/// re-enter the frontier either.
#[derive(Debug)]
pub struct CandidateFrontier<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    heap: BinaryHeap<Reverse<Candidate<W>>>,
    seen: HashSet<Vec<usize>>,
}

impl<W> CandidateFrontier<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    pub fn new() -> Self {
        CandidateFrontier {
            heap: BinaryHeap::new(),
            seen: HashSet::new(),
        }
    }

    /// Registers a vertex sequence without queueing it (e.g. the first confirmed path)
    pub fn mark_seen(&mut self, vertices: &[usize]) {
        self.seen.insert(vertices.to_vec());
    }

    pub fn contains(&self, vertices: &[usize]) -> bool {
        self.seen.contains(vertices)
    }

    /// Queues a candidate. Returns false if its vertex sequence was already seen.
    pub fn insert(&mut self, candidate: Candidate<W>) -> bool {
        if !self.seen.insert(candidate.path.to_vec()) {
            return false;
        }
        self.heap.push(Reverse(candidate));
        true
    }

    /// Removes the best-ranked candidate
    pub fn pop(&mut self) -> Option<Candidate<W>> {
        self.heap.pop().map(|Reverse(candidate)| candidate)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<W> Default for CandidateFrontier<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
