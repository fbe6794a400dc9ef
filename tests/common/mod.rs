#![allow(dead_code)]

use ordered_float::OrderedFloat;
use rand::prelude::*;
use yen_ksp::graph::{DirectedGraph, Graph};
use yen_ksp::Path;

pub type W = OrderedFloat<f64>;

pub fn graph(vertex_count: usize, edges: &[(usize, usize, f64)]) -> DirectedGraph<W> {
    DirectedGraph::build(
        vertex_count,
        edges.iter().map(|&(from, to, weight)| (from, to, OrderedFloat(weight))),
    )
    .unwrap()
}

/// The four-vertex diamond: 0->1->3 costs 2, 0->2->3 costs 3
pub fn diamond() -> DirectedGraph<W> {
    graph(4, &[(0, 1, 1.0), (1, 3, 1.0), (0, 2, 2.0), (2, 3, 1.0)])
}

/// C, D, E, F, G, H numbered 0..=5
pub fn yen_textbook() -> DirectedGraph<W> {
    graph(
        6,
        &[
            (0, 1, 3.0),
            (0, 2, 2.0),
            (1, 3, 4.0),
            (2, 1, 1.0),
            (2, 3, 2.0),
            (2, 4, 3.0),
            (3, 4, 2.0),
            (3, 5, 1.0),
            (4, 5, 2.0),
        ],
    )
}

/// Seeded random graph with one-decimal weights in `0.1..=3.0`
///
/// Sums of such weights are rarely exact in binary floating point, so the order
/// in which a path's edges are added shows up in its weight.
pub fn random_decimal(vertex_count: usize, edges_per_vertex: usize, seed: u64) -> DirectedGraph<W> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::new();
    for _ in 0..vertex_count * edges_per_vertex {
        let from = rng.gen_range(0..vertex_count);
        let to = rng.gen_range(0..vertex_count);
        if from != to {
            edges.push((from, to, rng.gen_range(1..=30) as f64 / 10.0));
        }
    }
    graph(vertex_count, &edges)
}

/// Every loopless path from source to target by exhaustive search, with weights
/// summed from the cheapest edge between each consecutive pair
pub fn all_loopless_paths(graph: &DirectedGraph<W>, source: usize, target: usize) -> Vec<(Vec<usize>, f64)> {
    let mut results = Vec::new();
    let mut stack = vec![source];
    let mut on_path = vec![false; graph.vertex_count()];
    on_path[source] = true;
    extend(graph, target, &mut stack, &mut on_path, &mut results);
    results
}

fn extend(
    graph: &DirectedGraph<W>,
    target: usize,
    stack: &mut Vec<usize>,
    on_path: &mut Vec<bool>,
    results: &mut Vec<(Vec<usize>, f64)>,
) {
    let current = *stack.last().unwrap();
    if current == target {
        let weight = stack
            .windows(2)
            .map(|pair| graph.get_edge_weight(pair[0], pair[1]).unwrap().into_inner())
            .sum();
        results.push((stack.clone(), weight));
        return;
    }

    let mut next: Vec<usize> = graph.outgoing_edges(current).map(|(v, _)| v).collect();
    next.sort_unstable();
    next.dedup();
    for v in next {
        if !on_path[v] {
            on_path[v] = true;
            stack.push(v);
            extend(graph, target, stack, on_path, results);
            stack.pop();
            on_path[v] = false;
        }
    }
}

/// Asserts the path is loopless, starts and ends correctly and uses real edges
///
/// The weight must equal, bit for bit, the cheapest edges summed from the source.
pub fn assert_valid_path(graph: &DirectedGraph<W>, path: &Path<W>, source: usize, target: usize) {
    assert_eq!(path.source(), source, "path should start at source");
    assert_eq!(path.target(), target, "path should end at target");
    assert!(path.is_loopless(), "path {} repeats a vertex", path);

    let mut weight = 0.0;
    for pair in path.vertices().windows(2) {
        let edge = graph.get_edge_weight(pair[0], pair[1]);
        assert!(edge.is_some(), "path {} uses missing edge {} -> {}", path, pair[0], pair[1]);
        weight += edge.unwrap().into_inner();
    }
    assert_eq!(path.weight().into_inner(), weight, "path {} has an inconsistent weight", path);
}
