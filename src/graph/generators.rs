use crate::graph::builder::{GraphBuilder, ParallelEdges};
use crate::graph::DirectedGraph;
use crate::Result;
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Generates a random directed graph with n vertices and roughly `edges_per_vertex * n` edges
///
/// Weights are whole numbers in `1..=max_weight`, so equal-weight paths are common.
/// The same seed always produces the same graph. Self-loops are skipped; parallel
/// edges may occur and are kept.
pub fn generate_random(
    n: usize,
    edges_per_vertex: usize,
    max_weight: u32,
    seed: u64,
) -> Result<DirectedGraph<OrderedFloat<f64>>> {
    let mut builder = GraphBuilder::new(n).with_parallel_edges(ParallelEdges::Keep);
    if n < 2 {
        return Ok(builder.build());
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let max_weight = max_weight.max(1);

    for _ in 0..n * edges_per_vertex {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1..=max_weight) as f64);
            builder.add_edge(u, v, weight)?;
        }
    }

    Ok(builder.build())
}

/// Generates a width x height grid with unit-weight edges in both directions (4-connectivity)
///
/// Vertex `(x, y)` has id `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> Result<DirectedGraph<OrderedFloat<f64>>> {
    let mut builder = GraphBuilder::new(width * height);
    let get_index = |x: usize, y: usize| -> usize { y * width + x };

    for y in 0..height {
        for x in 0..width {
            let current = get_index(x, y);
            let mut neighbors = Vec::with_capacity(4);
            if x > 0 {
                neighbors.push(get_index(x - 1, y));
            }
            if x + 1 < width {
                neighbors.push(get_index(x + 1, y));
            }
            if y > 0 {
                neighbors.push(get_index(x, y - 1));
            }
            if y + 1 < height {
                neighbors.push(get_index(x, y + 1));
            }
            for neighbor in neighbors {
                builder.add_edge(current, neighbor, OrderedFloat(1.0))?;
            }
        }
    }

    Ok(builder.build())
}
