use std::env;
use std::time::{Duration, Instant};
use ordered_float::OrderedFloat;
use yen_ksp::algorithm::{dijkstra::Dijkstra, yen::YenKShortestPaths, ShortestPathAlgorithm};
use yen_ksp::graph::{generators::generate_random, DirectedGraph, Graph};

// Time one Dijkstra query and one K shortest paths query on the same graph
fn benchmark_query(
    graph: &DirectedGraph<OrderedFloat<f64>>,
    source: usize,
    target: usize,
    k: usize,
) -> yen_ksp::Result<(Duration, Duration, usize)> {
    let dijkstra = Dijkstra::new();
    let start = Instant::now();
    let shortest = dijkstra.shortest_path(graph, source, target)?;
    let dijkstra_time = start.elapsed();

    let start = Instant::now();
    let mut yen = YenKShortestPaths::new(graph, source, target)?;
    let paths = yen.take_paths(k);
    let yen_time = start.elapsed();

    if let (Some(shortest), Some(first)) = (shortest.as_ref(), paths.first()) {
        if shortest.weight() != first.weight() {
            log::warn!(
                "First Yen path weight {} differs from Dijkstra weight {}",
                first.weight(),
                shortest.weight()
            );
        }
    }

    Ok((dijkstra_time, yen_time, paths.len()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let k = if args.len() > 1 {
        args[1].parse().unwrap_or(10)
    } else {
        10
    };

    // Define graph sizes to test
    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4;

    println!("=====================================================");
    println!("Benchmark: Dijkstra vs Yen (k = {})", k);
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        let graph = generate_random(size, edge_factor, 100, 42)?;
        println!("\nGraph with {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let (dijkstra_time, yen_time, found) = benchmark_query(&graph, 0, size - 1, k)?;
        println!("  - Dijkstra: {:?}", dijkstra_time);
        println!("  - Yen: {} paths in {:?}", found, yen_time);

        results.push((size, dijkstra_time, yen_time, found));
    }

    println!("\n=====================================================");
    println!("Summary");
    println!("=====================================================");
    println!("{:>10} | {:>14} | {:>14} | {:>6}", "Vertices", "Dijkstra", "Yen", "Paths");
    for (size, dijkstra_time, yen_time, found) in results {
        println!(
            "{:>10} | {:>14?} | {:>14?} | {:>6}",
            size, dijkstra_time, yen_time, found
        );
    }

    Ok(())
}
