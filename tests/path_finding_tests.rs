mod common;

use common::{all_loopless_paths, assert_valid_path, graph, random_decimal, W};
use ordered_float::OrderedFloat;
use yen_ksp::algorithm::dijkstra::Dijkstra;
use yen_ksp::algorithm::traits::ShortestPathAlgorithm;
use yen_ksp::graph::generators::{generate_grid, generate_random};
use yen_ksp::graph::{DirectedGraph, Graph, GraphBuilder, ParallelEdges};
use yen_ksp::{Error, Path};

fn shortest(graph: &DirectedGraph<W>, source: usize, target: usize) -> Option<Path<W>> {
    Dijkstra::new().shortest_path(graph, source, target).unwrap()
}

#[test]
fn test_diamond_shortest_path() {
    let g = common::diamond();
    let path = shortest(&g, 0, 3).expect("0 reaches 3");

    assert_eq!(path.vertices(), &[0, 1, 3]);
    assert_eq!(path.weight(), OrderedFloat(2.0));
    assert_eq!(path.to_string(), "0-1-3");
}

#[test]
fn test_disconnected_vertex_has_no_path() {
    let g = graph(5, &[(0, 1, 1.0), (1, 3, 1.0), (0, 2, 2.0), (2, 3, 1.0)]);

    assert_eq!(shortest(&g, 0, 4), None);
    // Reachability is directional
    assert_eq!(shortest(&g, 3, 0), None);
}

#[test]
fn test_parallel_edges_use_cheapest() {
    let kept = graph(2, &[(0, 1, 5.0), (0, 1, 1.0)]);
    let path = shortest(&kept, 0, 1).unwrap();
    assert_eq!(path.vertices(), &[0, 1]);
    assert_eq!(path.weight(), OrderedFloat(1.0));

    let collapsed = GraphBuilder::new(2)
        .with_parallel_edges(ParallelEdges::CollapseToMinimum)
        .edge(0, 1, OrderedFloat(5.0))
        .unwrap()
        .edge(0, 1, OrderedFloat(1.0))
        .unwrap()
        .build();
    assert_eq!(shortest(&collapsed, 0, 1), Some(path));
}

#[test]
fn test_source_equals_target() {
    let g = common::diamond();
    let path = shortest(&g, 2, 2).unwrap();

    assert_eq!(path.vertices(), &[2]);
    assert_eq!(path.weight(), OrderedFloat(0.0));
}

#[test]
fn test_unknown_vertices_are_errors() {
    let g = common::diamond();
    let dijkstra = Dijkstra::new();

    assert_eq!(dijkstra.shortest_path(&g, 9, 0).unwrap_err(), Error::UnknownVertex(9));
    assert_eq!(dijkstra.shortest_path(&g, 0, 4).unwrap_err(), Error::UnknownVertex(4));
    assert_eq!(
        dijkstra.compute_shortest_paths(&g, 4).unwrap_err(),
        Error::UnknownVertex(4)
    );
}

#[test]
fn test_ties_are_broken_by_lowest_vertex_id() {
    // Two equal routes; insertion order must not matter
    let forward = graph(4, &[(0, 1, 1.0), (0, 2, 1.0), (1, 3, 1.0), (2, 3, 1.0)]);
    let reversed = graph(4, &[(2, 3, 1.0), (1, 3, 1.0), (0, 2, 1.0), (0, 1, 1.0)]);

    assert_eq!(shortest(&forward, 0, 3).unwrap().vertices(), &[0, 1, 3]);
    assert_eq!(shortest(&reversed, 0, 3).unwrap().vertices(), &[0, 1, 3]);
}

#[test]
fn test_repeated_queries_are_identical() {
    let g = generate_random(200, 3, 5, 11).unwrap();
    let first = shortest(&g, 0, 199);
    for _ in 0..5 {
        assert_eq!(shortest(&g, 0, 199), first);
    }
}

#[test]
fn test_zero_weight_edges() {
    let g = graph(4, &[(0, 1, 0.0), (1, 2, 0.0), (0, 2, 0.0), (2, 3, 1.0)]);
    let path = shortest(&g, 0, 3).unwrap();

    assert_eq!(path.weight(), OrderedFloat(1.0));
    assert_valid_path(&g, &path, 0, 3);
}

#[test]
fn test_single_source_tree() {
    let g = graph(5, &[(0, 1, 4.0), (0, 2, 1.0), (2, 1, 2.0), (1, 3, 1.0)]);
    let result = Dijkstra::new().compute_shortest_paths(&g, 0).unwrap();

    assert_eq!(result.distances[1], Some(OrderedFloat(3.0)));
    assert_eq!(result.distances[3], Some(OrderedFloat(4.0)));
    assert_eq!(result.distances[4], None);
    assert_eq!(result.predecessors[1], Some(2));
    assert_eq!(result.path_to(3).unwrap().vertices(), &[0, 2, 1, 3]);
    assert!(result.path_to(4).is_none());
}

// Test that paths can be found in a simple grid
#[test]
fn test_path_finding_simple_grid() {
    let g = generate_grid(10, 10).unwrap();
    let path = shortest(&g, 0, 99).expect("Dijkstra should find a path");

    assert_valid_path(&g, &path, 0, 99);
    // Manhattan distance on a unit grid
    assert_eq!(path.weight(), OrderedFloat(18.0));
    assert_eq!(path.len(), 19);
}

// Test path finding with obstacles
#[test]
fn test_path_finding_with_obstacles() {
    let grid = generate_grid(10, 10).unwrap();

    // A wall in column 5 for rows 0..8 leaves a gap in the bottom two rows
    let wall: Vec<usize> = (0..8).map(|y| y * 10 + 5).collect();
    let edges: Vec<(usize, usize, W)> = grid
        .edges()
        .filter(|(from, to, _)| !wall.contains(from) && !wall.contains(to))
        .collect();
    let g = DirectedGraph::build(100, edges).unwrap();

    let path = shortest(&g, 0, 9).expect("Dijkstra should find a path around obstacles");
    assert_valid_path(&g, &path, 0, 9);
    assert!(path.vertices().iter().all(|v| !wall.contains(v)));
    // Down 8 rows, across 9 columns, back up 8 rows
    assert_eq!(path.weight(), OrderedFloat(25.0));
}

#[test]
fn test_matches_brute_force_on_small_graphs() {
    for seed in 0..40 {
        let g = generate_random(8, 2, 9, seed).unwrap();
        for (source, target) in [(0, 7), (1, 6), (5, 2), (3, 3)] {
            let brute = all_loopless_paths(&g, source, target);
            let best = brute
                .iter()
                .map(|(_, weight)| *weight)
                .fold(None, |acc: Option<f64>, w| Some(acc.map_or(w, |a| a.min(w))));

            match shortest(&g, source, target) {
                Some(path) => {
                    assert_valid_path(&g, &path, source, target);
                    assert_eq!(Some(path.weight().into_inner()), best, "seed {}", seed);
                }
                None => assert!(brute.is_empty(), "seed {} missed a path", seed),
            }
        }
    }
}

#[test]
fn test_decimal_weights_match_brute_force_exactly() {
    for seed in 0..40 {
        let g = random_decimal(8, 3, seed);
        for (source, target) in [(0, 7), (4, 1), (6, 3)] {
            let best = all_loopless_paths(&g, source, target)
                .into_iter()
                .map(|(_, weight)| weight)
                .fold(None, |acc: Option<f64>, w| Some(acc.map_or(w, |a| a.min(w))));

            let path = shortest(&g, source, target);
            assert_eq!(path.as_ref().map(|p| p.weight().into_inner()), best, "seed {}", seed);
            if let Some(path) = path {
                assert_valid_path(&g, &path, source, target);
            }
        }
    }
}

#[test]
fn test_grid_graph_edge_counts() {
    let g = generate_grid(3, 2).unwrap();
    assert_eq!(g.vertex_count(), 6);
    // 4 horizontal and 3 vertical links, each in both directions
    assert_eq!(g.edge_count(), 14);
}
