use ordered_float::OrderedFloat;
use yen_ksp::data_structures::{BinaryHeapWrapper, Candidate, CandidateFrontier};
use yen_ksp::Path;

fn candidate(vertices: &[usize], weight: f64, deviation_index: usize) -> Candidate<OrderedFloat<f64>> {
    Candidate::new(
        Path::new(vertices.to_vec(), OrderedFloat(weight)).unwrap(),
        deviation_index,
    )
}

#[test]
fn test_heap_breaks_ties_by_lowest_vertex() {
    let mut queue = BinaryHeapWrapper::new();
    queue.push(7usize, OrderedFloat(1.0));
    queue.push(3usize, OrderedFloat(1.0));
    queue.push(5usize, OrderedFloat(0.5));

    assert_eq!(queue.len(), 3);
    assert_eq!(queue.peek(), Some((5, OrderedFloat(0.5))));
    assert_eq!(queue.pop(), Some((5, OrderedFloat(0.5))));
    assert_eq!(queue.pop(), Some((3, OrderedFloat(1.0))));
    assert_eq!(queue.pop(), Some((7, OrderedFloat(1.0))));
    assert!(queue.is_empty());
}

#[test]
fn test_frontier_orders_by_weight_length_then_sequence() {
    let mut frontier = CandidateFrontier::new();
    assert!(frontier.insert(candidate(&[0, 2, 3, 4, 5], 8.0, 2)));
    assert!(frontier.insert(candidate(&[0, 2, 1, 3, 5], 8.0, 1)));
    assert!(frontier.insert(candidate(&[0, 1, 3, 5], 8.0, 0)));
    assert!(frontier.insert(candidate(&[0, 2, 4, 5], 7.0, 1)));

    let order: Vec<Vec<usize>> = std::iter::from_fn(|| frontier.pop())
        .map(|c| c.path.to_vec())
        .collect();
    assert_eq!(
        order,
        vec![
            vec![0, 2, 4, 5],
            vec![0, 1, 3, 5],
            vec![0, 2, 1, 3, 5],
            vec![0, 2, 3, 4, 5],
        ]
    );
}

#[test]
fn test_frontier_rejects_duplicate_sequences() {
    let mut frontier = CandidateFrontier::new();
    frontier.mark_seen(&[0, 1, 3]);

    assert!(!frontier.insert(candidate(&[0, 1, 3], 2.0, 0)));
    assert!(frontier.insert(candidate(&[0, 2, 3], 3.0, 0)));
    assert!(!frontier.insert(candidate(&[0, 2, 3], 3.0, 1)));
    assert_eq!(frontier.len(), 1);

    let popped = frontier.pop().unwrap();
    assert_eq!(popped.deviation_index, 0);
    // Still remembered after leaving the heap
    assert!(frontier.contains(&[0, 2, 3]));
    assert!(!frontier.insert(candidate(&[0, 2, 3], 3.0, 0)));
    assert!(frontier.is_empty());
}
