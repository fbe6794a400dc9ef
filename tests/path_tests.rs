use ordered_float::OrderedFloat;
use yen_ksp::{Error, Path};

#[test]
fn test_path_accessors() {
    let path = Path::new(vec![0, 1, 3], OrderedFloat(2.0)).unwrap();

    assert_eq!(path.vertices(), &[0, 1, 3]);
    assert_eq!(path.weight(), OrderedFloat(2.0));
    assert_eq!(path.source(), 0);
    assert_eq!(path.target(), 3);
    assert_eq!(path.len(), 3);
    assert_eq!(path.edge_count(), 2);
    assert!(path.is_loopless());
    assert_eq!(path.to_vec(), vec![0, 1, 3]);
}

#[test]
fn test_empty_path_is_rejected() {
    let result = Path::new(Vec::new(), OrderedFloat(0.0));
    assert!(matches!(result, Err(Error::InvalidPath(_))));
}

#[test]
fn test_textual_views_reconstruct_the_same_sequence() {
    let path = Path::new(vec![12, 0, 7, 3], OrderedFloat(9.5)).unwrap();

    assert_eq!(path.to_string(), "12-0-7-3");
    assert_eq!(path.to_delimited(", "), "12, 0, 7, 3");

    let parsed = Path::parse(&path.to_string(), "-", path.weight()).unwrap();
    assert_eq!(parsed, path);
    assert_eq!(Path::<OrderedFloat<f64>>::parse_vertices("12, 0, 7, 3", ",").unwrap(), path.to_vec());
}

#[test]
fn test_single_vertex_path() {
    let path = Path::new(vec![4], OrderedFloat(0.0)).unwrap();

    assert_eq!(path.to_string(), "4");
    assert_eq!(path.source(), path.target());
    assert_eq!(path.edge_count(), 0);
    assert_eq!(Path::parse("4", "-", OrderedFloat(0.0)).unwrap(), path);
}

#[test]
fn test_parse_rejects_bad_text() {
    type P = Path<OrderedFloat<f64>>;

    assert!(matches!(P::parse_vertices("", "-"), Err(Error::InvalidPath(_))));
    assert!(matches!(P::parse_vertices("1-x-2", "-"), Err(Error::InvalidPath(_))));
    assert!(matches!(P::parse_vertices("1--2", "-"), Err(Error::InvalidPath(_))));
    assert!(matches!(P::parse_vertices("1-2", ""), Err(Error::InvalidArgument(_))));
}

#[test]
fn test_loop_detection_and_summary() {
    let looping = Path::new(vec![0, 1, 0, 2], OrderedFloat(3.0)).unwrap();
    assert!(!looping.is_loopless());

    let path = Path::new(vec![0, 2, 3], OrderedFloat(3.0)).unwrap();
    assert_eq!(path.summary(), "Cost: 3 Length: 3 Path: 0->2->3");
}
