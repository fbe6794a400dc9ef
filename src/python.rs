use crate::query::{self, EdgeRow, IndexBase, QueryOptions};
use pyo3::prelude::*;

fn to_py_err(err: crate::Error) -> PyErr {
    match err {
        crate::Error::IllegalState(_) => pyo3::exceptions::PyRuntimeError::new_err(err.to_string()),
        _ => pyo3::exceptions::PyValueError::new_err(err.to_string()),
    }
}

fn options(one_based: bool) -> QueryOptions {
    let base = if one_based { IndexBase::One } else { IndexBase::Zero };
    QueryOptions::default().with_index_base(base)
}

fn rows(edges: Vec<(usize, usize, f64)>) -> Vec<EdgeRow> {
    edges.into_iter().map(EdgeRow::from).collect()
}

/// Shortest path as a delimited string, or None when unreachable
#[pyfunction]
#[pyo3(signature = (source, target, vertex_count, edges, verbose = false, one_based = false))]
fn shortest_path(
    source: usize,
    target: usize,
    vertex_count: usize,
    edges: Vec<(usize, usize, f64)>,
    verbose: bool,
    one_based: bool,
) -> PyResult<Option<String>> {
    query::shortest_path_string(
        source,
        target,
        vertex_count,
        &rows(edges),
        verbose,
        &options(one_based),
    )
    .map_err(to_py_err)
}

/// Up to k shortest loopless paths as vertex lists
#[pyfunction]
#[pyo3(signature = (edges, source, target, k, vertex_count, verbose = false, one_based = false))]
fn k_shortest_paths(
    edges: Vec<(usize, usize, f64)>,
    source: usize,
    target: usize,
    k: usize,
    vertex_count: usize,
    verbose: bool,
    one_based: bool,
) -> PyResult<Vec<Vec<usize>>> {
    let paths = query::k_shortest_paths(
        &rows(edges),
        source,
        target,
        k,
        vertex_count,
        verbose,
        &options(one_based),
    )
    .map_err(to_py_err)?;

    Ok(paths.into_iter().map(|p| p.into_vertices()).collect())
}

#[pymodule]
fn yen_ksp_py(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(shortest_path, m)?)?;
    m.add_function(wrap_pyfunction!(k_shortest_paths, m)?)?;
    Ok(())
}
