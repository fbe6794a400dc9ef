use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::yen::YenKShortestPaths;
use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::directed::DirectedGraph;
use crate::path::Path;
use libc::c_char;
use log::warn;
use ordered_float::OrderedFloat;
use std::ffi::CString;

pub struct FfiGraph {
    graph: DirectedGraph<OrderedFloat<f64>>,
}

/// Builds a graph from three parallel edge columns of length `edge_count`.
///
/// Returns null if an endpoint is out of range or a weight is negative or not finite.
///
/// # Safety
/// `from`, `to` and `weight` must each point to `edge_count` readable elements.
#[no_mangle]
pub unsafe extern "C" fn ksp_graph_build(
    vertex_count: usize,
    from: *const usize,
    to: *const usize,
    weight: *const f64,
    edge_count: usize,
) -> *mut FfiGraph {
    if edge_count > 0 && (from.is_null() || to.is_null() || weight.is_null()) {
        return std::ptr::null_mut();
    }
    let rows = (0..edge_count).map(|i| (*from.add(i), *to.add(i), OrderedFloat(*weight.add(i))));

    match DirectedGraph::build(vertex_count, rows) {
        Ok(graph) => Box::into_raw(Box::new(FfiGraph { graph })),
        Err(err) => {
            warn!("ksp_graph_build: {}", err);
            std::ptr::null_mut()
        }
    }
}

/// Releases a graph returned by [`ksp_graph_build`].
///
/// # Safety
/// `g` must be null or a pointer from [`ksp_graph_build`] not already freed.
#[no_mangle]
pub unsafe extern "C" fn ksp_graph_free(g: *mut FfiGraph) {
    if !g.is_null() {
        drop(Box::from_raw(g));
    }
}

/// A list of paths, each as a delimited string, with their weights
#[repr(C)]
pub struct FfiPathList {
    pub paths: *mut *mut c_char,
    pub weights: *mut f64,
    pub len: usize,
}

fn path_to_c_string(path: &Path<OrderedFloat<f64>>) -> *mut c_char {
    // Digits and '-' never contain an interior NUL
    match CString::new(path.to_string()) {
        Ok(text) => text.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Shortest path from `source` to `target` as a `-` delimited string.
///
/// Returns null when the target is unreachable or an id is unknown. Release the
/// string with [`ksp_string_free`].
///
/// # Safety
/// `g` must be null or a live pointer from [`ksp_graph_build`].
#[no_mangle]
pub unsafe extern "C" fn ksp_shortest_path(
    g: *const FfiGraph,
    source: usize,
    target: usize,
) -> *mut c_char {
    if g.is_null() {
        return std::ptr::null_mut();
    }
    let graph = &(*g).graph;
    match Dijkstra::new().shortest_path(graph, source, target) {
        Ok(Some(path)) => path_to_c_string(&path),
        Ok(None) => std::ptr::null_mut(),
        Err(err) => {
            warn!("ksp_shortest_path: {}", err);
            std::ptr::null_mut()
        }
    }
}

/// Releases a string returned by this library.
///
/// # Safety
/// `s` must be null or a string from [`ksp_shortest_path`] not already freed.
#[no_mangle]
pub unsafe extern "C" fn ksp_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

/// Up to `k` loopless shortest paths. Returns null on unknown ids.
/// Release the list with [`ksp_path_list_free`].
///
/// # Safety
/// `g` must be null or a live pointer from [`ksp_graph_build`].
#[no_mangle]
pub unsafe extern "C" fn ksp_k_shortest_paths(
    g: *const FfiGraph,
    source: usize,
    target: usize,
    k: usize,
) -> *mut FfiPathList {
    if g.is_null() {
        return std::ptr::null_mut();
    }
    let graph = &(*g).graph;
    let mut engine = match YenKShortestPaths::new(graph, source, target) {
        Ok(engine) => engine,
        Err(err) => {
            warn!("ksp_k_shortest_paths: {}", err);
            return std::ptr::null_mut();
        }
    };
    let found = engine.take_paths(k);

    let paths: Box<[*mut c_char]> = found.iter().map(path_to_c_string).collect();
    let weights: Box<[f64]> = found.iter().map(|p| p.weight().into_inner()).collect();
    let len = paths.len();

    Box::into_raw(Box::new(FfiPathList {
        paths: Box::into_raw(paths) as *mut *mut c_char,
        weights: Box::into_raw(weights) as *mut f64,
        len,
    }))
}

/// Releases a list returned by [`ksp_k_shortest_paths`], including its strings.
///
/// # Safety
/// `list` must be null or a pointer from [`ksp_k_shortest_paths`] not already freed.
#[no_mangle]
pub unsafe extern "C" fn ksp_path_list_free(list: *mut FfiPathList) {
    if list.is_null() {
        return;
    }
    let list = Box::from_raw(list);
    let paths = Box::from_raw(std::ptr::slice_from_raw_parts_mut(list.paths, list.len));
    for &path in paths.iter() {
        ksp_string_free(path);
    }
    drop(Box::from_raw(std::ptr::slice_from_raw_parts_mut(list.weights, list.len)));
}
