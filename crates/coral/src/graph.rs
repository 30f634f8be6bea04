//! The abstract graph capability surface.
//!
//! Algorithms, importers and builders consume graphs exclusively through
//! [`Graph`], never through a concrete storage type. Containers and views
//! implement the same trait; views override only what differs from their
//! backing graph.

use std::hash::Hash;

use crate::config::GraphType;
use crate::error::Result;

/// Weight reported for every edge of an unweighted graph.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Read/write contract shared by graph containers and views.
///
/// Vertices and edge tokens are opaque caller-supplied values; the graph only
/// requires them to be equatable, hashable and cheap to clone. Set-returning
/// queries yield owned vectors in insertion order.
///
/// Mutating operations distinguish three outcomes:
/// - `Ok` with a "changed" payload — the structure was mutated;
/// - `Ok` with a no-op payload (`None` / `false`) — the call was legal but
///   had no effect (duplicate edge under a no-multi-edge policy, re-added
///   vertex, already-present token);
/// - `Err` — a structural violation or an unsupported operation for this
///   graph kind, reported synchronously with nothing mutated.
pub trait Graph<V, E>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    /// Capability descriptor, computed on demand.
    fn graph_type(&self) -> GraphType;

    fn contains_vertex(&self, v: &V) -> bool;
    fn vertex_count(&self) -> usize;
    /// All vertices in insertion order.
    fn vertex_set(&self) -> Vec<V>;

    fn contains_edge(&self, e: &E) -> bool;
    fn edge_count(&self) -> usize;
    /// All edge tokens in insertion order.
    fn edge_set(&self) -> Vec<E>;

    /// Some edge connecting `source` to `target`, if any.
    fn get_edge(&self, source: &V, target: &V) -> Option<E>;
    /// Every edge connecting `source` to `target` (more than one only in
    /// multigraphs). Empty when either endpoint is absent.
    fn get_all_edges(&self, source: &V, target: &V) -> Vec<E>;

    fn edge_source(&self, e: &E) -> Option<V>;
    fn edge_target(&self, e: &E) -> Option<V>;
    /// Weight of `e`; [`DEFAULT_EDGE_WEIGHT`] on unweighted graphs.
    fn edge_weight(&self, e: &E) -> Result<f64>;

    /// Number of incident edge ends at `v`. A self-loop of an undirected
    /// graph contributes 2 even though it is a single element of
    /// [`Graph::edges_of`]; this keeps the handshake identity
    /// Σdeg(v) = 2·|E| intact.
    fn degree_of(&self, v: &V) -> Result<usize>;
    fn in_degree_of(&self, v: &V) -> Result<usize>;
    fn out_degree_of(&self, v: &V) -> Result<usize>;

    /// Every edge touching `v`; a self-loop appears exactly once.
    fn edges_of(&self, v: &V) -> Result<Vec<E>>;
    fn incoming_edges_of(&self, v: &V) -> Result<Vec<E>>;
    fn outgoing_edges_of(&self, v: &V) -> Result<Vec<E>>;

    /// Adds `v`. `Ok(false)` when the vertex is already present.
    fn add_vertex(&mut self, v: V) -> Result<bool>;

    /// Adds a factory-created edge from `source` to `target` and returns its
    /// token. `Ok(None)` when an equal edge exists and multi-edges are
    /// disallowed.
    fn add_edge(&mut self, source: &V, target: &V) -> Result<Option<E>>;

    /// Adds a caller-supplied edge token. `Ok(false)` when the token is
    /// already present, or an equal edge exists and multi-edges are
    /// disallowed.
    fn add_edge_with(&mut self, source: &V, target: &V, edge: E) -> Result<bool>;

    /// Removes `v` and, before that, every edge previously reported by
    /// [`Graph::edges_of`]. `Ok(false)` when the vertex is absent.
    fn remove_vertex(&mut self, v: &V) -> Result<bool>;

    fn remove_edge(&mut self, e: &E) -> Result<bool>;
    fn remove_edge_between(&mut self, source: &V, target: &V) -> Result<Option<E>>;

    fn set_edge_weight(&mut self, e: &E, weight: f64) -> Result<()>;
}

/// Pure delegation: a `&mut` reference to a graph is itself a graph.
///
/// This is what lets callers hand a borrowed container to a builder or an
/// algorithm without wrapping it.
impl<V, E, G> Graph<V, E> for &mut G
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
    G: Graph<V, E> + ?Sized,
{
    fn graph_type(&self) -> GraphType {
        (**self).graph_type()
    }

    fn contains_vertex(&self, v: &V) -> bool {
        (**self).contains_vertex(v)
    }

    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn vertex_set(&self) -> Vec<V> {
        (**self).vertex_set()
    }

    fn contains_edge(&self, e: &E) -> bool {
        (**self).contains_edge(e)
    }

    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }

    fn edge_set(&self) -> Vec<E> {
        (**self).edge_set()
    }

    fn get_edge(&self, source: &V, target: &V) -> Option<E> {
        (**self).get_edge(source, target)
    }

    fn get_all_edges(&self, source: &V, target: &V) -> Vec<E> {
        (**self).get_all_edges(source, target)
    }

    fn edge_source(&self, e: &E) -> Option<V> {
        (**self).edge_source(e)
    }

    fn edge_target(&self, e: &E) -> Option<V> {
        (**self).edge_target(e)
    }

    fn edge_weight(&self, e: &E) -> Result<f64> {
        (**self).edge_weight(e)
    }

    fn degree_of(&self, v: &V) -> Result<usize> {
        (**self).degree_of(v)
    }

    fn in_degree_of(&self, v: &V) -> Result<usize> {
        (**self).in_degree_of(v)
    }

    fn out_degree_of(&self, v: &V) -> Result<usize> {
        (**self).out_degree_of(v)
    }

    fn edges_of(&self, v: &V) -> Result<Vec<E>> {
        (**self).edges_of(v)
    }

    fn incoming_edges_of(&self, v: &V) -> Result<Vec<E>> {
        (**self).incoming_edges_of(v)
    }

    fn outgoing_edges_of(&self, v: &V) -> Result<Vec<E>> {
        (**self).outgoing_edges_of(v)
    }

    fn add_vertex(&mut self, v: V) -> Result<bool> {
        (**self).add_vertex(v)
    }

    fn add_edge(&mut self, source: &V, target: &V) -> Result<Option<E>> {
        (**self).add_edge(source, target)
    }

    fn add_edge_with(&mut self, source: &V, target: &V, edge: E) -> Result<bool> {
        (**self).add_edge_with(source, target, edge)
    }

    fn remove_vertex(&mut self, v: &V) -> Result<bool> {
        (**self).remove_vertex(v)
    }

    fn remove_edge(&mut self, e: &E) -> Result<bool> {
        (**self).remove_edge(e)
    }

    fn remove_edge_between(&mut self, source: &V, target: &V) -> Result<Option<E>> {
        (**self).remove_edge_between(source, target)
    }

    fn set_edge_weight(&mut self, e: &E, weight: f64) -> Result<()> {
        (**self).set_edge_weight(e, weight)
    }
}

/// Pure delegation for owned indirection, `Box<dyn Graph>` included.
impl<V, E, G> Graph<V, E> for Box<G>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
    G: Graph<V, E> + ?Sized,
{
    fn graph_type(&self) -> GraphType {
        (**self).graph_type()
    }

    fn contains_vertex(&self, v: &V) -> bool {
        (**self).contains_vertex(v)
    }

    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn vertex_set(&self) -> Vec<V> {
        (**self).vertex_set()
    }

    fn contains_edge(&self, e: &E) -> bool {
        (**self).contains_edge(e)
    }

    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }

    fn edge_set(&self) -> Vec<E> {
        (**self).edge_set()
    }

    fn get_edge(&self, source: &V, target: &V) -> Option<E> {
        (**self).get_edge(source, target)
    }

    fn get_all_edges(&self, source: &V, target: &V) -> Vec<E> {
        (**self).get_all_edges(source, target)
    }

    fn edge_source(&self, e: &E) -> Option<V> {
        (**self).edge_source(e)
    }

    fn edge_target(&self, e: &E) -> Option<V> {
        (**self).edge_target(e)
    }

    fn edge_weight(&self, e: &E) -> Result<f64> {
        (**self).edge_weight(e)
    }

    fn degree_of(&self, v: &V) -> Result<usize> {
        (**self).degree_of(v)
    }

    fn in_degree_of(&self, v: &V) -> Result<usize> {
        (**self).in_degree_of(v)
    }

    fn out_degree_of(&self, v: &V) -> Result<usize> {
        (**self).out_degree_of(v)
    }

    fn edges_of(&self, v: &V) -> Result<Vec<E>> {
        (**self).edges_of(v)
    }

    fn incoming_edges_of(&self, v: &V) -> Result<Vec<E>> {
        (**self).incoming_edges_of(v)
    }

    fn outgoing_edges_of(&self, v: &V) -> Result<Vec<E>> {
        (**self).outgoing_edges_of(v)
    }

    fn add_vertex(&mut self, v: V) -> Result<bool> {
        (**self).add_vertex(v)
    }

    fn add_edge(&mut self, source: &V, target: &V) -> Result<Option<E>> {
        (**self).add_edge(source, target)
    }

    fn add_edge_with(&mut self, source: &V, target: &V, edge: E) -> Result<bool> {
        (**self).add_edge_with(source, target, edge)
    }

    fn remove_vertex(&mut self, v: &V) -> Result<bool> {
        (**self).remove_vertex(v)
    }

    fn remove_edge(&mut self, e: &E) -> Result<bool> {
        (**self).remove_edge(e)
    }

    fn remove_edge_between(&mut self, source: &V, target: &V) -> Result<Option<E>> {
        (**self).remove_edge_between(source, target)
    }

    fn set_edge_weight(&mut self, e: &E, weight: f64) -> Result<()> {
        (**self).set_edge_weight(e, weight)
    }
}
