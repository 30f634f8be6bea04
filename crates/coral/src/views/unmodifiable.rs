//! Frozen snapshot wrapper.

use std::hash::Hash;

use crate::config::GraphType;
use crate::error::{GraphError, Result};
use crate::graph::Graph;

/// Owns a graph and exposes it read-only; every mutation fails with
/// [`GraphError::Unmodifiable`].
pub struct UnmodifiableGraph<G> {
    inner: G,
}

impl<G> UnmodifiableGraph<G> {
    pub fn new(inner: G) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<V, E, G> Graph<V, E> for UnmodifiableGraph<G>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
    G: Graph<V, E>,
{
    fn graph_type(&self) -> GraphType {
        self.inner.graph_type().frozen()
    }

    fn contains_vertex(&self, v: &V) -> bool {
        self.inner.contains_vertex(v)
    }

    fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    fn vertex_set(&self) -> Vec<V> {
        self.inner.vertex_set()
    }

    fn contains_edge(&self, e: &E) -> bool {
        self.inner.contains_edge(e)
    }

    fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    fn edge_set(&self) -> Vec<E> {
        self.inner.edge_set()
    }

    fn get_edge(&self, source: &V, target: &V) -> Option<E> {
        self.inner.get_edge(source, target)
    }

    fn get_all_edges(&self, source: &V, target: &V) -> Vec<E> {
        self.inner.get_all_edges(source, target)
    }

    fn edge_source(&self, e: &E) -> Option<V> {
        self.inner.edge_source(e)
    }

    fn edge_target(&self, e: &E) -> Option<V> {
        self.inner.edge_target(e)
    }

    fn edge_weight(&self, e: &E) -> Result<f64> {
        self.inner.edge_weight(e)
    }

    fn degree_of(&self, v: &V) -> Result<usize> {
        self.inner.degree_of(v)
    }

    fn in_degree_of(&self, v: &V) -> Result<usize> {
        self.inner.in_degree_of(v)
    }

    fn out_degree_of(&self, v: &V) -> Result<usize> {
        self.inner.out_degree_of(v)
    }

    fn edges_of(&self, v: &V) -> Result<Vec<E>> {
        self.inner.edges_of(v)
    }

    fn incoming_edges_of(&self, v: &V) -> Result<Vec<E>> {
        self.inner.incoming_edges_of(v)
    }

    fn outgoing_edges_of(&self, v: &V) -> Result<Vec<E>> {
        self.inner.outgoing_edges_of(v)
    }

    fn add_vertex(&mut self, _v: V) -> Result<bool> {
        Err(GraphError::Unmodifiable)
    }

    fn add_edge(&mut self, _source: &V, _target: &V) -> Result<Option<E>> {
        Err(GraphError::Unmodifiable)
    }

    fn add_edge_with(&mut self, _source: &V, _target: &V, _edge: E) -> Result<bool> {
        Err(GraphError::Unmodifiable)
    }

    fn remove_vertex(&mut self, _v: &V) -> Result<bool> {
        Err(GraphError::Unmodifiable)
    }

    fn remove_edge(&mut self, _e: &E) -> Result<bool> {
        Err(GraphError::Unmodifiable)
    }

    fn remove_edge_between(&mut self, _source: &V, _target: &V) -> Result<Option<E>> {
        Err(GraphError::Unmodifiable)
    }

    fn set_edge_weight(&mut self, _e: &E, _weight: f64) -> Result<()> {
        Err(GraphError::Unmodifiable)
    }
}
