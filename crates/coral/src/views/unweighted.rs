//! Unweighted overlay view.

use std::hash::Hash;

use crate::config::GraphType;
use crate::error::{GraphError, Result};
use crate::graph::{DEFAULT_EDGE_WEIGHT, Graph};

/// Presents any backing graph as unweighted: every edge reports the fixed
/// default weight and weight writes fail, while the structure stays fully
/// read-through and write-through.
pub struct UnweightedView<'g, G> {
    backing: &'g mut G,
}

impl<'g, G> UnweightedView<'g, G> {
    pub fn new(backing: &'g mut G) -> Self {
        Self { backing }
    }
}

impl<V, E, G> Graph<V, E> for UnweightedView<'_, G>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
    G: Graph<V, E>,
{
    fn graph_type(&self) -> GraphType {
        let mut t = self.backing.graph_type();
        t.weighted = false;
        t
    }

    fn contains_vertex(&self, v: &V) -> bool {
        self.backing.contains_vertex(v)
    }

    fn vertex_count(&self) -> usize {
        self.backing.vertex_count()
    }

    fn vertex_set(&self) -> Vec<V> {
        self.backing.vertex_set()
    }

    fn contains_edge(&self, e: &E) -> bool {
        self.backing.contains_edge(e)
    }

    fn edge_count(&self) -> usize {
        self.backing.edge_count()
    }

    fn edge_set(&self) -> Vec<E> {
        self.backing.edge_set()
    }

    fn get_edge(&self, source: &V, target: &V) -> Option<E> {
        self.backing.get_edge(source, target)
    }

    fn get_all_edges(&self, source: &V, target: &V) -> Vec<E> {
        self.backing.get_all_edges(source, target)
    }

    fn edge_source(&self, e: &E) -> Option<V> {
        self.backing.edge_source(e)
    }

    fn edge_target(&self, e: &E) -> Option<V> {
        self.backing.edge_target(e)
    }

    fn edge_weight(&self, e: &E) -> Result<f64> {
        if !self.backing.contains_edge(e) {
            return Err(GraphError::EdgeNotMember);
        }
        Ok(DEFAULT_EDGE_WEIGHT)
    }

    fn degree_of(&self, v: &V) -> Result<usize> {
        self.backing.degree_of(v)
    }

    fn in_degree_of(&self, v: &V) -> Result<usize> {
        self.backing.in_degree_of(v)
    }

    fn out_degree_of(&self, v: &V) -> Result<usize> {
        self.backing.out_degree_of(v)
    }

    fn edges_of(&self, v: &V) -> Result<Vec<E>> {
        self.backing.edges_of(v)
    }

    fn incoming_edges_of(&self, v: &V) -> Result<Vec<E>> {
        self.backing.incoming_edges_of(v)
    }

    fn outgoing_edges_of(&self, v: &V) -> Result<Vec<E>> {
        self.backing.outgoing_edges_of(v)
    }

    fn add_vertex(&mut self, v: V) -> Result<bool> {
        self.backing.add_vertex(v)
    }

    fn add_edge(&mut self, source: &V, target: &V) -> Result<Option<E>> {
        self.backing.add_edge(source, target)
    }

    fn add_edge_with(&mut self, source: &V, target: &V, edge: E) -> Result<bool> {
        self.backing.add_edge_with(source, target, edge)
    }

    fn remove_vertex(&mut self, v: &V) -> Result<bool> {
        self.backing.remove_vertex(v)
    }

    fn remove_edge(&mut self, e: &E) -> Result<bool> {
        self.backing.remove_edge(e)
    }

    fn remove_edge_between(&mut self, source: &V, target: &V) -> Result<Option<E>> {
        self.backing.remove_edge_between(source, target)
    }

    fn set_edge_weight(&mut self, _e: &E, _weight: f64) -> Result<()> {
        Err(GraphError::NotWeighted)
    }
}
