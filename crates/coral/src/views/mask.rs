//! Predicate-masked subgraph view.

use std::hash::Hash;

use crate::config::GraphType;
use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::views::undirected_degree;

/// Hides backing elements matching a predicate.
///
/// Membership is recomputed on every query, never materialized: masking a
/// vertex also hides every edge touching it, and changes to the backing
/// graph show through immediately. The view is always unmodifiable.
pub struct MaskSubgraph<'g, V, E, G> {
    backing: &'g G,
    vertex_mask: Box<dyn Fn(&V) -> bool + 'g>,
    edge_mask: Box<dyn Fn(&E) -> bool + 'g>,
}

impl<'g, V, E, G> MaskSubgraph<'g, V, E, G>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
    G: Graph<V, E>,
{
    /// Elements for which a mask returns `true` are treated as absent.
    pub fn new<VM, EM>(backing: &'g G, vertex_mask: VM, edge_mask: EM) -> Self
    where
        VM: Fn(&V) -> bool + 'g,
        EM: Fn(&E) -> bool + 'g,
    {
        Self {
            backing,
            vertex_mask: Box::new(vertex_mask),
            edge_mask: Box::new(edge_mask),
        }
    }

    fn vertex_visible(&self, v: &V) -> bool {
        self.backing.contains_vertex(v) && !(self.vertex_mask)(v)
    }

    fn edge_visible(&self, e: &E) -> bool {
        if !self.backing.contains_edge(e) || (self.edge_mask)(e) {
            return false;
        }
        let (Some(source), Some(target)) =
            (self.backing.edge_source(e), self.backing.edge_target(e))
        else {
            return false;
        };
        !(self.vertex_mask)(&source) && !(self.vertex_mask)(&target)
    }

    fn visible_edges(&self, candidates: Vec<E>) -> Vec<E> {
        candidates
            .into_iter()
            .filter(|e| self.edge_visible(e))
            .collect()
    }
}

impl<V, E, G> Graph<V, E> for MaskSubgraph<'_, V, E, G>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
    G: Graph<V, E>,
{
    fn graph_type(&self) -> GraphType {
        self.backing.graph_type().frozen()
    }

    fn contains_vertex(&self, v: &V) -> bool {
        self.vertex_visible(v)
    }

    fn vertex_count(&self) -> usize {
        self.vertex_set().len()
    }

    fn vertex_set(&self) -> Vec<V> {
        self.backing
            .vertex_set()
            .into_iter()
            .filter(|v| !(self.vertex_mask)(v))
            .collect()
    }

    fn contains_edge(&self, e: &E) -> bool {
        self.edge_visible(e)
    }

    fn edge_count(&self) -> usize {
        self.edge_set().len()
    }

    fn edge_set(&self) -> Vec<E> {
        self.visible_edges(self.backing.edge_set())
    }

    fn get_edge(&self, source: &V, target: &V) -> Option<E> {
        self.get_all_edges(source, target).into_iter().next()
    }

    fn get_all_edges(&self, source: &V, target: &V) -> Vec<E> {
        if !self.vertex_visible(source) || !self.vertex_visible(target) {
            return Vec::new();
        }
        self.visible_edges(self.backing.get_all_edges(source, target))
    }

    fn edge_source(&self, e: &E) -> Option<V> {
        if !self.edge_visible(e) {
            return None;
        }
        self.backing.edge_source(e)
    }

    fn edge_target(&self, e: &E) -> Option<V> {
        if !self.edge_visible(e) {
            return None;
        }
        self.backing.edge_target(e)
    }

    fn edge_weight(&self, e: &E) -> Result<f64> {
        if !self.edge_visible(e) {
            return Err(GraphError::EdgeNotMember);
        }
        self.backing.edge_weight(e)
    }

    fn degree_of(&self, v: &V) -> Result<usize> {
        if self.graph_type().is_directed() {
            return Ok(self.incoming_edges_of(v)?.len() + self.outgoing_edges_of(v)?.len());
        }
        let edges = self.edges_of(v)?;
        Ok(undirected_degree(self.backing, v, &edges))
    }

    fn in_degree_of(&self, v: &V) -> Result<usize> {
        if self.graph_type().is_directed() {
            return Ok(self.incoming_edges_of(v)?.len());
        }
        self.degree_of(v)
    }

    fn out_degree_of(&self, v: &V) -> Result<usize> {
        if self.graph_type().is_directed() {
            return Ok(self.outgoing_edges_of(v)?.len());
        }
        self.degree_of(v)
    }

    fn edges_of(&self, v: &V) -> Result<Vec<E>> {
        if !self.vertex_visible(v) {
            return Err(GraphError::VertexNotMember);
        }
        Ok(self.visible_edges(self.backing.edges_of(v)?))
    }

    fn incoming_edges_of(&self, v: &V) -> Result<Vec<E>> {
        if !self.vertex_visible(v) {
            return Err(GraphError::VertexNotMember);
        }
        Ok(self.visible_edges(self.backing.incoming_edges_of(v)?))
    }

    fn outgoing_edges_of(&self, v: &V) -> Result<Vec<E>> {
        if !self.vertex_visible(v) {
            return Err(GraphError::VertexNotMember);
        }
        Ok(self.visible_edges(self.backing.outgoing_edges_of(v)?))
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
