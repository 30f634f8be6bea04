//! Weighted overlay view.

use std::hash::Hash;

use crate::FxHashMap;
use crate::config::GraphType;
use crate::error::{GraphError, Result};
use crate::graph::Graph;

/// Presents any backing graph as weighted.
///
/// Weight reads hit a local overlay map first and fall back to the backing
/// weight; weight writes always land in the overlay, and additionally reach
/// the backing when the backing is itself weighted — a write is never
/// silently dropped. Structure reads and writes go straight through.
pub struct WeightedView<'g, E, G> {
    backing: &'g mut G,
    overlay: FxHashMap<E, f64>,
}

impl<'g, E, G> WeightedView<'g, E, G> {
    pub fn new(backing: &'g mut G) -> Self {
        Self {
            backing,
            overlay: FxHashMap::default(),
        }
    }
}

impl<V, E, G> Graph<V, E> for WeightedView<'_, E, G>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
    G: Graph<V, E>,
{
    fn graph_type(&self) -> GraphType {
        let mut t = self.backing.graph_type();
        t.weighted = true;
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
        if let Some(weight) = self.overlay.get(e) {
            return Ok(*weight);
        }
        self.backing.edge_weight(e)
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
        let incident = if self.backing.contains_vertex(v) {
            self.backing.edges_of(v)?
        } else {
            Vec::new()
        };
        let removed = self.backing.remove_vertex(v)?;
        if removed {
            for e in &incident {
                self.overlay.remove(e);
            }
        }
        Ok(removed)
    }

    fn remove_edge(&mut self, e: &E) -> Result<bool> {
        let removed = self.backing.remove_edge(e)?;
        if removed {
            self.overlay.remove(e);
        }
        Ok(removed)
    }

    fn remove_edge_between(&mut self, source: &V, target: &V) -> Result<Option<E>> {
        let removed = self.backing.remove_edge_between(source, target)?;
        if let Some(e) = &removed {
            self.overlay.remove(e);
        }
        Ok(removed)
    }

    fn set_edge_weight(&mut self, e: &E, weight: f64) -> Result<()> {
        if !self.backing.contains_edge(e) {
            return Err(GraphError::EdgeNotMember);
        }
        self.overlay.insert(e.clone(), weight);
        if self.backing.graph_type().is_weighted() {
            self.backing.set_edge_weight(e, weight)?;
        }
        Ok(())
    }
}
