//! The base graph engine.
//!
//! [`BaseGraph`] composes an adjacency [`specifics`](crate::base::specifics)
//! strategy with an [`edge_store`](crate::base::edge_store) strategy and
//! enforces the structural invariants on top of them: endpoint membership,
//! self-loop and multi-edge policy, and cascade removal. Both component
//! updates happen inside one `&mut self` call, so no reader can observe an
//! edge present in one index but not the other.

pub(crate) mod edge_store;
pub(crate) mod specifics;

use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::config::{GraphConfig, GraphType};
use crate::error::{GraphError, Result};
use crate::graph::Graph;
use edge_store::{EdgeStore, UniformEdgeStore, WeightedEdgeStore};
use specifics::{Specifics, new_specifics};

/// Space/time tradeoff of the adjacency index.
///
/// `FastLookup` keeps an extra (source, target) → edges hash index so
/// [`Graph::get_edge`] and [`Graph::get_all_edges`] run in O(1) instead of
/// O(degree). Purely a performance choice; observable behavior is identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IndexKind {
    Plain,
    #[default]
    FastLookup,
}

/// In-memory vertex/edge container with a fixed [`GraphConfig`] shape.
///
/// Vertices and edge tokens are opaque caller-supplied values. Edge tokens
/// for [`Graph::add_edge`] come from the edge factory given at construction
/// (or `E::default()` for [`BaseGraph::new`]).
pub struct BaseGraph<V, E> {
    config: GraphConfig,
    edge_factory: Box<dyn Fn(&V, &V) -> E + Send + Sync>,
    specifics: Box<dyn Specifics<V, E>>,
    edge_store: Box<dyn EdgeStore<V, E>>,
    // Bumped on every structural mutation; cursors compare it to fail fast
    // instead of yielding stale orders.
    generation: u64,
}

impl<V, E> BaseGraph<V, E>
where
    V: Eq + Hash + Clone + 'static,
    E: Eq + Hash + Clone + Default + 'static,
{
    /// A graph whose edge tokens are default-constructed.
    pub fn new(config: GraphConfig) -> Self {
        Self::with_parts(config, IndexKind::default(), |_: &V, _: &V| E::default())
    }
}

impl<V, E> BaseGraph<V, E>
where
    V: Eq + Hash + Clone + 'static,
    E: Eq + Hash + Clone + 'static,
{
    /// A graph whose edge tokens come from `edge_factory`.
    pub fn with_factory<F>(config: GraphConfig, edge_factory: F) -> Self
    where
        F: Fn(&V, &V) -> E + Send + Sync + 'static,
    {
        Self::with_parts(config, IndexKind::default(), edge_factory)
    }

    pub fn with_parts<F>(config: GraphConfig, index: IndexKind, edge_factory: F) -> Self
    where
        F: Fn(&V, &V) -> E + Send + Sync + 'static,
    {
        let edge_store: Box<dyn EdgeStore<V, E>> = if config.weighted {
            Box::new(WeightedEdgeStore::new())
        } else {
            Box::new(UniformEdgeStore::new())
        };
        Self {
            config,
            edge_factory: Box::new(edge_factory),
            specifics: new_specifics(config.directed, index == IndexKind::FastLookup),
            edge_store,
            generation: 0,
        }
    }

    pub fn config(&self) -> GraphConfig {
        self.config
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn new_edge_token(&self, source: &V, target: &V) -> E {
        (self.edge_factory)(source, target)
    }

    fn scan_all_edges(&self, source: &V, target: &V) -> Vec<E> {
        if self.config.directed {
            let Some(candidates) = self.specifics.outgoing_edges_of(source) else {
                return Vec::new();
            };
            candidates
                .into_iter()
                .filter(|e| {
                    self.edge_store
                        .endpoints(e)
                        .is_some_and(|(_, t)| t == *target)
                })
                .collect()
        } else {
            let Some(candidates) = self.specifics.edges_of(source) else {
                return Vec::new();
            };
            candidates
                .into_iter()
                .filter(|e| {
                    self.edge_store.endpoints(e).is_some_and(|(s, t)| {
                        (s == *source && t == *target) || (s == *target && t == *source)
                    })
                })
                .collect()
        }
    }

    fn check_endpoints(&self, source: &V, target: &V) -> Result<()> {
        if !self.specifics.contains_vertex(source) || !self.specifics.contains_vertex(target) {
            return Err(GraphError::VertexNotMember);
        }
        if source == target && !self.config.self_loops {
            return Err(GraphError::SelfLoopsNotAllowed);
        }
        Ok(())
    }

    fn insert_edge(&mut self, edge: E, source: &V, target: &V) {
        self.edge_store
            .add(edge.clone(), source.clone(), target.clone());
        self.specifics
            .add_edge_to_touching_vertices(edge, source, target);
        self.generation = self.generation.wrapping_add(1);
    }
}

impl<V, E> Graph<V, E> for BaseGraph<V, E>
where
    V: Eq + Hash + Clone + 'static,
    E: Eq + Hash + Clone + 'static,
{
    fn graph_type(&self) -> GraphType {
        GraphType::of(&self.config)
    }

    fn contains_vertex(&self, v: &V) -> bool {
        self.specifics.contains_vertex(v)
    }

    fn vertex_count(&self) -> usize {
        self.specifics.vertex_count()
    }

    fn vertex_set(&self) -> Vec<V> {
        self.specifics.vertex_set()
    }

    fn contains_edge(&self, e: &E) -> bool {
        self.edge_store.contains(e)
    }

    fn edge_count(&self) -> usize {
        self.edge_store.len()
    }

    fn edge_set(&self) -> Vec<E> {
        self.edge_store.edge_set()
    }

    fn get_edge(&self, source: &V, target: &V) -> Option<E> {
        self.get_all_edges(source, target).into_iter().next()
    }

    fn get_all_edges(&self, source: &V, target: &V) -> Vec<E> {
        match self.specifics.pair_lookup(source, target) {
            Some(hits) => hits,
            None => self.scan_all_edges(source, target),
        }
    }

    fn edge_source(&self, e: &E) -> Option<V> {
        self.edge_store.endpoints(e).map(|(s, _)| s)
    }

    fn edge_target(&self, e: &E) -> Option<V> {
        self.edge_store.endpoints(e).map(|(_, t)| t)
    }

    fn edge_weight(&self, e: &E) -> Result<f64> {
        self.edge_store.weight(e).ok_or(GraphError::EdgeNotMember)
    }

    fn degree_of(&self, v: &V) -> Result<usize> {
        self.specifics.degree_of(v).ok_or(GraphError::VertexNotMember)
    }

    fn in_degree_of(&self, v: &V) -> Result<usize> {
        self.specifics
            .in_degree_of(v)
            .ok_or(GraphError::VertexNotMember)
    }

    fn out_degree_of(&self, v: &V) -> Result<usize> {
        self.specifics
            .out_degree_of(v)
            .ok_or(GraphError::VertexNotMember)
    }

    fn edges_of(&self, v: &V) -> Result<Vec<E>> {
        self.specifics.edges_of(v).ok_or(GraphError::VertexNotMember)
    }

    fn incoming_edges_of(&self, v: &V) -> Result<Vec<E>> {
        self.specifics
            .incoming_edges_of(v)
            .ok_or(GraphError::VertexNotMember)
    }

    fn outgoing_edges_of(&self, v: &V) -> Result<Vec<E>> {
        self.specifics
            .outgoing_edges_of(v)
            .ok_or(GraphError::VertexNotMember)
    }

    fn add_vertex(&mut self, v: V) -> Result<bool> {
        let added = self.specifics.add_vertex(v);
        if added {
            self.generation = self.generation.wrapping_add(1);
        }
        Ok(added)
    }

    fn add_edge(&mut self, source: &V, target: &V) -> Result<Option<E>> {
        self.check_endpoints(source, target)?;
        if !self.config.multi_edges && self.get_edge(source, target).is_some() {
            return Ok(None);
        }
        let edge = (self.edge_factory)(source, target);
        if self.edge_store.contains(&edge) {
            // The factory handed out a token that is already a member.
            return Ok(None);
        }
        self.insert_edge(edge.clone(), source, target);
        Ok(Some(edge))
    }

    fn add_edge_with(&mut self, source: &V, target: &V, edge: E) -> Result<bool> {
        self.check_endpoints(source, target)?;
        if self.edge_store.contains(&edge) {
            return Ok(false);
        }
        if !self.config.multi_edges && self.get_edge(source, target).is_some() {
            return Ok(false);
        }
        self.insert_edge(edge, source, target);
        Ok(true)
    }

    fn remove_vertex(&mut self, v: &V) -> Result<bool> {
        if !self.specifics.contains_vertex(v) {
            return Ok(false);
        }
        let incident = self
            .specifics
            .edges_of(v)
            .unwrap_or_default();
        tracing::trace!(edges = incident.len(), "cascading incident-edge removal");
        for e in &incident {
            let _ = self.remove_edge(e)?;
        }
        self.specifics.remove_vertex(v);
        self.generation = self.generation.wrapping_add(1);
        Ok(true)
    }

    fn remove_edge(&mut self, e: &E) -> Result<bool> {
        let Some((source, target)) = self.edge_store.endpoints(e) else {
            return Ok(false);
        };
        self.specifics
            .remove_edge_from_touching_vertices(e, &source, &target);
        self.edge_store.remove(e);
        self.generation = self.generation.wrapping_add(1);
        Ok(true)
    }

    fn remove_edge_between(&mut self, source: &V, target: &V) -> Result<Option<E>> {
        let Some(edge) = self.get_edge(source, target) else {
            return Ok(None);
        };
        let _ = self.remove_edge(&edge)?;
        Ok(Some(edge))
    }

    fn set_edge_weight(&mut self, e: &E, weight: f64) -> Result<()> {
        if !self.config.weighted {
            return Err(GraphError::NotWeighted);
        }
        self.edge_store.set_weight(e, weight)
    }
}
