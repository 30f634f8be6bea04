//! Directed acyclic graph with an incrementally maintained topological order.
//!
//! Every vertex carries a sparse order key; [`Dag::add_edge`] keeps the key
//! assignment consistent with edge direction by reordering only the affected
//! region between the two endpoints (the Pearce–Kelly scheme). An edge that
//! would close a cycle is rejected with [`GraphError::CycleDetected`] and
//! leaves the graph untouched.

use std::collections::BTreeMap;
use std::hash::Hash;

use crate::FxHashMap;
use crate::base::{BaseGraph, IndexKind};
use crate::config::{GraphConfig, GraphType};
use crate::error::{GraphError, Result};
use crate::graph::Graph;

pub struct Dag<V, E> {
    graph: BaseGraph<V, E>,
    // Sparse key per vertex; removals leave holes, which is fine because
    // only relative order matters.
    topo: FxHashMap<V, u64>,
    order: BTreeMap<u64, V>,
    next_key: u64,
}

impl<V, E> Dag<V, E>
where
    V: Eq + Hash + Clone + 'static,
    E: Eq + Hash + Clone + Default + 'static,
{
    /// A simple directed acyclic graph with default-constructed edge tokens.
    pub fn new() -> Self {
        Self {
            graph: BaseGraph::new(GraphConfig::default()),
            topo: FxHashMap::default(),
            order: BTreeMap::new(),
            next_key: 0,
        }
    }

    /// Like [`Dag::new`] but with an explicit configuration. The
    /// configuration must be directed and must not allow self-loops.
    pub fn with_config(config: GraphConfig) -> Result<Self> {
        Self::validate(config)?;
        Ok(Self {
            graph: BaseGraph::new(config),
            topo: FxHashMap::default(),
            order: BTreeMap::new(),
            next_key: 0,
        })
    }
}

impl<V, E> Dag<V, E>
where
    V: Eq + Hash + Clone + 'static,
    E: Eq + Hash + Clone + 'static,
{
    pub fn with_parts<F>(config: GraphConfig, index: IndexKind, edge_factory: F) -> Result<Self>
    where
        F: Fn(&V, &V) -> E + Send + Sync + 'static,
    {
        Self::validate(config)?;
        Ok(Self {
            graph: BaseGraph::with_parts(config, index, edge_factory),
            topo: FxHashMap::default(),
            order: BTreeMap::new(),
            next_key: 0,
        })
    }

    fn validate(config: GraphConfig) -> Result<()> {
        if !config.directed {
            return Err(GraphError::configuration(
                "acyclic graphs must be directed",
            ));
        }
        if config.self_loops {
            return Err(GraphError::configuration(
                "acyclic graphs cannot allow self-loops",
            ));
        }
        Ok(())
    }

    pub fn config(&self) -> GraphConfig {
        self.graph.config()
    }

    /// Current topological order, smallest key first.
    pub fn topological_vertices(&self) -> Vec<V> {
        self.order.values().cloned().collect()
    }

    /// Detached iteration handle over the topological order. The cursor
    /// fails with [`GraphError::ConcurrentModification`] once the graph has
    /// changed underneath it, except through its own
    /// [`TopologicalCursor::remove_current`].
    pub fn topological_cursor(&self) -> TopologicalCursor<V> {
        TopologicalCursor {
            expected_generation: self.graph.generation(),
            next_key: 0,
            last: None,
        }
    }

    /// Every vertex with a directed path to `v`, in breadth-first discovery
    /// order, excluding `v` itself.
    pub fn ancestors(&self, v: &V) -> Result<Vec<V>> {
        self.reachable(v, false)
    }

    /// Every vertex reachable from `v` by directed paths, in breadth-first
    /// discovery order, excluding `v` itself.
    pub fn descendants(&self, v: &V) -> Result<Vec<V>> {
        self.reachable(v, true)
    }

    fn reachable(&self, v: &V, forward: bool) -> Result<Vec<V>> {
        if !self.graph.contains_vertex(v) {
            return Err(GraphError::VertexNotMember);
        }
        let mut seen: Vec<V> = Vec::new();
        let mut frontier: Vec<V> = vec![v.clone()];
        let mut head = 0;
        while head < frontier.len() {
            let current = frontier[head].clone();
            head += 1;
            let edges = if forward {
                self.graph.outgoing_edges_of(&current)?
            } else {
                self.graph.incoming_edges_of(&current)?
            };
            for e in edges {
                let next = if forward {
                    self.graph.edge_target(&e)
                } else {
                    self.graph.edge_source(&e)
                };
                if let Some(next) = next {
                    if next != *v && !seen.contains(&next) {
                        seen.push(next.clone());
                        frontier.push(next);
                    }
                }
            }
        }
        Ok(seen)
    }

    /// Reorders the region between `target` and `source` so that
    /// key(source) < key(target), or fails with
    /// [`GraphError::CycleDetected`] without touching anything.
    fn restore_order(&mut self, source: &V, target: &V) -> Result<()> {
        let source_key = self.topo[source];
        let target_key = self.topo[target];
        if source_key < target_key {
            return Ok(());
        }

        // Forward pass: everything reachable from the new edge's target
        // inside the affected key window. Reaching the source closes a
        // cycle, and nothing has been mutated yet.
        let mut forward: Vec<V> = vec![target.clone()];
        let mut head = 0;
        while head < forward.len() {
            let current = forward[head].clone();
            head += 1;
            for e in self.graph.outgoing_edges_of(&current)? {
                let Some(next) = self.graph.edge_target(&e) else {
                    continue;
                };
                if next == *source {
                    return Err(GraphError::CycleDetected);
                }
                if self.topo[&next] < source_key && !forward.contains(&next) {
                    forward.push(next);
                }
            }
        }

        // Backward pass: everything that reaches the source inside the
        // window, the source included.
        let mut backward: Vec<V> = vec![source.clone()];
        let mut head = 0;
        while head < backward.len() {
            let current = backward[head].clone();
            head += 1;
            for e in self.graph.incoming_edges_of(&current)? {
                let Some(prev) = self.graph.edge_source(&e) else {
                    continue;
                };
                if self.topo[&prev] > target_key && !backward.contains(&prev) {
                    backward.push(prev);
                }
            }
        }

        // Reassign the pooled keys: the backward set keeps its internal
        // order and moves ahead of the forward set, which also keeps its
        // internal order.
        forward.sort_by_key(|v| self.topo[v]);
        backward.sort_by_key(|v| self.topo[v]);
        let mut pool: Vec<u64> = backward
            .iter()
            .chain(forward.iter())
            .map(|v| self.topo[v])
            .collect();
        pool.sort_unstable();

        tracing::debug!(moved = pool.len(), "reordering topological window");
        // Every new key is some moved vertex's old key, so all old entries
        // must be cleared before any new one lands.
        for v in backward.iter().chain(forward.iter()) {
            self.order.remove(&self.topo[v]);
        }
        for (v, key) in backward.into_iter().chain(forward).zip(pool) {
            self.topo.insert(v.clone(), key);
            self.order.insert(key, v);
        }
        Ok(())
    }

    fn check_edge_endpoints(&self, source: &V, target: &V) -> Result<()> {
        if !self.graph.contains_vertex(source) || !self.graph.contains_vertex(target) {
            return Err(GraphError::VertexNotMember);
        }
        if source == target {
            return Err(GraphError::SelfLoopsNotAllowed);
        }
        Ok(())
    }
}

impl<V, E> Default for Dag<V, E>
where
    V: Eq + Hash + Clone + 'static,
    E: Eq + Hash + Clone + Default + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Graph<V, E> for Dag<V, E>
where
    V: Eq + Hash + Clone + 'static,
    E: Eq + Hash + Clone + 'static,
{
    fn graph_type(&self) -> GraphType {
        self.graph.graph_type()
    }

    fn contains_vertex(&self, v: &V) -> bool {
        self.graph.contains_vertex(v)
    }

    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    fn vertex_set(&self) -> Vec<V> {
        self.graph.vertex_set()
    }

    fn contains_edge(&self, e: &E) -> bool {
        self.graph.contains_edge(e)
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn edge_set(&self) -> Vec<E> {
        self.graph.edge_set()
    }

    fn get_edge(&self, source: &V, target: &V) -> Option<E> {
        self.graph.get_edge(source, target)
    }

    fn get_all_edges(&self, source: &V, target: &V) -> Vec<E> {
        self.graph.get_all_edges(source, target)
    }

    fn edge_source(&self, e: &E) -> Option<V> {
        self.graph.edge_source(e)
    }

    fn edge_target(&self, e: &E) -> Option<V> {
        self.graph.edge_target(e)
    }

    fn edge_weight(&self, e: &E) -> Result<f64> {
        self.graph.edge_weight(e)
    }

    fn degree_of(&self, v: &V) -> Result<usize> {
        self.graph.degree_of(v)
    }

    fn in_degree_of(&self, v: &V) -> Result<usize> {
        self.graph.in_degree_of(v)
    }

    fn out_degree_of(&self, v: &V) -> Result<usize> {
        self.graph.out_degree_of(v)
    }

    fn edges_of(&self, v: &V) -> Result<Vec<E>> {
        self.graph.edges_of(v)
    }

    fn incoming_edges_of(&self, v: &V) -> Result<Vec<E>> {
        self.graph.incoming_edges_of(v)
    }

    fn outgoing_edges_of(&self, v: &V) -> Result<Vec<E>> {
        self.graph.outgoing_edges_of(v)
    }

    /// New vertices enter at the end of the topological order.
    fn add_vertex(&mut self, v: V) -> Result<bool> {
        let added = self.graph.add_vertex(v.clone())?;
        if added {
            let key = self.next_key;
            self.next_key += 1;
            self.topo.insert(v.clone(), key);
            self.order.insert(key, v);
        }
        Ok(added)
    }

    fn add_edge(&mut self, source: &V, target: &V) -> Result<Option<E>> {
        self.check_edge_endpoints(source, target)?;
        if !self.config().multi_edges && self.graph.get_edge(source, target).is_some() {
            return Ok(None);
        }
        // Every no-op path must be ruled out before the reorder, otherwise
        // the order would shift without a generation bump.
        let edge = self.graph.new_edge_token(source, target);
        if self.graph.contains_edge(&edge) {
            return Ok(None);
        }
        self.restore_order(source, target)?;
        let added = self.graph.add_edge_with(source, target, edge.clone())?;
        Ok(added.then_some(edge))
    }

    fn add_edge_with(&mut self, source: &V, target: &V, edge: E) -> Result<bool> {
        self.check_edge_endpoints(source, target)?;
        if self.graph.contains_edge(&edge) {
            return Ok(false);
        }
        if !self.config().multi_edges && self.graph.get_edge(source, target).is_some() {
            return Ok(false);
        }
        self.restore_order(source, target)?;
        self.graph.add_edge_with(source, target, edge)
    }

    fn remove_vertex(&mut self, v: &V) -> Result<bool> {
        let removed = self.graph.remove_vertex(v)?;
        if removed {
            if let Some(key) = self.topo.remove(v) {
                self.order.remove(&key);
            }
        }
        Ok(removed)
    }

    fn remove_edge(&mut self, e: &E) -> Result<bool> {
        self.graph.remove_edge(e)
    }

    fn remove_edge_between(&mut self, source: &V, target: &V) -> Result<Option<E>> {
        self.graph.remove_edge_between(source, target)
    }

    fn set_edge_weight(&mut self, e: &E, weight: f64) -> Result<()> {
        self.graph.set_edge_weight(e, weight)
    }
}

/// Detached cursor over a [`Dag`]'s topological order.
///
/// Holds no borrow of the graph; each call takes the graph explicitly and
/// first checks that it still looks like it did when the cursor last saw it.
pub struct TopologicalCursor<V> {
    expected_generation: u64,
    next_key: u64,
    last: Option<(u64, V)>,
}

impl<V> TopologicalCursor<V>
where
    V: Eq + Hash + Clone + 'static,
{
    /// Yields the next vertex in topological order, or `Ok(None)` at the
    /// end. Fails with [`GraphError::ConcurrentModification`] if the graph
    /// changed since the cursor was created or last resynchronized.
    pub fn next<E>(&mut self, dag: &Dag<V, E>) -> Result<Option<V>>
    where
        E: Eq + Hash + Clone + 'static,
    {
        self.check(dag)?;
        let Some((key, v)) = dag.order.range(self.next_key..).next() else {
            return Ok(None);
        };
        let (key, v) = (*key, v.clone());
        self.next_key = key + 1;
        self.last = Some((key, v.clone()));
        Ok(Some(v))
    }

    /// Removes the vertex most recently returned by [`next`](Self::next)
    /// from the graph, cascading its incident edges, and resynchronizes the
    /// cursor so iteration can continue. `Ok(false)` when there is nothing
    /// to remove.
    pub fn remove_current<E>(&mut self, dag: &mut Dag<V, E>) -> Result<bool>
    where
        E: Eq + Hash + Clone + 'static,
    {
        self.check(dag)?;
        let Some((_, v)) = self.last.take() else {
            return Ok(false);
        };
        let removed = dag.remove_vertex(&v)?;
        self.expected_generation = dag.graph.generation();
        Ok(removed)
    }

    fn check<E>(&self, dag: &Dag<V, E>) -> Result<()>
    where
        E: Eq + Hash + Clone + 'static,
    {
        if dag.graph.generation() != self.expected_generation {
            return Err(GraphError::ConcurrentModification);
        }
        Ok(())
    }
}
