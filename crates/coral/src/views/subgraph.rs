//! Live subgraph over a shared backing graph.

use std::cell::RefCell;
use std::hash::Hash;
use std::rc::Rc;

use crate::FxIndexSet;
use crate::config::{Directedness, GraphType};
use crate::error::{GraphError, Result};
use crate::events::{GraphEvent, GraphListener, ListenableGraph};
use crate::graph::Graph;
use crate::views::undirected_degree;

/// Membership sets of a [`Subgraph`], kept separately so they can subscribe
/// to backing-graph events on their own.
pub(crate) struct SubgraphState<V, E> {
    vertices: FxIndexSet<V>,
    edges: FxIndexSet<E>,
}

impl<V, E> GraphListener<V, E> for SubgraphState<V, E>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    fn on_graph_event(&mut self, event: &GraphEvent<V, E>) {
        match event {
            GraphEvent::VertexRemoved(v) => {
                self.vertices.shift_remove(v);
            }
            GraphEvent::EdgeRemoved { edge, .. } => {
                self.edges.shift_remove(edge);
            }
            // Additions upstream never grow a subgraph.
            GraphEvent::VertexAdded(_) | GraphEvent::EdgeAdded { .. } => {}
        }
    }
}

/// Subset of a backing graph's vertices and edges.
///
/// The backing graph is shared through `Rc<RefCell<_>>`: the owner keeps
/// mutating it while subgraphs exist. Membership is materialized here; edge
/// attributes (endpoints, weights) always read through to the backing graph,
/// so a weight change upstream is visible immediately. Constructed through
/// [`Subgraph::listening`], the membership sets also follow backing
/// removals automatically.
pub struct Subgraph<V, E, G> {
    backing: Rc<RefCell<G>>,
    state: Rc<RefCell<SubgraphState<V, E>>>,
}

impl<V, E, G> Subgraph<V, E, G>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
    G: Graph<V, E>,
{
    /// Builds a subgraph from explicit vertex and edge subsets.
    ///
    /// `None` vertices means all backing vertices. `None` edges means the
    /// induced edge set: every backing edge whose endpoints both made it into
    /// the subgraph. Elements absent from the backing graph are dropped;
    /// edges whose endpoints did not make it in are dropped too.
    pub fn new(backing: Rc<RefCell<G>>, vertices: Option<Vec<V>>, edges: Option<Vec<E>>) -> Self {
        let state = {
            let g = backing.borrow();
            let vertices: FxIndexSet<V> = match vertices {
                Some(vs) => vs.into_iter().filter(|v| g.contains_vertex(v)).collect(),
                None => g.vertex_set().into_iter().collect(),
            };
            let candidates = match edges {
                Some(es) => es,
                None => g.edge_set(),
            };
            let edges: FxIndexSet<E> = candidates
                .into_iter()
                .filter(|e| {
                    g.edge_source(e)
                        .zip(g.edge_target(e))
                        .is_some_and(|(s, t)| vertices.contains(&s) && vertices.contains(&t))
                })
                .collect();
            SubgraphState { vertices, edges }
        };
        Self {
            backing,
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Shrinks automatically when the backing graph loses members: removing
    /// a vertex or edge upstream removes it from this subgraph as well.
    /// The subscription is weak, so dropping the subgraph unregisters it.
    pub fn listening(
        backing: Rc<RefCell<ListenableGraph<V, E, G>>>,
        vertices: Option<Vec<V>>,
        edges: Option<Vec<E>>,
    ) -> Subgraph<V, E, ListenableGraph<V, E, G>>
    where
        V: 'static,
        E: 'static,
        G: 'static,
    {
        let sub = Subgraph::new(backing, vertices, edges);
        // The unsized coercion has to happen on the Rc before downgrading.
        let state = Rc::clone(&sub.state);
        let listener: Rc<RefCell<dyn GraphListener<V, E>>> = state;
        sub.backing.borrow().add_listener(Rc::downgrade(&listener));
        sub
    }
}

impl<V, E, G> Graph<V, E> for Subgraph<V, E, G>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
    G: Graph<V, E>,
{
    fn graph_type(&self) -> GraphType {
        self.backing.borrow().graph_type()
    }

    fn contains_vertex(&self, v: &V) -> bool {
        self.state.borrow().vertices.contains(v)
    }

    fn vertex_count(&self) -> usize {
        self.state.borrow().vertices.len()
    }

    fn vertex_set(&self) -> Vec<V> {
        self.state.borrow().vertices.iter().cloned().collect()
    }

    fn contains_edge(&self, e: &E) -> bool {
        self.state.borrow().edges.contains(e)
    }

    fn edge_count(&self) -> usize {
        self.state.borrow().edges.len()
    }

    fn edge_set(&self) -> Vec<E> {
        self.state.borrow().edges.iter().cloned().collect()
    }

    fn get_edge(&self, source: &V, target: &V) -> Option<E> {
        self.get_all_edges(source, target).into_iter().next()
    }

    fn get_all_edges(&self, source: &V, target: &V) -> Vec<E> {
        if !self.contains_vertex(source) || !self.contains_vertex(target) {
            return Vec::new();
        }
        let candidates = self.backing.borrow().get_all_edges(source, target);
        let state = self.state.borrow();
        candidates
            .into_iter()
            .filter(|e| state.edges.contains(e))
            .collect()
    }

    fn edge_source(&self, e: &E) -> Option<V> {
        if !self.contains_edge(e) {
            return None;
        }
        self.backing.borrow().edge_source(e)
    }

    fn edge_target(&self, e: &E) -> Option<V> {
        if !self.contains_edge(e) {
            return None;
        }
        self.backing.borrow().edge_target(e)
    }

    fn edge_weight(&self, e: &E) -> Result<f64> {
        if !self.contains_edge(e) {
            return Err(GraphError::EdgeNotMember);
        }
        self.backing.borrow().edge_weight(e)
    }

    fn degree_of(&self, v: &V) -> Result<usize> {
        match self.graph_type().directedness {
            Directedness::Directed | Directedness::Mixed => {
                Ok(self.incoming_edges_of(v)?.len() + self.outgoing_edges_of(v)?.len())
            }
            Directedness::Undirected => {
                let edges = self.edges_of(v)?;
                Ok(undirected_degree(self, v, &edges))
            }
        }
    }

    fn in_degree_of(&self, v: &V) -> Result<usize> {
        if self.graph_type().is_undirected() {
            return self.degree_of(v);
        }
        Ok(self.incoming_edges_of(v)?.len())
    }

    fn out_degree_of(&self, v: &V) -> Result<usize> {
        if self.graph_type().is_undirected() {
            return self.degree_of(v);
        }
        Ok(self.outgoing_edges_of(v)?.len())
    }

    fn edges_of(&self, v: &V) -> Result<Vec<E>> {
        if !self.contains_vertex(v) {
            return Err(GraphError::VertexNotMember);
        }
        let candidates = self.backing.borrow().edges_of(v)?;
        let state = self.state.borrow();
        Ok(candidates
            .into_iter()
            .filter(|e| state.edges.contains(e))
            .collect())
    }

    fn incoming_edges_of(&self, v: &V) -> Result<Vec<E>> {
        if !self.contains_vertex(v) {
            return Err(GraphError::VertexNotMember);
        }
        let candidates = self.backing.borrow().incoming_edges_of(v)?;
        let state = self.state.borrow();
        Ok(candidates
            .into_iter()
            .filter(|e| state.edges.contains(e))
            .collect())
    }

    fn outgoing_edges_of(&self, v: &V) -> Result<Vec<E>> {
        if !self.contains_vertex(v) {
            return Err(GraphError::VertexNotMember);
        }
        let candidates = self.backing.borrow().outgoing_edges_of(v)?;
        let state = self.state.borrow();
        Ok(candidates
            .into_iter()
            .filter(|e| state.edges.contains(e))
            .collect())
    }

    /// Adding a vertex only widens the subset; the vertex must already be a
    /// member of the backing graph.
    fn add_vertex(&mut self, v: V) -> Result<bool> {
        if !self.backing.borrow().contains_vertex(&v) {
            return Err(GraphError::VertexNotMember);
        }
        Ok(self.state.borrow_mut().vertices.insert(v))
    }

    /// Pulls in an existing backing edge between the endpoints; never creates
    /// one. Fails with [`GraphError::EdgeNotMember`] when the backing graph
    /// has no such edge at all, and is a no-op when every candidate is
    /// already present.
    fn add_edge(&mut self, source: &V, target: &V) -> Result<Option<E>> {
        if !self.contains_vertex(source) || !self.contains_vertex(target) {
            return Err(GraphError::VertexNotMember);
        }
        let candidates = self.backing.borrow().get_all_edges(source, target);
        if candidates.is_empty() {
            return Err(GraphError::EdgeNotMember);
        }
        let mut state = self.state.borrow_mut();
        for e in candidates {
            if state.edges.insert(e.clone()) {
                return Ok(Some(e));
            }
        }
        Ok(None)
    }

    fn add_edge_with(&mut self, source: &V, target: &V, edge: E) -> Result<bool> {
        if !self.contains_vertex(source) || !self.contains_vertex(target) {
            return Err(GraphError::VertexNotMember);
        }
        {
            let g = self.backing.borrow();
            if !g.contains_edge(&edge) {
                return Err(GraphError::EdgeNotMember);
            }
            let (Some(s), Some(t)) = (g.edge_source(&edge), g.edge_target(&edge)) else {
                return Err(GraphError::EdgeNotMember);
            };
            let matches = if g.graph_type().is_undirected() {
                (s == *source && t == *target) || (s == *target && t == *source)
            } else {
                s == *source && t == *target
            };
            if !matches {
                return Err(GraphError::EdgeNotMember);
            }
        }
        Ok(self.state.borrow_mut().edges.insert(edge))
    }

    fn remove_vertex(&mut self, v: &V) -> Result<bool> {
        if !self.contains_vertex(v) {
            return Ok(false);
        }
        let incident = self.edges_of(v)?;
        let mut state = self.state.borrow_mut();
        for e in &incident {
            state.edges.shift_remove(e);
        }
        Ok(state.vertices.shift_remove(v))
    }

    fn remove_edge(&mut self, e: &E) -> Result<bool> {
        Ok(self.state.borrow_mut().edges.shift_remove(e))
    }

    fn remove_edge_between(&mut self, source: &V, target: &V) -> Result<Option<E>> {
        let Some(edge) = self.get_edge(source, target) else {
            return Ok(None);
        };
        self.state.borrow_mut().edges.shift_remove(&edge);
        Ok(Some(edge))
    }

    /// Weight writes land in the backing graph and are visible to every
    /// other view of it.
    fn set_edge_weight(&mut self, e: &E, weight: f64) -> Result<()> {
        if !self.contains_edge(e) {
            return Err(GraphError::EdgeNotMember);
        }
        self.backing.borrow_mut().set_edge_weight(e, weight)
    }
}
