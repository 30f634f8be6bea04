//! Structural-change notification.
//!
//! [`ListenableGraph`] is a forwarding decorator: every call reaches the
//! wrapped graph unchanged, and successful mutations are published to
//! registered listeners afterwards. Listeners are held as weak references —
//! a dropped subscriber is pruned on the next publish, so a live-window view
//! never keeps an otherwise-unused graph alive and never has to be manually
//! unregistered.

use std::cell::RefCell;
use std::hash::Hash;
use std::rc::Weak;

use crate::config::GraphType;
use crate::error::Result;
use crate::graph::Graph;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphEvent<V, E> {
    VertexAdded(V),
    VertexRemoved(V),
    EdgeAdded { edge: E, source: V, target: V },
    EdgeRemoved { edge: E, source: V, target: V },
}

/// Receiver of structural-change events.
///
/// Listener callbacks must not mutate the graph they observe; reentrant
/// mutation from inside a callback is unsupported.
pub trait GraphListener<V, E> {
    fn on_graph_event(&mut self, event: &GraphEvent<V, E>);
}

pub struct ListenableGraph<V, E, G> {
    inner: G,
    listeners: RefCell<Vec<Weak<RefCell<dyn GraphListener<V, E>>>>>,
}

impl<V, E, G> ListenableGraph<V, E, G>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
    G: Graph<V, E>,
{
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }

    pub fn into_inner(self) -> G {
        self.inner
    }

    pub fn add_listener(&self, listener: Weak<RefCell<dyn GraphListener<V, E>>>) {
        self.listeners.borrow_mut().push(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|l| l.upgrade().is_some())
            .count()
    }

    fn publish(&self, event: &GraphEvent<V, E>) {
        let mut listeners = self.listeners.borrow_mut();
        listeners.retain(|l| l.upgrade().is_some());
        for listener in listeners.iter() {
            if let Some(listener) = listener.upgrade() {
                listener.borrow_mut().on_graph_event(event);
            }
        }
    }
}

impl<V, E, G> Graph<V, E> for ListenableGraph<V, E, G>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
    G: Graph<V, E>,
{
    fn graph_type(&self) -> GraphType {
        self.inner.graph_type()
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

    fn add_vertex(&mut self, v: V) -> Result<bool> {
        let added = self.inner.add_vertex(v.clone())?;
        if added {
            self.publish(&GraphEvent::VertexAdded(v));
        }
        Ok(added)
    }

    fn add_edge(&mut self, source: &V, target: &V) -> Result<Option<E>> {
        let added = self.inner.add_edge(source, target)?;
        if let Some(edge) = &added {
            self.publish(&GraphEvent::EdgeAdded {
                edge: edge.clone(),
                source: source.clone(),
                target: target.clone(),
            });
        }
        Ok(added)
    }

    fn add_edge_with(&mut self, source: &V, target: &V, edge: E) -> Result<bool> {
        let added = self.inner.add_edge_with(source, target, edge.clone())?;
        if added {
            self.publish(&GraphEvent::EdgeAdded {
                edge,
                source: source.clone(),
                target: target.clone(),
            });
        }
        Ok(added)
    }

    fn remove_vertex(&mut self, v: &V) -> Result<bool> {
        if !self.inner.contains_vertex(v) {
            return Ok(false);
        }
        // Capture the cascade before the structure changes; the edge events
        // go out first, mirroring the removal order.
        let incident: Vec<(E, V, V)> = self
            .inner
            .edges_of(v)?
            .into_iter()
            .filter_map(|e| {
                let source = self.inner.edge_source(&e)?;
                let target = self.inner.edge_target(&e)?;
                Some((e, source, target))
            })
            .collect();

        let removed = self.inner.remove_vertex(v)?;
        if removed {
            for (edge, source, target) in incident {
                self.publish(&GraphEvent::EdgeRemoved {
                    edge,
                    source,
                    target,
                });
            }
            self.publish(&GraphEvent::VertexRemoved(v.clone()));
        }
        Ok(removed)
    }

    fn remove_edge(&mut self, e: &E) -> Result<bool> {
        let endpoints = self.inner.edge_source(e).zip(self.inner.edge_target(e));
        let removed = self.inner.remove_edge(e)?;
        if removed {
            if let Some((source, target)) = endpoints {
                self.publish(&GraphEvent::EdgeRemoved {
                    edge: e.clone(),
                    source,
                    target,
                });
            }
        }
        Ok(removed)
    }

    fn remove_edge_between(&mut self, source: &V, target: &V) -> Result<Option<E>> {
        let Some(edge) = self.inner.get_edge(source, target) else {
            return Ok(None);
        };
        let _ = self.remove_edge(&edge)?;
        Ok(Some(edge))
    }

    fn set_edge_weight(&mut self, e: &E, weight: f64) -> Result<()> {
        self.inner.set_edge_weight(e, weight)
    }
}
