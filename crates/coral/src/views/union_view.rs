//! Read-only union of two graphs.

use std::hash::Hash;

use crate::config::{Directedness, GraphType};
use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::views::undirected_degree;

/// Reduces the weights an edge carries in both union inputs to one value.
pub struct WeightCombiner(Box<dyn Fn(f64, f64) -> f64 + Send + Sync>);

impl WeightCombiner {
    pub fn sum() -> Self {
        Self(Box::new(|a, b| a + b))
    }

    pub fn min() -> Self {
        Self(Box::new(f64::min))
    }

    pub fn max() -> Self {
        Self(Box::new(f64::max))
    }

    pub fn mul() -> Self {
        Self(Box::new(|a, b| a * b))
    }

    pub fn first() -> Self {
        Self(Box::new(|a, _| a))
    }

    pub fn second() -> Self {
        Self(Box::new(|_, b| b))
    }

    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        Self(Box::new(f))
    }

    pub fn combine(&self, a: f64, b: f64) -> f64 {
        (self.0)(a, b)
    }
}

impl Default for WeightCombiner {
    fn default() -> Self {
        Self::sum()
    }
}

/// Set union of two distinct graphs over the same vertex and edge types.
///
/// Nothing is copied: queries consult both inputs, preferring the first for
/// lookups and deduplicating by token. The union always reports itself
/// weighted, multi-edge and unmodifiable; its directedness is `Mixed` when
/// the inputs disagree.
pub struct UnionGraph<'g, G1, G2> {
    first: &'g G1,
    second: &'g G2,
    combiner: WeightCombiner,
}

impl<'g, G1, G2> UnionGraph<'g, G1, G2> {
    /// Union with the default (sum) weight combiner.
    pub fn new(first: &'g G1, second: &'g G2) -> Self {
        Self::with_combiner(first, second, WeightCombiner::default())
    }

    pub fn with_combiner(first: &'g G1, second: &'g G2, combiner: WeightCombiner) -> Self {
        Self {
            first,
            second,
            combiner,
        }
    }
}

/// Concatenates edge lists from both inputs, skipping second-input edges the
/// first input already owns.
fn union_edges<V, E, G1>(
    first: &G1,
    from_first: Option<Vec<E>>,
    from_second: Option<Vec<E>>,
) -> Vec<E>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
    G1: Graph<V, E>,
{
    let mut out = from_first.unwrap_or_default();
    for e in from_second.unwrap_or_default() {
        if !first.contains_edge(&e) {
            out.push(e);
        }
    }
    out
}

impl<V, E, G1, G2> Graph<V, E> for UnionGraph<'_, G1, G2>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
    G1: Graph<V, E>,
    G2: Graph<V, E>,
{
    fn graph_type(&self) -> GraphType {
        let t1 = self.first.graph_type();
        let t2 = self.second.graph_type();
        GraphType {
            directedness: if t1.directedness == t2.directedness {
                t1.directedness
            } else {
                Directedness::Mixed
            },
            weighted: true,
            allows_multiple_edges: true,
            allows_self_loops: t1.allows_self_loops || t2.allows_self_loops,
            modifiable: false,
        }
    }

    fn contains_vertex(&self, v: &V) -> bool {
        self.first.contains_vertex(v) || self.second.contains_vertex(v)
    }

    fn vertex_count(&self) -> usize {
        self.vertex_set().len()
    }

    fn vertex_set(&self) -> Vec<V> {
        let mut out = self.first.vertex_set();
        for v in self.second.vertex_set() {
            if !self.first.contains_vertex(&v) {
                out.push(v);
            }
        }
        out
    }

    fn contains_edge(&self, e: &E) -> bool {
        self.first.contains_edge(e) || self.second.contains_edge(e)
    }

    fn edge_count(&self) -> usize {
        self.edge_set().len()
    }

    fn edge_set(&self) -> Vec<E> {
        union_edges(
            self.first,
            Some(self.first.edge_set()),
            Some(self.second.edge_set()),
        )
    }

    fn get_edge(&self, source: &V, target: &V) -> Option<E> {
        self.get_all_edges(source, target).into_iter().next()
    }

    fn get_all_edges(&self, source: &V, target: &V) -> Vec<E> {
        union_edges(
            self.first,
            Some(self.first.get_all_edges(source, target)),
            Some(self.second.get_all_edges(source, target)),
        )
    }

    fn edge_source(&self, e: &E) -> Option<V> {
        self.first.edge_source(e).or_else(|| self.second.edge_source(e))
    }

    fn edge_target(&self, e: &E) -> Option<V> {
        self.first.edge_target(e).or_else(|| self.second.edge_target(e))
    }

    fn edge_weight(&self, e: &E) -> Result<f64> {
        let w1 = if self.first.contains_edge(e) {
            Some(self.first.edge_weight(e)?)
        } else {
            None
        };
        let w2 = if self.second.contains_edge(e) {
            Some(self.second.edge_weight(e)?)
        } else {
            None
        };
        match (w1, w2) {
            (Some(a), Some(b)) => Ok(self.combiner.combine(a, b)),
            (Some(a), None) => Ok(a),
            (None, Some(b)) => Ok(b),
            (None, None) => Err(GraphError::EdgeNotMember),
        }
    }

    fn degree_of(&self, v: &V) -> Result<usize> {
        match self.graph_type().directedness {
            // Degree is ambiguous when one input counts edge ends and the
            // other counts arcs; the restriction is deliberate.
            Directedness::Mixed => Err(GraphError::UnsupportedForKind {
                operation: "degree_of",
            }),
            Directedness::Directed => {
                Ok(self.incoming_edges_of(v)?.len() + self.outgoing_edges_of(v)?.len())
            }
            Directedness::Undirected => {
                let edges = self.edges_of(v)?;
                Ok(undirected_degree(self, v, &edges))
            }
        }
    }

    fn in_degree_of(&self, v: &V) -> Result<usize> {
        if self.graph_type().directedness == Directedness::Undirected {
            return self.degree_of(v);
        }
        Ok(self.incoming_edges_of(v)?.len())
    }

    fn out_degree_of(&self, v: &V) -> Result<usize> {
        if self.graph_type().directedness == Directedness::Undirected {
            return self.degree_of(v);
        }
        Ok(self.outgoing_edges_of(v)?.len())
    }

    fn edges_of(&self, v: &V) -> Result<Vec<E>> {
        if !self.contains_vertex(v) {
            return Err(GraphError::VertexNotMember);
        }
        let from_first = if self.first.contains_vertex(v) {
            Some(self.first.edges_of(v)?)
        } else {
            None
        };
        let from_second = if self.second.contains_vertex(v) {
            Some(self.second.edges_of(v)?)
        } else {
            None
        };
        Ok(union_edges(self.first, from_first, from_second))
    }

    fn incoming_edges_of(&self, v: &V) -> Result<Vec<E>> {
        if !self.contains_vertex(v) {
            return Err(GraphError::VertexNotMember);
        }
        let from_first = if self.first.contains_vertex(v) {
            Some(self.first.incoming_edges_of(v)?)
        } else {
            None
        };
        let from_second = if self.second.contains_vertex(v) {
            Some(self.second.incoming_edges_of(v)?)
        } else {
            None
        };
        Ok(union_edges(self.first, from_first, from_second))
    }

    fn outgoing_edges_of(&self, v: &V) -> Result<Vec<E>> {
        if !self.contains_vertex(v) {
            return Err(GraphError::VertexNotMember);
        }
        let from_first = if self.first.contains_vertex(v) {
            Some(self.first.outgoing_edges_of(v)?)
        } else {
            None
        };
        let from_second = if self.second.contains_vertex(v) {
            Some(self.second.outgoing_edges_of(v)?)
        } else {
            None
        };
        Ok(union_edges(self.first, from_first, from_second))
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
