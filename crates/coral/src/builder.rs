//! Fluent graph construction.

use std::hash::Hash;
use std::marker::PhantomData;

use crate::error::Result;
use crate::graph::Graph;
use crate::views::unmodifiable::UnmodifiableGraph;

/// Consuming builder over any mutable graph.
///
/// Each step returns `Result<Self>`, so a chain short-circuits on the first
/// policy violation with `?` instead of panicking halfway through.
/// [`GraphBuilder::add_edge`] auto-registers missing endpoints first, which
/// makes edge-list construction a one-liner.
pub struct GraphBuilder<V, E, G> {
    graph: G,
    _marker: PhantomData<fn() -> (V, E)>,
}

impl<V, E, G> GraphBuilder<V, E, G>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
    G: Graph<V, E>,
{
    pub fn new(graph: G) -> Self {
        Self {
            graph,
            _marker: PhantomData,
        }
    }

    pub fn add_vertex(mut self, v: V) -> Result<Self> {
        self.graph.add_vertex(v)?;
        Ok(self)
    }

    pub fn add_vertices<I>(mut self, vertices: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
    {
        for v in vertices {
            self.graph.add_vertex(v)?;
        }
        Ok(self)
    }

    /// Adds an edge, first registering any endpoint the graph does not have.
    pub fn add_edge(mut self, source: V, target: V) -> Result<Self> {
        self.graph.add_vertex(source.clone())?;
        self.graph.add_vertex(target.clone())?;
        self.graph.add_edge(&source, &target)?;
        Ok(self)
    }

    /// Like [`add_edge`](Self::add_edge), with a caller-supplied edge token.
    pub fn add_edge_with(mut self, source: V, target: V, edge: E) -> Result<Self> {
        self.graph.add_vertex(source.clone())?;
        self.graph.add_vertex(target.clone())?;
        self.graph.add_edge_with(&source, &target, edge)?;
        Ok(self)
    }

    /// Adds an edge between each consecutive pair: `a — b — c — ...`.
    pub fn add_edge_chain<I>(self, vertices: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
    {
        let mut builder = self;
        let mut previous: Option<V> = None;
        for v in vertices {
            builder = match previous.take() {
                Some(prev) => builder.add_edge(prev, v.clone())?,
                None => builder.add_vertex(v.clone())?,
            };
            previous = Some(v);
        }
        Ok(builder)
    }

    /// Copies another graph's vertices, edge tokens and, when both sides are
    /// weighted, edge weights.
    pub fn add_graph<H>(mut self, other: &H) -> Result<Self>
    where
        H: Graph<V, E>,
    {
        for v in other.vertex_set() {
            self.graph.add_vertex(v)?;
        }
        let copy_weights =
            other.graph_type().is_weighted() && self.graph.graph_type().is_weighted();
        for e in other.edge_set() {
            let (Some(source), Some(target)) = (other.edge_source(&e), other.edge_target(&e))
            else {
                continue;
            };
            let added = self.graph.add_edge_with(&source, &target, e.clone())?;
            if added && copy_weights {
                self.graph.set_edge_weight(&e, other.edge_weight(&e)?)?;
            }
        }
        Ok(self)
    }

    pub fn remove_vertex(mut self, v: &V) -> Result<Self> {
        self.graph.remove_vertex(v)?;
        Ok(self)
    }

    pub fn remove_vertices<'a, I>(mut self, vertices: I) -> Result<Self>
    where
        V: 'a,
        I: IntoIterator<Item = &'a V>,
    {
        for v in vertices {
            self.graph.remove_vertex(v)?;
        }
        Ok(self)
    }

    pub fn remove_edge(mut self, e: &E) -> Result<Self> {
        self.graph.remove_edge(e)?;
        Ok(self)
    }

    pub fn remove_edges<'a, I>(mut self, edges: I) -> Result<Self>
    where
        E: 'a,
        I: IntoIterator<Item = &'a E>,
    {
        for e in edges {
            self.graph.remove_edge(e)?;
        }
        Ok(self)
    }

    pub fn build(self) -> G {
        self.graph
    }

    pub fn build_unmodifiable(self) -> UnmodifiableGraph<G> {
        UnmodifiableGraph::new(self.graph)
    }
}
