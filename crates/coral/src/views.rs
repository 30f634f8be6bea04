//! Zero-copy derived views.
//!
//! Every view implements the same [`Graph`](crate::Graph) trait as the
//! container it wraps and overrides only what differs; vertex and edge sets
//! are never copied out of the backing storage. Borrowed views (`mask`,
//! `union_view`, the weight overlays) are lifetime-bound to their backing
//! graph; `subgraph` shares ownership through `Rc` so it can track upstream
//! removals while the owner keeps mutating.
//!
//! Shared invariant: a view never mutates its backing graph's membership as
//! a side effect of a query. The only implicit mutation path is the
//! subscription cascade of a listening subgraph.

pub mod mask;
pub mod subgraph;
pub mod union_view;
pub mod unmodifiable;
pub mod unweighted;
pub mod weighted;

use std::hash::Hash;

use crate::graph::Graph;

/// Undirected degree of `v` restricted to `edges`: a self-loop contributes 2.
pub(crate) fn undirected_degree<V, E, G>(g: &G, v: &V, edges: &[E]) -> usize
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
    G: Graph<V, E>,
{
    edges
        .iter()
        .map(|e| {
            let is_loop = g
                .edge_source(e)
                .zip(g.edge_target(e))
                .is_some_and(|(s, t)| s == *v && t == *v);
            if is_loop { 2 } else { 1 }
        })
        .sum()
}
