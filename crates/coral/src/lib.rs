//! In-memory graph containers.
//!
//! The crate is organized around one dyn-compatible [`Graph`] trait that
//! every container and view implements:
//!
//! - [`BaseGraph`] — the concrete container, composed from an adjacency
//!   strategy (directed/undirected, with an optional pair index) and an edge
//!   metadata store (uniform or weighted), shaped by a [`GraphConfig`].
//! - [`views`] — zero-copy derived graphs: unmodifiable wrappers, weighted
//!   and unweighted overlays, predicate masks, live subgraphs and unions.
//! - [`Dag`] — a directed acyclic container that maintains a topological
//!   order incrementally and rejects cycle-closing edges.
//! - [`GraphBuilder`] — fluent, fallible construction.
//! - [`ListenableGraph`] — structural-change events for downstream views.
//!
//! ```
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use coral::{BaseGraph, Graph, GraphConfig};
//!
//! # fn main() -> coral::Result<()> {
//! let counter = AtomicU32::new(0);
//! let mut g: BaseGraph<&str, u32> = BaseGraph::with_factory(GraphConfig::simple(), move |_, _| {
//!     counter.fetch_add(1, Ordering::Relaxed)
//! });
//! g.add_vertex("a")?;
//! g.add_vertex("b")?;
//! assert_eq!(g.add_edge(&"a", &"b")?, Some(0));
//! assert_eq!(g.degree_of(&"a")?, 1);
//! # Ok(())
//! # }
//! ```

pub mod base;
pub mod builder;
pub mod config;
pub mod dag;
pub mod error;
pub mod events;
pub mod graph;
pub mod views;

pub use base::{BaseGraph, IndexKind};
pub use builder::GraphBuilder;
pub use config::{Directedness, GraphConfig, GraphType};
pub use dag::{Dag, TopologicalCursor};
pub use error::{GraphError, Result};
pub use events::{GraphEvent, GraphListener, ListenableGraph};
pub use graph::{DEFAULT_EDGE_WEIGHT, Graph};
pub use views::mask::MaskSubgraph;
pub use views::subgraph::Subgraph;
pub use views::union_view::{UnionGraph, WeightCombiner};
pub use views::unmodifiable::UnmodifiableGraph;
pub use views::unweighted::UnweightedView;
pub use views::weighted::WeightedView;

pub(crate) type FxHashMap<K, V> = hashbrown::HashMap<K, V, rustc_hash::FxBuildHasher>;
pub(crate) type FxIndexMap<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;
pub(crate) type FxIndexSet<T> = indexmap::IndexSet<T, rustc_hash::FxBuildHasher>;
