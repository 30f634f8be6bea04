//! Edge metadata storage strategies.
//!
//! An edge store owns the token → (source, target, weight) mapping. Two
//! strategies share one contract: [`UniformEdgeStore`] for unweighted graphs
//! (no weight field at all; reads report the fixed default) and
//! [`WeightedEdgeStore`] for weighted graphs. Lookup is O(1) amortized for
//! any token type; iteration follows insertion order.

use std::hash::Hash;

use crate::FxIndexMap;
use crate::error::{GraphError, Result};
use crate::graph::DEFAULT_EDGE_WEIGHT;

pub(crate) trait EdgeStore<V, E> {
    /// Records `edge` with its endpoints. Returns `false` (and stores
    /// nothing) when the token is already present.
    fn add(&mut self, edge: E, source: V, target: V) -> bool;

    fn contains(&self, edge: &E) -> bool;
    fn len(&self) -> usize;
    fn edge_set(&self) -> Vec<E>;

    fn endpoints(&self, edge: &E) -> Option<(V, V)>;
    fn weight(&self, edge: &E) -> Option<f64>;
    fn set_weight(&mut self, edge: &E, weight: f64) -> Result<()>;

    /// Drops `edge`, returning its endpoints if it was present.
    fn remove(&mut self, edge: &E) -> Option<(V, V)>;
}

/// Metadata store for unweighted graphs: endpoints only.
#[derive(Debug, Default)]
pub(crate) struct UniformEdgeStore<V, E> {
    entries: FxIndexMap<E, (V, V)>,
}

impl<V, E> UniformEdgeStore<V, E> {
    pub(crate) fn new() -> Self {
        Self {
            entries: FxIndexMap::default(),
        }
    }
}

impl<V, E> EdgeStore<V, E> for UniformEdgeStore<V, E>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    fn add(&mut self, edge: E, source: V, target: V) -> bool {
        if self.entries.contains_key(&edge) {
            return false;
        }
        self.entries.insert(edge, (source, target));
        true
    }

    fn contains(&self, edge: &E) -> bool {
        self.entries.contains_key(edge)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn edge_set(&self) -> Vec<E> {
        self.entries.keys().cloned().collect()
    }

    fn endpoints(&self, edge: &E) -> Option<(V, V)> {
        self.entries.get(edge).cloned()
    }

    fn weight(&self, edge: &E) -> Option<f64> {
        self.entries.get(edge).map(|_| DEFAULT_EDGE_WEIGHT)
    }

    fn set_weight(&mut self, _edge: &E, _weight: f64) -> Result<()> {
        Err(GraphError::NotWeighted)
    }

    fn remove(&mut self, edge: &E) -> Option<(V, V)> {
        self.entries.shift_remove(edge)
    }
}

#[derive(Debug, Clone)]
struct WeightedEntry<V> {
    source: V,
    target: V,
    weight: f64,
}

/// Metadata store for weighted graphs: endpoints plus a per-edge weight.
#[derive(Debug, Default)]
pub(crate) struct WeightedEdgeStore<V, E> {
    entries: FxIndexMap<E, WeightedEntry<V>>,
}

impl<V, E> WeightedEdgeStore<V, E> {
    pub(crate) fn new() -> Self {
        Self {
            entries: FxIndexMap::default(),
        }
    }
}

impl<V, E> EdgeStore<V, E> for WeightedEdgeStore<V, E>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    fn add(&mut self, edge: E, source: V, target: V) -> bool {
        if self.entries.contains_key(&edge) {
            return false;
        }
        self.entries.insert(
            edge,
            WeightedEntry {
                source,
                target,
                weight: DEFAULT_EDGE_WEIGHT,
            },
        );
        true
    }

    fn contains(&self, edge: &E) -> bool {
        self.entries.contains_key(edge)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn edge_set(&self) -> Vec<E> {
        self.entries.keys().cloned().collect()
    }

    fn endpoints(&self, edge: &E) -> Option<(V, V)> {
        self.entries
            .get(edge)
            .map(|entry| (entry.source.clone(), entry.target.clone()))
    }

    fn weight(&self, edge: &E) -> Option<f64> {
        self.entries.get(edge).map(|entry| entry.weight)
    }

    fn set_weight(&mut self, edge: &E, weight: f64) -> Result<()> {
        let Some(entry) = self.entries.get_mut(edge) else {
            return Err(GraphError::EdgeNotMember);
        };
        entry.weight = weight;
        Ok(())
    }

    fn remove(&mut self, edge: &E) -> Option<(V, V)> {
        self.entries
            .shift_remove(edge)
            .map(|entry| (entry.source, entry.target))
    }
}
