//! Per-vertex adjacency indexing strategies ("specifics").
//!
//! A specifics strategy owns the vertex → incident-edge index and nothing
//! else; endpoints and weights live in the edge store. Strategies are
//! pluggable per directedness and per space/time tradeoff: the plain
//! variants answer (source, target) lookups by letting the engine scan an
//! incident set, the fast variants additionally maintain a pair → edges hash
//! index for O(1) lookups. Swapping a plain strategy for a fast one changes
//! performance only, never behavior.
//!
//! Contract with the engine: every edge mutation goes through
//! [`Specifics::add_edge_to_touching_vertices`] /
//! [`Specifics::remove_edge_from_touching_vertices`] within the same `&mut`
//! call that updates the edge store, and the engine removes all incident
//! edges before dropping a vertex.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use crate::{FxHashMap, FxIndexMap, FxIndexSet};

pub(crate) trait Specifics<V, E> {
    fn add_vertex(&mut self, v: V) -> bool;
    fn contains_vertex(&self, v: &V) -> bool;
    fn vertex_count(&self) -> usize;
    fn vertex_set(&self) -> Vec<V>;

    fn degree_of(&self, v: &V) -> Option<usize>;
    fn in_degree_of(&self, v: &V) -> Option<usize>;
    fn out_degree_of(&self, v: &V) -> Option<usize>;

    fn edges_of(&self, v: &V) -> Option<Vec<E>>;
    fn incoming_edges_of(&self, v: &V) -> Option<Vec<E>>;
    fn outgoing_edges_of(&self, v: &V) -> Option<Vec<E>>;

    /// Edges between a pair, answered from a maintained index. `None` means
    /// this strategy keeps no pair index and the engine must scan.
    fn pair_lookup(&self, _source: &V, _target: &V) -> Option<Vec<E>> {
        None
    }

    fn add_edge_to_touching_vertices(&mut self, edge: E, source: &V, target: &V);
    fn remove_edge_from_touching_vertices(&mut self, edge: &E, source: &V, target: &V);
    fn remove_vertex(&mut self, v: &V);
}

pub(crate) fn new_specifics<V, E>(directed: bool, fast_lookups: bool) -> Box<dyn Specifics<V, E>>
where
    V: Eq + Hash + Clone + 'static,
    E: Eq + Hash + Clone + 'static,
{
    match (directed, fast_lookups) {
        (true, false) => Box::new(DirectedSpecifics::new()),
        (true, true) => Box::new(FastDirectedSpecifics::new()),
        (false, false) => Box::new(UndirectedSpecifics::new()),
        (false, true) => Box::new(FastUndirectedSpecifics::new()),
    }
}

#[derive(Debug)]
struct DirectedEdgeContainer<E> {
    incoming: FxIndexSet<E>,
    outgoing: FxIndexSet<E>,
}

impl<E> Default for DirectedEdgeContainer<E> {
    fn default() -> Self {
        Self {
            incoming: FxIndexSet::default(),
            outgoing: FxIndexSet::default(),
        }
    }
}

/// Directed index: separate ordered in/out sets per vertex. A self-loop
/// appears once in each set.
#[derive(Debug)]
pub(crate) struct DirectedSpecifics<V, E> {
    vertices: FxIndexMap<V, DirectedEdgeContainer<E>>,
}

impl<V, E> DirectedSpecifics<V, E> {
    pub(crate) fn new() -> Self {
        Self {
            vertices: FxIndexMap::default(),
        }
    }
}

impl<V, E> Specifics<V, E> for DirectedSpecifics<V, E>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    fn add_vertex(&mut self, v: V) -> bool {
        if self.vertices.contains_key(&v) {
            return false;
        }
        self.vertices.insert(v, DirectedEdgeContainer::default());
        true
    }

    fn contains_vertex(&self, v: &V) -> bool {
        self.vertices.contains_key(v)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertex_set(&self) -> Vec<V> {
        self.vertices.keys().cloned().collect()
    }

    fn degree_of(&self, v: &V) -> Option<usize> {
        let c = self.vertices.get(v)?;
        Some(c.incoming.len() + c.outgoing.len())
    }

    fn in_degree_of(&self, v: &V) -> Option<usize> {
        self.vertices.get(v).map(|c| c.incoming.len())
    }

    fn out_degree_of(&self, v: &V) -> Option<usize> {
        self.vertices.get(v).map(|c| c.outgoing.len())
    }

    fn edges_of(&self, v: &V) -> Option<Vec<E>> {
        let c = self.vertices.get(v)?;
        let mut out: Vec<E> = c.outgoing.iter().cloned().collect();
        // A self-loop sits in both sets but is one incident edge.
        for e in &c.incoming {
            if !c.outgoing.contains(e) {
                out.push(e.clone());
            }
        }
        Some(out)
    }

    fn incoming_edges_of(&self, v: &V) -> Option<Vec<E>> {
        self.vertices
            .get(v)
            .map(|c| c.incoming.iter().cloned().collect())
    }

    fn outgoing_edges_of(&self, v: &V) -> Option<Vec<E>> {
        self.vertices
            .get(v)
            .map(|c| c.outgoing.iter().cloned().collect())
    }

    fn add_edge_to_touching_vertices(&mut self, edge: E, source: &V, target: &V) {
        if let Some(c) = self.vertices.get_mut(source) {
            c.outgoing.insert(edge.clone());
        }
        if let Some(c) = self.vertices.get_mut(target) {
            c.incoming.insert(edge);
        }
    }

    fn remove_edge_from_touching_vertices(&mut self, edge: &E, source: &V, target: &V) {
        if let Some(c) = self.vertices.get_mut(source) {
            c.outgoing.shift_remove(edge);
        }
        if let Some(c) = self.vertices.get_mut(target) {
            c.incoming.shift_remove(edge);
        }
    }

    fn remove_vertex(&mut self, v: &V) {
        self.vertices.shift_remove(v);
    }
}

#[derive(Debug)]
struct UndirectedEdgeContainer<E> {
    edges: FxIndexSet<E>,
    // Loops are stored once but weigh twice in `degree_of`.
    loop_count: usize,
}

impl<E> Default for UndirectedEdgeContainer<E> {
    fn default() -> Self {
        Self {
            edges: FxIndexSet::default(),
            loop_count: 0,
        }
    }
}

/// Undirected index: one ordered incident set per vertex.
#[derive(Debug)]
pub(crate) struct UndirectedSpecifics<V, E> {
    vertices: FxIndexMap<V, UndirectedEdgeContainer<E>>,
}

impl<V, E> UndirectedSpecifics<V, E> {
    pub(crate) fn new() -> Self {
        Self {
            vertices: FxIndexMap::default(),
        }
    }
}

impl<V, E> Specifics<V, E> for UndirectedSpecifics<V, E>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    fn add_vertex(&mut self, v: V) -> bool {
        if self.vertices.contains_key(&v) {
            return false;
        }
        self.vertices.insert(v, UndirectedEdgeContainer::default());
        true
    }

    fn contains_vertex(&self, v: &V) -> bool {
        self.vertices.contains_key(v)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertex_set(&self) -> Vec<V> {
        self.vertices.keys().cloned().collect()
    }

    fn degree_of(&self, v: &V) -> Option<usize> {
        let c = self.vertices.get(v)?;
        Some(c.edges.len() + c.loop_count)
    }

    fn in_degree_of(&self, v: &V) -> Option<usize> {
        self.degree_of(v)
    }

    fn out_degree_of(&self, v: &V) -> Option<usize> {
        self.degree_of(v)
    }

    fn edges_of(&self, v: &V) -> Option<Vec<E>> {
        self.vertices
            .get(v)
            .map(|c| c.edges.iter().cloned().collect())
    }

    fn incoming_edges_of(&self, v: &V) -> Option<Vec<E>> {
        self.edges_of(v)
    }

    fn outgoing_edges_of(&self, v: &V) -> Option<Vec<E>> {
        self.edges_of(v)
    }

    fn add_edge_to_touching_vertices(&mut self, edge: E, source: &V, target: &V) {
        if source == target {
            if let Some(c) = self.vertices.get_mut(source) {
                c.edges.insert(edge);
                c.loop_count += 1;
            }
            return;
        }
        if let Some(c) = self.vertices.get_mut(source) {
            c.edges.insert(edge.clone());
        }
        if let Some(c) = self.vertices.get_mut(target) {
            c.edges.insert(edge);
        }
    }

    fn remove_edge_from_touching_vertices(&mut self, edge: &E, source: &V, target: &V) {
        if source == target {
            if let Some(c) = self.vertices.get_mut(source) {
                if c.edges.shift_remove(edge) {
                    c.loop_count -= 1;
                }
            }
            return;
        }
        if let Some(c) = self.vertices.get_mut(source) {
            c.edges.shift_remove(edge);
        }
        if let Some(c) = self.vertices.get_mut(target) {
            c.edges.shift_remove(edge);
        }
    }

    fn remove_vertex(&mut self, v: &V) {
        self.vertices.shift_remove(v);
    }
}

fn element_hash<V: Hash>(v: &V) -> u64 {
    let mut hasher = FxHasher::default();
    v.hash(&mut hasher);
    hasher.finish()
}

#[derive(Clone, Copy)]
struct PairView<'a, V>(&'a V, &'a V);

impl<'a, V: Hash> Hash for PairView<'a, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
        self.1.hash(state);
    }
}

impl<'a, V: Eq + Hash> hashbrown::Equivalent<(V, V)> for PairView<'a, V> {
    fn equivalent(&self, key: &(V, V)) -> bool {
        key.0 == *self.0 && key.1 == *self.1
    }
}

/// Unordered vertex pair: equality and hashing ignore orientation.
#[derive(Debug, Clone)]
struct UnorderedPair<V>(V, V);

impl<V: Eq> PartialEq for UnorderedPair<V> {
    fn eq(&self, other: &Self) -> bool {
        (self.0 == other.0 && self.1 == other.1) || (self.0 == other.1 && self.1 == other.0)
    }
}

impl<V: Eq> Eq for UnorderedPair<V> {}

impl<V: Hash> Hash for UnorderedPair<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // XOR of per-element hashes is commutative, so (a, b) and (b, a)
        // land in the same bucket.
        state.write_u64(element_hash(&self.0) ^ element_hash(&self.1));
    }
}

#[derive(Clone, Copy)]
struct UnorderedPairView<'a, V>(&'a V, &'a V);

impl<'a, V: Hash> Hash for UnorderedPairView<'a, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(element_hash(self.0) ^ element_hash(self.1));
    }
}

impl<'a, V: Eq + Hash> hashbrown::Equivalent<UnorderedPair<V>> for UnorderedPairView<'a, V> {
    fn equivalent(&self, key: &UnorderedPair<V>) -> bool {
        (key.0 == *self.0 && key.1 == *self.1) || (key.0 == *self.1 && key.1 == *self.0)
    }
}

/// Directed index plus a (source, target) → edges hash index.
#[derive(Debug)]
pub(crate) struct FastDirectedSpecifics<V, E> {
    inner: DirectedSpecifics<V, E>,
    by_pair: FxHashMap<(V, V), FxIndexSet<E>>,
}

impl<V, E> FastDirectedSpecifics<V, E> {
    pub(crate) fn new() -> Self {
        Self {
            inner: DirectedSpecifics::new(),
            by_pair: FxHashMap::default(),
        }
    }
}

impl<V, E> Specifics<V, E> for FastDirectedSpecifics<V, E>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    fn add_vertex(&mut self, v: V) -> bool {
        self.inner.add_vertex(v)
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

    fn degree_of(&self, v: &V) -> Option<usize> {
        self.inner.degree_of(v)
    }

    fn in_degree_of(&self, v: &V) -> Option<usize> {
        self.inner.in_degree_of(v)
    }

    fn out_degree_of(&self, v: &V) -> Option<usize> {
        self.inner.out_degree_of(v)
    }

    fn edges_of(&self, v: &V) -> Option<Vec<E>> {
        self.inner.edges_of(v)
    }

    fn incoming_edges_of(&self, v: &V) -> Option<Vec<E>> {
        self.inner.incoming_edges_of(v)
    }

    fn outgoing_edges_of(&self, v: &V) -> Option<Vec<E>> {
        self.inner.outgoing_edges_of(v)
    }

    fn pair_lookup(&self, source: &V, target: &V) -> Option<Vec<E>> {
        Some(
            self.by_pair
                .get(&PairView(source, target))
                .map(|edges| edges.iter().cloned().collect())
                .unwrap_or_default(),
        )
    }

    fn add_edge_to_touching_vertices(&mut self, edge: E, source: &V, target: &V) {
        self.by_pair
            .entry((source.clone(), target.clone()))
            .or_default()
            .insert(edge.clone());
        self.inner.add_edge_to_touching_vertices(edge, source, target);
    }

    fn remove_edge_from_touching_vertices(&mut self, edge: &E, source: &V, target: &V) {
        let emptied = match self.by_pair.get_mut(&PairView(source, target)) {
            Some(edges) => {
                edges.shift_remove(edge);
                edges.is_empty()
            }
            None => false,
        };
        if emptied {
            self.by_pair.remove(&PairView(source, target));
        }
        self.inner
            .remove_edge_from_touching_vertices(edge, source, target);
    }

    fn remove_vertex(&mut self, v: &V) {
        self.inner.remove_vertex(v);
    }
}

/// Undirected index plus an unordered-pair → edges hash index.
#[derive(Debug)]
pub(crate) struct FastUndirectedSpecifics<V, E> {
    inner: UndirectedSpecifics<V, E>,
    by_pair: FxHashMap<UnorderedPair<V>, FxIndexSet<E>>,
}

impl<V, E> FastUndirectedSpecifics<V, E> {
    pub(crate) fn new() -> Self {
        Self {
            inner: UndirectedSpecifics::new(),
            by_pair: FxHashMap::default(),
        }
    }
}

impl<V, E> Specifics<V, E> for FastUndirectedSpecifics<V, E>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    fn add_vertex(&mut self, v: V) -> bool {
        self.inner.add_vertex(v)
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

    fn degree_of(&self, v: &V) -> Option<usize> {
        self.inner.degree_of(v)
    }

    fn in_degree_of(&self, v: &V) -> Option<usize> {
        self.inner.in_degree_of(v)
    }

    fn out_degree_of(&self, v: &V) -> Option<usize> {
        self.inner.out_degree_of(v)
    }

    fn edges_of(&self, v: &V) -> Option<Vec<E>> {
        self.inner.edges_of(v)
    }

    fn incoming_edges_of(&self, v: &V) -> Option<Vec<E>> {
        self.inner.incoming_edges_of(v)
    }

    fn outgoing_edges_of(&self, v: &V) -> Option<Vec<E>> {
        self.inner.outgoing_edges_of(v)
    }

    fn pair_lookup(&self, source: &V, target: &V) -> Option<Vec<E>> {
        Some(
            self.by_pair
                .get(&UnorderedPairView(source, target))
                .map(|edges| edges.iter().cloned().collect())
                .unwrap_or_default(),
        )
    }

    fn add_edge_to_touching_vertices(&mut self, edge: E, source: &V, target: &V) {
        self.by_pair
            .entry(UnorderedPair(source.clone(), target.clone()))
            .or_default()
            .insert(edge.clone());
        self.inner.add_edge_to_touching_vertices(edge, source, target);
    }

    fn remove_edge_from_touching_vertices(&mut self, edge: &E, source: &V, target: &V) {
        let emptied = match self.by_pair.get_mut(&UnorderedPairView(source, target)) {
            Some(edges) => {
                edges.shift_remove(edge);
                edges.is_empty()
            }
            None => false,
        };
        if emptied {
            self.by_pair.remove(&UnorderedPairView(source, target));
        }
        self.inner
            .remove_edge_from_touching_vertices(edge, source, target);
    }

    fn remove_vertex(&mut self, v: &V) {
        self.inner.remove_vertex(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unordered_pair_ignores_orientation() {
        let mut map: FxHashMap<UnorderedPair<&str>, u32> = FxHashMap::default();
        map.insert(UnorderedPair("a", "b"), 1);

        assert_eq!(map.get(&UnorderedPairView(&"b", &"a")), Some(&1));
        assert_eq!(map.get(&UnorderedPairView(&"a", &"b")), Some(&1));
        assert_eq!(map.get(&UnorderedPairView(&"a", &"c")), None);
    }

    #[test]
    fn directed_self_loop_appears_once_per_index() {
        let mut s: DirectedSpecifics<&str, u32> = DirectedSpecifics::new();
        s.add_vertex("a");
        s.add_edge_to_touching_vertices(1, &"a", &"a");

        assert_eq!(s.in_degree_of(&"a"), Some(1));
        assert_eq!(s.out_degree_of(&"a"), Some(1));
        assert_eq!(s.degree_of(&"a"), Some(2));
        assert_eq!(s.edges_of(&"a"), Some(vec![1]));
    }

    #[test]
    fn undirected_self_loop_counts_twice_but_lists_once() {
        let mut s: UndirectedSpecifics<&str, u32> = UndirectedSpecifics::new();
        s.add_vertex("a");
        s.add_edge_to_touching_vertices(1, &"a", &"a");

        assert_eq!(s.degree_of(&"a"), Some(2));
        assert_eq!(s.edges_of(&"a"), Some(vec![1]));

        s.remove_edge_from_touching_vertices(&1, &"a", &"a");
        assert_eq!(s.degree_of(&"a"), Some(0));
    }

    #[test]
    fn fast_undirected_pair_lookup_is_symmetric() {
        let mut s: FastUndirectedSpecifics<&str, u32> = FastUndirectedSpecifics::new();
        s.add_vertex("a");
        s.add_vertex("b");
        s.add_edge_to_touching_vertices(1, &"a", &"b");

        assert_eq!(s.pair_lookup(&"a", &"b"), Some(vec![1]));
        assert_eq!(s.pair_lookup(&"b", &"a"), Some(vec![1]));
        assert_eq!(s.pair_lookup(&"a", &"a"), Some(vec![]));
    }
}
