//! Graph shape configuration and the derived [`GraphType`] descriptor.

use serde::{Deserialize, Serialize};

/// Immutable shape of a graph instance, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    pub directed: bool,
    pub weighted: bool,
    pub multi_edges: bool,
    pub self_loops: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: true,
            weighted: false,
            multi_edges: false,
            self_loops: false,
        }
    }
}

impl GraphConfig {
    /// Undirected, single edges, no self-loops.
    pub fn simple() -> Self {
        Self {
            directed: false,
            ..Self::default()
        }
    }

    /// Directed, single edges, no self-loops.
    pub fn directed_simple() -> Self {
        Self::default()
    }

    /// Undirected with parallel edges, no self-loops.
    pub fn multigraph() -> Self {
        Self {
            directed: false,
            multi_edges: true,
            ..Self::default()
        }
    }

    /// Directed with parallel edges, no self-loops.
    pub fn directed_multigraph() -> Self {
        Self {
            multi_edges: true,
            ..Self::default()
        }
    }

    /// Undirected with parallel edges and self-loops.
    pub fn pseudograph() -> Self {
        Self {
            directed: false,
            multi_edges: true,
            self_loops: true,
            ..Self::default()
        }
    }

    /// Directed with parallel edges and self-loops.
    pub fn directed_pseudograph() -> Self {
        Self {
            multi_edges: true,
            self_loops: true,
            ..Self::default()
        }
    }

    pub fn weighted(mut self) -> Self {
        self.weighted = true;
        self
    }

    pub fn with_self_loops(mut self) -> Self {
        self.self_loops = true;
        self
    }

    pub fn with_multi_edges(mut self) -> Self {
        self.multi_edges = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Directedness {
    Directed,
    Undirected,
    /// Only produced by union views over inputs that disagree on direction.
    Mixed,
}

/// Runtime description of a graph's capabilities.
///
/// Computed on demand by every container and view; never cached, so it can
/// never go stale. Consumers use it to reject operations that do not apply
/// to a given graph kind (multigraph-unsafe algorithms, weight mutation on
/// unweighted graphs, writes to frozen views).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphType {
    pub directedness: Directedness,
    pub weighted: bool,
    pub allows_multiple_edges: bool,
    pub allows_self_loops: bool,
    pub modifiable: bool,
}

impl GraphType {
    pub fn of(config: &GraphConfig) -> Self {
        Self {
            directedness: if config.directed {
                Directedness::Directed
            } else {
                Directedness::Undirected
            },
            weighted: config.weighted,
            allows_multiple_edges: config.multi_edges,
            allows_self_loops: config.self_loops,
            modifiable: true,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directedness == Directedness::Directed
    }

    pub fn is_undirected(&self) -> bool {
        self.directedness == Directedness::Undirected
    }

    pub fn is_mixed(&self) -> bool {
        self.directedness == Directedness::Mixed
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    pub fn is_modifiable(&self) -> bool {
        self.modifiable
    }

    pub(crate) fn frozen(mut self) -> Self {
        self.modifiable = false;
        self
    }
}
