pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors reported by graph containers and their views.
///
/// Every error is raised at the offending call; nothing is deferred or
/// auto-corrected. Situations that are legal but have no effect (adding a
/// duplicate edge to a graph that forbids multi-edges, re-adding a vertex)
/// are *not* errors: the mutating call reports them through its return value.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("invalid graph configuration: {message}")]
    Configuration { message: String },

    #[error("vertex is not a member of this graph")]
    VertexNotMember,

    #[error("edge is not a member of this graph")]
    EdgeNotMember,

    #[error("self-loops are not allowed by this graph")]
    SelfLoopsNotAllowed,

    #[error("this graph is unweighted; edge weights cannot be set")]
    NotWeighted,

    #[error("this graph is unmodifiable")]
    Unmodifiable,

    #[error("operation `{operation}` is not supported by this graph kind")]
    UnsupportedForKind { operation: &'static str },

    #[error("the graph was structurally modified while a cursor was active")]
    ConcurrentModification,

    #[error("the edge would induce a cycle")]
    CycleDetected,
}

impl GraphError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
