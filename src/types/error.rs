//! Error types for the syncgraph library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur in the syncgraph library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The referenced node does not exist in the graph.
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    /// An edge operation named the same node as source and destination.
    #[error("Edge can not start and end at node {0}")]
    SelfLoop(NodeId),

    /// Topological ordering requested on an undirected graph.
    #[error("Undirected graph can not be ordered")]
    NotOrderable,

    /// Strict ordering found nodes that never reached in-degree zero.
    #[error("Graph contains a cycle: ordered {ordered} of {total} nodes")]
    CycleDetected { ordered: usize, total: usize },

    /// Internal state is inconsistent. Indicates a bug, not a caller error.
    #[error("Graph invariant violated: {0}")]
    InvariantViolation(String),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
