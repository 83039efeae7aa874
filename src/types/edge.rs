//! The edge value handed out to callers.

use serde::Serialize;

use super::NodeId;

/// One end of an adjacency entry: the node at the far end and the weight.
///
/// Returned by value from `out_edges` / `in_edges`. For an out-edge `target`
/// is the destination, for an in-edge it is the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// Node at the far end of the edge.
    pub target: NodeId,
    /// Edge weight.
    pub weight: i64,
}

impl Edge {
    /// Create a new edge value.
    pub fn new(target: NodeId, weight: i64) -> Self {
        Self { target, weight }
    }
}
