//! All data types for the syncgraph library.

pub mod edge;
pub mod error;
pub mod node_id;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use node_id::NodeId;

/// Weight given to edges added without an explicit weight.
pub const DEFAULT_WEIGHT: i64 = 1;
