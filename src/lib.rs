//! syncgraph — a thread-safe, generically-typed graph container.
//!
//! Nodes carry a caller-supplied payload and are addressed by [`NodeId`]s
//! that are never reused. Edges are weighted, at most one per ordered pair of
//! nodes, and mirrored into a reverse index so in-degrees are always at hand.
//! A graph is directed or undirected for its whole lifetime.
//!
//! All state sits behind one reader/writer lock. Traversals ([`Graph::bfs`],
//! [`Graph::dfs`], [`Graph::order`]) hold the read lock for their entire run
//! and return materialized payload sequences.
//!
//! ```
//! use syncgraph::Graph;
//!
//! let graph = Graph::new(true);
//! let a = graph.add_node("a");
//! let b = graph.add_node("b");
//! let c = graph.add_node("c");
//! graph.add_edge(a, b).unwrap();
//! graph.add_edge(b, c).unwrap();
//!
//! assert_eq!(graph.bfs(a).unwrap(), vec!["a", "b", "c"]);
//! assert_eq!(graph.order().unwrap(), vec!["a", "b", "c"]);
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{Graph, GraphBuilder};
pub use types::{Edge, GraphError, GraphResult, NodeId, DEFAULT_WEIGHT};
