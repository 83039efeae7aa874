//! In-memory graph: storage, traversals and the locked public handle.

pub mod builder;
mod frontier;
pub mod shared;
mod storage;
mod traversal;

pub use builder::GraphBuilder;
pub use shared::Graph;
