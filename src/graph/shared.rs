//! The public, thread-safe graph handle.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::types::{Edge, GraphResult, NodeId, DEFAULT_WEIGHT};

use super::storage::Storage;
use super::traversal;

/// A generic graph guarded by a single reader/writer lock.
///
/// Mutators take the write lock for their full duration; queries and
/// traversals take the read lock for theirs, so a traversal never observes a
/// half-applied mutation. Every accessor returns copies, never references
/// into the graph. Share between threads with `Arc<Graph<T>>`.
#[derive(Debug)]
pub struct Graph<T> {
    inner: RwLock<Storage<T>>,
}

impl<T> Graph<T> {
    /// Create an empty graph. `directed` is fixed for the graph's lifetime.
    pub fn new(directed: bool) -> Self {
        Self {
            inner: RwLock::new(Storage::new(directed)),
        }
    }

    /// Create an empty graph with room for `capacity` nodes.
    pub fn with_capacity(directed: bool, capacity: usize) -> Self {
        Self {
            inner: RwLock::new(Storage::with_capacity(directed, capacity)),
        }
    }

    // Mutators validate before writing; a poisoned lock still guards
    // consistent state.
    fn read(&self) -> RwLockReadGuard<'_, Storage<T>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Storage<T>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.read().is_directed()
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.read().node_count()
    }

    /// Number of stored edges (entries in the forward adjacency).
    pub fn edge_count(&self) -> usize {
        self.read().edge_count()
    }

    /// Whether a node with this ID is currently live.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.read().contains(id)
    }

    /// IDs of all live nodes, in no particular order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.read().node_ids()
    }

    /// Add a node, returns its freshly minted ID.
    pub fn add_node(&self, value: T) -> NodeId {
        self.write().add_node(value)
    }

    /// Remove a node together with every edge that touches it.
    ///
    /// Returns the removed payload. On `NodeNotFound` nothing is changed.
    pub fn remove_node(&self, id: NodeId) -> GraphResult<T> {
        self.write().remove_node(id)
    }

    /// Add an edge of weight 1. See [`Graph::add_weighted_edge`].
    pub fn add_edge(&self, source: NodeId, destination: NodeId) -> GraphResult<()> {
        self.add_weighted_edge(source, destination, DEFAULT_WEIGHT)
    }

    /// Add the edge `source -> destination`, overwriting the weight of an
    /// existing edge between the same ordered pair.
    ///
    /// Fails with `SelfLoop` when both ends are the same node (whether or not
    /// it exists) and with `NodeNotFound` when either end is missing.
    pub fn add_weighted_edge(
        &self,
        source: NodeId,
        destination: NodeId,
        weight: i64,
    ) -> GraphResult<()> {
        self.write().add_weighted_edge(source, destination, weight)
    }

    /// Remove the edge `source -> destination` from both adjacency maps.
    ///
    /// Returns the removed weight, or `None` when the pair had no edge.
    pub fn remove_edge(&self, source: NodeId, destination: NodeId) -> GraphResult<Option<i64>> {
        self.write().remove_edge(source, destination)
    }

    /// Weight of the edge `source -> destination`, if there is one.
    pub fn edge_weight(&self, source: NodeId, destination: NodeId) -> GraphResult<Option<i64>> {
        self.read().edge_weight(source, destination)
    }

    /// Edges leaving `id`, sorted by target.
    pub fn out_edges(&self, id: NodeId) -> GraphResult<Vec<Edge>> {
        self.read().out_edges(id)
    }

    /// Edges arriving at `id`, sorted by source. `Edge::target` holds the source.
    pub fn in_edges(&self, id: NodeId) -> GraphResult<Vec<Edge>> {
        self.read().in_edges(id)
    }

    /// Number of edges arriving at `id`.
    pub fn in_degree(&self, id: NodeId) -> GraphResult<usize> {
        Ok(self.read().node(id)?.in_edges.len())
    }

    /// Nodes a traversal can step to from `id`, sorted.
    ///
    /// Out-edges only for directed graphs, every incident edge otherwise.
    pub fn neighbors(&self, id: NodeId) -> GraphResult<Vec<NodeId>> {
        let storage = self.read();
        let node = storage.node(id)?;
        let mut ids: Vec<NodeId> = storage.neighbors(node).collect();
        ids.sort_unstable();
        Ok(ids)
    }

    /// Check the mirror and no-self-loop invariants.
    ///
    /// Returns `InvariantViolation` describing the first broken entry.
    pub fn verify(&self) -> GraphResult<()> {
        self.read().verify()
    }
}

impl<T: Clone> Graph<T> {
    /// A copy of the payload stored under `id`.
    pub fn get_node(&self, id: NodeId) -> GraphResult<T> {
        Ok(self.read().node(id)?.value.clone())
    }

    /// Snapshot of every node and its payload, sorted by ID.
    pub fn nodes(&self) -> Vec<(NodeId, T)> {
        let storage = self.read();
        let mut nodes: Vec<(NodeId, T)> = storage
            .nodes()
            .map(|node| (node.id, node.value.clone()))
            .collect();
        nodes.sort_unstable_by_key(|(id, _)| *id);
        nodes
    }

    /// Breadth-first traversal from `start`, in level order.
    pub fn bfs(&self, start: NodeId) -> GraphResult<Vec<T>> {
        traversal::bfs(&self.read(), start)
    }

    /// Pre-order depth-first traversal from `start`.
    ///
    /// Sibling order follows adjacency map iteration and may differ between
    /// runs.
    pub fn dfs(&self, start: NodeId) -> GraphResult<Vec<T>> {
        traversal::dfs(&self.read(), start)
    }

    /// Topological order of a directed graph (Kahn's algorithm).
    ///
    /// Fails with `NotOrderable` on an undirected graph. Cycles are not an
    /// error: nodes that never reach in-degree zero are left out, so compare
    /// the result length with [`Graph::node_count`] to detect them, or use
    /// [`Graph::try_order`].
    pub fn order(&self) -> GraphResult<Vec<T>> {
        traversal::order(&self.read())
    }

    /// Topological order that fails with `CycleDetected` instead of
    /// returning a truncated result.
    pub fn try_order(&self) -> GraphResult<Vec<T>> {
        traversal::try_order(&self.read())
    }
}
