//! Node arena with mirrored forward and reverse adjacency.
//!
//! `Storage` holds no lock of its own; [`crate::graph::Graph`] wraps it in a
//! reader/writer lock. Every mutator validates its arguments before writing,
//! so a failed call leaves the arena untouched.

use std::collections::HashMap;

use crate::types::{Edge, GraphError, GraphResult, NodeId};

/// A stored node: the caller's payload plus both adjacency maps.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) id: NodeId,
    /// Edges where this node is the source: destination -> weight.
    pub(crate) out_edges: HashMap<NodeId, i64>,
    /// Edges where this node is the destination: source -> weight.
    pub(crate) in_edges: HashMap<NodeId, i64>,
}

impl<T> Node<T> {
    fn new(id: NodeId, value: T) -> Self {
        Self {
            value,
            id,
            out_edges: HashMap::new(),
            in_edges: HashMap::new(),
        }
    }
}

/// The unlocked graph state.
#[derive(Debug)]
pub(crate) struct Storage<T> {
    /// All live nodes, indexed by ID.
    nodes: HashMap<NodeId, Node<T>>,
    /// Fixed at construction.
    directed: bool,
    /// Next ID to hand out. Never decremented.
    next_id: u64,
}

impl<T> Storage<T> {
    pub(crate) fn new(directed: bool) -> Self {
        Self::with_capacity(directed, 0)
    }

    pub(crate) fn with_capacity(directed: bool, capacity: usize) -> Self {
        Self {
            nodes: HashMap::with_capacity(capacity),
            directed,
            next_id: 0,
        }
    }

    pub(crate) fn is_directed(&self) -> bool {
        self.directed
    }

    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.nodes.values().map(|n| n.out_edges.len()).sum()
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub(crate) fn node(&self, id: NodeId) -> GraphResult<&Node<T>> {
        self.nodes.get(&id).ok_or(GraphError::NodeNotFound(id))
    }

    pub(crate) fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        self.nodes.values()
    }

    pub(crate) fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.keys().copied().collect()
    }

    /// Nodes a traversal may step to from `node`.
    ///
    /// Directed graphs follow out-edges only. Undirected graphs treat every
    /// incident edge as traversable, so in-edges not already covered by an
    /// out-edge are appended.
    pub(crate) fn neighbors<'a>(&'a self, node: &'a Node<T>) -> impl Iterator<Item = NodeId> + 'a {
        let reverse = (!self.directed)
            .then(move || {
                node.in_edges
                    .keys()
                    .filter(move |id| !node.out_edges.contains_key(*id))
            })
            .into_iter()
            .flatten();
        node.out_edges.keys().chain(reverse).copied()
    }

    pub(crate) fn out_edges(&self, id: NodeId) -> GraphResult<Vec<Edge>> {
        let node = self.node(id)?;
        Ok(to_edges(&node.out_edges))
    }

    pub(crate) fn in_edges(&self, id: NodeId) -> GraphResult<Vec<Edge>> {
        let node = self.node(id)?;
        Ok(to_edges(&node.in_edges))
    }

    pub(crate) fn edge_weight(&self, source: NodeId, destination: NodeId) -> GraphResult<Option<i64>> {
        let start = self.node(source)?;
        self.node(destination)?;
        Ok(start.out_edges.get(&destination).copied())
    }

    /// Add a node, returns the freshly minted ID.
    pub(crate) fn add_node(&mut self, value: T) -> NodeId {
        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, Node::new(id, value));
        log::trace!("added node {}", id);
        id
    }

    /// Remove a node and every edge touching it. Returns the payload.
    pub(crate) fn remove_node(&mut self, id: NodeId) -> GraphResult<T> {
        let removed = self.nodes.remove(&id).ok_or(GraphError::NodeNotFound(id))?;

        // The mirror invariant means only the removed node's own neighbors
        // can hold a reference back to it.
        for other in removed.out_edges.keys().chain(removed.in_edges.keys()) {
            if let Some(node) = self.nodes.get_mut(other) {
                node.out_edges.remove(&id);
                node.in_edges.remove(&id);
            }
        }

        log::debug!(
            "removed node {} ({} out-edges, {} in-edges purged)",
            id,
            removed.out_edges.len(),
            removed.in_edges.len()
        );
        Ok(removed.value)
    }

    /// Insert or overwrite the edge `source -> destination`.
    pub(crate) fn add_weighted_edge(
        &mut self,
        source: NodeId,
        destination: NodeId,
        weight: i64,
    ) -> GraphResult<()> {
        self.check_endpoints(source, destination)?;

        if let Some(start) = self.nodes.get_mut(&source) {
            start.out_edges.insert(destination, weight);
        }
        if let Some(end) = self.nodes.get_mut(&destination) {
            end.in_edges.insert(source, weight);
        }

        log::trace!("added edge {} -> {} (weight {})", source, destination, weight);
        Ok(())
    }

    /// Remove the edge `source -> destination` from both adjacency maps.
    ///
    /// Returns the weight the edge carried, or `None` if there was no edge.
    pub(crate) fn remove_edge(
        &mut self,
        source: NodeId,
        destination: NodeId,
    ) -> GraphResult<Option<i64>> {
        self.check_endpoints(source, destination)?;

        let weight = self
            .nodes
            .get_mut(&source)
            .and_then(|start| start.out_edges.remove(&destination));
        if let Some(end) = self.nodes.get_mut(&destination) {
            end.in_edges.remove(&source);
        }

        if weight.is_none() {
            log::debug!("no edge {} -> {} to remove", source, destination);
        }
        Ok(weight)
    }

    /// Check the mirror and no-self-loop invariants over the whole arena.
    pub(crate) fn verify(&self) -> GraphResult<()> {
        for node in self.nodes.values() {
            for (&dest, &weight) in &node.out_edges {
                if dest == node.id {
                    return Err(GraphError::InvariantViolation(format!(
                        "self-loop on node {}",
                        dest
                    )));
                }
                let mirrored = self
                    .nodes
                    .get(&dest)
                    .and_then(|end| end.in_edges.get(&node.id));
                if mirrored != Some(&weight) {
                    return Err(GraphError::InvariantViolation(format!(
                        "edge {} -> {} has no matching reverse entry",
                        node.id, dest
                    )));
                }
            }
            for (&src, &weight) in &node.in_edges {
                let mirrored = self
                    .nodes
                    .get(&src)
                    .and_then(|start| start.out_edges.get(&node.id));
                if mirrored != Some(&weight) {
                    return Err(GraphError::InvariantViolation(format!(
                        "reverse entry {} <- {} has no matching edge",
                        node.id, src
                    )));
                }
            }
        }
        Ok(())
    }

    fn check_endpoints(&self, source: NodeId, destination: NodeId) -> GraphResult<()> {
        if source == destination {
            return Err(GraphError::SelfLoop(source));
        }
        self.node(source)?;
        self.node(destination)?;
        Ok(())
    }
}

fn to_edges(map: &HashMap<NodeId, i64>) -> Vec<Edge> {
    let mut edges: Vec<Edge> = map.iter().map(|(&id, &w)| Edge::new(id, w)).collect();
    edges.sort_by_key(|e| e.target);
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(directed: bool) -> (Storage<&'static str>, NodeId, NodeId) {
        let mut storage = Storage::new(directed);
        let a = storage.add_node("a");
        let b = storage.add_node("b");
        (storage, a, b)
    }

    #[test]
    fn test_edge_written_to_both_maps() {
        let (mut storage, a, b) = pair(true);
        storage.add_weighted_edge(a, b, 4).unwrap();

        assert_eq!(storage.node(a).unwrap().out_edges.get(&b), Some(&4));
        assert_eq!(storage.node(b).unwrap().in_edges.get(&a), Some(&4));
        assert!(storage.node(a).unwrap().in_edges.is_empty());
        storage.verify().unwrap();
    }

    #[test]
    fn test_remove_edge_clears_reverse_entry() {
        let (mut storage, a, b) = pair(true);
        storage.add_weighted_edge(a, b, 1).unwrap();
        storage.add_weighted_edge(b, a, 2).unwrap();

        assert_eq!(storage.remove_edge(a, b).unwrap(), Some(1));
        assert!(storage.node(b).unwrap().in_edges.get(&a).is_none());
        // The opposite edge is a different pair and must survive.
        assert_eq!(storage.node(b).unwrap().out_edges.get(&a), Some(&2));
        assert_eq!(storage.node(a).unwrap().in_edges.get(&b), Some(&2));
        storage.verify().unwrap();
    }

    #[test]
    fn test_failed_remove_node_is_noop() {
        let (mut storage, a, b) = pair(true);
        storage.add_weighted_edge(a, b, 1).unwrap();
        let ghost = NodeId::new(99);

        assert_eq!(
            storage.remove_node(ghost),
            Err(GraphError::NodeNotFound(ghost))
        );
        assert_eq!(storage.node_count(), 2);
        assert_eq!(storage.edge_count(), 1);
    }

    #[test]
    fn test_undirected_neighbors_union() {
        let mut storage = Storage::new(false);
        let a = storage.add_node(1);
        let b = storage.add_node(2);
        let c = storage.add_node(3);
        storage.add_weighted_edge(a, b, 1).unwrap();
        storage.add_weighted_edge(c, a, 1).unwrap();
        storage.add_weighted_edge(b, a, 1).unwrap();

        let node = storage.node(a).unwrap();
        let mut seen: Vec<NodeId> = storage.neighbors(node).collect();
        seen.sort();
        assert_eq!(seen, vec![b, c]);
    }

    #[test]
    fn test_directed_neighbors_out_only() {
        let (mut storage, a, b) = pair(true);
        storage.add_weighted_edge(b, a, 1).unwrap();
        let node = storage.node(a).unwrap();
        assert_eq!(storage.neighbors(node).count(), 0);
    }

    #[test]
    fn test_verify_catches_broken_mirror() {
        let (mut storage, a, b) = pair(true);
        if let Some(node) = storage.nodes.get_mut(&a) {
            node.out_edges.insert(b, 1);
        }
        assert!(matches!(
            storage.verify(),
            Err(GraphError::InvariantViolation(_))
        ));
    }
}
