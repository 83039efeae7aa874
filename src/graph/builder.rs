//! Fluent API for building Graph instances.

use crate::types::{GraphResult, NodeId, DEFAULT_WEIGHT};

use super::Graph;

/// Fluent builder for constructing a [`Graph`] in one go.
///
/// IDs handed out by [`GraphBuilder::node`] are the IDs the built graph
/// assigns, so they can be used to declare edges before `build`.
pub struct GraphBuilder<T> {
    directed: bool,
    nodes: Vec<T>,
    edges: Vec<(NodeId, NodeId, i64)>,
}

impl<T> GraphBuilder<T> {
    /// Builder for a directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Builder for an undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    fn new(directed: bool) -> Self {
        Self {
            directed,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a node.
    pub fn node(&mut self, value: T) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u64);
        self.nodes.push(value);
        id
    }

    /// Add an edge of the default weight.
    pub fn edge(&mut self, source: NodeId, destination: NodeId) -> &mut Self {
        self.weighted_edge(source, destination, DEFAULT_WEIGHT)
    }

    /// Add a weighted edge.
    pub fn weighted_edge(&mut self, source: NodeId, destination: NodeId, weight: i64) -> &mut Self {
        self.edges.push((source, destination, weight));
        self
    }

    /// Build the final Graph. Edges are checked exactly as
    /// [`Graph::add_weighted_edge`] checks them; the first bad edge aborts.
    pub fn build(self) -> GraphResult<Graph<T>> {
        let graph = Graph::with_capacity(self.directed, self.nodes.len());
        for value in self.nodes {
            graph.add_node(value);
        }
        for (source, destination, weight) in self.edges {
            graph.add_weighted_edge(source, destination, weight)?;
        }
        Ok(graph)
    }
}
