//! CLI command implementations.
//!
//! The demo graph is assembled from command-line flags with node names as
//! payloads. Each command returns its rendered output; the binary prints it.

use std::collections::HashMap;

use thiserror::Error;

use crate::graph::Graph;
use crate::types::{GraphError, NodeId, DEFAULT_WEIGHT};

/// Errors raised while assembling or querying the demo graph.
#[derive(Error, Debug)]
pub enum CliError {
    /// Edge flag not of the form `A:B` or `A:B:WEIGHT`.
    #[error("Invalid edge '{0}': expected SOURCE:DEST or SOURCE:DEST:WEIGHT")]
    InvalidEdge(String),

    /// A command named a node that was never declared.
    #[error("Unknown node name: {0}")]
    UnknownNode(String),

    /// The graph rejected an operation.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Convenience result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// A graph of named nodes plus the name lookup table.
pub struct NamedGraph {
    graph: Graph<String>,
    ids: HashMap<String, NodeId>,
}

impl NamedGraph {
    /// Build a graph from `--node` names and `--edge` specs.
    ///
    /// Edge endpoints that were not declared as nodes are created on demand.
    pub fn assemble(directed: bool, nodes: &[String], edges: &[String]) -> CliResult<Self> {
        let mut named = Self {
            graph: Graph::with_capacity(directed, nodes.len()),
            ids: HashMap::new(),
        };
        for name in nodes {
            named.intern(name);
        }
        for spec in edges {
            let (source, destination, weight) = parse_edge(spec)?;
            let source = named.intern(source);
            let destination = named.intern(destination);
            named.graph.add_weighted_edge(source, destination, weight)?;
        }
        Ok(named)
    }

    fn intern(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.graph.add_node(name.to_string());
        self.ids.insert(name.to_string(), id);
        id
    }

    /// Resolve a node name to its ID.
    pub fn id_of(&self, name: &str) -> CliResult<NodeId> {
        self.ids
            .get(name)
            .copied()
            .ok_or_else(|| CliError::UnknownNode(name.to_string()))
    }

    /// The underlying graph.
    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }
}

/// Split `A:B` or `A:B:W` into its parts.
fn parse_edge(spec: &str) -> CliResult<(&str, &str, i64)> {
    let invalid = || CliError::InvalidEdge(spec.to_string());
    let parts: Vec<&str> = spec.split(':').collect();
    let (source, destination, weight) = match parts.as_slice() {
        [s, d] => (*s, *d, DEFAULT_WEIGHT),
        [s, d, w] => (*s, *d, w.trim().parse::<i64>().map_err(|_| invalid())?),
        _ => return Err(invalid()),
    };
    if source.is_empty() || destination.is_empty() {
        return Err(invalid());
    }
    Ok((source, destination, weight))
}

/// Summarize the graph.
pub fn cmd_info(named: &NamedGraph, json: bool) -> CliResult<String> {
    let graph = named.graph();
    if json {
        let adjacency: Vec<serde_json::Value> = graph
            .nodes()
            .into_iter()
            .map(|(id, name)| -> CliResult<serde_json::Value> {
                let out = graph.out_edges(id)?;
                Ok(serde_json::json!({"id": id, "name": name, "out_edges": out}))
            })
            .collect::<CliResult<_>>()?;
        let info = serde_json::json!({
            "directed": graph.is_directed(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "adjacency": adjacency,
        });
        return Ok(serde_json::to_string_pretty(&info).unwrap_or_default());
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Kind: {}\n",
        if graph.is_directed() { "directed" } else { "undirected" }
    ));
    out.push_str(&format!("Nodes: {}\n", graph.node_count()));
    out.push_str(&format!("Edges: {}\n", graph.edge_count()));
    for (id, name) in graph.nodes() {
        let targets = graph
            .out_edges(id)?
            .into_iter()
            .map(|edge| -> CliResult<String> {
                let target = graph.get_node(edge.target)?;
                Ok(format!("{}({})", target, edge.weight))
            })
            .collect::<CliResult<Vec<String>>>()?;
        out.push_str(&format!("  {} -> [{}]\n", name, targets.join(", ")));
    }
    Ok(out)
}

/// Breadth-first traversal from a named node.
pub fn cmd_bfs(named: &NamedGraph, start: &str, json: bool) -> CliResult<String> {
    let result = named.graph().bfs(named.id_of(start)?)?;
    Ok(render("bfs", Some(start), &result, json))
}

/// Depth-first traversal from a named node.
pub fn cmd_dfs(named: &NamedGraph, start: &str, json: bool) -> CliResult<String> {
    let result = named.graph().dfs(named.id_of(start)?)?;
    Ok(render("dfs", Some(start), &result, json))
}

/// Topological order of the whole graph.
pub fn cmd_order(named: &NamedGraph, strict: bool, json: bool) -> CliResult<String> {
    let graph = named.graph();
    let result = if strict {
        graph.try_order()?
    } else {
        graph.order()?
    };
    Ok(render("order", None, &result, json))
}

fn render(traversal: &str, start: Option<&str>, names: &[String], json: bool) -> String {
    if json {
        serde_json::json!({
            "traversal": traversal,
            "start": start,
            "nodes": names,
        })
        .to_string()
    } else {
        names.join("\n")
    }
}
