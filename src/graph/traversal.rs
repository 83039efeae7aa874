//! Graph traversal algorithms (BFS, DFS, topological order).
//!
//! These run over an already-locked [`Storage`]; the caller holds the read
//! guard for the whole walk, so each result reflects one consistent state.

use std::collections::{HashMap, HashSet};

use crate::types::{GraphError, GraphResult, NodeId};

use super::frontier::Frontier;
use super::storage::{Node, Storage};

/// Breadth-first walk from `start`, returning payloads in level order.
///
/// Nodes are marked visited when enqueued, so a node reachable from several
/// predecessors is queued only once.
pub(crate) fn bfs<T: Clone>(storage: &Storage<T>, start: NodeId) -> GraphResult<Vec<T>> {
    storage.node(start)?;

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut frontier = Frontier::new();
    let mut result = Vec::new();

    visited.insert(start);
    frontier.push(start);

    while let Some(current) = frontier.pop() {
        let node = resolve(storage, current)?;
        result.push(node.value.clone());

        for next in storage.neighbors(node) {
            if visited.insert(next) {
                frontier.push(next);
            }
        }
    }

    log::trace!("bfs from {} visited {} nodes", start, result.len());
    Ok(result)
}

/// Pre-order depth-first walk from `start`.
///
/// Uses an explicit stack so long chains cannot overflow the call stack.
/// Neighbors are pushed in reverse so they are entered in adjacency order,
/// giving the same sequence as the recursive formulation.
pub(crate) fn dfs<T: Clone>(storage: &Storage<T>, start: NodeId) -> GraphResult<Vec<T>> {
    storage.node(start)?;

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut stack = vec![start];
    let mut result = Vec::new();

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        let node = resolve(storage, current)?;
        result.push(node.value.clone());

        let mut next: Vec<NodeId> = storage
            .neighbors(node)
            .filter(|id| !visited.contains(id))
            .collect();
        next.reverse();
        stack.extend(next);
    }

    log::trace!("dfs from {} visited {} nodes", start, result.len());
    Ok(result)
}

/// Kahn's algorithm. Nodes on or behind a cycle never reach in-degree zero
/// and are left out, so a short result means the graph is cyclic.
pub(crate) fn order<T: Clone>(storage: &Storage<T>) -> GraphResult<Vec<T>> {
    if !storage.is_directed() {
        return Err(GraphError::NotOrderable);
    }

    let mut in_degree: HashMap<NodeId, usize> = storage
        .nodes()
        .map(|node| (node.id, node.in_edges.len()))
        .collect();

    let mut seeds: Vec<NodeId> = in_degree
        .iter()
        .filter(|&(_, &degree)| degree == 0)
        .map(|(&id, _)| id)
        .collect();
    seeds.sort_unstable();
    let mut frontier: Frontier = seeds.into_iter().collect();
    let mut result = Vec::with_capacity(storage.node_count());

    while let Some(current) = frontier.pop() {
        let node = resolve(storage, current)?;
        result.push(node.value.clone());

        let mut successors: Vec<NodeId> = node.out_edges.keys().copied().collect();
        successors.sort_unstable();
        for succ in successors {
            let degree = in_degree.get_mut(&succ).ok_or_else(|| {
                GraphError::InvariantViolation(format!("edge {} -> {} dangles", current, succ))
            })?;
            *degree = degree.checked_sub(1).ok_or_else(|| {
                GraphError::InvariantViolation(format!("in-degree of {} underflowed", succ))
            })?;
            if *degree == 0 {
                frontier.push(succ);
            }
        }
    }

    log::trace!(
        "ordered {} of {} nodes",
        result.len(),
        storage.node_count()
    );
    Ok(result)
}

/// Like [`order`], but reports a cycle instead of truncating silently.
pub(crate) fn try_order<T: Clone>(storage: &Storage<T>) -> GraphResult<Vec<T>> {
    let result = order(storage)?;
    let total = storage.node_count();
    if result.len() < total {
        log::warn!(
            "cycle detected: only {} of {} nodes could be ordered",
            result.len(),
            total
        );
        return Err(GraphError::CycleDetected {
            ordered: result.len(),
            total,
        });
    }
    Ok(result)
}

/// Look up a node reached through an edge. A miss means an adjacency map
/// references a node that no longer exists.
fn resolve<T>(storage: &Storage<T>, id: NodeId) -> GraphResult<&Node<T>> {
    storage.node(id).map_err(|_| {
        GraphError::InvariantViolation(format!("traversal reached missing node {}", id))
    })
}
