//! Phase 3 tests: shared access from parallel threads.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use syncgraph::graph::Graph;
use syncgraph::types::NodeId;

#[test]
fn test_concurrent_add_node_unique_ids() {
    let graph = Arc::new(Graph::new(true));
    let mut handles = vec![];

    for t in 0..8 {
        let g = graph.clone();
        handles.push(thread::spawn(move || {
            (0..250).map(|i| g.add_node(t * 1000 + i)).collect::<Vec<NodeId>>()
        }));
    }

    let mut all = HashSet::new();
    for h in handles {
        for id in h.join().unwrap() {
            assert!(all.insert(id), "duplicate id {}", id);
        }
    }
    assert_eq!(all.len(), 2000);
    assert_eq!(graph.node_count(), 2000);
}

#[test]
fn test_concurrent_reads() {
    let graph = Graph::new(true);
    let ids: Vec<NodeId> = (0..200usize).map(|i| graph.add_node(i)).collect();
    for pair in ids.windows(2) {
        graph.add_edge(pair[0], pair[1]).unwrap();
    }
    let graph = Arc::new(graph);
    let start = ids[0];

    // Multiple concurrent traversals share the read lock
    let mut handles = vec![];
    for _ in 0..6 {
        let g = graph.clone();
        handles.push(thread::spawn(move || {
            assert_eq!(g.bfs(start).unwrap().len(), 200);
            assert_eq!(g.dfs(start).unwrap().len(), 200);
            assert_eq!(g.order().unwrap(), (0..200).collect::<Vec<usize>>());
        }));
    }
    for h in handles {
        h.join().unwrap();
    }
}

#[test]
fn test_traversal_sees_consistent_snapshot() {
    // Readers walk the graph while a writer grows and prunes leaves.
    // Each walk must see a well-formed graph with no duplicates.
    let graph = Arc::new(Graph::new(true));
    let root = graph.add_node(0usize);

    let writer = {
        let g = graph.clone();
        thread::spawn(move || {
            for i in 1..=300usize {
                let leaf = g.add_node(i);
                g.add_edge(root, leaf).unwrap();
                if i % 2 == 0 {
                    g.remove_node(leaf).unwrap();
                }
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let g = graph.clone();
            thread::spawn(move || {
                for _ in 0..200 {
                    let visited = g.bfs(root).unwrap();
                    assert_eq!(visited[0], 0);
                    let unique: HashSet<usize> = visited.iter().copied().collect();
                    assert_eq!(unique.len(), visited.len());
                    g.verify().unwrap();
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for r in readers {
        r.join().unwrap();
    }

    assert_eq!(graph.node_count(), 151);
    assert_eq!(graph.bfs(root).unwrap().len(), 151);
    graph.verify().unwrap();
}

#[test]
fn test_concurrent_edge_writers_keep_mirror() {
    let graph = Graph::new(true);
    let ids: Vec<NodeId> = (0..16).map(|i| graph.add_node(i)).collect();
    let graph = Arc::new(graph);
    let ids = Arc::new(ids);

    let mut handles = vec![];
    for t in 0..4usize {
        let g = graph.clone();
        let ids = ids.clone();
        handles.push(thread::spawn(move || {
            for round in 0..500usize {
                let s = ids[(round + t) % ids.len()];
                let d = ids[(round * 7 + t * 3 + 1) % ids.len()];
                if s == d {
                    continue;
                }
                if round % 3 == 0 {
                    g.remove_edge(s, d).unwrap();
                } else {
                    g.add_weighted_edge(s, d, round as i64).unwrap();
                }
            }
        }));
    }
    for h in handles {
        h.join().unwrap();
    }
    graph.verify().unwrap();
}
