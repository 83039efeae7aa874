//! Basic build -> traverse flow.

use syncgraph::*;

#[derive(Debug, Clone)]
struct Greeting {
    data: String,
}

fn main() -> GraphResult<()> {
    let graph = Graph::new(true);

    let a = graph.add_node(Greeting {
        data: "Hello, I am Node A".to_string(),
    });
    let b = graph.add_node(Greeting {
        data: "Hello, I am Node B".to_string(),
    });
    graph.add_edge(a, b)?;

    for node in graph.bfs(a)? {
        println!("{}", node.data);
    }
    Ok(())
}
