//! CLI entry point for the `sgraph` demo tool.

use std::process;

use clap::{Parser, Subcommand};

use syncgraph::cli::commands;
use syncgraph::cli::NamedGraph;

#[derive(Parser)]
#[command(
    name = "sgraph",
    about = "syncgraph demo: build a graph from flags and traverse it"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Treat every edge as two-way
    #[arg(long)]
    undirected: bool,

    /// Declare a node by name (repeatable)
    #[arg(long = "node")]
    nodes: Vec<String>,

    /// Declare an edge as SOURCE:DEST or SOURCE:DEST:WEIGHT (repeatable)
    #[arg(long = "edge")]
    edges: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show node and edge counts plus the adjacency list
    Info,
    /// Breadth-first traversal from a node
    Bfs {
        /// Name of the start node
        start: String,
    },
    /// Depth-first traversal from a node
    Dfs {
        /// Name of the start node
        start: String,
    },
    /// Topological order (directed graphs only)
    Order {
        /// Fail on cycles instead of returning a partial order
        #[arg(long)]
        strict: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    let result = NamedGraph::assemble(!cli.undirected, &cli.nodes, &cli.edges).and_then(|graph| {
        match cli.command {
            Commands::Info => commands::cmd_info(&graph, json),
            Commands::Bfs { start } => commands::cmd_bfs(&graph, &start, json),
            Commands::Dfs { start } => commands::cmd_dfs(&graph, &start, json),
            Commands::Order { strict } => commands::cmd_order(&graph, strict, json),
        }
    });

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
