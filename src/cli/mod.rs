//! Command-line demo support for the `sgraph` binary.

pub mod commands;

pub use commands::{CliError, CliResult, NamedGraph};
