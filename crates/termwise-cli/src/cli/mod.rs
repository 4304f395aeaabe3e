use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod args;

#[cfg(test)]
mod tests;

pub use args::{ReplArgs, SearchArgs};

#[derive(Debug, Parser)]
#[command(name = "termwise")]
#[command(about = "Self-learning autocomplete engine", version)]
pub struct Cli {
    /// TOML configuration file. `TERMWISE_*` environment variables override it.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run one query against a freshly seeded session.
    Search(SearchArgs),
    /// Read queries and `:` commands from stdin, one JSON line per result.
    Repl(ReplArgs),
    /// Print the built-in seed terms as JSON.
    Seed,
}
