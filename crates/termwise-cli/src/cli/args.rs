use std::path::PathBuf;

use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(allow_hyphen_values = true)]
    pub query: String,
    /// Seed file (JSON array or JSONL). Defaults to the built-in seed set.
    #[arg(long, value_name = "FILE")]
    pub seed: Option<PathBuf>,
    /// Commit a term before searching. Repeatable.
    #[arg(long = "learn", value_name = "TERM")]
    pub learn: Vec<String>,
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, Args)]
pub struct ReplArgs {
    #[arg(long, value_name = "FILE")]
    pub seed: Option<PathBuf>,
    /// Append the session request log to this file as JSONL on exit.
    #[arg(long, value_name = "FILE")]
    pub request_log: Option<PathBuf>,
}
