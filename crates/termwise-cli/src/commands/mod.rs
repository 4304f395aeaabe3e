use std::io;
use std::path::Path;

use anyhow::{Context, Result, bail};
use termwise_core::seed::{default_seed_terms, load_seed_file};
use termwise_core::{AppConfig, SearchSession};

use crate::cli::Commands;

mod repl;
mod support;


use self::repl::run_repl;
use self::support::{append_jsonl, print_json};

pub(crate) fn run(config_path: Option<&Path>, command: Commands) -> Result<()> {
    validate_command_preflight(&command)?;
    let config = AppConfig::load(config_path).context("failed to load configuration")?;
    run_validated(config, command)
}

fn validate_command_preflight(command: &Commands) -> Result<()> {
    if let Commands::Search(args) = command
        && args.limit == Some(0)
    {
        bail!("--limit must be at least 1");
    }
    Ok(())
}

fn run_validated(mut config: AppConfig, command: Commands) -> Result<()> {
    match command {
        Commands::Search(args) => {
            if let Some(limit) = args.limit {
                config.ranking.max_suggestions = limit;
            }
            let mut session = build_session(&config, args.seed.as_deref())?;
            for term in &args.learn {
                session.commit_term(term);
            }
            let outcome = session.search(&args.query);
            print_json(&outcome)?;
        }
        Commands::Repl(args) => {
            let mut session = build_session(&config, args.seed.as_deref())?;
            run_repl(&mut session, io::stdin().lock(), io::stdout().lock())?;
            if let Some(path) = args.request_log {
                append_jsonl(&path, &session.request_log()).with_context(|| {
                    format!("failed to append request log to {}", path.display())
                })?;
            }
        }
        Commands::Seed => {
            print_json(&default_seed_terms())?;
        }
    }
    Ok(())
}

fn build_session(config: &AppConfig, seed_override: Option<&Path>) -> Result<SearchSession> {
    let seeds = match seed_override.or(config.seed_file.as_deref()) {
        Some(path) => load_seed_file(path)
            .with_context(|| format!("failed to load seed file {}", path.display()))?,
        None => default_seed_terms(),
    };
    Ok(SearchSession::with_seed(config, seeds))
}
