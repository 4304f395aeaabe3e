use std::path::Path;

use super::*;
use clap::Parser;

#[test]
fn search_parses_repeated_learn_terms_and_limit() {
    let cli = Cli::try_parse_from([
        "termwise", "search", "ma", "--learn", "mac", "--learn", "macro", "--limit", "3",
    ])
    .expect("parse");
    match cli.command {
        Commands::Search(SearchArgs {
            query,
            seed,
            learn,
            limit,
        }) => {
            assert_eq!(query, "ma");
            assert_eq!(seed, None);
            assert_eq!(learn, vec!["mac".to_string(), "macro".to_string()]);
            assert_eq!(limit, Some(3));
        }
        _ => panic!("expected search command"),
    }
}

#[test]
fn search_accepts_hyphen_leading_query() {
    let cli = Cli::try_parse_from(["termwise", "search", "-fsanitize"]).expect("parse");
    match cli.command {
        Commands::Search(args) => assert_eq!(args.query, "-fsanitize"),
        _ => panic!("expected search command"),
    }
}

#[test]
fn search_requires_a_query() {
    assert!(Cli::try_parse_from(["termwise", "search"]).is_err());
}

#[test]
fn repl_parses_seed_and_request_log_paths() {
    let cli = Cli::try_parse_from([
        "termwise",
        "repl",
        "--seed",
        "seeds.jsonl",
        "--request-log",
        "logs/requests.jsonl",
    ])
    .expect("parse");
    match cli.command {
        Commands::Repl(ReplArgs { seed, request_log }) => {
            assert_eq!(seed.as_deref(), Some(Path::new("seeds.jsonl")));
            assert_eq!(
                request_log.as_deref(),
                Some(Path::new("logs/requests.jsonl"))
            );
        }
        _ => panic!("expected repl command"),
    }
}

#[test]
fn config_flag_is_accepted_before_or_after_subcommand() {
    let before = Cli::try_parse_from(["termwise", "--config", "tw.toml", "seed"]).expect("parse");
    assert_eq!(before.config.as_deref(), Some(Path::new("tw.toml")));
    assert!(matches!(before.command, Commands::Seed));

    let after = Cli::try_parse_from(["termwise", "seed", "--config", "tw.toml"]).expect("parse");
    assert_eq!(after.config.as_deref(), Some(Path::new("tw.toml")));
}

#[test]
fn unknown_subcommand_is_rejected() {
    let parsed = Cli::try_parse_from(["termwise", "index"]);
    assert!(parsed.is_err(), "index must be rejected");
}
