use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use serde_json::{Value, json};
use termwise_core::{SearchSession, TermwiseError};
use termwise_core::models::{RankedSuggestion, SearchOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReplCommand<'a> {
    Search(&'a str),
    Commit(&'a str),
    Select(&'a str),
    Touch(&'a str),
    Recent,
    Stats,
    Quit,
    Empty,
    Unknown(&'a str),
}

fn parse_line(line: &str) -> ReplCommand<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ReplCommand::Empty;
    }
    let Some(rest) = trimmed.strip_prefix(':') else {
        return ReplCommand::Search(line);
    };
    let (name, arg) = rest
        .split_once(char::is_whitespace)
        .map_or((rest, ""), |(name, arg)| (name, arg.trim()));
    match name {
        "commit" => ReplCommand::Commit(arg),
        "select" => ReplCommand::Select(arg),
        "touch" => ReplCommand::Touch(arg),
        "recent" => ReplCommand::Recent,
        "stats" => ReplCommand::Stats,
        "quit" | "q" => ReplCommand::Quit,
        _ => ReplCommand::Unknown(name),
    }
}

/// Line-oriented driver. Every handled line produces exactly one JSON line on
/// `output`; blank lines are ignored and `:quit` stops reading.
pub(super) fn run_repl<R, W>(session: &mut SearchSession, input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut last_outcome = None::<SearchOutcome>;
    for line in input.lines() {
        let line = line.context("failed to read repl input")?;
        let reply = match parse_line(&line) {
            ReplCommand::Empty => continue,
            ReplCommand::Quit => break,
            command => execute(session, &mut last_outcome, command),
        };
        serde_json::to_writer(&mut output, &reply)?;
        writeln!(output)?;
        output.flush()?;
    }
    Ok(())
}

fn execute(
    session: &mut SearchSession,
    last_outcome: &mut Option<SearchOutcome>,
    command: ReplCommand<'_>,
) -> Value {
    match command {
        ReplCommand::Search(query) => {
            let outcome = session.search(query);
            let reply = json!({ "command": "search", "result": outcome });
            *last_outcome = Some(outcome);
            reply
        }
        ReplCommand::Commit(text) => {
            let outcome = session.commit_term(text);
            json!({ "command": "commit", "result": outcome })
        }
        ReplCommand::Select(raw) => match pick_suggestion(last_outcome.as_ref(), raw) {
            Ok((position, suggestion)) => {
                session.select_suggestion(suggestion);
                json!({
                    "command": "select",
                    "result": { "position": position, "term": suggestion.term.text },
                })
            }
            Err((err, details)) => error_reply("select", &err, details),
        },
        ReplCommand::Touch(text) => {
            session.touch_recent(text);
            json!({ "command": "touch", "result": { "recent": session.recent_searches() } })
        }
        ReplCommand::Recent => {
            json!({ "command": "recent", "result": session.recent_searches() })
        }
        ReplCommand::Stats => json!({ "command": "stats", "result": session.analytics() }),
        ReplCommand::Unknown(name) => error_reply(
            name,
            &TermwiseError::Validation(format!("unknown command :{name}")),
            None,
        ),
        ReplCommand::Empty | ReplCommand::Quit => Value::Null,
    }
}

type SelectError = (TermwiseError, Option<Value>);

/// Resolves a 1-based position against the most recent search result.
fn pick_suggestion<'a>(
    last_outcome: Option<&'a SearchOutcome>,
    raw: &str,
) -> std::result::Result<(usize, &'a RankedSuggestion), SelectError> {
    let position = raw.parse::<usize>().map_err(|_| {
        (
            TermwiseError::Validation(format!("invalid suggestion position '{raw}'")),
            None,
        )
    })?;
    let suggestions = last_outcome.map_or(&[][..], |outcome| outcome.suggestions.as_slice());
    position
        .checked_sub(1)
        .and_then(|index| suggestions.get(index))
        .map(|suggestion| (position, suggestion))
        .ok_or_else(|| {
            (
                TermwiseError::Validation(format!("no suggestion at position {position}")),
                Some(json!({ "position": position, "available": suggestions.len() })),
            )
        })
}

fn error_reply(command: &str, err: &TermwiseError, details: Option<Value>) -> Value {
    let mut payload = err.to_payload(command);
    payload.details = details;
    json!({ "command": command, "error": payload })
}
