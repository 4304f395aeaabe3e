use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::{Result, TermwiseError};
use crate::models::SeedTerm;

const DEFAULT_SEED_AGE_STEP_SECS: u64 = 600;

/// Reference vocabulary loaded into a fresh session.
///
/// Ages are staggered in ten-minute steps so the set spans the last
/// two and a half hours.
#[must_use]
pub fn default_seed_terms() -> Vec<SeedTerm> {
    let rows: [(&str, &str, u64, Option<&str>); 16] = [
        (
            "machine learning basics",
            "AI",
            150,
            Some("Machine learning is a subset of AI that enables systems to learn from data."),
        ),
        (
            "machine learning algorithms",
            "AI",
            120,
            Some("Common algorithms include neural networks, decision trees, and SVMs."),
        ),
        (
            "react hooks tutorial",
            "Programming",
            200,
            Some(
                "React Hooks are functions that let you use state and lifecycle features in functional components.",
            ),
        ),
        ("react native development", "Programming", 180, None),
        ("python data science", "Programming", 190, None),
        ("python web scraping", "Programming", 95, None),
        ("javascript promises", "Programming", 140, None),
        ("javascript async await", "Programming", 160, None),
        ("docker containers explained", "DevOps", 110, None),
        ("kubernetes orchestration", "DevOps", 85, None),
        ("aws cloud services", "Cloud", 175, None),
        ("azure deployment", "Cloud", 90, None),
        ("neural networks deep learning", "AI", 130, None),
        ("natural language processing", "AI", 105, None),
        ("database optimization tips", "Database", 88, None),
        ("sql query performance", "Database", 92, None),
    ];

    rows.into_iter()
        .zip(0u64..)
        .map(|((text, category, frequency, answer), position)| {
            let seed = SeedTerm::new(text, category, frequency)
                .with_age_secs(position * DEFAULT_SEED_AGE_STEP_SECS);
            match answer {
                Some(answer) => seed.with_direct_answer(answer),
                None => seed,
            }
        })
        .collect()
}

pub fn load_seed_file(path: &Path) -> Result<Vec<SeedTerm>> {
    let raw = fs::read_to_string(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            TermwiseError::NotFound(format!("seed file {}", path.display()))
        } else {
            TermwiseError::Io(err)
        }
    })?;
    parse_seed_terms(&raw, Some(&path.display().to_string()))
}

/// Accepts a JSON array of seed terms or JSONL with one term per line.
///
/// JSONL rows that fail to parse are skipped; the call only fails when the
/// input has rows and none of them is a valid seed term.
pub fn parse_seed_terms(raw: &str, source: Option<&str>) -> Result<Vec<SeedTerm>> {
    if raw.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(raw)?);
    }

    let mut seeds = Vec::new();
    let mut rejected = 0usize;
    let mut first_rejected = None::<(usize, serde_json::Error)>;
    let rows = raw
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());
    for (index, line) in rows {
        match serde_json::from_str::<SeedTerm>(line) {
            Ok(seed) => seeds.push(seed),
            Err(err) => {
                rejected += 1;
                first_rejected.get_or_insert((index + 1, err));
            }
        }
    }

    let Some((line_no, err)) = first_rejected else {
        return Ok(seeds);
    };
    let origin = source.unwrap_or("inline seed data");
    if seeds.is_empty() {
        return Err(TermwiseError::Validation(format!(
            "no usable seed terms in {origin}: {rejected} rows rejected, first at line {line_no}: {err}"
        )));
    }
    warn!(
        origin,
        rejected,
        loaded = seeds.len(),
        first_rejected_line = line_no,
        error = %err,
        "skipped seed rows that are not valid seed terms"
    );
    Ok(seeds)
}
