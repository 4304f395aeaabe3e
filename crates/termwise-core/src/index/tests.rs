use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::models::{TermMetadata, USER_SEARCH_CATEGORY};

use super::TermIndex;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn texts(index: &TermIndex, prefix: &str) -> Vec<String> {
    index
        .find_by_prefix(prefix)
        .into_iter()
        .map(|record| record.text)
        .collect()
}

#[test]
fn explicit_frequency_is_stored_and_lookup_ignores_case() {
    let mut index = TermIndex::new();
    index.insert_or_update_at("foo", TermMetadata::new().with_frequency(5), fixed_now());

    assert!(index.exists("Foo"));
    assert!(index.exists("FOO"));
    let found = index.find_by_prefix("foo");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].text, "foo");
    assert_eq!(found[0].frequency, 5);
}

#[test]
fn every_prefix_of_a_term_finds_it() {
    let mut index = TermIndex::new();
    let term = "kubernetes orchestration";
    index.insert_or_update_at(term, TermMetadata::new(), fixed_now());

    for (end, _) in term.char_indices().skip(1) {
        let prefix = &term[..end];
        assert!(
            texts(&index, prefix).iter().any(|text| text == term),
            "prefix {prefix:?} must reach {term:?}"
        );
    }
    assert_eq!(texts(&index, term), vec![term.to_string()]);
    assert_eq!(texts(&index, ""), vec![term.to_string()]);
}

#[test]
fn shared_prefix_nodes_are_not_terms() {
    let mut index = TermIndex::new();
    index.insert_or_update_at("python data science", TermMetadata::new(), fixed_now());
    index.insert_or_update_at("python web scraping", TermMetadata::new(), fixed_now());

    assert!(!index.exists("python"));
    assert!(!index.exists("python "));
    assert_eq!(index.len(), 2);
    assert_eq!(
        texts(&index, "PYTHON"),
        vec![
            "python data science".to_string(),
            "python web scraping".to_string()
        ]
    );
}

#[test]
fn partial_update_preserves_unspecified_fields_and_bumps_frequency() {
    let mut index = TermIndex::new();
    let t1 = fixed_now();
    let t2 = t1 + Duration::minutes(5);
    let first = index.insert_or_update_at(
        "abc",
        TermMetadata::new()
            .with_category("X")
            .with_direct_answer("Y")
            .with_related_terms(vec!["abcd".to_string()]),
        t1,
    );
    assert_eq!(first.frequency, 1);

    let updated = index.insert_or_update_at("abc", TermMetadata::new().with_timestamp(t2), t1);

    assert_eq!(updated.category, "X");
    assert_eq!(updated.direct_answer.as_deref(), Some("Y"));
    assert_eq!(updated.related_terms, vec!["abcd".to_string()]);
    assert_eq!(updated.frequency, first.frequency + 1);
    assert_eq!(updated.last_seen_at, t2);
    assert_eq!(index.get("abc"), Some(updated));
}

#[test]
fn explicit_frequency_replaces_instead_of_incrementing() {
    let mut index = TermIndex::new();
    index.insert_or_update_at("docker", TermMetadata::new().with_frequency(110), fixed_now());
    let record = index.insert_or_update_at(
        "docker",
        TermMetadata::new().with_frequency(110).with_timestamp(fixed_now()),
        fixed_now(),
    );
    assert_eq!(record.frequency, 110);
}

#[test]
fn fresh_term_defaults_category_and_provenance() {
    let mut index = TermIndex::new();
    let record = index.insert_or_update_at("new thing", TermMetadata::new(), fixed_now());

    assert_eq!(record.category, USER_SEARCH_CATEGORY);
    assert!(!record.is_user_generated);
    assert_eq!(record.direct_answer, None);
    assert!(record.related_terms.is_empty());
    assert_eq!(record.last_seen_at, fixed_now());
}

#[test]
fn empty_strings_do_not_overwrite_existing_labels() {
    let mut index = TermIndex::new();
    index.insert_or_update_at(
        "aws cloud services",
        TermMetadata::new()
            .with_category("Cloud")
            .with_direct_answer("Amazon Web Services."),
        fixed_now(),
    );
    let record = index.insert_or_update_at(
        "aws cloud services",
        TermMetadata::new().with_category("").with_direct_answer(""),
        fixed_now(),
    );
    assert_eq!(record.category, "Cloud");
    assert_eq!(record.direct_answer.as_deref(), Some("Amazon Web Services."));
}

#[test]
fn provenance_is_kept_unless_supplied() {
    let mut index = TermIndex::new();
    index.insert_or_update_at(
        "mac",
        TermMetadata::new().with_user_generated(true),
        fixed_now(),
    );
    let kept = index.insert_or_update_at("mac", TermMetadata::new(), fixed_now());
    assert!(kept.is_user_generated);

    let flipped = index.insert_or_update_at(
        "mac",
        TermMetadata::new().with_user_generated(false),
        fixed_now(),
    );
    assert!(!flipped.is_user_generated);
}

#[test]
fn missing_prefix_returns_empty() {
    let mut index = TermIndex::new();
    index.insert_or_update_at("sql query performance", TermMetadata::new(), fixed_now());
    assert!(index.find_by_prefix("sqlite").is_empty());
    assert!(index.find_by_prefix("zzz").is_empty());
    assert!(!index.exists("sql"));
}

#[test]
fn returned_records_are_snapshots() {
    let mut index = TermIndex::new();
    index.insert_or_update_at("react hooks tutorial", TermMetadata::new(), fixed_now());
    let before = index.find_by_prefix("react");

    index.insert_or_update_at(
        "react hooks tutorial",
        TermMetadata::new().with_frequency(99),
        fixed_now(),
    );

    assert_eq!(before[0].frequency, 1);
    assert_eq!(index.find_by_prefix("react")[0].frequency, 99);
}

#[test]
fn non_ascii_terms_share_nodes_per_char() {
    let mut index = TermIndex::new();
    index.insert_or_update_at("Caf\u{c9} au lait", TermMetadata::new(), fixed_now());
    index.insert_or_update_at("caf\u{e9} cr\u{e8}me", TermMetadata::new(), fixed_now());

    assert!(index.exists("CAF\u{c9} AU LAIT"));
    assert_eq!(texts(&index, "caf\u{e9}").len(), 2);
    // root + "caf\u{e9} " shared (trailing space included), then two tails
    let shared = "caf\u{e9} ".chars().count();
    let tails = "au lait".chars().count() + "cr\u{e8}me".chars().count();
    assert_eq!(index.node_count(), 1 + shared + tails);
    assert_eq!(index.node_count(), 18);
}

#[test]
fn len_counts_distinct_terms_only() {
    let mut index = TermIndex::new();
    assert!(index.is_empty());
    index.insert_or_update_at("azure deployment", TermMetadata::new(), fixed_now());
    index.insert_or_update_at("Azure Deployment", TermMetadata::new(), fixed_now());
    assert_eq!(index.len(), 1);
    assert_eq!(index.get("azure deployment").map(|r| r.frequency), Some(2));
}
