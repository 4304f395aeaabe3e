#[must_use]
pub(super) fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}

/// Parses a `usize` no smaller than `min_value`; anything else yields
/// `default_value`.
#[must_use]
pub(super) fn usize_at_least(raw: Option<&str>, default_value: usize, min_value: usize) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| *value >= min_value)
        .unwrap_or(default_value)
}

#[must_use]
pub(super) fn read_process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
