/// Key form used by the index: lowercase, otherwise untouched.
#[must_use]
pub fn index_key(raw: &str) -> String {
    raw.to_lowercase()
}

/// Caller-side normalization for learned terms: trim, then lowercase.
/// Returns `None` for blank input.
#[must_use]
pub fn normalize_term(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

#[must_use]
pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    let Some((clip_idx, _)) = text.char_indices().nth(max_chars) else {
        return text.to_string();
    };

    let mut out = text[..clip_idx].to_string();
    out.push_str("...");
    out
}
