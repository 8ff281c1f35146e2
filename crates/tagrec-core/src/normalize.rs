//! Tag normalization.
//!
//! The unit of comparison everywhere is a trimmed, case-folded token.
//! Preference strings and item tags both pass through here before any
//! scoring happens, so `"Electronics"` and `" electronics "` compare equal.

use crate::types::TagSet;

/// Split a comma-separated tag string into a normalized set.
///
/// Tokens are trimmed and lowercased; empty tokens and duplicates collapse.
pub fn parse_tags(raw: &str) -> TagSet {
    normalize_tokens(raw.split(','))
}

/// Normalize an already-tokenized collection the same way `parse_tags` does.
pub fn normalize_tokens<I, S>(tokens: I) -> TagSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}
