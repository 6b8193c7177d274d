//! Tag normalization and the Tag value object.
//!
//! Raw tag text is reduced to a canonical form before it ever reaches the
//! store: trimmed, lower-cased, and restricted to ASCII alphanumerics and
//! whitespace. A `Tag` can only be constructed through that pipeline, so
//! persisted tags are normalized by construction.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SetError;

/// Reduces raw tag text to its canonical form.
///
/// Steps: trim surrounding whitespace, lower-case, strip every character
/// outside {a-z, 0-9, whitespace}, then trim again so stripping cannot
/// leave dangling whitespace. Idempotent: `normalize(normalize(x)) ==
/// normalize(x)` for any input.
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

/// A normalized tag attached to a skill.
///
/// Invariant: the inner string is non-empty and equal to its own
/// normalization. Deserialization re-validates, so documents loaded from
/// the store cannot smuggle in raw tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    /// Normalizes `raw` into a tag.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if nothing survives normalization
    pub fn new(raw: &str) -> Result<Self, SetError> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return Err(SetError::validation(
                "tag",
                "Tag must contain at least one alphanumeric character",
            ));
        }
        Ok(Self(normalized))
    }

    /// Returns the normalized tag text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the tag, returning the normalized text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Tag {
    type Error = SetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Tag::new(&value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Rust  "), "rust");
    }

    #[test]
    fn normalize_strips_punctuation() {
        assert_eq!(normalize("Back-End!"), "backend");
    }

    #[test]
    fn normalize_keeps_interior_whitespace() {
        assert_eq!(normalize("machine learning"), "machine learning");
    }

    #[test]
    fn normalize_keeps_digits() {
        assert_eq!(normalize("Web3.0"), "web30");
    }

    #[test]
    fn normalize_of_symbols_is_empty() {
        assert_eq!(normalize("!!!"), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn normalize_strips_non_ascii_letters() {
        // 'é' lower-cases to itself and is outside [a-z0-9\s]
        assert_eq!(normalize("café"), "caf");
    }

    #[test]
    fn tag_new_normalizes() {
        let tag = Tag::new("  DevOps ").unwrap();
        assert_eq!(tag.as_str(), "devops");
    }

    #[test]
    fn tag_new_rejects_all_stripped_input() {
        assert!(Tag::new("@#$%").is_err());
        assert!(Tag::new("").is_err());
    }

    #[test]
    fn tag_deserialization_revalidates() {
        let tag: Tag = serde_json::from_str("\"backend\"").unwrap();
        assert_eq!(tag.as_str(), "backend");

        let raw: Result<Tag, _> = serde_json::from_str("\"!!!\"");
        assert!(raw.is_err());
    }

    #[test]
    fn equal_tags_compare_equal() {
        assert_eq!(Tag::new("Backend").unwrap(), Tag::new("backend!").unwrap());
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(raw in ".*") {
            let once = normalize(&raw);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn normalize_output_alphabet_is_restricted(raw in ".*") {
            let normalized = normalize(&raw);
            prop_assert!(normalized
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace()));
        }

        #[test]
        fn normalize_has_no_surrounding_whitespace(raw in ".*") {
            let normalized = normalize(&raw);
            prop_assert_eq!(normalized.trim(), normalized.as_str());
        }
    }
}
