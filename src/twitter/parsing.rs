//! Text parsing and extraction utilities for tweet content.
//!
//! This module contains the @-mention grammar shared by mention extraction and
//! follows-graph inference, plus the username normalization every module uses.

use log::error;
use regex::Regex;
use std::sync::OnceLock;

/// `@` followed by one or more word characters, where the `@` is at the start
/// of the text or preceded by a non-word character. The `regex` crate has no
/// lookbehind, so the preceding character is consumed by the non-capturing
/// group instead.
const MENTION_PATTERN: &str = r"(?:^|\W)@(\w+)";

fn mention_regex() -> Option<&'static Regex> {
    static MENTION_RE: OnceLock<Option<Regex>> = OnceLock::new();
    MENTION_RE
        .get_or_init(|| match Regex::new(MENTION_PATTERN) {
            Ok(re) => Some(re),
            Err(e) => {
                error!("Failed to compile mention pattern: {}", e);
                None
            }
        })
        .as_ref()
}

/// Normalizes a username to the single case used for identity comparisons.
///
/// "ernie" and "ERNie" are the same user.
pub fn normalize_username(username: &str) -> String {
    username.to_lowercase()
}

/// Extracts every @-mention from tweet text, lowercased, in order of appearance.
///
/// A mention is `@` followed by one or more word characters (letters, digits,
/// underscore); the username ends at the first non-word character. An `@`
/// immediately preceded by a word character does not start a mention, so
/// email addresses like `me@mit.edu` yield nothing.
///
/// Duplicates are kept. Text without mentions yields an empty vector.
///
/// # Examples
///
/// ```rust
/// use tweetgraph::twitter::extract_mentions;
///
/// assert_eq!(extract_mentions("@Maryam, check this!"), vec!["maryam".to_string()]);
/// assert!(extract_mentions("Contact me at me@mit.edu").is_empty());
/// ```
pub fn extract_mentions(text: &str) -> Vec<String> {
    let Some(re) = mention_regex() else {
        return Vec::new();
    };

    re.captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .map(|username| normalize_username(username.as_str()))
        .collect()
}
