//! Predicate-based selection over a list of tweets.
//!
//! Every function here leaves its input untouched and returns owned copies of
//! the matching tweets in their original relative order.

use log::debug;

use super::parsing::normalize_username;
use crate::tweet::{Timespan, Tweet};

/// Finds tweets written by a particular user.
///
/// # Parameters
///
/// - `tweets`: Tweets with distinct ids
/// - `username`: Username to match, compared case-insensitively
///
/// # Returns
///
/// The tweets whose author is `username`, in input order.
pub fn written_by(tweets: &[Tweet], username: &str) -> Vec<Tweet> {
    let wanted = normalize_username(username);
    let result: Vec<Tweet> = tweets
        .iter()
        .filter(|tweet| normalize_username(tweet.author()) == wanted)
        .cloned()
        .collect();

    debug!(
        "written_by({}): {} of {} tweets match",
        wanted,
        result.len(),
        tweets.len()
    );
    result
}

/// Finds tweets sent during a timespan, both endpoints included.
pub fn in_timespan(tweets: &[Tweet], timespan: &Timespan) -> Vec<Tweet> {
    let result: Vec<Tweet> = tweets
        .iter()
        .filter(|tweet| timespan.contains(tweet.timestamp()))
        .cloned()
        .collect();

    debug!(
        "in_timespan({} .. {}): {} of {} tweets match",
        timespan.start(),
        timespan.end(),
        result.len(),
        tweets.len()
    );
    result
}

/// Finds tweets whose text contains at least one of `words`.
///
/// Matching is a case-insensitive substring test. Each tweet is included at
/// most once no matter how many words it matches, and an empty `words` list
/// matches nothing.
pub fn containing<S: AsRef<str>>(tweets: &[Tweet], words: &[S]) -> Vec<Tweet> {
    let words: Vec<String> = words.iter().map(|w| w.as_ref().to_lowercase()).collect();

    let result: Vec<Tweet> = tweets
        .iter()
        .filter(|tweet| {
            let text = tweet.text().to_lowercase();
            words.iter().any(|word| text.contains(word.as_str()))
        })
        .cloned()
        .collect();

    debug!(
        "containing({:?}): {} of {} tweets match",
        words,
        result.len(),
        tweets.len()
    );
    result
}
