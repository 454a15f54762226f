//! Aggregate facts derived from a list of tweets.

use log::{debug, warn};
use std::collections::HashSet;

use super::parsing::extract_mentions;
use crate::error::AnalysisError;
use crate::tweet::{Timespan, Tweet};

/// Gets the time period spanned by a list of tweets.
///
/// # Parameters
///
/// - `tweets`: A non-empty list of tweets
///
/// # Returns
///
/// - `Ok(Timespan)`: The smallest span containing every tweet's timestamp. For a
///   single tweet, start and end are both that tweet's timestamp.
/// - `Err(AnalysisError::InvalidArgument)`: If `tweets` is empty. There is no
///   meaningful span to return, so no placeholder span is produced.
pub fn get_timespan(tweets: &[Tweet]) -> Result<Timespan, AnalysisError> {
    let mut timestamps = tweets.iter().map(Tweet::timestamp);

    let Some(first) = timestamps.next() else {
        warn!("get_timespan called with no tweets");
        return Err(AnalysisError::InvalidArgument(
            "cannot compute the timespan of an empty tweet list".to_string(),
        ));
    };

    let (start, end) = timestamps.fold((first, first), |(start, end), ts| {
        (start.min(ts), end.max(ts))
    });

    debug!("Timespan of {} tweets: {} .. {}", tweets.len(), start, end);
    Timespan::new(start, end)
}

/// Gets the usernames mentioned anywhere in a list of tweets.
///
/// Usernames are lowercased and collected across the whole list. A tweet's
/// author mentioning themselves still counts here. See
/// [`extract_mentions`](super::parsing::extract_mentions) for the mention grammar.
pub fn get_mentioned_users(tweets: &[Tweet]) -> HashSet<String> {
    let mentioned: HashSet<String> = tweets
        .iter()
        .flat_map(|tweet| extract_mentions(tweet.text()))
        .collect();

    debug!(
        "Found {} distinct mentioned users in {} tweets",
        mentioned.len(),
        tweets.len()
    );
    mentioned
}
