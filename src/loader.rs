//! Loading tweets from JSON.
//!
//! The expected format is an array of objects:
//!
//! ```json
//! [
//!   { "id": 1, "author": "alyssa", "text": "is it reasonable to talk about rivest so much?",
//!     "timestamp": "2016-02-17T10:00:00Z" }
//! ]
//! ```

use log::{debug, info};
use std::fs;
use std::path::Path;

use crate::error::AnalysisError;
use crate::tweet::Tweet;

/// Parses tweets from a JSON string.
///
/// # Returns
///
/// - `Ok(Vec<Tweet>)`: The tweets in document order
/// - `Err(AnalysisError::Json)`: If the input is not an array of well-formed tweets
pub fn parse_tweets(json: &str) -> Result<Vec<Tweet>, AnalysisError> {
    let tweets: Vec<Tweet> = serde_json::from_str(json)?;
    debug!("Parsed {} tweets", tweets.len());
    Ok(tweets)
}

/// Reads and parses a JSON file of tweets.
///
/// # Returns
///
/// - `Ok(Vec<Tweet>)`: The tweets in file order
/// - `Err(AnalysisError::Io)`: If the file cannot be read
/// - `Err(AnalysisError::Json)`: If the contents are not valid tweets JSON
pub fn load_tweets(path: impl AsRef<Path>) -> Result<Vec<Tweet>, AnalysisError> {
    let path = path.as_ref();
    info!("Loading tweets from {}", path.display());

    let contents = fs::read_to_string(path)?;
    let tweets = parse_tweets(&contents)?;

    info!("Loaded {} tweets from {}", tweets.len(), path.display());
    Ok(tweets)
}
