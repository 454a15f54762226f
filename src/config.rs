//! Configuration module for the tweetgraph report.
//!
//! This module contains the configuration structure and environment variable
//! handling for the command-line report.

use log::{debug, info, warn};
use std::env;
use std::path::PathBuf;

use crate::error::AnalysisError;

/// Number of influencers reported when `INFLUENCER_LIMIT` is not set.
pub const DEFAULT_INFLUENCER_LIMIT: usize = 10;

/// Configuration for a single report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Path to the JSON file of tweets
    pub tweets_file: PathBuf,
    /// How many influencers to include in the report
    pub influencer_limit: usize,
    /// Only analyze tweets written by this user
    pub author: Option<String>,
    /// Only analyze tweets containing at least one of these words
    pub words: Option<Vec<String>>,
}

impl AnalysisConfig {
    /// Creates a new `AnalysisConfig` from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `TWEETS_FILE`: Path to a JSON array of tweets
    ///
    /// # Optional Environment Variables
    ///
    /// - `INFLUENCER_LIMIT`: Number of influencers to report (defaults to 10)
    /// - `FILTER_AUTHOR`: Only analyze tweets written by this user
    /// - `FILTER_WORDS`: Comma-separated words; only analyze tweets containing one
    ///
    /// # Returns
    ///
    /// - `Ok(AnalysisConfig)`: If `TWEETS_FILE` is set and non-empty
    /// - `Err(AnalysisError::InvalidArgument)`: If `TWEETS_FILE` is missing or empty
    pub fn from_env() -> Result<Self, AnalysisError> {
        info!("Loading analysis configuration from environment variables");
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, AnalysisError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let tweets_file = match lookup("TWEETS_FILE") {
            Some(path) if !path.trim().is_empty() => {
                info!("Found TWEETS_FILE: {}", path);
                PathBuf::from(path.trim())
            }
            _ => {
                return Err(AnalysisError::InvalidArgument(
                    "Missing TWEETS_FILE environment variable".to_string(),
                ));
            }
        };

        let influencer_limit = parse_influencer_limit(lookup("INFLUENCER_LIMIT"));

        let author = lookup("FILTER_AUTHOR")
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());
        if let Some(author) = &author {
            info!("Filtering tweets by author {}", author);
        }

        let words = lookup("FILTER_WORDS").map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        });
        if let Some(words) = &words {
            info!("Filtering tweets containing any of {:?}", words);
            if words.is_empty() {
                warn!("FILTER_WORDS is set but contains no words - no tweets will match");
            }
        }

        let config = AnalysisConfig {
            tweets_file,
            influencer_limit,
            author,
            words,
        };
        debug!("Analysis configuration: {:?}", config);
        Ok(config)
    }
}

fn parse_influencer_limit(raw: Option<String>) -> usize {
    match raw {
        Some(value) => match value.trim().parse() {
            Ok(limit) => limit,
            Err(e) => {
                warn!(
                    "INFLUENCER_LIMIT '{}' is not a valid number ({}), using {}",
                    value, e, DEFAULT_INFLUENCER_LIMIT
                );
                DEFAULT_INFLUENCER_LIMIT
            }
        },
        None => DEFAULT_INFLUENCER_LIMIT,
    }
}

/// Gets the influencer limit from the environment or returns the default.
///
/// This function reads the `INFLUENCER_LIMIT` environment variable. If it is not
/// set or cannot be parsed, it defaults to 10.
///
/// # Example
///
/// ```rust
/// use tweetgraph::get_influencer_limit;
///
/// // With no INFLUENCER_LIMIT set
/// let limit = get_influencer_limit(); // Returns 10
/// ```
pub fn get_influencer_limit() -> usize {
    parse_influencer_limit(env::var("INFLUENCER_LIMIT").ok())
}
