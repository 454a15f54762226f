//! # Tweetgraph
//!
//! Command-line report over a JSON file of tweets: time span covered, mentioned users,
//! the follows graph guessed from @-mentions, and the most-followed users.
//!
//! ## Environment Variables
//!
//! - `TWEETS_FILE`: Path to a JSON array of tweets (required)
//! - `INFLUENCER_LIMIT`: Number of influencers to report (defaults to 10)
//! - `FILTER_AUTHOR`: Only analyze tweets by this user
//! - `FILTER_WORDS`: Comma-separated words; only analyze tweets containing one of them

use log::{error, info};

use tweetgraph::{build_report, load_tweets, AnalysisConfig};

/// Main entry point for the tweetgraph report.
///
/// Initializes logging, loads the configuration and tweets, and prints the report as
/// pretty JSON on stdout.
///
/// # Example Usage
///
/// ```bash
/// TWEETS_FILE=tweets.json cargo run
///
/// # Only tweets mentioning rivest, with debug logging
/// TWEETS_FILE=tweets.json FILTER_WORDS=rivest RUST_LOG=debug cargo run
/// ```
fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize the logging system
    env_logger::init();

    let config = match AnalysisConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            error!("Make sure TWEETS_FILE environment variable is set");
            return Err(e.into());
        }
    };

    let tweets = load_tweets(&config.tweets_file)?;
    let report = build_report(&tweets, &config);

    info!(
        "Report covers {} tweets and {} influencers",
        report.tweet_count,
        report.influencers.len()
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
