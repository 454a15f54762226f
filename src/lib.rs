//! # Tweetgraph Library
//!
//! A Rust library for analyzing a static, in-memory collection of tweets.
//! It answers three kinds of questions: which tweets match an author, time window, or
//! keyword; what time span and which @-mentioned users a collection covers; and who
//! probably follows whom, judging by @-mentions, ranked by inferred follower count.
//!
//! ## Features
//!
//! - Case-insensitive filtering by author and keywords, inclusive time windows
//! - @-mention extraction that ignores email addresses like `me@mit.edu`
//! - Follows-graph inference and influencer ranking
//! - JSON tweet loading and a command-line report
//! - Structured logging
//!
//! ## Configuration
//!
//! The `tweetgraph` binary reads:
//! - `TWEETS_FILE`: Path to a JSON array of tweets (required)
//! - `INFLUENCER_LIMIT`: Number of influencers to report (defaults to 10)
//! - `FILTER_AUTHOR`, `FILTER_WORDS`: Optional pre-filters
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use tweetgraph::{guess_follows_graph, influencers, Tweet};
//!
//! let at = Utc.with_ymd_and_hms(2016, 2, 17, 10, 0, 0).unwrap();
//! let tweets = vec![
//!     Tweet::new(1, "alice", "Hi @Bob!", at),
//!     Tweet::new(2, "alice", "Hey @Charlie!", at),
//! ];
//!
//! let graph = guess_follows_graph(&tweets);
//! assert_eq!(graph["alice"].len(), 2);
//! assert_eq!(influencers(&graph).last().map(String::as_str), Some("alice"));
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod report;
pub mod tweet;
pub mod twitter;

// Re-export commonly used types and functions
pub use config::{get_influencer_limit, AnalysisConfig};
pub use error::AnalysisError;
pub use loader::{load_tweets, parse_tweets};
pub use report::{build_report, Report};
pub use tweet::{FollowsGraph, Timespan, Tweet};
pub use twitter::{
    containing, extract_mentions, follower_counts, get_mentioned_users, get_timespan,
    guess_follows_graph, in_timespan, influencers, written_by,
};
