//! The analysis pipeline behind the command-line report.
//!
//! Tweets are filtered according to the configuration, then the remaining
//! tweets are summarized and used to guess a follows graph.

use log::{info, warn};
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::config::AnalysisConfig;
use crate::tweet::{Timespan, Tweet};
use crate::twitter::{
    containing, follower_counts, get_mentioned_users, get_timespan, guess_follows_graph,
    influencers, written_by,
};

/// A ranked user with their inferred follower count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Influencer {
    pub username: String,
    pub followers: usize,
}

/// Summary of a tweet collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub tweet_count: usize,
    /// Absent when filtering left no tweets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timespan: Option<Timespan>,
    pub mentioned_users: BTreeSet<String>,
    pub follows_graph: BTreeMap<String, BTreeSet<String>>,
    pub influencers: Vec<Influencer>,
}

/// Applies the configured author and word filters.
pub fn apply_filters(tweets: &[Tweet], config: &AnalysisConfig) -> Vec<Tweet> {
    let mut selected = tweets.to_vec();
    if let Some(author) = &config.author {
        selected = written_by(&selected, author);
    }
    if let Some(words) = &config.words {
        selected = containing(&selected, words);
    }
    info!(
        "{} of {} tweets selected for analysis",
        selected.len(),
        tweets.len()
    );
    selected
}

/// Builds a report over the tweets that pass the configured filters.
pub fn build_report(tweets: &[Tweet], config: &AnalysisConfig) -> Report {
    let selected = apply_filters(tweets, config);

    let timespan = match get_timespan(&selected) {
        Ok(span) => Some(span),
        Err(e) => {
            warn!("No timespan for report: {}", e);
            None
        }
    };

    let graph = guess_follows_graph(&selected);
    let counts = follower_counts(&graph);
    let top = influencers(&graph)
        .into_iter()
        .take(config.influencer_limit)
        .map(|username| Influencer {
            followers: counts.get(&username).copied().unwrap_or_default(),
            username,
        })
        .collect();

    Report {
        tweet_count: selected.len(),
        timespan,
        mentioned_users: get_mentioned_users(&selected).into_iter().collect(),
        follows_graph: graph
            .into_iter()
            .map(|(user, follows)| (user, follows.into_iter().collect()))
            .collect(),
        influencers: top,
    }
}
