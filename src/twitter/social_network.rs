//! Follows-graph inference and influencer ranking.
//!
//! A user is guessed to follow everyone they @-mention. Follower count is the
//! in-degree of a username in that graph.

use log::{debug, info};
use std::collections::{HashMap, HashSet};

use super::parsing::{extract_mentions, normalize_username};
use crate::tweet::{FollowsGraph, Tweet};

/// Guesses who might follow whom from mentions found in tweets.
///
/// Every author is taken to follow each user they mention. Authors and
/// mentions are lowercased, self-mentions are dropped, and mentions from
/// several tweets by the same author are merged. An author gets a key only if
/// at least one of their tweets mentions somebody else.
pub fn guess_follows_graph(tweets: &[Tweet]) -> FollowsGraph {
    let mut follows_graph = FollowsGraph::new();

    for tweet in tweets {
        let author = normalize_username(tweet.author());
        let mentions: HashSet<String> = extract_mentions(tweet.text())
            .into_iter()
            .filter(|mentioned| *mentioned != author)
            .collect();

        if mentions.is_empty() {
            continue;
        }

        follows_graph.entry(author).or_default().extend(mentions);
    }

    info!(
        "Guessed follows graph with {} following users from {} tweets",
        follows_graph.len(),
        tweets.len()
    );
    follows_graph
}

/// Counts followers for every username appearing in the graph.
///
/// Every key and every followed user gets an entry, so a user nobody follows
/// is present with a count of 0. Keys and members are lowercased first and
/// self-follows are ignored, which makes the count the number of distinct
/// users following each username even for a graph built by hand.
pub fn follower_counts(follows_graph: &FollowsGraph) -> HashMap<String, usize> {
    let mut followers: HashMap<String, HashSet<String>> = HashMap::new();

    for (follower, followed_users) in follows_graph {
        let follower = normalize_username(follower);
        followers.entry(follower.clone()).or_default();

        for followed in followed_users {
            let followed = normalize_username(followed);
            if followed == follower {
                continue;
            }
            followers
                .entry(followed)
                .or_default()
                .insert(follower.clone());
        }
    }

    followers
        .into_iter()
        .map(|(username, followed_by)| (username, followed_by.len()))
        .collect()
}

/// Ranks the users in a social network by follower count.
///
/// # Returns
///
/// Every distinct username in `follows_graph`, whether a key or a followed
/// user, in descending order of follower count. Users with equal counts are
/// ordered by ascending username so the result is deterministic.
pub fn influencers(follows_graph: &FollowsGraph) -> Vec<String> {
    let mut ranked: Vec<(String, usize)> = follower_counts(follows_graph).into_iter().collect();
    ranked.sort_by(|(a_name, a_count), (b_name, b_count)| {
        b_count.cmp(a_count).then_with(|| a_name.cmp(b_name))
    });

    if let Some((top, count)) = ranked.first() {
        debug!("Top influencer is {} with {} followers", top, count);
    }

    ranked.into_iter().map(|(username, _)| username).collect()
}
