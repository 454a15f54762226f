//! Tweet analysis module.
//!
//! This module contains the functions that operate on an in-memory list of
//! tweets: filtering, extracting aggregate facts, and inferring a social
//! network from @-mentions. They compose as filter → extract → graph.

mod extract;
mod filter;
mod parsing;
mod social_network;

// Re-export public API
pub use extract::{get_mentioned_users, get_timespan};
pub use filter::{containing, in_timespan, written_by};
pub use parsing::{extract_mentions, normalize_username};
pub use social_network::{follower_counts, guess_follows_graph, influencers};
