//! Value types shared by the filter, extract, and social network modules.
//!
//! All of these are plain immutable values. Nothing in this crate mutates a
//! `Tweet` once it has been constructed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::AnalysisError;

/// A social network where `graph[a]` is the set of usernames that `a` is
/// inferred to follow.
///
/// Usernames are stored lowercase. A user who follows nobody may be missing
/// as a key even when other users follow them, and nobody follows themselves.
pub type FollowsGraph = HashMap<String, HashSet<String>>;

/// A single tweet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tweet {
    id: u64,
    author: String,
    text: String,
    timestamp: DateTime<Utc>,
}

impl Tweet {
    /// Creates a tweet.
    ///
    /// Ids are expected to be unique within any list passed to this crate, but
    /// nothing here checks it.
    pub fn new(
        id: u64,
        author: impl Into<String>,
        text: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Tweet {
            id,
            author: author.into(),
            text: text.into(),
            timestamp,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// The author's username, in whatever case it was supplied.
    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// A closed interval of time `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Timespan {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Timespan {
    /// Creates a timespan covering `start` through `end`, inclusive.
    ///
    /// # Returns
    ///
    /// - `Ok(Timespan)`: If `start <= end`
    /// - `Err(AnalysisError::InvalidArgument)`: If `start` is after `end`
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, AnalysisError> {
        if start > end {
            return Err(AnalysisError::InvalidArgument(format!(
                "timespan start {} is after end {}",
                start, end
            )));
        }
        Ok(Timespan { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns true if `instant` lies within the span, endpoints included.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}
