use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BlogzError;

/// Identifier of an article. Serialized as a bare JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(u64);

impl ArticleId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ids arriving from outside (CLI args, request paths) are text and are
/// converted here, once.
impl FromStr for ArticleId {
    type Err = BlogzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(ArticleId)
            .map_err(|_| BlogzError::InvalidId(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub header: String,
    pub body: String,
    /// Last modification time. Reset on every update.
    pub date: DateTime<Utc>,
}

impl Article {
    pub fn new(id: ArticleId, header: String, body: String) -> Self {
        Self {
            id,
            header,
            body,
            date: Utc::now(),
        }
    }

    /// Replaces header and body and moves `date` strictly forward.
    pub fn revise(&mut self, header: String, body: String) {
        self.header = header;
        self.body = body;
        self.date = next_timestamp(self.date);
    }
}

/// Current time, or `previous` plus one tick if the clock has not moved past it.
pub fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::nanoseconds(1)
    }
}
