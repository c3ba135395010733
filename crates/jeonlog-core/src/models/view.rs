//! Derived, read-only view models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ExhibitionId;

/// Note shown for a visited exhibition that has no record yet.
pub const NOT_YET_RECORDED: &str = "아직 기록하지 않은 전시";

/// Hashtag shown on a feed item whose record has none.
pub const FALLBACK_HASHTAG: &str = "전시기록";

/// Notice surfaced once per refresh when persisted data could not be read.
pub const LOAD_FAILED_MESSAGE: &str = "기록을 불러오는 중 문제가 발생했습니다.";

/// Feed ordering options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Most recent record first
    #[default]
    Latest,
    /// Declared ordering with no ranking function yet; yields the latest order
    Popular,
}

impl SortMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Popular => "popular",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latest" => Ok(Self::Latest),
            "popular" => Ok(Self::Popular),
            other => Err(crate::Error::InvalidInput(format!(
                "unknown sort mode '{other}' (expected 'latest' or 'popular')"
            ))),
        }
    }
}

/// One row of the visited-exhibitions list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    pub id: ExhibitionId,
    pub title: String,
    pub location: String,
    pub image: String,
    /// Record title, or [`NOT_YET_RECORDED`]
    pub note: String,
    /// Whether `note` came from a stored record
    pub recorded: bool,
}

/// Author stamp on a feed item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: String,
    pub avatar: Option<String>,
}

/// One entry of the "my records" feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub id: ExhibitionId,
    pub image: String,
    pub log_title: String,
    pub author: Author,
    /// Record creation time (Unix ms)
    pub timestamp: i64,
    pub hashtags: Vec<String>,
    /// Set only when `hashtags` is empty
    pub fallback_hashtag: Option<String>,
    pub likes: u32,
}

impl FeedItem {
    /// Hashtags to render: the record's own, or the fallback.
    #[must_use]
    pub fn display_hashtags(&self) -> Vec<&str> {
        if self.hashtags.is_empty() {
            self.fallback_hashtag.as_deref().into_iter().collect()
        } else {
            self.hashtags.iter().map(String::as_str).collect()
        }
    }
}

/// Non-blocking notice attached to a refresh whose input was degraded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadNotice {
    pub message: String,
    /// Storage keys that failed to load
    pub keys: Vec<String>,
}

impl LoadNotice {
    #[must_use]
    pub fn load_failed(keys: Vec<String>) -> Self {
        Self {
            message: LOAD_FAILED_MESSAGE.to_string(),
            keys,
        }
    }
}

/// Everything a screen renders after one refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Views {
    pub visited: Vec<DisplayRecord>,
    pub feed: Vec<FeedItem>,
    pub notice: Option<LoadNotice>,
}
