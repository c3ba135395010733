//! Exhibition record model

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

/// Identifier of an exhibition, assigned by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExhibitionId(String);

impl ExhibitionId {
    /// Wrap an id, trimming surrounding whitespace.
    ///
    /// Returns `None` for an empty id.
    pub fn parse(value: impl AsRef<str>) -> Option<Self> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExhibitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExhibitionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExhibitionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::borrow::Borrow<str> for ExhibitionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A user-authored note attached to one exhibition.
///
/// The exhibition it belongs to is the key it is stored under, not a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExhibitionRecord {
    /// Free-form note title
    pub title: String,
    /// Hashtags in the order the user entered them
    #[serde(default)]
    pub hashtags: Vec<String>,
    /// Creation timestamp (Unix ms)
    #[serde(deserialize_with = "deserialize_timestamp_ms")]
    pub created_at: i64,
}

impl ExhibitionRecord {
    /// Create a record stamped with the current time.
    #[must_use]
    pub fn new(title: impl Into<String>, hashtags: Vec<String>) -> Self {
        Self {
            title: title.into(),
            hashtags,
            created_at: crate::util::unix_timestamp_now_ms(),
        }
    }

    /// Create a record with an explicit creation time.
    #[must_use]
    pub fn with_created_at(title: impl Into<String>, hashtags: Vec<String>, created_at: i64) -> Self {
        Self {
            title: title.into(),
            hashtags,
            created_at,
        }
    }
}

/// Accept Unix milliseconds or an RFC 3339 string for `createdAt`.
fn deserialize_timestamp_ms<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Millis(i64),
        Text(String),
    }

    match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Millis(value) => Ok(value),
        RawTimestamp::Text(text) => chrono::DateTime::parse_from_rfc3339(text.trim())
            .map(|date_time| date_time.timestamp_millis())
            .map_err(|error| {
                serde::de::Error::custom(format!("invalid createdAt '{text}': {error}"))
            }),
    }
}

fn hashtag_regex() -> &'static Regex {
    static HASHTAG: OnceLock<Regex> = OnceLock::new();
    HASHTAG.get_or_init(|| Regex::new(r"#([\p{L}\p{N}_][\p{L}\p{N}_-]*)").expect("Invalid regex"))
}

/// Extract inline #hashtags from text
///
/// Hashtags keep their original case and first-seen order; repeats are dropped.
///
/// # Examples
///
/// ```
/// use jeonlog_core::models::extract_hashtags;
///
/// let tags = extract_hashtags("Great show #클림트 #art #art");
/// assert_eq!(tags, vec!["클림트".to_string(), "art".to_string()]);
/// ```
#[must_use]
pub fn extract_hashtags(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    hashtag_regex()
        .captures_iter(text)
        .map(|cap| cap[1].to_string())
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}

/// Remove inline #hashtags from text, collapsing leftover whitespace.
#[must_use]
pub fn strip_hashtags(text: &str) -> String {
    hashtag_regex()
        .replace_all(text, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
