//! Core domain types for content items and sources

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable identifier of a content item.
///
/// Asynchronous results are correlated by this id, never by list index,
/// since `items` may be reloaded while an operation is in flight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stable identifier of a content source
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(pub String);

impl SourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Priority assigned to a content item by the daemon's analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Single-character marker used in compact list rows
    pub fn marker(&self) -> char {
        match self {
            Priority::High => 'H',
            Priority::Medium => 'M',
            Priority::Low => 'L',
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "high" | "h" => Ok(Priority::High),
            "medium" | "med" | "m" => Ok(Priority::Medium),
            "low" | "l" => Ok(Priority::Low),
            other => Err(format!("unknown priority '{}'", other)),
        }
    }
}

/// Kind of content source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Rss,
    Reddit,
    Youtube,
}

impl SourceType {
    pub const ALL: [SourceType; 3] = [SourceType::Rss, SourceType::Reddit, SourceType::Youtube];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Rss => "rss",
            SourceType::Reddit => "reddit",
            SourceType::Youtube => "youtube",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SourceType::Rss => "RSS",
            SourceType::Reddit => "Reddit",
            SourceType::Youtube => "YouTube",
        }
    }
}

impl FromStr for SourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rss" | "feed" => Ok(SourceType::Rss),
            "reddit" => Ok(SourceType::Reddit),
            "youtube" | "yt" => Ok(SourceType::Youtube),
            other => Err(format!("unknown source type '{}'", other)),
        }
    }
}

/// Ordering of the content list by publication date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Newest,
    Oldest,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Newest => SortDirection::Oldest,
            SortDirection::Oldest => SortDirection::Newest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Newest => "newest",
            SortDirection::Oldest => "oldest",
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "newest" | "new" | "desc" => Ok(SortDirection::Newest),
            "oldest" | "old" | "asc" => Ok(SortDirection::Oldest),
            other => Err(format!("unknown sort direction '{}'", other)),
        }
    }
}

/// A single article, post or video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ItemId,
    pub title: String,
    pub url: String,
    pub source_id: SourceId,
    #[serde(default)]
    pub source_name: String,
    pub source_type: SourceType,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub favorited: bool,
}

impl ContentItem {
    /// Text handed to clipboard and external tools: full content when
    /// available, otherwise the summary, otherwise the title.
    pub fn body_text(&self) -> &str {
        self.content
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .or(self.summary.as_deref().filter(|s| !s.trim().is_empty()))
            .unwrap_or(&self.title)
    }

    pub fn is_prioritized(&self) -> bool {
        self.priority.is_some()
    }
}

/// A configured content source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: SourceId,
    pub name: String,
    pub url: String,
    pub source_type: SourceType,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub error_count: u32,
    #[serde(default)]
    pub last_error: Option<String>,
    #[serde(default)]
    pub unread_count: u32,
}

fn default_true() -> bool {
    true
}

impl Source {
    /// Whether `needle` names this source (exact id or case-insensitive name)
    pub fn matches(&self, needle: &str) -> bool {
        self.id.as_str() == needle || self.name.eq_ignore_ascii_case(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> ContentItem {
        ContentItem {
            id: ItemId::new("a1"),
            title: "Title".to_string(),
            url: "https://example.com/a1".to_string(),
            source_id: SourceId::new("s1"),
            source_name: "Example".to_string(),
            source_type: SourceType::Rss,
            priority: Some(Priority::High),
            summary: None,
            content: None,
            published_at: None,
            read: false,
            favorited: false,
        }
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!("HIGH".parse::<Priority>(), Ok(Priority::High));
        assert_eq!("m".parse::<Priority>(), Ok(Priority::Medium));
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_source_type_parse_aliases() {
        assert_eq!("yt".parse::<SourceType>(), Ok(SourceType::Youtube));
        assert_eq!("Reddit".parse::<SourceType>(), Ok(SourceType::Reddit));
        assert!("mastodon".parse::<SourceType>().is_err());
    }

    #[test]
    fn test_sort_toggle() {
        assert_eq!(SortDirection::Newest.toggled(), SortDirection::Oldest);
        assert_eq!(SortDirection::Oldest.toggled(), SortDirection::Newest);
    }

    #[test]
    fn test_body_text_fallbacks() {
        let mut it = item();
        assert_eq!(it.body_text(), "Title");

        it.summary = Some("short".to_string());
        assert_eq!(it.body_text(), "short");

        it.content = Some("   ".to_string());
        assert_eq!(it.body_text(), "short");

        it.content = Some("full body".to_string());
        assert_eq!(it.body_text(), "full body");
    }

    #[test]
    fn test_item_deserializes_with_missing_optionals() {
        let json = r#"{
            "id": "x",
            "title": "T",
            "url": "u",
            "source_id": "s",
            "source_type": "youtube",
            "priority": null
        }"#;
        let it: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(it.id, ItemId::new("x"));
        assert_eq!(it.priority, None);
        assert!(!it.read);
    }

    #[test]
    fn test_source_matches_id_or_name() {
        let src = Source {
            id: SourceId::new("42"),
            name: "Hacker News".to_string(),
            url: "https://news.ycombinator.com/rss".to_string(),
            source_type: SourceType::Rss,
            active: true,
            error_count: 0,
            last_error: None,
            unread_count: 0,
        };
        assert!(src.matches("42"));
        assert!(src.matches("hacker news"));
        assert!(!src.matches("hacker"));
    }
}
