//! View filters applied to the content query

use std::fmt;
use std::str::FromStr;

use sift_client::ContentQuery;
use sift_core::{Priority, SortDirection, SourceType};

/// Maximum number of items requested per load
pub const CONTENT_LIMIT: usize = 500;

/// Priority filter, including the "any priority" setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    High,
    Medium,
    Low,
}

impl PriorityFilter {
    pub fn next(self) -> Self {
        match self {
            PriorityFilter::All => PriorityFilter::High,
            PriorityFilter::High => PriorityFilter::Medium,
            PriorityFilter::Medium => PriorityFilter::Low,
            PriorityFilter::Low => PriorityFilter::All,
        }
    }

    pub fn as_priority(self) -> Option<Priority> {
        match self {
            PriorityFilter::All => None,
            PriorityFilter::High => Some(Priority::High),
            PriorityFilter::Medium => Some(Priority::Medium),
            PriorityFilter::Low => Some(Priority::Low),
        }
    }
}

impl fmt::Display for PriorityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_priority() {
            Some(p) => f.write_str(p.as_str()),
            None => f.write_str("all"),
        }
    }
}

impl FromStr for PriorityFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(PriorityFilter::All);
        }
        Ok(match s.parse::<Priority>()? {
            Priority::High => PriorityFilter::High,
            Priority::Medium => PriorityFilter::Medium,
            Priority::Low => PriorityFilter::Low,
        })
    }
}

/// Parse a source type filter argument (`all` clears the filter)
pub fn parse_source_type_filter(s: &str) -> Result<Option<SourceType>, String> {
    if s.eq_ignore_ascii_case("all") {
        Ok(None)
    } else {
        s.parse().map(Some)
    }
}

/// Pure view parameters. Any change requires a content reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub priority: PriorityFilter,
    /// Show read items as well as unread
    pub show_all: bool,
    pub source_type: Option<SourceType>,
    pub sort: SortDirection,
    pub show_unprioritized: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            priority: PriorityFilter::All,
            show_all: false,
            source_type: None,
            sort: SortDirection::Newest,
            show_unprioritized: false,
        }
    }
}

impl FilterState {
    pub fn cycle_priority(&mut self) {
        self.priority = self.priority.next();
    }

    pub fn toggle_show_all(&mut self) {
        self.show_all = !self.show_all;
    }

    /// all → rss → reddit → youtube → all
    pub fn cycle_source_type(&mut self) {
        self.source_type = match self.source_type {
            None => Some(SourceType::ALL[0]),
            Some(current) => SourceType::ALL
                .iter()
                .position(|t| *t == current)
                .and_then(|i| SourceType::ALL.get(i + 1))
                .copied(),
        };
    }

    pub fn toggle_sort(&mut self) {
        self.sort = self.sort.toggled();
    }

    pub fn toggle_unprioritized(&mut self) {
        self.show_unprioritized = !self.show_unprioritized;
    }

    /// Compact description for the header line
    pub fn summary(&self) -> String {
        let mut parts = vec![
            if self.show_all { "all" } else { "unread" }.to_string(),
            format!("priority:{}", self.priority),
        ];
        if let Some(t) = self.source_type {
            parts.push(format!("type:{}", t.as_str()));
        }
        parts.push(self.sort.as_str().to_string());
        if self.show_unprioritized {
            parts.push("+unprioritized".to_string());
        }
        parts.join(" · ")
    }

    pub fn to_query(&self) -> ContentQuery {
        ContentQuery {
            priority: self.priority.as_priority(),
            include_read: self.show_all,
            source_type: self.source_type,
            sort: self.sort,
            include_unprioritized: self.show_unprioritized,
            limit: CONTENT_LIMIT,
        }
    }
}
