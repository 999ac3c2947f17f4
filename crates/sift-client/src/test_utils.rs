//! Test utilities: content fixtures and a scripted in-memory backend
//!
//! [`FakeBackend`] records every call and answers from shared, mutable
//! fixtures, so tests can assert exactly which operations were dispatched.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use sift_core::prelude::*;
use sift_core::{ContentItem, ItemId, Priority, Source, SourceId, SourceType};

use crate::backend::{Backend, ContentPage, ContentQuery, ItemChange, SourceOp};

/// Creates an unread RSS item with the given id and title.
pub fn test_item(id: &str, title: &str) -> ContentItem {
    ContentItem {
        id: ItemId::new(id),
        title: title.to_string(),
        url: format!("https://example.com/{}", id),
        source_id: SourceId::new("src-1"),
        source_name: "Example Feed".to_string(),
        source_type: SourceType::Rss,
        priority: Some(Priority::Medium),
        summary: Some(format!("Summary of {}", title)),
        content: None,
        published_at: None,
        read: false,
        favorited: false,
    }
}

/// Creates one item per id, titled after the id.
pub fn test_items(ids: &[&str]) -> Vec<ContentItem> {
    ids.iter().map(|id| test_item(id, &id.to_uppercase())).collect()
}

/// Creates an active RSS source.
pub fn test_source(id: &str, name: &str) -> Source {
    Source {
        id: SourceId::new(id),
        name: name.to_string(),
        url: format!("https://{}.example.com/feed", id),
        source_type: SourceType::Rss,
        active: true,
        error_count: 0,
        last_error: None,
        unread_count: 0,
    }
}

/// Mutable fixtures and call log shared by all clones of a [`FakeBackend`]
#[derive(Debug, Default)]
pub struct FakeState {
    pub items: Vec<ContentItem>,
    pub hidden_count: usize,
    pub sources: Vec<Source>,
    pub prunable: usize,
    pub tool_output: String,
    /// When set, every call fails with `Error::api(fail_with)`
    pub fail_with: Option<String>,
    /// When set, `load_content` fails with `Error::malformed(..)`
    pub malformed_content: Option<String>,
    /// Artificial latency for `load_content`
    pub load_delay: Option<Duration>,
    pub calls: Vec<String>,
    pub clipboard: Vec<String>,
}

/// Scripted backend for tests
#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    pub state: Arc<Mutex<FakeState>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<ContentItem>) -> Self {
        let backend = Self::new();
        backend.lock().items = items;
        backend
    }

    pub fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Names of the calls made so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    pub fn count_calls(&self, name: &str) -> usize {
        self.lock().calls.iter().filter(|c| c.as_str() == name).count()
    }

    fn record(&self, name: &str) -> Result<()> {
        let mut state = self.lock();
        state.calls.push(name.to_string());
        match &state.fail_with {
            Some(message) => Err(Error::api(message.clone())),
            None => Ok(()),
        }
    }
}

impl Backend for FakeBackend {
    async fn load_content(&self, _query: &ContentQuery) -> Result<ContentPage> {
        self.record("load_content")?;
        if let Some(message) = self.lock().malformed_content.clone() {
            return Err(Error::malformed(message));
        }
        let delay = self.lock().load_delay;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        let state = self.lock();
        Ok(ContentPage {
            items: state.items.clone(),
            hidden_count: state.hidden_count,
        })
    }

    async fn load_sources(&self) -> Result<Vec<Source>> {
        self.record("load_sources")?;
        Ok(self.lock().sources.clone())
    }

    async fn mutate_item(&self, id: &ItemId, change: ItemChange) -> Result<()> {
        self.record("mutate_item")?;
        let mut state = self.lock();
        let item = state
            .items
            .iter_mut()
            .find(|i| &i.id == id)
            .ok_or_else(|| Error::not_found(format!("entry {}", id)))?;
        match change {
            ItemChange::Read(read) => item.read = read,
            ItemChange::Favorite(fav) => item.favorited = fav,
        }
        Ok(())
    }

    async fn source_op(&self, op: &SourceOp) -> Result<String> {
        self.record("source_op")?;
        Ok(format!("{} {}", op.kind(), op.target()))
    }

    async fn count_prunable(&self, _age_days: Option<u32>) -> Result<usize> {
        self.record("count_prunable")?;
        Ok(self.lock().prunable)
    }

    async fn prune(&self, _age_days: Option<u32>) -> Result<usize> {
        self.record("prune")?;
        let mut state = self.lock();
        let deleted = state.prunable;
        state.prunable = 0;
        Ok(deleted)
    }

    async fn run_tool(&self, _pattern: &str, _content: &str) -> Result<String> {
        self.record("run_tool")?;
        Ok(self.lock().tool_output.clone())
    }

    async fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        self.record("copy_to_clipboard")?;
        self.lock().clipboard.push(text.to_string());
        Ok(())
    }

    async fn open_in_browser(&self, _url: &str) -> Result<()> {
        self.record("open_in_browser")
    }
}
