//! Production backend: daemon API plus OS integration

use sift_core::prelude::*;
use sift_core::{ItemId, Source};

use crate::api::ApiClient;
use crate::backend::{Backend, ContentPage, ContentQuery, ItemChange, SourceOp};
use crate::system::{self, ToolConfig};

/// Backend used by the running application.
///
/// Constructed once at startup and cloned into each operation task; every
/// clone shares the same HTTP connection pool.
#[derive(Debug, Clone)]
pub struct LiveBackend {
    api: ApiClient,
    tool: ToolConfig,
    browser: String,
}

impl LiveBackend {
    pub fn new(api: ApiClient, tool: ToolConfig, browser: impl Into<String>) -> Self {
        Self {
            api,
            tool,
            browser: browser.into(),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }
}

impl Backend for LiveBackend {
    async fn load_content(&self, query: &ContentQuery) -> Result<ContentPage> {
        self.api.entries(query).await
    }

    async fn load_sources(&self) -> Result<Vec<Source>> {
        self.api.sources().await
    }

    async fn mutate_item(&self, id: &ItemId, change: ItemChange) -> Result<()> {
        self.api.update_entry(id, change).await
    }

    async fn source_op(&self, op: &SourceOp) -> Result<String> {
        self.api.source_op(op).await
    }

    async fn count_prunable(&self, age_days: Option<u32>) -> Result<usize> {
        self.api.prune_count(age_days).await
    }

    async fn prune(&self, age_days: Option<u32>) -> Result<usize> {
        self.api.prune(age_days).await
    }

    async fn run_tool(&self, pattern: &str, content: &str) -> Result<String> {
        system::run_tool(&self.tool, pattern, content).await
    }

    async fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        system::copy_to_clipboard(text.to_string()).await
    }

    async fn open_in_browser(&self, url: &str) -> Result<()> {
        system::open_in_browser(url, &self.browser)
    }
}
