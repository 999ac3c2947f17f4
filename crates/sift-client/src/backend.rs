//! Capability trait consumed by the application core
//!
//! Every method is one opaque unit of asynchronous work. Implementations
//! must be cheap to clone and safe for concurrent use by several in-flight
//! operations.

use sift_core::prelude::*;
use sift_core::{ContentItem, ItemId, Priority, SortDirection, Source, SourceId, SourceType};

/// Filters sent with a content query
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentQuery {
    /// Only items with this priority (`None` = any)
    pub priority: Option<Priority>,
    /// Include read items
    pub include_read: bool,
    /// Only items from this kind of source (`None` = any)
    pub source_type: Option<SourceType>,
    pub sort: SortDirection,
    /// Include items the daemon has not prioritized
    pub include_unprioritized: bool,
    pub limit: usize,
}

/// Result of a content query
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentPage {
    pub items: Vec<ContentItem>,
    /// Items matching the other filters but hidden as unprioritized
    pub hidden_count: usize,
}

/// A change applied to a single content item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemChange {
    Read(bool),
    Favorite(bool),
}

impl ItemChange {
    /// Past-tense description for status messages
    pub fn describe(&self) -> &'static str {
        match self {
            ItemChange::Read(true) => "Marked as read",
            ItemChange::Read(false) => "Marked as unread",
            ItemChange::Favorite(true) => "Added to favorites",
            ItemChange::Favorite(false) => "Removed from favorites",
        }
    }
}

/// An operation on a configured source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOp {
    Add { url: String, name: Option<String> },
    Remove { id: SourceId },
    Pause { id: SourceId },
    Resume { id: SourceId },
    Rename { id: SourceId, name: String },
}

impl SourceOp {
    /// Verb used in logs and status messages
    pub fn kind(&self) -> &'static str {
        match self {
            SourceOp::Add { .. } => "add",
            SourceOp::Remove { .. } => "remove",
            SourceOp::Pause { .. } => "pause",
            SourceOp::Resume { .. } => "resume",
            SourceOp::Rename { .. } => "rename",
        }
    }

    /// The identifier (or URL, for `Add`) the operation targets
    pub fn target(&self) -> &str {
        match self {
            SourceOp::Add { url, .. } => url,
            SourceOp::Remove { id }
            | SourceOp::Pause { id }
            | SourceOp::Resume { id }
            | SourceOp::Rename { id, .. } => id.as_str(),
        }
    }
}

/// Data-access and OS capabilities used by application operations.
///
/// `Backend` is the `Send` variant generated by `trait_variant`; operation
/// tasks are spawned on the tokio runtime and require `Send` futures.
#[trait_variant::make(Backend: Send)]
pub trait LocalBackend {
    /// Query content items matching `query`
    async fn load_content(&self, query: &ContentQuery) -> Result<ContentPage>;

    /// List all configured sources
    async fn load_sources(&self) -> Result<Vec<Source>>;

    /// Apply `change` to the item identified by `id`
    async fn mutate_item(&self, id: &ItemId, change: ItemChange) -> Result<()>;

    /// Run a source operation, returning the daemon's summary text
    async fn source_op(&self, op: &SourceOp) -> Result<String>;

    /// Count unprioritized items older than `age_days` (all ages when `None`)
    async fn count_prunable(&self, age_days: Option<u32>) -> Result<usize>;

    /// Delete unprioritized items older than `age_days`, returning the count
    async fn prune(&self, age_days: Option<u32>) -> Result<usize>;

    /// Run the external pattern tool on `content`, returning its output
    async fn run_tool(&self, pattern: &str, content: &str) -> Result<String>;

    async fn copy_to_clipboard(&self, text: &str) -> Result<()>;

    async fn open_in_browser(&self, url: &str) -> Result<()>;
}
