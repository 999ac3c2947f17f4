//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: main `update()` function and message dispatch
//! - `keys`: key routing by overlay, confirmation and view
//! - `command`: command line editing and execution
//! - `overlays`: source manager and help overlays
//! - `items`: operations on the item under the cursor
//! - `prune`: the prune confirmation workflow

pub(crate) mod command;
pub(crate) mod items;
pub(crate) mod keys;
pub(crate) mod overlays;
pub(crate) mod prune;
pub mod update;

#[cfg(test)]
mod tests;

use std::time::Duration;

use sift_client::{ContentQuery, ItemChange, SourceOp};
use sift_core::ItemId;

use crate::message::Message;
use crate::refresh::RefreshKind;

pub use update::update;

/// Asynchronous operations requested by `update`.
///
/// The event loop runs each one off the main loop; every operation
/// completes by sending exactly one [`Message`].
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Query content with the given filters
    LoadContent {
        query: ContentQuery,
        kind: RefreshKind,
        /// Item under the cursor when the load started
        anchor: Option<ItemId>,
    },

    LoadSources,

    MutateItem {
        item_id: ItemId,
        change: ItemChange,
        silent: bool,
    },

    SourceOp {
        op: SourceOp,
    },

    /// First step of a prune: count affected items
    CountPrune {
        age_days: Option<u32>,
    },

    ExecutePrune {
        age_days: Option<u32>,
    },

    /// Run the external pattern tool over an item's text
    RunTool {
        pattern: String,
        item_id: ItemId,
        content: String,
    },

    CopyToClipboard {
        text: String,
        /// What was copied, for the status message
        label: String,
    },

    OpenInBrowser {
        url: String,
    },

    /// Fire `AutoRefreshFired` after `after`
    ScheduleAutoRefresh {
        after: Duration,
    },

    /// Fire `StatusExpired { generation }` after `after`
    ExpireStatus {
        generation: u64,
        after: Duration,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Operations for the event loop to start, in order
    pub actions: Vec<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            actions: Vec::new(),
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            actions: vec![action],
        }
    }

    pub fn actions(actions: Vec<UpdateAction>) -> Self {
        Self {
            message: None,
            actions,
        }
    }

    pub fn with_action(mut self, action: UpdateAction) -> Self {
        self.actions.push(action);
        self
    }

    pub fn with_optional(mut self, action: Option<UpdateAction>) -> Self {
        self.actions.extend(action);
        self
    }
}

impl From<Option<UpdateAction>> for UpdateResult {
    fn from(action: Option<UpdateAction>) -> Self {
        Self::none().with_optional(action)
    }
}
