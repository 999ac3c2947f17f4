//! Message types for the application (TEA pattern)
//!
//! Every input the event loop accepts is a variant here: terminal input,
//! timer ticks and the completion of each asynchronous operation. Completion
//! messages carry the identifiers needed to apply their result, so they can
//! be handled correctly even after `items` was reloaded.

use sift_client::{ContentPage, ItemChange, SourceOp};
use sift_core::{ItemId, Source};

use crate::input_key::InputKey;
use crate::refresh::RefreshKind;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // Terminal input
    // ─────────────────────────────────────────────────────────
    /// Keyboard event
    Key(InputKey),

    /// Terminal resized
    Resize { width: u16, height: u16 },

    /// Bracketed paste
    Paste(String),

    // ─────────────────────────────────────────────────────────
    // Content & sources
    // ─────────────────────────────────────────────────────────
    /// Content query finished
    ContentLoaded {
        page: ContentPage,
        kind: RefreshKind,
        /// Item under the cursor when the load was started
        anchor: Option<ItemId>,
    },

    ContentLoadFailed {
        kind: RefreshKind,
        error: String,
        /// The daemon answered but the body could not be decoded
        malformed: bool,
    },

    SourcesLoaded(Vec<Source>),

    SourcesLoadFailed(String),

    // ─────────────────────────────────────────────────────────
    // Item & source mutations
    // ─────────────────────────────────────────────────────────
    ItemMutated {
        item_id: ItemId,
        change: ItemChange,
        /// Suppress the status message (e.g. mark-read on open)
        silent: bool,
    },

    ItemMutationFailed {
        item_id: ItemId,
        change: ItemChange,
        error: String,
    },

    SourceOpCompleted { op: SourceOp, message: String },

    SourceOpFailed { op: SourceOp, error: String },

    // ─────────────────────────────────────────────────────────
    // Prune workflow
    // ─────────────────────────────────────────────────────────
    PruneCounted { count: usize, age_days: Option<u32> },

    PruneCountFailed(String),

    PruneCompleted { deleted: usize },

    PruneFailed(String),

    // ─────────────────────────────────────────────────────────
    // External tool & OS integration
    // ─────────────────────────────────────────────────────────
    ToolCompleted {
        pattern: String,
        item_id: ItemId,
        output: String,
    },

    ToolFailed { pattern: String, error: String },

    ClipboardCopied { label: String },

    ClipboardFailed(String),

    BrowserOpened { url: String },

    BrowserFailed(String),

    // ─────────────────────────────────────────────────────────
    // Timers
    // ─────────────────────────────────────────────────────────
    /// Auto-refresh interval elapsed
    AutoRefreshFired,

    /// A status message's display time elapsed
    StatusExpired { generation: u64 },

    // ─────────────────────────────────────────────────────────
    // Overlays & lifecycle
    // ─────────────────────────────────────────────────────────
    /// An overlay other than the command line was closed
    OverlayClosed,

    /// Request application quit
    Quit,
}
