//! Content refresh helpers: load reasons, cursor preservation and the
//! item-count delta shown after a refresh

use sift_core::{ContentItem, ItemId};

/// Why a content load was started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshKind {
    /// First load at startup
    Initial,
    /// `r` key or `:refresh`
    Manual,
    /// Auto-refresh timer
    Auto,
    /// A filter changed
    Filter,
    /// Follow-up after a mutation (prune, source operation)
    AfterChange,
}

impl RefreshKind {
    /// Whether completion reports the item-count delta
    pub fn reports_delta(self) -> bool {
        matches!(self, RefreshKind::Manual | RefreshKind::Auto)
    }
}

/// New cursor position after `items` was replaced.
///
/// Follows `anchor` to its new index when it is still present; otherwise
/// keeps `previous` clamped to the new bounds.
pub fn relocate_cursor(items: &[ContentItem], anchor: Option<&ItemId>, previous: usize) -> usize {
    if items.is_empty() {
        return 0;
    }
    anchor
        .and_then(|id| items.iter().position(|item| &item.id == id))
        .unwrap_or_else(|| previous.min(items.len() - 1))
}

/// Status text for a finished manual or automatic refresh
pub fn describe_delta(kind: RefreshKind, before: usize, after: usize) -> Option<String> {
    let prefix = match kind {
        RefreshKind::Auto => "Auto-refresh",
        RefreshKind::Manual => "Refreshed",
        _ => return None,
    };

    let detail = if after > before {
        let n = after - before;
        format!("{} new {}", n, plural(n, "item"))
    } else if after < before {
        let n = before - after;
        format!("{} fewer {}", n, plural(n, "item"))
    } else {
        "no new items".to_string()
    };

    Some(format!("{}: {}", prefix, detail))
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
