//! Application state (Model in TEA pattern)

use std::time::Duration;

use chrono::{DateTime, Local};

use sift_core::{ContentItem, ItemId, Source};

use crate::command_line::CommandHistory;
use crate::commands::{builtin, CommandFn, CommandRegistry};
use crate::config::Settings;
use crate::filter::FilterState;
use crate::handler::UpdateAction;
use crate::overlay::Overlay;
use crate::prune::PruneWorkflow;
use crate::refresh::{self, RefreshKind};
use crate::status::{StatusLevel, StatusMessage};

/// Rows taken by header, status bar and borders around the list/reader
const CHROME_ROWS: u16 = 4;

/// Top-level view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    /// Full text of the item under the cursor
    Reader,
}

/// Pane receiving navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    SourceList,
    #[default]
    Content,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::SourceList => Focus::Content,
            Focus::Content => Focus::SourceList,
        }
    }
}

/// Complete application state. Owned by the event loop and mutated only
/// by `handler::update`.
#[derive(Debug)]
pub struct AppState {
    /// Loaded content, in query order
    pub items: Vec<ContentItem>,
    /// Index into `items`; always valid while `items` is non-empty
    pub cursor: usize,
    /// Items hidden because they are unprioritized
    pub hidden_count: usize,

    pub sources: Vec<Source>,
    /// Selection in the source pane
    pub source_cursor: usize,

    pub view_mode: ViewMode,
    pub focus: Focus,
    pub overlay: Overlay,
    pub filters: FilterState,
    pub prune: PruneWorkflow,

    pub status: Option<StatusMessage>,
    status_generation: u64,
    pub status_timeout: Duration,

    /// Auto-refresh interval; 0 disables
    pub refresh_interval_secs: u64,
    /// A content load is in flight
    pub loading: bool,
    /// A reload was requested while `loading`
    pub reload_pending: bool,
    pub last_refresh: Option<DateTime<Local>>,

    pub mark_read_on_open: bool,
    /// First visible line of the reader
    pub reader_scroll: u16,
    /// (width, height)
    pub terminal_size: (u16, u16),

    pub history: CommandHistory,
    pub commands: CommandRegistry<CommandFn>,

    quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(&Settings::default())
    }

    pub fn with_settings(settings: &Settings) -> Self {
        let mut commands = CommandRegistry::new();
        builtin::register_builtin_commands(&mut commands);

        Self {
            items: Vec::new(),
            cursor: 0,
            hidden_count: 0,
            sources: Vec::new(),
            source_cursor: 0,
            view_mode: ViewMode::List,
            focus: Focus::Content,
            overlay: Overlay::None,
            filters: settings.initial_filters(),
            prune: PruneWorkflow::Idle,
            status: None,
            status_generation: 0,
            status_timeout: Duration::from_millis(settings.behavior.status_timeout_ms),
            refresh_interval_secs: settings.behavior.refresh_interval_secs,
            loading: false,
            reload_pending: false,
            last_refresh: None,
            mark_read_on_open: settings.behavior.mark_read_on_open,
            reader_scroll: 0,
            terminal_size: (80, 24),
            history: CommandHistory::new(settings.behavior.history_size),
            commands,
            quitting: false,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Items & cursor
    // ─────────────────────────────────────────────────────────

    pub fn selected_item(&self) -> Option<&ContentItem> {
        self.items.get(self.cursor)
    }

    pub fn selected_id(&self) -> Option<ItemId> {
        self.selected_item().map(|item| item.id.clone())
    }

    pub fn item_mut(&mut self, id: &ItemId) -> Option<&mut ContentItem> {
        self.items.iter_mut().find(|item| &item.id == id)
    }

    /// Move the cursor by `delta`, clamped to the list
    pub fn move_cursor(&mut self, delta: isize) {
        if self.items.is_empty() {
            self.cursor = 0;
            return;
        }
        let last = self.items.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    pub fn cursor_to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_to_bottom(&mut self) {
        self.cursor = self.items.len().saturating_sub(1);
    }

    /// Replace `items`, keeping the cursor on `anchor` when possible
    pub fn set_items(&mut self, items: Vec<ContentItem>, anchor: Option<&ItemId>) {
        self.cursor = refresh::relocate_cursor(&items, anchor, self.cursor);
        self.items = items;
        if self.items.is_empty() && self.view_mode == ViewMode::Reader {
            self.view_mode = ViewMode::List;
        }
    }

    pub fn set_sources(&mut self, sources: Vec<Source>) {
        self.sources = sources;
        self.source_cursor = self.source_cursor.min(self.sources.len().saturating_sub(1));
        if let Overlay::SourceManager(sm) = &mut self.overlay {
            sm.clamp(self.sources.len());
        }
    }

    pub fn move_source_cursor(&mut self, delta: isize) {
        let last = self.sources.len().saturating_sub(1);
        self.source_cursor = self.source_cursor.saturating_add_signed(delta).min(last);
    }

    /// Unread items among those loaded
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|item| !item.read).count()
    }

    /// Rows available for list or reader content
    pub fn page_size(&self) -> u16 {
        self.terminal_size.1.saturating_sub(CHROME_ROWS).max(1)
    }

    // ─────────────────────────────────────────────────────────
    // Loading
    // ─────────────────────────────────────────────────────────

    /// Start a content load with the current filters.
    ///
    /// While a load is in flight the request is recorded in
    /// `reload_pending` instead and `None` is returned.
    pub fn request_reload(&mut self, kind: RefreshKind) -> Option<UpdateAction> {
        if self.loading {
            self.reload_pending = true;
            return None;
        }
        Some(self.start_load(kind))
    }

    /// Start a content load unconditionally
    pub(crate) fn start_load(&mut self, kind: RefreshKind) -> UpdateAction {
        self.loading = true;
        UpdateAction::LoadContent {
            query: self.filters.to_query(),
            kind,
            anchor: self.selected_id(),
        }
    }

    /// Whether the auto-refresh timer may start a load now
    pub fn can_auto_refresh(&self) -> bool {
        self.view_mode == ViewMode::List && self.overlay.is_none() && !self.loading
    }

    pub fn auto_refresh_interval(&self) -> Option<Duration> {
        (self.refresh_interval_secs > 0).then(|| Duration::from_secs(self.refresh_interval_secs))
    }

    // ─────────────────────────────────────────────────────────
    // Status line
    // ─────────────────────────────────────────────────────────

    /// Show `text` and return the timer action that will expire it
    pub fn set_status(&mut self, level: StatusLevel, text: impl Into<String>) -> UpdateAction {
        self.status_generation += 1;
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            generation: self.status_generation,
        });
        UpdateAction::ExpireStatus {
            generation: self.status_generation,
            after: self.status_timeout,
        }
    }

    pub fn info(&mut self, text: impl Into<String>) -> UpdateAction {
        self.set_status(StatusLevel::Info, text)
    }

    pub fn success(&mut self, text: impl Into<String>) -> UpdateAction {
        self.set_status(StatusLevel::Success, text)
    }

    pub fn warning(&mut self, text: impl Into<String>) -> UpdateAction {
        self.set_status(StatusLevel::Warning, text)
    }

    pub fn error(&mut self, text: impl Into<String>) -> UpdateAction {
        self.set_status(StatusLevel::Error, text)
    }

    /// Clear the status if it is still the one `generation` refers to
    pub fn expire_status(&mut self, generation: u64) {
        if self.status.as_ref().map(|s| s.generation) == Some(generation) {
            self.status = None;
        }
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_client::test_utils::test_items;

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.view_mode, ViewMode::List);
        assert_eq!(state.focus, Focus::Content);
        assert!(state.overlay.is_none());
        assert!(!state.filters.show_all);
        assert!(state.prune.pending_confirmation().is_none());
        assert!(!state.commands.is_empty());
    }

    #[test]
    fn test_move_cursor_clamps() {
        let mut state = AppState::new();
        state.move_cursor(1);
        assert_eq!(state.cursor, 0);

        state.items = test_items(&["a", "b", "c"]);
        state.move_cursor(10);
        assert_eq!(state.cursor, 2);
        state.move_cursor(-5);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_set_items_leaves_reader_when_empty() {
        let mut state = AppState::new();
        state.items = test_items(&["a"]);
        state.view_mode = ViewMode::Reader;
        state.set_items(Vec::new(), None);
        assert_eq!(state.view_mode, ViewMode::List);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_request_reload_coalesces() {
        let mut state = AppState::new();
        assert!(state.request_reload(RefreshKind::Filter).is_some());
        assert!(state.loading);
        assert!(state.request_reload(RefreshKind::Filter).is_none());
        assert!(state.reload_pending);
    }

    #[test]
    fn test_status_generation() {
        let mut state = AppState::new();
        state.info("first");
        let first = state.status.as_ref().unwrap().generation;
        state.error("second");

        state.expire_status(first);
        assert_eq!(state.status.as_ref().unwrap().text, "second");

        let second = state.status.as_ref().unwrap().generation;
        state.expire_status(second);
        assert!(state.status.is_none());
    }

    #[test]
    fn test_auto_refresh_interval() {
        let mut state = AppState::new();
        assert_eq!(state.auto_refresh_interval(), Some(Duration::from_secs(300)));
        state.refresh_interval_secs = 0;
        assert_eq!(state.auto_refresh_interval(), None);
    }
}
