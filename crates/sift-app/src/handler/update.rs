//! Main update function - handles state transitions (TEA pattern)

use chrono::Local;
use tracing::{debug, warn};

use sift_client::{ContentPage, ItemChange, SourceOp};
use sift_core::ItemId;

use crate::message::Message;
use crate::overlay::Overlay;
use crate::refresh::{self, RefreshKind};
use crate::state::AppState;

use super::{command, keys, prune, UpdateAction, UpdateResult};

/// Process a message and update state.
///
/// Total over `Message`: every variant yields a next state, and no I/O is
/// performed here. Work is requested through the returned actions.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => keys::handle_key(state, key),

        Message::Resize { width, height } => {
            state.terminal_size = (width, height);
            UpdateResult::none()
        }

        Message::Paste(text) => command::handle_paste(state, &text),

        // ─────────────────────────────────────────────────────────
        // Content & sources
        // ─────────────────────────────────────────────────────────
        Message::ContentLoaded { page, kind, anchor } => {
            handle_content_loaded(state, page, kind, anchor)
        }

        Message::ContentLoadFailed {
            kind,
            error,
            malformed,
        } => {
            warn!("Content load ({:?}) failed: {}", kind, error);
            state.loading = false;
            if malformed {
                // Nothing trustworthy came back; show an empty list
                state.hidden_count = 0;
                state.set_items(Vec::new(), None);
            }
            let notice = state.error(format!("Failed to load content: {}", error));
            UpdateResult::action(notice).with_optional(reissue_pending(state))
        }

        Message::SourcesLoaded(sources) => {
            debug!("Loaded {} sources", sources.len());
            state.set_sources(sources);
            UpdateResult::none()
        }

        Message::SourcesLoadFailed(error) => {
            warn!("Source load failed: {}", error);
            UpdateResult::action(state.error(format!("Failed to load sources: {}", error)))
        }

        // ─────────────────────────────────────────────────────────
        // Mutations
        // ─────────────────────────────────────────────────────────
        Message::ItemMutated {
            item_id,
            change,
            silent,
        } => handle_item_mutated(state, &item_id, change, silent),

        Message::ItemMutationFailed {
            item_id,
            change,
            error,
        } => {
            warn!("Failed to apply {:?} to {}: {}", change, item_id, error);
            UpdateResult::action(state.error(format!("Failed to update item: {}", error)))
        }

        Message::SourceOpCompleted { op, message } => handle_source_op_completed(state, op, message),

        Message::SourceOpFailed { op, error } => {
            warn!("Source {} on {} failed: {}", op.kind(), op.target(), error);
            UpdateResult::action(state.error(format!("Failed to {} source: {}", op.kind(), error)))
        }

        // ─────────────────────────────────────────────────────────
        // Prune workflow
        // ─────────────────────────────────────────────────────────
        Message::PruneCounted { count, age_days } => prune::handle_counted(state, count, age_days),
        Message::PruneCountFailed(error) => prune::handle_count_failed(state, &error),
        Message::PruneCompleted { deleted } => prune::handle_completed(state, deleted),
        Message::PruneFailed(error) => prune::handle_failed(state, &error),

        // ─────────────────────────────────────────────────────────
        // External tool & OS integration
        // ─────────────────────────────────────────────────────────
        Message::ToolCompleted {
            pattern,
            item_id,
            output,
        } => {
            debug!("Pattern '{}' on {} finished", pattern, item_id);
            if output.trim().is_empty() {
                return UpdateResult::action(
                    state.warning(format!("Pattern '{}' produced no output", pattern)),
                );
            }
            UpdateResult::action(UpdateAction::CopyToClipboard {
                text: output,
                label: format!("'{}' output", pattern),
            })
        }

        Message::ToolFailed { pattern, error } => {
            UpdateResult::action(state.error(format!("Pattern '{}' failed: {}", pattern, error)))
        }

        Message::ClipboardCopied { label } => {
            UpdateResult::action(state.success(format!("Copied {} to clipboard", label)))
        }

        Message::ClipboardFailed(error) => {
            UpdateResult::action(state.error(format!("Clipboard: {}", error)))
        }

        Message::BrowserOpened { url } => {
            debug!("Opened {} in browser", url);
            UpdateResult::action(state.info("Opened in browser"))
        }

        Message::BrowserFailed(error) => UpdateResult::action(state.error(error)),

        // ─────────────────────────────────────────────────────────
        // Timers
        // ─────────────────────────────────────────────────────────
        Message::AutoRefreshFired => handle_auto_refresh_fired(state),

        Message::StatusExpired { generation } => {
            state.expire_status(generation);
            UpdateResult::none()
        }

        Message::OverlayClosed => UpdateResult::action(UpdateAction::LoadSources),
    }
}

fn handle_content_loaded(
    state: &mut AppState,
    page: ContentPage,
    kind: RefreshKind,
    anchor: Option<ItemId>,
) -> UpdateResult {
    let before = state.items.len();
    state.loading = false;
    state.hidden_count = page.hidden_count;
    state.set_items(page.items, anchor.as_ref());
    state.last_refresh = Some(Local::now());
    debug!(
        "Loaded {} items ({:?}), {} hidden",
        state.items.len(),
        kind,
        state.hidden_count
    );

    let mut result = UpdateResult::none();
    if let Some(text) = refresh::describe_delta(kind, before, state.items.len()) {
        result = result.with_action(state.info(text));
    }
    result.with_optional(reissue_pending(state))
}

/// Issue the reload recorded while the previous load was in flight
fn reissue_pending(state: &mut AppState) -> Option<UpdateAction> {
    if !state.reload_pending {
        return None;
    }
    state.reload_pending = false;
    Some(state.start_load(RefreshKind::Filter))
}

fn handle_item_mutated(
    state: &mut AppState,
    item_id: &ItemId,
    change: ItemChange,
    silent: bool,
) -> UpdateResult {
    // The item may have disappeared in a reload; the server already applied it
    if let Some(item) = state.item_mut(item_id) {
        match change {
            ItemChange::Read(read) => item.read = read,
            ItemChange::Favorite(favorited) => item.favorited = favorited,
        }
    }

    if silent {
        UpdateResult::none()
    } else {
        UpdateResult::action(state.success(change.describe()))
    }
}

fn handle_source_op_completed(state: &mut AppState, op: SourceOp, message: String) -> UpdateResult {
    let text = if message.trim().is_empty() {
        format!("Source {}: {}", op.kind(), op.target())
    } else {
        message
    };
    let notice = state.success(text);

    let mut result = UpdateResult::action(notice).with_action(UpdateAction::LoadSources);
    // Removing, pausing or resuming changes which items exist
    if !matches!(op, SourceOp::Rename { .. } | SourceOp::Add { .. }) {
        result = result.with_optional(state.request_reload(RefreshKind::AfterChange));
    }
    result
}

/// Auto-refresh tick.
///
/// Always reschedules while armed. The load itself is skipped when the
/// reader or an overlay is open, or a load is already in flight.
fn handle_auto_refresh_fired(state: &mut AppState) -> UpdateResult {
    let Some(interval) = state.auto_refresh_interval() else {
        return UpdateResult::none();
    };

    let mut result = UpdateResult::none();
    if state.can_auto_refresh() {
        result = result.with_action(state.start_load(RefreshKind::Auto));
    } else {
        debug!(
            "Auto-refresh skipped (view={:?}, overlay={}, loading={})",
            state.view_mode,
            state.overlay.name(),
            state.loading
        );
    }
    result.with_action(UpdateAction::ScheduleAutoRefresh { after: interval })
}

/// Reload after a filter change
pub(crate) fn reload_for_filters(state: &mut AppState) -> UpdateResult {
    state.request_reload(RefreshKind::Filter).into()
}

/// Close the current overlay. Closing anything but the command line
/// reloads sources.
pub(crate) fn close_overlay(state: &mut AppState) -> UpdateResult {
    let was = std::mem::take(&mut state.overlay);
    match was {
        Overlay::None | Overlay::CommandLine(_) => UpdateResult::none(),
        Overlay::SourceManager(_) | Overlay::Help(_) => UpdateResult::message(Message::OverlayClosed),
    }
}
