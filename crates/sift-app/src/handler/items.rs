//! Operations on the item under the cursor, shared by keys and commands

use sift_client::ItemChange;

use crate::state::{AppState, Focus, ViewMode};

use super::{UpdateAction, UpdateResult};

fn no_item(state: &mut AppState) -> UpdateResult {
    UpdateResult::action(state.warning("No item selected"))
}

/// Set the read flag, or toggle it when `read` is `None`
pub(crate) fn toggle_read(state: &mut AppState, read: Option<bool>) -> UpdateResult {
    let Some(item) = state.selected_item() else {
        return no_item(state);
    };
    UpdateResult::action(UpdateAction::MutateItem {
        item_id: item.id.clone(),
        change: ItemChange::Read(read.unwrap_or(!item.read)),
        silent: false,
    })
}

pub(crate) fn toggle_favorite(state: &mut AppState) -> UpdateResult {
    let Some(item) = state.selected_item() else {
        return no_item(state);
    };
    UpdateResult::action(UpdateAction::MutateItem {
        item_id: item.id.clone(),
        change: ItemChange::Favorite(!item.favorited),
        silent: false,
    })
}

pub(crate) fn open_in_browser(state: &mut AppState) -> UpdateResult {
    let Some(item) = state.selected_item() else {
        return no_item(state);
    };
    if item.url.trim().is_empty() {
        return UpdateResult::action(state.error("Item has no URL"));
    }
    UpdateResult::action(UpdateAction::OpenInBrowser {
        url: item.url.clone(),
    })
}

pub(crate) fn yank_url(state: &mut AppState) -> UpdateResult {
    let Some(item) = state.selected_item() else {
        return no_item(state);
    };
    if item.url.trim().is_empty() {
        return UpdateResult::action(state.error("Item has no URL"));
    }
    UpdateResult::action(UpdateAction::CopyToClipboard {
        text: item.url.clone(),
        label: "URL".to_string(),
    })
}

pub(crate) fn copy_content(state: &mut AppState) -> UpdateResult {
    let Some(item) = state.selected_item() else {
        return no_item(state);
    };
    UpdateResult::action(UpdateAction::CopyToClipboard {
        text: item.body_text().to_string(),
        label: "content".to_string(),
    })
}

pub(crate) fn run_pattern(state: &mut AppState, pattern: String) -> UpdateResult {
    let Some(item) = state.selected_item() else {
        return no_item(state);
    };
    let action = UpdateAction::RunTool {
        item_id: item.id.clone(),
        content: item.body_text().to_string(),
        pattern: pattern.clone(),
    };
    let notice = state.info(format!("Running pattern '{}'...", pattern));
    UpdateResult::action(action).with_action(notice)
}

/// Open the reader on the selected item
pub(crate) fn open_reader(state: &mut AppState) -> UpdateResult {
    if state.items.is_empty() {
        return UpdateResult::none();
    }
    state.view_mode = ViewMode::Reader;
    state.focus = Focus::Content;
    state.reader_scroll = 0;
    mark_read_on_open(state)
}

/// Move the reader to the next (`1`) or previous (`-1`) item
pub(crate) fn step_reader(state: &mut AppState, delta: isize) -> UpdateResult {
    let before = state.cursor;
    state.move_cursor(delta);
    if state.cursor == before {
        return UpdateResult::none();
    }
    state.reader_scroll = 0;
    mark_read_on_open(state)
}

fn mark_read_on_open(state: &AppState) -> UpdateResult {
    match state.selected_item() {
        Some(item) if state.mark_read_on_open && !item.read => {
            UpdateResult::action(UpdateAction::MutateItem {
                item_id: item.id.clone(),
                change: ItemChange::Read(true),
                silent: true,
            })
        }
        _ => UpdateResult::none(),
    }
}
