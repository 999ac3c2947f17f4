//! Key routing.
//!
//! Precedence on every key: the command line, then the source manager or
//! help overlay, then a pending prune confirmation, then normal routing by
//! view and focused pane.

use crate::input_key::InputKey;
use crate::overlay::Overlay;
use crate::refresh::RefreshKind;
use crate::state::{AppState, Focus, ViewMode};

use super::{command, items, overlays, prune, update, UpdateResult};

/// Route a key to the layer that currently owns input
pub fn handle_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    match &state.overlay {
        Overlay::CommandLine(_) => return command::handle_key(state, key),
        Overlay::SourceManager(_) => return overlays::handle_source_manager_key(state, key),
        Overlay::Help(_) => return overlays::handle_help_key(state, key),
        Overlay::None => {}
    }

    if state.prune.pending_confirmation().is_some() {
        return prune::handle_confirmation_key(state, key);
    }

    if key.is_interrupt() {
        state.request_quit();
        return UpdateResult::none();
    }

    if let Some(result) = handle_global_key(state, key) {
        return result;
    }

    match state.view_mode {
        ViewMode::Reader => handle_reader_key(state, key),
        ViewMode::List => handle_list_key(state, key),
    }
}

/// Keys with the same meaning in the list and the reader
fn handle_global_key(state: &mut AppState, key: InputKey) -> Option<UpdateResult> {
    let result = match key {
        InputKey::Char(':') => overlays::open_command_line(state),
        InputKey::Char('?') => overlays::open_help(state),
        InputKey::Char('S') => overlays::open_source_manager(state),
        InputKey::Char('r') => state.request_reload(RefreshKind::Manual).into(),

        // Item actions
        InputKey::Char('m') => items::toggle_read(state, None),
        InputKey::Char('F' | '*') => items::toggle_favorite(state),
        InputKey::Char('o') => items::open_in_browser(state),
        InputKey::Char('y') => items::yank_url(state),
        InputKey::Char('c') => items::copy_content(state),

        // Filters
        InputKey::Char('f') => {
            state.filters.cycle_priority();
            update::reload_for_filters(state)
        }
        InputKey::Char('a') => {
            state.filters.toggle_show_all();
            update::reload_for_filters(state)
        }
        InputKey::Char('t') => {
            state.filters.cycle_source_type();
            update::reload_for_filters(state)
        }
        InputKey::Char('s') => {
            state.filters.toggle_sort();
            update::reload_for_filters(state)
        }
        InputKey::Char('U') => {
            state.filters.toggle_unprioritized();
            update::reload_for_filters(state)
        }

        _ => return None,
    };
    Some(result)
}

fn handle_list_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    let page = state.page_size() as isize;

    match key {
        InputKey::Char('q') => state.request_quit(),
        InputKey::Tab | InputKey::BackTab => state.focus = state.focus.toggled(),

        InputKey::Char('j') | InputKey::Down => move_focused(state, 1),
        InputKey::Char('k') | InputKey::Up => move_focused(state, -1),
        InputKey::PageDown | InputKey::CharCtrl('d') => move_focused(state, page),
        InputKey::PageUp | InputKey::CharCtrl('u') => move_focused(state, -page),
        InputKey::Char('g') | InputKey::Home => move_focused(state, isize::MIN),
        InputKey::Char('G') | InputKey::End => move_focused(state, isize::MAX),

        InputKey::Enter if state.focus == Focus::Content => return items::open_reader(state),
        _ => {}
    }
    UpdateResult::none()
}

fn move_focused(state: &mut AppState, delta: isize) {
    match state.focus {
        Focus::Content => state.move_cursor(delta),
        Focus::SourceList => state.move_source_cursor(delta),
    }
}

fn handle_reader_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    let page = state.page_size();

    match key {
        InputKey::Esc | InputKey::Char('q') => {
            state.view_mode = ViewMode::List;
            state.reader_scroll = 0;
        }
        InputKey::Char('j') | InputKey::Down => {
            state.reader_scroll = state.reader_scroll.saturating_add(1)
        }
        InputKey::Char('k') | InputKey::Up => {
            state.reader_scroll = state.reader_scroll.saturating_sub(1)
        }
        InputKey::Char(' ') | InputKey::PageDown | InputKey::CharCtrl('d') => {
            state.reader_scroll = state.reader_scroll.saturating_add(page)
        }
        InputKey::Char('b') | InputKey::PageUp | InputKey::CharCtrl('u') => {
            state.reader_scroll = state.reader_scroll.saturating_sub(page)
        }
        InputKey::Char('g') | InputKey::Home => state.reader_scroll = 0,
        InputKey::Char('n') => return items::step_reader(state, 1),
        InputKey::Char('p') => return items::step_reader(state, -1),
        _ => {}
    }
    UpdateResult::none()
}
