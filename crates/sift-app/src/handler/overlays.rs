//! Source manager and help overlays

use sift_client::SourceOp;

use crate::command_line::CommandLineState;
use crate::input_key::InputKey;
use crate::overlay::{HelpState, Overlay, SourceManagerMode, SourceManagerState};
use crate::state::AppState;

use super::{update::close_overlay, UpdateAction, UpdateResult};

/// Open the `:` prompt. Refused while another overlay is open.
pub(crate) fn open_command_line(state: &mut AppState) -> UpdateResult {
    if state.overlay.is_none() {
        state.overlay = Overlay::CommandLine(CommandLineState::default());
    }
    UpdateResult::none()
}

pub(crate) fn open_help(state: &mut AppState) -> UpdateResult {
    if !state.overlay.is_command_line() {
        state.overlay = Overlay::Help(HelpState::default());
    }
    UpdateResult::none()
}

/// Open the source manager and refresh its list
pub(crate) fn open_source_manager(state: &mut AppState) -> UpdateResult {
    if state.overlay.is_command_line() {
        return UpdateResult::none();
    }
    let mut sm = SourceManagerState::default();
    sm.selected = state.source_cursor.min(state.sources.len().saturating_sub(1));
    state.overlay = Overlay::SourceManager(sm);
    UpdateResult::action(UpdateAction::LoadSources)
}

pub(crate) fn handle_help_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    let Overlay::Help(help) = &mut state.overlay else {
        return UpdateResult::none();
    };

    match key {
        InputKey::Esc | InputKey::Char('q' | '?') => return close_overlay(state),
        InputKey::CharCtrl('c') => state.request_quit(),
        InputKey::Char('j') | InputKey::Down => help.scroll = help.scroll.saturating_add(1),
        InputKey::Char('k') | InputKey::Up => help.scroll = help.scroll.saturating_sub(1),
        InputKey::Char('g') | InputKey::Home => help.scroll = 0,
        _ => {}
    }
    UpdateResult::none()
}

pub(crate) fn handle_source_manager_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    if key.is_interrupt() {
        state.request_quit();
        return UpdateResult::none();
    }

    let Overlay::SourceManager(sm) = &mut state.overlay else {
        return UpdateResult::none();
    };

    match &mut sm.mode {
        SourceManagerMode::Browse => {}
        SourceManagerMode::ConfirmRemove(id) => {
            let id = id.clone();
            sm.mode = SourceManagerMode::Browse;
            if key != InputKey::Char('y') {
                return UpdateResult::action(state.info("Removal cancelled"));
            }
            // The list may have been reloaded since `d`
            if !state.sources.iter().any(|s| s.id == id) {
                return UpdateResult::action(
                    state.warning("Source no longer listed; removal cancelled"),
                );
            }
            return UpdateResult::action(UpdateAction::SourceOp {
                op: SourceOp::Remove { id },
            });
        }
        SourceManagerMode::AddUrl(url) => {
            match key {
                InputKey::Char(c) => url.push(c),
                InputKey::Backspace => {
                    url.pop();
                }
                InputKey::Enter => {
                    let url = url.trim().to_string();
                    sm.mode = SourceManagerMode::Browse;
                    if !url.is_empty() {
                        return UpdateResult::action(UpdateAction::SourceOp {
                            op: SourceOp::Add { url, name: None },
                        });
                    }
                }
                InputKey::Esc => sm.mode = SourceManagerMode::Browse,
                _ => {}
            }
            return UpdateResult::none();
        }
    }

    let len = state.sources.len();
    match key {
        InputKey::Esc | InputKey::Char('q') => return close_overlay(state),
        InputKey::Char('j') | InputKey::Down => sm.select_next(len),
        InputKey::Char('k') | InputKey::Up => sm.select_previous(),
        InputKey::Char('g') | InputKey::Home => sm.selected = 0,
        InputKey::Char('G') | InputKey::End => sm.selected = len.saturating_sub(1),
        InputKey::Char('d') => {
            if let Some(source) = state.sources.get(sm.selected) {
                sm.mode = SourceManagerMode::ConfirmRemove(source.id.clone());
            }
        }
        InputKey::Char('a') => sm.mode = SourceManagerMode::AddUrl(String::new()),
        InputKey::Char('R') => return UpdateResult::action(UpdateAction::LoadSources),
        InputKey::Char('p' | ' ') => {
            if let Some(source) = state.sources.get(sm.selected) {
                let id = source.id.clone();
                let op = if source.active {
                    SourceOp::Pause { id }
                } else {
                    SourceOp::Resume { id }
                };
                return UpdateResult::action(UpdateAction::SourceOp { op });
            }
        }
        _ => {}
    }
    UpdateResult::none()
}

/// Pasted text goes into the source manager's URL input
pub(crate) fn paste_into_source_manager(state: &mut AppState, text: &str) {
    if let Overlay::SourceManager(SourceManagerState {
        mode: SourceManagerMode::AddUrl(url),
        ..
    }) = &mut state.overlay
    {
        url.extend(text.chars().filter(|c| !c.is_control()));
    }
}
