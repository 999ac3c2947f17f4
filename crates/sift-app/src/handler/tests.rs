//! Tests for handler module

use std::time::Duration;

use sift_client::test_utils::{test_item, test_items, test_source};
use sift_client::{ContentPage, ItemChange, SourceOp};
use sift_core::{ItemId, SourceId, SourceType};

use super::*;
use crate::filter::PriorityFilter;
use crate::input_key::InputKey;
use crate::overlay::{Overlay, SourceManagerMode};
use crate::prune::{PendingConfirmation, PruneWorkflow};
use crate::state::{AppState, Focus, ViewMode};
use crate::status::StatusLevel;

fn state_with(ids: &[&str]) -> AppState {
    let mut state = AppState::new();
    state.items = test_items(ids);
    state
}

fn press(state: &mut AppState, key: InputKey) -> UpdateResult {
    update(state, Message::Key(key))
}

fn press_char(state: &mut AppState, c: char) -> UpdateResult {
    press(state, InputKey::Char(c))
}

/// Open the command line, type `line` and press Enter
fn run_command(state: &mut AppState, line: &str) -> UpdateResult {
    press_char(state, ':');
    assert!(state.overlay.is_command_line());
    for c in line.chars() {
        press_char(state, c);
    }
    press(state, InputKey::Enter)
}

fn loaded(ids: &[&str], kind: RefreshKind, anchor: Option<&str>) -> Message {
    Message::ContentLoaded {
        page: ContentPage {
            items: test_items(ids),
            hidden_count: 0,
        },
        kind,
        anchor: anchor.map(ItemId::new),
    }
}

fn status_text(state: &AppState) -> &str {
    state.status.as_ref().map(|s| s.text.as_str()).unwrap_or("")
}

fn count_loads(result: &UpdateResult) -> usize {
    result
        .actions
        .iter()
        .filter(|a| matches!(a, UpdateAction::LoadContent { .. }))
        .count()
}

// ─────────────────────────────────────────────────────────
// Confirmation workflow
// ─────────────────────────────────────────────────────────

#[test]
fn test_prune_count_then_confirm_yes() {
    let mut state = state_with(&["a"]);

    let result = run_command(&mut state, "prune 30");
    assert_eq!(
        result.actions,
        vec![UpdateAction::CountPrune { age_days: Some(30) }]
    );
    assert_eq!(state.prune, PruneWorkflow::Counting { age_days: Some(30) });

    update(
        &mut state,
        Message::PruneCounted {
            count: 5,
            age_days: Some(30),
        },
    );
    assert_eq!(
        state.prune.pending_confirmation(),
        Some(&PendingConfirmation {
            item_count: 5,
            age_days: Some(30)
        })
    );

    let result = press_char(&mut state, 'y');
    let executes: Vec<_> = result
        .actions
        .iter()
        .filter(|a| matches!(a, UpdateAction::ExecutePrune { .. }))
        .collect();
    assert_eq!(executes.len(), 1);
    assert_eq!(state.prune, PruneWorkflow::Executing { age_days: Some(30) });
}

#[test]
fn test_prune_cancel_with_n() {
    let mut state = state_with(&["a"]);
    run_command(&mut state, "prune");
    update(
        &mut state,
        Message::PruneCounted {
            count: 5,
            age_days: None,
        },
    );

    let result = press_char(&mut state, 'n');
    assert_eq!(state.prune, PruneWorkflow::Idle);
    assert!(!result
        .actions
        .iter()
        .any(|a| matches!(a, UpdateAction::ExecutePrune { .. })));
    assert_eq!(status_text(&state), "Prune cancelled");
}

#[test]
fn test_prune_confirmation_swallows_other_keys() {
    let mut state = state_with(&["a", "b"]);
    state.prune = PruneWorkflow::AwaitingConfirmation(PendingConfirmation {
        item_count: 3,
        age_days: None,
    });

    for key in [InputKey::Char('j'), InputKey::Char(':'), InputKey::Char('q'), InputKey::Enter] {
        let result = press(&mut state, key);
        assert!(result.actions.is_empty());
    }
    assert_eq!(state.cursor, 0);
    assert!(state.overlay.is_none());
    assert!(!state.should_quit());
    assert!(state.prune.pending_confirmation().is_some());

    press(&mut state, InputKey::Esc);
    assert_eq!(state.prune, PruneWorkflow::Idle);
}

#[test]
fn test_prune_zero_count_short_circuits() {
    let mut state = AppState::new();
    run_command(&mut state, "prune");
    update(
        &mut state,
        Message::PruneCounted {
            count: 0,
            age_days: None,
        },
    );
    assert_eq!(state.prune, PruneWorkflow::Idle);
    assert_eq!(status_text(&state), "Nothing to prune");
}

#[test]
fn test_forced_prune_skips_confirmation() {
    let mut state = AppState::new();
    let result = run_command(&mut state, "prune! 7d");
    assert_eq!(
        result.actions,
        vec![UpdateAction::ExecutePrune { age_days: Some(7) }]
    );
    assert!(state.prune.pending_confirmation().is_none());
}

#[test]
fn test_prune_completion_returns_to_idle_and_reloads() {
    let mut state = AppState::new();
    state.prune = PruneWorkflow::Executing { age_days: None };

    let result = update(&mut state, Message::PruneCompleted { deleted: 4 });
    assert_eq!(state.prune, PruneWorkflow::Idle);
    assert_eq!(count_loads(&result), 1);
    assert_eq!(status_text(&state), "Pruned 4 items");
}

#[test]
fn test_prune_rejected_while_busy() {
    let mut state = AppState::new();
    state.prune = PruneWorkflow::Counting { age_days: None };
    let result = run_command(&mut state, "prune");
    assert!(!result
        .actions
        .iter()
        .any(|a| matches!(a, UpdateAction::CountPrune { .. })));
    assert_eq!(status_text(&state), "Prune already in progress");
}

#[test]
fn test_prune_bad_age_is_an_error() {
    let mut state = AppState::new();
    run_command(&mut state, "prune soon");
    assert_eq!(state.prune, PruneWorkflow::Idle);
    assert!(state.status.as_ref().unwrap().is_error());
}

// ─────────────────────────────────────────────────────────
// Auto-refresh
// ─────────────────────────────────────────────────────────

#[test]
fn test_auto_refresh_never_double_fires() {
    let mut state = state_with(&["a"]);
    state.refresh_interval_secs = 60;
    state.loading = true; // slow refresh in flight

    let first = update(&mut state, Message::AutoRefreshFired);
    let second = update(&mut state, Message::AutoRefreshFired);

    let loads = count_loads(&first) + count_loads(&second);
    let schedules = first
        .actions
        .iter()
        .chain(second.actions.iter())
        .filter(|a| {
            matches!(a, UpdateAction::ScheduleAutoRefresh { after } if *after == Duration::from_secs(60))
        })
        .count();

    assert_eq!(loads, 0);
    assert_eq!(schedules, 2);
    assert!(!state.reload_pending);
}

#[test]
fn test_auto_refresh_two_ticks_one_refresh() {
    let mut state = state_with(&["a"]);
    state.refresh_interval_secs = 60;

    let first = update(&mut state, Message::AutoRefreshFired);
    let second = update(&mut state, Message::AutoRefreshFired);

    assert_eq!(count_loads(&first) + count_loads(&second), 1);
    assert_eq!(first.actions.len() + second.actions.len(), 3);
}

#[test]
fn test_auto_refresh_captures_anchor() {
    let mut state = state_with(&["a", "b", "c"]);
    state.refresh_interval_secs = 60;
    state.cursor = 2;

    let result = update(&mut state, Message::AutoRefreshFired);
    assert!(result.actions.iter().any(|a| matches!(
        a,
        UpdateAction::LoadContent { kind: RefreshKind::Auto, anchor: Some(id), .. } if id.as_str() == "c"
    )));
}

#[test]
fn test_auto_refresh_skipped_in_reader_or_overlay() {
    let mut state = state_with(&["a"]);
    state.refresh_interval_secs = 60;

    state.view_mode = ViewMode::Reader;
    let result = update(&mut state, Message::AutoRefreshFired);
    assert_eq!(count_loads(&result), 0);
    assert_eq!(result.actions.len(), 1);

    state.view_mode = ViewMode::List;
    press_char(&mut state, '?');
    let result = update(&mut state, Message::AutoRefreshFired);
    assert_eq!(count_loads(&result), 0);
    assert_eq!(result.actions.len(), 1);
}

#[test]
fn test_auto_refresh_disabled_does_not_reschedule() {
    let mut state = AppState::new();
    state.refresh_interval_secs = 0;
    let result = update(&mut state, Message::AutoRefreshFired);
    assert!(result.actions.is_empty());
}

#[test]
fn test_refresh_relocates_cursor_to_anchor() {
    // [A,B,C] with cursor on C; B disappears
    let mut state = state_with(&["a", "b", "c"]);
    state.cursor = 2;
    state.loading = true;

    update(&mut state, loaded(&["a", "c"], RefreshKind::Auto, Some("c")));
    assert_eq!(state.cursor, 1);
    assert_eq!(state.selected_id(), Some(ItemId::new("c")));
    assert_eq!(status_text(&state), "Auto-refresh: 1 fewer item");
}

#[test]
fn test_refresh_clamps_when_anchor_removed() {
    let mut state = state_with(&["a", "b", "c"]);
    state.cursor = 2;

    update(&mut state, loaded(&["a"], RefreshKind::Manual, Some("c")));
    assert_eq!(state.cursor, 0);
    assert_eq!(status_text(&state), "Refreshed: 2 fewer items");
}

#[test]
fn test_cursor_stays_in_bounds_across_loads() {
    let mut state = AppState::new();
    let sequences: [&[&str]; 5] = [&["a", "b", "c", "d"], &[], &["x"], &["x", "y", "z"], &["q"]];

    for (i, ids) in sequences.iter().enumerate() {
        press_char(&mut state, 'G');
        let anchor = state.selected_id();
        update(
            &mut state,
            Message::ContentLoaded {
                page: ContentPage {
                    items: test_items(ids),
                    hidden_count: 0,
                },
                kind: if i % 2 == 0 { RefreshKind::Filter } else { RefreshKind::Auto },
                anchor,
            },
        );
        if state.items.is_empty() {
            assert_eq!(state.cursor, 0);
        } else {
            assert!(state.cursor < state.items.len());
        }
    }
}

// ─────────────────────────────────────────────────────────
// Loading & filters
// ─────────────────────────────────────────────────────────

#[test]
fn test_filter_change_during_load_is_coalesced() {
    let mut state = state_with(&["a"]);
    state.loading = true;

    let result = press_char(&mut state, 'f');
    assert!(result.actions.is_empty());
    assert!(state.reload_pending);
    assert_eq!(state.filters.priority, PriorityFilter::High);

    let result = update(&mut state, loaded(&["a"], RefreshKind::Manual, None));
    assert!(!state.reload_pending);
    assert!(state.loading);
    match result.actions.iter().find(|a| matches!(a, UpdateAction::LoadContent { .. })) {
        Some(UpdateAction::LoadContent { query, .. }) => {
            assert_eq!(query.priority, Some(sift_core::Priority::High));
        }
        other => panic!("expected reissued load, got {:?}", other),
    }
}

#[test]
fn test_load_failure_resets_loading() {
    let mut state = AppState::new();
    state.loading = true;
    update(
        &mut state,
        Message::ContentLoadFailed {
            kind: RefreshKind::Manual,
            error: "Cannot reach daemon".to_string(),
            malformed: false,
        },
    );
    assert!(!state.loading);
    assert_eq!(state.status.as_ref().unwrap().level, StatusLevel::Error);
}

#[test]
fn test_transport_failure_keeps_previous_items() {
    let mut state = state_with(&["a", "b"]);
    state.loading = true;
    update(
        &mut state,
        Message::ContentLoadFailed {
            kind: RefreshKind::Auto,
            error: "Cannot reach daemon".to_string(),
            malformed: false,
        },
    );
    assert_eq!(state.items.len(), 2);
}

#[test]
fn test_malformed_response_degrades_to_empty_list() {
    let mut state = state_with(&["a", "b", "c"]);
    state.cursor = 2;
    state.hidden_count = 4;
    state.loading = true;
    update(
        &mut state,
        Message::ContentLoadFailed {
            kind: RefreshKind::Manual,
            error: "Malformed response: missing field `items`".to_string(),
            malformed: true,
        },
    );
    assert!(!state.loading);
    assert!(state.items.is_empty());
    assert_eq!(state.cursor, 0);
    assert_eq!(state.hidden_count, 0);
    assert!(status_text(&state).contains("missing field"));
    assert_eq!(state.status.as_ref().unwrap().level, StatusLevel::Error);
}

#[test]
fn test_filter_keys_trigger_reload() {
    let mut state = AppState::new();
    for c in ['a', 't', 's', 'U'] {
        state.loading = false;
        let result = press_char(&mut state, c);
        assert_eq!(count_loads(&result), 1, "key {:?}", c);
    }
    assert!(state.filters.show_all);
    assert_eq!(state.filters.source_type, Some(SourceType::Rss));
    assert!(state.filters.show_unprioritized);
}

#[test]
fn test_filter_commands() {
    let mut state = AppState::new();
    run_command(&mut state, "priority low");
    assert_eq!(state.filters.priority, PriorityFilter::Low);

    state.loading = false;
    run_command(&mut state, "type youtube");
    assert_eq!(state.filters.source_type, Some(SourceType::Youtube));

    state.loading = false;
    run_command(&mut state, "show all");
    assert!(state.filters.show_all);

    state.loading = false;
    run_command(&mut state, "sort oldest");
    assert_eq!(state.filters.sort, sift_core::SortDirection::Oldest);

    run_command(&mut state, "priority urgent");
    assert_eq!(status_text(&state), "Usage: priority all|high|medium|low");
}

// ─────────────────────────────────────────────────────────
// Command line
// ─────────────────────────────────────────────────────────

#[test]
fn test_ambiguous_prefix_reports_candidates() {
    let mut state = state_with(&["a"]);
    let result = run_command(&mut state, "p");
    assert!(state.overlay.is_none());
    assert_eq!(
        status_text(&state),
        "Ambiguous command 'p': pattern, pause, priority, prune"
    );
    assert!(result
        .actions
        .iter()
        .all(|a| matches!(a, UpdateAction::ExpireStatus { .. })));
}

#[test]
fn test_unknown_command() {
    let mut state = AppState::new();
    run_command(&mut state, "frobnicate");
    assert_eq!(status_text(&state), "Unknown command: frobnicate");
}

#[test]
fn test_prefix_command_executes() {
    let mut state = AppState::new();
    run_command(&mut state, "q");
    assert!(state.should_quit());
}

#[test]
fn test_command_line_escape_and_backspace_cancel() {
    let mut state = AppState::new();
    press_char(&mut state, ':');
    press_char(&mut state, 'x');
    press(&mut state, InputKey::Esc);
    assert!(state.overlay.is_none());

    press_char(&mut state, ':');
    press(&mut state, InputKey::Backspace);
    assert!(state.overlay.is_none());

    press_char(&mut state, ':');
    press(&mut state, InputKey::CharCtrl('c'));
    assert!(state.overlay.is_none());
    assert!(!state.should_quit());
}

#[test]
fn test_command_line_swallows_normal_keys() {
    let mut state = state_with(&["a", "b"]);
    press_char(&mut state, ':');
    press_char(&mut state, 'j');
    press_char(&mut state, '?');
    assert_eq!(state.cursor, 0);
    match &state.overlay {
        Overlay::CommandLine(cl) => assert_eq!(cl.input, "j?"),
        other => panic!("unexpected overlay {:?}", other),
    }
}

#[test]
fn test_tab_completion_and_history() {
    let mut state = AppState::new();
    run_command(&mut state, "help");
    press(&mut state, InputKey::Esc);

    press_char(&mut state, ':');
    press_char(&mut state, 'r');
    press_char(&mut state, 'e');
    press(&mut state, InputKey::Tab);
    match &state.overlay {
        Overlay::CommandLine(cl) => assert_eq!(cl.input, "refresh"),
        other => panic!("unexpected overlay {:?}", other),
    }
    press(&mut state, InputKey::Tab);
    match &state.overlay {
        Overlay::CommandLine(cl) => assert_eq!(cl.input, "remove"),
        other => panic!("unexpected overlay {:?}", other),
    }

    press(&mut state, InputKey::CharCtrl('u'));
    press(&mut state, InputKey::Up);
    match &state.overlay {
        Overlay::CommandLine(cl) => assert_eq!(cl.input, "help"),
        other => panic!("unexpected overlay {:?}", other),
    }
}

#[test]
fn test_paste_into_command_line() {
    let mut state = AppState::new();
    press_char(&mut state, ':');
    update(&mut state, Message::Paste("add https://x.dev/feed\n".to_string()));
    let result = press(&mut state, InputKey::Enter);
    assert!(result.actions.iter().any(|a| matches!(
        a,
        UpdateAction::SourceOp { op: SourceOp::Add { url, name: None } } if url == "https://x.dev/feed"
    )));
}

#[test]
fn test_empty_command_line_just_closes() {
    let mut state = AppState::new();
    press_char(&mut state, ':');
    let result = press(&mut state, InputKey::Enter);
    assert!(state.overlay.is_none());
    assert!(result.actions.is_empty());
    assert!(state.status.is_none());
}

// ─────────────────────────────────────────────────────────
// Item commands
// ─────────────────────────────────────────────────────────

#[test]
fn test_item_commands_need_an_item() {
    let mut state = AppState::new();
    for line in ["mark", "favorite", "open", "yank", "copy", "pattern summarize"] {
        let result = run_command(&mut state, line);
        assert_eq!(status_text(&state), "No item selected", "command {}", line);
        assert!(result
            .actions
            .iter()
            .all(|a| matches!(a, UpdateAction::ExpireStatus { .. })));
    }
}

#[test]
fn test_mark_toggles_and_sets() {
    let mut state = state_with(&["a"]);
    let result = press_char(&mut state, 'm');
    assert_eq!(
        result.actions,
        vec![UpdateAction::MutateItem {
            item_id: ItemId::new("a"),
            change: ItemChange::Read(true),
            silent: false,
        }]
    );

    let result = run_command(&mut state, "mark unread");
    assert!(result.actions.contains(&UpdateAction::MutateItem {
        item_id: ItemId::new("a"),
        change: ItemChange::Read(false),
        silent: false,
    }));
}

#[test]
fn test_mutation_correlates_by_id_after_reload() {
    let mut state = state_with(&["a", "b", "c"]);
    // Reload reorders items while the mutation is in flight
    state.set_items(test_items(&["c", "a"]), None);

    update(
        &mut state,
        Message::ItemMutated {
            item_id: ItemId::new("a"),
            change: ItemChange::Favorite(true),
            silent: false,
        },
    );
    assert!(state.items[1].favorited);
    assert!(!state.items[0].favorited);
    assert_eq!(status_text(&state), "Added to favorites");

    // Item gone entirely: no panic, state unchanged
    update(
        &mut state,
        Message::ItemMutated {
            item_id: ItemId::new("b"),
            change: ItemChange::Read(true),
            silent: true,
        },
    );
    assert_eq!(state.items.len(), 2);
}

#[test]
fn test_pattern_then_copy_output() {
    let mut state = state_with(&["a"]);
    let result = run_command(&mut state, "pattern summarize");
    assert!(result.actions.iter().any(|a| matches!(
        a,
        UpdateAction::RunTool { pattern, item_id, .. } if pattern == "summarize" && item_id.as_str() == "a"
    )));

    let result = update(
        &mut state,
        Message::ToolCompleted {
            pattern: "summarize".to_string(),
            item_id: ItemId::new("a"),
            output: "short".to_string(),
        },
    );
    assert_eq!(
        result.actions,
        vec![UpdateAction::CopyToClipboard {
            text: "short".to_string(),
            label: "'summarize' output".to_string(),
        }]
    );
}

#[test]
fn test_copy_uses_body_text() {
    let mut state = AppState::new();
    let mut item = test_item("a", "Title");
    item.content = Some("Full body".to_string());
    state.items = vec![item];

    let result = press_char(&mut state, 'c');
    assert_eq!(
        result.actions,
        vec![UpdateAction::CopyToClipboard {
            text: "Full body".to_string(),
            label: "content".to_string(),
        }]
    );
}

// ─────────────────────────────────────────────────────────
// Sources
// ─────────────────────────────────────────────────────────

#[test]
fn test_source_commands_resolve_by_name() {
    let mut state = AppState::new();
    state.sources = vec![test_source("7", "Hacker News")];

    let result = run_command(&mut state, "pause \"hacker news\"");
    assert!(result.actions.contains(&UpdateAction::SourceOp {
        op: SourceOp::Pause {
            id: SourceId::new("7")
        }
    }));

    let result = run_command(&mut state, "rename 7 Tech News");
    assert!(result.actions.contains(&UpdateAction::SourceOp {
        op: SourceOp::Rename {
            id: SourceId::new("7"),
            name: "Tech News".to_string(),
        }
    }));

    run_command(&mut state, "remove lobsters");
    assert_eq!(status_text(&state), "No source matching 'lobsters'");

    run_command(&mut state, "rename 7");
    assert_eq!(status_text(&state), "Usage: rename <source> <name...>");
}

#[test]
fn test_source_op_completion_reloads() {
    let mut state = AppState::new();
    let result = update(
        &mut state,
        Message::SourceOpCompleted {
            op: SourceOp::Remove {
                id: SourceId::new("7"),
            },
            message: String::new(),
        },
    );
    assert!(result.actions.contains(&UpdateAction::LoadSources));
    assert_eq!(count_loads(&result), 1);
    assert_eq!(status_text(&state), "Source remove: 7");
}

#[test]
fn test_source_manager_flow() {
    let mut state = AppState::new();
    state.sources = vec![test_source("1", "One"), test_source("2", "Two")];

    let result = press_char(&mut state, 'S');
    assert!(matches!(state.overlay, Overlay::SourceManager(_)));
    assert_eq!(result.actions, vec![UpdateAction::LoadSources]);

    press_char(&mut state, 'j');
    let result = press_char(&mut state, 'p');
    assert_eq!(
        result.actions,
        vec![UpdateAction::SourceOp {
            op: SourceOp::Pause {
                id: SourceId::new("2")
            }
        }]
    );

    // d then anything but y cancels
    press_char(&mut state, 'd');
    let result = press_char(&mut state, 'x');
    assert!(!result
        .actions
        .iter()
        .any(|a| matches!(a, UpdateAction::SourceOp { .. })));

    press_char(&mut state, 'd');
    let result = press_char(&mut state, 'y');
    assert_eq!(
        result.actions,
        vec![UpdateAction::SourceOp {
            op: SourceOp::Remove {
                id: SourceId::new("2")
            }
        }]
    );

    // Sources shrink; selection is clamped
    update(&mut state, Message::SourcesLoaded(vec![test_source("1", "One")]));
    match &state.overlay {
        Overlay::SourceManager(sm) => assert_eq!(sm.selected, 0),
        other => panic!("unexpected overlay {:?}", other),
    }

    // Closing reloads sources via OverlayClosed
    let result = press(&mut state, InputKey::Esc);
    assert!(state.overlay.is_none());
    assert!(matches!(result.message, Some(Message::OverlayClosed)));
    let result = update(&mut state, Message::OverlayClosed);
    assert_eq!(result.actions, vec![UpdateAction::LoadSources]);
}

#[test]
fn test_confirm_remove_targets_source_chosen_at_prompt() {
    let mut state = AppState::new();
    state.sources = vec![test_source("1", "One"), test_source("2", "Two")];
    press_char(&mut state, 'S');
    press_char(&mut state, 'j');
    press_char(&mut state, 'd');
    match &state.overlay {
        Overlay::SourceManager(sm) => {
            assert_eq!(sm.mode, SourceManagerMode::ConfirmRemove(SourceId::new("2")))
        }
        other => panic!("unexpected overlay {:?}", other),
    }

    // A reload reorders the list while the prompt is open
    update(
        &mut state,
        Message::SourcesLoaded(vec![test_source("2", "Two"), test_source("1", "One")]),
    );

    let result = press_char(&mut state, 'y');
    assert_eq!(
        result.actions,
        vec![UpdateAction::SourceOp {
            op: SourceOp::Remove {
                id: SourceId::new("2")
            }
        }]
    );
}

#[test]
fn test_confirm_remove_cancels_when_source_disappears() {
    let mut state = AppState::new();
    state.sources = vec![test_source("1", "One"), test_source("2", "Two")];
    press_char(&mut state, 'S');
    press_char(&mut state, 'j');
    press_char(&mut state, 'd');

    update(&mut state, Message::SourcesLoaded(vec![test_source("1", "One")]));

    let result = press_char(&mut state, 'y');
    assert!(!result
        .actions
        .iter()
        .any(|a| matches!(a, UpdateAction::SourceOp { .. })));
    assert!(status_text(&state).contains("no longer listed"));
    match &state.overlay {
        Overlay::SourceManager(sm) => assert_eq!(sm.mode, SourceManagerMode::Browse),
        other => panic!("unexpected overlay {:?}", other),
    }
}

#[test]
fn test_source_manager_add_url() {
    let mut state = AppState::new();
    press_char(&mut state, 'S');
    press_char(&mut state, 'a');
    for c in "https://a.io/rss".chars() {
        press_char(&mut state, c);
    }
    match &state.overlay {
        Overlay::SourceManager(sm) => {
            assert_eq!(sm.mode, SourceManagerMode::AddUrl("https://a.io/rss".to_string()))
        }
        other => panic!("unexpected overlay {:?}", other),
    }
    let result = press(&mut state, InputKey::Enter);
    assert_eq!(
        result.actions,
        vec![UpdateAction::SourceOp {
            op: SourceOp::Add {
                url: "https://a.io/rss".to_string(),
                name: None
            }
        }]
    );
    // 'q' typed in browse mode closes again
    press_char(&mut state, 'q');
    assert!(state.overlay.is_none());
    assert!(!state.should_quit());
}

// ─────────────────────────────────────────────────────────
// View / modal state machine
// ─────────────────────────────────────────────────────────

#[test]
fn test_enter_opens_reader_and_marks_read() {
    let mut state = state_with(&["a", "b"]);
    let result = press(&mut state, InputKey::Enter);
    assert_eq!(state.view_mode, ViewMode::Reader);
    assert_eq!(
        result.actions,
        vec![UpdateAction::MutateItem {
            item_id: ItemId::new("a"),
            change: ItemChange::Read(true),
            silent: true,
        }]
    );

    press_char(&mut state, 'n');
    assert_eq!(state.cursor, 1);

    press_char(&mut state, 'q');
    assert_eq!(state.view_mode, ViewMode::List);
    assert!(!state.should_quit());
}

#[test]
fn test_enter_ignored_without_items_or_focus() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Enter);
    assert_eq!(state.view_mode, ViewMode::List);

    let mut state = state_with(&["a"]);
    press(&mut state, InputKey::Tab);
    assert_eq!(state.focus, Focus::SourceList);
    press(&mut state, InputKey::Enter);
    assert_eq!(state.view_mode, ViewMode::List);
}

#[test]
fn test_navigation_follows_focus() {
    let mut state = state_with(&["a", "b", "c"]);
    state.sources = vec![test_source("1", "One"), test_source("2", "Two")];

    press_char(&mut state, 'j');
    assert_eq!(state.cursor, 1);

    press(&mut state, InputKey::Tab);
    press_char(&mut state, 'j');
    press_char(&mut state, 'j');
    assert_eq!(state.source_cursor, 1);
    assert_eq!(state.cursor, 1);
}

#[test]
fn test_help_blocked_while_command_line_open() {
    let mut state = AppState::new();
    press_char(&mut state, ':');
    super::overlays::open_help(&mut state);
    assert!(state.overlay.is_command_line());
}

#[test]
fn test_help_command_and_close() {
    let mut state = AppState::new();
    run_command(&mut state, "help");
    assert!(matches!(state.overlay, Overlay::Help(_)));
    press_char(&mut state, 'j');
    let result = press_char(&mut state, '?');
    assert!(state.overlay.is_none());
    assert!(matches!(result.message, Some(Message::OverlayClosed)));
}

#[test]
fn test_q_quits_from_list_and_ctrl_c_always() {
    let mut state = AppState::new();
    press_char(&mut state, 'q');
    assert!(state.should_quit());

    let mut state = state_with(&["a"]);
    state.view_mode = ViewMode::Reader;
    press(&mut state, InputKey::CharCtrl('c'));
    assert!(state.should_quit());
}

// ─────────────────────────────────────────────────────────
// Status & misc
// ─────────────────────────────────────────────────────────

#[test]
fn test_status_expiry_matches_generation() {
    let mut state = AppState::new();
    let first = state.info("one");
    let UpdateAction::ExpireStatus { generation, .. } = first else {
        panic!("expected expiry action");
    };
    state.info("two");

    update(&mut state, Message::StatusExpired { generation });
    assert_eq!(status_text(&state), "two");
}

#[test]
fn test_resize_and_page_size() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::Resize {
            width: 120,
            height: 40,
        },
    );
    assert_eq!(state.terminal_size, (120, 40));
    assert_eq!(state.page_size(), 36);
}

#[test]
fn test_clipboard_and_browser_results() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::ClipboardCopied {
            label: "URL".to_string(),
        },
    );
    assert_eq!(status_text(&state), "Copied URL to clipboard");

    update(&mut state, Message::BrowserFailed("xdg-open: not found".to_string()));
    assert!(state.status.as_ref().unwrap().is_error());
}
