//! Prune workflow transitions

use tracing::{info, warn};

use crate::input_key::InputKey;
use crate::prune::{PendingConfirmation, PruneWorkflow};
use crate::refresh::RefreshKind;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// `:prune [age]`, or `:prune! [age]` when `force` is set
pub(crate) fn start_prune(state: &mut AppState, age_days: Option<u32>, force: bool) -> UpdateResult {
    if state.prune.is_busy() {
        return UpdateResult::action(state.warning("Prune already in progress"));
    }

    if force {
        info!("Forced prune (age {:?})", age_days);
        state.prune = PruneWorkflow::Executing { age_days };
        return UpdateResult::action(UpdateAction::ExecutePrune { age_days });
    }

    state.prune = PruneWorkflow::Counting { age_days };
    UpdateResult::action(UpdateAction::CountPrune { age_days })
}

pub(crate) fn handle_counted(state: &mut AppState, count: usize, age_days: Option<u32>) -> UpdateResult {
    if !matches!(state.prune, PruneWorkflow::Counting { .. }) {
        return UpdateResult::none();
    }

    if count == 0 {
        state.prune = PruneWorkflow::Idle;
        return UpdateResult::action(state.info("Nothing to prune"));
    }

    state.prune = PruneWorkflow::AwaitingConfirmation(PendingConfirmation {
        item_count: count,
        age_days,
    });
    UpdateResult::none()
}

pub(crate) fn handle_count_failed(state: &mut AppState, error: &str) -> UpdateResult {
    warn!("Prune count failed: {}", error);
    state.prune = PruneWorkflow::Idle;
    UpdateResult::action(state.error(format!("Prune failed: {}", error)))
}

/// y/n while a prune awaits confirmation; every other key is ignored
pub(crate) fn handle_confirmation_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    let Some(pending) = state.prune.pending_confirmation().copied() else {
        return UpdateResult::none();
    };

    match key {
        InputKey::Char('y' | 'Y') => {
            info!("Prune confirmed: {} items", pending.item_count);
            state.prune = PruneWorkflow::Executing {
                age_days: pending.age_days,
            };
            UpdateResult::action(UpdateAction::ExecutePrune {
                age_days: pending.age_days,
            })
        }
        InputKey::Char('n' | 'N') | InputKey::Esc => {
            state.prune = PruneWorkflow::Idle;
            UpdateResult::action(state.info("Prune cancelled"))
        }
        _ => UpdateResult::none(),
    }
}

pub(crate) fn handle_completed(state: &mut AppState, deleted: usize) -> UpdateResult {
    state.prune = PruneWorkflow::Idle;
    let notice = state.success(format!(
        "Pruned {} {}",
        deleted,
        if deleted == 1 { "item" } else { "items" }
    ));
    UpdateResult::action(notice).with_optional(state.request_reload(RefreshKind::AfterChange))
}

pub(crate) fn handle_failed(state: &mut AppState, error: &str) -> UpdateResult {
    warn!("Prune failed: {}", error);
    state.prune = PruneWorkflow::Idle;
    let notice = state.error(format!("Prune failed: {}", error));
    UpdateResult::action(notice).with_optional(state.request_reload(RefreshKind::AfterChange))
}
