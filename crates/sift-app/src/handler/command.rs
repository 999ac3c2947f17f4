//! Command line editing and execution

use tracing::debug;

use crate::commands::{split_force, tokenize, Invocation};
use crate::input_key::InputKey;
use crate::overlay::Overlay;
use crate::state::AppState;

use super::{overlays, UpdateResult};

pub(crate) fn handle_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    let Overlay::CommandLine(cl) = &mut state.overlay else {
        return UpdateResult::none();
    };

    match key {
        InputKey::Esc | InputKey::CharCtrl('c') => state.overlay = Overlay::None,
        InputKey::Enter => {
            let line = std::mem::take(&mut cl.input);
            state.overlay = Overlay::None;
            return execute_line(state, &line);
        }
        InputKey::Backspace if cl.input.is_empty() => state.overlay = Overlay::None,
        InputKey::Backspace => cl.backspace(),
        InputKey::CharCtrl('u') => cl.clear(),
        InputKey::Tab => {
            let commands = &state.commands;
            cl.complete(|prefix| commands.complete(prefix));
        }
        InputKey::Up => cl.history_prev(&state.history),
        InputKey::Down => cl.history_next(&state.history),
        InputKey::Char(c) => cl.insert_char(c),
        _ => {}
    }
    UpdateResult::none()
}

/// Route pasted text to whichever input is open
pub(crate) fn handle_paste(state: &mut AppState, text: &str) -> UpdateResult {
    if let Overlay::CommandLine(cl) = &mut state.overlay {
        cl.insert_str(text);
    } else {
        overlays::paste_into_source_manager(state, text);
    }
    UpdateResult::none()
}

/// Tokenize, resolve and run a command line
pub(crate) fn execute_line(state: &mut AppState, line: &str) -> UpdateResult {
    state.history.push(line);

    let mut tokens = tokenize(line).into_iter();
    let Some(typed) = tokens.next() else {
        return UpdateResult::none();
    };
    let (name, force) = split_force(&typed);

    let (verb, handler) = match state.commands.resolve(name) {
        Ok(spec) => (spec.verb.clone(), spec.handler),
        Err(e) => {
            debug!("Command resolution failed: {:?}", e);
            return UpdateResult::action(state.error(e.to_string()));
        }
    };

    debug!("Executing :{} (force={})", verb, force);
    let invocation = Invocation {
        verb,
        args: tokens.collect(),
        force,
    };
    handler(state, &invocation)
}
