//! `:` commands: tokenizer, verb registry and built-in command handlers

pub mod builtin;
pub mod registry;
pub mod tokenizer;

pub use registry::{CommandRegistry, CommandSpec, ResolveError};
pub use tokenizer::tokenize;

use crate::handler::UpdateResult;
use crate::state::AppState;

/// A parsed command line, as handed to a command handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Resolved verb
    pub verb: String,
    pub args: Vec<String>,
    /// The verb was typed with a trailing `!`
    pub force: bool,
}

impl Invocation {
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// Arguments from `start` joined with single spaces
    pub fn rest(&self, start: usize) -> Option<String> {
        let rest = self.args.get(start..)?;
        (!rest.is_empty()).then(|| rest.join(" "))
    }
}

/// Signature of every command handler
pub type CommandFn = fn(&mut AppState, &Invocation) -> UpdateResult;

/// Split a typed verb into its name and force flag (`prune!`)
pub fn split_force(verb: &str) -> (&str, bool) {
    match verb.strip_suffix('!') {
        Some(name) if !name.is_empty() => (name, true),
        _ => (verb, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_force() {
        assert_eq!(split_force("prune!"), ("prune", true));
        assert_eq!(split_force("prune"), ("prune", false));
        assert_eq!(split_force("!"), ("!", false));
    }

    #[test]
    fn test_invocation_rest() {
        let inv = Invocation {
            verb: "rename".to_string(),
            args: vec!["3".to_string(), "Tech".to_string(), "News".to_string()],
            force: false,
        };
        assert_eq!(inv.arg(0), Some("3"));
        assert_eq!(inv.rest(1).as_deref(), Some("Tech News"));
        assert_eq!(inv.rest(3), None);
        assert_eq!(inv.rest(9), None);
    }
}
