//! Verb registry with exact and unambiguous-prefix resolution

use std::collections::BTreeMap;

use thiserror::Error;

/// Failure to map a typed verb onto a registered command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Unknown command: {name}")]
    NotFound { name: String },

    #[error("Ambiguous command '{name}': {}", .candidates.join(", "))]
    Ambiguous {
        name: String,
        candidates: Vec<String>,
    },
}

/// A registered command
#[derive(Debug, Clone)]
pub struct CommandSpec<H> {
    pub verb: String,
    pub handler: H,
    /// Argument synopsis, e.g. `<source> <name...>`
    pub usage: &'static str,
    pub description: &'static str,
}

impl<H> CommandSpec<H> {
    /// Full usage line, e.g. `rename <source> <name...>`
    pub fn usage_line(&self) -> String {
        if self.usage.is_empty() {
            self.verb.clone()
        } else {
            format!("{} {}", self.verb, self.usage)
        }
    }
}

/// Command table. Populated once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct CommandRegistry<H> {
    commands: BTreeMap<String, CommandSpec<H>>,
}

impl<H> Default for CommandRegistry<H> {
    fn default() -> Self {
        Self {
            commands: BTreeMap::new(),
        }
    }
}

impl<H> CommandRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `verb`, replacing any existing command of the same name
    pub fn register(
        &mut self,
        verb: &str,
        usage: &'static str,
        description: &'static str,
        handler: H,
    ) {
        self.commands.insert(
            verb.to_string(),
            CommandSpec {
                verb: verb.to_string(),
                handler,
                usage,
                description,
            },
        );
    }

    /// Resolve `name` to a command.
    ///
    /// An exact match always wins, even when it also prefixes other verbs.
    /// Otherwise the case-insensitive prefix matches must be unique.
    pub fn resolve(&self, name: &str) -> Result<&CommandSpec<H>, ResolveError> {
        if let Some(spec) = self.commands.get(name) {
            return Ok(spec);
        }

        let mut matches = self.matching(name);
        match matches.len() {
            0 => Err(ResolveError::NotFound {
                name: name.to_string(),
            }),
            1 => Ok(matches.remove(0)),
            _ => Err(ResolveError::Ambiguous {
                name: name.to_string(),
                candidates: matches.into_iter().map(|s| s.verb.clone()).collect(),
            }),
        }
    }

    /// Verbs starting with `prefix` (case-insensitive), sorted
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        self.matching(prefix)
            .into_iter()
            .map(|s| s.verb.clone())
            .collect()
    }

    /// All registered verbs, sorted
    pub fn list_verbs(&self) -> Vec<&str> {
        self.commands.keys().map(String::as_str).collect()
    }

    /// All commands in verb order
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec<H>> {
        self.commands.values()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn matching(&self, prefix: &str) -> Vec<&CommandSpec<H>> {
        let prefix = prefix.to_lowercase();
        // BTreeMap iteration keeps the result sorted
        self.commands
            .values()
            .filter(|spec| spec.verb.to_lowercase().starts_with(&prefix))
            .collect()
    }
}
