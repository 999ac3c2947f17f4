//! Command line input state: editing, verb completion and history

use std::collections::VecDeque;

/// Default number of remembered command lines
pub const DEFAULT_HISTORY_SIZE: usize = 100;

/// Executed command lines, oldest first
#[derive(Debug, Clone)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_SIZE)
    }
}

impl CommandHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record `line`, skipping blanks and consecutive duplicates
    pub fn push(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() || self.entries.back().map(String::as_str) == Some(line) {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(line.to_string());
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Tab completion cycle over candidate verbs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub candidates: Vec<String>,
    pub index: usize,
}

/// The `:` prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLineState {
    pub input: String,
    /// Position in history while browsing with Up/Down
    pub history_index: Option<usize>,
    /// Input typed before history browsing started
    pub draft: String,
    pub completion: Option<Completion>,
}

impl CommandLineState {
    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
        self.edited();
    }

    /// Insert pasted text with line breaks removed
    pub fn insert_str(&mut self, text: &str) {
        self.input
            .extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
        self.edited();
    }

    pub fn backspace(&mut self) {
        self.input.pop();
        self.edited();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.edited();
    }

    /// Complete the verb being typed.
    ///
    /// `candidates` are the sorted verbs matching the current input. A
    /// single candidate completes to `verb `; several are cycled through on
    /// repeated presses until the input is edited.
    pub fn complete(&mut self, candidates: impl FnOnce(&str) -> Vec<String>) {
        if let Some(completion) = &mut self.completion {
            completion.index = (completion.index + 1) % completion.candidates.len();
            self.input = completion.candidates[completion.index].clone();
            return;
        }

        // Only the verb is completed
        if self.input.contains(char::is_whitespace) {
            return;
        }

        let mut found = candidates(&self.input);
        match found.len() {
            0 => {}
            1 => {
                self.input = format!("{} ", found.remove(0));
            }
            _ => {
                self.input = found[0].clone();
                self.completion = Some(Completion {
                    candidates: found,
                    index: 0,
                });
            }
        }
    }

    /// Step back to an older history entry
    pub fn history_prev(&mut self, history: &CommandHistory) {
        if history.is_empty() {
            return;
        }
        let index = match self.history_index {
            None => {
                self.draft = self.input.clone();
                history.len() - 1
            }
            Some(i) => i.saturating_sub(1),
        };
        self.show_history(history, index);
    }

    /// Step forward; moving past the newest entry restores the draft
    pub fn history_next(&mut self, history: &CommandHistory) {
        let Some(i) = self.history_index else {
            return;
        };
        if i + 1 < history.len() {
            self.show_history(history, i + 1);
        } else {
            self.history_index = None;
            self.input = std::mem::take(&mut self.draft);
            self.completion = None;
        }
    }

    fn show_history(&mut self, history: &CommandHistory, index: usize) {
        if let Some(entry) = history.get(index) {
            self.history_index = Some(index);
            self.input = entry.to_string();
            self.completion = None;
        }
    }

    fn edited(&mut self) {
        self.completion = None;
        self.history_index = None;
    }
}
