//! Modal overlays.
//!
//! At most one overlay is open at a time; its payload holds the overlay's
//! own sub-state so closing it discards that state with it.

use sift_core::SourceId;

use crate::command_line::CommandLineState;

/// The active overlay
#[derive(Debug, Clone, Default)]
pub enum Overlay {
    #[default]
    None,
    SourceManager(SourceManagerState),
    Help(HelpState),
    CommandLine(CommandLineState),
}

impl Overlay {
    pub fn is_none(&self) -> bool {
        matches!(self, Overlay::None)
    }

    pub fn is_command_line(&self) -> bool {
        matches!(self, Overlay::CommandLine(_))
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Overlay::None => "none",
            Overlay::SourceManager(_) => "sources",
            Overlay::Help(_) => "help",
            Overlay::CommandLine(_) => "command",
        }
    }
}

/// Sub-mode of the source manager
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SourceManagerMode {
    #[default]
    Browse,
    /// `d` pressed on this source; `y` confirms its removal
    ConfirmRemove(SourceId),
    /// Typing the URL of a new source
    AddUrl(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceManagerState {
    pub selected: usize,
    pub mode: SourceManagerMode,
}

impl SourceManagerState {
    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpState {
    pub scroll: u16,
}
