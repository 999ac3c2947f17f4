//! Bottom status line: prune prompt, status message or key hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use sift_app::state::ViewMode;
use sift_app::AppState;

use crate::theme::{palette, styles};

const LIST_HINTS: &[(&str, &str)] = &[
    (":", "command"),
    ("?", "help"),
    ("S", "sources"),
    ("r", "refresh"),
    ("m", "read"),
    ("o", "open"),
    ("q", "quit"),
];

const READER_HINTS: &[(&str, &str)] = &[
    ("j/k", "scroll"),
    ("n/p", "next/prev"),
    ("o", "open"),
    ("y", "yank url"),
    ("esc", "back"),
];

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> Line<'static> {
        let hints = match self.state.view_mode {
            ViewMode::List => LIST_HINTS,
            ViewMode::Reader => READER_HINTS,
        };
        let mut spans = Vec::with_capacity(hints.len() * 2);
        for (key, label) in hints {
            spans.push(Span::styled(format!(" {}", key), styles::keybinding()));
            spans.push(Span::styled(format!(" {} ", label), styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if let Some(pending) = self.state.prune.pending_confirmation() {
            Line::from(Span::styled(
                format!(" {}", pending.prompt()),
                Style::default()
                    .fg(palette::STATUS_YELLOW)
                    .add_modifier(Modifier::BOLD),
            ))
        } else if let Some(status) = &self.state.status {
            Line::from(Span::styled(
                format!(" {}", status.text),
                styles::status(status.level),
            ))
        } else {
            self.hints()
        };
        Paragraph::new(line).render(area, buf);
    }
}
