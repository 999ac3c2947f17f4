//! `:` prompt at the bottom of the screen

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use sift_app::command_line::CommandLineState;

use crate::theme::styles;

pub struct CommandLine<'a> {
    state: &'a CommandLineState,
}

impl<'a> CommandLine<'a> {
    pub fn new(state: &'a CommandLineState) -> Self {
        Self { state }
    }
}

impl Widget for CommandLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(":", styles::accent()),
            Span::styled(self.state.input.clone(), styles::text_primary()),
            Span::styled("█", styles::accent()),
        ];

        if let Some(completion) = &self.state.completion {
            if completion.candidates.len() > 1 {
                spans.push(Span::raw("  "));
                for (i, candidate) in completion.candidates.iter().enumerate() {
                    let style = if i == completion.index {
                        styles::focused_selected()
                    } else {
                        styles::text_muted()
                    };
                    spans.push(Span::styled(candidate.clone(), style));
                    spans.push(Span::raw(" "));
                }
            }
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
