//! Source list beside the content list

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use sift_app::state::Focus;
use sift_app::AppState;
use sift_core::Source;

use crate::theme::{palette, styles};

pub struct SourcePane<'a> {
    state: &'a AppState,
}

impl<'a> SourcePane<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

/// Status glyph: paused, failing or active
pub(crate) fn source_glyph(source: &Source) -> (char, Style) {
    if !source.active {
        ('○', styles::text_muted())
    } else if source.error_count > 0 {
        ('!', Style::default().fg(palette::STATUS_RED))
    } else {
        ('●', Style::default().fg(palette::STATUS_GREEN))
    }
}

impl Widget for SourcePane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Focus::SourceList;
        let block = styles::glass_block(focused)
            .title(" Sources ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.state.sources.is_empty() {
            Paragraph::new(Span::styled("No sources", styles::text_muted())).render(inner, buf);
            return;
        }

        let width = inner.width as usize;
        let rows = inner.height as usize;
        let offset = super::item_list::scroll_offset(self.state.source_cursor, rows);

        let lines: Vec<Line> = self
            .state
            .sources
            .iter()
            .enumerate()
            .skip(offset)
            .take(rows)
            .map(|(i, source)| {
                let (glyph, glyph_style) = source_glyph(source);
                let count = if source.unread_count > 0 {
                    format!(" {}", source.unread_count)
                } else {
                    String::new()
                };
                let name_width = width.saturating_sub(2 + count.len());
                let name = super::fit(&source.name, name_width);

                if i == self.state.source_cursor && focused {
                    Line::from(Span::styled(
                        format!("{} {}{}", glyph, name, count),
                        styles::focused_selected(),
                    ))
                } else {
                    Line::from(vec![
                        Span::styled(format!("{} ", glyph), glyph_style),
                        Span::styled(name, styles::text_primary()),
                        Span::styled(count, styles::text_muted()),
                    ])
                }
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use sift_client::test_utils::test_source;

    #[test]
    fn test_renders_sources_with_counts() {
        let mut paused = test_source("s2", "Lobsters");
        paused.active = false;
        let mut hn = test_source("s1", "Hacker News");
        hn.unread_count = 12;

        let mut state = AppState::new();
        state.set_sources(vec![hn, paused]);

        let mut term = TestTerminal::with_size(28, 10);
        term.render_widget(SourcePane::new(&state), term.area());

        assert!(term.buffer_contains("Sources"));
        assert!(term.buffer_contains("Hacker News"));
        assert!(term.buffer_contains("12"));
        assert!(term.buffer_contains("○ Lobsters"));
    }

    #[test]
    fn test_empty_sources() {
        let state = AppState::new();
        let mut term = TestTerminal::with_size(28, 6);
        term.render_widget(SourcePane::new(&state), term.area());
        assert!(term.buffer_contains("No sources"));
    }
}
