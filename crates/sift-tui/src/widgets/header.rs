//! Header bar: app title, active filters and list counts

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use sift_app::AppState;
use unicode_width::UnicodeWidthStr;

use crate::theme::{palette, styles};

pub struct Header<'a> {
    state: &'a AppState,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn counts(&self) -> String {
        let state = self.state;
        let mut text = format!("{} items · {} unread", state.items.len(), state.unread_count());
        if state.hidden_count > 0 {
            text.push_str(&format!(" · {} hidden", state.hidden_count));
        }
        if state.loading {
            text.push_str(" · ↻ loading");
        } else if let Some(at) = state.last_refresh {
            text.push_str(&format!(" · {}", at.format("%H:%M")));
        }
        text
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let counts = self.counts();
        let title = " sift ";
        let room = (area.width as usize)
            .saturating_sub(title.width() + counts.width() + 2);
        let summary = super::fit(&self.state.filters.summary(), room);

        let line = Line::from(vec![
            Span::styled(
                title,
                Style::default()
                    .fg(palette::CONTRAST_FG)
                    .bg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(summary, styles::text_secondary()),
            Span::raw(" "),
            Span::styled(
                counts,
                if self.state.loading {
                    Style::default().fg(palette::STATUS_YELLOW)
                } else {
                    styles::text_muted()
                },
            ),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
