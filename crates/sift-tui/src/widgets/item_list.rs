//! Content list

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use sift_app::state::Focus;
use sift_app::AppState;
use sift_core::ContentItem;
use unicode_width::UnicodeWidthStr;

use crate::theme::{palette, styles};

/// Columns taken by markers, source name and date around the title
const SOURCE_COLUMN: usize = 16;
const DATE_COLUMN: usize = 6;

pub struct ItemList<'a> {
    state: &'a AppState,
}

impl<'a> ItemList<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn row(&self, item: &ContentItem, width: usize, selected: bool) -> Line<'static> {
        let focused = self.state.focus == Focus::Content;
        let read_marker = if item.read { ' ' } else { '●' };
        let priority = item.priority.map(|p| p.marker()).unwrap_or('·');
        let favorite = if item.favorited { '★' } else { ' ' };
        let date = item
            .published_at
            .map(|at| at.format("%b %d").to_string())
            .unwrap_or_default();

        let fixed = 6 + SOURCE_COLUMN + DATE_COLUMN + 2;
        let title_width = width.saturating_sub(fixed).max(1);
        let title = super::fit(&item.title, title_width);
        let source = super::fit(&item.source_name, SOURCE_COLUMN);

        if selected {
            let style = if focused {
                styles::focused_selected()
            } else {
                styles::unfocused_selected()
            };
            let text = format!(
                "{} {} {} {} {} {:>w$}",
                read_marker,
                priority,
                favorite,
                title,
                source,
                date,
                w = DATE_COLUMN
            );
            let pad = width.saturating_sub(text.width());
            return Line::from(Span::styled(format!("{}{}", text, " ".repeat(pad)), style));
        }

        let title_style = if item.read {
            styles::text_muted()
        } else {
            styles::text_primary()
        };
        Line::from(vec![
            Span::styled(format!("{} ", read_marker), styles::accent()),
            Span::styled(format!("{} ", priority), styles::priority(item.priority)),
            Span::styled(
                format!("{} ", favorite),
                Style::default().fg(palette::FAVORITE),
            ),
            Span::styled(title, title_style),
            Span::raw(" "),
            Span::styled(source, styles::text_secondary()),
            Span::styled(format!(" {:>w$}", date, w = DATE_COLUMN), styles::text_muted()),
        ])
    }
}

/// First visible row so that `cursor` stays inside `rows`
pub(crate) fn scroll_offset(cursor: usize, rows: usize) -> usize {
    if rows == 0 {
        0
    } else {
        cursor.saturating_sub(rows - 1)
    }
}

impl Widget for ItemList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.state.focus == Focus::Content)
            .title(" Content ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let items = &self.state.items;
        if items.is_empty() {
            let text = if self.state.loading {
                "Loading…"
            } else {
                "No items match the current filters"
            };
            Paragraph::new(Line::from(Span::styled(text, styles::text_muted())))
                .render(inner, buf);
            return;
        }

        let rows = inner.height as usize;
        let offset = scroll_offset(self.state.cursor, rows);
        let lines: Vec<Line> = items
            .iter()
            .enumerate()
            .skip(offset)
            .take(rows)
            .map(|(i, item)| self.row(item, inner.width as usize, i == self.state.cursor))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
