//! Source manager modal

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use sift_app::overlay::{SourceManagerMode, SourceManagerState};
use sift_core::Source;

use super::modal_overlay::{centered_rect, clear_area, dim_background};
use super::source_pane::source_glyph;
use crate::theme::{palette, styles};

const BROWSE_HINTS: &str = "j/k move · p pause/resume · d remove · a add · R reload · esc close";

pub struct SourceManagerModal<'a> {
    sources: &'a [Source],
    state: &'a SourceManagerState,
}

impl<'a> SourceManagerModal<'a> {
    pub fn new(sources: &'a [Source], state: &'a SourceManagerState) -> Self {
        Self { sources, state }
    }

    fn row(&self, source: &Source, width: usize, selected: bool) -> Line<'static> {
        let (glyph, glyph_style) = source_glyph(source);
        let kind = source.source_type.label();
        let errors = if source.error_count > 0 {
            format!(" {} errors", source.error_count)
        } else {
            String::new()
        };
        let name = super::fit(&source.name, 24);
        let url_width = width.saturating_sub(2 + 24 + 9 + errors.len() + 2);
        let url = super::truncate(&source.url, url_width);

        if selected {
            let text = format!("{} {} {:<8} {}{}", glyph, name, kind, url, errors);
            return Line::from(Span::styled(text, styles::focused_selected()));
        }
        Line::from(vec![
            Span::styled(format!("{} ", glyph), glyph_style),
            Span::styled(name, styles::text_primary()),
            Span::styled(format!(" {:<8} ", kind), styles::text_secondary()),
            Span::styled(url, styles::text_muted()),
            Span::styled(errors, Style::default().fg(palette::STATUS_RED)),
        ])
    }

    fn footer(&self) -> Line<'static> {
        match &self.state.mode {
            SourceManagerMode::Browse => Line::from(Span::styled(BROWSE_HINTS, styles::text_muted())),
            SourceManagerMode::ConfirmRemove(id) => {
                let name = self
                    .sources
                    .iter()
                    .find(|s| &s.id == id)
                    .map(|s| s.name.as_str())
                    .unwrap_or("source");
                Line::from(Span::styled(
                    format!("Remove '{}'? (y/n)", name),
                    Style::default()
                        .fg(palette::STATUS_YELLOW)
                        .add_modifier(Modifier::BOLD),
                ))
            }
            SourceManagerMode::AddUrl(input) => Line::from(vec![
                Span::styled("URL: ", styles::accent()),
                Span::styled(input.clone(), styles::text_primary()),
                Span::styled("█", styles::accent()),
            ]),
        }
    }
}

impl Widget for SourceManagerModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let modal = centered_rect(90, area.height.saturating_sub(4), area);
        clear_area(buf, modal);

        let title = format!(" Sources ({}) ", self.sources.len());
        let block = styles::modal_block(&title);
        let inner = block.inner(modal);
        block.render(modal, buf);

        if inner.height < 2 {
            return;
        }
        let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);
        let (list_area, footer_area) = (chunks[0], chunks[1]);

        if self.sources.is_empty() {
            Paragraph::new(Span::styled(
                "No sources yet. Press a to add one.",
                styles::text_muted(),
            ))
            .render(list_area, buf);
        } else {
            let rows = list_area.height as usize;
            let offset = super::item_list::scroll_offset(self.state.selected, rows);
            let lines: Vec<Line> = self
                .sources
                .iter()
                .enumerate()
                .skip(offset)
                .take(rows)
                .map(|(i, s)| self.row(s, list_area.width as usize, i == self.state.selected))
                .collect();
            Paragraph::new(lines).render(list_area, buf);
        }

        Paragraph::new(self.footer()).render(footer_area, buf);
    }
}
