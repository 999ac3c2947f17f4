//! Full-text reader for the selected item

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use sift_core::ContentItem;

use crate::theme::{palette, styles};

pub struct Reader<'a> {
    item: Option<&'a ContentItem>,
    scroll: u16,
}

impl<'a> Reader<'a> {
    pub fn new(item: Option<&'a ContentItem>, scroll: u16) -> Self {
        Self { item, scroll }
    }

    fn meta_line(item: &ContentItem) -> Line<'static> {
        let mut spans = vec![Span::styled(
            item.source_name.clone(),
            styles::text_secondary(),
        )];
        if let Some(at) = item.published_at {
            spans.push(Span::styled(
                format!(" · {}", at.format("%Y-%m-%d %H:%M")),
                styles::text_muted(),
            ));
        }
        let priority = item.priority.map(|p| p.as_str()).unwrap_or("unprioritized");
        spans.push(Span::styled(format!(" · {}", priority), styles::priority(item.priority)));
        if item.favorited {
            spans.push(Span::styled(" · ★", Style::default().fg(palette::FAVORITE)));
        }
        Line::from(spans)
    }
}

impl Widget for Reader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(" Reader ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(item) = self.item else {
            Paragraph::new(Span::styled("Nothing selected", styles::text_muted()))
                .render(inner, buf);
            return;
        };

        let mut lines = vec![
            Line::from(Span::styled(item.title.clone(), styles::text_bright())),
            Self::meta_line(item),
            Line::from(Span::styled(item.url.clone(), styles::accent())),
            Line::default(),
        ];
        lines.extend(
            item.body_text()
                .lines()
                .map(|l| Line::from(Span::styled(l.to_string(), styles::text_primary()))),
        );

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(inner, buf);
    }
}
