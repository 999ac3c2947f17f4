//! Help modal: command table and key bindings

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use sift_app::AppState;

use super::modal_overlay::{centered_rect, clear_area, dim_background};
use crate::theme::styles;

const KEY_BINDINGS: &[(&str, &str)] = &[
    ("j / k", "Move down / up"),
    ("g / G", "Top / bottom"),
    ("tab", "Switch pane"),
    ("enter", "Open reader"),
    ("n / p", "Next / previous item (reader)"),
    ("m", "Toggle read"),
    ("F / *", "Toggle favorite"),
    ("o", "Open in browser"),
    ("y", "Copy URL"),
    ("c", "Copy content"),
    ("f", "Cycle priority filter"),
    ("a", "Show all / unread only"),
    ("t", "Cycle source type"),
    ("s", "Toggle sort"),
    ("U", "Show unprioritized"),
    ("r", "Refresh"),
    ("S", "Source manager"),
    (":", "Command line"),
    ("?", "This help"),
    ("q", "Quit / back"),
];

const VERB_COLUMN: usize = 30;

pub struct HelpModal<'a> {
    state: &'a AppState,
    scroll: u16,
}

impl<'a> HelpModal<'a> {
    pub fn new(state: &'a AppState, scroll: u16) -> Self {
        Self { state, scroll }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled("Commands", styles::text_bright()))];
        for spec in self.state.commands.iter() {
            lines.push(Line::from(vec![
                Span::styled(
                    super::fit(&format!(":{}", spec.usage_line()), VERB_COLUMN),
                    styles::keybinding(),
                ),
                Span::styled(spec.description, styles::text_secondary()),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Keys", styles::text_bright())));
        for (key, description) in KEY_BINDINGS {
            lines.push(Line::from(vec![
                Span::styled(super::fit(key, VERB_COLUMN), styles::keybinding()),
                Span::styled(*description, styles::text_secondary()),
            ]));
        }
        lines
    }
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let modal = centered_rect(76, area.height.saturating_sub(4), area);
        clear_area(buf, modal);

        let block = styles::modal_block(" Help (j/k scroll, esc close) ");
        let inner = block.inner(modal);
        block.render(modal, buf);

        Paragraph::new(self.lines())
            .scroll((self.scroll, 0))
            .render(inner, buf);
    }
}
