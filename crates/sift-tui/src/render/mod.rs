//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use sift_app::overlay::Overlay;
use sift_app::state::ViewMode;
use sift_app::AppState;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI.
///
/// Pure function of `state`: every scroll offset is derived from the
/// cursor positions held in the state itself.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let in_reader = state.view_mode == ViewMode::Reader;
    let areas = layout::create(area, !in_reader);

    frame.render_widget(widgets::Header::new(state), areas.header);

    if let Some(sources_area) = areas.sources {
        frame.render_widget(widgets::SourcePane::new(state), sources_area);
    }

    if in_reader {
        frame.render_widget(
            widgets::Reader::new(state.selected_item(), state.reader_scroll),
            areas.content,
        );
    } else {
        frame.render_widget(widgets::ItemList::new(state), areas.content);
    }

    match &state.overlay {
        Overlay::CommandLine(cl) => {
            frame.render_widget(widgets::CommandLine::new(cl), areas.bottom);
        }
        _ => frame.render_widget(widgets::StatusBar::new(state), areas.bottom),
    }

    match &state.overlay {
        Overlay::Help(help) => {
            frame.render_widget(widgets::HelpModal::new(state, help.scroll), area);
        }
        Overlay::SourceManager(sm) => {
            frame.render_widget(widgets::SourceManagerModal::new(&state.sources, sm), area);
        }
        Overlay::CommandLine(_) | Overlay::None => {}
    }
}
