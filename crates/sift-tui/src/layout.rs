//! Screen layout definitions for the TUI
//!
//! One header row, the bordered body, and one bottom row shared by the
//! status bar, the confirmation prompt and the command line.

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the source pane beside the content list
pub const SOURCE_PANE_WIDTH: u16 = 28;

/// Narrowest terminal that still shows the source pane
pub const MIN_WIDTH_FOR_SOURCE_PANE: u16 = 72;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    /// Source pane, absent in the reader or on narrow terminals
    pub sources: Option<Rect>,
    /// Content list or reader
    pub content: Rect,
    /// Status bar / prompt / command line
    pub bottom: Rect,
}

/// Create the main screen layout.
///
/// `with_sources` requests the source pane; it is dropped when the area
/// is narrower than [`MIN_WIDTH_FOR_SOURCE_PANE`].
pub fn create(area: Rect, with_sources: bool) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    let body = chunks[1];
    let (sources, content) = if with_sources && body.width >= MIN_WIDTH_FOR_SOURCE_PANE {
        let cols = Layout::horizontal([Constraint::Length(SOURCE_PANE_WIDTH), Constraint::Min(1)])
            .split(body);
        (Some(cols[0]), cols[1])
    } else {
        (None, body)
    };

    ScreenAreas {
        header: chunks[0],
        sources,
        content,
        bottom: chunks[2],
    }
}
