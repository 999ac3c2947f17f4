//! Custom widget components

mod command_line;
mod header;
mod help;
mod item_list;
pub mod modal_overlay;
mod reader;
mod source_manager;
mod source_pane;
mod status_bar;

pub use command_line::CommandLine;
pub use header::Header;
pub use help::HelpModal;
pub use item_list::ItemList;
pub use reader::Reader;
pub use source_manager::SourceManagerModal;
pub use source_pane::SourcePane;
pub use status_bar::StatusBar;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to at most `max` display columns, marking the cut
/// with an ellipsis.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Pad `text` with spaces to exactly `width` columns (truncating if longer)
pub(crate) fn fit(text: &str, width: usize) -> String {
    let truncated = truncate(text, width);
    let pad = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(pad))
}
