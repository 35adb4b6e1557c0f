//! Custom widget components

mod about_panel;
mod detail_modal;
mod key_hints;
pub mod modal_overlay;
mod pagination_bar;
mod search_input;
mod status;
mod timeline_table;

pub use about_panel::AboutPanel;
pub use detail_modal::DetailModal;
pub use key_hints::KeyHints;
pub use pagination_bar::PaginationBar;
pub use search_input::SearchInput;
pub use status::{ErrorScreen, LoadingScreen};
pub use timeline_table::TimelineTable;

use unicode_width::UnicodeWidthChar;

/// Truncate `text` to at most `max_width` terminal cells.
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("episode.png", 6), "episod");
        assert_eq!(truncate_to_width("ab", 6), "ab");
        assert_eq!(truncate_to_width("", 6), "");
        // Wide characters take two cells
        assert_eq!(truncate_to_width("日本語", 5), "日本");
    }
}
