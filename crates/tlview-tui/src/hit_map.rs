//! Clickable regions recorded while rendering a frame

use ratatui::layout::{Position, Rect};

/// What a mouse position lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Row of the page window, by window index
    Row(usize),
    /// Pagination control, by target page
    Control(usize),
    Search,
    /// Outside an open modal
    Backdrop,
}

/// Regions of the last rendered frame.
///
/// Rows and controls are only recorded when no modal is open, so the modal
/// blocks everything beneath it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    pub rows: Vec<(Rect, usize)>,
    pub controls: Vec<(Rect, usize)>,
    pub search: Option<Rect>,
    pub modal: Option<Rect>,
}

impl HitMap {
    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let pos = Position::new(column, row);

        if let Some(modal) = self.modal {
            return (!modal.contains(pos)).then_some(HitTarget::Backdrop);
        }

        if let Some((_, page)) = self.controls.iter().find(|(r, _)| r.contains(pos)) {
            return Some(HitTarget::Control(*page));
        }
        if let Some((_, index)) = self.rows.iter().find(|(r, _)| r.contains(pos)) {
            return Some(HitTarget::Row(*index));
        }
        if self.search.is_some_and(|r| r.contains(pos)) {
            return Some(HitTarget::Search);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> HitMap {
        HitMap {
            rows: vec![(Rect::new(1, 10, 78, 1), 0), (Rect::new(1, 11, 78, 1), 1)],
            controls: vec![(Rect::new(0, 22, 3, 1), 2)],
            search: Some(Rect::new(0, 5, 80, 3)),
            modal: None,
        }
    }

    #[test]
    fn test_targets() {
        let map = map();
        assert_eq!(map.target_at(5, 11), Some(HitTarget::Row(1)));
        assert_eq!(map.target_at(1, 22), Some(HitTarget::Control(2)));
        assert_eq!(map.target_at(40, 6), Some(HitTarget::Search));
        assert_eq!(map.target_at(40, 0), None);
    }

    #[test]
    fn test_modal_blocks_everything_beneath() {
        let mut map = map();
        map.modal = Some(Rect::new(10, 8, 60, 10));

        assert_eq!(map.target_at(20, 10), None);
        assert_eq!(map.target_at(1, 22), Some(HitTarget::Backdrop));
        assert_eq!(map.target_at(0, 0), Some(HitTarget::Backdrop));
    }
}
