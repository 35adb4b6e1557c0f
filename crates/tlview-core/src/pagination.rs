//! Page arithmetic and page-control generation
//!
//! Pages are 1-based. The control bar shows first/previous, a window of at
//! most five page numbers around the current page with ellipses on either
//! side, and next/last.

use std::ops::Range;

use serde::Serialize;

/// Records per page.
pub const PAGE_SIZE: usize = 10;

/// `ceil(len / page_size)`. Zero for an empty collection.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Page count used when rendering controls: an empty result still has one
/// page.
pub fn display_total_pages(len: usize, page_size: usize) -> usize {
    total_pages(len, page_size).max(1)
}

/// Index range of `page` within a collection of `len` items, clipped to
/// `[0, len)`.
pub fn page_range(len: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = page.saturating_mul(page_size).min(len);
    start..end
}

/// One element of the pagination control bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageControl {
    /// Jump to page 1
    First,
    Previous { target: usize },
    /// Hidden page numbers
    Ellipsis,
    Number { page: usize, active: bool },
    Next { target: usize },
    Last { target: usize },
}

impl PageControl {
    /// The page this control navigates to, if it is clickable.
    pub fn target(&self) -> Option<usize> {
        match *self {
            PageControl::First => Some(1),
            PageControl::Previous { target }
            | PageControl::Next { target }
            | PageControl::Last { target } => Some(target),
            PageControl::Number { page, .. } => Some(page),
            PageControl::Ellipsis => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            PageControl::First => "«".to_string(),
            PageControl::Previous { .. } => "‹".to_string(),
            PageControl::Ellipsis => "…".to_string(),
            PageControl::Number { page, .. } => page.to_string(),
            PageControl::Next { .. } => "›".to_string(),
            PageControl::Last { .. } => "»".to_string(),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, PageControl::Number { active: true, .. })
    }
}

/// Build the control bar for `current` of `total_pages`.
///
/// `total_pages` of 0 is treated as 1. The numbered window is the slice
/// `[max(0, current-3), current+2)` of `[1..=total]`, so it holds at most
/// five numbers.
pub fn page_controls(current: usize, total_pages: usize) -> Vec<PageControl> {
    let total = total_pages.max(1);
    let mut controls = Vec::with_capacity(11);

    if current > 1 {
        controls.push(PageControl::First);
        controls.push(PageControl::Previous {
            target: current - 1,
        });
    }

    if current > 3 {
        controls.push(PageControl::Ellipsis);
    }

    let start = current.saturating_sub(3).min(total);
    let end = current.saturating_add(2).min(total);
    for page in (start + 1)..=end {
        controls.push(PageControl::Number {
            page,
            active: page == current,
        });
    }

    if current.saturating_add(2) < total {
        controls.push(PageControl::Ellipsis);
    }

    if current < total {
        controls.push(PageControl::Next {
            target: current + 1,
        });
        controls.push(PageControl::Last { target: total });
    }

    controls
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn numbers(controls: &[PageControl]) -> Vec<usize> {
        controls
            .iter()
            .filter_map(|c| match c {
                PageControl::Number { page, .. } => Some(*page),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, PAGE_SIZE), 0);
        assert_eq!(total_pages(1, PAGE_SIZE), 1);
        assert_eq!(total_pages(10, PAGE_SIZE), 1);
        assert_eq!(total_pages(11, PAGE_SIZE), 2);
        assert_eq!(total_pages(25, PAGE_SIZE), 3);
        assert_eq!(display_total_pages(0, PAGE_SIZE), 1);
    }

    #[test]
    fn test_page_range_clips() {
        assert_eq!(page_range(25, 1, 10), 0..10);
        assert_eq!(page_range(25, 3, 10), 20..25);
        assert_eq!(page_range(25, 4, 10), 25..25);
        assert_eq!(page_range(0, 1, 10), 0..0);
    }

    #[test]
    fn test_first_page_of_three() {
        let controls = page_controls(1, 3);
        assert_eq!(
            controls,
            vec![
                PageControl::Number {
                    page: 1,
                    active: true
                },
                PageControl::Number {
                    page: 2,
                    active: false
                },
                PageControl::Number {
                    page: 3,
                    active: false
                },
                PageControl::Next { target: 2 },
                PageControl::Last { target: 3 },
            ]
        );
    }

    #[test]
    fn test_empty_result_shows_single_page() {
        let controls = page_controls(1, 0);
        assert_eq!(
            controls,
            vec![PageControl::Number {
                page: 1,
                active: true
            }]
        );
    }

    #[test]
    fn test_middle_page_has_both_ellipses() {
        let controls = page_controls(6, 12);
        assert_eq!(controls[0], PageControl::First);
        assert_eq!(controls[1], PageControl::Previous { target: 5 });
        assert_eq!(controls[2], PageControl::Ellipsis);
        assert_eq!(numbers(&controls), vec![4, 5, 6, 7, 8]);
        assert_eq!(controls[8], PageControl::Ellipsis);
        assert_eq!(controls[9], PageControl::Next { target: 7 });
        assert_eq!(controls[10], PageControl::Last { target: 12 });
    }

    #[test]
    fn test_ellipsis_thresholds() {
        // Leading ellipsis only past page 3.
        let at_three = page_controls(3, 10);
        assert_eq!(numbers(&at_three), vec![1, 2, 3, 4, 5]);
        assert_eq!(
            at_three[2],
            PageControl::Number {
                page: 1,
                active: false
            }
        );

        let at_four = page_controls(4, 10);
        assert_eq!(at_four[2], PageControl::Ellipsis);

        // Trailing ellipsis only while current < total - 2.
        let near_end = page_controls(8, 10);
        assert_eq!(numbers(&near_end), vec![6, 7, 8, 9, 10]);
        assert_eq!(
            near_end.iter().filter(|c| **c == PageControl::Ellipsis).count(),
            1
        );

        let before = page_controls(7, 10);
        assert_eq!(
            before.iter().filter(|c| **c == PageControl::Ellipsis).count(),
            2
        );
    }

    #[test]
    fn test_last_page_hides_next_and_last() {
        let controls = page_controls(3, 3);
        assert!(!controls
            .iter()
            .any(|c| matches!(c, PageControl::Next { .. } | PageControl::Last { .. })));
        assert_eq!(controls[0], PageControl::First);
        assert_eq!(numbers(&controls), vec![1, 2, 3]);
    }

    #[test]
    fn test_targets() {
        assert_eq!(PageControl::First.target(), Some(1));
        assert_eq!(PageControl::Ellipsis.target(), None);
        assert_eq!(
            PageControl::Number {
                page: 4,
                active: false
            }
            .target(),
            Some(4)
        );
        assert_eq!(PageControl::Last { target: 9 }.target(), Some(9));
    }

    proptest! {
        #[test]
        fn prop_controls_are_in_range(total in 0usize..60, current_seed in 0usize..60) {
            let display_total = total.max(1);
            let current = current_seed % display_total + 1;
            let controls = page_controls(current, total);

            let nums = numbers(&controls);
            prop_assert!(!nums.is_empty());
            prop_assert!(nums.len() <= 5);
            prop_assert!(nums.contains(&current));
            prop_assert!(nums.windows(2).all(|w| w[1] == w[0] + 1));

            for control in &controls {
                if let Some(target) = control.target() {
                    prop_assert!(target >= 1 && target <= display_total);
                }
            }
            prop_assert_eq!(controls.iter().filter(|c| c.is_active()).count(), 1);
        }

        #[test]
        fn prop_windows_cover_every_item_once(len in 0usize..200) {
            let pages = total_pages(len, PAGE_SIZE);
            let covered: usize = (1..=pages).map(|p| page_range(len, p, PAGE_SIZE).len()).sum();
            prop_assert_eq!(covered, len);
        }
    }
}
