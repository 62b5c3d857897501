//! Client-side pagination over an in-memory list
//!
//! The listing screens page over the full fetched list in fixed slices of
//! [`PAGE_SIZE`], independent of the upstream API's own `page` parameter.
//! The upstream fetch may hand back more or fewer than one display page;
//! both schemes coexist on purpose (see DESIGN.md).

use serde::Serialize;

/// Records per display page
pub const PAGE_SIZE: usize = 10;

/// Total page count for `len` items: `ceil(len / page_size)`
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Page-button labels, `1..=total_pages`
pub fn page_numbers(len: usize, page_size: usize) -> impl Iterator<Item = usize> {
    1..=total_pages(len, page_size)
}

/// The contiguous slice of `items` belonging to 1-based `page`.
///
/// The source never validates the page number (only valid buttons are
/// rendered); here an out-of-range page yields an empty slice instead of a
/// panic.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1) * page_size;
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Current display page for a listing screen. Reset whenever the underlying
/// list is re-fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageState {
    current: usize,
}

impl PageState {
    pub fn new() -> Self {
        Self { current: 1 }
    }

    /// 1-based current page
    pub fn current(&self) -> usize {
        self.current
    }

    /// Pure state transition; the scroll-to-top side effect belongs to the
    /// presentation layer.
    pub fn change_page(&mut self, page: usize) {
        self.current = page.max(1);
    }

    pub fn reset(&mut self) {
        self.current = 1;
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_ceiling() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn test_paginate_slices() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(paginate(&items, 10, 1), &(0..10).collect::<Vec<_>>()[..]);
        assert_eq!(paginate(&items, 10, 2), &(10..20).collect::<Vec<_>>()[..]);
        // Last page is the 5-item remainder
        assert_eq!(paginate(&items, 10, 3), &(20..25).collect::<Vec<_>>()[..]);
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let items: Vec<u32> = (0..25).collect();
        assert!(paginate(&items, 10, 0).is_empty());
        assert!(paginate(&items, 10, 4).is_empty());
        assert!(paginate::<u32>(&[], 10, 1).is_empty());
    }

    #[test]
    fn test_page_numbers_match_buttons() {
        let pages: Vec<usize> = page_numbers(25, 10).collect();
        assert_eq!(pages, vec![1, 2, 3]);
        assert_eq!(page_numbers(0, 10).count(), 0);
    }

    #[test]
    fn test_page_state_transitions() {
        let mut state = PageState::new();
        assert_eq!(state.current(), 1);
        state.change_page(3);
        assert_eq!(state.current(), 3);
        state.reset();
        assert_eq!(state.current(), 1);
        // Page numbers are 1-based; 0 clamps up
        state.change_page(0);
        assert_eq!(state.current(), 1);
    }
}
