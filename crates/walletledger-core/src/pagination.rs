//! Pagination engine: windows any ordered slice into fixed-size pages
//!
//! `PaginationState` holds only what the user asked for (a page number and a
//! page size). Everything shown on screen is derived from it by
//! [`PaginationState::window`] against the current item count, so a page
//! number left over from a larger result set is corrected on read without
//! mutating anything. [`PaginationState::sync`] commits that correction when
//! the caller wants the stored state to follow.

use serde::{Deserialize, Serialize};

/// Slots in the page-number strip, ellipses included
pub const MAX_PAGE_LINKS: usize = 7;

/// Number of pages needed for `total_items`; zero for an empty sequence
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items / page_size + usize::from(total_items % page_size != 0)
}

/// Half-open bounds `[start, end)` of a page, clamped to the data
fn slice_bounds(total_items: usize, current_page: usize, page_size: usize) -> (usize, usize) {
    let start = current_page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(total_items);
    let end = start.saturating_add(page_size).min(total_items);
    (start, end)
}

/// The items of one page. Out-of-range pages yield an empty slice.
pub fn visible_slice<T>(data: &[T], current_page: usize, page_size: usize) -> &[T] {
    let (start, end) = slice_bounds(data.len(), current_page, page_size);
    &data[start..end]
}

/// Derived pagination metadata for one item count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    /// Effective 1-based page after self-correction
    pub current_page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// Zero-based index of the first visible item
    pub start_index: usize,
    /// Exclusive index after the last visible item
    pub end_index: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl PageWindow {
    /// Derive the window for a requested page.
    ///
    /// A page past the end snaps back to page 1, as does page 0.
    pub fn compute(requested_page: usize, page_size: usize, total_items: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_pages(total_items, page_size);
        let current_page = if requested_page == 0 || requested_page > total_pages {
            1
        } else {
            requested_page
        };
        let (start_index, end_index) = slice_bounds(total_items, current_page, page_size);

        Self {
            current_page,
            page_size,
            total_pages,
            total_items,
            start_index,
            end_index,
            has_next_page: current_page < total_pages,
            has_prev_page: current_page > 1,
        }
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.end_index - self.start_index
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// "Showing X-Y of N transactions"
    pub fn showing_label(&self) -> String {
        walletledger_utils::showing_label(self.start_index, self.end_index, self.total_items)
    }
}

/// One page of items together with its metadata
#[derive(Debug, Serialize)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    #[serde(flatten)]
    pub window: PageWindow,
}

/// One slot of the page-number strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

/// Page-number strip of at most [`MAX_PAGE_LINKS`] slots.
///
/// The first and last pages are always present; once there are more pages
/// than slots, gaps are collapsed into ellipses around the current page.
pub fn page_links(current_page: usize, total_pages: usize) -> Vec<PageLink> {
    if total_pages <= MAX_PAGE_LINKS {
        return (1..=total_pages).map(PageLink::Page).collect();
    }
    let current_page = current_page.clamp(1, total_pages);

    let mut links = Vec::with_capacity(MAX_PAGE_LINKS);
    if current_page <= 4 {
        links.extend((1..=5).map(PageLink::Page));
        links.push(PageLink::Ellipsis);
        links.push(PageLink::Page(total_pages));
    } else if current_page >= total_pages - 3 {
        links.push(PageLink::Page(1));
        links.push(PageLink::Ellipsis);
        links.extend((total_pages - 4..=total_pages).map(PageLink::Page));
    } else {
        links.push(PageLink::Page(1));
        links.push(PageLink::Ellipsis);
        links.extend((current_page - 1..=current_page + 1).map(PageLink::Page));
        links.push(PageLink::Ellipsis);
        links.push(PageLink::Page(total_pages));
    }
    links
}

/// Page number and page size owned by a view session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    current_page: usize,
    page_size: usize,
    default_page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(10)
    }
}

impl PaginationState {
    /// Start on page 1. A zero page size is raised to 1.
    pub fn new(default_page_size: usize) -> Self {
        let default_page_size = clamp_page_size(default_page_size);
        Self {
            current_page: 1,
            page_size: default_page_size,
            default_page_size,
        }
    }

    /// The requested page, which may be past the end until [`Self::sync`] runs
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn default_page_size(&self) -> usize {
        self.default_page_size
    }

    /// Derived metadata for a sequence of `total_items`
    pub fn window(&self, total_items: usize) -> PageWindow {
        PageWindow::compute(self.current_page, self.page_size, total_items)
    }

    /// The visible items of `data` for the effective page
    pub fn slice<'a, T>(&self, data: &'a [T]) -> &'a [T] {
        let window = self.window(data.len());
        &data[window.start_index..window.end_index]
    }

    /// Visible items plus metadata
    pub fn paginate<'a, T>(&self, data: &'a [T]) -> Page<'a, T> {
        let window = self.window(data.len());
        Page {
            items: &data[window.start_index..window.end_index],
            window,
        }
    }

    /// Jump to `page`, clamped into `[1, max(total_pages, 1)]`
    pub fn go_to_page(&mut self, page: i64, total_items: usize) {
        let last = total_pages(total_items, self.page_size).max(1);
        let page = page.clamp(1, last as i64) as usize;
        if page != self.current_page {
            log::debug!("Pagination: page {} -> {}", self.current_page, page);
        }
        self.current_page = page;
    }

    /// Advance one page; no-op on the last page
    pub fn next_page(&mut self, total_items: usize) {
        let window = self.window(total_items);
        if window.has_next_page {
            self.current_page = window.current_page + 1;
        }
    }

    /// Go back one page; no-op on the first page
    pub fn prev_page(&mut self, total_items: usize) {
        let window = self.window(total_items);
        if window.has_prev_page {
            self.current_page = window.current_page - 1;
        }
    }

    /// Change the page size and return to page 1
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = clamp_page_size(size);
        self.current_page = 1;
    }

    /// Page 1 with the default page size
    pub fn reset(&mut self) {
        self.current_page = 1;
        self.page_size = self.default_page_size;
    }

    /// Store the self-corrected page for `total_items`.
    ///
    /// Returns true when the stored page changed.
    pub fn sync(&mut self, total_items: usize) -> bool {
        let effective = self.window(total_items).current_page;
        if effective == self.current_page {
            return false;
        }
        log::debug!(
            "Pagination: page {} is out of range for {} items, back to {}",
            self.current_page,
            total_items,
            effective
        );
        self.current_page = effective;
        true
    }
}

fn clamp_page_size(size: usize) -> usize {
    if size == 0 {
        log::warn!("Page size 0 is not allowed, using 1");
        1
    } else {
        size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        for size in 1..=12 {
            for n in 0..=40 {
                let expected = if n == 0 { 0 } else { (n as f64 / size as f64).ceil() as usize };
                assert_eq!(total_pages(n, size), expected, "n={} size={}", n, size);
            }
        }
    }

    #[test]
    fn test_last_page_length() {
        for size in 1..=12 {
            for n in 1..=40 {
                let data = items(n);
                let pages = total_pages(n, size);
                let last = visible_slice(&data, pages, size);
                assert_eq!(last.len(), n - (pages - 1) * size, "n={} size={}", n, size);
            }
        }
    }

    #[test]
    fn test_visible_slice_out_of_range_is_empty() {
        let data = items(5);
        assert!(visible_slice(&data, 9, 10).is_empty());
        assert!(visible_slice(&data, usize::MAX, usize::MAX).is_empty());
        assert_eq!(visible_slice(&data, 0, 2), &[0, 1]);
        let empty: Vec<usize> = Vec::new();
        assert!(visible_slice(&empty, 1, 10).is_empty());
    }

    #[test]
    fn test_twelve_items_two_pages() {
        let data = items(12);
        let mut state = PaginationState::new(10);

        let page = state.paginate(&data);
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.window.total_pages, 2);
        assert!(page.window.has_next_page);
        assert!(!page.window.has_prev_page);

        state.next_page(data.len());
        let page = state.paginate(&data);
        assert_eq!(state.current_page(), 2);
        assert_eq!(page.items, &[10, 11]);
        assert!(!page.window.has_next_page);
        assert!(page.window.has_prev_page);
        assert_eq!(page.window.start_index, 10);
        assert_eq!(page.window.end_index, 12);
        assert_eq!(page.window.showing_label(), "Showing 11-12 of 12 transactions");
    }

    #[test]
    fn test_next_and_prev_are_noops_at_edges() {
        let mut state = PaginationState::new(10);
        state.prev_page(12);
        assert_eq!(state.current_page(), 1);

        state.next_page(12);
        state.next_page(12);
        assert_eq!(state.current_page(), 2);

        state.prev_page(12);
        assert_eq!(state.current_page(), 1);

        state.next_page(0);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut state = PaginationState::new(10);
        for (requested, expected) in [
            (i64::MIN, 1),
            (-3, 1),
            (0, 1),
            (1, 1),
            (3, 3),
            (5, 5),
            (6, 5),
            (i64::MAX, 5),
        ] {
            state.go_to_page(requested, 45);
            assert_eq!(state.current_page(), expected, "requested {}", requested);
        }

        state.go_to_page(4, 0);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_go_to_page_within_bounds_for_any_size() {
        for size in 1..=7 {
            for n in 0..=30 {
                let mut state = PaginationState::new(size);
                for p in -2..=12 {
                    state.go_to_page(p, n);
                    let max = total_pages(n, size).max(1);
                    assert!(state.current_page() >= 1 && state.current_page() <= max);
                }
            }
        }
    }

    #[test]
    fn test_go_to_page_is_idempotent() {
        let mut state = PaginationState::new(10);
        state.go_to_page(3, 45);
        let before = state.clone();
        state.go_to_page(3, 45);
        assert_eq!(state, before);
    }

    #[test]
    fn test_set_page_size_resets_page() {
        let mut state = PaginationState::new(10);
        state.go_to_page(4, 150);
        assert_eq!(state.current_page(), 4);

        state.set_page_size(25);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.page_size(), 25);
        assert_eq!(state.window(150).total_pages, 6);
    }

    #[test]
    fn test_zero_page_size_clamped() {
        let mut state = PaginationState::new(0);
        assert_eq!(state.page_size(), 1);
        assert_eq!(state.default_page_size(), 1);

        state.set_page_size(0);
        assert_eq!(state.page_size(), 1);
        assert_eq!(state.window(3).total_pages, 3);
        assert_eq!(total_pages(3, 0), 0);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = PaginationState::new(10);
        state.set_page_size(50);
        state.go_to_page(3, 150);
        state.reset();
        assert_eq!(state, PaginationState::new(10));
    }

    #[test]
    fn test_window_self_heals_after_shrink() {
        let mut state = PaginationState::new(10);
        state.go_to_page(2, 12);
        assert_eq!(state.current_page(), 2);

        // Data shrinks to 3 items: only one page remains.
        let window = state.window(3);
        assert_eq!(window.total_pages, 1);
        assert_eq!(window.current_page, 1);
        assert_eq!((window.start_index, window.end_index), (0, 3));
        assert!(!window.has_prev_page);

        // Reading never mutates; sync commits the correction.
        assert_eq!(state.current_page(), 2);
        assert!(state.sync(3));
        assert_eq!(state.current_page(), 1);
        assert!(!state.sync(3));
    }

    #[test]
    fn test_empty_window() {
        let mut state = PaginationState::new(10);
        state.go_to_page(3, 100);
        let window = state.window(0);
        assert_eq!(window.total_pages, 0);
        assert_eq!(window.current_page, 1);
        assert!(window.is_empty());
        assert!(!window.has_next_page);
        assert!(!window.has_prev_page);
        assert_eq!(window.showing_label(), "Showing 0 of 0 transactions");
    }

    #[test]
    fn test_page_links_short() {
        assert!(page_links(1, 0).is_empty());
        assert_eq!(page_links(1, 1), vec![PageLink::Page(1)]);
        assert_eq!(page_links(3, 7).len(), 7);
    }

    #[test]
    fn test_page_links_long() {
        use PageLink::{Ellipsis, Page as P};

        assert_eq!(page_links(1, 15), vec![P(1), P(2), P(3), P(4), P(5), Ellipsis, P(15)]);
        assert_eq!(page_links(4, 15), vec![P(1), P(2), P(3), P(4), P(5), Ellipsis, P(15)]);
        assert_eq!(page_links(8, 15), vec![P(1), Ellipsis, P(7), P(8), P(9), Ellipsis, P(15)]);
        assert_eq!(page_links(12, 15), vec![P(1), Ellipsis, P(11), P(12), P(13), P(14), P(15)]);
        assert_eq!(page_links(99, 15), vec![P(1), Ellipsis, P(11), P(12), P(13), P(14), P(15)]);
        for current in 1..=15 {
            assert_eq!(page_links(current, 15).len(), MAX_PAGE_LINKS);
        }
    }

    #[test]
    fn test_page_serializes_flat() {
        let data = vec!["a", "b", "c"];
        let state = PaginationState::new(2);
        let value = serde_json::to_value(state.paginate(&data)).unwrap();
        assert_eq!(value["items"], serde_json::json!(["a", "b"]));
        assert_eq!(value["total_pages"], 2);
        assert_eq!(value["has_next_page"], true);
        assert_eq!(serde_json::to_value(PageLink::Page(3)).unwrap(), serde_json::json!({"page": 3}));
        assert_eq!(serde_json::to_value(PageLink::Ellipsis).unwrap(), serde_json::json!("ellipsis"));
    }
}
