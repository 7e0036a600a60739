//! Page slicing and pagination controls.

use std::ops::Range;

use super::state::PageLink;

/// Most page numbers shown at once in pagination controls.
pub const PAGE_WINDOW_SIZE: usize = 5;

/// Number of pages needed for `count` rows.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Row range of `page` (1-based), cut at `count`.
///
/// A page past the end yields an empty range.
pub fn page_range(count: usize, page_size: usize, page: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(count);
    let end = start.saturating_add(page_size).min(count);
    start..end
}

/// Page numbers to show for `current_page` out of `total_pages`.
///
/// At most five numbers, centred on the current page where possible and
/// never outside `1..=total_pages`.
///
/// # Example
///
/// ```
/// use datatable_lib::table::page_window;
///
/// assert_eq!(page_window(3, 1), vec![1, 2, 3]);
/// assert_eq!(page_window(20, 2), vec![1, 2, 3, 4, 5]);
/// assert_eq!(page_window(20, 10), vec![8, 9, 10, 11, 12]);
/// assert_eq!(page_window(20, 18), vec![16, 17, 18, 19, 20]);
/// ```
pub fn page_window(total_pages: usize, current_page: usize) -> Vec<usize> {
    let span = PAGE_WINDOW_SIZE;
    let half = span / 2;

    let range = if total_pages <= span {
        1..=total_pages
    } else if current_page <= half + 1 {
        1..=span
    } else if current_page >= total_pages - half {
        total_pages - span + 1..=total_pages
    } else {
        current_page - half..=current_page + half
    };
    range.collect()
}

/// Derived pagination controls.
///
/// Only produced when there is more than one page to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControls {
    /// The page being shown.
    pub current_page: usize,
    /// Number of pages.
    pub total_pages: usize,
    /// Numbered page links, see [`page_window`].
    pub pages: Vec<PageLink>,
    /// Link to the previous page, if any.
    pub previous: Option<PageLink>,
    /// Link to the next page, if any.
    pub next: Option<PageLink>,
    /// Link to the first page.
    pub first: PageLink,
    /// Link to the last page.
    pub last: PageLink,
    /// 1-based number of the first row shown.
    pub first_row: usize,
    /// 1-based number of the last row shown.
    pub last_row: usize,
    /// Rows after filtering.
    pub total_rows: usize,
}

impl PaginationControls {
    /// Builds controls for a clamped `current_page`, or `None` when all
    /// rows fit on one page.
    pub fn build(total_rows: usize, page_size: usize, current_page: usize) -> Option<Self> {
        let total = total_pages(total_rows, page_size);
        if total <= 1 {
            return None;
        }
        let current = current_page.clamp(1, total);
        let rows = page_range(total_rows, page_size, current);

        Some(Self {
            current_page: current,
            total_pages: total,
            pages: page_window(total, current)
                .into_iter()
                .map(PageLink::new)
                .collect(),
            previous: (current > 1).then(|| PageLink::new(current - 1)),
            next: (current < total).then(|| PageLink::new(current + 1)),
            first: PageLink::new(1),
            last: PageLink::new(total),
            first_row: rows.start + 1,
            last_row: rows.end,
            total_rows,
        })
    }

    /// Returns `true` if `link` points at the page being shown.
    pub fn is_current(&self, link: PageLink) -> bool {
        link.number() == self.current_page
    }

    /// "Showing 11 to 15 of 23 entries".
    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} entries",
            self.first_row, self.last_row, self.total_rows
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(12, 10), 2);
        assert_eq!(total_pages(23, 5), 5);
    }

    #[test]
    fn test_page_range() {
        assert_eq!(page_range(23, 5, 3), 10..15);
        assert_eq!(page_range(23, 5, 5), 20..23);
        assert_eq!(page_range(23, 5, 9), 23..23);
        assert_eq!(page_range(23, 5, 0), 0..5);
    }

    #[test]
    fn test_window_all_pages_when_few() {
        assert_eq!(page_window(0, 1), Vec::<usize>::new());
        assert_eq!(page_window(5, 4), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_window_branches() {
        assert_eq!(page_window(20, 3), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(20, 4), vec![2, 3, 4, 5, 6]);
        assert_eq!(page_window(20, 17), vec![15, 16, 17, 18, 19]);
        assert_eq!(page_window(20, 18), vec![16, 17, 18, 19, 20]);
        assert_eq!(page_window(6, 4), vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_window_bounds_hold_for_all_inputs() {
        for total in 0..40 {
            for current in 1..=total {
                let window = page_window(total, current);
                assert!(window.len() <= PAGE_WINDOW_SIZE);
                assert!(window.contains(&current), "total {total} current {current}");
                assert!(window.iter().all(|&p| p >= 1 && p <= total));
                assert!(window.windows(2).all(|w| w[1] == w[0] + 1));
            }
        }
    }

    #[test]
    fn test_controls_single_page_is_none() {
        assert!(PaginationControls::build(10, 10, 1).is_none());
        assert!(PaginationControls::build(0, 10, 1).is_none());
    }

    #[test]
    fn test_controls_middle_page() {
        let controls = PaginationControls::build(23, 5, 3).unwrap();
        assert_eq!(controls.total_pages, 5);
        assert_eq!(controls.previous.map(PageLink::number), Some(2));
        assert_eq!(controls.next.map(PageLink::number), Some(4));
        assert_eq!(controls.summary(), "Showing 11 to 15 of 23 entries");
        assert!(controls.is_current(PageLink::new(3)));
    }

    #[test]
    fn test_controls_last_page() {
        let controls = PaginationControls::build(23, 5, 5).unwrap();
        assert!(controls.next.is_none());
        assert_eq!(controls.first_row, 21);
        assert_eq!(controls.last_row, 23);
        assert_eq!(controls.last.number(), 5);
    }
}
