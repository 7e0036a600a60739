//! The filter → sort → paginate pipeline.

use crate::model::Record;
use crate::model::RowKey;

use super::Table;
use super::filter::filter_records;
use super::paginate::PaginationControls;
use super::paginate::page_range;
use super::paginate::total_pages;
use super::sort::sort_indices;
use super::state::SortDirection;
use super::state::SortState;
use super::state::TableViewState;

/// A visible row: the record and its render key.
#[derive(Debug, Clone, Copy)]
pub struct RowRef<'a> {
    /// The record.
    pub record: &'a Record,
    /// Position of the record in the input slice.
    pub index: usize,
}

impl RowRef<'_> {
    /// Stable render key, see [`RowKey`].
    pub fn key(&self) -> RowKey {
        RowKey::for_record(self.record, self.index)
    }
}

/// Output of [`Table::derive`].
#[derive(Debug, Clone)]
pub struct DerivedView<'a> {
    rows: Vec<RowRef<'a>>,
    total_filtered: usize,
    total_pages: usize,
    current_page: usize,
    sort: Option<SortState>,
    controls: Option<PaginationControls>,
}

impl<'a> DerivedView<'a> {
    /// Rows of the current page, in display order.
    pub fn rows(&self) -> &[RowRef<'a>] {
        &self.rows
    }

    /// Records that passed the search filter.
    pub fn total_filtered(&self) -> usize {
        self.total_filtered
    }

    /// Pages needed for the filtered records (0 when nothing matched).
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Page shown, after clamping the requested page to the page count.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// The sort that was applied, if any.
    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Direction glyph to show in the header of column `key`.
    pub fn sort_indicator_for(&self, key: &str) -> Option<SortDirection> {
        self.sort
            .as_ref()
            .filter(|s| s.key == key)
            .map(|s| s.direction)
    }

    /// Pagination controls, present when the rows span several pages.
    pub fn controls(&self) -> Option<&PaginationControls> {
        self.controls.as_ref()
    }

    /// Returns `true` if no record passed the filter.
    pub fn is_empty(&self) -> bool {
        self.total_filtered == 0
    }
}

impl Table {
    /// Derives the visible window from `records` and `state`.
    ///
    /// Never fails: missing fields count as non-matching and sort as null,
    /// a sort on a key that is not a sortable column is ignored, and a page
    /// past the end is clamped to the last page.
    pub fn derive<'a>(&self, records: &'a [Record], state: &TableViewState) -> DerivedView<'a> {
        let config = &self.config;

        // 1. Filter
        let mut indices = if config.searchable {
            filter_records(records, state.search(), config.search_mode)
        } else {
            (0..records.len()).collect()
        };

        // 2. Sort
        let sort = state.sort().filter(|s| self.is_sortable(&s.key)).cloned();
        if let Some(active) = &sort
            && let Some(column) = self.column(&active.key)
        {
            sort_indices(records, &mut indices, &column.key, &column.comparator, active.direction);
        } else if let Some(requested) = state.sort() {
            log::debug!("Sort on '{}' ignored: not a sortable column", requested.key);
        }

        // 3. Paginate
        let total_filtered = indices.len();
        let (visible, total, current, controls) = if config.pagination {
            let total = total_pages(total_filtered, config.page_size);
            let current = state.page().clamp(1, total.max(1));
            let range = page_range(total_filtered, config.page_size, current);
            let controls = PaginationControls::build(total_filtered, config.page_size, current);
            (&indices[range], total, current, controls)
        } else {
            let total = usize::from(total_filtered > 0);
            (&indices[..], total, 1, None)
        };

        let rows: Vec<RowRef<'a>> = visible
            .iter()
            .map(|&index| RowRef {
                record: &records[index],
                index,
            })
            .collect();

        if rows.iter().any(|r| r.record.id().is_none()) {
            log::debug!("Rows without ids are keyed by input position");
        }
        log::trace!(
            "derive: {} records, {} filtered, page {}/{}, {} visible",
            records.len(),
            total_filtered,
            current,
            total,
            rows.len()
        );

        DerivedView {
            rows,
            total_filtered,
            total_pages: total,
            current_page: current,
            sort,
            controls,
        }
    }
}
