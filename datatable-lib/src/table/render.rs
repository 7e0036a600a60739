//! Rendering a derived view into a grid description.

use crate::model::Record;
use crate::model::RowKey;

use super::Table;
use super::cell::Cell;
use super::cell::render_cell;
use super::column::Alignment;
use super::column::ColumnWidth;
use super::paginate::PaginationControls;
use super::state::SortDirection;
use super::state::TableViewState;

/// One header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    /// Column key.
    pub key: String,
    /// Header label.
    pub title: String,
    /// Whether clicking this header sorts.
    pub sortable: bool,
    /// Current sort direction, if this column is sorted.
    pub sort: Option<SortDirection>,
    /// Column style hook.
    pub class_name: Option<String>,
    /// Layout hint.
    pub width: ColumnWidth,
    /// Horizontal alignment.
    pub align: Alignment,
}

impl HeaderCell {
    /// Title followed by the sort glyph, if sorted.
    pub fn label(&self) -> String {
        match self.sort {
            Some(direction) => format!("{} {}", self.title, direction.indicator()),
            None => self.title.clone(),
        }
    }
}

/// One body row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    /// Stable render key.
    pub key: RowKey,
    /// Cells in column order.
    pub cells: Vec<Cell>,
}

/// What a table shows for the current records and state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedTable {
    /// The caller is still loading records.
    Loading { message: String },
    /// No record passed the filter.
    Empty {
        header: Vec<HeaderCell>,
        message: String,
    },
    /// The visible page.
    Grid {
        header: Vec<HeaderCell>,
        rows: Vec<RenderedRow>,
        controls: Option<PaginationControls>,
    },
}

impl RenderedTable {
    /// Header cells, if anything beyond a loading placeholder is shown.
    pub fn header(&self) -> Option<&[HeaderCell]> {
        match self {
            RenderedTable::Loading { .. } => None,
            RenderedTable::Empty { header, .. } | RenderedTable::Grid { header, .. } => {
                Some(header)
            }
        }
    }

    /// Body rows (empty unless this is a grid).
    pub fn rows(&self) -> &[RenderedRow] {
        match self {
            RenderedTable::Grid { rows, .. } => rows,
            _ => &[],
        }
    }

    /// Pagination controls, if shown.
    pub fn controls(&self) -> Option<&PaginationControls> {
        match self {
            RenderedTable::Grid { controls, .. } => controls.as_ref(),
            _ => None,
        }
    }
}

impl Table {
    /// Renders the current page of `records`.
    ///
    /// `loading` short-circuits to the loading placeholder; the caller owns
    /// fetching and signals it here.
    pub fn render(&self, records: &[Record], state: &TableViewState, loading: bool) -> RenderedTable {
        if loading {
            return RenderedTable::Loading {
                message: self.config.loading_message.clone(),
            };
        }

        let view = self.derive(records, state);
        let header: Vec<HeaderCell> = self
            .columns
            .iter()
            .map(|column| HeaderCell {
                key: column.key.clone(),
                title: column.title.clone(),
                sortable: self.is_sortable(&column.key),
                sort: view.sort_indicator_for(&column.key),
                class_name: column.class_name.clone(),
                width: column.width,
                align: column.align,
            })
            .collect();

        if view.is_empty() {
            return RenderedTable::Empty {
                header,
                message: self.config.empty_message.clone(),
            };
        }

        let rows = view
            .rows()
            .iter()
            .map(|row| RenderedRow {
                key: row.key(),
                cells: self
                    .columns
                    .iter()
                    .map(|column| render_cell(column, row.record, &self.config))
                    .collect(),
            })
            .collect();

        RenderedTable::Grid {
            header,
            rows,
            controls: view.controls().cloned(),
        }
    }
}
