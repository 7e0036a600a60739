//! Table engine - filter, sort, and paginate records for display.
//!
//! A [`Table`] holds the fixed part of a table: its columns and
//! [`TableConfig`]. The changing part, search text, sort and page, lives in
//! a caller-owned [`TableViewState`]. Output is recomputed from scratch on
//! every call:
//!
//! ```text
//! records ──filter──▶ matching ──sort──▶ ordered ──paginate──▶ visible page
//! ```
//!
//! # Example
//!
//! ```
//! use datatable_lib::model::Record;
//! use datatable_lib::table::{Column, Table, TableConfig, TableViewState};
//!
//! let records: Vec<Record> = (1..=12)
//!     .map(|i| Record::with_id(i).set("name", format!("Item {i}")))
//!     .collect();
//! let table = Table::new(vec![Column::new("name", "Name")], TableConfig::default()).unwrap();
//!
//! let state = TableViewState::default();
//! let view = table.derive(&records, &state);
//! assert_eq!(view.rows().len(), 10);
//! assert_eq!(view.total_pages(), 2);
//!
//! let state = table.search(state, "Item 1");
//! let view = table.derive(&records, &state);
//! assert_eq!(view.total_filtered(), 4);
//! assert_eq!(view.total_pages(), 1);
//! ```

mod cell;
mod column;
mod compare;
mod config;
mod derive;
mod filter;
mod paginate;
mod render;
mod sort;
mod spec;
mod state;
mod text;

pub use cell::*;
pub use column::*;
pub use compare::*;
pub use config::*;
pub use derive::*;
pub use filter::*;
pub use paginate::*;
pub use render::*;
pub use sort::*;
pub use spec::*;
pub use state::*;
pub use text::*;

use std::collections::HashSet;

use crate::error::ConfigError;

/// A configured table.
///
/// Columns and config are fixed for the table's lifetime; build a new table
/// to change them.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
    config: TableConfig,
}

impl Table {
    /// Creates a table, checking the config and that column keys are
    /// non-empty and unique.
    pub fn new(columns: Vec<Column>, config: TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut seen = HashSet::with_capacity(columns.len());
        for (index, column) in columns.iter().enumerate() {
            if column.key.is_empty() {
                return Err(ConfigError::EmptyColumnKey { index });
            }
            if !seen.insert(column.key.as_str()) {
                return Err(ConfigError::DuplicateColumn(column.key.clone()));
            }
        }

        log::debug!(
            "Table created with {} columns (page size {}, searchable {}, sortable {}, pagination {})",
            columns.len(),
            config.page_size,
            config.searchable,
            config.sortable,
            config.pagination
        );
        Ok(Self { columns, config })
    }

    /// Column definitions, in display order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Looks up a column by key.
    pub fn column(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Table configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Returns `true` if header clicks on `key` change the sort.
    pub fn is_sortable(&self, key: &str) -> bool {
        self.config.sortable && self.column(key).is_some_and(|c| c.sortable)
    }

    // -------------------------------------------------------------------------
    // State transitions
    // -------------------------------------------------------------------------

    /// Replaces the search text and returns to page 1.
    ///
    /// No-op if the table is not searchable.
    pub fn search(&self, state: TableViewState, text: impl Into<String>) -> TableViewState {
        if !self.config.searchable {
            return state;
        }
        state.with_search(text)
    }

    /// Toggles the sort on a column.
    ///
    /// Flips the direction if already sorted by `key`, otherwise sorts
    /// ascending. No-op if the table or column is not sortable, or `key` is
    /// not a column.
    pub fn toggle_sort(&self, state: TableViewState, key: &str) -> TableViewState {
        if !self.is_sortable(key) {
            log::debug!("Ignoring sort toggle on '{}'", key);
            return state;
        }
        state.with_sort_toggled(key)
    }

    /// Moves to a page. No-op if pagination is disabled.
    pub fn select_page(&self, state: TableViewState, link: PageLink) -> TableViewState {
        if !self.config.pagination {
            return state;
        }
        state.with_page(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_duplicate_keys() {
        let err = Table::new(
            vec![Column::new("name", "Name"), Column::new("name", "Again")],
            TableConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateColumn("name".into()));
    }

    #[test]
    fn test_rejects_empty_key() {
        let err = Table::new(vec![Column::new("", "Blank")], TableConfig::default()).unwrap_err();
        assert_eq!(err, ConfigError::EmptyColumnKey { index: 0 });
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = TableConfig::default().with_page_size(0);
        assert!(Table::new(vec![Column::new("a", "A")], config).is_err());
    }

    #[test]
    fn test_toggle_sort_respects_flags() {
        let columns = vec![Column::new("name", "Name"), Column::new("actions", "").unsortable()];
        let table = Table::new(columns.clone(), TableConfig::default()).unwrap();

        let state = table.toggle_sort(TableViewState::default(), "actions");
        assert!(state.sort().is_none());
        let state = table.toggle_sort(state, "unknown");
        assert!(state.sort().is_none());
        let state = table.toggle_sort(state, "name");
        assert_eq!(state.sort(), Some(&SortState::asc("name")));

        let fixed = Table::new(columns, TableConfig::default().with_sortable(false)).unwrap();
        assert!(fixed.toggle_sort(TableViewState::default(), "name").sort().is_none());
    }

    #[test]
    fn test_search_respects_flag() {
        let table = Table::new(
            vec![Column::new("name", "Name")],
            TableConfig::default().with_searchable(false),
        )
        .unwrap();
        assert_eq!(table.search(TableViewState::default(), "amy").search(), "");
    }

    #[test]
    fn test_select_page_respects_flag() {
        let table = Table::new(
            vec![Column::new("name", "Name")],
            TableConfig::default().with_pagination(false),
        )
        .unwrap();
        let state = table.select_page(TableViewState::default(), PageLink::clamped(2, 3));
        assert_eq!(state.page(), 1);
    }
}
