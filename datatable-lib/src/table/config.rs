//! Table configuration

use chrono::format::Item;
use chrono::format::StrftimeItems;
use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;

/// How search text is matched against field values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Case-insensitive substring match.
    #[default]
    Substring,
    /// Case-insensitive fuzzy match.
    Fuzzy,
}

/// Behaviour flags and display strings for a table.
///
/// # Example
///
/// ```
/// use datatable_lib::table::TableConfig;
///
/// let config = TableConfig::default()
///     .with_page_size(25)
///     .with_empty_message("No schools found")
///     .with_currency_symbol("€");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Whether search text filters records.
    ///
    /// Default: true
    pub searchable: bool,

    /// Whether header clicks sort.
    ///
    /// Default: true
    pub sortable: bool,

    /// Whether records are split into pages.
    ///
    /// Default: true
    pub pagination: bool,

    /// Records per page.
    ///
    /// Default: 10
    pub page_size: usize,

    /// Search matching strategy.
    ///
    /// Default: substring
    pub search_mode: SearchMode,

    /// Shown instead of the grid when no record passes the filter.
    pub empty_message: String,

    /// Shown instead of the grid while the caller is loading.
    pub loading_message: String,

    /// `chrono` format string for date columns.
    ///
    /// Default: `%m/%d/%Y`
    pub date_format: String,

    /// Prefix for currency columns.
    pub currency_symbol: String,

    /// Label for `true` in boolean cells.
    pub active_label: String,

    /// Label for `false` in boolean cells.
    pub inactive_label: String,

    /// Rendered for null and missing values.
    pub placeholder: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            searchable: true,
            sortable: true,
            pagination: true,
            page_size: 10,
            search_mode: SearchMode::Substring,
            empty_message: "No data available".to_string(),
            loading_message: "Loading...".to_string(),
            date_format: "%m/%d/%Y".to_string(),
            currency_symbol: "$".to_string(),
            active_label: "Active".to_string(),
            inactive_label: "Inactive".to_string(),
            placeholder: "-".to_string(),
        }
    }
}

impl TableConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables searching.
    pub fn with_searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    /// Enables or disables sorting.
    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Enables or disables pagination.
    pub fn with_pagination(mut self, pagination: bool) -> Self {
        self.pagination = pagination;
        self
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the search mode.
    pub fn with_search_mode(mut self, search_mode: SearchMode) -> Self {
        self.search_mode = search_mode;
        self
    }

    /// Sets the empty-state message.
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Sets the loading message.
    pub fn with_loading_message(mut self, message: impl Into<String>) -> Self {
        self.loading_message = message.into();
        self
    }

    /// Sets the date format.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Sets the currency symbol.
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Sets the boolean labels.
    pub fn with_status_labels(mut self, active: impl Into<String>, inactive: impl Into<String>) -> Self {
        self.active_label = active.into();
        self.inactive_label = inactive.into();
        self
    }

    /// Sets the placeholder for missing values.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Checks the config for values the engine cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidDateFormat(self.date_format.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(TableConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let config = TableConfig::default().with_page_size(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroPageSize));
    }

    #[test]
    fn test_bad_date_format_rejected() {
        let config = TableConfig::default().with_date_format("%Y-%Q");
        assert!(matches!(config.validate(), Err(ConfigError::InvalidDateFormat(_))));
    }
}
