//! Serializable table definitions.
//!
//! A [`TableSpec`] describes a table in a config file. Custom renderers
//! and comparators cannot be written down, so specs cover the built-in
//! kinds and comparators only.

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;

use super::Table;
use super::column::Alignment;
use super::column::Column;
use super::column::ColumnKind;
use super::column::ColumnWidth;
use super::compare::Comparator;
use super::config::SearchMode;
use super::config::TableConfig;

/// Column entry of a [`TableSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSpec {
    /// Field name.
    pub key: String,
    /// Header label; the key when omitted.
    pub title: Option<String>,
    /// Fixed width in characters.
    pub width: Option<u16>,
    /// Kind name: text, boolean, date, currency, percentage.
    pub kind: Option<String>,
    /// Comparator name: natural, numeric, lexicographic, case_insensitive, date.
    pub comparator: Option<String>,
    /// Alignment: left, center, right.
    pub align: Option<String>,
    /// Whether the column sorts. Default: true
    pub sortable: Option<bool>,
    /// Style hook.
    pub class_name: Option<String>,
}

impl ColumnSpec {
    /// Column for `key` with every option left at its default.
    pub fn for_key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Builds the column.
    pub fn to_column(&self) -> Result<Column, ConfigError> {
        let title = self.title.clone().unwrap_or_else(|| self.key.clone());
        let mut column = Column::new(self.key.clone(), title);

        if let Some(width) = self.width {
            column.width = ColumnWidth::Fixed(width);
        }
        if let Some(name) = &self.kind {
            let kind =
                ColumnKind::from_name(name).ok_or_else(|| ConfigError::UnknownKind(name.clone()))?;
            column = column.kind(kind);
        }
        if let Some(name) = &self.comparator {
            let comparator = Comparator::from_name(name)
                .ok_or_else(|| ConfigError::UnknownComparator(name.clone()))?;
            column = column.comparator(comparator);
        }
        if let Some(name) = &self.align {
            column.align =
                Alignment::from_name(name).ok_or_else(|| ConfigError::UnknownAlignment(name.clone()))?;
        }
        if self.sortable == Some(false) {
            column = column.unsortable();
        }
        if let Some(class_name) = &self.class_name {
            column = column.class_name(class_name.clone());
        }
        Ok(column)
    }
}

/// A table definition as stored in a JSON config file.
///
/// # Example
///
/// ```
/// use datatable_lib::table::TableSpec;
///
/// let spec: TableSpec = serde_json::from_str(r#"{
///     "columns": [
///         {"key": "name", "title": "School"},
///         {"key": "budget", "kind": "currency", "align": "right"}
///     ],
///     "page_size": 5
/// }"#).unwrap();
///
/// let table = spec.build().unwrap();
/// assert_eq!(table.columns().len(), 2);
/// assert_eq!(table.config().page_size, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSpec {
    /// Columns in display order.
    pub columns: Vec<ColumnSpec>,
    pub page_size: Option<usize>,
    pub searchable: Option<bool>,
    pub sortable: Option<bool>,
    pub pagination: Option<bool>,
    pub search_mode: Option<SearchMode>,
    pub empty_message: Option<String>,
    pub date_format: Option<String>,
    pub currency_symbol: Option<String>,
}

impl TableSpec {
    /// Applies the spec's overrides to the default config.
    pub fn config(&self) -> TableConfig {
        let defaults = TableConfig::default();
        let mut config = TableConfig {
            searchable: self.searchable.unwrap_or(defaults.searchable),
            sortable: self.sortable.unwrap_or(defaults.sortable),
            pagination: self.pagination.unwrap_or(defaults.pagination),
            page_size: self.page_size.unwrap_or(defaults.page_size),
            search_mode: self.search_mode.unwrap_or(defaults.search_mode),
            ..defaults
        };
        if let Some(message) = &self.empty_message {
            config.empty_message = message.clone();
        }
        if let Some(format) = &self.date_format {
            config.date_format = format.clone();
        }
        if let Some(symbol) = &self.currency_symbol {
            config.currency_symbol = symbol.clone();
        }
        config
    }

    /// Builds the table.
    pub fn build(&self) -> Result<Table, ConfigError> {
        let columns = self
            .columns
            .iter()
            .map(ColumnSpec::to_column)
            .collect::<Result<Vec<_>, _>>()?;
        Table::new(columns, self.config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_defaults() {
        let column = ColumnSpec::for_key("name").to_column().unwrap();
        assert_eq!(column.title, "name");
        assert_eq!(column.kind, ColumnKind::Text);
        assert!(column.sortable);
        assert_eq!(column.width, ColumnWidth::Auto);
    }

    #[test]
    fn test_kind_sets_comparator() {
        let spec = ColumnSpec {
            kind: Some("date".into()),
            ..ColumnSpec::for_key("created")
        };
        let column = spec.to_column().unwrap();
        assert!(matches!(column.comparator, Comparator::Date));
    }

    #[test]
    fn test_unknown_kind() {
        let spec = ColumnSpec {
            kind: Some("sparkline".into()),
            ..ColumnSpec::for_key("trend")
        };
        assert_eq!(
            spec.to_column().unwrap_err(),
            ConfigError::UnknownKind("sparkline".into())
        );
    }

    #[test]
    fn test_unknown_comparator() {
        let spec = ColumnSpec {
            comparator: Some("random".into()),
            ..ColumnSpec::for_key("name")
        };
        assert!(matches!(spec.to_column(), Err(ConfigError::UnknownComparator(_))));
    }

    #[test]
    fn test_alignment() {
        let spec = ColumnSpec {
            align: Some("Right".into()),
            ..ColumnSpec::for_key("budget")
        };
        assert_eq!(spec.to_column().unwrap().align, Alignment::Right);

        let spec = ColumnSpec {
            align: Some("justify".into()),
            ..ColumnSpec::for_key("budget")
        };
        assert_eq!(
            spec.to_column().unwrap_err(),
            ConfigError::UnknownAlignment("justify".into())
        );
    }

    #[test]
    fn test_config_overrides() {
        let spec: TableSpec = serde_json::from_str(
            r#"{"columns": [], "pagination": false, "search_mode": "fuzzy", "currency_symbol": "kr "}"#,
        )
        .unwrap();
        let config = spec.config();
        assert!(!config.pagination);
        assert_eq!(config.search_mode, SearchMode::Fuzzy);
        assert_eq!(config.currency_symbol, "kr ");
        assert_eq!(config.page_size, 10);
    }
}
