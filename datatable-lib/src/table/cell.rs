//! Cell content and formatting dispatch.

use std::fmt::Write;

use crate::model::Record;
use crate::model::Value;
use crate::model::types::Money;

use super::column::Column;
use super::column::ColumnKind;
use super::config::TableConfig;

static NULL: Value = Value::Null;

/// Rendered content of one cell.
///
/// Custom renderers return this verbatim, so a cell can be more than a
/// scalar: a status badge, or several parts side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Plain text.
    Text(String),
    /// Active/inactive indicator.
    Status { active: bool, label: String },
    /// Several parts shown together.
    Composite(Vec<Cell>),
}

impl Cell {
    /// Plain text cell.
    pub fn text(text: impl Into<String>) -> Self {
        Cell::Text(text.into())
    }

    /// Flattens the cell to text, joining composite parts with spaces.
    pub fn plain_text(&self) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Status { label, .. } => label.clone(),
            Cell::Composite(parts) => parts
                .iter()
                .map(Cell::plain_text)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

impl From<String> for Cell {
    fn from(v: String) -> Self {
        Cell::Text(v)
    }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self {
        Cell::Text(v.to_string())
    }
}

/// How one cell is to be produced.
#[derive(Debug, Clone, PartialEq)]
pub enum CellSpec<'a> {
    /// String form of the value, or the placeholder.
    Scalar(&'a Value),
    /// Built-in formatting of the value.
    TypedFormat(ColumnKind, &'a Value),
    /// Output of a custom renderer, used as is.
    Custom(Cell),
}

impl<'a> CellSpec<'a> {
    /// Chooses how to render `column` for `record`.
    ///
    /// A custom renderer wins. Otherwise the column kind decides; text
    /// columns still show booleans as status and money as currency.
    pub fn resolve(column: &Column, record: &'a Record) -> Self {
        let value = record.get(&column.key).unwrap_or(&NULL);

        if let Some(renderer) = &column.renderer {
            return CellSpec::Custom(renderer(value, record));
        }

        match (column.kind, value) {
            (ColumnKind::Text, Value::Bool(_)) => CellSpec::TypedFormat(ColumnKind::Boolean, value),
            (ColumnKind::Text, Value::Money(_)) => CellSpec::TypedFormat(ColumnKind::Currency, value),
            (ColumnKind::Text, _) => CellSpec::Scalar(value),
            (kind, _) => CellSpec::TypedFormat(kind, value),
        }
    }

    /// Produces the cell.
    pub fn into_cell(self, config: &TableConfig) -> Cell {
        match self {
            CellSpec::Custom(cell) => cell,
            CellSpec::Scalar(value) => Cell::Text(plain(value, config)),
            CellSpec::TypedFormat(_, value) if value.is_null() => {
                Cell::Text(config.placeholder.clone())
            }
            CellSpec::TypedFormat(kind, value) => match kind {
                ColumnKind::Text => Cell::Text(plain(value, config)),
                ColumnKind::Boolean => match value {
                    Value::Bool(active) => Cell::Status {
                        active: *active,
                        label: if *active {
                            config.active_label.clone()
                        } else {
                            config.inactive_label.clone()
                        },
                    },
                    _ => Cell::Text(plain(value, config)),
                },
                ColumnKind::Date => Cell::Text(
                    value
                        .as_datetime()
                        .and_then(|dt| {
                            let mut out = String::new();
                            write!(out, "{}", dt.format(&config.date_format)).ok()?;
                            Some(out)
                        })
                        .unwrap_or_else(|| plain(value, config)),
                ),
                ColumnKind::Currency => Cell::Text(
                    as_money(value)
                        .map(|m| m.format_with(&config.currency_symbol))
                        .unwrap_or_else(|| plain(value, config)),
                ),
                ColumnKind::Percentage => Cell::Text(format!("{}%", plain(value, config))),
            },
        }
    }
}

/// Renders the cell of `column` for `record`.
pub fn render_cell(column: &Column, record: &Record, config: &TableConfig) -> Cell {
    CellSpec::resolve(column, record).into_cell(config)
}

fn plain(value: &Value, config: &TableConfig) -> String {
    value
        .display_string()
        .unwrap_or_else(|| config.placeholder.clone())
}

fn as_money(value: &Value) -> Option<Money> {
    match value {
        Value::Money(m) => Some(*m),
        Value::Float(f) => Money::from_f64(*f),
        other => match other.as_decimal() {
            Some(d) => Some(Money::new(d)),
            None => other.as_f64().and_then(Money::from_f64),
        },
    }
}
