//! Column descriptors.

use std::fmt;
use std::sync::Arc;

use crate::model::Record;
use crate::model::Value;

use super::cell::Cell;
use super::compare::Comparator;

/// Caller-supplied cell renderer.
///
/// Receives the raw field value (`Value::Null` when the field is missing)
/// and the whole record, so composite cells can draw on several fields.
pub type CellRenderer = Arc<dyn Fn(&Value, &Record) -> Cell + Send + Sync>;

/// Column width hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColumnWidth {
    /// Fixed width in characters.
    Fixed(u16),
    /// Flexible width with weight.
    Flex(u16),
    /// Size to content.
    #[default]
    Auto,
}

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Parses an alignment name as used in table spec files.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "left" => Some(Alignment::Left),
            "center" | "centre" => Some(Alignment::Center),
            "right" => Some(Alignment::Right),
            _ => None,
        }
    }
}

/// Built-in formatting applied when a column has no custom renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnKind {
    /// String form of the value.
    #[default]
    Text,
    /// Active/inactive indicator.
    Boolean,
    /// Date formatted with the table's date format.
    Date,
    /// Two decimals behind the currency symbol.
    Currency,
    /// String form followed by `%`.
    Percentage,
}

impl ColumnKind {
    /// Parses a kind name as used in table spec files.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "text" | "string" => Some(ColumnKind::Text),
            "boolean" | "bool" => Some(ColumnKind::Boolean),
            "date" => Some(ColumnKind::Date),
            "currency" | "money" => Some(ColumnKind::Currency),
            "percentage" | "percent" => Some(ColumnKind::Percentage),
            _ => None,
        }
    }
}

/// A table column definition.
///
/// Columns fix display order and say how each field is labeled, sized,
/// compared, and rendered.
///
/// # Examples
///
/// ```
/// use datatable_lib::table::{Alignment, Column, Comparator};
///
/// let columns = vec![
///     Column::new("name", "School").flex(2),
///     Column::new("students", "Students").fixed(10).align(Alignment::Right),
///     Column::new("founded", "Founded").date(),
///     Column::new("budget", "Budget").currency().comparator(Comparator::Numeric),
///     Column::new("actions", "").unsortable(),
/// ];
/// assert_eq!(columns.len(), 5);
/// ```
#[derive(Clone)]
pub struct Column {
    /// Field name this column reads.
    pub key: String,
    /// Header label.
    pub title: String,
    /// Layout hint.
    pub width: ColumnWidth,
    /// Built-in formatting.
    pub kind: ColumnKind,
    /// Ordering used when sorting by this column.
    pub comparator: Comparator,
    /// Custom renderer, overriding `kind`.
    pub renderer: Option<CellRenderer>,
    /// Style hook passed through to rendered headers.
    pub class_name: Option<String>,
    /// Horizontal alignment.
    pub align: Alignment,
    /// Whether header clicks sort by this column.
    pub sortable: bool,
}

impl Column {
    /// Create a new text column with the given key and title.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            width: ColumnWidth::default(),
            kind: ColumnKind::default(),
            comparator: Comparator::default(),
            renderer: None,
            class_name: None,
            align: Alignment::default(),
            sortable: true,
        }
    }

    /// Set a fixed width for this column.
    pub fn fixed(mut self, width: u16) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set a flex width for this column.
    pub fn flex(mut self, weight: u16) -> Self {
        self.width = ColumnWidth::Flex(weight);
        self
    }

    /// Set auto width for this column.
    pub fn auto(mut self) -> Self {
        self.width = ColumnWidth::Auto;
        self
    }

    /// Set the built-in formatting.
    ///
    /// Date and currency columns switch to the matching comparator unless
    /// one was already chosen.
    pub fn kind(mut self, kind: ColumnKind) -> Self {
        self.kind = kind;
        if matches!(self.comparator, Comparator::Natural) {
            self.comparator = match kind {
                ColumnKind::Date => Comparator::Date,
                ColumnKind::Currency | ColumnKind::Percentage => Comparator::Numeric,
                ColumnKind::Text | ColumnKind::Boolean => Comparator::Natural,
            };
        }
        self
    }

    /// Shorthand for `kind(ColumnKind::Boolean)`.
    pub fn boolean(self) -> Self {
        self.kind(ColumnKind::Boolean)
    }

    /// Shorthand for `kind(ColumnKind::Date)`.
    pub fn date(self) -> Self {
        self.kind(ColumnKind::Date)
    }

    /// Shorthand for `kind(ColumnKind::Currency)`.
    pub fn currency(self) -> Self {
        self.kind(ColumnKind::Currency)
    }

    /// Shorthand for `kind(ColumnKind::Percentage)`.
    pub fn percentage(self) -> Self {
        self.kind(ColumnKind::Percentage)
    }

    /// Set the sort comparator.
    pub fn comparator(mut self, comparator: Comparator) -> Self {
        self.comparator = comparator;
        self
    }

    /// Set a custom cell renderer.
    pub fn render<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&Value, &Record) -> Cell + Send + Sync + 'static,
    {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    /// Set the style hook.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Exclude this column from sorting.
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("width", &self.width)
            .field("kind", &self.kind)
            .field("comparator", &self.comparator)
            .field("renderer", &self.renderer.as_ref().map(|_| "<fn>"))
            .field("class_name", &self.class_name)
            .field("align", &self.align)
            .field("sortable", &self.sortable)
            .finish()
    }
}
