//! Table configuration errors

/// Errors raised while building a [`Table`](crate::table::Table).
///
/// These are the only failures the engine knows about. Once a table is
/// built, deriving and rendering never fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Page size must be at least one.
    #[error("Page size must be greater than zero")]
    ZeroPageSize,

    /// The date format string has an invalid specifier.
    #[error("Invalid date format '{0}'")]
    InvalidDateFormat(String),

    /// A column was declared with an empty key.
    #[error("Column at position {index} has an empty key")]
    EmptyColumnKey { index: usize },

    /// Two columns share the same key.
    #[error("Duplicate column key '{0}'")]
    DuplicateColumn(String),

    /// A column spec named a kind that does not exist.
    #[error("Unknown column kind '{0}'")]
    UnknownKind(String),

    /// A column spec named a comparator that does not exist.
    #[error("Unknown comparator '{0}'")]
    UnknownComparator(String),

    /// A column spec named an alignment that does not exist.
    #[error("Unknown alignment '{0}'")]
    UnknownAlignment(String),
}
