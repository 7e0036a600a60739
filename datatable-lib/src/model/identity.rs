//! Record identity and row keys

use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::Record;

/// Stable identifier of a record.
///
/// Document stores hand out string ids while SQL-backed APIs use integers,
/// so the id is kept in its string form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Creates an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a random synthetic id.
    pub fn synthetic() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}

impl From<String> for RecordId {
    fn from(v: String) -> Self {
        Self(v)
    }
}

impl From<Uuid> for RecordId {
    fn from(v: Uuid) -> Self {
        Self(v.to_string())
    }
}

impl From<i64> for RecordId {
    fn from(v: i64) -> Self {
        Self(v.to_string())
    }
}

impl From<i32> for RecordId {
    fn from(v: i32) -> Self {
        Self(v.to_string())
    }
}

/// Render key of a row.
///
/// A record's own id when it has one, otherwise its position in the input
/// slice handed to the table. Positions refer to the input, not to the
/// filtered or sorted order, so a key keeps pointing at the same record as
/// long as the caller passes the same input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    /// The record's own id.
    Id(RecordId),
    /// Index into the input record slice.
    Position(usize),
}

impl RowKey {
    /// Builds the key for the record at `index` of the input slice.
    pub fn for_record(record: &Record, index: usize) -> Self {
        match record.id() {
            Some(id) => RowKey::Id(id.clone()),
            None => RowKey::Position(index),
        }
    }

    /// Returns `true` if this key falls back to a position.
    pub fn is_positional(&self) -> bool {
        matches!(self, RowKey::Position(_))
    }
}

impl std::fmt::Display for RowKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowKey::Id(id) => write!(f, "{id}"),
            RowKey::Position(index) => write!(f, "#{index}"),
        }
    }
}

/// Gives every record without an id a synthetic one.
///
/// Call this when records are ingested, before they reach a table, so that
/// row keys never depend on positions. Returns the number of ids assigned.
pub fn assign_missing_ids(records: &mut [Record]) -> usize {
    let mut assigned = 0;
    for record in records.iter_mut().filter(|r| r.id().is_none()) {
        record.set_id(RecordId::synthetic());
        assigned += 1;
    }
    if assigned > 0 {
        log::debug!("Assigned synthetic ids to {} records", assigned);
    }
    assigned
}
