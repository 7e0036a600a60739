//! Dynamic record

use std::collections::HashMap;

use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;

use super::RecordId;
use super::Value;
use super::types::Money;
use crate::error::FieldError;

/// One row's worth of data.
///
/// Records hold field values as a `HashMap<String, Value>`; the engine never
/// assumes which fields exist. Typed getters are for callers that do know
/// the shape, such as custom cell renderers.
///
/// # Example
///
/// ```
/// use datatable_lib::model::Record;
///
/// let record = Record::with_id("sch-1")
///     .set("name", "Riverside High")
///     .set("students", 1_250);
///
/// assert_eq!(record.get_string("name").unwrap(), Some("Riverside High"));
/// assert_eq!(record.get_int("students").unwrap(), Some(1_250));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    /// The record's identifier, if it has one.
    pub(crate) id: Option<RecordId>,

    /// The field values.
    pub(crate) fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record without an id.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty record with the given id.
    ///
    /// The id is not stored as a field, so it does not take part in search
    /// or show up in columns. Records parsed from JSON keep their `"id"`
    /// member as a field as well; add an `id` field with [`Record::set`]
    /// for the same behaviour.
    pub fn with_id(id: impl Into<RecordId>) -> Self {
        Self {
            id: Some(id.into()),
            fields: HashMap::new(),
        }
    }

    /// Returns the record id, if set.
    pub fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    /// Sets the record id.
    pub fn set_id(&mut self, id: impl Into<RecordId>) {
        self.id = Some(id.into());
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Returns the field names in sorted order.
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    // =========================================================================
    // Typed getters
    //
    // Return Err if field is missing or wrong type.
    // Return Ok(None) only if the field exists and is null.
    // =========================================================================

    fn typed<'a, T>(
        &'a self,
        field: &str,
        expected: &'static str,
        pick: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Result<Option<T>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(v) if v.is_null() => Ok(None),
            Some(v) => match pick(v) {
                Some(t) => Ok(Some(t)),
                None => Err(FieldError::type_mismatch(field, expected, v.type_name())),
            },
        }
    }

    /// Gets a string field value.
    pub fn get_string(&self, field: &str) -> Result<Option<&str>, FieldError> {
        self.typed(field, "string", |v| match v {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Gets a boolean field value.
    pub fn get_bool(&self, field: &str) -> Result<Option<bool>, FieldError> {
        self.typed(field, "bool", |v| match v {
            Value::Bool(b) => Some(*b),
            _ => None,
        })
    }

    /// Gets an i32 field value.
    pub fn get_int(&self, field: &str) -> Result<Option<i32>, FieldError> {
        self.typed(field, "int", |v| match v {
            Value::Int(n) => Some(*n),
            _ => None,
        })
    }

    /// Gets an i64 field value.
    pub fn get_long(&self, field: &str) -> Result<Option<i64>, FieldError> {
        self.typed(field, "long", |v| match v {
            Value::Long(n) => Some(*n),
            Value::Int(n) => Some(i64::from(*n)), // Allow widening
            _ => None,
        })
    }

    /// Gets an f64 field value.
    pub fn get_float(&self, field: &str) -> Result<Option<f64>, FieldError> {
        self.typed(field, "float", |v| match v {
            Value::Float(n) => Some(*n),
            _ => None,
        })
    }

    /// Gets a Decimal field value.
    pub fn get_decimal(&self, field: &str) -> Result<Option<Decimal>, FieldError> {
        self.typed(field, "decimal", |v| match v {
            Value::Decimal(d) => Some(*d),
            _ => None,
        })
    }

    /// Gets a DateTime field value, parsing RFC 3339 and `YYYY-MM-DD` strings.
    pub fn get_datetime(&self, field: &str) -> Result<Option<DateTime<Utc>>, FieldError> {
        self.typed(field, "datetime", |v| match v {
            Value::DateTime(_) | Value::String(_) => v.as_datetime(),
            _ => None,
        })
    }

    /// Gets a Money field value.
    pub fn get_money(&self, field: &str) -> Result<Option<Money>, FieldError> {
        self.typed(field, "money", |v| match v {
            Value::Money(m) => Some(*m),
            _ => None,
        })
    }
}
