//! Value enum for dynamic field values

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::SecondsFormat;
use chrono::TimeZone;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::types::Money;

/// A dynamic value held by a record field.
///
/// The engine never assumes a shape for records, so every field is one of
/// these variants. Nested structures are kept as raw JSON.
///
/// # Type Mapping
///
/// | JSON input | Rust Variant |
/// |------------|--------------|
/// | null | `Null` |
/// | true / false | `Bool` |
/// | integer within i32 | `Int` |
/// | larger integer | `Long` |
/// | fractional number | `Float` |
/// | RFC 3339 string | `DateTime` |
/// | other string | `String` |
/// | object / array | `Json` |
///
/// `Decimal`, `Guid` and `Money` are only produced from Rust code.
///
/// # Example
///
/// ```
/// use datatable_lib::model::Value;
///
/// let name = Value::from("Riverside High");
/// let enrolled = Value::from(1_250);
/// let active = Value::from(true);
/// assert_eq!(enrolled.display_string().as_deref(), Some("1250"));
/// assert!(Value::Null.display_string().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 32-bit integer.
    Int(i32),
    /// 64-bit integer.
    Long(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Arbitrary precision decimal.
    Decimal(Decimal),
    /// String value.
    String(String),
    /// GUID/UUID value.
    Guid(Uuid),
    /// Date and time in UTC.
    DateTime(DateTime<Utc>),
    /// Monetary value.
    Money(Money),
    /// Nested structure kept as JSON.
    Json(serde_json::Value),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null | Value::Json(serde_json::Value::Null))
    }

    /// Returns `true` for the numeric variants (including money).
    pub fn is_number(&self) -> bool {
        matches!(
            self,
            Value::Int(_) | Value::Long(_) | Value::Float(_) | Value::Decimal(_) | Value::Money(_)
        )
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::Guid(_) => "guid",
            Value::DateTime(_) => "datetime",
            Value::Money(_) => "money",
            Value::Json(_) => "json",
        }
    }

    /// Returns the string form used for searching and default rendering.
    ///
    /// Null has no string form. Nested JSON renders as compact JSON text,
    /// except JSON strings which render without quotes.
    pub fn display_string(&self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::Bool(b) => Some(b.to_string()),
            Value::Int(n) => Some(n.to_string()),
            Value::Long(n) => Some(n.to_string()),
            Value::Float(n) => Some(n.to_string()),
            Value::Decimal(d) => Some(d.normalize().to_string()),
            Value::String(s) => Some(s.clone()),
            Value::Guid(g) => Some(g.to_string()),
            Value::DateTime(dt) => Some(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Value::Money(m) => Some(m.to_string()),
            Value::Json(serde_json::Value::Null) => None,
            Value::Json(serde_json::Value::String(s)) => Some(s.clone()),
            Value::Json(json) => Some(json.to_string()),
        }
    }

    /// Numeric view of this value.
    ///
    /// Strings are parsed after trimming; booleans and nested values have no
    /// numeric view.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(f64::from(*n)),
            Value::Long(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            Value::Decimal(d) => d.to_f64(),
            Value::Money(m) => m.value().to_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            Value::Json(serde_json::Value::Number(n)) => n.as_f64(),
            _ => None,
        }
    }

    /// Exact decimal view for integer, decimal and money values.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Value::Int(n) => Some(Decimal::from(*n)),
            Value::Long(n) => Some(Decimal::from(*n)),
            Value::Decimal(d) => Some(*d),
            Value::Money(m) => Some(m.value()),
            _ => None,
        }
    }

    /// Date view of this value.
    ///
    /// Accepts datetimes, RFC 3339 strings, `YYYY-MM-DD` strings (midnight
    /// UTC), and integers as milliseconds since the Unix epoch.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::DateTime(dt) => Some(*dt),
            Value::String(s) => parse_date_str(s),
            Value::Json(serde_json::Value::String(s)) => parse_date_str(s),
            Value::Int(n) => Utc.timestamp_millis_opt(i64::from(*n)).single(),
            Value::Long(n) => Utc.timestamp_millis_opt(*n).single(),
            _ => None,
        }
    }
}

fn parse_date_str(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Guid(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl From<Money> for Value {
    fn from(v: Money) -> Self {
        Value::Money(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}
