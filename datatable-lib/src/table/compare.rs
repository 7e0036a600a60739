//! Per-column value ordering.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::model::Value;

/// Caller-supplied comparison for [`Comparator::Custom`].
pub type CompareFn = Arc<dyn Fn(&Value, &Value) -> Ordering + Send + Sync>;

/// How a column orders its values when sorted.
///
/// Every variant is a total order, so mixed-type columns sort
/// deterministically. Values without the view a comparator needs (a
/// non-numeric string under `Numeric`, null everywhere) sort before all
/// others in ascending order.
#[derive(Clone, Default)]
pub enum Comparator {
    /// Type-aware ordering: numbers numerically, strings lexicographically.
    ///
    /// Mixed types are ranked null < bool < number < string < datetime < json.
    #[default]
    Natural,
    /// Numeric ordering, parsing numeric strings.
    Numeric,
    /// Ordering of the string forms.
    Lexicographic,
    /// Ordering of the lowercased string forms.
    CaseInsensitive,
    /// Chronological ordering of datetimes, date strings and epoch millis.
    Date,
    /// Caller-supplied ordering.
    Custom(CompareFn),
}

impl Comparator {
    /// Wraps a closure as a custom comparator.
    pub fn custom<F>(compare: F) -> Self
    where
        F: Fn(&Value, &Value) -> Ordering + Send + Sync + 'static,
    {
        Comparator::Custom(Arc::new(compare))
    }

    /// Parses a comparator name as used in table spec files.
    ///
    /// `Custom` has no name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "natural" | "default" => Some(Comparator::Natural),
            "numeric" | "number" => Some(Comparator::Numeric),
            "lexicographic" | "string" => Some(Comparator::Lexicographic),
            "case_insensitive" | "caseinsensitive" => Some(Comparator::CaseInsensitive),
            "date" => Some(Comparator::Date),
            _ => None,
        }
    }

    /// Compares two values in ascending order.
    pub fn compare(&self, a: &Value, b: &Value) -> Ordering {
        match self {
            Comparator::Natural => natural_cmp(a, b),
            Comparator::Numeric => cmp_option_with(a.as_f64(), b.as_f64(), f64::total_cmp),
            Comparator::Lexicographic => a.display_string().cmp(&b.display_string()),
            Comparator::CaseInsensitive => a
                .display_string()
                .map(|s| s.to_lowercase())
                .cmp(&b.display_string().map(|s| s.to_lowercase())),
            Comparator::Date => a.as_datetime().cmp(&b.as_datetime()),
            Comparator::Custom(compare) => compare(a, b),
        }
    }
}

impl fmt::Debug for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparator::Natural => f.write_str("Natural"),
            Comparator::Numeric => f.write_str("Numeric"),
            Comparator::Lexicographic => f.write_str("Lexicographic"),
            Comparator::CaseInsensitive => f.write_str("CaseInsensitive"),
            Comparator::Date => f.write_str("Date"),
            Comparator::Custom(_) => f.write_str("Custom(<fn>)"),
        }
    }
}

fn cmp_option_with<T>(a: Option<T>, b: Option<T>, cmp: impl Fn(&T, &T) -> Ordering) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => cmp(&x, &y),
    }
}

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null | Value::Json(serde_json::Value::Null) => 0,
        Value::Bool(_) => 1,
        Value::Int(_) | Value::Long(_) | Value::Float(_) | Value::Decimal(_) | Value::Money(_) => 2,
        Value::String(_) | Value::Guid(_) => 3,
        Value::DateTime(_) => 4,
        Value::Json(_) => 5,
    }
}

fn natural_cmp(a: &Value, b: &Value) -> Ordering {
    let by_rank = rank(a).cmp(&rank(b));
    if by_rank != Ordering::Equal {
        return by_rank;
    }

    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::DateTime(x), Value::DateTime(y)) => x.cmp(y),
        _ if a.is_number() => NumberKey::of(a).cmp(&NumberKey::of(b)),
        _ => a.display_string().cmp(&b.display_string()),
    }
}

/// Sort key shared by all numeric values.
///
/// Finite floats take their decimal view so that ints, longs, floats and
/// decimals compare on one scale. Floats beyond the decimal range sit below
/// or above every decimal; NaN sorts last.
#[derive(Debug, Clone, Copy)]
enum NumberKey {
    Below(f64),
    Exact(Decimal),
    Above(f64),
    NaN,
}

impl NumberKey {
    fn of(value: &Value) -> Self {
        if let Some(d) = value.as_decimal() {
            return NumberKey::Exact(d);
        }
        match value.as_f64() {
            Some(f) if f.is_nan() => NumberKey::NaN,
            Some(f) => match Decimal::from_f64_retain(f) {
                Some(d) => NumberKey::Exact(d),
                None if f < 0.0 => NumberKey::Below(f),
                None => NumberKey::Above(f),
            },
            None => NumberKey::NaN,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            NumberKey::Below(_) => 0,
            NumberKey::Exact(_) => 1,
            NumberKey::Above(_) => 2,
            NumberKey::NaN => 3,
        }
    }
}

impl PartialEq for NumberKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NumberKey {}

impl PartialOrd for NumberKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NumberKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (NumberKey::Exact(x), NumberKey::Exact(y)) => x.cmp(y),
            (NumberKey::Below(x), NumberKey::Below(y)) | (NumberKey::Above(x), NumberKey::Above(y)) => {
                x.total_cmp(y)
            }
            _ => self.rank().cmp(&other.rank()),
        }
    }
}
