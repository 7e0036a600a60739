//! JSON serialization for Record.
//!
//! Records travel as flat JSON objects:
//! - Every field serializes under its own name, nulls included.
//! - An `"id"` key (string or integer) also becomes the record id on read.
//!   The field stays in the map so it can be searched and displayed.
//! - RFC 3339 strings are read as datetimes; objects and arrays stay JSON.

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;

use super::Record;
use super::RecordId;
use super::Value;

const ID_FIELD: &str = "id";

// =============================================================================
// Serialization
// =============================================================================

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let write_id = self.id.is_some() && !self.fields.contains_key(ID_FIELD);
        let len = self.fields.len() + usize::from(write_id);
        let mut map = serializer.serialize_map(Some(len))?;

        if write_id && let Some(id) = &self.id {
            map.serialize_entry(ID_FIELD, id)?;
        }
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }

        map.end()
    }
}

// =============================================================================
// Deserialization
// =============================================================================

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object representing a record")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Record, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut object = serde_json::Map::new();
        while let Some(key) = map.next_key::<String>()? {
            let value: serde_json::Value = map.next_value()?;
            object.insert(key, value);
        }
        Ok(Record::from_json_object(object))
    }
}

impl Record {
    /// Builds a record from a JSON object.
    pub fn from_json_object(object: serde_json::Map<String, serde_json::Value>) -> Self {
        let mut record = Record::new();

        for (key, json) in object {
            if key == ID_FIELD {
                match &json {
                    serde_json::Value::String(s) if !s.is_empty() => {
                        record.id = Some(RecordId::new(s.as_str()));
                    }
                    serde_json::Value::Number(n) => {
                        record.id = Some(RecordId::new(n.to_string()));
                    }
                    _ => {}
                }
            }
            record.fields.insert(key, json_value_to_value(json));
        }

        record
    }
}

/// Converts a serde_json::Value to our Value enum.
pub(crate) fn json_value_to_value(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                match i32::try_from(i) {
                    Ok(small) => Value::Int(small),
                    Err(_) => Value::Long(i),
                }
            } else if let Some(f) = n.as_f64() {
                Value::Float(f)
            } else {
                Value::Json(serde_json::Value::Number(n))
            }
        }
        // Kept verbatim; date columns parse on demand via `Value::as_datetime`.
        serde_json::Value::String(s) => Value::String(s),
        other => Value::Json(other),
    }
}
