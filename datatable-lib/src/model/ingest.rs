//! Loading records from JSON documents

use super::Record;
use crate::error::IngestError;

/// Parses a JSON array of objects into records.
///
/// # Example
///
/// ```
/// use datatable_lib::model::parse_records;
///
/// let records = parse_records(r#"[{"id": 1, "name": "Amy"}, {"name": "Bob"}]"#).unwrap();
/// assert_eq!(records.len(), 2);
/// assert!(records[0].id().is_some());
/// assert!(records[1].id().is_none());
/// ```
pub fn parse_records(json: &str) -> Result<Vec<Record>, IngestError> {
    let document: serde_json::Value = serde_json::from_str(json)?;
    records_from_json(document)
}

/// Converts an already parsed JSON document into records.
pub fn records_from_json(document: serde_json::Value) -> Result<Vec<Record>, IngestError> {
    let serde_json::Value::Array(items) = document else {
        return Err(IngestError::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            serde_json::Value::Object(object) => Ok(Record::from_json_object(object)),
            _ => Err(IngestError::NotAnObject { index }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_array() {
        assert!(matches!(parse_records(r#"{"a": 1}"#), Err(IngestError::NotAnArray)));
    }

    #[test]
    fn test_rejects_non_object_element() {
        let err = parse_records(r#"[{"a": 1}, 2]"#).unwrap_err();
        assert!(matches!(err, IngestError::NotAnObject { index: 1 }));
    }

    #[test]
    fn test_rejects_invalid_json() {
        assert!(matches!(parse_records("[{"), Err(IngestError::Json(_))));
    }

    #[test]
    fn test_empty_array() {
        assert!(parse_records("[]").unwrap().is_empty());
    }
}
