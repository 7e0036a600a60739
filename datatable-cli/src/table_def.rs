//! Resolves the table definition for a run.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use datatable_lib::model::Record;
use datatable_lib::table::ColumnSpec;
use datatable_lib::table::TableSpec;
use log::debug;
use log::info;

use crate::error::CliError;
use crate::paths;

/// Loads `explicit`, else `table.json` from the config dir, else infers
/// columns from `records`.
pub fn load(explicit: Option<&Path>, records: &[Record]) -> Result<TableSpec, CliError> {
    if let Some(path) = explicit {
        return read(path);
    }
    if let Some(path) = paths::table_config()
        && path.is_file()
    {
        info!("Using table config {}", path.display());
        return read(&path);
    }
    debug!("No table config found, inferring columns");
    Ok(infer(records))
}

fn read(path: &Path) -> Result<TableSpec, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

/// One column per field seen in any record, sorted by key with `id` first.
pub fn infer(records: &[Record]) -> TableSpec {
    let keys: BTreeSet<&str> = records.iter().flat_map(Record::field_names).collect();

    let mut columns: Vec<ColumnSpec> = Vec::with_capacity(keys.len());
    if keys.contains("id") {
        columns.push(ColumnSpec::for_key("id"));
    }
    columns.extend(
        keys.into_iter()
            .filter(|key| *key != "id")
            .map(ColumnSpec::for_key),
    );

    TableSpec {
        columns,
        ..TableSpec::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_orders_id_first() {
        let records = vec![
            Record::new().set("name", "Alice").set("id", 1),
            Record::new().set("age", 30).set("city", "Oslo"),
        ];

        let spec = infer(&records);
        let keys: Vec<&str> = spec.columns.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, ["id", "age", "city", "name"]);
    }

    #[test]
    fn test_infer_empty() {
        assert!(infer(&[]).columns.is_empty());
    }

    #[test]
    fn test_explicit_file() {
        let path = std::env::temp_dir().join(format!("datatable-spec-{}.json", std::process::id()));
        fs::write(&path, r#"{"columns": [{"key": "name"}], "page_size": 3}"#).unwrap();

        let spec = load(Some(&path), &[]).unwrap();
        assert_eq!(spec.columns.len(), 1);
        assert_eq!(spec.page_size, Some(3));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load(Some(Path::new("/nonexistent/table.json")), &[]).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }
}
