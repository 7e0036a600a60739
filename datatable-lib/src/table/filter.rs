//! Search filtering.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::model::Record;

use super::config::SearchMode;

/// Returns the indices of the records matching `query`, in input order.
///
/// A record matches when any of its field values, in string form, matches
/// the query. Null fields never match. An empty query keeps every record.
///
/// # Example
///
/// ```
/// use datatable_lib::model::Record;
/// use datatable_lib::table::{filter_records, SearchMode};
///
/// let records = vec![
///     Record::new().set("name", "Item 1"),
///     Record::new().set("name", "Item 2"),
///     Record::new().set("name", "Item 10"),
/// ];
/// assert_eq!(filter_records(&records, "item 1", SearchMode::Substring), vec![0, 2]);
/// ```
pub fn filter_records(records: &[Record], query: &str, mode: SearchMode) -> Vec<usize> {
    // Empty query returns all records
    if query.is_empty() {
        return (0..records.len()).collect();
    }

    let matched: Vec<usize> = match mode {
        SearchMode::Substring => {
            let needle = query.to_lowercase();
            records
                .iter()
                .enumerate()
                .filter(|(_, record)| {
                    field_strings(record).any(|s| s.to_lowercase().contains(&needle))
                })
                .map(|(index, _)| index)
                .collect()
        }
        SearchMode::Fuzzy => {
            let mut matcher = Matcher::new(Config::DEFAULT);
            let pattern = Pattern::new(
                query,
                CaseMatching::Ignore,
                Normalization::Smart,
                AtomKind::Fuzzy,
            );
            let mut buf = Vec::new();
            records
                .iter()
                .enumerate()
                .filter(|(_, record)| {
                    field_strings(record).any(|s| {
                        let haystack = Utf32Str::new(&s, &mut buf);
                        pattern.score(haystack, &mut matcher).is_some()
                    })
                })
                .map(|(index, _)| index)
                .collect()
        }
    };

    log::trace!(
        "filter {:?} '{}': {} of {} records",
        mode,
        query,
        matched.len(),
        records.len()
    );
    matched
}

fn field_strings(record: &Record) -> impl Iterator<Item = String> + '_ {
    record.fields().values().filter_map(|value| value.display_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schools() -> Vec<Record> {
        vec![
            Record::new().set("name", "Riverside High").set("city", "Oslo"),
            Record::new().set("name", "Hillcrest").set("city", "Bergen").set("rank", 3),
            Record::new().set("name", "Lakeside").set("city", crate::model::Value::Null),
        ]
    }

    #[test]
    fn test_empty_query_returns_all() {
        assert_eq!(filter_records(&schools(), "", SearchMode::Substring), vec![0, 1, 2]);
    }

    #[test]
    fn test_substring_is_case_insensitive() {
        assert_eq!(filter_records(&schools(), "SIDE", SearchMode::Substring), vec![0, 2]);
    }

    #[test]
    fn test_matches_any_field() {
        assert_eq!(filter_records(&schools(), "bergen", SearchMode::Substring), vec![1]);
        assert_eq!(filter_records(&schools(), "3", SearchMode::Substring), vec![1]);
    }

    #[test]
    fn test_null_fields_do_not_match() {
        assert!(filter_records(&schools(), "null", SearchMode::Substring).is_empty());
    }

    #[test]
    fn test_no_matches() {
        assert!(filter_records(&schools(), "xyz", SearchMode::Substring).is_empty());
    }

    #[test]
    fn test_fuzzy_matches_subsequence() {
        let matched = filter_records(&schools(), "rvsd", SearchMode::Fuzzy);
        assert_eq!(matched, vec![0]);
    }

    #[test]
    fn test_fuzzy_keeps_input_order() {
        let matched = filter_records(&schools(), "sd", SearchMode::Fuzzy);
        assert_eq!(matched, vec![0, 2]);
    }
}
