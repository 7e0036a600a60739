//! Stable column sorting.

use crate::model::Record;
use crate::model::Value;

use super::compare::Comparator;
use super::state::SortDirection;

static NULL: Value = Value::Null;

/// Sorts record indices by the value each record holds at `key`.
///
/// The sort is stable. Descending order reverses the outcome of each
/// comparison rather than the finished array, so records that compare equal
/// keep their input order in both directions. Missing fields compare as
/// null.
pub fn sort_indices(
    records: &[Record],
    indices: &mut [usize],
    key: &str,
    comparator: &Comparator,
    direction: SortDirection,
) {
    indices.sort_by(|&a, &b| {
        let left = records[a].get(key).unwrap_or(&NULL);
        let right = records[b].get(key).unwrap_or(&NULL);
        let ordering = comparator.compare(left, right);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    log::trace!("sorted {} records by '{}' {:?}", indices.len(), key, direction);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(records: &[Record], indices: &[usize]) -> Vec<String> {
        indices
            .iter()
            .map(|&i| records[i].get_string("name").unwrap().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_ascending_and_descending() {
        let records = vec![
            Record::new().set("name", "Bob").set("score", 70),
            Record::new().set("name", "Amy").set("score", 90),
        ];
        let mut indices = vec![0, 1];

        sort_indices(&records, &mut indices, "name", &Comparator::Natural, SortDirection::Ascending);
        assert_eq!(names(&records, &indices), vec!["Amy", "Bob"]);

        sort_indices(&records, &mut indices, "name", &Comparator::Natural, SortDirection::Descending);
        assert_eq!(names(&records, &indices), vec!["Bob", "Amy"]);
    }

    #[test]
    fn test_ties_keep_input_order_in_both_directions() {
        let records = vec![
            Record::new().set("name", "first").set("grade", 5),
            Record::new().set("name", "second").set("grade", 7),
            Record::new().set("name", "third").set("grade", 5),
        ];

        let mut asc = vec![0, 1, 2];
        sort_indices(&records, &mut asc, "grade", &Comparator::Natural, SortDirection::Ascending);
        assert_eq!(names(&records, &asc), vec!["first", "third", "second"]);

        let mut desc = vec![0, 1, 2];
        sort_indices(&records, &mut desc, "grade", &Comparator::Natural, SortDirection::Descending);
        assert_eq!(names(&records, &desc), vec!["second", "first", "third"]);
    }

    #[test]
    fn test_missing_fields_sort_first_ascending() {
        let records = vec![
            Record::new().set("name", "scored").set("score", 1),
            Record::new().set("name", "unscored"),
        ];
        let mut indices = vec![0, 1];
        sort_indices(&records, &mut indices, "score", &Comparator::Natural, SortDirection::Ascending);
        assert_eq!(names(&records, &indices), vec!["unscored", "scored"]);
    }
}
