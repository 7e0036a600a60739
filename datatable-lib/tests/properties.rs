use std::cmp::Ordering;

use datatable_lib::model::{Record, Value};
use datatable_lib::table::{
    Column, Comparator, PageLink, SearchMode, SortDirection, Table, TableConfig, TableViewState,
    filter_records, page_window, sort_indices, total_pages,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const WORDS: &[&str] = &["amy", "Bob", "oslo", "Bergen", "math", "SCIENCE", "7b", "x"];

fn random_value(rng: &mut StdRng) -> Value {
    match rng.random_range(0..6) {
        0 => Value::Null,
        1 => Value::Bool(rng.random_bool(0.5)),
        2 => Value::Int(rng.random_range(-50..50)),
        3 => Value::Float(f64::from(rng.random_range(0..400)) / 4.0),
        _ => Value::from(WORDS[rng.random_range(0..WORDS.len())]),
    }
}

fn random_records(rng: &mut StdRng, count: usize) -> Vec<Record> {
    (0..count)
        .map(|_| {
            let mut record = Record::new();
            for field in ["name", "city", "score"] {
                if rng.random_bool(0.8) {
                    record.insert(field, random_value(rng));
                }
            }
            record
        })
        .collect()
}

fn matches(record: &Record, query: &str) -> bool {
    let needle = query.to_lowercase();
    record
        .fields()
        .values()
        .filter_map(Value::display_string)
        .any(|s| s.to_lowercase().contains(&needle))
}

#[test]
fn test_filter_is_exact_subset() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let count = rng.random_range(0..40);
        let records = random_records(&mut rng, count);
        let query = &WORDS[rng.random_range(0..WORDS.len())][..1];

        let kept = filter_records(&records, query, SearchMode::Substring);

        assert!(kept.windows(2).all(|w| w[0] < w[1]), "order preserved");
        for (index, record) in records.iter().enumerate() {
            assert_eq!(kept.contains(&index), matches(record, query));
        }
    }
}

#[test]
fn test_empty_filter_is_identity() {
    let mut rng = StdRng::seed_from_u64(12);
    let records = random_records(&mut rng, 30);
    let kept = filter_records(&records, "", SearchMode::Substring);
    assert_eq!(kept, (0..30).collect::<Vec<_>>());
}

#[test]
fn test_sort_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(13);
    for comparator in [Comparator::Natural, Comparator::Numeric, Comparator::CaseInsensitive] {
        let records = random_records(&mut rng, 40);
        let mut once: Vec<usize> = (0..records.len()).collect();
        sort_indices(&records, &mut once, "score", &comparator, SortDirection::Ascending);
        let mut twice = once.clone();
        sort_indices(&records, &mut twice, "score", &comparator, SortDirection::Ascending);
        assert_eq!(once, twice);
    }
}

#[test]
fn test_descending_reverses_comparisons() {
    let mut rng = StdRng::seed_from_u64(14);
    let comparator = Comparator::Natural;
    let null = Value::Null;
    let records = random_records(&mut rng, 60);
    let value = |i: usize| records[i].get("name").unwrap_or(&null);

    let mut asc: Vec<usize> = (0..records.len()).collect();
    sort_indices(&records, &mut asc, "name", &comparator, SortDirection::Ascending);
    let mut desc: Vec<usize> = (0..records.len()).collect();
    sort_indices(&records, &mut desc, "name", &comparator, SortDirection::Descending);

    for pair in asc.windows(2) {
        assert_ne!(comparator.compare(value(pair[0]), value(pair[1])), Ordering::Greater);
    }
    for pair in desc.windows(2) {
        assert_ne!(comparator.compare(value(pair[0]), value(pair[1])), Ordering::Less);
    }
    // Ties keep input order in both directions
    for order in [&asc, &desc] {
        for pair in order.windows(2) {
            if comparator.compare(value(pair[0]), value(pair[1])) == Ordering::Equal {
                assert!(pair[0] < pair[1]);
            }
        }
    }
}

fn random_number(rng: &mut StdRng) -> Value {
    const BIG: i64 = 1 << 53;
    match rng.random_range(0..6) {
        0 => Value::Long(BIG + rng.random_range(-3..4)),
        1 => Value::Float((BIG + rng.random_range(-3..4)) as f64),
        2 => Value::Int(rng.random_range(-5..5)),
        3 => Value::Float(f64::from(rng.random_range(-20..20)) / 4.0),
        4 => Value::Decimal(rust_decimal::Decimal::new(rng.random_range(-500..500), 2)),
        _ => [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1e300, -1e300]
            [rng.random_range(0..5)]
        .into(),
    }
}

#[test]
fn test_natural_order_is_transitive_across_number_types() {
    let mut rng = StdRng::seed_from_u64(29);
    let cmp = Comparator::Natural;
    let values: Vec<Value> = (0..60).map(|_| random_number(&mut rng)).collect();

    for a in &values {
        for b in &values {
            assert_eq!(cmp.compare(a, b), cmp.compare(b, a).reverse());
            for c in &values {
                let (ab, bc) = (cmp.compare(a, b), cmp.compare(b, c));
                if ab != Ordering::Greater && bc != Ordering::Greater {
                    assert_ne!(cmp.compare(a, c), Ordering::Greater, "{a:?} <= {b:?} <= {c:?}");
                }
            }
        }
    }
}

#[test]
fn test_large_longs_sort_among_floats() {
    const BIG: i64 = 1 << 53;
    let mut rng = StdRng::seed_from_u64(31);
    let records: Vec<Record> = (0..200)
        .map(|_| Record::new().set("n", random_number(&mut rng)))
        .collect();
    let mut indices: Vec<usize> = (0..records.len()).collect();
    sort_indices(&records, &mut indices, "n", &Comparator::Natural, SortDirection::Ascending);

    let longs: Vec<i64> = indices
        .iter()
        .filter_map(|&i| match records[i].get("n") {
            Some(Value::Long(n)) => Some(*n),
            _ => None,
        })
        .collect();
    assert!(longs.windows(2).all(|w| w[0] <= w[1]));

    let exact = [Value::Long(BIG + 1), Value::Float(BIG as f64), Value::Long(BIG)];
    assert_eq!(Comparator::Natural.compare(&exact[0], &exact[2]), Ordering::Greater);
    assert_eq!(Comparator::Natural.compare(&exact[0], &exact[1]), Ordering::Greater);
    assert_eq!(Comparator::Natural.compare(&exact[1], &exact[2]), Ordering::Equal);
}

#[test]
fn test_pages_cover_the_filtered_set() {
    let mut rng = StdRng::seed_from_u64(15);
    for page_size in 1..=12 {
        let count = rng.random_range(0..50);
        let records = random_records(&mut rng, count);
        let table = Table::new(
            vec![Column::new("name", "Name"), Column::new("score", "Score")],
            TableConfig::default().with_page_size(page_size),
        )
        .unwrap();
        let state = TableViewState::default()
            .with_search("a")
            .with_sort_toggled("score");

        let first = table.derive(&records, &state);
        let total = first.total_pages();
        let filtered = first.total_filtered();
        assert_eq!(total, total_pages(filtered, page_size));
        assert_eq!(total, filtered.div_ceil(page_size));

        let mut seen = Vec::new();
        for page in 1..=total {
            let state = state.clone().with_page(PageLink::clamped(page, total));
            let view = table.derive(&records, &state);
            if page == total {
                assert_eq!(view.rows().len(), filtered - (total - 1) * page_size);
            } else {
                assert_eq!(view.rows().len(), page_size);
            }
            seen.extend(view.rows().iter().map(|row| row.index));
        }

        let unpaged = Table::new(
            vec![Column::new("name", "Name"), Column::new("score", "Score")],
            TableConfig::default().with_pagination(false),
        )
        .unwrap();
        let all: Vec<usize> = unpaged
            .derive(&records, &state)
            .rows()
            .iter()
            .map(|row| row.index)
            .collect();
        assert_eq!(seen, all);
    }
}

#[test]
fn test_page_window_bounds() {
    for total in 0..60 {
        for current in 1..=total {
            let window = page_window(total, current);
            assert!(window.len() <= 5);
            assert!(window.contains(&current));
            assert!(window.iter().all(|p| (1..=total).contains(p)));
        }
    }
}
