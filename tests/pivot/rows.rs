use chrono::NaiveDate;
use nifty_pe::{PePoint, pivot};

fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn pt(s: &str, pe: f64) -> PePoint {
    PePoint {
        date: d(s),
        pe_ratio: pe,
    }
}

#[test]
fn rows_align_series_by_date_and_omit_missing_symbols() {
    let series = vec![
        ("A".to_string(), vec![pt("2024-01-02", 10.0)]),
        (
            "B".to_string(),
            vec![pt("2024-01-01", 5.0), pt("2024-01-02", 6.0)],
        ),
    ];

    let rows = pivot::rows(&series);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, d("2024-01-01"));
    assert_eq!(rows[0].values.get("B"), Some(&5.0));
    assert!(!rows[0].values.contains_key("A"));

    assert_eq!(rows[1].date, d("2024-01-02"));
    assert_eq!(rows[1].values.get("A"), Some(&10.0));
    assert_eq!(rows[1].values.get("B"), Some(&6.0));
}

#[test]
fn unsorted_input_points_still_produce_ascending_rows() {
    let series = vec![(
        "TCS".to_string(),
        vec![
            pt("2024-03-05", 30.1),
            pt("2024-03-01", 29.4),
            pt("2024-03-03", 29.9),
        ],
    )];

    let rows = pivot::rows(&series);

    let dates: Vec<_> = rows.iter().map(|r| r.date).collect();
    assert_eq!(dates, [d("2024-03-01"), d("2024-03-03"), d("2024-03-05")]);
}

#[test]
fn duplicate_dates_keep_the_last_value_seen() {
    let series = vec![(
        "TCS".to_string(),
        vec![pt("2024-03-04", 11.0), pt("2024-03-04", 12.5)],
    )];

    let rows = pivot::rows(&series);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].values.get("TCS"), Some(&12.5));
}

#[test]
fn empty_series_and_empty_point_lists_produce_no_rows() {
    assert!(pivot::rows(&[]).is_empty());

    let series = vec![("TCS".to_string(), Vec::new())];
    assert!(pivot::rows(&series).is_empty());
}

#[test]
fn rows_serialize_flat_with_one_column_per_symbol() {
    let series = vec![
        ("TCS".to_string(), vec![pt("2024-02-01", 29.1)]),
        ("INFY".to_string(), vec![pt("2024-02-01", 24.6)]),
    ];

    let rows = pivot::rows(&series);

    assert_eq!(
        serde_json::to_value(&rows).unwrap(),
        serde_json::json!([{ "date": "2024-02-01", "INFY": 24.6, "TCS": 29.1 }])
    );
}
