//! Unit tests for observation normalization

use chrono::NaiveDate;
use fxtrend::models::RawObservation;
use fxtrend::streaks::normalize;
use rust_decimal_macros::dec;

fn raw(symbol: &str, date: &str, rate: &str) -> RawObservation {
    RawObservation::new(symbol, date, rate)
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
}

#[test]
fn test_sorts_per_currency_by_date() {
    let rows = vec![
        raw("USD", "2025-06-03", "1.10"),
        raw("EUR", "2025-06-02", "0.95"),
        raw("USD", "2025-06-01", "1.00"),
        raw("USD", "2025-06-02", "1.05"),
        raw("EUR", "2025-06-01", "0.90"),
    ];

    let outcome = normalize(&rows, day(30));
    assert_eq!(outcome.rows_read, 5);
    assert_eq!(outcome.rows_dropped, 0);
    assert_eq!(outcome.series.len(), 2);

    let eur = &outcome.series[0];
    assert_eq!(eur.currency_symbol, "EUR");
    assert_eq!(eur.points.len(), 2);
    assert_eq!(eur.points[0].rate_date, day(1));
    assert_eq!(eur.points[1].rate_date, day(2));

    let usd = &outcome.series[1];
    assert_eq!(usd.currency_symbol, "USD");
    let dates: Vec<_> = usd.points.iter().map(|p| p.rate_date).collect();
    assert_eq!(dates, vec![day(1), day(2), day(3)]);
}

#[test]
fn test_first_duplicate_wins() {
    let rows = vec![
        raw("USD", "2025-06-01", "1.00"),
        raw("USD", "2025-06-01", "2.00"),
    ];

    let outcome = normalize(&rows, day(30));
    assert_eq!(outcome.series.len(), 1);
    let usd = &outcome.series[0];
    assert_eq!(usd.points.len(), 1);
    assert_eq!(usd.points[0].exchange_rate, dec!(1.00));
}

#[test]
fn test_drops_malformed_rows() {
    let rows = vec![
        raw("USD", "2025-06-01", "1.00"),
        raw("", "2025-06-01", "1.00"),
        raw("DOLLARS", "2025-06-01", "1.00"),
        raw("USD", "not-a-date", "1.00"),
        raw("USD", "2025-06-02", "one point five"),
    ];

    let outcome = normalize(&rows, day(30));
    assert_eq!(outcome.rows_read, 5);
    assert_eq!(outcome.rows_dropped, 4);
    assert_eq!(outcome.series.len(), 1);
    assert_eq!(outcome.series[0].points.len(), 1);
}

#[test]
fn test_cutoff_excludes_without_counting_as_drop() {
    let rows = vec![
        raw("USD", "2025-06-01", "1.00"),
        raw("USD", "2025-06-02", "1.05"),
        raw("USD", "2025-06-05", "1.20"),
    ];

    let outcome = normalize(&rows, day(2));
    assert_eq!(outcome.rows_dropped, 0);
    let usd = &outcome.series[0];
    assert_eq!(usd.points.len(), 2);
    assert_eq!(usd.latest_date(), Some(day(2)));
}

#[test]
fn test_non_positive_rate_withholds_currency() {
    let rows = vec![
        raw("USD", "2025-06-01", "1.00"),
        raw("ZWL", "2025-06-01", "1.00"),
        raw("ZWL", "2025-06-02", "-1.00"),
        raw("ZWL", "2025-06-03", "0.00"),
    ];

    let outcome = normalize(&rows, day(30));
    assert_eq!(outcome.series.len(), 1);
    assert_eq!(outcome.series[0].currency_symbol, "USD");

    assert_eq!(outcome.invalid.len(), 1);
    let bad = &outcome.invalid[0];
    assert_eq!(bad.currency_symbol, "ZWL");
    // earliest offending date is the one reported
    assert_eq!(bad.rate_date, day(2));
    assert_eq!(bad.exchange_rate, dec!(-1.00));
}

#[test]
fn test_symbol_is_trimmed() {
    let rows = vec![raw(" USD ", "2025-06-01", " 1.00 ")];

    let outcome = normalize(&rows, day(30));
    assert_eq!(outcome.rows_dropped, 0);
    assert_eq!(outcome.series[0].currency_symbol, "USD");
}

#[test]
fn test_empty_input() {
    let outcome = normalize(&[], day(30));
    assert!(outcome.series.is_empty());
    assert_eq!(outcome.rows_read, 0);
    assert_eq!(outcome.rows_dropped, 0);
    assert!(outcome.invalid.is_empty());
}
