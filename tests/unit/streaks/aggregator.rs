//! Unit tests for streak averaging

use chrono::NaiveDate;
use fxtrend::models::Streak;
use fxtrend::streaks::aggregate_streaks;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
}

fn streak(symbol: &str, start_rate: Decimal, end_rate: Decimal, length: usize) -> Streak {
    Streak {
        currency_symbol: symbol.to_string(),
        start_date: day(1),
        end_date: day(length as u32),
        start_rate,
        end_rate,
        length,
    }
}

#[test]
fn test_no_streaks_no_aggregate() {
    let result = aggregate_streaks("USD", &[]);
    assert!(matches!(result, Ok(None)));
}

#[test]
fn test_single_streak_percentage() {
    let streaks = vec![streak("USD", dec!(1.00), dec!(1.10), 3)];

    let aggregate = aggregate_streaks("USD", &streaks).unwrap().unwrap();
    assert_eq!(aggregate.currency_symbol, "USD");
    assert_eq!(aggregate.avg_percent_change, dec!(10.0000));
    assert_eq!(aggregate.avg_percent_change.to_string(), "10.0000");
}

#[test]
fn test_mean_is_unweighted_by_length() {
    // 10% over 5 points and 20% over 2 points average to 15%, not a
    // length-weighted blend
    let streaks = vec![
        streak("EUR", dec!(1.00), dec!(1.10), 5),
        streak("EUR", dec!(1.00), dec!(1.20), 2),
    ];

    let aggregate = aggregate_streaks("EUR", &streaks).unwrap().unwrap();
    assert_eq!(aggregate.avg_percent_change, dec!(15.0000));
}

#[test]
fn test_rounds_half_up_at_fourth_decimal() {
    // 10.0001% and 10.0000% average to 10.00005, which rounds up
    let streaks = vec![
        streak("GBP", dec!(10000), dec!(11000.01), 2),
        streak("GBP", dec!(1.00), dec!(1.10), 2),
    ];

    let aggregate = aggregate_streaks("GBP", &streaks).unwrap().unwrap();
    assert_eq!(aggregate.avg_percent_change, dec!(10.0001));
}

#[test]
fn test_zero_start_rate_is_rejected() {
    let streaks = vec![streak("ZWL", dec!(0), dec!(1.00), 2)];

    let bad = aggregate_streaks("ZWL", &streaks).unwrap_err();
    assert_eq!(bad.currency_symbol, "ZWL");
    assert_eq!(bad.exchange_rate, Decimal::ZERO);
}
