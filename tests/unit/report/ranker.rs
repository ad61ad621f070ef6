//! Unit tests for tie-aware ranking

use fxtrend::models::CurrencyAggregate;
use fxtrend::report::rank_aggregates;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn aggregate(symbol: &str, avg: Decimal) -> CurrencyAggregate {
    CurrencyAggregate {
        currency_symbol: symbol.to_string(),
        avg_percent_change: avg,
    }
}

#[test]
fn test_orders_by_average_descending() {
    let entries = rank_aggregates(vec![
        aggregate("EUR", dec!(2.0000)),
        aggregate("USD", dec!(5.0000)),
        aggregate("GBP", dec!(3.5000)),
    ]);

    let order: Vec<_> = entries
        .iter()
        .map(|e| (e.currency_symbol.as_str(), e.rank))
        .collect();
    assert_eq!(order, vec![("USD", 1), ("GBP", 2), ("EUR", 3)]);
}

#[test]
fn test_ties_share_rank_and_next_value_skips() {
    let entries = rank_aggregates(vec![
        aggregate("CCC", dec!(4.0000)),
        aggregate("BBB", dec!(5.0000)),
        aggregate("AAA", dec!(5.0000)),
    ]);

    let order: Vec<_> = entries
        .iter()
        .map(|e| (e.currency_symbol.as_str(), e.rank))
        .collect();
    assert_eq!(order, vec![("AAA", 1), ("BBB", 1), ("CCC", 3)]);
}

#[test]
fn test_rank_is_one_plus_entries_strictly_above() {
    let entries = rank_aggregates(vec![
        aggregate("AAA", dec!(9.0000)),
        aggregate("BBB", dec!(7.0000)),
        aggregate("CCC", dec!(7.0000)),
        aggregate("DDD", dec!(7.0000)),
        aggregate("EEE", dec!(1.0000)),
    ]);

    let ranks: Vec<_> = entries.iter().map(|e| e.rank).collect();
    assert_eq!(ranks, vec![1, 2, 2, 2, 5]);
}

#[test]
fn test_output_is_independent_of_input_order() {
    let forward = rank_aggregates(vec![
        aggregate("USD", dec!(5.0000)),
        aggregate("EUR", dec!(5.0000)),
        aggregate("GBP", dec!(1.0000)),
    ]);
    let shuffled = rank_aggregates(vec![
        aggregate("GBP", dec!(1.0000)),
        aggregate("EUR", dec!(5.0000)),
        aggregate("USD", dec!(5.0000)),
    ]);

    assert_eq!(forward, shuffled);
}

#[test]
fn test_empty_input() {
    assert!(rank_aggregates(Vec::new()).is_empty());
}

#[test]
fn test_scale_differences_still_tie() {
    // 5 and 5.0000 are the same value and must share a rank
    let entries = rank_aggregates(vec![
        aggregate("AAA", dec!(5)),
        aggregate("BBB", dec!(5.0000)),
    ]);
    assert_eq!(entries[0].rank, 1);
    assert_eq!(entries[1].rank, 1);
}
