//! Tie-aware ranking of currency aggregates.

use rust_decimal::Decimal;

use crate::models::{CurrencyAggregate, RankedEntry};

/// Rank currencies by average streak performance, descending.
///
/// Equal averages share a rank and the following distinct value's rank
/// skips past the tie group, so the rank of any entry is 1 plus the number
/// of entries strictly above it. Output is ordered by rank ascending, with
/// ties broken alphabetically so equal inputs always produce identical
/// output.
pub fn rank_aggregates(mut aggregates: Vec<CurrencyAggregate>) -> Vec<RankedEntry> {
    aggregates.sort_by(|a, b| {
        b.avg_percent_change
            .cmp(&a.avg_percent_change)
            .then_with(|| a.currency_symbol.cmp(&b.currency_symbol))
    });

    let mut entries = Vec::with_capacity(aggregates.len());
    let mut prev: Option<Decimal> = None;
    let mut rank = 0u32;
    for (position, aggregate) in aggregates.into_iter().enumerate() {
        if prev != Some(aggregate.avg_percent_change) {
            rank = position as u32 + 1;
            prev = Some(aggregate.avg_percent_change);
        }
        entries.push(RankedEntry {
            currency_symbol: aggregate.currency_symbol,
            avg_percent_change: aggregate.avg_percent_change,
            rank,
        });
    }
    entries
}
