//! Raw observation intake: validation, deduplication, per-currency sorting.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{InvalidRate, NormalizedSeries, Observation, RatePoint, RawObservation};

/// Result of normalizing one batch of raw rows.
#[derive(Debug, Clone, Default)]
pub struct NormalizeOutcome {
    pub series: Vec<NormalizedSeries>,
    pub rows_read: usize,
    pub rows_dropped: usize,
    /// Currencies withheld from the pipeline because a kept row carried a
    /// non-positive rate. One entry per currency, earliest offending date.
    pub invalid: Vec<InvalidRate>,
}

/// Build one sorted, deduplicated series per currency from a raw batch.
///
/// Rows that fail to parse are dropped and counted; ingestion is best
/// effort. For duplicate (currency, date) pairs the first occurrence wins,
/// matching an insert-if-absent storage policy. Rows dated after `through`
/// are excluded without counting as drops; the comparator uses this to run
/// its current and baseline passes over the same batch.
pub fn normalize(rows: &[RawObservation], through: NaiveDate) -> NormalizeOutcome {
    let mut rows_read = 0usize;
    let mut rows_dropped = 0usize;
    let mut by_currency: BTreeMap<String, BTreeMap<NaiveDate, Decimal>> = BTreeMap::new();

    for raw in rows {
        rows_read += 1;
        let Some(obs) = Observation::parse(raw) else {
            rows_dropped += 1;
            continue;
        };
        if obs.rate_date > through {
            continue;
        }
        by_currency
            .entry(obs.currency_symbol)
            .or_default()
            .entry(obs.rate_date)
            .or_insert(obs.exchange_rate);
    }

    let mut series = Vec::with_capacity(by_currency.len());
    let mut invalid = Vec::new();
    for (currency_symbol, dates) in by_currency {
        if let Some((&rate_date, &exchange_rate)) =
            dates.iter().find(|(_, rate)| **rate <= Decimal::ZERO)
        {
            invalid.push(InvalidRate {
                currency_symbol,
                rate_date,
                exchange_rate,
            });
            continue;
        }
        let points = dates
            .into_iter()
            .map(|(rate_date, exchange_rate)| RatePoint {
                rate_date,
                exchange_rate,
            })
            .collect();
        series.push(NormalizedSeries {
            currency_symbol,
            points,
        });
    }

    NormalizeOutcome {
        series,
        rows_read,
        rows_dropped,
        invalid,
    }
}
