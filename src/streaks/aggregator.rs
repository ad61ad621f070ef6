//! Per-currency averaging of streak percentage changes.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{CurrencyAggregate, InvalidRate, Streak};

/// Decimal places kept on the reported average.
pub const AVG_SCALE: u32 = 4;

/// Average the percentage change of a currency's streaks.
///
/// Each streak contributes `(end_rate - start_rate) / start_rate * 100`;
/// the mean is unweighted and rounded half-up to [`AVG_SCALE`] places. An
/// empty streak list yields `Ok(None)`: the currency is excluded from
/// ranking rather than scored zero. A non-positive start rate cannot be
/// divided through and returns the offending rate; the normalizer withholds
/// such currencies before this point, so hitting it means corrupt input
/// slipped past intake.
pub fn aggregate_streaks(
    currency_symbol: &str,
    streaks: &[Streak],
) -> Result<Option<CurrencyAggregate>, InvalidRate> {
    if streaks.is_empty() {
        return Ok(None);
    }

    let mut total = Decimal::ZERO;
    for streak in streaks {
        if streak.start_rate <= Decimal::ZERO {
            return Err(InvalidRate {
                currency_symbol: currency_symbol.to_string(),
                rate_date: streak.start_date,
                exchange_rate: streak.start_rate,
            });
        }
        total += (streak.end_rate - streak.start_rate) / streak.start_rate * Decimal::ONE_HUNDRED;
    }

    let mut avg = (total / Decimal::from(streaks.len()))
        .round_dp_with_strategy(AVG_SCALE, RoundingStrategy::MidpointAwayFromZero);
    // keep a fixed scale so 10 reports as 10.0000
    avg.rescale(AVG_SCALE);
    Ok(Some(CurrencyAggregate {
        currency_symbol: currency_symbol.to_string(),
        avg_percent_change: avg,
    }))
}
