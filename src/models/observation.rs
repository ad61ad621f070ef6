use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single exchange-rate row as it arrives from a source, before any
/// validation. Fields hold whatever text the source produced; empty or
/// unparseable values are resolved during normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawObservation {
    pub currency_symbol: String,
    pub rate_date: String,
    pub exchange_rate: String,
}

impl RawObservation {
    pub fn new(
        currency_symbol: impl Into<String>,
        rate_date: impl Into<String>,
        exchange_rate: impl Into<String>,
    ) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            rate_date: rate_date.into(),
            exchange_rate: exchange_rate.into(),
        }
    }
}

/// A validated exchange-rate observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub currency_symbol: String,
    pub rate_date: NaiveDate,
    pub exchange_rate: Decimal,
}

impl Observation {
    /// Best-effort parse of a raw row. Returns `None` when the currency
    /// symbol is not a 3-character code, the date is not ISO-8601, or the
    /// rate is not a decimal number. Callers treat `None` as a dropped row,
    /// never as a failure.
    pub fn parse(raw: &RawObservation) -> Option<Self> {
        let symbol = raw.currency_symbol.trim();
        if symbol.len() != 3 {
            return None;
        }
        let rate_date = raw.rate_date.trim().parse::<NaiveDate>().ok()?;
        let exchange_rate = raw.exchange_rate.trim().parse::<Decimal>().ok()?;
        Some(Self {
            currency_symbol: symbol.to_string(),
            rate_date,
            exchange_rate,
        })
    }
}

/// A non-positive exchange rate found in otherwise well-formed input.
///
/// Percentage change over a streak divides by its starting rate, so a zero
/// or negative rate indicates corrupt upstream data. The affected currency
/// is withheld from ranking and the condition is reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("non-positive exchange rate {exchange_rate} for {currency_symbol} on {rate_date}")]
pub struct InvalidRate {
    pub currency_symbol: String,
    pub rate_date: NaiveDate,
    pub exchange_rate: Decimal,
}
