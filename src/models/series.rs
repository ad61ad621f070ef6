use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One dated rate inside a normalized series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatePoint {
    pub rate_date: NaiveDate,
    pub exchange_rate: Decimal,
}

/// A single currency's observations, deduplicated and sorted by date
/// ascending. Built once per pipeline pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedSeries {
    pub currency_symbol: String,
    pub points: Vec<RatePoint>,
}

impl NormalizedSeries {
    pub fn new(currency_symbol: impl Into<String>, points: Vec<RatePoint>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            points,
        }
    }

    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.rate_date)
    }
}
