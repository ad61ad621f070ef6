use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A maximal run of consecutive observations for one currency in which each
/// day's rate strictly exceeds the previous day's. The run includes the
/// anchor day the climb started from, so `length` counts at least 2 points.
///
/// `start_rate` and `end_rate` are the minimum and maximum rate over the
/// run's rows. A qualifying run rises monotonically, so these coincide with
/// the first and last rates, but the min/max formulation is the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub currency_symbol: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_rate: Decimal,
    pub end_rate: Decimal,
    pub length: usize,
}
