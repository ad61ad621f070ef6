use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::FxtrendError;
use crate::models::observation::InvalidRate;

/// Average streak performance for one currency. Currencies without any
/// streak have no aggregate at all rather than a zero-valued one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyAggregate {
    pub currency_symbol: String,
    /// Mean percentage change across the currency's streaks, rounded
    /// half-up to 4 decimal places.
    pub avg_percent_change: Decimal,
}

/// A currency's position in a ranked pass. Ties share a rank and the next
/// distinct value skips past them (two entries at rank 1 are followed by
/// rank 3).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub currency_symbol: String,
    pub avg_percent_change: Decimal,
    pub rank: u32,
}

/// One row of the final trend report.
///
/// `prior_rank` is the currency's rank in the baseline pass (series with
/// the latest day excluded); `None` when the currency had no qualifying
/// streak there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendRow {
    pub report_date: NaiveDate,
    pub currency_symbol: String,
    pub avg_percent_change: Decimal,
    pub current_rank: u32,
    pub prior_rank: Option<u32>,
}

/// Input accounting for a comparator run, taken from the current pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub rows_read: usize,
    pub rows_dropped: usize,
    pub invalid_currencies: Vec<InvalidRate>,
}

impl RunSummary {
    pub fn drop_ratio(&self) -> f64 {
        if self.rows_read == 0 {
            0.0
        } else {
            self.rows_dropped as f64 / self.rows_read as f64
        }
    }

    /// Apply the caller's drop-rate policy. The pipeline itself never
    /// aborts on dropped rows; callers that care pass a ceiling here.
    pub fn check_drop_ratio(&self, max_ratio: f64) -> Result<(), FxtrendError> {
        if self.drop_ratio() > max_ratio {
            return Err(FxtrendError::DropRateExceeded {
                dropped: self.rows_dropped,
                rows_read: self.rows_read,
                max_ratio,
            });
        }
        Ok(())
    }
}

/// The externally consumed result of a comparator run: at most the top 10
/// ranked currencies, ordered by current rank ascending, plus run
/// accounting.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrendOutcome {
    pub report: Vec<TrendRow>,
    pub summary: RunSummary,
}
