//! Day-over-day rank comparison between two temporally offset passes.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::error::FxtrendError;
use crate::models::{Observation, RawObservation, RunSummary, TrendOutcome, TrendRow};
use crate::report::pipeline::{run_ranked_pass, RankedPass};
use crate::streaks::normalize;

/// Only currencies ranked at or above this cutoff appear in the report.
pub const TOP_RANKS: u32 = 10;

pub struct TrendComparator;

impl TrendComparator {
    /// Produce the trend report for a raw batch.
    ///
    /// The current pass covers observations dated up to the as-of date T
    /// (by default the latest parseable date in the batch); the baseline
    /// pass covers observations strictly before T, recomputed from scratch
    /// rather than incrementally since removing a day can reshape streaks
    /// anywhere near the boundary. Baseline ranks join onto current
    /// entries by currency; currencies absent from the baseline carry no
    /// prior rank. A batch with no usable as-of date yields an empty
    /// report, not an error.
    pub async fn compare(
        rows: &[RawObservation],
        as_of: Option<NaiveDate>,
    ) -> Result<TrendOutcome, FxtrendError> {
        let Some(report_date) = as_of.or_else(|| latest_rate_date(rows)) else {
            let outcome = normalize(rows, NaiveDate::MAX);
            info!(
                rows_read = outcome.rows_read,
                rows_dropped = outcome.rows_dropped,
                "no usable as-of date in batch, emitting empty report"
            );
            return Ok(TrendOutcome {
                report: Vec::new(),
                summary: RunSummary {
                    rows_read: outcome.rows_read,
                    rows_dropped: outcome.rows_dropped,
                    invalid_currencies: outcome.invalid,
                },
            });
        };

        let current_pass = run_ranked_pass(rows, report_date);
        let baseline_pass = async {
            match report_date.pred_opt() {
                Some(through) => run_ranked_pass(rows, through).await,
                None => Ok(RankedPass::default()),
            }
        };
        let (current, baseline) = tokio::join!(current_pass, baseline_pass);
        let current = current?;
        let baseline = baseline?;

        for bad_rate in &current.invalid {
            warn!(currency = %bad_rate.currency_symbol, "{bad_rate}, currency excluded from ranking");
        }
        for bad_rate in &baseline.invalid {
            warn!(currency = %bad_rate.currency_symbol, "{bad_rate} in baseline pass");
        }

        let prior_ranks: HashMap<&str, u32> = baseline
            .entries
            .iter()
            .map(|entry| (entry.currency_symbol.as_str(), entry.rank))
            .collect();

        let report: Vec<TrendRow> = current
            .entries
            .iter()
            .filter(|entry| entry.rank <= TOP_RANKS)
            .map(|entry| TrendRow {
                report_date,
                currency_symbol: entry.currency_symbol.clone(),
                avg_percent_change: entry.avg_percent_change,
                current_rank: entry.rank,
                prior_rank: prior_ranks.get(entry.currency_symbol.as_str()).copied(),
            })
            .collect();

        info!(
            report_date = %report_date,
            report_rows = report.len(),
            currencies_ranked = current.entries.len(),
            "trend report assembled"
        );

        Ok(TrendOutcome {
            report,
            summary: RunSummary {
                rows_read: current.rows_read,
                rows_dropped: current.rows_dropped,
                invalid_currencies: current.invalid,
            },
        })
    }
}

fn latest_rate_date(rows: &[RawObservation]) -> Option<NaiveDate> {
    rows.iter()
        .filter_map(Observation::parse)
        .map(|obs| obs.rate_date)
        .max()
}
