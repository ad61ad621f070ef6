//! One full ranked pass over a raw batch, fanned out per currency.

use chrono::NaiveDate;
use futures_util::future::join_all;
use tracing::debug;

use crate::error::FxtrendError;
use crate::models::{InvalidRate, RankedEntry, RawObservation};
use crate::report::ranker::rank_aggregates;
use crate::streaks::{aggregate_streaks, detect_streaks, normalize};

/// Output of a single normalize→detect→aggregate→rank pass.
#[derive(Debug, Clone, Default)]
pub struct RankedPass {
    pub entries: Vec<RankedEntry>,
    pub rows_read: usize,
    pub rows_dropped: usize,
    pub invalid: Vec<InvalidRate>,
}

/// Run the full pipeline over `rows`, keeping observations dated up to and
/// including `through`.
///
/// Currencies are independent until ranking, so each one's detect→aggregate
/// chain runs on its own task; the rank step is the single merge point.
pub async fn run_ranked_pass(
    rows: &[RawObservation],
    through: NaiveDate,
) -> Result<RankedPass, FxtrendError> {
    let outcome = normalize(rows, through);
    debug!(
        currencies = outcome.series.len(),
        rows_read = outcome.rows_read,
        rows_dropped = outcome.rows_dropped,
        through = %through,
        "normalized raw observations"
    );

    let mut workers = Vec::with_capacity(outcome.series.len());
    for series in outcome.series {
        workers.push(tokio::spawn(async move {
            let streaks = detect_streaks(&series);
            aggregate_streaks(&series.currency_symbol, &streaks)
        }));
    }

    let mut aggregates = Vec::new();
    let mut invalid = outcome.invalid;
    for joined in join_all(workers).await {
        match joined? {
            Ok(Some(aggregate)) => aggregates.push(aggregate),
            Ok(None) => {}
            Err(bad_rate) => invalid.push(bad_rate),
        }
    }

    Ok(RankedPass {
        entries: rank_aggregates(aggregates),
        rows_read: outcome.rows_read,
        rows_dropped: outcome.rows_dropped,
        invalid,
    })
}
