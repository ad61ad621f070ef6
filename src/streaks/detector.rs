//! Consecutive-increase run detection over a sorted series.

use crate::models::{NormalizedSeries, RatePoint, Streak};

/// Segment a series into maximal runs of strictly increasing rates.
///
/// The first point, and every point whose rate does not exceed its
/// predecessor's, anchors a new group; strictly increasing points extend
/// the current group. A group qualifies as a streak when it contains at
/// least one increase step, i.e. spans at least two points. Series with
/// fewer than two points, and flat or falling series, produce no streaks.
pub fn detect_streaks(series: &NormalizedSeries) -> Vec<Streak> {
    let points = &series.points;
    let mut streaks = Vec::new();
    if points.len() < 2 {
        return streaks;
    }

    let mut anchor = 0usize;
    for i in 1..=points.len() {
        let extends = i < points.len() && points[i].exchange_rate > points[i - 1].exchange_rate;
        if extends {
            continue;
        }
        if i - anchor >= 2 {
            streaks.push(build_streak(&series.currency_symbol, &points[anchor..i]));
        }
        anchor = i;
    }
    streaks
}

fn build_streak(currency_symbol: &str, run: &[RatePoint]) -> Streak {
    let mut start_rate = run[0].exchange_rate;
    let mut end_rate = run[0].exchange_rate;
    for point in run {
        start_rate = start_rate.min(point.exchange_rate);
        end_rate = end_rate.max(point.exchange_rate);
    }
    Streak {
        currency_symbol: currency_symbol.to_string(),
        start_date: run[0].rate_date,
        end_date: run[run.len() - 1].rate_date,
        start_rate,
        end_rate,
        length: run.len(),
    }
}
