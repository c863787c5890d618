//! The 24-hour forecast window.

use chrono::{DateTime, Duration, Utc};

use crate::types::ForecastPeriod;

/// Keep the periods whose start time falls within the closed interval
/// `[now, now + 24h]`, preserving input order.
///
/// Periods starting exactly at `now` or exactly 24 hours out are included.
pub fn next_24_hours(periods: Vec<ForecastPeriod>, now: DateTime<Utc>) -> Vec<ForecastPeriod> {
    let cutoff = now + Duration::hours(24);
    periods
        .into_iter()
        .filter(|period| {
            let start = period.start_time.with_timezone(&Utc);
            start >= now && start <= cutoff
        })
        .collect()
}
