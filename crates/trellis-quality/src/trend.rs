//! Trailing-week accuracy trend.

use chrono::{DateTime, Duration, NaiveTime, Utc};

use trellis_core::constants::TREND_WINDOW_DAYS;
use trellis_core::errors::TrellisResult;
use trellis_core::traits::ISampleStore;

/// Truncates a timestamp to midnight UTC of its calendar day.
pub(crate) fn start_of_day(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Late-minus-early delta of real-sample accuracy over the trailing week.
///
/// The early reading covers everything since midnight seven days before
/// `date`, the late reading everything since midnight three days before.
/// Positive means accuracy is improving. If either window holds no real
/// samples with a recorded outcome the trend is 0.0, not an error.
pub fn seven_day_trend(
    store: &dyn ISampleStore,
    tenant_id: &str,
    date: DateTime<Utc>,
) -> TrellisResult<f64> {
    let early_start = start_of_day(date - Duration::days(TREND_WINDOW_DAYS));
    let late_start = start_of_day(date - Duration::days(TREND_WINDOW_DAYS / 2));

    let early = store.real_accuracy_since(tenant_id, early_start)?;
    let late = store.real_accuracy_since(tenant_id, late_start)?;

    match (early, late) {
        (Some(early), Some(late)) => Ok(late - early),
        _ => Ok(0.0),
    }
}
