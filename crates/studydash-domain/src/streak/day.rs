use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Truncate an instant to the start of its UTC calendar day.
///
/// Every comparison at day granularity must truncate BOTH sides with
/// these helpers. Mixing a truncated and a raw timestamp shifts the gap
/// by up to a day when logins straddle midnight.
pub fn day_boundary(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// The UTC calendar day an instant falls on.
pub fn day_of(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}

/// Whole-day difference between two calendar days.
///
/// Positive when `to` is later than `from`.
pub fn gap_in_days(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}
