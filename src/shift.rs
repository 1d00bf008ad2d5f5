//! Weekend-safe date shifting.
//!
//! Dates move through this module as millisecond offsets from midnight UTC,
//! the same unit the redistributor uses for proportional spacing. All
//! weekday and day-equality checks use the UTC calendar day, so results do
//! not depend on the host time zone.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Milliseconds in one calendar day (UTC, no DST).
pub const MS_PER_DAY: i64 = 86_400_000;

/// Milliseconds from the Unix epoch to midnight UTC of `date`.
pub fn epoch_millis(date: NaiveDate) -> i64 {
    date.signed_duration_since(NaiveDate::default())
        .num_milliseconds()
}

/// UTC calendar day containing the timestamp `millis`.
pub fn date_from_millis(millis: i64) -> NaiveDate {
    NaiveDate::default() + Duration::days(millis.div_euclid(MS_PER_DAY))
}

/// Whether `date` falls on Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Shifts `base` by a raw millisecond offset, then nudges the result
/// forward one day at a time while it falls on a weekend or on `base`'s
/// own calendar day.
///
/// The offset is used as-is; it is not a day count, and callers supply
/// deltas that already encode the intended spacing. Fractional-day offsets
/// land inside a calendar day and resolve to that day.
pub fn shift_from(base: NaiveDate, offset_millis: i64) -> NaiveDate {
    let mut candidate = date_from_millis(epoch_millis(base) + offset_millis);
    while is_weekend(candidate) || candidate == base {
        candidate += Duration::days(1);
    }
    candidate
}
