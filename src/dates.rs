//! Calendar date arithmetic for trip planning
//!
//! All differences are taken between dates normalised to midnight and rounded
//! up to the next whole day. Negative results are returned as-is.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{AppError, AppResult};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Number of days from `today` until `target`, negative when `target` is past
pub fn days_until(target: NaiveDate, today: NaiveDate) -> i64 {
    ceil_days(at_midnight(target) - at_midnight(today))
}

/// Length of a trip in days, negative when `end` is before `start`
pub fn duration(start: NaiveDate, end: NaiveDate) -> i64 {
    ceil_days(at_midnight(end) - at_midnight(start))
}

/// Round a signed duration up to whole days
pub fn ceil_days(delta: Duration) -> i64 {
    let millis = delta.num_milliseconds();
    let days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}

fn at_midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Parse a calendar date out of user input or a provider timestamp.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (the date is read in the
/// timestamp's own offset), naive `YYYY-MM-DDTHH:MM:SS` timestamps and
/// hour-suffixed stamps such as `2023-07-01:13`. Time of day is dropped.
pub fn parse_calendar_date(input: &str) -> AppResult<NaiveDate> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.date());
    }
    if let Some(prefix) = input.get(..10) {
        if input[10..].starts_with(&[':', 'T', ' '][..]) {
            if let Ok(date) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
                return Ok(date);
            }
        }
    }

    Err(AppError::Validation(format!("Invalid date: {}", input)))
}
