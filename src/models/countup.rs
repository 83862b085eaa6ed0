// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Age countup shown in the life-management column.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

const MILLIS_PER_YEAR: f64 = 365.0 * 24.0 * 3600.0 * 1000.0;

/// Age in years split for display: `major` is whole years, `minor` the
/// fractional digits including the leading point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeCountup {
    pub major: String,
    pub minor: String,
    /// Birth instant in Unix milliseconds, for the browser to keep counting
    pub born_ms: i64,
}

impl AgeCountup {
    /// Compute age at `now` for someone born at midnight UTC on `birthday`.
    pub fn at(birthday: NaiveDate, now: DateTime<Utc>) -> Self {
        let born = birthday.and_time(NaiveTime::MIN).and_utc();
        let years = (now - born).num_milliseconds() as f64 / MILLIS_PER_YEAR;
        let formatted = format!("{:.15}", years);

        let (major, minor) = match formatted.find('.') {
            Some(dot) => (formatted[..dot].to_string(), formatted[dot..].to_string()),
            None => (formatted, String::new()),
        };
        Self {
            major,
            minor,
            born_ms: born.timestamp_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_exact_years() {
        let birthday = NaiveDate::from_ymd_opt(2001, 1, 12).unwrap();
        // 365 * 23 days later, ignoring leap days
        let now = Utc.with_ymd_and_hms(2001, 1, 12, 0, 0, 0).unwrap()
            + chrono::Duration::days(365 * 23);
        let age = AgeCountup::at(birthday, now);
        assert_eq!(age.major, "23");
        assert_eq!(age.minor, ".000000000000000");
        assert_eq!(age.born_ms, 979_257_600_000);
    }

    #[test]
    fn test_half_year() {
        let birthday = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let now = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
            + chrono::Duration::hours(365 * 12);
        let age = AgeCountup::at(birthday, now);
        assert_eq!(age.major, "0");
        assert!(age.minor.starts_with(".5000"));
    }
}
