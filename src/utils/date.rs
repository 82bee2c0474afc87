//! Civil UTC timestamps for generated file headers.
//!
//! Provides a lightweight `DateTimeUtc` struct for stamping generated
//! redirect files with their generation date.
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTimeUtc::from_unix_secs(1_700_000_000);
//! assert_eq!(dt.to_date_string(), "2023-11-14");
//! assert_eq!(dt.to_rfc3339(), "2023-11-14T22:13:20Z");
//! ```

use std::time::SystemTime;

/// A UTC calendar date and time of day, second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    #[cfg(test)]
    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Current system time. Falls back to the unix epoch if the clock is before it.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::from_unix_secs(secs)
    }

    /// Convert seconds since the unix epoch to a civil UTC datetime.
    ///
    /// Uses the days-from-civil inversion (400-year eras of 146097 days).
    #[allow(clippy::cast_possible_truncation)] // All components are range-bounded
    #[allow(clippy::cast_possible_wrap)]
    #[allow(clippy::cast_sign_loss)]
    pub fn from_unix_secs(secs: u64) -> Self {
        let days = (secs / 86_400) as i64;
        let rem = secs % 86_400;

        let z = days + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z - era * 146_097;
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = doy - (153 * mp + 2) / 5 + 1;
        let month = if mp < 10 { mp + 3 } else { mp - 9 };
        let year = yoe + era * 400 + i64::from(month <= 2);

        Self::new(
            year as u16,
            month as u8,
            day as u8,
            (rem / 3600) as u8,
            ((rem / 60) % 60) as u8,
            (rem % 60) as u8,
        )
    }

    /// Format as `YYYY-MM-DD`.
    pub fn to_date_string(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// `YYYY-MM-DDTHH:MM:SSZ`
    pub fn to_rfc3339(self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_unix_epoch() {
        assert_eq!(DateTimeUtc::from_unix_secs(0), DateTimeUtc::from_ymd(1970, 1, 1));
    }

    #[test]
    fn test_from_unix_secs_with_time() {
        let dt = DateTimeUtc::from_unix_secs(1_700_000_000);
        assert_eq!(dt, DateTimeUtc::new(2023, 11, 14, 22, 13, 20));
        assert_eq!(dt.to_rfc3339(), "2023-11-14T22:13:20Z");
    }

    #[test]
    fn test_from_unix_leap_day() {
        let dt = DateTimeUtc::from_unix_secs(951_782_400);
        assert_eq!(dt.to_date_string(), "2000-02-29");
    }

    #[test]
    fn test_from_unix_end_of_century() {
        let dt = DateTimeUtc::from_unix_secs(4_102_444_799);
        assert_eq!(dt, DateTimeUtc::new(2099, 12, 31, 23, 59, 59));
    }

    #[test]
    fn test_date_string_padding() {
        assert_eq!(DateTimeUtc::from_ymd(2026, 3, 7).to_date_string(), "2026-03-07");
    }
}
