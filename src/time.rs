use std::{fmt, str::FromStr, sync::LazyLock};

use hifitime::{Epoch, TimeScale};
use regex::Regex;

use crate::{constants::EpochMillis, neo_errors::NeoError};

static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(-?\d{1,6})-(\d{1,2})-(\d{1,2})\s*$").unwrap());

/// A Gregorian calendar day, without time of day nor time zone.
///
/// The value is validated at construction time, so every [`CalendarDate`]
/// maps to an existing day (no February 30th).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Build a calendar date from its components.
    ///
    /// Arguments
    /// ---------
    /// * `year`: Gregorian year
    /// * `month`: month in 1..=12
    /// * `day`: day of the month
    ///
    /// Return
    /// ------
    /// * The calendar date, or [`NeoError::InvalidCalendarDate`] if the day does not exist
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, NeoError> {
        Epoch::maybe_from_gregorian_utc(year, month, day, 0, 0, 0, 0)
            .map_err(|_| NeoError::InvalidCalendarDate(format!("{year:04}-{month:02}-{day:02}")))?;
        Ok(CalendarDate { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Epoch at 00:00:00 UTC of this day
    pub fn start_of_day(&self) -> Epoch {
        Epoch::from_gregorian_utc_at_midnight(self.year, self.month, self.day)
    }

    /// Unix epoch milliseconds at 00:00:00 UTC of this day
    pub fn start_of_day_millis(&self) -> EpochMillis {
        epoch_to_millis(self.start_of_day())
    }
}

impl FromStr for CalendarDate {
    type Err = NeoError;

    /// Parse a date in the format YYYY-MM-DD
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = DATE_REGEX
            .captures(s)
            .ok_or_else(|| NeoError::InvalidCalendarDate(s.to_string()))?;

        let field = |i: usize| caps.get(i).map(|m| m.as_str()).unwrap_or_default();
        let invalid = |_| NeoError::InvalidCalendarDate(s.to_string());

        let year = field(1).parse::<i32>().map_err(invalid)?;
        let month = field(2).parse::<u8>().map_err(invalid)?;
        let day = field(3).parse::<u8>().map_err(invalid)?;
        CalendarDate::new(year, month, day)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Transformation from an hifitime epoch to Unix epoch milliseconds (UTC)
pub fn epoch_to_millis(epoch: Epoch) -> EpochMillis {
    epoch.to_unix_milliseconds().round() as EpochMillis
}

/// Transformation from Unix epoch milliseconds to an hifitime epoch in the UTC time scale
pub fn millis_to_epoch(millis: EpochMillis) -> Epoch {
    Epoch::from_unix_milliseconds(millis as f64)
}

/// Render Unix epoch milliseconds as `YYYY-MM-DD HH:MM` (UTC).
///
/// Argument
/// --------
/// * `millis`: milliseconds since 1970-01-01T00:00:00 UTC
///
/// Return
/// ------
/// * a human readable UTC timestamp with minute precision
pub fn format_epoch_millis(millis: EpochMillis) -> String {
    let epoch = millis_to_epoch(millis).to_time_scale(TimeScale::UTC);
    let (y, m, d, hh, mm, _, _) = epoch.to_gregorian_utc();
    format!("{y:04}-{m:02}-{d:02} {hh:02}:{mm:02}")
}

#[cfg(test)]
mod time_test {
    use super::*;

    #[test]
    fn test_parse_calendar_date() {
        let date: CalendarDate = "2028-12-31".parse().unwrap();
        assert_eq!(date, CalendarDate::new(2028, 12, 31).unwrap());
        assert_eq!(date.to_string(), "2028-12-31");

        let padded: CalendarDate = " 2020-1-2 ".parse().unwrap();
        assert_eq!(padded, CalendarDate::new(2020, 1, 2).unwrap());
    }

    #[test]
    fn test_invalid_calendar_date() {
        assert_eq!(
            "2021-02-29".parse::<CalendarDate>(),
            Err(NeoError::InvalidCalendarDate("2021-02-29".into()))
        );
        assert_eq!(
            "2020/01/01".parse::<CalendarDate>(),
            Err(NeoError::InvalidCalendarDate("2020/01/01".into()))
        );
        assert!(CalendarDate::new(2020, 13, 1).is_err());
        assert!(CalendarDate::new(2020, 2, 29).is_ok());
    }

    #[test]
    fn test_start_of_day_millis() {
        let date = CalendarDate::new(2020, 1, 1).unwrap();
        assert_eq!(date.start_of_day_millis(), 1_577_836_800_000);

        let date = CalendarDate::new(2028, 12, 31).unwrap();
        assert_eq!(date.start_of_day_millis(), 1_861_833_600_000);

        let date = CalendarDate::new(1970, 1, 1).unwrap();
        assert_eq!(date.start_of_day_millis(), 0);
    }

    #[test]
    fn test_pre_unix_epoch_dates() {
        let early = CalendarDate::new(1925, 1, 1).unwrap();
        let late = CalendarDate::new(1925, 1, 2).unwrap();
        assert!(early.start_of_day_millis() < 0);
        assert_eq!(
            late.start_of_day_millis() - early.start_of_day_millis(),
            crate::constants::MILLIS_PER_DAY
        );
    }

    #[test]
    fn test_format_epoch_millis() {
        assert_eq!(format_epoch_millis(1_592_217_000_000), "2020-06-15 10:30");
        assert_eq!(format_epoch_millis(0), "1970-01-01 00:00");
    }
}
