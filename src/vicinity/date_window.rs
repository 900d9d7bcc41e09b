use std::fmt;

use crate::{constants::EpochMillis, time::CalendarDate};

/// An inclusive range of calendar days.
///
/// Both bounds are converted once to Unix epoch milliseconds at **00:00 UTC** of their
/// respective day. A timestamp `t` lies in the window iff
/// `start_epoch_millis <= t <= end_epoch_millis`. As a consequence an approach occurring
/// later than midnight on the `end` day falls outside the window.
///
/// The window does not enforce `start <= end`; an inverted window simply contains nothing
/// (see [`DateWindow::is_inverted`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: CalendarDate,
    end: CalendarDate,
    start_epoch_millis: EpochMillis,
    end_epoch_millis: EpochMillis,
}

impl DateWindow {
    pub fn new(start: CalendarDate, end: CalendarDate) -> Self {
        DateWindow {
            start,
            end,
            start_epoch_millis: start.start_of_day_millis(),
            end_epoch_millis: end.start_of_day_millis(),
        }
    }

    pub fn start(&self) -> CalendarDate {
        self.start
    }

    pub fn end(&self) -> CalendarDate {
        self.end
    }

    pub fn start_epoch_millis(&self) -> EpochMillis {
        self.start_epoch_millis
    }

    pub fn end_epoch_millis(&self) -> EpochMillis {
        self.end_epoch_millis
    }

    /// `true` when `start > end`, such a window matches nothing
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    #[inline]
    pub fn contains(&self, epoch_millis: EpochMillis) -> bool {
        epoch_millis >= self.start_epoch_millis && epoch_millis <= self.end_epoch_millis
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod date_window_test {
    use super::*;

    fn window(start: &str, end: &str) -> DateWindow {
        DateWindow::new(start.parse().unwrap(), end.parse().unwrap())
    }

    #[test]
    fn test_window_bounds() {
        let w = window("2020-01-01", "2020-12-31");
        assert_eq!(w.start_epoch_millis(), 1_577_836_800_000);
        assert_eq!(w.end_epoch_millis(), 1_609_372_800_000);
        assert_eq!(w.to_string(), "[2020-01-01 .. 2020-12-31]");
    }

    #[test]
    fn test_window_contains_is_inclusive() {
        let w = window("2020-01-01", "2020-12-31");
        assert!(w.contains(w.start_epoch_millis()));
        assert!(w.contains(w.end_epoch_millis()));
        assert!(w.contains(1_592_217_000_000));
        assert!(!w.contains(w.start_epoch_millis() - 1));
        assert!(!w.contains(w.end_epoch_millis() + 1));
    }

    #[test]
    fn test_end_day_after_midnight_is_outside() {
        let w = window("2020-01-01", "2020-12-31");
        // 2020-12-31T06:00Z
        assert!(!w.contains(1_609_394_400_000));
    }

    #[test]
    fn test_single_day_window() {
        let w = window("2020-06-15", "2020-06-15");
        assert!(!w.is_inverted());
        assert!(w.contains(w.start_epoch_millis()));
        assert!(!w.contains(1_592_217_000_000));
    }

    #[test]
    fn test_inverted_window_contains_nothing() {
        let w = window("2020-12-31", "2020-01-01");
        assert!(w.is_inverted());
        assert!(!w.contains(1_592_217_000_000));
        assert!(!w.contains(w.start_epoch_millis()));
        assert!(!w.contains(w.end_epoch_millis()));
    }
}
