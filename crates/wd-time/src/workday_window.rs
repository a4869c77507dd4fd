//! `WorkdayWindow` — the hours of the day during which time counts as
//! working time.

use chrono::{NaiveTime, Timelike};
use wd_core::errors::Result;
use wd_core::fail;

/// Start and stop time-of-day of a workday.
///
/// Only the hour fields take part in the workday arithmetic; a workday is
/// assumed to begin and end on the full hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkdayWindow {
    start: NaiveTime,
    stop: NaiveTime,
}

impl WorkdayWindow {
    /// Default start hour of a workday (08:00).
    pub const DEFAULT_START_HOUR: u32 = 8;

    /// Default stop hour of a workday (16:00).
    pub const DEFAULT_STOP_HOUR: u32 = 16;

    /// Create a window, rejecting one whose stop hour does not come after
    /// its start hour.
    pub fn new(start: NaiveTime, stop: NaiveTime) -> Result<Self> {
        if stop.hour() <= start.hour() {
            fail!(
                "workday stop {} must be at least one hour after start {}",
                stop.format("%H:%M"),
                start.format("%H:%M")
            );
        }
        Ok(Self { start, stop })
    }

    /// Create a window from optional bounds without any validation.
    ///
    /// A missing bound falls back to its default.
    pub fn from_bounds(start: Option<NaiveTime>, stop: Option<NaiveTime>) -> Self {
        Self {
            start: start.unwrap_or_else(default_start),
            stop: stop.unwrap_or_else(default_stop),
        }
    }

    /// Start time of the workday.
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// Stop time of the workday.
    pub fn stop(&self) -> NaiveTime {
        self.stop
    }

    /// Hour of day the workday starts.
    pub fn start_hour(&self) -> u32 {
        self.start.hour()
    }

    /// Hour of day the workday stops.
    pub fn stop_hour(&self) -> u32 {
        self.stop.hour()
    }

    /// Return `true` if `time` lies after the end of the workday, i.e. past
    /// the stop hour or on it with a non-zero minute.
    pub fn is_after_stop(&self, time: NaiveTime) -> bool {
        time.hour() > self.stop_hour() || (time.hour() == self.stop_hour() && time.minute() > 0)
    }

    /// Return `true` if `time` lies before the start hour.
    pub fn is_before_start(&self, time: NaiveTime) -> bool {
        time.hour() < self.start_hour()
    }

    /// Return `true` if `time` lies in `[start hour, stop hour)`.
    pub fn contains(&self, time: NaiveTime) -> bool {
        !self.is_before_start(time) && time.hour() < self.stop_hour()
    }
}

impl Default for WorkdayWindow {
    fn default() -> Self {
        Self::from_bounds(None, None)
    }
}

impl std::fmt::Display for WorkdayWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.stop.format("%H:%M")
        )
    }
}

fn default_start() -> NaiveTime {
    NaiveTime::MIN + chrono::Duration::hours(i64::from(WorkdayWindow::DEFAULT_START_HOUR))
}

fn default_stop() -> NaiveTime {
    NaiveTime::MIN + chrono::Duration::hours(i64::from(WorkdayWindow::DEFAULT_STOP_HOUR))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn defaults_are_eight_to_sixteen() {
        let window = WorkdayWindow::default();
        assert_eq!(window.start(), hm(8, 0));
        assert_eq!(window.stop(), hm(16, 0));
        assert_eq!(window.to_string(), "08:00-16:00");
        assert_eq!(WorkdayWindow::from_bounds(Some(hm(7, 0)), None).stop(), hm(16, 0));
    }

    #[test]
    fn new_rejects_inverted_window() {
        assert!(WorkdayWindow::new(hm(9, 0), hm(17, 0)).is_ok());
        assert!(WorkdayWindow::new(hm(16, 0), hm(8, 0)).is_err());
        assert!(WorkdayWindow::new(hm(8, 0), hm(8, 45)).is_err());
    }

    #[test]
    fn after_stop_counts_minutes_on_the_stop_hour() {
        let window = WorkdayWindow::default();
        assert!(!window.is_after_stop(hm(16, 0)));
        assert!(window.is_after_stop(hm(16, 1)));
        assert!(window.is_after_stop(hm(19, 3)));
        assert!(window.is_before_start(hm(7, 59)));
        assert!(window.contains(hm(8, 0)));
        assert!(window.contains(hm(15, 59)));
        assert!(!window.contains(hm(16, 0)));
    }
}
