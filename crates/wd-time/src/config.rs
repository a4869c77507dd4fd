//! Serialisable calendar configuration.
//!
//! Hosts that keep their calendar in a file or a service describe it with a
//! [`CalendarConfig`] and turn it into a [`WorkdayCalendar`] with
//! [`CalendarConfig::into_calendar`].  The crate itself performs no I/O.

use chrono::{NaiveDate, NaiveTime};
use wd_core::errors::Result;

use crate::month_day::MonthDay;
use crate::workday_calendar::{WorkdayCalendar, DEFAULT_MAX_SKIPPED_RUN};
use crate::workday_window::WorkdayWindow;

/// Plain-data description of a [`WorkdayCalendar`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalendarConfig {
    /// Start of the workday; 08:00 when absent.
    pub workday_start: Option<NaiveTime>,
    /// Stop of the workday; 16:00 when absent.
    pub workday_stop: Option<NaiveTime>,
    /// One-off holidays.
    pub holidays: Vec<NaiveDate>,
    /// Holidays observed every year.
    pub recurring_holidays: Vec<MonthDay>,
    /// Cap on consecutive non-working days stepped over; `None` is
    /// unbounded.
    pub max_skipped_run: Option<u32>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            workday_start: None,
            workday_stop: None,
            holidays: Vec::new(),
            recurring_holidays: Vec::new(),
            max_skipped_run: Some(DEFAULT_MAX_SKIPPED_RUN),
        }
    }
}

impl CalendarConfig {
    /// Build the calendar, validating the workday window.
    ///
    /// # Errors
    /// [`wd_core::Error::InvalidArgument`] if the stop hour does not come
    /// after the start hour.
    pub fn into_calendar(self) -> Result<WorkdayCalendar> {
        let bounds = WorkdayWindow::from_bounds(self.workday_start, self.workday_stop);
        let window = WorkdayWindow::new(bounds.start(), bounds.stop())?;

        let mut calendar = WorkdayCalendar::new()
            .with_window(window)
            .with_max_skipped_run(self.max_skipped_run);
        for date in self.holidays {
            calendar.add_holiday(date);
        }
        for month_day in self.recurring_holidays {
            calendar.add_recurring_month_day(month_day);
        }
        Ok(calendar)
    }
}

impl From<&WorkdayCalendar> for CalendarConfig {
    fn from(calendar: &WorkdayCalendar) -> Self {
        use crate::calendar::Calendar;

        Self {
            workday_start: Some(calendar.workday_start()),
            workday_stop: Some(calendar.workday_stop()),
            holidays: calendar.holidays().collect(),
            recurring_holidays: calendar.recurring_holidays().collect(),
            max_skipped_run: calendar.max_skipped_run(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wd_core::Error;

    #[test]
    fn default_config_gives_default_calendar() {
        let calendar = CalendarConfig::default().into_calendar().unwrap();
        assert_eq!(calendar, WorkdayCalendar::new());
    }

    #[test]
    fn inverted_window_is_rejected() {
        let config = CalendarConfig {
            workday_start: NaiveTime::from_hms_opt(17, 0, 0),
            workday_stop: NaiveTime::from_hms_opt(9, 0, 0),
            ..CalendarConfig::default()
        };
        assert!(matches!(config.into_calendar(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn calendar_round_trips_through_config() {
        let mut calendar = WorkdayCalendar::new();
        calendar.add_holiday(NaiveDate::from_ymd_opt(2004, 5, 27).unwrap());
        calendar.add_recurring_month_day(MonthDay::new(5, 17).unwrap());

        let config = CalendarConfig::from(&calendar);
        assert_eq!(config.holidays.len(), 1);
        assert_eq!(config.into_calendar().unwrap(), calendar);
    }
}
