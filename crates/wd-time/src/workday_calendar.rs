//! `WorkdayCalendar` — a calendar with a working window, one-off holidays
//! and yearly recurring holidays, able to shift a timestamp by a fractional
//! number of workdays.
//!
//! Shifting happens in two phases.  The *snap* phase moves the start into
//! the workday window and applies the sub-day part of the increment,
//! possibly pushing the result onto the neighbouring day.  The *walk* phase
//! then steps over whole workdays, skipping weekends and holidays.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use tracing::debug;
use wd_core::ensure;
use wd_core::errors::{Error, Result};

use crate::calendar::Calendar;
use crate::increment::Increment;
use crate::month_day::MonthDay;
use crate::workday_window::WorkdayWindow;

/// Default cap on consecutive non-working days stepped over before the walk
/// gives up (ten years).
pub const DEFAULT_MAX_SKIPPED_RUN: u32 = 3660;

/// A workday calendar.
///
/// ```
/// use chrono::NaiveDate;
/// use wd_time::WorkdayCalendar;
///
/// let mut cal = WorkdayCalendar::new();
/// cal.add_recurring_holiday(NaiveDate::from_ymd_opt(2004, 5, 17).unwrap());
/// cal.add_holiday(NaiveDate::from_ymd_opt(2004, 5, 27).unwrap());
///
/// let start = NaiveDate::from_ymd_opt(2004, 5, 24)
///     .unwrap()
///     .and_hms_opt(18, 5, 0)
///     .unwrap();
/// let end = cal.workday_increment(start, -5.5).unwrap();
/// assert_eq!(end.format("%d-%m-%Y %H:%M").to_string(), "14-05-2004 12:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkdayCalendar {
    window: WorkdayWindow,
    holidays: BTreeSet<NaiveDate>,
    recurring_holidays: BTreeSet<MonthDay>,
    max_skipped_run: Option<u32>,
}

impl Default for WorkdayCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkdayCalendar {
    /// Create a calendar open 08:00–16:00 on weekdays with no holidays.
    pub fn new() -> Self {
        Self {
            window: WorkdayWindow::default(),
            holidays: BTreeSet::new(),
            recurring_holidays: BTreeSet::new(),
            max_skipped_run: Some(DEFAULT_MAX_SKIPPED_RUN),
        }
    }

    /// Use `window` as the workday window.
    pub fn with_window(mut self, window: WorkdayWindow) -> Self {
        self.window = window;
        self
    }

    /// Give up the walk after `limit` consecutive non-working days.
    /// `None` keeps walking forever, which never returns on a calendar
    /// without any working day.
    pub fn with_max_skipped_run(mut self, limit: Option<u32>) -> Self {
        self.max_skipped_run = limit;
        self
    }

    // ── Configuration ────────────────────────────────────────────────────────

    /// Set the start and stop of the workday.  A `None` bound is reset to
    /// its default (08:00 start, 16:00 stop).  The order of the bounds is
    /// not checked; use [`WorkdayWindow::new`] with [`set_window`] for that.
    ///
    /// [`set_window`]: WorkdayCalendar::set_window
    pub fn set_workday_window(&mut self, start: Option<NaiveTime>, stop: Option<NaiveTime>) {
        self.window = WorkdayWindow::from_bounds(start, stop);
    }

    /// Replace the workday window.
    pub fn set_window(&mut self, window: WorkdayWindow) {
        self.window = window;
    }

    /// Add a one-off holiday.
    pub fn add_holiday(&mut self, date: NaiveDate) {
        self.holidays.insert(date);
    }

    /// Remove a previously added one-off holiday.
    pub fn remove_holiday(&mut self, date: NaiveDate) -> bool {
        self.holidays.remove(&date)
    }

    /// Add a holiday observed every year on the month and day of `date`.
    pub fn add_recurring_holiday(&mut self, date: NaiveDate) {
        self.recurring_holidays.insert(MonthDay::of(&date));
    }

    /// Add a recurring holiday given directly as a month and day.
    pub fn add_recurring_month_day(&mut self, month_day: MonthDay) {
        self.recurring_holidays.insert(month_day);
    }

    /// Remove the recurring holiday on the month and day of `date`.
    pub fn remove_recurring_holiday(&mut self, date: NaiveDate) -> bool {
        self.recurring_holidays.remove(&MonthDay::of(&date))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The workday window.
    pub fn window(&self) -> WorkdayWindow {
        self.window
    }

    /// Start of the workday.
    pub fn workday_start(&self) -> NaiveTime {
        self.window.start()
    }

    /// Stop of the workday.
    pub fn workday_stop(&self) -> NaiveTime {
        self.window.stop()
    }

    /// Number of one-off holidays.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    /// Number of recurring holidays.
    pub fn recurring_holiday_count(&self) -> usize {
        self.recurring_holidays.len()
    }

    /// One-off holidays in date order.
    pub fn holidays(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.holidays.iter().copied()
    }

    /// Recurring holidays in month/day order.
    pub fn recurring_holidays(&self) -> impl Iterator<Item = MonthDay> + '_ {
        self.recurring_holidays.iter().copied()
    }

    // ── Predicates ────────────────────────────────────────────────────────────

    /// Return `true` if `date` is a one-off holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    /// Return `true` if the month and day of `date` is a recurring holiday.
    pub fn is_recurring_holiday(&self, date: NaiveDate) -> bool {
        self.recurring_holidays.contains(&MonthDay::of(&date))
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Shift `start` by `increment_in_workdays` workdays.
    ///
    /// The result has a time of day inside the workday window even when
    /// `start` does not: 04:00 plus 0.5 workdays is 12:00 the same day, and
    /// anything after the stop hour counts from the stop of that day.
    ///
    /// # Errors
    /// [`Error::Precondition`] for a non-finite increment, and the errors of
    /// [`Calendar::advance_business_days`].
    pub fn workday_increment(
        &self,
        start: NaiveDateTime,
        increment_in_workdays: f32,
    ) -> Result<NaiveDateTime> {
        ensure!(
            increment_in_workdays.is_finite(),
            "workday increment must be finite, got {increment_in_workdays}"
        );
        let increment = Increment::decompose(increment_in_workdays);
        debug!(%start, %increment, window = %self.window, "shifting by workdays");

        let anchor = self.snap_to_window(start, &increment)?;
        debug!(%anchor, "snapped into workday window");

        let end = self.advance_business_days(anchor, increment.days())?;
        debug!(%end, "walked whole workdays");
        Ok(end)
    }

    /// Move `start` into the workday window and add the increment's hours and
    /// minutes, carrying over to the next or previous day when the result
    /// leaves the window.
    fn snap_to_window(&self, start: NaiveDateTime, increment: &Increment) -> Result<NaiveDateTime> {
        let start_hour = i64::from(self.window.start_hour());
        let stop_hour = i64::from(self.window.stop_hour());

        let snapped = if start.hour() >= self.window.stop_hour() {
            // past the end of the day, count from its stop
            with_hour_minute(start, stop_hour, 0)?
        } else if self.window.is_before_start(start.time()) {
            with_hour_minute(start, start_hour, 0)?
        } else {
            start
        };

        let shifted = add_minutes(snapped, increment.sub_day_minutes())?;

        let hours = i64::from(increment.hours().abs());
        let minutes = i64::from(increment.minutes().abs());
        let (adjusted, day_shift) = if self.window.is_after_stop(shifted.time()) {
            (with_hour_minute(shifted, start_hour + hours, minutes)?, 1)
        } else if self.window.is_before_start(shifted.time()) {
            (with_hour_minute(shifted, stop_hour - hours, -minutes)?, -1)
        } else if shifted.hour() == self.window.stop_hour() {
            // exactly at stop with nothing left to do
            (with_hour_minute(shifted, start_hour, 0)?, 0)
        } else {
            (shifted, 0)
        };

        adjusted
            .checked_add_signed(Duration::days(day_shift))
            .ok_or_else(|| Error::Date(format!("{adjusted} shifted by {day_shift} days is out of range")))
    }
}

impl Calendar for WorkdayCalendar {
    fn name(&self) -> &str {
        "Workday"
    }

    fn is_business_day(&self, date: NaiveDate) -> bool {
        !(self.is_weekend(date) || self.is_holiday(date) || self.is_recurring_holiday(date))
    }

    fn max_skipped_run(&self) -> Option<u32> {
        self.max_skipped_run
    }
}

impl std::fmt::Display for WorkdayCalendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "WorkdayCalendar[window={}, holidays={}, recurring_holidays={}]",
            self.window,
            self.holidays.len(),
            self.recurring_holidays.len()
        )
    }
}

/// Shift `start` by `increment_in_workdays` workdays on `calendar`.
///
/// Free-function form of [`WorkdayCalendar::workday_increment`].
pub fn compute_workday_increment(
    calendar: &WorkdayCalendar,
    start: NaiveDateTime,
    increment_in_workdays: f32,
) -> Result<NaiveDateTime> {
    calendar.workday_increment(start, increment_in_workdays)
}

/// Replace the hour and minute of `ts`, keeping its date and seconds.
/// Out-of-range values roll over into the neighbouring fields.
fn with_hour_minute(ts: NaiveDateTime, hour: i64, minute: i64) -> Result<NaiveDateTime> {
    let seconds = Duration::seconds(i64::from(ts.second()))
        + Duration::nanoseconds(i64::from(ts.nanosecond()));
    let midnight = ts.date().and_time(NaiveTime::MIN);
    add_minutes(midnight + seconds, hour * 60 + minute)
}

fn add_minutes(ts: NaiveDateTime, minutes: i64) -> Result<NaiveDateTime> {
    ts.checked_add_signed(Duration::minutes(minutes))
        .ok_or_else(|| Error::Date(format!("{ts} plus {minutes} minutes is out of range")))
}
