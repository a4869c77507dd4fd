//! # wd-time
//!
//! Workday window, holiday calendar, and fractional workday arithmetic.
//!
//! Timestamps are naive wall-clock values (`chrono::NaiveDateTime`); no
//! time zone takes part in the arithmetic.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait: working days and whole-day stepping.
pub mod calendar;

/// Serialisable calendar configuration.
pub mod config;

/// `Increment` — fractional workdays as days, hours and minutes.
pub mod increment;

/// `MonthDay` — key of a recurring holiday.
pub mod month_day;

/// `Weekday` — day of the week.
pub mod weekday;

/// `WorkdayCalendar` — the configured calendar and its arithmetic.
pub mod workday_calendar;

/// `WorkdayWindow` — working hours of a day.
pub mod workday_window;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::Calendar;
pub use config::CalendarConfig;
pub use increment::{Increment, NOMINAL_WORKDAY_HOURS};
pub use month_day::MonthDay;
pub use weekday::Weekday;
pub use workday_calendar::{compute_workday_increment, WorkdayCalendar, DEFAULT_MAX_SKIPPED_RUN};
pub use workday_window::WorkdayWindow;
