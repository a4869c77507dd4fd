//! # workday
//!
//! Shift timestamps by a signed, fractional number of workdays over a
//! configurable calendar of working hours and holidays.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates.  Application code should depend on this crate rather
//! than on `wd-core` / `wd-time` directly.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use workday::WorkdayCalendar;
//!
//! let mut calendar = WorkdayCalendar::new();
//! calendar.add_holiday(NaiveDate::from_ymd_opt(2004, 5, 27).unwrap());
//!
//! let start = NaiveDate::from_ymd_opt(2004, 5, 24)
//!     .unwrap()
//!     .and_hms_opt(16, 30, 0)
//!     .unwrap();
//! let next = calendar.workday_increment(start, 1.0).unwrap();
//! assert_eq!(next.to_string(), "2004-05-25 08:00:00");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions.
pub use wd_core as core;

/// Calendar, window and increment types.
pub use wd_time as time;

pub use wd_core::{Error, Result};
pub use wd_time::{
    compute_workday_increment, Calendar, CalendarConfig, Increment, MonthDay, Weekday,
    WorkdayCalendar, WorkdayWindow,
};
