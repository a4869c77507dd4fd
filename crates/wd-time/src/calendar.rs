//! `Calendar` trait.
//!
//! A calendar knows which dates are working days and can step a timestamp
//! across a number of them, skipping everything else.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use tracing::{trace, warn};
use wd_core::errors::{Error, Result};

use crate::weekday::Weekday;

/// A working-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Return `true` if `date` is a working day in this calendar.
    fn is_business_day(&self, date: NaiveDate) -> bool;

    /// Return `true` if `date` is a Saturday or Sunday.
    fn is_weekend(&self, date: NaiveDate) -> bool {
        Weekday::from(date.weekday()).is_weekend()
    }

    /// Longest run of consecutive non-working days [`advance_business_days`]
    /// will step over before giving up.  `None` never gives up.
    ///
    /// [`advance_business_days`]: Calendar::advance_business_days
    fn max_skipped_run(&self) -> Option<u32> {
        None
    }

    /// Move `start` by `n` working days, one calendar day at a time.
    ///
    /// Non-working days are stepped over without being counted and the
    /// time of day is left untouched.  `n == 0` returns `start` as is, even
    /// when it falls on a non-working day.
    ///
    /// # Errors
    /// [`Error::Unsatisfiable`] if more than [`max_skipped_run`] consecutive
    /// days are skipped, [`Error::Date`] if stepping leaves chrono's range.
    ///
    /// [`max_skipped_run`]: Calendar::max_skipped_run
    fn advance_business_days(&self, start: NaiveDateTime, n: i32) -> Result<NaiveDateTime> {
        let target = n.unsigned_abs();
        let mut current = start;
        let mut passed = 0u32;
        let mut skipped_run = 0u32;

        while passed < target {
            let next = if n > 0 {
                current.checked_add_days(Days::new(1))
            } else {
                current.checked_sub_days(Days::new(1))
            };
            current = next.ok_or_else(|| {
                Error::Date(format!("stepping from {current} leaves the supported date range"))
            })?;

            if self.is_business_day(current.date()) {
                passed += 1;
                skipped_run = 0;
                continue;
            }

            trace!(date = %current.date(), "skipping non-working day");
            skipped_run += 1;
            if let Some(limit) = self.max_skipped_run() {
                if skipped_run > limit {
                    warn!(
                        calendar = self.name(),
                        start = %start,
                        limit,
                        "no working day found, giving up"
                    );
                    return Err(Error::Unsatisfiable {
                        start: start.date().to_string(),
                        skipped: limit,
                    });
                }
            }
        }
        Ok(current)
    }

    /// Count the working days between `d1` (exclusive) and `d2` (inclusive).
    /// Returns a negative number if `d2 < d1`.
    fn business_days_between(&self, d1: NaiveDate, d2: NaiveDate) -> i64 {
        if d1 == d2 {
            return 0;
        }
        let sign = if d2 > d1 { 1 } else { -1 };
        let (start, end) = if d2 > d1 { (d1, d2) } else { (d2, d1) };
        let count = start
            .iter_days()
            .skip(1)
            .take_while(|d| *d <= end)
            .filter(|d| self.is_business_day(*d))
            .count() as i64;
        sign * count
    }
}
