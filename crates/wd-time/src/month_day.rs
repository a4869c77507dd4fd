//! `MonthDay` — a year-independent calendar day, used as the key of a
//! recurring holiday.

use chrono::Datelike;
use wd_core::errors::{Error, Result};

/// Month (1–12) and day-of-month (1–31) without a year.
///
/// February 29 is a valid value; it only matches in leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMonthDay"))]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Create a month/day pair, checking that the day exists in the month
    /// of a leap year.
    pub fn new(month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = max_days_in_month(month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for month {month:02}"
            )));
        }
        Ok(Self { month, day })
    }

    /// Extract the month and day of any dated value, dropping the year.
    pub fn of(date: &impl Datelike) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Return the day of the month (1–31).
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Return `true` if `date` falls on this month and day in any year.
    pub fn matches(&self, date: &impl Datelike) -> bool {
        date.month() == self.month && date.day() == self.day
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "--{:02}-{:02}", self.month, self.day)
    }
}

/// Unchecked wire form of a [`MonthDay`], validated through
/// [`MonthDay::new`] on deserialisation.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMonthDay {
    month: u32,
    day: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMonthDay> for MonthDay {
    type Error = Error;

    fn try_from(raw: RawMonthDay) -> Result<Self> {
        MonthDay::new(raw.month, raw.day)
    }
}

fn max_days_in_month(month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => 29,
        _ => 31,
    }
}
