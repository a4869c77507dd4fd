//! `Increment` — a fractional number of workdays split into whole days,
//! hours and minutes.
//!
//! The fractional part is always converted with a nominal workday of
//! [`NOMINAL_WORKDAY_HOURS`] hours, whatever window the calendar is
//! configured with.  All arithmetic happens in single precision and every
//! float-to-integer conversion truncates toward zero.

/// Hours per workday used to turn the fractional part of an increment into
/// hours and minutes.
///
/// This is not derived from the configured [`WorkdayWindow`]: a calendar
/// open 09:00–17:00 and one open 06:00–18:00 both read `0.5` as four hours.
///
/// [`WorkdayWindow`]: crate::WorkdayWindow
pub const NOMINAL_WORKDAY_HOURS: f32 = 8.0;

/// A signed workday increment decomposed into days, hours and minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Increment {
    days: i32,
    hours: i32,
    minutes: i32,
    positive: bool,
}

impl Increment {
    /// Decompose `increment_in_workdays`.
    ///
    /// `hours` and `minutes` carry the sign of the fractional remainder.
    ///
    /// ```
    /// use wd_time::Increment;
    ///
    /// let inc = Increment::decompose(-6.7470217);
    /// assert_eq!((inc.days(), inc.hours(), inc.minutes()), (-6, -5, -58));
    /// ```
    pub fn decompose(increment_in_workdays: f32) -> Self {
        let days = increment_in_workdays as i32;
        let fraction = increment_in_workdays - days as f32;
        let decimal_hours = fraction * NOMINAL_WORKDAY_HOURS;
        let hours = decimal_hours as i32;
        let minutes = ((decimal_hours - hours as f32) * 60.0) as i32;

        Self {
            days,
            hours,
            minutes,
            positive: increment_in_workdays > 0.0,
        }
    }

    /// Whole workdays, truncated toward zero.
    pub fn days(&self) -> i32 {
        self.days
    }

    /// Hours of the fractional part, truncated toward zero.
    pub fn hours(&self) -> i32 {
        self.hours
    }

    /// Minutes left over after the hours, truncated toward zero.
    pub fn minutes(&self) -> i32 {
        self.minutes
    }

    /// `false` for a decrement (and for zero).
    pub fn is_positive(&self) -> bool {
        self.positive
    }

    /// The hours and minutes as a signed number of minutes.
    pub fn sub_day_minutes(&self) -> i64 {
        i64::from(self.hours) * 60 + i64::from(self.minutes)
    }
}

impl std::fmt::Display for Increment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d {}h {}m", self.days, self.hours, self.minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(x: f32) -> (i32, i32, i32) {
        let inc = Increment::decompose(x);
        (inc.days(), inc.hours(), inc.minutes())
    }

    #[test]
    fn reference_decompositions() {
        assert_eq!(parts(-5.5), (-5, -4, 0));
        assert_eq!(parts(44.723656), (44, 5, 47));
        assert_eq!(parts(-6.7470217), (-6, -5, -58));
        assert_eq!(parts(12.782709), (12, 6, 15));
        assert_eq!(parts(8.276628), (8, 2, 12));
        assert_eq!(parts(-1.0), (-1, 0, 0));
        assert_eq!(parts(1.0), (1, 0, 0));
    }

    #[test]
    fn whole_numbers_have_no_sub_day_part() {
        for x in [0.0f32, 3.0, -7.0, 250.0] {
            let inc = Increment::decompose(x);
            assert_eq!(inc.hours(), 0, "{x}");
            assert_eq!(inc.minutes(), 0, "{x}");
            assert_eq!(inc.sub_day_minutes(), 0, "{x}");
        }
    }

    #[test]
    fn sign_follows_the_fraction() {
        let inc = Increment::decompose(-0.25);
        assert_eq!((inc.days(), inc.hours(), inc.minutes()), (0, -2, 0));
        assert!(!inc.is_positive());

        let inc = Increment::decompose(0.999);
        assert_eq!((inc.days(), inc.hours(), inc.minutes()), (0, 7, 59));
        assert!(inc.is_positive());
    }

    #[test]
    fn zero_counts_as_a_decrement() {
        let inc = Increment::decompose(0.0);
        assert!(!inc.is_positive());
        assert_eq!(inc, Increment::default());
        assert_eq!(inc.to_string(), "0d 0h 0m");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn days_truncate_toward_zero(x in -10_000.0f32..10_000.0f32) {
                let inc = Increment::decompose(x);
                prop_assert_eq!(inc.days() as f32, x.trunc());
            }

            #[test]
            fn sub_day_part_stays_below_a_nominal_day(x in -10_000.0f32..10_000.0f32) {
                let inc = Increment::decompose(x);
                prop_assert!(inc.hours().abs() < 8);
                prop_assert!(inc.minutes().abs() < 60);
                prop_assert!(inc.hours() == 0 || inc.hours().signum() == inc.days().signum() || inc.days() == 0);
            }
        }
    }
}
