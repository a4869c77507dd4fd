//! `Weekday` — ISO day-of-week enum.

/// Day of the week.
///
/// Variants are numbered 1–7 (Monday = 1, Sunday = 7) following the ISO
/// week.  Days 6 and 7 form the weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl Weekday {
    /// Return `true` if this is Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    #[test]
    fn numbering_follows_the_iso_week() {
        // 2004-05-22 is a Saturday, 2004-05-24 a Monday
        let sat = NaiveDate::from_ymd_opt(2004, 5, 22).unwrap();
        let mon = NaiveDate::from_ymd_opt(2004, 5, 24).unwrap();
        assert_eq!(Weekday::from(sat.weekday()), Weekday::Saturday);
        assert_eq!(Weekday::from(mon.weekday()) as u8, 1);
        assert_eq!(Weekday::from(mon.weekday()) as u8, mon.weekday().number_from_monday() as u8);
    }

    #[test]
    fn weekend_is_six_and_seven() {
        let weekend: Vec<u8> = NaiveDate::from_ymd_opt(2004, 5, 24)
            .unwrap()
            .iter_days()
            .take(7)
            .map(|d| Weekday::from(d.weekday()))
            .filter(Weekday::is_weekend)
            .map(|d| d as u8)
            .collect();
        assert_eq!(weekend, vec![6, 7]);
    }
}
