//! Calendar configuration read through serde.

#![cfg(feature = "serde")]

use chrono::{NaiveDate, NaiveTime};
use wd_time::{CalendarConfig, MonthDay, WorkdayCalendar};

#[test]
fn calendar_from_json() {
    let json = r#"{
        "workday_start": "08:00:00",
        "workday_stop": "16:00:00",
        "holidays": ["2004-05-27"],
        "recurring_holidays": [{ "month": 5, "day": 17 }]
    }"#;
    let config: CalendarConfig = serde_json::from_str(json).unwrap();
    let calendar = config.into_calendar().unwrap();

    assert_eq!(calendar.workday_start(), NaiveTime::from_hms_opt(8, 0, 0).unwrap());
    assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2004, 5, 27).unwrap()));
    assert!(calendar.is_recurring_holiday(NaiveDate::from_ymd_opt(2011, 5, 17).unwrap()));

    let start = NaiveDate::from_ymd_opt(2004, 5, 24)
        .unwrap()
        .and_hms_opt(18, 5, 0)
        .unwrap();
    let end = calendar.workday_increment(start, -5.5).unwrap();
    assert_eq!(end.format("%d-%m-%Y %H:%M").to_string(), "14-05-2004 12:00");
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config: CalendarConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config.into_calendar().unwrap(), WorkdayCalendar::new());
}

#[test]
fn config_survives_serialisation() {
    let mut calendar = WorkdayCalendar::new();
    calendar.add_recurring_month_day(MonthDay::new(12, 25).unwrap());
    let json = serde_json::to_string(&CalendarConfig::from(&calendar)).unwrap();
    let back: CalendarConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.into_calendar().unwrap(), calendar);
}

#[test]
fn impossible_month_day_is_rejected() {
    assert!(serde_json::from_str::<MonthDay>(r#"{"month":13,"day":40}"#).is_err());
    assert!(serde_json::from_str::<MonthDay>(r#"{"month":2,"day":30}"#).is_err());
    assert_eq!(
        serde_json::from_str::<MonthDay>(r#"{"month":2,"day":29}"#).unwrap(),
        MonthDay::new(2, 29).unwrap()
    );

    let json = r#"{ "recurring_holidays": [{ "month": 2, "day": 31 }] }"#;
    assert!(serde_json::from_str::<CalendarConfig>(json).is_err());
}
