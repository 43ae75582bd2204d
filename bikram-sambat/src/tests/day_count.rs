use super::{all_dates, small_calendar};
use crate::error::Error;
use crate::{bs_date, Calendar};

#[test]
fn epoch() {
    let calendar = Calendar::default();
    assert_eq!(calendar.days_since_epoch(bs_date!("2000-01-01")).unwrap(), 0);
    assert_eq!(calendar.from_days_since_epoch(0).unwrap(), bs_date!("2000-01-01"));
    assert_eq!(calendar.from_days_since_epoch(29).unwrap(), bs_date!("2000-01-30"));
    assert_eq!(calendar.from_days_since_epoch(30).unwrap(), bs_date!("2000-02-01"));
}

#[test]
fn known_counts() {
    let calendar = Calendar::default();
    assert_eq!(calendar.days_since_epoch(bs_date!("2081-01-01")).unwrap(), 29585);
    assert_eq!(calendar.days_since_epoch(bs_date!("2081-01-15")).unwrap(), 29599);
    assert_eq!(calendar.days_since_epoch(bs_date!("2090-12-30")).unwrap(), 33237);
}

#[test]
fn every_day() {
    let calendar = Calendar::default();

    for (days, (year, month0, day)) in (0..).zip(all_dates(&calendar)) {
        let date = calendar.date(year, month0, day).unwrap();
        assert_eq!(calendar.days_since_epoch(date).unwrap(), days);
        assert_eq!(calendar.from_days_since_epoch(days).unwrap(), date);
    }
}

#[test]
fn out_of_range() {
    let calendar = Calendar::default();
    assert_eq!(calendar.table().total_days(), 33238);

    assert!(matches!(
        calendar.from_days_since_epoch(33238),
        Err(Error::DayCountOutOfRange { days: 33238, max: 33237 })
    ));

    assert!(matches!(
        calendar.from_days_since_epoch(u32::MAX),
        Err(Error::DayCountOutOfRange { .. })
    ));
}

#[test]
fn foreign_date() {
    // A date from the built-in table doesn't exist in the small one
    let calendar = small_calendar();

    assert!(matches!(
        calendar.days_since_epoch(bs_date!("2081-01-01")),
        Err(Error::YearOutOfRange { min: 100, max: 102, .. })
    ));
}
