mod day_count;
mod grid;


use std::sync::Arc;

use bs_month_table::{MonthLengthTable, YearLengths};

use crate::Calendar;

#[macro_export]
macro_rules! bs_date {
    ( $date: expr ) => {{
        $crate::Calendar::default()
            .parse_and_validate($date)
            .expect("invalid date literal")
    }};
}

/// A calendar over three short years, starting on a Monday.
fn small_calendar() -> Calendar {
    let years = [
        [29, 30, 31, 32, 29, 30, 31, 32, 29, 30, 31, 32],
        [32, 31, 30, 29, 32, 31, 30, 29, 32, 31, 30, 29],
        [28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28],
    ];

    let years = years
        .into_iter()
        .map(YearLengths::new)
        .collect::<Result<_, _>>()
        .unwrap();

    let table = MonthLengthTable::new(100, years).unwrap();
    Calendar::default().with_table(Arc::new(table), 1)
}

/// Every date supported by a calendar, in order.
fn all_dates(calendar: &Calendar) -> impl Iterator<Item = (i32, u8, u8)> + '_ {
    calendar.years().flat_map(move |year| {
        (0..12).flat_map(move |month0| {
            let length = calendar.days_in_month(year, month0).unwrap();
            (1..=length).map(move |day| (year, month0, day))
        })
    })
}
