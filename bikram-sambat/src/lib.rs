#![doc = include_str!("../../README.md")]
// Enable doc_auto_cfg feature when building docs on the nightly channel
// (which will be the case for docs.rs).
#![allow(unexpected_cfgs)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

pub mod calendar;
pub mod date;
pub mod error;
pub mod grid;
pub mod localization;
pub mod table;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::calendar::Calendar;
pub use crate::date::CalendarDate;
pub use crate::error::{Error, ParserError, Result};
pub use crate::grid::{GridCell, MonthGrid};
pub use crate::localization::Language;
pub use bikram_sambat_syntax::normalize;
pub use bs_month_table::MonthLengthTable;

/// Number of days in a month of the built-in table, `month0` being zero-based.
///
/// ```
/// assert_eq!(bikram_sambat::days_in_month(2000, 0).unwrap(), 30);
/// assert!(bikram_sambat::days_in_month(2091, 0).is_err());
/// ```
pub fn days_in_month(year: i32, month0: u8) -> Result<u8> {
    Calendar::default().days_in_month(year, month0)
}

/// Day of the week of a date of the built-in table, from 0 for Sunday to 6 for Saturday.
///
/// ```
/// assert_eq!(bikram_sambat::day_of_week(2000, 0, 1).unwrap(), 3);
/// assert!(bikram_sambat::day_of_week(1999, 11, 30).is_err());
/// ```
pub fn day_of_week(year: i32, month0: u8, day: u8) -> Result<u8> {
    Calendar::default().day_of_week(year, month0, day)
}

/// Parse a strict `YYYY-MM-DD` date and check it against the built-in table.
///
/// ```
/// let date = bikram_sambat::parse_and_validate("2081-01-15").unwrap();
/// assert_eq!(date.month0(), 0);
/// assert!(bikram_sambat::parse_and_validate("2081-13-01").is_none());
/// ```
pub fn parse_and_validate(text: &str) -> Option<CalendarDate> {
    Calendar::default().parse_and_validate(text)
}
