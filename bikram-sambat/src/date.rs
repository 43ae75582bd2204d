use std::fmt;
use std::str::FromStr;

use crate::calendar::Calendar;
use crate::error::Error;

/// A date of the Bikram Sambat calendar.
///
/// Values are only built by a [`Calendar`], which checks that the date exists in its month length
/// table. The month is zero-based, from 0 for Baisakh to 11 for Chaitra.
///
/// ```
/// use bikram_sambat::CalendarDate;
///
/// let date: CalendarDate = "2081-01-15".parse().unwrap();
/// assert_eq!((date.year(), date.month0(), date.day()), (2081, 0, 15));
/// assert_eq!(date.to_string(), "2081-01-15");
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarDate {
    year: i32,
    month0: u8,
    day: u8,
}

impl CalendarDate {
    pub(crate) const fn new_unchecked(year: i32, month0: u8, day: u8) -> Self {
        Self { year, month0, day }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    /// Zero-based month, 0 being Baisakh.
    pub fn month0(self) -> u8 {
        self.month0
    }

    /// One-based month, as written in text.
    pub fn month(self) -> u8 {
        self.month0 + 1
    }

    pub fn day(self) -> u8 {
        self.day
    }

    /// First day of the month of this date.
    pub fn first_of_month(self) -> Self {
        Self { day: 1, ..self }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month(), self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = Error;

    /// Parse a strict `YYYY-MM-DD` date against the built-in table.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Calendar::default()
            .parse_and_validate(s)
            .ok_or_else(|| Error::InvalidDate { input: s.to_string() })
    }
}
