use std::fmt;
use std::ops::RangeInclusive;
use std::sync::Arc;

use bikram_sambat_syntax::DateFields;
use bs_month_table::{MonthLengthTable, YearLengths};
use chrono::Weekday;

use crate::date::CalendarDate;
use crate::error::{Error, Result};
use crate::grid::MonthGrid;
use crate::localization::Language;
use crate::table;

const WEEKDAYS_FROM_SUNDAY: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// A month length table along with the weekday of its first day and display preferences.
///
/// The default calendar uses the table built into this crate. Another table can be injected,
/// for example to test against a shorter range of years.
///
/// ```
/// use bikram_sambat::{Calendar, Language};
///
/// let calendar = Calendar::default().with_language(Language::English);
/// let date = calendar.parse_and_validate("2081-01-01").unwrap();
///
/// assert_eq!(calendar.day_of_week(2081, 0, 1).unwrap(), 6);
/// assert_eq!(calendar.weekday_labels()[6], "Sat");
/// assert_eq!(calendar.days_since_epoch(date).unwrap(), 29585);
/// ```
#[derive(Clone, Hash, PartialEq, Eq)]
pub struct Calendar {
    table: Arc<MonthLengthTable>,
    epoch_weekday: u8,
    language: Language,
}

impl Calendar {
    /// Create a calendar from a month length table and the day of the week of its first day,
    /// with 0 for Sunday.
    pub fn new(table: Arc<MonthLengthTable>, epoch_weekday: u8) -> Self {
        assert!(epoch_weekday < 7, "weekday {epoch_weekday} is not in 0..=6");
        Self { table, epoch_weekday, language: Language::default() }
    }

    /// Replace the month length table of this calendar.
    pub fn with_table(self, table: Arc<MonthLengthTable>, epoch_weekday: u8) -> Self {
        Self { language: self.language, ..Self::new(table, epoch_weekday) }
    }

    /// Replace the language of weekday labels.
    pub fn with_language(self, language: Language) -> Self {
        Self { language, ..self }
    }

    pub fn table(&self) -> &MonthLengthTable {
        &self.table
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Day of the week of the first tabulated day, with 0 for Sunday.
    pub fn epoch_weekday(&self) -> u8 {
        self.epoch_weekday
    }

    pub fn min_year(&self) -> i32 {
        self.table.first_year()
    }

    pub fn max_year(&self) -> i32 {
        self.table.last_year()
    }

    /// All the supported years, suitable for a year picker.
    pub fn years(&self) -> RangeInclusive<i32> {
        self.min_year()..=self.max_year()
    }

    /// Labels of the days of the week in the language of this calendar, starting from Sunday.
    pub fn weekday_labels(&self) -> &'static [&'static str; 7] {
        self.language.weekday_labels()
    }

    // --
    // -- Lookups
    // --

    fn check_year(&self, year: i32) -> Result<&YearLengths> {
        self.table.year(year).ok_or(Error::YearOutOfRange {
            year,
            min: self.min_year(),
            max: self.max_year(),
        })
    }

    fn check_day(&self, year: i32, month0: u8, day: u8) -> Result<&YearLengths> {
        let lengths = self.check_year(year)?;

        let max = lengths
            .days_in_month(month0)
            .ok_or(Error::MonthOutOfRange { month0 })?;

        if !(1..=max).contains(&day) {
            return Err(Error::DayOutOfRange { year, month0, day, max });
        }

        Ok(lengths)
    }

    /// Number of days in a month, `month0` being zero-based.
    ///
    /// ```
    /// use bikram_sambat::{Calendar, Error};
    ///
    /// let calendar = Calendar::default();
    /// assert_eq!(calendar.days_in_month(2081, 2).unwrap(), 32);
    /// assert!(matches!(calendar.days_in_month(1999, 0), Err(Error::YearOutOfRange { .. })));
    /// ```
    pub fn days_in_month(&self, year: i32, month0: u8) -> Result<u8> {
        self.check_year(year)?
            .days_in_month(month0)
            .ok_or(Error::MonthOutOfRange { month0 })
    }

    /// Build a date, checking that it exists.
    pub fn date(&self, year: i32, month0: u8, day: u8) -> Result<CalendarDate> {
        self.check_day(year, month0, day)?;
        Ok(CalendarDate::new_unchecked(year, month0, day))
    }

    // --
    // -- Day arithmetic
    // --

    fn elapsed_days(&self, year: i32, month0: u8, day: u8) -> Result<u32> {
        let lengths = self.check_day(year, month0, day)?;

        let before_year = self
            .table
            .days_before_year(year)
            .expect("year was checked against the table");

        let before_month = lengths
            .days_before_month(month0)
            .expect("month was checked against the table");

        Ok(before_year + before_month + u32::from(day) - 1)
    }

    /// Day of the week of a date, from 0 for Sunday to 6 for Saturday.
    ///
    /// ```
    /// use bikram_sambat::Calendar;
    ///
    /// let calendar = Calendar::default();
    /// assert_eq!(calendar.day_of_week(2000, 0, 1).unwrap(), 3); // Wednesday
    /// assert_eq!(calendar.day_of_week(2081, 3, 1).unwrap(), 2); // Tuesday
    /// ```
    pub fn day_of_week(&self, year: i32, month0: u8, day: u8) -> Result<u8> {
        let elapsed = self.elapsed_days(year, month0, day)?;
        Ok(((u32::from(self.epoch_weekday) + elapsed) % 7) as u8)
    }

    /// Day of the week of a date.
    pub fn weekday(&self, year: i32, month0: u8, day: u8) -> Result<Weekday> {
        let weekday = self.day_of_week(year, month0, day)?;
        Ok(WEEKDAYS_FROM_SUNDAY[usize::from(weekday)])
    }

    /// Day of the week of the first day of a month, from 0 for Sunday to 6 for Saturday.
    pub fn first_day_of_month(&self, year: i32, month0: u8) -> Result<u8> {
        self.day_of_week(year, month0, 1)
    }

    /// Number of days elapsed since Baisakh 1 of the first supported year.
    pub fn days_since_epoch(&self, date: CalendarDate) -> Result<u32> {
        self.elapsed_days(date.year(), date.month0(), date.day())
    }

    /// Find the date that comes `days` days after Baisakh 1 of the first supported year.
    ///
    /// ```
    /// use bikram_sambat::Calendar;
    ///
    /// let calendar = Calendar::default();
    /// let date = calendar.from_days_since_epoch(365).unwrap();
    /// assert_eq!(date.to_string(), "2001-01-01");
    /// ```
    pub fn from_days_since_epoch(&self, days: u32) -> Result<CalendarDate> {
        let (year, day_of_year) = self.table.locate_day(days).ok_or(Error::DayCountOutOfRange {
            days,
            max: self.table.total_days() - 1,
        })?;

        let (month0, day0) = self
            .table
            .year(year)
            .and_then(|lengths| lengths.locate_day(day_of_year))
            .expect("day was located in the table");

        Ok(CalendarDate::new_unchecked(year, month0, day0 + 1))
    }

    // --
    // -- Navigation
    // --

    /// The day following a date, if it is supported.
    pub fn succ(&self, date: CalendarDate) -> Option<CalendarDate> {
        let days = self.days_since_epoch(date).ok()?;
        self.from_days_since_epoch(days.checked_add(1)?).ok()
    }

    /// The day preceding a date, if it is supported.
    pub fn pred(&self, date: CalendarDate) -> Option<CalendarDate> {
        let days = self.days_since_epoch(date).ok()?;
        self.from_days_since_epoch(days.checked_sub(1)?).ok()
    }

    /// First day of the month following the one of a date, if it is supported.
    ///
    /// ```
    /// use bikram_sambat::Calendar;
    ///
    /// let calendar = Calendar::default();
    /// let date = calendar.date(2080, 11, 15).unwrap();
    /// assert_eq!(calendar.next_month(date).unwrap().to_string(), "2081-01-01");
    ///
    /// let last = calendar.date(calendar.max_year(), 11, 1).unwrap();
    /// assert_eq!(calendar.next_month(last), None);
    /// ```
    pub fn next_month(&self, date: CalendarDate) -> Option<CalendarDate> {
        let (year, month0) = self.month_after(date.year(), date.month0())?;
        Some(CalendarDate::new_unchecked(year, month0, 1))
    }

    /// First day of the month preceding the one of a date, if it is supported.
    pub fn prev_month(&self, date: CalendarDate) -> Option<CalendarDate> {
        let (year, month0) = self.month_before(date.year(), date.month0())?;
        Some(CalendarDate::new_unchecked(year, month0, 1))
    }

    /// Year and zero-based month following the given month, if it is covered by the table.
    pub(crate) fn month_after(&self, year: i32, month0: u8) -> Option<(i32, u8)> {
        let (year, month0) = if month0 >= 11 {
            (year.checked_add(1)?, 0)
        } else {
            (year, month0 + 1)
        };

        self.table.contains_year(year).then_some((year, month0))
    }

    /// Year and zero-based month preceding the given month, if it is covered by the table.
    pub(crate) fn month_before(&self, year: i32, month0: u8) -> Option<(i32, u8)> {
        let (year, month0) = if month0 == 0 {
            (year.checked_sub(1)?, 11)
        } else {
            (year, month0 - 1)
        };

        self.table.contains_year(year).then_some((year, month0))
    }

    /// Layout of a month as a grid of six weeks.
    pub fn month_grid(&self, year: i32, month0: u8) -> Result<MonthGrid> {
        MonthGrid::new(self, year, month0)
    }

    // --
    // -- Text input
    // --

    /// Parse a date in the strict `YYYY-MM-DD` format and check that it exists.
    ///
    /// Every failure results in `None`: input that is not zero-padded should go through
    /// [`crate::normalize`] first.
    ///
    /// ```
    /// use bikram_sambat::Calendar;
    ///
    /// let calendar = Calendar::default();
    /// let date = calendar.parse_and_validate("2081-01-15").unwrap();
    /// assert_eq!((date.year(), date.month0(), date.day()), (2081, 0, 15));
    ///
    /// assert_eq!(calendar.parse_and_validate("2081-13-01"), None);
    /// assert_eq!(calendar.parse_and_validate("2081-01-99"), None);
    /// assert_eq!(calendar.parse_and_validate("2081-1-15"), None);
    /// ```
    pub fn parse_and_validate(&self, text: &str) -> Option<CalendarDate> {
        match bikram_sambat_syntax::parse(text) {
            Ok(fields) => self.validate_fields(text, fields),
            Err(_err) => {
                #[cfg(feature = "log")]
                log::debug!("Rejected date `{text}`: {_err}");
                None
            }
        }
    }

    fn validate_fields(&self, text: &str, fields: DateFields) -> Option<CalendarDate> {
        let Some(year) = i32::try_from(fields.year)
            .ok()
            .filter(|&year| self.table.contains_year(year))
        else {
            return reject(
                text,
                format_args!("year is not in {}-{}", self.min_year(), self.max_year()),
            );
        };

        if !(1..=12).contains(&fields.month) {
            return reject(text, format_args!("month is not in 1-12"));
        }

        let month0 = (fields.month - 1) as u8;

        // Year and month are known to be in the table at this point
        let max_day = self.table.days_in_month(year, month0)?;

        if !(1..=u32::from(max_day)).contains(&fields.day) {
            return reject(text, format_args!("day is not in 1-{max_day}"));
        }

        Some(CalendarDate::new_unchecked(year, month0, fields.day as u8))
    }

    /// Read the initial value of a date input, which may not be zero-padded.
    ///
    /// ```
    /// use bikram_sambat::{Calendar, Error};
    ///
    /// let calendar = Calendar::default();
    /// assert_eq!(calendar.parse_initial("2081-1-5").unwrap().to_string(), "2081-01-05");
    /// assert!(matches!(calendar.parse_initial(""), Err(Error::MissingInitialDate)));
    /// assert!(matches!(calendar.parse_initial("2081-1"), Err(Error::Parser(_))));
    /// assert!(matches!(calendar.parse_initial("2081-1-40"), Err(Error::InvalidDate { .. })));
    /// ```
    pub fn parse_initial(&self, text: &str) -> Result<CalendarDate> {
        if text.is_empty() {
            return Err(Error::MissingInitialDate);
        }

        let normalized = bikram_sambat_syntax::normalize(text)?;

        self.parse_and_validate(&normalized)
            .ok_or_else(|| Error::InvalidDate { input: text.to_string() })
    }
}

fn reject(_text: &str, _reason: fmt::Arguments) -> Option<CalendarDate> {
    #[cfg(feature = "log")]
    log::debug!("Rejected date `{_text}`: {_reason}");
    None
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(table::builtin(), table::EPOCH_WEEKDAY)
    }
}

impl fmt::Debug for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calendar")
            .field("min_year", &self.min_year())
            .field("max_year", &self.max_year())
            .field("epoch_weekday", &self.epoch_weekday)
            .field("language", &self.language)
            .finish()
    }
}
