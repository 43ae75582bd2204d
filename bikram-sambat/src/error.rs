use std::fmt::{self, Display};

pub use bikram_sambat_syntax::error::Error as ParserError;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a calendar computation.
#[derive(Clone, Debug)]
pub enum Error {
    /// The year is not covered by the month length table.
    YearOutOfRange { year: i32, min: i32, max: i32 },
    /// The zero-based month index is greater than 11.
    MonthOutOfRange { month0: u8 },
    /// The day doesn't exist in its month.
    DayOutOfRange { year: i32, month0: u8, day: u8, max: u8 },
    /// A linear day count lies after the last tabulated day.
    DayCountOutOfRange { days: u32, max: u32 },
    /// The text doesn't describe a date of the calendar.
    InvalidDate { input: String },
    /// No initial date was provided.
    MissingInitialDate,
    /// The text doesn't have the shape of a date.
    Parser(ParserError),
}

impl From<ParserError> for Error {
    fn from(err: ParserError) -> Self {
        Self::Parser(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::YearOutOfRange { year, min, max } => write!(
                f,
                "Year {year} is out of range. Supported range is {min} to {max}"
            ),
            Self::MonthOutOfRange { month0 } => {
                write!(f, "Month index {month0} is out of range: expected 0 to 11")
            }
            Self::DayOutOfRange { year, month0, day, max } => write!(
                f,
                "Day {day} is out of range for month {} of {year}: expected 1 to {max}",
                month0 + 1,
            ),
            Self::DayCountOutOfRange { days, max } => {
                write!(f, "Day count {days} is out of range: expected 0 to {max}")
            }
            Self::InvalidDate { input } => write!(f, "Invalid date `{input}`"),
            Self::MissingInitialDate => write!(f, "Initial date is not provided"),
            Self::Parser(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parser(err) => Some(err),
            _ => None,
        }
    }
}

/// The language code doesn't match any supported label set.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnknownLanguage(pub String);

impl Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown language code `{}`", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}
