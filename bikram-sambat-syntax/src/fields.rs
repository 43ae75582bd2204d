use std::fmt;

/// The three numeric fields of a textual date, as they were written.
///
/// No calendar rule is checked at this level: the month is the 1-based
/// number found in the text and may not even exist.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateFields {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl DateFields {
    pub const fn new(year: u32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

impl fmt::Display for DateFields {
    /// Write the canonical form of a date: month and day are padded to two digits while the year
    /// is written as is.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
