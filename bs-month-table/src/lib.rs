#![doc = include_str!("../README.md")]

use std::{fmt, io};

/// Bounds accepted for the length of a month.
pub const MONTH_LENGTH_RANGE: std::ops::RangeInclusive<u8> = 28..=32;

/// Number of months in a Bikram Sambat year.
pub const MONTHS_PER_YEAR: usize = 12;

/// Lengths of the months of a range of consecutive years.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct MonthLengthTable {
    first_year: i32,
    years: Vec<YearLengths>,
    /// Number of days elapsed between the first day of the table and the first day of each year,
    /// with a trailing entry holding the total length of the table.
    offsets: Vec<u32>,
}

impl MonthLengthTable {
    /// Build a table starting at `first_year` from the lengths of each year.
    ///
    /// ```
    /// use bs_month_table::{MonthLengthTable, YearLengths};
    ///
    /// let year = YearLengths::new([30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31]).unwrap();
    /// let table = MonthLengthTable::new(2000, vec![year]).unwrap();
    ///
    /// assert_eq!(table.first_year(), 2000);
    /// assert_eq!(table.last_year(), 2000);
    /// assert!(MonthLengthTable::new(2000, Vec::new()).is_err());
    /// ```
    pub fn new(first_year: i32, years: Vec<YearLengths>) -> Result<Self, InvalidTable> {
        if years.is_empty() {
            return Err(InvalidTable::Empty);
        }

        // The last year must be representable.
        i32::try_from(years.len() - 1)
            .ok()
            .and_then(|len| first_year.checked_add(len))
            .ok_or(InvalidTable::TooLarge)?;

        let mut offsets = Vec::with_capacity(years.len() + 1);
        let mut elapsed = 0u32;
        offsets.push(elapsed);

        for year in &years {
            elapsed = elapsed
                .checked_add(year.total())
                .ok_or(InvalidTable::TooLarge)?;

            offsets.push(elapsed);
        }

        Ok(Self { first_year, years, offsets })
    }

    /// First year covered by this table.
    pub fn first_year(&self) -> i32 {
        self.first_year
    }

    /// Last year covered by this table.
    pub fn last_year(&self) -> i32 {
        self.first_year + self.years.len() as i32 - 1
    }

    /// Check if a year is covered by this table.
    ///
    /// ```
    /// use bs_month_table::{MonthLengthTable, YearLengths};
    ///
    /// let year = YearLengths::new([31; 12]).unwrap();
    /// let table = MonthLengthTable::new(2000, vec![year; 3]).unwrap();
    ///
    /// assert!(table.contains_year(2002));
    /// assert!(!table.contains_year(1999));
    /// assert!(!table.contains_year(2003));
    /// ```
    pub fn contains_year(&self, year: i32) -> bool {
        self.year_index(year).is_some()
    }

    fn year_index(&self, year: i32) -> Option<usize> {
        let year0 = usize::try_from(year.checked_sub(self.first_year)?).ok()?;
        (year0 < self.years.len()).then_some(year0)
    }

    /// Get the month lengths of a year, if it is covered by this table.
    pub fn year(&self, year: i32) -> Option<&YearLengths> {
        self.years.get(self.year_index(year)?)
    }

    /// Get the number of days of a month, `month0` being zero-based.
    ///
    /// ```
    /// use bs_month_table::{MonthLengthTable, YearLengths};
    ///
    /// let year = YearLengths::new([30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31]).unwrap();
    /// let table = MonthLengthTable::new(2000, vec![year]).unwrap();
    ///
    /// assert_eq!(table.days_in_month(2000, 0), Some(30));
    /// assert_eq!(table.days_in_month(2000, 11), Some(31));
    /// assert_eq!(table.days_in_month(2000, 12), None);
    /// assert_eq!(table.days_in_month(2001, 0), None);
    /// ```
    pub fn days_in_month(&self, year: i32, month0: u8) -> Option<u8> {
        self.year(year)?.days_in_month(month0)
    }

    /// Number of days elapsed between the first day of the table and the first day of `year`.
    ///
    /// ```
    /// use bs_month_table::{MonthLengthTable, YearLengths};
    ///
    /// let year = YearLengths::new([30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31]).unwrap();
    /// let table = MonthLengthTable::new(2000, vec![year; 2]).unwrap();
    ///
    /// assert_eq!(table.days_before_year(2000), Some(0));
    /// assert_eq!(table.days_before_year(2001), Some(365));
    /// assert_eq!(table.days_before_year(2002), None);
    /// ```
    pub fn days_before_year(&self, year: i32) -> Option<u32> {
        Some(self.offsets[self.year_index(year)?])
    }

    /// Total number of days covered by this table.
    pub fn total_days(&self) -> u32 {
        *self.offsets.last().expect("offsets always hold a total")
    }

    /// Find the year containing the `days`-th day of the table, along with the number of days
    /// elapsed since the first day of this year.
    ///
    /// ```
    /// use bs_month_table::{MonthLengthTable, YearLengths};
    ///
    /// let year = YearLengths::new([30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31]).unwrap();
    /// let table = MonthLengthTable::new(2000, vec![year; 2]).unwrap();
    ///
    /// assert_eq!(table.locate_day(0), Some((2000, 0)));
    /// assert_eq!(table.locate_day(365), Some((2001, 0)));
    /// assert_eq!(table.locate_day(729), Some((2001, 364)));
    /// assert_eq!(table.locate_day(730), None);
    /// ```
    pub fn locate_day(&self, days: u32) -> Option<(i32, u32)> {
        if days >= self.total_days() {
            return None;
        }

        let year0 = self.offsets.partition_point(|&offset| offset <= days) - 1;
        Some((self.first_year + year0 as i32, days - self.offsets[year0]))
    }

    /// Iterate over the years of this table.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &YearLengths)> + '_ {
        (self.first_year..).zip(self.years.iter())
    }

    /// Serialize this table into a writer.
    ///
    /// ```
    /// use bs_month_table::{MonthLengthTable, YearLengths};
    ///
    /// let year = YearLengths::new([31; 12]).unwrap();
    /// let table = MonthLengthTable::new(2000, vec![year; 3]).unwrap();
    ///
    /// let mut buf = Vec::new();
    /// table.serialize(&mut buf).unwrap();
    /// assert_eq!(buf.len(), 4 + 4 + 3 * 12);
    /// ```
    pub fn serialize(&self, mut writer: impl io::Write) -> io::Result<()> {
        let length = u32::try_from(self.years.len())
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, InvalidTable::TooLarge))?;

        writer.write_all(&self.first_year.to_le_bytes())?;
        writer.write_all(&length.to_le_bytes())?;

        for year in &self.years {
            year.serialize(&mut writer)?;
        }

        Ok(())
    }

    /// Deserialize a table from a reader.
    ///
    /// ```
    /// use bs_month_table::{MonthLengthTable, YearLengths};
    ///
    /// let year1 = YearLengths::new([30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31]).unwrap();
    /// let year2 = YearLengths::new([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]).unwrap();
    /// let table1 = MonthLengthTable::new(2000, vec![year1, year2]).unwrap();
    ///
    /// let mut buf = Vec::new();
    /// table1.serialize(&mut buf).unwrap();
    ///
    /// let table2 = MonthLengthTable::deserialize(buf.as_slice()).unwrap();
    /// assert_eq!(table1, table2);
    /// ```
    pub fn deserialize(mut reader: impl io::Read) -> io::Result<Self> {
        let first_year = {
            let mut buf = [0; std::mem::size_of::<i32>()];
            reader.read_exact(&mut buf)?;
            i32::from_le_bytes(buf)
        };

        let length = {
            let mut buf = [0; std::mem::size_of::<u32>()];
            reader.read_exact(&mut buf)?;
            u32::from_le_bytes(buf)
        };

        let years = (0..length)
            .map(|_| YearLengths::deserialize(&mut reader))
            .collect::<Result<_, _>>()?;

        Self::new(first_year, years)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }
}

impl fmt::Debug for MonthLengthTable {
    /// ```
    /// use bs_month_table::{MonthLengthTable, YearLengths};
    ///
    /// let year = YearLengths::new([31; 12]).unwrap();
    /// let table = MonthLengthTable::new(2000, vec![year; 2]).unwrap();
    ///
    /// assert_eq!(
    ///     format!("{table:?}"),
    ///     "MonthLengthTable { first_year: 2000, last_year: 2001, total_days: 744 }",
    /// );
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonthLengthTable")
            .field("first_year", &self.first_year)
            .field("last_year", &self.last_year())
            .field("total_days", &self.total_days())
            .finish()
    }
}

/// Lengths of the twelve months of a year.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct YearLengths([u8; MONTHS_PER_YEAR]);

impl YearLengths {
    /// Create a year from the lengths of its months, which must all be in
    /// [`MONTH_LENGTH_RANGE`].
    ///
    /// ```
    /// use bs_month_table::{InvalidTable, YearLengths};
    ///
    /// assert!(YearLengths::new([30; 12]).is_ok());
    ///
    /// assert_eq!(
    ///     YearLengths::new([30, 33, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30]),
    ///     Err(InvalidTable::MonthLength { month0: 1, days: 33 }),
    /// );
    /// ```
    pub fn new(months: [u8; MONTHS_PER_YEAR]) -> Result<Self, InvalidTable> {
        if let Some((month0, &days)) = months
            .iter()
            .enumerate()
            .find(|(_, days)| !MONTH_LENGTH_RANGE.contains(days))
        {
            return Err(InvalidTable::MonthLength { month0: month0 as u8, days });
        }

        Ok(Self(months))
    }

    /// Number of days in a month, `month0` being zero-based.
    pub fn days_in_month(&self, month0: u8) -> Option<u8> {
        self.0.get(usize::from(month0)).copied()
    }

    /// Number of days between the first day of the year and the first day of a month.
    ///
    /// ```
    /// use bs_month_table::YearLengths;
    ///
    /// let year = YearLengths::new([30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31]).unwrap();
    /// assert_eq!(year.days_before_month(0), Some(0));
    /// assert_eq!(year.days_before_month(2), Some(62));
    /// assert_eq!(year.days_before_month(12), None);
    /// ```
    pub fn days_before_month(&self, month0: u8) -> Option<u32> {
        let month0 = usize::from(month0);

        if month0 >= MONTHS_PER_YEAR {
            return None;
        }

        Some(self.0[..month0].iter().copied().map(u32::from).sum())
    }

    /// Find the zero-based month containing the `days`-th day of the year, along with the
    /// number of days elapsed since the first day of this month.
    ///
    /// ```
    /// use bs_month_table::YearLengths;
    ///
    /// let year = YearLengths::new([30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31]).unwrap();
    /// assert_eq!(year.locate_day(0), Some((0, 0)));
    /// assert_eq!(year.locate_day(30), Some((1, 0)));
    /// assert_eq!(year.locate_day(364), Some((11, 30)));
    /// assert_eq!(year.locate_day(365), None);
    /// ```
    pub fn locate_day(&self, mut days: u32) -> Option<(u8, u8)> {
        for (month0, &length) in self.0.iter().enumerate() {
            if days < u32::from(length) {
                return Some((month0 as u8, days as u8));
            }

            days -= u32::from(length);
        }

        None
    }

    /// Total number of days in this year.
    pub fn total(&self) -> u32 {
        self.0.iter().copied().map(u32::from).sum()
    }

    /// Iterate over the lengths of the months of this year.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    /// Serialize this year into a writer.
    pub fn serialize(&self, mut writer: impl io::Write) -> io::Result<()> {
        writer.write_all(&self.0)
    }

    /// Deserialize a year from a reader.
    pub fn deserialize(mut reader: impl io::Read) -> io::Result<Self> {
        let mut buf = [0; MONTHS_PER_YEAR];
        reader.read_exact(&mut buf)?;
        Self::new(buf).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }
}

impl fmt::Debug for YearLengths {
    /// ```
    /// use bs_month_table::YearLengths;
    ///
    /// let year = YearLengths::new([30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31]).unwrap();
    /// assert_eq!(format!("{year:?}"), "[30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31]");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Reason why a table could not be built.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum InvalidTable {
    /// The table doesn't cover any year.
    Empty,
    /// The table covers too many days to be indexed.
    TooLarge,
    /// A month has a length out of [`MONTH_LENGTH_RANGE`].
    MonthLength { month0: u8, days: u8 },
}

impl fmt::Display for InvalidTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "month length table is empty"),
            Self::TooLarge => write!(f, "month length table is too large"),
            Self::MonthLength { month0, days } => write!(
                f,
                "month {} has {days} days: expected {}-{}",
                month0 + 1,
                MONTH_LENGTH_RANGE.start(),
                MONTH_LENGTH_RANGE.end(),
            ),
        }
    }
}

impl std::error::Error for InvalidTable {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> MonthLengthTable {
        let years = [
            [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
            [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
            [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
        ];

        let years = years
            .into_iter()
            .map(YearLengths::new)
            .collect::<Result<_, _>>()
            .unwrap();

        MonthLengthTable::new(2000, years).unwrap()
    }

    #[test]
    fn offsets() {
        let table = sample_table();
        assert_eq!(table.days_before_year(2000), Some(0));
        assert_eq!(table.days_before_year(2001), Some(365));
        assert_eq!(table.days_before_year(2002), Some(730));
        assert_eq!(table.total_days(), 1095);
    }

    #[test]
    fn locate_every_day() {
        let table = sample_table();
        let mut expected = Vec::new();

        for (year, lengths) in table.iter() {
            for (month0, length) in lengths.iter().enumerate() {
                for day0 in 0..length {
                    expected.push((year, month0 as u8, day0));
                }
            }
        }

        for (days, &(year, month0, day0)) in expected.iter().enumerate() {
            let (found_year, day_of_year) = table.locate_day(days as u32).unwrap();
            let year_lengths = table.year(found_year).unwrap();
            assert_eq!(found_year, year);
            assert_eq!(year_lengths.locate_day(day_of_year), Some((month0, day0)));
        }

        assert_eq!(table.locate_day(expected.len() as u32), None);
    }

    #[test]
    fn out_of_range_years() {
        let table = sample_table();
        assert_eq!(table.year(1999), None);
        assert_eq!(table.year(2003), None);
        assert_eq!(table.days_in_month(i32::MIN, 0), None);
        assert_eq!(table.days_in_month(i32::MAX, 0), None);
    }

    #[test]
    fn reject_corrupted_data() {
        let mut buf = Vec::new();
        sample_table().serialize(&mut buf).unwrap();
        buf[8] = 45;

        let err = MonthLengthTable::deserialize(buf.as_slice()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        let err = MonthLengthTable::deserialize(&buf[..10]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn reject_large_table() {
        let year = YearLengths::new([30; 12]).unwrap();
        let err = MonthLengthTable::new(i32::MAX, vec![year; 2]).unwrap_err();
        assert_eq!(err, InvalidTable::TooLarge);
    }
}
