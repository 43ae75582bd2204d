//! Layout of a month as it is displayed by a date picker.

use crate::calendar::Calendar;
use crate::date::CalendarDate;
use crate::error::Result;

/// Number of days in a week.
pub const DAYS_PER_WEEK: usize = 7;

/// Number of cells of a grid: six weeks are enough to fit any month.
pub const GRID_CELLS: usize = 6 * DAYS_PER_WEEK;

/// A cell of a [`MonthGrid`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum GridCell {
    /// Filler for a neighbour month which is not supported by the calendar.
    Empty,
    /// A day of the previous month, shown before the first day of the month.
    Leading(CalendarDate),
    /// A day of the month.
    Current(CalendarDate),
    /// A day of the next month, shown after the last day of the month.
    Trailing(CalendarDate),
}

impl GridCell {
    pub fn date(self) -> Option<CalendarDate> {
        match self {
            Self::Empty => None,
            Self::Leading(date) | Self::Current(date) | Self::Trailing(date) => Some(date),
        }
    }

    pub fn is_current(self) -> bool {
        matches!(self, Self::Current(_))
    }
}

/// Six weeks of days, starting on the Sunday before the first day of a month.
///
/// ```
/// use bikram_sambat::Calendar;
/// use bikram_sambat::grid::GridCell;
///
/// let calendar = Calendar::default();
/// let grid = calendar.month_grid(2081, 0).unwrap();
///
/// // 2081 Baisakh 1 is a Saturday
/// assert_eq!(grid.first_weekday(), 6);
/// assert_eq!(grid.cells()[6], GridCell::Current(calendar.date(2081, 0, 1).unwrap()));
/// assert_eq!(grid.cells()[0], GridCell::Leading(calendar.date(2080, 11, 25).unwrap()));
/// assert_eq!(grid.weeks().count(), 6);
/// ```
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month0: u8,
    first_weekday: u8,
    days_in_month: u8,
    cells: Vec<GridCell>,
}

impl MonthGrid {
    pub(crate) fn new(calendar: &Calendar, year: i32, month0: u8) -> Result<Self> {
        let days_in_month = calendar.days_in_month(year, month0)?;
        let first_weekday = calendar.first_day_of_month(year, month0)?;
        let mut cells = Vec::with_capacity(GRID_CELLS);

        // End of previous month
        let leading = usize::from(first_weekday);

        match calendar.month_before(year, month0) {
            Some((prev_year, prev_month0)) => {
                let prev_length = calendar.days_in_month(prev_year, prev_month0)?;

                cells.extend(
                    (prev_length + 1 - first_weekday..=prev_length).map(|day| {
                        GridCell::Leading(CalendarDate::new_unchecked(prev_year, prev_month0, day))
                    }),
                );
            }
            None => cells.extend(std::iter::repeat(GridCell::Empty).take(leading)),
        }

        // The month itself
        cells.extend(
            (1..=days_in_month)
                .map(|day| GridCell::Current(CalendarDate::new_unchecked(year, month0, day))),
        );

        // Start of next month
        let trailing = GRID_CELLS - cells.len();

        match calendar.month_after(year, month0) {
            Some((next_year, next_month0)) => cells.extend((1..=trailing as u8).map(|day| {
                GridCell::Trailing(CalendarDate::new_unchecked(next_year, next_month0, day))
            })),
            None => cells.extend(std::iter::repeat(GridCell::Empty).take(trailing)),
        }

        debug_assert_eq!(cells.len(), GRID_CELLS);

        Ok(Self {
            year,
            month0,
            first_weekday,
            days_in_month,
            cells,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month displayed by this grid.
    pub fn month0(&self) -> u8 {
        self.month0
    }

    /// Day of the week of the first day of the month, which is also the index of its cell.
    pub fn first_weekday(&self) -> u8 {
        self.first_weekday
    }

    pub fn days_in_month(&self) -> u8 {
        self.days_in_month
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Iterate over the rows of the grid, each starting on a Sunday.
    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell]> + '_ {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// Iterate over the days of the month itself.
    pub fn current_days(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.cells
            .iter()
            .filter(|cell| cell.is_current())
            .filter_map(|cell| cell.date())
    }

    /// Find the cell holding a date, if it is visible on this grid.
    pub fn position(&self, date: CalendarDate) -> Option<usize> {
        self.cells.iter().position(|cell| cell.date() == Some(date))
    }
}
