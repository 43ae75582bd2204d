use arbitrary::Arbitrary;

use crate::grid::GRID_CELLS;
use crate::{normalize, Calendar};

#[derive(Arbitrary, Clone, Debug)]
pub enum Operation {
    Normalize,
    DayCount,
    Grid,
}

#[derive(Arbitrary, Clone, Debug)]
pub struct Data {
    pub text: String,
    pub days: u32,
    pub operation: Operation,
}

/// Check consistency of the calendar on arbitrary input, returns `false` if the input is not
/// relevant.
pub fn run_fuzz_date(data: Data) -> bool {
    let calendar = Calendar::default();

    match data.operation {
        Operation::Normalize => {
            let Ok(normalized) = normalize(&data.text) else {
                return false;
            };

            let normalized_twice = normalize(&normalized).unwrap_or_else(|err| {
                eprintln!("[ERR] Initial input: {}", data.text);
                eprintln!("[ERR] Invalid normalized input: {normalized}");
                panic!("{err}")
            });

            assert_eq!(normalized, normalized_twice);

            if let Some(date) = calendar.parse_and_validate(&normalized) {
                assert_eq!(date.to_string(), normalized);
            }
        }
        Operation::DayCount => {
            let Ok(date) = calendar.from_days_since_epoch(data.days) else {
                return false;
            };

            assert_eq!(calendar.days_since_epoch(date).unwrap(), data.days);
            assert_eq!(calendar.parse_and_validate(&date.to_string()), Some(date));

            let weekday = calendar
                .day_of_week(date.year(), date.month0(), date.day())
                .unwrap();

            assert_eq!(
                u32::from(weekday),
                (u32::from(calendar.epoch_weekday()) + data.days) % 7,
            );
        }
        Operation::Grid => {
            let Ok(date) = calendar.from_days_since_epoch(data.days) else {
                return false;
            };

            let grid = calendar.month_grid(date.year(), date.month0()).unwrap();
            let position = grid.position(date).expect("date is not in its grid");
            assert_eq!(grid.cells().len(), GRID_CELLS);
            assert!(grid.cells()[position].is_current());
            assert_eq!(position % 7, usize::from(grid.first_weekday() + date.day() - 1) % 7);
        }
    }

    true
}
