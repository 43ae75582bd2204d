use super::small_calendar;
use crate::grid::{GridCell, GRID_CELLS};
use crate::{bs_date, Calendar};

#[test]
fn leading_and_trailing_days() {
    let calendar = Calendar::default();
    let grid = calendar.month_grid(2081, 0).unwrap();

    assert_eq!(grid.year(), 2081);
    assert_eq!(grid.month0(), 0);
    assert_eq!(grid.first_weekday(), 6);
    assert_eq!(grid.days_in_month(), 31);

    let cells = grid.cells();
    assert_eq!(cells.len(), GRID_CELLS);

    for (cell, day) in cells[..6].iter().zip(25..=30) {
        assert_eq!(*cell, GridCell::Leading(calendar.date(2080, 11, day).unwrap()));
    }

    for (cell, day) in cells[6..37].iter().zip(1..=31) {
        assert_eq!(*cell, GridCell::Current(calendar.date(2081, 0, day).unwrap()));
    }

    for (cell, day) in cells[37..].iter().zip(1..=5) {
        assert_eq!(*cell, GridCell::Trailing(calendar.date(2081, 1, day).unwrap()));
    }
}

#[test]
fn first_supported_month() {
    let calendar = Calendar::default();
    let grid = calendar.month_grid(2000, 0).unwrap();

    assert_eq!(grid.first_weekday(), 3);
    assert_eq!(grid.cells()[..3], [GridCell::Empty; 3]);
    assert_eq!(grid.cells()[3], GridCell::Current(bs_date!("2000-01-01")));
    assert!(matches!(grid.cells()[GRID_CELLS - 1], GridCell::Trailing(_)));
}

#[test]
fn last_supported_month() {
    let calendar = Calendar::default();
    let grid = calendar.month_grid(2090, 11).unwrap();

    assert_eq!(grid.first_weekday(), 3);
    assert_eq!(grid.days_in_month(), 30);
    assert!(matches!(grid.cells()[0], GridCell::Leading(_)));
    assert_eq!(grid.cells()[32], GridCell::Current(bs_date!("2090-12-30")));
    assert_eq!(grid.cells()[33..], [GridCell::Empty; 9]);
}

#[test]
fn weeks() {
    let calendar = Calendar::default();
    let grid = calendar.month_grid(2081, 3).unwrap();
    let weeks: Vec<_> = grid.weeks().collect();

    // 2081 Shrawan 1 is a Tuesday
    assert_eq!(weeks.len(), 6);
    assert!(weeks.iter().all(|week| week.len() == 7));
    assert_eq!(weeks[0][2], GridCell::Current(bs_date!("2081-04-01")));
    assert!(weeks[0][..2].iter().all(|cell| matches!(cell, GridCell::Leading(_))));
}

#[test]
fn position() {
    let calendar = Calendar::default();
    let grid = calendar.month_grid(2081, 0).unwrap();

    assert_eq!(grid.position(bs_date!("2081-01-01")), Some(6));
    assert_eq!(grid.position(bs_date!("2081-01-15")), Some(20));
    assert_eq!(grid.position(bs_date!("2080-12-25")), Some(0));
    assert_eq!(grid.position(bs_date!("2081-02-05")), Some(41));
    assert_eq!(grid.position(bs_date!("2081-02-06")), None);
}

#[test]
fn every_month() {
    for calendar in [Calendar::default(), small_calendar()] {
        for year in calendar.years() {
            for month0 in 0..12 {
                let grid = calendar.month_grid(year, month0).unwrap();
                let first = calendar.date(year, month0, 1).unwrap();
                let days: Vec<_> = grid.current_days().collect();

                assert_eq!(grid.cells().len(), GRID_CELLS);
                assert_eq!(grid.position(first), Some(usize::from(grid.first_weekday())));
                assert_eq!(days.len(), usize::from(grid.days_in_month()));
                assert_eq!(days[0], first);

                for pair in grid.cells().windows(2) {
                    if let (Some(prev), Some(next)) = (pair[0].date(), pair[1].date()) {
                        assert_eq!(calendar.succ(prev), Some(next));
                    }
                }
            }
        }
    }
}

#[test]
fn invalid_month() {
    let calendar = Calendar::default();
    assert!(calendar.month_grid(2081, 12).is_err());
    assert!(calendar.month_grid(1999, 0).is_err());
}
