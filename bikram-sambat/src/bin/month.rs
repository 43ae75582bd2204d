use std::env;

use bikram_sambat::localization::month_name;
use bikram_sambat::{Calendar, GridCell, Language};

fn main() {
    let mut args = env::args().skip(1);
    let input = args.next();

    let language: Language = match args.next() {
        Some(code) => code.parse().unwrap_or_else(|err| panic!("{err}")),
        None => Language::default(),
    };

    let calendar = Calendar::default().with_language(language);

    let date = match input {
        Some(text) => calendar.parse_initial(&text).unwrap_or_else(|err| panic!("{err}")),
        None => calendar
            .date(calendar.min_year(), 0, 1)
            .expect("first day of the table should exist"),
    };

    let grid = calendar
        .month_grid(date.year(), date.month0())
        .expect("month of a valid date should be displayable");

    println!(" - date: {date}");
    let weekday = calendar
        .weekday(date.year(), date.month0(), date.day())
        .expect("date was validated");

    println!(" - weekday: {weekday}");
    println!(
        " - month: {} {} ({} days)",
        month_name(date.month0()).unwrap_or("?"),
        date.year(),
        grid.days_in_month(),
    );

    println!("---");

    for label in calendar.weekday_labels() {
        print!("{label:>6}");
    }

    println!();

    for week in grid.weeks() {
        for cell in week {
            match cell {
                GridCell::Empty => print!("{:>6}", ""),
                GridCell::Current(day) if *day == date => print!("{:>6}", format!("[{}]", day.day())),
                GridCell::Current(day) => print!("{:>6}", day.day()),
                GridCell::Leading(day) | GridCell::Trailing(day) => {
                    print!("{:>6}", format!("({})", day.day()))
                }
            }
        }

        println!()
    }
}
