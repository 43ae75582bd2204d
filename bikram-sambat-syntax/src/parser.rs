use pest::iterators::Pair;
use pest::Parser;

use crate::error::{Error, Result};
use crate::fields::DateFields;

#[derive(Parser)]
#[grammar = "grammar.pest"]
struct BSParser;

/// Parse a date written in the strict `YYYY-MM-DD` format.
///
/// ```
/// use bikram_sambat_syntax::{parse, DateFields};
///
/// assert_eq!(parse("2081-01-15").unwrap(), DateFields::new(2081, 1, 15));
/// assert!(parse("2081-1-15").is_err());
/// ```
pub fn parse(data: &str) -> Result<DateFields> {
    let date_pair = BSParser::parse(Rule::input_strict_date, data)
        .map_err(Error::from)?
        .next()
        .expect("grammar error: no strict_date found");

    build_date(date_pair, Rule::strict_date)
}

/// Parse a date made of any three hyphen-separated numbers.
///
/// ```
/// use bikram_sambat_syntax::{parse_loose, DateFields};
///
/// assert_eq!(parse_loose("2081-1-5").unwrap(), DateFields::new(2081, 1, 5));
/// assert!(parse_loose("2081-1").is_err());
/// ```
pub fn parse_loose(data: &str) -> Result<DateFields> {
    let date_pair = BSParser::parse(Rule::input_loose_date, data)
        .map_err(Error::from)?
        .next()
        .expect("grammar error: no loose_date found");

    let date = build_date(date_pair, Rule::loose_date)?;

    if date.month == 0 || date.day == 0 {
        #[cfg(feature = "log")]
        log::warn!("Found a zero field in date `{data}`: months and days start at 1.");
    } else if date.month > 12 {
        #[cfg(feature = "log")]
        log::warn!("Found month number {} in date `{data}`", date.month);
    }

    Ok(date)
}

/// Rewrite a date into its canonical form, with zero-padded month and day.
///
/// This is idempotent and fails on anything that isn't made of three
/// hyphen-separated numbers.
///
/// ```
/// use bikram_sambat_syntax::normalize;
///
/// assert_eq!(normalize("2081-1-5").unwrap(), "2081-01-05");
/// assert_eq!(normalize("2081-01-05").unwrap(), "2081-01-05");
/// assert!(normalize("2081-01").is_err());
/// ```
pub fn normalize(data: &str) -> Result<String> {
    Ok(parse_loose(data)?.to_string())
}

fn unexpected_token<T>(token: Rule, parent: Rule) -> T {
    unreachable!("Grammar error: found `{token:?}` inside of `{parent:?}`")
}

fn build_date(pair: Pair<Rule>, expected: Rule) -> Result<DateFields> {
    assert_eq!(pair.as_rule(), expected);
    let mut pairs = pair.into_inner();

    let mut field = |name: &'static str| {
        let pair = pairs.next().expect("grammar error: missing date field");
        build_number(pair, expected, name)
    };

    let year = field("year")?;
    let month = field("month")?;
    let day = field("day")?;
    Ok(DateFields { year, month, day })
}

fn build_number(pair: Pair<Rule>, parent: Rule, field: &'static str) -> Result<u32> {
    match pair.as_rule() {
        Rule::strict_year | Rule::strict_month | Rule::strict_day | Rule::number => {}
        other => unexpected_token(other, parent),
    }

    pair.as_str().parse().map_err(|_| Error::Overflow {
        field,
        value: pair.as_str().to_string(),
    })
}
