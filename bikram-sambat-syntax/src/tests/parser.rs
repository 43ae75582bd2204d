use crate::error::Error;
use crate::parser::{parse, parse_loose};
use crate::DateFields;

#[test]
fn strict_date() {
    assert_eq!(parse("2081-01-15").unwrap(), DateFields::new(2081, 1, 15));
    assert_eq!(parse("2000-12-30").unwrap(), DateFields::new(2000, 12, 30));

    // Calendar rules are not checked here
    assert_eq!(parse("2081-13-99").unwrap(), DateFields::new(2081, 13, 99));
    assert_eq!(parse("0000-00-00").unwrap(), DateFields::new(0, 0, 0));
}

#[test]
fn strict_date_invalid() {
    for input in [
        "",
        "2081",
        "2081-01",
        "2081-1-15",
        "2081-01-5",
        "81-01-15",
        "20810-01-15",
        "2081-001-15",
        "2081/01/15",
        "2081-01-15 ",
        " 2081-01-15",
        "2081 - 01 - 15",
        "2081-01-15-01",
        "२०८१-०१-१५",
        "+2081-01-15",
        "2081-0a-15",
    ] {
        assert!(
            matches!(parse(input), Err(Error::Parser(_))),
            "`{input}` should be rejected",
        );
    }
}

#[test]
fn loose_date() {
    assert_eq!(parse_loose("2081-1-5").unwrap(), DateFields::new(2081, 1, 5));
    assert_eq!(parse_loose("2081-01-05").unwrap(), DateFields::new(2081, 1, 5));
    assert_eq!(parse_loose("2081-001-0005").unwrap(), DateFields::new(2081, 1, 5));
    assert_eq!(parse_loose("81-1-5").unwrap(), DateFields::new(81, 1, 5));
    assert_eq!(parse_loose("02081-1-5").unwrap(), DateFields::new(2081, 1, 5));
}

#[test]
fn loose_date_invalid() {
    for input in ["", "--", "2081--5", "2081-1-", "2081-1-5-", "2081.1.5", "-2081-1-5", "a-b-c"] {
        assert!(
            matches!(parse_loose(input), Err(Error::Parser(_))),
            "`{input}` should be rejected",
        );
    }
}

#[test]
fn overflow() {
    assert!(matches!(
        parse_loose("99999999999-01-01"),
        Err(Error::Overflow { field: "year", .. })
    ));

    assert!(matches!(
        parse_loose("2081-01-4294967296"),
        Err(Error::Overflow { field: "day", .. })
    ));

    assert_eq!(
        parse_loose("4294967295-1-1").unwrap(),
        DateFields::new(u32::MAX, 1, 1),
    );
}

#[test]
fn error_message() {
    let err = parse_loose("2081-01-4294967296").unwrap_err();
    assert_eq!(
        err.to_string(),
        "day `4294967296` is too large, expected at most 4294967295",
    );

    let err = parse("2081/01/15").unwrap_err();
    assert!(err.to_string().starts_with("invalid date syntax\n"));
}
