use std::fmt;

use crate::parser::Rule;

pub type Result<T> = std::result::Result<T, Error>;

/// A date that couldn't be read from text.
#[derive(Clone, Debug)]
pub enum Error {
    /// The input is not made of hyphen-separated numbers in the expected format.
    Parser(pest::error::Error<Rule>),
    /// A field is made of too many digits to be held in a `u32`.
    Overflow { field: &'static str, value: String },
}

impl From<pest::error::Error<Rule>> for Error {
    fn from(pest_err: pest::error::Error<Rule>) -> Self {
        Self::Parser(pest_err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parser(pest_err) => write!(f, "invalid date syntax\n{pest_err}"),
            Self::Overflow { field, value } => {
                write!(f, "{field} `{value}` is too large, expected at most {}", u32::MAX)
            }
        }
    }
}

impl std::error::Error for Error {}
