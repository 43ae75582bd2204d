#![doc = include_str!("../README.md")]

#[macro_use]
extern crate pest_derive;

pub mod error;
pub mod fields;

mod parser;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use fields::DateFields;
pub use parser::{normalize, parse, parse_loose};
