//!
//! This crate turns a single line of Knuckleball text into a [`Statement`].
//!
//! The input is first validated against the grammar, so the decomposition itself never has to backtrack.
//!

/// The parsed statement definition.
pub mod statement;

pub use crate::statement::Statement;

use knuckleball_core::Error;
use knuckleball_grammar::{is_statement, is_unary_message, split_keyword_part, split_statement};

/// Parses a statement such as `Integer create: i withValue: 42;`.
pub fn parse(input: &[u8]) -> Result<Statement, Error> {
    if !is_statement(input) {
        return Err(Error::InvalidStatement);
    }
    let (object, message) = split_statement(input).ok_or(Error::InvalidStatement)?;
    let object = ascii(object)?;

    if is_unary_message(message) {
        return Ok(Statement {
            object,
            message: ascii(message)?,
            arguments: Vec::new(),
        });
    }

    let (message, arguments) = parse_keyword_message(message)?;
    Ok(Statement {
        object,
        message,
        arguments,
    })
}

/// Objects and message names are made of ASCII only, once validated.
fn ascii(input: &[u8]) -> Result<String, Error> {
    String::from_utf8(input.to_vec()).map_err(|_| Error::InvalidStatement)
}

fn parse_keyword_message(input: &[u8]) -> Result<(String, Vec<Vec<u8>>), Error> {
    let mut name = String::new();
    let mut arguments = Vec::new();

    let mut rest = input;
    while !rest.is_empty() {
        let (token, argument, next) = split_keyword_part(rest).ok_or(Error::InvalidStatement)?;
        name.push_str(&ascii(token)?);
        arguments.push(argument.to_vec());
        rest = next;
    }

    Ok((name, arguments))
}
