use knuckleball_core::text;

use crate::names::{is_identifier, is_namespace, is_object, is_variable};
use crate::types::GENERIC_PREFIXES;
use crate::values::{is_character_value, is_primitive_value, string_value_end};

/// An identifier, optionally followed by `?` (`get`, `isEmpty?`).
pub fn is_unary_message(input: &[u8]) -> bool {
    match input.split_last() {
        Some((b'?', name)) => is_identifier(name),
        _ => is_identifier(input),
    }
}

/// An identifier followed by `:` or `?` (`create:`, `contains?`).
pub fn is_keyword_message_token(input: &[u8]) -> bool {
    match input.split_last() {
        Some((b':', name)) | Some((b'?', name)) => is_identifier(name),
        _ => false,
    }
}

/// What a keyword part accepts as its argument.
pub fn is_keyword_message_argument(input: &[u8]) -> bool {
    is_primitive_value(input) || is_namespace(input) || is_variable(input)
}

/// Where the argument starting the input ends.
///
/// Only string and character literals may hold whitespace, so they end right after their
/// closing quote while every other argument ends at the first whitespace.
fn keyword_argument_end(input: &[u8]) -> usize {
    match input.first() {
        Some(b'"') => string_value_end(input).unwrap_or(input.len()),
        Some(b'\'') if input.len() >= 3 && is_character_value(&input[..3]) => 3,
        _ => text::find_space(input).unwrap_or(input.len()),
    }
}

/// Splits the keyword part at the start of the input into its token and its argument,
/// along with the remaining parts.
///
/// The token ends at the first `:` or `?`, and the argument comes after optional whitespace.
/// The remaining parts are separated from the argument by whitespace, and are never blank.
pub fn split_keyword_part(input: &[u8]) -> Option<(&[u8], &[u8], &[u8])> {
    let idx = input.iter().position(|byte| *byte == b':' || *byte == b'?')?;
    let (token, rest) = input.split_at(idx + 1);
    let rest = text::trim_start(rest);
    let (argument, rest) = rest.split_at(keyword_argument_end(rest));

    if !is_keyword_message_token(token) || !is_keyword_message_argument(argument) {
        return None;
    }

    let rest = match rest.split_first() {
        None => rest,
        Some((byte, tail)) if text::is_space(*byte) => match text::trim_start(tail) {
            [] => return None,
            tail => tail,
        },
        Some(_) => return None,
    };
    Some((token, argument, rest))
}

/// A single `token: argument` pair.
pub fn is_keyword_message_part(input: &[u8]) -> bool {
    matches!(split_keyword_part(input), Some((_, _, [])))
}

/// One or more keyword parts separated by whitespace.
pub fn is_keyword_message(input: &[u8]) -> bool {
    let mut rest = input;
    loop {
        match split_keyword_part(rest) {
            Some((_, _, [])) => return true,
            Some((_, _, next)) => rest = next,
            None => return false,
        }
    }
}

/// Where the object starting a statement body ends.
///
/// Generic type names are the only objects holding whitespace, and they end at their
/// closing bracket. Every other object ends at the first whitespace.
fn object_end(body: &[u8]) -> Option<usize> {
    if GENERIC_PREFIXES.iter().any(|prefix| body.starts_with(prefix)) {
        body.iter().position(|byte| *byte == b'>').map(|idx| idx + 1)
    } else {
        text::find_space(body)
    }
}

/// Splits a statement into its object and its message.
///
/// The input is trimmed and must end with `;`. Then, the object is the shortest prefix
/// (ending right before a whitespace) which is a valid object, and the message is the
/// rest, left-trimmed and without the semicolon. Since only generic type names hold
/// whitespace, at most one prefix is ever a candidate.
pub fn split_statement(input: &[u8]) -> Option<(&[u8], &[u8])> {
    let body = text::trim(input).strip_suffix(b";")?;
    let body = text::trim_end(body);

    let end = object_end(body)?;
    let (object, message) = body.split_at(end);
    match message.first() {
        Some(byte) if text::is_space(*byte) && is_object(object) => {
            Some((object, text::trim_start(message)))
        }
        _ => None,
    }
}

/// Is the input a full statement (`object message;`) ?
pub fn is_statement(input: &[u8]) -> bool {
    split_statement(input).map_or(false, |(_, message)| {
        is_unary_message(message) || is_keyword_message(message)
    })
}
