use crate::types::{is_connection, is_context, is_type};

static RESERVED_WORDS: &[&[u8]] = &[
    b"true",
    b"false",
    b"Connection",
    b"Context",
    b"Boolean",
    b"Character",
    b"Integer",
    b"Float",
    b"String",
    b"Vector",
    b"Set",
    b"Dictionary",
];

pub fn is_reserved_word(input: &[u8]) -> bool {
    RESERVED_WORDS.iter().any(|word| *word == input)
}

/// An ASCII letter followed by letters, digits or underscores, which is not a reserved word.
pub fn is_identifier(input: &[u8]) -> bool {
    match input.split_first() {
        Some((first, rest)) if first.is_ascii_alphabetic() => {
            rest.iter().all(|byte| byte.is_ascii_alphanumeric() || *byte == b'_')
                && !is_reserved_word(input)
        }
        _ => false,
    }
}

pub fn is_namespace(input: &[u8]) -> bool {
    is_identifier(input)
}

/// A variable name, optionally qualified by a single namespace (`ns::name`).
pub fn is_variable(input: &[u8]) -> bool {
    match input.windows(2).position(|pair| pair == b"::") {
        Some(idx) => is_namespace(&input[..idx]) && is_identifier(&input[idx + 2..]),
        None => is_identifier(input),
    }
}

/// Anything that can receive a message.
pub fn is_object(input: &[u8]) -> bool {
    is_connection(input) || is_context(input) || is_type(input) || is_variable(input)
}
