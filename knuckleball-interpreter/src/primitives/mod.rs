/// Primitives for **Boolean** values.
pub mod boolean;
/// Primitives for **Character** values.
pub mod character;
/// Primitives for **Dictionary<K, V>** values.
pub mod dictionary;
/// Primitives for **Float** values.
pub mod float;
/// Primitives for **Integer** values.
pub mod integer;
/// Primitives for **Set<T>** values.
pub mod set;
/// Primitives for **String** values.
pub mod string;
/// Primitives for **Vector<T>** values.
pub mod vector;

use std::convert::TryFrom;
use std::fmt;
use std::str;

use knuckleball_core::{text, Error};
use knuckleball_grammar as grammar;

use crate::context::Settings;

/// An interpreter primitive, operating on the native payload `T` of a value.
///
/// Arguments and output are raw bytes, since strings and characters are not bound to any encoding.
pub type PrimitiveFn<T> =
    fn(receiver: &mut T, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error>;

/// What effectful primitives answer with.
pub const NULL: &[u8] = b"null";

/// The `null` answer, as an owned output.
pub fn null() -> Vec<u8> {
    NULL.to_vec()
}

/// Formats any displayable answer (booleans, counts, indices) into an output.
pub fn display(value: impl fmt::Display) -> Vec<u8> {
    value.to_string().into_bytes()
}

/// Macro for checking the arity of a message and binding its arguments as `&[u8]`s.
#[macro_export]
macro_rules! expect_args {
    ($args:expr, [ $( $name:ident ),* $(,)? ]) => {
        let ($($name,)*) = match $args {
            [$($name),*] => ($($name.as_slice(),)*),
            _ => return Err(::knuckleball_core::Error::WrongNumberOfArguments),
        };
    };
}

/// Search for a primitive matching the given message in a primitive table.
pub fn find<T>(
    primitives: &'static [(&'static str, PrimitiveFn<T>)],
    message: &str,
) -> Option<PrimitiveFn<T>> {
    primitives
        .iter()
        .find(|it| it.0 == message)
        .map(|it| it.1)
}

/// Looks up and invokes the primitive for `message`, or fails with an invalid message.
pub fn invoke<T>(
    primitives: &'static [(&'static str, PrimitiveFn<T>)],
    receiver: &mut T,
    message: &str,
    args: &[Vec<u8>],
    settings: &Settings,
) -> Result<Vec<u8>, Error> {
    let primitive = find(primitives, message).ok_or(Error::InvalidMessage)?;
    primitive(receiver, args, settings)
}

/// Parses a numeric literal already validated by the grammar, hence made of ASCII only.
fn parse_number<T: str::FromStr>(literal: &[u8]) -> Result<T, Error> {
    str::from_utf8(literal)
        .ok()
        .and_then(|literal| literal.parse().ok())
        .ok_or(Error::InvalidArgument)
}

pub fn parse_boolean(literal: &[u8]) -> Result<bool, Error> {
    if !grammar::is_boolean_value(literal) {
        return Err(Error::InvalidArgument);
    }
    Ok(literal == b"true")
}

pub fn parse_character(literal: &[u8]) -> Result<u8, Error> {
    match literal {
        [b'\'', character, b'\''] => Ok(*character),
        _ => Err(Error::InvalidArgument),
    }
}

/// Parses an integer literal, or a float literal truncated toward zero.
pub fn parse_integer(literal: &[u8]) -> Result<i32, Error> {
    if grammar::is_integer_value(literal) {
        parse_number(literal)
    } else if grammar::is_float_value(literal) {
        parse_number::<f64>(literal).map(|value| value as i32)
    } else {
        Err(Error::InvalidArgument)
    }
}

pub fn parse_float(literal: &[u8]) -> Result<f32, Error> {
    if !grammar::is_float_value(literal) {
        return Err(Error::InvalidArgument);
    }
    parse_number(literal)
}

/// Parses a float operand at full width, for arithmetic that is narrowed afterwards.
pub fn parse_wide_float(literal: &[u8]) -> Result<f64, Error> {
    if !grammar::is_float_value(literal) {
        return Err(Error::InvalidArgument);
    }
    parse_number(literal)
}

/// Parses a string literal into its unescaped content.
pub fn parse_string(literal: &[u8]) -> Result<Vec<u8>, Error> {
    if !grammar::is_string_value(literal) {
        return Err(Error::InvalidArgument);
    }
    Ok(text::unescape(&literal[1..literal.len() - 1]))
}

/// An index designating an existing element (`0 <= index < len`).
pub fn element_index(literal: &[u8], len: usize) -> Result<usize, Error> {
    let index = parse_integer(literal)?;
    usize::try_from(index)
        .ok()
        .filter(|index| *index < len)
        .ok_or(Error::InvalidArgument)
}

/// An index designating a boundary between elements (`0 <= index <= len`).
pub fn boundary_index(literal: &[u8], len: usize) -> Result<usize, Error> {
    let index = parse_integer(literal)?;
    usize::try_from(index)
        .ok()
        .filter(|index| *index <= len)
        .ok_or(Error::InvalidArgument)
}

/// A `[from, to)` range of boundaries, with `from <= to`.
pub fn boundary_range(from: &[u8], to: &[u8], len: usize) -> Result<(usize, usize), Error> {
    let from = boundary_index(from, len)?;
    let to = boundary_index(to, len)?;
    if to < from {
        return Err(Error::InvalidArgument);
    }
    Ok((from, to))
}

/// A non-negative element count, clamped to `len`.
pub fn clamped_count(literal: &[u8], len: usize) -> Result<usize, Error> {
    let count = parse_integer(literal)?;
    let count = usize::try_from(count).map_err(|_| Error::InvalidArgument)?;
    Ok(count.min(len))
}
