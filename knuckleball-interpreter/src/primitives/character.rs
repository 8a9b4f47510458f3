use knuckleball_core::{text, Error};

use crate::compare::Relation;
use crate::context::Settings;
use crate::expect_args;
use crate::primitives::{display, null, parse_character, PrimitiveFn};
use crate::value::{render_character, Value};

pub static INSTANCE_PRIMITIVES: &[(&str, PrimitiveFn<u8>)] = &[
    ("get", self::get),
    ("set:", self::set),
    ("isAlphabetic?", self::is_alphabetic),
    ("isNumeric?", self::is_numeric),
    ("isAlphanumeric?", self::is_alphanumeric),
    ("isSpace?", self::is_space),
    ("isEqualTo?", self::is_equal_to),
    ("isLessThan?", self::is_less_than),
    ("isLessThanOrEqualTo?", self::is_less_than_or_equal_to),
    ("isGreaterThan?", self::is_greater_than),
    ("isGreaterThanOrEqualTo?", self::is_greater_than_or_equal_to),
];

fn get(receiver: &mut u8, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    Ok(render_character(*receiver))
}

fn set(receiver: &mut u8, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [value]);
    *receiver = parse_character(value)?;
    Ok(null())
}

fn is_alphabetic(receiver: &mut u8, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    Ok(display(receiver.is_ascii_alphabetic()))
}

fn is_numeric(receiver: &mut u8, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    Ok(display(receiver.is_ascii_digit()))
}

fn is_alphanumeric(receiver: &mut u8, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    Ok(display(receiver.is_ascii_alphanumeric()))
}

fn is_space(receiver: &mut u8, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    Ok(display(text::is_space(*receiver)))
}

fn compare(
    receiver: u8,
    args: &[Vec<u8>],
    settings: &Settings,
    relation: Relation,
) -> Result<Vec<u8>, Error> {
    expect_args!(args, [operand]);
    let operand = Value::Character(parse_character(operand)?);
    let holds = settings
        .comparator()
        .holds(relation, &Value::Character(receiver), &operand)?;
    Ok(display(holds))
}

fn is_equal_to(receiver: &mut u8, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    compare(*receiver, args, settings, Relation::Equal)
}

fn is_less_than(receiver: &mut u8, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    compare(*receiver, args, settings, Relation::Less)
}

fn is_less_than_or_equal_to(
    receiver: &mut u8,
    args: &[Vec<u8>],
    settings: &Settings,
) -> Result<Vec<u8>, Error> {
    compare(*receiver, args, settings, Relation::LessOrEqual)
}

fn is_greater_than(receiver: &mut u8, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    compare(*receiver, args, settings, Relation::Greater)
}

fn is_greater_than_or_equal_to(
    receiver: &mut u8,
    args: &[Vec<u8>],
    settings: &Settings,
) -> Result<Vec<u8>, Error> {
    compare(*receiver, args, settings, Relation::GreaterOrEqual)
}
