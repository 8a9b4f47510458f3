use knuckleball_core::Error;

use crate::context::Settings;
use crate::expect_args;
use crate::primitives::{display, null, parse_boolean, PrimitiveFn};

pub static INSTANCE_PRIMITIVES: &[(&str, PrimitiveFn<bool>)] = &[
    ("get", self::get),
    ("set:", self::set),
    ("isTrue?", self::is_true),
    ("isFalse?", self::is_false),
];

fn get(receiver: &mut bool, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    Ok(display(*receiver))
}

fn set(receiver: &mut bool, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [value]);
    *receiver = parse_boolean(value)?;
    Ok(null())
}

fn is_true(receiver: &mut bool, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    Ok(display(*receiver))
}

fn is_false(receiver: &mut bool, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    Ok(display(!*receiver))
}
