use knuckleball_core::Error;
use knuckleball_grammar as grammar;

use crate::compare::Relation;
use crate::context::Settings;
use crate::expect_args;
use crate::primitives::{display, null, parse_float, parse_integer, parse_wide_float, PrimitiveFn};
use crate::value::Value;

pub static INSTANCE_PRIMITIVES: &[(&str, PrimitiveFn<i32>)] = &[
    ("get", self::get),
    ("set:", self::set),
    ("isEqualTo?", self::is_equal_to),
    ("isLessThan?", self::is_less_than),
    ("isLessThanOrEqualTo?", self::is_less_than_or_equal_to),
    ("isGreaterThan?", self::is_greater_than),
    ("isGreaterThanOrEqualTo?", self::is_greater_than_or_equal_to),
    ("add:", self::add),
    ("subtract:", self::subtract),
    ("multiplyBy:", self::multiply_by),
    ("divideBy:", self::divide_by),
];

/// An arithmetic operand: integer literals stay integral, float literals are applied at full width
/// and the result is truncated back into the receiver.
enum Operand {
    Integer(i32),
    Float(f64),
}

impl Operand {
    fn parse(literal: &[u8]) -> Result<Operand, Error> {
        if grammar::is_integer_value(literal) {
            parse_integer(literal).map(Operand::Integer)
        } else {
            parse_wide_float(literal).map(Operand::Float)
        }
    }
}

fn get(receiver: &mut i32, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    Ok(display(*receiver))
}

fn set(receiver: &mut i32, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [value]);
    *receiver = parse_integer(value)?;
    Ok(null())
}

fn compare(
    receiver: i32,
    args: &[Vec<u8>],
    settings: &Settings,
    relation: Relation,
) -> Result<Vec<u8>, Error> {
    expect_args!(args, [operand]);
    let operand = if grammar::is_integer_value(operand) {
        Value::Integer(parse_integer(operand)?)
    } else {
        Value::Float(parse_float(operand)?)
    };
    let holds = settings
        .comparator()
        .holds(relation, &Value::Integer(receiver), &operand)?;
    Ok(display(holds))
}

fn is_equal_to(receiver: &mut i32, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    compare(*receiver, args, settings, Relation::Equal)
}

fn is_less_than(receiver: &mut i32, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    compare(*receiver, args, settings, Relation::Less)
}

fn is_less_than_or_equal_to(
    receiver: &mut i32,
    args: &[Vec<u8>],
    settings: &Settings,
) -> Result<Vec<u8>, Error> {
    compare(*receiver, args, settings, Relation::LessOrEqual)
}

fn is_greater_than(receiver: &mut i32, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    compare(*receiver, args, settings, Relation::Greater)
}

fn is_greater_than_or_equal_to(
    receiver: &mut i32,
    args: &[Vec<u8>],
    settings: &Settings,
) -> Result<Vec<u8>, Error> {
    compare(*receiver, args, settings, Relation::GreaterOrEqual)
}

fn add(receiver: &mut i32, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [operand]);
    *receiver = match Operand::parse(operand)? {
        Operand::Integer(operand) => receiver.wrapping_add(operand),
        Operand::Float(operand) => (f64::from(*receiver) + operand) as i32,
    };
    Ok(null())
}

fn subtract(receiver: &mut i32, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [operand]);
    *receiver = match Operand::parse(operand)? {
        Operand::Integer(operand) => receiver.wrapping_sub(operand),
        Operand::Float(operand) => (f64::from(*receiver) - operand) as i32,
    };
    Ok(null())
}

fn multiply_by(receiver: &mut i32, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [operand]);
    *receiver = match Operand::parse(operand)? {
        Operand::Integer(operand) => receiver.wrapping_mul(operand),
        Operand::Float(operand) => (f64::from(*receiver) * operand) as i32,
    };
    Ok(null())
}

fn divide_by(receiver: &mut i32, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [operand]);
    *receiver = match Operand::parse(operand)? {
        Operand::Integer(0) => return Err(Error::InvalidArgument),
        Operand::Integer(operand) => receiver.wrapping_div(operand),
        Operand::Float(operand) if operand == 0.0 => return Err(Error::InvalidArgument),
        Operand::Float(operand) => (f64::from(*receiver) / operand) as i32,
    };
    Ok(null())
}
