use knuckleball_core::Error;

use crate::compare::Relation;
use crate::context::Settings;
use crate::expect_args;
use crate::primitives::{display, null, parse_float, parse_wide_float, PrimitiveFn};
use crate::value::Value;

pub static INSTANCE_PRIMITIVES: &[(&str, PrimitiveFn<f32>)] = &[
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

fn get(receiver: &mut f32, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    Ok(Value::Float(*receiver).render(settings))
}

fn set(receiver: &mut f32, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [value]);
    *receiver = parse_float(value)?;
    Ok(null())
}

fn compare(
    receiver: f32,
    args: &[Vec<u8>],
    settings: &Settings,
    relation: Relation,
) -> Result<Vec<u8>, Error> {
    expect_args!(args, [operand]);
    let operand = Value::Float(parse_float(operand)?);
    let holds = settings
        .comparator()
        .holds(relation, &Value::Float(receiver), &operand)?;
    Ok(display(holds))
}

fn is_equal_to(receiver: &mut f32, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    compare(*receiver, args, settings, Relation::Equal)
}

fn is_less_than(receiver: &mut f32, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    compare(*receiver, args, settings, Relation::Less)
}

fn is_less_than_or_equal_to(
    receiver: &mut f32,
    args: &[Vec<u8>],
    settings: &Settings,
) -> Result<Vec<u8>, Error> {
    compare(*receiver, args, settings, Relation::LessOrEqual)
}

fn is_greater_than(receiver: &mut f32, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    compare(*receiver, args, settings, Relation::Greater)
}

fn is_greater_than_or_equal_to(
    receiver: &mut f32,
    args: &[Vec<u8>],
    settings: &Settings,
) -> Result<Vec<u8>, Error> {
    compare(*receiver, args, settings, Relation::GreaterOrEqual)
}

// operands are applied at full width, then narrowed back into the receiver.

fn add(receiver: &mut f32, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [operand]);
    *receiver = (f64::from(*receiver) + parse_wide_float(operand)?) as f32;
    Ok(null())
}

fn subtract(receiver: &mut f32, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [operand]);
    *receiver = (f64::from(*receiver) - parse_wide_float(operand)?) as f32;
    Ok(null())
}

fn multiply_by(receiver: &mut f32, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [operand]);
    *receiver = (f64::from(*receiver) * parse_wide_float(operand)?) as f32;
    Ok(null())
}

fn divide_by(receiver: &mut f32, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [operand]);
    *receiver = (f64::from(*receiver) / parse_wide_float(operand)?) as f32;
    Ok(null())
}
