use knuckleball_core::Error;

use crate::compare::Relation;
use crate::context::Settings;
use crate::expect_args;
use crate::primitives::{
    boundary_index, boundary_range, clamped_count, display, element_index, null, parse_character, parse_string, PrimitiveFn,
};
use crate::value::{render_character, render_string, Value};

pub static INSTANCE_PRIMITIVES: &[(&str, PrimitiveFn<Vec<u8>>)] = &[
    ("get", self::get),
    ("set:", self::set),
    ("isEmpty?", self::is_empty),
    ("startsWith?", self::starts_with),
    ("endsWith?", self::ends_with),
    ("isLexicographicallyEqualTo?", self::is_equal_to),
    ("isLexicographicallyLessThan?", self::is_less_than),
    ("isLexicographicallyLessThanOrEqualTo?", self::is_less_than_or_equal_to),
    ("isLexicographicallyGreaterThan?", self::is_greater_than),
    ("isLexicographicallyGreaterThanOrEqualTo?", self::is_greater_than_or_equal_to),
    ("length", self::length),
    ("atIndex:", self::at_index),
    ("first:", self::first),
    ("last:", self::last),
    ("substringFromIndex:", self::substring_from),
    ("substringFromIndex:toIndex:", self::substring_from_to),
    ("pushBack:", self::push_back),
    ("pushFront:", self::push_front),
    ("popBack", self::pop_back),
    ("popFront", self::pop_front),
    ("popAtIndex:", self::pop_at_index),
    ("concatenate:", self::concatenate),
    ("insert:beforeIndex:", self::insert_before_index),
    ("eraseFromIndex:", self::erase_from),
    ("eraseFromIndex:toIndex:", self::erase_from_to),
    ("clear", self::clear),
];

fn get(receiver: &mut Vec<u8>, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    Ok(render_string(receiver))
}

fn set(receiver: &mut Vec<u8>, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [value]);
    *receiver = parse_string(value)?;
    Ok(null())
}

fn is_empty(receiver: &mut Vec<u8>, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    Ok(display(receiver.is_empty()))
}

fn starts_with(receiver: &mut Vec<u8>, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [prefix]);
    let prefix = parse_string(prefix)?;
    Ok(display(receiver.starts_with(&prefix)))
}

fn ends_with(receiver: &mut Vec<u8>, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [suffix]);
    let suffix = parse_string(suffix)?;
    Ok(display(receiver.ends_with(&suffix)))
}

fn compare(
    receiver: &[u8],
    args: &[Vec<u8>],
    settings: &Settings,
    relation: Relation,
) -> Result<Vec<u8>, Error> {
    expect_args!(args, [operand]);
    let operand = Value::String(parse_string(operand)?);
    let receiver = Value::String(receiver.to_vec());
    let holds = settings.comparator().holds(relation, &receiver, &operand)?;
    Ok(display(holds))
}

fn is_equal_to(receiver: &mut Vec<u8>, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    compare(receiver, args, settings, Relation::Equal)
}

fn is_less_than(receiver: &mut Vec<u8>, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    compare(receiver, args, settings, Relation::Less)
}

fn is_less_than_or_equal_to(
    receiver: &mut Vec<u8>,
    args: &[Vec<u8>],
    settings: &Settings,
) -> Result<Vec<u8>, Error> {
    compare(receiver, args, settings, Relation::LessOrEqual)
}

fn is_greater_than(
    receiver: &mut Vec<u8>,
    args: &[Vec<u8>],
    settings: &Settings,
) -> Result<Vec<u8>, Error> {
    compare(receiver, args, settings, Relation::Greater)
}

fn is_greater_than_or_equal_to(
    receiver: &mut Vec<u8>,
    args: &[Vec<u8>],
    settings: &Settings,
) -> Result<Vec<u8>, Error> {
    compare(receiver, args, settings, Relation::GreaterOrEqual)
}

fn length(receiver: &mut Vec<u8>, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    Ok(display(receiver.len()))
}

fn at_index(receiver: &mut Vec<u8>, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [index]);
    let index = element_index(index, receiver.len())?;
    Ok(render_character(receiver[index]))
}

fn first(receiver: &mut Vec<u8>, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [count]);
    let count = clamped_count(count, receiver.len())?;
    Ok(render_string(&receiver[..count]))
}

fn last(receiver: &mut Vec<u8>, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [count]);
    let count = clamped_count(count, receiver.len())?;
    Ok(render_string(&receiver[receiver.len() - count..]))
}

fn substring_from(receiver: &mut Vec<u8>, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [from]);
    let from = boundary_index(from, receiver.len())?;
    Ok(render_string(&receiver[from..]))
}

fn substring_from_to(
    receiver: &mut Vec<u8>,
    args: &[Vec<u8>],
    _: &Settings,
) -> Result<Vec<u8>, Error> {
    expect_args!(args, [from, to]);
    let (from, to) = boundary_range(from, to, receiver.len())?;
    Ok(render_string(&receiver[from..to]))
}

fn push_back(receiver: &mut Vec<u8>, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [character]);
    receiver.push(parse_character(character)?);
    Ok(null())
}

fn push_front(receiver: &mut Vec<u8>, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [character]);
    receiver.insert(0, parse_character(character)?);
    Ok(null())
}

fn pop_back(receiver: &mut Vec<u8>, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    Ok(receiver.pop().map_or_else(null, render_character))
}

fn pop_front(receiver: &mut Vec<u8>, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    if receiver.is_empty() {
        return Ok(null());
    }
    Ok(render_character(receiver.remove(0)))
}

fn pop_at_index(receiver: &mut Vec<u8>, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [index]);
    let index = element_index(index, receiver.len())?;
    Ok(render_character(receiver.remove(index)))
}

fn concatenate(receiver: &mut Vec<u8>, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [suffix]);
    receiver.extend(parse_string(suffix)?);
    Ok(null())
}

fn insert_before_index(
    receiver: &mut Vec<u8>,
    args: &[Vec<u8>],
    _: &Settings,
) -> Result<Vec<u8>, Error> {
    expect_args!(args, [inserted, index]);
    let inserted = parse_string(inserted)?;
    let index = boundary_index(index, receiver.len())?;
    let tail = receiver.split_off(index);
    receiver.extend(inserted);
    receiver.extend(tail);
    Ok(null())
}

fn erase_from(receiver: &mut Vec<u8>, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [from]);
    let from = boundary_index(from, receiver.len())?;
    receiver.truncate(from);
    Ok(null())
}

fn erase_from_to(receiver: &mut Vec<u8>, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [from, to]);
    let (from, to) = boundary_range(from, to, receiver.len())?;
    receiver.drain(from..to);
    Ok(null())
}

fn clear(receiver: &mut Vec<u8>, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    receiver.clear();
    Ok(null())
}
