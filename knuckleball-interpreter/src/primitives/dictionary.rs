use knuckleball_core::Error;

use crate::context::Settings;
use crate::expect_args;
use crate::primitives::{display, null, PrimitiveFn};
use crate::value::{render_sequence, Dictionary, Value};

pub static INSTANCE_PRIMITIVES: &[(&str, PrimitiveFn<Dictionary>)] = &[
    ("get", self::get),
    ("isEmpty?", self::is_empty),
    ("size", self::size),
    ("containsKey?", self::contains_key),
    ("keys", self::keys),
    ("values", self::values),
    ("getValueForKey:", self::get_value_for_key),
    ("associateValue:withKey:", self::associate_value_with_key),
    ("removeKey:", self::remove_key),
    ("clear", self::clear),
];

/// Locates `key` among the entries, which are kept in key order.
fn lookup(
    receiver: &Dictionary,
    key: &Value,
    settings: &Settings,
) -> Result<Result<usize, usize>, Error> {
    settings
        .comparator()
        .search(&receiver.entries, key, |(key, _)| key)
}

fn get(receiver: &mut Dictionary, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    Ok(receiver.render(settings))
}

fn is_empty(receiver: &mut Dictionary, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    Ok(display(receiver.entries.is_empty()))
}

fn size(receiver: &mut Dictionary, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    Ok(display(receiver.entries.len()))
}

fn contains_key(
    receiver: &mut Dictionary,
    args: &[Vec<u8>],
    settings: &Settings,
) -> Result<Vec<u8>, Error> {
    expect_args!(args, [key]);
    let key = receiver.key(key)?;
    Ok(display(lookup(receiver, &key, settings)?.is_ok()))
}

fn keys(receiver: &mut Dictionary, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    let keys: Vec<Value> = receiver.entries.iter().map(|(key, _)| key.clone()).collect();
    Ok(render_sequence(&keys, settings))
}

fn values(receiver: &mut Dictionary, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    let values: Vec<Value> = receiver
        .entries
        .iter()
        .map(|(_, value)| value.clone())
        .collect();
    Ok(render_sequence(&values, settings))
}

fn get_value_for_key(
    receiver: &mut Dictionary,
    args: &[Vec<u8>],
    settings: &Settings,
) -> Result<Vec<u8>, Error> {
    expect_args!(args, [key]);
    let key = receiver.key(key)?;
    match lookup(receiver, &key, settings)? {
        Ok(idx) => Ok(receiver.entries[idx].1.render(settings)),
        Err(_) => Ok(null()),
    }
}

fn associate_value_with_key(
    receiver: &mut Dictionary,
    args: &[Vec<u8>],
    settings: &Settings,
) -> Result<Vec<u8>, Error> {
    expect_args!(args, [value, key]);
    let value = receiver.value(value)?;
    let key = receiver.key(key)?;
    match lookup(receiver, &key, settings)? {
        Ok(idx) => receiver.entries[idx].1 = value,
        Err(idx) => receiver.entries.insert(idx, (key, value)),
    }
    Ok(null())
}

fn remove_key(
    receiver: &mut Dictionary,
    args: &[Vec<u8>],
    settings: &Settings,
) -> Result<Vec<u8>, Error> {
    expect_args!(args, [key]);
    let key = receiver.key(key)?;
    if let Ok(idx) = lookup(receiver, &key, settings)? {
        receiver.entries.remove(idx);
    }
    Ok(null())
}

fn clear(receiver: &mut Dictionary, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    receiver.entries.clear();
    Ok(null())
}
