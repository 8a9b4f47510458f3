use knuckleball_core::Error;

use crate::context::Settings;
use crate::expect_args;
use crate::primitives::{display, null, PrimitiveFn};
use crate::value::Set;

pub static INSTANCE_PRIMITIVES: &[(&str, PrimitiveFn<Set>)] = &[
    ("get", self::get),
    ("isEmpty?", self::is_empty),
    ("size", self::size),
    ("contains?", self::contains),
    ("add:", self::add),
    ("remove:", self::remove),
    ("clear", self::clear),
];

fn get(receiver: &mut Set, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    Ok(receiver.render(settings))
}

fn is_empty(receiver: &mut Set, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    Ok(display(receiver.items.is_empty()))
}

fn size(receiver: &mut Set, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    Ok(display(receiver.items.len()))
}

fn contains(receiver: &mut Set, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [element]);
    let element = receiver.element(element)?;
    let found = settings
        .comparator()
        .search(&receiver.items, &element, |item| item)?;
    Ok(display(found.is_ok()))
}

fn add(receiver: &mut Set, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [element]);
    let element = receiver.element(element)?;
    let found = settings
        .comparator()
        .search(&receiver.items, &element, |item| item)?;
    if let Err(idx) = found {
        receiver.items.insert(idx, element);
    }
    Ok(null())
}

fn remove(receiver: &mut Set, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [element]);
    let element = receiver.element(element)?;
    let found = settings
        .comparator()
        .search(&receiver.items, &element, |item| item)?;
    if let Ok(idx) = found {
        receiver.items.remove(idx);
    }
    Ok(null())
}

fn clear(receiver: &mut Set, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    receiver.items.clear();
    Ok(null())
}
