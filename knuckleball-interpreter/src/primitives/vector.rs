use knuckleball_core::Error;

use crate::context::Settings;
use crate::expect_args;
use crate::primitives::{
    boundary_index, boundary_range, clamped_count, display, element_index, null, PrimitiveFn,
};
use crate::value::{render_sequence, Value, Vector};

pub static INSTANCE_PRIMITIVES: &[(&str, PrimitiveFn<Vector>)] = &[
    ("get", self::get),
    ("isEmpty?", self::is_empty),
    ("contains?", self::contains),
    ("contains?fromIndex:", self::contains_from),
    ("count:", self::count),
    ("atIndex:", self::at_index),
    ("firstIndexOf:", self::first_index_of),
    ("firstIndexOf:fromIndex:", self::first_index_of_from),
    ("allIndexesOf:", self::all_indexes_of),
    ("size", self::size),
    ("first:", self::first),
    ("last:", self::last),
    ("sliceFromIndex:", self::slice_from),
    ("sliceFromIndex:toIndex:", self::slice_from_to),
    ("pushBack:", self::push_back),
    ("pushFront:", self::push_front),
    ("popBack", self::pop_back),
    ("popFront", self::pop_front),
    ("popAtIndex:", self::pop_at_index),
    ("insert:beforeIndex:", self::insert_before_index),
    ("eraseFromIndex:", self::erase_from),
    ("eraseFromIndex:toIndex:", self::erase_from_to),
    ("removeFirst:", self::remove_first),
    ("removeFirst:fromIndex:", self::remove_first_from),
    ("removeAll:", self::remove_all),
    ("replaceFirst:with:", self::replace_first),
    ("replaceFirst:fromIndex:with:", self::replace_first_from),
    ("replaceAll:with:", self::replace_all),
    ("sort", self::sort),
    ("reverse", self::reverse),
    ("clear", self::clear),
];

/// Index of the first item equal to `target`, starting at `from`.
fn position(
    vector: &Vector,
    from: usize,
    target: &Value,
    settings: &Settings,
) -> Result<Option<usize>, Error> {
    let comparator = settings.comparator();
    for (idx, item) in vector.items.iter().enumerate().skip(from) {
        if comparator.is_equal(item, target)? {
            return Ok(Some(idx));
        }
    }
    Ok(None)
}

/// Which items are equal to `target`.
fn matches(vector: &Vector, target: &Value, settings: &Settings) -> Result<Vec<bool>, Error> {
    let comparator = settings.comparator();
    vector
        .items
        .iter()
        .map(|item| comparator.is_equal(item, target))
        .collect()
}

fn get(receiver: &mut Vector, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    Ok(render_sequence(&receiver.items, settings))
}

fn is_empty(receiver: &mut Vector, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    Ok(display(receiver.items.is_empty()))
}

fn contains(receiver: &mut Vector, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [element]);
    let element = receiver.element(element)?;
    Ok(display(position(receiver, 0, &element, settings)?.is_some()))
}

fn contains_from(
    receiver: &mut Vector,
    args: &[Vec<u8>],
    settings: &Settings,
) -> Result<Vec<u8>, Error> {
    expect_args!(args, [element, from]);
    let element = receiver.element(element)?;
    let from = boundary_index(from, receiver.items.len())?;
    Ok(display(position(receiver, from, &element, settings)?.is_some()))
}

fn count(receiver: &mut Vector, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [element]);
    let element = receiver.element(element)?;
    let count = matches(receiver, &element, settings)?
        .into_iter()
        .filter(|it| *it)
        .count();
    Ok(display(count))
}

fn at_index(receiver: &mut Vector, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [index]);
    let index = element_index(index, receiver.items.len())?;
    Ok(receiver.items[index].render(settings))
}

fn first_index_of(
    receiver: &mut Vector,
    args: &[Vec<u8>],
    settings: &Settings,
) -> Result<Vec<u8>, Error> {
    expect_args!(args, [element]);
    let element = receiver.element(element)?;
    let found = position(receiver, 0, &element, settings)?;
    Ok(found.map_or_else(|| display(-1), display))
}

fn first_index_of_from(
    receiver: &mut Vector,
    args: &[Vec<u8>],
    settings: &Settings,
) -> Result<Vec<u8>, Error> {
    expect_args!(args, [element, from]);
    let element = receiver.element(element)?;
    let from = boundary_index(from, receiver.items.len())?;
    let found = position(receiver, from, &element, settings)?;
    Ok(found.map_or_else(|| display(-1), display))
}

fn all_indexes_of(
    receiver: &mut Vector,
    args: &[Vec<u8>],
    settings: &Settings,
) -> Result<Vec<u8>, Error> {
    expect_args!(args, [element]);
    let element = receiver.element(element)?;
    let indexes: Vec<String> = matches(receiver, &element, settings)?
        .into_iter()
        .enumerate()
        .filter(|(_, matched)| *matched)
        .map(|(idx, _)| idx.to_string())
        .collect();
    Ok(format!("[{}]", indexes.join(",")).into_bytes())
}

fn size(receiver: &mut Vector, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    Ok(display(receiver.items.len()))
}

fn first(receiver: &mut Vector, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [count]);
    let count = clamped_count(count, receiver.items.len())?;
    Ok(render_sequence(&receiver.items[..count], settings))
}

fn last(receiver: &mut Vector, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [count]);
    let len = receiver.items.len();
    let count = clamped_count(count, len)?;
    Ok(render_sequence(&receiver.items[len - count..], settings))
}

fn slice_from(receiver: &mut Vector, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [from]);
    let from = boundary_index(from, receiver.items.len())?;
    Ok(render_sequence(&receiver.items[from..], settings))
}

fn slice_from_to(
    receiver: &mut Vector,
    args: &[Vec<u8>],
    settings: &Settings,
) -> Result<Vec<u8>, Error> {
    expect_args!(args, [from, to]);
    let (from, to) = boundary_range(from, to, receiver.items.len())?;
    Ok(render_sequence(&receiver.items[from..to], settings))
}

fn push_back(receiver: &mut Vector, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [element]);
    let element = receiver.element(element)?;
    receiver.items.push(element);
    Ok(null())
}

fn push_front(receiver: &mut Vector, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [element]);
    let element = receiver.element(element)?;
    receiver.items.insert(0, element);
    Ok(null())
}

fn pop_back(receiver: &mut Vector, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    Ok(receiver
        .items
        .pop()
        .map_or_else(null, |item| item.render(settings)))
}

fn pop_front(receiver: &mut Vector, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    if receiver.items.is_empty() {
        return Ok(null());
    }
    Ok(receiver.items.remove(0).render(settings))
}

fn pop_at_index(
    receiver: &mut Vector,
    args: &[Vec<u8>],
    settings: &Settings,
) -> Result<Vec<u8>, Error> {
    expect_args!(args, [index]);
    let index = element_index(index, receiver.items.len())?;
    Ok(receiver.items.remove(index).render(settings))
}

fn insert_before_index(
    receiver: &mut Vector,
    args: &[Vec<u8>],
    _: &Settings,
) -> Result<Vec<u8>, Error> {
    expect_args!(args, [element, index]);
    let element = receiver.element(element)?;
    let index = boundary_index(index, receiver.items.len())?;
    receiver.items.insert(index, element);
    Ok(null())
}

fn erase_from(receiver: &mut Vector, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [from]);
    let from = boundary_index(from, receiver.items.len())?;
    receiver.items.truncate(from);
    Ok(null())
}

fn erase_from_to(receiver: &mut Vector, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [from, to]);
    let (from, to) = boundary_range(from, to, receiver.items.len())?;
    receiver.items.drain(from..to);
    Ok(null())
}

fn remove_first(receiver: &mut Vector, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [element]);
    let element = receiver.element(element)?;
    if let Some(idx) = position(receiver, 0, &element, settings)? {
        receiver.items.remove(idx);
    }
    Ok(null())
}

fn remove_first_from(
    receiver: &mut Vector,
    args: &[Vec<u8>],
    settings: &Settings,
) -> Result<Vec<u8>, Error> {
    expect_args!(args, [element, from]);
    let element = receiver.element(element)?;
    let from = boundary_index(from, receiver.items.len())?;
    if let Some(idx) = position(receiver, from, &element, settings)? {
        receiver.items.remove(idx);
    }
    Ok(null())
}

fn remove_all(receiver: &mut Vector, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [element]);
    let element = receiver.element(element)?;
    let mut matched = matches(receiver, &element, settings)?.into_iter();
    receiver
        .items
        .retain(|_| !matched.next().unwrap_or(false));
    Ok(null())
}

fn replace_first(receiver: &mut Vector, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [old, new]);
    let old = receiver.element(old)?;
    let new = receiver.element(new)?;
    if let Some(idx) = position(receiver, 0, &old, settings)? {
        receiver.items[idx] = new;
    }
    Ok(null())
}

fn replace_first_from(
    receiver: &mut Vector,
    args: &[Vec<u8>],
    settings: &Settings,
) -> Result<Vec<u8>, Error> {
    expect_args!(args, [old, from, new]);
    let old = receiver.element(old)?;
    let new = receiver.element(new)?;
    let from = boundary_index(from, receiver.items.len())?;
    if let Some(idx) = position(receiver, from, &old, settings)? {
        receiver.items[idx] = new;
    }
    Ok(null())
}

fn replace_all(receiver: &mut Vector, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, [old, new]);
    let old = receiver.element(old)?;
    let new = receiver.element(new)?;
    let matched = matches(receiver, &old, settings)?;
    for (item, matched) in receiver.items.iter_mut().zip(matched) {
        if matched {
            *item = new.clone();
        }
    }
    Ok(null())
}

fn sort(receiver: &mut Vector, args: &[Vec<u8>], settings: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    settings.comparator().sort(&mut receiver.items)?;
    Ok(null())
}

fn reverse(receiver: &mut Vector, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    receiver.items.reverse();
    Ok(null())
}

fn clear(receiver: &mut Vector, args: &[Vec<u8>], _: &Settings) -> Result<Vec<u8>, Error> {
    expect_args!(args, []);
    receiver.items.clear();
    Ok(null())
}
