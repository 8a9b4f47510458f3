use std::cmp::Ordering;

use knuckleball_core::Error;

use crate::value::Value;

/// The relations a comparison message can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Equal,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

/// Orders values pairwise.
///
/// Booleans, characters, integers and strings compare natively (strings byte by byte).
/// Any mix of integers and floats compares the difference of both sides against the tolerance:
/// `lhs` is less than `rhs` when `lhs - rhs < -tolerance`, greater when `lhs - rhs > tolerance`.
/// Equality is derived: neither less nor greater.
/// Every other pairing fails with [`Error::InvalidComparison`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparator {
    tolerance: f32,
}

impl Comparator {
    /// Creates a comparator using the given float tolerance.
    pub fn new(tolerance: f32) -> Self {
        Self { tolerance }
    }

    pub fn is_less(&self, lhs: &Value, rhs: &Value) -> Result<bool, Error> {
        match (lhs, rhs) {
            (Value::Boolean(lhs), Value::Boolean(rhs)) => Ok(lhs < rhs),
            (Value::Character(lhs), Value::Character(rhs)) => Ok(lhs < rhs),
            (Value::Integer(lhs), Value::Integer(rhs)) => Ok(lhs < rhs),
            (Value::String(lhs), Value::String(rhs)) => Ok(lhs < rhs),
            _ => numeric_difference(lhs, rhs).map(|difference| difference < -self.tolerance),
        }
    }

    pub fn is_greater(&self, lhs: &Value, rhs: &Value) -> Result<bool, Error> {
        match (lhs, rhs) {
            (Value::Boolean(lhs), Value::Boolean(rhs)) => Ok(lhs > rhs),
            (Value::Character(lhs), Value::Character(rhs)) => Ok(lhs > rhs),
            (Value::Integer(lhs), Value::Integer(rhs)) => Ok(lhs > rhs),
            (Value::String(lhs), Value::String(rhs)) => Ok(lhs > rhs),
            _ => numeric_difference(lhs, rhs).map(|difference| difference > self.tolerance),
        }
    }

    pub fn is_equal(&self, lhs: &Value, rhs: &Value) -> Result<bool, Error> {
        Ok(!self.is_less(lhs, rhs)? && !self.is_greater(lhs, rhs)?)
    }

    pub fn is_less_or_equal(&self, lhs: &Value, rhs: &Value) -> Result<bool, Error> {
        Ok(self.is_less(lhs, rhs)? || self.is_equal(lhs, rhs)?)
    }

    pub fn is_greater_or_equal(&self, lhs: &Value, rhs: &Value) -> Result<bool, Error> {
        Ok(self.is_greater(lhs, rhs)? || self.is_equal(lhs, rhs)?)
    }

    /// Checks whether `lhs <relation> rhs` holds.
    pub fn holds(&self, relation: Relation, lhs: &Value, rhs: &Value) -> Result<bool, Error> {
        match relation {
            Relation::Equal => self.is_equal(lhs, rhs),
            Relation::Less => self.is_less(lhs, rhs),
            Relation::LessOrEqual => self.is_less_or_equal(lhs, rhs),
            Relation::Greater => self.is_greater(lhs, rhs),
            Relation::GreaterOrEqual => self.is_greater_or_equal(lhs, rhs),
        }
    }

    /// Three-way comparison, built on the less and greater relations.
    pub fn compare(&self, lhs: &Value, rhs: &Value) -> Result<Ordering, Error> {
        if self.is_less(lhs, rhs)? {
            Ok(Ordering::Less)
        } else if self.is_greater(lhs, rhs)? {
            Ok(Ordering::Greater)
        } else {
            Ok(Ordering::Equal)
        }
    }

    /// Binary search over items kept in comparator order.
    ///
    /// Returns `Ok(index)` of an item equal to `target`, or `Err(index)` where it would be inserted.
    pub fn search<T>(
        &self,
        items: &[T],
        target: &Value,
        key: impl Fn(&T) -> &Value,
    ) -> Result<Result<usize, usize>, Error> {
        let (mut low, mut high) = (0, items.len());
        while low < high {
            let middle = low + (high - low) / 2;
            match self.compare(key(&items[middle]), target)? {
                Ordering::Less => low = middle + 1,
                Ordering::Greater => high = middle,
                Ordering::Equal => return Ok(Ok(middle)),
            }
        }
        Ok(Err(low))
    }

    /// Stable ascending sort.
    pub fn sort(&self, items: &mut [Value]) -> Result<(), Error> {
        // a tolerance band is not transitive, so `slice::sort_by` (which requires a total order) is off limits.
        for idx in 1..items.len() {
            let mut current = idx;
            while current > 0 && self.is_less(&items[current], &items[current - 1])? {
                items.swap(current, current - 1);
                current -= 1;
            }
        }
        Ok(())
    }
}

fn numeric_difference(lhs: &Value, rhs: &Value) -> Result<f32, Error> {
    match (lhs, rhs) {
        (Value::Integer(lhs), Value::Float(rhs)) => Ok(*lhs as f32 - rhs),
        (Value::Float(lhs), Value::Float(rhs)) => Ok(lhs - rhs),
        (Value::Float(lhs), Value::Integer(rhs)) => Ok(lhs - *rhs as f32),
        _ => Err(Error::InvalidComparison),
    }
}
