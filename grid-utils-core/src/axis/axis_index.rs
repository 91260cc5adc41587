//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::axis::{AxisError, Serializer};
use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Axis values, either fixed or produced on demand
pub enum AxisValues<T> {
    Fixed(Vec<T>),
    Provider(Box<dyn Fn() -> Vec<T>>),
}

impl<T> fmt::Debug for AxisValues<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AxisValues::Fixed(values) => write!(f, "Fixed({} values)", values.len()),
            AxisValues::Provider(_) => write!(f, "Provider"),
        }
    }
}

/// Bound of a range lookup
#[derive(PartialEq, Clone, Debug)]
pub enum AxisBound<T> {
    Position(usize),
    Value(T),
}

/// Lookup key
#[derive(PartialEq, Clone, Debug)]
pub enum AxisKey<T> {
    /// Position, returned unchanged
    Position(usize),
    Value(T),
    /// Inclusive value range. An unknown `stop` leaves the range open.
    Range {
        start: Option<AxisBound<T>>,
        stop: Option<AxisBound<T>>,
        step: Option<usize>,
    },
}

/// Result of a lookup
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum AxisSelection {
    Single(usize),
    /// Half-open position range, open ends are `None`
    Range {
        start: Option<usize>,
        stop: Option<usize>,
        step: Option<usize>,
    },
}

impl AxisSelection {
    /// Positions selected on an axis with `size` values
    pub fn positions(&self, size: usize) -> Vec<usize> {
        match *self {
            AxisSelection::Single(pos) => vec![pos],
            AxisSelection::Range { start, stop, step } => {
                let start = start.unwrap_or(0);
                let stop = stop.unwrap_or(size).min(size);
                (start..stop).step_by(step.unwrap_or(1).max(1)).collect()
            }
        }
    }
}

/// Serialized value to position
type LookupTable = HashMap<String, usize>;

struct LookupCache {
    table: LookupTable,
    dirty: bool,
}

/// Named axis with value to position lookup.
///
/// The lookup table of fixed values is built on the first lookup and rebuilt after
/// `set_values`. Provider values are looked up without caching.
/// The cache is not synchronized, the index must not be shared between threads.
pub struct AxisIndex<T> {
    name: String,
    values: AxisValues<T>,
    serializer: Serializer<T>,
    parser: Option<Box<dyn Fn(&str) -> Result<T, String>>>,
    cache: RefCell<LookupCache>,
}

impl<T> AxisIndex<T> {
    pub fn new(name: &str, values: Vec<T>) -> AxisIndex<T> {
        AxisIndex::with_values(name, AxisValues::Fixed(values))
    }
    /// Axis with values produced by `provider` on every access
    pub fn from_provider<F>(name: &str, provider: F) -> AxisIndex<T>
    where
        F: Fn() -> Vec<T> + 'static,
    {
        AxisIndex::with_values(name, AxisValues::Provider(Box::new(provider)))
    }
    fn with_values(name: &str, values: AxisValues<T>) -> AxisIndex<T> {
        AxisIndex {
            name: name.to_string(),
            values,
            serializer: Serializer::Display,
            parser: None,
            cache: RefCell::new(LookupCache {
                table: LookupTable::new(),
                dirty: true,
            }),
        }
    }
    pub fn with_serializer(mut self, serializer: Serializer<T>) -> AxisIndex<T> {
        self.serializer = serializer;
        self.invalidate();
        self
    }
    pub fn with_parser<F>(mut self, parser: F) -> AxisIndex<T>
    where
        F: Fn(&str) -> Result<T, String> + 'static,
    {
        self.parser = Some(Box::new(parser));
        self
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Replace the axis values
    pub fn set_values(&mut self, values: AxisValues<T>) {
        self.values = values;
        self.invalidate();
    }
    fn invalidate(&self) {
        self.cache.borrow_mut().dirty = true;
    }
}

impl<T: Clone> AxisIndex<T> {
    pub fn values(&self) -> Cow<'_, [T]> {
        match &self.values {
            AxisValues::Fixed(values) => Cow::Borrowed(values),
            AxisValues::Provider(provider) => Cow::Owned(provider()),
        }
    }
    pub fn size(&self) -> usize {
        self.values().len()
    }
}

impl<T: Clone + fmt::Display> AxisIndex<T> {
    pub fn serialize(&self, value: &T) -> Result<String, AxisError> {
        self.serializer.serialize(value)
    }
    fn build_table(&self, values: &[T]) -> Result<LookupTable, AxisError> {
        let mut table = LookupTable::with_capacity(values.len());
        for (pos, value) in values.iter().enumerate() {
            table.insert(self.serialize(value)?, pos);
        }
        Ok(table)
    }
    fn not_found(&self, key: String) -> AxisError {
        let valid = self
            .values()
            .iter()
            .map(|v| self.serialize(v).unwrap_or_else(|_| v.to_string()))
            .collect();
        AxisError::KeyNotFound { key, valid }
    }
    /// Position of a value
    fn lookup(&self, value: &T) -> Result<usize, AxisError> {
        let key = self.serialize(value)?;
        let found = match &self.values {
            AxisValues::Fixed(values) => {
                let mut cache = self.cache.borrow_mut();
                if cache.dirty {
                    debug!("Building lookup table of axis {}", self.name);
                    cache.table = self.build_table(values)?;
                    cache.dirty = false;
                }
                let pos = cache.table.get(&key).cloned();
                pos
            }
            AxisValues::Provider(provider) => self.build_table(&provider())?.get(&key).cloned(),
        };
        found.ok_or_else(|| self.not_found(key))
    }
    fn bound_index(&self, bound: &AxisBound<T>) -> Result<usize, AxisError> {
        match bound {
            AxisBound::Position(pos) => Ok(*pos),
            AxisBound::Value(value) => self.lookup(value),
        }
    }
    pub fn get_index(&self, key: &AxisKey<T>) -> Result<AxisSelection, AxisError> {
        match key {
            AxisKey::Position(pos) => Ok(AxisSelection::Single(*pos)),
            AxisKey::Value(value) => self.lookup(value).map(AxisSelection::Single),
            AxisKey::Range { start, stop, step } => {
                let start = match start {
                    Some(bound) => Some(self.bound_index(bound)?),
                    None => None,
                };
                // Unknown end values leave the range open
                let stop = stop
                    .as_ref()
                    .and_then(|bound| self.bound_index(bound).ok())
                    .map(|pos| pos + 1);
                Ok(AxisSelection::Range {
                    start,
                    stop,
                    step: *step,
                })
            }
        }
    }
}

impl<T: FromStr> AxisIndex<T>
where
    T::Err: fmt::Display,
{
    /// Axis value from its textual representation
    pub fn parse(&self, raw: &str) -> Result<T, AxisError> {
        let parsed = match &self.parser {
            Some(parser) => parser(raw),
            None => raw.parse::<T>().map_err(|e| e.to_string()),
        };
        parsed.map_err(|reason| AxisError::Parse {
            value: raw.to_string(),
            reason,
        })
    }
}

impl<T> fmt::Debug for AxisIndex<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<AxisIndex {}>", self.name)
    }
}
