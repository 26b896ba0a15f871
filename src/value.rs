// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Value types for parsed parameter trees.
//!
//! A parse produces a tree of [`Value`]s with a [`Mapping`] at the root.
//! Mappings preserve insertion order and keep keys unique; a later
//! occurrence of a key overwrites the earlier value in place.

use std::ops::Index;

use ordermap::OrderMap;

/// An ordered mapping from string keys to values.
///
/// Backed by [`OrderMap`], so iteration order is insertion order and
/// re-inserting an existing key replaces its value without moving it.
pub type Mapping = OrderMap<String, Value>;

/// A parsed parameter value.
///
/// This is the complete set of shapes the block subset can produce.
/// There are no anchors, tags, or other node properties; a value is
/// exactly its content.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// A null value (`null`, `~`, or an empty section)
    #[default]
    Null,

    /// A boolean value (`true` or `false`)
    Bool(bool),

    /// An integer value
    Int(i64),

    /// A floating-point value
    Float(f64),

    /// A string value (quoted or bareword)
    String(String),

    /// A sequence of values
    Sequence(Vec<Value>),

    /// An ordered mapping of unique keys to values
    Mapping(Mapping),
}

impl Value {
    /// Returns `true` if this is a null value.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if this is a scalar value (null, bool, int, float, string).
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::Sequence(_) | Self::Mapping(_))
    }

    /// Returns `true` if this is a collection (sequence or mapping).
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Sequence(_) | Self::Mapping(_))
    }

    /// Returns the boolean content, if this is a `Bool`.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the integer content, if this is an `Int`.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the float content.
    ///
    /// An `Int` is widened to `f64` so numeric parameters can be read
    /// uniformly regardless of how they were written.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    /// Returns the string content, if this is a `String`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the items, if this is a `Sequence`.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries, if this is a `Mapping`.
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a key in a mapping value.
    ///
    /// Returns `None` when this value is not a mapping or the key is absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping().and_then(|entries| entries.get(key))
    }
}

impl Index<&str> for Value {
    type Output = Value;

    /// Index into a mapping value by key.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a mapping or the key is absent.
    fn index(&self, key: &str) -> &Value {
        match self.get(key) {
            Some(value) => value,
            None => panic!("no entry for key {key:?}"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Sequence(items)
    }
}

impl From<Mapping> for Value {
    fn from(entries: Mapping) -> Self {
        Self::Mapping(entries)
    }
}
