// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! JSON parameter files.
//!
//! Parameter files can also be written in JSON; unlike the block subset,
//! this format has a full decoder available, so parsing simply delegates
//! to `serde_json` and converts into the same [`Value`] tree.

use crate::value::{Mapping, Value};

/// Parse a JSON parameter file into a mapping.
///
/// Parameter files must have an object at the root; any other root is
/// rejected. Object member order is preserved.
pub fn parse_json(input: &str) -> Result<Mapping, JsonError> {
    let root: serde_json::Value = serde_json::from_str(input).map_err(JsonError::Syntax)?;
    match from_json(root) {
        Value::Mapping(entries) => Ok(entries),
        _ => Err(JsonError::RootNotObject),
    }
}

/// Convert a decoded JSON value into a parameter [`Value`].
#[must_use]
pub fn from_json(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(value) => Value::Bool(value),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                Value::Int(int)
            } else if let Some(float) = number.as_f64() {
                Value::Float(float)
            } else {
                Value::Null
            }
        }
        serde_json::Value::String(value) => Value::String(value),
        serde_json::Value::Array(items) => {
            Value::Sequence(items.into_iter().map(from_json).collect())
        }
        serde_json::Value::Object(members) => Value::Mapping(
            members
                .into_iter()
                .map(|(key, value)| (key, from_json(value)))
                .collect(),
        ),
    }
}

/// An error reading a JSON parameter file.
#[derive(Debug)]
pub enum JsonError {
    /// The input is not valid JSON.
    Syntax(serde_json::Error),
    /// The input is valid JSON but its root is not an object.
    RootNotObject,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(err) => write!(f, "invalid JSON in parameters file: {err}"),
            Self::RootNotObject => write!(f, "parameters file must contain a JSON object"),
        }
    }
}

impl std::error::Error for JsonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(err) => Some(err),
            Self::RootNotObject => None,
        }
    }
}
