// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Scalar interpretation.
//!
//! Coerces an inline textual value into a typed leaf [`Value`]. Coercion
//! never fails: anything that is not recognizably null, boolean, quoted,
//! or numeric falls back to a plain string.

use crate::error::{Diagnostic, DiagnosticKind};
use crate::value::Value;

/// Coerce a raw inline value into a typed leaf value.
///
/// Rules, in precedence order:
/// 1. empty, `null`, or `~` is null
/// 2. exactly `true` / `false` is a boolean
/// 3. double-quoted text is unescaped to a string
/// 4. single-quoted text is unescaped to a string
/// 5. tokens containing a `.` attempt a float parse, others an integer
///    parse; on failure the trimmed raw text is kept as a string
#[must_use]
pub fn parse_scalar(raw: &str) -> Value {
    let raw = raw.trim();

    if raw.is_empty() || raw == "null" || raw == "~" {
        return Value::Null;
    }
    if raw == "true" {
        return Value::Bool(true);
    }
    if raw == "false" {
        return Value::Bool(false);
    }

    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return Value::String(unescape_double(&raw[1..raw.len() - 1]));
    }
    if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
        return Value::String(unescape_single(&raw[1..raw.len() - 1]));
    }

    if raw.contains('.') {
        if let Ok(float) = raw.parse::<f64>() {
            return Value::Float(float);
        }
    } else if let Ok(int) = raw.parse::<i64>() {
        return Value::Int(int);
    }

    Value::String(raw.to_owned())
}

/// Coerce a scalar and record a diagnostic when a numeric-looking token
/// fell back to a string.
///
/// The returned value is identical to [`parse_scalar`]; the diagnostic
/// only feeds strict-mode consumers.
pub(crate) fn interpret(raw: &str, line: usize, diagnostics: &mut Vec<Diagnostic>) -> Value {
    let value = parse_scalar(raw);
    let trimmed = raw.trim();
    if matches!(value, Value::String(_)) && looks_numeric(trimmed) {
        diagnostics.push(Diagnostic::new(
            DiagnosticKind::NumericCoercionFailed(trimmed.to_owned()),
            line,
        ));
    }
    value
}

/// A token that starts with an optional sign and a digit was probably
/// meant to be a number.
fn looks_numeric(raw: &str) -> bool {
    let body = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    body.starts_with(|c: char| c.is_ascii_digit())
}

fn unescape_double(quoted: &str) -> String {
    quoted
        .replace("\\\"", "\"")
        .replace("\\\\", "\\")
        .replace("\\n", "\n")
}

fn unescape_single(quoted: &str) -> String {
    quoted
        .replace("\\'", "'")
        .replace("\\\\", "\\")
        .replace("\\n", "\n")
}
