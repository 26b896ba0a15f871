// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Block-style serialization.
//!
//! Writes a [`Value`] tree back out in the same restricted block subset
//! the parser reads, so trees built from supported shapes round-trip.
//! Strings are always double-quoted and floats always carry a decimal
//! point, so scalar typing survives a re-parse. Empty sequences and
//! mappings have no block representation; they are written as a bare
//! key or dash and re-parse as null.
//!
//! One string shape has no double-quoted form: a backslash directly
//! before an `n`. The sequential unescape replaces turn every emitted
//! encoding of it back into a newline, so such strings re-parse with a
//! newline in place of the backslash.

use crate::value::{Mapping, Value};

/// Serialize a value tree as block-style text.
#[must_use]
pub fn to_string(value: &Value) -> String {
    let mut out = String::new();
    match value {
        Value::Mapping(entries) => write_mapping(&mut out, entries, 0),
        Value::Sequence(items) => write_sequence(&mut out, items, 0),
        scalar => {
            out.push_str(&scalar_text(scalar));
            out.push('\n');
        }
    }
    out
}

fn write_mapping(out: &mut String, entries: &Mapping, indent: usize) {
    for (key, value) in entries {
        write_indent(out, indent);
        out.push_str(key);
        match value {
            Value::Mapping(nested) if !nested.is_empty() => {
                out.push_str(":\n");
                write_mapping(out, nested, indent + 2);
            }
            Value::Sequence(items) if !items.is_empty() => {
                out.push_str(":\n");
                write_sequence(out, items, indent + 2);
            }
            Value::Mapping(_) | Value::Sequence(_) => out.push_str(":\n"),
            scalar => {
                out.push_str(": ");
                out.push_str(&scalar_text(scalar));
                out.push('\n');
            }
        }
    }
}

fn write_sequence(out: &mut String, items: &[Value], indent: usize) {
    for item in items {
        write_indent(out, indent);
        match item {
            Value::Mapping(nested) if !nested.is_empty() => {
                out.push_str("-\n");
                write_mapping(out, nested, indent + 2);
            }
            Value::Sequence(nested) if !nested.is_empty() => {
                out.push_str("-\n");
                write_sequence(out, nested, indent + 2);
            }
            Value::Mapping(_) | Value::Sequence(_) => out.push_str("-\n"),
            scalar => {
                out.push_str("- ");
                out.push_str(&scalar_text(scalar));
                out.push('\n');
            }
        }
    }
}

fn write_indent(out: &mut String, indent: usize) {
    for _ in 0..indent {
        out.push(' ');
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(value) => value.to_string(),
        Value::Int(value) => value.to_string(),
        Value::Float(value) => {
            let mut text = value.to_string();
            // A float without a dot would re-parse as an integer.
            if value.is_finite() && !text.contains('.') {
                text.push_str(".0");
            }
            text
        }
        Value::String(value) => quote(value),
        // Collections are written as blocks by the callers.
        Value::Sequence(_) | Value::Mapping(_) => unreachable!(),
    }
}

fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for ch in text.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars() {
        assert_eq!(to_string(&Value::Null), "null\n");
        assert_eq!(to_string(&Value::Bool(true)), "true\n");
        assert_eq!(to_string(&Value::Int(-17)), "-17\n");
        assert_eq!(to_string(&Value::Float(-2.5)), "-2.5\n");
        assert_eq!(to_string(&Value::Float(2.0)), "2.0\n");
        assert_eq!(to_string(&Value::from("a \"b\"")), "\"a \\\"b\\\"\"\n");
    }

    #[test]
    fn test_mapping_with_nested_blocks() {
        let mut par = Mapping::new();
        par.insert("number".to_owned(), Value::Int(42));
        par.insert(
            "files".to_owned(),
            Value::Sequence(vec![Value::from("one"), Value::from("two")]),
        );
        let mut root = Mapping::new();
        root.insert("par".to_owned(), Value::Mapping(par));

        let expected = "par:\n  number: 42\n  files:\n    - \"one\"\n    - \"two\"\n";
        assert_eq!(to_string(&Value::Mapping(root)), expected);
    }

    #[test]
    fn test_mapping_items_in_sequence() {
        let mut step = Mapping::new();
        step.insert("name".to_owned(), Value::from("first"));
        let value = Value::Sequence(vec![Value::Mapping(step)]);
        assert_eq!(to_string(&value), "-\n  name: \"first\"\n");
    }

    #[test]
    fn test_backslash_before_n_degrades_to_newline() {
        // "a\nb" with a literal backslash: the emitted escape decodes
        // as a newline under the ordered unescape replaces, and no
        // other double-quoted encoding survives them either.
        let emitted = to_string(&Value::from("a\\nb"));
        assert_eq!(emitted, "\"a\\\\nb\"\n");
        assert_eq!(
            crate::parse_scalar(emitted.trim()),
            Value::String("a\nb".to_owned())
        );
    }

    #[test]
    fn test_empty_collections_degrade_to_bare_markers() {
        let mut root = Mapping::new();
        root.insert("empty".to_owned(), Value::Mapping(Mapping::new()));
        assert_eq!(to_string(&Value::Mapping(root)), "empty:\n");
    }
}
