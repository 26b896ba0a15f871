// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! A self-contained parser for the block-style YAML subset used in
//! parameter files.
//!
//! Generated scripts read their parameters from a small, predictable
//! configuration block: mappings, sequences, and scalars nested by
//! indentation, with `#` comments. This crate parses that subset with
//! nothing but whitespace and punctuation cues; there is no schema and
//! no grammar library. Flow collections, anchors, aliases, tags, and
//! multi-document streams are out of scope.
//!
//! Parsing is lenient and never fails: unrecognized lines are dropped,
//! malformed indentation is skipped, numbers that do not parse stay
//! strings, and the result is always a [`Mapping`]. Strict consumers can
//! use [`parse_with_diagnostics`] to see everything the lenient default
//! tolerated; the diagnostics never change the parsed output.
//!
//! # Example
//!
//! ```
//! use yaml_params::{Value, parse};
//!
//! let input = "\
//! par:
//!   input: \"/path/to/input.txt\"
//!   number: 42
//!   flag: true
//! ";
//!
//! let params = parse(input);
//! assert_eq!(params["par"]["number"], Value::Int(42));
//! assert_eq!(params["par"]["flag"], Value::Bool(true));
//! ```

pub mod emit;
mod error;
pub mod json;
mod line;
mod parser;
mod scalar;
pub mod source;
mod value;

pub use error::{Diagnostic, DiagnosticKind};
pub use parser::{ParseOptions, parse_with_options};
pub use scalar::parse_scalar;
pub use value::{Mapping, Value};

/// Parse block-style parameter text.
///
/// This operation never fails: malformed or unrecognized constructs are
/// silently dropped and the root is always a mapping (empty when the
/// input has no content lines).
#[must_use]
pub fn parse(input: &str) -> Mapping {
    parse_with_options(input, &ParseOptions::default()).0
}

/// Parse block-style parameter text, also returning diagnostics.
///
/// The mapping is identical to what [`parse`] returns; the diagnostics
/// describe every construct the lenient default dropped, skipped, or
/// coerced unexpectedly, so strict consumers can reject the input.
#[must_use]
pub fn parse_with_diagnostics(input: &str) -> (Mapping, Vec<Diagnostic>) {
    parse_with_options(input, &ParseOptions::default())
}
