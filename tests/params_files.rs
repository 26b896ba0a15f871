// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! End-to-end tests over whole parameter files.
//!
//! These exercise the crate the way a generated script does: read the
//! file, parse it, and index the resulting mapping by key. The
//! round-trip tests pin the emitter to the parser.

use std::fs;

use yaml_params::{Value, emit, json, parse, parse_with_diagnostics, source};

#[test]
fn component_parameter_file() {
    let input = "\
# parameters for test_component
par:
  input: \"/path/to/input.txt\"
  output: \"/path/to/output.txt\"
  number: 42
  threshold: -2.5
  flag: true
  empty_value: null
  files:
    - \"file1.txt\"
    - \"file2.txt\"
    - \"file3.txt\"
meta:
  name: \"test_component\"
  version: \"1.0.0\"
";
    let (params, diagnostics) = parse_with_diagnostics(input);
    assert!(diagnostics.is_empty(), "unexpected: {diagnostics:?}");

    let par = &params["par"];
    assert_eq!(par["input"].as_str(), Some("/path/to/input.txt"));
    assert_eq!(par["number"].as_i64(), Some(42));
    assert_eq!(par["threshold"].as_f64(), Some(-2.5));
    assert_eq!(par["flag"].as_bool(), Some(true));
    assert!(par["empty_value"].is_null());
    assert_eq!(
        par["files"].as_sequence().map(<[Value]>::len),
        Some(3)
    );
    assert_eq!(params["meta"]["name"].as_str(), Some("test_component"));
    assert_eq!(params["meta"]["version"].as_str(), Some("1.0.0"));
}

#[test]
fn round_trip_preserves_tree() {
    let input = "\
par:
  input: \"/path/to/input.txt\"
  number: 42
  threshold: -2.5
  flag: true
  empty_value: null
  files:
    - \"file1.txt\"
    - \"file2.txt\"
meta:
  name: \"test_component\"
";
    let tree = parse(input);
    let emitted = emit::to_string(&Value::Mapping(tree.clone()));
    let reparsed = parse(&emitted);
    assert_eq!(tree, reparsed, "emitted text:\n{emitted}");
}

#[test]
fn round_trip_scalar_typing_survives() {
    // A float that prints without a fraction and a string that looks
    // like a number both keep their types across emit and re-parse.
    let input = "a: 2.0\nb: \"42\"\nc: \"true\"\n";
    let tree = parse(input);
    assert_eq!(tree["a"], Value::Float(2.0));
    assert_eq!(tree["b"], Value::String("42".to_owned()));

    let reparsed = parse(&emit::to_string(&Value::Mapping(tree.clone())));
    assert_eq!(tree, reparsed);
}

#[test]
fn json_and_block_parsers_agree() {
    let block = parse("par:\n  number: 42\n  flag: true\n  name: \"x\"\n");
    let json = json::parse_json(r#"{"par": {"number": 42, "flag": true, "name": "x"}}"#).unwrap();
    assert_eq!(block, json);
}

#[test]
fn read_params_from_file() {
    let path = std::env::temp_dir().join("yaml_params_read_test.yaml");
    fs::write(&path, "par:\n  number: 7\n").unwrap();

    let text = source::read_params(&path).unwrap();
    let params = parse(&text);
    assert_eq!(params["par"]["number"], Value::Int(7));

    fs::remove_file(&path).unwrap();
}

#[test]
fn env_resolution_is_explicit() {
    let var = "YAML_PARAMS_TEST_PARAMS";
    // SAFETY: test-local variable name, no other thread reads it.
    unsafe { std::env::set_var(var, "/tmp/params.yaml") };
    assert_eq!(
        source::env_params_path(var),
        Some(std::path::PathBuf::from("/tmp/params.yaml"))
    );
    unsafe { std::env::remove_var(var) };
}

#[test]
fn partially_malformed_file_still_yields_usable_params() {
    let input = "\
par:
  input: \"/a.txt\"
  this line is not a recognized shape
      over_indented: true
  number: 42
";
    let (params, diagnostics) = parse_with_diagnostics(input);
    assert_eq!(params["par"]["input"].as_str(), Some("/a.txt"));
    assert_eq!(params["par"]["number"].as_i64(), Some(42));
    // One dropped line, one skipped indentation.
    assert_eq!(diagnostics.len(), 2);
}
