// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Reading parameter text.
//!
//! The parser itself performs no I/O and never consults the environment.
//! Callers resolve the input location once, up front: either an explicit
//! path, or a path taken from an environment variable via
//! [`env_params_path`], then read it with [`read_params`].

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

/// Resolve a parameters path from an environment variable.
///
/// Returns `None` when the variable is unset. This is the only place the
/// environment is consulted; the caller decides whether and when to use it.
#[must_use]
pub fn env_params_path(var: &str) -> Option<PathBuf> {
    let path = env::var_os(var).map(PathBuf::from);
    if let Some(path) = &path {
        debug!("parameters path from ${var}: {}", path.display());
    }
    path
}

/// Read a parameters file into a string.
pub fn read_params(path: &Path) -> Result<String, SourceError> {
    debug!("reading parameters from {}", path.display());
    fs::read_to_string(path).map_err(|source| SourceError {
        path: path.to_path_buf(),
        source,
    })
}

/// An error reading a parameters file.
#[derive(Debug)]
pub struct SourceError {
    /// The path that could not be read
    pub path: PathBuf,
    source: io::Error,
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "failed to read parameters file {}: {}",
            self.path.display(),
            self.source
        )
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
