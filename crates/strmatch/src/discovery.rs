// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.

use std::path::{Path, PathBuf};

use crate::config::defaults::CONFIG_FILE;

/// Nearest strmatch.toml at or above `start_dir`.
///
/// The search never leaves the enclosing git repository: a directory holding
/// `.git` is the last one checked.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!("using config {}", candidate.display());
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
