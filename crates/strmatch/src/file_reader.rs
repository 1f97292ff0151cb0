// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input reading with size-based strategy.
//!
// Allow unsafe_code for memory-mapped I/O (required by memmap2).
// Safety justification:
// 1. File handle is valid (just opened)
// 2. We don't mutate the mapped memory
// 3. Matchers only read the bytes; a file truncated mid-scan is the caller's problem
#![allow(unsafe_code)]
//!
//! - < 64KB: Direct read into buffer
//! - >= 64KB: Memory-mapped I/O
//! - No paths: read all of stdin

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use memmap2::Mmap;

use crate::config::defaults::file::MMAP_THRESHOLD;

/// Content of an input, either owned or memory-mapped.
pub enum FileContent {
    /// Small file (or stdin) read into memory.
    Owned(Vec<u8>),
    /// Large file memory-mapped.
    Mapped(Mmap),
}

impl FileContent {
    /// Read file using appropriate strategy based on size.
    pub fn read(path: &Path) -> io::Result<Self> {
        let size = fs::metadata(path)?.len();

        if size < MMAP_THRESHOLD {
            Ok(FileContent::Owned(fs::read(path)?))
        } else {
            let file = File::open(path)?;
            // SAFETY: File handle is valid (just opened) and we never mutate the mapping.
            let mmap = unsafe { Mmap::map(&file)? };
            Ok(FileContent::Mapped(mmap))
        }
    }

    /// Read everything from `reader` into memory.
    pub fn read_all(mut reader: impl Read) -> io::Result<Self> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(FileContent::Owned(buf))
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            FileContent::Owned(bytes) => bytes.as_slice(),
            FileContent::Mapped(mmap) => &mmap[..],
        }
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self, FileContent::Mapped(_))
    }
}

/// A named input to search.
pub struct Source {
    /// Display label: the path as given, or `-` for stdin.
    pub label: String,
    pub content: FileContent,
}

/// Load every path, or stdin when `paths` is empty.
pub fn load_sources(paths: &[PathBuf]) -> io::Result<Vec<Source>> {
    if paths.is_empty() {
        return Ok(vec![Source {
            label: "-".to_string(),
            content: FileContent::read_all(io::stdin().lock())?,
        }]);
    }

    paths
        .iter()
        .map(|path| {
            let content = FileContent::read(path).map_err(|e| {
                io::Error::new(e.kind(), format!("{}: {}", path.display(), e))
            })?;
            tracing::debug!(
                "read {} ({} bytes, {})",
                path.display(),
                content.as_bytes().len(),
                if content.is_mapped() { "mapped" } else { "buffered" }
            );
            Ok(Source {
                label: path.display().to_string(),
                content,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "file_reader_tests.rs"]
mod tests;
