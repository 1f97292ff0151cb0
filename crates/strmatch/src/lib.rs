// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Exact string matching.
//!
//! Single-pattern search via five interchangeable algorithms (naive, KMP,
//! Boyer-Moore, Rabin-Karp, Z-algorithm), multi-pattern search via an
//! Aho-Corasick automaton, and the longest-common-substring and edit-distance
//! helpers.
//!
//! Everything operates on slices of [`Symbol`]s and reports offsets into
//! those slices. The `_str` search conveniences work on UTF-8 bytes; the
//! substring and distance ones work on `char`s.
//!
//! ```
//! use strmatch::{Algorithm, match_single};
//!
//! let hits = match_single(b"AAAAA", b"AA", Algorithm::Kmp).unwrap();
//! assert_eq!(hits, vec![0, 1, 2, 3]);
//! ```

pub mod automaton;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod distance;
pub mod error;
pub mod file_reader;
pub mod lcs;
pub mod observer;
pub mod pattern;
pub mod report;
pub mod symbol;


pub use automaton::{AhoCorasick, MatchRecord, PatternId, StateId};
pub use distance::edit_distance;
pub use error::MatchError;
pub use lcs::{LcsResult, longest_common_substring, longest_common_substring_str};
pub use observer::{SearchEvent, SearchHistory, SearchObserver};
pub use pattern::{Algorithm, CompiledPattern, find_str, match_single, match_single_observed};
pub use symbol::Symbol;
