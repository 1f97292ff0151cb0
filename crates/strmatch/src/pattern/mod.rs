// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-pattern matching.
//!
//! Five interchangeable algorithms share one contract: given a text and a
//! non-empty pattern, return every start offset (ascending, overlaps included)
//! where the pattern occurs.
//! - Naive: direct comparison at every offset, used as the oracle
//! - KMP: failure function, text index never moves backwards
//! - Boyer-Moore: bad-character heuristic, right-to-left comparison
//! - Rabin-Karp: rolling polynomial hash with verification
//! - Z-algorithm: Z-array over `pattern ⊕ separator ⊕ text`

pub mod algorithm;
pub mod boyer_moore;
pub mod kmp;
pub mod matcher;
pub mod naive;
pub mod rabin_karp;
pub mod z;

pub use algorithm::Algorithm;
pub use boyer_moore::{BadCharTable, BoyerMoore};
pub use kmp::{Kmp, lps};
pub use matcher::{CompiledPattern, Searcher};
pub use naive::Naive;
pub use rabin_karp::{RabinKarp, RabinKarpParams, RollingHash};
pub use z::{ZMatcher, z_array};

use crate::error::MatchError;
use crate::observer::{SearchEvent, SearchObserver};
use crate::symbol::Symbol;

/// Find every occurrence of `pattern` in `text` with the given algorithm.
///
/// Fails with [`MatchError::InvalidArgument`] for an empty pattern. A pattern
/// longer than the text is not an error and yields no offsets.
pub fn match_single<S: Symbol>(
    text: &[S],
    pattern: &[S],
    algorithm: Algorithm,
) -> Result<Vec<usize>, MatchError> {
    Ok(CompiledPattern::compile(pattern, algorithm)?.find_all(text))
}

/// [`match_single`], then report the completed call to `observer`.
///
/// Failed calls are not reported.
pub fn match_single_observed<S, O>(
    text: &[S],
    pattern: &[S],
    algorithm: Algorithm,
    observer: &mut O,
) -> Result<Vec<usize>, MatchError>
where
    S: Symbol,
    O: SearchObserver + ?Sized,
{
    let offsets = match_single(text, pattern, algorithm)?;
    observer.on_search(&SearchEvent {
        algorithm,
        text_len: text.len(),
        pattern_len: pattern.len(),
        matches: offsets.len(),
    });
    Ok(offsets)
}

/// Byte-offset search over UTF-8 strings.
pub fn find_str(
    text: &str,
    pattern: &str,
    algorithm: Algorithm,
) -> Result<Vec<usize>, MatchError> {
    match_single(text.as_bytes(), pattern.as_bytes(), algorithm)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
