// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled single-pattern matchers.

use std::ops::ControlFlow;

use super::{Algorithm, BoyerMoore, Kmp, Naive, RabinKarp, RabinKarpParams, ZMatcher};
use crate::error::MatchError;
use crate::symbol::Symbol;

/// A pattern preprocessed for one algorithm, reusable across texts.
///
/// All matchers are immutable after construction, so a single instance can
/// be shared between threads and scanned concurrently.
pub trait Searcher<S: Symbol>: Send + Sync {
    /// The pattern this searcher was built for. Never empty.
    fn pattern(&self) -> &[S];

    /// Feed every match offset, in ascending order, to `visit` until it breaks.
    fn scan(&self, text: &[S], visit: &mut dyn FnMut(usize) -> ControlFlow<()>);

    /// All start offsets, ascending.
    fn find_all(&self, text: &[S]) -> Vec<usize> {
        let mut offsets = Vec::new();
        self.scan(text, &mut |offset| {
            offsets.push(offset);
            ControlFlow::Continue(())
        });
        offsets
    }

    /// First start offset, stopping the scan there.
    fn find_first(&self, text: &[S]) -> Option<usize> {
        let mut first = None;
        self.scan(text, &mut |offset| {
            first = Some(offset);
            ControlFlow::Break(())
        });
        first
    }
}

/// A pattern compiled for the algorithm selected at build time.
#[derive(Debug, Clone)]
pub enum CompiledPattern<S: Symbol> {
    Naive(Naive<S>),
    Kmp(Kmp<S>),
    BoyerMoore(BoyerMoore<S>),
    RabinKarp(RabinKarp<S>),
    ZAlgorithm(ZMatcher<S>),
}

impl<S: Symbol> CompiledPattern<S> {
    /// Compile `pattern` for `algorithm` with default Rabin-Karp parameters.
    pub fn compile(pattern: &[S], algorithm: Algorithm) -> Result<Self, MatchError> {
        Self::compile_with(pattern, algorithm, RabinKarpParams::default())
    }

    /// Compile `pattern` for `algorithm`.
    ///
    /// `params` only affects [`Algorithm::RabinKarp`]. Empty patterns are
    /// rejected for every algorithm.
    pub fn compile_with(
        pattern: &[S],
        algorithm: Algorithm,
        params: RabinKarpParams,
    ) -> Result<Self, MatchError> {
        if pattern.is_empty() {
            return Err(MatchError::empty_pattern());
        }
        tracing::trace!("compiling {}-symbol pattern for {}", pattern.len(), algorithm);

        Ok(match algorithm {
            Algorithm::Naive => CompiledPattern::Naive(Naive::new(pattern)),
            Algorithm::Kmp => CompiledPattern::Kmp(Kmp::new(pattern)),
            Algorithm::BoyerMoore => CompiledPattern::BoyerMoore(BoyerMoore::new(pattern)),
            Algorithm::RabinKarp => {
                CompiledPattern::RabinKarp(RabinKarp::with_params(pattern, params))
            }
            Algorithm::ZAlgorithm => CompiledPattern::ZAlgorithm(ZMatcher::new(pattern)),
        })
    }

    /// The algorithm this pattern was compiled for.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            CompiledPattern::Naive(_) => Algorithm::Naive,
            CompiledPattern::Kmp(_) => Algorithm::Kmp,
            CompiledPattern::BoyerMoore(_) => Algorithm::BoyerMoore,
            CompiledPattern::RabinKarp(_) => Algorithm::RabinKarp,
            CompiledPattern::ZAlgorithm(_) => Algorithm::ZAlgorithm,
        }
    }

    fn searcher(&self) -> &dyn Searcher<S> {
        match self {
            CompiledPattern::Naive(m) => m,
            CompiledPattern::Kmp(m) => m,
            CompiledPattern::BoyerMoore(m) => m,
            CompiledPattern::RabinKarp(m) => m,
            CompiledPattern::ZAlgorithm(m) => m,
        }
    }

    pub fn pattern(&self) -> &[S] {
        self.searcher().pattern()
    }

    /// Find all start offsets in `text`, ascending.
    pub fn find_all(&self, text: &[S]) -> Vec<usize> {
        self.searcher().find_all(text)
    }

    /// Find the first start offset in `text`.
    pub fn find_first(&self, text: &[S]) -> Option<usize> {
        self.searcher().find_first(text)
    }

    pub fn is_match(&self, text: &[S]) -> bool {
        self.find_first(text).is_some()
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
