// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Knuth-Morris-Pratt.

use std::ops::ControlFlow;

use super::Searcher;
use crate::symbol::Symbol;

/// Longest proper prefix of `pattern[..=i]` that is also its suffix, per `i`.
///
/// `lps[0] == 0` and `lps[i] <= i` always hold.
pub fn lps<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let mut lps = vec![0; pattern.len()];
    let mut len = 0;

    for i in 1..pattern.len() {
        while len > 0 && pattern[i] != pattern[len] {
            len = lps[len - 1];
        }
        if pattern[i] == pattern[len] {
            len += 1;
        }
        lps[i] = len;
    }

    lps
}

/// KMP matcher with a precomputed failure function.
#[derive(Debug, Clone)]
pub struct Kmp<S> {
    pattern: Vec<S>,
    lps: Vec<usize>,
}

impl<S: Symbol> Kmp<S> {
    pub fn new(pattern: &[S]) -> Self {
        Self {
            pattern: pattern.to_vec(),
            lps: lps(pattern),
        }
    }

    pub fn lps(&self) -> &[usize] {
        &self.lps
    }
}

impl<S: Symbol> Searcher<S> for Kmp<S> {
    fn pattern(&self) -> &[S] {
        &self.pattern
    }

    fn scan(&self, text: &[S], visit: &mut dyn FnMut(usize) -> ControlFlow<()>) {
        let m = self.pattern.len();
        if m == 0 || m > text.len() {
            return;
        }

        // j: number of pattern symbols currently matched
        let mut j = 0;
        for (i, &symbol) in text.iter().enumerate() {
            while j > 0 && self.pattern[j] != symbol {
                j = self.lps[j - 1];
            }
            if self.pattern[j] == symbol {
                j += 1;
            }
            if j == m {
                if visit(i + 1 - m).is_break() {
                    return;
                }
                j = self.lps[j - 1];
            }
        }
    }
}

#[cfg(test)]
#[path = "kmp_tests.rs"]
mod tests;
