// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Z-algorithm.

use std::ops::ControlFlow;

use super::Searcher;
use crate::symbol::Symbol;

/// Length of the longest common prefix of `s` and `s[i..]`, per `i`.
///
/// `z[0]` is left at 0. Every entry satisfies `z[i] <= s.len() - i`.
pub fn z_array<T: PartialEq>(s: &[T]) -> Vec<usize> {
    let n = s.len();
    let mut z = vec![0; n];
    // [left, right) is the rightmost segment known to match a prefix
    let (mut left, mut right) = (0, 0);

    for i in 1..n {
        if i < right {
            z[i] = (right - i).min(z[i - left]);
        }
        while i + z[i] < n && s[z[i]] == s[i + z[i]] {
            z[i] += 1;
        }
        if i + z[i] > right {
            left = i;
            right = i + z[i];
        }
    }

    z
}

/// Z-algorithm matcher.
///
/// The combined sequence wraps every symbol in `Some` and uses `None` as the
/// separator, so the separator can never equal a pattern or text symbol.
#[derive(Debug, Clone)]
pub struct ZMatcher<S> {
    pattern: Vec<S>,
}

impl<S: Symbol> ZMatcher<S> {
    pub fn new(pattern: &[S]) -> Self {
        Self {
            pattern: pattern.to_vec(),
        }
    }
}

impl<S: Symbol> Searcher<S> for ZMatcher<S> {
    fn pattern(&self) -> &[S] {
        &self.pattern
    }

    fn scan(&self, text: &[S], visit: &mut dyn FnMut(usize) -> ControlFlow<()>) {
        let m = self.pattern.len();
        if m == 0 || m > text.len() {
            return;
        }

        let combined: Vec<Option<S>> = self
            .pattern
            .iter()
            .copied()
            .map(Some)
            .chain(std::iter::once(None))
            .chain(text.iter().copied().map(Some))
            .collect();
        let z = z_array(&combined);

        for (i, &len) in z.iter().enumerate().skip(m + 1) {
            if len == m && visit(i - m - 1).is_break() {
                return;
            }
        }
    }
}

#[cfg(test)]
#[path = "z_tests.rs"]
mod tests;
