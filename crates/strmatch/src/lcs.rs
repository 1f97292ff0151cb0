// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Longest common substring.
//!
//! `dp[i][j]` is the length of the longest common suffix of `a[..i]` and
//! `b[..j]`. Only two rows of the table are kept at a time. O(|a|·|b|) time.

use crate::symbol::Symbol;

/// Longest common substring of two sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsResult<S> {
    /// The substring, taken from the first occurrence. Empty if nothing is shared.
    pub text: Vec<S>,
    pub length: usize,
    /// Every `(start_in_a, start_in_b)` pair achieving `length`, ascending.
    pub occurrences: Vec<(usize, usize)>,
}

impl<S: Symbol> LcsResult<S> {
    /// Distinct tied substrings, in order of first appearance in `a`.
    ///
    /// `a` must be the first sequence passed to [`longest_common_substring`].
    pub fn distinct_texts<'a>(&self, a: &'a [S]) -> Vec<&'a [S]> {
        let mut texts: Vec<&'a [S]> = Vec::new();
        for &(start, _) in &self.occurrences {
            let Some(text) = a.get(start..start + self.length) else {
                continue;
            };
            if !texts.contains(&text) {
                texts.push(text);
            }
        }
        texts
    }
}

impl LcsResult<char> {
    /// The substring as a `String`.
    pub fn as_string(&self) -> String {
        self.text.iter().collect()
    }
}

/// Find the longest common substring of `a` and `b` and every place it occurs.
pub fn longest_common_substring<S: Symbol>(a: &[S], b: &[S]) -> LcsResult<S> {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    let mut best = 0;
    // (i, j) end positions, exclusive, of every suffix reaching `best`
    let mut ends: Vec<(usize, usize)> = Vec::new();

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            curr[j] = if a[i - 1] == b[j - 1] { prev[j - 1] + 1 } else { 0 };
            let len = curr[j];
            if len == 0 || len < best {
                continue;
            }
            if len > best {
                best = len;
                ends.clear();
            }
            ends.push((i, j));
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let occurrences: Vec<(usize, usize)> =
        ends.into_iter().map(|(i, j)| (i - best, j - best)).collect();
    let text = occurrences
        .first()
        .map(|&(start, _)| a[start..start + best].to_vec())
        .unwrap_or_default();

    tracing::trace!(
        "longest common substring: length {}, {} occurrences",
        best,
        occurrences.len()
    );

    LcsResult {
        text,
        length: best,
        occurrences,
    }
}

/// [`longest_common_substring`] over Unicode scalar values.
///
/// Offsets count `char`s, not bytes, so the result never splits a character.
pub fn longest_common_substring_str(a: &str, b: &str) -> LcsResult<char> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    longest_common_substring(&a, &b)
}

#[cfg(test)]
#[path = "lcs_tests.rs"]
mod tests;
