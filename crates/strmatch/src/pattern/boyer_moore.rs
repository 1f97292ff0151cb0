// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Boyer-Moore with the bad-character heuristic.
//!
//! Each alignment is compared right to left. On a mismatch the alignment
//! moves so the mismatched text symbol lines up with its last occurrence in
//! the pattern (at least one step). Worst case O(n·m), sub-linear on typical
//! text.

use std::collections::HashMap;
use std::ops::ControlFlow;

use super::Searcher;
use crate::symbol::Symbol;

/// Marker for "symbol does not occur in the pattern".
pub const ABSENT: isize = -1;

/// Last index at which each symbol occurs in a pattern.
///
/// Codes below 256 are held in a fixed array; anything wider falls back to a
/// hash map.
#[derive(Debug, Clone)]
pub struct BadCharTable {
    dense: Box<[isize; 256]>,
    sparse: HashMap<u32, isize>,
}

impl BadCharTable {
    pub fn new<S: Symbol>(pattern: &[S]) -> Self {
        let mut dense = Box::new([ABSENT; 256]);
        let mut sparse = HashMap::new();

        for (index, symbol) in pattern.iter().enumerate() {
            let index = index as isize;
            let code = symbol.code();
            match dense.get_mut(code as usize) {
                Some(slot) => *slot = index,
                None => {
                    sparse.insert(code, index);
                }
            }
        }

        Self { dense, sparse }
    }

    /// Last index of `symbol`, or [`ABSENT`].
    #[inline]
    pub fn get<S: Symbol>(&self, symbol: S) -> isize {
        let code = symbol.code();
        match self.dense.get(code as usize) {
            Some(&index) => index,
            None => self.sparse.get(&code).copied().unwrap_or(ABSENT),
        }
    }

    /// Last index of `symbol`, if it occurs at all.
    pub fn last_occurrence<S: Symbol>(&self, symbol: S) -> Option<usize> {
        usize::try_from(self.get(symbol)).ok()
    }
}

#[derive(Debug, Clone)]
pub struct BoyerMoore<S> {
    pattern: Vec<S>,
    bad_char: BadCharTable,
}

impl<S: Symbol> BoyerMoore<S> {
    pub fn new(pattern: &[S]) -> Self {
        Self {
            pattern: pattern.to_vec(),
            bad_char: BadCharTable::new(pattern),
        }
    }

    pub fn bad_char_table(&self) -> &BadCharTable {
        &self.bad_char
    }

    /// Shift that aligns `symbol` at pattern index `pos` with its last
    /// occurrence, never less than one.
    #[inline]
    fn shift(&self, pos: usize, symbol: S) -> usize {
        let shift = pos as isize - self.bad_char.get(symbol);
        usize::try_from(shift).map_or(1, |s| s.max(1))
    }
}

impl<S: Symbol> Searcher<S> for BoyerMoore<S> {
    fn pattern(&self) -> &[S] {
        &self.pattern
    }

    fn scan(&self, text: &[S], visit: &mut dyn FnMut(usize) -> ControlFlow<()>) {
        let (n, m) = (text.len(), self.pattern.len());
        if m == 0 || m > n {
            return;
        }

        let mut s = 0;
        while s <= n - m {
            // j counts the pattern symbols still to compare
            let mut j = m;
            while j > 0 && self.pattern[j - 1] == text[s + j - 1] {
                j -= 1;
            }

            if j == 0 {
                if visit(s).is_break() {
                    return;
                }
                s += if s + m < n { self.shift(m, text[s + m]) } else { 1 };
            } else {
                s += self.shift(j - 1, text[s + j - 1]);
            }
        }
    }
}

#[cfg(test)]
#[path = "boyer_moore_tests.rs"]
mod tests;
