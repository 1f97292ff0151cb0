// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Edit distance.

use crate::symbol::Symbol;

/// Levenshtein distance: the minimum number of single-symbol insertions,
/// deletions and substitutions turning `a` into `b`.
pub fn edit_distance<S: Symbol>(a: &[S], b: &[S]) -> usize {
    // keep the shorter sequence as the row
    let (a, b) = if a.len() < b.len() { (b, a) } else { (a, b) };
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, &x) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &y) in b.iter().enumerate() {
            let substitute = prev[j] + usize::from(x != y);
            curr[j + 1] = substitute.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// [`edit_distance`] over Unicode scalar values.
pub fn edit_distance_str(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    edit_distance(&a, &b)
}

#[cfg(test)]
#[path = "distance_tests.rs"]
mod tests;
