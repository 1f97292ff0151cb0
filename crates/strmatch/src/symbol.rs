// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The unit of text every matcher operates on.

use std::fmt::Debug;
use std::hash::Hash;

/// A single code unit of text or pattern.
///
/// Implemented for bytes, UTF-16 code units and Unicode scalar values.
/// `code` feeds the rolling hash and the dense bad-character table.
pub trait Symbol: Copy + Eq + Hash + Debug + Send + Sync {
    /// Integer value of this symbol.
    fn code(self) -> u32;
}

impl Symbol for u8 {
    #[inline]
    fn code(self) -> u32 {
        u32::from(self)
    }
}

impl Symbol for u16 {
    #[inline]
    fn code(self) -> u32 {
        u32::from(self)
    }
}

impl Symbol for char {
    #[inline]
    fn code(self) -> u32 {
        u32::from(self)
    }
}
