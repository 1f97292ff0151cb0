// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! All default values are documented here for easy reference.
//! Config structs and matchers delegate to these constants.

/// Config file name looked up by discovery.
pub const CONFIG_FILE: &str = "strmatch.toml";

/// The only config schema version understood.
pub const CONFIG_VERSION: u32 = 1;

/// Default Rabin-Karp hash parameters.
pub mod rabin_karp {
    /// Polynomial base (256, one step per byte value).
    pub const BASE: u64 = 256;

    /// Prime modulus (10^9 + 7).
    pub const MODULUS: u64 = 1_000_000_007;
}

/// Input file reading.
pub mod file {
    /// Files at or above this size (64 KiB) are memory-mapped.
    pub const MMAP_THRESHOLD: u64 = 64 * 1024;
}

/// Environment variables read by the binary.
pub mod env {
    /// Log filter directives, in `tracing_subscriber::EnvFilter` syntax.
    pub const LOG: &str = "STRMATCH_LOG";
}
