// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2023, 2024 Tsukasa OI <floss_ssdeep@irq.a4lg.com>.
// SPDX-FileCopyrightText: Copyright (C) 2026 The ctph developers

//! Context Triggered Piecewise Hashing (CTPH).
//!
//! This crate generates, parses and compares fuzzy hashes in the spamsum
//! signature format (`"<block size>:<block hash 1>:<block hash 2>"`).
//! Two inputs sharing large parts of their content produce similar
//! signatures and [`FuzzyHash::compare()`] scores that similarity from `0`
//! to `100`.
//!
//! # Examples
//!
//! ```
//! use ctph::{FuzzyHash, Generator, Similarity};
//!
//! // Generate a fuzzy hash at once.
//! let hash = ctph::hash_buf(b"This is a test message");
//! assert_eq!(hash.to_string(), "1:xNMWFMWFEFRAWRFIAWWECAn:4W2W+UW0AWWECAn");
//!
//! // Or feed data in pieces (the total size must be known in advance).
//! let data = b"This is another test message";
//! let mut generator = Generator::new(data.len() as u64);
//! generator.update(&data[..10]);
//! generator.update(&data[10..]);
//! let other = generator.finalize().unwrap();
//!
//! // Compare two fuzzy hashes.
//! assert_eq!(hash.compare(&other), Similarity::Score(94));
//!
//! // Parse a fuzzy hash string and compare.
//! let parsed: FuzzyHash = "6:BB:CC".parse().unwrap();
//! let near: FuzzyHash = "3:AAAA:BB".parse().unwrap();
//! assert_eq!(near.compare(&parsed), Similarity::Score(100));
//! ```
//!
//! # Crate features
//!
//! *   `easy-functions` (default)  
//!     [`hash_buf()`] and [`compare()`] for one-shot usage.
//! *   `serde`  
//!     (De)serialization of [`FuzzyHash`] (as a string) and [`Params`].
//! *   `unsafe`  
//!     Lets the optimizer assume internal invariants.
//! *   `tests-slow`  
//!     Enables time-consuming tests.
//!
//! # Logging
//!
//! This crate emits [`tracing`] events (`trace` for each generated hash and
//! each comparison, `debug` for parse failures and size mismatches).
//! It never installs a subscriber itself.

// int_log feature depending on ilog2 availability
#![cfg_attr(ctph_ilog2 = "unstable", feature(int_log))]
// unsafe code is *only* allowed on enabling the "unsafe" feature or on
// the tests.
#![cfg_attr(not(any(feature = "unsafe", test)), forbid(unsafe_code))]
// Non-test code requires documents
#![cfg_attr(not(test), warn(missing_docs))]
#![cfg_attr(not(test), warn(clippy::missing_docs_in_private_items))]
// Tests: allow unused unsafe blocks (invariant! does will not need unsafe
// on tests but others may need this macro).
#![cfg_attr(test, allow(unused_unsafe))]
// Tests: constant (and/or obvious) assertions should be allowed.
#![cfg_attr(test, allow(clippy::assertions_on_constants))]
// Tests: obvious 1 * n like operations should be allowed.
#![cfg_attr(test, allow(clippy::identity_op))]

mod base64;
mod compare;
mod compare_easy;
mod generate;
mod generate_easy;
mod hash;
mod macros;
mod params;
mod test_utils;
mod utils;

pub use compare::{edit_distance, score_strings, Similarity};
#[cfg(feature = "easy-functions")]
pub use compare_easy::{compare, ParseErrorEither, ParseErrorSide};
pub use generate::{Generator, GeneratorError};
#[cfg(feature = "easy-functions")]
pub use generate_easy::hash_buf;
pub use hash::block::{block_hash, block_size, BlockSizeRelation};
pub use hash::parser_state::{ParseError, ParseErrorInfo, ParseErrorKind, ParseErrorOrigin};
pub use hash::{FuzzyHash, FuzzyHashOperationError};
pub use params::{Params, ParamsError};

/// Module containing internal hash functions.
pub mod internal_hashes {
    pub use super::generate::{BlockHashFnv, RollingHash};
}

/// The maximum length of the fuzzy hash's string representation.
pub const MAX_LEN_IN_STR: usize = FuzzyHash::MAX_LEN_IN_STR;

/// Constant assertions related to the base requirements.
#[doc(hidden)]
mod const_asserts {
    use super::*;
    use static_assertions::const_assert;

    // We expect that usize is at least 32 bits in width
    // (the generator counts its input in u64 and hashes are
    // addressed by usize).
    const_assert!(usize::BITS >= 32);

    // Every block size fits in the string representation.
    const_assert!(
        MAX_LEN_IN_STR
            >= block_size::MAX_BLOCK_SIZE_LEN_IN_CHARS + 2 + 2 * block_hash::FULL_SIZE
    );
}

mod tests;
