// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2023 Tsukasa OI <floss_ssdeep@irq.a4lg.com>.
// SPDX-FileCopyrightText: Copyright (C) 2026 The ctph developers

#![cfg(feature = "easy-functions")]

use crate::generate::Generator;
use crate::hash::FuzzyHash;

/// Generates a fuzzy hash from a given buffer.
///
/// # Example
///
/// ```
/// assert_eq!(
///     ctph::hash_buf(b"Hello, World!\n").to_string(),
///     "1:tAJJKJFyKXJBEvn:yqGKMv"
/// );
/// ```
pub fn hash_buf(buffer: &[u8]) -> FuzzyHash {
    let mut generator = Generator::new(buffer.len() as u64);
    generator.update(buffer);
    generator.finalize_without_size_check()
}

#[cfg(test)]
mod tests;
