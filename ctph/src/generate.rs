// SPDX-License-Identifier: GPL-2.0-or-later
// SPDX-FileCopyrightText: Copyright Andrew Tridgell <tridge@samba.org> 2002
// SPDX-FileCopyrightText: Copyright (C) 2006 ManTech International Corporation
// SPDX-FileCopyrightText: Copyright (C) 2013 Helmut Grohne <helmut@subdivi.de>
// SPDX-FileCopyrightText: Copyright (C) 2017, 2023–2025 Tsukasa OI <floss_ssdeep@irq.a4lg.com>
// SPDX-FileCopyrightText: Copyright (C) 2026 The ctph developers

//! Fuzzy hash generator.

use core::ops::AddAssign;

use thiserror::Error;

use crate::hash::block::{block_hash, block_size};
use crate::hash::FuzzyHash;
use crate::macros::{invariant, optionally_unsafe};
use crate::params::{Params, ParamsError};

/// Internal hashes as used in the fuzzy hash generator.
pub(crate) mod hashes {
    pub mod block_fnv;
    pub mod rolling_hash;
}

pub use hashes::block_fnv::BlockHashFnv;
pub use hashes::rolling_hash::RollingHash;

/// The error type describing why a [`Generator`] failed to finalize.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// The number of processed bytes differs from the input size
    /// declared on construction.
    #[error("current state mismatches to the input size previously set (declared: {declared}, processed: {processed})")]
    InputSizeMismatch {
        /// The input size declared on construction.
        declared: u64,
        /// The number of bytes actually processed.
        processed: u64,
    },
}

/// Fuzzy hash generator.
///
/// The total input size must be known before hashing begins because it
/// determines the block size.  Data may be fed in any number of pieces
/// as long as their total length matches.
///
/// # Example
///
/// ```
/// use ctph::Generator;
///
/// let mut generator = Generator::new(14);
/// generator.update(b"Hello, ");
/// generator.update(b"World!\n");
/// let hash = generator.finalize().unwrap();
/// assert_eq!(hash.to_string(), "1:tAJJKJFyKXJBEvn:yqGKMv");
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    /// Parameters to generate a fuzzy hash.
    params: Params,
    /// The declared input size.
    input_size: u64,
    /// The number of bytes processed so far.
    processed_size: u64,
    /// The block size selected from the declared input size.
    block_size: u64,
    /// The rolling hash deciding piece boundaries.
    roll_hash: RollingHash,
    /// The accumulator for the block hash 1.
    bh1_hash: BlockHashFnv,
    /// The accumulator for the block hash 2.
    bh2_hash: BlockHashFnv,
    /// Block hash 1 under construction (in Base64 indices).
    blockhash1: [u8; block_hash::FULL_SIZE],
    /// Block hash 2 under construction (in Base64 indices).
    blockhash2: [u8; block_hash::FULL_SIZE],
    /// Length of the block hash 1.
    len_blockhash1: usize,
    /// Length of the block hash 2.
    len_blockhash2: usize,
}

impl Generator {
    /// Creates a new [`Generator`] for an input of `input_size` bytes
    /// with the spamsum parameters.
    pub fn new(input_size: u64) -> Self {
        Self::with_params_unchecked(input_size, Params::SPAMSUM)
    }

    /// Creates a new [`Generator`] for an input of `input_size` bytes
    /// with custom parameters.
    pub fn with_params(input_size: u64, params: Params) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self::with_params_unchecked(input_size, params))
    }

    /// Creates a new [`Generator`] with already validated parameters.
    fn with_params_unchecked(input_size: u64, params: Params) -> Self {
        let block_size = block_size::select(input_size, &params);
        Generator {
            params,
            input_size,
            processed_size: 0,
            block_size,
            roll_hash: RollingHash::new(),
            bh1_hash: BlockHashFnv::with_params(&params),
            bh2_hash: BlockHashFnv::with_params(&params),
            blockhash1: [0; block_hash::FULL_SIZE],
            blockhash2: [0; block_hash::FULL_SIZE],
            len_blockhash1: 0,
            len_blockhash2: 0,
        }
    }

    /// The parameters of this generator.
    #[inline]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The declared input size.
    #[inline]
    pub fn input_size(&self) -> u64 {
        self.input_size
    }

    /// The number of bytes processed so far.
    #[inline]
    pub fn processed_size(&self) -> u64 {
        self.processed_size
    }

    /// The block size selected for the declared input size.
    #[inline]
    pub fn block_size(&self) -> u64 {
        self.block_size
    }

    /// Updates the state by processing a byte.
    pub fn update_by_byte(&mut self, ch: u8) -> &mut Self {
        self.processed_size = self.processed_size.saturating_add(1);
        self.bh1_hash.update_by_byte(ch);
        self.bh2_hash.update_by_byte(ch);
        let value = u64::from(self.roll_hash.push(ch));
        let bs = self.block_size;
        if value % bs == bs - 1 {
            optionally_unsafe! {
                if self.len_blockhash1 < self.params.max_boundaries_1() {
                    invariant!(self.len_blockhash1 < block_hash::FULL_SIZE);
                    self.blockhash1[self.len_blockhash1] = self.bh1_hash.base64_index();
                    self.len_blockhash1 += 1;
                    self.bh1_hash.reset();
                    self.roll_hash.reset();
                }
                let bs2 = bs.saturating_mul(2);
                if value % bs2 == bs2 - 1
                    && self.len_blockhash2 < self.params.max_boundaries_2()
                {
                    invariant!(self.len_blockhash2 < block_hash::HALF_SIZE);
                    self.blockhash2[self.len_blockhash2] = self.bh2_hash.base64_index();
                    self.len_blockhash2 += 1;
                    self.bh2_hash.reset();
                    // No-op unless block hash 1 is already full.
                    self.roll_hash.reset();
                }
            }
        }
        self
    }

    /// Updates the state by processing an iterator of [`u8`].
    pub fn update_by_iter(&mut self, iter: impl Iterator<Item = u8>) -> &mut Self {
        for ch in iter {
            self.update_by_byte(ch);
        }
        self
    }

    /// Updates the state by processing a slice of [`u8`].
    pub fn update(&mut self, buf: &[u8]) -> &mut Self {
        for &ch in buf.iter() {
            self.update_by_byte(ch);
        }
        self
    }

    /// Finalizes the generator and returns the fuzzy hash.
    ///
    /// The last piece (possibly empty) always contributes one character to
    /// each block hash.
    ///
    /// It fails with [`GeneratorError::InputSizeMismatch`] if the number of
    /// processed bytes differs from the declared input size.
    pub fn finalize(self) -> Result<FuzzyHash, GeneratorError> {
        if self.processed_size != self.input_size {
            tracing::debug!(
                declared = self.input_size,
                processed = self.processed_size,
                "input size mismatch on finalization"
            );
            return Err(GeneratorError::InputSizeMismatch {
                declared: self.input_size,
                processed: self.processed_size,
            });
        }
        Ok(self.finalize_without_size_check())
    }

    /// Finalizes the generator without checking the input size.
    ///
    /// Callers must guarantee that the declared input size is the
    /// number of processed bytes.
    pub(crate) fn finalize_without_size_check(self) -> FuzzyHash {
        debug_assert_eq!(self.processed_size, self.input_size);
        let mut blockhash1 = self.blockhash1;
        let mut blockhash2 = self.blockhash2;
        let len_blockhash1 = self.len_blockhash1 + 1;
        let len_blockhash2 = self.len_blockhash2 + 1;
        optionally_unsafe! {
            invariant!(self.len_blockhash1 < block_hash::FULL_SIZE);
            invariant!(self.len_blockhash2 < block_hash::HALF_SIZE);
            blockhash1[self.len_blockhash1] = self.bh1_hash.base64_index();
            blockhash2[self.len_blockhash2] = self.bh2_hash.base64_index();
        }
        let hash = FuzzyHash::new_from_internals_raw(
            self.block_size,
            &blockhash1[..len_blockhash1],
            &blockhash2[..len_blockhash2],
        );
        tracing::trace!(
            input_size = self.input_size,
            block_size = self.block_size,
            %hash,
            "generated a fuzzy hash"
        );
        hash
    }
}

impl AddAssign<&[u8]> for Generator {
    /// Updates the state by processing a slice of [`u8`].
    #[inline(always)]
    fn add_assign(&mut self, buffer: &[u8]) {
        self.update(buffer);
    }
}

impl<const N: usize> AddAssign<&[u8; N]> for Generator {
    /// Updates the state by processing an array of [`u8`].
    #[inline(always)]
    fn add_assign(&mut self, buffer: &[u8; N]) {
        self.update(&buffer[..]);
    }
}

impl AddAssign<u8> for Generator {
    /// Updates the state by processing a byte.
    #[inline(always)]
    fn add_assign(&mut self, byte: u8) {
        self.update_by_byte(byte);
    }
}

/// Constant assertions related to this module.
#[doc(hidden)]
mod const_asserts {
    use super::*;
    use static_assertions::const_assert;

    // The boundary limits of the default parameters leave a slot for
    // the finalization character.
    const_assert!((Params::SPAMSUM.spamsum_length as usize) - 1 < block_hash::FULL_SIZE);
    const_assert!((Params::SPAMSUM.spamsum_length as usize) / 2 - 1 < block_hash::HALF_SIZE);
}
