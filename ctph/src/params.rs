// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The ctph developers

//! Immutable parameters of the fuzzy hash generator.

use thiserror::Error;

use crate::hash::block::block_hash;



/// An error describing why a set of [`Params`] cannot drive a generator.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParamsError {
    /// The minimum block size is zero.
    #[error("minimum block size must not be zero")]
    BlockMinIsZero,
    /// The signature length is not in `2..=64`.
    #[error("signature length {0} is out of range (2..={max})", max = block_hash::FULL_SIZE)]
    SpamSumLengthOutOfRange(u32),
}

/// Parameters shared by every stage of a fuzzy hash generation.
///
/// The defaults ([`Params::SPAMSUM`]) are the classic spamsum constants and
/// the only ones producing reference-compatible signatures.  Each
/// [`Generator`](crate::Generator) holds its own copy so independent
/// generators never share mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Params {
    /// The minimum block size (`3` in spamsum).
    pub block_min: u32,
    /// The target signature length (`64` in spamsum).
    ///
    /// Block hash 1 receives at most `spamsum_length - 1` boundary
    /// characters and block hash 2 at most `spamsum_length / 2 - 1`.
    pub spamsum_length: u32,
    /// The seed of the block-hash accumulators.
    pub hash_init: u32,
    /// The FNV prime used by the block-hash accumulators.
    pub hash_prime: u32,
}

impl Params {
    /// The classic spamsum parameters.
    pub const SPAMSUM: Params = Params {
        block_min: 3,
        spamsum_length: block_hash::FULL_SIZE as u32,
        hash_init: 0x2802_1967,
        hash_prime: 0x0100_0193,
    };

    /// Checks whether these parameters can drive a generator.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.block_min == 0 {
            return Err(ParamsError::BlockMinIsZero);
        }
        if !(2..=block_hash::FULL_SIZE as u32).contains(&self.spamsum_length) {
            return Err(ParamsError::SpamSumLengthOutOfRange(self.spamsum_length));
        }
        Ok(())
    }

    /// The maximum number of boundary characters in block hash 1.
    #[inline]
    pub fn max_boundaries_1(&self) -> usize {
        self.spamsum_length as usize - 1
    }

    /// The maximum number of boundary characters in block hash 2.
    #[inline]
    pub fn max_boundaries_2(&self) -> usize {
        self.spamsum_length as usize / 2 - 1
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::SPAMSUM
    }
}
