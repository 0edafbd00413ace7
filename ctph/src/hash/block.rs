// SPDX-License-Identifier: GPL-2.0-or-later
// SPDX-FileCopyrightText: Copyright Andrew Tridgell <tridge@samba.org> 2002
// SPDX-FileCopyrightText: Copyright (C) 2006 ManTech International Corporation
// SPDX-FileCopyrightText: Copyright (C) 2023, 2024 Tsukasa OI <floss_ssdeep@irq.a4lg.com>
// SPDX-FileCopyrightText: Copyright (C) 2026 The ctph developers

//! Block size and block hash related constants and utilities.

use core::cmp::Ordering;


/// The relation between two block sizes.
///
/// Two block hashes can only be compared when their *effective* block sizes
/// match.  Since block hash 2 of a fuzzy hash is effectively computed on the
/// doubled block size, fuzzy hashes whose block sizes are equal or differ by
/// a factor of exactly two share at least one comparable block hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockSizeRelation {
    /// Two block sizes are neither equal nor a factor of two apart.
    ///
    /// No block hashes can be compared.
    Far,
    /// The right side is exactly twice the left side.
    ///
    /// Block hash 2 of the left side is compared with
    /// block hash 1 of the right side.
    NearLt,
    /// Both sides have the same block size.
    ///
    /// Both block hash pairs are compared.
    NearEq,
    /// The left side is exactly twice the right side.
    ///
    /// Block hash 1 of the left side is compared with
    /// block hash 2 of the right side.
    NearGt,
}

impl BlockSizeRelation {
    /// Checks whether a given value denotes "near" block sizes.
    ///
    /// Only [`BlockSizeRelation::Far`] returns [`false`].
    #[inline]
    pub fn is_near(&self) -> bool {
        !matches!(self, BlockSizeRelation::Far)
    }
}


/// Block size related functions.
pub mod block_size {
    use super::*;
    use crate::params::Params;
    use crate::utils::u64_ilog2;

    /// The minimum block size of the spamsum parameters.
    ///
    /// Note that inputs shorter than `MIN * 64` bytes start from the
    /// floored block size of `1` and may get a power of two below `MIN`
    /// after doubling, so this is the minimum *selected by the logarithm*,
    /// not the minimum possible block size.
    pub const MIN: u32 = Params::SPAMSUM.block_min;

    /// Selects the block size for an input of `input_size` bytes.
    ///
    /// The block size is chosen so that block hash 1 contains close to
    /// [`Params::spamsum_length`] characters:
    ///
    /// 1.  The candidate is `block_min * 2^floor(log2(n / (length * block_min)))`.
    ///     If the quotient is zero, the logarithm is not defined and the
    ///     candidate is floored to `1`.
    /// 2.  While `candidate * length < n`, the candidate is doubled.
    ///
    /// The result is always positive.  Zero parameters (rejected by
    /// [`Params::validate()`]) are treated as `1`.
    pub fn select(input_size: u64, params: &Params) -> u64 {
        let block_min = u64::from(params.block_min.max(1));
        let spamsum_length = u64::from(params.spamsum_length.max(1));
        let quotient = input_size / (spamsum_length * block_min);
        let mut block_size = if quotient == 0 {
            1
        } else {
            block_min << u64_ilog2(quotient)
        };
        while block_size.saturating_mul(spamsum_length) < input_size {
            block_size *= 2;
        }
        block_size
    }

    /// Checks whether a given block size is valid in a signature.
    #[inline]
    pub fn is_valid(block_size: u64) -> bool {
        block_size != 0
    }

    /// Checks whether two block sizes are near
    /// (equal or a factor of two apart).
    #[inline]
    pub fn is_near(lhs: u64, rhs: u64) -> bool {
        compare_sizes(lhs, rhs).is_near()
    }

    /// Checks whether two block sizes are equal.
    #[inline(always)]
    pub fn is_near_eq(lhs: u64, rhs: u64) -> bool {
        lhs == rhs
    }

    /// Checks whether `rhs` is exactly twice `lhs`.
    #[inline]
    pub fn is_near_lt(lhs: u64, rhs: u64) -> bool {
        lhs.checked_mul(2) == Some(rhs)
    }

    /// Checks whether `lhs` is exactly twice `rhs`.
    #[inline]
    pub fn is_near_gt(lhs: u64, rhs: u64) -> bool {
        is_near_lt(rhs, lhs)
    }

    /// Compares two block sizes and returns their [`BlockSizeRelation`].
    pub fn compare_sizes(lhs: u64, rhs: u64) -> BlockSizeRelation {
        if is_near_eq(lhs, rhs) {
            BlockSizeRelation::NearEq
        } else if is_near_lt(lhs, rhs) {
            BlockSizeRelation::NearLt
        } else if is_near_gt(lhs, rhs) {
            BlockSizeRelation::NearGt
        } else {
            BlockSizeRelation::Far
        }
    }

    /// Compares two block sizes as plain integers.
    #[inline(always)]
    pub fn cmp(lhs: u64, rhs: u64) -> Ordering {
        u64::cmp(&lhs, &rhs)
    }

    /// The maximum number of decimal digits of a block size.
    ///
    /// `u64::MAX` is 18 446 744 073 709 551 615.
    pub const MAX_BLOCK_SIZE_LEN_IN_CHARS: usize = 20;
}


/// Block hash related constants.
pub mod block_hash {
    /// The number of alphabets used in a block hash.
    pub const ALPHABET_SIZE: usize = 64;

    /// The maximum length of a block hash.
    ///
    /// Block hash 1 of a generated fuzzy hash holds up to 63 boundary
    /// characters plus the finalization character.
    pub const FULL_SIZE: usize = 64;

    /// The maximum length of the block hash 2 of a generated fuzzy hash.
    pub const HALF_SIZE: usize = FULL_SIZE / 2;
}


#[cfg(test)]
mod tests;
