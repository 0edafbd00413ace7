// SPDX-License-Identifier: GPL-2.0-or-later
// SPDX-FileCopyrightText: Copyright Andrew Tridgell <tridge@samba.org> 2002
// SPDX-FileCopyrightText: Copyright (C) 2006 ManTech International Corporation
// SPDX-FileCopyrightText: Copyright (C) 2023, 2024 Tsukasa OI <floss_ssdeep@irq.a4lg.com>
// SPDX-FileCopyrightText: Copyright (C) 2026 The ctph developers

//! The fuzzy hash (signature) structure.

use thiserror::Error;

use crate::base64::base64_char;
use crate::hash::block::{block_hash, block_size, BlockSizeRelation};
use crate::hash::parser_state::{
    BlockHashParseState, ParseError, ParseErrorKind, ParseErrorOrigin,
};
use crate::macros::{invariant, optionally_unsafe};

pub(crate) mod algorithms;
pub mod block;
pub mod parser_state;

/// A fixed size fuzzy hash representation.
///
/// # Fuzzy Hash Internals
///
/// A fuzzy hash consists of three parts:
///
/// 1.  Block size (reciprocal of average piece-splitting probability per byte
///     on the block hash 1)
/// 2.  Block hash 1.  6-bit hash per "piece", variable-length up to
///     [`block_hash::FULL_SIZE`].
/// 3.  Block hash 2.  6-bit hash per "piece" on the doubled block size.
///     A generated block hash 2 holds up to [`block_hash::HALF_SIZE`]
///     characters but the parser accepts up to [`block_hash::FULL_SIZE`].
///
/// ```text
/// 6:hGcpLGcpLGcpLGcpLGcpLGcpLGcpLGcpLGcD:h55555555D
/// |/|\_________________________________/|\________/
/// | |           Block hash 1            | Block hash 2
/// | |                                   |
/// | +-- (sep:colon)                     +-- (sep:colon)
/// |
/// +-- Block size
/// ```
///
/// Block hashes are stored as Base64 indices (`0..64`) in fixed arrays
/// along with their lengths.  Unused trailing elements are always zero so
/// that derived comparisons and hashing only depend on the contents.
///
/// A value of this type is immutable once constructed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FuzzyHash {
    /// Block size.
    block_size: u64,
    /// Block hash 1 (in Base64 indices).
    blockhash1: [u8; block_hash::FULL_SIZE],
    /// Length of block hash 1.
    len_blockhash1: u8,
    /// Block hash 2 (in Base64 indices).
    blockhash2: [u8; block_hash::FULL_SIZE],
    /// Length of block hash 2.
    len_blockhash2: u8,
}

/// An error type representing an error (generally) caused by
/// a fuzzy hash operation.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FuzzyHashOperationError {
    /// Block hash contains an index outside the Base64 alphabet or
    /// a block hash is too long.
    #[error("block hash is not valid")]
    BlockHashInvalid,
    /// The block size is zero.
    #[error("block size is not valid")]
    BlockSizeInvalid,
    /// The buffer is too small to store the string representation.
    #[error("could not store a fuzzy hash into a string buffer")]
    StringizationOverflow,
}

impl FuzzyHash {
    /// The maximum size of the block hash 1.
    pub const MAX_BLOCK_HASH_SIZE_1: usize = block_hash::FULL_SIZE;

    /// The maximum size of the block hash 2.
    pub const MAX_BLOCK_HASH_SIZE_2: usize = block_hash::FULL_SIZE;

    /// The maximum length in the string representation.
    ///
    /// This is the maximum possible value of
    /// the [`len_in_str()`](Self::len_in_str()) method.
    pub const MAX_LEN_IN_STR: usize = block_size::MAX_BLOCK_SIZE_LEN_IN_CHARS
        + Self::MAX_BLOCK_HASH_SIZE_1
        + Self::MAX_BLOCK_HASH_SIZE_2
        + 2;

    /// The empty fuzzy hash of a zero-byte input (`1::`, before
    /// finalization).
    const EMPTY: Self = Self {
        block_size: 1,
        blockhash1: [0; block_hash::FULL_SIZE],
        len_blockhash1: 0,
        blockhash2: [0; block_hash::FULL_SIZE],
        len_blockhash2: 0,
    };

    /// Creates a fuzzy hash from internal components without validation.
    ///
    /// Block hashes are given as slices of Base64 indices.
    #[inline]
    pub(crate) fn new_from_internals_raw(
        block_size: u64,
        block_hash_1: &[u8],
        block_hash_2: &[u8],
    ) -> Self {
        let mut hash = Self::EMPTY;
        optionally_unsafe! {
            invariant!(block_size::is_valid(block_size));
            invariant!(block_hash_1.len() <= block_hash::FULL_SIZE);
            invariant!(block_hash_2.len() <= block_hash::FULL_SIZE);
            hash.block_size = block_size;
            hash.blockhash1[..block_hash_1.len()].copy_from_slice(block_hash_1);
            hash.len_blockhash1 = block_hash_1.len() as u8;
            hash.blockhash2[..block_hash_2.len()].copy_from_slice(block_hash_2);
            hash.len_blockhash2 = block_hash_2.len() as u8;
        }
        hash
    }

    /// Creates a fuzzy hash from internal components.
    ///
    /// Block hashes are given as slices of Base64 indices (`0..64`),
    /// not Base64 alphabets.
    pub fn new_from_internals(
        block_size: u64,
        block_hash_1: &[u8],
        block_hash_2: &[u8],
    ) -> Result<Self, FuzzyHashOperationError> {
        if !block_size::is_valid(block_size) {
            return Err(FuzzyHashOperationError::BlockSizeInvalid);
        }
        for block_hash in [block_hash_1, block_hash_2] {
            if block_hash.len() > block_hash::FULL_SIZE
                || block_hash.iter().any(|&x| x as usize >= block_hash::ALPHABET_SIZE)
            {
                return Err(FuzzyHashOperationError::BlockHashInvalid);
            }
        }
        Ok(Self::new_from_internals_raw(block_size, block_hash_1, block_hash_2))
    }

    /// The block size of the fuzzy hash.
    #[inline]
    pub fn block_size(&self) -> u64 {
        self.block_size
    }

    /// A reference to the block hash 1 (in Base64 indices).
    #[inline]
    pub fn block_hash_1(&self) -> &[u8] {
        optionally_unsafe! {
            invariant!((self.len_blockhash1 as usize) <= block_hash::FULL_SIZE);
            &self.blockhash1[..self.len_blockhash1 as usize]
        }
    }

    /// The length of the block hash 1.
    #[inline]
    pub fn block_hash_1_len(&self) -> usize {
        self.len_blockhash1 as usize
    }

    /// The block hash 1 in Base64 alphabets.
    pub fn block_hash_1_string(&self) -> String {
        self.block_hash_1().iter().map(|&x| base64_char(x) as char).collect()
    }

    /// A reference to the block hash 2 (in Base64 indices).
    #[inline]
    pub fn block_hash_2(&self) -> &[u8] {
        optionally_unsafe! {
            invariant!((self.len_blockhash2 as usize) <= block_hash::FULL_SIZE);
            &self.blockhash2[..self.len_blockhash2 as usize]
        }
    }

    /// The length of the block hash 2.
    #[inline]
    pub fn block_hash_2_len(&self) -> usize {
        self.len_blockhash2 as usize
    }

    /// The block hash 2 in Base64 alphabets.
    pub fn block_hash_2_string(&self) -> String {
        self.block_hash_2().iter().map(|&x| base64_char(x) as char).collect()
    }

    /// The length of this fuzzy hash in the string representation.
    ///
    /// This is the exact size (bytes and characters) required to store the
    /// string representation corresponding this fuzzy hash object.
    #[inline]
    pub fn len_in_str(&self) -> usize {
        algorithms::block_size_len_in_chars(self.block_size)
            + self.len_blockhash1 as usize
            + self.len_blockhash2 as usize
            + 2
    }

    /// Store the string representation of the fuzzy hash into the bytes.
    ///
    /// If this method succeeds, it returns [`Ok(n)`](Ok) where `n` is
    /// the number of bytes written to `buffer`.
    ///
    /// The only case this function will fail is when `buffer` does not have
    /// enough size ([`len_in_str()`](Self::len_in_str()) bytes) to store
    /// the string representation.  In this case, `buffer` is not overwritten.
    pub fn store_into_bytes(&self, buffer: &mut [u8]) -> Result<usize, FuzzyHashOperationError> {
        let len_in_str = self.len_in_str();
        if buffer.len() < len_in_str {
            return Err(FuzzyHashOperationError::StringizationOverflow);
        }
        let mut i = algorithms::insert_block_size_into_bytes(buffer, self.block_size);
        optionally_unsafe! {
            invariant!(i < buffer.len());
            buffer[i] = b':';
            i += 1;
            algorithms::insert_block_hash_into_bytes(&mut buffer[i..], self.block_hash_1());
            i += self.len_blockhash1 as usize;
            invariant!(i < buffer.len());
            buffer[i] = b':';
            i += 1;
            algorithms::insert_block_hash_into_bytes(&mut buffer[i..], self.block_hash_2());
            debug_assert_eq!(i + self.len_blockhash2 as usize, len_in_str);
        }
        Ok(len_in_str)
    }

    /// Parse a fuzzy hash from given bytes (a slice of [`u8`])
    /// of a string representation.
    ///
    /// The whole input must be a `<block size>:<block hash 1>:<block hash 2>`
    /// signature.  Trailing characters (including another `':'`-separated
    /// field) are rejected.
    pub fn from_bytes(str: &[u8]) -> Result<Self, ParseError> {
        Self::from_bytes_internal(str).map_err(|err| {
            tracing::debug!(error = %err, "failed to parse a fuzzy hash");
            err
        })
    }

    /// The internal implementation of [`from_bytes()`](Self::from_bytes()).
    fn from_bytes_internal(str: &[u8]) -> Result<Self, ParseError> {
        let mut fuzzy = Self::EMPTY;
        let mut offset = 0;
        fuzzy.block_size = algorithms::parse_block_size_from_bytes(str, &mut offset)?;
        match algorithms::parse_block_hash_from_bytes(
            &mut fuzzy.blockhash1, &mut fuzzy.len_blockhash1, str, &mut offset,
        ) {
            // End of BH1: Only colon is acceptable as the separator between BH1:BH2.
            BlockHashParseState::MetColon => {}
            BlockHashParseState::Base64Error => {
                return Err(ParseError(ParseErrorKind::UnexpectedCharacter, ParseErrorOrigin::BlockHash1, offset));
            }
            BlockHashParseState::MetEndOfString => {
                return Err(ParseError(ParseErrorKind::UnexpectedEndOfString, ParseErrorOrigin::BlockHash1, offset));
            }
            BlockHashParseState::OverflowError => {
                return Err(ParseError(ParseErrorKind::BlockHashIsTooLong, ParseErrorOrigin::BlockHash1, offset));
            }
        }
        match algorithms::parse_block_hash_from_bytes(
            &mut fuzzy.blockhash2, &mut fuzzy.len_blockhash2, str, &mut offset,
        ) {
            // End of BH2: only end-of-string is expected.
            BlockHashParseState::MetEndOfString => {}
            BlockHashParseState::MetColon => {
                return Err(ParseError(ParseErrorKind::UnexpectedCharacter, ParseErrorOrigin::BlockHash2, offset - 1));
            }
            BlockHashParseState::Base64Error => {
                return Err(ParseError(ParseErrorKind::UnexpectedCharacter, ParseErrorOrigin::BlockHash2, offset));
            }
            BlockHashParseState::OverflowError => {
                return Err(ParseError(ParseErrorKind::BlockHashIsTooLong, ParseErrorOrigin::BlockHash2, offset));
            }
        }
        Ok(fuzzy)
    }

    /// Performs full validity checking of the internal structure.
    ///
    /// Values constructed through this crate are always valid.
    pub fn is_valid(&self) -> bool {
        block_size::is_valid(self.block_size)
            && (self.len_blockhash1 as usize) <= block_hash::FULL_SIZE
            && (self.len_blockhash2 as usize) <= block_hash::FULL_SIZE
            && self.blockhash1[..self.len_blockhash1 as usize]
                .iter()
                .all(|&x| (x as usize) < block_hash::ALPHABET_SIZE)
            && self.blockhash1[self.len_blockhash1 as usize..].iter().all(|&x| x == 0)
            && self.blockhash2[..self.len_blockhash2 as usize]
                .iter()
                .all(|&x| (x as usize) < block_hash::ALPHABET_SIZE)
            && self.blockhash2[self.len_blockhash2 as usize..].iter().all(|&x| x == 0)
    }

    /// Compares the block sizes of two fuzzy hashes to determine
    /// their block size relation.
    #[inline]
    pub fn compare_block_sizes(lhs: impl AsRef<Self>, rhs: impl AsRef<Self>) -> BlockSizeRelation {
        block_size::compare_sizes(lhs.as_ref().block_size, rhs.as_ref().block_size)
    }

    /// Checks whether the block sizes of two fuzzy hashes form
    /// a near relation.
    #[inline]
    pub fn is_block_sizes_near(lhs: impl AsRef<Self>, rhs: impl AsRef<Self>) -> bool {
        block_size::is_near(lhs.as_ref().block_size, rhs.as_ref().block_size)
    }

    /// Compare two fuzzy hashes only by their block sizes.
    #[inline]
    pub fn cmp_by_block_size(&self, other: &Self) -> core::cmp::Ordering {
        block_size::cmp(self.block_size, other.block_size)
    }
}

impl AsRef<FuzzyHash> for FuzzyHash {
    #[inline(always)]
    fn as_ref(&self) -> &FuzzyHash {
        self
    }
}

impl core::fmt::Display for FuzzyHash {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut buffer = [0u8; FuzzyHash::MAX_LEN_IN_STR];
        let len = self.store_into_bytes(&mut buffer).map_err(|_| core::fmt::Error)?;
        f.write_str(core::str::from_utf8(&buffer[..len]).map_err(|_| core::fmt::Error)?)
    }
}

impl core::fmt::Debug for FuzzyHash {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // It's for debug purposes and do the full checking.
        if self.is_valid() {
            f.debug_struct("FuzzyHash")
                .field("block_size", &self.block_size)
                .field("blockhash1", &self.block_hash_1_string())
                .field("blockhash2", &self.block_hash_2_string())
                .finish()
        } else {
            f.debug_struct("FuzzyHash")
                .field("ILL_FORMED", &true)
                .field("block_size", &self.block_size)
                .field("len_blockhash1", &self.len_blockhash1)
                .field("len_blockhash2", &self.len_blockhash2)
                .field("blockhash1", &self.blockhash1)
                .field("blockhash2", &self.blockhash2)
                .finish()
        }
    }
}

impl core::str::FromStr for FuzzyHash {
    type Err = ParseError;
    #[inline(always)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes())
    }
}

impl From<FuzzyHash> for String {
    fn from(value: FuzzyHash) -> Self {
        value.to_string()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FuzzyHash {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FuzzyHash {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}


/// Constant assertions related to this module.
#[doc(hidden)]
mod const_asserts {
    use super::*;
    use static_assertions::{const_assert, const_assert_eq};

    // Block hash lengths fit in u8.
    const_assert!(block_hash::FULL_SIZE <= u8::MAX as usize);
    // The string buffer used by Display covers the longest signature.
    const_assert_eq!(FuzzyHash::MAX_LEN_IN_STR, 20 + 64 + 64 + 2);
    // Generated block hash 2 fits in the storage.
    const_assert!(block_hash::HALF_SIZE <= FuzzyHash::MAX_BLOCK_HASH_SIZE_2);
}
