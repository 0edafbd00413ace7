// SPDX-License-Identifier: GPL-2.0-or-later
// SPDX-FileCopyrightText: Copyright Andrew Tridgell <tridge@samba.org> 2002
// SPDX-FileCopyrightText: Copyright (C) 2006 ManTech International Corporation
// SPDX-FileCopyrightText: Copyright (C) 2017, 2023–2025 Tsukasa OI <floss_ssdeep@irq.a4lg.com>
// SPDX-FileCopyrightText: Copyright (C) 2026 The ctph developers

//! The FNV-1 style accumulator producing block hash characters.

use core::ops::AddAssign;

use crate::hash::block::block_hash;
use crate::params::Params;

/// Hasher which accumulates the bytes of the current piece.
///
/// This is a 32-bit FNV-1 hash (multiply, then xor) with a non-standard
/// seed.  When a piece ends, the low 6 bits of its value become the next
/// character of a block hash and the state is [reseeded](Self::reset()).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHashFnv {
    /// The current state.
    state: u32,
    /// The seed to start (and restart) from.
    init: u32,
    /// The FNV prime.
    prime: u32,
}

impl BlockHashFnv {
    /// Creates a new [`BlockHashFnv`] with the spamsum seed and prime.
    pub fn new() -> Self {
        Self::with_params(&Params::SPAMSUM)
    }

    /// Creates a new [`BlockHashFnv`] with the seed and the prime of
    /// given parameters.
    pub fn with_params(params: &Params) -> Self {
        BlockHashFnv {
            state: params.hash_init,
            init: params.hash_init,
            prime: params.hash_prime,
        }
    }

    /// Reseeds the state.
    #[inline]
    pub fn reset(&mut self) {
        self.state = self.init;
    }

    /// Updates the hash value by processing a byte.
    #[inline]
    pub fn update_by_byte(&mut self, ch: u8) -> &mut Self {
        self.state = self.state.wrapping_mul(self.prime) ^ (ch as u32);
        self
    }

    /// Updates the hash value by processing an iterator of [`u8`].
    pub fn update_by_iter(&mut self, iter: impl Iterator<Item = u8>) -> &mut Self {
        for ch in iter {
            self.update_by_byte(ch);
        }
        self
    }

    /// Updates the hash value by processing a slice of [`u8`].
    pub fn update(&mut self, buf: &[u8]) -> &mut Self {
        for &ch in buf.iter() {
            self.update_by_byte(ch);
        }
        self
    }

    /// Returns the current (full 32-bit) hash value.
    #[inline]
    pub fn value(&self) -> u32 {
        self.state
    }

    /// Returns the Base64 index of the block hash character
    /// corresponding to the current state.
    #[inline]
    pub fn base64_index(&self) -> u8 {
        (self.state % block_hash::ALPHABET_SIZE as u32) as u8
    }
}

impl AddAssign<&[u8]> for BlockHashFnv {
    /// Updates the hash value by processing a slice of [`u8`].
    #[inline(always)]
    fn add_assign(&mut self, buffer: &[u8]) {
        self.update(buffer);
    }
}

impl AddAssign<u8> for BlockHashFnv {
    /// Updates the hash value by processing a byte.
    #[inline(always)]
    fn add_assign(&mut self, byte: u8) {
        self.update_by_byte(byte);
    }
}

impl Default for BlockHashFnv {
    fn default() -> Self {
        Self::new()
    }
}

mod tests;
